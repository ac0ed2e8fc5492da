//! # Section Property Equations
//!
//! The fundamental second-moment-of-area formulas used by the geometry
//! types. Keeping them as free functions gives one place to check the
//! sign conventions against a textbook.
//!
//! ## Modules
//!
//! - [`section`] - Rectangle inertia, axis rotation, parallel-axis transport,
//!   section modulus
//!
//! ## Sign Conventions
//!
//! - Coordinates are `(y, z)`: `y` horizontal, `z` vertical
//! - `Iy` is about the horizontal axis (resists vertical bending), so it
//!   accumulates `z²` terms; `Iz` accumulates `y²` terms
//! - `Ix = Iy + Iz` is the polar moment
//! - Angles are counter-clockwise from the horizontal
//!
//! ## References
//!
//! - Meriam & Kraige, Engineering Mechanics: Statics, Appendix A
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

pub mod section;

pub use section::{
    rectangle_local_inertia,
    rotate_inertia,
    transport_inertia,
    section_modulus,
};
