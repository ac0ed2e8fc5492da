//! # section_core - Built-up Section Geometry Engine
//!
//! `section_core` models two-dimensional ship structure cross-sections
//! (plating, stiffener profiles, stiffened panels and whole transverse
//! sections) as compositions of oriented rectangles, and computes their
//! static section properties: area, centroid and second moments of area.
//!
//! ## Design Philosophy
//!
//! - **Parametric**: stiffeners are dimensions plus a pose; their rectangles
//!   are re-derived after every change, never edited in place
//! - **Uncached**: composites answer every query from their current children
//! - **JSON-Out**: results serialize so an assessment layer can consume them
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use nalgebra::Vector2;
//! use section_core::prelude::*;
//!
//! let steel = Material::steel_a131();
//! let plate = FlatPlate::from_endpoints(Vector2::new(0.0, 0.0), Vector2::new(2000.0, 0.0), 10.0, steel.clone())?;
//!
//! let mut panel = StiffenedPanel::new().with_name("bottom");
//! panel.set_plating(plate);
//! panel.add_stiffener(0.0, Degrees(90.0), Stiffener::flat_bar(300.0, 10.0, steel.clone())?, None)?;
//! panel.add_stiffeners_group(150.0, Degrees(90.0), 300.0, &Stiffener::bulb(100.0, 6.35, steel)?, 5)?;
//!
//! let props = panel.section_properties()?;
//! println!("{}", serde_json::to_string_pretty(&props).unwrap());
//! # Ok::<(), section_core::SectionError>(())
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Oriented rectangles, composites, groups and their properties
//! - [`profiles`] - Flat bar, angle, tee and bulb stiffeners
//! - [`plating`] - Plate strakes
//! - [`assembly`] - Stiffened panels and transverse sections
//! - [`equations`] - Inertia rotation and parallel-axis formulas
//! - [`settings`] - Numeric tolerances
//! - [`materials`] - Material records carried with each element
//! - [`units`] - Angle unit wrappers
//! - [`errors`] - Structured error types

pub mod assembly;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod materials;
pub mod plating;
pub mod profiles;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{SectionError, SectionResult};
pub use settings::GeometrySettings;

/// Everything needed to build and query a section.
pub mod prelude {
    pub use crate::assembly::{PanelId, PanelKind, StiffenedPanel, StiffenerId, TransverseSection};
    pub use crate::errors::{SectionError, SectionResult};
    pub use crate::geometry::{
        CompositeGeometry, GeometryGroup, OrientedRectangle, RigidTransform, SectionModuli, SectionProperties, Vec2,
    };
    pub use crate::materials::Material;
    pub use crate::plating::FlatPlate;
    pub use crate::profiles::{FlangeSide, ProfileShape, Stiffener};
    pub use crate::settings::GeometrySettings;
    pub use crate::units::{Degrees, Radians};
}
