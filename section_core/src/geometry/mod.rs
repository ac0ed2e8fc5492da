//! # Composite Geometry
//!
//! Rectangles, rigid composites of rectangles, and groups of composites.
//!
//! ## Structure
//!
//! ```text
//! GeometryGroup                 (e.g. a transverse section)
//! └── CompositeGeometry         (e.g. a stiffened panel)
//!     ├── Shape::Rectangle      (the plate)
//!     └── Shape::Composite      (a stiffener)
//!         ├── Shape::Rectangle  (web)
//!         └── Shape::Rectangle  (flange)
//! ```
//!
//! Every level answers the same questions (area, centroid, inertia about
//! its own centroid) and accepts the same rigid transforms. Nothing is
//! cached: each query walks the current children.

pub mod composite;
pub mod group;
pub mod properties;
pub mod rectangle;

pub use composite::{CompositeGeometry, Shape};
pub use group::GeometryGroup;
pub use properties::{BoundingBox, Inertia, SectionModuli, SectionProperties};
pub use rectangle::OrientedRectangle;

use nalgebra::Rotation2;

use crate::units::{Degrees, Radians};

/// 2D point or displacement in the global `(y, z)` frame
pub type Vec2 = nalgebra::Vector2<f64>;

/// Rigid-body moves shared by every level of the hierarchy.
///
/// Moving a composite applies the identical transform to each child, so the
/// internal shape never changes.
pub trait RigidTransform {
    /// Shift by `displacement` without changing orientation
    fn translate(&mut self, displacement: Vec2);

    /// Turn by `delta` about an arbitrary `pivot`
    fn rotate(&mut self, pivot: Vec2, delta: Degrees);
}

/// `point` turned by `delta` about `pivot`. Every rotating type moves its
/// anchor through this.
pub fn rotate_point(point: Vec2, pivot: Vec2, delta: Radians) -> Vec2 {
    Rotation2::new(delta.0) * (point - pivot) + pivot
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotate_point_about_pivot() {
        let turned = rotate_point(Vec2::new(2.0, 1.0), Vec2::new(1.0, 1.0), Degrees(90.0).into());
        assert_relative_eq!(turned, Vec2::new(1.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_point_leaves_pivot_fixed() {
        let pivot = Vec2::new(-3.0, 7.5);
        assert_relative_eq!(rotate_point(pivot, pivot, Radians(1.234)), pivot, epsilon = 1e-12);
    }
}
