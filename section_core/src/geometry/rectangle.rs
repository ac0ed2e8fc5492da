//! # Oriented Rectangle
//!
//! The single primitive every section is built from.
//!
//! A rectangle is anchored at the midpoint of one of its short edges, not at
//! its centre. Its long axis leaves that point in the direction of `angle`:
//!
//! ```text
//!             unit_normal
//!                  ▲
//!     ┌────────────┼────────────────────┐
//!     ●  position  ─────────▶ unit_direction    height
//!     └─────────────────────────────────┘
//!                    width
//! ```
//!
//! Stiffener webs are placed by the edge where they are welded to the plate,
//! which is why the anchor sits on an edge.

use serde::Serialize;
use std::fmt;

use super::{rotate_point, BoundingBox, Inertia, RigidTransform, Vec2};
use crate::equations::section::{rectangle_local_inertia, rotate_inertia, transport_inertia};
use crate::errors::{ensure_positive, SectionResult};
use crate::units::{Degrees, Radians};

/// A width × height rectangle at an absolute position and orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrientedRectangle {
    width: f64,
    height: f64,
    position: Vec2,
    angle: Radians,
}

impl OrientedRectangle {
    /// Create a rectangle.
    ///
    /// # Errors
    /// `Validation` if `width` or `height` is not a positive finite number.
    ///
    /// # Example
    /// ```rust
    /// use nalgebra::Vector2;
    /// use section_core::geometry::OrientedRectangle;
    /// use section_core::units::Degrees;
    ///
    /// let web = OrientedRectangle::new(100.0, 8.0, Vector2::new(0.0, 0.0), Degrees(90.0)).unwrap();
    /// assert_eq!(web.area(), 800.0);
    /// assert!((web.centroid().y - 50.0).abs() < 1e-9);
    /// ```
    pub fn new(width: f64, height: f64, position: Vec2, angle: Degrees) -> SectionResult<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        Ok(OrientedRectangle {
            width,
            height,
            position,
            angle: angle.into(),
        })
    }

    /// Build from dimensions already checked by the caller.
    pub(crate) fn from_validated(width: f64, height: f64, position: Vec2, angle: Radians) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        OrientedRectangle {
            width,
            height,
            position,
            angle,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Absolute orientation in degrees
    pub fn angle(&self) -> Degrees {
        self.angle.into()
    }

    pub fn angle_radians(&self) -> Radians {
        self.angle
    }

    pub fn set_width(&mut self, width: f64) -> SectionResult<()> {
        ensure_positive("width", width)?;
        self.width = width;
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> SectionResult<()> {
        ensure_positive("height", height)?;
        self.height = height;
        Ok(())
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_angle(&mut self, angle: Degrees) {
        self.angle = angle.into();
    }

    /// Unit vector along the long axis, `(cos θ, sin θ)`
    pub fn unit_direction(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Unit vector across the long axis, `(−sin θ, cos θ)`
    pub fn unit_normal(&self) -> Vec2 {
        Vec2::new(-self.angle.sin(), self.angle.cos())
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Geometric centre, half a width along the long axis from `position`
    pub fn centroid(&self) -> Vec2 {
        self.position + self.unit_direction() * (self.width / 2.0)
    }

    /// Inertia about the rectangle's own centroidal axes (aligned with
    /// width and height)
    pub fn local_inertia(&self) -> Inertia {
        rectangle_local_inertia(self.width, self.height)
    }

    /// Centroidal inertia about axes parallel to the global frame
    pub fn rotated_inertia(&self) -> Inertia {
        rotate_inertia(self.local_inertia(), self.angle)
    }

    /// Inertia about global-frame axes through `point`
    pub fn inertia_about(&self, point: Vec2) -> Inertia {
        transport_inertia(self.rotated_inertia(), self.area(), point - self.centroid())
    }

    /// The four corners, counter-clockwise starting beside `position`
    pub fn corner_points(&self) -> [Vec2; 4] {
        let half_normal = self.unit_normal() * (self.height / 2.0);
        let along = self.unit_direction() * self.width;
        [
            self.position - half_normal,
            self.position + along - half_normal,
            self.position + along + half_normal,
            self.position + half_normal,
        ]
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let corners = self.corner_points();
        BoundingBox {
            min: corners.iter().fold(corners[0], |acc, c| acc.inf(c)),
            max: corners.iter().fold(corners[0], |acc, c| acc.sup(c)),
        }
    }

    pub(crate) fn rotate_radians(&mut self, pivot: Vec2, delta: Radians) {
        self.position = rotate_point(self.position, pivot, delta);
        self.angle = self.angle + delta;
    }
}

impl RigidTransform for OrientedRectangle {
    fn translate(&mut self, displacement: Vec2) {
        self.position += displacement;
    }

    fn rotate(&mut self, pivot: Vec2, delta: Degrees) {
        self.rotate_radians(pivot, delta.into());
    }
}

impl fmt::Display for OrientedRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({:.2}, {:.2}), {:.2}°",
            self.width,
            self.height,
            self.position.x,
            self.position.y,
            self.angle().normalized().0
        )
    }
}
