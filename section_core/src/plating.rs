//! # Plating
//!
//! A flat plate strake: one oriented rectangle whose width is the plate
//! length and whose height is the plate thickness, plus its material.
//!
//! Plates are usually laid out from the hull's offset points, so besides the
//! position/angle constructor there is [`FlatPlate::from_endpoints`]:
//!
//! ```rust
//! use nalgebra::Vector2;
//! use section_core::materials::Material;
//! use section_core::plating::FlatPlate;
//!
//! let deck = FlatPlate::from_endpoints(
//!     Vector2::new(0.0, 8750.0),
//!     Vector2::new(-6470.0, 8750.0),
//!     10.0,
//!     Material::named("A131"),
//! )
//! .unwrap();
//! assert!((deck.length() - 6470.0).abs() < 1e-9);
//! assert!((deck.angle().0 - 180.0).abs() < 1e-9);
//! ```

use serde::Serialize;
use std::fmt;

use crate::errors::{ensure_positive, SectionError, SectionResult};
use crate::geometry::{OrientedRectangle, RigidTransform, SectionProperties, Vec2};
use crate::materials::Material;
use crate::units::{Degrees, Radians};

/// A plate strake.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatPlate {
    rect: OrientedRectangle,
    material: Material,
}

impl FlatPlate {
    /// # Errors
    /// `Validation` if `length` or `thickness` is not positive.
    pub fn new(length: f64, thickness: f64, position: Vec2, angle: Degrees, material: Material) -> SectionResult<Self> {
        ensure_positive("length", length)?;
        ensure_positive("thickness", thickness)?;
        Ok(FlatPlate {
            rect: OrientedRectangle::from_validated(length, thickness, position, angle.into()),
            material,
        })
    }

    /// Plate running from `start` to `end`, anchored at `start`.
    ///
    /// # Errors
    /// `Validation` if the points coincide or `thickness` is not positive.
    pub fn from_endpoints(start: Vec2, end: Vec2, thickness: f64, material: Material) -> SectionResult<Self> {
        let segment = end - start;
        let length = segment.norm();
        if !length.is_finite() || length <= 0.0 {
            return Err(SectionError::validation(
                "end",
                format!("({}, {})", end.x, end.y),
                "Plate endpoints must be distinct",
            ));
        }
        ensure_positive("thickness", thickness)?;
        let angle = Radians(segment.y.atan2(segment.x));
        Ok(FlatPlate {
            rect: OrientedRectangle::from_validated(length, thickness, start, angle),
            material,
        })
    }

    pub fn length(&self) -> f64 {
        self.rect.width()
    }

    pub fn thickness(&self) -> f64 {
        self.rect.height()
    }

    pub fn position(&self) -> Vec2 {
        self.rect.position()
    }

    pub fn angle(&self) -> Degrees {
        self.rect.angle()
    }

    pub fn unit_direction(&self) -> Vec2 {
        self.rect.unit_direction()
    }

    pub fn unit_normal(&self) -> Vec2 {
        self.rect.unit_normal()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn rectangle(&self) -> &OrientedRectangle {
        &self.rect
    }

    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    /// Point on the stiffened face, `distance` along the plate from its start
    pub fn point_on_face(&self, distance: f64) -> Vec2 {
        self.position() + self.unit_direction() * distance + self.unit_normal() * (0.5 * self.thickness())
    }

    pub fn section_properties(&self) -> SectionProperties {
        SectionProperties::new(self.rect.area(), self.rect.centroid(), self.rect.rotated_inertia())
    }

    pub fn set_length(&mut self, length: f64) -> SectionResult<()> {
        self.rect.set_width(length)
    }

    pub fn set_thickness(&mut self, thickness: f64) -> SectionResult<()> {
        self.rect.set_height(thickness)
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }
}

impl RigidTransform for FlatPlate {
    fn translate(&mut self, displacement: Vec2) {
        self.rect.translate(displacement);
    }

    fn rotate(&mut self, pivot: Vec2, delta: Degrees) {
        self.rect.rotate(pivot, delta);
    }
}

impl fmt::Display for FlatPlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PL {}x{}, {}, at ({:.2}, {:.2}) with orientation {:.2} degrees",
            self.length(),
            self.thickness(),
            self.material,
            self.position().x,
            self.position().y,
            self.angle().normalized().0
        )
    }
}
