//! # Stiffener
//!
//! A stiffener is its parameters (shape, pose, flange side, material) plus
//! the composite geometry those parameters currently derive. Position and
//! angle are the authoritative pose: moving or turning a stiffener updates
//! them and re-derives, so the geometry can never drift from the parameters.
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector2;
//! use section_core::geometry::RigidTransform;
//! use section_core::materials::Material;
//! use section_core::profiles::Stiffener;
//! use section_core::units::Degrees;
//!
//! let mut hp = Stiffener::bulb(100.0, 8.0, Material::steel_a131()).unwrap();
//! assert_eq!(hp.designation(), "HP100x8");
//!
//! hp.translate(Vector2::new(500.0, 10.0));
//! assert_eq!(hp.position(), Vector2::new(500.0, 10.0));
//!
//! let area_before = hp.area();
//! hp.set_web_length(120.0).unwrap();
//! assert!(hp.area() > area_before);
//! ```

use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::derive::derive_unchecked;
use super::{FlangeSide, FlangedDimensions, ProfileKind, ProfileShape};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::{rotate_point, CompositeGeometry, OrientedRectangle, RigidTransform, SectionProperties, Vec2};
use crate::materials::Material;
use crate::units::{Degrees, Radians};

/// Orientation given to a new stiffener: web pointing straight up
pub const DEFAULT_STIFFENER_ANGLE: Degrees = Degrees(90.0);

/// A parametric stiffener profile and its derived geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stiffener {
    shape: ProfileShape,
    material: Material,
    position: Vec2,
    angle: Radians,
    flange_side: FlangeSide,
    #[serde(skip)]
    geometry: CompositeGeometry,
}

impl Stiffener {
    /// Create a stiffener at the origin, web pointing up.
    ///
    /// # Errors
    /// `Validation` if any dimension of `shape` is not positive.
    pub fn new(shape: ProfileShape, material: Material) -> SectionResult<Self> {
        shape.validate()?;
        let mut stiffener = Stiffener {
            shape,
            material,
            position: Vec2::zeros(),
            angle: DEFAULT_STIFFENER_ANGLE.into(),
            flange_side: FlangeSide::Positive,
            geometry: CompositeGeometry::default(),
        };
        stiffener.rebuild();
        Ok(stiffener)
    }

    pub fn flat_bar(web_length: f64, thickness: f64, material: Material) -> SectionResult<Self> {
        Self::new(ProfileShape::FlatBar { web_length, thickness }, material)
    }

    pub fn angle_bar(
        web_length: f64,
        web_thickness: f64,
        flange_length: f64,
        flange_thickness: f64,
        material: Material,
    ) -> SectionResult<Self> {
        Self::new(
            ProfileShape::Angle(FlangedDimensions {
                web_length,
                web_thickness,
                flange_length,
                flange_thickness,
            }),
            material,
        )
    }

    pub fn tee(
        web_length: f64,
        web_thickness: f64,
        flange_length: f64,
        flange_thickness: f64,
        material: Material,
    ) -> SectionResult<Self> {
        Self::new(
            ProfileShape::Tee(FlangedDimensions {
                web_length,
                web_thickness,
                flange_length,
                flange_thickness,
            }),
            material,
        )
    }

    pub fn bulb(length: f64, thickness: f64, material: Material) -> SectionResult<Self> {
        Self::new(ProfileShape::Bulb { length, thickness }, material)
    }

    /// Builder-style placement
    pub fn placed(mut self, position: Vec2, angle: Degrees) -> Self {
        self.position = position;
        self.angle = angle.into();
        self.rebuild();
        self
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    fn rebuild(&mut self) {
        let primitives = derive_unchecked(&self.shape, self.position, self.angle, self.flange_side);
        debug!(
            profile = %self.shape.designation(),
            primitives = primitives.len(),
            "stiffener geometry derived"
        );
        self.geometry = CompositeGeometry::from_rectangles(primitives);
    }

    /// Apply `edit` to a copy of the shape, validate it, then commit and
    /// re-derive. On error the stiffener is unchanged.
    fn update_shape(&mut self, edit: impl FnOnce(&mut ProfileShape) -> SectionResult<()>) -> SectionResult<()> {
        let mut shape = self.shape;
        edit(&mut shape)?;
        shape.validate()?;
        self.shape = shape;
        self.rebuild();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn shape(&self) -> &ProfileShape {
        &self.shape
    }

    pub fn kind(&self) -> ProfileKind {
        self.shape.kind()
    }

    pub fn designation(&self) -> String {
        self.shape.designation()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Weld-toe position of the web
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Absolute web orientation
    pub fn angle(&self) -> Degrees {
        self.angle.into()
    }

    pub fn flange_side(&self) -> FlangeSide {
        self.flange_side
    }

    pub fn geometry(&self) -> &CompositeGeometry {
        &self.geometry
    }

    /// The rectangles currently derived, web first
    pub fn primitives(&self) -> Vec<&OrientedRectangle> {
        self.geometry.primitives()
    }

    pub fn web(&self) -> &OrientedRectangle {
        self.geometry.primitives()[0]
    }

    /// `None` for flat bars
    pub fn flange(&self) -> Option<&OrientedRectangle> {
        self.geometry.primitives().get(1).copied()
    }

    /// Unit vector along the web, from the plate outwards
    pub fn web_direction(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    pub fn area(&self) -> f64 {
        self.geometry.area()
    }

    pub fn section_properties(&self) -> SectionResult<SectionProperties> {
        self.geometry.section_properties()
    }

    // ------------------------------------------------------------------
    // Parameter setters (each re-derives the geometry)
    // ------------------------------------------------------------------

    pub fn set_shape(&mut self, shape: ProfileShape) -> SectionResult<()> {
        self.update_shape(|s| {
            *s = shape;
            Ok(())
        })
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.rebuild();
    }

    pub fn set_angle(&mut self, angle: Degrees) {
        self.angle = angle.into();
        self.rebuild();
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
        self.rebuild();
    }

    /// Web length; for a bulb, its overall length
    pub fn set_web_length(&mut self, value: f64) -> SectionResult<()> {
        self.update_shape(|s| {
            match s {
                ProfileShape::FlatBar { web_length, .. } => *web_length = value,
                ProfileShape::Angle(d) | ProfileShape::Tee(d) => d.web_length = value,
                ProfileShape::Bulb { length, .. } => *length = value,
            }
            Ok(())
        })
    }

    /// Web thickness; for flat bars and bulbs, the profile thickness
    pub fn set_web_thickness(&mut self, value: f64) -> SectionResult<()> {
        self.update_shape(|s| {
            match s {
                ProfileShape::FlatBar { thickness, .. } | ProfileShape::Bulb { thickness, .. } => *thickness = value,
                ProfileShape::Angle(d) | ProfileShape::Tee(d) => d.web_thickness = value,
            }
            Ok(())
        })
    }

    pub fn set_flange_length(&mut self, value: f64) -> SectionResult<()> {
        self.update_shape(|s| {
            flange_dimensions(s, "flange_length", value)?.flange_length = value;
            Ok(())
        })
    }

    pub fn set_flange_thickness(&mut self, value: f64) -> SectionResult<()> {
        self.update_shape(|s| {
            flange_dimensions(s, "flange_thickness", value)?.flange_thickness = value;
            Ok(())
        })
    }

    // ------------------------------------------------------------------
    // Orientation
    // ------------------------------------------------------------------

    /// Mirror the flange to the other face of the web. Applying it twice
    /// restores the original flange.
    ///
    /// # Errors
    /// `Validation` for flat bars and tees, which have no one-sided flange.
    pub fn flip_flange(&mut self) -> SectionResult<()> {
        let kind = self.kind();
        if !kind.has_asymmetric_flange() {
            return Err(SectionError::validation(
                "flip_flange",
                kind.display_name(),
                "Only angle and bulb profiles have a flange on one side of the web",
            ));
        }
        self.flange_side = self.flange_side.flipped();
        self.rebuild();
        Ok(())
    }

    /// Turn the stiffener to face the opposite direction about its weld toe.
    ///
    /// Angles and bulbs also flip their flange first, so the flange stays
    /// on the same physical side. Applying it twice restores the original
    /// pose.
    pub fn reverse_orientation(&mut self) {
        if self.kind().has_asymmetric_flange() {
            self.flange_side = self.flange_side.flipped();
        }
        let pivot = self.position;
        self.rotate(pivot, Degrees(180.0));
    }
}

fn flange_dimensions<'a>(shape: &'a mut ProfileShape, field: &str, value: f64) -> SectionResult<&'a mut FlangedDimensions> {
    match shape {
        ProfileShape::Angle(d) | ProfileShape::Tee(d) => Ok(d),
        ProfileShape::FlatBar { .. } => Err(SectionError::validation(
            field,
            value.to_string(),
            "Flat bars have no flange",
        )),
        ProfileShape::Bulb { .. } => Err(SectionError::validation(
            field,
            value.to_string(),
            "Bulb flange dimensions are derived from length and thickness",
        )),
    }
}

impl RigidTransform for Stiffener {
    fn translate(&mut self, displacement: Vec2) {
        self.position += displacement;
        self.rebuild();
    }

    fn rotate(&mut self, pivot: Vec2, delta: Degrees) {
        let delta: Radians = delta.into();
        self.position = rotate_point(self.position, pivot, delta);
        self.angle = self.angle + delta;
        self.rebuild();
    }
}

impl fmt::Display for Stiffener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, at ({:.2}, {:.2}) with orientation {:.2} degrees",
            self.designation(),
            self.material,
            self.position.x,
            self.position.y,
            self.angle().normalized().0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn steel() -> Material {
        Material::steel_a131()
    }

    fn assert_same_pose(a: &Stiffener, b: &Stiffener) {
        let (pa, pb) = (a.primitives(), b.primitives());
        assert_eq!(pa.len(), pb.len());
        for (ra, rb) in pa.iter().zip(pb.iter()) {
            assert_relative_eq!(ra.position(), rb.position(), epsilon = 1e-9);
            assert_relative_eq!(ra.unit_direction(), rb.unit_direction(), epsilon = 1e-9);
            assert_eq!(ra.width(), rb.width());
            assert_eq!(ra.height(), rb.height());
        }
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(Stiffener::flat_bar(-100.0, 10.0, steel()).is_err());
        assert!(Stiffener::angle_bar(100.0, 6.0, 0.0, 6.0, steel()).is_err());
        assert!(Stiffener::bulb(10.0, 6.0, steel()).is_err());
    }

    #[test]
    fn test_default_pose() {
        let fb = Stiffener::flat_bar(100.0, 10.0, steel()).unwrap();
        assert_eq!(fb.position(), Vec2::zeros());
        assert_relative_eq!(fb.angle().0, 90.0, epsilon = 1e-12);
        assert_eq!(fb.primitives().len(), 1);
        assert!(fb.flange().is_none());
        assert_relative_eq!(fb.area(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_setter_rejects_before_rebuild() {
        let mut angle = Stiffener::angle_bar(100.0, 6.0, 50.0, 6.0, steel()).unwrap();
        let before = angle.clone();
        assert!(angle.set_web_length(0.0).is_err());
        assert_eq!(angle, before);

        let mut fb = Stiffener::flat_bar(100.0, 10.0, steel()).unwrap();
        let err = fb.set_flange_length(20.0).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION");
    }

    #[test]
    fn test_setters_rebuild_geometry() {
        let mut tee = Stiffener::tee(150.0, 8.0, 75.0, 7.0, steel()).unwrap();
        tee.set_web_length(200.0).unwrap();
        assert_eq!(tee.web().width(), 200.0);
        tee.set_flange_thickness(10.0).unwrap();
        assert_eq!(tee.flange().unwrap().height(), 10.0);
        assert_relative_eq!(tee.area(), 200.0 * 8.0 + 75.0 * 10.0, max_relative = 1e-12);

        tee.set_position(Vec2::new(10.0, 20.0));
        assert_relative_eq!(tee.web().position(), Vec2::new(10.0, 20.0), epsilon = 1e-12);
        tee.set_angle(Degrees(0.0));
        assert_relative_eq!(tee.web().unit_direction(), Vec2::new(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_bulb_length_rederives_all_dimensions() {
        let mut hp = Stiffener::bulb(100.0, 6.0, steel()).unwrap();
        hp.set_web_length(200.0).unwrap();
        hp.set_web_thickness(8.0).unwrap();
        assert_eq!(hp.shape(), &ProfileShape::Bulb { length: 200.0, thickness: 8.0 });
        let expected = super::super::equivalent_angle(200.0, 8.0);
        assert_relative_eq!(hp.web().width(), expected.web_length, max_relative = 1e-12);
        assert_relative_eq!(hp.flange().unwrap().width(), expected.flange_length, max_relative = 1e-12);
        assert!(hp.set_flange_length(10.0).is_err());
    }

    #[test]
    fn test_flip_flange_is_involution() {
        let mut angle = Stiffener::angle_bar(200.0, 6.35, 70.0, 6.35, steel()).unwrap();
        let original = angle.clone();
        angle.flip_flange().unwrap();
        assert_eq!(angle.flange_side(), FlangeSide::Negative);
        assert!((angle.flange().unwrap().centroid() - original.flange().unwrap().centroid()).norm() > 1.0);
        angle.flip_flange().unwrap();
        assert_eq!(angle, original);
    }

    #[test]
    fn test_flip_flange_rejected_for_symmetric_profiles() {
        let mut tee = Stiffener::tee(150.0, 8.0, 75.0, 7.0, steel()).unwrap();
        assert!(tee.flip_flange().is_err());
        let mut fb = Stiffener::flat_bar(100.0, 8.0, steel()).unwrap();
        assert!(fb.flip_flange().is_err());
    }

    #[test]
    fn test_reverse_orientation_keeps_flange_side_physically() {
        let mut angle = Stiffener::angle_bar(100.0, 6.0, 50.0, 6.0, steel()).unwrap();
        let flange_x_before = angle.flange().unwrap().centroid().x;
        angle.reverse_orientation();
        // web now points down, flange still on the same side of the web;
        // its mid-thickness line sits web_length + flange_thickness / 2 below the toe
        assert_relative_eq!(angle.web_direction(), Vec2::new(0.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(angle.flange().unwrap().centroid().x, flange_x_before, epsilon = 1e-9);
        assert_relative_eq!(angle.flange().unwrap().centroid().y, -103.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reverse_orientation_is_involution() {
        for mut s in [
            Stiffener::angle_bar(100.0, 6.0, 50.0, 6.0, steel()).unwrap(),
            Stiffener::bulb(120.0, 7.0, steel()).unwrap(),
            Stiffener::tee(150.0, 8.0, 75.0, 7.0, steel()).unwrap(),
            Stiffener::flat_bar(100.0, 8.0, steel()).unwrap(),
        ] {
            s.translate(Vec2::new(12.0, -3.0));
            let original = s.clone();
            s.reverse_orientation();
            s.reverse_orientation();
            assert_eq!(s.flange_side(), original.flange_side());
            assert_same_pose(&s, &original);
        }
    }

    #[test]
    fn test_rotate_about_external_pivot_updates_pose() {
        let mut fb = Stiffener::flat_bar(100.0, 10.0, steel()).unwrap().placed(Vec2::new(10.0, 0.0), Degrees(90.0));
        fb.rotate(Vec2::zeros(), Degrees(90.0));
        assert_relative_eq!(fb.position(), Vec2::new(0.0, 10.0), epsilon = 1e-12);
        assert_relative_eq!(fb.angle().0, 180.0, epsilon = 1e-12);
        assert_relative_eq!(fb.web().centroid(), Vec2::new(-50.0, 10.0), epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        let fb = Stiffener::flat_bar(100.0, 10.0, steel()).unwrap();
        assert_eq!(fb.to_string(), "FB 100x10, A131, at (0.00, 0.00) with orientation 90.00 degrees");
    }
}
