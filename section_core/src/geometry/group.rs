//! # Geometry Group
//!
//! Several composites treated as one rigid body. Properties are aggregated
//! over the flattened primitives of every member, so a group of panels
//! gives the properties of the whole transverse section.

use serde::Serialize;
use tracing::warn;

use super::composite::bounding_box_of;
use super::{BoundingBox, CompositeGeometry, Inertia, OrientedRectangle, RigidTransform, SectionProperties, Vec2};
use crate::errors::{SectionError, SectionResult};
use crate::settings::GeometrySettings;
use crate::units::Degrees;

/// An ordered collection of owned composites.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GeometryGroup {
    members: Vec<CompositeGeometry>,
}

impl GeometryGroup {
    pub fn new(members: Vec<CompositeGeometry>) -> Self {
        GeometryGroup { members }
    }

    pub fn push(&mut self, member: CompositeGeometry) {
        self.members.push(member);
    }

    pub fn members(&self) -> &[CompositeGeometry] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All primitives of all members, in member order
    pub fn primitives(&self) -> Vec<&OrientedRectangle> {
        self.members.iter().flat_map(CompositeGeometry::primitives).collect()
    }

    pub fn area(&self) -> f64 {
        self.primitives().iter().map(|r| r.area()).sum()
    }

    pub fn centroid(&self) -> SectionResult<Vec2> {
        self.centroid_with(&GeometrySettings::default())
    }

    pub fn centroid_with(&self, settings: &GeometrySettings) -> SectionResult<Vec2> {
        centroid_of(&self.primitives(), settings)
    }

    pub fn inertia(&self) -> SectionResult<Inertia> {
        self.inertia_with(&GeometrySettings::default())
    }

    pub fn inertia_with(&self, settings: &GeometrySettings) -> SectionResult<Inertia> {
        let primitives = self.primitives();
        let centroid = centroid_of(&primitives, settings)?;
        Ok(primitives.iter().map(|r| r.inertia_about(centroid)).sum())
    }

    pub fn section_properties(&self) -> SectionResult<SectionProperties> {
        self.section_properties_with(&GeometrySettings::default())
    }

    pub fn section_properties_with(&self, settings: &GeometrySettings) -> SectionResult<SectionProperties> {
        let primitives = self.primitives();
        let centroid = centroid_of(&primitives, settings)?;
        let area = primitives.iter().map(|r| r.area()).sum();
        let inertia = primitives.iter().map(|r| r.inertia_about(centroid)).sum();
        Ok(SectionProperties::new(area, centroid, inertia))
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        bounding_box_of(self.primitives())
    }
}

fn centroid_of(primitives: &[&OrientedRectangle], settings: &GeometrySettings) -> SectionResult<Vec2> {
    let area: f64 = primitives.iter().map(|r| r.area()).sum();
    if area <= settings.area_tolerance {
        warn!(area, primitives = primitives.len(), "centroid requested for zero-area group");
        return Err(SectionError::degenerate(
            "centroid",
            format!("group of {} primitives has area {}", primitives.len(), area),
        ));
    }
    let moment: Vec2 = primitives.iter().map(|r| r.centroid() * r.area()).sum();
    Ok(moment / area)
}

impl RigidTransform for GeometryGroup {
    fn translate(&mut self, displacement: Vec2) {
        self.members.iter_mut().for_each(|m| m.translate(displacement));
    }

    fn rotate(&mut self, pivot: Vec2, delta: Degrees) {
        self.members.iter_mut().for_each(|m| m.rotate(pivot, delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(width: f64, height: f64, x: f64, y: f64, deg: f64) -> OrientedRectangle {
        OrientedRectangle::new(width, height, Vec2::new(x, y), Degrees(deg)).unwrap()
    }

    #[test]
    fn test_group_matches_single_composite() {
        let a = CompositeGeometry::from_rectangles(vec![rect(40.0, 10.0, 0.0, 5.0, 0.0)]);
        let b = CompositeGeometry::from_rectangles(vec![rect(40.0, 10.0, 5.0, 10.0, 90.0)]);
        let group = GeometryGroup::new(vec![a, b]);

        let both = CompositeGeometry::from_rectangles(vec![
            rect(40.0, 10.0, 0.0, 5.0, 0.0),
            rect(40.0, 10.0, 5.0, 10.0, 90.0),
        ]);

        let g = group.section_properties().unwrap();
        let c = both.section_properties().unwrap();
        assert_relative_eq!(g.area, c.area, max_relative = 1e-12);
        assert_relative_eq!(g.centroid[0], c.centroid[0], epsilon = 1e-9);
        assert_relative_eq!(g.centroid[1], c.centroid[1], epsilon = 1e-9);
        assert_relative_eq!(g.iy, c.iy, max_relative = 1e-9);
        assert_relative_eq!(g.iz, c.iz, max_relative = 1e-9);
        assert_relative_eq!(g.iyz, c.iyz, max_relative = 1e-9);
        assert_eq!(group.inertia().unwrap().ix, g.ix);
    }

    #[test]
    fn test_empty_group_is_degenerate() {
        let group = GeometryGroup::default();
        assert!(group.is_empty());
        assert_eq!(group.centroid().unwrap_err().error_code(), "DEGENERATE_GEOMETRY");
        assert!(group.section_properties().is_err());

        // members without area are just as degenerate
        let hollow = GeometryGroup::new(vec![CompositeGeometry::default()]);
        assert_eq!(hollow.len(), 1);
        assert!(hollow.inertia().is_err());
    }

    #[test]
    fn test_group_rotation_moves_every_member() {
        let mut group = GeometryGroup::new(vec![
            CompositeGeometry::from_rectangles(vec![rect(10.0, 1.0, 10.0, 0.0, 0.0)]),
            CompositeGeometry::from_rectangles(vec![rect(10.0, 1.0, 20.0, 0.0, 0.0)]),
        ]);
        group.rotate(Vec2::zeros(), Degrees(180.0));
        let prims = group.primitives();
        assert_relative_eq!(prims[0].position(), Vec2::new(-10.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(prims[1].position(), Vec2::new(-20.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(group.centroid().unwrap(), Vec2::new(-20.0, 0.0), epsilon = 1e-9);
    }
}
