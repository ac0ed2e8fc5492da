//! # Composite Geometry
//!
//! An ordered, exclusively-owned list of rectangles and nested composites
//! treated as one rigid shape.
//!
//! Aggregate inertia is always taken about the composite's own centroid,
//! recomputed from the children on every call.
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector2;
//! use section_core::geometry::{CompositeGeometry, OrientedRectangle};
//! use section_core::units::Degrees;
//!
//! // Meriam & Kraige, sample problem A/12: an L made of two 40 x 10 bars
//! let flange = OrientedRectangle::new(40.0, 10.0, Vector2::new(0.0, 5.0), Degrees(0.0)).unwrap();
//! let web = OrientedRectangle::new(40.0, 10.0, Vector2::new(5.0, 10.0), Degrees(90.0)).unwrap();
//! let angle = CompositeGeometry::from_rectangles(vec![flange, web]);
//!
//! let props = angle.section_properties().unwrap();
//! assert!((props.centroid[0] - 12.5).abs() < 1e-9);
//! assert!((props.centroid[1] - 17.5).abs() < 1e-9);
//! assert!((props.iyz + 75_000.0).abs() < 1e-6);
//! ```

use serde::Serialize;
use tracing::warn;

use super::{BoundingBox, Inertia, OrientedRectangle, RigidTransform, SectionProperties, Vec2};
use crate::equations::section::transport_inertia;
use crate::errors::{SectionError, SectionResult};
use crate::settings::GeometrySettings;
use crate::units::Degrees;

// ============================================================================
// Shape
// ============================================================================

/// A child of a composite: a primitive or another composite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Shape {
    Rectangle(OrientedRectangle),
    Composite(CompositeGeometry),
}

impl Shape {
    pub fn area(&self) -> f64 {
        match self {
            Shape::Rectangle(r) => r.area(),
            Shape::Composite(c) => c.area(),
        }
    }

    /// Σ centroid·area, which stays defined when the area is zero
    pub fn first_moment(&self) -> Vec2 {
        match self {
            Shape::Rectangle(r) => r.centroid() * r.area(),
            Shape::Composite(c) => c.first_moment(),
        }
    }

    /// Inertia about global-frame axes through `point`
    pub fn inertia_about(&self, point: Vec2) -> Inertia {
        match self {
            Shape::Rectangle(r) => r.inertia_about(point),
            Shape::Composite(c) => c.inertia_about(point),
        }
    }

    fn collect_primitives<'a>(&'a self, out: &mut Vec<&'a OrientedRectangle>) {
        match self {
            Shape::Rectangle(r) => out.push(r),
            Shape::Composite(c) => c.children.iter().for_each(|child| child.collect_primitives(out)),
        }
    }
}

impl RigidTransform for Shape {
    fn translate(&mut self, displacement: Vec2) {
        match self {
            Shape::Rectangle(r) => r.translate(displacement),
            Shape::Composite(c) => c.translate(displacement),
        }
    }

    fn rotate(&mut self, pivot: Vec2, delta: Degrees) {
        match self {
            Shape::Rectangle(r) => r.rotate(pivot, delta),
            Shape::Composite(c) => c.rotate(pivot, delta),
        }
    }
}

impl From<OrientedRectangle> for Shape {
    fn from(rect: OrientedRectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<CompositeGeometry> for Shape {
    fn from(composite: CompositeGeometry) -> Self {
        Shape::Composite(composite)
    }
}

// ============================================================================
// Composite Geometry
// ============================================================================

/// A rigid shape made of owned child shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CompositeGeometry {
    children: Vec<Shape>,
}

impl CompositeGeometry {
    pub fn new(children: Vec<Shape>) -> Self {
        CompositeGeometry { children }
    }

    pub fn from_rectangles(rectangles: Vec<OrientedRectangle>) -> Self {
        CompositeGeometry {
            children: rectangles.into_iter().map(Shape::Rectangle).collect(),
        }
    }

    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.children.push(shape.into());
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn area(&self) -> f64 {
        self.children.iter().map(Shape::area).sum()
    }

    pub fn first_moment(&self) -> Vec2 {
        self.children.iter().map(Shape::first_moment).sum()
    }

    pub fn centroid(&self) -> SectionResult<Vec2> {
        self.centroid_with(&GeometrySettings::default())
    }

    /// # Errors
    /// `DegenerateGeometry` when the aggregate area is at or below
    /// `settings.area_tolerance`.
    pub fn centroid_with(&self, settings: &GeometrySettings) -> SectionResult<Vec2> {
        let area = self.area();
        if area <= settings.area_tolerance {
            warn!(area, children = self.children.len(), "centroid requested for zero-area composite");
            return Err(SectionError::degenerate(
                "centroid",
                format!("composite of {} children has area {}", self.children.len(), area),
            ));
        }
        Ok(self.first_moment() / area)
    }

    /// Inertia about the composite's own centroid
    pub fn inertia(&self) -> SectionResult<Inertia> {
        self.inertia_with(&GeometrySettings::default())
    }

    pub fn inertia_with(&self, settings: &GeometrySettings) -> SectionResult<Inertia> {
        let centroid = self.centroid_with(settings)?;
        Ok(self.centroidal_inertia(centroid))
    }

    fn centroidal_inertia(&self, centroid: Vec2) -> Inertia {
        self.children.iter().map(|child| child.inertia_about(centroid)).sum()
    }

    /// Inertia about global-frame axes through `point`.
    ///
    /// Transports the composite's centroidal inertia with its own aggregate
    /// area. A composite without area contributes nothing.
    pub fn inertia_about(&self, point: Vec2) -> Inertia {
        let area = self.area();
        if area <= 0.0 {
            return Inertia::default();
        }
        let centroid = self.first_moment() / area;
        transport_inertia(self.centroidal_inertia(centroid), area, point - centroid)
    }

    pub fn section_properties(&self) -> SectionResult<SectionProperties> {
        self.section_properties_with(&GeometrySettings::default())
    }

    pub fn section_properties_with(&self, settings: &GeometrySettings) -> SectionResult<SectionProperties> {
        let centroid = self.centroid_with(settings)?;
        Ok(SectionProperties::new(self.area(), centroid, self.centroidal_inertia(centroid)))
    }

    /// Every rectangle in depth-first order, for renderers
    pub fn primitives(&self) -> Vec<&OrientedRectangle> {
        let mut out = Vec::new();
        self.children.iter().for_each(|child| child.collect_primitives(&mut out));
        out
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        bounding_box_of(self.primitives())
    }
}

impl RigidTransform for CompositeGeometry {
    fn translate(&mut self, displacement: Vec2) {
        self.children.iter_mut().for_each(|child| child.translate(displacement));
    }

    fn rotate(&mut self, pivot: Vec2, delta: Degrees) {
        self.children.iter_mut().for_each(|child| child.rotate(pivot, delta));
    }
}

pub(crate) fn bounding_box_of<'a>(primitives: impl IntoIterator<Item = &'a OrientedRectangle>) -> Option<BoundingBox> {
    primitives
        .into_iter()
        .map(OrientedRectangle::bounding_box)
        .reduce(|a, b| a.union(&b))
}
