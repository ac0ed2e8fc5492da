//! Result records handed to the assessment layer and to renderers.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::Vec2;
use crate::equations::section::section_modulus;
use crate::errors::{SectionError, SectionResult};

// ============================================================================
// Inertia
// ============================================================================

/// The four second-moment components about a pair of axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Inertia {
    /// About the horizontal axis
    pub iy: f64,
    /// About the vertical axis
    pub iz: f64,
    /// Polar
    pub ix: f64,
    /// Product
    pub iyz: f64,
}

impl Add for Inertia {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Inertia {
            iy: self.iy + rhs.iy,
            iz: self.iz + rhs.iz,
            ix: self.ix + rhs.ix,
            iyz: self.iyz + rhs.iyz,
        }
    }
}

impl AddAssign for Inertia {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Inertia {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Inertia::default(), Add::add)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Static section properties about the shape's own centroid.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area": 800.0,
///   "centroid": [12.5, 17.5],
///   "iy": 181666.67,
///   "iz": 101666.67,
///   "ix": 283333.33,
///   "iyz": -75000.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub area: f64,
    /// `(y, z)` in the global frame
    pub centroid: [f64; 2],
    pub iy: f64,
    pub iz: f64,
    pub ix: f64,
    pub iyz: f64,
}

impl SectionProperties {
    pub fn new(area: f64, centroid: Vec2, inertia: Inertia) -> Self {
        SectionProperties {
            area,
            centroid: [centroid.x, centroid.y],
            iy: inertia.iy,
            iz: inertia.iz,
            ix: inertia.ix,
            iyz: inertia.iyz,
        }
    }

    pub fn centroid_vector(&self) -> Vec2 {
        Vec2::new(self.centroid[0], self.centroid[1])
    }

    pub fn inertia(&self) -> Inertia {
        Inertia {
            iy: self.iy,
            iz: self.iz,
            ix: self.ix,
            iyz: self.iyz,
        }
    }

    /// Radius of gyration about the horizontal axis, √(Iy/A)
    pub fn radius_of_gyration_y(&self) -> f64 {
        (self.iy / self.area).sqrt()
    }

    /// Radius of gyration about the vertical axis, √(Iz/A)
    pub fn radius_of_gyration_z(&self) -> f64 {
        (self.iz / self.area).sqrt()
    }
}

// ============================================================================
// Bounding Box
// ============================================================================

/// Axis-aligned bounding box in the global frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Smallest box containing every point. `None` for an empty input.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            BoundingBox { min: first, max: first },
            |bb, p| BoundingBox {
                min: bb.min.inf(p),
                max: bb.max.sup(p),
            },
        ))
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, point: &Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

// ============================================================================
// Section Moduli
// ============================================================================

/// Hull-girder style section moduli for vertical bending.
///
/// The neutral axis is the horizontal line through the centroid; the top
/// (deck) and bottom (keel) fibres are the vertical extremes of the
/// section's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionModuli {
    /// Height of the neutral axis
    pub neutral_axis: f64,
    /// Distance from neutral axis up to the top fibre
    pub distance_to_top: f64,
    /// Distance from neutral axis down to the bottom fibre
    pub distance_to_bottom: f64,
    /// Iy / distance_to_top
    pub z_top: f64,
    /// Iy / distance_to_bottom
    pub z_bottom: f64,
}

impl SectionModuli {
    pub fn compute(properties: &SectionProperties, bounds: &BoundingBox) -> SectionResult<Self> {
        let neutral_axis = properties.centroid[1];
        let distance_to_top = bounds.max.y - neutral_axis;
        let distance_to_bottom = neutral_axis - bounds.min.y;

        let z_top = section_modulus(properties.iy, distance_to_top)
            .ok_or_else(|| SectionError::degenerate("section_moduli", "neutral axis lies on the top fibre"))?;
        let z_bottom = section_modulus(properties.iy, distance_to_bottom)
            .ok_or_else(|| SectionError::degenerate("section_moduli", "neutral axis lies on the bottom fibre"))?;

        Ok(SectionModuli {
            neutral_axis,
            distance_to_top,
            distance_to_bottom,
            z_top,
            z_bottom,
        })
    }

    /// The governing (smaller) modulus
    pub fn minimum(&self) -> f64 {
        self.z_top.min(self.z_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inertia_sum() {
        let parts = [
            Inertia { iy: 1.0, iz: 2.0, ix: 3.0, iyz: -1.0 },
            Inertia { iy: 4.0, iz: 5.0, ix: 9.0, iyz: 2.0 },
        ];
        let total: Inertia = parts.into_iter().sum();
        assert_eq!(total, Inertia { iy: 5.0, iz: 7.0, ix: 12.0, iyz: 1.0 });
    }

    #[test]
    fn test_bounding_box_from_points() {
        let pts = [Vec2::new(1.0, 5.0), Vec2::new(-2.0, 3.0), Vec2::new(4.0, -1.0)];
        let bb = BoundingBox::from_points(&pts).unwrap();
        assert_eq!(bb.min, Vec2::new(-2.0, -1.0));
        assert_eq!(bb.max, Vec2::new(4.0, 5.0));
        assert_eq!(bb.width(), 6.0);
        assert_eq!(bb.height(), 6.0);
        assert!(bb.contains(&Vec2::new(0.0, 0.0)));
        assert!(BoundingBox::from_points(&[] as &[Vec2]).is_none());
    }

    #[test]
    fn test_section_moduli_rectangle() {
        // 100 wide x 10 deep plate lying flat from z = 0 to z = 10
        let props = SectionProperties {
            area: 1000.0,
            centroid: [50.0, 5.0],
            iy: 100.0 * 1000.0 / 12.0,
            iz: 10.0 * 1.0e6 / 12.0,
            ix: 0.0,
            iyz: 0.0,
        };
        let bounds = BoundingBox { min: Vec2::new(0.0, 0.0), max: Vec2::new(100.0, 10.0) };
        let m = SectionModuli::compute(&props, &bounds).unwrap();
        // S = b·h²/6
        assert!((m.z_top - 100.0 * 100.0 / 6.0).abs() < 1e-9);
        assert!((m.z_bottom - m.z_top).abs() < 1e-9);
        assert_eq!(m.minimum(), m.z_top.min(m.z_bottom));
    }

    #[test]
    fn test_section_moduli_degenerate() {
        let props = SectionProperties { area: 1.0, centroid: [0.0, 10.0], iy: 1.0, iz: 1.0, ix: 2.0, iyz: 0.0 };
        let bounds = BoundingBox { min: Vec2::new(0.0, 0.0), max: Vec2::new(1.0, 10.0) };
        let err = SectionModuli::compute(&props, &bounds).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_GEOMETRY");
    }

    #[test]
    fn test_properties_json_shape() {
        let props = SectionProperties::new(800.0, Vec2::new(12.5, 17.5), Inertia::default());
        let json = serde_json::to_value(props).unwrap();
        assert_eq!(json["centroid"][0], 12.5);
        assert_eq!(json["area"], 800.0);
    }
}
