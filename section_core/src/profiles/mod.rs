//! # Stiffener Profiles
//!
//! The four rolled or built-up stiffener shapes and the rules that turn
//! their dimensions into rectangles.
//!
//! ## Profile Types
//!
//! - **FlatBar**: a single web
//! - **Angle**: web plus a flange flush with one face of the web
//! - **Tee**: web plus a flange centred on the web
//! - **Bulb**: idealised as an equivalent angle (see [`bulb`])
//!
//! ## JSON Serialization
//!
//! ```json
//! { "type": "FlatBar", "web_length": 100.0, "thickness": 10.0 }
//! { "type": "Angle", "web_length": 450.0, "web_thickness": 8.0, "flange_length": 80.0, "flange_thickness": 8.0 }
//! { "type": "Bulb", "length": 100.0, "thickness": 8.0 }
//! ```

pub mod bulb;
pub mod derive;
pub mod stiffener;

pub use bulb::{bulb_alpha, equivalent_angle};
pub use derive::derive_primitives;
pub use stiffener::Stiffener;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, SectionError, SectionResult};

/// Web and flange dimensions shared by angles and tees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlangedDimensions {
    pub web_length: f64,
    pub web_thickness: f64,
    pub flange_length: f64,
    pub flange_thickness: f64,
}

impl FlangedDimensions {
    pub fn validate(&self) -> SectionResult<()> {
        ensure_positive("web_length", self.web_length)?;
        ensure_positive("web_thickness", self.web_thickness)?;
        ensure_positive("flange_length", self.flange_length)?;
        ensure_positive("flange_thickness", self.flange_thickness)
    }
}

/// Stiffener cross-section parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProfileShape {
    FlatBar { web_length: f64, thickness: f64 },
    Angle(FlangedDimensions),
    Tee(FlangedDimensions),
    /// Holland profile; `length` is the overall profile height
    Bulb { length: f64, thickness: f64 },
}

impl ProfileShape {
    pub fn kind(&self) -> ProfileKind {
        match self {
            ProfileShape::FlatBar { .. } => ProfileKind::FlatBar,
            ProfileShape::Angle(_) => ProfileKind::Angle,
            ProfileShape::Tee(_) => ProfileKind::Tee,
            ProfileShape::Bulb { .. } => ProfileKind::Bulb,
        }
    }

    /// Check every dimension is positive. A bulb must also be tall enough
    /// for its equivalent angle to have a positive flange thickness.
    pub fn validate(&self) -> SectionResult<()> {
        match self {
            ProfileShape::FlatBar { web_length, thickness } => {
                ensure_positive("web_length", *web_length)?;
                ensure_positive("thickness", *thickness)
            }
            ProfileShape::Angle(dims) | ProfileShape::Tee(dims) => dims.validate(),
            ProfileShape::Bulb { length, thickness } => {
                ensure_positive("length", *length)?;
                ensure_positive("thickness", *thickness)?;
                equivalent_angle(*length, *thickness).validate().map_err(|_| {
                    SectionError::validation(
                        "length",
                        length.to_string(),
                        "Bulb is too short for the equivalent-angle idealisation (needs length > 18.4)",
                    )
                })
            }
        }
    }

    /// Catalogue-style name, e.g. `FB 100x10`, `L450x8+80x8`, `HP100x8`
    pub fn designation(&self) -> String {
        match self {
            ProfileShape::FlatBar { web_length, thickness } => {
                format!("FB {}x{}", round2(*web_length), round2(*thickness))
            }
            ProfileShape::Angle(d) => format!(
                "L{}x{}+{}x{}",
                round2(d.web_length),
                round2(d.web_thickness),
                round2(d.flange_length),
                round2(d.flange_thickness)
            ),
            ProfileShape::Tee(d) => format!(
                "T{}x{}+{}x{}",
                round2(d.web_length),
                round2(d.web_thickness),
                round2(d.flange_length),
                round2(d.flange_thickness)
            ),
            ProfileShape::Bulb { length, thickness } => format!("HP{}x{}", round2(*length), round2(*thickness)),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Discriminant of [`ProfileShape`], for listings and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileKind {
    FlatBar,
    Angle,
    Tee,
    Bulb,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 4] = [
        ProfileKind::FlatBar,
        ProfileKind::Angle,
        ProfileKind::Tee,
        ProfileKind::Bulb,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileKind::FlatBar => "Flat bar",
            ProfileKind::Angle => "Angle",
            ProfileKind::Tee => "Tee",
            ProfileKind::Bulb => "Bulb",
        }
    }

    /// Whether the flange sits on one face of the web and can be mirrored
    pub fn has_asymmetric_flange(&self) -> bool {
        matches!(self, ProfileKind::Angle | ProfileKind::Bulb)
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which face of the web an angle's flange is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlangeSide {
    /// Along the web's unit normal
    #[default]
    Positive,
    /// Against the web's unit normal
    Negative,
}

impl FlangeSide {
    /// +1.0 or −1.0
    pub fn sign(self) -> f64 {
        match self {
            FlangeSide::Positive => 1.0,
            FlangeSide::Negative => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            FlangeSide::Positive => FlangeSide::Negative,
            FlangeSide::Negative => FlangeSide::Positive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angle_dims() -> FlangedDimensions {
        FlangedDimensions {
            web_length: 450.0,
            web_thickness: 8.0,
            flange_length: 80.0,
            flange_thickness: 8.0,
        }
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        assert!(ProfileShape::FlatBar { web_length: 100.0, thickness: 0.0 }.validate().is_err());
        let mut dims = angle_dims();
        dims.flange_thickness = -2.0;
        let err = ProfileShape::Angle(dims).validate().unwrap_err();
        assert!(matches!(err, SectionError::Validation { ref field, .. } if field == "flange_thickness"));
    }

    #[test]
    fn test_validate_short_bulb() {
        assert!(ProfileShape::Bulb { length: 18.0, thickness: 5.0 }.validate().is_err());
        assert!(ProfileShape::Bulb { length: 80.0, thickness: 6.0 }.validate().is_ok());
    }

    #[test]
    fn test_designations() {
        assert_eq!(ProfileShape::FlatBar { web_length: 100.0, thickness: 10.0 }.designation(), "FB 100x10");
        assert_eq!(ProfileShape::Angle(angle_dims()).designation(), "L450x8+80x8");
        let tee = FlangedDimensions { flange_length: 150.0, flange_thickness: 12.0, ..angle_dims() };
        assert_eq!(ProfileShape::Tee(tee).designation(), "T450x8+150x12");
        assert_eq!(ProfileShape::Bulb { length: 100.0, thickness: 6.35 }.designation(), "HP100x6.35");
    }

    #[test]
    fn test_flange_side_flip_is_involution() {
        let side = FlangeSide::default();
        assert_eq!(side.sign(), 1.0);
        assert_eq!(side.flipped().sign(), -1.0);
        assert_eq!(side.flipped().flipped(), side);
    }

    #[test]
    fn test_kind_and_serialization() {
        let shape = ProfileShape::Bulb { length: 100.0, thickness: 8.0 };
        assert_eq!(shape.kind(), ProfileKind::Bulb);
        assert!(shape.kind().has_asymmetric_flange());
        assert!(!ProfileKind::Tee.has_asymmetric_flange());

        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, r#"{"type":"Bulb","length":100.0,"thickness":8.0}"#);
        let parsed: ProfileShape = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, shape);
    }
}
