//! # Unit Types
//!
//! Type-safe wrappers for plane angles. Lengths are plain `f64` in whatever
//! consistent unit the caller chooses (millimetres throughout the examples),
//! but angles cross the public boundary in degrees and are held in radians
//! internally, so the two are kept apart by type.
//!
//! ## Example
//!
//! ```rust
//! use section_core::units::{Degrees, Radians};
//!
//! let right_angle = Degrees(90.0);
//! let rad: Radians = right_angle.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! assert_eq!(Degrees(450.0).normalized(), Degrees(90.0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees, measured from the horizontal axis, positive
/// counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Degrees {
    /// Wrap into the half-open range [0, 360)
    pub fn normalized(self) -> Self {
        Degrees(self.0.rem_euclid(360.0))
    }
}

impl Radians {
    /// Wrap into the half-open range [0, 2π)
    pub fn normalized(self) -> Self {
        Radians(self.0.rem_euclid(std::f64::consts::TAU))
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_radians_to_degrees() {
        let deg: Degrees = Radians(std::f64::consts::FRAC_PI_2).into();
        assert!((deg.0 - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Degrees(-90.0).normalized(), Degrees(270.0));
        assert_eq!(Degrees(360.0).normalized(), Degrees(0.0));
        assert_eq!(Degrees(540.0).normalized(), Degrees(180.0));
        let r = Radians(-std::f64::consts::FRAC_PI_2).normalized();
        assert!((r.0 - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Degrees(90.0);
        let b = Degrees(45.0);
        assert_eq!((a + b).0, 135.0);
        assert_eq!((a - b).0, 45.0);
        assert_eq!((a * 2.0).0, 180.0);
        assert_eq!((a / 2.0).0, 45.0);
        assert_eq!((-a).0, -90.0);
    }

    #[test]
    fn test_serialization() {
        let deg = Degrees(12.5);
        let json = serde_json::to_string(&deg).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Degrees = serde_json::from_str(&json).unwrap();
        assert_eq!(deg, roundtrip);
    }
}
