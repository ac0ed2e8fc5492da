//! # Bulb Profile Idealisation
//!
//! Bulb flats are not modelled from their true rolled outline. For section
//! properties they are replaced by an equivalent angle whose dimensions
//! follow an empirical rule.
//!
//! ```text
//!     length L, thickness t (mm)
//!
//!     α  = 1.1 + (120 − L)² / 3000   if L ≤ 120
//!        = 1.0                        otherwise
//!
//!     web_length       = L − L/9.2 + 2
//!     web_thickness    = t
//!     flange_length    = α·(t + L/6.7 − 2)
//!     flange_thickness = L/9.2 − 2
//! ```
//!
//! The constants assume millimetres.
//!
//! ## References
//!
//! - DNV GL (2015) Rules for Classification of Ships, Pt.3 Ch.3 Sec.7
//!   1.4.1, stiffener profile with a bulb section

use super::FlangedDimensions;

/// Flange length multiplier α for a bulb of overall height `length`
#[inline]
pub fn bulb_alpha(length: f64) -> f64 {
    if length <= 120.0 {
        1.1 + (120.0 - length).powi(2) / 3000.0
    } else {
        1.0
    }
}

/// Dimensions of the angle that stands in for a bulb profile.
///
/// # Example
/// ```rust
/// use section_core::profiles::equivalent_angle;
///
/// let hp = equivalent_angle(100.0, 8.0);
/// assert!((hp.web_length - 91.1304).abs() < 1e-4);
/// assert_eq!(hp.web_thickness, 8.0);
/// assert!((hp.flange_thickness - 8.8696).abs() < 1e-4);
/// ```
pub fn equivalent_angle(length: f64, thickness: f64) -> FlangedDimensions {
    FlangedDimensions {
        web_length: length - length / 9.2 + 2.0,
        web_thickness: thickness,
        flange_length: bulb_alpha(length) * (thickness + length / 6.7 - 2.0),
        flange_thickness: length / 9.2 - 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_alpha_below_and_above_120() {
        assert_relative_eq!(bulb_alpha(100.0), 1.1 + 400.0 / 3000.0, max_relative = 1e-15);
        assert_relative_eq!(bulb_alpha(120.0), 1.1, max_relative = 1e-15);
        assert_eq!(bulb_alpha(140.0), 1.0);
    }

    #[test]
    fn test_hp100x8_equivalent_angle() {
        let alpha = 1.1 + (20.0_f64 * 20.0) / 3000.0;
        assert_relative_eq!(alpha, 1.233_333_333_333_333, max_relative = 1e-12);

        let hp = equivalent_angle(100.0, 8.0);
        assert_relative_eq!(hp.web_length, 100.0 - 100.0 / 9.2 + 2.0, max_relative = 1e-12);
        assert_relative_eq!(hp.web_length, 91.130_434_782_608_7, max_relative = 1e-12);
        assert_eq!(hp.web_thickness, 8.0);
        assert_relative_eq!(hp.flange_length, alpha * (8.0 + 100.0 / 6.7 - 2.0), max_relative = 1e-12);
        assert_relative_eq!(hp.flange_length, 25.808, max_relative = 1e-4);
        assert_relative_eq!(hp.flange_thickness, 100.0 / 9.2 - 2.0, max_relative = 1e-12);
        assert_relative_eq!(hp.flange_thickness, 8.869_565_217_391_3, max_relative = 1e-12);
    }

    #[test]
    fn test_hp160x7_uses_unit_alpha() {
        let hp = equivalent_angle(160.0, 7.0);
        assert_relative_eq!(hp.flange_length, 7.0 + 160.0 / 6.7 - 2.0, max_relative = 1e-12);
    }
}
