//! # Geometry Settings
//!
//! Numeric tolerances used by the aggregation and assembly layers. Settings
//! are plain in-memory values; `from_json` exists so that a host application
//! can keep them alongside its own configuration.
//!
//! ```rust
//! use section_core::settings::GeometrySettings;
//!
//! let settings = GeometrySettings::from_json(r#"{ "fit_tolerance": 0.5 }"#).unwrap();
//! assert_eq!(settings.fit_tolerance, 0.5);
//! assert_eq!(settings.area_tolerance, GeometrySettings::default().area_tolerance);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SectionError, SectionResult};

/// Default threshold below which an aggregate area counts as zero
pub const DEFAULT_AREA_TOLERANCE: f64 = 1e-12;

/// Default slack allowed when checking that a stiffener group fits its plate
pub const DEFAULT_FIT_TOLERANCE: f64 = 1e-9;

/// Tolerances shared by composites, panels and sections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Aggregate area at or below this value is treated as degenerate
    pub area_tolerance: f64,

    /// Extra length allowed past the end of a plate when placing a
    /// stiffener group
    pub fit_tolerance: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        GeometrySettings {
            area_tolerance: DEFAULT_AREA_TOLERANCE,
            fit_tolerance: DEFAULT_FIT_TOLERANCE,
        }
    }
}

impl GeometrySettings {
    /// Check that both tolerances are finite and non-negative.
    pub fn validate(&self) -> SectionResult<()> {
        for (name, value) in [
            ("area_tolerance", self.area_tolerance),
            ("fit_tolerance", self.fit_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SectionError::configuration(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parse settings from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> SectionResult<Self> {
        let settings: GeometrySettings = serde_json::from_str(json)
            .map_err(|e| SectionError::configuration(format!("invalid settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GeometrySettings::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let s = GeometrySettings::from_json(r#"{ "area_tolerance": 1e-6 }"#).unwrap();
        assert_eq!(s.area_tolerance, 1e-6);
        assert_eq!(s.fit_tolerance, DEFAULT_FIT_TOLERANCE);
    }

    #[test]
    fn test_from_json_rejects_negative() {
        let err = GeometrySettings::from_json(r#"{ "fit_tolerance": -1.0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(GeometrySettings::from_json("not json").is_err());
    }
}
