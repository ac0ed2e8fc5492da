//! # Error Types
//!
//! Structured error types for section_core. Every failure names the field,
//! entity or operation involved so the assessment layer can report it
//! without parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{SectionError, SectionResult};
//!
//! fn validate_thickness(thickness: f64) -> SectionResult<()> {
//!     if thickness <= 0.0 {
//!         return Err(SectionError::validation(
//!             "thickness",
//!             thickness.to_string(),
//!             "Thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type SectionResult<T> = Result<T, SectionError>;

/// Structured error type for geometry and assembly operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// A dimension or parameter is out of range (non-positive, non-finite, ...)
    /// or the requested operation does not apply to this profile kind
    #[error("Invalid value for '{field}': {value} - {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    /// Centroid, inertia or moduli requested for a shape with no area
    #[error("Degenerate geometry in {operation}: {reason}")]
    DegenerateGeometry { operation: String, reason: String },

    /// Lookup by an id that is not in the collection
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The assembly cannot accept the requested arrangement
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },
}

impl SectionError {
    /// Create a Validation error
    pub fn validation(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::DegenerateGeometry {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        SectionError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        SectionError::Configuration { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::Validation { .. } => "VALIDATION",
            SectionError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            SectionError::NotFound { .. } => "NOT_FOUND",
            SectionError::Configuration { .. } => "CONFIGURATION",
        }
    }
}

/// Reject non-positive or non-finite dimensions.
///
/// Shared by every constructor and setter so that a bad value is refused
/// before any geometry is touched.
pub fn ensure_positive(field: &str, value: f64) -> SectionResult<()> {
    if !value.is_finite() {
        return Err(SectionError::validation(field, value.to_string(), "Value must be finite"));
    }
    if value <= 0.0 {
        return Err(SectionError::validation(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SectionError::validation("web_length", "-5", "Value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Validation\""));
        let roundtrip: SectionError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SectionError::not_found("Stiffener", 3).error_code(), "NOT_FOUND");
        assert_eq!(SectionError::configuration("x").error_code(), "CONFIGURATION");
        assert_eq!(SectionError::degenerate("centroid", "zero area").error_code(), "DEGENERATE_GEOMETRY");
    }

    #[test]
    fn test_not_found_message() {
        let error = SectionError::not_found("Panel", 7);
        assert_eq!(error.to_string(), "Panel not found: 7");
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("width", 10.0).is_ok());
        assert!(ensure_positive("width", 0.0).is_err());
        assert!(ensure_positive("width", -1.0).is_err());
        assert!(ensure_positive("width", f64::NAN).is_err());
        assert!(ensure_positive("width", f64::INFINITY).is_err());
    }
}
