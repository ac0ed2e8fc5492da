//! # Materials
//!
//! Materials travel with plates and stiffeners so that the assessment layer
//! can look up strength values for each element. The geometry engine itself
//! never reads them: a material is cloned along with its owner and shown by
//! name in listings, nothing more.
//!
//! ```rust
//! use section_core::materials::Material;
//!
//! let steel = Material::steel_a131();
//! assert_eq!(steel.name, "A131");
//! assert_eq!(steel.to_string(), "A131");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mechanical properties carried for the assessment layer (SI units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Minimum yield strength (Pa)
    pub yield_strength: f64,
    /// Young's modulus (Pa)
    pub young_modulus: f64,
    /// Poisson's ratio
    pub poisson_ratio: f64,
}

/// A named material, opaque to the geometry engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<MaterialProperties>,
}

impl Material {
    /// A material known only by name
    pub fn named(name: impl Into<String>) -> Self {
        Material {
            name: name.into(),
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: MaterialProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// ASTM A131 ordinary-strength hull steel
    pub fn steel_a131() -> Self {
        Material::named("A131").with_properties(MaterialProperties {
            yield_strength: 235e6,
            young_modulus: 2.1e11,
            poisson_ratio: 0.3,
        })
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_has_no_properties() {
        let m = Material::named("AH36");
        assert!(m.properties.is_none());
    }

    #[test]
    fn test_serialization_skips_missing_properties() {
        let json = serde_json::to_string(&Material::named("AH36")).unwrap();
        assert_eq!(json, r#"{"name":"AH36"}"#);

        let steel = Material::steel_a131();
        let json = serde_json::to_string(&steel).unwrap();
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, steel);
    }
}
