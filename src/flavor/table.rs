//! Flavor Table
//!
//! Immutable, validated flavor lookup built from a manifest. Declaration
//! order is preserved so enumeration is stable across calls.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use thiserror::Error;

use super::schema::{FlavorManifest, FlavorRecord};

/// Application ids need at least two dot-separated segments, each starting
/// with a letter, to be installable package names.
static APPLICATION_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$").expect("valid regex")
});

/// Integrity and lookup errors for a flavor table
#[derive(Debug, Error, PartialEq)]
pub enum FlavorError {
    #[error("unknown flavor '{0}'")]
    UnknownFlavor(String),

    #[error("duplicate flavor name '{name}' in dimension '{dimension}'")]
    DuplicateFlavorName { name: String, dimension: String },

    #[error("application id '{application_id}' is shared by flavors '{first}' and '{second}'")]
    DuplicateApplicationId {
        application_id: String,
        first: String,
        second: String,
    },

    #[error("flavor '{name}' has invalid application id '{application_id}'")]
    InvalidApplicationId {
        name: String,
        application_id: String,
    },

    #[error("flavor '{name}' declares dimension '{declared}' but the manifest dimension is '{expected}'")]
    DimensionMismatch {
        name: String,
        declared: String,
        expected: String,
    },
}

/// Validated flavor table
#[derive(Debug, Clone)]
pub struct FlavorTable {
    dimension: String,
    /// Records in declaration order
    records: Vec<FlavorRecord>,
    /// Name -> index into `records`
    index: HashMap<String, usize>,
}

impl FlavorTable {
    /// Build a table from a parsed manifest, checking every integrity
    /// invariant. Fails on the first violation.
    pub fn from_manifest(manifest: FlavorManifest) -> Result<Self, FlavorError> {
        let dimension = manifest.dimension.name;
        let mut records = Vec::with_capacity(manifest.flavors.len());
        let mut index = HashMap::new();
        let mut application_ids: HashMap<String, String> = HashMap::new();

        for decl in manifest.flavors {
            if let Some(declared) = &decl.dimension {
                if *declared != dimension {
                    return Err(FlavorError::DimensionMismatch {
                        name: decl.name,
                        declared: declared.clone(),
                        expected: dimension,
                    });
                }
            }

            if index.contains_key(&decl.name) {
                return Err(FlavorError::DuplicateFlavorName {
                    name: decl.name,
                    dimension,
                });
            }

            if !APPLICATION_ID_RE.is_match(&decl.application_id) {
                return Err(FlavorError::InvalidApplicationId {
                    name: decl.name,
                    application_id: decl.application_id,
                });
            }

            if let Some(first) = application_ids.get(&decl.application_id) {
                return Err(FlavorError::DuplicateApplicationId {
                    application_id: decl.application_id,
                    first: first.clone(),
                    second: decl.name,
                });
            }

            application_ids.insert(decl.application_id.clone(), decl.name.clone());
            let record = FlavorRecord::from_decl(decl, &dimension);
            index.insert(record.name.clone(), records.len());
            records.push(record);
        }

        log::debug!(
            "flavor table built: dimension '{}', {} flavors",
            dimension,
            records.len()
        );

        Ok(Self {
            dimension,
            records,
            index,
        })
    }

    /// The built-in G-SPEND declaration embedded in the binary.
    pub fn builtin() -> Self {
        let embedded_toml = include_str!("../../resources/gspend.flavors.toml");
        let manifest: FlavorManifest =
            toml::from_str(embedded_toml).expect("embedded manifest parses");
        Self::from_manifest(manifest).expect("embedded manifest is valid")
    }

    /// Load and validate a manifest from a TOML file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read flavor manifest: {}", path.display()))?;

        let manifest: FlavorManifest = toml::from_str(&content)
            .with_context(|| format!("Failed to parse flavor manifest: {}", path.display()))?;

        let table = Self::from_manifest(manifest)
            .with_context(|| format!("Invalid flavor manifest: {}", path.display()))?;

        log::info!(
            "Loaded {} flavors from {}",
            table.records.len(),
            path.display()
        );

        Ok(table)
    }

    /// Resolve a flavor by name.
    pub fn resolve(&self, name: &str) -> Result<&FlavorRecord, FlavorError> {
        self.index
            .get(name)
            .map(|&i| &self.records[i])
            .ok_or_else(|| FlavorError::UnknownFlavor(name.to_string()))
    }

    /// All flavors in declaration order.
    pub fn flavors(&self) -> &[FlavorRecord] {
        &self.records
    }

    /// The dimension all flavors belong to.
    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::schema::{DimensionDecl, FlavorDecl};

    fn decl(name: &str, application_id: &str) -> FlavorDecl {
        FlavorDecl {
            name: name.to_string(),
            dimension: None,
            application_id: application_id.to_string(),
            res_values: vec![],
        }
    }

    fn manifest(flavors: Vec<FlavorDecl>) -> FlavorManifest {
        FlavorManifest {
            dimension: DimensionDecl {
                name: "flavor-type".to_string(),
            },
            flavors,
        }
    }

    #[test]
    fn test_resolve_returns_queried_name() {
        let table = FlavorTable::from_manifest(manifest(vec![
            decl("dev", "com.example.app.dev"),
            decl("prod", "com.example.app"),
        ]))
        .expect("build table");

        for name in ["dev", "prod"] {
            assert_eq!(table.resolve(name).expect("resolve").name, name);
        }
    }

    #[test]
    fn test_resolve_unknown_flavor() {
        let table = FlavorTable::from_manifest(manifest(vec![decl("dev", "com.example.app.dev")]))
            .expect("build table");

        assert_eq!(
            table.resolve("staging"),
            Err(FlavorError::UnknownFlavor("staging".to_string()))
        );
    }

    #[test]
    fn test_flavors_preserve_declaration_order() {
        let table = FlavorTable::from_manifest(manifest(vec![
            decl("zeta", "com.example.zeta"),
            decl("alpha", "com.example.alpha"),
        ]))
        .expect("build table");

        let names: Vec<&str> = table.flavors().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_duplicate_flavor_name_rejected() {
        let err = FlavorTable::from_manifest(manifest(vec![
            decl("dev", "com.example.app.dev"),
            decl("dev", "com.example.app"),
        ]))
        .expect_err("duplicate name");

        assert_eq!(
            err,
            FlavorError::DuplicateFlavorName {
                name: "dev".to_string(),
                dimension: "flavor-type".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_application_id_rejected() {
        let err = FlavorTable::from_manifest(manifest(vec![
            decl("dev", "com.example.app"),
            decl("prod", "com.example.app"),
        ]))
        .expect_err("duplicate application id");

        assert_eq!(
            err,
            FlavorError::DuplicateApplicationId {
                application_id: "com.example.app".to_string(),
                first: "dev".to_string(),
                second: "prod".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_application_id_rejected() {
        // Single segment, leading digit, and empty segment are all invalid.
        for bad_id in ["app", "1com.example", "com..example", "com.example."] {
            let err = FlavorTable::from_manifest(manifest(vec![decl("dev", bad_id)]))
                .expect_err("invalid application id");
            assert!(matches!(err, FlavorError::InvalidApplicationId { .. }));
        }
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut bad = decl("dev", "com.example.app.dev");
        bad.dimension = Some("environment".to_string());

        let err = FlavorTable::from_manifest(manifest(vec![bad])).expect_err("mismatch");
        assert_eq!(
            err,
            FlavorError::DimensionMismatch {
                name: "dev".to_string(),
                declared: "environment".to_string(),
                expected: "flavor-type".to_string(),
            }
        );
    }

    #[test]
    fn test_matching_dimension_restatement_accepted() {
        let mut ok = decl("dev", "com.example.app.dev");
        ok.dimension = Some("flavor-type".to_string());

        let table = FlavorTable::from_manifest(manifest(vec![ok])).expect("build table");
        assert_eq!(table.resolve("dev").expect("resolve").dimension, "flavor-type");
    }

    #[test]
    fn test_builtin_table() {
        let table = FlavorTable::builtin();
        assert_eq!(table.dimension(), "flavor-type");
        assert!(table.contains("dev"));
        assert!(table.contains("prod"));
    }
}
