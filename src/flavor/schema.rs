//! Flavor Manifest Schema Types
//!
//! Raw TOML manifest shapes and the runtime records they convert into.

use serde::{Deserialize, Serialize};

/// Root manifest structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlavorManifest {
    pub dimension: DimensionDecl,
    pub flavors: Vec<FlavorDecl>,
}

/// Flavor dimension declaration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DimensionDecl {
    pub name: String,
}

/// A single flavor entry as written in the manifest
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlavorDecl {
    pub name: String,
    /// Optional restatement of the dimension, as the Gradle syntax allows.
    /// Must match the declared dimension when present.
    pub dimension: Option<String>,
    pub application_id: String,
    #[serde(default)]
    pub res_values: Vec<ResValue>,
}

/// A typed resource-value override (`resValue(type, name, value)`)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ResValue {
    #[serde(rename = "type")]
    pub value_type: String,
    pub name: String,
    pub value: String,
}

/// Runtime flavor record (validated, dimension resolved)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlavorRecord {
    pub name: String,
    pub dimension: String,
    pub application_id: String,
    pub res_values: Vec<ResValue>,
}

impl FlavorRecord {
    /// Build a record from a manifest entry, stamping in the table dimension.
    pub(crate) fn from_decl(decl: FlavorDecl, dimension: &str) -> Self {
        Self {
            name: decl.name,
            dimension: dimension.to_string(),
            application_id: decl.application_id,
            res_values: decl.res_values,
        }
    }

    /// The human-readable display name: the `string` res-value named
    /// `app_name`, when the flavor declares one.
    pub fn display_name(&self) -> Option<&str> {
        self.res_values
            .iter()
            .find(|rv| rv.value_type == "string" && rv.name == "app_name")
            .map(|rv| rv.value.as_str())
    }
}
