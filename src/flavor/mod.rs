//! Flavor Declaration System
//!
//! Manifest schema and the validated lookup table built from it.

pub mod schema;
pub mod table;

pub use schema::{FlavorManifest, FlavorRecord, ResValue};
pub use table::{FlavorError, FlavorTable};
