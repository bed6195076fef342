//! Directory scan: tree walk, per-file classification, and the Registry.

pub mod types;
pub mod walker;

pub use types::{FileRecord, Registry, ScanStats};
pub use walker::RegistryBuilder;
