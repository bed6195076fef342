//! project-organizer: heuristic source-tree classification and organization.
//!
//! Subsystems:
//! - Classifier: pure marker-table rules turning file content into
//!   category, priority, status, dependency, and maintenance facts
//! - Scanner: deterministic tree walk building the per-file Registry
//! - Organizer: relocation of classified files into a canonical layout
//! - Report: aggregation of the Registry into a JSON summary
//! - Pipeline: one-invocation orchestration with per-item fault isolation
//! - Config: JSON settings document, fatal on malformed input
//! - Errors: one `thiserror` enum per subsystem, fatal vs. per-item split

pub mod classifier;
pub mod config;
pub mod errors;
pub mod organizer;
pub mod pipeline;
pub mod report;
pub mod scanner;

// Re-exports for convenience
pub use classifier::{classify, Category, Classification, Priority, Status};
pub use config::OrganizerConfig;
pub use errors::{ConfigError, OrganizeError, PipelineError, PipelineResult, ReportError, ScanError};
pub use organizer::{OrganizeStats, Organizer};
pub use pipeline::{run, RunOptions, RunSummary};
pub use report::{aggregate, write_report, Report};
pub use scanner::{FileRecord, Registry, RegistryBuilder, ScanStats};
