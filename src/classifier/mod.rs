//! File classification engine.
//!
//! Pure textual heuristics: ordered marker tables turn raw file content into
//! category, priority, status, dependency, and maintenance facts. No I/O.

pub mod rules;
pub mod types;

pub use rules::{classify, Classification};
pub use types::{Category, Priority, Status};
