//! Configuration system.
//! JSON-based, read once at startup, fatal on unreadable or malformed input.

pub mod organizer_config;

pub use organizer_config::OrganizerConfig;
