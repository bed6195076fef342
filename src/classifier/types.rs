//! Classification facets - closed enumerated sets for category, priority, and status.

use serde::{Deserialize, Serialize};

/// Inferred subsystem a file belongs to. Closed-world: unmatched content is `Misc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Security,
    Content,
    Template,
    Infrastructure,
    Misc,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Content => "content",
            Self::Template => "template",
            Self::Infrastructure => "infrastructure",
            Self::Misc => "misc",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inferred maintenance priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in report-bucket order.
    pub const ALL: [Priority; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inferred maintenance status.
///
/// Independent of the `needs_update` flag: a file can be `Usable` and still
/// carry `needs_update == true` when it matches a different marker set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NeedsUpdate,
    Usable,
    NeedsMerge,
    Unknown,
}

impl Status {
    /// All statuses in report-bucket order.
    pub const ALL: [Status; 4] = [Self::NeedsUpdate, Self::Usable, Self::NeedsMerge, Self::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeedsUpdate => "needs_update",
            Self::Usable => "usable",
            Self::NeedsMerge => "needs_merge",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
