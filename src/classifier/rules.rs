//! Marker tables and the classification functions that evaluate them.
//!
//! Every rule is a plain case-sensitive substring containment test. No
//! normalization, no regex, no word boundaries: a marker appearing inside a
//! longer unrelated token still counts. Tables are evaluated top-down,
//! first-match-wins, and that ordering is a reproducibility contract.

use super::types::{Category, Priority, Status};

/// Ordered category dispatch table. Evaluated top-down; the first category
/// with any marker present in the content wins, so a file containing both
/// `ContentManager` and `SecurityManager` is always `security`.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Security, &["SecurityManager", "Authentication", "Authorization"]),
    (Category::Content, &["ContentManager", "MediaHandler", "CategoryManager"]),
    (Category::Template, &["TemplateEngine", "CacheManager"]),
    (Category::Infrastructure, &["Database", "Cache", "Logger"]),
];

const HIGH_PRIORITY_MARKERS: &[&str] = &["CRITICAL", "HIGH_PRIORITY"];
const MEDIUM_PRIORITY_MARKERS: &[&str] = &["IMPORTANT", "MEDIUM_PRIORITY"];

/// Ordered status table. Only the first matching marker determines status,
/// even when several co-occur.
const STATUS_RULES: &[(Status, &str)] = &[
    (Status::NeedsUpdate, "NEEDS_UPDATE"),
    (Status::Usable, "USABLE"),
    (Status::NeedsMerge, "NEEDS_MERGE"),
];

/// Markers that flag a file for maintenance, independent of its status.
const MAINTENANCE_MARKERS: &[&str] = &["TODO", "FIXME", "NEEDS_UPDATE"];

/// Substrings that make a line eligible for dependency extraction.
/// Plain containment, not whole-word: "reuse" triggers just like "use".
const DEPENDENCY_TRIGGERS: &[&str] = &["use", "require", "include"];

/// Full classification of one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    pub dependencies: Vec<String>,
    pub needs_update: bool,
}

/// Classify the full text content of one file. Pure and deterministic.
pub fn classify(content: &str) -> Classification {
    Classification {
        category: categorize(content),
        priority: prioritize(content),
        status: determine_status(content),
        dependencies: extract_dependencies(content),
        needs_update: check_needs_update(content),
    }
}

/// First category in table order with any marker present; `Misc` otherwise.
pub fn categorize(content: &str) -> Category {
    for (category, markers) in CATEGORY_RULES {
        if markers.iter().any(|m| content.contains(m)) {
            return *category;
        }
    }
    Category::Misc
}

/// High markers are checked before medium; absent both, priority is low.
pub fn prioritize(content: &str) -> Priority {
    if HIGH_PRIORITY_MARKERS.iter().any(|m| content.contains(m)) {
        return Priority::High;
    }
    if MEDIUM_PRIORITY_MARKERS.iter().any(|m| content.contains(m)) {
        return Priority::Medium;
    }
    Priority::Low
}

/// First status marker in table order; `Unknown` when none is present.
pub fn determine_status(content: &str) -> Status {
    for (status, marker) in STATUS_RULES {
        if content.contains(marker) {
            return *status;
        }
    }
    Status::Unknown
}

/// Best-effort dependency extraction: for each line containing a trigger
/// substring, take the last whitespace-delimited token and strip one
/// trailing `;`. Appended in line order; duplicates and junk tokens are
/// kept as-is, this is a heuristic and not a parser.
pub fn extract_dependencies(content: &str) -> Vec<String> {
    let mut dependencies = Vec::new();
    for line in content.lines() {
        if DEPENDENCY_TRIGGERS.iter().any(|t| line.contains(t)) {
            if let Some(token) = line.split_whitespace().last() {
                let token = token.strip_suffix(';').unwrap_or(token);
                dependencies.push(token.to_string());
            }
        }
    }
    dependencies
}

/// Maintenance flag, computed separately from [`determine_status`]. The two
/// can disagree (`USABLE` + `TODO` yields usable yet needs-update), which is
/// inherited behavior that downstream consumers rely on.
pub fn check_needs_update(content: &str) -> bool {
    MAINTENANCE_MARKERS.iter().any(|m| content.contains(m))
}
