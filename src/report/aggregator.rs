//! Report aggregation - rolls per-file records into a project-wide summary.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classifier::{Category, Priority, Status};
use crate::scanner::Registry;

/// Aggregated summary of one scan pass.
///
/// Derived, not authoritative: rebuilt from the registry each time, never
/// partially updated. `priorities` and `status` always carry their full
/// fixed bucket sets; `categories` only lists categories actually present.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub total_files: usize,
    pub categories: BTreeMap<Category, Vec<String>>,
    pub priorities: BTreeMap<Priority, Vec<String>>,
    pub status: BTreeMap<Status, Vec<String>>,
    pub dependencies: BTreeMap<String, Vec<String>>,
}

/// Build a report from the registry. Pure: the registry is not mutated.
///
/// Every record lands in exactly one category bucket, one priority bucket,
/// one status bucket, and one dependency entry. Bucket path lists are sorted
/// so output is deterministic regardless of registry iteration order.
pub fn aggregate(registry: &Registry) -> Report {
    let mut categories: BTreeMap<Category, Vec<String>> = BTreeMap::new();
    let mut priorities: BTreeMap<Priority, Vec<String>> =
        Priority::ALL.iter().map(|p| (*p, Vec::new())).collect();
    let mut status: BTreeMap<Status, Vec<String>> =
        Status::ALL.iter().map(|s| (*s, Vec::new())).collect();
    let mut dependencies: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for record in registry.iter() {
        let path = record.path.display().to_string();
        categories.entry(record.category).or_default().push(path.clone());
        priorities
            .get_mut(&record.priority)
            .expect("all priority buckets are pre-seeded")
            .push(path.clone());
        status
            .get_mut(&record.status)
            .expect("all status buckets are pre-seeded")
            .push(path.clone());
        dependencies.insert(path, record.dependencies.clone());
    }

    for paths in categories.values_mut() {
        paths.sort();
    }
    for paths in priorities.values_mut() {
        paths.sort();
    }
    for paths in status.values_mut() {
        paths.sort();
    }

    Report {
        timestamp: Utc::now(),
        total_files: registry.len(),
        categories,
        priorities,
        status,
        dependencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::scanner::FileRecord;

    fn record(path: &str, content: &str) -> FileRecord {
        FileRecord::new(path.into(), classify(content), Utc::now())
    }

    #[test]
    fn test_one_record_per_bucket() {
        let mut registry = Registry::new();
        registry.insert(record("sec.php", "SecurityManager"));
        registry.insert(record("tpl.php", "TemplateEngine"));
        registry.insert(record("misc.php", "nothing"));

        let report = aggregate(&registry);
        assert_eq!(report.total_files, 3);
        assert_eq!(report.categories.len(), 3);
        assert_eq!(report.categories[&Category::Security], vec!["sec.php"]);
        assert_eq!(report.categories[&Category::Template], vec!["tpl.php"]);
        assert_eq!(report.categories[&Category::Misc], vec!["misc.php"]);

        // Fixed buckets are always present, even when empty.
        assert_eq!(report.priorities.len(), 3);
        assert_eq!(report.status.len(), 4);
        assert_eq!(report.priorities[&Priority::Low].len(), 3);
        assert_eq!(report.status[&Status::Unknown].len(), 3);
        assert_eq!(report.dependencies.len(), 3);
    }

    #[test]
    fn test_empty_registry() {
        let report = aggregate(&Registry::new());
        assert_eq!(report.total_files, 0);
        assert!(report.categories.is_empty());
        assert_eq!(report.priorities.len(), 3);
        assert_eq!(report.status.len(), 4);
    }

    #[test]
    fn test_serialized_key_names() {
        let mut registry = Registry::new();
        registry.insert(record("a.php", "NEEDS_UPDATE SecurityManager CRITICAL"));

        let json = serde_json::to_value(aggregate(&registry)).unwrap();
        assert!(json["categories"]["security"].is_array());
        assert!(json["priorities"]["high"].is_array());
        assert!(json["status"]["needs_update"].is_array());
    }
}
