//! Tests for the classification rules: marker precedence, ordering, and the
//! status/needs_update independence quirk.

use project_organizer::classifier::{classify, rules, Category, Priority, Status};

#[test]
fn test_security_marker_wins_over_later_categories() {
    // Security is first in the dispatch table: any security marker present
    // resolves to security no matter what else the content mentions.
    for marker in ["SecurityManager", "Authentication", "Authorization"] {
        let content = format!("{marker} plus TemplateEngine plus Database");
        assert_eq!(rules::categorize(&content), Category::Security);
    }
}

#[test]
fn test_category_assignment_is_order_sensitive() {
    // Content markers from two categories always resolve to whichever
    // category the table checks first, never the other.
    assert_eq!(
        rules::categorize("MediaHandler with TemplateEngine"),
        Category::Content
    );
    assert_eq!(
        rules::categorize("TemplateEngine with Database"),
        Category::Template
    );
    // "CacheManager" carries the infrastructure marker "Cache" as a
    // substring, but template is checked first.
    assert_eq!(rules::categorize("CacheManager"), Category::Template);
}

#[test]
fn test_unmatched_content_defaults_to_misc() {
    assert_eq!(rules::categorize("function render() {}"), Category::Misc);
}

#[test]
fn test_status_and_needs_update_are_independent() {
    // Documented quirk, preserved on purpose: a lone "TODO" leaves status
    // unknown while flagging the file for update.
    let c = classify("TODO");
    assert_eq!(c.status, Status::Unknown);
    assert!(c.needs_update);

    // A file can be simultaneously usable and flagged for update.
    let c = classify("USABLE FIXME");
    assert_eq!(c.status, Status::Usable);
    assert!(c.needs_update);
}

#[test]
fn test_dependency_terminator_stripping() {
    let c = classify("use Foo\\Bar;");
    assert_eq!(c.dependencies, vec!["Foo\\Bar"]);
}

#[test]
fn test_full_classification_tuple() {
    let c = classify("class SecurityManager { } // CRITICAL TODO");
    assert_eq!(c.category, Category::Security);
    assert_eq!(c.priority, Priority::High);
    assert_eq!(c.status, Status::Unknown);
    assert!(c.needs_update);
    assert!(c.dependencies.is_empty());
}
