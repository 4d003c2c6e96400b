// Required-section presence checks
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Category, Issue, RuleCatalog, Severity};

use crate::patterns::{RequiredSection, REQUIRED_SECTIONS};

lazy_static! {
    static ref SECTION_PATTERNS: Vec<(RequiredSection, Regex)> = REQUIRED_SECTIONS
        .iter()
        .map(|section| (*section, Regex::new(section.pattern).unwrap()))
        .collect();
}

/// Flags every required section whose label does not appear in the text.
///
/// Missing sections default to Structure/Critical; an enabled catalog rule
/// with the section's rule name overrides both.
pub fn check_required_sections(text: &str, catalog: Option<&RuleCatalog>) -> Vec<Issue> {
    SECTION_PATTERNS
        .iter()
        .filter(|(_, pattern)| !pattern.is_match(text))
        .map(|(section, _)| {
            let rule = catalog.and_then(|c| c.enabled_rule(section.rule));
            Issue {
                id: format!("missing-{}", section.slug),
                category: rule.map_or(Category::Structure, |r| r.category),
                severity: rule.map_or(Severity::Critical, |r| r.severity),
                description: format!("Missing required section: {}", section.name),
                location: "Document structure".to_string(),
                rule: section.rule.to_string(),
            }
        })
        .collect()
}
