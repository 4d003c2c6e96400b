// Document header metadata: id, version, effective date, revision history
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Category, Issue, Severity};

use crate::extractors::blocks::{section_block, REVISION_HISTORY_LABEL};
use crate::patterns::{contains_ignore_case, REVISION_PLACEHOLDERS};

lazy_static! {
    static ref DOC_ID_PATTERN: Regex = Regex::new(r"(?i)\bSOP-\d{3}\b").unwrap();
    static ref VERSION_PATTERN: Regex =
        Regex::new(r"(?i)\b(?:version|revision)\s*:\s*\d+\.\d+").unwrap();
    static ref EFFECTIVE_DATE_PATTERN: Regex =
        Regex::new(r"(?i)\beffective\s+date\s*:\s*\d{4}-\d{2}-\d{2}\b").unwrap();
}

/// Runs every metadata check in order
pub fn check_metadata(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    issues.extend(check_document_id(text));
    issues.extend(check_version(text));
    issues.extend(check_effective_date(text));
    issues.extend(check_revision_history(text));

    issues
}

/// Document ID must follow SOP-### (exactly three digits)
pub fn check_document_id(text: &str) -> Option<Issue> {
    if DOC_ID_PATTERN.is_match(text) {
        return None;
    }
    Some(Issue {
        id: "invalid-doc-id".to_string(),
        category: Category::Metadata,
        severity: Severity::Critical,
        description: "Document ID must follow SOP-### format".to_string(),
        location: "Document header".to_string(),
        rule: "Document ID Format".to_string(),
    })
}

pub fn check_version(text: &str) -> Option<Issue> {
    if VERSION_PATTERN.is_match(text) {
        return None;
    }
    Some(Issue {
        id: "missing-version".to_string(),
        category: Category::Metadata,
        severity: Severity::Critical,
        description: "Version or revision number must be stated as \"Version: X.Y\"".to_string(),
        location: "Document header".to_string(),
        rule: "Version Control".to_string(),
    })
}

pub fn check_effective_date(text: &str) -> Option<Issue> {
    if EFFECTIVE_DATE_PATTERN.is_match(text) {
        return None;
    }
    Some(Issue {
        id: "missing-effective-date".to_string(),
        category: Category::Metadata,
        severity: Severity::Critical,
        description: "Effective date must be in YYYY-MM-DD format".to_string(),
        location: "Document metadata".to_string(),
        rule: "Effective Date".to_string(),
    })
}

/// Revision history must exist and carry a real entry
pub fn check_revision_history(text: &str) -> Option<Issue> {
    let description = match section_block(text, &REVISION_HISTORY_LABEL) {
        None => "Revision history section is missing".to_string(),
        Some(block) if block.trim().is_empty() => {
            "Revision history has no entries".to_string()
        }
        Some(block) => {
            let marker = REVISION_PLACEHOLDERS
                .iter()
                .find(|marker| contains_ignore_case(block, marker))?;
            format!(
                "Revision history contains placeholder entry: \"{}\"",
                marker
            )
        }
    };

    Some(Issue {
        id: "incomplete-revision-history".to_string(),
        category: Category::Metadata,
        severity: Severity::Critical,
        description,
        location: "Revision History".to_string(),
        rule: "Revision History".to_string(),
    })
}
