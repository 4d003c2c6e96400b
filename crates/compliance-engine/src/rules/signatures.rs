// Signature accountability: every SOP needs a named preparer, reviewer and approver
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Category, Issue, Severity};

use crate::patterns::{contains_ignore_case, MIN_SIGNATURE_CHARS, SIGNATURE_ROLES};

lazy_static! {
    /// "Prepared by: <value>" where the value runs to the end of the line
    static ref SIGNATURE_LINE: Regex =
        Regex::new(r"(?i)\b(prepared|reviewed|approved)[ \t]+by[ \t]*:[ \t]*([^\r\n]*)").unwrap();
}

/// Collects signature lines as (role label, value); the first line for a
/// role wins
fn extract_signatures(text: &str) -> Vec<(&'static str, &str)> {
    let mut found: Vec<(&'static str, &str)> = Vec::new();

    for cap in SIGNATURE_LINE.captures_iter(text) {
        let (Some(role), Some(value)) = (cap.get(1), cap.get(2)) else {
            continue;
        };
        let Some((label, _)) = SIGNATURE_ROLES
            .iter()
            .find(|(label, _)| label.to_lowercase().starts_with(&role.as_str().to_lowercase()))
        else {
            continue;
        };
        if !found.iter().any(|(l, _)| l == label) {
            found.push((*label, value.as_str().trim()));
        }
    }

    found
}

/// Why a signature value is not acceptable, if it is not
fn signature_defect(value: &str) -> Option<&'static str> {
    if contains_ignore_case(value, "tbd") {
        Some("contains TBD")
    } else if value.contains('[') {
        Some("contains an unfilled bracket placeholder")
    } else if value.chars().filter(|c| !c.is_whitespace()).count() < MIN_SIGNATURE_CHARS {
        Some("is too short to identify a signer")
    } else {
        None
    }
}

/// Checks that each signature role is present and filled in
pub fn check_signatures(text: &str) -> Vec<Issue> {
    let signatures = extract_signatures(text);

    SIGNATURE_ROLES
        .iter()
        .filter_map(|(label, slug)| {
            let description = match signatures.iter().find(|(l, _)| l == label) {
                None => format!("Missing \"{}\" signature", label),
                Some((_, value)) => {
                    let defect = signature_defect(value)?;
                    format!("\"{}\" signature {}: \"{}\"", label, defect, value)
                }
            };
            Some(Issue {
                id: format!("missing-{}", slug),
                category: Category::Content,
                severity: Severity::Critical,
                description,
                location: "Approvals".to_string(),
                rule: "Signature Accountability".to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNED: &str = "Prepared by: Jane Smith\nReviewed by: Raj Patel\nApproved by: Li Wei";

    #[test]
    fn test_complete_signatures() {
        assert!(check_signatures(SIGNED).is_empty());
    }

    #[test]
    fn test_missing_roles() {
        let issues = check_signatures("Prepared by: Jane Smith");
        let ids: Vec<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["missing-reviewed-by", "missing-approved-by"]);
    }

    #[test]
    fn test_placeholder_values() {
        let text = "Prepared by: TBD\nReviewed by: [Name]\nApproved by: JD";
        let issues = check_signatures(text);
        assert_eq!(issues.len(), 3);
        assert!(issues[0].description.contains("TBD"));
        assert!(issues[1].description.contains("bracket"));
        assert!(issues[2].description.contains("too short"));
    }

    #[test]
    fn test_empty_value_does_not_borrow_next_line() {
        let text = "Prepared by:\nReviewed by: Raj Patel\nApproved by: Li Wei";
        let issues = check_signatures(text);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "missing-prepared-by");
    }

    #[test]
    fn test_roles_are_case_insensitive() {
        let text = "PREPARED BY: Jane Smith\nreviewed by: Raj Patel\nApproved By: Li Wei";
        assert!(check_signatures(text).is_empty());
    }
}
