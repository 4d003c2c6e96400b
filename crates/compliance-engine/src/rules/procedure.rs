// Procedure quality: step count and action-oriented language
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Category, Issue, Severity};

use crate::extractors::blocks::{section_block, PROCEDURE_LABEL};
use crate::extractors::numeric::count_numbered_steps;
use crate::patterns::{ACTION_VERBS, MIN_PROCEDURE_STEPS};

lazy_static! {
    static ref ACTION_VERB_PATTERN: Regex =
        Regex::new(&format!(r"(?i)\b(?:{})", ACTION_VERBS.join("|"))).unwrap();
}

pub fn check_procedure(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    issues.extend(check_step_count(text));
    issues.extend(check_action_language(text));

    issues
}

/// Counts numbered steps across the whole document
pub fn check_step_count(text: &str) -> Option<Issue> {
    let steps = count_numbered_steps(text);
    if steps >= MIN_PROCEDURE_STEPS {
        return None;
    }
    Some(Issue {
        id: "insufficient-steps".to_string(),
        category: Category::Content,
        severity: Severity::Critical,
        description: format!(
            "Procedure section must contain at least {} numbered steps (found: {})",
            MIN_PROCEDURE_STEPS, steps
        ),
        location: "Procedure section".to_string(),
        rule: "Procedure Section".to_string(),
    })
}

/// Procedure text should tell the reader what to do.
///
/// Runs only when a procedure block exists; a missing procedure section is
/// reported by the required-section check.
pub fn check_action_language(text: &str) -> Option<Issue> {
    let block = section_block(text, &PROCEDURE_LABEL)?;
    if ACTION_VERB_PATTERN.is_match(block) {
        return None;
    }
    Some(Issue {
        id: "weak-procedure-language".to_string(),
        category: Category::Content,
        severity: Severity::Minor,
        description: format!(
            "Procedure steps should use action verbs such as: {}",
            ACTION_VERBS.join(", ")
        ),
        location: "Procedure section".to_string(),
        rule: "Action-Oriented Procedure".to_string(),
    })
}
