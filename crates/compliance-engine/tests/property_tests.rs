//! Property-based tests for the validation engine
//!
//! Covers the score bounds, idempotence, monotonic scoring and the
//! guarantee that well-formed text never fails evaluation.

use compliance_engine::{calculate_compliance_score, ValidationEngine};
use proptest::prelude::*;
use shared_types::{Category, Issue, Severity};

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Critical),
        Just(Severity::Major),
        Just(Severity::Minor),
    ]
}

fn issue_list(max: usize) -> impl Strategy<Value = Vec<Issue>> {
    prop::collection::vec(severity(), 0..max).prop_map(|severities| {
        severities
            .into_iter()
            .enumerate()
            .map(|(n, severity)| Issue {
                id: format!("generated-{}", n),
                category: Category::Content,
                severity,
                description: String::new(),
                location: String::new(),
                rule: String::new(),
            })
            .collect()
    })
}

/// Text assembled from SOP-like fragments, so labels and placeholders
/// actually show up
fn sop_like_text() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("Title: Cleaning\n".to_string()),
        Just("Document ID: SOP-001\n".to_string()),
        Just("Version: 2.1\n".to_string()),
        Just("Effective Date: 2023-06-01\n".to_string()),
        Just("Purpose: TBD\n".to_string()),
        Just("Procedure:\n1. Submit form.\n2. Review form.\n".to_string()),
        Just("References: Guide (1998)\n".to_string()),
        Just("Revision History: [Empty]\n".to_string()),
        Just("Prepared by: Jane Smith\n".to_string()),
        Just("Approved by: [Name]\n".to_string()),
        Just("\n".to_string()),
        "[a-zA-Z0-9 .,:()\\-]{0,40}\n",
    ];
    prop::collection::vec(fragment, 0..20).prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: score stays within 0..=100 and is 100 only without issues
    #[test]
    fn score_is_bounded(text in sop_like_text()) {
        let evaluation = ValidationEngine::new().evaluate(&text, None).unwrap();
        prop_assert!(evaluation.score <= 100);
        prop_assert_eq!(evaluation.score == 100, evaluation.issues.is_empty());
    }

    /// Property: arbitrary text never fails evaluation
    #[test]
    fn arbitrary_text_never_errors(text in "\\PC{0,300}") {
        prop_assert!(ValidationEngine::new().evaluate(&text, None).is_ok());
    }

    /// Property: identical input yields identical issues and score
    #[test]
    fn evaluation_is_idempotent(text in sop_like_text()) {
        let engine = ValidationEngine::new();
        let first = engine.evaluate(&text, None).unwrap();
        let second = engine.evaluate(&text, None).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: issue ids are unique within one evaluation
    #[test]
    fn issue_ids_are_unique(text in sop_like_text()) {
        let evaluation = ValidationEngine::new().evaluate(&text, None).unwrap();
        let mut ids: Vec<_> = evaluation.issues.iter().map(|i| i.id.clone()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    /// Property: adding an issue never raises the score
    #[test]
    fn score_is_monotonic(issues in issue_list(40), extra in severity()) {
        let before = calculate_compliance_score(&issues);
        let mut more = issues.clone();
        more.push(Issue {
            id: "extra".to_string(),
            category: Category::Metadata,
            severity: extra,
            description: String::new(),
            location: String::new(),
            rule: String::new(),
        });
        prop_assert!(calculate_compliance_score(&more) <= before);
    }

    /// Property: score equals 100 - 5 * total weight, floored at zero
    #[test]
    fn score_matches_weight_formula(issues in issue_list(40)) {
        let weight: u32 = issues.iter().map(|i| i.severity.weight()).sum();
        let expected = 100i64 - 5 * i64::from(weight);
        prop_assert_eq!(i64::from(calculate_compliance_score(&issues)), expected.max(0));
    }

    /// Property: a banned phrase anywhere in the text is always reported
    #[test]
    fn placeholder_phrases_always_detected(
        prefix in "[a-z ]{0,30}",
        phrase in prop_oneof![
            Just("lorem ipsum"),
            Just("Placeholder"),
            Just("INSERT TEXT HERE"),
            Just("to be determined"),
        ],
    ) {
        let text = format!("{} {}", prefix, phrase);
        let evaluation = ValidationEngine::new().evaluate(&text, None).unwrap();
        let id = format!("placeholder-{}", phrase.to_lowercase().replace(' ', "-"));
        prop_assert!(evaluation.issues.iter().any(|i| i.id == id), "expected {}", id);
    }
}
