use shared_types::{Category, Issue, Severity};

use crate::patterns::{hyphenate, PLACEHOLDER_PHRASES};

/// Flags each banned placeholder phrase found anywhere in the text.
/// A phrase is reported once no matter how often it occurs.
pub fn check_placeholder_text(text: &str) -> Vec<Issue> {
    let text_lower = text.to_lowercase();

    PLACEHOLDER_PHRASES
        .iter()
        .filter(|phrase| text_lower.contains(*phrase))
        .map(|phrase| Issue {
            id: format!("placeholder-{}", hyphenate(phrase)),
            category: Category::Content,
            severity: Severity::Major,
            description: format!("Contains placeholder text: \"{}\"", phrase),
            location: "Document content".to_string(),
            rule: "No Placeholder Text".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_multiple_phrases() {
        let issues = check_placeholder_text("Lorem ipsum dolor. Owner: TBD");
        let ids: Vec<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["placeholder-tbd", "placeholder-lorem-ipsum"]);
        assert!(issues.iter().all(|i| i.severity == Severity::Major));
    }

    #[test]
    fn test_repeated_phrase_fires_once() {
        let issues = check_placeholder_text("TBD tbd Tbd");
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_multi_word_ids() {
        let issues = check_placeholder_text("Insert text here. To be determined.");
        assert!(issues.iter().any(|i| i.id == "placeholder-insert-text-here"));
        assert!(issues.iter().any(|i| i.id == "placeholder-to-be-determined"));
    }

    #[test]
    fn test_clean_text() {
        assert!(check_placeholder_text("1. Submit the batch record for review.").is_empty());
    }
}
