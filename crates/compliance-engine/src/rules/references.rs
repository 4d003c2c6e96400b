// Reference citations must be dated and current
use std::num::ParseIntError;

use shared_types::{Category, Issue, Severity};

use crate::extractors::blocks::{section_block, REFERENCES_LABEL};
use crate::extractors::numeric::extract_years;
use crate::patterns::REFERENCE_CUTOFF_YEAR;

/// Checks year presence and staleness within the references block.
///
/// Both checks are skipped when there is no references section; the
/// required-section check already reports that.
pub fn check_references(text: &str) -> Result<Vec<Issue>, ParseIntError> {
    let mut issues = Vec::new();

    let Some(block) = section_block(text, &REFERENCES_LABEL) else {
        return Ok(issues);
    };
    let years = extract_years(block)?;

    if years.is_empty() {
        issues.push(Issue {
            id: "missing-reference-years".to_string(),
            category: Category::Content,
            severity: Severity::Major,
            description: "References must include publication years".to_string(),
            location: "References section".to_string(),
            rule: "References Section".to_string(),
        });
    }

    let mut outdated: Vec<u16> = Vec::new();
    for year in years.into_iter().filter(|y| *y < REFERENCE_CUTOFF_YEAR) {
        if !outdated.contains(&year) {
            outdated.push(year);
        }
    }

    if !outdated.is_empty() {
        let listed = outdated
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        issues.push(Issue {
            id: "outdated-references".to_string(),
            category: Category::Content,
            severity: Severity::Minor,
            description: format!(
                "References published before {} should be reviewed for currency: {}",
                REFERENCE_CUTOFF_YEAR, listed
            ),
            location: "References section".to_string(),
            rule: "Current References".to_string(),
        });
    }

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_reference_passes() {
        assert!(check_references("References: ISO 13485:2016").unwrap().is_empty());
    }

    #[test]
    fn test_missing_years() {
        let issues = check_references("References: Company quality manual").unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "missing-reference-years");
        assert_eq!(issues[0].severity, Severity::Major);
    }

    #[test]
    fn test_outdated_years_listed_once() {
        let text = "References:\nGAMP Guide (2000)\nOld memo (1998)\nGAMP Guide (2000) reprint";
        let issues = check_references(text).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "outdated-references");
        assert!(issues[0].description.ends_with("2000, 1998"));
    }

    #[test]
    fn test_pre_1900_reference_is_outdated_not_undated() {
        let issues =
            check_references("References: United States Pharmacopeia (1820)").unwrap();
        let ids: Vec<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["outdated-references"]);
        assert!(issues[0].description.ends_with("1820"));
    }

    #[test]
    fn test_cutoff_year_is_current() {
        assert!(check_references("References: EU GMP Annex 11 (2010)")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_no_references_section() {
        assert!(check_references("Purpose: nothing cited").unwrap().is_empty());
    }
}
