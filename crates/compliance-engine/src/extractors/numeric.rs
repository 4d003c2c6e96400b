// Numeric extraction utilities for compliance validation
use std::num::ParseIntError;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Standalone four-digit years, not embedded in longer numbers
    static ref YEAR_PATTERN: Regex = Regex::new(r"\b[0-9]{4}\b").unwrap();

    /// Numbered, capitalized procedure steps ("1. Submit ...")
    static ref STEP_PATTERN: Regex = Regex::new(r"\d+\.\s+[A-Z]").unwrap();
}

/// Extracts every year mentioned in the text, in order of appearance
pub fn extract_years(text: &str) -> Result<Vec<u16>, ParseIntError> {
    YEAR_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().parse::<u16>())
        .collect()
}

/// Counts numbered procedure steps that start with a capital letter
pub fn count_numbered_steps(text: &str) -> usize {
    STEP_PATTERN.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_years() {
        assert_eq!(extract_years("ISO 13485:2016").unwrap(), vec![2016]);
        assert_eq!(
            extract_years("21 CFR Part 11 (1997), ICH Q9 (2005)").unwrap(),
            vec![1997, 2005]
        );
        assert_eq!(extract_years("USP (1820)").unwrap(), vec![1820]);
        assert!(extract_years("Company quality manual, rev 12").unwrap().is_empty());
        // Digits inside longer numbers are not years
        assert!(extract_years("Lot 120165").unwrap().is_empty());
    }

    #[test]
    fn test_count_numbered_steps() {
        assert_eq!(
            count_numbered_steps("1. Submit form\n2. Review form\n3. Approve form"),
            3
        );
        // Lowercase step text does not count
        assert_eq!(count_numbered_steps("1. submit\n2. review"), 0);
        // Version numbers are not steps
        assert_eq!(count_numbered_steps("Version: 1.0"), 0);
    }
}
