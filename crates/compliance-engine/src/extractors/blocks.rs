//! Section block extraction
//!
//! A block is the text that follows a section label: the remainder of the
//! label's own line plus every following line, up to (not including) the
//! first blank line or the next capitalized section header.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A capitalized label ending in a colon, e.g. "Prepared by:" or "Scope:"
    static ref SECTION_HEADER: Regex = Regex::new(r"^\s*[A-Z][A-Za-z /&()-]{0,40}:").unwrap();

    pub static ref PROCEDURE_LABEL: Regex = Regex::new(r"(?i)\bprocedures?\s*:").unwrap();
    pub static ref REFERENCES_LABEL: Regex = Regex::new(r"(?i)\breferences\s*:").unwrap();
    pub static ref REVISION_HISTORY_LABEL: Regex =
        Regex::new(r"(?i)\brevision\s+history\s*:").unwrap();
}

/// Returns the block following the first match of `label`, or `None` when
/// the label does not appear
pub fn section_block<'a>(text: &'a str, label: &Regex) -> Option<&'a str> {
    let start = label.find(text)?.end();
    let rest = &text[start..];

    let mut offset = 0;
    for (index, line) in rest.split_inclusive('\n').enumerate() {
        if index > 0 && (line.trim().is_empty() || SECTION_HEADER.is_match(line)) {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }

    Some(rest)
}
