//! Section labels, keyword lists and shared text helpers

/// A section every SOP must label
#[derive(Debug, Clone, Copy)]
pub struct RequiredSection {
    /// Suffix of the issue id (`missing-<slug>`)
    pub slug: &'static str,
    /// Human-readable section name
    pub name: &'static str,
    /// Rule catalog name used for category/severity enrichment
    pub rule: &'static str,
    /// Case-insensitive label pattern
    pub pattern: &'static str,
}

/// Required sections, in reporting order
pub const REQUIRED_SECTIONS: &[RequiredSection] = &[
    RequiredSection {
        slug: "title",
        name: "Title",
        rule: "Required Title Section",
        pattern: r"(?i)\btitle\s*:",
    },
    RequiredSection {
        slug: "document-id",
        name: "Document ID",
        rule: "Document ID Section",
        pattern: r"(?i)\bdocument\s+id\s*:",
    },
    RequiredSection {
        slug: "version-label",
        name: "Version/Revision",
        rule: "Version Section",
        pattern: r"(?i)\b(?:version|revision)\s*:",
    },
    RequiredSection {
        slug: "effective-date-label",
        name: "Effective Date",
        rule: "Effective Date Section",
        pattern: r"(?i)\beffective\s+date\s*:",
    },
    RequiredSection {
        slug: "purpose",
        name: "Purpose",
        rule: "Purpose Section",
        pattern: r"(?i)\bpurpose\s*:",
    },
    RequiredSection {
        slug: "scope",
        name: "Scope",
        rule: "Scope Section",
        pattern: r"(?i)\bscope\s*:",
    },
    RequiredSection {
        slug: "responsibilities",
        name: "Responsibilities",
        rule: "Responsibilities Section",
        pattern: r"(?i)\bresponsibilities\s*:",
    },
    RequiredSection {
        slug: "definitions",
        name: "Definitions",
        rule: "Definitions Section",
        pattern: r"(?i)\bdefinitions\s*:",
    },
    RequiredSection {
        slug: "procedure",
        name: "Procedure",
        rule: "Procedure Section",
        pattern: r"(?i)\bprocedures?\s*:",
    },
    RequiredSection {
        slug: "references",
        name: "References",
        rule: "References Section",
        pattern: r"(?i)\breferences\s*:",
    },
    RequiredSection {
        slug: "revision-history",
        name: "Revision History",
        rule: "Revision History",
        pattern: r"(?i)\brevision\s+history\s*:",
    },
    RequiredSection {
        slug: "approvals",
        name: "Approvals",
        rule: "Approval Signatures",
        pattern: r"(?i)\b(?:prepared|reviewed|approved)\s+by\b",
    },
];

/// Incomplete-content markers that must not appear in a finalized document
pub const PLACEHOLDER_PHRASES: &[&str] = &[
    "tbd",
    "lorem ipsum",
    "placeholder",
    "[empty]",
    "to be determined",
    "insert text here",
];

/// Markers that make a revision history entry incomplete
pub const REVISION_PLACEHOLDERS: &[&str] = &["[empty]", "tbd"];

/// Verbs expected in procedure steps
pub const ACTION_VERBS: &[&str] = &[
    "submit", "review", "approve", "verify", "document", "record", "check", "validate",
    "ensure", "complete", "perform",
];

/// Signature roles, as (label, id slug)
pub const SIGNATURE_ROLES: &[(&str, &str)] = &[
    ("Prepared by", "prepared-by"),
    ("Reviewed by", "reviewed-by"),
    ("Approved by", "approved-by"),
];

/// Minimum number of numbered procedure steps
pub const MIN_PROCEDURE_STEPS: usize = 3;

/// References published before this year are considered outdated
pub const REFERENCE_CUTOFF_YEAR: u16 = 2010;

/// Minimum non-whitespace characters in a signature value
pub const MIN_SIGNATURE_CHARS: usize = 3;

/// Replace each run of whitespace with a single hyphen
pub fn hyphenate(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Case-insensitive substring test
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(&needle.to_lowercase())
}
