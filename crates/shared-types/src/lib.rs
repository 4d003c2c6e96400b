pub mod catalog;
pub mod types;

pub use catalog::{CatalogError, ComplianceRule, RuleCatalog};
pub use types::{
    Category, Issue, IssueSummary, Recommendation, ScoreStatus, Severity, ValidationResult,
};
