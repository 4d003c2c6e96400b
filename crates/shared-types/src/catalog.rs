//! Rule catalog used to enrich issue category and severity

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Category, Severity};

/// A named compliance rule with its default classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRule {
    pub name: String,
    pub category: Category,
    pub severity: Severity,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid rule catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate rule name in catalog: {0}")]
    DuplicateRule(String),
}

/// Read-only lookup table of compliance rules, keyed by rule name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleCatalog {
    rules: Vec<ComplianceRule>,
}

impl RuleCatalog {
    pub fn new(rules: Vec<ComplianceRule>) -> Result<Self, CatalogError> {
        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|r| r.name == rule.name) {
                return Err(CatalogError::DuplicateRule(rule.name.clone()));
            }
        }
        Ok(Self { rules })
    }

    /// Parse a catalog from a JSON array of rules
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let rules: Vec<ComplianceRule> = serde_json::from_str(json)?;
        Self::new(rules)
    }

    pub fn rules(&self) -> &[ComplianceRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find an enabled rule by name; disabled rules are never returned
    pub fn enabled_rule(&self, name: &str) -> Option<&ComplianceRule> {
        self.rules.iter().find(|r| r.enabled && r.name == name)
    }
}
