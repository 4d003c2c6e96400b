pub mod error;
pub mod extractors;
pub mod patterns;
pub mod rules;
pub mod scoring;

use std::collections::HashSet;
use std::time::Instant;

use shared_types::{Issue, RuleCatalog, ValidationResult};
use tracing::{debug, info};

pub use error::{CheckError, EngineError};
pub use scoring::calculate_compliance_score;

/// Issues and score for one piece of document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub issues: Vec<Issue>,
    pub score: u8,
}

/// ValidationEngine entry point
///
/// Stateless: the rule catalog is passed into each call, so one engine can
/// serve concurrent evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Runs every check over `text` and scores the collected issues.
    ///
    /// Issues come back in check order: required sections, then metadata,
    /// then content checks.
    pub fn evaluate(
        &self,
        text: &str,
        catalog: Option<&RuleCatalog>,
    ) -> Result<Evaluation, EngineError> {
        let mut issues = Vec::new();

        issues.extend(traced(
            "required-sections",
            rules::structure::check_required_sections(text, catalog),
        ));
        issues.extend(traced("metadata", rules::metadata::check_metadata(text)));
        issues.extend(traced(
            "placeholders",
            rules::placeholders::check_placeholder_text(text),
        ));
        issues.extend(traced(
            "signatures",
            rules::signatures::check_signatures(text),
        ));
        issues.extend(traced("procedure", rules::procedure::check_procedure(text)));

        let references = rules::references::check_references(text)
            .map_err(|e| EngineError::processing("references", e))?;
        issues.extend(traced("references", references));

        ensure_unique_ids(&issues)?;

        let score = calculate_compliance_score(&issues);
        info!(
            "Evaluated {} bytes: {} issues, score {}",
            text.len(),
            issues.len(),
            score
        );

        Ok(Evaluation { issues, score })
    }

    /// Evaluates raw uploaded bytes, rejecting content that is not text
    pub fn evaluate_bytes(
        &self,
        raw: &[u8],
        catalog: Option<&RuleCatalog>,
    ) -> Result<Evaluation, EngineError> {
        self.evaluate(decode_text(raw)?, catalog)
    }

    /// Validates a document's content and stamps the result.
    ///
    /// `None` content means the document has no extracted text and fails
    /// with `InvalidInput`; it never yields an empty, perfect result.
    pub fn validate_document(
        &self,
        document_id: &str,
        content: Option<&str>,
        catalog: Option<&RuleCatalog>,
    ) -> Result<ValidationResult, EngineError> {
        self.validate_bytes(document_id, content.map(str::as_bytes), catalog)
    }

    /// Same as [`validate_document`](Self::validate_document), for content
    /// that has not been decoded yet
    pub fn validate_bytes(
        &self,
        document_id: &str,
        raw: Option<&[u8]>,
        catalog: Option<&RuleCatalog>,
    ) -> Result<ValidationResult, EngineError> {
        let raw = raw.ok_or_else(|| {
            EngineError::InvalidInput(format!("document {} has no text content", document_id))
        })?;

        let started = Instant::now();
        let Evaluation { issues, score } = self.evaluate_bytes(raw, catalog)?;

        Ok(ValidationResult {
            document_id: document_id.to_string(),
            score,
            issues,
            timestamp: chrono::Utc::now(),
            process_time: started.elapsed().as_secs_f64(),
        })
    }

    /// Rule names a catalog can use to reclassify missing-section issues
    pub fn catalog_rule_names(&self) -> Vec<&'static str> {
        patterns::REQUIRED_SECTIONS.iter().map(|s| s.rule).collect()
    }
}

/// Decodes uploaded bytes as document text.
///
/// Invalid UTF-8 and embedded NUL bytes both mark the content as binary.
pub fn decode_text(raw: &[u8]) -> Result<&str, EngineError> {
    let text = std::str::from_utf8(raw).map_err(|e| {
        EngineError::InvalidInput(format!("document content is not valid UTF-8: {}", e))
    })?;
    if text.contains('\0') {
        return Err(EngineError::InvalidInput(
            "document content appears to be binary".to_string(),
        ));
    }
    Ok(text)
}

fn traced<T: IntoIterator<Item = Issue>>(check: &'static str, issues: T) -> Vec<Issue> {
    let issues: Vec<Issue> = issues.into_iter().collect();
    debug!("check {} produced {} issues", check, issues.len());
    issues
}

fn ensure_unique_ids(issues: &[Issue]) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for issue in issues {
        if !seen.insert(issue.id.as_str()) {
            return Err(EngineError::processing(
                "issue-ids",
                CheckError::DuplicateIssueId(issue.id.clone()),
            ));
        }
    }
    Ok(())
}
