//! Upload orchestration for SOP documents
//!
//! Stores an uploaded document, runs the validation engine exactly once,
//! and records the outcome on the document. The engine itself knows nothing
//! about documents or persistence.

pub mod record;
pub mod store;

use std::sync::Arc;

use compliance_engine::{EngineError, ValidationEngine};
use serde::Serialize;
use shared_types::{RuleCatalog, ValidationResult};
use thiserror::Error;
use tracing::{info, warn};

pub use record::{DocumentKind, DocumentRecord, DocumentStatus, NewDocument};
pub use store::{DocumentStore, InMemoryDocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid document ID format: {0}")]
    InvalidId(String),

    #[error("Document with Id {0} not found")]
    NotFound(u64),

    #[error("Document validation failed: {0}")]
    ValidationFailed(#[source] EngineError),

    #[error("{0}")]
    Store(StoreError),
}

impl From<StoreError> for PipelineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => PipelineError::NotFound(id),
            other => PipelineError::Store(other),
        }
    }
}

/// A stored document together with the result that scored it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub document: DocumentRecord,
    pub validation_result: ValidationResult,
}

/// Parses a document id as received from callers
pub fn parse_document_id(id: &str) -> Result<u64, PipelineError> {
    id.trim()
        .parse()
        .map_err(|_| PipelineError::InvalidId(id.to_string()))
}

pub struct UploadPipeline<S: DocumentStore> {
    store: S,
    engine: ValidationEngine,
    catalog: Option<Arc<RuleCatalog>>,
}

impl<S: DocumentStore> UploadPipeline<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            engine: ValidationEngine::new(),
            catalog: None,
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<RuleCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> Option<&RuleCatalog> {
        self.catalog.as_deref()
    }

    /// Stores the document as `Processing`, validates it, and marks it
    /// `Completed` with its score or `Failed` with score 0
    pub fn upload(
        &self,
        file_name: &str,
        mime_type: &str,
        content: Option<String>,
    ) -> Result<UploadOutcome, PipelineError> {
        let record = self.store.create(NewDocument {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            content,
        })?;
        info!("Stored document {} ({})", record.id, record.file_name);

        self.validate_record(record)
    }

    /// Like [`upload`](Self::upload), for content received as raw bytes.
    ///
    /// Bytes that are not text are still stored (without content) so the
    /// failed upload stays visible; the record is marked `Failed`.
    pub fn upload_bytes(
        &self,
        file_name: &str,
        mime_type: &str,
        raw: &[u8],
    ) -> Result<UploadOutcome, PipelineError> {
        let record = self.store.create(NewDocument {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            content: std::str::from_utf8(raw).ok().map(str::to_string),
        })?;
        info!(
            "Stored document {} ({}, {} bytes)",
            record.id,
            record.file_name,
            raw.len()
        );

        self.validate_content(record, Some(raw))
    }

    /// Re-runs validation on a stored document, producing a fresh result
    pub fn revalidate(&self, id: u64) -> Result<UploadOutcome, PipelineError> {
        let mut record = self.store.fetch(id)?;
        record.status = DocumentStatus::Processing;
        let record = self.store.update(record)?;

        self.validate_record(record)
    }

    pub fn list_documents(&self) -> Result<Vec<DocumentRecord>, PipelineError> {
        Ok(self.store.fetch_all()?)
    }

    pub fn get_document(&self, id: &str) -> Result<DocumentRecord, PipelineError> {
        Ok(self.store.fetch(parse_document_id(id)?)?)
    }

    pub fn delete_document(&self, id: &str) -> Result<DocumentRecord, PipelineError> {
        let record = self.store.delete(parse_document_id(id)?)?;
        info!("Deleted document {}", record.id);
        Ok(record)
    }

    fn validate_record(&self, record: DocumentRecord) -> Result<UploadOutcome, PipelineError> {
        let content = record.content.clone();
        self.validate_content(record, content.as_deref().map(str::as_bytes))
    }

    fn validate_content(
        &self,
        record: DocumentRecord,
        raw: Option<&[u8]>,
    ) -> Result<UploadOutcome, PipelineError> {
        let document_id = record.id.to_string();
        let validation = self
            .engine
            .validate_bytes(&document_id, raw, self.catalog());

        match validation {
            Ok(validation_result) => {
                let document = self.store.update(DocumentRecord {
                    status: DocumentStatus::Completed,
                    compliance_score: validation_result.score,
                    ..record
                })?;
                info!(
                    "Document {} validated: score {}, {} issues",
                    document.id,
                    validation_result.score,
                    validation_result.issues.len()
                );
                Ok(UploadOutcome {
                    document,
                    validation_result,
                })
            }
            Err(err) => {
                warn!("Document {} validation failed: {}", record.id, err);
                self.store.update(DocumentRecord {
                    status: DocumentStatus::Failed,
                    compliance_score: 0,
                    ..record
                })?;
                Err(PipelineError::ValidationFailed(err))
            }
        }
    }
}
