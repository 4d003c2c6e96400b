//! Record-storage collaborator
//!
//! The real store is a remote service; `DocumentStore` is the seam the
//! pipeline talks to, and `InMemoryDocumentStore` backs the server and tests.

use std::sync::RwLock;

use chrono::Utc;
use thiserror::Error;

use crate::record::{DocumentKind, DocumentRecord, DocumentStatus, NewDocument};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Document with Id {0} not found")]
    NotFound(u64),

    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}

/// Fetch/create/update/delete over document records
pub trait DocumentStore: Send + Sync {
    /// All records, newest first
    fn fetch_all(&self) -> Result<Vec<DocumentRecord>, StoreError>;

    fn fetch(&self, id: u64) -> Result<DocumentRecord, StoreError>;

    /// Stores a new `Processing` record with a fresh id
    fn create(&self, document: NewDocument) -> Result<DocumentRecord, StoreError>;

    /// Replaces the record with the same id
    fn update(&self, record: DocumentRecord) -> Result<DocumentRecord, StoreError>;

    /// Removes and returns the record
    fn delete(&self, id: u64) -> Result<DocumentRecord, StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    // Newest first
    records: RwLock<Vec<DocumentRecord>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("record lock poisoned".to_string())
}

impl DocumentStore for InMemoryDocumentStore {
    fn fetch_all(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        Ok(self.records.read().map_err(poisoned)?.clone())
    }

    fn fetch(&self, id: u64) -> Result<DocumentRecord, StoreError> {
        self.records
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&self, document: NewDocument) -> Result<DocumentRecord, StoreError> {
        let mut records = self.records.write().map_err(poisoned)?;
        let id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);

        let record = DocumentRecord {
            id,
            kind: DocumentKind::from_mime_type(&document.mime_type),
            file_name: document.file_name,
            upload_date: Utc::now(),
            content: document.content,
            status: DocumentStatus::Processing,
            compliance_score: 0,
        };
        records.insert(0, record.clone());

        Ok(record)
    }

    fn update(&self, record: DocumentRecord) -> Result<DocumentRecord, StoreError> {
        let mut records = self.records.write().map_err(poisoned)?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        *slot = record.clone();
        Ok(record)
    }

    fn delete(&self, id: u64) -> Result<DocumentRecord, StoreError> {
        let mut records = self.records.write().map_err(poisoned)?;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(records.remove(index))
    }
}
