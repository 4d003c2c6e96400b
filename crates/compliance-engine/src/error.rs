use thiserror::Error;

/// Errors surfaced by the validation engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to validate document content in check '{check}': {source}")]
    Processing {
        check: &'static str,
        #[source]
        source: CheckError,
    },
}

/// Internal failure of a single check
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("could not parse number: {0}")]
    ParseNumber(#[from] std::num::ParseIntError),

    #[error("duplicate issue id '{0}'")]
    DuplicateIssueId(String),
}

impl EngineError {
    pub(crate) fn processing(check: &'static str, source: impl Into<CheckError>) -> Self {
        EngineError::Processing {
            check,
            source: source.into(),
        }
    }
}
