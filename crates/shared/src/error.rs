use thiserror::Error;

/// Failure taxonomy for the briefing pipeline and store.
///
/// The boundary layers map these onto HTTP statuses: `InvalidInput` is a
/// caller mistake (400), everything else is a server-side failure (500).
#[derive(Debug, Error)]
pub enum BriefingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("extraction failed: {0}")]
    Extraction(String),
    #[error("processing failed: {0}")]
    Processing(String),
    #[error("persistence failed: {0}")]
    Persistence(String),
}
