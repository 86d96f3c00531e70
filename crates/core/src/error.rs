//! Unified error types for boj2md.
//!
//! Every variant renders with a stable upper-case code prefix so the cause
//! of a failed run is obvious from the first word on stderr.

/// Unified error types for the fetch → extract → render pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty problem identifier).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Invalid judge base URL or problem URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response or transport failure.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Fetch timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Fetch response too large.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),

    /// A required element is absent from the problem page.
    #[error("MISSING_ELEMENT: no element matches `{0}`")]
    MissingElement(String),

    /// Content extraction failed.
    #[error("EXTRACT_FAILED: {0}")]
    ExtractFailed(String),
}

impl Error {
    /// Whether the error means the page no longer has the expected shape.
    pub fn is_structure_error(&self) -> bool {
        matches!(self, Error::MissingElement(_))
    }
}
