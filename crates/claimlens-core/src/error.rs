//! Error types for the submission workflow

use thiserror::Error;

/// Submission preconditions that fail before any network activity.
/// Surfaced inline to the user; the submission state is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a file.")]
    MissingFile,

    #[error("Please enter a query.")]
    EmptyQuery,
}

/// Why a submit call was refused outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A request is already in flight for this session; the call is a
    /// no-op and no second request may be issued.
    #[error("A submission is already in progress.")]
    AlreadySubmitting,
}

/// What actually went wrong during a transfer. Recorded for operator
/// diagnostics; the user only ever sees the generic failure message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service responded with HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// Unknown document-type key. Terminal for the view that tried it; the
/// page falls back to a known-good route instead of rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document type: {key:?}")]
pub struct UnknownDocumentType {
    pub key: String,
}
