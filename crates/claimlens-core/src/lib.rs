//! Client-side submission workflow for the claim analysis service.
//!
//! Everything here is platform-neutral: the file intake is generic over
//! the platform file handle, and the session hands the transport a ticket
//! instead of doing I/O itself. The browser glue lives in the
//! claimlens-wasm crate.

pub mod display;
pub mod error;
pub mod intake;
pub mod session;

pub use display::{ResultDisplay, StatusBanner};
pub use error::{SubmitError, TransferError, UnknownDocumentType, ValidationError};
pub use intake::{format_size_mb, FileIntake};
pub use session::{
    AnalysisSession, SubmissionFailure, SubmissionState, SubmissionTicket, UPLOAD_FAILED_MESSAGE,
};
