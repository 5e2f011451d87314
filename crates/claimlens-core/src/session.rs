//! Submission lifecycle for one upload view.
//!
//! `AnalysisSession` owns the query text, the current `SubmissionState`,
//! and a sequence counter. The transport (browser fetch in the wasm app, a
//! test double here) asks for a `SubmissionTicket`, performs exactly one
//! transfer with it, and reports the outcome back. A resolution is applied
//! only if its ticket is still the newest one issued, so a stale reply from
//! an earlier submission can never overwrite a later one.

use shared_types::{AnalysisReport, DocumentKind, DocumentProfile};

use crate::error::{SubmitError, TransferError, UnknownDocumentType, ValidationError};

/// The one message users see when a transfer fails, whatever the cause.
pub const UPLOAD_FAILED_MESSAGE: &str =
    "Upload failed. Check the connection or the analysis service.";

/// Terminal failure payload: a generic user-facing line plus the real
/// cause for the operator console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub user_message: String,
    pub cause: TransferError,
}

impl SubmissionFailure {
    pub fn from_cause(cause: TransferError) -> Self {
        Self {
            user_message: UPLOAD_FAILED_MESSAGE.to_string(),
            cause,
        }
    }
}

/// Where the current submission stands. Exactly one state is current;
/// only the session transitions it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(AnalysisReport),
    Failed(SubmissionFailure),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// Everything the transport needs for one transfer: the resolved endpoint
/// path, a verbatim snapshot of the query, and the sequence number that
/// keeps its resolution from clobbering a newer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    seq: u64,
    endpoint: &'static str,
    query: String,
}

impl SubmissionTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// The query exactly as typed; trimming is a validation predicate,
    /// not a transformation of what goes on the wire.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Submission state machine for one document-type view.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    profile: &'static DocumentProfile,
    query: String,
    state: SubmissionState,
    next_seq: u64,
    latest_seq: Option<u64>,
    stale_discarded: u64,
}

impl AnalysisSession {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            profile: DocumentProfile::for_kind(kind),
            query: String::new(),
            state: SubmissionState::Idle,
            next_seq: 0,
            latest_seq: None,
            stale_discarded: 0,
        }
    }

    /// Build a session from a navigation key like "pdf". Unknown keys are
    /// a configuration error, terminal for the view.
    pub fn from_key(key: &str) -> Result<Self, UnknownDocumentType> {
        match DocumentKind::parse_key(key) {
            Some(kind) => Ok(Self::new(kind)),
            None => Err(UnknownDocumentType {
                key: key.to_string(),
            }),
        }
    }

    pub fn profile(&self) -> &'static DocumentProfile {
        self.profile
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text verbatim; no trimming, no validation.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// How many resolutions were discarded by the stale guard. Diagnostic
    /// only.
    pub fn stale_discarded(&self) -> u64 {
        self.stale_discarded
    }

    /// Check preconditions and, if they hold, transition to `Submitting`
    /// and issue a ticket for exactly one transfer.
    ///
    /// Rejections leave the state untouched: a missing file or blank
    /// query is an inline validation message, and a call while a request
    /// is in flight is a no-op (never a second request).
    pub fn begin_submission(&mut self, has_file: bool) -> Result<SubmissionTicket, SubmitError> {
        if self.state.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        if !has_file {
            return Err(ValidationError::MissingFile.into());
        }
        if self.query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_seq = Some(seq);
        self.state = SubmissionState::Submitting;

        Ok(SubmissionTicket {
            seq,
            endpoint: self.profile.endpoint,
            query: self.query.clone(),
        })
    }

    /// Apply a transfer outcome. Returns `true` if the resolution was
    /// applied, `false` if the stale guard discarded it (the ticket is no
    /// longer the newest issued, or its submission already settled).
    pub fn complete_submission(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Result<AnalysisReport, TransferError>,
    ) -> bool {
        if !self.state.is_submitting() || self.latest_seq != Some(ticket.seq) {
            self.stale_discarded += 1;
            return false;
        }

        self.state = match outcome {
            Ok(report) => SubmissionState::Succeeded(report),
            Err(cause) => SubmissionState::Failed(SubmissionFailure::from_cause(cause)),
        };
        true
    }
}


#[cfg(test)]
mod session_proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: without a file, no query text ever starts a
        /// submission or changes the state.
        #[test]
        fn no_file_means_no_submission(query in ".*") {
            let mut session = AnalysisSession::new(DocumentKind::Pdf);
            session.set_query(query);
            prop_assert!(session.begin_submission(false).is_err());
            prop_assert_eq!(session.state(), &SubmissionState::Idle);
        }

        /// Property: with a file, a submission starts iff the trimmed
        /// query is non-empty, and the ticket carries the text verbatim.
        #[test]
        fn trimmed_query_gates_the_submission(query in ".*") {
            let mut session = AnalysisSession::new(DocumentKind::Email);
            session.set_query(query.clone());
            match session.begin_submission(true) {
                Ok(ticket) => {
                    prop_assert!(!query.trim().is_empty());
                    prop_assert_eq!(ticket.query(), query.as_str());
                    prop_assert!(session.state().is_submitting());
                }
                Err(_) => {
                    prop_assert!(query.trim().is_empty());
                    prop_assert_eq!(session.state(), &SubmissionState::Idle);
                }
            }
        }
    }
}
