//! Pure projection from the submission state to display fields.

use serde::Serialize;

use crate::session::SubmissionState;

/// Status line shown above the result regions. Absent once a result is
/// ready; the result card speaks for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBanner {
    Idle,
    Loading,
    Error,
}

/// What the result pane renders. A pure function of `SubmissionState`:
/// absent fields stay absent (the page omits the region), they are never
/// replaced by placeholder text.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResultDisplay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<StatusBanner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_query: Option<String>,
    /// Ordered list; empty and absent both render as no items.
    pub matched_clauses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl ResultDisplay {
    pub fn project(state: &SubmissionState) -> ResultDisplay {
        match state {
            SubmissionState::Idle => ResultDisplay {
                banner: Some(StatusBanner::Idle),
                ..ResultDisplay::default()
            },
            SubmissionState::Submitting => ResultDisplay {
                banner: Some(StatusBanner::Loading),
                ..ResultDisplay::default()
            },
            SubmissionState::Failed(failure) => ResultDisplay {
                banner: Some(StatusBanner::Error),
                error_message: Some(failure.user_message.clone()),
                ..ResultDisplay::default()
            },
            SubmissionState::Succeeded(report) => ResultDisplay {
                banner: None,
                error_message: None,
                message: report.message.clone(),
                user_query: report.user_query.clone(),
                matched_clauses: report.matched_clauses.clone().unwrap_or_default(),
                decision: report
                    .verdict
                    .as_ref()
                    .and_then(|v| v.decision.clone()),
                amount: report
                    .verdict
                    .as_ref()
                    .and_then(|v| v.amount.as_ref())
                    .map(|a| a.display()),
                justification: report
                    .verdict
                    .as_ref()
                    .and_then(|v| v.justification.clone()),
            },
        }
    }

    /// True when nothing result-shaped should be rendered yet.
    pub fn has_result(&self) -> bool {
        self.message.is_some()
            || self.user_query.is_some()
            || !self.matched_clauses.is_empty()
            || self.decision.is_some()
            || self.amount.is_some()
            || self.justification.is_some()
    }
}
