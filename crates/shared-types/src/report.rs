//! The analysis service's response shape, normalized.
//!
//! The service is not contractually obliged to populate any field, so every
//! field is optional and normalization is total: any JSON document maps to
//! an `AnalysisReport` without error. The only failure mode is a body that
//! is not JSON at all.

use serde::Serialize;
use serde_json::Value;

/// Normalized decision payload for one submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Echo of the submitted query, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_query: Option<String>,
    /// Clauses the service matched, in relevance order. `None` when the
    /// field was absent, `Some(vec![])` when present but empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_clauses: Option<Vec<String>>,
    #[serde(rename = "LLM_response", skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

/// The decision triple nested under the wire field `LLM_response`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Verdict {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

/// The service emits amounts either as a string ("₹50000", "N/A") or as a
/// bare number, depending on what its model produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(f64),
}

impl Amount {
    pub fn display(&self) -> String {
        match self {
            Amount::Text(text) => text.clone(),
            Amount::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                format!("{}", *n as i64)
            }
            Amount::Number(n) => format!("{}", n),
        }
    }
}

impl AnalysisReport {
    /// Normalize an already-parsed JSON document. Total: wrong-typed or
    /// missing fields come out as `None`, never as an error.
    pub fn from_value(value: &Value) -> AnalysisReport {
        AnalysisReport {
            message: string_field(value, "message"),
            user_query: string_field(value, "user_query"),
            matched_clauses: value
                .get("matched_clauses")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect()
                }),
            verdict: value.get("LLM_response").map(Verdict::from_value),
        }
    }

    /// Parse a response body. Fails only on malformed JSON text.
    pub fn parse(body: &str) -> Result<AnalysisReport, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Ok(AnalysisReport::from_value(&value))
    }

    /// True when the service said nothing at all.
    pub fn is_empty(&self) -> bool {
        self.message.is_none()
            && self.user_query.is_none()
            && self.matched_clauses.is_none()
            && self.verdict.is_none()
    }
}

impl Verdict {
    pub fn from_value(value: &Value) -> Verdict {
        Verdict {
            decision: string_field(value, "decision"),
            amount: match value.get("amount") {
                Some(Value::String(text)) => Some(Amount::Text(text.clone())),
                Some(Value::Number(n)) => n.as_f64().map(Amount::Number),
                _ => None,
            },
            justification: string_field(value, "justification"),
        }
    }
}

/// Permissively parsed `GET /health` body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ServiceHealth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_loaded: Option<bool>,
}

impl ServiceHealth {
    pub fn from_value(value: &Value) -> ServiceHealth {
        ServiceHealth {
            status: string_field(value, "status"),
            model_loaded: value.get("model_loaded").and_then(Value::as_bool),
        }
    }

    pub fn parse(body: &str) -> Result<ServiceHealth, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Ok(ServiceHealth::from_value(&value))
    }

    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some("healthy")
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}
