pub mod document;
pub mod report;

pub use document::{DocumentKind, DocumentProfile};
pub use report::{Amount, AnalysisReport, ServiceHealth, Verdict};
