use serde::{Deserialize, Serialize};

/// The document categories the analysis service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Word,
    Email,
}

impl DocumentKind {
    /// Parse a navigation key like "pdf" into a kind.
    ///
    /// Returns `None` for anything unrecognized; the caller decides how to
    /// surface that (a view-level fallback, never a panic).
    pub fn parse_key(key: &str) -> Option<DocumentKind> {
        match key.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "word" => Some(DocumentKind::Word),
            "email" => Some(DocumentKind::Email),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Word => "word",
            DocumentKind::Email => "email",
        }
    }
}

/// Static per-kind upload configuration: what the page shows, which files
/// the picker suggests, and where the submission goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentProfile {
    pub kind: DocumentKind,
    pub title: &'static str,
    pub description: &'static str,
    /// Comma-separated extension filter for the picker `accept` attribute.
    /// Advisory only; nothing rejects a file based on its name.
    pub accept: &'static str,
    /// Path appended to the service base URL for this kind.
    pub endpoint: &'static str,
}

const PDF_PROFILE: DocumentProfile = DocumentProfile {
    kind: DocumentKind::Pdf,
    title: "PDF Document Upload",
    description: "Upload your insurance PDF documents for analysis",
    accept: ".pdf",
    endpoint: "/upload-pdf",
};

const WORD_PROFILE: DocumentProfile = DocumentProfile {
    kind: DocumentKind::Word,
    title: "Word Document Upload",
    description: "Upload your Word documents and reports",
    accept: ".doc,.docx",
    endpoint: "/upload-docs",
};

// The deployed service has no dedicated email endpoint; email files go
// through the PDF pipeline. Centralized here so a future `/upload-email`
// is a one-line change.
const EMAIL_PROFILE: DocumentProfile = DocumentProfile {
    kind: DocumentKind::Email,
    title: "Email Analysis",
    description: "Upload email files for insurance correspondence analysis",
    accept: ".eml,.msg,.txt",
    endpoint: "/upload-pdf",
};

impl DocumentProfile {
    pub const fn for_kind(kind: DocumentKind) -> &'static DocumentProfile {
        match kind {
            DocumentKind::Pdf => &PDF_PROFILE,
            DocumentKind::Word => &WORD_PROFILE,
            DocumentKind::Email => &EMAIL_PROFILE,
        }
    }

    /// Profile lookup straight from a navigation key.
    pub fn for_key(key: &str) -> Option<&'static DocumentProfile> {
        DocumentKind::parse_key(key).map(DocumentProfile::for_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_accepts_known_kinds() {
        assert_eq!(DocumentKind::parse_key("pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::parse_key("word"), Some(DocumentKind::Word));
        assert_eq!(DocumentKind::parse_key("email"), Some(DocumentKind::Email));
    }

    #[test]
    fn parse_key_is_case_and_whitespace_tolerant() {
        assert_eq!(DocumentKind::parse_key(" PDF "), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::parse_key("Word"), Some(DocumentKind::Word));
    }

    #[test]
    fn parse_key_rejects_unknown_kinds() {
        assert_eq!(DocumentKind::parse_key("spreadsheet"), None);
        assert_eq!(DocumentKind::parse_key(""), None);
    }

    #[test]
    fn every_kind_has_a_profile() {
        for kind in [DocumentKind::Pdf, DocumentKind::Word, DocumentKind::Email] {
            let profile = DocumentProfile::for_kind(kind);
            assert_eq!(profile.kind, kind);
            assert!(!profile.title.is_empty());
            assert!(profile.endpoint.starts_with('/'));
        }
    }

    #[test]
    fn email_routes_through_the_pdf_endpoint() {
        assert_eq!(
            DocumentProfile::for_kind(DocumentKind::Email).endpoint,
            DocumentProfile::for_kind(DocumentKind::Pdf).endpoint,
        );
    }

    #[test]
    fn word_has_its_own_endpoint() {
        assert_eq!(
            DocumentProfile::for_kind(DocumentKind::Word).endpoint,
            "/upload-docs"
        );
    }

    #[test]
    fn for_key_resolves_profiles() {
        assert_eq!(
            DocumentProfile::for_key("email").map(|p| p.accept),
            Some(".eml,.msg,.txt")
        );
        assert!(DocumentProfile::for_key("xls").is_none());
    }
}
