//! Dossier documents attached to nodes
//!
//! A document has no identity outside the node that owns it. Documents are
//! produced once, when their owner is created, and never mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of simulated record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    Report,
    Memo,
    Brief,
    Log,
    Blueprint,
    Transcript,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Report => "REPORT",
            DocumentKind::Memo => "MEMO",
            DocumentKind::Brief => "BRIEF",
            DocumentKind::Log => "LOG",
            DocumentKind::Blueprint => "BLUEPRINT",
            DocumentKind::Transcript => "TRANSCRIPT",
        };
        f.write_str(name)
    }
}

/// A dossier item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,

    pub title: String,

    #[serde(rename = "type")]
    pub kind: DocumentKind,

    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Free-text marking such as `NOFORN` or `SECRET // BILATERAL`
    pub classification: String,

    pub summary: String,

    pub content: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Name of a downloadable artifact. Resolving it to bytes is up to the
    /// consumer; the name only has to stay attached to this document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl Document {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Extension of the attached artifact, upper-cased (`PDF`, `DOCX`)
    pub fn artifact_extension(&self) -> Option<String> {
        let name = self.file_name.as_deref()?;
        let (_, ext) = name.rsplit_once('.')?;
        Some(ext.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(file_name: Option<&str>) -> Document {
        Document {
            id: "DOC-17".to_string(),
            title: "SWIFT TRANSACTION LOGS // SECRET".to_string(),
            kind: DocumentKind::Log,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            classification: "NOFORN".to_string(),
            summary: "summary".to_string(),
            content: "content".to_string(),
            tags: vec!["Bank".to_string(), "Transfer".to_string()],
            file_name: file_name.map(str::to_string),
        }
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(sample(Some("minutes.pdf"))).unwrap();
        assert_eq!(json["type"], "LOG");
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["fileName"], "minutes.pdf");

        let json = serde_json::to_value(sample(None)).unwrap();
        assert!(json.get("fileName").is_none());
    }

    #[test]
    fn test_artifact_extension() {
        assert_eq!(sample(Some("Agreement_FINAL.docx")).artifact_extension().as_deref(), Some("DOCX"));
        assert_eq!(sample(Some("no-extension")).artifact_extension(), None);
        assert_eq!(sample(None).artifact_extension(), None);
    }

    #[test]
    fn test_has_tag() {
        let doc = sample(None);
        assert!(doc.has_tag("bank"));
        assert!(!doc.has_tag("Crypto"));
    }
}
