//! Input record and conversion outcome types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw input record from the source JSONL stream.
///
/// Field names follow the upstream export schema: `s1` is the document
/// title, `s2` the bare court name (usually without a province prefix),
/// `s7` the case number, `s22` the court + type + case-number hierarchy
/// string, `qwContent` the document HTML, `wsKey` the stable document id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document title.
    #[serde(rename = "s1", default)]
    pub title: String,

    /// Court name as given, possibly missing the province prefix.
    #[serde(rename = "s2", default)]
    pub court_name_raw: String,

    /// Case number / document id line.
    #[serde(rename = "s7", default)]
    pub case_number: String,

    /// Newline-separated hierarchy: full court name, doc type, case number.
    #[serde(rename = "s22", default)]
    pub hierarchy: String,

    /// Raw document HTML.
    #[serde(rename = "qwContent", default)]
    pub html: String,

    /// Stable source document identifier.
    #[serde(rename = "wsKey", default)]
    pub document_id: String,
}

impl DocumentRecord {
    /// Parse a record from one JSONL line.
    pub fn from_json(line: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}

/// The final output unit for a successfully converted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Normalized document title.
    pub title: String,

    /// Source document identifier (wsKey).
    pub wenshu_id: String,

    /// Full court name with province prefix.
    pub court: String,

    /// Document type, e.g. 执行裁定书.
    pub doc_type: String,

    /// Case number line.
    pub doc_id: String,

    /// Complete wikitext ready for upload.
    pub wikitext: String,
}

/// Failure record for a conversion that could not complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionFailure {
    /// Stage tag from the failure taxonomy (`html_parse`, `block_detect`, ...).
    pub error_stage: String,

    /// Human-readable message.
    pub error_message: String,

    /// The original input record, preserved for reprocessing.
    pub record: DocumentRecord,

    /// When the failure was captured.
    pub timestamp: DateTime<Utc>,
}

/// Exactly one of these is produced per input record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// The record converted cleanly.
    Success(RenderedDocument),

    /// The record could not be converted; the original is preserved.
    Failure(ConversionFailure),
}

impl ConversionOutcome {
    /// Build a failure outcome from an error, capturing the record and time.
    pub fn failure(err: &crate::Error, record: DocumentRecord) -> Self {
        ConversionOutcome::Failure(ConversionFailure {
            error_stage: err.stage().to_string(),
            error_message: err.to_string(),
            record,
            timestamp: Utc::now(),
        })
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success(_))
    }

    /// The success payload, if any.
    pub fn success(&self) -> Option<&RenderedDocument> {
        match self {
            ConversionOutcome::Success(doc) => Some(doc),
            ConversionOutcome::Failure(_) => None,
        }
    }
}
