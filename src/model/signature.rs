//! Signature-region data extracted from the trailing right-aligned zone.

use serde::{Deserialize, Serialize};

/// One signatory line: a judicial role label plus a personal name.
///
/// Lines that structurally resemble signatures but match no known title are
/// kept with an empty `title` and the raw line in `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    /// Canonical role label (审判长, 书记员, ...), empty for raw lines.
    pub title: String,

    /// Personal name, spaces removed.
    pub name: String,
}

impl Signatory {
    /// Create a parsed signatory.
    pub fn new(title: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            name: name.into(),
        }
    }

    /// Create an unparsed raw line entry.
    pub fn raw(line: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            name: line.into(),
        }
    }
}

/// Parsed issuance date. Absent components stay unset, never guessed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    /// Gregorian year.
    pub year: Option<u16>,
    /// Month 1-12.
    pub month: Option<u8>,
    /// Day 1-31.
    pub day: Option<u8>,
}

impl DateParts {
    /// Whether no component was extracted.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

/// Everything extracted from the signature region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignatureInfo {
    /// Judicial-bench entries in document order.
    pub judges: Vec<Signatory>,

    /// Clerk-side entries in document order.
    pub clerks: Vec<Signatory>,

    /// The date line as written, if one was found.
    pub date_raw: Option<String>,

    /// Parsed date components.
    pub date: DateParts,

    /// Content after the signature proper, preserved verbatim.
    pub trailing_notes: Vec<String>,
}
