//! # wenshu2wiki
//!
//! Conversion core turning published Chinese court documents (HTML plus
//! metadata fields) into zhwikisource-ready wikitext.
//!
//! The pipeline segments the document HTML into layout blocks, assigns
//! each block a semantic role (header, case number, body, signature),
//! parses the signature region into judges, clerks and a date, infers a
//! geographic label from the court name, and assembles a wikitext page
//! with the standard `{{header}}` / `{{署名}}` / `{{PD-PRC-exempt}}`
//! scaffolding.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wenshu2wiki::{convert_record, DocumentRecord};
//!
//! fn main() -> wenshu2wiki::Result<()> {
//!     let line = r#"{"s1":"某某执行裁定书","qwContent":"<div>...</div>"}"#;
//!     let record = DocumentRecord::from_json(line)?;
//!
//!     let outcome = convert_record(record);
//!     if let Some(doc) = outcome.success() {
//!         println!("{}", doc.wikitext);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Total conversion**: every record yields a rendered page or a
//!   stage-tagged failure record, never a panic
//! - **Layout-based classification**: alignment, indentation and font
//!   size drive block roles, not brittle text matching
//! - **OCR cleanup**: CJK-internal space removal, junk-line filtering,
//!   middle-dot normalization
//! - **Signature conventions**: En Quad / Three-Per-Em spacing for
//!   titles and names, judge/clerk separation by title
//! - **Deterministic output**: identical input bytes render identical
//!   wikitext

pub mod cleanup;
pub mod convert;
pub mod error;
pub mod location;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::convert_record;
pub use error::{Error, Result};
pub use location::infer_location_from_court;
pub use model::{
    Alignment, BlockRole, ContentBlock, ConversionFailure, ConversionOutcome, DateParts,
    DocumentRecord, RenderedDocument, SignatureInfo, Signatory, TableModel,
};

/// Convert raw document HTML and a title directly, bypassing the record
/// envelope. Court name and document type come from the HTML header only.
pub fn html_to_wikitext(html: &str, title: &str) -> Result<String> {
    let record = DocumentRecord {
        title: title.to_string(),
        html: html.to_string(),
        ..DocumentRecord::default()
    };
    match convert_record(record) {
        ConversionOutcome::Success(doc) => Ok(doc.wikitext),
        ConversionOutcome::Failure(failure) => Err(Error::Render(format!(
            "{} ({})",
            failure.error_message, failure.error_stage
        ))),
    }
}
