//! Error types for the conversion core.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a court document.
///
/// Every variant maps to a stable stage tag (see [`Error::stage`]) that is
/// written into failure records. Anything not covered here degrades to an
/// unset field rather than an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The HTML content is not interpretable at all.
    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    /// No segmentable content blocks were found in the document.
    #[error("no content blocks detected")]
    NoBlocks,

    /// Merged-cell geometry could not be resolved to a rectangular grid.
    #[error("table parse error: {0}")]
    TableParse(String),

    /// Template assembly received a structure missing a required block.
    #[error("rendering error: {0}")]
    Render(String),

    /// JSON (de)serialization error at the record boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The stage tag recorded in failure logs for this error.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::MissingField(_) => "field_extraction",
            Error::HtmlParse(_) => "html_parse",
            Error::NoBlocks => "block_detect",
            Error::TableParse(_) => "table_parse",
            Error::Render(_) => "render",
            Error::Json(_) => "field_extraction",
        }
    }
}
