//! Content block types produced by the segmenter.

use serde::{Deserialize, Serialize};

use super::TableModel;

/// Horizontal alignment inferred from presentational attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment.
    Left,
    /// Center alignment.
    Center,
    /// Right alignment.
    Right,
    /// No usable alignment signal.
    #[default]
    Unknown,
}

/// Semantic role assigned to a block by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockRole {
    /// Not yet classified (segmenter output state).
    #[default]
    Unclassified,
    /// Centered court name or document type in the document header.
    HeaderCandidate,
    /// Right-aligned case-number line before the body.
    DocId,
    /// Normal body paragraph.
    Paragraph,
    /// Table block with an attached grid.
    Table,
    /// Member of the trailing right-aligned signature region.
    SignatureRegion,
    /// Unclassifiable content, preserved verbatim in trailing notes.
    Note,
}

/// One structural unit of a segmented document.
///
/// Created by the segmenter with `role == Unclassified`; the classifier
/// mutates only `role`, everything else is read-only after segmentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Semantic role.
    pub role: BlockRole,

    /// Inferred horizontal alignment.
    pub alignment: Alignment,

    /// Whether the source element carried a positive text-indent.
    pub indented: bool,

    /// Whether the source element carried a large font-size hint (>= 18pt).
    pub emphasized: bool,

    /// Cleaned text content. Empty for table blocks.
    pub text: String,

    /// Resolved grid for table blocks.
    pub table: Option<TableModel>,

    /// Position in document order.
    pub order: usize,
}

impl ContentBlock {
    /// Create a text block.
    pub fn text(text: impl Into<String>, alignment: Alignment, indented: bool) -> Self {
        Self {
            text: text.into(),
            alignment,
            indented,
            ..Self::default()
        }
    }

    /// Create a table block.
    pub fn table(table: TableModel) -> Self {
        Self {
            table: Some(table),
            ..Self::default()
        }
    }

    /// Whether this block carries a table.
    pub fn is_table(&self) -> bool {
        self.table.is_some()
    }

    /// Whether this block has neither text nor a table.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.table.is_none()
    }
}
