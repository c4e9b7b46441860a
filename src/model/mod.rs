//! Document model types for court-document conversion.
//!
//! This module defines the intermediate representation that bridges HTML
//! segmentation and wikitext rendering. All entities live for the duration
//! of a single record's conversion; nothing persists across records.

mod block;
mod record;
mod signature;
mod table;

pub use block::{Alignment, BlockRole, ContentBlock};
pub use record::{ConversionFailure, ConversionOutcome, DocumentRecord, RenderedDocument};
pub use signature::{DateParts, SignatureInfo, Signatory};
pub use table::{GridCell, RawCell, TableModel};
