//! Block role assignment.
//!
//! Roles are assigned by an ordered rule list evaluated first-match-wins
//! against each block plus two positional facts computed up front: where
//! the body starts (first left-aligned or table block) and where the
//! signature region starts (the final contiguous right-aligned run).
//! Right-aligned material before the body that looks like a case number
//! becomes the document identifier; right-aligned runs in the middle of
//! the body fall through to notes.

use crate::model::{Alignment, BlockRole, ContentBlock};

/// Positional context shared by all rules.
struct Context {
    /// Index of the first body block, or `len` when none exists.
    body_start: usize,
    /// Start of the final right-aligned run; everything from here on is
    /// signature material.
    signature_start: Option<usize>,
}

/// Document types recognized in centered header lines.
const DOC_TYPE_KEYWORDS: &[&str] = &["判决书", "裁定书", "决定书", "通知书", "调解书"];

/// Whether a header line names a court.
pub fn is_court_name(text: &str) -> bool {
    text.ends_with("法院") || text.contains("人民法院")
}

/// Whether a header line names a document type. Containment, not suffix:
/// header lines may carry decorations after the type, e.g. 民事判决书（正本）.
pub fn is_doc_type(text: &str) -> bool {
    DOC_TYPE_KEYWORDS.iter().any(|kw| text.contains(kw))
}

/// Whether a right-aligned line is shaped like a case number, e.g.
/// `（2024）京01执123号`.
pub fn looks_like_case_number(text: &str) -> bool {
    (text.starts_with('（') || text.starts_with('(')) && text.contains('号')
}

/// Assign a semantic role to every block in place.
///
/// The sequence must be in document order; block `order` fields are not
/// consulted.
pub fn classify_blocks(blocks: &mut [ContentBlock]) {
    let ctx = Context::compute(blocks);
    for (i, block) in blocks.iter_mut().enumerate() {
        block.role = classify_one(&ctx, i, block);
    }
}

impl Context {
    fn compute(blocks: &[ContentBlock]) -> Self {
        let body_start = blocks
            .iter()
            .position(|b| {
                b.is_table()
                    || (matches!(b.alignment, Alignment::Left | Alignment::Unknown)
                        && !b.is_empty())
            })
            .unwrap_or(blocks.len());

        let signature_start = blocks
            .iter()
            .rposition(|b| b.alignment == Alignment::Right)
            .map(|last| {
                let mut start = last;
                while start > 0 && blocks[start - 1].alignment == Alignment::Right {
                    start -= 1;
                }
                start
            })
            .filter(|&start| start >= body_start && body_start < blocks.len());

        Self {
            body_start,
            signature_start,
        }
    }
}

fn classify_one(ctx: &Context, index: usize, block: &ContentBlock) -> BlockRole {
    let pre_body = index < ctx.body_start;

    // 1. Centered header material before the body.
    if pre_body
        && block.alignment == Alignment::Center
        && (block.emphasized || is_court_name(&block.text) || is_doc_type(&block.text))
    {
        return BlockRole::HeaderCandidate;
    }

    // 2. Case-number-shaped right-aligned block before the body.
    if pre_body && block.alignment == Alignment::Right && looks_like_case_number(&block.text) {
        return BlockRole::DocId;
    }

    // 3. Final right-aligned run and everything after it.
    if let Some(start) = ctx.signature_start {
        if index >= start {
            return BlockRole::SignatureRegion;
        }
    }

    // 4. Tables are body content.
    if block.is_table() {
        return BlockRole::Table;
    }

    // 5. Indented or left-flowing text is a body paragraph.
    if block.indented || matches!(block.alignment, Alignment::Left | Alignment::Unknown) {
        return BlockRole::Paragraph;
    }

    // 6. Everything else (stranded centered or right-aligned lines) is
    // preserved as a note.
    BlockRole::Note
}
