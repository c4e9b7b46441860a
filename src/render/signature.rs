//! Signature spacing conventions.
//!
//! Printed judgments align the signature column with fixed-width CJK
//! spacing: three-character titles are padded with En Quads to the width
//! of a five-character one, four-character titles with Three-Per-Em
//! spaces, and two-character names get an En Quad in the middle.

use crate::model::Signatory;

/// Fullwidth ideographic space separating title characters and the
/// title/name boundary.
pub const EN_QUAD: char = '\u{3000}';

/// Narrow space used inside four-character titles.
pub const THREE_PER_EM: char = '\u{2004}';

/// Space out a title: 3 characters joined with En Quad, 4 with
/// Three-Per-Em, anything else unchanged.
pub fn format_job_title(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    match chars.len() {
        3 => join_chars(&chars, EN_QUAD),
        4 => join_chars(&chars, THREE_PER_EM),
        _ => title.to_string(),
    }
}

/// Space out a name: two-character names get one En Quad inserted,
/// longer names are unchanged.
pub fn format_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() == 2 {
        join_chars(&chars, EN_QUAD)
    } else {
        name.to_string()
    }
}

/// Render one signatory line. Raw entries (no recognized title) pass
/// through unchanged; parsed entries get two En Quads between title and
/// name.
pub fn format_signatory(sig: &Signatory) -> String {
    if sig.title.is_empty() {
        return sig.name.clone();
    }
    format!(
        "{}{EN_QUAD}{EN_QUAD}{}",
        format_job_title(&sig.title),
        format_name(&sig.name)
    )
}

fn join_chars(chars: &[char], sep: char) -> String {
    let mut out = String::with_capacity(chars.len() * 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
