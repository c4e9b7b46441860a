//! Text cleanup for OCR-noisy CJK content.
//!
//! Source documents carry OCR artifacts: spurious spaces inside CJK runs,
//! stray page numbers, and assorted middle-dot variants in titles. The
//! cleaners here are applied during text extraction (before classification
//! heuristics run) and again inside the signature parser.

use regex::Regex;

/// Spaced phrases preserved verbatim by [`clean_text`]. A few transliterated
/// personal names reach the source corpus with a plain space standing in for
/// the name-separator dot; fusing those would destroy the name boundary.
/// Extended as corpus cases surface.
pub const PROTECTED_SPACED_PHRASES: &[&str] = &["买买提 艾力", "阿不都 热合曼"];

/// Whether a character belongs to the CJK ranges we treat as joinable.
///
/// Covers the unified ideograph blocks, CJK punctuation, fullwidth forms,
/// and general punctuation, mirroring what the source corpus produces.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4e00}'..='\u{9fff}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4dbf}'   // Extension A
        | '\u{20000}'..='\u{2a6df}' // Extension B
        | '\u{2a700}'..='\u{2ebef}' // Extensions C-F
        | '\u{2ebf0}'..='\u{2ee5f}' // Extension I
        | '\u{30000}'..='\u{3347f}' // Extensions G, H, J
        | '\u{2f00}'..='\u{2fdf}'   // Kangxi Radicals
        | '\u{2e80}'..='\u{2eff}'   // CJK Radicals Supplement
        | '\u{f900}'..='\u{faff}'   // Compatibility Ideographs
        | '\u{2f800}'..='\u{2fa1f}' // Compatibility Supplement
        | '\u{3200}'..='\u{32ff}'   // Enclosed CJK Letters and Months
        | '\u{3300}'..='\u{33ff}'   // CJK Compatibility
        | '\u{3000}'..='\u{303f}'   // CJK Symbols and Punctuation
        | '\u{ff00}'..='\u{ffef}'   // Halfwidth and Fullwidth Forms
        | '\u{fe30}'..='\u{fe4f}'   // CJK Compatibility Forms
        | '\u{2000}'..='\u{206f}'   // General Punctuation
    )
}

/// Remove ASCII spaces sitting directly between two CJK characters.
///
/// Spaces adjacent to Latin letters or digits are preserved, so
/// `使用 API 接口` survives while `中 华 人 民` collapses.
pub fn remove_cjk_spaces(text: &str) -> String {
    remove_cjk_spaces_except(text, &[])
}

/// Like [`remove_cjk_spaces`], but occurrences of the given spaced phrases
/// are preserved unmodified (known proper nouns whose internal spacing is
/// intentional).
pub fn remove_cjk_spaces_except(text: &str, exceptions: &[&str]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut protected = vec![false; chars.len()];

    for phrase in exceptions {
        let pat: Vec<char> = phrase.chars().collect();
        if pat.is_empty() || pat.len() > chars.len() {
            continue;
        }
        for start in 0..=chars.len() - pat.len() {
            if chars[start..start + pat.len()] == pat[..] {
                for flag in &mut protected[start..start + pat.len()] {
                    *flag = true;
                }
            }
        }
    }

    let mut result: Vec<char> = Vec::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' && !protected[i] {
            let prev = result.iter().rev().find(|&&p| p != ' ').copied();
            let next = chars[i + 1..].iter().find(|&&n| n != ' ').copied();
            if let (Some(p), Some(n)) = (prev, next) {
                if is_cjk(p) && is_cjk(n) {
                    continue;
                }
            }
        }
        result.push(c);
    }
    result.into_iter().collect()
}

/// Normalize whitespace and strip OCR spacing from a text fragment.
///
/// Control characters become spaces, runs of spaces collapse to one, the
/// result is trimmed, and CJK-internal spaces are removed. Occurrences of
/// [`PROTECTED_SPACED_PHRASES`] keep their spacing.
pub fn clean_text(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut last_was_space = false;
    for c in text.chars() {
        let c = match c {
            '\t' | '\r' | '\n' | '\u{0c}' | '\u{0b}' => ' ',
            other => other,
        };
        if c == ' ' {
            if last_was_space {
                continue;
            }
            last_was_space = true;
        } else {
            last_was_space = false;
        }
        collapsed.push(c);
    }
    remove_cjk_spaces_except(collapsed.trim(), PROTECTED_SPACED_PHRASES)
}

/// Remove every whitespace character. Court names, document types and case
/// numbers never legitimately contain spaces.
pub fn strip_all_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalize middle-dot variants in titles to the standard U+00B7.
pub fn normalize_middle_dots(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '．' | '‧' | '•' | '･' | '・' => '·',
            other => other,
        })
        .collect()
}

/// Junk-paragraph filter: page numbers like `-1-` or bare digits, `第N页`
/// markers, and lone `?` OCR artifacts. Holds its compiled pattern; build
/// one per document and reuse it across blocks.
pub struct JunkFilter {
    pattern: Regex,
}

impl JunkFilter {
    /// Compile the junk pattern.
    pub fn new() -> Self {
        let dash = r"[\-\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}\u{2015}\u{ff0d}]";
        let pattern = format!(r"^({dash}?\d+{dash}?|\?|第\s*\d+\s*页)$");
        Self {
            pattern: Regex::new(&pattern).unwrap(),
        }
    }

    /// Whether a paragraph is junk the renderer should drop.
    pub fn is_junk(&self, text: &str) -> bool {
        self.pattern.is_match(text.trim())
    }
}

impl Default for JunkFilter {
    fn default() -> Self {
        Self::new()
    }
}
