//! Layout-signal extraction from presentational attributes.
//!
//! Source HTML is styled with inline `style` attributes (often uppercase,
//! e.g. `TEXT-ALIGN: center; FONT-SIZE: 18pt`) and occasionally legacy
//! `align` attributes. Only three signals survive normalization: horizontal
//! alignment, indentation presence, and a font-size hint used to detect
//! header emphasis. Everything else (font, color, class) is discarded.

use regex::Regex;
use scraper::ElementRef;

use crate::model::Alignment;

/// Font size (pt) at or above which a centered block counts as emphasized.
const EMPHASIS_SIZE_PT: u32 = 18;

/// Compiled attribute scanners, built once per document.
pub struct StyleProbe {
    align_re: Regex,
    indent_re: Regex,
    size_re: Regex,
}

impl StyleProbe {
    /// Compile the attribute patterns.
    pub fn new() -> Self {
        Self {
            align_re: Regex::new(r"(?i)text-align\s*:\s*([a-z]+)").unwrap(),
            indent_re: Regex::new(r"(?i)text-indent\s*:\s*(\d+)").unwrap(),
            size_re: Regex::new(r"(?i)font-size\s*:\s*(\d+)(?:pt|px)?").unwrap(),
        }
    }

    /// Horizontal alignment from the inline style or the legacy `align`
    /// attribute.
    pub fn alignment(&self, el: &ElementRef) -> Alignment {
        let style = el.value().attr("style").unwrap_or("");
        if let Some(caps) = self.align_re.captures(style) {
            return match caps[1].to_ascii_lowercase().as_str() {
                "left" | "justify" => Alignment::Left,
                "center" => Alignment::Center,
                "right" => Alignment::Right,
                _ => Alignment::Unknown,
            };
        }
        match el
            .value()
            .attr("align")
            .map(|a| a.to_ascii_lowercase())
            .as_deref()
        {
            Some("left") | Some("justify") => Alignment::Left,
            Some("center") => Alignment::Center,
            Some("right") => Alignment::Right,
            _ => Alignment::Unknown,
        }
    }

    /// Whether the element carries a positive `text-indent`.
    pub fn is_indented(&self, el: &ElementRef) -> bool {
        let style = el.value().attr("style").unwrap_or("");
        self.indent_re
            .captures(style)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .is_some_and(|v| v > 0)
    }

    /// Whether the element carries a large font-size hint.
    pub fn is_emphasized(&self, el: &ElementRef) -> bool {
        let style = el.value().attr("style").unwrap_or("");
        self.size_re
            .captures(style)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .is_some_and(|v| v >= EMPHASIS_SIZE_PT)
    }
}

impl Default for StyleProbe {
    fn default() -> Self {
        Self::new()
    }
}
