//! Page assembly.
//!
//! The output page has a fixed section order: `{{header}}` template,
//! centered title block, right-aligned document identifier, body,
//! `{{署名}}` signature block, optional appendix notes, and the
//! `{{PD-PRC-exempt}}` footer. Section content is a pure function of the
//! classified structure; nothing here consults global state.

use crate::cleanup::JunkFilter;
use crate::error::{Error, Result};
use crate::model::{ContentBlock, SignatureInfo};

use super::signature::format_signatory;
use super::table::render_table;

/// Everything the page assembler needs, already reconciled by the
/// conversion driver.
pub struct RenderContext<'a> {
    /// Page title (cleaned s1 field).
    pub title: &'a str,
    /// Authoritative court name.
    pub court: &'a str,
    /// Document type without the state prefix, e.g. 执行裁定书.
    pub doc_type: &'a str,
    /// Case number line, empty when the document carries none.
    pub doc_id: &'a str,
    /// Body blocks (paragraphs and tables) in document order.
    pub body: &'a [ContentBlock],
    /// Parsed signature region.
    pub signature: &'a SignatureInfo,
    /// Wiki location category inferred from the court name.
    pub location: Option<&'a str>,
    /// Appendix lines rendered after the signature block.
    pub notes: &'a [String],
}

/// Assemble the full wikitext page.
///
/// Fails with a `render` error when the body holds no renderable
/// paragraph or table after junk filtering.
pub fn render_wikitext(ctx: &RenderContext) -> Result<String> {
    let junk = JunkFilter::new();
    let body = render_body(ctx.body, &junk);
    if body.trim().is_empty() {
        return Err(Error::Render(
            "document has no body paragraphs".into(),
        ));
    }

    let mut parts = vec![render_header_template(ctx), render_title_section(ctx)];
    if !ctx.doc_id.is_empty() {
        parts.push(format!("<div align=\"right\">\n{}\n</div>\n", ctx.doc_id));
    }
    parts.push(body);
    parts.push(render_signature_section(ctx.signature, ctx.court));
    let notes = render_notes(ctx.notes, &junk);
    if !notes.is_empty() {
        parts.push(notes);
    }
    parts.push(String::from("{{PD-PRC-exempt}}\n"));

    Ok(parts.join("\n"))
}

fn render_header_template(ctx: &RenderContext) -> String {
    let type_field = if ctx.doc_type.is_empty() {
        String::new()
    } else {
        format!("中华人民共和国{}", ctx.doc_type)
    };
    let date = &ctx.signature.date;
    let opt = |v: Option<String>| v.unwrap_or_default();

    [
        String::from("{{header"),
        format!("|title = {}", ctx.title),
        format!("|noauthor = {}", ctx.court),
        format!("|type = {type_field}"),
        String::from("|lawmaker = "),
        String::from("|section = "),
        String::from("|previous = "),
        String::from("|next = "),
        format!("|year = {}", opt(date.year.map(|v| v.to_string()))),
        format!("|month = {}", opt(date.month.map(|v| v.to_string()))),
        format!("|day = {}", opt(date.day.map(|v| v.to_string()))),
        format!("|loc = {}", ctx.location.unwrap_or("")),
        String::from("|from = "),
        String::from("|notes = "),
        String::from("|edition = "),
        String::from("}}"),
    ]
    .join("\n")
}

fn render_title_section(ctx: &RenderContext) -> String {
    format!(
        "\n<center><b>\n{{{{larger|{}}}}}\n\n{{{{larger|{}}}}}\n</b></center>\n",
        ctx.court, ctx.doc_type
    )
}

/// Body paragraphs and tables, junk lines dropped, blank line after every
/// block.
fn render_body(blocks: &[ContentBlock], junk: &JunkFilter) -> String {
    let mut lines = Vec::new();
    for block in blocks {
        if let Some(table) = &block.table {
            lines.push(render_table(table));
            lines.push(String::new());
        } else {
            if junk.is_junk(&block.text) {
                continue;
            }
            lines.push(render_paragraph(block));
            lines.push(String::new());
        }
    }
    lines.join("\n")
}

fn render_paragraph(block: &ContentBlock) -> String {
    if block.indented {
        format!("{{{{gap}}}}{}", block.text)
    } else {
        block.text.clone()
    }
}

fn render_signature_section(sig: &SignatureInfo, court: &str) -> String {
    let mut lines = vec![String::from("{{署名|")];

    for judge in &sig.judges {
        lines.push(format_signatory(judge));
        lines.push(String::new());
    }

    lines.push(format!("{{{{印|{court}|center=国徽}}}}"));
    lines.push(String::new());

    if let Some(date) = &sig.date_raw {
        lines.push(date.clone());
        lines.push(String::new());
    }

    for (i, clerk) in sig.clerks.iter().enumerate() {
        lines.push(format_signatory(clerk));
        if i + 1 < sig.clerks.len() {
            lines.push(String::new());
        }
    }

    lines.push(String::from("}}"));
    lines.join("\n")
}

fn render_notes(notes: &[String], junk: &JunkFilter) -> String {
    let kept: Vec<&String> = notes.iter().filter(|n| !junk.is_junk(n)).collect();
    if kept.is_empty() {
        return String::new();
    }
    let mut lines = vec![String::new()];
    for note in kept {
        lines.push(note.clone());
        lines.push(String::new());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, DateParts, Signatory};

    fn paragraph(text: &str, indented: bool) -> ContentBlock {
        ContentBlock::text(text.to_string(), Alignment::Left, indented)
    }

    fn sample_signature() -> SignatureInfo {
        SignatureInfo {
            judges: vec![Signatory::new("审判长", "张某某")],
            clerks: vec![Signatory::new("书记员", "李某")],
            date_raw: Some("二〇二四年十月十五日".to_string()),
            date: DateParts {
                year: Some(2024),
                month: Some(10),
                day: Some(15),
            },
            trailing_notes: Vec::new(),
        }
    }

    fn ctx<'a>(
        body: &'a [ContentBlock],
        sig: &'a SignatureInfo,
        notes: &'a [String],
    ) -> RenderContext<'a> {
        RenderContext {
            title: "某某公司执行裁定书",
            court: "某某市中级人民法院",
            doc_type: "执行裁定书",
            doc_id: "（2024）某执123号",
            body,
            signature: sig,
            location: Some("某某省"),
            notes,
        }
    }

    #[test]
    fn test_full_page_structure() {
        let body = vec![paragraph("申请执行人某某公司。", true)];
        let sig = sample_signature();
        let out = render_wikitext(&ctx(&body, &sig, &[])).unwrap();

        assert!(out.starts_with("{{header\n|title = 某某公司执行裁定书\n"));
        assert!(out.contains("|type = 中华人民共和国执行裁定书"));
        assert!(out.contains("|year = 2024"));
        assert!(out.contains("|month = 10"));
        assert!(out.contains("|day = 15"));
        assert!(out.contains("|loc = 某某省"));
        assert!(out.contains("<center><b>\n{{larger|某某市中级人民法院}}\n\n{{larger|执行裁定书}}\n</b></center>"));
        assert!(out.contains("<div align=\"right\">\n（2024）某执123号\n</div>"));
        assert!(out.contains("{{gap}}申请执行人某某公司。"));
        assert!(out.contains("{{署名|"));
        assert!(out.contains("{{印|某某市中级人民法院|center=国徽}}"));
        assert!(out.contains("二〇二四年十月十五日"));
        assert!(out.ends_with("{{PD-PRC-exempt}}\n"));
    }

    #[test]
    fn test_empty_body_is_render_error() {
        let body = vec![paragraph("-1-", false), paragraph("第2页", false)];
        let sig = sample_signature();
        let err = render_wikitext(&ctx(&body, &sig, &[])).unwrap_err();
        assert_eq!(err.stage(), "render");
    }

    #[test]
    fn test_partial_date_header_fields() {
        let body = vec![paragraph("正文。", false)];
        let mut sig = sample_signature();
        sig.date = DateParts {
            year: Some(2024),
            month: Some(10),
            day: None,
        };
        let out = render_wikitext(&ctx(&body, &sig, &[])).unwrap();
        assert!(out.contains("|year = 2024"));
        assert!(out.contains("|day = \n"));
    }

    #[test]
    fn test_missing_doc_id_omits_section() {
        let body = vec![paragraph("正文。", false)];
        let sig = sample_signature();
        let mut c = ctx(&body, &sig, &[]);
        c.doc_id = "";
        let out = render_wikitext(&c).unwrap();
        assert!(!out.contains("<div align=\"right\">"));
    }

    #[test]
    fn test_notes_rendered_after_signature() {
        let body = vec![paragraph("正文。", false)];
        let sig = sample_signature();
        let notes = vec!["附：相关法律条文。".to_string(), "-3-".to_string()];
        let out = render_wikitext(&ctx(&body, &sig, &notes)).unwrap();
        let sig_pos = out.find("{{署名|").unwrap();
        let note_pos = out.find("附：相关法律条文。").unwrap();
        assert!(note_pos > sig_pos);
        assert!(!out.contains("-3-"));
    }

    #[test]
    fn test_deterministic_output() {
        let body = vec![paragraph("正文段落一。", true), paragraph("正文段落二。", true)];
        let sig = sample_signature();
        let a = render_wikitext(&ctx(&body, &sig, &[])).unwrap();
        let b = render_wikitext(&ctx(&body, &sig, &[])).unwrap();
        assert_eq!(a, b);
    }
}
