//! HTML-to-block segmentation.
//!
//! Walks the parsed DOM in document order and emits one [`ContentBlock`]
//! per flow element, with tables resolved into rectangular grids. Pure
//! spacer elements are dropped; stray text nodes between elements are
//! coalesced into a single paragraph block. html5ever recovers from
//! malformed markup, so only structurally hopeless input (empty, or no
//! extractable body) fails here.

use scraper::{ElementRef, Html, Selector};

use crate::cleanup::clean_text;
use crate::error::{Error, Result};
use crate::model::{Alignment, ContentBlock, RawCell, TableModel};

use super::style::StyleProbe;

/// Segment raw document HTML into an ordered block sequence.
///
/// Errors: `html_parse` when the input is empty or yields no body node;
/// `table_parse` when a table's merge geometry cannot be resolved;
/// `block_detect` when no block survives segmentation.
pub fn segment_html(html: &str) -> Result<Vec<ContentBlock>> {
    if html.trim().is_empty() {
        return Err(Error::HtmlParse("empty HTML content".into()));
    }

    let document = Html::parse_document(html);
    let body_sel = Selector::parse("body").unwrap();
    let body = document
        .select(&body_sel)
        .next()
        .ok_or_else(|| Error::HtmlParse("document has no body".into()))?;

    let probe = StyleProbe::new();
    let mut blocks: Vec<ContentBlock> = Vec::new();
    // Stray inline text between block elements accumulates here and is
    // flushed as one paragraph block.
    let mut stray = String::new();

    for child in body.children() {
        if let Some(text) = child.value().as_text() {
            let cleaned = clean_text(text);
            if !cleaned.is_empty() {
                if !stray.is_empty() {
                    stray.push(' ');
                }
                stray.push_str(&cleaned);
            }
            continue;
        }

        let Some(element) = ElementRef::wrap(child) else {
            continue;
        };
        // Non-block elements (br, script, inline markup) neither emit a
        // block nor break a stray text run.
        if !is_block_element(element.value().name()) {
            continue;
        }
        flush_stray(&mut stray, &mut blocks);
        segment_element(&element, &probe, &mut blocks)?;
    }
    flush_stray(&mut stray, &mut blocks);

    if blocks.is_empty() {
        return Err(Error::NoBlocks);
    }
    for (i, block) in blocks.iter_mut().enumerate() {
        block.order = i;
    }
    Ok(blocks)
}

fn is_block_element(name: &str) -> bool {
    matches!(name, "table" | "ul" | "ol" | "div" | "p" | "span")
}

fn flush_stray(stray: &mut String, blocks: &mut Vec<ContentBlock>) {
    if !stray.is_empty() {
        blocks.push(ContentBlock::text(
            std::mem::take(stray),
            Alignment::Unknown,
            false,
        ));
    }
}

fn segment_element(
    element: &ElementRef,
    probe: &StyleProbe,
    blocks: &mut Vec<ContentBlock>,
) -> Result<()> {
    match element.value().name() {
        "table" => {
            if let Some(table) = parse_table(element)? {
                blocks.push(ContentBlock::table(table));
            }
        }
        "ul" | "ol" => {
            // List markup is deliberately not emitted; each item becomes a
            // plain paragraph block.
            for li in direct_children(element, &["li"]) {
                push_text_block(&li, probe, blocks);
            }
        }
        "div" => {
            let direct_p = direct_children(element, &["p"]);
            if !direct_p.is_empty() {
                for p in direct_p {
                    push_text_block(&p, probe, blocks);
                }
                return Ok(());
            }
            let p_sel = Selector::parse("p").unwrap();
            let nested: Vec<ElementRef> = element.select(&p_sel).collect();
            if !nested.is_empty() {
                for p in nested {
                    push_text_block(&p, probe, blocks);
                }
            } else {
                push_text_block(element, probe, blocks);
            }
        }
        "p" | "span" => {
            push_text_block(element, probe, blocks);
        }
        _ => {}
    }
    Ok(())
}

fn push_text_block(element: &ElementRef, probe: &StyleProbe, blocks: &mut Vec<ContentBlock>) {
    let text = clean_text(&element.text().collect::<String>());
    if text.is_empty() {
        return;
    }
    let mut block = ContentBlock::text(text, probe.alignment(element), probe.is_indented(element));
    block.emphasized = probe.is_emphasized(element);
    blocks.push(block);
}

/// Direct element children with one of the given tag names.
fn direct_children<'a>(element: &'a ElementRef, names: &[&str]) -> Vec<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| names.contains(&el.value().name()))
        .collect()
}

/// Extract a table element into a resolved grid.
///
/// Rows may sit directly under `<table>` or inside `<thead>`/`<tbody>`/
/// `<tfoot>`; only direct rows are taken so nested tables do not leak in.
/// A table with no cells at all is a layout spacer and yields `None`.
fn parse_table(table: &ElementRef) -> Result<Option<TableModel>> {
    let mut rows: Vec<Vec<RawCell>> = Vec::new();

    for child in table.children() {
        let Some(el) = ElementRef::wrap(child) else {
            continue;
        };
        match el.value().name() {
            "tr" => rows.push(parse_row(&el)),
            "thead" | "tbody" | "tfoot" => {
                for tr in direct_children(&el, &["tr"]) {
                    rows.push(parse_row(&tr));
                }
            }
            _ => {}
        }
    }

    rows.retain(|r| !r.is_empty());
    if rows.is_empty() {
        return Ok(None);
    }
    TableModel::resolve(&rows).map(Some)
}

fn parse_row(row: &ElementRef) -> Vec<RawCell> {
    direct_children(row, &["td", "th"])
        .into_iter()
        .map(|cell| {
            let span = |attr: &str| {
                cell.value()
                    .attr(attr)
                    .and_then(|v| v.trim().parse::<u32>().ok())
                    .unwrap_or(1)
            };
            RawCell {
                text: clean_text(&cell.text().collect::<String>()),
                colspan: span("colspan"),
                rowspan: span("rowspan"),
            }
        })
        .collect()
}
