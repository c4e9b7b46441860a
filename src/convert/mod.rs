//! Conversion driver.
//!
//! Runs the full pipeline for one input record: field extraction and
//! cleanup, HTML segmentation, block classification, signature parsing,
//! court/type reconciliation, location inference, and page rendering.
//! Conversion is total: every record yields either a rendered document
//! or a failure record tagged with the stage that gave up.

use log::{debug, warn};

use crate::cleanup::{normalize_middle_dots, remove_cjk_spaces, strip_all_whitespace};
use crate::error::{Error, Result};
use crate::location::infer_location_from_court;
use crate::model::{
    BlockRole, ContentBlock, ConversionOutcome, DocumentRecord, RenderedDocument,
};
use crate::parser::classify::{is_court_name, is_doc_type};
use crate::parser::{classify_blocks, parse_signature_region, segment_html};
use crate::render::{render_wikitext, RenderContext};

/// Convert one record, never panicking and never dropping the input:
/// failures carry the original record for later reprocessing.
pub fn convert_record(record: DocumentRecord) -> ConversionOutcome {
    match convert_inner(&record) {
        Ok(doc) => {
            debug!("converted document {}", doc.wenshu_id);
            ConversionOutcome::Success(doc)
        }
        Err(err) => {
            warn!(
                "conversion failed for {} at stage {}: {}",
                record.document_id,
                err.stage(),
                err
            );
            ConversionOutcome::failure(&err, record)
        }
    }
}

fn convert_inner(record: &DocumentRecord) -> Result<RenderedDocument> {
    let title = normalize_middle_dots(&remove_cjk_spaces(record.title.trim()));
    if title.is_empty() {
        return Err(Error::MissingField("s1"));
    }
    if record.html.trim().is_empty() {
        return Err(Error::MissingField("qwContent"));
    }

    let mut blocks = segment_html(&record.html)?;
    classify_blocks(&mut blocks);

    let header = HeaderFields::extract(record, &blocks);
    if header.court.is_empty() {
        warn!("no court name resolved for {}", record.document_id);
    }

    let signature_blocks: Vec<&ContentBlock> = blocks
        .iter()
        .filter(|b| b.role == BlockRole::SignatureRegion)
        .collect();
    let signature = parse_signature_region(&signature_blocks);
    if signature.date_raw.is_none() {
        warn!("no date line found for {}", record.document_id);
    }

    let location = infer_location_from_court(&header.court);
    if location.is_none() {
        warn!(
            "location unresolved for court {:?} ({})",
            header.court, record.document_id
        );
    }

    let body: Vec<ContentBlock> = blocks
        .iter()
        .filter(|b| matches!(b.role, BlockRole::Paragraph | BlockRole::Table))
        .cloned()
        .collect();

    // Mid-document notes render ahead of the signature's own trailing
    // notes, both in document order.
    let mut notes: Vec<String> = blocks
        .iter()
        .filter(|b| b.role == BlockRole::Note)
        .map(|b| b.text.clone())
        .collect();
    notes.extend(signature.trailing_notes.iter().cloned());

    let wikitext = render_wikitext(&RenderContext {
        title: &title,
        court: &header.court,
        doc_type: &header.doc_type,
        doc_id: &header.doc_id,
        body: &body,
        signature: &signature,
        location: location.as_deref(),
        notes: &notes,
    })?;

    Ok(RenderedDocument {
        title,
        wenshu_id: record.document_id.clone(),
        court: header.court,
        doc_type: header.doc_type,
        doc_id: header.doc_id,
        wikitext,
    })
}

/// Court name, document type and case number reconciled across the input
/// fields and the parsed header blocks.
///
/// The hierarchy field (s22) carries the only court spelling with a
/// province prefix, so it outranks both the bare s2 field and whatever
/// the HTML header shows; HTML-derived values fill the remaining gaps.
struct HeaderFields {
    court: String,
    doc_type: String,
    doc_id: String,
}

impl HeaderFields {
    fn extract(record: &DocumentRecord, blocks: &[ContentBlock]) -> Self {
        let mut html_court = String::new();
        let mut html_doc_type = String::new();
        let mut html_doc_id = String::new();

        for block in blocks {
            match block.role {
                BlockRole::HeaderCandidate => {
                    if html_court.is_empty() && is_court_name(&block.text) {
                        html_court = strip_all_whitespace(&block.text);
                    } else if html_doc_type.is_empty() && is_doc_type(&block.text) {
                        html_doc_type = strip_all_whitespace(&block.text);
                    }
                }
                BlockRole::DocId => {
                    if html_doc_id.is_empty() {
                        html_doc_id = strip_all_whitespace(&block.text);
                    }
                }
                _ => {}
            }
        }

        let mut hierarchy = record
            .hierarchy
            .lines()
            .map(|l| strip_all_whitespace(l))
            .filter(|l| !l.is_empty());
        let hier_court = hierarchy.next().unwrap_or_default();
        let hier_doc_type = hierarchy.next().unwrap_or_default();

        let court = first_nonempty(&[
            &hier_court,
            &strip_all_whitespace(&record.court_name_raw),
            &html_court,
        ]);
        let doc_type = first_nonempty(&[&hier_doc_type, &html_doc_type]);
        let doc_id = first_nonempty(&[
            &html_doc_id,
            &strip_all_whitespace(&record.case_number),
        ]);

        Self {
            court,
            doc_type,
            doc_id,
        }
    }
}

fn first_nonempty(candidates: &[&str]) -> String {
    candidates
        .iter()
        .find(|c| !c.is_empty())
        .map(|c| c.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(html: &str) -> DocumentRecord {
        DocumentRecord {
            title: "某某公司执行裁定书".to_string(),
            court_name_raw: "南昌市中级人民法院".to_string(),
            case_number: "（2024）赣01执123号".to_string(),
            hierarchy: "江西省南昌市中级人民法院\n执行裁定书\n（2024）赣01执123号"
                .to_string(),
            html: html.to_string(),
            document_id: "ws-0001".to_string(),
        }
    }

    const SAMPLE_HTML: &str = "\
        <div style='TEXT-ALIGN: center; FONT-SIZE: 18pt'>江西省南昌市中级人民法院</div>\
        <div style='TEXT-ALIGN: center; FONT-SIZE: 18pt'>执行裁定书</div>\
        <div style='TEXT-ALIGN: right'>（2024）赣01执123号</div>\
        <div style='TEXT-INDENT: 30pt'>申请执行人某某公司与被执行人某某。</div>\
        <div style='TEXT-INDENT: 30pt'>本裁定送达后即发生法律效力。</div>\
        <div style='TEXT-ALIGN: right'>审判长　张某某</div>\
        <div style='TEXT-ALIGN: right'>二〇二四年十月十五日</div>\
        <div style='TEXT-ALIGN: right'>书记员　李某</div>";

    #[test]
    fn test_successful_conversion() {
        let outcome = convert_record(record(SAMPLE_HTML));
        let doc = outcome.success().expect("conversion should succeed");
        assert_eq!(doc.court, "江西省南昌市中级人民法院");
        assert_eq!(doc.doc_type, "执行裁定书");
        assert_eq!(doc.doc_id, "（2024）赣01执123号");
        assert!(doc.wikitext.contains("|loc = 江西省"));
        assert!(doc.wikitext.contains("{{gap}}申请执行人某某公司与被执行人某某。"));
    }

    #[test]
    fn test_hierarchy_court_outranks_html() {
        let mut r = record(SAMPLE_HTML);
        r.hierarchy = "某某省某某县人民法院\n民事判决书".to_string();
        let outcome = convert_record(r);
        let doc = outcome.success().unwrap();
        assert_eq!(doc.court, "某某省某某县人民法院");
        assert_eq!(doc.doc_type, "民事判决书");
    }

    #[test]
    fn test_missing_hierarchy_falls_back_to_html() {
        let mut r = record(SAMPLE_HTML);
        r.hierarchy = String::new();
        r.court_name_raw = String::new();
        let outcome = convert_record(r);
        let doc = outcome.success().unwrap();
        assert_eq!(doc.court, "江西省南昌市中级人民法院");
    }

    #[test]
    fn test_missing_title_fails_field_extraction() {
        let mut r = record(SAMPLE_HTML);
        r.title = "  ".to_string();
        match convert_record(r) {
            ConversionOutcome::Failure(f) => {
                assert_eq!(f.error_stage, "field_extraction");
                assert_eq!(f.record.document_id, "ws-0001");
            }
            ConversionOutcome::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_missing_html_fails_field_extraction() {
        let outcome = convert_record(record(""));
        match outcome {
            ConversionOutcome::Failure(f) => assert_eq!(f.error_stage, "field_extraction"),
            ConversionOutcome::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_body_only_junk_fails_render() {
        let html = "\
            <div style='TEXT-INDENT: 30pt'>-1-</div>\
            <div style='TEXT-ALIGN: right'>审判长　张某</div>\
            <div style='TEXT-ALIGN: right'>二〇二四年一月一日</div>";
        let outcome = convert_record(record(html));
        match outcome {
            ConversionOutcome::Failure(f) => assert_eq!(f.error_stage, "render"),
            ConversionOutcome::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_title_cleanup() {
        let mut r = record(SAMPLE_HTML);
        r.title = "阿凡提．某某 执 行 裁 定 书".to_string();
        let doc = convert_record(r);
        let doc = doc.success().unwrap();
        assert_eq!(doc.title, "阿凡提·某某执行裁定书");
    }
}
