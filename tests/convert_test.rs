//! End-to-end conversion tests over realistic document HTML.

use wenshu2wiki::{convert_record, ConversionOutcome, DocumentRecord};

fn record(title: &str, hierarchy: &str, html: &str) -> DocumentRecord {
    DocumentRecord {
        title: title.to_string(),
        court_name_raw: String::new(),
        case_number: String::new(),
        hierarchy: hierarchy.to_string(),
        html: html.to_string(),
        document_id: "test-doc-1".to_string(),
    }
}

const RULING_HTML: &str = concat!(
    "<div style='TEXT-ALIGN: center; FONT-SIZE: 22pt'>江西省南昌市中级人民法院</div>",
    "<div style='TEXT-ALIGN: center; FONT-SIZE: 18pt'>执 行 裁 定 书</div>",
    "<div style='TEXT-ALIGN: right'>（2024）赣01执恢123号</div>",
    "<div style='TEXT-INDENT: 30pt'>申请执行人某某有限公司与被执行人某某，本院立案执行。</div>",
    "<div style='TEXT-INDENT: 30pt'>本裁定送达后即发生法律效力。</div>",
    "<div>-1-</div>",
    "<div style='TEXT-ALIGN: right'>审 判 长　张某某</div>",
    "<div style='TEXT-ALIGN: right'>二〇二四年十月十五日</div>",
);

#[test]
fn converts_typical_ruling_end_to_end() {
    let outcome = convert_record(record(
        "某某有限公司执行裁定书",
        "江西省南昌市中级人民法院\n执行裁定书\n（2024）赣01执恢123号",
        RULING_HTML,
    ));
    let doc = outcome.success().expect("conversion should succeed");

    assert_eq!(doc.court, "江西省南昌市中级人民法院");
    assert_eq!(doc.doc_type, "执行裁定书");
    assert_eq!(doc.doc_id, "（2024）赣01执恢123号");
    assert_eq!(doc.wenshu_id, "test-doc-1");

    let w = &doc.wikitext;
    // Header template with the full date.
    assert!(w.contains("|title = 某某有限公司执行裁定书"));
    assert!(w.contains("|type = 中华人民共和国执行裁定书"));
    assert!(w.contains("|year = 2024"));
    assert!(w.contains("|month = 10"));
    assert!(w.contains("|day = 15"));
    assert!(w.contains("|loc = 江西省南昌市"));

    // Centered title, right-aligned case number, indented body paragraphs
    // in document order.
    assert!(w.contains("{{larger|江西省南昌市中级人民法院}}"));
    assert!(w.contains("<div align=\"right\">\n（2024）赣01执恢123号\n</div>"));
    let first = w.find("{{gap}}申请执行人某某有限公司").unwrap();
    let second = w.find("{{gap}}本裁定送达后即发生法律效力。").unwrap();
    assert!(first < second);

    // The page-number line is filtered out.
    assert!(!w.contains("-1-"));

    // One judge, no clerks, OCR spacing repaired then re-spaced by
    // convention.
    assert!(w.contains("{{署名|"));
    assert!(w.contains("审\u{3000}判\u{3000}长\u{3000}\u{3000}张某某"));
    assert!(w.contains("{{印|江西省南昌市中级人民法院|center=国徽}}"));
    assert!(w.contains("二〇二四年十月十五日"));
    assert!(w.ends_with("{{PD-PRC-exempt}}\n"));
}

#[test]
fn conversion_is_deterministic() {
    let make = || {
        convert_record(record(
            "某某有限公司执行裁定书",
            "江西省南昌市中级人民法院\n执行裁定书",
            RULING_HTML,
        ))
    };
    let a = make();
    let b = make();
    assert_eq!(
        a.success().unwrap().wikitext,
        b.success().unwrap().wikitext
    );
}

#[test]
fn conversion_is_total_over_degenerate_inputs() {
    // None of these may panic; each must yield a tagged failure.
    let cases = [
        ("", "h", "<div>正文</div>", "field_extraction"),
        ("标题", "h", "", "field_extraction"),
        ("标题", "h", "   ", "field_extraction"),
        ("标题", "h", "<div> </div>", "block_detect"),
    ];
    for (title, hierarchy, html, expected_stage) in cases {
        match convert_record(record(title, hierarchy, html)) {
            ConversionOutcome::Failure(f) => assert_eq!(f.error_stage, expected_stage),
            ConversionOutcome::Success(_) => panic!("expected failure for {title:?}/{html:?}"),
        }
    }
}

#[test]
fn failure_preserves_original_record() {
    let outcome = convert_record(record("标题", "某法院", ""));
    match outcome {
        ConversionOutcome::Failure(f) => {
            assert_eq!(f.record.title, "标题");
            assert_eq!(f.record.hierarchy, "某法院");
        }
        ConversionOutcome::Success(_) => panic!("expected failure"),
    }
}

#[test]
fn embedded_date_in_closing_line_is_extracted() {
    let html = concat!(
        "<div style='TEXT-INDENT: 30pt'>正文内容。</div>",
        "<div style='TEXT-ALIGN: right'>审判员　李某</div>",
        "<div style='TEXT-ALIGN: right'>（此页无正文）二〇二四年十月十五日</div>",
    );
    let doc = convert_record(record("某裁定书", "某法院\n裁定书", html));
    let w = &doc.success().unwrap().wikitext;
    assert!(w.contains("|year = 2024"));
    assert!(w.contains("|month = 10"));
    assert!(w.contains("|day = 15"));
    assert!(w.contains("\n二〇二四年十月十五日\n"));
}

#[test]
fn zero_space_and_over_spaced_signatures_converge() {
    let make = |sig_line: &str| {
        let html = format!(
            "<div style='TEXT-INDENT: 30pt'>正文内容。</div>\
             <div style='TEXT-ALIGN: right'>{sig_line}</div>\
             <div style='TEXT-ALIGN: right'>二〇二四年十月十五日</div>"
        );
        convert_record(record("某裁定书", "某法院\n裁定书", &html))
    };
    let tight = make("审判长张三");
    let spaced = make("审 判 长　张 三");
    let tight_w = &tight.success().unwrap().wikitext;
    let spaced_w = &spaced.success().unwrap().wikitext;
    assert_eq!(tight_w, spaced_w);
    assert!(tight_w.contains("审\u{3000}判\u{3000}长\u{3000}\u{3000}张\u{3000}三"));
}

#[test]
fn cell_less_table_does_not_fail_record() {
    let html = concat!(
        "<div style='TEXT-INDENT: 30pt'>正文内容。</div>",
        "<table></table>",
        "<div style='TEXT-ALIGN: right'>审判员　李某</div>",
        "<div style='TEXT-ALIGN: right'>二〇二四年十月十五日</div>",
    );
    let outcome = convert_record(record("某裁定书", "某法院\n裁定书", html));
    let w = &outcome.success().expect("empty table must not fail").wikitext;
    assert!(!w.contains("wikitable"));
    assert!(w.contains("{{gap}}正文内容。"));
}

#[test]
fn partial_date_keeps_only_present_components() {
    let html = concat!(
        "<div style='TEXT-INDENT: 30pt'>正文内容。</div>",
        "<div style='TEXT-ALIGN: right'>审判员　李某</div>",
        "<div style='TEXT-ALIGN: right'>二〇二四年十月</div>",
    );
    let doc = convert_record(record("某裁定书", "某法院\n裁定书", html));
    let w = &doc.success().unwrap().wikitext;
    assert!(w.contains("|year = 2024"));
    assert!(w.contains("|month = 10"));
    assert!(w.contains("|day = \n"));
    assert!(w.contains("二〇二四年十月"));
}

#[test]
fn clerks_and_judges_split_by_title_not_position() {
    let html = concat!(
        "<div style='TEXT-INDENT: 30pt'>正文内容。</div>",
        "<div style='TEXT-ALIGN: right'>书记员　赵某</div>",
        "<div style='TEXT-ALIGN: right'>审判长　钱某某</div>",
        "<div style='TEXT-ALIGN: right'>二〇二三年五月四日</div>",
    );
    let doc = convert_record(record("某判决书", "某法院\n判决书", html));
    let w = doc.success().unwrap().wikitext.clone();

    // The clerk appears after the date line inside the signature block
    // even though it preceded the judge in the source.
    let date_pos = w.find("二〇二三年五月四日").unwrap();
    let clerk_pos = w
        .find("书\u{3000}记\u{3000}员\u{3000}\u{3000}赵\u{3000}某")
        .unwrap();
    let judge_pos = w.find("审\u{3000}判\u{3000}长\u{3000}\u{3000}钱某某").unwrap();
    assert!(judge_pos < date_pos);
    assert!(clerk_pos > date_pos);
}

#[test]
fn two_column_metadata_table_renders_as_field_lines() {
    let html = concat!(
        "<div style='TEXT-INDENT: 30pt'>正文内容。</div>",
        "<table>",
        "<tr><td>案号</td><td>（2024）京01执1号</td></tr>",
        "<tr><td>承办人</td><td>张三</td></tr>",
        "</table>",
        "<div style='TEXT-ALIGN: right'>审判员　孙某</div>",
        "<div style='TEXT-ALIGN: right'>2024年7月1日</div>",
    );
    let doc = convert_record(record("某通知书", "某法院\n通知书", html));
    let w = &doc.success().unwrap().wikitext;
    assert!(w.contains("案号: （2024）京01执1号"));
    assert!(w.contains("承办人: 张三"));
    assert!(!w.contains("wikitable"));
}

#[test]
fn general_table_renders_as_wikitable_with_replicated_merges() {
    let html = concat!(
        "<div style='TEXT-INDENT: 30pt'>正文内容。</div>",
        "<table>",
        "<tr><td rowspan='2'>本院查明的事实如下。</td><td>证据一</td><td>已质证</td></tr>",
        "<tr><td>证据二</td><td>已质证</td></tr>",
        "</table>",
        "<div style='TEXT-ALIGN: right'>审判员　周某</div>",
        "<div style='TEXT-ALIGN: right'>2024年7月1日</div>",
    );
    let doc = convert_record(record("某判决书", "某法院\n判决书", html));
    let w = &doc.success().unwrap().wikitext;
    assert!(w.contains("{| class=\"wikitable\""));
    assert_eq!(w.matches("本院查明的事实如下。").count(), 2);
    assert!(!w.contains("rowspan"));
}

#[test]
fn appendix_notes_follow_signature_block() {
    let html = concat!(
        "<div style='TEXT-INDENT: 30pt'>正文内容。</div>",
        "<div style='TEXT-ALIGN: right'>审判员　吴某</div>",
        "<div style='TEXT-ALIGN: right'>二〇二二年八月九日</div>",
        "<div>附：本案适用的法律条文全文。</div>",
    );
    let doc = convert_record(record("某裁定书", "某法院\n裁定书", html));
    let w = &doc.success().unwrap().wikitext;
    let note = w.find("附：本案适用的法律条文全文。").unwrap();
    let footer = w.find("{{PD-PRC-exempt}}").unwrap();
    assert!(note > w.find("{{署名|").unwrap());
    assert!(note < footer);
}
