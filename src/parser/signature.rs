//! Signature-region parsing.
//!
//! The tail of a court document carries right-aligned lines naming the
//! bench (title plus personal name), the decision date, and the clerks,
//! sometimes followed by appendix notes. OCR injects spaces anywhere, so
//! title matching tolerates internal whitespace. Entries with a judicial
//! title go to the judges list, all other recognized titles to clerks;
//! position relative to the date line does not decide the bucket.

use regex::Regex;

use crate::cleanup::remove_cjk_spaces;
use crate::model::{Alignment, ContentBlock, DateParts, SignatureInfo, Signatory};

/// Recognized signature titles, longest first so `审判长` wins over any
/// shorter accidental prefix. Each may carry a `代理` prefix.
const KNOWN_TITLES: &[&str] = &[
    "人民陪审员",
    "校对责任人",
    "打印责任人",
    "法官助理",
    "审判长",
    "审判员",
    "书记员",
    "执行员",
    "校对人",
];

/// Titles whose bearers are members of the bench.
const JUDGE_TITLES: &[&str] = &["审判长", "审判员", "人民陪审员"];

/// Lines at most this many characters long may still be a signatory even
/// when no known title matches (a bare name continuing a previous entry).
const MAX_BARE_NAME_CHARS: usize = 8;

/// Parse the signature-region blocks (document order) into structured
/// signatories, a date, and trailing notes.
pub fn parse_signature_region(blocks: &[&ContentBlock]) -> SignatureInfo {
    let parser = SignatureParser::new();
    let mut info = SignatureInfo::default();
    let mut saw_date = false;
    let mut last_bucket_is_judge = true;
    // Alignment of the most recent line that parsed as a signatory; a bare
    // name is only accepted as a continuation when it lines up with it.
    let mut last_alignment: Option<Alignment> = None;

    for block in blocks {
        let line = remove_cjk_spaces(block.text.trim());
        if line.is_empty() {
            continue;
        }

        if !saw_date {
            // The date may be embedded in a longer closing line, e.g.
            // （此页无正文）二〇二四年十月十五日.
            if let Some(span) = parser.find_date(&line) {
                info.date = parser.parse_date(span).unwrap_or_default();
                info.date_raw = Some(span.to_string());
                saw_date = true;
                continue;
            }
        }

        if saw_date {
            // After the date only clerk entries are expected; anything
            // unrecognized is an appendix note.
            match parser.parse_signatory(&line) {
                Some(sig) => {
                    if is_judge_title(&sig.title) {
                        info.judges.push(sig);
                    } else {
                        info.clerks.push(sig);
                    }
                }
                None => info.trailing_notes.push(line),
            }
            continue;
        }

        match parser.parse_signatory(&line) {
            Some(sig) => {
                last_bucket_is_judge = is_judge_title(&sig.title);
                last_alignment = Some(block.alignment);
                if last_bucket_is_judge {
                    info.judges.push(sig);
                } else {
                    info.clerks.push(sig);
                }
            }
            None if line.chars().count() <= MAX_BARE_NAME_CHARS
                && last_alignment == Some(block.alignment) =>
            {
                // Short untitled line continuing the previous entry run.
                let raw = Signatory::raw(line);
                if last_bucket_is_judge {
                    info.judges.push(raw);
                } else {
                    info.clerks.push(raw);
                }
            }
            None => info.trailing_notes.push(line),
        }
    }

    info
}

fn is_judge_title(title: &str) -> bool {
    let canonical = title.strip_prefix("代理").unwrap_or(title);
    JUDGE_TITLES.contains(&canonical)
}

struct SignatureParser {
    /// One pattern per known title, OCR-space tolerant, longest first.
    title_res: Vec<(String, Regex)>,
    date_full_cn: Regex,
    date_full_num: Regex,
    date_year_month_cn: Regex,
    date_year_month_num: Regex,
}

impl SignatureParser {
    fn new() -> Self {
        let title_res = KNOWN_TITLES
            .iter()
            .map(|title| {
                let spaced: String = title
                    .chars()
                    .map(|c| format!(r"{c}\s*"))
                    .collect();
                let pattern = format!(r"^(代\s*理\s*)?({spaced})[：:\s]*(.*)$");
                (title.to_string(), Regex::new(&pattern).unwrap())
            })
            .collect();

        Self {
            title_res,
            date_full_cn: Regex::new(
                r"[〇零一二三四五六七八九]{2,4}年[一二三四五六七八九十]{1,3}月[一二三四五六七八九十]{1,3}日",
            )
            .unwrap(),
            date_full_num: Regex::new(r"\d{4}年\d{1,2}月\d{1,2}日").unwrap(),
            date_year_month_cn: Regex::new(
                r"[〇零一二三四五六七八九]{2,4}年[一二三四五六七八九十]{1,3}月",
            )
            .unwrap(),
            date_year_month_num: Regex::new(r"\d{4}年\d{1,2}月").unwrap(),
        }
    }

    /// Locate a date string anywhere in the line. Full dates are tried
    /// before year-month forms so a partial pattern never truncates a
    /// complete one.
    fn find_date<'a>(&self, line: &'a str) -> Option<&'a str> {
        [
            &self.date_full_cn,
            &self.date_full_num,
            &self.date_year_month_cn,
            &self.date_year_month_num,
        ]
        .iter()
        .find_map(|re| re.find(line).map(|m| m.as_str()))
    }

    /// Split a signature line into canonical title and name. The name has
    /// all internal whitespace removed.
    fn parse_signatory(&self, line: &str) -> Option<Signatory> {
        for (title, re) in &self.title_res {
            if let Some(caps) = re.captures(line) {
                let name: String = caps[3].chars().filter(|c| !c.is_whitespace()).collect();
                if name.is_empty() {
                    continue;
                }
                let canonical = if caps.get(1).is_some() {
                    format!("代理{title}")
                } else {
                    title.clone()
                };
                return Some(Signatory::new(canonical, name));
            }
        }
        None
    }

    /// Extract the date components present in a date line. Absent
    /// components stay `None`.
    fn parse_date(&self, line: &str) -> Option<DateParts> {
        let year_end = line.find('年')?;
        let year_str = &line[..year_end];
        let rest = &line[year_end + '年'.len_utf8()..];
        let month_end = rest.find('月')?;
        let month_str = &rest[..month_end];
        let tail = &rest[month_end + '月'.len_utf8()..];
        let day_str = tail.find('日').map(|end| &tail[..end]);

        let parts = DateParts {
            year: parse_year(year_str),
            month: parse_cn_or_digit(month_str).map(|v| v as u8),
            day: day_str.and_then(parse_cn_or_digit).map(|v| v as u8),
        };
        if parts.is_empty() {
            None
        } else {
            Some(parts)
        }
    }
}

/// Years are written digit by digit, e.g. `二〇二四` is 2024.
fn parse_year(s: &str) -> Option<u16> {
    if let Ok(v) = s.parse::<u16>() {
        return Some(v);
    }
    let mut value: u16 = 0;
    for c in s.chars() {
        let d = cn_digit(c)?;
        value = value.checked_mul(10)?.checked_add(d as u16)?;
    }
    if value == 0 {
        None
    } else {
        Some(value)
    }
}

/// Months and days compose with `十`: `十` is 10, `十五` is 15, `二十` is
/// 20, `二十八` is 28.
fn parse_cn_or_digit(s: &str) -> Option<u32> {
    if let Ok(v) = s.parse::<u32>() {
        return Some(v);
    }
    match s.find('十') {
        None => {
            let mut chars = s.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some(cn_digit(c)? as u32)
        }
        Some(pos) => {
            let (before, after) = s.split_at(pos);
            let after = &after['十'.len_utf8()..];
            let tens = if before.is_empty() {
                1
            } else {
                cn_digit(before.chars().next()?)? as u32
            };
            let ones = if after.is_empty() {
                0
            } else {
                cn_digit(after.chars().next()?)? as u32
            };
            Some(tens * 10 + ones)
        }
    }
}

fn cn_digit(c: char) -> Option<u8> {
    match c {
        '〇' | '零' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}
