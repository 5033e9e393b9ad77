//! Content line classification
//!
//! Each rule is tried in priority order and the first one that produces an
//! item wins. The last rule always succeeds, so every line becomes some item.

use std::sync::OnceLock;

use regex::Regex;

use super::types::{ContentItem, CONFIDENCE_LABEL};

type Rule = fn(&str) -> Option<ContentItem>;

/// Classification rules in priority order
const RULES: &[Rule] = &[numbered_entry, labeled_line, plain_text];

fn numbered_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.").expect("valid regex"))
}

fn numbered_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+)\.\s*(.+?):\s*(.+)$").expect("valid regex"))
}

fn tenths_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*/\s*10").expect("valid regex"))
}

fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*%").expect("valid regex"))
}

/// Classify a single content line
pub fn classify_line(line: &str) -> ContentItem {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or_else(|| ContentItem::PlainText {
            text: line.to_string(),
        })
}

/// Remove every bold marker from `s`
pub(crate) fn strip_bold(s: &str) -> String {
    s.replace("**", "")
}

/// `1. Name: Description`, or the bold-stripped line when the split fails
fn numbered_entry(line: &str) -> Option<ContentItem> {
    if !numbered_prefix_re().is_match(line) {
        return None;
    }

    let cleaned = strip_bold(line);
    let item = match numbered_split_re().captures(&cleaned) {
        Some(caps) => ContentItem::NumberedEntry {
            index: caps[1].to_string(),
            name: caps[2].trim().to_string(),
            description: caps[3].trim().to_string(),
        },
        None => ContentItem::RawEntry { text: cleaned },
    };
    Some(item)
}

/// `Label: value`, with `Confidence` values turned into metric rows
fn labeled_line(line: &str) -> Option<ContentItem> {
    let (raw_label, raw_value) = line.split_once(':')?;

    let label = raw_label.strip_prefix("* ").unwrap_or(raw_label);
    let label = strip_bold(label).trim().to_string();
    let value = raw_value.trim().to_string();

    if label.eq_ignore_ascii_case(CONFIDENCE_LABEL) {
        if let Some(percent) = confidence_percent(&value) {
            return Some(ContentItem::MetricRow {
                label: CONFIDENCE_LABEL.to_string(),
                raw_value: value,
                percent,
            });
        }
    }

    Some(ContentItem::LabeledBullet { label, value })
}

fn plain_text(line: &str) -> Option<ContentItem> {
    Some(ContentItem::PlainText {
        text: line.to_string(),
    })
}

/// Scale a confidence value to `0..=100`.
///
/// `X/10` is checked before `X%`; anything else has no scale.
pub fn confidence_percent(value: &str) -> Option<f64> {
    if let Some(tenths) = first_number(tenths_re(), value) {
        return Some((tenths * 10.0).clamp(0.0, 100.0));
    }
    first_number(percent_re(), value).map(|pct| pct.clamp(0.0, 100.0))
}

fn first_number(re: &Regex, value: &str) -> Option<f64> {
    re.captures(value)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}
