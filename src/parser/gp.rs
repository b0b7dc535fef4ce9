use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::guide::CurrencyRange;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*[-–]\s*(\d+)").unwrap());
static SINGLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*(?:gp|gold)?").unwrap());

/// First amount (a number, or two joined by a dash), optional unit and dash,
/// then whatever is left as the note.
static NOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(?:\s*[-–]\s*\d+)?\s*(?:gp|gold)?\s*[-–]?\s*(.*)").unwrap()
});

/// Parse a GP stack annotation. Never fails; no number means `0..0`.
pub fn parse_currency_range(text: &str) -> CurrencyRange {
    let mut range = CurrencyRange::default();

    if let Some(caps) = RANGE_RE.captures(text) {
        range.min = parse_amount(&caps[1]);
        range.max = parse_amount(&caps[2]);
        if range.min > range.max {
            // kept as written
            debug!("reversed gp range {:?}", text);
        }
    } else if let Some(caps) = SINGLE_RE.captures(text) {
        let value = parse_amount(&caps[1]);
        range.min = value;
        range.max = value;
    }

    range.note = extract_note(text);
    range
}

fn extract_note(text: &str) -> Option<String> {
    let note = match NOTE_RE.captures(text) {
        Some(caps) => caps[1].trim().to_string(),
        None => text.trim().to_string(),
    };
    if note.is_empty() || note.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some(note)
    }
}

fn parse_amount(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

// ── Tests ──
