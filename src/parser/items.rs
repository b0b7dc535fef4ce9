use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::vocab::{
    contains_skip_word, is_skill_token, is_skip_word, number_word_value, ITEM_VERBS,
    NUMBER_WORDS, NUMERIC_CONNECTIVES, WORD_CONNECTIVES,
};
use crate::guide::ItemNeed;

const MAX_QTY: u64 = 1000;
const MAX_PHRASE_WORDS: usize = 3;
const FIRST_WORD_TAIL: usize = 20;
const SECOND_WORD_LEN: usize = 15;

static QTY_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d+)\s+").unwrap());

/// `<verb> <quantity word> `. `and` is accepted here and vetted separately:
/// it only counts when it continues a list of already-accepted items.
static WORD_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let words: Vec<&str> = NUMBER_WORDS.iter().map(|(w, _)| *w).collect();
    Regex::new(&format!(
        r"(?i)({}|and)\s+({})\s+",
        ITEM_VERBS.join("|"),
        words.join("|")
    ))
    .unwrap()
});

static NUMERIC_END_RE: LazyLock<Regex> = LazyLock::new(|| terminator(NUMERIC_CONNECTIVES));
static WORD_END_RE: LazyLock<Regex> = LazyLock::new(|| terminator(WORD_CONNECTIVES));

/// Anchored check for what may follow an item phrase: punctuation or a bracket,
/// a connective word, or end of text.
fn terminator(connectives: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)^(?:\s*[,.()]|\s+(?:{})|$)", connectives.join("|"))).unwrap()
}

#[derive(Default)]
struct ItemSet {
    seen: HashSet<String>,
    items: Vec<ItemNeed>,
    /// Byte offsets where accepted item phrases end.
    phrase_ends: Vec<usize>,
}

impl ItemSet {
    fn insert(&mut self, name: &str, qty: u32) -> bool {
        let key = name.to_lowercase();
        if self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key);
        self.items.push(ItemNeed {
            name: title_case(name),
            qty,
        });
        true
    }

    fn continues_list(&self, text: &str, and_start: usize) -> bool {
        let before = &text[..and_start];
        if !before.ends_with(char::is_whitespace) {
            return false;
        }
        let end = before.trim_end().len();
        self.phrase_ends.contains(&end)
    }
}

/// Items with quantities mentioned in normalized text. Numeric quantities are
/// scanned first, so they win name collisions against spelled-out ones.
pub fn extract_items(text: &str) -> Vec<ItemNeed> {
    let mut found = ItemSet::default();
    numeric_pass(text, &mut found);
    word_pass(text, &mut found);
    found.items
}

// ── Numeric pass: "110 logs", "2 air runes" ──

fn numeric_pass(text: &str, found: &mut ItemSet) {
    let mut pos = 0;
    while let Some(caps) = QTY_HEAD_RE.captures_at(text, pos) {
        let head = caps.get(0).map_or(pos..pos, |m| m.range());
        let Some(end) = numeric_phrase_end(text, head.end) else {
            pos = head.start + 1;
            continue;
        };
        pos = end;

        let phrase = &text[head.end..end];
        if let Some(name) = accept_numeric(&caps[1], phrase) {
            found.phrase_ends.push(end);
            let qty = caps[1].parse::<u32>().unwrap_or(0);
            found.insert(&name, qty);
        }
    }
}

/// End of the item phrase starting at `start`: a first word, optionally a
/// second one, followed by a terminator. Longer candidates are tried first.
fn numeric_phrase_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if !bytes.get(start)?.is_ascii_alphabetic() {
        return None;
    }

    let tail = word_run(bytes, start + 1, FIRST_WORD_TAIL);
    for first_len in (1..=tail).rev() {
        let first_end = start + 1 + first_len;

        let gap = bytes[first_end..]
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        if gap > 0 {
            let second_start = first_end + gap;
            let second = word_run(bytes, second_start, SECOND_WORD_LEN);
            for second_len in (1..=second).rev() {
                let end = second_start + second_len;
                if NUMERIC_END_RE.is_match(&text[end..]) {
                    return Some(end);
                }
            }
        }

        if NUMERIC_END_RE.is_match(&text[first_end..]) {
            return Some(first_end);
        }
    }
    None
}

fn accept_numeric(qty: &str, phrase: &str) -> Option<String> {
    // overflow means far above the cap
    let qty = qty.parse::<u64>().unwrap_or(u64::MAX);
    if qty > MAX_QTY {
        trace!("skip {:?}: quantity {} over cap", phrase, qty);
        return None;
    }

    let name = phrase.trim().to_lowercase();
    let words: Vec<&str> = name.split_whitespace().collect();
    let first = words.first()?;

    if is_skill_token(first) {
        trace!("skip {:?}: skill level", name);
        return None;
    }
    if is_skip_word(first) || is_skip_word(&name) || words.iter().any(|w| is_skip_word(w)) {
        trace!("skip {:?}: non-item word", name);
        return None;
    }
    if words.len() > MAX_PHRASE_WORDS {
        return None;
    }

    let name = singularize(&name);
    if qty == 0 || name.len() <= 1 {
        return None;
    }
    Some(name)
}

// ── Word pass: "grab a knife", "take two buckets" ──

fn word_pass(text: &str, found: &mut ItemSet) {
    let mut pos = 0;
    while let Some(caps) = WORD_HEAD_RE.captures_at(text, pos) {
        let head = caps.get(0).map_or(pos..pos, |m| m.range());
        let is_and = caps[1].eq_ignore_ascii_case("and");
        if is_and && !found.continues_list(text, head.start) {
            pos = head.start + 1;
            continue;
        }
        let Some(end) = word_phrase_end(text, head.end) else {
            pos = head.start + 1;
            continue;
        };
        pos = end;

        let name = text[head.end..end].trim().to_lowercase();
        if is_skill_token(&name) {
            trace!("skip {:?}: skill name", name);
            continue;
        }
        if is_skip_word(&name) || contains_skip_word(&name) {
            trace!("skip {:?}: contains non-item word", name);
            continue;
        }

        let qty = number_word_value(&caps[2]);
        if qty > 0 && name.len() > 1 {
            found.phrase_ends.push(end);
            found.insert(&name, qty);
        }
    }
}

/// Single-word noun, shortest first, at least two characters.
fn word_phrase_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if !bytes.get(start)?.is_ascii_alphabetic() {
        return None;
    }
    let tail = word_run(bytes, start + 1, usize::MAX);
    (1..=tail)
        .map(|len| start + 1 + len)
        .find(|&end| WORD_END_RE.is_match(&text[end..]))
}

// ── Helpers ──

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'-' || b == b'\''
}

fn word_run(bytes: &[u8], start: usize, max: usize) -> usize {
    bytes
        .get(start..)
        .unwrap_or_default()
        .iter()
        .take(max)
        .take_while(|b| is_word_byte(**b))
        .count()
}

/// Trailing plural `s` dropped, `es` after a sibilant ("ashes", "torches").
/// Phrases of three characters or fewer, and `ss` endings, are left alone.
fn singularize(name: &str) -> String {
    if name.len() <= 3 || !name.ends_with('s') || name.ends_with("ss") {
        return name.to_string();
    }
    for suffix in ["shes", "ches", "sses"] {
        if name.ends_with(suffix) {
            return name[..name.len() - 2].to_string();
        }
    }
    name[..name.len() - 1].to_string()
}

/// Capitalise the first letter of every letter run, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

// ── Tests ──
