use std::sync::LazyLock;

use regex::Regex;

use super::normalize::collapse_ws;
use super::vocab::INSTRUCTION_VERB_SET;
use crate::guide::Instruction;

/// Sentence end followed by whitespace and an uppercase letter. The split point
/// sits after the punctuation; the next sentence starts at the uppercase letter.
static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+[A-Z]").unwrap());

/// Split a normalized paragraph into atomic instructions, in reading order.
pub fn segment(text: &str) -> Vec<Instruction> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .flat_map(split_clauses)
        .map(|part| collapse_ws(&part))
        .filter(|part| !part.is_empty())
        .map(|text| Instruction { text })
        .collect()
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END_RE.find_iter(text) {
        // punctuation and the uppercase letter are both single ASCII bytes
        sentences.push(&text[start..m.start() + 1]);
        start = m.end() - 1;
    }
    sentences.push(&text[start..]);
    sentences
}

/// Break a sentence at ", " only where the next clause opens with an action
/// verb. The first clause never starts a split; other commas are re-joined.
fn split_clauses(sentence: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for (i, clause) in sentence.split(", ").enumerate() {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }

        let first_word = clause
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase();

        if i > 0 && INSTRUCTION_VERB_SET.contains(first_word.as_str()) {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            current.push_str(clause);
        } else {
            if !current.is_empty() {
                current.push_str(", ");
            }
            current.push_str(clause);
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(text: &str) -> Vec<String> {
        segment(text).into_iter().map(|i| i.text).collect()
    }

    #[test]
    fn empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   ").is_empty());
    }

    #[test]
    fn splits_sentences_on_uppercase() {
        assert_eq!(
            texts("Bank at Lumbridge. Run north! Is it open? Yes."),
            vec!["Bank at Lumbridge.", "Run north!", "Is it open?", "Yes."]
        );
    }

    #[test]
    fn keeps_decimals_and_lowercase_continuations() {
        assert_eq!(
            texts("Wait 1.5 seconds. then e.g. run"),
            vec!["Wait 1.5 seconds. then e.g. run"]
        );
    }

    #[test]
    fn splits_on_comma_before_action_verb() {
        assert_eq!(
            texts("Kill the guard, loot the chest, grab the key, then talk to Bob"),
            vec!["Kill the guard, loot the chest", "grab the key, then talk to Bob"]
        );
    }

    #[test]
    fn first_clause_never_split() {
        assert_eq!(
            texts("Grab a knife, talk to Hans."),
            vec!["Grab a knife", "talk to Hans."]
        );
        assert_eq!(texts("Bank, bank, bank"), vec!["Bank", "bank", "bank"]);
    }

    #[test]
    fn trailing_clause_flushed() {
        let out = texts("Head east, cross the bridge");
        assert_eq!(out, vec!["Head east, cross the bridge"]);
    }

    fn non_ws(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace() && *c != ',').collect()
    }

    proptest! {
        #[test]
        fn preserves_content(s in "[A-Za-z .,!?]{0,80}") {
            let joined = segment(&s).into_iter().map(|i| i.text).collect::<Vec<_>>().join(" ");
            prop_assert_eq!(non_ws(&joined), non_ws(&s));
        }
    }
}
