use unicode_normalization::UnicodeNormalization;

/// Smart punctuation that NFKD would otherwise drop or leave non-ASCII.
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('\u{2019}', "'"),
    ('\u{2018}', "'"),
    ('\u{201c}', "\""),
    ('\u{201d}', "\""),
    ('\u{2013}', "-"),
    ('\u{2014}', "-"),
    ('\u{2026}', "..."),
];

/// Canonical ASCII working form: smart punctuation mapped, NFKD applied,
/// non-ASCII dropped, whitespace collapsed. Idempotent.
pub fn normalize(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => text.push_str(to),
            None => text.push(ch),
        }
    }

    let ascii: String = text.nfkd().filter(char::is_ascii).collect();
    collapse_ws(&ascii)
}

pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn smart_punctuation_to_ascii() {
        assert_eq!(
            normalize("  \u{201c}Don\u{2019}t\u{201d} \u{2013} wait\u{2026} "),
            "\"Don't\" - wait..."
        );
    }

    #[test]
    fn accents_collapse_to_base_letters() {
        assert_eq!(normalize("Caf\u{e9} na\u{ef}ve"), "Cafe naive");
        assert_eq!(normalize("\u{fb01}sh"), "fish");
        assert_eq!(normalize("\u{2192} east"), "east");
    }

    #[test]
    fn whitespace_collapsed() {
        assert_eq!(normalize("a\t\tb\n\n c\u{a0}d"), "a b c d");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    proptest! {
        #[test]
        fn idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(once.is_ascii());
        }
    }
}
