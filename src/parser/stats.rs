use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::vocab::{Skill, SKILL_TOKENS};
use crate::guide::StatNeed;

/// `[level] <n> <skill>`; longer tokens first so "runecrafting" beats "runecraft".
static STAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mut tokens = SKILL_TOKENS.to_vec();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));
    Regex::new(&format!(r"(?i)\b(?:level\s+)?(\d+)\s+({})\b", tokens.join("|"))).unwrap()
});

/// Skill requirements in first-seen order; one record per skill, first level wins.
pub fn extract_stats(text: &str) -> Vec<StatNeed> {
    let mut seen = HashSet::new();
    let mut stats = Vec::new();

    for caps in STAT_RE.captures_iter(text) {
        let Ok(level) = caps[1].parse::<u32>() else {
            continue;
        };
        let Some(skill) = Skill::from_token(&caps[2]) else {
            continue;
        };
        if (1..=99).contains(&level) && seen.insert(skill) {
            stats.push(StatNeed { skill, level });
        }
    }

    stats
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(text: &str) -> Vec<(Skill, u32)> {
        extract_stats(text)
            .into_iter()
            .map(|s| (s.skill, s.level))
            .collect()
    }

    #[test]
    fn level_keyword_optional() {
        assert_eq!(
            stats("level 35 woodcutting and 15 firemaking"),
            vec![(Skill::Woodcutting, 35), (Skill::Firemaking, 15)]
        );
    }

    #[test]
    fn out_of_range_levels_dropped() {
        assert!(stats("0 attack").is_empty());
        assert!(stats("100 attack").is_empty());
        assert_eq!(stats("99 Attack"), vec![(Skill::Attack, 99)]);
        assert_eq!(stats("1 attack"), vec![(Skill::Attack, 1)]);
    }

    #[test]
    fn abbreviations_dedup_with_full_names() {
        assert_eq!(
            stats("Get 31 wc, then 40 Woodcutting and 50 WOODCUTTING"),
            vec![(Skill::Woodcutting, 31)]
        );
    }

    #[test]
    fn invalid_level_does_not_claim_skill() {
        assert_eq!(
            stats("100 magic first, then 55 magic"),
            vec![(Skill::Magic, 55)]
        );
    }

    #[test]
    fn whole_word_tokens_only() {
        assert!(stats("5 hpots and 3 rcs").is_empty());
        assert_eq!(stats("43 runecrafting"), vec![(Skill::Runecraft, 43)]);
        assert_eq!(stats("20 defense, 30 range"), vec![(Skill::Defence, 20), (Skill::Ranged, 30)]);
    }

    #[test]
    fn huge_levels_ignored() {
        assert!(stats("123456789012345678901 mining").is_empty());
    }
}
