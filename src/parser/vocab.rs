use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Skill {
    Attack,
    Defence,
    Strength,
    Hitpoints,
    Ranged,
    Prayer,
    Magic,
    Cooking,
    Woodcutting,
    Fletching,
    Fishing,
    Firemaking,
    Crafting,
    Smithing,
    Mining,
    Herblore,
    Agility,
    Thieving,
    Slayer,
    Farming,
    Runecraft,
    Hunter,
    Construction,
    Sailing,
}

impl Skill {
    #[allow(dead_code)]
    pub const ALL: [Skill; 24] = [
        Skill::Attack,
        Skill::Defence,
        Skill::Strength,
        Skill::Hitpoints,
        Skill::Ranged,
        Skill::Prayer,
        Skill::Magic,
        Skill::Cooking,
        Skill::Woodcutting,
        Skill::Fletching,
        Skill::Fishing,
        Skill::Firemaking,
        Skill::Crafting,
        Skill::Smithing,
        Skill::Mining,
        Skill::Herblore,
        Skill::Agility,
        Skill::Thieving,
        Skill::Slayer,
        Skill::Farming,
        Skill::Runecraft,
        Skill::Hunter,
        Skill::Construction,
        Skill::Sailing,
    ];

    /// Resolve a skill token (full name, abbreviation or alternate spelling), any case.
    pub fn from_token(token: &str) -> Option<Skill> {
        let skill = match token.to_ascii_lowercase().as_str() {
            "attack" => Skill::Attack,
            "defence" | "defense" => Skill::Defence,
            "strength" => Skill::Strength,
            "hitpoints" | "hp" => Skill::Hitpoints,
            "ranged" | "range" => Skill::Ranged,
            "prayer" => Skill::Prayer,
            "magic" => Skill::Magic,
            "cooking" => Skill::Cooking,
            "woodcutting" | "wc" => Skill::Woodcutting,
            "fletching" => Skill::Fletching,
            "fishing" => Skill::Fishing,
            "firemaking" | "fm" => Skill::Firemaking,
            "crafting" => Skill::Crafting,
            "smithing" => Skill::Smithing,
            "mining" => Skill::Mining,
            "herblore" => Skill::Herblore,
            "agility" => Skill::Agility,
            "thieving" => Skill::Thieving,
            "slayer" => Skill::Slayer,
            "farming" => Skill::Farming,
            "runecraft" | "runecrafting" | "rc" => Skill::Runecraft,
            "hunter" => Skill::Hunter,
            "construction" => Skill::Construction,
            "sailing" => Skill::Sailing,
            _ => return None,
        };
        Some(skill)
    }

    pub fn name(self) -> &'static str {
        match self {
            Skill::Attack => "Attack",
            Skill::Defence => "Defence",
            Skill::Strength => "Strength",
            Skill::Hitpoints => "Hitpoints",
            Skill::Ranged => "Ranged",
            Skill::Prayer => "Prayer",
            Skill::Magic => "Magic",
            Skill::Cooking => "Cooking",
            Skill::Woodcutting => "Woodcutting",
            Skill::Fletching => "Fletching",
            Skill::Fishing => "Fishing",
            Skill::Firemaking => "Firemaking",
            Skill::Crafting => "Crafting",
            Skill::Smithing => "Smithing",
            Skill::Mining => "Mining",
            Skill::Herblore => "Herblore",
            Skill::Agility => "Agility",
            Skill::Thieving => "Thieving",
            Skill::Slayer => "Slayer",
            Skill::Farming => "Farming",
            Skill::Runecraft => "Runecraft",
            Skill::Hunter => "Hunter",
            Skill::Construction => "Construction",
            Skill::Sailing => "Sailing",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every token `Skill::from_token` accepts, lower-case.
pub const SKILL_TOKENS: &[&str] = &[
    "attack", "defence", "defense", "strength", "hitpoints", "hp", "ranged", "range", "prayer",
    "magic", "cooking", "woodcutting", "wc", "fletching", "fishing", "firemaking", "fm",
    "crafting", "smithing", "mining", "herblore", "agility", "thieving", "slayer", "farming",
    "runecraft", "runecrafting", "rc", "hunter", "construction", "sailing",
];

pub fn is_skill_token(word: &str) -> bool {
    Skill::from_token(word).is_some()
}

/// Verbs that open a new instruction after a comma.
const INSTRUCTION_VERBS: &[&str] = &[
    "grab", "talk", "run", "go", "head", "walk", "teleport", "buy", "sell", "bank", "deposit",
    "withdraw", "use", "open", "close", "click", "enter", "exit", "return", "continue",
    "complete", "finish", "start", "begin", "pick", "pickpocket", "steal", "take", "bring",
    "drop", "destroy", "equip", "wear", "wield", "remove", "unequip", "eat", "drink", "cook",
    "burn", "cut", "chop", "mine", "fish", "fletch", "smith", "craft", "make", "create", "light",
    "read", "speak", "ask", "tell", "give", "receive", "get", "collect", "gather", "dig",
    "search", "examine", "check", "restore", "recharge", "fill", "empty",
];

pub static INSTRUCTION_VERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INSTRUCTION_VERBS.iter().copied().collect());

/// Verbs that give a spelled-out quantity an item context ("grab a knife").
pub const ITEM_VERBS: &[&str] = &[
    "grab", "take", "get", "buy", "bring", "collect", "gather", "pick", "steal", "use", "equip",
    "wear",
];

/// Spelled-out quantities, in the alternation order the word pass tries them.
pub const NUMBER_WORDS: &[(&str, u32)] = &[
    ("a", 1),
    ("an", 1),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

pub fn number_word_value(word: &str) -> u32 {
    let word = word.to_ascii_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| *n)
        .unwrap_or(1)
}

/// Words that end an item phrase after a numeric quantity.
pub const NUMERIC_CONNECTIVES: &[&str] = &[
    "and", "then", "to", "from", "for", "in", "on", "at", "with", "if", "or", "but", "you",
    "the", "your",
];

/// Words that end an item phrase after a spelled-out quantity.
pub const WORD_CONNECTIVES: &[&str] = &[
    "and", "then", "to", "from", "for", "in", "on", "at", "with", "if", "or", "but",
];

/// Temporal, spatial and meta nouns that follow numbers without naming an item.
const SKIP_WORDS: &[&str] = &[
    "gp", "gold", "coins", "times", "minutes", "seconds", "steps", "tiles", "worlds", "world",
    "swag", "look", "female", "character", "male", "account", "step", "authenticator", "guide",
    "quest", "quests", "diary", "diaries", "task", "tasks", "level", "levels", "xp", "exp",
    "experience", "chapter", "section", "more", "point", "points", "lap", "laps", "run", "runs",
    "trip", "trips", "kill", "kills", "time", "hour", "hours", "day", "days", "week", "weeks",
    "north", "south", "east", "west", "northwest", "northeast", "southwest", "southeast", "way",
    "path", "route", "spot", "place", "location", "area", "room", "floor", "total", "required",
    "optional", "recommended", "extra", "spare",
];

pub static SKIP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SKIP_WORDS.iter().copied().collect());

pub fn is_skip_word(word: &str) -> bool {
    SKIP_WORD_SET.contains(word)
}

/// Looser check used by the word-quantity pass: any skip word as a substring.
pub fn contains_skip_word(phrase: &str) -> bool {
    SKIP_WORDS.iter().any(|sw| phrase.contains(sw))
}

// ── Tests ──
