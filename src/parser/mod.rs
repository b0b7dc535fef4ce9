pub mod gp;
pub mod instructions;
pub mod items;
pub mod normalize;
pub mod stats;
pub mod vocab;

use std::collections::HashSet;

use serde::Serialize;

use crate::guide::{GuideSection, GuideStep, Instruction, ItemNeed, RawStep, StatNeed, StepMeta};

#[derive(Debug, Clone, Serialize)]
pub struct StepExtract {
    pub description: String,
    pub instructions: Vec<Instruction>,
    pub items: Vec<ItemNeed>,
    pub stats: Vec<StatNeed>,
}

/// Normalize once, then segment and extract independently over the same text.
pub fn extract_step(description: &str) -> StepExtract {
    let text = normalize::normalize(description);
    StepExtract {
        instructions: instructions::segment(&text),
        items: items::extract_items(&text),
        stats: stats::extract_stats(&text),
        description: text,
    }
}

/// Append `extra` items whose name is not already present in `primary`.
pub fn merge_items(mut primary: Vec<ItemNeed>, extra: Vec<ItemNeed>) -> Vec<ItemNeed> {
    let mut seen: HashSet<String> = primary.iter().map(ItemNeed::key).collect();
    for item in extra {
        if seen.insert(item.key()) {
            primary.push(item);
        }
    }
    primary
}

/// Build one output step from its raw text fields.
pub fn assemble_step(step_number: usize, raw: &RawStep) -> GuideStep {
    let extract = extract_step(&raw.description);

    let title = normalize::normalize(&raw.title);
    let title = if title.is_empty() {
        format!("Step {}", step_number)
    } else {
        title
    };

    let gp_stack = gp::parse_currency_range(&normalize::normalize(&raw.gp_stack));
    let meta_items = items::extract_items(&normalize::normalize(&raw.items_needed));
    let items_needed = merge_items(extract.items, meta_items);

    let section_title = normalize::normalize(&raw.section.title);
    let section = GuideSection {
        id: if raw.section.id.is_empty() {
            section_title.clone()
        } else {
            raw.section.id.clone()
        },
        title: section_title,
        description: raw.section.description.clone(),
        chapter_title: normalize::normalize(&raw.section.chapter_title),
    };

    GuideStep {
        step_number,
        title,
        description: extract.description,
        instructions: extract.instructions,
        requirements: Vec::new(),
        section,
        meta: StepMeta {
            gp_stack,
            items_needed,
            stats_needed: extract.stats,
            alternative_routes: Vec::new(),
        },
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::vocab::Skill;

    fn load_fixture(name: &str) -> Vec<RawStep> {
        let json = std::fs::read_to_string(format!("tests/fixtures/{}.json", name)).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    fn names(items: &[ItemNeed]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn step_extract_runs_every_pass() {
        let e = extract_step("Grab 5 ashes and a knife.  Chop 20 logs with 15 wc, bank them.");
        assert_eq!(e.description, "Grab 5 ashes and a knife. Chop 20 logs with 15 wc, bank them.");
        assert_eq!(e.instructions.len(), 3);
        assert_eq!(names(&e.items), vec!["Ash", "Log", "Knife"]);
        assert_eq!(e.stats.len(), 1);
        assert_eq!(e.stats[0].skill, Skill::Woodcutting);
    }

    #[test]
    fn merge_keeps_primary_first() {
        let a = vec![ItemNeed { name: "Knife".into(), qty: 1 }];
        let b = vec![
            ItemNeed { name: "knife".into(), qty: 4 },
            ItemNeed { name: "Log".into(), qty: 2 },
        ];
        let merged = merge_items(a, b);
        assert_eq!(names(&merged), vec!["Knife", "Log"]);
        assert_eq!(merged[0].qty, 1);
    }

    #[test]
    fn assemble_defaults() {
        let step = assemble_step(7, &RawStep::default());
        assert_eq!(step.title, "Step 7");
        assert!(step.instructions.is_empty());
        assert_eq!(step.meta.gp_stack.min, 0);
        assert_eq!(step.meta.gp_stack.max, 0);
        assert!(step.meta.gp_stack.note.is_none());
        assert!(step.meta.items_needed.is_empty());
    }

    #[test]
    fn fixture_steps() {
        let raw = load_fixture("steps");
        let steps: Vec<GuideStep> = raw
            .iter()
            .enumerate()
            .map(|(i, r)| assemble_step(i + 1, r))
            .collect();
        assert_eq!(steps.len(), 3);

        let first = &steps[0];
        assert_eq!(first.title, "Step 1.1");
        assert_eq!(first.section.id, "1.1");
        assert_eq!(first.section.chapter_title, "Chapter 1: Getting started");
        assert_eq!(names(&first.meta.items_needed), vec!["Ash", "Knife", "Tinderbox"]);
        assert_eq!(first.meta.gp_stack.max, 0);

        let second = &steps[1];
        assert_eq!(second.title, "Step 2");
        assert_eq!(second.description, "Chop 35 logs with level 15 wc, then light them. Don't forget the axe.");
        assert_eq!(second.meta.stats_needed.len(), 1);
        assert_eq!(second.meta.gp_stack.min, 100);
        assert_eq!(second.meta.gp_stack.max, 500);
        assert_eq!(second.meta.gp_stack.note.as_deref(), Some("for feathers"));

        let third = &steps[2];
        assert_eq!(third.section.id, "Lumbridge");
        assert!(third.instructions.is_empty());
        assert_eq!(third.meta.gp_stack.note.as_deref(), Some("no stack needed"));
    }
}
