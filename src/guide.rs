use serde::{Deserialize, Serialize};

use crate::parser::vocab::Skill;

// ── Extracted records ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemNeed {
    pub name: String,
    pub qty: u32,
}

impl ItemNeed {
    /// Dedup key shared by both item passes and the metadata merge.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatNeed {
    pub skill: Skill,
    pub level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrencyRange {
    pub min: u64,
    pub max: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// ── Input ──

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStep {
    pub title: String,
    pub description: String,
    pub gp_stack: String,
    pub items_needed: String,
    pub section: GuideSection,
}

// ── Output document ──

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub chapter_title: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepMeta {
    pub gp_stack: CurrencyRange,
    pub items_needed: Vec<ItemNeed>,
    pub stats_needed: Vec<StatNeed>,
    pub alternative_routes: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideStep {
    pub step_number: usize,
    pub title: String,
    pub description: String,
    pub instructions: Vec<Instruction>,
    pub requirements: Vec<serde_json::Value>,
    pub section: GuideSection,
    pub meta: StepMeta,
}

/// Schema revision written into every document.
pub const GUIDE_VERSION: u32 = 3;

#[derive(Debug, Clone)]
pub struct GuideHeader {
    pub title: String,
    pub description: String,
    pub status: String,
    pub recommended_modes: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub title: String,
    pub description: String,
    pub version: u32,
    pub status: String,
    pub recommended_modes: Vec<String>,
    pub tags: Vec<String>,
    pub steps: Vec<GuideStep>,
}

impl Guide {
    pub fn new(header: GuideHeader, steps: Vec<GuideStep>) -> Self {
        Guide {
            title: header.title,
            description: header.description,
            version: GUIDE_VERSION,
            status: header.status,
            recommended_modes: header.recommended_modes,
            tags: header.tags,
            steps,
        }
    }

    pub fn summary(&self) -> GuideSummary {
        GuideSummary {
            steps: self.steps.len(),
            instructions: self.steps.iter().map(|s| s.instructions.len()).sum(),
            items: self.steps.iter().map(|s| s.meta.items_needed.len()).sum(),
            stats: self.steps.iter().map(|s| s.meta.stats_needed.len()).sum(),
        }
    }
}

pub struct GuideSummary {
    pub steps: usize,
    pub instructions: usize,
    pub items: usize,
    pub stats: usize,
}

impl GuideSummary {
    pub fn print(&self) {
        eprintln!("  Steps: {}", self.steps);
        eprintln!("  Total instructions: {}", self.instructions);
        eprintln!("  Total items extracted: {}", self.items);
        eprintln!("  Total stat requirements: {}", self.stats);
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_step_defaults_missing_fields() {
        let raw: RawStep = serde_json::from_str(r#"{"description": "Bank."}"#).unwrap();
        assert_eq!(raw.description, "Bank.");
        assert!(raw.title.is_empty());
        assert!(raw.gp_stack.is_empty());
        assert_eq!(raw.section, GuideSection::default());
    }

    #[test]
    fn currency_note_omitted_when_absent() {
        let json = serde_json::to_value(CurrencyRange { min: 1, max: 2, note: None }).unwrap();
        assert_eq!(json, serde_json::json!({ "min": 1, "max": 2 }));
    }

    #[test]
    fn guide_keys_are_camel_case() {
        let header = GuideHeader {
            title: "T".into(),
            description: "D".into(),
            status: "published".into(),
            recommended_modes: vec!["ironman".into()],
            tags: vec![],
        };
        let json = serde_json::to_value(Guide::new(header, vec![])).unwrap();
        assert_eq!(json["version"], 3);
        assert_eq!(json["recommendedModes"][0], "ironman");
        assert!(json["steps"].as_array().unwrap().is_empty());
    }
}
