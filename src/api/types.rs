//! Wire types for the prompt service

use serde::{Deserialize, Deserializer, Serialize};

use crate::engine::{Category, PromptRecord};

/// Sentinel the vibe selector uses for "no mood filter"
pub const NO_VIBE: &str = "none";

/// Server-side filters for `/api/random`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
    pub animal_rarity: String,
    pub object_rarity: String,
}

/// Body of `POST /api/random`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomRequest {
    pub include_scene: bool,
    pub filters: RandomFilters,
}

impl RandomRequest {
    /// Build a request, dropping the vibe when it is the "none" sentinel
    pub fn new(include_scene: bool, vibe: &str, animal_rarity: &str, object_rarity: &str) -> Self {
        let vibe = vibe.trim();
        Self {
            include_scene,
            filters: RandomFilters {
                vibe: (!vibe.is_empty() && vibe != NO_VIBE).then(|| vibe.to_string()),
                animal_rarity: animal_rarity.to_string(),
                object_rarity: object_rarity.to_string(),
            },
        }
    }
}

/// One row of `/api/archive`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArchiveEntry {
    #[serde(flatten)]
    pub record: PromptRecord,

    #[serde(default)]
    pub date: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Dictionary word as the admin endpoints return it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub category: Category,
    #[serde(default)]
    pub is_animal: bool,
    #[serde(default)]
    pub is_object: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mood: Vec<String>,
}

impl Word {
    pub fn to_draft(&self) -> WordDraft {
        WordDraft {
            word: self.word.clone(),
            category: self.category,
            is_animal: self.is_animal,
            is_object: self.is_object,
            active: self.active,
            mood: self.mood.clone(),
        }
    }
}

/// Create/update body for admin word endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordDraft {
    pub word: String,
    pub category: Category,
    pub is_animal: bool,
    pub is_object: bool,
    pub active: bool,
    pub mood: Vec<String>,
}

impl Default for WordDraft {
    fn default() -> Self {
        Self {
            word: String::new(),
            category: Category::Adjective,
            is_animal: false,
            is_object: false,
            active: true,
            mood: Vec::new(),
        }
    }
}

/// Server-side filters for listing words
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFilter {
    pub category: Option<Category>,
    pub mood: Option<String>,
    pub active: Option<bool>,
}

impl WordFilter {
    pub fn active_only() -> Self {
        Self {
            active: Some(true),
            ..Default::default()
        }
    }

    /// Query pairs for the set filters, in a stable order
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(mood) = self.mood.as_deref().filter(|m| !m.trim().is_empty()) {
            pairs.push(("mood", mood.trim().to_string()));
        }
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        pairs
    }
}

/// Body of `POST /api/admin/words/bulk-toggle`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkToggle {
    pub ids: Vec<i64>,
    pub active: bool,
}
