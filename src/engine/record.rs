//! Prompt records as the service sends them
//!
//! The server ships word slots as flat top-level fields next to the prompt
//! sentence. `WordSlots` flattens them back into one place so the renderer
//! can walk them in category order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::RenderError;

/// Word categories, in the order the renderer applies them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Adjective,
    Subject,
    Action,
    Item,
    Scene,
}

impl Category {
    /// Substitution order. Earlier categories claim shared words first.
    pub const ORDER: [Category; 5] = [
        Category::Adjective,
        Category::Subject,
        Category::Action,
        Category::Item,
        Category::Scene,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Adjective => "adjective",
            Category::Subject => "subject",
            Category::Action => "action",
            Category::Item => "item",
            Category::Scene => "scene",
        }
    }

    pub fn parse(name: &str) -> Option<Category> {
        Category::ORDER
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Next category in order, wrapping around
    pub fn next(&self) -> Category {
        let idx = Category::ORDER.iter().position(|c| c == self).unwrap_or(0);
        Category::ORDER[(idx + 1) % Category::ORDER.len()]
    }

    /// Previous category in order, wrapping around
    pub fn prev(&self) -> Category {
        let idx = Category::ORDER.iter().position(|c| c == self).unwrap_or(0);
        Category::ORDER[(idx + Category::ORDER.len() - 1) % Category::ORDER.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named word slots of a prompt. `scene` is absent unless it was requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordSlots {
    #[serde(default)]
    pub adjective: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub scene: Option<String>,
}

impl WordSlots {
    pub fn get(&self, category: Category) -> Option<&str> {
        let slot = match category {
            Category::Adjective => &self.adjective,
            Category::Subject => &self.subject,
            Category::Action => &self.action,
            Category::Item => &self.item,
            Category::Scene => &self.scene,
        };
        slot.as_deref()
    }

    /// Slots in substitution order, skipping empty and whitespace-only values
    pub fn present(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ORDER.into_iter().filter_map(move |category| {
            self.get(category)
                .filter(|word| !word.trim().is_empty())
                .map(|word| (category, word))
        })
    }
}

/// A prompt as delivered by `/api/daily` and `/api/random`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    #[serde(default)]
    pub prompt: Option<String>,

    #[serde(flatten)]
    pub slots: WordSlots,

    #[serde(default, alias = "backgroundColor")]
    pub background_color: Option<String>,

    #[serde(default)]
    pub hashtag: Option<String>,
}

impl PromptRecord {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            ..Default::default()
        }
    }

    /// Builder-style slot assignment, mostly for tests and the CLI
    pub fn with_slot(mut self, category: Category, word: impl Into<String>) -> Self {
        let word = Some(word.into());
        match category {
            Category::Adjective => self.slots.adjective = word,
            Category::Subject => self.slots.subject = word,
            Category::Action => self.slots.action = word,
            Category::Item => self.slots.item = word,
            Category::Scene => self.slots.scene = word,
        }
        self
    }

    /// Parse a record from raw JSON, reporting shape problems as invalid input
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        serde_json::from_str(json).map_err(|err| RenderError::InvalidInput(err.to_string()))
    }

    /// The prompt sentence, or InvalidInput when it is missing or blank
    pub fn template(&self) -> Result<&str, RenderError> {
        match self.prompt.as_deref() {
            None => Err(RenderError::InvalidInput("missing prompt".to_string())),
            Some(text) if text.trim().is_empty() => {
                Err(RenderError::InvalidInput("empty prompt".to_string()))
            }
            Some(text) => Ok(text),
        }
    }

    /// Stored background color, treating an empty string as absent
    pub fn stored_color(&self) -> Option<&str> {
        self.background_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
