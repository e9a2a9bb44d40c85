//! PromptRenderer: prompt record in, tagged segments and presentation out
//!
//! Substitution walks the categories in `Category::ORDER`. Each category
//! scans the original sentence, but only text no earlier category has
//! claimed is eligible, so a word shared between two categories is tagged
//! once, by the earlier one. Segment texts always concatenate back to the
//! original prompt.

use rand::Rng;
use std::ops::Range;

use super::error::RenderError;
use super::matcher::WordMatcher;
use super::palette::{random_color, random_tilt};
use super::record::{Category, PromptRecord};

/// A run of prompt text, tagged when it is a database word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub category: Option<Category>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    pub fn word(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category: Some(category),
        }
    }

    pub fn is_word(&self) -> bool {
        self.category.is_some()
    }
}

/// How the prompt card should look
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub background_color: String,
    pub rotation_degrees: f64,
}

/// Result of one render call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    pub segments: Vec<Segment>,
    pub presentation: Presentation,
}

impl RenderedPrompt {
    /// Tagged segments in left-to-right order
    pub fn words(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_word())
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// The nth tagged word, if any
    pub fn word_at(&self, index: usize) -> Option<&Segment> {
        self.words().nth(index)
    }

    /// The prompt text with tags stripped
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Split `template` into segments, tagging slot words in category order
pub fn segment_prompt(record: &PromptRecord) -> Result<Vec<Segment>, RenderError> {
    let template = record.template()?;

    let mut claimed: Vec<(Range<usize>, Category)> = Vec::new();
    for (category, word) in record.slots.present() {
        let Some(matcher) = WordMatcher::new(word)? else {
            continue;
        };
        // Rescan after claimed text so a match right behind it is still found
        let mut pos = 0;
        while let Some(range) = matcher.find_at(template, pos) {
            let blocker = claimed
                .iter()
                .find(|(taken, _)| range.start < taken.end && taken.start < range.end)
                .map(|(taken, _)| taken.end);
            match blocker {
                Some(end) => pos = end,
                None => {
                    pos = range.end;
                    claimed.push((range, category));
                }
            }
        }
    }
    claimed.sort_by_key(|(range, _)| range.start);

    let mut segments = Vec::with_capacity(claimed.len() * 2 + 1);
    let mut cursor = 0;
    for (range, category) in claimed {
        if range.start > cursor {
            segments.push(Segment::plain(&template[cursor..range.start]));
        }
        segments.push(Segment::word(&template[range.clone()], category));
        cursor = range.end;
    }
    if cursor < template.len() {
        segments.push(Segment::plain(&template[cursor..]));
    }

    Ok(segments)
}

/// Renders prompt records. Stateless; every call is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptRenderer;

impl PromptRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render with the thread-local RNG
    pub fn render(&self, record: &PromptRecord) -> Result<RenderedPrompt, RenderError> {
        self.render_with(record, &mut rand::thread_rng())
    }

    /// Render drawing color fallback and tilt from `rng`
    pub fn render_with<R: Rng>(
        &self,
        record: &PromptRecord,
        rng: &mut R,
    ) -> Result<RenderedPrompt, RenderError> {
        let segments = segment_prompt(record)?;

        let background_color = match record.stored_color() {
            Some(color) => color.to_string(),
            None => random_color(rng).to_string(),
        };
        let rotation_degrees = random_tilt(rng);

        Ok(RenderedPrompt {
            segments,
            presentation: Presentation {
                background_color,
                rotation_degrees,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::palette::PALETTE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(rendered: &RenderedPrompt) -> Vec<(String, Category)> {
        rendered
            .words()
            .map(|s| (s.text.clone(), s.category.unwrap()))
            .collect()
    }

    #[test]
    fn test_sneaky_fox_example() {
        let record = PromptRecord::new("A sneaky fox hiding in the forest")
            .with_slot(Category::Adjective, "sneaky")
            .with_slot(Category::Subject, "fox")
            .with_slot(Category::Action, "hiding")
            .with_slot(Category::Scene, "forest");
        let rendered = PromptRenderer::new().render(&record).unwrap();

        assert_eq!(
            words(&rendered),
            vec![
                ("sneaky".to_string(), Category::Adjective),
                ("fox".to_string(), Category::Subject),
                ("hiding".to_string(), Category::Action),
                ("forest".to_string(), Category::Scene),
            ]
        );
        assert!(rendered.words().all(|s| s.category != Some(Category::Item)));
        assert_eq!(rendered.plain_text(), "A sneaky fox hiding in the forest");
    }

    #[test]
    fn test_category_is_not_a_cat() {
        let record = PromptRecord::new("The cat sat near the category sign")
            .with_slot(Category::Subject, "cat");
        let segments = segment_prompt(&record).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::plain("The "),
                Segment::word("cat", Category::Subject),
                Segment::plain(" sat near the category sign"),
            ]
        );
    }

    #[test]
    fn test_original_casing_preserved() {
        let record = PromptRecord::new("Fox meets FOX").with_slot(Category::Subject, "fox");
        let segments = segment_prompt(&record).unwrap();
        let tagged: Vec<_> = segments.iter().filter(|s| s.is_word()).collect();
        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0].text, "Fox");
        assert_eq!(tagged[1].text, "FOX");
    }

    #[test]
    fn test_shared_word_tagged_once_by_earlier_category() {
        let record = PromptRecord::new("A red balloon")
            .with_slot(Category::Adjective, "red")
            .with_slot(Category::Item, "red");
        let segments = segment_prompt(&record).unwrap();
        let tagged: Vec<_> = segments.iter().filter(|s| s.is_word()).collect();
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].category, Some(Category::Adjective));
    }

    #[test]
    fn test_overlapping_phrase_claimed_by_earlier_category() {
        let record = PromptRecord::new("A hot air balloon over the air field")
            .with_slot(Category::Subject, "hot air balloon")
            .with_slot(Category::Scene, "air");
        let segments = segment_prompt(&record).unwrap();
        let tagged: Vec<_> = segments
            .iter()
            .filter(|s| s.is_word())
            .map(|s| (s.text.as_str(), s.category.unwrap()))
            .collect();
        assert_eq!(
            tagged,
            vec![("hot air balloon", Category::Subject), ("air", Category::Scene)]
        );
    }

    #[test]
    fn test_later_category_tags_match_after_claimed_text() {
        let record = PromptRecord::new("sing la la la")
            .with_slot(Category::Adjective, "sing la")
            .with_slot(Category::Item, "la la");
        let segments = segment_prompt(&record).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::word("sing la", Category::Adjective),
                Segment::plain(" "),
                Segment::word("la la", Category::Item),
            ]
        );
    }

    #[test]
    fn test_unrelated_boundaries_do_not_interfere() {
        let record = PromptRecord::new("A bored robot")
            .with_slot(Category::Adjective, "red")
            .with_slot(Category::Action, "bored");
        let segments = segment_prompt(&record).unwrap();
        let tagged: Vec<_> = segments.iter().filter(|s| s.is_word()).collect();
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].text, "bored");
    }

    #[test]
    fn test_missing_slot_word_is_ignored() {
        let record = PromptRecord::new("A quiet lake").with_slot(Category::Subject, "dragon");
        let segments = segment_prompt(&record).unwrap();
        assert_eq!(segments, vec![Segment::plain("A quiet lake")]);
    }

    #[test]
    fn test_missing_prompt_fails() {
        let record = PromptRecord::default();
        let result = PromptRenderer::new().render(&record);
        assert!(matches!(result, Err(RenderError::InvalidInput(_))));
    }

    #[test]
    fn test_stored_color_used_verbatim() {
        let mut record = PromptRecord::new("A fox");
        record.background_color = Some("#123456".to_string());
        let rendered = PromptRenderer::new().render(&record).unwrap();
        assert_eq!(rendered.presentation.background_color, "#123456");
    }

    #[test]
    fn test_fallback_color_from_palette() {
        let record = PromptRecord::new("A fox");
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let rendered = PromptRenderer::new().render_with(&record, &mut rng).unwrap();
            assert!(PALETTE.contains(&rendered.presentation.background_color.as_str()));
        }
    }

    #[test]
    fn test_rotation_within_range() {
        let record = PromptRecord::new("A fox");
        for _ in 0..200 {
            let rendered = PromptRenderer::new().render(&record).unwrap();
            let tilt = rendered.presentation.rotation_degrees;
            assert!((-2.0..=2.0).contains(&tilt));
        }
    }

    #[test]
    fn test_seeded_render_is_deterministic() {
        let record = PromptRecord::new("A sneaky fox").with_slot(Category::Subject, "fox");
        let a = PromptRenderer::new()
            .render_with(&record, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = PromptRenderer::new()
            .render_with(&record, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_word_at_indexes_tagged_segments() {
        let record = PromptRecord::new("A sneaky fox")
            .with_slot(Category::Adjective, "sneaky")
            .with_slot(Category::Subject, "fox");
        let rendered = PromptRenderer::new().render(&record).unwrap();
        assert_eq!(rendered.word_count(), 2);
        assert_eq!(rendered.word_at(1).unwrap().text, "fox");
        assert!(rendered.word_at(2).is_none());
    }
}
