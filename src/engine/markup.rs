//! Escaped HTML output for rendered prompts
//!
//! Every piece of text goes through the escaper, including words inside
//! the `data-word` attribute.

use v_htmlescape::escape;

use super::renderer::{RenderedPrompt, Segment};

pub fn segment_markup(segment: &Segment) -> String {
    match segment.category {
        Some(category) => format!(
            r#"<span class="clickable-word word-{}" data-word="{}">{}</span>"#,
            category,
            escape(&segment.text),
            escape(&segment.text)
        ),
        None => escape(&segment.text).to_string(),
    }
}

impl RenderedPrompt {
    /// HTML for the prompt body, one span per tagged word
    pub fn markup(&self) -> String {
        self.segments.iter().map(segment_markup).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::record::{Category, PromptRecord};
    use crate::engine::renderer::PromptRenderer;

    #[test]
    fn test_one_wrapper_per_slot() {
        let record = PromptRecord::new("A Sneaky fox hiding in the forest")
            .with_slot(Category::Adjective, "sneaky")
            .with_slot(Category::Subject, "fox")
            .with_slot(Category::Action, "hiding")
            .with_slot(Category::Scene, "forest");
        let markup = PromptRenderer::new().render(&record).unwrap().markup();

        assert_eq!(markup.matches("<span").count(), 4);
        assert!(markup.contains(
            r#"<span class="clickable-word word-adjective" data-word="Sneaky">Sneaky</span>"#
        ));
        assert!(markup.contains(r#"word-scene" data-word="forest">forest</span>"#));
        assert!(!markup.contains("word-item"));
    }

    #[test]
    fn test_text_and_words_are_escaped() {
        let record = PromptRecord::new(r#"Draw <b>"R&D"</b> robot"#)
            .with_slot(Category::Subject, "robot")
            .with_slot(Category::Item, "R&D");
        let markup = PromptRenderer::new().render(&record).unwrap().markup();

        assert!(!markup.contains("<b>"));
        assert!(markup.contains("&lt;b&gt;"));
        assert!(markup.contains("R&amp;D"));
        assert_eq!(markup.matches("<span").count(), 2);
    }

    #[test]
    fn test_wrapping_words_are_not_rematched() {
        // "span" and "class" appear in the wrapper markup; they must not be tagged
        let record = PromptRecord::new("A span of class")
            .with_slot(Category::Adjective, "class")
            .with_slot(Category::Subject, "span");
        let markup = PromptRenderer::new().render(&record).unwrap().markup();
        assert_eq!(markup.matches("<span").count(), 2);
        assert_eq!(markup.matches("</span>").count(), 2);
    }
}
