use crate::api::RandomRequest;
use crate::engine::{PromptRecord, RenderedPrompt, Segment};

/// Inline message shown in place of a prompt
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub headline: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// What one prompt card (daily or random) currently shows
#[derive(Debug, Clone, Default)]
pub struct PromptView {
    pub record: Option<PromptRecord>,
    pub rendered: Option<RenderedPrompt>,
    pub hashtag: Option<String>,
    pub notice: Option<Notice>,
    pub loading: Option<&'static str>,
    /// Index into the rendered prompt's tagged words
    pub focus: Option<usize>,
}

impl PromptView {
    pub fn show(&mut self, record: PromptRecord, rendered: RenderedPrompt) {
        self.record = Some(record);
        self.rendered = Some(rendered);
        self.notice = None;
        self.loading = None;
        self.focus = None;
    }

    pub fn fail(&mut self, notice: Notice) {
        self.record = None;
        self.rendered = None;
        self.hashtag = None;
        self.notice = Some(notice);
        self.loading = None;
        self.focus = None;
    }

    pub fn is_ready(&self) -> bool {
        self.rendered.is_some()
    }

    /// Prompt text with tags stripped, if a prompt is shown
    pub fn text(&self) -> Option<String> {
        self.rendered
            .as_ref()
            .map(|r| r.plain_text())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn background(&self) -> Option<&str> {
        self.rendered
            .as_ref()
            .map(|r| r.presentation.background_color.as_str())
    }

    pub fn focused_word(&self) -> Option<&Segment> {
        let index = self.focus?;
        self.rendered.as_ref()?.word_at(index)
    }

    /// Move focus across tagged words, wrapping at both ends
    pub fn cycle_focus(&mut self, forward: bool) {
        let count = self.rendered.as_ref().map_or(0, |r| r.word_count());
        if count == 0 {
            self.focus = None;
            return;
        }
        self.focus = Some(match (self.focus, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
    }
}

/// Random-prompt settings panel
#[derive(Debug, Clone, PartialEq)]
pub struct RandomSettings {
    pub include_scene: bool,
    pub vibe: String,
    pub animal_rarity: String,
    pub object_rarity: String,
    pub open: bool,
}

impl Default for RandomSettings {
    fn default() -> Self {
        Self {
            include_scene: false,
            vibe: crate::api::types::NO_VIBE.to_string(),
            animal_rarity: "any".to_string(),
            object_rarity: "any".to_string(),
            open: false,
        }
    }
}

impl RandomSettings {
    pub fn request(&self) -> RandomRequest {
        RandomRequest::new(
            self.include_scene,
            &self.vibe,
            &self.animal_rarity,
            &self.object_rarity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Category, PromptRenderer};

    fn ready_view() -> PromptView {
        let record = PromptRecord::new("A sneaky fox")
            .with_slot(Category::Adjective, "sneaky")
            .with_slot(Category::Subject, "fox");
        let rendered = PromptRenderer::new().render(&record).unwrap();
        let mut view = PromptView::default();
        view.show(record, rendered);
        view
    }

    #[test]
    fn test_cycle_focus_wraps() {
        let mut view = ready_view();
        view.cycle_focus(true);
        assert_eq!(view.focused_word().unwrap().text, "sneaky");
        view.cycle_focus(true);
        assert_eq!(view.focused_word().unwrap().text, "fox");
        view.cycle_focus(true);
        assert_eq!(view.focus, Some(0));
        view.cycle_focus(false);
        assert_eq!(view.focus, Some(1));
    }

    #[test]
    fn test_cycle_focus_without_words() {
        let mut view = PromptView::default();
        view.cycle_focus(true);
        assert_eq!(view.focus, None);
    }

    #[test]
    fn test_fail_clears_prompt() {
        let mut view = ready_view();
        view.hashtag = Some("#WDID".to_string());
        view.fail(Notice::new("Oops! Something went wrong."));
        assert!(!view.is_ready());
        assert!(view.text().is_none());
        assert!(view.hashtag.is_none());
    }

    #[test]
    fn test_settings_request_drops_none_vibe() {
        let settings = RandomSettings::default();
        assert_eq!(settings.request().filters.vibe, None);
    }
}
