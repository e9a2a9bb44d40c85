use std::collections::BTreeSet;

use super::form::WordForm;
use crate::api::{Word, WordFilter};

/// Counts shown above the word table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Admin panel state. Everything here is dropped on logout.
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    pub token: Option<String>,
    pub password: String,
    pub login_error: Option<String>,
    pub words: Vec<Word>,
    pub table_error: Option<String>,
    pub filter: WordFilter,
    /// Client-side substring search over the word column
    pub search: String,
    pub selected: BTreeSet<i64>,
    pub cursor: usize,
    pub form: Option<WordForm>,
    pub pending_delete: Option<i64>,
}

impl AdminState {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn logout(&mut self) {
        *self = AdminState::default();
    }

    pub fn set_words(&mut self, words: Vec<Word>) {
        let ids: BTreeSet<i64> = words.iter().map(|w| w.id).collect();
        self.selected.retain(|id| ids.contains(id));
        self.words = words;
        self.table_error = None;
        self.clamp_cursor();
    }

    pub fn stats(&self) -> WordStats {
        let total = self.words.len();
        let active = self.words.iter().filter(|w| w.active).count();
        WordStats {
            total,
            active,
            inactive: total - active,
        }
    }

    /// Rows passing the client-side search
    pub fn visible(&self) -> Vec<&Word> {
        let term = self.search.trim().to_lowercase();
        self.words
            .iter()
            .filter(|w| term.is_empty() || w.word.to_lowercase().contains(&term))
            .collect()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.clamp_cursor();
    }

    pub fn cursor_word(&self) -> Option<&Word> {
        self.visible().get(self.cursor).copied()
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as i64 + delta as i64;
        self.cursor = target.clamp(0, len as i64 - 1) as usize;
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.cursor_word().map(|w| w.id) {
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        }
    }

    /// Select or clear every visible row
    pub fn select_all(&mut self, selected: bool) {
        let ids: Vec<i64> = self.visible().iter().map(|w| w.id).collect();
        for id in ids {
            if selected {
                self.selected.insert(id);
            } else {
                self.selected.remove(&id);
            }
        }
    }

    pub fn selected_ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
