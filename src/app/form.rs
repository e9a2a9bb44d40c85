//! Add/edit form for dictionary words

use crate::api::{Word, WordDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Word,
    Category,
    Moods,
    Animal,
    Object,
    Active,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Word,
        FormField::Category,
        FormField::Moods,
        FormField::Animal,
        FormField::Object,
        FormField::Active,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Word => "Word",
            FormField::Category => "Category",
            FormField::Moods => "Moods",
            FormField::Animal => "Animal",
            FormField::Object => "Object",
            FormField::Active => "Active",
        }
    }

    pub fn all() -> &'static [FormField] {
        &Self::ORDER
    }

    fn step(&self, forward: bool) -> FormField {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        let len = Self::ORDER.len();
        let next = if forward { idx + 1 } else { idx + len - 1 };
        Self::ORDER[next % len]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordForm {
    /// Set when editing an existing word
    pub id: Option<i64>,
    pub draft: WordDraft,
    /// Comma-separated mood list as typed
    pub moods: String,
    pub field: FormField,
    pub error: Option<String>,
}

impl WordForm {
    pub fn new_word() -> Self {
        Self {
            id: None,
            draft: WordDraft::default(),
            moods: String::new(),
            field: FormField::Word,
            error: None,
        }
    }

    pub fn edit(word: &Word) -> Self {
        Self {
            id: Some(word.id),
            draft: word.to_draft(),
            moods: word.mood.join(", "),
            field: FormField::Word,
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.id.is_some() {
            "Edit Word"
        } else {
            "Add New Word"
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.step(true);
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.step(false);
    }

    pub fn insert_char(&mut self, c: char) {
        match self.field {
            FormField::Word => self.draft.word.push(c),
            FormField::Moods => self.moods.push(c),
            _ if c == ' ' => self.toggle(),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            FormField::Word => {
                self.draft.word.pop();
            }
            FormField::Moods => {
                self.moods.pop();
            }
            _ => {}
        }
    }

    /// Flip a checkbox or advance the category
    pub fn toggle(&mut self) {
        match self.field {
            FormField::Category => self.cycle_category(true),
            FormField::Animal => self.draft.is_animal = !self.draft.is_animal,
            FormField::Object => self.draft.is_object = !self.draft.is_object,
            FormField::Active => self.draft.active = !self.draft.active,
            FormField::Word | FormField::Moods => {}
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.draft.category = if forward {
            self.draft.category.next()
        } else {
            self.draft.category.prev()
        };
    }

    /// Validated draft ready to send
    pub fn to_draft(&self) -> Result<WordDraft, String> {
        let word = self.draft.word.trim();
        if word.is_empty() {
            return Err("Word is required".to_string());
        }
        let mood = self
            .moods
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
        Ok(WordDraft {
            word: word.to_string(),
            mood,
            ..self.draft.clone()
        })
    }
}
