use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::state::Notice;
use crate::api::ArchiveEntry;

/// Client-side pagination over the archive
#[derive(Debug, Clone)]
pub struct ArchiveState {
    pub entries: Option<Vec<ArchiveEntry>>,
    pub notice: Option<Notice>,
    pub loading: Option<&'static str>,
    /// 1-based
    pub page: usize,
    /// Highlighted entry within the current page
    pub cursor: usize,
    per_page: usize,
}

impl ArchiveState {
    pub fn new(per_page: usize) -> Self {
        Self {
            entries: None,
            notice: None,
            loading: None,
            page: 1,
            cursor: 0,
            per_page: per_page.max(1),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    pub fn load(&mut self, entries: Vec<ArchiveEntry>) {
        self.notice = if entries.is_empty() {
            Some(Notice::new("No archived prompts yet!"))
        } else {
            None
        };
        self.entries = Some(entries);
        self.loading = None;
        self.reset();
    }

    pub fn fail(&mut self, notice: Notice) {
        self.entries = None;
        self.notice = Some(notice);
        self.loading = None;
    }

    pub fn reset(&mut self) {
        self.page = 1;
        self.cursor = 0;
    }

    pub fn total_pages(&self) -> usize {
        let count = self.entries.as_ref().map_or(0, Vec::len);
        count.div_ceil(self.per_page).max(1)
    }

    pub fn page_entries(&self) -> &[ArchiveEntry] {
        let Some(entries) = self.entries.as_ref() else {
            return &[];
        };
        let start = (self.page - 1) * self.per_page;
        if start >= entries.len() {
            return &[];
        }
        let end = (start + self.per_page).min(entries.len());
        &entries[start..end]
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            self.cursor = 0;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            self.cursor = 0;
            true
        } else {
            false
        }
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.page_entries().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as i64 + delta as i64;
        self.cursor = target.clamp(0, len as i64 - 1) as usize;
    }

    pub fn selected(&self) -> Option<&ArchiveEntry> {
        self.page_entries().get(self.cursor)
    }

    pub fn page_info(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }
}

/// `Mon, Jan 6, 2025`; the raw value when it is not a recognizable date
pub fn format_archive_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });
    match date {
        Some(date) => date.format("%a, %b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
