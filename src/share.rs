//! Sharing and outbound links
//!
//! Builds share text, hashtags and search URLs. Clipboard and browser
//! access sit behind `Desktop` so the application can be driven in tests.

use chrono::NaiveDate;
use thiserror::Error;

use crate::engine::config::LinkConfig;

#[derive(Error, Debug)]
pub enum DesktopError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Could not open {url}: {reason}")]
    Open { url: String, reason: String },
}

/// Which prompt is being shared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    Daily,
    Random,
}

/// `#WDID` + YYMMDD
pub fn daily_hashtag(prefix: &str, date: NaiveDate) -> String {
    format!("{}{}", prefix, date.format("%y%m%d"))
}

pub fn image_search_url(links: &LinkConfig, word: &str) -> String {
    format!("{}{}", links.image_search, urlencoding::encode(word))
}

pub fn hashtag_search_url(links: &LinkConfig, hashtag: &str) -> String {
    format!("{}{}", links.hashtag_search, urlencoding::encode(hashtag))
}

pub fn share_text(links: &LinkConfig, kind: ShareKind, prompt: &str, hashtag: &str) -> String {
    let prompt = prompt.trim();
    match kind {
        ShareKind::Daily => format!(
            "Today you should draw {} ✏️\n\nGet more ideas → {} {}",
            prompt, links.share_site, hashtag
        ),
        ShareKind::Random => format!(
            "Can you draw this {}? ✏️\n\nGet more ideas → {} {}",
            prompt, links.share_site, links.hashtag_prefix
        ),
    }
}

/// Clipboard and browser, the two things the client reaches outside for
pub trait Desktop {
    fn copy_text(&mut self, text: &str) -> Result<(), DesktopError>;

    fn open_url(&mut self, url: &str) -> Result<(), DesktopError>;
}

/// System clipboard via arboard, browser via `open`
#[derive(Default)]
pub struct SystemDesktop {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemDesktop {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Desktop for SystemDesktop {
    fn copy_text(&mut self, text: &str) -> Result<(), DesktopError> {
        if self.clipboard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| DesktopError::Clipboard(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| DesktopError::Clipboard(e.to_string())),
            None => Err(DesktopError::Clipboard("unavailable".to_string())),
        }
    }

    fn open_url(&mut self, url: &str) -> Result<(), DesktopError> {
        open::that(url).map_err(|e| DesktopError::Open {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
