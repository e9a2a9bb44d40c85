//! Client side of the prompt service HTTP API
//!
//! `PromptApi` is the seam the application talks to; `HttpApi` is the
//! blocking reqwest implementation.

use thiserror::Error;

use crate::engine::PromptRecord;

pub mod client;
pub mod types;

pub use client::HttpApi;
pub use types::{ArchiveEntry, BulkToggle, RandomRequest, Word, WordDraft, WordFilter};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for failures where the server answered with an error status
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. } | ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the client needs from the service
pub trait PromptApi {
    fn daily(&self) -> ApiResult<PromptRecord>;

    fn random(&self, request: &RandomRequest) -> ApiResult<PromptRecord>;

    fn archive(&self) -> ApiResult<Vec<ArchiveEntry>>;

    fn list_words(&self, token: &str, filter: &WordFilter) -> ApiResult<Vec<Word>>;

    fn get_word(&self, token: &str, id: i64) -> ApiResult<Word>;

    fn create_word(&self, token: &str, draft: &WordDraft) -> ApiResult<()>;

    fn update_word(&self, token: &str, id: i64, draft: &WordDraft) -> ApiResult<()>;

    fn delete_word(&self, token: &str, id: i64) -> ApiResult<()>;

    fn bulk_toggle(&self, token: &str, ids: &[i64], active: bool) -> ApiResult<()>;
}
