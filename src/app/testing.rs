//! Offline stand-ins for unit tests

use super::App;
use crate::api::{
    ApiError, ApiResult, ArchiveEntry, PromptApi, RandomRequest, Word, WordDraft, WordFilter,
};
use crate::engine::{Config, PromptRecord};
use crate::share::{Desktop, DesktopError};

pub struct Offline;

fn offline<T>() -> ApiResult<T> {
    Err(ApiError::Transport("offline".to_string()))
}

impl PromptApi for Offline {
    fn daily(&self) -> ApiResult<PromptRecord> {
        offline()
    }
    fn random(&self, _request: &RandomRequest) -> ApiResult<PromptRecord> {
        offline()
    }
    fn archive(&self) -> ApiResult<Vec<ArchiveEntry>> {
        offline()
    }
    fn list_words(&self, _token: &str, _filter: &WordFilter) -> ApiResult<Vec<Word>> {
        offline()
    }
    fn get_word(&self, _token: &str, _id: i64) -> ApiResult<Word> {
        offline()
    }
    fn create_word(&self, _token: &str, _draft: &WordDraft) -> ApiResult<()> {
        offline()
    }
    fn update_word(&self, _token: &str, _id: i64, _draft: &WordDraft) -> ApiResult<()> {
        offline()
    }
    fn delete_word(&self, _token: &str, _id: i64) -> ApiResult<()> {
        offline()
    }
    fn bulk_toggle(&self, _token: &str, _ids: &[i64], _active: bool) -> ApiResult<()> {
        offline()
    }
}

pub struct NoDesktop;

impl Desktop for NoDesktop {
    fn copy_text(&mut self, _text: &str) -> Result<(), DesktopError> {
        Ok(())
    }
    fn open_url(&mut self, _url: &str) -> Result<(), DesktopError> {
        Ok(())
    }
}

pub fn offline_app() -> App {
    App::new(Config::default(), Box::new(Offline), Box::new(NoDesktop), None)
}
