//! Scripted service and desktop shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use wdid::api::{
    ApiError, ApiResult, ArchiveEntry, PromptApi, RandomRequest, Word, WordDraft, WordFilter,
};
use wdid::engine::{Category, PromptRecord};
use wdid::share::{Desktop, DesktopError};

/// Canned failure: 0 is a transport error, 401 unauthorized, others a status
pub fn failure(code: u16) -> ApiError {
    match code {
        0 => ApiError::Transport("connection refused".to_string()),
        401 => ApiError::Unauthorized,
        status => ApiError::Status {
            status,
            body: String::new(),
        },
    }
}

pub fn fox_record() -> PromptRecord {
    let mut record = PromptRecord::new("A sneaky fox juggling apples")
        .with_slot(Category::Adjective, "sneaky")
        .with_slot(Category::Subject, "fox")
        .with_slot(Category::Action, "juggling")
        .with_slot(Category::Item, "apples");
    record.background_color = Some("#1E5F74".to_string());
    record.hashtag = Some("#WDID250106".to_string());
    record
}

pub fn word(id: i64, text: &str, active: bool) -> Word {
    Word {
        id,
        word: text.to_string(),
        category: Category::Subject,
        is_animal: false,
        is_object: false,
        active,
        mood: vec![],
    }
}

pub fn archive_entries(count: usize) -> Vec<ArchiveEntry> {
    (0..count)
        .map(|i| ArchiveEntry {
            record: PromptRecord::new(format!("Prompt number {}", i))
                .with_slot(Category::Subject, "number"),
            date: Some(format!("2025-01-{:02}", (i % 28) + 1)),
        })
        .collect()
}

pub struct FakeState {
    pub daily: Result<PromptRecord, u16>,
    pub random: Result<PromptRecord, u16>,
    pub archive: Result<Vec<ArchiveEntry>, u16>,
    pub password: String,
    pub words: Vec<Word>,
    /// Forces every admin call to fail with this code
    pub admin_failure: Option<u16>,
    pub calls: Vec<String>,
    pub random_requests: Vec<RandomRequest>,
    pub saved: Vec<(Option<i64>, WordDraft)>,
    pub deleted: Vec<i64>,
    pub bulk: Vec<(Vec<i64>, bool)>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            daily: Ok(fox_record()),
            random: Ok(fox_record()),
            archive: Ok(archive_entries(3)),
            password: "s3cret".to_string(),
            words: vec![word(1, "fox", true), word(2, "owl", false)],
            admin_failure: None,
            calls: Vec::new(),
            random_requests: Vec::new(),
            saved: Vec::new(),
            deleted: Vec::new(),
            bulk: Vec::new(),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeApi(pub Rc<RefCell<FakeState>>);

impl FakeApi {
    fn admin(&self, call: &str, token: &str) -> ApiResult<()> {
        let mut state = self.0.borrow_mut();
        state.calls.push(call.to_string());
        if let Some(code) = state.admin_failure {
            return Err(failure(code));
        }
        if token != state.password {
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }
}

impl PromptApi for FakeApi {
    fn daily(&self) -> ApiResult<PromptRecord> {
        let mut state = self.0.borrow_mut();
        state.calls.push("daily".to_string());
        state.daily.clone().map_err(failure)
    }

    fn random(&self, request: &RandomRequest) -> ApiResult<PromptRecord> {
        let mut state = self.0.borrow_mut();
        state.calls.push("random".to_string());
        state.random_requests.push(request.clone());
        state.random.clone().map_err(failure)
    }

    fn archive(&self) -> ApiResult<Vec<ArchiveEntry>> {
        let mut state = self.0.borrow_mut();
        state.calls.push("archive".to_string());
        state.archive.clone().map_err(failure)
    }

    fn list_words(&self, token: &str, filter: &WordFilter) -> ApiResult<Vec<Word>> {
        self.admin("list_words", token)?;
        let state = self.0.borrow();
        Ok(state
            .words
            .iter()
            .filter(|w| filter.active.map_or(true, |a| w.active == a))
            .filter(|w| filter.category.map_or(true, |c| w.category == c))
            .cloned()
            .collect())
    }

    fn get_word(&self, token: &str, id: i64) -> ApiResult<Word> {
        self.admin("get_word", token)?;
        let state = self.0.borrow();
        state
            .words
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(|| failure(404))
    }

    fn create_word(&self, token: &str, draft: &WordDraft) -> ApiResult<()> {
        self.admin("create_word", token)?;
        self.0.borrow_mut().saved.push((None, draft.clone()));
        Ok(())
    }

    fn update_word(&self, token: &str, id: i64, draft: &WordDraft) -> ApiResult<()> {
        self.admin("update_word", token)?;
        self.0.borrow_mut().saved.push((Some(id), draft.clone()));
        Ok(())
    }

    fn delete_word(&self, token: &str, id: i64) -> ApiResult<()> {
        self.admin("delete_word", token)?;
        self.0.borrow_mut().deleted.push(id);
        Ok(())
    }

    fn bulk_toggle(&self, token: &str, ids: &[i64], active: bool) -> ApiResult<()> {
        self.admin("bulk_toggle", token)?;
        self.0.borrow_mut().bulk.push((ids.to_vec(), active));
        Ok(())
    }
}

#[derive(Default)]
pub struct DesktopLog {
    pub copied: Vec<String>,
    pub opened: Vec<String>,
    pub fail_copy: bool,
}

#[derive(Clone, Default)]
pub struct FakeDesktop(pub Rc<RefCell<DesktopLog>>);

impl Desktop for FakeDesktop {
    fn copy_text(&mut self, text: &str) -> Result<(), DesktopError> {
        let mut log = self.0.borrow_mut();
        if log.fail_copy {
            return Err(DesktopError::Clipboard("no display".to_string()));
        }
        log.copied.push(text.to_string());
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> Result<(), DesktopError> {
        self.0.borrow_mut().opened.push(url.to_string());
        Ok(())
    }
}
