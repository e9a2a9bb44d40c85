use chrono::Local;
use tracing::{error, info, warn};

use super::admin::AdminState;
use super::archive::ArchiveState;
use super::event::{AppEvent, InputKey, WordFilterField};
use super::form::{FormField, WordForm};
use super::mode::{AppMode, View};
use super::state::{Notice, PromptView, RandomSettings};
use crate::api::{ApiError, ApiResult, PromptApi, WordFilter};
use crate::engine::{Category, Config, PromptRecord, PromptRenderer, RenderedPrompt};
use crate::session::SessionStore;
use crate::share::{self, Desktop, ShareKind};

pub struct App {
    pub mode: AppMode,
    pub view: View,
    pub daily: PromptView,
    pub random: PromptView,
    pub settings: RandomSettings,
    pub archive: ArchiveState,
    pub admin: AdminState,
    pub command_input: String,
    pub status: Option<String>,
    pub show_help: bool,
    config: Config,
    renderer: PromptRenderer,
    api: Box<dyn PromptApi>,
    desktop: Box<dyn Desktop>,
    session: Option<SessionStore>,
}

impl App {
    pub fn new(
        config: Config,
        api: Box<dyn PromptApi>,
        desktop: Box<dyn Desktop>,
        session: Option<SessionStore>,
    ) -> Self {
        Self {
            mode: AppMode::Browse,
            view: View::Daily,
            daily: PromptView::default(),
            random: PromptView::default(),
            settings: RandomSettings::default(),
            archive: ArchiveState::new(config.archive.items_per_page),
            admin: AdminState::default(),
            command_input: String::new(),
            status: None,
            show_help: false,
            config,
            renderer: PromptRenderer::new(),
            api,
            desktop,
            session,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Initial fetches: today's prompt, and the admin table if a token was saved
    pub fn start(&mut self) {
        self.load_daily();
        self.restore_session();
    }

    /// Surface color for the active view
    pub fn surface_color(&self) -> Option<&str> {
        match self.view {
            View::Daily => self.daily.background(),
            View::Random => self.random.background(),
            View::Archive => Some(&self.config.theme.archive_background),
            View::Admin => Some(&self.config.theme.admin_background),
        }
    }

    /// The prompt card for the active view, if it has one
    pub fn current_prompt(&self) -> Option<&PromptView> {
        match self.view {
            View::Daily => Some(&self.daily),
            View::Random => Some(&self.random),
            View::Archive | View::Admin => None,
        }
    }

    fn current_prompt_mut(&mut self) -> Option<&mut PromptView> {
        match self.view {
            View::Daily => Some(&mut self.daily),
            View::Random => Some(&mut self.random),
            View::Archive | View::Admin => None,
        }
    }

    /// Mark the loading placeholder for an event that will block on the
    /// network. Returns true when a frame should be drawn first.
    pub fn prepare(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::LoadDaily => {
                self.daily.loading = event.loading_label();
                true
            }
            AppEvent::GenerateRandom => {
                self.random.loading = event.loading_label();
                true
            }
            AppEvent::ReloadArchive => {
                self.archive.loading = event.loading_label();
                true
            }
            AppEvent::ShowView(View::Random) if !self.random.is_ready() => {
                self.view = View::Random;
                self.random.loading = AppEvent::GenerateRandom.loading_label();
                true
            }
            AppEvent::ShowView(View::Archive) if !self.archive.is_loaded() => {
                self.view = View::Archive;
                self.archive.loading = AppEvent::ReloadArchive.loading_label();
                true
            }
            _ => false,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if !matches!(event, AppEvent::Input(_) | AppEvent::None) {
            self.status = None;
        }

        match event {
            AppEvent::ShowView(view) => self.show_view(view),
            AppEvent::LoadDaily => self.load_daily(),
            AppEvent::GenerateRandom => self.generate_random(),
            AppEvent::ToggleSettings => self.settings.open = !self.settings.open,
            AppEvent::ToggleScene => {
                self.settings.include_scene = !self.settings.include_scene;
                let state = if self.settings.include_scene { "on" } else { "off" };
                self.status = Some(format!("Include scene: {}", state));
            }
            AppEvent::SetVibe(vibe) => self.settings.vibe = vibe,
            AppEvent::SetAnimalRarity(rarity) => self.settings.animal_rarity = rarity,
            AppEvent::SetObjectRarity(rarity) => self.settings.object_rarity = rarity,
            AppEvent::Share => self.share(),
            AppEvent::FocusNextWord => {
                if let Some(prompt) = self.current_prompt_mut() {
                    prompt.cycle_focus(true);
                }
            }
            AppEvent::FocusPrevWord => {
                if let Some(prompt) = self.current_prompt_mut() {
                    prompt.cycle_focus(false);
                }
            }
            AppEvent::OpenFocusedWord => {
                let word = self
                    .current_prompt()
                    .and_then(|p| p.focused_word())
                    .map(|s| s.text.clone());
                match word {
                    Some(word) => self.search_word(&word),
                    None => self.status = Some("Tab to pick a word first".to_string()),
                }
            }
            AppEvent::SearchWord(number) => {
                let word = self
                    .current_prompt()
                    .and_then(|p| p.rendered.as_ref())
                    .and_then(|r| r.word_at(number.saturating_sub(1)))
                    .map(|s| s.text.clone());
                match word {
                    Some(word) => self.search_word(&word),
                    None => self.status = Some(format!("No word {}", number)),
                }
            }
            AppEvent::OpenHashtag => self.open_hashtag(),
            AppEvent::ArchiveNext => {
                self.archive.next_page();
            }
            AppEvent::ArchivePrev => {
                self.archive.prev_page();
            }
            AppEvent::OpenArchiveEntry => self.open_archive_entry(),
            AppEvent::ReloadArchive => self.load_archive(),
            AppEvent::BeginLogin => self.begin_login(),
            AppEvent::Login(password) => self.login(password),
            AppEvent::Logout => {
                self.logout();
                self.status = Some("Logged out".to_string());
            }
            AppEvent::ReloadWords => self.load_words(),
            AppEvent::FilterWords(field) => self.filter_words(field),
            AppEvent::SearchWords(term) => self.admin.set_search(term),
            AppEvent::MoveCursor(delta) => match self.view {
                View::Archive => self.archive.move_cursor(delta),
                View::Admin => self.admin.move_cursor(delta),
                View::Daily | View::Random => {}
            },
            AppEvent::ToggleSelect => self.admin.toggle_selected(),
            AppEvent::SelectAll(selected) => self.admin.select_all(selected),
            AppEvent::AddWord => self.add_word(),
            AppEvent::EditWord => self.edit_word(),
            AppEvent::ToggleActive => self.toggle_active(),
            AppEvent::RequestDelete => self.request_delete(),
            AppEvent::BulkSetActive(active) => self.bulk_set_active(active),
            AppEvent::EnterCommand => {
                self.command_input.clear();
                self.mode = AppMode::Command;
            }
            AppEvent::Input(key) => self.handle_input(key),
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.show_help = !self.show_help,
            AppEvent::Warning(message) => self.status = Some(message),
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    /// Hand the typed command line to the caller and leave command mode
    pub fn take_command(&mut self) -> String {
        self.mode = AppMode::Browse;
        std::mem::take(&mut self.command_input)
    }

    fn handle_input(&mut self, key: InputKey) {
        match self.mode {
            AppMode::Command => match key {
                InputKey::Char(c) => self.command_input.push(c),
                InputKey::Backspace => {
                    if self.command_input.pop().is_none() {
                        self.mode = AppMode::Browse;
                    }
                }
                InputKey::Esc => {
                    self.command_input.clear();
                    self.mode = AppMode::Browse;
                }
                _ => {}
            },
            AppMode::Login => match key {
                InputKey::Char(c) => self.admin.password.push(c),
                InputKey::Backspace => {
                    self.admin.password.pop();
                }
                InputKey::Enter => {
                    let password = std::mem::take(&mut self.admin.password);
                    self.login(password);
                }
                InputKey::Esc => {
                    self.admin.password.clear();
                    self.mode = AppMode::Browse;
                }
                _ => {}
            },
            AppMode::Form => self.handle_form_input(key),
            AppMode::Confirm => {
                let confirmed = matches!(key, InputKey::Char('y') | InputKey::Char('Y'));
                self.mode = AppMode::Browse;
                let pending = self.admin.pending_delete.take();
                match pending {
                    Some(id) if confirmed => self.delete_word(id),
                    _ => self.status = Some("Delete cancelled".to_string()),
                }
            }
            AppMode::Browse | AppMode::Quit => {}
        }
    }

    fn handle_form_input(&mut self, key: InputKey) {
        match key {
            InputKey::Enter => return self.save_form(),
            InputKey::Esc => {
                self.admin.form = None;
                self.mode = AppMode::Browse;
                return;
            }
            _ => {}
        }
        let Some(form) = self.admin.form.as_mut() else {
            self.mode = AppMode::Browse;
            return;
        };
        form.error = None;
        match key {
            InputKey::Char(c) => form.insert_char(c),
            InputKey::Backspace => form.backspace(),
            InputKey::Tab => form.next_field(),
            InputKey::BackTab => form.prev_field(),
            InputKey::Left if form.field == FormField::Category => form.cycle_category(false),
            InputKey::Right if form.field == FormField::Category => form.cycle_category(true),
            InputKey::Left | InputKey::Right | InputKey::Enter | InputKey::Esc => {}
        }
    }

    fn show_view(&mut self, view: View) {
        self.view = view;
        match view {
            View::Daily => {}
            View::Random => {
                if !self.random.is_ready() {
                    self.generate_random();
                }
            }
            View::Archive => {
                self.archive.reset();
                if !self.archive.is_loaded() {
                    self.load_archive();
                }
            }
            View::Admin => {
                if self.admin.is_logged_in() {
                    self.load_words();
                }
            }
        }
    }

    fn render(&self, record: &PromptRecord) -> Option<RenderedPrompt> {
        match self.renderer.render(record) {
            Ok(rendered) => Some(rendered),
            Err(err) => {
                error!(error = %err, "could not render prompt");
                None
            }
        }
    }

    fn load_daily(&mut self) {
        let oops = Notice::new("Oops! Couldn't load today's prompt.");
        match self.api.daily() {
            Ok(record) => {
                let Some(rendered) = self.render(&record) else {
                    self.daily.fail(oops);
                    return;
                };
                let hashtag = record
                    .hashtag
                    .clone()
                    .filter(|h| !h.trim().is_empty())
                    .unwrap_or_else(|| {
                        share::daily_hashtag(
                            &self.config.links.hashtag_prefix,
                            Local::now().date_naive(),
                        )
                    });
                info!(hashtag = %hashtag, "loaded daily prompt");
                self.daily.show(record, rendered);
                self.daily.hashtag = Some(hashtag);
            }
            Err(err) if err.is_status() => {
                warn!(error = %err, "no daily prompt");
                self.daily.fail(
                    Notice::new("No prompt yet today!").with_detail("Check back at midnight"),
                );
            }
            Err(err) => {
                error!(error = %err, "error loading daily prompt");
                self.daily.fail(oops);
            }
        }
    }

    fn generate_random(&mut self) {
        self.settings.open = false;
        let request = self.settings.request();
        let oops = Notice::new("Oops! Something went wrong.");
        match self.api.random(&request) {
            Ok(record) => match self.render(&record) {
                Some(rendered) => {
                    info!("generated random prompt");
                    self.random.show(record, rendered);
                }
                None => self.random.fail(oops),
            },
            Err(err) if err.is_status() => {
                warn!(error = %err, "random prompt rejected");
                self.random
                    .fail(Notice::new("Couldn't generate prompt. Try different filters!"));
            }
            Err(err) => {
                error!(error = %err, "error generating random prompt");
                self.random.fail(oops);
            }
        }
    }

    fn load_archive(&mut self) {
        match self.api.archive() {
            Ok(entries) => {
                info!(count = entries.len(), "loaded archive");
                self.archive.load(entries);
            }
            Err(err) if err.is_status() => {
                warn!(error = %err, "archive unavailable");
                self.archive.fail(Notice::new("No archived prompts yet!"));
            }
            Err(err) => {
                error!(error = %err, "error loading archive");
                self.archive.fail(Notice::new("Couldn't load archive."));
            }
        }
    }

    fn share(&mut self) {
        let (prompt, kind) = match self.view {
            View::Daily => (&self.daily, ShareKind::Daily),
            View::Random => (&self.random, ShareKind::Random),
            View::Archive | View::Admin => {
                self.status = Some("Nothing to share here".to_string());
                return;
            }
        };
        let Some(text) = prompt.text() else {
            self.status = Some("Wait for prompt to load".to_string());
            return;
        };
        let hashtag = prompt
            .hashtag
            .clone()
            .unwrap_or_else(|| self.config.links.hashtag_prefix.clone());
        let message = share::share_text(&self.config.links, kind, &text, &hashtag);

        self.status = Some(match self.desktop.copy_text(&message) {
            Ok(()) => "Copied to clipboard!".to_string(),
            Err(err) => {
                error!(error = %err, "failed to copy");
                "Failed to copy".to_string()
            }
        });
    }

    fn open_url(&mut self, url: &str) {
        if let Err(err) = self.desktop.open_url(url) {
            warn!(error = %err, "failed to open browser");
            self.status = Some("Couldn't open the browser".to_string());
        }
    }

    fn search_word(&mut self, word: &str) {
        let url = share::image_search_url(&self.config.links, word);
        self.open_url(&url);
    }

    fn open_hashtag(&mut self) {
        let hashtag = match self.view {
            View::Daily => self.daily.hashtag.clone(),
            View::Archive => {
                self.open_archive_entry();
                return;
            }
            View::Random | View::Admin => None,
        };
        match hashtag {
            Some(tag) => {
                let url = share::hashtag_search_url(&self.config.links, &tag);
                self.open_url(&url);
            }
            None => self.status = Some("No hashtag to open".to_string()),
        }
    }

    fn open_archive_entry(&mut self) {
        let Some(entry) = self.archive.selected() else {
            return;
        };
        let hashtag = entry
            .record
            .hashtag
            .clone()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| self.config.archive.default_hashtag.clone());
        let url = share::hashtag_search_url(&self.config.links, &hashtag);
        self.open_url(&url);
    }

    fn restore_session(&mut self) {
        let Some(store) = self.session.as_ref() else {
            return;
        };
        match store.load() {
            Ok(Some(token)) => {
                info!("restored admin session");
                self.admin.token = Some(token);
                self.load_words();
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "could not read admin session"),
        }
    }

    fn begin_login(&mut self) {
        self.view = View::Admin;
        if self.admin.is_logged_in() {
            self.status = Some("Already logged in".to_string());
            return;
        }
        self.admin.password.clear();
        self.mode = AppMode::Login;
    }

    fn login(&mut self, password: String) {
        self.view = View::Admin;
        if password.is_empty() {
            self.admin.login_error = Some("Please enter a password".to_string());
            self.mode = AppMode::Login;
            return;
        }
        match self.api.list_words(&password, &WordFilter::active_only()) {
            Ok(_) => {
                info!("admin login succeeded");
                if let Some(store) = self.session.as_ref() {
                    if let Err(err) = store.save(&password) {
                        warn!(error = %err, "could not persist admin session");
                    }
                }
                self.admin.token = Some(password);
                self.admin.login_error = None;
                self.mode = AppMode::Browse;
                self.load_words();
            }
            Err(err) if err.is_status() => {
                warn!(error = %err, "admin login rejected");
                self.admin.login_error = Some("Invalid password".to_string());
                self.mode = AppMode::Login;
            }
            Err(err) => {
                error!(error = %err, "admin login error");
                self.admin.login_error = Some("Connection error".to_string());
                self.mode = AppMode::Login;
            }
        }
    }

    fn logout(&mut self) {
        self.admin.logout();
        if let Some(store) = self.session.as_ref() {
            if let Err(err) = store.clear() {
                warn!(error = %err, "could not clear admin session");
            }
        }
        if matches!(self.mode, AppMode::Login | AppMode::Form | AppMode::Confirm) {
            self.mode = AppMode::Browse;
        }
    }

    fn force_logout(&mut self) {
        warn!("admin token rejected, logging out");
        self.logout();
        self.status = Some("Session expired, please log in again".to_string());
    }

    /// Run an authenticated call. A 401 logs out, other failures become
    /// `failure` in the status line.
    fn admin_call<T>(
        &mut self,
        failure: &str,
        call: impl FnOnce(&dyn PromptApi, &str) -> ApiResult<T>,
    ) -> Option<T> {
        let Some(token) = self.admin.token.clone() else {
            self.status = Some("Log in first".to_string());
            return None;
        };
        match call(self.api.as_ref(), &token) {
            Ok(value) => Some(value),
            Err(ApiError::Unauthorized) => {
                self.force_logout();
                None
            }
            Err(err) => {
                error!(error = %err, "{}", failure);
                self.status = Some(failure.to_string());
                None
            }
        }
    }

    fn load_words(&mut self) {
        let Some(token) = self.admin.token.clone() else {
            return;
        };
        match self.api.list_words(&token, &self.admin.filter) {
            Ok(words) => self.admin.set_words(words),
            Err(ApiError::Unauthorized) => self.force_logout(),
            Err(err) => {
                error!(error = %err, "error loading words");
                self.admin.table_error = Some("Error loading words".to_string());
            }
        }
    }

    fn filter_words(&mut self, field: WordFilterField) {
        match field {
            WordFilterField::Category(None) => self.admin.filter.category = None,
            WordFilterField::Category(Some(name)) => match Category::parse(&name) {
                Some(category) => self.admin.filter.category = Some(category),
                None => {
                    self.status = Some(format!("Unknown category: {}", name));
                    return;
                }
            },
            WordFilterField::Mood(mood) => self.admin.filter.mood = mood,
            WordFilterField::Active(active) => self.admin.filter.active = active,
        }
        self.load_words();
    }

    fn add_word(&mut self) {
        if !self.admin.is_logged_in() {
            self.status = Some("Log in first".to_string());
            return;
        }
        self.admin.form = Some(WordForm::new_word());
        self.mode = AppMode::Form;
    }

    fn edit_word(&mut self) {
        let Some(id) = self.admin.cursor_word().map(|w| w.id) else {
            return;
        };
        if let Some(word) = self.admin_call("Error loading word", |api, token| {
            api.get_word(token, id)
        }) {
            self.admin.form = Some(WordForm::edit(&word));
            self.mode = AppMode::Form;
        }
    }

    fn save_form(&mut self) {
        let Some(form) = self.admin.form.as_mut() else {
            return;
        };
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                form.error = Some(message);
                return;
            }
        };
        let id = form.id;
        let saved = self.admin_call("Error saving word", |api, token| match id {
            Some(id) => api.update_word(token, id, &draft),
            None => api.create_word(token, &draft),
        });
        if saved.is_some() {
            info!(word = %draft.word, "saved word");
            self.admin.form = None;
            self.mode = AppMode::Browse;
            self.load_words();
        }
    }

    fn toggle_active(&mut self) {
        let Some(word) = self.admin.cursor_word().cloned() else {
            return;
        };
        let mut draft = word.to_draft();
        draft.active = !word.active;
        if self
            .admin_call("Error updating word", |api, token| {
                api.update_word(token, word.id, &draft)
            })
            .is_some()
        {
            self.load_words();
        }
    }

    fn request_delete(&mut self) {
        let Some((id, prompt)) = self
            .admin
            .cursor_word()
            .map(|w| (w.id, format!("Delete '{}'? (y/n)", w.word)))
        else {
            return;
        };
        self.admin.pending_delete = Some(id);
        self.status = Some(prompt);
        self.mode = AppMode::Confirm;
    }

    fn delete_word(&mut self, id: i64) {
        if self
            .admin_call("Error deleting word", |api, token| api.delete_word(token, id))
            .is_some()
        {
            info!(id, "deleted word");
            self.load_words();
        }
    }

    fn bulk_set_active(&mut self, active: bool) {
        let ids = self.admin.selected_ids();
        if ids.is_empty() {
            self.status = Some("Please select at least one word".to_string());
            return;
        }
        if self
            .admin_call("Error updating words", |api, token| {
                api.bulk_toggle(token, &ids, active)
            })
            .is_some()
        {
            self.load_words();
        }
    }
}
