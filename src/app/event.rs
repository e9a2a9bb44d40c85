use super::mode::View;

/// Keys that edit the active text input (command deck, password, form)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputKey {
    Char(char),
    Backspace,
    Tab,
    BackTab,
    Left,
    Right,
    Enter,
    Esc,
}

/// Which filter a command deck setting applies to
#[derive(Debug, PartialEq, Clone)]
pub enum WordFilterField {
    Category(Option<String>),
    Mood(Option<String>),
    Active(Option<bool>),
}

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    ShowView(View),
    LoadDaily,
    GenerateRandom,
    ToggleSettings,
    ToggleScene,
    SetVibe(String),
    SetAnimalRarity(String),
    SetObjectRarity(String),
    Share,
    FocusNextWord,
    FocusPrevWord,
    OpenFocusedWord,
    SearchWord(usize),
    OpenHashtag,
    ArchiveNext,
    ArchivePrev,
    OpenArchiveEntry,
    ReloadArchive,
    BeginLogin,
    Login(String),
    Logout,
    ReloadWords,
    FilterWords(WordFilterField),
    SearchWords(String),
    MoveCursor(i32),
    ToggleSelect,
    SelectAll(bool),
    AddWord,
    EditWord,
    ToggleActive,
    RequestDelete,
    BulkSetActive(bool),
    EnterCommand,
    Input(InputKey),
    Quit,
    Help,
    Warning(String),
    InvalidCommand(String),
    None,
}

impl AppEvent {
    /// Loading text to paint before this event blocks on the network
    pub fn loading_label(&self) -> Option<&'static str> {
        match self {
            AppEvent::LoadDaily => Some("Loading today's prompt..."),
            AppEvent::GenerateRandom => Some("Generating prompt..."),
            AppEvent::ReloadArchive => Some("Loading archive..."),
            _ => None,
        }
    }
}
