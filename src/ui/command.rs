//! Command parsing for the TUI command deck
//!
//! Input typed after `:` is parsed here, supporting:
//! - `q` / `quit`, `h` / `help`
//! - `daily`, `random`, `archive`, `admin` → switch view
//! - `new` → generate a random prompt
//! - `share`, `search N`, `tag`
//! - `scene`, `vibe V`, `animal R`, `object R` → random filters
//! - `next`, `prev` → archive pages
//! - `login [password]`, `logout`, `reload`
//! - `find TERM`, `category C|all`, `mood M|all`, `active true|false|all`
//! - `bulk on|off`

use crate::app::{AppEvent, View, WordFilterField};

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Show(View),
    NewPrompt,
    Share,
    Search(usize),
    Hashtag,
    Scene,
    Vibe(String),
    AnimalRarity(String),
    ObjectRarity(String),
    NextPage,
    PrevPage,
    Login(Option<String>),
    Logout,
    Reload,
    Find(String),
    Filter(WordFilterField),
    Bulk(bool),
    Unknown(String),
}

fn all_or(value: &str) -> Option<String> {
    if value.eq_ignore_ascii_case("all") || value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse command deck input string into a Command
///
/// A leading `:` is optional so both `:random` and `random` work.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let body = input.strip_prefix(':').unwrap_or(input).trim();

    if body.is_empty() {
        return Command::Unknown(input.to_string());
    }

    let (name, arg) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body, ""),
    };

    match (name.to_ascii_lowercase().as_str(), arg) {
        ("q" | "quit", "") => Command::Quit,
        ("h" | "help", "") => Command::Help,
        ("new" | "n", "") => Command::NewPrompt,
        ("share", "") => Command::Share,
        ("tag" | "hashtag", "") => Command::Hashtag,
        ("scene", "") => Command::Scene,
        ("next", "") => Command::NextPage,
        ("prev", "") => Command::PrevPage,
        ("logout", "") => Command::Logout,
        ("reload", "") => Command::Reload,
        ("login", "") => Command::Login(None),
        ("login", password) => Command::Login(Some(password.to_string())),
        ("search", n) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Command::Search(n),
            _ => Command::Unknown(input.to_string()),
        },
        ("vibe", v) if !v.is_empty() => Command::Vibe(v.to_string()),
        ("animal", r) if !r.is_empty() => Command::AnimalRarity(r.to_string()),
        ("object", r) if !r.is_empty() => Command::ObjectRarity(r.to_string()),
        ("find", term) => Command::Find(term.to_string()),
        ("category", c) => Command::Filter(WordFilterField::Category(all_or(c))),
        ("mood", m) => Command::Filter(WordFilterField::Mood(all_or(m))),
        ("active", a) => match a.to_ascii_lowercase().as_str() {
            "true" | "yes" => Command::Filter(WordFilterField::Active(Some(true))),
            "false" | "no" => Command::Filter(WordFilterField::Active(Some(false))),
            "all" | "" => Command::Filter(WordFilterField::Active(None)),
            _ => Command::Unknown(input.to_string()),
        },
        ("bulk", "on") => Command::Bulk(true),
        ("bulk", "off") => Command::Bulk(false),
        (view, "") => match View::parse(view) {
            Some(view) => Command::Show(view),
            None => Command::Unknown(input.to_string()),
        },
        _ => Command::Unknown(input.to_string()),
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Show(view) => AppEvent::ShowView(view),
        Command::NewPrompt => AppEvent::GenerateRandom,
        Command::Share => AppEvent::Share,
        Command::Search(n) => AppEvent::SearchWord(n),
        Command::Hashtag => AppEvent::OpenHashtag,
        Command::Scene => AppEvent::ToggleScene,
        Command::Vibe(v) => AppEvent::SetVibe(v),
        Command::AnimalRarity(r) => AppEvent::SetAnimalRarity(r),
        Command::ObjectRarity(r) => AppEvent::SetObjectRarity(r),
        Command::NextPage => AppEvent::ArchiveNext,
        Command::PrevPage => AppEvent::ArchivePrev,
        Command::Login(None) => AppEvent::BeginLogin,
        Command::Login(Some(password)) => AppEvent::Login(password),
        Command::Logout => AppEvent::Logout,
        Command::Reload => AppEvent::ReloadWords,
        Command::Find(term) => AppEvent::SearchWords(term),
        Command::Filter(field) => AppEvent::FilterWords(field),
        Command::Bulk(active) => AppEvent::BulkSetActive(active),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_views() {
        assert_eq!(parse_command(":daily"), Command::Show(View::Daily));
        assert_eq!(parse_command(":Archive"), Command::Show(View::Archive));
        assert_eq!(parse_command(":admin"), Command::Show(View::Admin));
    }

    #[test]
    fn test_parse_search_index() {
        assert_eq!(parse_command(":search 2"), Command::Search(2));
        assert!(matches!(parse_command(":search 0"), Command::Unknown(_)));
        assert!(matches!(parse_command(":search fox"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_random_filters() {
        assert_eq!(parse_command(":vibe spooky"), Command::Vibe("spooky".to_string()));
        assert_eq!(
            parse_command(":animal  rare "),
            Command::AnimalRarity("rare".to_string())
        );
        assert!(matches!(parse_command(":vibe"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_login_with_and_without_password() {
        assert_eq!(parse_command(":login"), Command::Login(None));
        assert_eq!(
            parse_command(":login s3cret"),
            Command::Login(Some("s3cret".to_string()))
        );
    }

    #[test]
    fn test_parse_word_filters() {
        assert_eq!(
            parse_command(":category scene"),
            Command::Filter(WordFilterField::Category(Some("scene".to_string())))
        );
        assert_eq!(
            parse_command(":mood all"),
            Command::Filter(WordFilterField::Mood(None))
        );
        assert_eq!(
            parse_command(":active false"),
            Command::Filter(WordFilterField::Active(Some(false)))
        );
        assert!(matches!(parse_command(":active maybe"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_bulk() {
        assert_eq!(parse_command(":bulk on"), Command::Bulk(true));
        assert_eq!(parse_command(":bulk off"), Command::Bulk(false));
        assert!(matches!(parse_command(":bulk"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command(":"), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_command("invalid"), Command::Unknown(_)));
        assert!(matches!(parse_command(":q now"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(
            command_to_app_event(Command::Login(None)),
            AppEvent::BeginLogin
        );
        assert_eq!(
            command_to_app_event(Command::NewPrompt),
            AppEvent::GenerateRandom
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("x".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
