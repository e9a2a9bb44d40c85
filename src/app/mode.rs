/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Daily,
    Random,
    Archive,
    Admin,
}

impl View {
    pub const ALL: [View; 4] = [View::Daily, View::Random, View::Archive, View::Admin];

    pub fn title(&self) -> &'static str {
        match self {
            View::Daily => "Daily",
            View::Random => "Random",
            View::Archive => "Archive",
            View::Admin => "Admin",
        }
    }

    pub fn parse(name: &str) -> Option<View> {
        View::ALL
            .into_iter()
            .find(|v| v.title().eq_ignore_ascii_case(name.trim()))
    }
}

/// What keyboard input currently drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browse,
    Command,
    Login,
    Form,
    Confirm,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_parse() {
        assert_eq!(View::parse("archive"), Some(View::Archive));
        assert_eq!(View::parse(" DAILY "), Some(View::Daily));
        assert_eq!(View::parse("settings"), None);
    }

    #[test]
    fn test_appmode_enum_exists() {
        let _mode = AppMode::Browse;
        let _mode = AppMode::Command;
        let _mode = AppMode::Login;
        let _mode = AppMode::Form;
        let _mode = AppMode::Confirm;
        let _mode = AppMode::Quit;
    }
}
