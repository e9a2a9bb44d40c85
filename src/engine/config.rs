// Configuration for the wdid client
// Defaults match the hosted service; CLI flags override the API section

/// Remote API settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Service root, without trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wdid-api-production.up.railway.app".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Archive browsing
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveConfig {
    pub items_per_page: usize,

    /// Card color for entries without one
    pub default_color: String,

    /// Hashtag for entries without one
    pub default_hashtag: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            items_per_page: 12,
            default_color: "#2563EB".to_string(),
            default_hashtag: "#WDID".to_string(),
        }
    }
}

/// External link targets
#[derive(Debug, Clone, PartialEq)]
pub struct LinkConfig {
    /// Image search, the word is appended url-encoded
    pub image_search: String,

    /// Hashtag search on Cara, the hashtag is appended url-encoded
    pub hashtag_search: String,

    /// Site named in share text
    pub share_site: String,

    /// Hashtag prefix for generated daily tags (#WDID250106)
    pub hashtag_prefix: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            image_search: "https://www.google.com/search?tbm=isch&q=".to_string(),
            hashtag_search: "https://cara.app/search?q=".to_string(),
            share_site: "whatdoidraw.com".to_string(),
            hashtag_prefix: "#WDID".to_string(),
        }
    }
}

/// Surface colors
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Archive view background
    pub archive_background: String,

    /// Admin view background
    pub admin_background: String,

    /// Error and notice text
    pub coral: String,

    /// Secondary text
    pub dark_teal: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            archive_background: "#353535".to_string(),
            admin_background: "#1F2937".to_string(),
            coral: "#FF6B6B".to_string(),
            dark_teal: "#1E5F74".to_string(),
        }
    }
}

/// Master configuration combining all wdid settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub archive: ArchiveConfig,
    pub links: LinkConfig,
    pub theme: ThemeConfig,
}

impl Config {
    /// Apply command-line overrides on top of the defaults
    pub fn with_api(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = timeout_secs {
            self.api.timeout_secs = secs.max(1);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.archive.items_per_page, 12);
        assert_eq!(config.theme.archive_background, "#353535");
        assert!(config.api.base_url.starts_with("https://"));
    }

    #[test]
    fn test_with_api_trims_trailing_slash() {
        let config = Config::default().with_api(Some("http://localhost:3000/".to_string()), Some(0));
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 1);
    }

    #[test]
    fn test_with_api_keeps_defaults_when_absent() {
        let config = Config::default().with_api(None, None);
        assert_eq!(config, Config::default());
    }
}
