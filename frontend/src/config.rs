/// Build-time settings for the browser bundle.
///
/// Values can be overridden when building (`TEAM_API_BASE_URL=... trunk build`).
pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Empty means relative URLs: Trunk proxies /api/ in development and
        // nginx does the same in production.
        option_env!("TEAM_API_BASE_URL").unwrap_or("").to_string()
    }

    /// Public website root, only used for display next to the slug input
    pub fn website_url() -> String {
        option_env!("TEAM_WEBSITE_URL")
            .unwrap_or("http://localhost:3000")
            .trim_end_matches('/')
            .to_string()
    }

    pub fn app_name() -> &'static str {
        option_env!("TEAM_APP_NAME").unwrap_or("Bogie")
    }
}

/// Prefix rendered in front of the slug input, e.g. `https://example.com/team/`
pub fn team_url_prefix(website_url: &str) -> String {
    format!("{}/team/", website_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_url_prefix_normalizes_trailing_slash() {
        assert_eq!(team_url_prefix("https://example.com"), "https://example.com/team/");
        assert_eq!(team_url_prefix("https://example.com/"), "https://example.com/team/");
    }

    #[test]
    fn test_website_url_has_no_trailing_slash() {
        assert!(!Config::website_url().ends_with('/'));
    }
}
