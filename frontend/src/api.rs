pub mod cache;
pub mod teams;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    join_url(&Config::api_base_url(), path)
}

fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "/api/teams/t1"), "/api/teams/t1");
        assert_eq!(join_url("https://api.example.com/", "/api/teams/t1"), "https://api.example.com/api/teams/t1");
    }
}
