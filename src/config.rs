//! Startup configuration from environment variables.
//!
//! The access key is configuration, never user input. Without a real key
//! the app still starts: every request fails and the error banner points
//! the user at the key.

use std::env;

use crate::api::client::DEFAULT_API_URL;

/// Environment variable holding the Unsplash API access key
pub const ACCESS_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";

/// Environment variable overriding the API base URL
pub const API_URL_VAR: &str = "UNSPLASH_API_URL";

/// Stand-in key used when no real one is configured
pub const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_UNSPLASH_ACCESS_KEY";

/// Resolved startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Unsplash API
    pub api_url: String,
    /// Per-request access key (`client_id` parameter)
    pub access_key: String,
}

impl Config {
    /// Read configuration from the process environment
    pub fn load() -> Self {
        let config = Config::resolve(env::var(API_URL_VAR).ok(), env::var(ACCESS_KEY_VAR).ok());

        if config.access_key == PLACEHOLDER_ACCESS_KEY {
            println!(
                "⚠️  {ACCESS_KEY_VAR} is not set; using the placeholder key. \
                 Requests will fail until a real key is configured."
            );
        }

        config
    }

    /// Pure resolution step, split out for tests.
    /// Empty values count as unset.
    fn resolve(api_url: Option<String>, access_key: Option<String>) -> Self {
        Config {
            api_url: api_url
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            access_key: access_key
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_ACCESS_KEY.to_string()),
        }
    }
}
