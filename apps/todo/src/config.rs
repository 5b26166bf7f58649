//! Configuration management for the todo application.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::types::TodoId;
use serde::{Deserialize, Serialize};
use std::env;

/// Default API location (a local `json-server` serving `db.json`)
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Todo API configuration
    pub api: ApiConfig,
    /// Log filter (trace, debug, info, warn, error, or an `EnvFilter` directive)
    pub log_level: String,
}

/// Todo API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash; the collection lives at `{base_url}/todos`
    pub base_url: String,
}

impl ApiConfig {
    /// Creates an API configuration for the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the collection (`GET`/`POST`)
    #[must_use]
    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    /// URL of a single item (`PATCH`/`DELETE`)
    #[must_use]
    pub fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{id}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `TODO_API_URL`: API base URL (default `http://localhost:3001`)
    /// - `RUST_LOG`: log filter (default `info`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api: ApiConfig::new(
                lookup("TODO_API_URL")
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            ),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config.api.base_url, "http://localhost:3001");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TODO_API_URL", "https://todos.example.com/api/"),
            ("RUST_LOG", "todo=debug"),
        ]));

        assert_eq!(config.api.base_url, "https://todos.example.com/api");
        assert_eq!(config.log_level, "todo=debug");
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[("TODO_API_URL", "  ")]));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn endpoint_urls() {
        let api = ApiConfig::new("http://localhost:3001/");

        assert_eq!(api.todos_url(), "http://localhost:3001/todos");
        assert_eq!(api.todo_url(TodoId::new(5)), "http://localhost:3001/todos/5");
    }
}
