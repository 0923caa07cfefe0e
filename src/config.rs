// SYNOID Shorts Configuration
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Provider settings come from the process environment. The binary loads
// `.env` before calling `ShortsConfig::from_env`.

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Remote completion settings. A missing key means local generation only.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortsConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for ShortsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ShortsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            api_key: read("OPENAI_API_KEY"),
            base_url: read("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: read("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Drops the credential so the local provider is always used.
    pub fn without_remote(mut self) -> Self {
        self.api_key = None;
        self
    }

    pub fn has_remote(&self) -> bool {
        self.api_key.is_some()
    }
}
