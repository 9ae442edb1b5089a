use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/api";
pub const DEFAULT_LANGUAGE: &str = "markdown";
pub const DEFAULT_THEME: &str = "ansi";

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    // Server
    #[serde(default = "default_base_url")]
    pub base_url: Option<String>,

    // Runtime
    #[serde(default = "default_runtime")]
    pub runtime: Option<String>,
    #[serde(default = "default_no_accelerator_env")]
    pub no_accelerator_env: Option<String>,

    // Model
    pub model: Option<String>,

    // Global
    #[serde(default = "default_false")]
    pub quiet: Option<bool>,
    #[serde(default = "default_false")]
    pub no_color: Option<bool>,
    #[serde(default = "default_language")]
    pub language: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: Option<String>,
}

impl Config {
    /// Creates a `Config` with every serde default applied.
    pub fn new() -> Self {
        serde_json::from_str("{}").unwrap_or_default()
    }
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_runtime() -> Option<String> {
    Some(ollama_stream::models::DEFAULT_RUNTIME.to_string())
}

fn default_no_accelerator_env() -> Option<String> {
    Some(ollama_stream::mode::DEFAULT_NO_ACCELERATOR_ENV.to_string())
}

fn default_false() -> Option<bool> {
    Some(false)
}

fn default_language() -> Option<String> {
    Some(DEFAULT_LANGUAGE.to_string())
}

fn default_theme() -> Option<String> {
    Some(DEFAULT_THEME.to_string())
}
