//! Configuration loading.
//!
//! Settings live in a `.codechart.toml` discovered by walking up from the
//! working directory; a missing or unreadable file yields defaults. Only the
//! remote scorer is configurable — the engine itself has no knobs.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = ".codechart.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Remote line-scoring service settings (`[scorer]` table).
    #[serde(default)]
    pub scorer: ScorerConfig,
    /// The path the configuration was loaded from, `None` for defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

/// Remote line-scoring service settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ScorerConfig {
    /// OpenAI-compatible chat-completions endpoint.
    pub api_url: String,
    /// Model requested for scoring.
    pub model: String,
    /// Hard timeout for the single batch call, in seconds.
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai/v1/chat/completions".to_owned(),
            model: "llama-3.1-8b-instant".to_owned(),
            timeout_secs: 10,
            api_key_env: "GROQ_API_KEY".to_owned(),
        }
    }
}

impl Config {
    /// Loads configuration from the current directory upward.
    ///
    /// The walk needs an absolute starting point: a relative `.` has no
    /// parent components to pop, so the working directory is resolved first.
    /// An unreadable working directory yields defaults.
    #[must_use]
    pub fn load() -> Self {
        std::env::current_dir().map_or_else(|_| Self::default(), |cwd| Self::load_from_path(&cwd))
    }

    /// Loads configuration starting from a specific path and traversing up.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Self>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }
            if !current.pop() {
                break;
            }
        }

        Self::default()
    }
}
