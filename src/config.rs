use crate::engine::wordlist::WordListOptions;
use crate::session::strategy::CheckStrategy;
use crate::session::{cache, SessionOptions};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Locale such as `en-US`. Unset means the system locale.
    pub language: Option<String>,
    pub auto_correct: bool,
    pub cache_capacity: usize,
    pub cache_max_age_secs: u64,
    /// Unset means the platform default.
    pub strategy: Option<CheckStrategy>,
    /// Unset means only where the platform keeps user dictionaries.
    pub user_dictionary: Option<bool>,
    pub dictionary_dir: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,
    pub max_suggestions: usize,
    pub ignore_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            auto_correct: true,
            cache_capacity: cache::DEFAULT_CAPACITY,
            cache_max_age_secs: cache::DEFAULT_MAX_AGE.as_secs(),
            strategy: None,
            user_dictionary: None,
            dictionary_dir: None,
            personal_dictionary: None,
            max_suggestions: 5,
            ignore_patterns: vec![
                r"\b[A-Z0-9_]{2,}\b".to_string(),    // ALL_CAPS
                r"https?://\S+".to_string(),         // URLs
                r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
                r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}".to_string(), // Emails
            ],
        }
    }
}

/// One config file as written on disk. Keys left out stay `None` so they
/// never override an earlier layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub language: Option<String>,
    pub auto_correct: Option<bool>,
    pub cache_capacity: Option<usize>,
    pub cache_max_age_secs: Option<u64>,
    pub strategy: Option<CheckStrategy>,
    pub user_dictionary: Option<bool>,
    pub dictionary_dir: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,
    pub max_suggestions: Option<usize>,
    pub ignore_patterns: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(language: Option<String>, personal_dict: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigFile::from_file(&global_path)?);
            }
        }

        // Local config overrides global
        let local_path = PathBuf::from(".spellchk.toml");
        if local_path.exists() {
            config = config.merge(ConfigFile::from_file(&local_path)?);
        }

        if language.is_some() {
            config.language = language;
        }
        if personal_dict.is_some() {
            config.personal_dictionary = personal_dict;
        }

        if config.personal_dictionary.is_none() {
            config.personal_dictionary = Self::default_personal_dict_path();
        }
        if config.dictionary_dir.is_none() {
            config.dictionary_dir = Self::data_dir();
        }

        Ok(config)
    }

    /// A single file applied over the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigFile::from_file(path)?))
    }

    fn merge(mut self, layer: ConfigFile) -> Self {
        if layer.language.is_some() {
            self.language = layer.language;
        }
        if layer.strategy.is_some() {
            self.strategy = layer.strategy;
        }
        if layer.user_dictionary.is_some() {
            self.user_dictionary = layer.user_dictionary;
        }
        if layer.dictionary_dir.is_some() {
            self.dictionary_dir = layer.dictionary_dir;
        }
        if layer.personal_dictionary.is_some() {
            self.personal_dictionary = layer.personal_dictionary;
        }
        if let Some(auto_correct) = layer.auto_correct {
            self.auto_correct = auto_correct;
        }
        if let Some(capacity) = layer.cache_capacity {
            self.cache_capacity = capacity;
        }
        if let Some(secs) = layer.cache_max_age_secs {
            self.cache_max_age_secs = secs;
        }
        if let Some(max) = layer.max_suggestions {
            self.max_suggestions = max;
        }
        if let Some(patterns) = layer.ignore_patterns {
            self.ignore_patterns = patterns;
        }
        self
    }

    pub fn session_options(&self) -> SessionOptions {
        let strategy = self.strategy.unwrap_or_else(CheckStrategy::for_current_platform);
        SessionOptions {
            strategy,
            auto_correct: self.auto_correct,
            cache_capacity: self.cache_capacity,
            cache_max_age: Duration::from_secs(self.cache_max_age_secs),
            user_dictionary: self
                .user_dictionary
                .unwrap_or_else(|| strategy.supports_user_dictionary()),
            dictionary_path_hint: String::new(),
        }
    }

    pub fn wordlist_options(&self) -> WordListOptions {
        WordListOptions {
            dictionary_dir: self
                .dictionary_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
            personal_dictionary: self.personal_dictionary.clone(),
            ignore_patterns: self.ignore_patterns.clone(),
            max_suggestions: self.max_suggestions,
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellchk").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_personal_dict_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellchk").map(|dirs| dirs.config_dir().join("personal.txt"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellchk").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
