use crate::engine::dictionary::Dictionary;
use crate::engine::{suggestions, tokenizer, DictionaryEngine, EngineFactory, MisspelledRange};
use crate::error::{Result, SpellCheckError};
use regex::Regex;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct WordListOptions {
    /// Directory holding `<locale_tag>.dict` files.
    pub dictionary_dir: PathBuf,
    /// Plain text file, one word per line, `#` comments allowed.
    pub personal_dictionary: Option<PathBuf>,
    pub ignore_patterns: Vec<String>,
    pub max_suggestions: usize,
}

/// Dictionary engine backed by an FST word list and a personal word file.
pub struct WordListEngine {
    options: WordListOptions,
    dictionary: Option<Dictionary>,
    personal_words: HashSet<String>,
    ignore_patterns: Vec<Regex>,
}

impl WordListEngine {
    pub fn new(options: WordListOptions) -> Self {
        let mut ignore_patterns = Vec::new();
        for pattern in &options.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => log::warn!("Invalid ignore pattern '{}': {}", pattern, e),
            }
        }

        Self {
            options,
            dictionary: None,
            personal_words: HashSet::new(),
            ignore_patterns,
        }
    }

    fn dictionary_path(&self, locale_tag: &str, hint: &str) -> PathBuf {
        let dir = if hint.is_empty() {
            self.options.dictionary_dir.clone()
        } else {
            PathBuf::from(hint)
        };
        dir.join(format!("{}.dict", locale_tag))
    }

    fn load_personal_words(path: &Path) -> Result<HashSet<String>> {
        let mut words = HashSet::new();
        if !path.exists() {
            return Ok(words);
        }

        let content = fs::read_to_string(path)?;
        for line in content.lines() {
            let word = line.trim();
            if !word.is_empty() && !word.starts_with('#') {
                words.insert(normalize_word(word));
            }
        }
        Ok(words)
    }

    fn should_ignore(&self, word: &str) -> bool {
        // Single characters and numbers are never flagged
        if word.chars().count() <= 1 {
            return true;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return true;
        }

        self.ignore_patterns.iter().any(|p| p.is_match(word))
    }

    fn is_known(&self, word: &str) -> bool {
        let normalized = normalize_word(word);
        self.personal_words.contains(&normalized)
            || self
                .dictionary
                .as_ref()
                .is_some_and(|dict| dict.contains(&normalized))
    }
}

impl DictionaryEngine for WordListEngine {
    fn set_dictionary(&mut self, locale_tag: &str, dictionary_path_hint: &str) -> Result<()> {
        let path = self.dictionary_path(locale_tag, dictionary_path_hint);

        let dictionary = if path.exists() {
            Dictionary::load_from_path(&path)
                .map_err(|e| SpellCheckError::engine_init(locale_tag, format!("{:#}", e)))?
        } else {
            Dictionary::embedded(locale_tag).ok_or_else(|| {
                SpellCheckError::engine_init(
                    locale_tag,
                    format!("no dictionary installed at {}", path.display()),
                )
            })?
        };

        let personal_words = match &self.options.personal_dictionary {
            Some(personal) => Self::load_personal_words(personal)
                .map_err(|e| SpellCheckError::engine_init(locale_tag, e))?,
            None => HashSet::new(),
        };

        log::debug!(
            "Loaded {} words for '{}' ({} personal)",
            dictionary.len(),
            locale_tag,
            personal_words.len()
        );

        self.dictionary = Some(dictionary);
        self.personal_words = personal_words;
        Ok(())
    }

    fn is_misspelled(&self, word: &str) -> bool {
        if self.dictionary.is_none() || self.should_ignore(word) {
            return false;
        }
        !self.is_known(word)
    }

    fn check_spelling(&self, text: &str) -> Vec<MisspelledRange> {
        tokenizer::words(text)
            .into_iter()
            .filter(|token| self.is_misspelled(token.text))
            .map(|token| MisspelledRange {
                start: token.start,
                end: token.end,
            })
            .collect()
    }

    fn get_corrections_for_misspelling(&self, word: &str) -> Vec<String> {
        match &self.dictionary {
            Some(dict) => suggestions::generate(word, dict, self.options.max_suggestions),
            None => Vec::new(),
        }
    }

    fn add(&mut self, word: &str) -> Result<()> {
        let normalized = normalize_word(word.trim());
        if normalized.is_empty() || !self.personal_words.insert(normalized.clone()) {
            return Ok(());
        }

        if let Some(path) = &self.options.personal_dictionary {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}", normalized)?;
        }
        Ok(())
    }
}

fn normalize_word(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

/// Creates a fresh [`WordListEngine`] per bind.
#[derive(Debug, Clone)]
pub struct WordListEngineFactory {
    options: WordListOptions,
}

impl WordListEngineFactory {
    pub fn new(options: WordListOptions) -> Self {
        Self { options }
    }
}

impl EngineFactory for WordListEngineFactory {
    fn create(&self) -> Result<Box<dyn DictionaryEngine>> {
        Ok(Box::new(WordListEngine::new(self.options.clone())))
    }
}
