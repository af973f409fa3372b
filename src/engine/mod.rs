pub mod dictionary;
pub mod suggestions;
pub mod tokenizer;
pub mod wordlist;

use crate::error::{Result, SpellCheckError};

pub use wordlist::{WordListEngine, WordListEngineFactory};

/// A misspelled byte range inside a checked text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MisspelledRange {
    pub start: usize,
    pub end: usize,
}

/// Spellcheck primitives for one active language.
///
/// Implementations are platform specific in behavior. The session never
/// assumes that `is_misspelled` and `check_spelling` agree with each other.
pub trait DictionaryEngine: Send {
    /// Bind the engine to `locale_tag` (already normalized, e.g. `en_us`).
    /// Backends are free to ignore `dictionary_path_hint`.
    fn set_dictionary(&mut self, locale_tag: &str, dictionary_path_hint: &str) -> Result<()>;

    fn is_misspelled(&self, word: &str) -> bool;

    /// Misspelled ranges within `text`, in order. Empty means all correct.
    fn check_spelling(&self, text: &str) -> Vec<MisspelledRange>;

    fn get_corrections_for_misspelling(&self, word: &str) -> Vec<String>;

    /// Add a word to the persistent user dictionary.
    fn add(&mut self, _word: &str) -> Result<()> {
        Err(SpellCheckError::Unsupported("add"))
    }
}

/// Constructs engine instances on demand, so backend failures only reach
/// callers that initialize a session.
pub trait EngineFactory: Send {
    fn create(&self) -> Result<Box<dyn DictionaryEngine>>;
}

impl<F> EngineFactory for F
where
    F: Fn() -> Result<Box<dyn DictionaryEngine>> + Send,
{
    fn create(&self) -> Result<Box<dyn DictionaryEngine>> {
        self()
    }
}

/// Convert a locale identifier to the engine convention: lowercase with
/// underscores (`en-US` -> `en_us`).
pub fn normalize_locale(locale: &str) -> String {
    locale.trim().to_lowercase().replace('-', "_")
}

/// Best-effort system locale from the POSIX environment, in `en-US` form.
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| locale_from_posix(&value))
}

fn locale_from_posix(value: &str) -> Option<String> {
    // en_US.UTF-8@euro -> en_US
    let base = value.split(['.', '@']).next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}
