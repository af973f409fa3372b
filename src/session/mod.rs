pub mod cache;
pub mod contractions;
pub mod logger;
pub mod strategy;

use crate::engine::{normalize_locale, system_locale, DictionaryEngine, EngineFactory};
use crate::error::Result;
use crate::host::{LanguageDetector, TextInputSurface};
use cache::MisspellingCache;
use contractions::{ContractionTable, CONTRACTION_TABLE};
use log::Level;
use logger::{LogLogger, SessionLogger};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use strategy::CheckStrategy;

pub const FALLBACK_LOCALE: &str = "en-US";

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub strategy: CheckStrategy,
    pub auto_correct: bool,
    pub cache_capacity: usize,
    pub cache_max_age: Duration,
    /// Whether `add_to_dictionary` reaches the engine at all.
    pub user_dictionary: bool,
    pub dictionary_path_hint: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        let strategy = CheckStrategy::for_current_platform();
        Self {
            strategy,
            auto_correct: true,
            cache_capacity: cache::DEFAULT_CAPACITY,
            cache_max_age: cache::DEFAULT_MAX_AGE,
            user_dictionary: strategy.supports_user_dictionary(),
            dictionary_path_hint: String::new(),
        }
    }
}

/// One bound spellchecker: an engine for the active language, its decision
/// cache, and the false-positive heuristics applied on top of the engine.
///
/// A session is driven by a single caller. Use [`SpellCheckHandler`] to share
/// it across threads or hand it to a host surface.
pub struct SpellCheckSession {
    factory: Box<dyn EngineFactory>,
    engine: Option<Box<dyn DictionaryEngine>>,
    language: Option<String>,
    options: SessionOptions,
    cache: MisspellingCache,
    contractions: &'static ContractionTable,
    detector: Option<Box<dyn LanguageDetector>>,
    logger: Arc<dyn SessionLogger>,
}

impl SpellCheckSession {
    pub fn new(factory: impl EngineFactory + 'static) -> Self {
        Self::with_options(factory, SessionOptions::default())
    }

    pub fn with_options(factory: impl EngineFactory + 'static, options: SessionOptions) -> Self {
        let cache = MisspellingCache::new(options.cache_capacity, options.cache_max_age);
        Self {
            factory: Box::new(factory),
            engine: None,
            language: None,
            options,
            cache,
            contractions: &CONTRACTION_TABLE,
            detector: None,
            logger: Arc::new(LogLogger),
        }
    }

    pub fn with_logger(mut self, logger: impl SessionLogger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    pub fn with_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Some(Box::new(detector));
        self
    }

    /// Bind an engine for `locale`, or the system locale when `None`.
    ///
    /// On failure the session stays usable with no engine, and every decision
    /// reports "correctly spelled".
    pub fn init(&mut self, locale: Option<&str>) -> Result<()> {
        let locale = locale
            .map(str::to_string)
            .or_else(system_locale)
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string());
        self.bind(&locale)
    }

    /// Replace the engine with one bound to `locale` and drop every cached
    /// decision.
    pub fn switch_language(&mut self, locale: &str) -> Result<()> {
        if let Some(current) = &self.language {
            self.log(
                Level::Info,
                format!("Switching language from {} to {}", current, locale),
            );
        }
        self.bind(locale)
    }

    /// Run the language detector over `sample` and switch when it reports a
    /// different language. Does nothing without a detector.
    pub fn provide_hint_text(&mut self, sample: &str) -> Result<()> {
        let Some(detected) = self.detector.as_ref().and_then(|d| d.detect(sample)) else {
            return Ok(());
        };

        let unchanged = self
            .language
            .as_deref()
            .is_some_and(|current| normalize_locale(current) == normalize_locale(&detected));
        if unchanged {
            return Ok(());
        }

        self.log(Level::Debug, format!("Detected language {}", detected));
        self.switch_language(&detected)
    }

    fn bind(&mut self, locale: &str) -> Result<()> {
        // Old engine goes first so only one is ever alive
        self.engine = None;
        self.language = None;
        self.cache.clear();

        let tag = normalize_locale(locale);
        let bound = self.factory.create().and_then(|mut engine| {
            engine.set_dictionary(&tag, &self.options.dictionary_path_hint)?;
            Ok(engine)
        });

        match bound {
            Ok(engine) => {
                self.log(Level::Info, format!("Bound dictionary engine to {}", tag));
                self.log(
                    Level::Debug,
                    format!(
                        "Caching up to {} decisions for {}s",
                        self.cache.capacity(),
                        self.cache.max_age().as_secs()
                    ),
                );
                self.engine = Some(engine);
                self.language = Some(locale.to_string());
                Ok(())
            }
            Err(e) => {
                self.log(Level::Warn, format!("Spellchecking disabled: {}", e));
                Err(e)
            }
        }
    }

    /// Whether `text` is misspelled. Never fails: without an engine every
    /// text is considered correct.
    pub fn is_misspelled(&mut self, text: &str) -> bool {
        if let Some(cached) = self.cache.get(text) {
            self.log(Level::Trace, format!("Cache hit: {}", text));
            return cached;
        }

        let misspelled = self.decide(text);
        self.log(Level::Trace, format!("Caching: {}", text));
        self.cache.set(text, misspelled);
        misspelled
    }

    fn decide(&self, text: &str) -> bool {
        if self.contractions.contains(text) {
            return false;
        }

        let Some(engine) = self.engine.as_deref() else {
            return false;
        };

        match self.options.strategy {
            CheckStrategy::DirectCheck => engine.is_misspelled(text),
            CheckStrategy::RangeCheckWithLowercaseRetry => {
                let ranges = engine.check_spelling(text);
                match ranges.first() {
                    None => false,
                    // Interior misspelling, not the capitalization defect
                    Some(first) if first.start != 0 => true,
                    Some(_) => engine.is_misspelled(&text.to_lowercase()),
                }
            }
        }
    }

    /// Host-facing form of [`is_misspelled`](Self::is_misspelled): `true`
    /// when `text` is spelled correctly.
    pub fn handle_spell_check(&mut self, text: &str) -> bool {
        if self.engine.is_none() {
            return true;
        }
        !self.is_misspelled(text)
    }

    /// Ordered corrections for `text`, or `None` when no engine is bound.
    /// Always asks the live engine.
    pub async fn get_corrections_for_misspelling(&self, text: &str) -> Option<Vec<String>> {
        self.corrections(text)
    }

    fn corrections(&self, text: &str) -> Option<Vec<String>> {
        self.engine
            .as_deref()
            .map(|engine| engine.get_corrections_for_misspelling(text))
    }

    /// Add `text` to the engine's user dictionary. Skipped silently when the
    /// platform or engine has no user dictionary.
    pub async fn add_to_dictionary(&mut self, text: &str) {
        self.add(text)
    }

    fn add(&mut self, text: &str) {
        if !self.options.user_dictionary {
            return;
        }
        let Some(engine) = self.engine.as_deref_mut() else {
            return;
        };

        match engine.add(text) {
            Ok(()) => {
                self.cache.remove(text);
                self.log(Level::Debug, format!("Added to dictionary: {}", text));
            }
            Err(e) if e.is_unsupported() => {
                self.log(Level::Debug, format!("Skipping add for '{}': {}", text, e));
            }
            Err(e) => {
                self.log(Level::Warn, format!("Failed to add '{}': {}", text, e));
            }
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    pub fn auto_correct(&self) -> bool {
        self.options.auto_correct
    }

    pub fn strategy(&self) -> CheckStrategy {
        self.options.strategy
    }

    pub fn cached_decisions(&self) -> usize {
        self.cache.len()
    }

    fn log(&self, level: Level, message: String) {
        self.logger.log(level, &message);
    }
}

/// Shareable handle to a [`SpellCheckSession`].
///
/// Each call takes the session lock for its duration only.
#[derive(Clone)]
pub struct SpellCheckHandler {
    inner: Arc<Mutex<SpellCheckSession>>,
}

impl SpellCheckHandler {
    pub fn new(session: SpellCheckSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Initialize the session and, when a surface is given, register the
    /// decision callback with it.
    pub fn init(&self, locale: Option<&str>, surface: Option<&mut dyn TextInputSurface>) -> Result<()> {
        let (language, auto_correct) = {
            let mut session = self.inner.lock();
            session.init(locale)?;
            (
                session.language().unwrap_or(FALLBACK_LOCALE).to_string(),
                session.auto_correct(),
            )
        };

        if let Some(surface) = surface {
            let session = Arc::downgrade(&self.inner);
            surface.set_spell_check_provider(
                &language,
                auto_correct,
                Box::new(move |text: &str| provide(&session, text)),
            );
        }
        Ok(())
    }

    pub fn is_misspelled(&self, text: &str) -> bool {
        self.inner.lock().is_misspelled(text)
    }

    pub fn handle_spell_check(&self, text: &str) -> bool {
        self.inner.lock().handle_spell_check(text)
    }

    pub async fn get_corrections_for_misspelling(&self, text: &str) -> Option<Vec<String>> {
        self.inner.lock().corrections(text)
    }

    pub async fn add_to_dictionary(&self, text: &str) {
        self.inner.lock().add(text)
    }

    pub fn switch_language(&self, locale: &str) -> Result<()> {
        self.inner.lock().switch_language(locale)
    }

    pub fn provide_hint_text(&self, sample: &str) -> Result<()> {
        self.inner.lock().provide_hint_text(sample)
    }

    pub fn language(&self) -> Option<String> {
        self.inner.lock().language().map(str::to_string)
    }
}

// A torn-down session spellchecks nothing
fn provide(session: &Weak<Mutex<SpellCheckSession>>, text: &str) -> bool {
    match session.upgrade() {
        Some(session) => session.lock().handle_spell_check(text),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MisspelledRange;
    use crate::error::SpellCheckError;
    use crate::host::SpellCheckProvider;
    use std::collections::{HashMap, HashSet};

    /// What the mock engine answers, per bound locale tag.
    #[derive(Default)]
    struct Script {
        misspelled: HashMap<&'static str, HashSet<&'static str>>,
        ranges: HashMap<&'static str, Vec<MisspelledRange>>,
        corrections: Vec<String>,
        unknown_locales_fail: bool,
        supports_add: bool,
    }

    #[derive(Default)]
    struct Calls {
        bound: Vec<String>,
        is_misspelled: Vec<String>,
        check_spelling: Vec<String>,
        corrections: usize,
        added: Vec<String>,
        dropped: usize,
    }

    struct MockEngine {
        script: Arc<Script>,
        calls: Arc<std::sync::Mutex<Calls>>,
        locale: Option<String>,
    }

    impl MockEngine {
        fn words(&self) -> Option<&HashSet<&'static str>> {
            self.locale
                .as_deref()
                .and_then(|locale| self.script.misspelled.get(locale))
        }
    }

    impl DictionaryEngine for MockEngine {
        fn set_dictionary(&mut self, locale_tag: &str, _hint: &str) -> Result<()> {
            if self.script.unknown_locales_fail && !self.script.misspelled.contains_key(locale_tag) {
                return Err(SpellCheckError::engine_init(locale_tag, "no such dictionary"));
            }
            self.calls.lock().unwrap().bound.push(locale_tag.to_string());
            self.locale = Some(locale_tag.to_string());
            Ok(())
        }

        fn is_misspelled(&self, word: &str) -> bool {
            self.calls.lock().unwrap().is_misspelled.push(word.to_string());
            self.words().is_some_and(|words| words.contains(word))
        }

        fn check_spelling(&self, text: &str) -> Vec<MisspelledRange> {
            self.calls.lock().unwrap().check_spelling.push(text.to_string());
            if let Some(ranges) = self.script.ranges.get(text) {
                return ranges.clone();
            }
            if self.words().is_some_and(|words| words.contains(text)) {
                vec![MisspelledRange { start: 0, end: text.len() }]
            } else {
                Vec::new()
            }
        }

        fn get_corrections_for_misspelling(&self, _word: &str) -> Vec<String> {
            self.calls.lock().unwrap().corrections += 1;
            self.script.corrections.clone()
        }

        fn add(&mut self, word: &str) -> Result<()> {
            if !self.script.supports_add {
                return Err(SpellCheckError::Unsupported("add"));
            }
            self.calls.lock().unwrap().added.push(word.to_string());
            Ok(())
        }
    }

    impl Drop for MockEngine {
        fn drop(&mut self) {
            self.calls.lock().unwrap().dropped += 1;
        }
    }

    struct Fixture {
        calls: Arc<std::sync::Mutex<Calls>>,
    }

    impl Fixture {
        fn engine_calls(&self) -> usize {
            let calls = self.calls.lock().unwrap();
            calls.is_misspelled.len() + calls.check_spelling.len()
        }
    }

    fn english_script() -> Script {
        let mut script = Script {
            corrections: vec!["test".to_string(), "tests".to_string()],
            unknown_locales_fail: true,
            supports_add: true,
            ..Default::default()
        };
        script
            .misspelled
            .insert("en_us", ["testzz", "Hello", "bonjour", "wrld", "qwxz"].into());
        script.misspelled.insert("fr_fr", ["testzz", "hello"].into());
        script.ranges.insert(
            "Hello world",
            vec![MisspelledRange { start: 0, end: 5 }],
        );
        script
            .ranges
            .insert("hello wrld", vec![MisspelledRange { start: 6, end: 10 }]);
        script
            .ranges
            .insert("Qwxz there", vec![MisspelledRange { start: 0, end: 4 }]);
        script
    }

    fn session_with(script: Script, options: SessionOptions) -> (SpellCheckSession, Fixture) {
        let script = Arc::new(script);
        let calls = Arc::new(std::sync::Mutex::new(Calls::default()));
        let factory_calls = Arc::clone(&calls);
        let factory = move || -> Result<Box<dyn DictionaryEngine>> {
            Ok(Box::new(MockEngine {
                script: Arc::clone(&script),
                calls: Arc::clone(&factory_calls),
                locale: None,
            }))
        };
        (
            SpellCheckSession::with_options(factory, options).with_logger(logger::NullLogger),
            Fixture { calls },
        )
    }

    fn options(strategy: CheckStrategy) -> SessionOptions {
        SessionOptions {
            strategy,
            user_dictionary: true,
            ..Default::default()
        }
    }

    fn bound(strategy: CheckStrategy) -> (SpellCheckSession, Fixture) {
        let (mut session, fixture) = session_with(english_script(), options(strategy));
        session.init(Some("en-US")).unwrap();
        (session, fixture)
    }

    #[test]
    fn test_init_normalizes_locale() {
        let (session, fixture) = bound(CheckStrategy::DirectCheck);
        assert_eq!(session.language(), Some("en-US"));
        assert!(session.has_engine());
        assert_eq!(fixture.calls.lock().unwrap().bound, vec!["en_us"]);
    }

    #[test]
    fn test_detects_misspellings() {
        for strategy in [CheckStrategy::DirectCheck, CheckStrategy::RangeCheckWithLowercaseRetry] {
            let (mut session, _) = bound(strategy);
            assert!(session.is_misspelled("testzz"));
            assert!(!session.is_misspelled("test"));
        }
    }

    #[test]
    fn test_repeated_lookup_hits_cache() {
        let (mut session, fixture) = bound(CheckStrategy::RangeCheckWithLowercaseRetry);
        let first = session.is_misspelled("testzz");
        let calls = fixture.engine_calls();
        assert!(calls > 0);

        assert_eq!(session.is_misspelled("testzz"), first);
        assert_eq!(fixture.engine_calls(), calls);
        assert_eq!(session.cached_decisions(), 1);
    }

    #[test]
    fn test_contractions_never_reach_engine() {
        let mut script = english_script();
        script
            .misspelled
            .insert("en_us", ["don", "don't", "couldn", "I"].into());
        let (mut session, fixture) = session_with(script, options(CheckStrategy::DirectCheck));
        session.init(Some("en-US")).unwrap();

        for text in ["don", "don't", "Couldn", "I"] {
            assert!(!session.is_misspelled(text), "{} flagged", text);
        }
        assert_eq!(fixture.engine_calls(), 0);
    }

    #[test]
    fn test_contraction_roots_are_correct_without_engine() {
        let (mut session, _) = session_with(english_script(), options(CheckStrategy::DirectCheck));
        for root in CONTRACTION_TABLE.roots().map(str::to_string).collect::<Vec<_>>() {
            assert!(!session.is_misspelled(&root));
        }
    }

    #[test]
    fn test_capitalized_first_word_retries_lowercase() {
        let (mut session, fixture) = bound(CheckStrategy::RangeCheckWithLowercaseRetry);
        assert!(!session.is_misspelled("Hello world"));

        let calls = fixture.calls.lock().unwrap();
        assert_eq!(calls.check_spelling, vec!["Hello world"]);
        assert_eq!(calls.is_misspelled, vec!["hello world"]);
    }

    #[test]
    fn test_range_at_start_still_misspelled_in_lowercase() {
        let mut script = english_script();
        script.misspelled.get_mut("en_us").unwrap().insert("qwxz there");
        let (mut session, _) = session_with(script, options(CheckStrategy::RangeCheckWithLowercaseRetry));
        session.init(Some("en-US")).unwrap();
        assert!(session.is_misspelled("Qwxz there"));
    }

    #[test]
    fn test_interior_range_is_misspelled_without_retry() {
        let (mut session, fixture) = bound(CheckStrategy::RangeCheckWithLowercaseRetry);
        assert!(session.is_misspelled("hello wrld"));
        assert!(fixture.calls.lock().unwrap().is_misspelled.is_empty());
    }

    #[test]
    fn test_direct_check_passes_text_verbatim() {
        let (mut session, fixture) = bound(CheckStrategy::DirectCheck);
        assert!(session.is_misspelled("Hello"));

        let calls = fixture.calls.lock().unwrap();
        assert_eq!(calls.is_misspelled, vec!["Hello"]);
        assert!(calls.check_spelling.is_empty());
    }

    #[test]
    fn test_cache_keyed_by_original_text() {
        let (mut session, fixture) = bound(CheckStrategy::RangeCheckWithLowercaseRetry);
        session.is_misspelled("Hello world");
        let calls = fixture.engine_calls();

        // Different casing is a different key
        session.is_misspelled("hello world");
        assert!(fixture.engine_calls() > calls);
        assert_eq!(session.cached_decisions(), 2);
    }

    #[test]
    fn test_switch_language_invalidates_cache() {
        let (mut session, fixture) = bound(CheckStrategy::DirectCheck);
        assert!(session.is_misspelled("bonjour"));
        assert!(!session.is_misspelled("hello"));

        session.switch_language("fr-FR").unwrap();
        assert_eq!(session.language(), Some("fr-FR"));
        assert_eq!(session.cached_decisions(), 0);
        assert!(!session.is_misspelled("bonjour"));
        assert!(session.is_misspelled("hello"));

        let calls = fixture.calls.lock().unwrap();
        assert_eq!(calls.bound, vec!["en_us", "fr_fr"]);
        assert_eq!(calls.dropped, 1);
    }

    #[test]
    fn test_init_failure_leaves_no_engine() {
        let (mut session, _) = session_with(english_script(), options(CheckStrategy::DirectCheck));
        let err = session.init(Some("xx-YY")).unwrap_err();
        assert!(matches!(err, SpellCheckError::EngineInit { ref locale, .. } if locale == "xx_yy"));
        assert!(!session.has_engine());
        assert_eq!(session.language(), None);
        assert!(!session.is_misspelled("testzz"));
    }

    #[test]
    fn test_factory_failure_is_engine_init() {
        let factory = || -> Result<Box<dyn DictionaryEngine>> {
            Err(SpellCheckError::engine_init("en_us", "native module missing"))
        };
        let mut session = SpellCheckSession::new(factory).with_logger(logger::NullLogger);
        assert!(session.init(Some("en-US")).is_err());
        assert!(session.handle_spell_check("anything"));
    }

    #[test]
    fn test_failed_switch_disables_spellchecking() {
        let (mut session, fixture) = bound(CheckStrategy::DirectCheck);
        assert!(session.is_misspelled("testzz"));

        assert!(session.switch_language("xx-YY").is_err());
        assert!(!session.has_engine());
        assert!(!session.is_misspelled("testzz"));
        assert_eq!(fixture.calls.lock().unwrap().dropped, 2);
    }

    #[tokio::test]
    async fn test_without_engine_everything_is_a_no_op() {
        let (mut session, fixture) = session_with(english_script(), options(CheckStrategy::DirectCheck));
        assert!(!session.is_misspelled("anything"));
        assert!(session.handle_spell_check("anything"));
        assert_eq!(session.get_corrections_for_misspelling("anything").await, None);
        session.add_to_dictionary("anything").await;
        assert!(fixture.calls.lock().unwrap().added.is_empty());
    }

    #[tokio::test]
    async fn test_corrections_are_never_cached() {
        let (session, fixture) = bound(CheckStrategy::DirectCheck);
        let expected = Some(vec!["test".to_string(), "tests".to_string()]);
        assert_eq!(session.get_corrections_for_misspelling("testzz").await, expected);
        assert_eq!(session.get_corrections_for_misspelling("testzz").await, expected);
        assert_eq!(fixture.calls.lock().unwrap().corrections, 2);
        assert_eq!(session.cached_decisions(), 0);
    }

    #[tokio::test]
    async fn test_add_to_dictionary_forgets_cached_decision() {
        let (mut session, fixture) = bound(CheckStrategy::DirectCheck);
        assert!(session.is_misspelled("testzz"));

        session.add_to_dictionary("testzz").await;
        assert_eq!(fixture.calls.lock().unwrap().added, vec!["testzz"]);
        assert_eq!(session.cached_decisions(), 0);
    }

    #[tokio::test]
    async fn test_add_skipped_without_user_dictionary() {
        let options = SessionOptions {
            strategy: CheckStrategy::RangeCheckWithLowercaseRetry,
            user_dictionary: false,
            ..Default::default()
        };
        let (mut session, fixture) = session_with(english_script(), options);
        session.init(Some("en-US")).unwrap();

        session.add_to_dictionary("testzz").await;
        assert!(fixture.calls.lock().unwrap().added.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_add_is_swallowed() {
        let script = Script {
            supports_add: false,
            ..english_script()
        };
        let (mut session, fixture) = session_with(script, options(CheckStrategy::DirectCheck));
        session.init(Some("en-US")).unwrap();
        assert!(session.is_misspelled("testzz"));

        session.add_to_dictionary("testzz").await;
        assert!(fixture.calls.lock().unwrap().added.is_empty());
        assert_eq!(session.cached_decisions(), 1);
    }

    #[test]
    fn test_expired_decision_is_re_evaluated() {
        let options = SessionOptions {
            cache_max_age: Duration::from_millis(1),
            ..options(CheckStrategy::DirectCheck)
        };
        let (mut session, fixture) = session_with(english_script(), options);
        session.init(Some("en-US")).unwrap();

        assert!(session.is_misspelled("testzz"));
        std::thread::sleep(Duration::from_millis(20));
        assert!(session.is_misspelled("testzz"));
        assert_eq!(fixture.calls.lock().unwrap().is_misspelled.len(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest_decision() {
        let options = SessionOptions {
            cache_capacity: 2,
            ..options(CheckStrategy::DirectCheck)
        };
        let (mut session, fixture) = session_with(english_script(), options);
        session.init(Some("en-US")).unwrap();

        session.is_misspelled("alpha");
        session.is_misspelled("beta");
        session.is_misspelled("gamma");
        assert_eq!(session.cached_decisions(), 2);

        session.is_misspelled("alpha");
        let calls = fixture.calls.lock().unwrap();
        assert_eq!(calls.is_misspelled, vec!["alpha", "beta", "gamma", "alpha"]);
    }

    #[test]
    fn test_hint_text_switches_language() {
        let detector = |sample: &str| -> Option<String> {
            sample.contains("bonjour").then(|| "fr-FR".to_string())
        };
        let (session, fixture) = session_with(english_script(), options(CheckStrategy::DirectCheck));
        let mut session = session.with_detector(detector);
        session.init(Some("en-US")).unwrap();

        session.provide_hint_text("just english here").unwrap();
        assert_eq!(session.language(), Some("en-US"));

        session.provide_hint_text("bonjour tout le monde").unwrap();
        assert_eq!(session.language(), Some("fr-FR"));

        // Same language in another spelling is not a switch
        session.switch_language("fr_FR").unwrap();
        session.provide_hint_text("bonjour encore").unwrap();
        assert_eq!(fixture.calls.lock().unwrap().bound, vec!["en_us", "fr_fr", "fr_fr"]);
    }

    #[test]
    fn test_hint_text_without_detector() {
        let (mut session, _) = bound(CheckStrategy::DirectCheck);
        session.provide_hint_text("bonjour tout le monde").unwrap();
        assert_eq!(session.language(), Some("en-US"));
    }

    #[test]
    fn test_injected_logger_receives_events() {
        let lines = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let (session, _) = session_with(english_script(), options(CheckStrategy::DirectCheck));
        let mut session = session.with_logger(move |level: Level, message: &str| {
            sink.lock().unwrap().push((level, message.to_string()));
        });

        session.init(Some("en-US")).unwrap();
        session.is_misspelled("testzz");
        session.is_misspelled("testzz");

        let lines = lines.lock().unwrap();
        assert!(lines.contains(&(Level::Info, "Bound dictionary engine to en_us".to_string())));
        assert!(lines.contains(&(Level::Trace, "Cache hit: testzz".to_string())));
        assert!(lines.contains(&(
            Level::Debug,
            "Caching up to 512 decisions for 60s".to_string()
        )));
    }

    #[derive(Default)]
    struct RecordingSurface {
        registered: Option<(String, bool)>,
        provider: Option<SpellCheckProvider>,
    }

    impl TextInputSurface for RecordingSurface {
        fn set_spell_check_provider(
            &mut self,
            language: &str,
            auto_correct: bool,
            provider: SpellCheckProvider,
        ) {
            self.registered = Some((language.to_string(), auto_correct));
            self.provider = Some(provider);
        }
    }

    #[test]
    fn test_handler_registers_with_surface() {
        let (session, _) = session_with(english_script(), options(CheckStrategy::DirectCheck));
        let handler = SpellCheckHandler::new(session);
        let mut surface = RecordingSurface::default();

        handler.init(Some("en-US"), Some(&mut surface)).unwrap();
        assert_eq!(surface.registered, Some(("en-US".to_string(), true)));

        let provider = surface.provider.take().unwrap();
        assert!(!provider("testzz"));
        assert!(provider("test"));
        assert!(handler.is_misspelled("testzz"));

        drop(handler);
        assert!(provider("testzz"));
    }

    #[test]
    fn test_handler_init_without_surface() {
        let (session, _) = session_with(english_script(), options(CheckStrategy::DirectCheck));
        let handler = SpellCheckHandler::new(session);
        handler.init(Some("en-US"), None).unwrap();
        assert_eq!(handler.language(), Some("en-US".to_string()));
    }

    #[test]
    fn test_handler_failed_init_does_not_register() {
        let (session, _) = session_with(english_script(), options(CheckStrategy::DirectCheck));
        let handler = SpellCheckHandler::new(session);
        let mut surface = RecordingSurface::default();

        assert!(handler.init(Some("xx-YY"), Some(&mut surface)).is_err());
        assert!(surface.registered.is_none());
        assert!(handler.handle_spell_check("testzz"));
    }

    #[tokio::test]
    async fn test_handler_shared_across_threads() {
        let (session, _) = session_with(english_script(), options(CheckStrategy::DirectCheck));
        let handler = SpellCheckHandler::new(session);
        handler.init(Some("en-US"), None).unwrap();

        let worker = handler.clone();
        let misspelled = std::thread::spawn(move || worker.is_misspelled("testzz"))
            .join()
            .unwrap();
        assert!(misspelled);

        assert_eq!(
            handler.get_corrections_for_misspelling("testzz").await,
            Some(vec!["test".to_string(), "tests".to_string()])
        );
        handler.add_to_dictionary("testzz").await;
        handler.switch_language("fr-FR").unwrap();
        assert!(!handler.is_misspelled("bonjour"));
    }
}
