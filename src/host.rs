//! Seams for the collaborators around a session: the text-input surface that
//! asks for decisions and an optional language detector.

/// Decision callback handed to the host. Returns `true` when the text is
/// spelled correctly.
pub type SpellCheckProvider = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A text-input surface that accepts a spellcheck provider.
pub trait TextInputSurface {
    fn set_spell_check_provider(
        &mut self,
        language: &str,
        auto_correct: bool,
        provider: SpellCheckProvider,
    );
}

/// Guesses the locale of a sample of text.
pub trait LanguageDetector: Send {
    /// Locale in `en-US` form, or `None` when the sample is inconclusive.
    fn detect(&self, sample: &str) -> Option<String>;
}

impl<F> LanguageDetector for F
where
    F: Fn(&str) -> Option<String> + Send,
{
    fn detect(&self, sample: &str) -> Option<String> {
        self(sample)
    }
}
