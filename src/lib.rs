pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod session;

pub use config::Config;
pub use engine::{DictionaryEngine, EngineFactory, MisspelledRange};
pub use error::{Result, SpellCheckError};
pub use host::{LanguageDetector, SpellCheckProvider, TextInputSurface};
pub use session::strategy::CheckStrategy;
pub use session::{SessionOptions, SpellCheckHandler, SpellCheckSession};
