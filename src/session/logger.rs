use log::Level;

/// Logging capability handed to a session at construction.
pub trait SessionLogger: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

/// Forwards to the `log` facade under the `spellchk::session` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLogger;

impl SessionLogger for LogLogger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: "spellchk::session", level, "{}", message);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl SessionLogger for NullLogger {
    fn log(&self, _level: Level, _message: &str) {}
}

impl<F> SessionLogger for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn log(&self, level: Level, message: &str) {
        self(level, message)
    }
}
