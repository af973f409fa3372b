use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the session turns engine primitives into a single decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStrategy {
    /// Trust the engine's single-word check.
    #[serde(rename = "direct")]
    DirectCheck,
    /// Use the range check, and retry a range at offset 0 in lowercase to
    /// filter out capitalized sentence-initial false positives.
    #[serde(rename = "range-retry")]
    RangeCheckWithLowercaseRetry,
}

impl CheckStrategy {
    pub fn for_current_platform() -> Self {
        if cfg!(target_os = "macos") {
            CheckStrategy::DirectCheck
        } else {
            CheckStrategy::RangeCheckWithLowercaseRetry
        }
    }

    /// Only the direct-check platform keeps a persistent user dictionary.
    pub fn supports_user_dictionary(self) -> bool {
        matches!(self, CheckStrategy::DirectCheck)
    }
}

impl Default for CheckStrategy {
    fn default() -> Self {
        Self::for_current_platform()
    }
}

impl FromStr for CheckStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(CheckStrategy::DirectCheck),
            "range-retry" | "range" => Ok(CheckStrategy::RangeCheckWithLowercaseRetry),
            _ => Err(format!("Unknown check strategy: {}", s)),
        }
    }
}

impl fmt::Display for CheckStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStrategy::DirectCheck => write!(f, "direct"),
            CheckStrategy::RangeCheckWithLowercaseRetry => write!(f, "range-retry"),
        }
    }
}
