use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DialogueError, Result};
use crate::kernel::time::Delay;
use crate::phrases::Language;

/// Logical pacing hints handed to the adapter. Values are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayProfile {
    /// Pause before the bot starts "typing" a reply to user input.
    pub reply_ms: u64,
    /// How long the typing indicator shows before a bot message appears.
    pub typing_ms: u64,
    /// Gap between a reply and its queued follow-up offer.
    pub follow_up_ms: u64,
    pub welcome_ms: u64,
}

impl Default for DelayProfile {
    fn default() -> Self {
        Self {
            reply_ms: 1000,
            typing_ms: 1500,
            follow_up_ms: 2000,
            welcome_ms: 500,
        }
    }
}

impl DelayProfile {
    pub fn instant() -> Self {
        Self {
            reply_ms: 0,
            typing_ms: 0,
            follow_up_ms: 0,
            welcome_ms: 0,
        }
    }

    pub fn welcome(&self) -> Delay {
        Delay::from_millis(self.welcome_ms + self.typing_ms)
    }

    pub fn reply(&self) -> Delay {
        Delay::from_millis(self.reply_ms + self.typing_ms)
    }

    /// Button-driven replies skip the "reading input" pause.
    pub fn immediate(&self) -> Delay {
        Delay::from_millis(self.typing_ms)
    }

    pub fn follow_up(&self) -> Delay {
        Delay::from_millis(self.follow_up_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_language: Language,
    pub delays: DelayProfile,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Hi,
            delays: DelayProfile::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| DialogueError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| DialogueError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }
}
