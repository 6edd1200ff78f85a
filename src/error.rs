use thiserror::Error;

use crate::phrases::{Language, Topic};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogueError {
    /// Content table gap. Only reachable when a table is built from incomplete rows.
    #[error("missing {language} translation for topic {topic:?}")]
    MissingTranslation { topic: Topic, language: Language },

    #[error("option submitted while no symptom flow or follow-up offer is pending")]
    NoActiveFlow,

    #[error("unknown quick action: {0}")]
    UnknownQuickAction(String),

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("transcript export failed: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, DialogueError>;
