use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DialogueError;
use crate::phrases::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One turn record. Never mutated after it is appended to a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn bot(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Bot,
            text: text.into(),
            options,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::User,
            text: text.into(),
            options: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Shortcut buttons that bypass free-text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    Symptoms,
    Appointment,
    Emergency,
    Education,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::Symptoms,
        QuickAction::Appointment,
        QuickAction::Emergency,
        QuickAction::Education,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QuickAction::Symptoms => "symptoms",
            QuickAction::Appointment => "appointment",
            QuickAction::Emergency => "emergency",
            QuickAction::Education => "education",
        }
    }

    pub fn label_topic(&self) -> Topic {
        match self {
            QuickAction::Symptoms => Topic::QuickSymptoms,
            QuickAction::Appointment => Topic::QuickAppointment,
            QuickAction::Emergency => Topic::QuickEmergency,
            QuickAction::Education => Topic::QuickEducation,
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for QuickAction {
    type Err = DialogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        QuickAction::ALL
            .into_iter()
            .find(|action| action.id() == wanted)
            .ok_or_else(|| DialogueError::UnknownQuickAction(s.to_string()))
    }
}

/// Inbound user actions, as forwarded by the presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Option(String),
    QuickAction(QuickAction),
    Education,
    /// Simulated voice recording; no transcription happens.
    VoiceNote,
}
