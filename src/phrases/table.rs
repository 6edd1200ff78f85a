use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::data::{HEALTH_TIPS, PHRASES};
use super::flows::FlowId;
use super::topic::{Language, LocalizedText, Topic};
use crate::error::{DialogueError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthTip {
    pub title: LocalizedText,
    pub content: LocalizedText,
}

impl HealthTip {
    pub fn render(&self, language: Language) -> String {
        format!("{}\n{}", self.title.get(language), self.content.get(language))
    }
}

/// Read-only bilingual content store. Construction fails unless every topic
/// has text in every language, so lookups on a built table never miss.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    entries: HashMap<Topic, LocalizedText>,
    tips: Vec<HealthTip>,
}

impl PhraseTable {
    pub fn builtin() -> Result<Self> {
        let tips = HEALTH_TIPS
            .iter()
            .map(|((title_hi, title_en), (content_hi, content_en))| HealthTip {
                title: LocalizedText::new(*title_hi, *title_en),
                content: LocalizedText::new(*content_hi, *content_en),
            })
            .collect();
        Self::from_rows(PHRASES, tips)
    }

    pub fn from_rows(rows: &[(Topic, &str, &str)], tips: Vec<HealthTip>) -> Result<Self> {
        let entries = rows
            .iter()
            .map(|(topic, hi, en)| (*topic, LocalizedText::new(*hi, *en)))
            .collect();
        let table = Self { entries, tips };
        table.validate()?;
        Ok(table)
    }

    /// Full coverage check: every topic in both languages, flow options
    /// resolvable, at least one complete health tip.
    pub fn validate(&self) -> Result<()> {
        for topic in Topic::ALL {
            let text = self
                .entries
                .get(topic)
                .ok_or(DialogueError::MissingTranslation {
                    topic: *topic,
                    language: Language::Hi,
                })?;
            if let Some(language) = text.gaps().next() {
                return Err(DialogueError::MissingTranslation {
                    topic: *topic,
                    language,
                });
            }
        }

        for id in FlowId::ALL {
            if id.flow().options.is_empty() {
                return Err(DialogueError::Config(format!("{id} flow has no options")));
            }
        }

        if self.tips.is_empty() {
            return Err(DialogueError::Config("no health tips defined".to_string()));
        }
        for (index, tip) in self.tips.iter().enumerate() {
            if let Some(language) = tip.title.gaps().chain(tip.content.gaps()).next() {
                return Err(DialogueError::Config(format!(
                    "health tip {index} has no {language} text"
                )));
            }
        }

        Ok(())
    }

    pub fn localized(&self, topic: Topic) -> Result<&LocalizedText> {
        self.entries
            .get(&topic)
            .ok_or(DialogueError::MissingTranslation {
                topic,
                language: Language::Hi,
            })
    }

    pub fn lookup(&self, topic: Topic, language: Language) -> Result<&str> {
        let text = self.localized(topic)?.get(language);
        if text.trim().is_empty() {
            return Err(DialogueError::MissingTranslation { topic, language });
        }
        Ok(text)
    }

    /// Resolves a list of option topics into display labels.
    pub fn labels(&self, topics: &[Topic], language: Language) -> Result<Vec<String>> {
        topics
            .iter()
            .map(|topic| self.lookup(*topic, language).map(str::to_string))
            .collect()
    }

    pub fn tips(&self) -> &[HealthTip] {
        &self.tips
    }
}
