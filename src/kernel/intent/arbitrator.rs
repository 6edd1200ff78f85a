use super::types::*;
use crate::phrases::FlowId;

pub struct IntentArbitrator;

impl IntentArbitrator {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive scan over the ordered keyword table.
    ///
    /// An input containing both "fever" and "doctor" resolves to the fever
    /// flow because the fever rule is checked first.
    pub fn assess_text(&self, text: &str) -> (Intent, Option<RuleId>) {
        let lowered = text.to_lowercase();

        KEYWORD_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
            .map(|rule| (rule.intent, Some(rule.id)))
            .unwrap_or((Intent::Fallback, None))
    }

    /// Terminal advice for an option chosen inside a symptom flow.
    pub fn assess_flow_option(&self, flow: FlowId, option: &str) -> Intent {
        Intent::Advice {
            flow,
            advice: flow.flow().advice_for(option),
        }
    }

    /// Follow-up buttons (view centers, ASHA, more tips, thanks).
    /// `None` means the option should be read as free text.
    pub fn assess_follow_up(&self, option: &str) -> Option<Intent> {
        let lowered = option.to_lowercase();

        FOLLOW_UP_RULES
            .iter()
            .find(|(markers, _)| markers.iter().any(|m| lowered.contains(m)))
            .map(|(_, intent)| *intent)
    }
}

impl Default for IntentArbitrator {
    fn default() -> Self {
        Self::new()
    }
}
