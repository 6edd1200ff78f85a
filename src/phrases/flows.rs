use serde::{Deserialize, Serialize};
use std::fmt;

use super::topic::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowId {
    Fever,
    Cough,
}

impl FlowId {
    pub const ALL: [FlowId; 2] = [FlowId::Fever, FlowId::Cough];

    pub fn flow(&self) -> &'static SymptomFlow {
        match self {
            FlowId::Fever => &FEVER_FLOW,
            FlowId::Cough => &COUGH_FLOW,
        }
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowId::Fever => f.write_str("fever"),
            FlowId::Cough => f.write_str("cough"),
        }
    }
}

/// Selects an advice topic when the chosen option contains any marker.
#[derive(Debug)]
pub struct AdviceRule {
    pub markers: &'static [&'static str],
    pub advice: Topic,
}

/// A guided sub-dialogue for one symptom: prompt, options, then terminal advice.
#[derive(Debug)]
pub struct SymptomFlow {
    pub id: FlowId,
    pub prompt: Topic,
    pub options: &'static [Topic],
    pub rules: &'static [AdviceRule],
    pub default_advice: Topic,
    /// Fever advice is followed by an offer to show nearby facilities.
    pub offers_facilities: bool,
}

impl SymptomFlow {
    /// First rule with a marker contained in the option wins. Case-insensitive.
    pub fn advice_for(&self, option: &str) -> Topic {
        let lowered = option.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.markers.iter().any(|m| lowered.contains(m)))
            .map(|rule| rule.advice)
            .unwrap_or(self.default_advice)
    }
}

pub static FEVER_FLOW: SymptomFlow = SymptomFlow {
    id: FlowId::Fever,
    prompt: Topic::FeverPrompt,
    options: &[
        Topic::FeverOptionOneDay,
        Topic::FeverOptionTwoThreeDays,
        Topic::FeverOptionFourPlusDays,
    ],
    rules: &[
        AdviceRule {
            markers: &["1"],
            advice: Topic::FeverAdviceOneDay,
        },
        AdviceRule {
            markers: &["2-3"],
            advice: Topic::FeverAdviceTwoThreeDays,
        },
    ],
    default_advice: Topic::FeverAdviceFourPlusDays,
    offers_facilities: true,
};

pub static COUGH_FLOW: SymptomFlow = SymptomFlow {
    id: FlowId::Cough,
    prompt: Topic::CoughPrompt,
    options: &[
        Topic::CoughOptionWithFever,
        Topic::CoughOptionBreathing,
        Topic::CoughOptionOnly,
    ],
    rules: &[
        AdviceRule {
            markers: &["बुखार", "fever"],
            advice: Topic::CoughAdviceWithFever,
        },
        AdviceRule {
            markers: &["सांस", "breathing"],
            advice: Topic::CoughAdviceBreathing,
        },
    ],
    default_advice: Topic::CoughAdviceOnly,
    offers_facilities: false,
};
