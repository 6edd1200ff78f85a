use serde::{Deserialize, Serialize};

use crate::phrases::{FlowId, Topic};

/// Identifies the keyword rule that claimed a free-text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    Fever,
    Cough,
    Headache,
    Stomach,
    Appointment,
    Emergency,
}

/// What the engine decided to do with one user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Welcome,
    StartFlow(FlowId),
    /// Free-text symptom question with no structured flow behind it.
    Ask(Topic),
    Appointment,
    Emergency,
    Fallback,
    Advice { flow: FlowId, advice: Topic },
    SymptomMenu,
    Education,
    ShowFacilities,
    ContactAsha,
    Thanks,
    VoiceNote,
}

/// How the triggering action reached the engine; drives the delay hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    Welcome,
    /// Typed text or a chosen option: read, think, then type.
    Reply,
    /// Quick-action buttons answer straight away.
    Immediate,
}

#[derive(Debug)]
pub struct KeywordRule {
    pub id: RuleId,
    pub keywords: &'static [&'static str],
    pub intent: Intent,
}

/// Ordered: the first rule with a matching keyword wins.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        id: RuleId::Fever,
        keywords: &["बुखार", "fever"],
        intent: Intent::StartFlow(FlowId::Fever),
    },
    KeywordRule {
        id: RuleId::Cough,
        keywords: &["खांसी", "cough"],
        intent: Intent::StartFlow(FlowId::Cough),
    },
    KeywordRule {
        id: RuleId::Headache,
        keywords: &["सिरदर्द", "headache"],
        intent: Intent::Ask(Topic::HeadacheQuestion),
    },
    KeywordRule {
        id: RuleId::Stomach,
        keywords: &["पेट दर्द", "stomach"],
        intent: Intent::Ask(Topic::StomachQuestion),
    },
    KeywordRule {
        id: RuleId::Appointment,
        keywords: &["डॉक्टर", "doctor", "अपॉइंटमेंट", "appointment"],
        intent: Intent::Appointment,
    },
    KeywordRule {
        id: RuleId::Emergency,
        keywords: &["आपातकाल", "emergency"],
        intent: Intent::Emergency,
    },
];

/// Follow-up option markers, checked in order against a chosen option.
pub const FOLLOW_UP_RULES: &[(&[&str], Intent)] = &[
    (
        &["view centers", "केंद्र देखें", "yes, show me", "हाँ, दिखाएं"],
        Intent::ShowFacilities,
    ),
    (&["asha", "आशा"], Intent::ContactAsha),
    (&["tell more", "और बताएं"], Intent::Education),
    (&["thank you", "धन्यवाद"], Intent::Thanks),
];
