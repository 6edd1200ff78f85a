use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DialogueError;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hi,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Hi, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Hi => "hi",
            Language::En => "en",
        }
    }

    /// The language button flips between the two supported codes.
    pub fn toggle(&self) -> Self {
        match self {
            Language::Hi => Language::En,
            Language::En => Language::Hi,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DialogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hi" => Ok(Language::Hi),
            "en" => Ok(Language::En),
            other => Err(DialogueError::UnknownLanguage(other.to_string())),
        }
    }
}

/// One display string per supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    hi: String,
    en: String,
}

impl LocalizedText {
    pub fn new(hi: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            hi: hi.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Hi => &self.hi,
            Language::En => &self.en,
        }
    }

    /// Languages whose text is blank.
    pub fn gaps(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .into_iter()
            .filter(move |lang| self.get(*lang).trim().is_empty())
    }
}

/// Every key the phrase table must define in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Welcome,

    FeverPrompt,
    FeverOptionOneDay,
    FeverOptionTwoThreeDays,
    FeverOptionFourPlusDays,
    FeverAdviceOneDay,
    FeverAdviceTwoThreeDays,
    FeverAdviceFourPlusDays,

    CoughPrompt,
    CoughOptionWithFever,
    CoughOptionBreathing,
    CoughOptionOnly,
    CoughAdviceWithFever,
    CoughAdviceBreathing,
    CoughAdviceOnly,

    HeadacheQuestion,
    StomachQuestion,

    Appointment,
    AppointmentOptionCenters,
    AppointmentOptionAsha,
    Emergency,

    FacilityOffer,
    FacilityOptionYes,
    FacilityOptionNo,
    MoreTipsOffer,
    MoreTipsOptionYes,
    MoreTipsOptionThanks,

    AshaContact,
    ThanksReply,
    VoiceNoteReply,

    FallbackUnderstand,
    FallbackChooseOptions,
    FallbackSeeDoctor,

    SymptomMenuPrompt,
    SymptomMenuFever,
    SymptomMenuCough,
    SymptomMenuHeadache,
    SymptomMenuStomach,

    QuickSymptoms,
    QuickAppointment,
    QuickEmergency,
    QuickEducation,
}

impl Topic {
    pub const ALL: &'static [Topic] = &[
        Topic::Welcome,
        Topic::FeverPrompt,
        Topic::FeverOptionOneDay,
        Topic::FeverOptionTwoThreeDays,
        Topic::FeverOptionFourPlusDays,
        Topic::FeverAdviceOneDay,
        Topic::FeverAdviceTwoThreeDays,
        Topic::FeverAdviceFourPlusDays,
        Topic::CoughPrompt,
        Topic::CoughOptionWithFever,
        Topic::CoughOptionBreathing,
        Topic::CoughOptionOnly,
        Topic::CoughAdviceWithFever,
        Topic::CoughAdviceBreathing,
        Topic::CoughAdviceOnly,
        Topic::HeadacheQuestion,
        Topic::StomachQuestion,
        Topic::Appointment,
        Topic::AppointmentOptionCenters,
        Topic::AppointmentOptionAsha,
        Topic::Emergency,
        Topic::FacilityOffer,
        Topic::FacilityOptionYes,
        Topic::FacilityOptionNo,
        Topic::MoreTipsOffer,
        Topic::MoreTipsOptionYes,
        Topic::MoreTipsOptionThanks,
        Topic::AshaContact,
        Topic::ThanksReply,
        Topic::VoiceNoteReply,
        Topic::FallbackUnderstand,
        Topic::FallbackChooseOptions,
        Topic::FallbackSeeDoctor,
        Topic::SymptomMenuPrompt,
        Topic::SymptomMenuFever,
        Topic::SymptomMenuCough,
        Topic::SymptomMenuHeadache,
        Topic::SymptomMenuStomach,
        Topic::QuickSymptoms,
        Topic::QuickAppointment,
        Topic::QuickEmergency,
        Topic::QuickEducation,
    ];

    /// Generic replies drawn uniformly when no keyword rule matches.
    pub const FALLBACKS: [Topic; 3] = [
        Topic::FallbackUnderstand,
        Topic::FallbackChooseOptions,
        Topic::FallbackSeeDoctor,
    ];
}
