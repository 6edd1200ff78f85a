use serde::{Deserialize, Serialize};

use crate::phrases::{FlowId, Language};

/// Follow-up menus offered outside a symptom flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Offer {
    SymptomMenu,
    Appointment,
    Facilities,
    MoreTips,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    AwaitingFeverOption,
    AwaitingCoughOption,
}

/// Strict state delta. This is the ONLY way dialogue state mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateDelta {
    Reset(Language),
    LanguageChanged(Language),
    FlowStarted(FlowId),
    FlowCleared,
    OfferPending(Offer),
    OfferCleared,
}

/// Per-session dialogue data. Owned by exactly one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueState {
    language: Language,
    active_flow: Option<FlowId>,
    awaiting_option: bool,
    pending_offer: Option<Offer>,
    // Monotonic, bumped on every applied delta
    version: u64,
}

impl Default for DialogueState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl DialogueState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            active_flow: None,
            awaiting_option: false,
            pending_offer: None,
            version: 0,
        }
    }

    pub fn reduce(&mut self, delta: StateDelta) {
        self.version += 1;

        match delta {
            StateDelta::Reset(language) => {
                self.language = language;
                self.active_flow = None;
                self.pending_offer = None;
            }
            StateDelta::LanguageChanged(language) => {
                self.language = language;
            }
            StateDelta::FlowStarted(flow) => {
                // A flow supersedes any menu still on screen
                self.active_flow = Some(flow);
                self.pending_offer = None;
            }
            StateDelta::FlowCleared => {
                self.active_flow = None;
            }
            StateDelta::OfferPending(offer) => {
                // One pending choice at a time
                self.active_flow = None;
                self.pending_offer = Some(offer);
            }
            StateDelta::OfferCleared => {
                self.pending_offer = None;
            }
        }

        self.awaiting_option = self.active_flow.is_some() || self.pending_offer.is_some();
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active_flow(&self) -> Option<FlowId> {
        self.active_flow
    }

    pub fn awaiting_option(&self) -> bool {
        self.awaiting_option
    }

    pub fn pending_offer(&self) -> Option<Offer> {
        self.pending_offer
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn phase(&self) -> Phase {
        match self.active_flow {
            None => Phase::Idle,
            Some(FlowId::Fever) => Phase::AwaitingFeverOption,
            Some(FlowId::Cough) => Phase::AwaitingCoughOption,
        }
    }
}
