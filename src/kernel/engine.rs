use tracing::{debug, info};

use super::event::{Input, QuickAction};
use super::intent::{Intent, IntentArbitrator, Pacing};
use super::scheduler::{Scheduler, SideEffect, Turn};
use super::state::{DialogueState, StateDelta};
use super::telemetry::{TelemetryEvent, TurnKind};
use crate::config::EngineConfig;
use crate::error::{DialogueError, Result};
use crate::phrases::{Language, PhraseTable};
use crate::random::RandomSource;

/// Stateless dialogue core. Every call takes the session's `DialogueState`
/// explicitly and returns the ordered effects to render; nothing here sleeps
/// or touches I/O, so one engine can serve any number of sessions.
pub struct DialogueEngine {
    phrases: PhraseTable,
    arbitrator: IntentArbitrator,
    scheduler: Scheduler,
    default_language: Language,
}

impl DialogueEngine {
    pub fn new(phrases: PhraseTable, config: &EngineConfig) -> Self {
        Self {
            phrases,
            arbitrator: IntentArbitrator::new(),
            scheduler: Scheduler::new(config.delays),
            default_language: config.default_language,
        }
    }

    /// Engine over the built-in content. Fails only if that content has a gap.
    pub fn builtin(config: &EngineConfig) -> Result<Self> {
        Ok(Self::new(PhraseTable::builtin()?, config))
    }

    pub fn phrases(&self) -> &PhraseTable {
        &self.phrases
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn start(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
        language: Language,
    ) -> Result<Turn> {
        state.reduce(StateDelta::Reset(language));
        info!(%language, "dialogue started");

        let mut turn = Turn::default();
        turn.telemetry.push(TelemetryEvent::TurnHandled {
            kind: TurnKind::Start,
        });
        turn.extend(self.project(state, random, Intent::Welcome, Pacing::Welcome)?);
        Ok(turn)
    }

    /// Affects the next reply only; the flow and any pending offer survive.
    pub fn set_language(&self, state: &mut DialogueState, language: Language) -> Turn {
        let mut turn = Turn::default();
        if state.language() != language {
            info!(%language, "language changed");
            state.reduce(StateDelta::LanguageChanged(language));
            turn.telemetry
                .push(TelemetryEvent::LanguageChanged { to: language });
        }
        turn
    }

    /// Free text runs the ordered keyword table. Text arriving while a flow
    /// awaits its option abandons that flow and is handled as ordinary text.
    pub fn submit_text(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
        input: &str,
    ) -> Result<Turn> {
        let text = input.trim();
        if text.is_empty() {
            debug!("ignoring blank input");
            return Ok(Turn::default());
        }

        let mut turn = Turn::default();
        turn.telemetry.push(TelemetryEvent::TurnHandled {
            kind: TurnKind::Text,
        });
        self.route_text(state, random, text, &mut turn)?;
        Ok(turn)
    }

    /// An option completes the active flow, or resolves a pending follow-up
    /// offer. With neither pending it fails with `NoActiveFlow`.
    pub fn submit_option(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
        option: &str,
    ) -> Result<Turn> {
        let option = option.trim();
        let mut turn = Turn::default();

        if let Some(flow) = state.active_flow() {
            turn.telemetry.push(TelemetryEvent::TurnHandled {
                kind: TurnKind::Option,
            });
            let intent = self.arbitrator.assess_flow_option(flow, option);
            debug!(%flow, ?intent, "flow option resolved");
            turn.extend(self.project(state, random, intent, Pacing::Reply)?);
            turn.telemetry.push(TelemetryEvent::FlowCompleted { flow });
            return Ok(turn);
        }

        let Some(offer) = state.pending_offer() else {
            return Err(DialogueError::NoActiveFlow);
        };

        turn.telemetry.push(TelemetryEvent::TurnHandled {
            kind: TurnKind::Option,
        });
        match self.arbitrator.assess_follow_up(option) {
            Some(intent) => {
                debug!(?offer, ?intent, "follow-up resolved");
                turn.telemetry
                    .push(TelemetryEvent::FollowUpResolved { offer });
                turn.extend(self.project(state, random, intent, Pacing::Reply)?);
            }
            // Symptom-menu labels carry keywords, so they read as free text
            None => self.route_text(state, random, option, &mut turn)?,
        }
        Ok(turn)
    }

    pub fn request_quick_action(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
        action: QuickAction,
    ) -> Result<Turn> {
        let intent = match action {
            QuickAction::Education => return self.request_education(state, random),
            QuickAction::Symptoms => Intent::SymptomMenu,
            QuickAction::Appointment => Intent::Appointment,
            QuickAction::Emergency => Intent::Emergency,
        };

        let mut turn = Turn::default();
        turn.telemetry.push(TelemetryEvent::TurnHandled {
            kind: TurnKind::QuickAction,
        });
        // The emergency notice leaves an in-progress flow alone
        if intent != Intent::Emergency {
            self.abandon_pending(state, &mut turn);
        }
        turn.extend(self.project(state, random, intent, Pacing::Immediate)?);
        Ok(turn)
    }

    /// A random health tip followed by an offer of more.
    pub fn request_education(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
    ) -> Result<Turn> {
        let mut turn = Turn::default();
        turn.telemetry.push(TelemetryEvent::TurnHandled {
            kind: TurnKind::Education,
        });
        self.abandon_pending(state, &mut turn);
        turn.extend(self.project(state, random, Intent::Education, Pacing::Immediate)?);
        Ok(turn)
    }

    /// Simulated voice recording. Nothing is transcribed; the user is asked to type.
    pub fn submit_voice_note(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
    ) -> Result<Turn> {
        let mut turn = Turn::default();
        turn.telemetry.push(TelemetryEvent::TurnHandled {
            kind: TurnKind::VoiceNote,
        });
        turn.extend(self.project(state, random, Intent::VoiceNote, Pacing::Reply)?);
        Ok(turn)
    }

    /// Bilingual generic reply, used when a user action cannot be honoured.
    pub fn fallback_reply(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
    ) -> Result<Turn> {
        let mut turn = Turn::default();
        turn.telemetry.push(TelemetryEvent::Fallback);
        turn.extend(self.project(state, random, Intent::Fallback, Pacing::Reply)?);
        Ok(turn)
    }

    pub fn handle(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
        input: Input,
    ) -> Result<Turn> {
        match input {
            Input::Text(text) => self.submit_text(state, random, &text),
            Input::Option(option) => self.submit_option(state, random, &option),
            Input::QuickAction(action) => self.request_quick_action(state, random, action),
            Input::Education => self.request_education(state, random),
            Input::VoiceNote => self.submit_voice_note(state, random),
        }
    }

    pub fn quick_action_label(&self, action: QuickAction, language: Language) -> Result<&str> {
        self.phrases.lookup(action.label_topic(), language)
    }

    fn route_text(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
        text: &str,
        turn: &mut Turn,
    ) -> Result<()> {
        self.abandon_pending(state, turn);

        let (intent, rule) = self.arbitrator.assess_text(text);
        match rule {
            Some(rule) => {
                debug!(?rule, "keyword rule matched");
                turn.telemetry.push(TelemetryEvent::RuleMatched { rule });
            }
            None => {
                debug!("no keyword rule matched, using fallback");
                turn.telemetry.push(TelemetryEvent::Fallback);
            }
        }

        turn.extend(self.project(state, random, intent, Pacing::Reply)?);
        Ok(())
    }

    fn abandon_pending(&self, state: &mut DialogueState, turn: &mut Turn) {
        if let Some(flow) = state.active_flow() {
            debug!(%flow, "flow abandoned");
            turn.telemetry.push(TelemetryEvent::FlowAbandoned { flow });
            state.reduce(StateDelta::FlowCleared);
        }
        if state.pending_offer().is_some() {
            state.reduce(StateDelta::OfferCleared);
        }
    }

    /// Schedules an intent and applies its deltas. Lookups happen before any
    /// delta is applied, so a content gap leaves the state untouched.
    fn project(
        &self,
        state: &mut DialogueState,
        random: &mut dyn RandomSource,
        intent: Intent,
        pacing: Pacing,
    ) -> Result<Turn> {
        let (deltas, effects) =
            self.scheduler
                .schedule(intent, pacing, state.language(), &self.phrases, random)?;

        let mut turn = Turn::default();
        for delta in deltas {
            if let StateDelta::FlowStarted(flow) = delta {
                turn.telemetry.push(TelemetryEvent::FlowStarted { flow });
            }
            state.reduce(delta);
        }
        for effect in &effects {
            if let SideEffect::OpenPanel(panel) = effect {
                turn.telemetry
                    .push(TelemetryEvent::PanelOpened { panel: *panel });
            }
        }
        turn.effects = effects;
        Ok(turn)
    }
}
