use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{DialogueError, Result};
use crate::kernel::engine::DialogueEngine;
use crate::kernel::event::{Message, QuickAction};
use crate::kernel::scheduler::Turn;
use crate::kernel::state::DialogueState;
use crate::kernel::telemetry::{TelemetryEvent, TelemetryRecorder, TelemetrySnapshot};
use crate::kernel::transcript::Transcript;
use crate::phrases::Language;
use crate::random::RandomSource;

/// Marker recorded in the transcript for a simulated voice recording.
pub const VOICE_NOTE_MARKER: &str = "🎤 voice message";

/// One conversation. Owns its dialogue state, random source, transcript and
/// telemetry; shares only the immutable engine. Every turn takes `&mut self`,
/// so a session can never have two calls in flight.
pub struct Session {
    engine: Arc<DialogueEngine>,
    state: DialogueState,
    random: Box<dyn RandomSource>,
    transcript: Transcript,
    telemetry: TelemetryRecorder,
}

impl Session {
    pub fn new(engine: Arc<DialogueEngine>, random: Box<dyn RandomSource>) -> Self {
        let state = DialogueState::new(engine.default_language());
        Self {
            engine,
            state,
            random,
            transcript: Transcript::new(),
            telemetry: TelemetryRecorder::new(),
        }
    }

    pub fn start(&mut self, language: Language) -> Result<Turn> {
        let turn = self
            .engine
            .start(&mut self.state, self.random.as_mut(), language)?;
        Ok(self.commit(turn))
    }

    pub fn set_language(&mut self, language: Language) {
        let turn = self.engine.set_language(&mut self.state, language);
        self.commit(turn);
    }

    pub fn toggle_language(&mut self) -> Language {
        let next = self.state.language().toggle();
        self.set_language(next);
        next
    }

    pub fn send_text(&mut self, input: &str) -> Result<Turn> {
        if input.trim().is_empty() {
            return Ok(Turn::default());
        }
        self.transcript.append(Message::user(input.trim()));
        let turn = self
            .engine
            .submit_text(&mut self.state, self.random.as_mut(), input)?;
        Ok(self.commit(turn))
    }

    /// Options chosen with nothing pending degrade to a fallback reply
    /// instead of surfacing `NoActiveFlow`.
    pub fn select_option(&mut self, option: &str) -> Result<Turn> {
        self.transcript.append(Message::user(option.trim()));
        let turn = match self
            .engine
            .submit_option(&mut self.state, self.random.as_mut(), option)
        {
            Ok(turn) => turn,
            Err(DialogueError::NoActiveFlow) => {
                warn!("option selected with nothing pending; replying with fallback");
                self.telemetry.record(TelemetryEvent::OptionRejected);
                self.engine
                    .fallback_reply(&mut self.state, self.random.as_mut())?
            }
            Err(e) => return Err(e),
        };
        Ok(self.commit(turn))
    }

    /// Unknown action ids are logged and ignored.
    pub fn quick_action(&mut self, action: &str) -> Result<Turn> {
        match action.parse::<QuickAction>() {
            Ok(action) => self.run_quick_action(action),
            Err(e) => {
                // Ids are user input, so debug only
                debug!(error = %e, "unknown quick action id");
                warn!("ignoring unknown quick action");
                self.telemetry.record(TelemetryEvent::UnknownQuickAction);
                Ok(Turn::default())
            }
        }
    }

    pub fn run_quick_action(&mut self, action: QuickAction) -> Result<Turn> {
        let turn =
            self.engine
                .request_quick_action(&mut self.state, self.random.as_mut(), action)?;
        Ok(self.commit(turn))
    }

    pub fn request_education(&mut self) -> Result<Turn> {
        let turn = self
            .engine
            .request_education(&mut self.state, self.random.as_mut())?;
        Ok(self.commit(turn))
    }

    pub fn send_voice_note(&mut self) -> Result<Turn> {
        self.transcript.append(Message::user(VOICE_NOTE_MARKER));
        let turn = self
            .engine
            .submit_voice_note(&mut self.state, self.random.as_mut())?;
        Ok(self.commit(turn))
    }

    pub fn quick_action_label(&self, action: QuickAction) -> Result<&str> {
        self.engine.quick_action_label(action, self.state.language())
    }

    pub fn state(&self) -> &DialogueState {
        &self.state
    }

    pub fn language(&self) -> Language {
        self.state.language()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_json(&self) -> Result<String> {
        self.transcript
            .to_json()
            .map_err(|e| DialogueError::Export(e.to_string()))
    }

    pub fn telemetry(&self) -> TelemetrySnapshot {
        self.telemetry.snapshot()
    }

    /// Records telemetry and appends bot messages in emission order.
    fn commit(&mut self, mut turn: Turn) -> Turn {
        self.telemetry.record_all(turn.telemetry.drain(..));
        for message in turn.messages() {
            self.transcript.append(message.clone());
        }
        turn
    }
}
