use serde::{Deserialize, Serialize};

use super::event::Message;
use super::intent::{Intent, Pacing};
use super::state::{Offer, StateDelta};
use super::telemetry::event::TelemetryEvent;
use super::time::Delay;
use crate::config::DelayProfile;
use crate::error::Result;
use crate::phrases::{Language, PhraseTable, Topic};
use crate::random::RandomSource;

/// Views the adapter opens on request (the widget's modal dialogs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    Emergency,
    Facilities,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    /// Render `message` once `delay` has elapsed after the previous effect.
    Deliver { message: Message, delay: Delay },
    OpenPanel(Panel),
}

/// Ordered output of one engine call. Effects are a strict queue.
#[derive(Debug, Clone, Default)]
pub struct Turn {
    pub effects: Vec<SideEffect>,
    /// Content-free observations for the session's telemetry recorder.
    pub telemetry: Vec<TelemetryEvent>,
}

impl Turn {
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.effects.iter().filter_map(|effect| match effect {
            SideEffect::Deliver { message, .. } => Some(message),
            SideEffect::OpenPanel(_) => None,
        })
    }

    pub fn panels(&self) -> impl Iterator<Item = Panel> + '_ {
        self.effects.iter().filter_map(|effect| match effect {
            SideEffect::OpenPanel(panel) => Some(*panel),
            SideEffect::Deliver { .. } => None,
        })
    }

    pub fn first_message(&self) -> Option<&Message> {
        self.messages().next()
    }

    /// Options of the most recent message that offered any.
    pub fn last_options(&self) -> Option<&[String]> {
        self.messages()
            .filter(|m| m.has_options())
            .last()
            .map(|m| m.options.as_slice())
    }

    pub(crate) fn extend(&mut self, other: Turn) {
        self.effects.extend(other.effects);
        self.telemetry.extend(other.telemetry);
    }
}

/// Pure projection: Intent + language -> (state deltas, side effects).
pub struct Scheduler {
    delays: DelayProfile,
}

impl Scheduler {
    pub fn new(delays: DelayProfile) -> Self {
        Self { delays }
    }

    pub fn schedule(
        &self,
        intent: Intent,
        pacing: Pacing,
        language: Language,
        phrases: &PhraseTable,
        random: &mut dyn RandomSource,
    ) -> Result<(Vec<StateDelta>, Vec<SideEffect>)> {
        let mut out = Emitter::new(self.lead(pacing), self.delays.follow_up(), language, phrases);
        let mut deltas = Vec::new();

        match intent {
            Intent::Welcome => out.say(Topic::Welcome, &[])?,
            Intent::StartFlow(id) => {
                let flow = id.flow();
                deltas.push(StateDelta::FlowStarted(id));
                out.say(flow.prompt, flow.options)?;
            }
            Intent::Ask(topic) => out.say(topic, &[])?,
            Intent::Appointment => {
                deltas.push(StateDelta::OfferPending(Offer::Appointment));
                out.say(
                    Topic::Appointment,
                    &[Topic::AppointmentOptionCenters, Topic::AppointmentOptionAsha],
                )?;
            }
            Intent::Emergency => {
                out.panel(Panel::Emergency);
                out.say(Topic::Emergency, &[])?;
            }
            Intent::Fallback => {
                let topic = Topic::FALLBACKS[pick(random, Topic::FALLBACKS.len())];
                out.say(topic, &[])?;
            }
            Intent::Advice { flow, advice } => {
                deltas.push(StateDelta::FlowCleared);
                out.say(advice, &[])?;
                if flow.flow().offers_facilities {
                    deltas.push(StateDelta::OfferPending(Offer::Facilities));
                    out.say(
                        Topic::FacilityOffer,
                        &[Topic::FacilityOptionYes, Topic::FacilityOptionNo],
                    )?;
                }
            }
            Intent::SymptomMenu => {
                deltas.push(StateDelta::OfferPending(Offer::SymptomMenu));
                out.say(
                    Topic::SymptomMenuPrompt,
                    &[
                        Topic::SymptomMenuFever,
                        Topic::SymptomMenuCough,
                        Topic::SymptomMenuHeadache,
                        Topic::SymptomMenuStomach,
                    ],
                )?;
            }
            Intent::Education => {
                let tips = phrases.tips();
                let tip = &tips[pick(random, tips.len())];
                out.say_text(tip.render(language), Vec::new());
                deltas.push(StateDelta::OfferPending(Offer::MoreTips));
                out.say(
                    Topic::MoreTipsOffer,
                    &[Topic::MoreTipsOptionYes, Topic::MoreTipsOptionThanks],
                )?;
            }
            Intent::ShowFacilities => {
                deltas.push(StateDelta::OfferCleared);
                out.panel(Panel::Facilities);
            }
            Intent::ContactAsha => {
                deltas.push(StateDelta::OfferCleared);
                out.say(Topic::AshaContact, &[])?;
            }
            Intent::Thanks => {
                deltas.push(StateDelta::OfferCleared);
                out.say(Topic::ThanksReply, &[])?;
            }
            Intent::VoiceNote => out.say(Topic::VoiceNoteReply, &[])?,
        }

        Ok((deltas, out.effects))
    }

    fn lead(&self, pacing: Pacing) -> Delay {
        match pacing {
            Pacing::Welcome => self.delays.welcome(),
            Pacing::Reply => self.delays.reply(),
            Pacing::Immediate => self.delays.immediate(),
        }
    }
}

// Guards against sources that ignore the `0..len` contract
fn pick(random: &mut dyn RandomSource, len: usize) -> usize {
    random.pick(len).min(len.saturating_sub(1))
}

/// First message of a turn waits `lead`; later ones are queued follow-ups.
struct Emitter<'a> {
    lead: Delay,
    follow_up: Delay,
    language: Language,
    phrases: &'a PhraseTable,
    delivered: bool,
    effects: Vec<SideEffect>,
}

impl<'a> Emitter<'a> {
    fn new(lead: Delay, follow_up: Delay, language: Language, phrases: &'a PhraseTable) -> Self {
        Self {
            lead,
            follow_up,
            language,
            phrases,
            delivered: false,
            effects: Vec::new(),
        }
    }

    fn say(&mut self, topic: Topic, options: &[Topic]) -> Result<()> {
        let text = self.phrases.lookup(topic, self.language)?.to_string();
        let labels = self.phrases.labels(options, self.language)?;
        self.say_text(text, labels);
        Ok(())
    }

    fn say_text(&mut self, text: String, options: Vec<String>) {
        let delay = if self.delivered { self.follow_up } else { self.lead };
        self.delivered = true;
        self.effects.push(SideEffect::Deliver {
            message: Message::bot(text, options),
            delay,
        });
    }

    fn panel(&mut self, panel: Panel) {
        self.effects.push(SideEffect::OpenPanel(panel));
    }
}
