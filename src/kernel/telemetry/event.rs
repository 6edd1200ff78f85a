use serde::{Deserialize, Serialize};

use crate::kernel::intent::RuleId;
use crate::kernel::scheduler::Panel;
use crate::kernel::state::Offer;
use crate::phrases::{FlowId, Language};

// Allowed: enums, ids, counts
// Forbidden: user text, option labels, reply text

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnKind {
    Start,
    Text,
    Option,
    QuickAction,
    Education,
    VoiceNote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    TurnHandled { kind: TurnKind },
    RuleMatched { rule: RuleId },
    Fallback,
    FlowStarted { flow: FlowId },
    FlowCompleted { flow: FlowId },
    /// Free text (or a new menu) arrived while a flow awaited its option.
    FlowAbandoned { flow: FlowId },
    FollowUpResolved { offer: Offer },
    OptionRejected,
    UnknownQuickAction,
    LanguageChanged { to: Language },
    PanelOpened { panel: Panel },
}
