use std::collections::{HashMap, VecDeque};

use super::event::{TelemetryEvent, TurnKind};
use crate::kernel::intent::RuleId;
use crate::kernel::scheduler::Panel;

#[derive(Debug, Clone, Default)]
pub struct TelemetrySnapshot {
    pub turn_stats: TurnStats,
    pub flow_stats: FlowStats,
    pub rule_hits: HashMap<RuleId, u64>,
    pub fallbacks: u64,
    pub follow_ups: u64,
    pub option_rejections: u64,
    pub unknown_quick_actions: u64,
    pub language_changes: u64,
    pub panels_opened: HashMap<Panel, u64>,
}

#[derive(Debug, Clone, Default)]
pub struct TurnStats {
    pub total: u64,
    pub by_kind: HashMap<TurnKind, u64>,
}

#[derive(Debug, Clone, Default)]
pub struct FlowStats {
    pub started: u64,
    pub completed: u64,
    pub abandoned: u64,
    /// completed / started, 0.0 before any flow started.
    pub completion_rate: f64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::TurnHandled { kind } => {
                snap.turn_stats.total += 1;
                *snap.turn_stats.by_kind.entry(*kind).or_insert(0) += 1;
            }
            TelemetryEvent::RuleMatched { rule } => {
                *snap.rule_hits.entry(*rule).or_insert(0) += 1;
            }
            TelemetryEvent::Fallback => snap.fallbacks += 1,
            TelemetryEvent::FlowStarted { .. } => snap.flow_stats.started += 1,
            TelemetryEvent::FlowCompleted { .. } => snap.flow_stats.completed += 1,
            TelemetryEvent::FlowAbandoned { .. } => snap.flow_stats.abandoned += 1,
            TelemetryEvent::FollowUpResolved { .. } => snap.follow_ups += 1,
            TelemetryEvent::OptionRejected => snap.option_rejections += 1,
            TelemetryEvent::UnknownQuickAction => snap.unknown_quick_actions += 1,
            TelemetryEvent::LanguageChanged { .. } => snap.language_changes += 1,
            TelemetryEvent::PanelOpened { panel } => {
                *snap.panels_opened.entry(*panel).or_insert(0) += 1;
            }
        }
    }

    if snap.flow_stats.started > 0 {
        snap.flow_stats.completion_rate =
            snap.flow_stats.completed as f64 / snap.flow_stats.started as f64;
    }

    snap
}
