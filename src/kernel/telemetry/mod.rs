//! Dialogue telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer. The engine emits events into a
//! `Turn`; the session records them. Nothing in the decision path reads them.
//!
//! # PRIVACY INVARIANT
//! Events must **NEVER** contain user content or reply text. Only rule ids,
//! flow ids, panels, languages and counts are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;

pub use event::{TelemetryEvent, TurnKind};
pub use metrics::TelemetrySnapshot;
pub use recorder::TelemetryRecorder;
