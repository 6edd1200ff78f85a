pub mod arbitrator;
pub mod types;

pub use arbitrator::IntentArbitrator;
pub use types::{Intent, Pacing, RuleId};
