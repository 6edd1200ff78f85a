mod data;
pub mod flows;
pub mod table;
pub mod topic;

pub use flows::{FlowId, SymptomFlow};
pub use table::{HealthTip, PhraseTable};
pub use topic::{Language, LocalizedText, Topic};
