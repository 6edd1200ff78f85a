pub mod engine;
pub mod event;
pub mod intent;
pub mod scheduler;
pub mod state;
pub mod telemetry;
pub mod time;
pub mod transcript;
