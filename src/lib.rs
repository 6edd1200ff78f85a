pub mod config;
pub mod console;
pub mod error;
pub mod kernel;
pub mod phrases;
pub mod random;
pub mod session;

// Re-export specific items for convenient access
pub use config::EngineConfig;
pub use error::DialogueError;
pub use kernel::engine::DialogueEngine;
pub use kernel::scheduler::{Panel, SideEffect, Turn};
pub use session::Session;
