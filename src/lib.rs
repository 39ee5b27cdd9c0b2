pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{AlwaysPresent, JsonFileStore, LocalAssets, MemoryStore};
pub use config::{CliConfig, GameSettings};
pub use core::engine::QuizEngine;
pub use utils::error::{QuizError, Result};
