pub mod board;
pub mod engine;
pub mod sampler;
pub mod session;

pub use crate::domain::model::{Candidate, LeaderboardEntry, RoundOutcome, RoundSelection};
pub use crate::domain::ports::{AssetSource, ScoreStore};
pub use crate::utils::error::Result;
