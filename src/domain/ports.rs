use crate::domain::model::LeaderboardEntry;
use crate::utils::error::Result;

/// Persistent Hall of Fame storage. Append-only from the game's point of
/// view; implementations decide where the entries actually live.
pub trait ScoreStore: Send + Sync {
    fn read_all(&self) -> Result<Vec<LeaderboardEntry>>;
    fn append(&mut self, entry: LeaderboardEntry) -> Result<()>;
}

/// Resolves whether a portrait asset can be shown for a candidate.
pub trait AssetSource: Send + Sync {
    fn exists(&self, image_ref: &str) -> bool;
}
