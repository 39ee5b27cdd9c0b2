use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One selectable president with display metadata. The roster is the
/// source of truth; candidates are never mutated after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub display_name: String,
    pub years_in_service: String,
    pub image_ref: String,
    pub order: u32,
}

/// The choice set for a single round. `target` is always an element of
/// `choices`, and `choices` never contains duplicate ids.
#[derive(Debug, Clone)]
pub struct RoundSelection {
    pub choices: Vec<Candidate>,
    pub target: Candidate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    pub target: Candidate,
    pub picked: Option<Candidate>,
    pub is_correct: bool,
    /// Reserved for timed scoring. The default flow never fills it in.
    pub time_to_answer_ms: Option<u64>,
}

/// One completed-session summary. Appended to the Hall of Fame store,
/// never mutated or removed. Field names stay camelCase so existing
/// `hallOfFame` data files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score: u32,
    pub total_rounds: u32,
    pub date: DateTime<Utc>,
}
