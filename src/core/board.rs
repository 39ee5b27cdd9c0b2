use crate::domain::model::{Candidate, RoundSelection};
use crate::domain::ports::AssetSource;

pub const FALLBACK_PORTRAIT: &str = "portraits/fallback.jpg";

/// One selectable cell on the board. A tile whose portrait asset cannot
/// be resolved shows the fallback art and is not selectable.
#[derive(Debug, Clone)]
pub struct Tile {
    pub candidate: Candidate,
    pub portrait: String,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct RoundView {
    pub tiles: Vec<Tile>,
}

impl RoundView {
    pub fn build(selection: &RoundSelection, assets: &dyn AssetSource) -> Self {
        let tiles = selection
            .choices
            .iter()
            .map(|candidate| {
                let available = assets.exists(&candidate.image_ref);
                if !available {
                    tracing::warn!(
                        "portrait {} unavailable, disabling tile for {}",
                        candidate.image_ref,
                        candidate.display_name
                    );
                }
                Tile {
                    candidate: candidate.clone(),
                    portrait: if available {
                        candidate.image_ref.clone()
                    } else {
                        FALLBACK_PORTRAIT.to_string()
                    },
                    enabled: available,
                }
            })
            .collect();
        Self { tiles }
    }

    /// Resolves a 0-based tile index to its candidate, refusing disabled
    /// tiles so a broken portrait can never be submitted as an answer.
    pub fn pick(&self, index: usize) -> Option<&Candidate> {
        self.tiles
            .get(index)
            .filter(|tile| tile.enabled)
            .map(|tile| &tile.candidate)
    }
}
