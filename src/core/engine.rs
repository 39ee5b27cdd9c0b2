use crate::config::GameSettings;
use crate::core::board::RoundView;
use crate::core::sampler::select_round;
use crate::core::session::{evaluate, reduce, GameEvent, GameState, Rules};
use crate::domain::model::{Candidate, LeaderboardEntry, RoundOutcome, RoundSelection};
use crate::domain::ports::{AssetSource, ScoreStore};
use crate::utils::error::{QuizError, Result};
use crate::utils::validation::validate_player_name;
use chrono::Utc;
use rand::Rng;
use std::collections::HashSet;

/// What the player learns right after submitting an answer.
#[derive(Debug, Clone)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub target: Candidate,
    pub score: u32,
    pub finished: bool,
}

/// Orchestrates one session at a time: deals rounds through the sampler,
/// funnels every change through the session reducer, and appends exactly
/// one Hall of Fame entry when a session finishes.
pub struct QuizEngine<S: ScoreStore, R: Rng> {
    roster: Vec<Candidate>,
    rules: Rules,
    choices_per_round: usize,
    store: S,
    rng: R,
    state: GameState,
    used_targets: HashSet<u32>,
    current: Option<RoundSelection>,
}

impl<S: ScoreStore, R: Rng> QuizEngine<S, R> {
    pub fn new(roster: Vec<Candidate>, settings: &GameSettings, store: S, rng: R) -> Result<Self> {
        // Exhaustion is a configuration bug, caught here rather than
        // recovered mid-session.
        settings.validate_for_roster(roster.len())?;
        Ok(Self {
            roster,
            rules: Rules {
                total_rounds: settings.total_rounds,
                points_per_correct: settings.points_per_correct,
            },
            choices_per_round: settings.choices_per_round,
            store,
            rng,
            state: GameState::new(),
            used_targets: HashSet::new(),
            current: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn current_round(&self) -> Option<&RoundSelection> {
        self.current.as_ref()
    }

    pub fn used_targets(&self) -> &HashSet<u32> {
        &self.used_targets
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hall of Fame entries, best score first. A failed read degrades to
    /// an empty list; the player never sees a storage error.
    pub fn hall_of_fame(&self) -> Vec<LeaderboardEntry> {
        match self.store.read_all() {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.score.cmp(&a.score));
                entries
            }
            Err(e) => {
                tracing::warn!("failed to read the Hall of Fame, showing none: {}", e);
                Vec::new()
            }
        }
    }

    /// Starts a session for the given player and deals round 1. A name
    /// that fails validation leaves the state machine untouched.
    pub fn start(&mut self, player_name: &str) -> Result<()> {
        let player_name = validate_player_name(player_name)?;
        self.state = reduce(
            &self.state,
            GameEvent::Start {
                player_name: player_name.to_string(),
            },
            &self.rules,
        )?;
        self.used_targets.clear();
        self.deal()
    }

    fn deal(&mut self) -> Result<()> {
        let selection = select_round(
            &self.roster,
            &self.used_targets,
            self.choices_per_round,
            &mut self.rng,
        )?;
        tracing::debug!(
            "round {} target: {}",
            self.state.round,
            selection.target.display_name
        );
        let _ = self.used_targets.insert(selection.target.id);
        self.current = Some(selection);
        Ok(())
    }

    /// Evaluates one answer for the current round. Advances the session;
    /// on the final round the Hall of Fame entry is appended here, and a
    /// storage failure is logged without interrupting the game.
    pub fn submit(&mut self, pick_id: u32) -> Result<AnswerFeedback> {
        let selection = self.current.as_ref().ok_or_else(|| QuizError::TransitionError {
            phase: self.state.phase.to_string(),
            event: "answer".to_string(),
        })?;

        let picked = selection.choices.iter().find(|c| c.id == pick_id).cloned();
        if picked.is_none() {
            return Err(QuizError::ValidationError {
                message: "that pick is not part of the current board".to_string(),
            });
        }

        let is_correct = evaluate(selection, pick_id);
        let target = selection.target.clone();
        let outcome = RoundOutcome {
            round: self.state.round,
            target: target.clone(),
            picked,
            is_correct,
            time_to_answer_ms: None,
        };

        self.state = reduce(&self.state, GameEvent::Answer { outcome }, &self.rules)?;

        if self.state.finished() {
            self.current = None;
            let entry = LeaderboardEntry {
                player_name: self.state.player_name.clone(),
                score: self.state.score,
                total_rounds: self.rules.total_rounds,
                date: Utc::now(),
            };
            if let Err(e) = self.store.append(entry) {
                tracing::error!("failed to record the Hall of Fame entry: {}", e);
            }
        } else {
            self.deal()?;
        }

        Ok(AnswerFeedback {
            is_correct,
            target,
            score: self.state.score,
            finished: self.state.finished(),
        })
    }

    /// Back to the name prompt: clears the used-target set and the dealt
    /// round so the next session samples from the full roster again.
    pub fn play_again(&mut self) -> Result<()> {
        self.state = reduce(&self.state, GameEvent::PlayAgain, &self.rules)?;
        self.used_targets.clear();
        self.current = None;
        Ok(())
    }

    pub fn board(&self, assets: &dyn AssetSource) -> Option<RoundView> {
        self.current
            .as_ref()
            .map(|selection| RoundView::build(selection, assets))
    }
}
