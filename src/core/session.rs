use crate::domain::model::{RoundOutcome, RoundSelection};
use crate::utils::error::{QuizError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "in progress",
            Phase::Finished => "finished",
        };
        write!(f, "{}", label)
    }
}

/// One session's state. Replaced wholesale by [`reduce`] on every event,
/// never mutated in place across round boundaries.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// 1-based while in progress, 0 otherwise.
    pub round: u32,
    pub score: u32,
    pub answers: Vec<RoundOutcome>,
    pub player_name: String,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            round: 0,
            score: 0,
            answers: Vec::new(),
            player_name: String::new(),
        }
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    pub fn finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum GameEvent {
    Start { player_name: String },
    Answer { outcome: RoundOutcome },
    PlayAgain,
}

impl GameEvent {
    fn label(&self) -> &'static str {
        match self {
            GameEvent::Start { .. } => "start",
            GameEvent::Answer { .. } => "answer",
            GameEvent::PlayAgain => "play again",
        }
    }
}

/// Scoring constants for one game. Derived from the settings layer.
#[derive(Debug, Clone, Copy)]
pub struct Rules {
    pub total_rounds: u32,
    pub points_per_correct: u32,
}

/// The session state machine: NotStarted -> InProgress -> Finished, with
/// PlayAgain looping back to NotStarted. Events that do not apply to the
/// current phase are errors, not silent no-ops.
pub fn reduce(state: &GameState, event: GameEvent, rules: &Rules) -> Result<GameState> {
    match (state.phase, event) {
        (Phase::NotStarted, GameEvent::Start { player_name }) => Ok(GameState {
            phase: Phase::InProgress,
            round: 1,
            score: 0,
            answers: Vec::new(),
            player_name,
        }),
        (Phase::InProgress, GameEvent::Answer { outcome }) => {
            let mut next = state.clone();
            if outcome.is_correct {
                next.score += rules.points_per_correct;
            }
            next.answers.push(outcome);
            if state.round >= rules.total_rounds {
                next.phase = Phase::Finished;
            } else {
                next.round += 1;
            }
            Ok(next)
        }
        (Phase::Finished, GameEvent::PlayAgain) => Ok(GameState::new()),
        (phase, event) => Err(QuizError::TransitionError {
            phase: phase.to_string(),
            event: event.label().to_string(),
        }),
    }
}

/// Pure equality check: did the pick hit the round's target?
pub fn evaluate(selection: &RoundSelection, pick_id: u32) -> bool {
    pick_id == selection.target.id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Candidate;

    const RULES: Rules = Rules {
        total_rounds: 3,
        points_per_correct: 10,
    };

    fn candidate(id: u32) -> Candidate {
        Candidate {
            id,
            display_name: format!("Candidate {}", id),
            years_in_service: String::new(),
            image_ref: String::new(),
            order: id,
        }
    }

    fn outcome(round: u32, is_correct: bool) -> RoundOutcome {
        RoundOutcome {
            round,
            target: candidate(1),
            picked: Some(candidate(if is_correct { 1 } else { 2 })),
            is_correct,
            time_to_answer_ms: None,
        }
    }

    #[test]
    fn test_start_enters_round_one() {
        let state = reduce(
            &GameState::new(),
            GameEvent::Start {
                player_name: "Al".to_string(),
            },
            &RULES,
        )
        .unwrap();
        assert_eq!(state.phase, Phase::InProgress);
        assert_eq!(state.round, 1);
        assert_eq!(state.score, 0);
        assert!(state.started());
        assert!(!state.finished());
    }

    #[test]
    fn test_correct_answer_scores_and_advances() {
        let mut state = reduce(
            &GameState::new(),
            GameEvent::Start {
                player_name: "Al".to_string(),
            },
            &RULES,
        )
        .unwrap();
        state = reduce(
            &state,
            GameEvent::Answer {
                outcome: outcome(1, true),
            },
            &RULES,
        )
        .unwrap();
        assert_eq!(state.round, 2);
        assert_eq!(state.score, 10);
        assert_eq!(state.answers.len(), 1);
    }

    #[test]
    fn test_incorrect_answer_advances_without_scoring() {
        let mut state = reduce(
            &GameState::new(),
            GameEvent::Start {
                player_name: "Al".to_string(),
            },
            &RULES,
        )
        .unwrap();
        state = reduce(
            &state,
            GameEvent::Answer {
                outcome: outcome(1, false),
            },
            &RULES,
        )
        .unwrap();
        assert_eq!(state.round, 2);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_final_answer_finishes_the_session() {
        let mut state = reduce(
            &GameState::new(),
            GameEvent::Start {
                player_name: "Al".to_string(),
            },
            &RULES,
        )
        .unwrap();
        for round in 1..=RULES.total_rounds {
            assert_eq!(state.round, round);
            state = reduce(
                &state,
                GameEvent::Answer {
                    outcome: outcome(round, true),
                },
                &RULES,
            )
            .unwrap();
        }
        assert!(state.finished());
        assert_eq!(state.score, 30);
        assert_eq!(state.answers.len(), 3);
        // Round never left [1, total_rounds] while in progress.
        assert_eq!(state.round, RULES.total_rounds);
    }

    #[test]
    fn test_play_again_resets_to_not_started() {
        let finished = GameState {
            phase: Phase::Finished,
            round: 3,
            score: 20,
            answers: vec![outcome(1, true)],
            player_name: "Al".to_string(),
        };
        let state = reduce(&finished, GameEvent::PlayAgain, &RULES).unwrap();
        assert_eq!(state.phase, Phase::NotStarted);
        assert_eq!(state.round, 0);
        assert_eq!(state.score, 0);
        assert!(state.answers.is_empty());
    }

    #[test]
    fn test_out_of_phase_events_are_rejected() {
        let fresh = GameState::new();
        assert!(reduce(
            &fresh,
            GameEvent::Answer {
                outcome: outcome(1, true)
            },
            &RULES
        )
        .is_err());
        assert!(reduce(&fresh, GameEvent::PlayAgain, &RULES).is_err());

        let running = reduce(
            &fresh,
            GameEvent::Start {
                player_name: "Al".to_string(),
            },
            &RULES,
        )
        .unwrap();
        assert!(reduce(
            &running,
            GameEvent::Start {
                player_name: "Bo".to_string()
            },
            &RULES
        )
        .is_err());
        assert!(reduce(&running, GameEvent::PlayAgain, &RULES).is_err());
    }

    #[test]
    fn test_evaluate_is_a_pure_id_check() {
        let selection = RoundSelection {
            choices: vec![candidate(1), candidate(2)],
            target: candidate(2),
        };
        assert!(evaluate(&selection, 2));
        assert!(!evaluate(&selection, 1));
        // Same inputs, same answer.
        assert_eq!(evaluate(&selection, 2), evaluate(&selection, 2));
    }
}
