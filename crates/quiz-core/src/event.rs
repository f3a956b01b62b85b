//! Plain-data events a game reports to its presenter.

use serde::{Deserialize, Serialize};

use crate::participant::{AnswerOutcome, AnswerToken};

/// A participant's counters at one point in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Display name.
    pub name: String,
    /// Lifetime score.
    pub score: i32,
    /// Lifetime skips.
    pub skips: u32,
    /// Correct answers in the round the snapshot was taken in.
    pub round_correct: u32,
}

/// One resolved answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Round number, 1-based.
    pub round: u32,
    /// Question number within the round, 1-based.
    pub question: usize,
    /// Who answered.
    pub participant: String,
    /// The token they gave.
    pub answer: AnswerToken,
    /// How it was judged.
    pub outcome: AnswerOutcome,
    /// Lifetime score after this answer.
    pub score: i32,
}

/// Result of one finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number, 1-based.
    pub round: u32,
    /// The sole leader by correct answers, or `None` on a tie.
    pub winner: Option<Standing>,
    /// Every participant in roster order.
    pub standings: Vec<Standing>,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalOutcome {
    /// One winner, or several co-winners after both tie-breaks.
    pub winners: Vec<Standing>,
    /// Every participant, highest score first.
    pub standings: Vec<Standing>,
}

impl FinalOutcome {
    /// Whether more than one participant shares the win.
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Everything a game tells its presenter, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A round is about to collect its questions.
    RoundStarted {
        /// Round number, 1-based.
        round: u32,
        /// Name of the question author.
        author: String,
    },
    /// The factory rejected an authored question; it will be collected again.
    QuestionRejected {
        /// Round number, 1-based.
        round: u32,
        /// Question slot within the round, 1-based.
        slot: usize,
        /// Why it was rejected.
        reason: String,
    },
    /// A participant's answer was judged.
    AnswerResolved(AnswerRecord),
    /// A participant tried to skip a second time in one round.
    SkipRefused {
        /// Round number, 1-based.
        round: u32,
        /// Question number within the round, 1-based.
        question: usize,
        /// Who tried to skip.
        participant: String,
    },
    /// A round finished.
    RoundFinished(RoundSummary),
    /// The last round finished and the winners are known.
    GameFinished(FinalOutcome),
}
