//! Participants and answer resolution.

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};
use crate::event::Standing;
use crate::identity::Identity;
use crate::question::{Label, Question};

/// Words accepted as the skip token, matched case-insensitively.
pub const SKIP_WORDS: [&str; 2] = ["skip", "s"];

/// A normalized answer: one of the option labels, or a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerToken {
    /// Pick the option with this label.
    Choice(Label),
    /// Pass on the question without scoring.
    Skip,
}

impl std::str::FromStr for AnswerToken {
    type Err = QuizError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim().to_ascii_lowercase();
        if SKIP_WORDS.contains(&token.as_str()) {
            return Ok(Self::Skip);
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Label::from_char(c)
                .map(Self::Choice)
                .ok_or_else(|| QuizError::InvalidAnswer(raw.trim().to_string())),
            _ => Err(QuizError::InvalidAnswer(raw.trim().to_string())),
        }
    }
}

impl std::fmt::Display for AnswerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(label) => write!(f, "{label}"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// What happened when a participant answered a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// The chosen label was the correct one.
    Correct,
    /// The chosen label was wrong.
    Incorrect,
    /// The participant used their skip.
    Skipped,
}

impl AnswerOutcome {
    /// Change to the lifetime score caused by this outcome.
    pub fn score_delta(self) -> i32 {
        match self {
            Self::Correct => 1,
            Self::Incorrect => -1,
            Self::Skipped => 0,
        }
    }
}

impl std::fmt::Display for AnswerOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::Incorrect => write!(f, "incorrect"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Anything that can answer a question and keep its own score.
pub trait Answerer {
    /// Resolve one answer against one question.
    ///
    /// A second skip in the same round fails with
    /// [`QuizError::SkipAlreadyUsed`] and changes nothing.
    fn resolve_answer(&mut self, question: &Question, token: AnswerToken)
    -> QuizResult<AnswerOutcome>;
}

/// A player in the game, with round-local and lifetime counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    identity: Identity,
    round_correct: u32,
    round_skip_used: bool,
    lifetime_skips: u32,
    lifetime_score: i32,
}

impl Participant {
    /// Create a participant with all counters at zero.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            round_correct: 0,
            round_skip_used: false,
            lifetime_skips: 0,
            lifetime_score: 0,
        }
    }

    /// Create a participant from a raw name.
    pub fn named(name: impl Into<String>) -> QuizResult<Self> {
        Ok(Self::new(Identity::new(name)?))
    }

    /// The participant's identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The participant's display name.
    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// Correct answers in the current round.
    pub fn round_correct(&self) -> u32 {
        self.round_correct
    }

    /// Whether the skip has been used in the current round.
    pub fn round_skip_used(&self) -> bool {
        self.round_skip_used
    }

    /// Skips used over the whole game.
    pub fn lifetime_skips(&self) -> u32 {
        self.lifetime_skips
    }

    /// Score accumulated over the whole game.
    pub fn lifetime_score(&self) -> i32 {
        self.lifetime_score
    }

    /// Snapshot of the counters for display.
    pub fn standing(&self) -> Standing {
        Standing {
            name: self.name().to_string(),
            score: self.lifetime_score,
            skips: self.lifetime_skips,
            round_correct: self.round_correct,
        }
    }

    /// Clear the round-local counters. Only a round does this, as it starts.
    pub(crate) fn reset_round_counters(&mut self) {
        self.round_correct = 0;
        self.round_skip_used = false;
    }
}

impl Answerer for Participant {
    fn resolve_answer(
        &mut self,
        question: &Question,
        token: AnswerToken,
    ) -> QuizResult<AnswerOutcome> {
        match token {
            AnswerToken::Skip if self.round_skip_used => Err(QuizError::SkipAlreadyUsed),
            AnswerToken::Skip => {
                self.round_skip_used = true;
                self.lifetime_skips += 1;
                Ok(AnswerOutcome::Skipped)
            }
            AnswerToken::Choice(label) if question.is_correct(label) => {
                self.round_correct += 1;
                self.lifetime_score += 1;
                Ok(AnswerOutcome::Correct)
            }
            AnswerToken::Choice(_) => {
                self.lifetime_score -= 1;
                Ok(AnswerOutcome::Incorrect)
            }
        }
    }
}
