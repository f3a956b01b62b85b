//! Collaborators that feed input into a game and show its outcomes.
//!
//! The engine never reads a terminal itself. Whoever runs a game supplies a
//! host implementing these traits: an interactive console, a question bank
//! file, or a [`ScriptedHost`](crate::ScriptedHost) in tests.

use crate::error::QuizResult;
use crate::event::GameEvent;
use crate::participant::{AnswerToken, Participant};
use crate::question::{Question, QuestionSpec};

/// Supplies normalized answer tokens.
pub trait AnswerInputSource {
    /// Ask `participant` to answer `question`.
    ///
    /// Implementations re-prompt on anything that is not a label or the skip
    /// token. When `skip_offered` is false the participant has already been
    /// refused a skip for this question and must pick a label.
    fn next_answer(
        &mut self,
        participant: &Participant,
        question: &Question,
        skip_offered: bool,
    ) -> QuizResult<AnswerToken>;
}

/// Supplies raw question fields from the author.
pub trait QuestionInputSource {
    /// Collect the fields for question `slot` of `round`, both 1-based.
    ///
    /// Fields that fail validation are reported through
    /// [`GameEvent::QuestionRejected`] and the same slot is asked for again.
    fn next_question(&mut self, round: u32, slot: usize) -> QuizResult<QuestionSpec>;
}

/// Receives game events for display.
pub trait OutcomePresenter {
    /// Show one event.
    fn present(&mut self, event: &GameEvent);
}
