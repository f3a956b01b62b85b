//! A host that plays back queued questions and answers.
//!
//! Used to drive whole games without a terminal, mostly from tests.

use std::collections::VecDeque;

use crate::error::{QuizError, QuizResult};
use crate::event::GameEvent;
use crate::host::{AnswerInputSource, OutcomePresenter, QuestionInputSource};
use crate::participant::{AnswerToken, Participant};
use crate::question::{Question, QuestionSpec};
use crate::transcript::Transcript;

/// Plays back scripted input and records every event.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    questions: VecDeque<QuestionSpec>,
    answers: VecDeque<AnswerToken>,
    transcript: Transcript,
    skip_offers: Vec<bool>,
}

impl ScriptedHost {
    /// Create a host with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue question fields, handed out in order.
    pub fn with_questions(mut self, specs: impl IntoIterator<Item = QuestionSpec>) -> Self {
        self.questions.extend(specs);
        self
    }

    /// Queue answer tokens, handed out in order to whoever is asked.
    pub fn with_answers(mut self, tokens: impl IntoIterator<Item = AnswerToken>) -> Self {
        self.answers.extend(tokens);
        self
    }

    /// Everything presented so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Consume the host, keeping its transcript.
    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }

    /// The `skip_offered` flag of every answer request, in order.
    pub fn skip_offers(&self) -> &[bool] {
        &self.skip_offers
    }

    /// Answer tokens not yet handed out.
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl QuestionInputSource for ScriptedHost {
    fn next_question(&mut self, _round: u32, _slot: usize) -> QuizResult<QuestionSpec> {
        self.questions
            .pop_front()
            .ok_or_else(|| QuizError::InputExhausted("questions".to_string()))
    }
}

impl AnswerInputSource for ScriptedHost {
    fn next_answer(
        &mut self,
        _participant: &Participant,
        _question: &Question,
        skip_offered: bool,
    ) -> QuizResult<AnswerToken> {
        self.skip_offers.push(skip_offered);
        self.answers
            .pop_front()
            .ok_or_else(|| QuizError::InputExhausted("answers".to_string()))
    }
}

impl OutcomePresenter for ScriptedHost {
    fn present(&mut self, event: &GameEvent) {
        self.transcript.present(event);
    }
}

/// Parse a whitespace-separated answer script such as `"a b skip d"`.
#[cfg(test)]
pub(crate) fn tokens(script: &str) -> Vec<AnswerToken> {
    script
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect()
}
