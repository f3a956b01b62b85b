//! The full game: five rounds, lifetime scoring, and the final tie-break.

use tracing::{debug, info};

use crate::error::{QuizError, QuizResult};
use crate::event::{FinalOutcome, GameEvent, RoundSummary, Standing};
use crate::host::{AnswerInputSource, OutcomePresenter, QuestionInputSource};
use crate::participant::Participant;
use crate::question::{Question, QuestionAuthor, QuestionFactory};
use crate::round::{QUESTIONS_PER_ROUND, Round};

/// Number of rounds in every game.
pub const ROUNDS: u32 = 5;

/// Smallest roster a game accepts.
pub const MIN_PARTICIPANTS: usize = 2;

/// A quiz game between a fixed roster, with one question author.
#[derive(Debug)]
pub struct Game {
    author: QuestionAuthor,
    participants: Vec<Participant>,
    current_round: u32,
    round_results: Vec<RoundSummary>,
}

impl Game {
    /// Create a game. The roster is fixed from here on.
    pub fn new(author: QuestionAuthor, participants: Vec<Participant>) -> QuizResult<Self> {
        if participants.len() < MIN_PARTICIPANTS {
            return Err(QuizError::NotEnoughParticipants {
                found: participants.len(),
            });
        }
        Ok(Self {
            author,
            participants,
            current_round: 0,
            round_results: Vec::new(),
        })
    }

    /// The question author.
    pub fn author(&self) -> &QuestionAuthor {
        &self.author
    }

    /// The roster, in answering order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// The round being played, or the last one played. Zero before start.
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Summaries of the rounds finished so far.
    pub fn round_results(&self) -> &[RoundSummary] {
        &self.round_results
    }

    /// Play all rounds and report the final outcome.
    ///
    /// A game is played once. Any later call, including one after a failed
    /// run, fails with [`QuizError::GameAlreadyPlayed`].
    pub fn play<H>(&mut self, host: &mut H) -> QuizResult<FinalOutcome>
    where
        H: QuestionInputSource + AnswerInputSource + OutcomePresenter + ?Sized,
    {
        if self.current_round != 0 {
            return Err(QuizError::GameAlreadyPlayed);
        }

        info!(
            author = self.author.name(),
            participants = self.participants.len(),
            "game started"
        );

        for number in 1..=ROUNDS {
            self.current_round = number;
            self.play_round(number, host)?;
        }

        let outcome = self.final_outcome();
        info!(
            winners = ?outcome.winners.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
            "game finished"
        );
        host.present(&GameEvent::GameFinished(outcome.clone()));
        Ok(outcome)
    }

    fn play_round<H>(&mut self, number: u32, host: &mut H) -> QuizResult<()>
    where
        H: QuestionInputSource + AnswerInputSource + OutcomePresenter + ?Sized,
    {
        host.present(&GameEvent::RoundStarted {
            round: number,
            author: self.author.name().to_string(),
        });

        let mut round = Round::new(number, &mut self.participants);
        for slot in 1..=QUESTIONS_PER_ROUND {
            let question = author_question(&self.author, number, slot, host)?;
            round.add_question(question)?;
        }
        round.start(host)?;

        let summary = round.summary()?;
        host.present(&GameEvent::RoundFinished(summary.clone()));
        self.round_results.push(summary);
        Ok(())
    }

    /// The winner, or co-winners, by the current lifetime counters.
    pub fn final_winners(&self) -> Vec<&Participant> {
        final_winners(&self.participants)
    }

    /// Winners plus the full board, highest score first.
    pub fn final_outcome(&self) -> FinalOutcome {
        let mut standings: Vec<Standing> =
            self.participants.iter().map(Participant::standing).collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        FinalOutcome {
            winners: self
                .final_winners()
                .into_iter()
                .map(Participant::standing)
                .collect(),
            standings,
        }
    }
}

/// Collect fields from the host until the factory accepts them.
fn author_question<F, H>(author: &F, round: u32, slot: usize, host: &mut H) -> QuizResult<Question>
where
    F: QuestionFactory + ?Sized,
    H: QuestionInputSource + OutcomePresenter + ?Sized,
{
    loop {
        let spec = host.next_question(round, slot)?;
        match author.create_from_spec(&spec) {
            Ok(question) => return Ok(question),
            Err(error) => {
                debug!(round, slot, %error, "authored question rejected");
                host.present(&GameEvent::QuestionRejected {
                    round,
                    slot,
                    reason: error.to_string(),
                });
            }
        }
    }
}

/// Pick the game winners.
///
/// Highest lifetime score wins. A shared top score goes to whoever among the
/// leaders skipped least. If that is shared too, all of them are returned in
/// roster order. Empty only for an empty roster.
pub fn final_winners(participants: &[Participant]) -> Vec<&Participant> {
    let Some(max_score) = participants.iter().map(Participant::lifetime_score).max() else {
        return Vec::new();
    };
    let candidates: Vec<&Participant> = participants
        .iter()
        .filter(|p| p.lifetime_score() == max_score)
        .collect();
    if candidates.len() == 1 {
        return candidates;
    }

    let min_skips = candidates
        .iter()
        .map(|p| p.lifetime_skips())
        .min()
        .unwrap_or_default();
    candidates
        .into_iter()
        .filter(|p| p.lifetime_skips() == min_skips)
        .collect()
}
