//! A single round: three questions answered by every participant.
//!
//! Answering is question-major: every participant answers question 1, in
//! roster order, before anyone sees question 2.

use tracing::{debug, info, warn};

use crate::error::{QuizError, QuizResult};
use crate::event::{AnswerRecord, GameEvent, RoundSummary};
use crate::host::{AnswerInputSource, OutcomePresenter};
use crate::participant::{AnswerOutcome, AnswerToken, Answerer, Participant};
use crate::question::Question;

/// Number of questions in every round.
pub const QUESTIONS_PER_ROUND: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundState {
    Pending,
    Finished { winner: Option<usize> },
}

/// One round of play over a borrowed roster.
#[derive(Debug)]
pub struct Round<'a> {
    number: u32,
    questions: Vec<Question>,
    participants: &'a mut [Participant],
    state: RoundState,
}

impl<'a> Round<'a> {
    /// Create an empty round over the game's roster.
    pub fn new(number: u32, participants: &'a mut [Participant]) -> Self {
        Self {
            number,
            questions: Vec::with_capacity(QUESTIONS_PER_ROUND),
            participants,
            state: RoundState::Pending,
        }
    }

    /// Round number, 1-based.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Questions added so far, in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The roster, in answering order.
    pub fn participants(&self) -> &[Participant] {
        self.participants
    }

    /// Whether all three questions have been added.
    pub fn is_full(&self) -> bool {
        self.questions.len() >= QUESTIONS_PER_ROUND
    }

    /// Append a question. Fails with [`QuizError::RoundFull`] after three.
    pub fn add_question(&mut self, question: Question) -> QuizResult<()> {
        if self.is_full() {
            return Err(QuizError::RoundFull);
        }
        self.questions.push(question);
        Ok(())
    }

    /// Play the round.
    ///
    /// Resets every participant's round counters, collects one answer per
    /// participant per question from `host`, and records the round winner.
    pub fn start<H>(&mut self, host: &mut H) -> QuizResult<()>
    where
        H: AnswerInputSource + OutcomePresenter + ?Sized,
    {
        if let RoundState::Finished { .. } = self.state {
            return Err(QuizError::RoundAlreadyPlayed);
        }
        if self.questions.len() < QUESTIONS_PER_ROUND {
            return Err(QuizError::IncompleteRound {
                have: self.questions.len(),
            });
        }

        info!(
            round = self.number,
            participants = self.participants.len(),
            "round started"
        );

        for participant in self.participants.iter_mut() {
            participant.reset_round_counters();
        }

        for (index, question) in self.questions.iter().enumerate() {
            for participant in self.participants.iter_mut() {
                answer_turn(self.number, index + 1, question, participant, host)?;
            }
        }

        let winner = round_winner(self.participants);
        info!(
            round = self.number,
            winner = winner.map(|i| self.participants[i].name()),
            "round finished"
        );
        self.state = RoundState::Finished { winner };
        Ok(())
    }

    /// The round winner, `None` on a tie.
    ///
    /// Fails with [`QuizError::RoundNotPlayed`] before [`start`](Self::start)
    /// has completed.
    pub fn winner(&self) -> QuizResult<Option<&Participant>> {
        match self.state {
            RoundState::Pending => Err(QuizError::RoundNotPlayed),
            RoundState::Finished { winner } => Ok(winner.map(|i| &self.participants[i])),
        }
    }

    /// Winner and standings of the finished round.
    pub fn summary(&self) -> QuizResult<RoundSummary> {
        let winner = self.winner()?.map(Participant::standing);
        Ok(RoundSummary {
            round: self.number,
            winner,
            standings: self.participants.iter().map(Participant::standing).collect(),
        })
    }
}

/// Collect and resolve one participant's answer to one question.
///
/// A refused skip asks the same participant again with skip withdrawn, so a
/// turn takes at most two requests.
fn answer_turn<H>(
    round: u32,
    question_number: usize,
    question: &Question,
    participant: &mut Participant,
    host: &mut H,
) -> QuizResult<AnswerOutcome>
where
    H: AnswerInputSource + OutcomePresenter + ?Sized,
{
    let mut skip_offered = true;
    loop {
        let token = host.next_answer(participant, question, skip_offered)?;
        if token == AnswerToken::Skip && !skip_offered {
            return Err(QuizError::SkipNotOffered);
        }

        match participant.resolve_answer(question, token) {
            Ok(outcome) => {
                debug!(
                    round,
                    question = question_number,
                    participant = participant.name(),
                    %token,
                    %outcome,
                    "answer resolved"
                );
                host.present(&GameEvent::AnswerResolved(AnswerRecord {
                    round,
                    question: question_number,
                    participant: participant.name().to_string(),
                    answer: token,
                    outcome,
                    score: participant.lifetime_score(),
                }));
                return Ok(outcome);
            }
            Err(QuizError::SkipAlreadyUsed) => {
                warn!(
                    round,
                    question = question_number,
                    participant = participant.name(),
                    "skip already used this round"
                );
                host.present(&GameEvent::SkipRefused {
                    round,
                    question: question_number,
                    participant: participant.name().to_string(),
                });
                skip_offered = false;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Index of the participant with strictly the most correct answers this
/// round, or `None` if the top count is shared.
pub fn round_winner(participants: &[Participant]) -> Option<usize> {
    let best = participants.iter().map(Participant::round_correct).max()?;
    let mut leaders = participants
        .iter()
        .enumerate()
        .filter(|(_, p)| p.round_correct() == best);
    match (leaders.next(), leaders.next()) {
        (Some((index, _)), None) => Some(index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::QuestionSpec;
    use crate::scripted::{ScriptedHost, tokens};

    fn question(correct: char) -> Question {
        let spec = QuestionSpec::new("Q?", ["w", "x", "y", "z"], correct);
        Question::new(&spec.prompt, &spec.options, spec.correct).unwrap()
    }

    fn roster(names: &[&str]) -> Vec<Participant> {
        names
            .iter()
            .map(|n| Participant::named(*n).unwrap())
            .collect()
    }

    fn full_round(participants: &mut [Participant]) -> Round<'_> {
        let mut round = Round::new(1, participants);
        for _ in 0..QUESTIONS_PER_ROUND {
            round.add_question(question('a')).unwrap();
        }
        round
    }

    #[test]
    fn fourth_question_is_rejected() {
        let mut players = roster(&["A", "B"]);
        let mut round = full_round(&mut players);
        assert!(round.is_full());
        assert!(matches!(
            round.add_question(question('a')),
            Err(QuizError::RoundFull)
        ));
        assert_eq!(round.questions().len(), 3);
    }

    #[test]
    fn cannot_start_incomplete() {
        let mut players = roster(&["A", "B"]);
        let mut round = Round::new(1, &mut players);
        round.add_question(question('a')).unwrap();
        round.add_question(question('b')).unwrap();
        let mut host = ScriptedHost::new();
        assert!(matches!(
            round.start(&mut host),
            Err(QuizError::IncompleteRound { have: 2 })
        ));
        assert!(host.transcript().is_empty());
    }

    #[test]
    fn winner_before_start_is_an_error() {
        let mut players = roster(&["A", "B"]);
        let round = full_round(&mut players);
        assert!(matches!(round.winner(), Err(QuizError::RoundNotPlayed)));
    }

    #[test]
    fn sole_leader_wins() {
        let mut players = roster(&["A", "B", "C"]);
        let mut round = full_round(&mut players);
        // question-major: A B C per question; counts end up [3, 1, 1]
        let mut host = ScriptedHost::new().with_answers(tokens("a a b  a b a  a c b"));
        round.start(&mut host).unwrap();
        assert_eq!(round.winner().unwrap().map(Participant::name), Some("A"));
        let counts: Vec<u32> = round
            .participants()
            .iter()
            .map(Participant::round_correct)
            .collect();
        assert_eq!(counts, vec![3, 1, 1]);
    }

    #[test]
    fn shared_top_count_is_a_tie() {
        let mut players = roster(&["A", "B", "C"]);
        let mut round = full_round(&mut players);
        // counts end up [2, 2, 1]
        let mut host = ScriptedHost::new().with_answers(tokens("a a a  a a b  b b b"));
        round.start(&mut host).unwrap();
        assert!(round.winner().unwrap().is_none());
        assert!(round.summary().unwrap().winner.is_none());
    }

    #[test]
    fn answers_are_question_major() {
        let mut players = roster(&["A", "B"]);
        let mut round = full_round(&mut players);
        let mut host = ScriptedHost::new().with_answers(tokens("a b a b a b"));
        round.start(&mut host).unwrap();

        let order: Vec<(usize, String)> = host
            .transcript()
            .answers()
            .map(|r| (r.question, r.participant.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, "A".to_string()),
                (1, "B".to_string()),
                (2, "A".to_string()),
                (2, "B".to_string()),
                (3, "A".to_string()),
                (3, "B".to_string()),
            ]
        );
    }

    #[test]
    fn refused_skip_reasks_same_participant() {
        let mut players = roster(&["A", "B"]);
        let mut round = full_round(&mut players);
        // A skips q1, tries to skip q2 and is asked again, answers a
        let mut host = ScriptedHost::new().with_answers(tokens("skip b  skip a b  a b"));
        round.start(&mut host).unwrap();

        let refused: Vec<&GameEvent> = host
            .transcript()
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::SkipRefused { .. }))
            .collect();
        assert_eq!(
            refused,
            vec![&GameEvent::SkipRefused {
                round: 1,
                question: 2,
                participant: "A".to_string(),
            }]
        );
        let a = &round.participants()[0];
        assert_eq!(a.lifetime_skips(), 1);
        assert_eq!(a.round_correct(), 2);
        assert_eq!(host.skip_offers(), vec![true, true, true, false, true, true, true]);
    }

    #[test]
    fn skip_after_withdrawal_is_a_contract_violation() {
        let mut players = roster(&["A", "B"]);
        let mut round = full_round(&mut players);
        let mut host = ScriptedHost::new().with_answers(tokens("skip b skip skip"));
        assert!(matches!(
            round.start(&mut host),
            Err(QuizError::SkipNotOffered)
        ));
    }

    #[test]
    fn start_resets_round_counters() {
        let mut players = roster(&["A", "B"]);
        {
            let mut round = full_round(&mut players);
            let mut host = ScriptedHost::new().with_answers(tokens("a skip a a a a"));
            round.start(&mut host).unwrap();
        }
        assert_eq!(players[0].round_correct(), 3);
        assert!(players[1].round_skip_used());

        let mut round = full_round(&mut players);
        let mut host = ScriptedHost::new().with_answers(tokens("b skip b b b b"));
        round.start(&mut host).unwrap();
        // B's skip is available again and A's correct count starts from zero
        assert_eq!(round.participants()[0].round_correct(), 0);
        assert_eq!(round.participants()[1].lifetime_skips(), 2);
        assert_eq!(round.participants()[0].lifetime_score(), 0);
    }

    #[test]
    fn finished_round_cannot_restart() {
        let mut players = roster(&["A", "B"]);
        let mut round = full_round(&mut players);
        let mut host = ScriptedHost::new().with_answers(tokens("a skip a a a b b b b b b b"));
        round.start(&mut host).unwrap();

        assert!(matches!(
            round.start(&mut host),
            Err(QuizError::RoundAlreadyPlayed)
        ));
        assert_eq!(host.remaining_answers(), 6);
        assert_eq!(round.participants()[0].round_correct(), 3);
        assert!(round.participants()[1].round_skip_used());
        assert_eq!(round.winner().unwrap().map(Participant::name), Some("A"));
    }

    #[test]
    fn running_out_of_answers_propagates() {
        let mut players = roster(&["A", "B"]);
        let mut round = full_round(&mut players);
        let mut host = ScriptedHost::new().with_answers(tokens("a b"));
        assert!(matches!(
            round.start(&mut host),
            Err(QuizError::InputExhausted(_))
        ));
        assert!(matches!(round.winner(), Err(QuizError::RoundNotPlayed)));
    }

    #[test]
    fn round_winner_on_empty_roster() {
        assert_eq!(round_winner(&[]), None);
    }
}
