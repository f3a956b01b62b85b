//! Chronological record of a game's events, with text and JSON export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuizResult;
use crate::event::{AnswerRecord, GameEvent};
use crate::host::OutcomePresenter;

/// Every event of one game, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    started_at: DateTime<Utc>,
    events: Vec<GameEvent>,
}

impl Transcript {
    /// Create an empty transcript stamped with the current time.
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            events: Vec::new(),
        }
    }

    /// When recording started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append an event.
    pub fn record(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// All events.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Only the resolved answers.
    pub fn answers(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::AnswerResolved(record) => Some(record),
            _ => None,
        })
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Export as pretty-printed JSON.
    pub fn to_json(&self) -> QuizResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export as plain text.
    pub fn export_text(&self) -> String {
        let mut out = format!(
            "Quiz Transcript ({})\n====================\n\n",
            self.started_at.format("%Y-%m-%d %H:%M UTC")
        );
        for event in &self.events {
            match event {
                GameEvent::RoundStarted { round, author } => {
                    out.push_str(&format!("Round {round} (questions by {author})\n"));
                }
                GameEvent::QuestionRejected {
                    round,
                    slot,
                    reason,
                } => {
                    out.push_str(&format!(
                        "  question {slot} of round {round} rejected: {reason}\n"
                    ));
                }
                GameEvent::AnswerResolved(r) => {
                    out.push_str(&format!(
                        "  Q{} {}: {} -> {} (score {})\n",
                        r.question, r.participant, r.answer, r.outcome, r.score
                    ));
                }
                GameEvent::SkipRefused {
                    question,
                    participant,
                    ..
                } => {
                    out.push_str(&format!(
                        "  Q{question} {participant}: skip refused, already used\n"
                    ));
                }
                GameEvent::RoundFinished(summary) => match &summary.winner {
                    Some(w) => out.push_str(&format!(
                        "  winner: {} ({} correct)\n\n",
                        w.name, w.round_correct
                    )),
                    None => out.push_str("  result: tie\n\n"),
                },
                GameEvent::GameFinished(outcome) => {
                    out.push_str("Final standings\n");
                    for s in &outcome.standings {
                        out.push_str(&format!(
                            "  {} | points: {} | skips: {}\n",
                            s.name, s.score, s.skips
                        ));
                    }
                    let names: Vec<&str> =
                        outcome.winners.iter().map(|w| w.name.as_str()).collect();
                    if outcome.is_tie() {
                        out.push_str(&format!("Tie between: {}\n", names.join(", ")));
                    } else {
                        out.push_str(&format!("Winner: {}\n", names.join(", ")));
                    }
                }
            }
        }
        out
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomePresenter for Transcript {
    fn present(&mut self, event: &GameEvent) {
        self.record(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{FinalOutcome, RoundSummary, Standing};
    use crate::participant::{AnswerOutcome, AnswerToken};
    use crate::question::Label;

    fn standing(name: &str, score: i32, skips: u32) -> Standing {
        Standing {
            name: name.to_string(),
            score,
            skips,
            round_correct: 0,
        }
    }

    fn sample() -> Transcript {
        let mut t = Transcript::new();
        t.present(&GameEvent::RoundStarted {
            round: 1,
            author: "Quizmaster".to_string(),
        });
        t.present(&GameEvent::AnswerResolved(AnswerRecord {
            round: 1,
            question: 1,
            participant: "Ada".to_string(),
            answer: AnswerToken::Choice(Label::B),
            outcome: AnswerOutcome::Correct,
            score: 1,
        }));
        t.present(&GameEvent::RoundFinished(RoundSummary {
            round: 1,
            winner: None,
            standings: vec![standing("Ada", 1, 0)],
        }));
        t.present(&GameEvent::GameFinished(FinalOutcome {
            winners: vec![standing("Ada", 1, 0), standing("Bo", 1, 0)],
            standings: vec![standing("Ada", 1, 0), standing("Bo", 1, 0)],
        }));
        t
    }

    #[test]
    fn records_in_order() {
        let t = sample();
        assert_eq!(t.len(), 4);
        assert!(matches!(t.events()[0], GameEvent::RoundStarted { round: 1, .. }));
        assert_eq!(t.answers().count(), 1);
    }

    #[test]
    fn text_export() {
        let text = sample().export_text();
        assert!(text.contains("Round 1 (questions by Quizmaster)"));
        assert!(text.contains("Q1 Ada: b -> correct (score 1)"));
        assert!(text.contains("result: tie"));
        assert!(text.contains("Tie between: Ada, Bo"));
    }

    #[test]
    fn json_export_is_tagged() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let events = value["events"].as_array().unwrap();
        assert_eq!(events[0]["event"], "round_started");
        assert_eq!(events[1]["event"], "answer_resolved");
        assert_eq!(events[1]["answer"]["choice"], "b");
        assert_eq!(events[1]["outcome"], "correct");
        assert_eq!(events[3]["winners"].as_array().unwrap().len(), 2);
    }
}
