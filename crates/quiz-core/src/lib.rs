//! Round orchestration and scoring engine for Quiz Terminal.
//!
//! A [`Game`] runs five [`Round`]s of three multiple-choice questions each.
//! The [`QuestionAuthor`] writes every question; each [`Participant`]
//! answers it in turn, may skip once per round, and earns +1 for a correct
//! answer and -1 for a wrong one. Input and display are delegated to a host
//! implementing the traits in [`host`].

pub mod error;
pub mod event;
pub mod game;
pub mod host;
pub mod identity;
pub mod participant;
pub mod question;
pub mod round;
pub mod scripted;
pub mod transcript;

pub use error::{QuizError, QuizResult, ValidationError};
pub use event::{AnswerRecord, FinalOutcome, GameEvent, RoundSummary, Standing};
pub use game::{Game, MIN_PARTICIPANTS, ROUNDS, final_winners};
pub use host::{AnswerInputSource, OutcomePresenter, QuestionInputSource};
pub use identity::Identity;
pub use participant::{AnswerOutcome, AnswerToken, Answerer, Participant, SKIP_WORDS};
pub use question::{Label, OPTION_COUNT, Question, QuestionAuthor, QuestionFactory, QuestionSpec};
pub use round::{QUESTIONS_PER_ROUND, Round, round_winner};
pub use scripted::ScriptedHost;
pub use transcript::Transcript;
