//! Error types for the quiz engine.

use crate::question::Label;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Reasons authored input cannot become a [`Question`](crate::Question).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The prompt is empty or only whitespace.
    #[error("the question prompt is blank")]
    BlankPrompt,

    /// The number of options is not exactly four.
    #[error("expected exactly 4 options, got {found}")]
    OptionCount {
        /// How many options were supplied.
        found: usize,
    },

    /// One of the options is empty or only whitespace.
    #[error("option {label}) is blank")]
    BlankOption {
        /// The label of the offending option.
        label: Label,
    },

    /// The correct answer is not one of a, b, c or d.
    #[error("the correct answer must be a, b, c or d, got '{0}'")]
    InvalidLabel(char),
}

/// Errors that can occur while setting up or running a game.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Authored question input was rejected.
    #[error("invalid question: {0}")]
    Validation(#[from] ValidationError),

    /// A fourth question was added to a round.
    #[error("round already holds 3 questions")]
    RoundFull,

    /// A round was started before all of its questions were added.
    #[error("round needs 3 questions to start, has {have}")]
    IncompleteRound {
        /// How many questions the round holds.
        have: usize,
    },

    /// The participant already used their skip this round.
    #[error("skip already used this round")]
    SkipAlreadyUsed,

    /// The answer source returned a skip after being told skip was not offered.
    #[error("skip was not offered for this answer")]
    SkipNotOffered,

    /// The round winner was requested before the round was played.
    #[error("round has not been played yet")]
    RoundNotPlayed,

    /// A round that already finished was started again.
    #[error("round has already been played")]
    RoundAlreadyPlayed,

    /// A game was played a second time.
    #[error("game has already been played")]
    GameAlreadyPlayed,

    /// A participant or author name is blank.
    #[error("name must not be blank")]
    BlankName,

    /// Fewer than two participants were supplied.
    #[error("at least 2 participants are required, got {found}")]
    NotEnoughParticipants {
        /// How many participants were supplied.
        found: usize,
    },

    /// A raw answer could not be read as a label or the skip token.
    #[error("invalid answer '{0}': expected a, b, c, d or skip")]
    InvalidAnswer(String),

    /// The interactive input stream was closed mid-game.
    #[error("input closed before the game finished")]
    InputClosed,

    /// A scripted or file-backed input source ran out of entries.
    #[error("ran out of {0}")]
    InputExhausted(String),

    /// Reading or writing a terminal stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A transcript could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
