//! Multiple-choice questions and the authoring role that builds them.
//!
//! A [`Question`] only exists in a valid state: every check runs before
//! construction, so a failed check leaves nothing half-built behind.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::Identity;

/// Number of options every question carries.
pub const OPTION_COUNT: usize = 4;

/// The label of one option, `a` through `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// First option.
    A,
    /// Second option.
    B,
    /// Third option.
    C,
    /// Fourth option.
    D,
}

impl Label {
    /// All labels in option order.
    pub const ALL: [Label; OPTION_COUNT] = [Label::A, Label::B, Label::C, Label::D];

    /// Parse a label character, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            _ => None,
        }
    }

    /// Zero-based option position.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase label character.
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
        }
    }
}

impl TryFrom<char> for Label {
    type Error = ValidationError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(ValidationError::InvalidLabel(c))
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Raw question fields as collected from an author, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// The question text.
    pub prompt: String,
    /// Option texts in label order.
    pub options: Vec<String>,
    /// Label of the correct option, any case.
    pub correct: char,
}

impl QuestionSpec {
    /// Bundle raw question fields.
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct: char,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
        }
    }
}

/// A validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct: Label,
}

impl Question {
    /// Validate raw fields and build a question.
    ///
    /// The prompt and each option must contain non-whitespace text, there
    /// must be exactly four options, and `correct` must be `a`-`d` in any
    /// case. The options are copied, so later changes to the caller's slice
    /// do not reach the question.
    pub fn new(prompt: &str, options: &[String], correct: char) -> Result<Self, ValidationError> {
        if prompt.trim().is_empty() {
            return Err(ValidationError::BlankPrompt);
        }
        if options.len() != OPTION_COUNT {
            return Err(ValidationError::OptionCount {
                found: options.len(),
            });
        }
        if let Some(label) = Label::ALL
            .into_iter()
            .zip(options)
            .find_map(|(label, text)| text.trim().is_empty().then_some(label))
        {
            return Err(ValidationError::BlankOption { label });
        }
        let correct = Label::try_from(correct)?;

        Ok(Self {
            prompt: prompt.to_string(),
            options: std::array::from_fn(|i| options[i].clone()),
            correct,
        })
    }

    /// The question text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// All options in label order.
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    /// The text of one option.
    pub fn option(&self, label: Label) -> &str {
        &self.options[label.index()]
    }

    /// The label of the correct option.
    pub fn correct_label(&self) -> Label {
        self.correct
    }

    /// Whether `label` is the correct option.
    pub fn is_correct(&self, label: Label) -> bool {
        label == self.correct
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.prompt)?;
        for label in Label::ALL {
            writeln!(f, "  {label}) {}", self.option(label))?;
        }
        Ok(())
    }
}

/// Something that turns raw authored fields into a [`Question`].
pub trait QuestionFactory {
    /// Validate and build a question.
    fn create(
        &self,
        prompt: &str,
        options: &[String],
        correct: char,
    ) -> Result<Question, ValidationError>;

    /// Build a question from a bundled [`QuestionSpec`].
    fn create_from_spec(&self, spec: &QuestionSpec) -> Result<Question, ValidationError> {
        self.create(&spec.prompt, &spec.options, spec.correct)
    }
}

/// The person who writes the questions for every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAuthor {
    identity: Identity,
}

impl QuestionAuthor {
    /// Create an author with the given identity.
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    /// The author's identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The author's display name.
    pub fn name(&self) -> &str {
        self.identity.name()
    }
}

impl QuestionFactory for QuestionAuthor {
    fn create(
        &self,
        prompt: &str,
        options: &[String],
        correct: char,
    ) -> Result<Question, ValidationError> {
        Question::new(prompt, options, correct)
    }
}
