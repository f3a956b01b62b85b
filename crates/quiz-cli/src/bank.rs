//! Question banks: pre-authored questions loaded from a JSON file.

use std::collections::VecDeque;
use std::path::Path;

use quiz_core::{QuizError, QuizResult, QuestionSpec};

/// Questions waiting to be handed to the game, in file order.
#[derive(Debug)]
pub struct QuestionBank {
    specs: VecDeque<QuestionSpec>,
}

impl QuestionBank {
    /// Load a JSON array of `{prompt, options, correct}` objects.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        Self::from_json(&text).map_err(|e| format!("invalid question bank {}: {e}", path.display()))
    }

    /// Parse a bank from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let specs: Vec<QuestionSpec> = serde_json::from_str(text)?;
        Ok(Self {
            specs: specs.into(),
        })
    }

    /// Take the next question.
    pub fn next_spec(&mut self) -> QuizResult<QuestionSpec> {
        self.specs
            .pop_front()
            .ok_or_else(|| QuizError::InputExhausted("questions in the question bank".to_string()))
    }

    /// Questions not yet taken.
    pub fn len(&self) -> usize {
        self.specs.len()
    }
}
