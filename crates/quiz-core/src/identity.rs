//! Display identity shared by the question author and the participants.

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};

/// A validated, non-blank display name.
///
/// Names are trimmed on construction. They identify people on screen only,
/// so two identities may carry the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    name: String,
}

impl Identity {
    /// Create an identity, rejecting blank names.
    pub fn new(name: impl Into<String>) -> QuizResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(QuizError::BlankName);
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_name() {
        let id = Identity::new("  Ada  ").unwrap();
        assert_eq!(id.name(), "Ada");
        assert_eq!(id.to_string(), "Ada");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(Identity::new(""), Err(QuizError::BlankName)));
        assert!(matches!(Identity::new(" \t "), Err(QuizError::BlankName)));
    }
}
