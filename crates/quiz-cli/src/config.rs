//! Settings for an interactive game.

use std::path::PathBuf;
use std::time::Duration;

/// Default pause before an answer is revealed, matching the classic
/// "checking answer..." beat.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1000;

/// Configuration for the `play` command.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Pause between an answer and its verdict.
    pub reveal_delay: Duration,
    /// Whether to emit ANSI colors.
    pub color: bool,
    /// Where to write the game transcript, if anywhere.
    pub transcript: Option<PathBuf>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            color: true,
            transcript: None,
        }
    }
}

impl PlayConfig {
    /// Set the reveal pause in milliseconds.
    pub fn with_reveal_delay(mut self, millis: u64) -> Self {
        self.reveal_delay = Duration::from_millis(millis);
        self
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write a transcript to `path` when the game ends.
    pub fn with_transcript(mut self, path: Option<PathBuf>) -> Self {
        self.transcript = path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = PlayConfig::default();
        assert_eq!(cfg.reveal_delay, Duration::from_millis(1000));
        assert!(cfg.color);
        assert!(cfg.transcript.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = PlayConfig::default()
            .with_reveal_delay(0)
            .with_color(false)
            .with_transcript(Some(PathBuf::from("game.json")));
        assert_eq!(cfg.reveal_delay, Duration::ZERO);
        assert!(!cfg.color);
        assert_eq!(cfg.transcript, Some(PathBuf::from("game.json")));
    }
}
