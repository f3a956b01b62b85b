//! Line-based terminal host: reads answers and questions, prints events.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::warn;

use quiz_core::{
    AnswerInputSource, AnswerOutcome, AnswerToken, GameEvent, Label, OPTION_COUNT,
    OutcomePresenter, Participant, Question, QuestionInputSource, QuestionSpec, QuizError,
    QuizResult, Transcript,
};

use crate::bank::QuestionBank;
use crate::config::PlayConfig;
use crate::render;

/// Plays a game over any line reader and writer.
pub struct TerminalHost<R, W> {
    input: R,
    output: W,
    config: PlayConfig,
    bank: Option<QuestionBank>,
    transcript: Option<Transcript>,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(input: R, output: W, config: PlayConfig) -> Self {
        let transcript = config.transcript.as_ref().map(|_| Transcript::new());
        Self {
            input,
            output,
            config,
            bank: None,
            transcript,
        }
    }

    /// Take questions from `bank` instead of asking the author.
    pub fn with_bank(mut self, bank: QuestionBank) -> Self {
        self.bank = Some(bank);
        self
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    /// Print a full line.
    pub fn say(&mut self, text: &str) -> QuizResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print a prompt without a newline.
    fn ask(&mut self, prompt: &str) -> QuizResult<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one trimmed line; end of input is an error.
    ///
    /// Bytes that are not UTF-8 are replaced, so a garbled line reaches the
    /// caller's validation instead of failing the read.
    fn read_line(&mut self) -> QuizResult<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(QuizError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Ask until a non-blank line arrives.
    pub fn prompt_nonblank(&mut self, prompt: &str) -> QuizResult<String> {
        self.ask(prompt)?;
        loop {
            let line = self.read_line()?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.ask("Empty input. Try again: ")?;
        }
    }

    /// Ask until a whole number of at least `min` arrives.
    pub fn prompt_count(&mut self, prompt: &str, min: usize) -> QuizResult<usize> {
        loop {
            self.ask(prompt)?;
            match self.read_line()?.parse::<usize>() {
                Ok(n) if n >= min => return Ok(n),
                Ok(_) => self.say(&format!("At least {min} are needed."))?,
                Err(_) => self.say("Invalid number.")?,
            }
        }
    }

    fn show(&mut self, event: &GameEvent) -> QuizResult<()> {
        match event {
            GameEvent::RoundStarted { round, author } => {
                self.say(&render::round_header(*round, author))
            }
            GameEvent::QuestionRejected { reason, .. } => {
                let message = if self.bank.is_some() {
                    format!("Skipping question from the bank: {reason}")
                } else {
                    format!("Question rejected: {reason}. Please enter it again.")
                };
                self.say(&message.yellow().to_string())
            }
            GameEvent::AnswerResolved(record) => {
                if record.outcome != AnswerOutcome::Skipped {
                    self.say("Checking answer...")?;
                    self.output.flush()?;
                    if !self.config.reveal_delay.is_zero() {
                        std::thread::sleep(self.config.reveal_delay);
                    }
                }
                self.say(&render::verdict(record))
            }
            GameEvent::SkipRefused { .. } => self.say(
                &"You already used your skip this round. Answer the question."
                    .yellow()
                    .to_string(),
            ),
            GameEvent::RoundFinished(summary) => self.say(&render::round_result(summary)),
            GameEvent::GameFinished(outcome) => self.say(&render::final_board(outcome)),
        }
    }
}

impl<R: BufRead, W: Write> QuestionInputSource for TerminalHost<R, W> {
    fn next_question(&mut self, round: u32, slot: usize) -> QuizResult<QuestionSpec> {
        if let Some(bank) = self.bank.as_mut() {
            return bank.next_spec();
        }

        self.say(&render::authoring_header(round, slot))?;
        let prompt = self.prompt_nonblank("Prompt: ")?;
        let mut options = Vec::with_capacity(OPTION_COUNT);
        for label in Label::ALL {
            options.push(self.prompt_nonblank(&format!("Option {label}): "))?);
        }
        let correct = self
            .prompt_nonblank("Correct option (a/b/c/d): ")?
            .chars()
            .next()
            .unwrap_or_default();

        Ok(QuestionSpec {
            prompt,
            options,
            correct,
        })
    }
}

impl<R: BufRead, W: Write> AnswerInputSource for TerminalHost<R, W> {
    fn next_answer(
        &mut self,
        participant: &Participant,
        question: &Question,
        skip_offered: bool,
    ) -> QuizResult<AnswerToken> {
        if skip_offered {
            self.say(&render::turn(participant.name(), question))?;
        }
        loop {
            self.ask(&render::answer_prompt(skip_offered))?;
            let line = self.read_line()?;
            if line.is_empty() {
                continue;
            }
            match line.parse::<AnswerToken>() {
                Ok(AnswerToken::Skip) if !skip_offered => {
                    self.say("Skipping is not available now. Pick a, b, c or d.")?
                }
                Ok(token) => return Ok(token),
                Err(_) => self.say("Invalid input. Try again.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> OutcomePresenter for TerminalHost<R, W> {
    fn present(&mut self, event: &GameEvent) {
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.record(event.clone());
        }
        if let Err(e) = self.show(event) {
            warn!(%e, "failed to display game event");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use quiz_core::{Game, Identity, QuestionAuthor};

    use super::*;

    type TestHost = TerminalHost<Cursor<Vec<u8>>, Vec<u8>>;

    fn host(input: &str) -> TestHost {
        colored::control::set_override(false);
        let config = PlayConfig::default().with_reveal_delay(0).with_color(false);
        TerminalHost::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config)
    }

    fn output(host: &TestHost) -> String {
        String::from_utf8(host.output.clone()).unwrap()
    }

    fn question() -> Question {
        let options = ["w", "x", "y", "z"].map(String::from);
        Question::new("Which?", &options, 'c').unwrap()
    }

    fn bank_json(count: usize) -> String {
        let entries: Vec<String> = (1..=count)
            .map(|n| {
                format!(r#"{{"prompt": "Q{n}", "options": ["w", "x", "y", "z"], "correct": "a"}}"#)
            })
            .collect();
        format!("[{}]", entries.join(","))
    }

    #[test]
    fn nonblank_prompt_skips_empty_lines() {
        let mut h = host("\n   \nAda\n");
        assert_eq!(h.prompt_nonblank("Name: ").unwrap(), "Ada");
        assert_eq!(output(&h).matches("Empty input").count(), 2);
    }

    #[test]
    fn count_prompt_enforces_minimum() {
        let mut h = host("many\n1\n3\n");
        assert_eq!(h.prompt_count("Players: ", 2).unwrap(), 3);
        let out = output(&h);
        assert!(out.contains("Invalid number."));
        assert!(out.contains("At least 2 are needed."));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut h = host("");
        assert!(matches!(
            h.prompt_nonblank("Name: "),
            Err(QuizError::InputClosed)
        ));
    }

    #[test]
    fn answer_prompt_reprompts_until_valid() {
        let mut h = host("\nz\nmaybe\nB\n");
        let player = Participant::named("Ada").unwrap();
        let token = h.next_answer(&player, &question(), true).unwrap();
        assert_eq!(token, AnswerToken::Choice(Label::B));
        let out = output(&h);
        assert!(out.contains("Turn: Ada"));
        assert!(out.contains("c) y"));
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn withdrawn_skip_is_not_accepted() {
        let mut h = host("skip\nc\n");
        let player = Participant::named("Ada").unwrap();
        let token = h.next_answer(&player, &question(), false).unwrap();
        assert_eq!(token, AnswerToken::Choice(Label::C));
        let out = output(&h);
        assert!(out.contains("Skipping is not available now"));
        assert!(!out.contains("Turn: Ada"));
    }

    #[test]
    fn authoring_collects_all_fields() {
        let mut h = host("Capital?\n\nLyon\nParis\nNice\nLille\nbee\n");
        let spec = h.next_question(2, 3).unwrap();
        assert_eq!(spec.prompt, "Capital?");
        assert_eq!(spec.options, vec!["Lyon", "Paris", "Nice", "Lille"]);
        assert_eq!(spec.correct, 'b');
        assert!(output(&h).contains("Question 3 of round 2"));
    }

    #[test]
    fn plays_a_full_game_from_a_bank() {
        // Ada always answers a (right), Bo always b (wrong)
        let answers = "a\nb\n".repeat(15);
        let bank = QuestionBank::from_json(&bank_json(15)).unwrap();
        let mut h = host(&answers).with_bank(bank);
        let author = QuestionAuthor::new(Identity::new("Quizmaster").unwrap());
        let players = vec![
            Participant::named("Ada").unwrap(),
            Participant::named("Bo").unwrap(),
        ];
        let mut game = Game::new(author, players).unwrap();

        let outcome = game.play(&mut h).unwrap();
        assert_eq!(outcome.winners[0].name, "Ada");
        let out = output(&h);
        assert_eq!(out.matches("---- ROUND").count(), 5);
        assert!(out.contains("Round 5 winner: Ada (correct: 3)"));
        assert!(out.contains("Winner: Ada"));
        assert!(h.transcript().is_none());
    }

    #[test]
    fn records_transcript_when_configured() {
        let config = PlayConfig::default()
            .with_reveal_delay(0)
            .with_transcript(Some(PathBuf::from("unused.json")));
        let mut h = TerminalHost::new(Cursor::new(Vec::new()), Vec::new(), config);
        h.present(&GameEvent::RoundStarted {
            round: 1,
            author: "Quizmaster".to_string(),
        });
        assert_eq!(h.transcript().map(Transcript::len), Some(1));
    }

    fn rejection(reason: &str) -> GameEvent {
        GameEvent::QuestionRejected {
            round: 1,
            slot: 1,
            reason: reason.to_string(),
        }
    }

    #[test]
    fn bad_bank_entries_are_reported() {
        let mut h = host("").with_bank(
            QuestionBank::from_json(r#"[{"prompt": " ", "options": [], "correct": "a"}]"#)
                .unwrap(),
        );
        let spec = h.next_question(1, 1).unwrap();
        assert_eq!(spec.prompt, " ");
        h.present(&rejection("the question prompt is blank"));
        let out = output(&h);
        assert_eq!(out.matches("Skipping question from the bank").count(), 1);
        assert!(out.contains("the question prompt is blank"));
    }

    #[test]
    fn rejected_authoring_asks_again() {
        let mut h = host("");
        h.present(&rejection("expected exactly 4 options, got 3"));
        assert!(output(&h).contains(
            "Question rejected: expected exactly 4 options, got 3. Please enter it again."
        ));
    }

    #[test]
    fn garbled_answer_line_is_reprompted() {
        let mut h = TerminalHost::new(
            Cursor::new(vec![0xff, 0xfe, b'\n', b'a', b'\n']),
            Vec::new(),
            PlayConfig::default().with_reveal_delay(0).with_color(false),
        );
        let player = Participant::named("Ada").unwrap();
        let token = h.next_answer(&player, &question(), true).unwrap();
        assert_eq!(token, AnswerToken::Choice(Label::A));
        assert_eq!(output(&h).matches("Invalid input. Try again.").count(), 1);
    }

    #[test]
    fn garbled_name_is_kept_lossily() {
        let mut h = host("");
        h.input = Cursor::new(b"Ad\xffa\n".to_vec());
        assert_eq!(h.prompt_nonblank("Name: ").unwrap(), "Ad\u{fffd}a");
    }
}
