use std::io;
use std::path::Path;

use tracing::info;

use quiz_core::{Game, Identity, MIN_PARTICIPANTS, Participant, QuestionAuthor, Transcript};

use crate::bank::QuestionBank;
use crate::config::PlayConfig;
use crate::render;
use crate::terminal::TerminalHost;

pub fn run(
    author: Option<String>,
    players: Vec<String>,
    questions: Option<&Path>,
    config: PlayConfig,
) -> Result<(), String> {
    if !config.color {
        colored::control::set_override(false);
    }

    let transcript_path = config.transcript.clone();
    let mut host = TerminalHost::new(io::stdin().lock(), io::stdout(), config);
    if let Some(path) = questions {
        let bank = QuestionBank::load(path)?;
        info!(questions = bank.len(), path = %path.display(), "loaded question bank");
        host = host.with_bank(bank);
    }

    host.say(&render::banner()).map_err(|e| e.to_string())?;

    let author = match author {
        Some(name) => name,
        None => host
            .prompt_nonblank("Question author's name: ")
            .map_err(|e| e.to_string())?,
    };
    let author = QuestionAuthor::new(Identity::new(author).map_err(|e| e.to_string())?);

    let names = if players.is_empty() {
        collect_player_names(&mut host).map_err(|e| e.to_string())?
    } else {
        players
    };
    let participants = names
        .into_iter()
        .map(Participant::named)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    let mut game = Game::new(author, participants).map_err(|e| e.to_string())?;
    let result = game.play(&mut host).map_err(|e| e.to_string());

    // keep whatever was recorded, even if the game stopped early
    if let (Some(path), Some(transcript)) = (transcript_path, host.transcript()) {
        write_transcript(&path, transcript)?;
    }

    result.map(|_| ())
}

fn collect_player_names<R, W>(host: &mut TerminalHost<R, W>) -> quiz_core::QuizResult<Vec<String>>
where
    R: io::BufRead,
    W: io::Write,
{
    let count = host.prompt_count(
        &format!("Number of players (>={MIN_PARTICIPANTS}): "),
        MIN_PARTICIPANTS,
    )?;
    (1..=count)
        .map(|i| host.prompt_nonblank(&format!("Name of player {i}: ")))
        .collect()
}

/// Write `.txt` paths as plain text and everything else as JSON.
fn write_transcript(path: &Path, transcript: &Transcript) -> Result<(), String> {
    let text = if path.extension().is_some_and(|ext| ext == "txt") {
        transcript.export_text()
    } else {
        transcript.to_json().map_err(|e| e.to_string())?
    };
    std::fs::write(path, text).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    info!(path = %path.display(), events = transcript.len(), "transcript written");
    Ok(())
}
