//! Text rendering for game events.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use quiz_core::{AnswerOutcome, AnswerRecord, FinalOutcome, Question, RoundSummary, SKIP_WORDS};

pub fn banner() -> String {
    [
        "+============================+",
        "|       QUIZ  TERMINAL       |",
        "+============================+",
    ]
    .join("\n")
}

pub fn round_header(round: u32, author: &str) -> String {
    format!(
        "\n{}\n(questions by {author})",
        format!("---- ROUND {round} ----").bold()
    )
}

pub fn authoring_header(round: u32, slot: usize) -> String {
    format!("\n[Authoring] Question {slot} of round {round}")
}

pub fn turn(name: &str, question: &Question) -> String {
    format!(
        "\n{}\n{}",
        format!("Turn: {name}").cyan(),
        question.to_string().trim_end().yellow()
    )
}

pub fn answer_prompt(skip_offered: bool) -> String {
    if skip_offered {
        format!("Your answer (a/b/c/d) or '{}' to pass: ", SKIP_WORDS[0])
    } else {
        "Your answer (a/b/c/d): ".to_string()
    }
}

pub fn verdict(record: &AnswerRecord) -> String {
    match record.outcome {
        AnswerOutcome::Skipped => format!("{} chose to SKIP the question.", record.participant),
        AnswerOutcome::Correct => format!(
            "{}\n{}'s total score: {}",
            "Correct! (+1 point)".green(),
            record.participant,
            record.score
        ),
        AnswerOutcome::Incorrect => format!(
            "{}\n{}'s total score: {}",
            "Wrong! (-1 point)".red(),
            record.participant,
            record.score
        ),
    }
}

pub fn round_result(summary: &RoundSummary) -> String {
    match &summary.winner {
        Some(winner) => format!(
            "\n=> Round {} winner: {} (correct: {})\n",
            summary.round,
            winner.name.bold(),
            winner.round_correct
        ),
        None => format!("\n=> Round {} result: TIE\n", summary.round),
    }
}

pub fn final_board(outcome: &FinalOutcome) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Player", "Points", "Skips"]);
    for s in &outcome.standings {
        table.add_row(vec![s.name.clone(), s.score.to_string(), s.skips.to_string()]);
    }

    let mut out = format!("\n{}\n{table}\n", "==== FINAL RESULT ====".bold());
    match outcome.winners.as_slice() {
        [winner] => out.push_str(&format!("\nWinner: {}\n", winner.name.green().bold())),
        winners => {
            out.push_str("\nThe game ended in a TIE between:\n");
            for w in winners {
                out.push_str(&format!(" - {}\n", w.name));
            }
        }
    }
    out.push_str("==== END ====");
    out
}
