//! Terminal presentation: document prompt and the colored status line.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use lottie_embed_common::{EmbedError, EmbedResult};
use lottie_embed_core::{StatusLine, StatusTone};

/// Ask for a document path on stdin. An empty answer means no file selected.
pub fn prompt_for_document() -> EmbedResult<PathBuf> {
    let mut stdout = std::io::stdout();
    write!(stdout, "Select JSON (Data File *.json): ")?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    parse_answer(&line)
}

fn parse_answer(line: &str) -> EmbedResult<PathBuf> {
    let answer = line.trim().trim_matches(|c| c == '"' || c == '\'');
    if answer.is_empty() {
        Err(EmbedError::NoFileSelected)
    } else {
        Ok(PathBuf::from(answer))
    }
}

/// Print the status line, green for success and red for errors on a terminal.
pub fn print_status(status: &StatusLine) {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
    println!("{}", styled(status));
}

fn styled(status: &StatusLine) -> ColoredString {
    match status.tone {
        StatusTone::Accent => status.text.green(),
        StatusTone::Alert => status.text.red(),
    }
}
