//! Interactive prompts on stdin.

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Print `question` and read one line from `input`, without the line ending.
///
/// Returns `None` on end of input.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<Option<String>> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

/// Prompt for the link to download.
pub fn ask_url() -> Result<Option<String>> {
    let stdin = io::stdin();
    ask(
        &mut stdin.lock(),
        &mut io::stdout(),
        "Enter track, album, or playlist URL: ",
    )
}

/// Prompt for a track selection. End of input means "everything".
pub fn ask_selection() -> Result<String> {
    let stdin = io::stdin();
    let answer = ask(
        &mut stdin.lock(),
        &mut io::stdout(),
        "Enter track numbers to download (space-separated) or press Enter to download all: ",
    )?;
    Ok(answer.unwrap_or_default())
}
