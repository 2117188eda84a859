//! Console dialogue for the `interactive` command.
//!
//! Asks for the folder first, then for the pattern list. Reading is generic
//! over [`BufRead`]/[`Write`] so the dialogue can be driven from tests.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf
};

use crate::error::{AppResult, prompt_error};

pub const FOLDER_PROMPT: &str =
    "Please enter full path to log folder, or just leave it empty to use current folder:";

pub const PATTERN_PROMPT: &str =
    "Enter string to check (multiple key will be separated by comma):";

/// Answers collected from the console
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    /// Folder to scan; `None` means the current directory
    pub root:     Option<PathBuf>,
    /// Raw comma-separated pattern list
    pub patterns: String
}

/// Ask for folder and patterns.
///
/// End of input counts as an empty answer.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the answer fails.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<Answers> {
    let folder = ask_line(input, output, FOLDER_PROMPT).map_err(prompt_error)?;
    let patterns = ask_line(input, output, PATTERN_PROMPT).map_err(prompt_error)?;
    let folder = folder.trim();
    Ok(Answers {
        root: (!folder.is_empty()).then(|| PathBuf::from(folder)),
        patterns
    })
}

fn ask_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    writeln!(output, "{}", prompt)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let trimmed = answer.trim_end_matches(['\r', '\n']).len();
    answer.truncate(trimmed);
    Ok(answer)
}
