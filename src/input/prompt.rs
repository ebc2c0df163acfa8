// src/input/prompt.rs
// =============================================================================
// Asks the operator for the input file until an existing file is named.
//
// The loop has two states:
//   Prompting  -> print the question, read one line
//   Validated  -> the line named an existing file, we are done
// A path that does not exist prints a warning and keeps us in Prompting.
// =============================================================================

use super::InputError;
use crate::report::{paint, Style};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const QUESTION: &str = "Enter the name of the file: ";

enum PromptState {
    Prompting,
    Validated(PathBuf),
}

// Prompts until the answer names an existing file
//
// Parameters:
//   input: where answers come from (stdin in the real program)
//   output: where the question and warnings go (stdout)
//   color: whether warnings get the failure color
//
// Returns: the validated path, or InputError::Closed if input ends first
pub fn prompt_for_path<R, W>(input: &mut R, output: &mut W, color: bool) -> Result<PathBuf, InputError>
where
    R: BufRead,
    W: Write,
{
    let mut state = PromptState::Prompting;

    loop {
        match state {
            PromptState::Validated(path) => return Ok(path),
            PromptState::Prompting => {
                write!(output, "{}", QUESTION)?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Err(InputError::Closed);
                }

                // Only the line terminator goes; spaces can be part of a file name
                let answer = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
                if Path::new(answer).is_file() {
                    state = PromptState::Validated(PathBuf::from(answer));
                } else {
                    debug!(answer, "rejected input path");
                    let warning = format!("File: {} doesn't exist", answer);
                    writeln!(output, "{}", paint(Style::Fail, &warning, color))?;
                }
            }
        }
    }
}

// Validates a path given on the command line (no second chance)
pub fn require_file(path: &Path) -> Result<PathBuf, InputError> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(InputError::NotFound(path.to_path_buf()))
    }
}
