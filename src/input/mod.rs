// src/input/mod.rs
// =============================================================================
// This module turns the operator's input file into a list of URLs.
//
// Submodules:
// - prompt: Asks for the input path until an existing file is given
// - normalize: Reads the CSV rows and builds one https:// URL per row
//
// Rust concepts:
// - thiserror: Derives std::error::Error for our own error enum
// - Generic readers/writers: The prompt works on any BufRead + Write, so
//   tests can drive it with in-memory buffers instead of a real terminal
// =============================================================================

mod normalize;
mod prompt;

use std::path::PathBuf;
use thiserror::Error;

pub use normalize::load_urls;
pub use prompt::{prompt_for_path, require_file};

// Everything that can go wrong while getting the URL list
#[derive(Debug, Error)]
pub enum InputError {
    /// A path given on the command line does not name a file
    #[error("input file {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// Standard input was closed before a valid path was entered
    #[error("no input file given (standard input closed)")]
    Closed,

    /// Reading the answer or writing the prompt failed
    #[error("failed to talk to the terminal")]
    Terminal(#[from] std::io::Error),

    /// The file passed validation but could not be opened
    #[error("could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row could not be decoded (e.g. invalid UTF-8)
    #[error("malformed row in {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
