// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every argument is optional. Running `site-pulse` with nothing at all asks
// for the input file interactively and uses the default timing (10 second
// timeout, 1 second pause between sites).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: An argument the user may or may not pass
// =============================================================================

use crate::checker::ProbeSettings;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-pulse",
    version,
    about = "Check which websites in a CSV list are reachable",
    long_about = "site-pulse reads hostnames from a CSV file, sends one HEAD request to \
                  https://<host> for each row, and sorts the sites into working.txt \
                  (reachable) and nworking.txt (unreachable)."
)]
pub struct Cli {
    /// CSV file with one hostname per row
    ///
    /// If omitted, you are asked for it (and asked again until the file exists)
    pub input: Option<PathBuf>,

    /// Seconds to wait for each site before giving up
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Seconds to pause between two sites
    #[arg(long, default_value_t = 1)]
    pub delay: u64,

    /// Directory that receives working.txt and nworking.txt
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Never color the output (colors are also off when stdout is not a terminal)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    // Turns the timing flags into prober settings
    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            timeout: Duration::from_secs(self.timeout),
            delay: Duration::from_secs(self.delay),
            ..ProbeSettings::default()
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `input` an Option<PathBuf>?
//    - A positional argument without a default is required by clap
//    - Wrapping it in Option makes it optional instead
//    - None means "ask the user interactively"
//
// 2. What does value_parser!(u64).range(1..) do?
//    - Rejects --timeout 0 at parse time with a helpful message
//    - A zero timeout would make every single probe fail
//
// 3. Why PathBuf instead of String?
//    - PathBuf is the owned type for filesystem paths
//    - Paths are not always valid UTF-8 on every platform
// -----------------------------------------------------------------------------
