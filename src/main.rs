// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Get the input file (from the arguments, or by asking the user)
// 3. Probe every site in order, printing one line per site
// 4. Write working.txt / nworking.txt and print a summary
// 5. Exit with proper code (0 = all reachable, 1 = some unreachable, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker;       // src/checker/ - probe-and-classify logic
mod cli;           // src/cli.rs - command-line parsing
mod input;         // src/input/ - input path prompt and CSV reading
mod logging;       // src/logging.rs - diagnostic logging to stderr
mod report;        // src/report.rs - console output
mod sink;          // src/sink.rs - result lists and output files

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use sink::ResultSet;
use std::io::{self, IsTerminal};
use tracing::info;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = every site reachable (or nothing to check)
//   Ok(1) = at least one site unreachable
//   Err = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging()?;

    let color = !cli.no_color && io::stdout().is_terminal();

    let input_path = match &cli.input {
        Some(path) => input::require_file(path)?,
        None => {
            let stdin = io::stdin();
            let mut stdin = stdin.lock();
            let mut stdout = io::stdout();
            input::prompt_for_path(&mut stdin, &mut stdout, color)?
        }
    };

    let urls = input::load_urls(&input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;

    info!(count = urls.len(), "starting probe pass");

    let prober = checker::Prober::new(cli.probe_settings())?;
    let results = checker::probe_all(&prober, &urls, |result| {
        println!("{}", report::format_probe_line(result, color));
    })
    .await;

    let set: ResultSet = results.iter().cloned().collect();
    let paths = set.write_to(&cli.output_dir)?;

    report::print_summary(&set, &results, &paths, cli.json)?;

    info!(
        reachable = set.reachable().len(),
        unreachable = set.unreachable().len(),
        "probe pass finished"
    );

    if set.unreachable().is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}
