// src/report.rs
// =============================================================================
// Everything the operator sees on stdout.
//
// What happens here:
// 1. One colored status line per probed URL, printed as soon as it is known
// 2. A summary once the whole list is done (table-ish text or JSON)
//
// Rust concepts:
// - Enums with methods: Style maps to an ANSI escape code
// - Lifetimes: Summary borrows the results instead of copying them
// =============================================================================

use crate::checker::{Outcome, ProbeResult};
use crate::sink::{OutputPaths, ResultSet};
use anyhow::Result;
use serde::Serialize;

const RESET: &str = "\x1b[0m";

// The two console styles we use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Bright green, for reachable sites
    Ok,
    /// Bright red, for unreachable sites and bad input
    Fail,
}

impl Style {
    /// ANSI escape sequence that switches to this style
    pub fn code(self) -> &'static str {
        match self {
            Style::Ok => "\x1b[92m",
            Style::Fail => "\x1b[91m",
        }
    }

    fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Reachable => Style::Ok,
            Outcome::Unreachable => Style::Fail,
        }
    }
}

/// Wraps `text` in the style's color (and a reset) when `color` is on.
pub fn paint(style: Style, text: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style.code(), text, RESET)
    } else {
        text.to_string()
    }
}

// Formats the status line for one probe
//
// Examples:
//   https://example.com - status: 200 OK
//   https://example.com/gone - status: 404 FAIL
//   https://nope.invalid - status: N/A FAIL (dns error)
pub fn format_probe_line(result: &ProbeResult, color: bool) -> String {
    let status = match result.status {
        Some(code) => code.to_string(),
        None => "N/A".to_string(),
    };

    let tag = if result.is_reachable() { "OK" } else { "FAIL" };

    let mut line = format!("{} - status: {} {}", result.url, status, tag);

    // Without a status code the reader would have no clue why it failed
    if result.status.is_none() {
        if let Some(kind) = result.failure {
            line.push_str(&format!(" ({})", kind));
        }
    }

    paint(Style::for_outcome(result.outcome), &line, color)
}

// The JSON document printed with --json
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub reachable: &'a [String],
    pub unreachable: &'a [String],
    pub results: &'a [ProbeResult],
}

// Prints the end-of-run summary either as text or JSON
pub fn print_summary(
    set: &ResultSet,
    results: &[ProbeResult],
    paths: &OutputPaths,
    json: bool,
) -> Result<()> {
    if json {
        let summary = Summary {
            reachable: set.reachable(),
            unreachable: set.unreachable(),
            results,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!();
        println!("📊 Summary:");
        println!("   ✅ Reachable: {}", set.reachable().len());
        println!("   ❌ Unreachable: {}", set.unreachable().len());
        println!("   📋 Total: {}", set.len());
        println!();
        println!("📄 Wrote {}", paths.working.display());
        println!("📄 Wrote {}", paths.not_working.display());
    }
    Ok(())
}
