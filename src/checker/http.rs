// src/checker/http.rs
// =============================================================================
// This module checks if websites are reachable by making HTTP requests.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Classifies every answer as Reachable (status < 400) or Unreachable
// - Detects transport failures (timeout, DNS, refused connection, TLS, ...)
// - Probes strictly one URL at a time, pausing between probes (throttle)
//
// Rust concepts:
// - async/await: The HTTP client is async, but we await each probe in turn
// - Option<T>: A status code only exists when the server actually answered
// - Enums: To represent outcomes and failure causes
// =============================================================================

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Responses at or above this status count as failures even though the
/// server answered.
pub const ERROR_STATUS_THRESHOLD: u16 = 400;

// Settings that control how each probe is made
//
// Defaults reproduce the classic behavior: 10 second timeout per request,
// 1 second pause after each probe.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// Upper bound for a single HEAD request (connect + response)
    pub timeout: Duration,
    /// Fixed pause between two consecutive probes
    pub delay: Duration,
    /// Sent as the User-Agent header
    pub user_agent: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            delay: Duration::from_secs(1),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// The two buckets every probed URL ends up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The server answered with a status below 400
    Reachable,
    /// Error-range status or no answer at all
    Unreachable,
}

// Why an Unreachable probe failed
//
// HttpStatus is the only kind that comes with a status code; all the others
// mean the request never produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The server answered, but with a 4xx/5xx status
    HttpStatus,
    /// Request timed out
    Timeout,
    /// Could not resolve hostname
    Dns,
    /// Connection refused / reset / unreachable host
    Connect,
    /// SSL/TLS handshake or certificate error
    Tls,
    /// The URL could not even be turned into a request
    InvalidUrl,
    /// Anything else
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureKind::HttpStatus => "http error status",
            FailureKind::Timeout => "timed out",
            FailureKind::Dns => "dns error",
            FailureKind::Connect => "connection failed",
            FailureKind::Tls => "tls error",
            FailureKind::InvalidUrl => "invalid url",
            FailureKind::Other => "request error",
        };
        f.write_str(text)
    }
}

// Represents the result of probing a single URL
//
// This struct holds all information about one probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// The URL that was probed
    pub url: String,
    /// Which bucket the URL belongs in
    pub outcome: Outcome,
    /// HTTP status code, only when a response was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Failure cause, only for Unreachable results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl ProbeResult {
    /// Builds a result from a status code the server sent back
    pub fn from_status(url: String, status: u16) -> Self {
        let outcome = classify_status(status);
        let failure = match outcome {
            Outcome::Reachable => None,
            Outcome::Unreachable => Some(FailureKind::HttpStatus),
        };

        ProbeResult {
            url,
            outcome,
            status: Some(status),
            failure,
        }
    }

    /// Builds a result for a request that never got a response
    pub fn from_failure(url: String, kind: FailureKind) -> Self {
        ProbeResult {
            url,
            outcome: Outcome::Unreachable,
            status: None,
            failure: Some(kind),
        }
    }

    /// Helper method to check if the site answered successfully
    pub fn is_reachable(&self) -> bool {
        self.outcome == Outcome::Reachable
    }
}

/// Maps a received status code onto an outcome.
pub fn classify_status(status: u16) -> Outcome {
    if status < ERROR_STATUS_THRESHOLD {
        Outcome::Reachable
    } else {
        Outcome::Unreachable
    }
}

// Owns the HTTP client so every probe reuses the same connection pool
pub struct Prober {
    client: Client,
    settings: ProbeSettings,
}

impl Prober {
    // Creates a prober with the given settings
    //
    // Building the client can fail (e.g. the TLS backend cannot initialize),
    // so we return a Result instead of panicking.
    pub fn new(settings: ProbeSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            // The first answer decides: a 3xx is already proof the site is up
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(settings.user_agent.clone())
            .build()
            .context("failed to create HTTP client")?;

        Ok(Prober { client, settings })
    }

    // Probes a single URL
    //
    // Never fails: every problem is folded into an Unreachable result.
    pub async fn probe(&self, url: &str) -> ProbeResult {
        let started = Instant::now();

        // HEAD request (faster, no body download)
        let result = match self.client.head(url).send().await {
            Ok(response) => ProbeResult::from_status(url.to_string(), response.status().as_u16()),
            Err(e) => ProbeResult::from_failure(url.to_string(), categorize_error(&e)),
        };

        debug!(
            url,
            outcome = ?result.outcome,
            status = ?result.status,
            failure = ?result.failure,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "probe finished"
        );

        result
    }
}

// Probes every URL in order, one at a time
//
// Parameters:
//   prober: the shared prober (borrowed)
//   urls: the URLs to probe, in input order
//   on_result: called right after each probe (used to print the status line)
//
// Returns: one ProbeResult per URL, in the same order as `urls`
//
// The throttle delay runs after each probe except the last one.
pub async fn probe_all<F>(prober: &Prober, urls: &[String], mut on_result: F) -> Vec<ProbeResult>
where
    F: FnMut(&ProbeResult),
{
    let mut results = Vec::with_capacity(urls.len());

    for (index, url) in urls.iter().enumerate() {
        let result = prober.probe(url).await;
        on_result(&result);
        results.push(result);

        let is_last = index + 1 == urls.len();
        if !is_last && !prober.settings.delay.is_zero() {
            tokio::time::sleep(prober.settings.delay).await;
        }
    }

    results
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - A URL that cannot be parsed at all
fn categorize_error(error: &reqwest::Error) -> FailureKind {
    // The interesting detail (e.g. "dns error") sits in the source chain.
    // The top-level message is skipped because it repeats the URL.
    let chain = source_chain_text(error);

    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_builder() {
        FailureKind::InvalidUrl
    } else if chain.contains("dns") || chain.contains("failed to lookup address") {
        FailureKind::Dns
    } else if chain.contains("certificate") || chain.contains("tls") || chain.contains("ssl") {
        FailureKind::Tls
    } else if error.is_connect() {
        FailureKind::Connect
    } else {
        FailureKind::Other
    }
}

// Joins all sources of an error into one lowercase string
fn source_chain_text(error: &reqwest::Error) -> String {
    let mut text = String::new();
    let mut source = error.source();
    while let Some(inner) = source {
        text.push_str(&inner.to_string());
        text.push_str(": ");
        source = inner.source();
    }
    text.to_lowercase()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why async if we probe one URL at a time?
//    - reqwest's main client is async, and tokio gives us the timer
//    - Awaiting each probe before starting the next keeps things sequential
//    - The program simply waits on one request at a time
//
// 2. Why Option<u16> for the status?
//    - A timeout or DNS failure never produces a response
//    - Option makes "no status" explicit instead of inventing a fake code
//    - The console prints "N/A" in that case
//
// 3. What is FnMut?
//    - A closure that may change captured state when called
//    - probe_all calls it once per result, right after the probe
//    - main.rs uses it to print each status line immediately
//
// 4. What does error.source() do?
//    - Errors can wrap other errors (reqwest -> hyper -> io error)
//    - source() walks one level down that chain
// -----------------------------------------------------------------------------
