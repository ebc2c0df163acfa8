// src/checker/mod.rs
// =============================================================================
// This module contains the probe-and-classify logic.
//
// Submodules:
// - http: Makes HTTP HEAD requests and decides Reachable vs Unreachable
//
// This file (mod.rs) is the module root - it exports the public API that
// main.rs and the other modules use.
// =============================================================================

mod http;

// Re-export public items from the submodule
// This lets users write `checker::probe_all()` instead of
// `checker::http::probe_all()`
pub use http::{probe_all, Outcome, ProbeResult, ProbeSettings, Prober};

// Only the sink and report tests build failed results by hand
#[cfg(test)]
pub use http::FailureKind;
