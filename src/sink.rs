// src/sink.rs
// =============================================================================
// Collects probe results into two lists and writes them to disk.
//
// Output files (overwritten every run):
// - working.txt   -> reachable URLs
// - nworking.txt  -> unreachable URLs
// One URL per line, newline-terminated, in the order they were probed.
// Files are written only after the whole list has been probed.
// =============================================================================

use crate::checker::ProbeResult;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const WORKING_FILE: &str = "working.txt";
pub const NOT_WORKING_FILE: &str = "nworking.txt";

// The two ordered URL lists built during a probing pass
#[derive(Debug, Default)]
pub struct ResultSet {
    reachable: Vec<String>,
    unreachable: Vec<String>,
}

// Where the two lists ended up
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub working: PathBuf,
    pub not_working: PathBuf,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Puts the URL into exactly one of the two lists
    pub fn record(&mut self, result: &ProbeResult) {
        if result.is_reachable() {
            self.reachable.push(result.url.clone());
        } else {
            self.unreachable.push(result.url.clone());
        }
    }

    pub fn reachable(&self) -> &[String] {
        &self.reachable
    }

    pub fn unreachable(&self) -> &[String] {
        &self.unreachable
    }

    pub fn len(&self) -> usize {
        self.reachable.len() + self.unreachable.len()
    }

    // Writes both lists into `dir` (created if it does not exist yet)
    pub fn write_to(&self, dir: &Path) -> Result<OutputPaths> {
        fs::create_dir_all(dir)
            .with_context(|| format!("could not create output directory {}", dir.display()))?;

        let paths = OutputPaths {
            working: dir.join(WORKING_FILE),
            not_working: dir.join(NOT_WORKING_FILE),
        };

        write_url_list(&paths.working, &self.reachable)?;
        write_url_list(&paths.not_working, &self.unreachable)?;

        Ok(paths)
    }
}

impl FromIterator<ProbeResult> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ProbeResult>>(iter: T) -> Self {
        let mut set = ResultSet::new();
        for result in iter {
            set.record(&result);
        }
        set
    }
}

// Writes one URL per line, replacing whatever the file held before
pub fn write_url_list(path: &Path, urls: &[String]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for url in urls {
        writeln!(writer, "{}", url).with_context(|| format!("could not write {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("could not write {}", path.display()))?;

    info!("wrote {} url(s) to {}", urls.len(), path.display());
    Ok(())
}
