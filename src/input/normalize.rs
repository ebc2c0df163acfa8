// src/input/normalize.rs
// =============================================================================
// Reads the comma-separated input file and builds one URL per row.
//
// Each row's fields are joined directly (no separator) into a host token and
// prefixed with "https://". Nothing is validated here: a malformed host makes
// a malformed URL, which simply fails its probe later.
// =============================================================================

use super::InputError;
use std::path::Path;
use tracing::{info, warn};

const SCHEME_PREFIX: &str = "https://";

// Builds the URL for one input row
//
// Parameters:
//   fields: the row's fields, in order
//
// Returns: Some("https://<host-token>"), or None when every field is blank
//
// Example:
//   ["example.com"]        -> Some("https://example.com")
//   [" example", ".org "]  -> Some("https://example.org")
//   ["", "  "]             -> None
pub fn normalize_row<'a, I>(fields: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let host: String = fields.into_iter().map(str::trim).collect();

    if host.is_empty() {
        None
    } else {
        Some(format!("{}{}", SCHEME_PREFIX, host))
    }
}

// Loads every URL from a CSV file, in row order
//
// The file has no header row and rows may have any number of fields.
// Rows that normalize to nothing are skipped with a warning.
pub fn load_urls(path: &Path) -> Result<Vec<String>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut urls = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|source| InputError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        match normalize_row(record.iter()) {
            Some(url) => urls.push(url),
            None => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                warn!(line, "skipping row with an empty host");
            }
        }
    }

    info!("loaded {} url(s) from {}", urls.len(), path.display());
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join("sites.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_single_field_row() {
        assert_eq!(
            normalize_row(["example.com"]),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_fields_are_joined_without_separator() {
        assert_eq!(
            normalize_row(["www.", "example", ".com"]),
            Some("https://www.example.com".to_string())
        );
    }

    #[test]
    fn test_no_brackets_or_quotes_introduced() {
        let url = normalize_row(["rust-lang.org", "/learn"]).unwrap();
        assert!(url.starts_with("https://"));
        assert!(!url.contains(|c: char| matches!(c, '[' | ']' | '\'' | '"')));
    }

    #[test]
    fn test_blank_row_is_none() {
        assert_eq!(normalize_row(["", "   "]), None);
        assert_eq!(normalize_row(Vec::<&str>::new()), None);
    }

    #[test]
    fn test_load_urls_in_row_order() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, b"example.com\ndoesnotexist.invalid\n");

        let urls = load_urls(&path).unwrap();
        assert_eq!(
            urls,
            vec!["https://example.com", "https://doesnotexist.invalid"]
        );
    }

    #[test]
    fn test_load_urls_skips_empty_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, b"a.com\n,,\n\nb.com,\n");

        let urls = load_urls(&path).unwrap();
        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_load_urls_keeps_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, b"a.com\na.com\n");

        assert_eq!(load_urls(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_file_gives_no_urls() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, b"");

        assert!(load_urls(&path).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, b"good.com\n\xff\xfe.com\n");

        let err = load_urls(&path).unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = TempDir::new().unwrap();
        let err = load_urls(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
    }
}
