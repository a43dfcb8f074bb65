use anyhow::{Context, Result};
use std::path::Path;

/// Load candidates from a plain-text wordlist, one per line.
///
/// Leading/trailing whitespace is trimmed and blank lines are skipped; the
/// file order is preserved. A missing or unreadable file is a fatal
/// configuration error.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Configuration error: cannot read wordlist '{}'",
            path.display()
        )
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
#[path = "wordlist_test.rs"]
mod wordlist_test;
