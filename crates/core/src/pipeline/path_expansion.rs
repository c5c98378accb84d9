use std::collections::HashSet;
use std::path::PathBuf;

use crate::shared::error::RoundError;

/// Expands each argument as a glob pattern into the files it names.
///
/// Matches keep argument order and are de-duplicated so no two workers
/// write the same output. Directories and unreadable entries are skipped.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, RoundError> {
    if patterns.is_empty() {
        return Err(RoundError::MissingPaths);
    }

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let entries = glob::glob(pattern).map_err(|source| RoundError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        let mut matched = 0usize;
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("Skipping {}: {}", e.path().display(), e.error());
                    continue;
                }
            };
            matched += 1;
            if path.is_dir() {
                log::warn!("Skipping directory {}", path.display());
                continue;
            }
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }

        if matched == 0 {
            log::warn!("No files match '{pattern}'");
        }
    }

    if files.is_empty() {
        return Err(RoundError::NoMatches);
    }
    Ok(files)
}
