use std::path::{Path, PathBuf};

use crate::shared::constants::DEFAULT_SUFFIX;
use crate::shared::error::RoundError;

/// Where the rounded version of an input file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputNaming {
    /// Replace the input file.
    Overwrite,
    /// A single explicit destination; only valid for one input.
    Explicit(PathBuf),
    /// `<dir>/<prefix><stem><suffix>.<ext>` next to the input.
    Affixed { prefix: String, suffix: String },
}

impl OutputNaming {
    /// Overwrite takes precedence over an explicit output, which takes
    /// precedence over prefix/suffix naming.
    pub fn from_flags(
        overwrite: bool,
        output: Option<PathBuf>,
        prefix: String,
        suffix: String,
    ) -> Self {
        if overwrite {
            OutputNaming::Overwrite
        } else if let Some(path) = output {
            OutputNaming::Explicit(path)
        } else {
            OutputNaming::Affixed { prefix, suffix }
        }
    }

    pub fn resolve(&self, input: &Path) -> PathBuf {
        match self {
            OutputNaming::Overwrite => input.to_path_buf(),
            OutputNaming::Explicit(path) => path.clone(),
            OutputNaming::Affixed { prefix, suffix } => affixed_path(input, prefix, suffix),
        }
    }
}

impl Default for OutputNaming {
    fn default() -> Self {
        OutputNaming::Affixed {
            prefix: String::new(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// One input file and the path its result is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Pairs every input with its output path.
pub fn plan_jobs(inputs: Vec<PathBuf>, naming: &OutputNaming) -> Result<Vec<RoundJob>, RoundError> {
    if let OutputNaming::Explicit(path) = naming {
        if inputs.len() > 1 {
            return Err(RoundError::AmbiguousOutput(path.clone(), inputs.len()));
        }
    }
    Ok(inputs
        .into_iter()
        .map(|input| {
            let output = naming.resolve(&input);
            RoundJob { input, output }
        })
        .collect())
}

fn affixed_path(input: &Path, prefix: &str, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{prefix}{stem}{suffix}");
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}
