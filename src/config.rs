use std::path::{Path, PathBuf};

pub const DEFAULT_SUFFIX: &str = ".zip301";

/// Where compressed output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zip301Config {
    pub suffix: String,
}

impl Default for Zip301Config {
    fn default() -> Self {
        Zip301Config {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl Zip301Config {
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Zip301Config {
            suffix: suffix.into(),
        }
    }

    /// Output file beside `input`: its name up to the first `.`, plus the
    /// suffix.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let file_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base = file_name.split('.').next().unwrap_or_default();
        input.with_file_name(format!("{base}{}", self.suffix))
    }
}
