//! Normalization of captured output before fixture comparison.
//!
//! Two rewrites make otherwise identical runs compare equal:
//! the path in front of `hashes to` is masked, and `DISPLAY` noise left
//! behind by X11 forwarding is removed.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::OutputSanitizer;
use crate::error::SanityFilterError;

/// Placeholder that replaces everything before `hashes to` on a line.
pub const PATH_PLACEHOLDER: &str = "<path> hashes to";

// `.` never crosses a newline, so each match stays on one line.
static HASHES_TO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".* hashes to").expect("Invalid regex pattern"));

// From the marker through end of line, newline included when present.
static DISPLAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"DISPLAY.*\n?").expect("Invalid regex pattern"));

/// Mask the path on every line that contains ` hashes to`.
///
/// The greedy match extends to the last ` hashes to` on the line, so
/// `foo/bar hashes to 123` becomes `<path> hashes to 123`. Input without
/// the phrase is returned unchanged.
pub fn filter_sunet(input: &str) -> String {
    HASHES_TO_PATTERN
        .replace_all(input, NoExpand(PATH_PLACEHOLDER))
        .into_owned()
}

/// Mask paths with [`filter_sunet`], then delete `DISPLAY` spans.
///
/// Each span runs from `DISPLAY` to the end of its line and takes the
/// newline with it. A final line without a newline is removed the same way.
pub fn strip_x11_forwarding_messages(input: &str) -> String {
    let masked = filter_sunet(input);
    DISPLAY_PATTERN.replace_all(&masked, "").into_owned()
}

/// Which normalizations to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Only mask paths before `hashes to`.
    Paths,
    /// Mask paths and strip X11 forwarding messages.
    #[default]
    Full,
}

impl FilterMode {
    /// Name used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Paths => "paths",
            FilterMode::Full => "full",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = SanityFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paths" => Ok(FilterMode::Paths),
            "full" => Ok(FilterMode::Full),
            _ => Err(SanityFilterError::InvalidMode(s.to_string())),
        }
    }
}

/// Configured normalization pipeline.
///
/// # Example
///
/// ```
/// use sanity_filter::output::{FilterMode, OutputNormalizer};
///
/// let normalizer = OutputNormalizer::new(FilterMode::Full);
/// let out = normalizer.normalize("DISPLAY=:0\n/tmp/x hashes to 42\n");
/// assert_eq!(out, "<path> hashes to 42\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputNormalizer {
    mode: FilterMode,
    strip_ansi: bool,
}

impl OutputNormalizer {
    /// Create a normalizer for the given mode, ANSI stripping off.
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            strip_ansi: false,
        }
    }

    /// Strip ANSI escape sequences before the text rewrites.
    pub fn with_strip_ansi(mut self, strip_ansi: bool) -> Self {
        self.strip_ansi = strip_ansi;
        self
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn strips_ansi(&self) -> bool {
        self.strip_ansi
    }

    /// Normalize captured text.
    pub fn normalize(&self, input: &str) -> String {
        let output = if self.strip_ansi {
            self.apply(&OutputSanitizer::strip_ansi_str(input))
        } else {
            self.apply(input)
        };
        self.trace(input.len(), output)
    }

    /// Normalize raw captured bytes. Invalid UTF-8 is replaced lossily.
    pub fn normalize_bytes(&self, input: &[u8]) -> String {
        let output = if self.strip_ansi {
            self.apply(&OutputSanitizer::strip_ansi(input))
        } else {
            self.apply(&String::from_utf8_lossy(input))
        };
        self.trace(input.len(), output)
    }

    fn apply(&self, input: &str) -> String {
        match self.mode {
            FilterMode::Paths => filter_sunet(input),
            FilterMode::Full => strip_x11_forwarding_messages(input),
        }
    }

    fn trace(&self, input_len: usize, output: String) -> String {
        debug!(
            mode = %self.mode,
            strip_ansi = self.strip_ansi,
            input_len,
            output_len = output.len(),
            "normalized output"
        );
        output
    }
}
