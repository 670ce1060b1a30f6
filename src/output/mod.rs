//! Captured output normalization.
//!
//! This module turns raw captured output into text that is stable across
//! runs, users and terminals:
//! - path masking in front of `hashes to`
//! - removal of X11 forwarding `DISPLAY` messages
//! - optional ANSI escape code stripping
//!
//! # Example
//!
//! ```
//! use sanity_filter::output::{filter_sunet, strip_x11_forwarding_messages, OutputSanitizer};
//!
//! assert_eq!(
//!     filter_sunet("/usr/class/alice/in.txt hashes to 5e1f"),
//!     "<path> hashes to 5e1f"
//! );
//! assert_eq!(strip_x11_forwarding_messages("DISPLAY=:0\nok\n"), "ok\n");
//!
//! let clean = OutputSanitizer::strip_ansi(b"\x1b[31mRed text\x1b[0m");
//! assert_eq!(clean, "Red text");
//! ```

mod normalizer;
mod sanitizer;

pub use normalizer::{
    filter_sunet, strip_x11_forwarding_messages, FilterMode, OutputNormalizer, PATH_PLACEHOLDER,
};
pub use sanitizer::OutputSanitizer;
