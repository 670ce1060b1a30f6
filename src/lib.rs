//! # sanity-filter
//!
//! Normalizes captured command output before it is compared with the
//! expected output of a sanity check.
//!
//! Two things make otherwise identical runs differ: the per-user path
//! printed in front of `hashes to`, and `DISPLAY` messages left behind by
//! X11 forwarding. [`filter_sunet`] masks the first,
//! [`strip_x11_forwarding_messages`] masks the first and removes the second.
//!
//! ## Quick Start
//!
//! ```
//! use sanity_filter::{strip_x11_forwarding_messages, FilterMode, OutputNormalizer};
//!
//! let captured = "DISPLAY=localhost:10.0\n/usr/class/alice/in.txt hashes to 9c1d\n";
//! assert_eq!(
//!     strip_x11_forwarding_messages(captured),
//!     "<path> hashes to 9c1d\n"
//! );
//!
//! // Raw terminal capture with color codes.
//! let normalizer = OutputNormalizer::new(FilterMode::Full).with_strip_ansi(true);
//! assert_eq!(normalizer.normalize("\x1b[32mok\x1b[0m\nDISPLAY=:0"), "ok\n");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SanityFilterError};
pub use output::{
    filter_sunet, strip_x11_forwarding_messages, FilterMode, OutputNormalizer, OutputSanitizer,
};
