//! Command-line interface for sanity-filter.
//!
//! Uses lexopt for minimal binary size overhead (~34KB).

use std::ffi::OsString;
use std::path::PathBuf;

use crate::output::FilterMode;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Filter mode (overrides config).
    pub mode: Option<FilterMode>,
    /// Strip ANSI escape sequences before filtering.
    pub strip_ansi: bool,
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Write output here instead of stdout.
    pub output: Option<PathBuf>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Input files; empty means stdin.
    pub inputs: Vec<Input>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Where captured output is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl From<OsString> for Input {
    fn from(value: OsString) -> Self {
        if value == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(value))
        }
    }
}

impl Args {
    /// Inputs to read, defaulting to stdin.
    pub fn effective_inputs(&self) -> Vec<Input> {
        if self.inputs.is_empty() {
            vec![Input::Stdin]
        } else {
            self.inputs.clone()
        }
    }
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('m') | Long("mode") => {
                let value: String = parser.value()?.parse()?;
                result.mode = Some(
                    value
                        .parse()
                        .map_err(|_| ArgsError::InvalidValue("mode", value))?,
                );
            }
            Short('a') | Long("strip-ansi") => {
                result.strip_ansi = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('o') | Long("output") => {
                result.output = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) => {
                result.inputs.push(Input::from(val));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"sanity-filter {version}
Normalize captured command output before comparing it with expected output

USAGE:
    sanity-filter [OPTIONS] [FILE]...

ARGS:
    [FILE]...               Captured output to normalize ('-' or none: stdin)

OPTIONS:
    -m, --mode <MODE>       paths: mask paths before 'hashes to'
                            full: also strip X11 DISPLAY messages [default: full]
    -a, --strip-ansi        Strip ANSI escape sequences first
    -c, --config <FILE>     Path to configuration file (JSON)
    -o, --output <FILE>     Write to FILE instead of stdout
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    SANITY_FILTER_MODE        Filter mode (overrides config)
    SANITY_FILTER_STRIP_ANSI  Strip ANSI codes: true/false (overrides config)
    SANITY_FILTER_LOG_LEVEL   Log level (overrides config)
    RUST_LOG                  Alternative log level setting

EXAMPLES:
    # Normalize a captured run
    ./slink-test 2>&1 | sanity-filter > actual.txt

    # Mask paths only, from a file
    sanity-filter -m paths capture.txt

    # Raw terminal capture with colors
    sanity-filter --strip-ansi -o actual.txt session.log
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("sanity-filter {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<OsString> {
        std::iter::once("sanity-filter")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_default_args() {
        let result = parse_args_from(args(&[])).unwrap();
        assert!(result.mode.is_none());
        assert!(!result.strip_ansi);
        assert!(result.inputs.is_empty());
        assert_eq!(result.effective_inputs(), vec![Input::Stdin]);
    }

    #[test]
    fn test_mode() {
        let result = parse_args_from(args(&["-m", "paths"])).unwrap();
        assert_eq!(result.mode, Some(FilterMode::Paths));

        let result = parse_args_from(args(&["--mode", "full"])).unwrap();
        assert_eq!(result.mode, Some(FilterMode::Full));
    }

    #[test]
    fn test_invalid_mode() {
        let err = parse_args_from(args(&["-m", "everything"])).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidValue("mode", _)));
        assert!(err.to_string().contains("everything"));
    }

    #[test]
    fn test_missing_mode_value() {
        let result = parse_args_from(args(&["--mode"]));
        assert!(matches!(result, Err(ArgsError::Lexopt(_))));
    }

    #[test]
    fn test_strip_ansi() {
        let result = parse_args_from(args(&["-a"])).unwrap();
        assert!(result.strip_ansi);

        let result = parse_args_from(args(&["--strip-ansi"])).unwrap();
        assert!(result.strip_ansi);
    }

    #[test]
    fn test_config_and_output() {
        let result =
            parse_args_from(args(&["-c", "/etc/filter.json", "-o", "actual.txt"])).unwrap();
        assert_eq!(result.config, Some(PathBuf::from("/etc/filter.json")));
        assert_eq!(result.output, Some(PathBuf::from("actual.txt")));
    }

    #[test]
    fn test_inputs() {
        let result = parse_args_from(args(&["run1.txt", "-", "run2.txt"])).unwrap();
        assert_eq!(
            result.inputs,
            vec![
                Input::File(PathBuf::from("run1.txt")),
                Input::Stdin,
                Input::File(PathBuf::from("run2.txt")),
            ]
        );
        assert_eq!(result.effective_inputs(), result.inputs);
    }

    #[test]
    fn test_help_flag() {
        let result = parse_args_from(args(&["-h"])).unwrap();
        assert!(result.help);

        let result = parse_args_from(args(&["--help"])).unwrap();
        assert!(result.help);
    }

    #[test]
    fn test_version_flag() {
        let result = parse_args_from(args(&["-V"])).unwrap();
        assert!(result.version);
    }

    #[test]
    fn test_log_level() {
        let result = parse_args_from(args(&["-l", "debug"])).unwrap();
        assert_eq!(result.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_unknown_option() {
        let result = parse_args_from(args(&["--no-such-flag"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_combined_options() {
        let result = parse_args_from(args(&[
            "-m",
            "paths",
            "-a",
            "-l",
            "trace",
            "-o",
            "out.txt",
            "capture.txt",
        ]))
        .unwrap();

        assert_eq!(result.mode, Some(FilterMode::Paths));
        assert!(result.strip_ansi);
        assert_eq!(result.log_level, Some("trace".to_string()));
        assert_eq!(result.output, Some(PathBuf::from("out.txt")));
        assert_eq!(result.inputs, vec![Input::File(PathBuf::from("capture.txt"))]);
    }
}
