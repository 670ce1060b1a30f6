//! sanity-filter binary entry point.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use sanity_filter::cli::{self, Args, Input};
use sanity_filter::{logging, Config, OutputNormalizer};
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'sanity-filter --help' for more information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> sanity_filter::Result<()> {
    let config = Config::load(args)?;

    // Best effort; a subscriber may already be installed.
    let _ = logging::init_with_level(config.log_filter());

    info!("sanity-filter v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "configuration loaded");

    let normalizer = config.normalizer();

    let mut out: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for input in args.effective_inputs() {
        filter_input(&normalizer, &input, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn filter_input(
    normalizer: &OutputNormalizer,
    input: &Input,
    out: &mut dyn Write,
) -> sanity_filter::Result<()> {
    let mut raw = Vec::new();
    match input {
        Input::Stdin => {
            io::stdin().lock().read_to_end(&mut raw)?;
        }
        Input::File(path) => {
            debug!(path = %path.display(), "reading capture");
            File::open(path)?.read_to_end(&mut raw)?;
        }
    }

    let normalized = normalizer.normalize_bytes(&raw);
    out.write_all(normalized.as_bytes())?;
    Ok(())
}
