//! ggg-to-dot CLI entry point.
//!
//! Reads GGG DOT from a file or stdin and writes enhanced DOT to stdout.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ggg_dot::{ConvertConfig, Converter, Error, Result, TableSource};

/// Convert simplified GGG DOT into enhanced DOT with HTML labels.
#[derive(Parser, Debug)]
#[command(
    name = "ggg-to-dot",
    version = env!("GGG_DOT_VERSION"),
    about = "Convert simplified GGG DOT into enhanced DOT with HTML labels"
)]
struct Cli {
    /// Input DOT file, or `-` for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Interpretation tables (JSON) to use instead of the built-in ones
    #[arg(short = 't', long = "tables", conflicts_with = "no_defaults")]
    tables: Option<PathBuf>,

    /// Start from empty tables: every attribute is shown as key=value
    #[arg(long = "no-defaults")]
    no_defaults: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ConvertConfig {
        let source = match (&self.tables, self.no_defaults) {
            (Some(path), _) => TableSource::File(path.clone()),
            (None, true) => TableSource::Empty,
            (None, false) => TableSource::Builtin,
        };
        ConvertConfig::with_tables(source)
    }

    fn reads_stdin(&self) -> bool {
        self.input.is_empty() || self.input == "-"
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let tables = cli.config().load_tables()?;
    let mut converter = Converter::new(&tables);
    let stdout = io::stdout().lock();

    if cli.reads_stdin() {
        converter.convert(io::stdin().lock(), stdout)?;
    } else {
        let path = PathBuf::from(&cli.input);
        let file = File::open(&path).map_err(|source| Error::ReadPath { path, source })?;
        converter.convert(BufReader::new(file), stdout)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
