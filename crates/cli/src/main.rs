// occwalk CLI - NCO 2015 to O*NET occupation crosswalk

mod crosswalk;
mod document;
mod exit_codes;
mod export;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crosswalk::{BuildArgs, RulesCommands, DEFAULT_OUTPUT};
use exit_codes::{EXIT_IO, EXIT_PARSE, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "occwalk")]
#[command(about = "Map NCO 2015 occupations to O*NET-SOC codes")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Log progress (same as RUST_LOG=info)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the crosswalk CSV from the NCO and O*NET documents
    #[command(after_help = "\
Examples:
  occwalk build --source NCO_2015.pdf --target onet_all_occupations.pdf
  occwalk build -n nco.pdf -o onet.pdf --output crosswalk.csv --json result.json
  occwalk build -n nco.txt -o onet.txt --config rules.toml --shards 4
  RUST_LOG=debug occwalk build -n nco.pdf -o onet.pdf")]
    Build {
        /// NCO 2015 document (.pdf via pdftotext, otherwise text with form-feed page breaks)
        #[arg(long, short = 'n', visible_alias = "nco")]
        source: PathBuf,

        /// O*NET occupation listing (.pdf or text)
        #[arg(long, short = 'o', visible_alias = "onet")]
        target: PathBuf,

        /// Output CSV path
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Rule config (TOML) extending or replacing the built-in tables
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also write the full JSON result to this file
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Worker threads for matching (overrides config)
        #[arg(long)]
        shards: Option<usize>,

        /// Suppress the validation report and status lines
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Resolve a single occupation title
    #[command(after_help = "\
Examples:
  occwalk lookup 'Principal, College of Arts' --code 2319.0100
  occwalk lookup Mycologist --code 2131.0300 --json
  occwalk lookup Advocate --code 2611.0100 --config rules.toml")]
    Lookup {
        /// Occupation title as printed in the NCO document
        title: String,

        /// NCO 2015 code (NNNN.NNNN)
        #[arg(long)]
        code: String,

        /// Rule config (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Rule config commands
    #[command(subcommand)]
    Rules(RulesCommands),
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\ntarget:  ", env!("TARGET"),
    )
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_PARSE, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Build { source, target, output, config, json, shards, quiet } => {
            crosswalk::cmd_build(BuildArgs { source, target, output, config, json, shards, quiet })
        }
        Commands::Lookup { title, code, config, json } => crosswalk::cmd_lookup(title, code, config, json),
        Commands::Rules(cmd) => crosswalk::cmd_rules(cmd),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}
