//! `occwalk build`, `occwalk lookup` and `occwalk rules` commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use occwalk_crosswalk::{CrosswalkConfig, CrosswalkInput, RuleBase};

use crate::document::read_pages;
use crate::exit_codes::{crosswalk_exit_code, EXIT_EMPTY_EXTRACTION, EXIT_ERROR};
use crate::export::write_crosswalk_file;
use crate::report::format_report;
use crate::CliError;

pub const DEFAULT_OUTPUT: &str = "nco_onet_crosswalk.csv";

#[derive(Subcommand)]
pub enum RulesCommands {
    /// Parse and validate a rule config without running
    #[command(after_help = "\
Examples:
  occwalk rules validate rules.toml")]
    Validate {
        /// Path to the rules TOML file
        config: PathBuf,
    },
}

fn engine_err(err: occwalk_crosswalk::CrosswalkError) -> CliError {
    CliError { code: crosswalk_exit_code(&err), message: err.to_string(), hint: None }
}

/// Load a rule config, or the defaults when no path is given.
fn load_config(path: Option<&Path>) -> Result<CrosswalkConfig, CliError> {
    let Some(path) = path else {
        return Ok(CrosswalkConfig::default());
    };
    if !path.exists() {
        return Err(CliError::args(format!("Config not found: {}", path.display())));
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read config: {e}")))?;
    CrosswalkConfig::from_toml(&text).map_err(|e| engine_err(e).with_hint(format!("in {}", path.display())))
}

pub struct BuildArgs {
    pub source: PathBuf,
    pub target: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub shards: Option<usize>,
    pub quiet: bool,
}

pub fn cmd_build(args: BuildArgs) -> Result<(), CliError> {
    // Both inputs are checked before any extraction work.
    for (label, path) in [("NCO", &args.source), ("O*NET", &args.target)] {
        if !path.exists() {
            return Err(CliError::args(format!("{label} file not found: {}", path.display())));
        }
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(shards) = args.shards {
        if shards == 0 {
            return Err(CliError::args("--shards must be at least 1"));
        }
        config.assemble.shards = shards;
    }

    log::info!("Extracting NCO data from {}", args.source.display());
    let source_pages = read_pages(&args.source)?;
    log::info!("Extracting O*NET data from {}", args.target.display());
    let target_pages = read_pages(&args.target)?;

    let input = CrosswalkInput { source_pages, target_pages };
    let result = occwalk_crosswalk::run(&config, &input).map_err(engine_err)?;

    write_crosswalk_file(&args.output, &result.entries)?;
    if !args.quiet {
        eprintln!("Mapping saved to: {}", args.output.display());
    }

    if let Some(ref path) = args.json {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError { code: EXIT_ERROR, message: format!("JSON serialization error: {e}"), hint: None })?;
        std::fs::write(path, json_str)
            .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;
        if !args.quiet {
            eprintln!("wrote {}", path.display());
        }
    }

    if !args.quiet {
        eprint!("{}", format_report(&result));
    }

    if result.meta.source_records == 0 {
        return Err(CliError {
            code: EXIT_EMPTY_EXTRACTION,
            message: format!("no NCO records extracted from {}", args.source.display()),
            hint: Some("is the PDF scanned/image-only? the crosswalk was written with a header only".into()),
        });
    }
    Ok(())
}

pub fn cmd_lookup(title: String, code: String, config: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    if code.trim().is_empty() {
        return Err(CliError::args("--code must not be empty"));
    }
    let config = load_config(config.as_deref())?;
    let owned;
    let rules: &RuleBase = if config.uses_builtin_rules() {
        RuleBase::builtin()
    } else {
        owned = config.rule_base();
        &owned
    };

    let outcome = occwalk_crosswalk::find_match(rules, &title, code.trim()).map_err(engine_err)?;

    if json {
        let value = serde_json::json!({
            "title": title,
            "code": code.trim(),
            "target_code": outcome.code(),
            "target_title": outcome.title(),
            "score": outcome.score(),
            "tier": outcome.tier,
        });
        let out = serde_json::to_string_pretty(&value)
            .map_err(|e| CliError { code: EXIT_ERROR, message: format!("JSON serialization error: {e}"), hint: None })?;
        println!("{out}");
    } else if outcome.target.is_some() {
        println!("{}\t{}\t{}\t{}", outcome.code(), outcome.title(), outcome.score(), outcome.tier);
    } else {
        println!("\t\t0\t{}", outcome.tier);
    }
    Ok(())
}

pub fn cmd_rules(cmd: RulesCommands) -> Result<(), CliError> {
    match cmd {
        RulesCommands::Validate { config } => {
            let parsed = load_config(Some(&config))?;
            let sizes = parsed.rule_base().sizes();
            println!(
                "valid: {} keywords, {} prefixes, {} divisions",
                sizes.keywords, sizes.prefixes, sizes.divisions
            );
            Ok(())
        }
    }
}
