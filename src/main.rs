//! Command-line interface for the Lufa token tooling
//!
//! Usage:
//!   lufa_tokens validate [--config `<file>`] [--tokens `<dir>`]... [--json] [--strict] [`<css>`...]
//!   lufa_tokens generate `<token_dir>` [--output `<file>`]
//!   lufa_tokens resolve `<css>` `<name>`
//!   lufa_tokens groups `<css>` [--json]
use std::path::{Path, PathBuf};
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use log::{error, info, LevelFilter};

use lufa_tokens::config::TokensConfig;
use lufa_tokens::css::parser::{build_property_map, parse_css_properties};
use lufa_tokens::css::var_resolver::{resolve_with_reason, UnresolvedReason, VariableResolutionStatus};
use lufa_tokens::error::{IoContext, JsonContext, TokensResult};
use lufa_tokens::logging;
use lufa_tokens::tokens::definitions::load_token_dir;
use lufa_tokens::tokens::generator::generate_css;
use lufa_tokens::tokens::level::group_properties_by_level;
use lufa_tokens::tokens::name::{css_var_name_from_token, TokenLevel};
use lufa_tokens::validation::validate_project;

/// Exit code when validation finds failures
const EXIT_VALIDATION_FAILED: i32 = 1;
/// Exit code when the tool itself cannot run
const EXIT_ERROR: i32 = 2;

fn cli() -> Command {
    Command::new("lufa_tokens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate and generate Lufa design tokens")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("validate")
                .about("Validate stylesheets and token files")
                .arg(
                    Arg::new("css")
                        .help("Stylesheets to validate (overrides css_files from the config)")
                        .num_args(0..)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file (default: lufa-tokens.yaml if present)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("tokens")
                        .long("tokens")
                        .short('t')
                        .help("Token directory (repeatable, overrides token_dirs from the config)")
                        .action(ArgAction::Append)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the report as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail on warnings too")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate CSS custom properties from token files")
                .arg(
                    Arg::new("token_dir")
                        .help("Directory of JSON token files")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve one property of a stylesheet to its literal value")
                .arg(
                    Arg::new("css")
                        .help("Stylesheet")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("name")
                        .help("Property name (--lufa-core-brand-primary) or token name (core.brand.primary)")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("groups")
                .about("List the properties of a stylesheet by token level")
                .arg(
                    Arg::new("css")
                        .help("Stylesheet")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the groups as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("validate", validate_matches)) => handle_validate_command(validate_matches).await,
        Some(("generate", generate_matches)) => handle_generate_command(generate_matches).await,
        Some(("resolve", resolve_matches)) => handle_resolve_command(resolve_matches).await,
        Some(("groups", groups_matches)) => handle_groups_command(groups_matches).await,
        _ => unreachable!(),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            error!("{}", e);
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(EXIT_ERROR);
        }
    }
}

fn init_logging(level: LevelFilter) {
    // Logging is best effort; the tool still works without a log file
    if let Err(e) = logging::init_logger(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Handle the validate command
async fn handle_validate_command(matches: &ArgMatches) -> TokensResult<i32> {
    let config_path = matches.get_one::<PathBuf>("config");
    let mut config = TokensConfig::load_or_default(config_path.map(PathBuf::as_path)).await?;

    init_logging(config.log_level_filter()?);
    info!("Lufa token validation starting");

    if let Some(css_files) = matches.get_many::<PathBuf>("css") {
        config.css_files = css_files.cloned().collect();
    }
    if let Some(token_dirs) = matches.get_many::<PathBuf>("tokens") {
        config.token_dirs = token_dirs.cloned().collect();
    }
    if matches.get_flag("strict") {
        config.strict = true;
    }

    if config.css_files.is_empty() && config.token_dirs.is_empty() {
        eprintln!("Nothing to validate: pass stylesheets, --tokens, or a config file");
        return Ok(EXIT_ERROR);
    }

    let report = validate_project(&config).await?;

    if matches.get_flag("json") {
        println!("{}", report.to_json()?);
    } else {
        report.print_summary(config.max_failures_per_category);
    }

    if report.is_failure(config.strict) {
        Ok(EXIT_VALIDATION_FAILED)
    } else {
        Ok(0)
    }
}

/// Handle the generate command
async fn handle_generate_command(matches: &ArgMatches) -> TokensResult<i32> {
    init_logging(LevelFilter::Info);

    let token_dir = matches.get_one::<PathBuf>("token_dir").expect("required argument");
    let definitions = load_token_dir(token_dir).await?;
    let css = generate_css(&definitions);

    match matches.get_one::<PathBuf>("output") {
        Some(output) => {
            tokio::fs::write(output, css)
                .await
                .with_io_context(&format!("Failed to write {}", output.display()))?;
            info!("Wrote {} custom properties to {}", definitions.len(), output.display());
            eprintln!("{} {} tokens -> {}", "✓".green(), definitions.len(), output.display());
        }
        None => print!("{}", css),
    }

    Ok(0)
}

/// Handle the resolve command
async fn handle_resolve_command(matches: &ArgMatches) -> TokensResult<i32> {
    init_logging(LevelFilter::Info);

    let css_path = matches.get_one::<PathBuf>("css").expect("required argument");
    let name = matches.get_one::<String>("name").expect("required argument");
    let css_var_name = if name.starts_with("--") {
        name.clone()
    } else {
        css_var_name_from_token(name)
    };

    let text = read_stylesheet(css_path).await?;
    let property_map = build_property_map(&parse_css_properties(&text));

    match resolve_with_reason(&format!("var({})", css_var_name), &property_map) {
        VariableResolutionStatus::Resolved(value) => {
            println!("{}", value);
            Ok(0)
        }
        VariableResolutionStatus::Unresolved(UnresolvedReason::Undefined(missing)) => {
            eprintln!("{} {} is not defined", "✗".red(), missing);
            Ok(EXIT_VALIDATION_FAILED)
        }
        VariableResolutionStatus::Unresolved(UnresolvedReason::Circular) => {
            eprintln!("{} {} is part of a circular reference", "✗".red(), css_var_name);
            Ok(EXIT_VALIDATION_FAILED)
        }
    }
}

/// Handle the groups command
async fn handle_groups_command(matches: &ArgMatches) -> TokensResult<i32> {
    init_logging(LevelFilter::Info);

    let css_path = matches.get_one::<PathBuf>("css").expect("required argument");
    let text = read_stylesheet(css_path).await?;
    let groups = group_properties_by_level(&parse_css_properties(&text));

    if matches.get_flag("json") {
        let json = serde_json::to_string_pretty(&groups).with_json_context("Failed to serialize groups")?;
        println!("{}", json);
        return Ok(0);
    }

    for level in TokenLevel::ALL {
        let properties = groups.get(level);
        println!("{} ({})", level.to_string().bold(), properties.len());
        for property in properties {
            println!("  {:>5}  {}: {}", property.line, property.name.cyan(), property.value);
        }
    }

    Ok(0)
}

async fn read_stylesheet(path: &Path) -> TokensResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_io_context(&format!("Failed to read stylesheet {}", path.display()))
}
