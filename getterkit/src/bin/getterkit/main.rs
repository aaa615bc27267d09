mod commands;
mod discovery;
mod examples;
mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Command, CommandFactory, FromArgMatches, Parser, Subcommand};

use commands::check::{CheckArgs, handle_check};
use commands::name::{NameArgs, handle_name};
use getterkit::config::CONFIG_FILE_NAME;
use getterkit::{GetterConfig, GetterFieldProcessor};
use output::{OutputFormat, OutputManager, OutputOptions};

const HELP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Cyan.on_default().bold())
    .usage(AnsiColor::BrightBlue.on_default().bold())
    .literal(AnsiColor::Magenta.on_default())
    .placeholder(AnsiColor::BrightBlack.on_default())
    .error(AnsiColor::Red.on_default().bold());

const ENVIRONMENT_HELP: &str = "\
Environment:
  RUST_LOG           Log filter, e.g. getterkit=debug
  GETTERKIT_CONFIG   Path to a getterkit.toml overriding discovery

Run 'getterkit <command> --help' for examples.";

/// Validate annotated fields and preview the getters they generate
#[derive(Parser)]
#[command(name = "getterkit", version, styles = HELP_STYLES)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// Configuration file (defaults to ./getterkit.toml when present)
    #[arg(long, env = "GETTERKIT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print only errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Trace which files are loaded and which fields were read
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the getter generation pass over class model files
    Check(CheckArgs),

    /// Show the getter name and collision candidates for a field
    Name(NameArgs),
}

/// The derived command with environment notes and per-subcommand examples attached.
fn cli_command() -> Command {
    let mut command = Cli::command().after_long_help(ENVIRONMENT_HELP);
    for (name, groups) in examples::COMMAND_EXAMPLES {
        if let Some(subcommand) = command.find_subcommand_mut(name) {
            *subcommand = subcommand.clone().after_long_help(examples::render(groups));
        }
    }
    command
}

fn parse_cli() -> Cli {
    let matches = cli_command().get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

fn main() {
    env_logger::init();

    let cli = parse_cli();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let output = OutputManager::new(OutputOptions {
        format: cli.output,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });

    if let Err(err) = run(cli.command, cli.config.as_deref(), &output) {
        output.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn load_config(explicit: Option<&Path>) -> Result<GetterConfig> {
    if let Some(path) = explicit {
        return GetterConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()));
    }
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    GetterConfig::discover(&cwd).with_context(|| format!("Failed to load {CONFIG_FILE_NAME}"))
}

fn run(command: Commands, config: Option<&Path>, output: &OutputManager) -> Result<()> {
    let config = load_config(config)?;
    if !config.boolean_carriers.is_empty() {
        output.verbose(&format!("Boolean carriers: {}", config.boolean_carriers.join(", ")));
    }
    let processor = GetterFieldProcessor::new(config);

    match command {
        Commands::Check(args) => handle_check(args, &processor, output),
        Commands::Name(args) => handle_name(args, &processor, output),
    }
}
