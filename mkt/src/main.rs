//! Mkt CLI - Command-line tools for the Monkey lexer.
//!
//! This is the main entry point for the mkt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::PrintOptions, run_config, run_repl, run_tokens, ConfigArgs, ReplArgs, TokensArgs,
};
use config::{Config, OutputFormat};
use error::{MktError, Result};

/// Mkt - Command-line tools for the Monkey lexer
///
/// Mkt prints the token stream of Monkey source files, runs an
/// interactive tokenizer, and manages its own configuration.
#[derive(Parser, Debug)]
#[command(name = "mkt")]
#[command(author = "Monkey Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line tools for the Monkey lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the mkt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of Monkey source files
    ///
    /// Reads each file (or standard input) and prints one token per line.
    /// Illegal bytes are reported on stderr and make the command fail.
    Tokens(TokensCommand),

    /// Start an interactive tokenizer
    ///
    /// Each line typed is lexed and its tokens printed.
    Repl(ReplCommand),

    /// Show or write the effective configuration
    Config(ConfigCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files (`-` or none for standard input)
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix each token with its line:column
    #[arg(short, long)]
    spans: bool,

    /// Exit successfully even if illegal characters were found
    #[arg(long)]
    allow_illegal: bool,
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug)]
struct ReplCommand {
    /// Prompt string (default: from config)
    #[arg(short, long)]
    prompt: Option<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix each token with its line:column
    #[arg(short, long)]
    spans: bool,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this path instead of printing it
    #[arg(short, long)]
    write: Option<PathBuf>,
}

/// Main entry point for the mkt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Execute the selected command
    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    debug!(?config, "effective configuration");
    Ok(config)
}

/// Merge command-line output flags over the configured defaults.
fn print_options(format: Option<OutputFormat>, spans: bool, config: &Config) -> PrintOptions {
    PrintOptions {
        format: format.unwrap_or(config.output.format),
        spans: spans || config.output.spans,
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, &config),
        Commands::Repl(args) => execute_repl(args, &config),
        Commands::Config(args) => run_config(ConfigArgs { write: args.write }, &config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: &Config) -> Result<()> {
    let tokens_args = TokensArgs {
        verbose,
        files: args.files,
        options: print_options(args.format, args.spans, config),
        allow_illegal: args.allow_illegal,
    };
    run_tokens(tokens_args)
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, config: &Config) -> Result<()> {
    let repl_args = ReplArgs {
        prompt: args.prompt.unwrap_or_else(|| config.repl.prompt.clone()),
        options: print_options(args.format, args.spans, config),
    };
    run_repl(repl_args)
}
