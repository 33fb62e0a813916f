//! Sprout CLI
//!
//! Tokenizes and parses a Sprout program given on the command line, then
//! dumps the tokens and the declaration trees.

use std::process::ExitCode;

use clap::Parser as ClapParser;
use log::{debug, LevelFilter};

use sprout_lang::printer::{format_tokens, format_tree};
use sprout_lang::{run, Diagnostic, Frontend, Recovery, SproutError, VERSION};

const DEMO_SOURCE: &str = "int sum = a * b; int total = sum + 10;";

#[derive(Debug, ClapParser)]
#[command(name = "sprout")]
#[command(version = VERSION)]
#[command(about = "Tokenize and parse Sprout declarations", long_about = None)]
struct Cli {
    /// Program text; the built-in demo program is used when omitted
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    /// Show tokenization output only (lexer only)
    #[arg(short, long)]
    tokens_only: bool,

    /// Stop at the first malformed declaration instead of skipping it
    #[arg(long)]
    halt_on_error: bool,

    /// Log level; falls back to RUST_LOG when omitted
    #[arg(long, value_name = "LEVEL")]
    log: Option<LevelFilter>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log);
    debug!("starting sprout with args {cli:?}");

    let source = cli.source.as_deref().unwrap_or(DEMO_SOURCE);
    let recovery = if cli.halt_on_error {
        Recovery::Halt
    } else {
        Recovery::Synchronize
    };

    let frontend = run(source, Some("<input>"), recovery);
    let (output, diagnostics) = report(&frontend, cli.tokens_only);

    print!("{}", output);
    for error in &diagnostics {
        eprint!("{}", Diagnostic::with_source(error, source));
    }

    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Build the stdout text and pick the diagnostics worth reporting.
///
/// With `tokens_only` the parse tree and parser diagnostics are left out.
/// The run succeeded when the returned diagnostics are empty.
fn report(frontend: &Frontend, tokens_only: bool) -> (String, Vec<&SproutError>) {
    let mut output = String::from("Tokens:\n");
    output.push_str(&format_tokens(&frontend.tokens));

    if !tokens_only {
        if frontend.declarations.is_empty() {
            output.push_str("Parsing failed.\n");
        } else {
            output.push_str("Parsing completed successfully.\n");
            output.push_str("Parse Tree:\n");
            output.push_str(&format_tree(&frontend.declarations));
        }
    }

    let diagnostics = frontend
        .diagnostics
        .iter()
        .filter(|e| !tokens_only || matches!(e, SproutError::UnknownCharacter { .. }))
        .collect();
    (output, diagnostics)
}

fn init_logging(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}
