use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use sundae::{
    display::{format_token, render_error},
    lexer::{lexer::tokenize, tokens::TokenKind},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Tokenizes a sundae source file and prints one line per token.
#[derive(Parser, Debug)]
#[command(name = "sundae", version, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, env = "SUNDAE_VERBOSE")]
    verbose: bool,

    /// Disable color in log output
    #[arg(long, env = "SUNDAE_NO_COLOR")]
    no_color: bool,

    /// Leave comment tokens out of the dump
    #[arg(long)]
    skip_comments: bool,

    /// Source file path
    #[arg(value_parser = path_is_valid_file)]
    source: PathBuf,
}

fn path_is_valid_file(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if path.is_file() {
        Ok(path.to_owned())
    } else {
        bail!("no such file: '{}'", s)
    }
}

fn init_logging(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_env("SUNDAE_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let file = fs::read_to_string(&args.source)
        .with_context(|| format!("Couldn't read file from path `{}`", args.source.display()))?;

    let file_name = args
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();
    let tokens = match tokenize(file.clone(), file_name) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", error);
            eprint!("{}", render_error(&error, &file));
            return Ok(ExitCode::FAILURE);
        }
    };

    info!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    for token in tokens
        .iter()
        .filter(|t| !(args.skip_comments && t.kind == TokenKind::Comment))
    {
        println!("{}", format_token(token));
    }

    debug!("Total time: {:?}", start.elapsed());
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.no_color);

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}
