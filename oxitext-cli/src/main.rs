//! OxiText CLI - LZW text compression
//!
//! A Pure Rust filter that compresses standard input into a stream of 12-bit
//! LZW codewords, or expands such a stream back into the original bytes.

mod commands;

use clap::Parser;
use commands::{Mode, cmd_compress, cmd_expand, parse_mode};
use oxitext_lzw::LzwConfig;
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "oxitext")]
#[command(author, version, about = "OxiText - LZW text compressor")]
#[command(long_about = "
OxiText compresses text with 12-bit LZW codes, reading standard input
and writing standard output.

Examples:
  oxitext - < alice.txt > alice.lzw
  oxitext + < alice.lzw > alice.txt

Set RUST_LOG (e.g. RUST_LOG=debug) or pass --verbose for statistics on stderr.
")]
struct Cli {
    /// '-' to compress, '+' to expand
    #[arg(value_parser = parse_mode)]
    mode: Mode,

    /// Log run statistics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "oxitext=debug,oxitext_lzw=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the data stream
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(mode: Mode) -> Result<(), Box<dyn std::error::Error>> {
    let config = LzwConfig::DEFAULT;
    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());

    match mode {
        Mode::Compress => cmd_compress(config, input, output),
        Mode::Expand => cmd_expand(config, input, output),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.mode) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
