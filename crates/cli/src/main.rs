//! `hexpack` command line tool.

use std::io::{self, Read};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use hexpack_codec::{DEFAULT_MAX_DEPTH, DecodeConfig};
use hexpack_convert::Converter;
use tracing::debug;

/// Payload argument that means "read from stdin".
const STDIN_PAYLOAD: &str = "-";

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// What to do with the payload
    #[arg(value_enum)]
    action: Action,

    /// JSON document to pack, or hex string to parse (`-` reads stdin)
    payload: String,

    /// Pretty-print the JSON produced by `parse`
    #[arg(long)]
    pretty: bool,

    /// Max container nesting accepted when parsing
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Action {
    /// Encode a JSON document as a hex string
    Pack,

    /// Decode a hex string back into a JSON document
    #[value(alias = "unpack")]
    Parse,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(io::stderr)
        .init();

    let payload = read_payload(&cli.payload)?;
    let converter = Converter::new(DecodeConfig::new(cli.max_depth)).with_pretty(cli.pretty);
    debug!(action = ?cli.action, len = payload.len(), "running");

    let out = match cli.action {
        Action::Pack => converter.pack(&payload).context("failed to pack document")?,
        Action::Parse => converter.unpack(&payload).context("failed to parse hex")?,
    };

    println!("{out}");
    Ok(())
}

fn read_payload(arg: &str) -> anyhow::Result<String> {
    if arg != STDIN_PAYLOAD {
        return Ok(arg.to_owned());
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read payload from stdin")?;
    Ok(buf)
}
