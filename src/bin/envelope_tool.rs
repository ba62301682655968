use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dynaquery::{RawQuery, core::empty_keys};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "envelope-tool")]
#[command(about = "Inspect and normalize raw store queries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Strip empty parameters and print the result
    Finalize {
        /// Read from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print as `[operation, body]` instead of an object
        #[arg(long)]
        legacy: bool,
    },
    /// Summarize a query and list the keys finalize would drop
    Inspect {
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Finalize { input, legacy } => finalize(input.as_deref(), legacy),
        Command::Inspect { input } => inspect(input.as_deref()),
    }
}

fn read_query(input: Option<&Path>) -> Result<RawQuery> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read query from '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read query from stdin")?;
            buf
        }
    };

    RawQuery::from_json_str(&text).context("Input is not a valid query")
}

fn finalize(input: Option<&Path>, legacy: bool) -> Result<()> {
    println!("{}", render_finalized(read_query(input)?, legacy)?);
    Ok(())
}

fn inspect(input: Option<&Path>) -> Result<()> {
    print!("{}", render_inspect(&read_query(input)?));
    Ok(())
}

fn render_finalized(query: RawQuery, legacy: bool) -> Result<String> {
    let query = query.finalized();
    let output = if legacy {
        query.to_legacy_value()
    } else {
        query.to_object_value()
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn render_inspect(query: &RawQuery) -> String {
    let dropped = empty_keys(query.body());
    let drops = if dropped.is_empty() {
        "(none)".to_string()
    } else {
        dropped.join(", ")
    };

    format!(
        "Operation: {}\nBody keys: {}\nFinalize drops: {}\n",
        query.operation(),
        query.body().len(),
        drops
    )
}
