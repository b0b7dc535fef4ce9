mod guide;
mod parser;

use std::io::{self, Read, Write};
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use guide::{Guide, GuideHeader, GuideStep, RawStep};

#[derive(Parser)]
#[command(name = "guide_parser", about = "Structured step extraction for walkthrough guides")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a JSON array of raw steps from stdin, write the guide document to stdout
    Build(HeaderArgs),
    /// Extract instructions, items and stats from one step description
    Step {
        /// Description text (default: stdin)
        text: Option<String>,
    },
    /// Parse a GP stack annotation
    Gp {
        /// Annotation text (default: stdin)
        text: Option<String>,
    },
    /// Print the normalized ASCII form of the text
    Normalize {
        /// Text to normalize (default: stdin)
        text: Option<String>,
    },
}

#[derive(Args)]
struct HeaderArgs {
    #[arg(long, default_value = "BRUHsailer")]
    title: String,
    #[arg(
        long,
        default_value = "Comprehensive OSRS Ironman guide. Parsed from the HTML export with structured instructions, items, and skill requirements."
    )]
    description: String,
    #[arg(long, default_value = "published")]
    status: String,
    /// Comma-separated account modes
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "ironman,hardcore-ironman,ultimate-ironman"
    )]
    modes: Vec<String>,
    /// Comma-separated tags
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "ironman,efficient,comprehensive,bruhsailer"
    )]
    tags: Vec<String>,
}

impl From<HeaderArgs> for GuideHeader {
    fn from(args: HeaderArgs) -> Self {
        GuideHeader {
            title: args.title,
            description: args.description,
            status: args.status,
            recommended_modes: args.modes,
            tags: args.tags,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty;

    match cli.command {
        Commands::Build(header) => {
            let t0 = Instant::now();
            let input = read_stdin()?;
            let raw: Vec<RawStep> =
                serde_json::from_str(&input).context("stdin is not a JSON array of steps")?;
            if raw.is_empty() {
                info!("No steps in input.");
            }

            let steps = process_steps(&raw);
            let guide = Guide::new(header.into(), steps);
            write_json(&guide, pretty)?;

            let summary = guide.summary();
            info!("Built guide '{}' in {:.1}s", guide.title, t0.elapsed().as_secs_f64());
            summary.print();
            Ok(())
        }
        Commands::Step { text } => {
            let text = text_or_stdin(text)?;
            write_json(&parser::extract_step(&text), pretty)
        }
        Commands::Gp { text } => {
            let text = parser::normalize::normalize(&text_or_stdin(text)?);
            write_json(&parser::gp::parse_currency_range(&text), pretty)
        }
        Commands::Normalize { text } => {
            let text = text_or_stdin(text)?;
            println!("{}", parser::normalize::normalize(&text));
            Ok(())
        }
    }
}

/// Assemble steps in parallel chunks; output order and numbering follow input order.
fn process_steps(raw: &[RawStep]) -> Vec<GuideStep> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    const CHUNK: usize = 500;

    let pb = ProgressBar::new(raw.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let mut steps = Vec::with_capacity(raw.len());
    for (c, chunk) in raw.chunks(CHUNK).enumerate() {
        let offset = c * CHUNK;
        let assembled: Vec<GuideStep> = chunk
            .par_iter()
            .enumerate()
            .map(|(i, r)| parser::assemble_step(offset + i + 1, r))
            .collect();
        debug!("assembled steps {}..{}", offset + 1, offset + assembled.len());
        steps.extend(assembled);
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    steps
}

fn text_or_stdin(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(t) => Ok(t),
        None => read_stdin(),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut out = io::stdout().lock();
    writeln!(out, "{}", json).context("failed to write output")?;
    Ok(())
}

// ── Tests ──
