// Print merge sort and two-way merge traces as text or JSON.

use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mergetrace::input;
use mergetrace::step::Stepper;
use mergetrace::trace::Frame;
use mergetrace::trace::Trace;
use mergetrace::trace::merge_sort::{self, SortFrame};
use mergetrace::trace::two_way::{self, MergeFrame};

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "mergetrace")]
#[command(about = "Trace merge sort and two-way merge step by step", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace a recursive merge sort
    Sort {
        /// Comma-separated integers
        #[arg(long, default_value = "7, 3, 2, 16, 24, 4, 11, 9", conflicts_with = "random")]
        values: String,

        /// Sort a random array instead of --values
        #[arg(long)]
        random: bool,

        /// Length of the random array
        #[arg(long, default_value_t = 8)]
        size: usize,

        /// Seed for the random array
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },

    /// Trace the merge of two sorted arrays
    Merge {
        /// First sorted array, comma-separated (may be empty)
        #[arg(long, default_value = "1, 4, 7")]
        a: String,

        /// Second sorted array, comma-separated (may be empty)
        #[arg(long, default_value = "2, 3, 8, 9")]
        b: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn sort_values(values: &str, random: bool, size: usize, seed: Option<u64>) -> Result<Vec<i64>> {
    if !random {
        return input::parse_nonempty_array(values).context("failed to parse --values");
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let values = input::random_array(&mut rng, size);
    if values.is_empty() {
        anyhow::bail!("--size must be at least 1");
    }
    tracing::info!(?values, "generated random array");
    return Ok(values);
}

fn write_sort_frame(out: &mut impl Write, frame: &SortFrame<i64>) -> std::io::Result<()> {
    for node in &frame.nodes {
        writeln!(
            out,
            "  {:indent$}[{}:{}) {:?} {:?}",
            "",
            node.l,
            node.r,
            node.arr,
            node.color,
            indent = node.level * 2,
        )?;
    }
    return Ok(());
}

fn write_merge_frame(out: &mut impl Write, frame: &MergeFrame<i64>) -> std::io::Result<()> {
    let c: Vec<String> = frame
        .c
        .iter()
        .map(|slot| match slot {
            Some(value) => value.to_string(),
            None => "_".to_string(),
        })
        .collect();
    writeln!(out, "  A: {:?} i={}", frame.a, frame.i)?;
    writeln!(out, "  B: {:?} j={}", frame.b, frame.j)?;
    writeln!(out, "  C: [{}] k={}", c.join(", "), frame.k)?;
    return Ok(());
}

fn emit<F, W>(format: &OutputFormat, trace: &Trace<F>, mut write_frame: W) -> Result<()>
where
    F: Frame + Serialize,
    W: FnMut(&mut std::io::StdoutLock<'static>, &F) -> std::io::Result<()>,
{
    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, trace).context("failed to serialize trace")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let mut stepper = Stepper::new(trace);
            loop {
                if let (Some(label), Some(frame)) = (stepper.label(), stepper.current()) {
                    writeln!(out, "{}", label)?;
                    write_frame(&mut out, frame)?;
                }
                if !stepper.next() {
                    break;
                }
            }
        }
    }
    out.flush()?;
    return Ok(());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sort { values, random, size, seed } => {
            let values = sort_values(&values, random, size, seed)?;
            let trace = merge_sort::trace(&values);
            emit(&cli.format, &trace, |out, frame| write_sort_frame(out, frame))?;
        }
        Commands::Merge { a, b } => {
            let a = input::parse_array(&a).context("failed to parse --a")?;
            let b = input::parse_array(&b).context("failed to parse --b")?;
            if !a.is_sorted() || !b.is_sorted() {
                tracing::warn!("merge input is not sorted; output order is unspecified");
            }
            let trace = two_way::trace_merge(&a, &b);
            emit(&cli.format, &trace, |out, frame| write_merge_frame(out, frame))?;
        }
    }

    return Ok(());
}
