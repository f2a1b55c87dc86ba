use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fordjohnson::exchange::{self, RateTable};
use fordjohnson::{rpn, sort, worst_case_comparisons, Sorter, TracingObserver};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fordjohnson",
    about = "Merge-insertion sorting engine with exact comparison accounting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort integers with the merge-insertion algorithm.
    Sort {
        /// Values to sort.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Emit chain snapshots as tracing events while sorting.
        #[arg(long)]
        trace: bool,
    },
    /// Price dated values against an exchange-rate table.
    Exchange {
        /// Rates CSV, first line `date,exchange_rate`.
        rates: PathBuf,
        /// Query file, first line `date | value`.
        input: PathBuf,
    },
    /// Evaluate a reverse-Polish expression over single digits.
    Rpn {
        /// Expression, e.g. "8 9 * 9 - 9 - 9 - 4 - 1 +".
        expression: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if matches!(cli.command, Commands::Sort { trace: true, .. }) {
        "fordjohnson=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Sort { values, trace } => run_sort(values, trace)?,
        Commands::Exchange { rates, input } => run_exchange(rates, input)?,
        Commands::Rpn { expression } => run_rpn(&expression)?,
    }

    Ok(())
}

fn run_sort(values: Vec<i64>, trace: bool) -> Result<()> {
    let outcome = if trace {
        Sorter::with_observer(TracingObserver).sort(&values)?
    } else {
        sort(&values)?
    };

    println!("before: {}", join(&values));
    println!("after:  {}", join(&outcome.sorted));
    println!(
        "comparisons: {} (worst case for {} elements: {})",
        outcome.comparisons,
        values.len(),
        worst_case_comparisons(values.len())
    );

    Ok(())
}

fn run_exchange(rates_path: PathBuf, input_path: PathBuf) -> Result<()> {
    let rates_file = File::open(&rates_path)
        .with_context(|| format!("failed to open rates file {}", rates_path.display()))?;
    let table = RateTable::from_reader(BufReader::new(rates_file))
        .with_context(|| format!("failed to load rates from {}", rates_path.display()))?;

    let input_file = File::open(&input_path)
        .with_context(|| format!("failed to open input file {}", input_path.display()))?;
    let mut lines = BufReader::new(input_file).lines();

    let header = lines
        .next()
        .transpose()?
        .with_context(|| format!("input file {} is empty", input_path.display()))?;
    if header != exchange::QUERIES_HEADER {
        bail!(
            "input file {} must start with '{}'",
            input_path.display(),
            exchange::QUERIES_HEADER
        );
    }

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match exchange::convert(&table, &line) {
            Ok(conversion) => println!("{conversion}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    Ok(())
}

fn run_rpn(expression: &str) -> Result<()> {
    let result = rpn::evaluate(expression).context("failed to evaluate expression")?;
    println!("{result}");
    Ok(())
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
