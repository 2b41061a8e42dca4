use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use algos::{BM, DEFAULT_PRIME, KMP, RK, StringSearch};
use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Algorithm {
    Bm,
    Kmp,
    Rk,
}

impl Algorithm {
    const ALL: [Algorithm; 3] = [Algorithm::Bm, Algorithm::Kmp, Algorithm::Rk];

    fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bm => "Boyer-Moore",
            Algorithm::Kmp => "Knuth-Morris-Pratt",
            Algorithm::Rk => "Rabin-Karp",
        }
    }

    fn find(self, text: &[u8], pattern: &[u8], prime: i64) -> Option<usize> {
        match self {
            Algorithm::Bm => BM::find_bytes((), text, pattern),
            Algorithm::Kmp => KMP::find_bytes((), text, pattern),
            Algorithm::Rk => RK::find_bytes(RK::build(prime), text, pattern),
        }
    }
}

/// Example:
/// cargo run --release -p bench -- -t data/article1.txt -t data/article2.txt
#[derive(Debug, clap::Parser)]
#[command(
    name = "search-bench",
    about = "Time the substring search algorithms against text corpora"
)]
struct Cli {
    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    /// Restrict the run to a single algorithm
    #[arg(short, long, value_enum)]
    algo: Option<Algorithm>,

    /// Pattern expected to occur in the corpora
    #[arg(long, default_value = "algorithm")]
    pattern: String,

    /// Pattern expected NOT to occur in the corpora
    #[arg(long = "missing-pattern", default_value = "qwertyuiopasdfgh")]
    missing_pattern: String,

    /// Number of timed repetitions per measurement
    #[arg(short = 'r', long, default_value_t = 10)]
    repetitions: usize,

    /// Prime modulus for Rabin-Karp
    #[arg(long, default_value_t = DEFAULT_PRIME)]
    prime: i64,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    validate_prime(cli.prime)?;

    // All corpora are loaded before any timing starts; a bad path aborts here.
    let corpora = storage::load_corpora(&cli.texts)?;

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# repetitions={}, existing={:?}, missing={:?}, prime={}",
        cli.repetitions, cli.pattern, cli.missing_pattern, cli.prime
    )?;

    for corpus in &corpora {
        writeln!(out, "\n{}", corpus.name)?;

        for algo in Algorithm::ALL {
            if cli.algo.is_some_and(|only| only != algo) {
                continue;
            }

            let existing = time_search(
                algo,
                corpus.as_bytes(),
                cli.pattern.as_bytes(),
                cli.prime,
                cli.repetitions,
            );
            let missing = time_search(
                algo,
                corpus.as_bytes(),
                cli.missing_pattern.as_bytes(),
                cli.prime,
                cli.repetitions,
            );

            writeln!(
                out,
                "{:<25} | existing: {:>9.6}s | missing: {:>9.6}s",
                algo.display_name(),
                existing,
                missing
            )?;
        }
    }

    Ok(())
}

fn validate_prime(prime: i64) -> Result<(), String> {
    if prime < 2 {
        return Err(format!("--prime must be at least 2 (got {prime})"));
    }
    Ok(())
}

/// Elapsed wall-clock seconds for `repetitions` searches.
fn time_search(
    algo: Algorithm,
    text: &[u8],
    pattern: &[u8],
    prime: i64,
    repetitions: usize,
) -> f64 {
    let mut hits = 0usize;

    let start = Instant::now();
    for _ in 0..repetitions {
        if algo.find(text, pattern, prime).is_some() {
            hits += 1;
        }
    }
    let elapsed = start.elapsed();

    log::debug!(
        "{}: {} hits over {} repetitions",
        algo.display_name(),
        hits,
        repetitions
    );

    elapsed.as_secs_f64()
}
