use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use textsearch::{Algorithm, DEFAULT_MODULUS, DEFAULT_RADIX, RabinKarpConfig, Unit};

/// Example:
/// cargo run --release -- -t article_1.txt -t article_2.txt --pattern "алгоритм" -a kmp --measure-time
/// cargo run --release -- -t - --pattern "needle" -a rabin-karp --modulus 1000003 --all < haystack.txt
#[derive(Debug, clap::Parser)]
#[command(
    name = "textsearch",
    about = "Run one exact substring search algorithm on one pattern and one or more texts"
)]
struct Cli {
    #[arg(short, long, value_enum)]
    algo: Algorithm,

    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    /// Report every (overlapping) match instead of the first one
    #[arg(long)]
    all: bool,

    /// Code units to search in; positions are reported in the same unit
    #[arg(short, long, value_enum, default_value_t = Unit::Bytes)]
    unit: Unit,

    /// Radix of the Rabin-Karp polynomial hash
    #[arg(long, default_value_t = DEFAULT_RADIX)]
    radix: u32,

    /// Modulus of the Rabin-Karp polynomial hash
    #[arg(long, default_value_t = DEFAULT_MODULUS)]
    modulus: u32,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let pattern = load_pattern(&cli)?;
    if pattern.is_empty() {
        bail!("Pattern must not be empty");
    }

    let config = RabinKarpConfig::new(cli.radix, cli.modulus)?;

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(
            File::create(path).with_context(|| format!("creating output file {:?}", path))?,
        ),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={}, unit={:?}, pattern-length={}, radix={}, modulus={}",
        cli.algo,
        cli.unit,
        pattern.len(),
        config.radix(),
        config.modulus()
    )?;

    for text_path in cli.texts.iter() {
        let text = load_text(text_path)?;
        log::info!("loaded {:?} ({} bytes)", text_path, text.len());

        let (matches, duration) = run_algorithm(&cli, &config, &text, &pattern);

        writeln!(out, "text={:?}", text_path)?;

        if let Some(d) = duration {
            writeln!(out, "execution_time: {}ns", d.as_nanos())?;
        }

        writeln!(out, "matches: {:?}", matches)?;
        writeln!(out)?;
    }

    Ok(())
}

fn load_pattern(cli: &Cli) -> Result<String> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.clone())
    } else if let Some(ref path) = cli.pattern_file {
        load_text(path)
    } else {
        bail!("Either --pattern or --pattern-file must be provided")
    }
}

fn load_text(path: &Path) -> Result<String> {
    let mut buf = String::new();
    if path.as_os_str() == "-" {
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading text from stdin")?;
    } else {
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut buf))
            .with_context(|| format!("reading {:?}", path))?;
    }
    Ok(buf)
}

fn run_algorithm(
    cli: &Cli,
    config: &RabinKarpConfig,
    text: &str,
    pattern: &str,
) -> (Vec<usize>, Option<Duration>) {
    let start = if cli.measure_time {
        Some(Instant::now())
    } else {
        None
    };

    let result = if cli.all {
        cli.unit.find_all(cli.algo, config, text, pattern)
    } else {
        cli.unit
            .find(cli.algo, config, text, pattern)
            .into_iter()
            .collect()
    };

    let duration = start.map(|s| s.elapsed());

    (result, duration)
}
