mod harness;
mod report;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use textsearch::{DEFAULT_MODULUS, DEFAULT_RADIX, RabinKarpConfig, Unit};

use harness::{Settings, run_article};
use report::Report;

const DEFAULT_TEXTS: &[&str] = &["article_1.txt", "article_2.txt"];
const DEFAULT_PRESENT: &[&str] = &["алгоритм", "рекомендаційної системи"];
const DEFAULT_ABSENT: &[&str] = &["неіснуючий патерн xyz", "фантастичний алгоритм 123"];

/// Example:
/// cargo run --release -p bench -- -t article_1.txt -t article_2.txt --unit chars
/// cargo run --release -p bench -- -t data/ipsum.txt --present Lorem --absent XYZXYZMISSING --repeat 1000
#[derive(Debug, clap::Parser)]
#[command(
    name = "bench",
    about = "Compare KMP, Boyer-Moore and Rabin-Karp on present and absent patterns"
)]
struct Cli {
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    texts: Vec<PathBuf>,

    /// Pattern that occurs in the text. Either one (applied to all texts)
    /// or one per text.
    #[arg(long, value_name = "PATTERN")]
    present: Vec<String>,

    /// Pattern that does not occur in the text. Same arity as --present.
    #[arg(long, value_name = "PATTERN")]
    absent: Vec<String>,

    /// Searches timed per algorithm and pattern
    #[arg(short, long, default_value_t = 100)]
    repeat: u32,

    #[arg(short, long, value_enum, default_value_t = Unit::Chars)]
    unit: Unit,

    #[arg(long, default_value_t = DEFAULT_RADIX)]
    radix: u32,

    #[arg(long, default_value_t = DEFAULT_MODULUS)]
    modulus: u32,

    /// Optional report file; if omitted, the report is written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let texts: Vec<PathBuf> = if cli.texts.is_empty() {
        DEFAULT_TEXTS.iter().map(PathBuf::from).collect()
    } else {
        cli.texts.clone()
    };

    let present = resolve_patterns("present", texts.len(), &cli.present, DEFAULT_PRESENT)?;
    let absent = resolve_patterns("absent", texts.len(), &cli.absent, DEFAULT_ABSENT)?;

    let settings = Settings {
        repeat: cli.repeat,
        unit: cli.unit,
        config: RabinKarpConfig::new(cli.radix, cli.modulus)?,
    };

    log::info!("--- Starting Benchmark ---");

    let mut articles = Vec::with_capacity(texts.len());
    for (idx, path) in texts.iter().enumerate() {
        let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
        log::info!("> Loaded {:?}: {} bytes", path, text.len());

        let name = path.display().to_string();
        articles.push(run_article(&name, &text, &present[idx], &absent[idx], &settings));
    }

    let report = Report { articles };

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(
            File::create(path).with_context(|| format!("creating report file {:?}", path))?,
        ),
        None => Box::new(io::stdout()),
    };
    report.render(&mut out)?;

    Ok(())
}

/// One pattern for every text: a single value is shared, otherwise one per text.
fn resolve_patterns(
    flag: &str,
    text_count: usize,
    given: &[String],
    defaults: &[&str],
) -> Result<Vec<String>> {
    let patterns: Vec<String> = match given.len() {
        0 if text_count <= defaults.len() => {
            defaults[..text_count].iter().map(|s| s.to_string()).collect()
        }
        0 => bail!("--{}: no default pattern for {} texts, pass one per text", flag, text_count),
        1 => vec![given[0].clone(); text_count],
        n if n == text_count => given.to_vec(),
        n => bail!(
            "--{}: expected either 1 value or {} values (one per text), got {}",
            flag,
            text_count,
            n
        ),
    };

    if patterns.iter().any(|p| p.is_empty()) {
        bail!("--{}: pattern must not be empty", flag);
    }

    Ok(patterns)
}
