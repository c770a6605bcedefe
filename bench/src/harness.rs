use std::hint::black_box;
use std::time::{Duration, Instant};

use textsearch::{Algorithm, RabinKarpConfig, Unit};

#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub repeat: u32,
    pub unit: Unit,
    pub config: RabinKarpConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Present,
    Absent,
}

#[derive(Debug, Clone)]
pub struct CaseResult {
    pub kind: SearchKind,
    pub pattern: String,
    /// Only recorded for present patterns.
    pub positions: Vec<(Algorithm, Option<usize>)>,
    pub timings: Vec<(Algorithm, Duration)>,
}

#[derive(Debug, Clone)]
pub struct ArticleResult {
    pub name: String,
    pub length: usize,
    pub cases: Vec<CaseResult>,
}

/// Text and pattern converted once into the code units being searched.
enum Haystack {
    Bytes { text: Vec<u8>, pattern: Vec<u8> },
    Chars { text: Vec<char>, pattern: Vec<char> },
}

impl Haystack {
    fn new(unit: Unit, text: &str, pattern: &str) -> Self {
        match unit {
            Unit::Bytes => Haystack::Bytes {
                text: text.as_bytes().to_vec(),
                pattern: pattern.as_bytes().to_vec(),
            },
            Unit::Chars => Haystack::Chars {
                text: text.chars().collect(),
                pattern: pattern.chars().collect(),
            },
        }
    }

    #[inline]
    fn find(&self, algo: Algorithm, config: &RabinKarpConfig) -> Option<usize> {
        match self {
            Haystack::Bytes { text, pattern } => algo.find_bytes(config, text, pattern),
            Haystack::Chars { text, pattern } => algo.find_symbols(config, text, pattern),
        }
    }
}

/// Wall-clock time of `repeat` back-to-back calls.
pub fn time_repeated<R>(repeat: u32, mut f: impl FnMut() -> R) -> Duration {
    let start = Instant::now();
    for _ in 0..repeat {
        black_box(f());
    }
    start.elapsed()
}

pub fn run_case(kind: SearchKind, text: &str, pattern: &str, settings: &Settings) -> CaseResult {
    let haystack = Haystack::new(settings.unit, text, pattern);

    let positions = match kind {
        SearchKind::Present => Algorithm::ALL
            .iter()
            .map(|&algo| (algo, haystack.find(algo, &settings.config)))
            .collect(),
        SearchKind::Absent => Vec::new(),
    };

    let timings = Algorithm::ALL
        .iter()
        .map(|&algo| {
            log::info!("> Benchmarking Algo: [{}] Pattern: [{}]", algo, pattern);
            let elapsed = time_repeated(settings.repeat, || haystack.find(algo, &settings.config));
            (algo, elapsed)
        })
        .collect();

    CaseResult {
        kind,
        pattern: pattern.to_string(),
        positions,
        timings,
    }
}

pub fn run_article(
    name: &str,
    text: &str,
    present: &str,
    absent: &str,
    settings: &Settings,
) -> ArticleResult {
    let length = match settings.unit {
        Unit::Bytes => text.len(),
        Unit::Chars => text.chars().count(),
    };

    ArticleResult {
        name: name.to_string(),
        length,
        cases: vec![
            run_case(SearchKind::Present, text, present, settings),
            run_case(SearchKind::Absent, text, absent, settings),
        ],
    }
}
