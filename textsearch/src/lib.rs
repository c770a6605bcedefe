mod boyer_moore;
mod error;
mod kmp;
mod rabin_karp;

use std::fmt;
use std::hash::Hash;

pub trait StringSearch {
    type Config;
    type State;

    fn build(config: &Self::Config) -> Self::State;
    fn find_bytes(state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize>;
    fn find_all_bytes(state: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize>;
    fn find(state: &Self::State, text: &str, pattern: &str) -> Option<usize> {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        Self::find_bytes(state, text_bytes, pattern_bytes)
    }
    fn find_all(state: &Self::State, text: &str, pattern: &str) -> Vec<usize> {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        Self::find_all_bytes(state, text_bytes, pattern_bytes)
    }
}

pub use boyer_moore::{
    BadCharMap, BadCharTable, BoyerMoore, ShiftTable, bm_find, bm_find_all, bm_find_all_by,
    bm_find_by, build_bad_char_map, build_bad_char_table,
};
pub use error::ConfigError;
pub use kmp::{Kmp, build_lps, kmp_find, kmp_find_all};
pub use rabin_karp::{
    DEFAULT_MODULUS, DEFAULT_RADIX, RabinKarp, RabinKarpConfig, RollingHash, horner_hash,
    rk_find, rk_find_all, rk_find_all_with, rk_find_with,
};

/// Runtime choice of matcher, shared by the command-line tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    Kmp,
    BoyerMoore,
    RabinKarp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Kmp, Algorithm::BoyerMoore, Algorithm::RabinKarp];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "Boyer-Moore",
            Algorithm::RabinKarp => "Rabin-Karp",
        }
    }

    pub fn find_bytes(self, config: &RabinKarpConfig, text: &[u8], pattern: &[u8]) -> Option<usize> {
        match self {
            Algorithm::Kmp => Kmp::find_bytes(&(), text, pattern),
            Algorithm::BoyerMoore => BoyerMoore::find_bytes(&(), text, pattern),
            Algorithm::RabinKarp => RabinKarp::find_bytes(config, text, pattern),
        }
    }

    pub fn find_all_bytes(self, config: &RabinKarpConfig, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        match self {
            Algorithm::Kmp => Kmp::find_all_bytes(&(), text, pattern),
            Algorithm::BoyerMoore => BoyerMoore::find_all_bytes(&(), text, pattern),
            Algorithm::RabinKarp => RabinKarp::find_all_bytes(config, text, pattern),
        }
    }

    /// Search over arbitrary code units, e.g. `char`s of a decoded text.
    pub fn find_symbols<T>(self, config: &RabinKarpConfig, text: &[T], pattern: &[T]) -> Option<usize>
    where
        T: Copy + Eq + Hash + Into<u64>,
    {
        match self {
            Algorithm::Kmp => kmp_find(text, pattern),
            Algorithm::BoyerMoore => bm_find_by(text, pattern),
            Algorithm::RabinKarp => rk_find_with(config, text, pattern),
        }
    }

    pub fn find_all_symbols<T>(self, config: &RabinKarpConfig, text: &[T], pattern: &[T]) -> Vec<usize>
    where
        T: Copy + Eq + Hash + Into<u64>,
    {
        match self {
            Algorithm::Kmp => kmp_find_all(text, pattern),
            Algorithm::BoyerMoore => bm_find_all_by(text, pattern),
            Algorithm::RabinKarp => rk_find_all_with(config, text, pattern),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Code units a text is searched in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Unit {
    /// UTF-8 bytes; positions are byte offsets.
    #[default]
    Bytes,
    /// Unicode scalar values; positions are char offsets.
    Chars,
}

impl Unit {
    /// First match of `pattern` in `text`, positioned in this unit.
    pub fn find(self, algo: Algorithm, config: &RabinKarpConfig, text: &str, pattern: &str) -> Option<usize> {
        match self {
            Unit::Bytes => algo.find_bytes(config, text.as_bytes(), pattern.as_bytes()),
            Unit::Chars => {
                let text: Vec<char> = text.chars().collect();
                let pattern: Vec<char> = pattern.chars().collect();
                algo.find_symbols(config, &text, &pattern)
            }
        }
    }

    pub fn find_all(self, algo: Algorithm, config: &RabinKarpConfig, text: &str, pattern: &str) -> Vec<usize> {
        match self {
            Unit::Bytes => algo.find_all_bytes(config, text.as_bytes(), pattern.as_bytes()),
            Unit::Chars => {
                let text: Vec<char> = text.chars().collect();
                let pattern: Vec<char> = pattern.chars().collect();
                algo.find_all_symbols(config, &text, &pattern)
            }
        }
    }
}
