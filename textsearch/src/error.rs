use thiserror::Error;

/// Rejected Rabin-Karp hash parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rabin-karp radix must be non-zero")]
    ZeroRadix,
    #[error("rabin-karp modulus must be non-zero")]
    ZeroModulus,
}
