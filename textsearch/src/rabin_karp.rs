use crate::{ConfigError, StringSearch};

/// Byte alphabet size.
pub const DEFAULT_RADIX: u32 = 256;
/// Small prime. Larger alphabets sharing it collide more often.
pub const DEFAULT_MODULUS: u32 = 101;

pub struct RabinKarp;

impl StringSearch for RabinKarp {
    type Config = RabinKarpConfig;
    type State = RabinKarpConfig;

    fn build(config: &Self::Config) -> Self::State {
        *config
    }

    fn find_bytes(state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        rk_find_with(state, text, pattern)
    }

    fn find_all_bytes(state: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        rk_find_all_with(state, text, pattern)
    }
}

/// Polynomial hash parameters: radix `d` and modulus `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RabinKarpConfig {
    radix: u32,
    modulus: u32,
}

impl Default for RabinKarpConfig {
    fn default() -> Self {
        Self {
            radix: DEFAULT_RADIX,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl RabinKarpConfig {
    pub fn new(radix: u32, modulus: u32) -> Result<Self, ConfigError> {
        if radix == 0 {
            return Err(ConfigError::ZeroRadix);
        }
        if modulus == 0 {
            return Err(ConfigError::ZeroModulus);
        }
        Ok(Self { radix, modulus })
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Symbol code reduced into `[0, q)`.
    #[inline]
    fn code<T: Into<u64>>(&self, symbol: T) -> i128 {
        (symbol.into() % self.modulus as u64) as i128
    }

    /// `d^(m-1) mod q`, the weight of the leading symbol of an `m`-long window.
    pub fn leading_weight(&self, m: usize) -> u64 {
        let q = self.modulus as u64;
        let mut base = self.radix as u64 % q;
        let mut exp = m.saturating_sub(1);
        let mut acc = 1 % q;

        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base % q;
            }
            base = base * base % q;
            exp >>= 1;
        }

        acc
    }
}

/// Hash of `window` from scratch by Horner's method, in `[0, q)`.
pub fn horner_hash<T: Copy + Into<u64>>(config: &RabinKarpConfig, window: &[T]) -> u64 {
    let d = config.radix as i128;
    let q = config.modulus as i128;

    let mut hash = 0i128;
    for &sym in window {
        hash = (d * hash + config.code(sym)) % q;
    }
    hash as u64
}

/// Hash of a fixed-length window that slides one symbol at a time.
#[derive(Debug, Clone)]
pub struct RollingHash {
    config: RabinKarpConfig,
    leading_weight: i128,
    value: i128,
}

impl RollingHash {
    pub fn new<T: Copy + Into<u64>>(config: RabinKarpConfig, window: &[T]) -> Self {
        Self {
            config,
            leading_weight: config.leading_weight(window.len()) as i128,
            value: horner_hash(&config, window) as i128,
        }
    }

    pub fn value(&self) -> u64 {
        self.value as u64
    }

    /// Drop `outgoing` from the front of the window and append `incoming`.
    #[inline]
    pub fn roll<T: Into<u64>>(&mut self, outgoing: T, incoming: T) {
        let d = self.config.radix as i128;
        let q = self.config.modulus as i128;

        let out = self.config.code(outgoing);
        let inc = self.config.code(incoming);

        // Remainder keeps the sign of the dividend, so this lands in (-q, q).
        let mut hash = (d * (self.value - out * self.leading_weight) + inc) % q;
        if hash < 0 {
            hash += q;
        }
        self.value = hash;
    }
}

/// Rabin-Karp with the default parameters (`d = 256`, `q = 101`).
pub fn rk_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    rk_find_with(&RabinKarpConfig::default(), text, pattern)
}

pub fn rk_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    rk_find_all_with(&RabinKarpConfig::default(), text, pattern)
}

/// Find the first occurrence of `pattern` in `text` by rolling hash.
/// Equal hashes are confirmed symbol by symbol.
pub fn rk_find_with<T>(config: &RabinKarpConfig, text: &[T], pattern: &[T]) -> Option<usize>
where
    T: Copy + PartialEq + Into<u64>,
{
    let mut first = None;
    scan(config, text, pattern, |i| {
        first = Some(i);
        false
    });
    first
}

pub fn rk_find_all_with<T>(config: &RabinKarpConfig, text: &[T], pattern: &[T]) -> Vec<usize>
where
    T: Copy + PartialEq + Into<u64>,
{
    let mut res = Vec::new();
    scan(config, text, pattern, |i| {
        res.push(i);
        true
    });
    res
}

/// Feed every match start to `on_match` until it returns `false`.
fn scan<T, F>(config: &RabinKarpConfig, text: &[T], pattern: &[T], mut on_match: F)
where
    T: Copy + PartialEq + Into<u64>,
    F: FnMut(usize) -> bool,
{
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        for i in 0..=n {
            if !on_match(i) {
                return;
            }
        }
        return;
    }
    if m > n {
        return;
    }

    let hash_pattern = horner_hash(config, pattern);
    let mut window = RollingHash::new(*config, &text[..m]);

    for i in 0..=n - m {
        if window.value() == hash_pattern {
            if &text[i..i + m] == pattern {
                if !on_match(i) {
                    return;
                }
            } else {
                log::trace!("rk: hash collision at {}", i);
            }
        }

        if i < n - m {
            window.roll(text[i], text[i + m]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rk_basic() {
        assert_eq!(rk_find(b"abxabcabcaby", b"abcaby"), Some(6));
        assert_eq!(rk_find(b"ababcabcabababd", b"ababd"), Some(10));
    }

    #[test]
    fn test_rk_not_found() {
        assert_eq!(rk_find(b"aaaaa", b"bb"), None);
        assert_eq!(rk_find(b"ab", b"abc"), None);
    }

    #[test]
    fn test_rk_empty_pattern() {
        let pat: &[u8] = b"";
        assert_eq!(rk_find(b"hello", pat), Some(0));
        assert_eq!(rk_find_all(b"abc", pat), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rk_find_all_overlapping() {
        assert_eq!(rk_find_all(b"aaaa", b"aa"), vec![0, 1, 2]);
    }

    #[test]
    fn test_rk_collisions_are_verified() {
        // q = 1 makes every window collide
        let config = RabinKarpConfig::new(256, 1).unwrap();
        assert_eq!(rk_find_with(&config, b"xxxxabc", b"abc"), Some(4));
        assert_eq!(rk_find_with(&config, b"xxxxabd", b"abc"), None);
    }

    #[test]
    fn test_rk_chars() {
        let config = RabinKarpConfig::default();
        let text: Vec<char> = "фантастичний алгоритм 123".chars().collect();
        let pattern: Vec<char> = "алгоритм".chars().collect();
        assert_eq!(rk_find_with(&config, &text, &pattern), Some(13));
    }

    #[test]
    fn test_config_rejects_zero() {
        assert_eq!(RabinKarpConfig::new(0, 101), Err(ConfigError::ZeroRadix));
        assert_eq!(RabinKarpConfig::new(256, 0), Err(ConfigError::ZeroModulus));
    }

    #[test]
    fn test_leading_weight() {
        let config = RabinKarpConfig::default();
        assert_eq!(config.leading_weight(1), 1);
        assert_eq!(config.leading_weight(2), 256 % 101);
        assert_eq!(config.leading_weight(3), 256 * 256 % 101);
        assert_eq!(RabinKarpConfig::new(7, 1).unwrap().leading_weight(4), 0);
    }

    #[test]
    fn test_rolling_matches_horner() {
        let config = RabinKarpConfig::default();
        let text = b"the quick brown fox jumps over the lazy dog";
        let m = 5;

        let mut rolling = RollingHash::new(config, &text[..m]);
        for i in 0..=text.len() - m {
            assert_eq!(rolling.value(), horner_hash(&config, &text[i..i + m]));
            if i < text.len() - m {
                rolling.roll(text[i], text[i + m]);
            }
        }
    }
}
