use crate::StringSearch;

pub struct Kmp;

impl StringSearch for Kmp {
    type Config = ();
    type State = ();

    fn build(_config: &Self::Config) -> Self::State {}

    fn find_bytes(_state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        kmp_find(text, pattern)
    }

    fn find_all_bytes(_state: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        kmp_find_all(text, pattern)
    }
}

/// Build the "longest proper prefix which is also suffix" (LPS) table.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it, so `lps[i] <= i` always holds.
pub fn build_lps<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Find the first occurrence of `pattern` in `text` with Knuth-Morris-Pratt.
pub fn kmp_find<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0); // convention: empty pattern matches at 0
    }

    if m > n {
        return None;
    }

    let lps = build_lps(pattern);

    let mut i = 0;
    let mut j = 0;

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                // full match ending at i-1
                return Some(i - j);
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    None
}

/// Every (possibly overlapping) occurrence of `pattern` in `text`.
pub fn kmp_find_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        // every index including n
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let lps = build_lps(pattern);
    let mut result = Vec::new();

    let mut i = 0usize; // index in text
    let mut j = 0usize; // index in pattern

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                result.push(i - j);
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    result
}
