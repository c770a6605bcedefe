use std::collections::HashMap;
use std::hash::Hash;

use crate::StringSearch;

pub struct BoyerMoore;

impl StringSearch for BoyerMoore {
    type Config = ();
    type State = ();

    fn build(_config: &Self::Config) -> Self::State {}

    fn find_bytes(_state: &Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        bm_find(text, pattern)
    }

    fn find_all_bytes(_state: &Self::State, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        bm_find_all(text, pattern)
    }
}

/// Lookup of the bad-character distance for a symbol.
///
/// The distance is measured from the rightmost occurrence of the symbol in
/// `pattern[..m - 1]` to the end of the pattern. Symbols that do not occur
/// there have no entry.
pub trait ShiftTable<T> {
    fn get(&self, symbol: &T) -> Option<usize>;
}

/// Bad-character table over the byte alphabet.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    // 0 marks an absent byte; real distances are always >= 1.
    shifts: [usize; 256],
}

impl BadCharTable {
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.shifts
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s != 0)
            .map(|(b, &s)| (b as u8, s))
    }
}

impl ShiftTable<u8> for BadCharTable {
    #[inline]
    fn get(&self, symbol: &u8) -> Option<usize> {
        match self.shifts[*symbol as usize] {
            0 => None,
            s => Some(s),
        }
    }
}

/// Bad-character table over an open alphabet (e.g. `char`).
#[derive(Debug, Clone)]
pub struct BadCharMap<T> {
    shifts: HashMap<T, usize>,
}

impl<T: Eq + Hash> BadCharMap<T> {
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<T, usize> {
        &self.shifts
    }
}

impl<T: Eq + Hash> ShiftTable<T> for BadCharMap<T> {
    #[inline]
    fn get(&self, symbol: &T) -> Option<usize> {
        self.shifts.get(symbol).copied()
    }
}

/// Build the bad-character shift table for Boyer–Moore.
///
/// The last pattern byte is left out, so a mismatch against it falls back
/// to the full pattern length.
pub fn build_bad_char_table(pattern: &[u8]) -> BadCharTable {
    let m = pattern.len();
    let mut shifts = [0usize; 256];
    for (i, &b) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
        shifts[b as usize] = m - 1 - i;
    }
    log::debug!("bm: built byte table for pattern of length {}", m);
    BadCharTable { shifts }
}

/// Same as [`build_bad_char_table`] for any hashable symbol type.
pub fn build_bad_char_map<T: Eq + Hash + Copy>(pattern: &[T]) -> BadCharMap<T> {
    let m = pattern.len();
    let mut shifts = HashMap::with_capacity(m);
    for (i, &sym) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
        shifts.insert(sym, m - 1 - i);
    }
    log::debug!("bm: built map table with {} symbols", shifts.len());
    BadCharMap { shifts }
}

/// Scan windows starting at `shift`; returns the first aligned match.
fn scan<T, S>(text: &[T], pattern: &[T], table: &S, mut shift: usize) -> Option<usize>
where
    T: PartialEq,
    S: ShiftTable<T>,
{
    let n = text.len();
    let m = pattern.len();

    while shift <= n - m {
        let mut j = (m - 1) as isize;

        // Compare from right to left
        while j >= 0 && pattern[j as usize] == text[shift + j as usize] {
            j -= 1;
        }

        if j < 0 {
            return Some(shift);
        }

        let mismatch_index = j as usize;
        let bad = &text[shift + mismatch_index];

        // Table distances are measured from the pattern end; re-anchor them
        // at the mismatch position. Non-positive shifts become 1.
        let distance = table.get(bad).unwrap_or(m) as isize;
        let bc_shift = distance - (m - 1 - mismatch_index) as isize;
        shift += bc_shift.max(1) as usize;
    }

    None
}

fn scan_all<T, S>(text: &[T], pattern: &[T], table: &S) -> Vec<usize>
where
    T: PartialEq,
    S: ShiftTable<T>,
{
    let n = text.len();
    let mut res = Vec::new();
    let mut shift = 0;

    while shift + pattern.len() <= n {
        match scan(text, pattern, table, shift) {
            Some(found) => {
                res.push(found);
                shift = found + 1;
            }
            None => break,
        }
    }

    res
}

/// Find the first occurrence of `pattern` in `text` using Boyer–Moore
/// with the bad-character rule.
///
/// Operates on raw bytes; UTF-8 is fine but not required.
pub fn bm_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let bad_char = build_bad_char_table(pattern);
    scan(text, pattern, &bad_char, 0)
}

/// Find all (possibly overlapping) occurrences of `pattern` in `text`.
pub fn bm_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        // Convention: match at every index (including at the end)
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let bad_char = build_bad_char_table(pattern);
    scan_all(text, pattern, &bad_char)
}

/// Boyer–Moore over an arbitrary hashable alphabet.
pub fn bm_find_by<T: Eq + Hash + Copy>(text: &[T], pattern: &[T]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let bad_char = build_bad_char_map(pattern);
    scan(text, pattern, &bad_char, 0)
}

pub fn bm_find_all_by<T: Eq + Hash + Copy>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let bad_char = build_bad_char_map(pattern);
    scan_all(text, pattern, &bad_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_char_table_abc() {
        let table = build_bad_char_table(b"abc");
        assert_eq!(table.get(&b'a'), Some(2));
        assert_eq!(table.get(&b'b'), Some(1));
        assert_eq!(table.get(&b'c'), None);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(b'a', 2), (b'b', 1)]);
    }

    #[test]
    fn test_bad_char_rightmost_wins() {
        let table = build_bad_char_table(b"abab");
        assert_eq!(table.get(&b'a'), Some(1));
        assert_eq!(table.get(&b'b'), Some(2));
    }

    #[test]
    fn test_bad_char_map_abc() {
        let map = build_bad_char_map(&['a', 'b', 'c']);
        let expected: HashMap<char, usize> = [('a', 2), ('b', 1)].into_iter().collect();
        assert_eq!(map.as_map(), &expected);
    }

    #[test]
    fn test_bad_char_single_symbol() {
        assert_eq!(build_bad_char_table(b"z").iter().count(), 0);
        assert!(build_bad_char_map(&['z']).is_empty());
    }

    #[test]
    fn test_bm_basic() {
        assert_eq!(bm_find(b"abxabcabcaby", b"abcaby"), Some(6));
        assert_eq!(bm_find(b"ababcabcabababd", b"ababd"), Some(10));
    }

    #[test]
    fn test_bm_not_found() {
        assert_eq!(bm_find(b"aaaaa", b"bb"), None);
        assert_eq!(bm_find(b"hello world", b"rust"), None);
    }

    #[test]
    fn test_bm_mismatch_before_last_symbol() {
        // the absent 'c' must not push the window past the match at 2
        assert_eq!(bm_find(b"cbaba", b"aba"), Some(2));
        assert_eq!(bm_find_by(&['c', 'b', 'a', 'b', 'a'], &['a', 'b', 'a']), Some(2));
    }

    #[test]
    fn test_bm_empty_pattern() {
        let pat: &[u8] = b"";
        assert_eq!(bm_find(b"hello", pat), Some(0));
        assert_eq!(bm_find_all(b"abc", pat), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bm_pattern_longer_than_text() {
        assert_eq!(bm_find(b"ab", b"abc"), None);
        assert_eq!(bm_find_by(&['a', 'b'], &['a', 'b', 'c']), None);
    }

    #[test]
    fn test_bm_find_all_overlapping() {
        assert_eq!(bm_find_all(b"aaaa", b"aa"), vec![0, 1, 2]);
        assert_eq!(bm_find_all(b"aabaa", b"aa"), vec![0, 3]);
    }

    #[test]
    fn test_bm_utf8() {
        let hay_s = "🌍hello🌍hello";
        let pat_s = "🌍hello";

        assert_eq!(bm_find(hay_s.as_bytes(), pat_s.as_bytes()), Some(0));
        assert_eq!(
            bm_find_all(hay_s.as_bytes(), pat_s.as_bytes()),
            vec![0, pat_s.len()]
        );
    }

    #[test]
    fn test_bm_chars() {
        let text: Vec<char> = "рекомендаційної системи".chars().collect();
        let pattern: Vec<char> = "системи".chars().collect();
        assert_eq!(bm_find_by(&text, &pattern), Some(16));
        assert_eq!(bm_find_all_by(&text, &pattern), vec![16]);
    }
}
