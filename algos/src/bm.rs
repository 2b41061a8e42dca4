use crate::StringSearch;

pub struct BM;

impl StringSearch for BM {
    type Config = ();
    type State = ();

    fn find_bytes(_state: Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        bm_find(text, pattern)
    }
}

/// Build the bad-character shift table for Boyer–Moore: each byte maps to its
/// rightmost index in the pattern, -1 if it never occurs.
fn build_bad_char_table(pattern: &[u8]) -> [isize; 256] {
    let mut table = [-1isize; 256];
    for (i, &b) in pattern.iter().enumerate() {
        table[b as usize] = i as isize;
    }
    table
}

/// Find the first occurrence of `pattern` in `text` using Boyer–Moore with the
/// bad-character heuristic. Returns Some(start_index) if found, None otherwise.
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

    let mut i = 0usize; // index in text where the current pattern alignment starts

    while i <= n - m {
        let mut j = (m - 1) as isize;

        while j >= 0 && pattern[j as usize] == text[i + j as usize] {
            j -= 1;
        }

        if j < 0 {
            // full match
            return Some(i);
        } else {
            let mismatch_index = j as usize;
            let bad_byte = text[i + mismatch_index];

            // Bad-character shift; clamp to 1 so the window always advances
            let last_occurrence = bad_char[bad_byte as usize]; // isize
            let shift = mismatch_index as isize - last_occurrence;
            i += if shift > 0 { shift as usize } else { 1 };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bm_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(bm_find(hay, pat), Some(10));
    }

    #[test]
    fn test_bm_not_found() {
        let hay = b"hello world";
        let pat = b"rust";
        assert_eq!(bm_find(hay, pat), None);
    }

    #[test]
    fn test_bm_empty_pattern() {
        let hay = b"abc";
        let pat: &[u8] = b"";
        assert_eq!(bm_find(hay, pat), Some(0));
    }

    #[test]
    fn test_bm_pattern_longer_than_text() {
        let hay = b"ab";
        let pat = b"abc";
        assert_eq!(bm_find(hay, pat), None);
    }

    #[test]
    fn test_bm_partial_prefixes() {
        let hay = b"abxabcabcaby";
        let pat = b"abcaby";
        assert_eq!(bm_find(hay, pat), Some(6));
    }

    #[test]
    fn test_bm_bad_char_table() {
        let table = build_bad_char_table(b"abcab");
        assert_eq!(table[b'a' as usize], 3);
        assert_eq!(table[b'b' as usize], 4);
        assert_eq!(table[b'c' as usize], 2);
        assert_eq!(table[b'z' as usize], -1);
    }

    #[test]
    fn test_bm_utf8() {
        let hay_s = "🌍hello🌍world";
        let pat_s = "🌍world";
        assert_eq!(bm_find(hay_s.as_bytes(), pat_s.as_bytes()), Some(9));
    }
}
