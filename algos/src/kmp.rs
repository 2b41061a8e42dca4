use crate::StringSearch;

pub struct KMP;

impl StringSearch for KMP {
    type Config = ();
    type State = ();

    fn find_bytes(_state: Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        kmp_find(text, pattern)
    }
}

/// Build the "longest proper prefix which is also suffix" (LPS) table
fn build_lps(pattern: &[u8]) -> Vec<usize> {
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

/// Find the first occurrence of `pattern` in `text` using Knuth–Morris–Pratt.
/// The text index never moves backwards; mismatches fall the pattern index
/// back through the LPS table instead.
pub fn kmp_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0); // convention: empty pattern matches at 0
    }

    if m > n {
        return None;
    }

    let lps = build_lps(pattern);

    let mut i = 0; // index in text
    let mut j = 0; // index in pattern

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
