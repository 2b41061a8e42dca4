use crate::StringSearch;

/// Default modulus for the rolling hash. Small enough that collisions happen on
/// large corpora, which is why every hash hit is verified byte-by-byte.
pub const DEFAULT_PRIME: i64 = 101;

pub struct RK;

impl StringSearch for RK {
    type Config = i64;
    type State = i64;

    fn build(prime: Self::Config) -> Self::State {
        prime
    }

    fn find_bytes(prime: Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        rk_find_with_prime(text, pattern, prime)
    }
}

/// Find the first occurrence of `pattern` in `text` using Rabin–Karp with the
/// default modulus.
pub fn rk_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    rk_find_with_prime(text, pattern, DEFAULT_PRIME)
}

/// Rabin–Karp with an explicit prime modulus. Each byte is a digit in base 256;
/// window hashes roll in constant time. A hash hit is only reported after a
/// direct byte comparison confirms it.
pub fn rk_find_with_prime(text: &[u8], pattern: &[u8], prime: i64) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    // 256^(m-1) mod prime, used to drop the leading digit when rolling.
    let mut h: i64 = 1;
    for _ in 0..m - 1 {
        h = (h * 256) % prime;
    }

    let mut p: i64 = 0; // pattern hash
    let mut t: i64 = 0; // hash of the current text window
    for i in 0..m {
        p = (256 * p + pattern[i] as i64) % prime;
        t = (256 * t + text[i] as i64) % prime;
    }

    for i in 0..=n - m {
        if p == t {
            if &text[i..i + m] == pattern {
                return Some(i);
            }
            log::debug!("rk_find: hash collision at offset {i} (prime {prime})");
        }
        if i < n - m {
            t = (256 * (t - text[i] as i64 * h) + text[i + m] as i64) % prime;
            // signed remainder can be negative; normalize into [0, prime)
            t = (t + prime) % prime;
        }
    }

    None
}
