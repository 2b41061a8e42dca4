use algos::{BM, KMP, RK, StringSearch, bm_find, kmp_find, rk_find, rk_find_with_prime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reference answer via std slice windows.
fn oracle(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if pattern.len() > text.len() {
        return None;
    }
    text.windows(pattern.len()).position(|w| w == pattern)
}

fn assert_all_agree(text: &[u8], pattern: &[u8]) {
    let expected = oracle(text, pattern);
    assert_eq!(bm_find(text, pattern), expected, "bm on {:?}", pattern);
    assert_eq!(kmp_find(text, pattern), expected, "kmp on {:?}", pattern);
    assert_eq!(rk_find(text, pattern), expected, "rk on {:?}", pattern);

    if let Some(k) = expected {
        assert_eq!(&text[k..k + pattern.len()], pattern);
    }
}

#[test]
fn matchers_agree_on_fixed_cases() {
    let cases: &[(&[u8], &[u8])] = &[
        (b"abxabcabcaby", b"abcaby"),
        (b"ababcabcabababd", b"ababd"),
        (b"hello world", b"rust"),
        (b"aaaaaaaab", b"aab"),
        (b"", b""),
        (b"", b"a"),
        (b"a", b""),
        (b"mississippi", b"issip"),
        (b"mississippi", b"ppi"),
    ];

    for &(text, pattern) in cases {
        assert_all_agree(text, pattern);
    }
}

#[test]
fn trait_surface_matches_free_functions() {
    let text = "abxabcabcaby";
    let pattern = "abcaby";

    assert_eq!(BM::find((), text, pattern), Some(6));
    assert_eq!(KMP::find((), text, pattern), Some(6));
    assert_eq!(RK::find(RK::build(101), text, pattern), Some(6));
    assert_eq!(RK::find(RK::build(101), text, "zzz"), None);
}

#[test]
fn matchers_agree_on_random_small_alphabet() {
    // Small alphabet to force repeated prefixes and near-misses.
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..200 {
        let n = rng.gen_range(0..200);
        let text: Vec<u8> = (0..n).map(|_| rng.gen_range(b'a'..=b'c')).collect();

        let m = rng.gen_range(0..8);
        let pattern: Vec<u8> = (0..m).map(|_| rng.gen_range(b'a'..=b'c')).collect();

        assert_all_agree(&text, &pattern);
    }
}

#[test]
fn matchers_agree_on_random_embedded_patterns() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let n = rng.gen_range(20..300);
        let text: Vec<u8> = (0..n).map(|_| rng.gen_range(b'a'..=b'z')).collect();

        // Slice the pattern out of the text so a match is guaranteed.
        let m = rng.gen_range(1..10.min(n));
        let start = rng.gen_range(0..=n - m);
        let pattern = text[start..start + m].to_vec();

        let expected = oracle(&text, &pattern);
        assert!(expected.is_some());
        assert_all_agree(&text, &pattern);
    }
}

#[test]
fn rk_prime_choice_does_not_change_results() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let n = rng.gen_range(0..150);
        let text: Vec<u8> = (0..n).map(|_| rng.gen_range(b'a'..=b'd')).collect();
        let m = rng.gen_range(0..6);
        let pattern: Vec<u8> = (0..m).map(|_| rng.gen_range(b'a'..=b'd')).collect();

        let expected = oracle(&text, &pattern);
        for prime in [2, 101, 4099, 1_000_000_007] {
            assert_eq!(rk_find_with_prime(&text, &pattern, prime), expected);
        }
    }
}
