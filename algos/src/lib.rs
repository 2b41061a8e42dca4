mod bm;
mod kmp;
mod rk;

pub trait StringSearch {
    type Config;
    type State;

    fn build(_config: Self::Config) -> Self::State {
        unimplemented!("this algorithm doesnt use build");
    }
    fn find_bytes(state: Self::State, text: &[u8], pattern: &[u8]) -> Option<usize>;
    fn find(state: Self::State, text: &str, pattern: &str) -> Option<usize> {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        Self::find_bytes(state, text_bytes, pattern_bytes)
    }
}

pub use bm::{BM, bm_find};
pub use kmp::{KMP, kmp_find};
pub use rk::{DEFAULT_PRIME, RK, rk_find, rk_find_with_prime};
