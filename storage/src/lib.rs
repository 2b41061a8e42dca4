pub mod corpus;

pub use corpus::{Corpus, load_corpora, load_corpus};
