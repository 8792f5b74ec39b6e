//! Small word utilities: a word-to-index substitution cipher, a random
//! dictionary word generator and a corpus loader that previews and counts
//! the generated words.

pub mod cipher;
pub mod config;
pub mod corpus;
pub mod error;
pub mod io_utils;
pub mod wordlist;
pub mod words;

pub use cipher::{decode, encode, Codebook, DEMO_MESSAGE};
pub use config::{Config, CORPUS_FILE, DEFAULT_LAST_PREVIEW_INDEX, DEFAULT_WORD_COUNT};
pub use corpus::{
    load_corpus, split_tokens, summarize, summarize_file, summarize_file_with_config,
    CorpusSummary,
};
pub use error::WordcodecError;
pub use words::{generate_corpus, generate_words, write_corpus, GenerationReport};
