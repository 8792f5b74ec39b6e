use std::path::PathBuf;

use crate::error::WordcodecError;

/// Default corpus file shared by the generator and the loader.
pub const CORPUS_FILE: &str = "random_words.txt";
/// Number of words written by a default generation run.
pub const DEFAULT_WORD_COUNT: usize = 100_000;
/// Last preview index, inclusive. Eleven words are previewed.
pub const DEFAULT_LAST_PREVIEW_INDEX: usize = 10;

/// Runtime configuration for the corpus generator and loader.
#[derive(Debug, Clone)]
pub struct Config {
    /// Corpus file path.
    pub corpus_path: PathBuf,
    /// Number of words to generate.
    pub word_count: usize,
    /// Highest token index printed by the loader preview.
    pub last_preview_index: usize,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(CORPUS_FILE),
            word_count: DEFAULT_WORD_COUNT,
            last_preview_index: DEFAULT_LAST_PREVIEW_INDEX,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), WordcodecError> {
        if self.word_count == 0 {
            return Err(WordcodecError::Config("word count must be at least 1".into()));
        }
        if self.corpus_path.as_os_str().is_empty() {
            return Err(WordcodecError::Config("corpus path is empty".into()));
        }
        Ok(())
    }
}
