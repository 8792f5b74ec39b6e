//! Corpus loading and summary.
//!
//! Tokens are split on the single space character and empty tokens are
//! kept, so a trailing space counts as one extra (empty) word and an empty
//! file counts as one word.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::WordcodecError;

/// Line printed above the preview. Eleven words follow it.
pub const PREVIEW_HEADER: &str = "The first ten words:";
/// Separator printed between the preview and the count.
pub const SEPARATOR: &str = "********************";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    /// Tokens at indices `0..=last_preview_index`.
    pub preview: Vec<String>,
    /// Total number of tokens, empty ones included.
    pub total: usize,
}

impl CorpusSummary {
    /// Print the preview and the count in the loader's text format.
    pub fn render<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{PREVIEW_HEADER}")?;
        for word in &self.preview {
            writeln!(out, ">> {word}")?;
        }
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "Number of words: {}", self.total)?;
        Ok(())
    }
}

/// Read the whole corpus file into memory.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<String, WordcodecError> {
    Ok(std::fs::read_to_string(path)?)
}

pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ')
}

/// Collect the preview (inclusive bound) and count every token in one pass.
pub fn summarize(text: &str, last_preview_index: usize) -> CorpusSummary {
    let mut preview = Vec::new();
    let mut total = 0usize;
    for word in split_tokens(text) {
        if total <= last_preview_index {
            preview.push(word.to_string());
        }
        total += 1;
    }
    CorpusSummary { preview, total }
}

/// Load `path` and summarize it.
pub fn summarize_file<P: AsRef<Path>>(
    path: P,
    last_preview_index: usize,
) -> Result<CorpusSummary, WordcodecError> {
    let text = load_corpus(path)?;
    Ok(summarize(&text, last_preview_index))
}

/// Summarize the corpus at `cfg.corpus_path` up to `cfg.last_preview_index`.
pub fn summarize_file_with_config(cfg: &Config) -> Result<CorpusSummary, WordcodecError> {
    summarize_file(&cfg.corpus_path, cfg.last_preview_index)
}
