//! Word-to-index substitution cipher.
//!
//! A [`Codebook`] assigns every whitespace-separated token of a message its
//! zero-based position. Entries are not deduplicated: when a word repeats,
//! the later position overwrites the earlier one, so every occurrence of a
//! repeated word encodes to the index of its *last* occurrence. Indices of
//! earlier occurrences are absent from the inverse mapping and fail to
//! decode with [`WordcodecError::MissingToken`].

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WordcodecError;

/// Demonstration message encoded by the `cipher` binary.
///
/// The three glued words (`Python,has`, `Python.It`, `glueneeded`) are part
/// of the message.
pub const DEMO_MESSAGE: &str = "NumPy, short for Numerical Python,\
has long been a cornerstone of numerical computing in Python.\
It provides the data structures, algorithms, and library glue\
needed for most scientific applications involving numerical data in Python.";

/// Forward mapping from word to stringified index.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Codebook {
    /// Source tokens in the order they were enumerated. More than `len()`
    /// when words repeat.
    pub tokens: Vec<String>,
    /// Word to index. Repeated words hold the index of their last occurrence.
    pub words_to_nums: BTreeMap<String, String>,
}

impl Codebook {
    /// Enumerate the tokens of `text` and map each one to its position.
    pub fn from_message(text: &str) -> Self {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        let mut words_to_nums = BTreeMap::new();
        for (n, w) in tokens.iter().enumerate() {
            words_to_nums.insert(w.clone(), n.to_string());
        }
        Self { tokens, words_to_nums }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words_to_nums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words_to_nums.is_empty()
    }

    /// Index to word. Exact inversion of `words_to_nums`.
    pub fn inverse(&self) -> HashMap<&str, &str> {
        self.words_to_nums
            .iter()
            .map(|(w, n)| (n.as_str(), w.as_str()))
            .collect()
    }

    /// Replace each token of `message` with its index.
    pub fn encode(&self, message: &str) -> Result<String, WordcodecError> {
        let nums = message
            .split_whitespace()
            .map(|w| {
                self.words_to_nums
                    .get(w)
                    .map(String::as_str)
                    .ok_or_else(|| WordcodecError::MissingToken(w.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(nums.join(" "))
    }

    /// Replace each index token of `encoded` with its word.
    pub fn decode(&self, encoded: &str) -> Result<String, WordcodecError> {
        let nums_to_words = self.inverse();
        let words = encoded
            .split_whitespace()
            .map(|n| {
                nums_to_words
                    .get(n)
                    .copied()
                    .ok_or_else(|| WordcodecError::MissingToken(n.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(words.join(" "))
    }

    /// Load a codebook from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordcodecError> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Write this codebook to disk as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), WordcodecError> {
        let data = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

/// Build a codebook from `message` and encode that same message with it.
pub fn encode(message: &str) -> Result<(String, Codebook), WordcodecError> {
    let codebook = Codebook::from_message(message);
    let encoded = codebook.encode(message)?;
    Ok((encoded, codebook))
}

/// Decode `encoded` with the inverse of `codebook`.
pub fn decode(encoded: &str, codebook: &Codebook) -> Result<String, WordcodecError> {
    codebook.decode(encoded)
}
