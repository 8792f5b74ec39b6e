//! Random dictionary word generation.
//!
//! The whole corpus is built in memory and then written in one call,
//! overwriting the target. A crash mid-write leaves a truncated file.
//! Past a few million words this should move to incremental writes
//! through a `BufWriter`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::ProgressBar;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::Config;
use crate::error::WordcodecError;
use crate::wordlist::WORDLIST;

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub words: usize,
    pub bytes: usize,
    pub seed: Option<u64>,
    pub elapsed_ms: u128,
}

/// Seeded RNG when `seed` is given, OS entropy otherwise.
pub fn corpus_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Draw `count` words uniformly from [`WORDLIST`].
pub fn generate_words<R: Rng>(rng: &mut R, count: usize) -> Vec<&'static str> {
    (0..count)
        .map(|_| WORDLIST[rng.gen_range(0..WORDLIST.len())])
        .collect()
}

/// Generate `count` words joined by single spaces.
pub fn generate_corpus(count: usize, seed: Option<u64>) -> String {
    let mut rng = corpus_rng(seed);
    generate_words(&mut rng, count).join(" ")
}

fn generate_with_progress(
    rng: &mut ChaCha8Rng,
    count: usize,
    progress: Option<&ProgressBar>,
) -> Vec<&'static str> {
    let Some(pb) = progress else {
        return generate_words(rng, count);
    };
    let mut words = Vec::with_capacity(count);
    let step = (count / 100).max(1);
    while words.len() < count {
        let n = step.min(count - words.len());
        words.extend(generate_words(rng, n));
        pb.inc(n as u64);
    }
    pb.finish();
    words
}

/// Generate `count` words and write them to `path`, replacing any existing file.
pub fn write_corpus<P: AsRef<Path>>(
    path: P,
    count: usize,
    seed: Option<u64>,
    progress: Option<&ProgressBar>,
) -> Result<GenerationReport, WordcodecError> {
    let start = Instant::now();
    let mut rng = corpus_rng(seed);
    let corpus = generate_with_progress(&mut rng, count, progress).join(" ");
    std::fs::write(path.as_ref(), &corpus)?;
    Ok(GenerationReport {
        path: path.as_ref().to_path_buf(),
        words: count,
        bytes: corpus.len(),
        seed,
        elapsed_ms: start.elapsed().as_millis(),
    })
}

/// Run a generation with the settings in `cfg`.
pub fn write_corpus_with_config(
    cfg: &Config,
    progress: Option<&ProgressBar>,
) -> Result<GenerationReport, WordcodecError> {
    cfg.validate()?;
    write_corpus(&cfg.corpus_path, cfg.word_count, cfg.seed, progress)
}
