use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use wordcodec::{
    io_utils::{simple_cli_error, wordcodec_cli_error},
    words::write_corpus_with_config,
    Config, CORPUS_FILE, DEFAULT_WORD_COUNT,
};

/// Write a file of random dictionary words separated by single spaces.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Output file, overwritten if present
    #[arg(long, default_value = CORPUS_FILE)]
    output: PathBuf,
    /// Number of words to generate
    #[arg(long, default_value_t = DEFAULT_WORD_COUNT)]
    count: usize,
    /// Seed for a reproducible corpus
    #[arg(long)]
    seed: Option<u64>,
    /// Show a progress bar on stderr
    #[arg(long)]
    status: bool,
    /// Print a JSON report on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cfg = Config {
        corpus_path: args.output,
        word_count: args.count,
        seed: args.seed,
        ..Config::default()
    };

    let progress = if args.status {
        let pb = ProgressBar::new(cfg.word_count as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} words ({elapsed})")
                .map_err(|e| simple_cli_error(&format!("invalid progress template: {e}")))?,
        );
        Some(pb)
    } else {
        None
    };

    let report = write_corpus_with_config(&cfg, progress.as_ref())
        .map_err(|e| wordcodec_cli_error("writing corpus", &cfg.corpus_path, e))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!(
            "Wrote {} words ({} bytes) to {} in {} ms",
            report.words,
            report.bytes,
            report.path.display(),
            report.elapsed_ms
        );
    }
    Ok(())
}
