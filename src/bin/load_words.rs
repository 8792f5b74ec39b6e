use clap::Parser;
use std::path::PathBuf;
use wordcodec::{
    io_utils::wordcodec_cli_error, summarize_file_with_config, Config, CORPUS_FILE,
    DEFAULT_LAST_PREVIEW_INDEX,
};

/// Preview the first words of a corpus file and count all of them.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Corpus file written by gen_words
    #[arg(long, default_value = CORPUS_FILE)]
    input: PathBuf,
    /// Last word index to preview, inclusive
    #[arg(long, default_value_t = DEFAULT_LAST_PREVIEW_INDEX)]
    last_index: usize,
    /// Print the summary as JSON instead
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
        corpus_path: args.input,
        last_preview_index: args.last_index,
        ..Config::default()
    };
    let summary = summarize_file_with_config(&cfg)
        .map_err(|e| wordcodec_cli_error("reading corpus", &cfg.corpus_path, e))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        summary.render(std::io::stdout().lock())?;
    }
    Ok(())
}
