use clap::{Args as ClapArgs, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use wordcodec::{
    io_utils::{io_cli_error, simple_cli_error, wordcodec_cli_error},
    Codebook, DEMO_MESSAGE,
};

/// Word-to-index substitution cipher.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build a codebook from the message and print the encoded message
    Encode {
        #[command(flatten)]
        text: TextSource,
        /// Write the codebook as JSON to this path
        #[arg(long)]
        codebook: Option<PathBuf>,
    },
    /// Decode an encoded message with a saved codebook
    Decode {
        #[command(flatten)]
        text: TextSource,
        /// Codebook JSON written by `encode`
        #[arg(long)]
        codebook: PathBuf,
    },
    /// Encode and decode the built-in demonstration message
    Demo,
}

#[derive(ClapArgs)]
#[group(required = true, multiple = false)]
struct TextSource {
    /// Message text
    #[arg(long)]
    message: Option<String>,
    /// Read the message from a file
    #[arg(long)]
    input: Option<PathBuf>,
}

impl TextSource {
    fn read(&self) -> Result<String, Box<dyn std::error::Error>> {
        match (&self.message, &self.input) {
            (Some(m), _) => Ok(m.clone()),
            (None, Some(path)) => {
                fs::read_to_string(path).map_err(|e| io_cli_error("reading input file", path, e).into())
            }
            (None, None) => Err(simple_cli_error("either --message or --input is required").into()),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    match args.command.unwrap_or(Command::Demo) {
        Command::Encode { text, codebook } => {
            let message = text.read()?;
            let (encoded, book) = wordcodec::encode(&message)
                .map_err(|e| wordcodec_cli_error("encoding", Path::new("<message>"), e))?;
            if let Some(path) = codebook {
                book.save(&path)
                    .map_err(|e| wordcodec_cli_error("writing codebook", &path, e))?;
                eprintln!(
                    "Codebook with {} words from {} tokens written to {}",
                    book.len(),
                    book.tokens.len(),
                    path.display()
                );
            }
            println!("{encoded}");
        }
        Command::Decode { text, codebook } => {
            let encoded = text.read()?;
            let book = Codebook::load(&codebook)
                .map_err(|e| wordcodec_cli_error("reading codebook", &codebook, e))?;
            let decoded = wordcodec::decode(&encoded, &book)
                .map_err(|e| wordcodec_cli_error("decoding with", &codebook, e))?;
            println!("{decoded}");
        }
        Command::Demo => {
            let (encoded, book) = wordcodec::encode(DEMO_MESSAGE)
                .map_err(|e| simple_cli_error(&format!("encoding failed: {e}")))?;
            let decoded = wordcodec::decode(&encoded, &book)
                .map_err(|e| simple_cli_error(&format!("decoding failed: {e}")))?;
            println!("{encoded}");
            println!("{decoded}");
        }
    }
    Ok(())
}
