use std::fmt;
use std::io;
use std::path::Path;

use crate::error::WordcodecError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "File is not valid UTF-8 text.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Wrap a library error, attaching the path for I/O failures.
pub fn wordcodec_cli_error(operation: &str, path: &Path, err: WordcodecError) -> CliError {
    match err {
        WordcodecError::Io(io) => io_cli_error(operation, path, io),
        other => CliError {
            msg: format!("Error {} '{}': {}", operation, path.display(), cli_hint(&other)),
            source: Some(Box::new(other)),
        },
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &WordcodecError) -> String {
    use WordcodecError::*;
    match err {
        MissingToken(t) => format!(
            "token {t:?} is not in the codebook. Repeated words only keep the index of their last occurrence."
        ),
        Codebook(e) => format!("{e}. Regenerate the codebook with `cipher encode --codebook`."),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
    }
}
