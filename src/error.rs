// std imports
use std::io::{self, Write};
use std::path::PathBuf;

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    SizeParseError(#[from] SizeParseError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to open file {path:?}: {source}")]
    FailedToOpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read file {path:?}: {source}")]
    FailedToReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open output {path:?}: {source}")]
    FailedToOpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("directory {path:?} does not exist")]
    DirectoryNotFound { path: PathBuf },
    #[error("worker thread panicked")]
    WorkerPanicked,
}

impl Error {
    /// Prints the error to stderr.
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    /// Prints the error to the given writer with a highlighted prefix.
    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)
    }
}

/// SizeParseError is an error which may occur when parsing size.
#[derive(Error, Debug)]
pub enum SizeParseError {
    #[error("invalid size {0:?}, use \"64K\" or \"64KiB\" format for IEC units or \"64KB\" format for SI units")]
    InvalidSize(String),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
