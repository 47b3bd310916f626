// std imports
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write, stdout};
use std::path::{Path, PathBuf};

// local imports
use crate::error::{Error, Result};
use crate::hashing::Digest;

// ---

pub type OutputStream = Box<dyn Write + Send>;

/// Opens the output log in append mode, creating it if needed, or stdout for `-`.
pub fn open(target: &str) -> Result<OutputStream> {
    if target == "-" {
        return Ok(Box::new(stdout()));
    }

    let path = Path::new(target);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::FailedToOpenOutput {
            path: path.to_owned(),
            source,
        })?;

    Ok(Box::new(io::BufWriter::new(file)))
}

// ---

/// One line of the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub path: PathBuf,
    pub size: u64,
    pub digest: Digest,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.path.display(), self.size, self.digest)
    }
}

/// Sole owner of the output stream, records from all workers go through it.
pub struct RecordWriter<W> {
    output: W,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output, written: 0 }
    }

    pub fn write(&mut self, record: &Record) -> io::Result<()> {
        writeln!(self.output, "{}", record)?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.output.flush()?;
        Ok(self.output)
    }
}
