// std imports
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::num::NonZeroU64;
use std::path::Path;

// third-party imports
use sha2::{Digest as _, Sha256};

// local imports
use crate::error::{Error, Result};

// ---

/// SHA-256 digest of a file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Hashes at most `limit` bytes from the start of the file, or the whole file if there is no limit.
pub fn hash_file(path: &Path, limit: Option<NonZeroU64>) -> Result<Digest> {
    let file = File::open(path).map_err(|source| Error::FailedToOpenFile {
        path: path.to_owned(),
        source,
    })?;

    hash_reader(file, limit).map_err(|source| Error::FailedToReadFile {
        path: path.to_owned(),
        source,
    })
}

pub fn hash_reader<R: Read>(reader: R, limit: Option<NonZeroU64>) -> io::Result<Digest> {
    let mut reader = reader.take(limit.map_or(u64::MAX, NonZeroU64::get));
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;

    Ok(Digest(hasher.finalize().into()))
}

#[cfg(test)]
mod tests;
