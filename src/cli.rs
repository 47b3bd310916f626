// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::error::*;
use crate::settings::Settings;

// ---

/// Recursively hashes files under a directory, skipping paths matched by wildcard patterns.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path.
    #[arg(long, env = "HASHFILES_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to scan.
    #[arg(short, long, default_value = ".", env = "HASHFILES_DIR")]
    pub dir: PathBuf,

    /// Skip files whose path matches the wildcard pattern, may be repeated.
    /// Supports '*', '?' and '\' escapes.
    #[arg(short, long, number_of_values = 1)]
    pub ignore: Vec<String>,

    /// Output log file, use '-' for stdout.
    #[arg(short, long, env = "HASHFILES_OUTPUT", overrides_with = "output")]
    pub output: Option<String>,

    /// Match ignore patterns case-sensitively.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Number of hashing threads.
    #[arg(long, short = 'C', env = "HASHFILES_CONCURRENCY", overrides_with = "concurrency")]
    pub concurrency: Option<usize>,

    /// Number of bytes hashed from the start of each file, 0 hashes whole files.
    #[arg(long, env = "HASHFILES_HASH_LIMIT", value_parser = parse_size, overrides_with = "hash_limit")]
    pub hash_limit: Option<u64>,
}

impl Opt {
    /// Output target given on the command line, or the configured one.
    pub fn output_target<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.output.as_deref().unwrap_or(&settings.output)
    }
}

pub fn parse_size(s: &str) -> std::result::Result<u64, SizeParseError> {
    if let Ok(value) = s.trim().parse::<u64>() {
        return Ok(value);
    }
    match bytefmt::parse(s) {
        Ok(value) => Ok(value),
        Err(_) => {
            if let Ok(value) = bytefmt::parse(s.to_owned() + "ib") {
                return Ok(value);
            }
            Err(SizeParseError::InvalidSize(s.into()))
        }
    }
}
