//
// hashing pipeline:
// ------------------------------------------------------
//               | N                  ->   |
// | dir-scan -> | N * hash-file      -> % | write-log ->
//               | N                  ->   |
// ------------------------------------------------------
//

// std imports
use std::io::Write;
use std::num::NonZeroU64;
use std::path::Path;

// third-party imports
use crossbeam_channel as channel;
use crossbeam_utils::thread;

// local imports
use crate::cli::{Opt, parse_size};
use crate::error::{Error, Result};
use crate::hashing::hash_file;
use crate::output::{Record, RecordWriter};
use crate::scanning::{FileInfo, IgnoreFilter, scan};
use crate::settings::Settings;

// ---

#[derive(Debug)]
pub struct Options {
    pub ignore: IgnoreFilter,
    pub concurrency: usize,
    pub hash_limit: Option<NonZeroU64>,
}

impl Options {
    /// Combines configuration file settings with command line options.
    ///
    /// Command line values win, ignore patterns from both are kept and case sensitivity is on if
    /// either enables it. Concurrency of zero or unset means `cpus` workers.
    pub fn resolve(settings: &Settings, opt: &Opt, cpus: usize) -> Result<Self> {
        let case_sensitive = opt.case_sensitive || settings.case_sensitive;
        let patterns = settings.ignore.iter().chain(opt.ignore.iter());
        let ignore = IgnoreFilter::new(patterns, case_sensitive);
        if ignore.is_empty() {
            log::debug!("no ignore patterns configured");
        }

        let concurrency = match opt.concurrency.or(settings.concurrency) {
            None | Some(0) => cpus,
            Some(value) => value,
        };
        let hash_limit = match opt.hash_limit {
            Some(value) => value,
            None => parse_size(&settings.hash_limit)?,
        };

        Ok(Self {
            ignore,
            concurrency,
            hash_limit: NonZeroU64::new(hash_limit),
        })
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub hashed: usize,
    pub failed: usize,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Hashes every file under `root` that is not ignored and writes a record per file to `output`.
    ///
    /// Files that cannot be read are logged and counted as failed, the run goes on.
    pub fn run<W: Write>(&self, root: &Path, output: W) -> Result<Summary> {
        if !root.is_dir() {
            return Err(Error::DirectoryNotFound { path: root.to_owned() });
        }

        let n = self.options.concurrency.max(1);
        let limit = self.options.hash_limit;
        log::debug!("scanning {} with {} workers", root.display(), n);

        thread::scope(|scope| -> Result<Summary> {
            let (txi, rxi) = channel::bounded::<FileInfo>(n * 2);
            let (txo, rxo) = channel::bounded::<Option<Record>>(n * 2);

            // spawn scanner thread
            let filter = &self.options.ignore;
            scope.spawn(move |_| {
                for file in scan(root, filter) {
                    if txi.send(file).is_err() {
                        break;
                    }
                }
            });

            // spawn hashing threads
            for _ in 0..n {
                let rxi = rxi.clone();
                let txo = txo.clone();
                scope.spawn(move |_| {
                    for file in rxi.iter() {
                        let record = match hash_file(&file.path, limit) {
                            Ok(digest) => Some(Record {
                                path: file.path,
                                size: file.size,
                                digest,
                            }),
                            Err(err) => {
                                log::warn!("{}", err);
                                None
                            }
                        };
                        if txo.send(record).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(rxi);
            drop(txo);

            // write records on the calling thread
            let mut writer = RecordWriter::new(output);
            let mut summary = Summary::default();
            for record in rxo.iter() {
                match record {
                    Some(record) => writer.write(&record)?,
                    None => summary.failed += 1,
                }
            }
            summary.hashed = writer.written();
            writer.finish()?;

            log::info!("hashed {} files, {} failed", summary.hashed, summary.failed);
            Ok(summary)
        })
        .map_err(|_| Error::WorkerPanicked)?
    }
}
