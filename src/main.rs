// std imports
use std::process;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use hashfiles::{App, Options, Settings, cli, error::*, output};

const HASHFILES_DEBUG_LOG: &str = "HASHFILES_DEBUG_LOG";
const HASHFILES_DEBUG_LOG_STYLE: &str = "HASHFILES_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(HASHFILES_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(HASHFILES_DEBUG_LOG)
                .write_style(HASHFILES_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = Settings::load(opt.config.as_deref())?;

    let app = App::new(Options::resolve(&settings, &opt, num_cpus::get())?);

    let target = opt.output_target(&settings);
    let summary = app.run(&opt.dir, output::open(target)?)?;
    if summary.failed != 0 {
        log::warn!("{} files could not be hashed", summary.failed);
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
