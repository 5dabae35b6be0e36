//! Log output for interactive runs
//!
//! The map owns the terminal while the game runs, so records go to a file
//! instead of stderr. `RUST_LOG` still selects what is recorded; the default
//! is `info`.

use std::fs::File;
use std::io;
use std::path::Path;

use env_logger::{Builder, Logger, Target, WriteStyle};
use log::LevelFilter;

/// Build a logger that appends plain records to `path`
pub fn file_logger(path: &Path) -> io::Result<Logger> {
    let file = File::options().create(true).append(true).open(path)?;
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(file)));
    Ok(builder.build())
}

/// Install [`file_logger`] as the global logger
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let logger = file_logger(path)?;
    log::set_max_level(logger.filter());
    log::set_boxed_logger(Box::new(logger)).map_err(io::Error::other)
}
