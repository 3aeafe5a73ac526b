//! Run log files.
//!
//! Each run writes two append-only files in the log folder, named after the
//! local start time: `<ts>.log` with every info and higher record, and
//! `<ts>_errors.log` with error records only. Both use the line format
//! `2026-10-18 09:12:44,512 - INFO - message`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use env_logger::fmt::Formatter;
use env_logger::{Target, WriteStyle};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::Result;

/// Only this crate's records go to the run logs.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const LINE_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Paths of the two files of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFiles {
    pub all: PathBuf,
    pub errors: PathBuf,
}

impl LogFiles {
    /// File names for a run started at `started`.
    pub fn for_run(log_dir: &Path, started: DateTime<Local>) -> Self {
        let stamp = started.format(FILE_STAMP_FORMAT);
        Self {
            all: log_dir.join(format!("{stamp}.log")),
            errors: log_dir.join(format!("{stamp}_errors.log")),
        }
    }
}

/// Logger writing the full log and the error-only log.
pub struct LogSink {
    all: env_logger::Logger,
    errors: env_logger::Logger,
}

impl LogSink {
    /// Create the log folder if needed and open both files for appending.
    pub fn create(log_dir: &Path, started: DateTime<Local>) -> Result<(Self, LogFiles)> {
        fs::create_dir_all(log_dir)?;
        let files = LogFiles::for_run(log_dir, started);

        let sink = Self {
            all: file_logger(open_append(&files.all)?, LevelFilter::Info),
            errors: file_logger(open_append(&files.errors)?, LevelFilter::Error),
        };
        Ok((sink, files))
    }
}

impl Log for LogSink {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.all.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        self.all.log(record);
        self.errors.log(record);
    }

    fn flush(&self) {
        self.all.flush();
        self.errors.flush();
    }
}

/// Install the run logger as the global `log` backend.
pub fn init(log_dir: &Path) -> Result<LogFiles> {
    let (sink, files) = LogSink::create(log_dir, Local::now())?;
    log::set_boxed_logger(Box::new(sink)).map_err(io::Error::other)?;
    log::set_max_level(LevelFilter::Info);
    Ok(files)
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn file_logger(file: File, level: LevelFilter) -> env_logger::Logger {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Off)
        .filter_module(CRATE_TARGET, level)
        .write_style(WriteStyle::Never)
        .format(format_line)
        .target(Target::Pipe(Box::new(file)))
        .build()
}

fn format_line(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    writeln!(
        buf,
        "{} - {} - {}",
        Local::now().format(LINE_STAMP_FORMAT),
        level_name(record.level()),
        record.args()
    )
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
