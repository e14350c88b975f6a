//! Per-player logger with independently levelled file and console sinks.
//!
//! Every line has the form `[api <player>] [HH:MM:SS.mmm] [<level>] <message>`.
//! A line is formatted in full before the sink lock is taken, so concurrent
//! writers never interleave partial lines.

use crate::config::LogConfig;
use crate::error::Result;
use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One output of an [`ApiLogger`]. Write and flush errors are ignored.
pub struct Sink {
    level: LevelFilter,
    flush_level: Option<Level>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Sink {
    pub fn new(writer: Box<dyn Write + Send>, level: LevelFilter) -> Self {
        Self {
            level,
            flush_level: None,
            writer: Mutex::new(writer),
        }
    }

    pub fn off() -> Self {
        Self::new(Box::new(io::sink()), LevelFilter::Off)
    }

    /// Flush after every record at `level` or more severe.
    pub fn flush_on(mut self, level: Level) -> Self {
        self.flush_level = Some(level);
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    fn accepts(&self, level: Level) -> bool {
        level <= self.level
    }

    fn write_line(&self, level: Level, line: &str) {
        let mut writer = self.writer.lock();
        let _ = writer.write_all(line.as_bytes());
        if matches!(self.flush_level, Some(flush_level) if level <= flush_level) {
            let _ = writer.flush();
        }
    }

    fn flush(&self) {
        let _ = self.writer.lock().flush();
    }
}

pub fn log_file_path(dir: &Path, player_id: i64) -> PathBuf {
    dir.join(format!("api-{player_id}-log.txt"))
}

/// Level names as they appear in a log line.
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

pub struct ApiLogger {
    player_id: i64,
    sinks: Vec<Sink>,
}

impl ApiLogger {
    /// Builds the file and console sinks described by `config`.
    ///
    /// The log directory is created if needed and an existing log file for
    /// the same player is truncated. No file is touched when `to_file` is off.
    pub fn new(player_id: i64, config: &LogConfig) -> Result<Self> {
        let file = if config.to_file {
            fs::create_dir_all(&config.log_dir)?;
            let path = log_file_path(&config.log_dir, player_id);
            log::debug!("api {player_id} logging to {}", path.display());
            Sink::new(Box::new(File::create(path)?), LevelFilter::Trace).flush_on(Level::Warn)
        } else {
            Sink::off()
        };
        // Warn-only overrides a disabled console.
        let console_level = match (config.to_console, config.warn_only) {
            (_, true) => LevelFilter::Warn,
            (true, false) => LevelFilter::Info,
            (false, false) => LevelFilter::Off,
        };
        let console = Sink::new(Box::new(io::stdout()), console_level);
        Ok(Self::with_sinks(player_id, vec![file, console]))
    }

    pub fn with_sinks(player_id: i64, sinks: Vec<Sink>) -> Self {
        Self { player_id, sinks }
    }

    pub fn player_id(&self) -> i64 {
        self.player_id
    }

    pub fn trace(&self, args: fmt::Arguments) {
        self.emit(Level::Trace, args)
    }

    pub fn info(&self, args: fmt::Arguments) {
        self.emit(Level::Info, args)
    }

    pub fn warn(&self, args: fmt::Arguments) {
        self.emit(Level::Warn, args)
    }

    pub fn error(&self, args: fmt::Arguments) {
        self.emit(Level::Error, args)
    }

    fn emit(&self, level: Level, args: fmt::Arguments) {
        self.log(
            &Record::builder()
                .level(level)
                .target("sortie_api")
                .args(args)
                .build(),
        )
    }

    fn format_line(&self, level: Level, args: &fmt::Arguments) -> String {
        format!(
            "[api {}] [{}] [{}] {}\n",
            self.player_id,
            Local::now().format("%H:%M:%S%.3f"),
            level_name(level),
            args
        )
    }
}

impl Log for ApiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.sinks.iter().any(|s| s.accepts(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record.level(), record.args());
        for sink in self.sinks.iter().filter(|s| s.accepts(record.level())) {
            sink.write_line(record.level(), &line);
        }
    }

    fn flush(&self) {
        for sink in self.sinks.iter() {
            sink.flush();
        }
    }
}

/// In-memory writer for capturing log output.
#[derive(Clone, Default)]
pub struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<Mutex<usize>>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn flush_count(&self) -> usize {
        *self.flushes.lock()
    }
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        *self.flushes.lock() += 1;
        Ok(())
    }
}
