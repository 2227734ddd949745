//! Dual-sink logging: every message goes to a [`LogSink`] and, when a log
//! file is set, is appended to that file as one line.
//!
//! File failures are counted in [`crate::stats`] and otherwise ignored, so a
//! log call never fails and never panics.

use crate::config::LoggerConfig;
use crate::error::ConfigError;
use crate::stats;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Sentinel meaning "do not write to a file".
pub const NO_FILE: &str = "";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Severity {
    #[default]
    Info,
    Debug,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Error => "error",
        }
    }

    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            Severity::Info => tracing::Level::INFO,
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "error" => Ok(Severity::Error),
            _ => Err(ConfigError::UnknownSeverity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, ConfigError> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privacy {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub text: &'a str,
    pub privacy: Privacy,
}

pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord<'_>);
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn emit(&self, record: &LogRecord<'_>) {
        (**self).emit(record)
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn emit(&self, record: &LogRecord<'_>) {
        (**self).emit(record)
    }
}

impl<A: LogSink, B: LogSink> LogSink for (A, B) {
    fn emit(&self, record: &LogRecord<'_>) {
        self.0.emit(record);
        self.1.emit(record);
    }
}

/// System log sink backed by `tracing`. The category plays the role of the
/// log handle and is attached to every event.
#[derive(Debug, Clone)]
pub struct TracingSink {
    category: String,
}

impl TracingSink {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord<'_>) {
        let public = record.privacy == Privacy::Public;
        let text = if public { record.text } else { "<private>" };
        let category = self.category.as_str();
        match record.severity {
            Severity::Info => tracing::info!(category, public, "{text}"),
            Severity::Debug => tracing::debug!(category, public, "{text}"),
            Severity::Error => tracing::error!(category, public, "{text}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn emit(&self, record: &LogRecord<'_>) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", record.text);
    }
}

/// Render `args`, send it to `sink`, then append it to `log_file` unless the
/// path is [`NO_FILE`].
pub fn log(sink: &dyn LogSink, log_file: &Path, severity: Severity, args: fmt::Arguments<'_>) {
    let text = fmt::format(args);
    sink.emit(&LogRecord {
        severity,
        text: &text,
        privacy: Privacy::Public,
    });

    if log_file.as_os_str().is_empty() {
        return;
    }
    if append_line(log_file, &text).is_err() {
        stats::record_file_write_failure();
    }
}

fn append_line(path: &Path, text: &str) -> io::Result<()> {
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.flush()
}

pub type DynSink = Box<dyn LogSink>;

pub struct DiagnosticLogger<S = TracingSink> {
    sink: S,
    log_file: PathBuf,
}

impl<S: LogSink> DiagnosticLogger<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            log_file: PathBuf::from(NO_FILE),
        }
    }

    /// An empty path turns file mirroring off.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn log_file(&self) -> Option<&Path> {
        if self.log_file.as_os_str().is_empty() {
            None
        } else {
            Some(&self.log_file)
        }
    }

    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        log(&self.sink, &self.log_file, severity, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }
}

impl DiagnosticLogger<DynSink> {
    pub fn from_config(config: &LoggerConfig) -> Self {
        let system = TracingSink::new(config.category.clone());
        let sink: DynSink = if config.mirror_stdout {
            Box::new((system, StdoutSink))
        } else {
            Box::new(system)
        };
        let logger = DiagnosticLogger::new(sink);
        match &config.log_file {
            Some(path) => logger.with_log_file(path),
            None => logger,
        }
    }
}

impl<S> fmt::Debug for DiagnosticLogger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticLogger")
            .field("log_file", &self.log_file)
            .finish_non_exhaustive()
    }
}

/// `format!`-style logging through a [`DiagnosticLogger`].
///
/// ```
/// use aulog_diag::{DiagnosticLogger, Severity, TracingSink, aulog};
///
/// let logger = DiagnosticLogger::new(TracingSink::new("demo"));
/// aulog!(logger, Severity::Error, "render failed: {}", -10874);
/// ```
#[macro_export]
macro_rules! aulog {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, ::std::format_args!($($arg)+))
    };
}
