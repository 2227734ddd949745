pub mod codes;
pub mod config;
pub mod dump;
pub mod error;
pub mod logger;
pub mod stats;

pub use codes::{
    CodeEntry, CodeRegistry, CodeTable, TableKind, fourcc, parse_fourcc, resolve_property_name,
    resolve_status_name,
};
pub use config::LoggerConfig;
pub use dump::{Describe, Field, STRUCT_MESSAGE_LENGTH, print_struct, render_struct};
pub use error::ConfigError;
pub use logger::{
    DiagnosticLogger, DynSink, LogRecord, LogSink, NO_FILE, Privacy, Severity, StdoutSink,
    TracingSink, log,
};
pub use stats::{LoggerStats, stats};
