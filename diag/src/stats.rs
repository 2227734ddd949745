use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

static FILE_WRITE_FAILURES: AtomicU64 = AtomicU64::new(0);
static DUMP_TRUNCATIONS: AtomicU64 = AtomicU64::new(0);

/// Counters for failures that the logger swallows instead of reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoggerStats {
    pub file_write_failures: u64,
    pub dump_truncations: u64,
}

pub fn stats() -> LoggerStats {
    LoggerStats {
        file_write_failures: FILE_WRITE_FAILURES.load(Ordering::Relaxed),
        dump_truncations: DUMP_TRUNCATIONS.load(Ordering::Relaxed),
    }
}

pub(crate) fn record_file_write_failure() {
    FILE_WRITE_FAILURES.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_dump_truncation() {
    DUMP_TRUNCATIONS.fetch_add(1, Ordering::Relaxed);
}
