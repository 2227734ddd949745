use aulog_diag::{DiagnosticLogger, LogRecord, LogSink, NO_FILE, Severity, aulog, log, stats};
use std::path::Path;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl LogSink for RecordingSink {
    fn emit(&self, record: &LogRecord<'_>) {
        self.lines.lock().unwrap().push(record.text.to_string());
    }
}

#[test]
fn each_call_appends_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugin.log");
    let logger = DiagnosticLogger::new(RecordingSink::default()).with_log_file(&path);

    aulog!(logger, Severity::Info, "sample rate {}", 44100);
    aulog!(logger, Severity::Error, "status {}", aulog_diag::resolve_status_name(-10868));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "sample rate 44100\nstatus kAudioUnitErr_FormatNotSupported\n"
    );
    assert_eq!(logger.sink().lines.lock().unwrap().len(), 2);
}

#[test]
fn existing_contents_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugin.log");
    std::fs::write(&path, "earlier\n").unwrap();

    let sink = RecordingSink::default();
    log(&sink, &path, Severity::Debug, format_args!("later"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier\nlater\n");
}

#[test]
fn no_file_sentinel_leaves_files_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("untouched.log");
    std::fs::write(&path, "keep\n").unwrap();

    let logger = DiagnosticLogger::new(RecordingSink::default()).with_log_file(NO_FILE);
    aulog!(logger, Severity::Info, "only to the sink");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep\n");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    assert_eq!(
        *logger.sink().lines.lock().unwrap(),
        vec!["only to the sink".to_string()]
    );
}

#[test]
fn unwritable_path_still_reaches_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("dir").join("plugin.log");
    let before = stats().file_write_failures;

    let sink = RecordingSink::default();
    log(&sink, &path, Severity::Error, format_args!("render timeout"));

    assert!(!path.exists());
    assert_eq!(*sink.lines.lock().unwrap(), vec!["render timeout".to_string()]);
    assert!(stats().file_write_failures > before);
}

#[test]
fn directory_as_log_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let sink = RecordingSink::default();
    log(&sink, dir.path(), Severity::Info, format_args!("x"));
    assert_eq!(sink.lines.lock().unwrap().len(), 1);
    assert!(Path::new(dir.path()).is_dir());
}

struct FileCheckSink {
    path: std::path::PathBuf,
    seen_during_emit: Mutex<Option<String>>,
}

impl LogSink for FileCheckSink {
    fn emit(&self, _record: &LogRecord<'_>) {
        let contents = std::fs::read_to_string(&self.path).unwrap_or_default();
        *self.seen_during_emit.lock().unwrap() = Some(contents);
    }
}

#[test]
fn sink_runs_before_file_append() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugin.log");
    let sink = FileCheckSink {
        path: path.clone(),
        seen_during_emit: Mutex::new(None),
    };

    log(&sink, &path, Severity::Info, format_args!("hello"));

    assert_eq!(
        sink.seen_during_emit.lock().unwrap().as_deref(),
        Some("")
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
}
