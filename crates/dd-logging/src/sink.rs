//! Output destinations attached to logger nodes.

use dd_logging_types::{LogError, LogLevel, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use crate::format::{Record, FORMATTER};

/// Which kind of destination a sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    /// A log file on disk
    File,
    /// Standard error
    Console,
    /// A caller-supplied writer
    Writer,
}

enum Target {
    File {
        path: PathBuf,
        out: Mutex<LineWriter<File>>,
    },
    Console,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// An output destination with its own threshold.
pub struct Sink {
    level: LogLevel,
    target: Target,
}

impl Sink {
    /// Open `path` for appending (creating it if needed).
    ///
    /// The parent directory must already exist.
    pub fn file(path: impl AsRef<Path>, level: LogLevel) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::io(path, e))?;

        Ok(Self {
            level,
            target: Target::File {
                path: path.to_path_buf(),
                out: Mutex::new(LineWriter::new(file)),
            },
        })
    }

    /// A sink writing to standard error.
    pub fn console(level: LogLevel) -> Self {
        Self {
            level,
            target: Target::Console,
        }
    }

    /// A sink writing to any `Write` implementation.
    pub fn writer(out: impl Write + Send + 'static, level: LogLevel) -> Self {
        Self {
            level,
            target: Target::Writer(Mutex::new(Box::new(out))),
        }
    }

    /// The kind tag used for selective removal.
    pub fn kind(&self) -> SinkKind {
        match self.target {
            Target::File { .. } => SinkKind::File,
            Target::Console => SinkKind::Console,
            Target::Writer(_) => SinkKind::Writer,
        }
    }

    /// This sink's threshold.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Path of a file sink.
    pub fn path(&self) -> Option<&Path> {
        match &self.target {
            Target::File { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether this sink emits records at `level`.
    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Write one formatted line.
    ///
    /// Each line is written while holding the destination's lock, so
    /// concurrent producers never interleave within a line.
    pub fn emit(&self, record: &Record) -> io::Result<()> {
        let mut line = FORMATTER.format(record);
        line.push('\n');

        match &self.target {
            Target::File { out, .. } => out.lock().write_all(line.as_bytes()),
            Target::Console => {
                let mut err = io::stderr().lock();
                err.write_all(line.as_bytes())?;
                err.flush()
            }
            Target::Writer(out) => {
                let mut out = out.lock();
                out.write_all(line.as_bytes())?;
                out.flush()
            }
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Sink");
        s.field("kind", &self.kind()).field("level", &self.level);
        if let Some(path) = self.path() {
            s.field("path", &path);
        }
        s.finish()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::SharedBuf;
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run.log");
        fs::write(&path, "existing\n").unwrap();

        let sink = Sink::file(&path, LogLevel::Debug).unwrap();
        assert_eq!(sink.kind(), SinkKind::File);
        assert_eq!(sink.path(), Some(path.as_path()));

        sink.emit(&Record::new(LogLevel::Info, "app", "héllo")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "existing");
        assert!(lines[1].ends_with("  INFO     app  héllo"));
    }

    #[test]
    fn test_file_sink_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope").join("run.log");
        assert!(matches!(
            Sink::file(&path, LogLevel::Info),
            Err(LogError::Io { .. })
        ));
    }

    #[test]
    fn test_threshold() {
        let sink = Sink::console(LogLevel::Warning);
        assert_eq!(sink.kind(), SinkKind::Console);
        assert!(!sink.accepts(LogLevel::Info));
        assert!(sink.accepts(LogLevel::Warning));
        assert!(sink.accepts(LogLevel::Error));
    }

    #[test]
    fn test_writer_sink() {
        let buf = SharedBuf::default();
        let sink = Sink::writer(buf.clone(), LogLevel::Debug);
        assert_eq!(sink.kind(), SinkKind::Writer);
        assert!(sink.path().is_none());

        sink.emit(&Record::new(LogLevel::Error, "app.db", "gone")).unwrap();
        assert_eq!(buf.lines().len(), 1);
        assert!(buf.contents().ends_with("  ERROR    app.db  gone\n"));
    }
}
