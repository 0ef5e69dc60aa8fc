//! Report log file: header, timestamped body, footer.
//!
//! Every body line is also forwarded to the `log` facade under
//! [`LOG_TARGET`]. If the file cannot be created, or a write fails later on,
//! the log keeps running as a console-only sink.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

pub const LOG_TARGET: &str = "blockscan";
pub const DEFAULT_FILE_NAME: &str = "blocks_info.log";

const RULE: &str = "========================================";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

pub struct ScanLog {
    sink: Option<Box<dyn Write>>,
    path: Option<PathBuf>,
}

impl ScanLog {
    /// Creates `<base_dir>/logs/<file_name>`, truncating any previous run.
    pub fn open(base_dir: &Path, file_name: &str, host_version: &str) -> Self {
        let dir = base_dir.join("logs");
        let path = dir.join(file_name);
        let opened = fs::create_dir_all(&dir).and_then(|_| File::create(&path));
        match opened {
            Ok(file) => {
                log::info!(target: LOG_TARGET, "scan log set up at {}", path.display());
                let mut log = Self::from_writer(BufWriter::new(file), host_version);
                log.path = Some(path);
                log
            }
            Err(e) => {
                log::error!(target: LOG_TARGET, "failed to create scan log {}: {}", path.display(), e);
                Self::disabled()
            }
        }
    }

    /// Log writing to an arbitrary stream. The header is written immediately.
    pub fn from_writer<W: Write + 'static>(writer: W, host_version: &str) -> Self {
        let mut log = ScanLog {
            sink: Some(Box::new(writer)),
            path: None,
        };
        let stamp = Local::now().format(DATE_FORMAT);
        log.write_with(|w| {
            writeln!(w, "{RULE}")?;
            writeln!(w, "block texture report - generated: {stamp}")?;
            writeln!(w, "host version: {host_version}")?;
            writeln!(w, "{RULE}")
        });
        log
    }

    /// Console-only log.
    pub fn disabled() -> Self {
        ScanLog {
            sink: None,
            path: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        log::info!(target: LOG_TARGET, "{}", message);
        let time = Local::now().format(TIME_FORMAT);
        self.write_with(|w| writeln!(w, "[{time}] {message}"));
    }

    pub fn error(&mut self, message: impl AsRef<str>, cause: &dyn std::error::Error) {
        let message = message.as_ref();
        log::error!(target: LOG_TARGET, "{}: {}", message, cause);
        let time = Local::now().format(TIME_FORMAT);
        self.write_with(|w| {
            writeln!(w, "[{time}] [ERROR] {message}")?;
            writeln!(w, "cause: {cause}")
        });
    }

    /// Timestamped heading followed by untimestamped, indented rows.
    pub fn section(&mut self, heading: &str, rows: &[String]) {
        log::info!(target: LOG_TARGET, "{} ({} entries)", heading, rows.len());
        let time = Local::now().format(TIME_FORMAT);
        self.write_with(|w| {
            writeln!(w, "[{time}] {heading}")?;
            for row in rows {
                writeln!(w, "  {row}")?;
            }
            Ok(())
        });
    }

    /// Writes the footer and closes the stream.
    pub fn finish(mut self) {
        self.close();
    }

    fn close(&mut self) {
        let stamp = Local::now().format(DATE_FORMAT);
        self.write_with(|w| {
            writeln!(w, "{RULE}")?;
            writeln!(w, "log complete - {stamp}")?;
            writeln!(w, "{RULE}")
        });
        if self.sink.take().is_some() {
            log::debug!(target: LOG_TARGET, "scan log closed");
        }
    }

    fn write_with(&mut self, f: impl FnOnce(&mut dyn Write) -> io::Result<()>) {
        let Some(w) = self.sink.as_mut() else {
            return;
        };
        if let Err(e) = f(&mut **w).and_then(|_| w.flush()) {
            log::warn!(target: LOG_TARGET, "scan log write failed, continuing without file: {}", e);
            self.sink = None;
        }
    }
}

impl Drop for ScanLog {
    fn drop(&mut self) {
        self.close();
    }
}
