//! Host lifecycle glue: set up the log, scan when the host is ready, close
//! the log on shutdown.

use std::path::PathBuf;

use crate::entity::Registry;
use crate::scan::{ScanResult, scan_with};
use crate::scan_log::{DEFAULT_FILE_NAME, ScanLog};

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Directory that receives `logs/<log_file_name>`.
    pub base_dir: PathBuf,
    pub log_file_name: String,
    pub host_version: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            log_file_name: DEFAULT_FILE_NAME.to_string(),
            host_version: concat!("blockscan ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

pub struct Session {
    log: ScanLog,
}

impl Session {
    /// Opens the log file. A log that cannot be created is replaced by a
    /// console-only one.
    pub fn open(config: &SessionConfig) -> Self {
        let mut log = ScanLog::open(
            &config.base_dir,
            &config.log_file_name,
            &config.host_version,
        );
        if let Some(path) = log.path().map(|p| p.display().to_string()) {
            log.info(format!("logging set up, writing to {}", path));
        }
        Self { log }
    }

    pub fn with_log(log: ScanLog) -> Self {
        Self { log }
    }

    pub fn log_mut(&mut self) -> &mut ScanLog {
        &mut self.log
    }

    /// Scans the registry and writes the report. A failed scan is logged and
    /// yields `None`; nothing of it is reported.
    pub fn on_ready<R: Registry>(&mut self, registry: &R) -> Option<ScanResult> {
        self.log.info("===== recording all registered blocks =====");
        let mut records = Vec::new();
        let outcome = match scan_with(registry, &mut self.log, |r| records.push(r)) {
            Ok(report) => {
                report.emit(&mut self.log);
                Some(ScanResult { report, records })
            }
            Err(e) => {
                self.log.error("failed to record block information", &e);
                None
            }
        };
        self.log.info("===== block recording finished =====");
        outcome
    }

    /// Writes the footer and closes the log.
    pub fn shutdown(self) {
        self.log.finish();
    }
}
