//! Texture layout classification and registry scanning.
#![forbid(unsafe_code)]

pub mod category;
pub mod classify;
pub mod entity;
pub mod error;
pub mod export;
pub mod report;
pub mod scan;
pub mod scan_log;
pub mod session;

pub use category::{Category, CategoryMap};
pub use classify::{Inspection, classify, inspect};
pub use entity::{Entity, EntityOf, Face, Icon, Registry, RegistryEntry};
pub use error::{ExportError, FaceError, IconError, ScanError};
pub use report::{Report, Tally};
pub use scan::{BlockRecord, ScanResult, scan, scan_with};
pub use scan_log::ScanLog;
pub use session::{Session, SessionConfig};
