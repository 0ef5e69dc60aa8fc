//! Registry scan: one pass, classify every block, tally the results.

use serde::Serialize;

use crate::category::Category;
use crate::classify::inspect;
use crate::entity::{Entity, Registry, RegistryEntry};
use crate::error::ScanError;
use crate::report::Report;
use crate::scan_log::ScanLog;

/// Everything learned about one block during a scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockRecord {
    pub id: u32,
    pub registry_name: String,
    pub unlocalized_name: String,
    pub type_name: String,
    pub category: Category,
    pub icons: [Option<String>; 6],
}

/// Outcome of a completed scan.
#[derive(Clone, Debug, Default)]
pub struct ScanResult {
    pub report: Report,
    pub records: Vec<BlockRecord>,
}

pub fn scan<R: Registry>(registry: &R, log: &mut ScanLog) -> Result<Report, ScanError> {
    scan_with(registry, log, |_| {})
}

/// Like [`scan`], handing each block's record to `on_record` as it is
/// classified. Entries that are not blocks are skipped without a trace.
///
/// Any registry fault aborts the pass and drops the partial tallies.
pub fn scan_with<R, F>(registry: &R, log: &mut ScanLog, mut on_record: F) -> Result<Report, ScanError>
where
    R: Registry,
    F: FnMut(BlockRecord),
{
    log.info("===== classifying blocks by texture layout =====");
    log.info("category listings follow at the end of this log");

    let mut report = Report::new();
    for entry in registry.entries() {
        let Some(entity) = entry?.as_entity() else {
            continue;
        };
        let id = registry.id_of(entity)?;
        let name = registry.name_of(entity)?;
        log.info(format!(
            "block id: {}, registry name: {}, unlocalized name: {}",
            id,
            name,
            entity.unlocalized_name()
        ));

        let inspection = inspect(entity, name, log);
        report.record(inspection.category, name, entity.type_name());
        on_record(BlockRecord {
            id,
            registry_name: name.to_string(),
            unlocalized_name: entity.unlocalized_name().to_string(),
            type_name: entity.type_name().to_string(),
            category: inspection.category,
            icons: inspection.icons,
        });
    }
    log::debug!(target: crate::scan_log::LOG_TARGET, "scanned {} blocks", report.total());
    Ok(report)
}
