//! JSON rendering of a completed scan.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::category::Category;
use crate::entity::Face;
use crate::error::ExportError;
use crate::report::Report;
use crate::scan::ScanResult;

#[derive(Serialize)]
struct Document<'a> {
    metadata: Metadata,
    blocks: Vec<BlockEntry<'a>>,
    summary: Summary,
}

#[derive(Serialize)]
struct Metadata {
    generated_at: String,
    total_blocks: u32,
}

#[derive(Serialize)]
struct BlockEntry<'a> {
    block_id: u32,
    registry_name: &'a str,
    unlocalized_name: &'a str,
    type_name: &'a str,
    texture_type: Category,
    // face_0 .. face_5
    textures: BTreeMap<String, Option<&'a str>>,
}

// Fields in report order.
#[derive(Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct Summary {
    standard: SummaryEntry,
    directional: SummaryEntry,
    custom_render: SummaryEntry,
    error: SummaryEntry,
    unknown: SummaryEntry,
}

impl Summary {
    fn of(report: &Report) -> Self {
        let entry = |c| SummaryEntry {
            count: report.count(c),
            percentage: report.percentage(c),
        };
        Self {
            standard: entry(Category::Standard),
            directional: entry(Category::Directional),
            custom_render: entry(Category::CustomRender),
            error: entry(Category::Error),
            unknown: entry(Category::Unknown),
        }
    }
}

#[derive(Serialize)]
struct SummaryEntry {
    count: u32,
    percentage: f64,
}

pub fn to_json(result: &ScanResult) -> Result<String, ExportError> {
    let report = &result.report;
    let blocks = result
        .records
        .iter()
        .map(|r| BlockEntry {
            block_id: r.id,
            registry_name: &r.registry_name,
            unlocalized_name: &r.unlocalized_name,
            type_name: &r.type_name,
            texture_type: r.category,
            textures: Face::ALL
                .iter()
                .map(|f| (format!("face_{}", f.index()), r.icons[f.index()].as_deref()))
                .collect(),
        })
        .collect();
    let doc = Document {
        metadata: Metadata {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            total_blocks: report.total(),
        },
        blocks,
        summary: Summary::of(report),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Writes [`to_json`] output, creating parent directories as needed.
pub fn write_json(result: &ScanResult, path: &Path) -> Result<(), ExportError> {
    let json = to_json(result)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, json)?;
    Ok(())
}
