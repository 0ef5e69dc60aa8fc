//! Per-category tallies and their rendering into the scan log.

use crate::category::{Category, CategoryMap};
use crate::scan_log::ScanLog;

/// Count and listing rows of one category, rows in encounter order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub count: u32,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    total: u32,
    tallies: CategoryMap<Tally>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one block under `category` and appends `"<name> (<type>)"` to
    /// its listing.
    pub fn record(&mut self, category: Category, registry_name: &str, type_name: &str) {
        self.total += 1;
        let tally = &mut self.tallies[category];
        tally.count += 1;
        tally.lines.push(format!("{registry_name} ({type_name})"));
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn count(&self, category: Category) -> u32 {
        self.tallies[category].count
    }

    pub fn lines(&self, category: Category) -> &[String] {
        &self.tallies[category].lines
    }

    pub fn percentage(&self, category: Category) -> f64 {
        percentage(self.count(category), self.total)
    }

    /// `"STANDARD: 3 (42.9%) - same texture on every face"`
    pub fn summary_line(&self, category: Category) -> String {
        format!(
            "{}: {} ({:.1}%) - {}",
            category.label(),
            self.count(category),
            self.percentage(category),
            category.description()
        )
    }

    /// Categories whose listing is rendered. Unknown only appears when
    /// non-empty.
    pub fn listed_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|&c| c != Category::Unknown || self.count(c) > 0)
    }

    pub fn emit(&self, log: &mut ScanLog) {
        log.info("===== block classification summary =====");
        log.info(format!("total blocks: {}", self.total));
        for c in Category::ALL {
            log.info(self.summary_line(c));
        }
        for c in self.listed_categories() {
            log.section(&format!("===== {} blocks =====", c.label()), self.lines(c));
        }
    }
}

/// Share of `part` in `total` with one decimal; 0 for an empty total.
pub fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(part) / f64::from(total) * 1000.0).round() / 10.0
}
