//! Courier/service/zone price table.
//!
//! Built once from the raw rate sheet. Price cells are free-form currency
//! strings (`"Rp 12.500"`, `"9,000"`) and are normalized to whole rupiah.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::EngineError;
use crate::zone::ZoneTiers;

pub const COURIER_COLUMN: &str = "Courier";
pub const SERVICE_COLUMN: &str = "Service";

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("valid non-digit regex"));

/// Normalize a raw price cell to a non-negative integer.
///
/// Every non-digit character is stripped before parsing, so currency symbols,
/// thousands separators and whitespace are ignored. Missing, empty, or
/// digit-free cells become `0`, as do values too large for `u64`.
#[must_use]
pub fn normalize_price(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    let digits = NON_DIGIT.replace_all(raw, "");
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().unwrap_or_else(|_| {
        tracing::warn!(raw, "price does not fit in 64 bits; treating as 0");
        0
    })
}

fn cell(row: &[String], idx: usize) -> Option<&str> {
    row.get(idx).map(String::as_str)
}

/// One rate row: per-kilogram prices for each zone tier, in tier order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateEntry {
    pub courier: String,
    pub service: String,
    pub prices: [u64; 3],
}

#[derive(Debug, Clone)]
pub struct RateTable {
    tiers: ZoneTiers,
    entries: Vec<RateEntry>,
}

impl RateTable {
    /// Build the table from a header row and data rows.
    ///
    /// Headers are expected to be trimmed already. Zone columns are every
    /// header containing `zone_marker`; there must be exactly three.
    /// Short rows are treated as having empty trailing cells.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingRateColumn`] if `Courier` or `Service` is
    /// absent, or [`EngineError::ZoneColumnCount`] if zone discovery does not
    /// yield exactly three columns.
    pub fn from_rows(
        headers: &[String],
        rows: &[Vec<String>],
        zone_marker: &str,
    ) -> Result<Self, EngineError> {
        let column = |name: &str| -> Result<usize, EngineError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| EngineError::MissingRateColumn(name.to_string()))
        };
        let courier_idx = column(COURIER_COLUMN)?;
        let service_idx = column(SERVICE_COLUMN)?;

        let tiers = ZoneTiers::discover(headers, zone_marker)?;
        let mut zone_idx = [0usize; 3];
        for (slot, name) in zone_idx.iter_mut().zip(tiers.names()) {
            *slot = column(name.as_str())?;
        }

        let entries: Vec<RateEntry> = rows
            .iter()
            .map(|row| RateEntry {
                courier: cell(row, courier_idx).unwrap_or_default().to_string(),
                service: cell(row, service_idx).unwrap_or_default().to_string(),
                prices: zone_idx.map(|idx| normalize_price(cell(row, idx))),
            })
            .collect();

        tracing::debug!(
            entries = entries.len(),
            zones = ?tiers.names(),
            "rate table normalized"
        );

        Ok(Self { tiers, entries })
    }

    #[must_use]
    pub fn tiers(&self) -> &ZoneTiers {
        &self.tiers
    }

    #[must_use]
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    /// Price per kilogram for a courier/service pair in `zone`.
    ///
    /// Courier and service match exactly; the first matching row wins.
    /// Returns `None` when no row matches or `zone` is not a known zone column.
    #[must_use]
    pub fn lookup(&self, courier: &str, service: &str, zone: &str) -> Option<u64> {
        let tier = self.tiers.position(zone)?;
        self.entries
            .iter()
            .find(|e| e.courier == courier && e.service == service)
            .map(|e| e.prices[tier])
    }
}
