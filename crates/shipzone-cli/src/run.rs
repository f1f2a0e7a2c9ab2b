//! The single batch run: load, compute, write table, write map.
//!
//! Configuration and input problems abort before any row is processed. The
//! map is rendered before anything touches disk, and a table written during a
//! run that later fails is removed, so a failed run leaves no artifacts.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use shipzone_core::AppConfig;
use shipzone_dataset::{create_output_file, parse_orders, read_table, write_annotated, OrderTable};
use shipzone_engine::{run_batch, RateTable, RunSummary, ShippingCalculator};
use shipzone_map::{render_map, write_map, MapView};

#[derive(Debug)]
pub(crate) struct RunReport {
    pub output_path: PathBuf,
    pub map_path: PathBuf,
    pub summary: RunSummary,
}

pub(crate) fn run(config: &AppConfig, now: NaiveDateTime) -> anyhow::Result<RunReport> {
    anyhow::ensure!(
        config.output_path != config.map_path,
        "map path must differ from the output table path ({})",
        config.map_path.display()
    );

    let network = shipzone_core::load_network(config.network_path.as_deref())
        .context("failed to load warehouse network")?;

    let OrderTable { raw, rows } = read_table(&config.orders_path)
        .and_then(parse_orders)
        .context("failed to load order table")?;

    let rate_sheet = read_table(&config.rates_path).context("failed to load rate table")?;
    tracing::info!(columns = ?rate_sheet.headers, "rate table columns");
    let rates = RateTable::from_rows(&rate_sheet.headers, &rate_sheet.records, &config.zone_marker)
        .context("invalid rate table")?;
    tracing::info!(zones = ?rates.tiers().names(), "zone columns discovered");

    let calculator =
        ShippingCalculator::new(&network, rates).context("invalid warehouse network")?;

    let (annotated, summary) = run_batch(&calculator, rows);

    let html = render_map(&MapView::default(), &network, &annotated)
        .context("failed to render map")?;

    let (output_path, file) =
        create_output_file(&config.output_path, now).context("failed to create output table")?;

    if let Err(e) = write_annotated(file, &output_path, &raw, &annotated) {
        remove_best_effort(&output_path);
        return Err(e).context("failed to write output table");
    }

    if let Err(e) = write_map(&config.map_path, &html) {
        remove_best_effort(&output_path);
        return Err(e).context("failed to write map");
    }

    tracing::info!(
        rows = summary.rows,
        routed = summary.routed,
        invalid_coordinates = summary.invalid_coordinates,
        coerced_weights = summary.coerced_weights,
        unmatched_rates = summary.unmatched_rates,
        "run complete"
    );

    Ok(RunReport {
        output_path,
        map_path: config.map_path.clone(),
        summary,
    })
}

fn remove_best_effort(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        tracing::error!(
            path = %path.display(),
            error = %e,
            "failed to remove partial output table"
        );
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
