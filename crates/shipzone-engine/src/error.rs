use thiserror::Error;

/// Configuration problems that must stop a run before any row is processed.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("warehouse set must not be empty")]
    EmptyWarehouseSet,

    #[error("rate table must have exactly 3 zone columns containing \"{}\", found {}: [{}]", .marker, .found.len(), .found.join(", "))]
    ZoneColumnCount { marker: String, found: Vec<String> },

    #[error("rate table is missing required column \"{0}\"")]
    MissingRateColumn(String),
}
