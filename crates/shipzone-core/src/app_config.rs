use std::path::PathBuf;

/// Paths and knobs for a single shipping-cost run.
///
/// Every field has a fixed default so a run with an empty environment reads
/// `Data/Order.csv` + `Data/Rates_Master.csv` and writes next to the working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub orders_path: PathBuf,
    pub rates_path: PathBuf,
    pub output_path: PathBuf,
    pub map_path: PathBuf,
    /// Optional YAML replacement for the built-in warehouse network.
    pub network_path: Option<PathBuf>,
    /// Substring that identifies zone-price columns in the rate table.
    pub zone_marker: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            orders_path: PathBuf::from(crate::config::DEFAULT_ORDERS_PATH),
            rates_path: PathBuf::from(crate::config::DEFAULT_RATES_PATH),
            output_path: PathBuf::from(crate::config::DEFAULT_OUTPUT_PATH),
            map_path: PathBuf::from(crate::config::DEFAULT_MAP_PATH),
            network_path: None,
            zone_marker: crate::config::DEFAULT_ZONE_MARKER.to_string(),
            log_level: "info".to_string(),
        }
    }
}
