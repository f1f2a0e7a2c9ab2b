pub mod app_config;
pub mod config;
pub mod network;
pub mod orders;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use network::{load_network, CourierColor, NetworkConfig, Warehouse, DEFAULT_MARKER_COLOR};
pub use orders::{coerce_number, AnnotatedRow, Coordinates, OrderRow, RoutedShipment, ShippingOutcome};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read network file {path}: {source}")]
    NetworkFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse network file: {0}")]
    NetworkFileParse(#[from] serde_yaml::Error),

    #[error("network validation failed: {0}")]
    Validation(String),
}
