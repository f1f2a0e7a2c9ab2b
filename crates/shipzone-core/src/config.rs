use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_ORDERS_PATH: &str = "Data/Order.csv";
pub const DEFAULT_RATES_PATH: &str = "Data/Rates_Master.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "Product_Sales_Analysis.csv";
pub const DEFAULT_MAP_PATH: &str = "Interactive_Shipping_Map.html";
pub const DEFAULT_ZONE_MARKER: &str = "Zona";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// All variables are optional; absent ones fall back to the fixed defaults.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let orders_path = PathBuf::from(non_empty("SHIPZONE_ORDERS_PATH", DEFAULT_ORDERS_PATH)?);
    let rates_path = PathBuf::from(non_empty("SHIPZONE_RATES_PATH", DEFAULT_RATES_PATH)?);
    let output_path = PathBuf::from(non_empty("SHIPZONE_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)?);
    let map_path = PathBuf::from(non_empty("SHIPZONE_MAP_PATH", DEFAULT_MAP_PATH)?);
    let network_path = lookup("SHIPZONE_NETWORK_PATH")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from);
    let zone_marker = non_empty("SHIPZONE_ZONE_MARKER", DEFAULT_ZONE_MARKER)?;
    let log_level = or_default("SHIPZONE_LOG_LEVEL", "info");

    if output_path == map_path {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHIPZONE_MAP_PATH".to_string(),
            reason: "map path must differ from the output table path".to_string(),
        });
    }

    Ok(AppConfig {
        orders_path,
        rates_path,
        output_path,
        map_path,
        network_path,
        zone_marker,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
