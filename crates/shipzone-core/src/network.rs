use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Marker colour for couriers absent from the colour map.
pub const DEFAULT_MARKER_COLOR: &str = "gray";

/// A fixed store location orders are shipped from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Warehouse {
    fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierColor {
    pub courier: String,
    pub color: String,
}

/// Immutable description of the warehouse network and map styling.
///
/// Warehouse order is significant: nearest-warehouse ties resolve to the
/// entry listed first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub warehouses: Vec<Warehouse>,
    #[serde(default)]
    pub courier_colors: Vec<CourierColor>,
}

impl NetworkConfig {
    /// The built-in Indonesian warehouse network, alphabetical by city.
    #[must_use]
    pub fn indonesia() -> Self {
        let warehouses = vec![
            Warehouse::new("Bandung", -6.917_5, 107.619_1),
            Warehouse::new("Batam", 1.130_1, 104.052_9),
            Warehouse::new("Bekasi", -6.238_3, 106.975_6),
            Warehouse::new("Denpasar", -8.650_0, 115.216_7),
            Warehouse::new("Depok", -6.402_5, 106.794_2),
            Warehouse::new("Jakarta", -6.208_8, 106.845_6),
            Warehouse::new("Jayapura", -2.591_6, 140.669_0),
            Warehouse::new("Madiun", -7.629_8, 111.523_9),
            Warehouse::new("Makassar", -5.147_7, 119.432_7),
            Warehouse::new("Medan", 3.595_2, 98.672_2),
            Warehouse::new("Palembang", -2.976_1, 104.775_4),
            Warehouse::new("Pekanbaru", 0.507_1, 101.447_8),
            Warehouse::new("Pontianak", -0.026_3, 109.342_5),
            Warehouse::new("Samarinda", -0.494_8, 117.143_6),
            Warehouse::new("Semarang", -6.966_7, 110.416_7),
            Warehouse::new("Surabaya", -7.257_5, 112.752_1),
            Warehouse::new("Surakarta", -7.566_6, 110.816_7),
            Warehouse::new("Tangerang", -6.178_3, 106.631_9),
            Warehouse::new("Ternate", 0.790_5, 127.375_3),
            Warehouse::new("Tual", -5.631_1, 132.744_1),
            Warehouse::new("Yogyakarta", -7.795_6, 110.369_5),
        ];

        let courier_colors = [
            ("JNE", "blue"),
            ("JNT", "green"),
            ("Shopee Express", "purple"),
            ("Anteraja", "orange"),
            ("SiCepat", "cadetblue"),
            ("Pos Indonesia", "darkred"),
        ]
        .into_iter()
        .map(|(courier, color)| CourierColor {
            courier: courier.to_string(),
            color: color.to_string(),
        })
        .collect();

        Self {
            warehouses,
            courier_colors,
        }
    }

    /// Marker colour for `courier`, or [`DEFAULT_MARKER_COLOR`] if unmapped.
    #[must_use]
    pub fn color_for(&self, courier: &str) -> &str {
        self.courier_colors
            .iter()
            .find(|c| c.courier == courier)
            .map_or(DEFAULT_MARKER_COLOR, |c| c.color.as_str())
    }
}

/// Load the warehouse network, falling back to [`NetworkConfig::indonesia`]
/// when `path` is `None`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_network(path: Option<&Path>) -> Result<NetworkConfig, ConfigError> {
    let network = match path {
        None => NetworkConfig::indonesia(),
        Some(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::NetworkFileIo {
                    path: path.display().to_string(),
                    source: e,
                })?;
            serde_yaml::from_str(&content)?
        }
    };

    validate_network(&network)?;

    Ok(network)
}

fn validate_network(network: &NetworkConfig) -> Result<(), ConfigError> {
    if network.warehouses.is_empty() {
        return Err(ConfigError::Validation(
            "warehouse set must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for warehouse in &network.warehouses {
        if warehouse.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "warehouse name must be non-empty".to_string(),
            ));
        }
        if !seen.insert(warehouse.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate warehouse name: '{}'",
                warehouse.name
            )));
        }
        if !(-90.0..=90.0).contains(&warehouse.latitude)
            || !(-180.0..=180.0).contains(&warehouse.longitude)
        {
            return Err(ConfigError::Validation(format!(
                "warehouse '{}' has out-of-range coordinates ({}, {})",
                warehouse.name, warehouse.latitude, warehouse.longitude
            )));
        }
    }

    for entry in &network.courier_colors {
        if entry.color.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "courier '{}' has an empty marker colour",
                entry.courier
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn indonesia_network_is_valid() {
        let network = NetworkConfig::indonesia();
        assert_eq!(network.warehouses.len(), 21);
        assert!(validate_network(&network).is_ok());
    }

    #[test]
    fn indonesia_network_contains_jakarta() {
        let network = NetworkConfig::indonesia();
        let jakarta = network
            .warehouses
            .iter()
            .find(|w| w.name == "Jakarta")
            .expect("Jakarta warehouse");
        assert!((jakarta.latitude - (-6.2088)).abs() < 1e-9);
        assert!((jakarta.longitude - 106.8456).abs() < 1e-9);
    }

    #[test]
    fn color_for_known_courier() {
        let network = NetworkConfig::indonesia();
        assert_eq!(network.color_for("JNE"), "blue");
        assert_eq!(network.color_for("SiCepat"), "cadetblue");
    }

    #[test]
    fn color_for_unknown_courier_defaults_to_gray() {
        let network = NetworkConfig::indonesia();
        assert_eq!(network.color_for("Lion Parcel"), DEFAULT_MARKER_COLOR);
        // Match is exact, not case-insensitive.
        assert_eq!(network.color_for("jne"), DEFAULT_MARKER_COLOR);
    }

    #[test]
    fn load_network_without_path_uses_builtin() {
        let network = load_network(None).unwrap();
        assert_eq!(network, NetworkConfig::indonesia());
    }

    #[test]
    fn load_network_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "warehouses:\n  - name: Alpha\n    latitude: 1.0\n    longitude: 2.0\n  - name: Beta\n    latitude: -3.5\n    longitude: 100.25\ncourier_colors:\n  - courier: JNE\n    color: blue\n"
        )
        .unwrap();

        let network = load_network(Some(file.path())).unwrap();
        assert_eq!(network.warehouses.len(), 2);
        assert_eq!(network.warehouses[0].name, "Alpha");
        assert_eq!(network.warehouses[1].name, "Beta");
        assert_eq!(network.color_for("JNE"), "blue");
    }

    #[test]
    fn load_network_yaml_without_colors_defaults_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "warehouses:\n  - name: Alpha\n    latitude: 1.0\n    longitude: 2.0\n"
        )
        .unwrap();

        let network = load_network(Some(file.path())).unwrap();
        assert!(network.courier_colors.is_empty());
        assert_eq!(network.color_for("JNE"), DEFAULT_MARKER_COLOR);
    }

    #[test]
    fn load_network_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_network(Some(dir.path().join("absent.yaml").as_path()));
        assert!(matches!(result, Err(ConfigError::NetworkFileIo { .. })));
    }

    #[test]
    fn load_network_rejects_empty_warehouse_set() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "warehouses: []").unwrap();
        let result = load_network(Some(file.path()));
        assert!(
            matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("empty")),
            "expected empty-set validation error, got: {result:?}"
        );
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let mut network = NetworkConfig::indonesia();
        network.warehouses.push(Warehouse::new("Jakarta", 0.0, 0.0));
        let err = validate_network(&network).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")));
    }

    #[test]
    fn validate_rejects_out_of_range_latitude() {
        let network = NetworkConfig {
            warehouses: vec![Warehouse::new("North", 91.0, 0.0)],
            courier_colors: Vec::new(),
        };
        let err = validate_network(&network).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("out-of-range")));
    }

    #[test]
    fn validate_rejects_empty_color() {
        let network = NetworkConfig {
            warehouses: vec![Warehouse::new("A", 0.0, 0.0)],
            courier_colors: vec![CourierColor {
                courier: "JNE".to_string(),
                color: " ".to_string(),
            }],
        };
        assert!(validate_network(&network).is_err());
    }
}
