//! Nearest-warehouse lookup over a fixed, ordered warehouse set.

use shipzone_core::{Coordinates, Warehouse};

use crate::error::EngineError;
use crate::geo;

/// Result of a nearest-warehouse query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub name: &'a str,
    pub distance_km: f64,
}

#[derive(Debug, Clone)]
struct IndexedWarehouse {
    name: String,
    position: Coordinates,
}

/// Linear-scan index; warehouse sets are small (tens of entries).
#[derive(Debug, Clone)]
pub struct WarehouseIndex {
    warehouses: Vec<IndexedWarehouse>,
}

impl WarehouseIndex {
    /// Build an index preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyWarehouseSet`] if `warehouses` is empty.
    pub fn new(warehouses: &[Warehouse]) -> Result<Self, EngineError> {
        if warehouses.is_empty() {
            return Err(EngineError::EmptyWarehouseSet);
        }
        let warehouses = warehouses
            .iter()
            .map(|w| IndexedWarehouse {
                name: w.name.clone(),
                position: Coordinates {
                    latitude: w.latitude,
                    longitude: w.longitude,
                },
            })
            .collect();
        Ok(Self { warehouses })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.warehouses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }

    /// Closest warehouse to `point` and its distance in kilometres.
    ///
    /// Only a strictly smaller distance replaces the current best, so ties go
    /// to the warehouse listed first.
    #[must_use]
    pub fn nearest(&self, point: Coordinates) -> Nearest<'_> {
        let mut best = Nearest {
            name: self.warehouses[0].name.as_str(),
            distance_km: f64::INFINITY,
        };
        for warehouse in &self.warehouses {
            let distance_km = geo::distance_km(point, warehouse.position);
            if distance_km < best.distance_km {
                best = Nearest {
                    name: warehouse.name.as_str(),
                    distance_km,
                };
            }
        }
        best
    }
}
