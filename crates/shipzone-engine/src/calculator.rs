//! Per-order shipping computation.
//!
//! Combines the warehouse index, zone classifier and rate table. Malformed
//! row data never fails: it degrades to null/zero fields and the row is still
//! emitted. Only construction can fail, on configuration problems.

use shipzone_core::{AnnotatedRow, NetworkConfig, OrderRow, RoutedShipment, ShippingOutcome};

use crate::currency::format_rupiah;
use crate::error::EngineError;
use crate::rates::RateTable;
use crate::warehouse_index::WarehouseIndex;
use crate::zone::ZoneClassifier;

#[derive(Debug, Clone)]
pub struct ShippingCalculator {
    index: WarehouseIndex,
    classifier: ZoneClassifier,
    rates: RateTable,
}

impl ShippingCalculator {
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyWarehouseSet`] if the network has no warehouses.
    pub fn new(network: &NetworkConfig, rates: RateTable) -> Result<Self, EngineError> {
        let index = WarehouseIndex::new(&network.warehouses)?;
        let classifier = ZoneClassifier::new(rates.tiers().clone());
        Ok(Self {
            index,
            classifier,
            rates,
        })
    }

    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Compute the shipping outcome for one order.
    #[must_use]
    pub fn compute(&self, order: &OrderRow) -> ShippingOutcome {
        let Some(position) = order.coordinates() else {
            return ShippingOutcome::InvalidCoordinates;
        };

        let nearest = self.index.nearest(position);
        let zone = self.classifier.classify(nearest.distance_km);
        let (weight_rounded, weight_coerced) = round_weight(order.weight);

        let rate = self.rates.lookup(&order.courier, &order.service, zone);
        let rate_per_kg = rate.unwrap_or(0);
        let shipping_cost = rate_per_kg.saturating_mul(weight_rounded);

        ShippingOutcome::Routed(RoutedShipment {
            nearest_store: nearest.name.to_string(),
            distance_km: nearest.distance_km,
            zone: zone.to_string(),
            weight_rounded,
            weight_coerced,
            rate_per_kg,
            rate_matched: rate.is_some(),
            shipping_cost,
        })
    }

    /// Compute the outcome and attach the formatted cost.
    #[must_use]
    pub fn annotate(&self, order: OrderRow) -> AnnotatedRow {
        let outcome = self.compute(&order);
        let cost = match &outcome {
            ShippingOutcome::Routed(shipment) => shipment.shipping_cost,
            ShippingOutcome::InvalidCoordinates => 0,
        };
        AnnotatedRow {
            order,
            outcome,
            shipping_cost_display: format_rupiah(cost),
        }
    }
}

/// Ceiling of the weight in whole kilograms.
///
/// Missing and negative weights become `0`; the flag reports that a
/// substitution happened.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_weight(weight: Option<f64>) -> (u64, bool) {
    match weight {
        Some(w) if w >= 0.0 => (w.ceil() as u64, false),
        _ => (0, true),
    }
}

#[cfg(test)]
#[path = "calculator_test.rs"]
mod tests;
