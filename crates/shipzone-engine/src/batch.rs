//! Whole-dataset driver with coercion diagnostics.

use shipzone_core::{AnnotatedRow, OrderRow, ShippingOutcome};

use crate::calculator::ShippingCalculator;

/// Counters describing how many rows took a fallback path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub routed: usize,
    pub invalid_coordinates: usize,
    /// Routed rows whose weight was missing, non-numeric, or negative.
    pub coerced_weights: usize,
    /// Routed rows with no rate row for their courier/service pair.
    pub unmatched_rates: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &ShippingOutcome) {
        self.rows += 1;
        match outcome {
            ShippingOutcome::Routed(shipment) => {
                self.routed += 1;
                if shipment.weight_coerced {
                    self.coerced_weights += 1;
                }
                if !shipment.rate_matched {
                    self.unmatched_rates += 1;
                }
            }
            ShippingOutcome::InvalidCoordinates => self.invalid_coordinates += 1,
        }
    }
}

/// Annotate every order in input order.
pub fn run_batch(
    calculator: &ShippingCalculator,
    orders: Vec<OrderRow>,
) -> (Vec<AnnotatedRow>, RunSummary) {
    let mut summary = RunSummary::default();
    let annotated: Vec<AnnotatedRow> = orders
        .into_iter()
        .enumerate()
        .map(|(idx, order)| {
            let row = calculator.annotate(order);
            match &row.outcome {
                ShippingOutcome::Routed(shipment) => tracing::debug!(
                    row = idx,
                    store = %shipment.nearest_store,
                    distance_km = shipment.distance_km,
                    zone = %shipment.zone,
                    cost = shipment.shipping_cost,
                    "order routed"
                ),
                ShippingOutcome::InvalidCoordinates => {
                    tracing::debug!(row = idx, "order has invalid coordinates");
                }
            }
            summary.record(&row.outcome);
            row
        })
        .collect();

    if summary.invalid_coordinates > 0 {
        tracing::warn!(
            count = summary.invalid_coordinates,
            "rows with missing or out-of-range coordinates were left unrouted"
        );
    }
    if summary.coerced_weights > 0 {
        tracing::warn!(
            count = summary.coerced_weights,
            "rows with missing or invalid weight were treated as 0 kg"
        );
    }
    if summary.unmatched_rates > 0 {
        tracing::warn!(
            count = summary.unmatched_rates,
            "rows had no rate for their courier/service; cost set to 0"
        );
    }

    (annotated, summary)
}

#[cfg(test)]
mod tests {
    use shipzone_core::NetworkConfig;

    use super::*;
    use crate::rates::RateTable;

    fn calculator() -> ShippingCalculator {
        let headers: Vec<String> = ["Courier", "Service", "Zona 1", "Zona 2", "Zona 3"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let rows: Vec<Vec<String>> = vec![["JNE", "REG", "10000", "15000", "25000"]
            .iter()
            .map(|s| (*s).to_string())
            .collect()];
        let rates = RateTable::from_rows(&headers, &rows, "Zona").unwrap();
        ShippingCalculator::new(&NetworkConfig::indonesia(), rates).unwrap()
    }

    fn order(lat: &str, lon: &str, weight: &str, courier: &str) -> OrderRow {
        OrderRow::from_cells(lat, lon, weight, courier, "REG")
    }

    #[test]
    fn summary_counts_each_fallback() {
        let orders = vec![
            order("-6.2088", "106.8456", "2.5", "JNE"),
            order("200", "106.8456", "1", "JNE"),
            order("", "", "1", "JNE"),
            order("-6.9175", "107.6191", "abc", "JNE"),
            order("-7.2575", "112.7521", "1", "Lion"),
        ];
        let (rows, summary) = run_batch(&calculator(), orders);
        assert_eq!(rows.len(), 5);
        assert_eq!(
            summary,
            RunSummary {
                rows: 5,
                routed: 3,
                invalid_coordinates: 2,
                coerced_weights: 1,
                unmatched_rates: 1,
            }
        );
    }

    #[test]
    fn output_preserves_input_order() {
        let orders = vec![
            order("-7.2575", "112.7521", "1", "JNE"),
            order("-6.2088", "106.8456", "1", "JNE"),
        ];
        let (rows, _) = run_batch(&calculator(), orders);
        assert_eq!(rows[0].nearest_store(), Some("Surabaya"));
        assert_eq!(rows[1].nearest_store(), Some("Jakarta"));
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        let (rows, summary) = run_batch(&calculator(), Vec::new());
        assert!(rows.is_empty());
        assert_eq!(summary, RunSummary::default());
    }
}
