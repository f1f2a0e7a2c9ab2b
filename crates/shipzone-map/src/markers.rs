//! Marker data for the map page.
//!
//! Popup bodies are pre-rendered HTML with every user-supplied value escaped.

use serde::Serialize;
use shipzone_core::{AnnotatedRow, NetworkConfig};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub color: String,
    pub popup: String,
}

/// One marker per warehouse, in network order.
#[must_use]
pub fn store_markers(network: &NetworkConfig) -> Vec<StoreMarker> {
    network
        .warehouses
        .iter()
        .map(|w| StoreMarker {
            latitude: w.latitude,
            longitude: w.longitude,
            popup: format!("<b>Store {}</b>", escape_html(&w.name)),
        })
        .collect()
}

/// One marker per routed row; rows with invalid coordinates are skipped.
#[must_use]
pub fn order_markers(network: &NetworkConfig, rows: &[AnnotatedRow]) -> Vec<OrderMarker> {
    rows.iter()
        .filter_map(|row| {
            let position = row.map_position()?;
            Some(OrderMarker {
                latitude: position.latitude,
                longitude: position.longitude,
                color: network.color_for(&row.order.courier).to_string(),
                popup: format!(
                    "<b>Courier:</b> {}<br><b>Service:</b> {}<br><b>Cost:</b> {}<br><b>Distance:</b> {:.1} km",
                    escape_html(&row.order.courier),
                    escape_html(&row.order.service),
                    escape_html(&row.shipping_cost_display),
                    row.distance_km(),
                ),
            })
        })
        .collect()
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
