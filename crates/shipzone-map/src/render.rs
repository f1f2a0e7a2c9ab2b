//! Leaflet page rendering.
//!
//! The page template is embedded in the binary and rendered with MiniJinja.
//! Marker data is injected as JSON literals.

use std::path::Path;
use std::sync::OnceLock;

use minijinja::{context, Environment};
use serde::Serialize;
use shipzone_core::{AnnotatedRow, NetworkConfig};

use crate::error::MapError;
use crate::markers::{order_markers, store_markers};

const MAP_TEMPLATE_NAME: &str = "map.html";
const MAP_TEMPLATE: &str = include_str!("../templates/map.html.jinja");

static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(|| {
        let mut env = Environment::new();
        env.add_template(MAP_TEMPLATE_NAME, MAP_TEMPLATE)
            .expect("embedded map template must parse");
        env
    })
}

/// Viewport and basemap settings.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub title: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub tiles_url: String,
    pub tiles_attribution: String,
}

impl Default for MapView {
    /// Whole-archipelago view on the CartoDB Positron basemap.
    fn default() -> Self {
        Self {
            title: "Interactive Shipping Map".to_string(),
            center_lat: -2.5,
            center_lon: 118.0,
            zoom: 5,
            tiles_url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png"
                .to_string(),
            tiles_attribution: "&copy; <a href='https://www.openstreetmap.org/copyright'>OpenStreetMap</a> contributors &copy; <a href='https://carto.com/attributions'>CARTO</a>".to_string(),
        }
    }
}

/// Serialize markers for inline `<script>` use; `</` is escaped so marker
/// text cannot close the script element.
fn script_json<T: Serialize>(value: &T) -> Result<String, MapError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Render the full HTML page: one marker per warehouse and one per routed row.
///
/// # Errors
///
/// Returns [`MapError`] if marker serialization or template rendering fails.
pub fn render_map(
    view: &MapView,
    network: &NetworkConfig,
    rows: &[AnnotatedRow],
) -> Result<String, MapError> {
    let stores = store_markers(network);
    let orders = order_markers(network, rows);

    let template = engine().get_template(MAP_TEMPLATE_NAME)?;
    let html = template.render(context! {
        title => view.title,
        center_lat => view.center_lat,
        center_lon => view.center_lon,
        zoom => view.zoom,
        tiles_url => view.tiles_url,
        tiles_attribution => view.tiles_attribution,
        stores_json => script_json(&stores)?,
        orders_json => script_json(&orders)?,
    })?;

    tracing::debug!(
        stores = stores.len(),
        orders = orders.len(),
        bytes = html.len(),
        "map rendered"
    );
    Ok(html)
}

/// Write a rendered page to `path`, replacing any previous map.
///
/// # Errors
///
/// Returns [`MapError::Io`] if the file cannot be written.
pub fn write_map(path: &Path, html: &str) -> Result<(), MapError> {
    std::fs::write(path, html).map_err(|e| MapError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), "map written");
    Ok(())
}
