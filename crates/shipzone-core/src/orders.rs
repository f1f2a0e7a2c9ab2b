/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `None` unless both values are present, finite, and within
    /// `[-90, 90]` / `[-180, 180]` respectively.
    #[must_use]
    pub fn new(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        let (latitude, longitude) = (latitude?, longitude?);
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// Coerce a raw cell to a finite number; anything unparseable becomes `None`.
///
/// Surrounding whitespace is ignored, so `" 2.5 "` parses as `2.5`.
#[must_use]
pub fn coerce_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The typed view of one order row used for shipping computation.
///
/// Numeric fields are already coerced: missing or malformed cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub weight: Option<f64>,
    pub courier: String,
    pub service: String,
}

impl OrderRow {
    /// Build a row from raw cell text, coercing the numeric columns.
    #[must_use]
    pub fn from_cells(
        latitude: &str,
        longitude: &str,
        weight: &str,
        courier: &str,
        service: &str,
    ) -> Self {
        Self {
            latitude: coerce_number(latitude),
            longitude: coerce_number(longitude),
            weight: coerce_number(weight),
            courier: courier.to_string(),
            service: service.to_string(),
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Shipping fields for a row that was routed to a warehouse.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedShipment {
    pub nearest_store: String,
    pub distance_km: f64,
    pub zone: String,
    pub weight_rounded: u64,
    /// `true` when the raw weight was missing, non-numeric, or negative and
    /// was replaced by zero.
    pub weight_coerced: bool,
    /// Price per kilogram; zero when no rate row matched.
    pub rate_per_kg: u64,
    pub rate_matched: bool,
    pub shipping_cost: u64,
}

/// Result of the per-row shipping computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ShippingOutcome {
    Routed(RoutedShipment),
    /// Latitude/longitude missing or out of range; all shipping fields are
    /// null or zero and the row is kept off the map.
    InvalidCoordinates,
}

/// An order row together with its computed shipping fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRow {
    pub order: OrderRow,
    pub outcome: ShippingOutcome,
    pub shipping_cost_display: String,
}

impl AnnotatedRow {
    fn routed(&self) -> Option<&RoutedShipment> {
        match &self.outcome {
            ShippingOutcome::Routed(shipment) => Some(shipment),
            ShippingOutcome::InvalidCoordinates => None,
        }
    }

    #[must_use]
    pub fn nearest_store(&self) -> Option<&str> {
        self.routed().map(|s| s.nearest_store.as_str())
    }

    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.routed().map_or(0.0, |s| s.distance_km)
    }

    #[must_use]
    pub fn zone(&self) -> Option<&str> {
        self.routed().map(|s| s.zone.as_str())
    }

    #[must_use]
    pub fn weight_rounded(&self) -> u64 {
        self.routed().map_or(0, |s| s.weight_rounded)
    }

    #[must_use]
    pub fn rate_per_kg(&self) -> u64 {
        self.routed().map_or(0, |s| s.rate_per_kg)
    }

    #[must_use]
    pub fn shipping_cost(&self) -> u64 {
        self.routed().map_or(0, |s| s.shipping_cost)
    }

    /// Coordinates to plot, present only for routed rows.
    #[must_use]
    pub fn map_position(&self) -> Option<Coordinates> {
        self.routed().and_then(|_| self.order.coordinates())
    }
}
