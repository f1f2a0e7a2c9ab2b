//! Distance-to-zone classification.

use crate::error::EngineError;

/// Upper bound (exclusive) of the first tier, in kilometres.
pub const NEAR_ZONE_LIMIT_KM: f64 = 300.0;
/// Upper bound (inclusive) of the second tier, in kilometres.
pub const MID_ZONE_LIMIT_KM: f64 = 1_500.0;

/// The three zone identifiers in ascending distance order, as discovered from
/// the rate table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTiers {
    names: [String; 3],
}

impl ZoneTiers {
    /// Discover zone columns: every header containing `marker`, in header order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ZoneColumnCount`] unless exactly three headers match.
    pub fn discover<S: AsRef<str>>(headers: &[S], marker: &str) -> Result<Self, EngineError> {
        let mut found: Vec<String> = Vec::new();
        for header in headers {
            let header: &str = header.as_ref();
            if header.contains(marker) {
                found.push(header.to_string());
            }
        }

        let names: [String; 3] =
            found
                .clone()
                .try_into()
                .map_err(|_| EngineError::ZoneColumnCount {
                    marker: marker.to_string(),
                    found,
                })?;
        Ok(Self { names })
    }

    #[must_use]
    pub fn names(&self) -> &[String; 3] {
        &self.names
    }

    /// Tier position (0, 1, 2) of a zone identifier, if recognised.
    #[must_use]
    pub fn position(&self, zone: &str) -> Option<usize> {
        self.names.iter().position(|n| n == zone)
    }
}

/// Maps a distance to one of the three zone tiers.
#[derive(Debug, Clone)]
pub struct ZoneClassifier {
    tiers: ZoneTiers,
}

impl ZoneClassifier {
    #[must_use]
    pub fn new(tiers: ZoneTiers) -> Self {
        Self { tiers }
    }

    #[must_use]
    pub fn tiers(&self) -> &ZoneTiers {
        &self.tiers
    }

    /// `< 300` → tier 1, `300..=1500` → tier 2, `> 1500` → tier 3.
    #[must_use]
    pub fn classify(&self, distance_km: f64) -> &str {
        let idx = if distance_km < NEAR_ZONE_LIMIT_KM {
            0
        } else if distance_km <= MID_ZONE_LIMIT_KM {
            1
        } else {
            2
        };
        &self.tiers.names[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ZoneClassifier {
        let headers = ["Courier", "Service", "Zona 1", "Zona 2", "Zona 3"];
        ZoneClassifier::new(ZoneTiers::discover(&headers, "Zona").unwrap())
    }

    #[test]
    fn discover_preserves_header_order() {
        let headers = ["Zona C", "Courier", "Zona A", "Service", "Zona B"];
        let tiers = ZoneTiers::discover(&headers, "Zona").unwrap();
        assert_eq!(tiers.names(), &["Zona C", "Zona A", "Zona B"]);
    }

    #[test]
    fn discover_matches_substring_case_sensitively() {
        let headers = ["Courier", "Harga Zona Dekat", "Zona Sedang", "Tarif Zona Jauh", "zona x"];
        let tiers = ZoneTiers::discover(&headers, "Zona").unwrap();
        assert_eq!(tiers.position("Tarif Zona Jauh"), Some(2));
        assert_eq!(tiers.position("zona x"), None);
    }

    #[test]
    fn discover_rejects_two_columns() {
        let headers = ["Courier", "Zona 1", "Zona 2"];
        let err = ZoneTiers::discover(&headers, "Zona").unwrap_err();
        assert!(
            matches!(err, EngineError::ZoneColumnCount { ref found, .. } if found.len() == 2),
            "got {err:?}"
        );
    }

    #[test]
    fn discover_rejects_four_columns() {
        let headers = ["Zona 1", "Zona 2", "Zona 3", "Zona 4"];
        let err = ZoneTiers::discover(&headers, "Zona").unwrap_err();
        assert!(matches!(err, EngineError::ZoneColumnCount { ref found, .. } if found.len() == 4));
    }

    #[test]
    fn classify_near() {
        let c = classifier();
        assert_eq!(c.classify(0.0), "Zona 1");
        assert_eq!(c.classify(299.999), "Zona 1");
    }

    #[test]
    fn classify_boundaries_belong_to_middle_tier() {
        let c = classifier();
        assert_eq!(c.classify(300.0), "Zona 2");
        assert_eq!(c.classify(1_500.0), "Zona 2");
    }

    #[test]
    fn classify_far() {
        let c = classifier();
        assert_eq!(c.classify(1_500.001), "Zona 3");
        assert_eq!(c.classify(5_000.0), "Zona 3");
    }
}
