//! Surface distance on the WGS-84 ellipsoid.
//!
//! Uses Vincenty's inverse formula. For nearly antipodal points where the
//! iteration does not converge, falls back to the spherical haversine distance.

use shipzone_core::Coordinates;

const WGS84_A: f64 = 6_378_137.0;
const WGS84_F: f64 = 1.0 / 298.257_223_563;
const WGS84_B: f64 = (1.0 - WGS84_F) * WGS84_A;
const MEAN_EARTH_RADIUS_KM: f64 = 6_371.008_8;

const MAX_ITERATIONS: usize = 200;
const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// Ellipsoidal distance between two points in kilometres.
#[must_use]
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    vincenty_km(from, to).unwrap_or_else(|| haversine_km(from, to))
}

/// Vincenty inverse distance in kilometres, or `None` if the iteration fails
/// to converge.
#[must_use]
pub fn vincenty_km(from: Coordinates, to: Coordinates) -> Option<f64> {
    let l = (to.longitude - from.longitude).to_radians();
    let u1 = ((1.0 - WGS84_F) * from.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * to.latitude.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;
    let (mut sin_sigma, mut cos_sigma, mut sigma) = (0.0, 0.0, 0.0);
    let (mut cos_sq_alpha, mut cos_2sigma_m) = (0.0, 0.0);

    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // coincident points
            return Some(0.0);
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Equatorial lines have cos²α = 0.
        cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };
        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));
        if (lambda - lambda_prev).abs() < CONVERGENCE_THRESHOLD {
            converged = true;
            break;
        }
    }

    if !converged {
        return None;
    }

    let u_sq = cos_sq_alpha * (WGS84_A.powi(2) - WGS84_B.powi(2)) / WGS84_B.powi(2);
    let a = 1.0 + u_sq / 16_384.0 * (4_096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let b = u_sq / 1_024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = b
        * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma.powi(2))
                        * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));

    let metres = WGS84_B * a * (sigma - delta_sigma);
    Some(metres / 1_000.0)
}

/// Great-circle distance on a sphere of mean Earth radius, in kilometres.
#[must_use]
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let a = ((d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    2.0 * MEAN_EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }

    #[test]
    fn identical_points_are_zero() {
        let jakarta = point(-6.2088, 106.8456);
        assert!(distance_km(jakarta, jakarta).abs() < 1e-9);
    }

    #[test]
    fn one_degree_along_equator() {
        // a * π / 180 on WGS-84
        let d = distance_km(point(0.0, 0.0), point(0.0, 1.0));
        assert!((d - 111.319_490_8).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn equator_to_pole_meridian() {
        let d = distance_km(point(0.0, 0.0), point(90.0, 0.0));
        assert!((d - 10_001.965_729).abs() < 1e-2, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let jakarta = point(-6.2088, 106.8456);
        let surabaya = point(-7.2575, 112.7521);
        let there = distance_km(jakarta, surabaya);
        let back = distance_km(surabaya, jakarta);
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn jakarta_to_surabaya_is_plausible() {
        let d = distance_km(point(-6.2088, 106.8456), point(-7.2575, 112.7521));
        assert!(d > 650.0 && d < 670.0, "got {d}");
    }

    #[test]
    fn ellipsoid_and_sphere_agree_within_one_percent() {
        let medan = point(3.5952, 98.6722);
        let jayapura = point(-2.5916, 140.6690);
        let ellipsoidal = vincenty_km(medan, jayapura).unwrap();
        let spherical = haversine_km(medan, jayapura);
        assert!((ellipsoidal - spherical).abs() / ellipsoidal < 0.01);
    }

    #[test]
    fn near_antipodal_points_fall_back_to_haversine() {
        let from = point(0.0, 0.0);
        let to = point(0.5, 179.7);
        let d = distance_km(from, to);
        assert!(d.is_finite());
        assert!(d > 19_000.0 && d < 20_100.0, "got {d}");
    }
}
