//! Pure geographic math: haversine distance and bounding-box pre-filters.
//! The bounding box is only a coarse range-scan window; callers must always
//! re-check candidates with the exact haversine distance.

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two lat/lon points on a
/// spherical Earth.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Rectangular lat/lon window around a center point, using the flat-Earth
/// delta approximation. Guaranteed to contain every point within
/// `radius_km` of the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn around(lat: f64, lon: f64, radius_km: f64) -> Self {
        let lat_delta = radius_km / EARTH_RADIUS_KM * (180.0 / std::f64::consts::PI);

        // The longitude denominator collapses near the poles; fall back to
        // the full longitude range there instead of dividing by ~0.
        let cos_lat = lat.to_radians().cos();
        let (lon_min, lon_max) = if cos_lat.abs() < 1e-6 {
            (-180.0, 180.0)
        } else {
            let lon_delta =
                radius_km / (EARTH_RADIUS_KM * cos_lat) * (180.0 / std::f64::consts::PI);
            (
                (lon - lon_delta.abs()).max(-180.0),
                (lon + lon_delta.abs()).min(180.0),
            )
        };

        BoundingBox {
            lat_min: (lat - lat_delta).max(-90.0),
            lat_max: (lat + lat_delta).min(90.0),
            lon_min,
            lon_max,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(haversine_km(40.4168, -3.7038, 40.4168, -3.7038), 0.0);
        assert_eq!(haversine_km(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = haversine_km(48.8566, 2.3522, 51.5074, -0.1278);
        let b = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn madrid_to_barcelona_is_about_504_km() {
        let d = haversine_km(40.4168, -3.7038, 41.3851, 2.1734);
        assert!((d - 504.0).abs() < 2.0, "got {d}");
    }

    #[test]
    fn distance_is_never_negative() {
        assert!(haversine_km(-89.9, 170.0, 89.9, -170.0) >= 0.0);
    }

    #[test]
    fn bounding_box_contains_points_inside_radius() {
        let bbox = BoundingBox::around(40.0, -3.0, 10.0);
        // ~5 km north of the center
        let lat = 40.0 + 5.0 / EARTH_RADIUS_KM * (180.0 / std::f64::consts::PI);
        assert!(bbox.contains(lat, -3.0));
        assert!(bbox.contains(40.0, -3.0));
    }

    #[test]
    fn bounding_box_excludes_far_points() {
        let bbox = BoundingBox::around(40.0, -3.0, 10.0);
        assert!(!bbox.contains(41.0, -3.0));
        assert!(!bbox.contains(40.0, 2.0));
    }

    #[test]
    fn bounding_box_degenerates_at_the_pole() {
        let bbox = BoundingBox::around(90.0, 0.0, 10.0);
        assert_eq!(bbox.lon_min, -180.0);
        assert_eq!(bbox.lon_max, 180.0);
        assert_eq!(bbox.lat_max, 90.0);
    }
}
