/// Great-circle distance in kilometers between two (latitude, longitude)
/// pairs given in degrees, rounded to two decimal places.
///
/// Haversine formula on a spherical Earth of radius 6371 km. Callers with a
/// missing coordinate must report an absent distance instead of substituting
/// zeros here.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_to_self() {
        assert_eq!(distance_km(48.8566, 2.3522, 48.8566, 2.3522), 0.0);
        assert_eq!(distance_km(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        assert_eq!(distance_km(0.0, 0.0, 0.0, 1.0), 111.19);
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let paris = (48.8566, 2.3522);
        let london = (51.5074, -0.1278);
        let there = distance_km(paris.0, paris.1, london.0, london.1);
        let back = distance_km(london.0, london.1, paris.0, paris.1);
        assert_eq!(there, back);
        // Sanity check against the known Paris-London distance.
        assert!((there - 343.5).abs() < 1.0, "got {}", there);
    }

    #[test]
    fn rounded_to_two_decimals() {
        let d = distance_km(40.7128, -74.0060, 34.0522, -118.2437);
        assert_eq!(d, (d * 100.0).round() / 100.0);
    }
}
