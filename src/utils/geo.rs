/// Raio equatorial usado pelo MongoDB nas consultas esféricas (metros)
pub const EARTH_RADIUS_METERS: f64 = 6_378_100.0;

/// 1 milha em metros (mesma conversão usada pelo frontend)
pub const METERS_PER_MILE: f64 = 1609.34;

pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Great-circle distance between two `[longitude, latitude]` pairs, in meters.
pub fn haversine_meters(a: [f64; 2], b: [f64; 2]) -> f64 {
    let (lng1, lat1) = (a[0].to_radians(), a[1].to_radians());
    let (lng2, lat2) = (b[0].to_radians(), b[1].to_radians());

    let d_lat = lat2 - lat1;
    let d_lng = lng2 - lng1;

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}
