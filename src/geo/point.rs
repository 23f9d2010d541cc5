use crate::Arbitrary;
use crate::Degrees;
use serde::Deserialize;
use serde::Serialize;

/// A location eligible for display.
/// Sampled points are labeled with the region they came from;
/// curated points carry their own name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: Degrees,
    pub lon: Degrees,
    #[serde(default, alias = "city", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GeoPoint {
    pub fn new(lat: Degrees, lon: Degrees) -> Self {
        Self {
            lat,
            lon,
            name: None,
        }
    }
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
    /// Metadata query form, `lat,lon`.
    pub fn location(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name {
            Some(ref name) => write!(f, "{} ({:.6}, {:.6})", name, self.lat, self.lon),
            None => write!(f, "({:.6}, {:.6})", self.lat, self.lon),
        }
    }
}

impl Arbitrary for GeoPoint {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self::new(rng.random_range(-90.0..=90.0), rng.random_range(-180.0..=180.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_point_omits_name() {
        let json = serde_json::to_value(GeoPoint::new(28.5, 77.1)).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 28.5, "lon": 77.1 }));
    }
    #[test]
    fn named_point_serializes_name() {
        let json = serde_json::to_value(GeoPoint::new(28.5, 77.1).named("Delhi")).unwrap();
        assert_eq!(json["name"], "Delhi");
    }
    #[test]
    fn city_key_reads_as_name() {
        let point: GeoPoint =
            serde_json::from_str(r#"{ "lat": 19.0, "lon": 72.8, "city": "Mumbai" }"#).unwrap();
        assert_eq!(point.name.as_deref(), Some("Mumbai"));
    }
    #[test]
    fn random_points_are_on_the_globe_and_survive_json() {
        for _ in 0..256 {
            let point = GeoPoint::random();
            assert!((-90.0..=90.0).contains(&point.lat));
            assert!((-180.0..=180.0).contains(&point.lon));
            let named = point.named("Somewhere");
            let json = serde_json::to_string(&named).unwrap();
            let back = serde_json::from_str::<GeoPoint>(&json).unwrap();
            assert!((back.lat - named.lat).abs() < 1e-9, "{}", json);
            assert!((back.lon - named.lon).abs() < 1e-9, "{}", json);
            assert_eq!(back.name, named.name);
        }
    }
    #[test]
    fn location_is_comma_separated() {
        assert_eq!(GeoPoint::new(12.5, -3.25).location(), "12.5,-3.25");
    }
}
