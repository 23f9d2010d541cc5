use super::GeoPoint;
use crate::Degrees;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Metro rectangles sampled when no region file is configured.
#[rustfmt::skip]
const CITIES: [(&str, Degrees, Degrees, Degrees, Degrees); 10] = [
    ("Delhi",     28.4041, 28.8813, 76.8371, 77.3319),
    ("Mumbai",    18.8941, 19.2719, 72.7757, 72.9868),
    ("Bangalore", 12.8685, 13.1615, 77.4913, 77.7047),
    ("Kolkata",   22.4373, 22.7364, 88.2444, 88.4368),
    ("Chennai",   12.8996, 13.1434, 80.1638, 80.3055),
    ("Hyderabad", 17.2782, 17.5461, 78.3498, 78.5825),
    ("Pune",      18.4321, 18.6177, 73.7518, 73.9842),
    ("Ahmedabad", 22.9413, 23.1266, 72.5021, 72.6616),
    ("Jaipur",    26.7846, 27.0451, 75.7333, 75.9616),
    ("Lucknow",   26.7674, 27.0113, 80.8170, 81.0296),
];

/// Errors for malformed bounding regions.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionError {
    Inverted(String),
    OutOfRange(String),
}

impl std::fmt::Display for RegionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inverted(name) => write!(f, "region {} has min greater than max", name),
            Self::OutOfRange(name) => write!(f, "region {} lies outside the globe", name),
        }
    }
}

impl std::error::Error for RegionError {}

/// Named latitude/longitude rectangle that constrains random sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub min_lat: Degrees,
    pub max_lat: Degrees,
    pub min_lon: Degrees,
    pub max_lon: Degrees,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        (min_lat, max_lat): (Degrees, Degrees),
        (min_lon, max_lon): (Degrees, Degrees),
    ) -> Result<Self, RegionError> {
        let region = Self {
            name: name.into(),
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        };
        region.check().map(|_| region)
    }

    /// The built-in metro list.
    pub fn cities() -> Vec<Self> {
        CITIES
            .iter()
            .map(|&(name, min_lat, max_lat, min_lon, max_lon)| Self {
                name: name.to_string(),
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            })
            .collect()
    }

    /// Rejects inverted or off-globe rectangles.
    /// NaN bounds fail the range check.
    pub fn check(&self) -> Result<(), RegionError> {
        let lat = -90.0..=90.0;
        let lon = -180.0..=180.0;
        if !(lat.contains(&self.min_lat)
            && lat.contains(&self.max_lat)
            && lon.contains(&self.min_lon)
            && lon.contains(&self.max_lon))
        {
            return Err(RegionError::OutOfRange(self.name.clone()));
        }
        if self.min_lat > self.max_lat || self.min_lon > self.max_lon {
            return Err(RegionError::Inverted(self.name.clone()));
        }
        Ok(())
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lon..=self.max_lon).contains(&point.lon)
    }

    /// Uniform point inside the rectangle, labeled with this region's name.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> GeoPoint {
        let lat = rng.random_range(self.min_lat..=self.max_lat);
        let lon = rng.random_range(self.min_lon..=self.max_lon);
        GeoPoint::new(lat, lon).named(self.name.as_str())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}..{}, {}..{}]",
            self.name, self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn builtin_cities_are_valid() {
        let cities = Region::cities();
        assert_eq!(cities.len(), 10);
        assert!(cities.iter().all(|r| r.check().is_ok()));
    }
    #[test]
    fn samples_stay_inside_their_region() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        for region in Region::cities() {
            for _ in 0..256 {
                let point = region.sample(rng);
                assert!(region.contains(&point), "{} outside {}", point, region);
                assert_eq!(point.name.as_deref(), Some(region.name.as_str()));
            }
        }
    }
    #[test]
    fn degenerate_region_samples_its_corner() {
        let region = Region::new("Gate", (18.9220, 18.9220), (72.8347, 72.8347)).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let point = region.sample(rng);
        assert_eq!((point.lat, point.lon), (18.9220, 72.8347));
    }
    #[test]
    fn inverted_region_is_rejected() {
        assert_eq!(
            Region::new("Upside", (10.0, 5.0), (0.0, 1.0)),
            Err(RegionError::Inverted("Upside".to_string()))
        );
    }
    #[test]
    fn off_globe_region_is_rejected() {
        assert!(matches!(
            Region::new("Nowhere", (80.0, 95.0), (0.0, 1.0)),
            Err(RegionError::OutOfRange(_))
        ));
        assert!(matches!(
            Region::new("Nan", (f64::NAN, 1.0), (0.0, 1.0)),
            Err(RegionError::OutOfRange(_))
        ));
    }
    #[test]
    fn containment_matches_bounds_for_random_points() {
        let cities = Region::cities();
        for _ in 0..1024 {
            let point = GeoPoint::random();
            for region in cities.iter() {
                let inside = point.lat >= region.min_lat
                    && point.lat <= region.max_lat
                    && point.lon >= region.min_lon
                    && point.lon <= region.max_lon;
                assert_eq!(region.contains(&point), inside, "{} vs {}", point, region);
            }
            let pin = Region::new("Pin", (point.lat, point.lat), (point.lon, point.lon)).unwrap();
            assert!(pin.contains(&point));
        }
    }
    #[test]
    fn contains_is_inclusive() {
        let region = Region::new("Box", (0.0, 1.0), (0.0, 1.0)).unwrap();
        assert!(region.contains(&GeoPoint::new(0.0, 1.0)));
        assert!(!region.contains(&GeoPoint::new(1.0001, 0.5)));
    }
}
