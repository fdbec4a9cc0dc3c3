use crate::model::City;

/// Seed cities shown by default, in display order.
const SEED_CITIES: &[(&str, f64, f64)] = &[
    ("Durham", 35.9940, -78.8986),
    ("New York", 40.7128, -74.0060),
    ("Tokyo", 35.6762, 139.6503),
    ("Accra", 5.6037, -0.1870),
    ("Lausanne", 46.5197, 6.6323),
    ("Santorini", 36.3932, 25.4615),
];

pub fn all() -> Vec<City> {
    SEED_CITIES.iter().map(|(name, lat, lon)| City::new(*name, *lat, *lon)).collect()
}

/// Case-insensitive exact match against the seed list.
pub fn find(name: &str) -> Option<City> {
    SEED_CITIES
        .iter()
        .find(|(n, _, _)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(name, lat, lon)| City::new(*name, *lat, *lon))
}
