//! Fixed location table and report orderings

use std::fmt;

/// A named point the weather service is queried for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Stable key used in logs and error messages
    pub key: &'static str,
    /// `lat,lon` exactly as sent to the API
    pub coordinates: &'static str,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub const fn new(key: &'static str, coordinates: &'static str) -> Self {
        Self { key, coordinates }
    }

    /// Query string for the weather service
    #[must_use]
    pub fn query(&self) -> &'static str {
        self.coordinates
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.coordinates)
    }
}

pub const ANCHOR_POINT: Location = Location::new("anchor_point", "59.7775,-151.7702");
pub const ANCHORAGE: Location = Location::new("anchorage", "61.2167,-149.9000");
pub const COOPER_LANDING: Location = Location::new("cooper_landing", "60.4905,-149.7944");
pub const HOMER: Location = Location::new("homer", "59.6425,-152.5483");
pub const KACHEMAK_BAY_SELDOVIA: Location =
    Location::new("kachemak_bay_seldovia", "59.4394,-151.7122");
pub const KENAI: Location = Location::new("kenai", "60.5586,-151.2297");
pub const KENAI_RIVER: Location = Location::new("kenai_river", "60.5439,-151.2786");
pub const NANWALEK: Location = Location::new("nanwalek", "59.3536,-151.9125");
pub const NINILCHIK: Location = Location::new("ninilchik", "60.04638,-151.6672");
pub const PORT_GRAHAM: Location = Location::new("port_graham", "59.3477,-151.8333");
pub const SOLDOTNA: Location = Location::new("soldotna", "60.4866,-151.07527");
pub const WESTERN_KENAI_PENINSULA: Location =
    Location::new("western_kenai_peninsula", "59.8861,-151.6338");

/// Every location the reports know about
pub static LOCATIONS: [Location; 12] = [
    ANCHOR_POINT,
    ANCHORAGE,
    COOPER_LANDING,
    HOMER,
    KACHEMAK_BAY_SELDOVIA,
    KENAI,
    KENAI_RIVER,
    NANWALEK,
    NINILCHIK,
    PORT_GRAHAM,
    SOLDOTNA,
    WESTERN_KENAI_PENINSULA,
];

/// Tide stations, with their report headings, in report order
pub static TIDE_ORDER: [(Location, &str); 2] = [
    (KACHEMAK_BAY_SELDOVIA, "Kachemak Bay, Seldovia"),
    (KENAI_RIVER, "Kenai River"),
];

/// Sunrise and sunset are read from this station's tide payload
pub const SUN_PHASE_LOCATION: Location = KENAI_RIVER;

/// Current temperature table rows, in report order
pub static CURRENT_TEMPERATURE_ORDER: [(Location, &str); 10] = [
    (HOMER, "Homer"),
    (ANCHOR_POINT, "Anchor Point"),
    (NINILCHIK, "Ninilchik"),
    (KACHEMAK_BAY_SELDOVIA, "Seldovia"),
    (PORT_GRAHAM, "Port Graham"),
    (NANWALEK, "Nanwalek"),
    (KENAI, "Kenai"),
    (SOLDOTNA, "Soldotna"),
    (COOPER_LANDING, "Cooper Landing"),
    (ANCHORAGE, "Anchorage"),
];

/// Text forecast locations, in report order
pub static FORECAST_ORDER: [(Location, &str); 2] = [
    (WESTERN_KENAI_PENINSULA, "Western Kenai Peninsula"),
    (ANCHORAGE, "Anchorage"),
];

/// Marine zones, in the order they appear in the marine report
pub static MARINE_REGION_ORDER: [&str; 7] = [
    "KACHEMAK BAY",
    "COOK INLET NORTH OF KALGIN ISLAND",
    "COOK INLET KALGIN ISLAND TO POINT BEDE",
    "SHELIKOF STRAIT",
    "BARREN ISLANDS EAST",
    "WEST OF BARREN ISLANDS INCLUDING KAMISHAK BAY",
    "CAPE CLEARE TO GORE POINT",
];
