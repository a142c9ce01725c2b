//! Static lookup tables for countries and boat specifications.

/// Country entry with its ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
}

/// Boat specification drawn as one atomic tuple; rows are never recombined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoatSpec {
    pub make: &'static str,
    pub model: &'static str,
    /// Length overall in feet, kept as a formatted string.
    pub loa_ft: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { name: "United States", code: "US" },
    Country { name: "Canada", code: "CA" },
    Country { name: "Mexico", code: "MX" },
    Country { name: "Brazil", code: "BR" },
    Country { name: "Argentina", code: "AR" },
    Country { name: "United Kingdom", code: "GB" },
    Country { name: "France", code: "FR" },
    Country { name: "Germany", code: "DE" },
    Country { name: "Italy", code: "IT" },
    Country { name: "Spain", code: "ES" },
    Country { name: "Portugal", code: "PT" },
    Country { name: "Netherlands", code: "NL" },
    Country { name: "Sweden", code: "SE" },
    Country { name: "Norway", code: "NO" },
    Country { name: "Denmark", code: "DK" },
    Country { name: "Australia", code: "AU" },
    Country { name: "New Zealand", code: "NZ" },
];

pub const BOAT_SPECS: &[BoatSpec] = &[
    BoatSpec { make: "Beneteau", model: "Oceanis 30.1", loa_ft: "31.3" },
    BoatSpec { make: "Jeanneau", model: "Sun Odyssey 440", loa_ft: "43.8" },
    BoatSpec { make: "Catalina", model: "Catalina 36", loa_ft: "36.3" },
    BoatSpec { make: "Hunter", model: "Hunter 356", loa_ft: "34.5" },
    BoatSpec { make: "Bavaria", model: "Cruiser 34", loa_ft: "32.8" },
    BoatSpec { make: "Hanse", model: "418", loa_ft: "40.7" },
    BoatSpec { make: "Island Packet", model: "IP 380", loa_ft: "38.7" },
    BoatSpec { make: "Hallberg-Rassy", model: "HR 412", loa_ft: "41.0" },
    BoatSpec { make: "Dufour", model: "390", loa_ft: "39.1" },
    BoatSpec { make: "Sabre", model: "426", loa_ft: "42.6" },
    BoatSpec { make: "Albin", model: "Nova 33", loa_ft: "32.6" },
    BoatSpec { make: "Tartan", model: "4300", loa_ft: "43.0" },
    BoatSpec { make: "C&C", model: "30", loa_ft: "29.5" },
    BoatSpec { make: "Morgan", model: "382", loa_ft: "38.2" },
    BoatSpec { make: "Pearson", model: "365", loa_ft: "36.5" },
    BoatSpec { make: "O'Day", model: "302", loa_ft: "29.9" },
    BoatSpec { make: "Contessa", model: "32", loa_ft: "32.2" },
    BoatSpec { make: "Ericson", model: "38", loa_ft: "37.8" },
    BoatSpec { make: "Westsail", model: "32", loa_ft: "32.0" },
    BoatSpec { make: "Freedom", model: "35", loa_ft: "35.4" },
    BoatSpec { make: "Cape Dory", model: "36", loa_ft: "36.0" },
    BoatSpec { make: "Niagara", model: "35", loa_ft: "35.1" },
];

/// ISO code for a country name, if the table knows it.
pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|country| country.name == name)
        .map(|country| country.code)
}
