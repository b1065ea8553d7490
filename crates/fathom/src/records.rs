//! Domain records for the submarine cable dataset.
//!
//! These structs mirror the three CSV inputs. Field names double as the
//! expected header names; population and user counts tolerate thousands
//! separators and blanks.

use serde::{Deserialize, Deserializer, Serialize};

/// A country with its capital location and connectivity statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Country name, the registry key.
    pub country_name: String,

    /// Capital city name, the graph vertex identifier for this country.
    pub capital_name: String,

    /// Capital latitude in degrees.
    pub latitude: f64,

    /// Capital longitude in degrees.
    pub longitude: f64,

    /// ISO country code.
    pub code: String,

    /// Continent name.
    pub continent: String,

    /// Population count.
    #[serde(deserialize_with = "lenient_count")]
    pub population: u64,

    /// Internet user count.
    #[serde(deserialize_with = "lenient_count")]
    pub internet_users: u64,
}

/// A cable landing point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landing {
    /// Primary landing point identifier, the registry key.
    pub landing_id: String,

    /// Secondary identifier carried by the dataset.
    pub id: String,

    /// Combined location label, `"Name, Country"`.
    pub location: String,

    /// Landing latitude in degrees.
    pub latitude: f64,

    /// Landing longitude in degrees.
    pub longitude: f64,
}

impl Landing {
    /// Landing point name: the first comma-separated token of the label.
    #[must_use]
    pub fn name(&self) -> &str {
        self.location
            .split(',')
            .next()
            .unwrap_or(&self.location)
            .trim()
    }

    /// Country the landing belongs to: the last comma-separated token.
    #[must_use]
    pub fn country(&self) -> &str {
        self.location
            .rsplit(',')
            .next()
            .unwrap_or(&self.location)
            .trim()
    }
}

/// One cable connection between two landing points.
///
/// The dataset carries more columns than these; unknown columns are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Origin landing point identifier.
    pub origin: String,

    /// Destination landing point identifier.
    pub destination: String,

    /// Cable identifier the connection belongs to.
    pub cable_id: String,
}

/// Parse a count that may carry thousands separators; blank means zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse::<u64>().map_err(serde::de::Error::custom)
}
