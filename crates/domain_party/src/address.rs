//! Postal address and country handling

use serde::{Deserialize, Serialize};
use std::fmt;

/// Country of a person's postal address
///
/// The wire format carries the upper-case code (`CZECHIA`, `SLOVAKIA`);
/// codes outside the enumerated set are preserved as raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Country {
    Czechia,
    Slovakia,
    Other(String),
}

impl Country {
    /// Localized display label
    pub fn label(&self) -> &str {
        match self {
            Country::Czechia => "Czechia",
            Country::Slovakia => "Slovakia",
            Country::Other(code) => code,
        }
    }

    /// Upper-case wire code
    pub fn code(&self) -> &str {
        match self {
            Country::Czechia => "CZECHIA",
            Country::Slovakia => "SLOVAKIA",
            Country::Other(code) => code,
        }
    }
}

impl Default for Country {
    fn default() -> Self {
        Country::Czechia
    }
}

impl From<String> for Country {
    fn from(code: String) -> Self {
        match code.as_str() {
            "CZECHIA" => Country::Czechia,
            "SLOVAKIA" => Country::Slovakia,
            _ => Country::Other(code),
        }
    }
}

impl From<Country> for String {
    fn from(country: Country) -> String {
        country.code().to_string()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Postal address of a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: Country,
}

impl Address {
    /// Single-line rendering for tables and detail views
    pub fn format(&self) -> String {
        format!(
            "{}, {} {}, {}",
            self.street,
            self.zip,
            self.city,
            self.country.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_codes_round_trip() {
        for country in [Country::Czechia, Country::Slovakia] {
            let code = String::from(country.clone());
            assert_eq!(Country::from(code), country);
        }
    }

    #[test]
    fn test_unknown_code_preserved() {
        let country = Country::from("AUSTRIA".to_string());
        assert_eq!(country, Country::Other("AUSTRIA".to_string()));
        assert_eq!(country.code(), "AUSTRIA");
    }

    #[test]
    fn test_address_format() {
        let address = Address {
            street: "Dlouhá 12".to_string(),
            zip: "11000".to_string(),
            city: "Praha".to_string(),
            country: Country::Czechia,
        };
        assert_eq!(address.format(), "Dlouhá 12, 11000 Praha, Czechia");
    }
}
