//! Rate Schema Documentation
//!
//! Self-documenting schema for every rate on the rate card.
//! Generated from code metadata for the CLI `rate-schema` command.

use serde::{Deserialize, Serialize};

use super::rates::{PackageRates, PartyRates, RateCard};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Category for grouping rates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RateCategory {
    /// Charged once per traveler
    PerTraveler,
    /// Charged for every night (or day) of the trip
    PerNight,
    /// Charged once per trip
    Flat,
    /// Changes how other components combine
    Modifier,
}

/// Worked example for a rate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateExample {
    pub scenario: String,
    /// Input values as (name, value) pairs
    pub inputs: Vec<(String, String)>,
    pub calculation: String,
    pub result: String,
}

/// Documentation for a single rate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateElement {
    /// Dotted path on the rate card (e.g., "party.cab_per_day")
    pub name: String,
    pub display_name: String,
    pub category: RateCategory,
    pub description: String,
    /// Which estimator variant reads this rate
    pub variant: String,
    /// Plain-text formula for the component the rate feeds
    pub formula: String,
    pub default_value: String,
    pub unit: String,
    pub data_type: String,
    pub example: Option<RateExample>,
}

/// Complete rate schema documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSchemaDoc {
    pub version: String,
    pub currency: String,
    pub rates: Vec<RateElement>,
}

/// Types that can describe their own rates
pub trait RateSchemaDocumented {
    fn schema_docs() -> Vec<RateElement>;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl RateSchemaDocumented for PartyRates {
    fn schema_docs() -> Vec<RateElement> {
        let d = PartyRates::default();
        let fare = |class: &str, display: &str, value: i64| RateElement {
            name: format!("party.{}_flight_per_person", class),
            display_name: display.to_string(),
            category: RateCategory::PerTraveler,
            description: format!("Return fare for one traveler flying {}.", class),
            variant: "party".to_string(),
            formula: "include_flights ? fare(flight_class) * travelers : 0".to_string(),
            default_value: value.to_string(),
            unit: "rupees per traveler".to_string(),
            data_type: "i64".to_string(),
            example: None,
        };

        vec![
            RateElement {
                example: Some(RateExample {
                    scenario: "Two travelers in economy".to_string(),
                    inputs: pairs(&[("travelers", "2"), ("economy_flight_per_person", "15000")]),
                    calculation: "15,000 * 2 = 30,000".to_string(),
                    result: "₹30,000 flight component".to_string(),
                }),
                ..fare("economy", "Economy Fare", d.economy_flight_per_person)
            },
            fare("business", "Business Fare", d.business_flight_per_person),
            fare("first", "First Class Fare", d.first_flight_per_person),
            RateElement {
                name: "party.hotel_per_star_per_night".to_string(),
                display_name: "Hotel Rate per Star".to_string(),
                category: RateCategory::PerNight,
                description: "Room rate scaled by the chosen star tier (2-5).".to_string(),
                variant: "party".to_string(),
                formula: "include_hotel ? stars * hotel_per_star_per_night * nights : 0"
                    .to_string(),
                default_value: d.hotel_per_star_per_night.to_string(),
                unit: "rupees per star per night".to_string(),
                data_type: "i64".to_string(),
                example: Some(RateExample {
                    scenario: "3-star hotel for a week".to_string(),
                    inputs: pairs(&[("stars", "3"), ("nights", "7")]),
                    calculation: "3 * 1,200 * 7 = 25,200".to_string(),
                    result: "₹25,200 hotel component".to_string(),
                }),
            },
            RateElement {
                name: "party.cab_per_day".to_string(),
                display_name: "Local Cab".to_string(),
                category: RateCategory::PerNight,
                description: "Local cab hire for each day of the trip.".to_string(),
                variant: "party".to_string(),
                formula: "include_cab ? cab_per_day * nights : 0".to_string(),
                default_value: d.cab_per_day.to_string(),
                unit: "rupees per day".to_string(),
                data_type: "i64".to_string(),
                example: None,
            },
            RateElement {
                name: "party.reapply_traveler_multiplier".to_string(),
                display_name: "Whole-Party Multiplier".to_string(),
                category: RateCategory::Modifier,
                description: "Multiplies the full subtotal by the traveler count. Flight fares \
                    are already per traveler, so they are counted twice while this is on."
                    .to_string(),
                variant: "party".to_string(),
                formula: "total = reapply ? subtotal * travelers : subtotal".to_string(),
                default_value: d.reapply_traveler_multiplier.to_string(),
                unit: "flag".to_string(),
                data_type: "bool".to_string(),
                example: Some(RateExample {
                    scenario: "Default widget quote".to_string(),
                    inputs: pairs(&[("subtotal", "60200"), ("travelers", "2")]),
                    calculation: "60,200 * 2 = 1,20,400".to_string(),
                    result: "₹1,20,400 total".to_string(),
                }),
            },
        ]
    }
}

impl RateSchemaDocumented for PackageRates {
    fn schema_docs() -> Vec<RateElement> {
        let d = PackageRates::default();
        vec![
            RateElement {
                name: "package.flight_flat".to_string(),
                display_name: "Package Flight".to_string(),
                category: RateCategory::Flat,
                description: "Single flight fare for the package, not scaled by party size."
                    .to_string(),
                variant: "package".to_string(),
                formula: "include_flights ? flight_flat : 0".to_string(),
                default_value: d.flight_flat.to_string(),
                unit: "rupees per trip".to_string(),
                data_type: "i64".to_string(),
                example: None,
            },
            RateElement {
                name: "package.cab_per_day".to_string(),
                display_name: "Full-Trip Cab Service".to_string(),
                category: RateCategory::PerNight,
                description: "Dedicated cab for every day of the package.".to_string(),
                variant: "package".to_string(),
                formula: "include_cab ? cab_per_day * nights : 0".to_string(),
                default_value: d.cab_per_day.to_string(),
                unit: "rupees per day".to_string(),
                data_type: "i64".to_string(),
                example: Some(RateExample {
                    scenario: "Five-day package with cab".to_string(),
                    inputs: pairs(&[("nights", "5"), ("cab_per_day", "2800")]),
                    calculation: "2,800 * 5 = 14,000".to_string(),
                    result: "₹14,000 cab component".to_string(),
                }),
            },
        ]
    }
}

impl RateSchemaDocumented for RateCard {
    fn schema_docs() -> Vec<RateElement> {
        let mut docs = PartyRates::schema_docs();
        docs.extend(PackageRates::schema_docs());
        docs
    }
}

/// Build the full rate schema document
pub fn rate_schema() -> RateSchemaDoc {
    RateSchemaDoc {
        version: "1.0".to_string(),
        currency: "INR".to_string(),
        rates: RateCard::schema_docs(),
    }
}

/// Generate the rate schema documentation as a JSON string
pub fn get_rate_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&rate_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_category_serializes_to_json() {
        let json = serde_json::to_string(&RateCategory::PerTraveler).unwrap();
        assert_eq!(json, "\"PerTraveler\"");
    }

    #[test]
    fn test_schema_covers_every_rate() {
        let names: Vec<_> = RateCard::schema_docs().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "party.economy_flight_per_person",
                "party.business_flight_per_person",
                "party.first_flight_per_person",
                "party.hotel_per_star_per_night",
                "party.cab_per_day",
                "party.reapply_traveler_multiplier",
                "package.flight_flat",
                "package.cab_per_day",
            ]
        );
    }

    #[test]
    fn test_default_values_track_rate_card() {
        let docs = RateCard::schema_docs();
        let find = |name: &str| docs.iter().find(|d| d.name == name).unwrap().default_value.clone();

        assert_eq!(find("party.economy_flight_per_person"), "15000");
        assert_eq!(find("party.hotel_per_star_per_night"), "1200");
        assert_eq!(find("party.reapply_traveler_multiplier"), "true");
        assert_eq!(find("package.flight_flat"), "12500");
    }

    #[test]
    fn test_modifier_count() {
        let docs = RateCard::schema_docs();
        let modifiers = docs.iter().filter(|d| d.category == RateCategory::Modifier).count();
        assert_eq!(modifiers, 1);
    }

    #[test]
    fn test_get_rate_schema_is_valid_json() {
        let schema = get_rate_schema().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(parsed["version"], "1.0");
        assert_eq!(parsed["currency"], "INR");
        assert_eq!(parsed["rates"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_get_rate_schema_is_deterministic() {
        assert_eq!(get_rate_schema().unwrap(), get_rate_schema().unwrap());
    }
}
