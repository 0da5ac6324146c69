//! Tour package model
//!
//! A pre-built holiday package as listed on the search results page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Invalid duration '{0}', expected e.g. \"7 Days / 6 Nights\"")]
    InvalidDuration(String),

    #[error("Package '{0}' not found")]
    PackageNotFound(String),
}

/// Length of a package in days and nights
///
/// # Example
/// ```
/// use trip_planner_core_rs::TripDuration;
///
/// let d: TripDuration = "7 Days / 6 Nights".parse().unwrap();
/// assert_eq!((d.days, d.nights), (7, 6));
/// assert_eq!(d.to_string(), "7 Days / 6 Nights");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TripDuration {
    pub days: u32,
    pub nights: u32,
}

impl TripDuration {
    pub fn new(days: u32, nights: u32) -> Self {
        Self { days, nights }
    }
}

impl std::fmt::Display for TripDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = |n: u32| if n == 1 { "" } else { "s" };
        write!(
            f,
            "{} Day{} / {} Night{}",
            self.days,
            plural(self.days),
            self.nights,
            plural(self.nights)
        )
    }
}

impl std::str::FromStr for TripDuration {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidDuration(s.to_string());

        let (days_part, nights_part) = s.split_once('/').ok_or_else(invalid)?;
        let leading = |part: &str, unit: &str| -> Option<u32> {
            let mut words = part.split_whitespace();
            let n = words.next()?.parse().ok()?;
            let word = words.next()?.to_ascii_lowercase();
            word.starts_with(unit).then_some(n)
        };

        let days = leading(days_part, "day").ok_or_else(invalid)?;
        let nights = leading(nights_part, "night").ok_or_else(invalid)?;
        Ok(Self { days, nights })
    }
}

/// A listed holiday package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub region: String,
    pub duration: TripDuration,
    /// "Starts from" price in whole rupees
    pub price: i64,
    pub highlights: Vec<String>,
}

impl TourPackage {
    /// First `n` inclusions, as shown on the card overlay
    pub fn top_highlights(&self, n: usize) -> &[String] {
        &self.highlights[..n.min(self.highlights.len())]
    }

    /// Case-insensitive match on title, destination, region or highlights
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        std::iter::once(&self.title)
            .chain([&self.destination, &self.region])
            .chain(self.highlights.iter())
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
