//! Package Catalog
//!
//! Listing and search over holiday packages. The package data itself is
//! owned by a `PackageProvider`; the bundled `InMemoryCatalog` serves the
//! sample listing until a real inventory source exists.

mod sample;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::package::{CatalogError, TourPackage};

/// Destination searched when the user gives no query
pub const DEFAULT_DESTINATION: &str = "Kerala";

/// Source of listed packages
pub trait PackageProvider {
    /// All packages in listing (popularity) order
    fn packages(&self) -> Vec<TourPackage>;

    fn package(&self, id: &str) -> Option<TourPackage> {
        self.packages().into_iter().find(|p| p.id == id)
    }
}

/// Result ordering on the search page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Provider order
    #[default]
    Popularity,
    PriceAsc,
    PriceDesc,
    /// Shortest trip first
    Duration,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popularity" => Ok(SortOrder::Popularity),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "duration" => Ok(SortOrder::Duration),
            other => Err(format!(
                "Invalid sort order '{}'. Use popularity, price-asc, price-desc or duration",
                other
            )),
        }
    }
}

/// Search request from the results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageQuery {
    pub destination: String,
    #[serde(default)]
    pub sort: SortOrder,
}

impl Default for PackageQuery {
    fn default() -> Self {
        Self {
            destination: DEFAULT_DESTINATION.to_string(),
            sort: SortOrder::default(),
        }
    }
}

impl PackageQuery {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            sort: SortOrder::default(),
        }
    }

    pub fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Filter and order packages for a query
///
/// Sorting is stable, so packages with equal keys keep provider order.
pub fn search<P: PackageProvider + ?Sized>(provider: &P, query: &PackageQuery) -> Vec<TourPackage> {
    let mut results: Vec<_> = provider
        .packages()
        .into_iter()
        .filter(|p| p.matches(&query.destination))
        .collect();

    match query.sort {
        SortOrder::Popularity => {}
        SortOrder::PriceAsc => results.sort_by_key(|p| p.price),
        SortOrder::PriceDesc => results.sort_by_key(|p| std::cmp::Reverse(p.price)),
        SortOrder::Duration => results.sort_by_key(|p| p.duration),
    }

    debug!(
        destination = %query.destination,
        sort = ?query.sort,
        hits = results.len(),
        "package search"
    );
    results
}

/// Fixed in-memory package list
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    packages: Vec<TourPackage>,
}

impl InMemoryCatalog {
    pub fn new(packages: Vec<TourPackage>) -> Self {
        Self { packages }
    }

    /// The sample Kerala listing
    pub fn sample() -> Self {
        Self::new(sample::kerala_packages())
    }

    /// Look up a package, failing when the id is unknown
    pub fn require(&self, id: &str) -> Result<&TourPackage, CatalogError> {
        self.packages
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::PackageNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageProvider for InMemoryCatalog {
    fn packages(&self) -> Vec<TourPackage> {
        self.packages.clone()
    }

    fn package(&self, id: &str) -> Option<TourPackage> {
        self.require(id).ok().cloned()
    }
}
