//! Package quote
//!
//! ```text
//! flights    = include_flights ? flight_flat : 0
//! hotel      = hotel_budget_per_night * nights
//! cab        = include_cab ? cab_per_day * nights : 0
//! activities = Σ cost of selected activities
//! total      = flights + hotel + cab + activities
//! ```
//!
//! The hotel is not optional here; the nightly budget is clamped to at
//! least 1.

use tracing::debug;

use super::sanitize::Sanitizer;
use super::{rate, Estimate, LineItem, LineItemKind};
use crate::costs::PackageRates;
use crate::models::trip::PackageTripInputs;

/// Price a flat package quote
pub fn estimate_package(inputs: &PackageTripInputs, rates: &PackageRates) -> Estimate {
    let mut sanitizer = Sanitizer::default();
    let nights = sanitizer.count("nights", inputs.nights);
    let budget = sanitizer.count("hotel_budget_per_night", inputs.hotel_budget_per_night);

    let mut breakdown = Vec::with_capacity(3 + inputs.activities.len());

    if inputs.include_flights {
        breakdown.push(LineItem::new(
            LineItemKind::Flights,
            "Flights",
            rate(rates.flight_flat),
        ));
    }

    breakdown.push(LineItem::new(
        LineItemKind::Hotel,
        format!("Hotels ({} nights)", nights),
        budget.saturating_mul(nights),
    ));

    if inputs.include_cab {
        breakdown.push(LineItem::new(
            LineItemKind::Cab,
            format!("Cab ({} days)", nights),
            rate(rates.cab_per_day).saturating_mul(nights),
        ));
    }

    for activity in inputs.selected_activities() {
        let cost = sanitizer.amount(&format!("activities.{}", activity.id), activity.cost);
        breakdown.push(LineItem::new(
            LineItemKind::Activities,
            activity.name.clone(),
            cost,
        ));
    }

    let estimate = Estimate::from_parts(breakdown, 1, sanitizer.finish());
    debug!(
        variant = "package",
        nights,
        hotel_budget_per_night = budget,
        total = estimate.total,
        "recomputed estimate"
    );
    estimate
}
