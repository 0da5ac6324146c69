//! Party quote
//!
//! ```text
//! flights    = include_flights ? fare(class) * travelers       : 0
//! hotel      = include_hotel   ? stars * per_star * nights      : 0
//! cab        = include_cab     ? cab_per_day * nights           : 0
//! activities = activities_budget
//! total      = (flights + hotel + cab + activities) * travelers   (when reapplied)
//! ```

use tracing::debug;

use super::sanitize::Sanitizer;
use super::{rate, Estimate, LineItem, LineItemKind};
use crate::costs::PartyRates;
use crate::models::trip::PartyTripInputs;

/// Price a party quote
///
/// # Example
/// ```
/// use trip_planner_core_rs::estimator::estimate_party;
/// use trip_planner_core_rs::{PartyRates, PartyTripInputs};
///
/// let est = estimate_party(&PartyTripInputs::default(), &PartyRates::default());
/// assert_eq!(est.subtotal, 60_200);
/// assert_eq!(est.total, 120_400);
/// ```
pub fn estimate_party(inputs: &PartyTripInputs, rates: &PartyRates) -> Estimate {
    let mut sanitizer = Sanitizer::default();
    let nights = sanitizer.count("nights", inputs.nights);
    let travelers = sanitizer.count("travelers", inputs.travelers);
    let activities = sanitizer.amount("activities_budget", inputs.activities_budget);

    let mut breakdown = Vec::with_capacity(4);

    if inputs.include_flights {
        let class = inputs.flight_class;
        breakdown.push(LineItem::new(
            LineItemKind::Flights,
            format!("Flights ({} x {})", class.as_str(), travelers),
            rate(rates.flight_rate(class)).saturating_mul(travelers),
        ));
    }

    if inputs.include_hotel {
        let stars = i64::from(inputs.hotel_stars.get());
        breakdown.push(LineItem::new(
            LineItemKind::Hotel,
            format!("Hotel ({}-star, {} nights)", stars, nights),
            rate(rates.hotel_per_star_per_night)
                .saturating_mul(stars)
                .saturating_mul(nights),
        ));
    }

    if inputs.include_cab {
        breakdown.push(LineItem::new(
            LineItemKind::Cab,
            format!("Local cabs ({} days)", nights),
            rate(rates.cab_per_day).saturating_mul(nights),
        ));
    }

    breakdown.push(LineItem::new(
        LineItemKind::Activities,
        "Activities & tours",
        activities,
    ));

    let multiplier = if rates.reapply_traveler_multiplier {
        travelers
    } else {
        1
    };

    let estimate = Estimate::from_parts(breakdown, multiplier, sanitizer.finish());
    debug!(
        variant = "party",
        nights,
        travelers,
        subtotal = estimate.subtotal,
        total = estimate.total,
        "recomputed estimate"
    );
    estimate
}
