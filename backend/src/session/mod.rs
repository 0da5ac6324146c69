//! Estimator Session
//!
//! One open estimator form. The session owns the current input snapshot
//! and the rate card; each edit replaces one field and the estimate is
//! recomputed from scratch before the edit call returns.
//!
//! ```text
//! edit ──▶ inputs[field] = value ──▶ estimate_with(inputs, rates) ──▶ Estimate
//! ```
//!
//! No total is ever stored, so the result after a sequence of edits
//! depends only on the last value written to each field.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::costs::RateCard;
use crate::estimator::{estimate_with, Estimate};
use crate::models::trip::{
    FlightClass, HotelStars, PackageTripInputs, PartyTripInputs, TripCostInputs,
};

/// Errors from applying an edit
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Edit '{edit}' does not apply to a {variant} estimate")]
    EditNotApplicable {
        edit: &'static str,
        variant: &'static str,
    },

    #[error("Unknown activity '{0}'")]
    UnknownActivity(String),
}

/// A single change made in the estimator form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "edit", content = "value", rename_all = "snake_case")]
pub enum TripEdit {
    SetFlights(bool),
    SetFlightClass(FlightClass),
    SetHotel(bool),
    SetHotelStars(HotelStars),
    SetHotelBudget(i64),
    SetNights(i64),
    SetTravelers(i64),
    SetCab(bool),
    SetActivitiesBudget(i64),
    ToggleActivity(String),
}

impl TripEdit {
    pub fn name(&self) -> &'static str {
        match self {
            TripEdit::SetFlights(_) => "set_flights",
            TripEdit::SetFlightClass(_) => "set_flight_class",
            TripEdit::SetHotel(_) => "set_hotel",
            TripEdit::SetHotelStars(_) => "set_hotel_stars",
            TripEdit::SetHotelBudget(_) => "set_hotel_budget",
            TripEdit::SetNights(_) => "set_nights",
            TripEdit::SetTravelers(_) => "set_travelers",
            TripEdit::SetCab(_) => "set_cab",
            TripEdit::SetActivitiesBudget(_) => "set_activities_budget",
            TripEdit::ToggleActivity(_) => "toggle_activity",
        }
    }
}

/// Live estimator form state
///
/// # Example
/// ```
/// use trip_planner_core_rs::{EstimatorSession, TripEdit};
///
/// let mut session = EstimatorSession::party();
/// assert_eq!(session.current().total, 120_400);
///
/// let est = session.apply(TripEdit::SetTravelers(1)).unwrap();
/// assert_eq!(est.total, 15_000 + 25_200 + 5_000);
/// ```
#[derive(Debug, Clone)]
pub struct EstimatorSession {
    inputs: TripCostInputs,
    rates: RateCard,
}

impl EstimatorSession {
    pub fn new(inputs: TripCostInputs, rates: RateCard) -> Self {
        Self { inputs, rates }
    }

    /// Session seeded with the quote widget defaults
    pub fn party() -> Self {
        Self::new(PartyTripInputs::default().into(), RateCard::default())
    }

    /// Session seeded with the standalone estimator page defaults
    pub fn package() -> Self {
        Self::new(PackageTripInputs::default().into(), RateCard::default())
    }

    pub fn inputs(&self) -> &TripCostInputs {
        &self.inputs
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    /// Swap in a new rate card; the next estimate uses it
    pub fn set_rates(&mut self, rates: RateCard) {
        self.rates = rates;
    }

    /// Recompute the estimate for the current inputs
    pub fn current(&self) -> Estimate {
        estimate_with(&self.inputs, &self.rates)
    }

    /// Apply one edit and return the recomputed estimate
    ///
    /// A rejected edit leaves the inputs untouched.
    pub fn apply(&mut self, edit: TripEdit) -> Result<Estimate, SessionError> {
        let variant = self.inputs.variant_name();
        let not_applicable = SessionError::EditNotApplicable {
            edit: edit.name(),
            variant,
        };

        match (&mut self.inputs, edit) {
            (TripCostInputs::Party(p), TripEdit::SetFlights(on)) => p.include_flights = on,
            (TripCostInputs::Package(p), TripEdit::SetFlights(on)) => p.include_flights = on,
            (TripCostInputs::Party(p), TripEdit::SetFlightClass(class)) => p.flight_class = class,
            (TripCostInputs::Party(p), TripEdit::SetHotel(on)) => p.include_hotel = on,
            (TripCostInputs::Party(p), TripEdit::SetHotelStars(stars)) => p.hotel_stars = stars,
            (TripCostInputs::Package(p), TripEdit::SetHotelBudget(budget)) => {
                p.hotel_budget_per_night = budget
            }
            (TripCostInputs::Party(p), TripEdit::SetNights(n)) => p.nights = n,
            (TripCostInputs::Package(p), TripEdit::SetNights(n)) => p.nights = n,
            (TripCostInputs::Party(p), TripEdit::SetTravelers(n)) => p.travelers = n,
            (TripCostInputs::Party(p), TripEdit::SetCab(on)) => p.include_cab = on,
            (TripCostInputs::Package(p), TripEdit::SetCab(on)) => p.include_cab = on,
            (TripCostInputs::Party(p), TripEdit::SetActivitiesBudget(amount)) => {
                p.activities_budget = amount
            }
            (TripCostInputs::Package(p), TripEdit::ToggleActivity(id)) => {
                let activity = p
                    .activities
                    .iter_mut()
                    .find(|a| a.id == id)
                    .ok_or(SessionError::UnknownActivity(id))?;
                activity.selected = !activity.selected;
            }
            _ => return Err(not_applicable),
        }

        let estimate = self.current();
        debug!(variant, total = estimate.total, "applied edit");
        Ok(estimate)
    }

    /// Apply edits in order, stopping at the first rejected one
    pub fn apply_all<I>(&mut self, edits: I) -> Result<Estimate, SessionError>
    where
        I: IntoIterator<Item = TripEdit>,
    {
        for edit in edits {
            self.apply(edit)?;
        }
        Ok(self.current())
    }
}
