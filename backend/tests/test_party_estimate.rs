//! Tests for the party quote
//!
//! Covers the widget scenario, include toggles, and clamping of counts.

use trip_planner_core_rs::{
    estimate, estimate_party, FlightClass, HotelStars, LineItemKind, PartyRates, PartyTripInputs,
    TripCostInputs,
};

/// The quote widget's opening state
fn widget_inputs() -> PartyTripInputs {
    PartyTripInputs {
        include_flights: true,
        flight_class: FlightClass::Economy,
        include_hotel: true,
        hotel_stars: HotelStars::new(3).unwrap(),
        nights: 7,
        travelers: 2,
        include_cab: false,
        activities_budget: 5000,
    }
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_widget_scenario_reapplies_travelers() {
    let est = estimate_party(&widget_inputs(), &PartyRates::default());

    assert_eq!(est.component(LineItemKind::Flights), 30_000);
    assert_eq!(est.component(LineItemKind::Hotel), 25_200);
    assert_eq!(est.component(LineItemKind::Cab), 0);
    assert_eq!(est.component(LineItemKind::Activities), 5_000);
    assert_eq!(est.subtotal, 60_200);
    assert_eq!(est.multiplier, 2);
    assert_eq!(est.total, 120_400);
    assert!(!est.was_adjusted());
}

#[test]
fn test_estimate_function_returns_total() {
    let inputs = TripCostInputs::Party(widget_inputs());
    assert_eq!(estimate(&inputs), 120_400);
}

#[test]
fn test_same_inputs_same_total() {
    let rates = PartyRates::default();
    let a = estimate_party(&widget_inputs(), &rates);
    let b = estimate_party(&widget_inputs(), &rates);
    assert_eq!(a, b);
}

// ============================================================================
// Include toggles
// ============================================================================

#[test]
fn test_flights_off_removes_only_flights() {
    let rates = PartyRates::default();
    let on = estimate_party(&widget_inputs(), &rates);
    let off = estimate_party(
        &PartyTripInputs {
            include_flights: false,
            ..widget_inputs()
        },
        &rates,
    );

    assert_eq!(off.component(LineItemKind::Flights), 0);
    assert_eq!(off.subtotal, on.subtotal - on.component(LineItemKind::Flights));
    assert_eq!(off.component(LineItemKind::Hotel), on.component(LineItemKind::Hotel));
    assert_eq!(
        off.component(LineItemKind::Activities),
        on.component(LineItemKind::Activities)
    );
}

#[test]
fn test_hotel_off_removes_only_hotel() {
    let rates = PartyRates::default();
    let on = estimate_party(&widget_inputs(), &rates);
    let off = estimate_party(
        &PartyTripInputs {
            include_hotel: false,
            ..widget_inputs()
        },
        &rates,
    );

    assert_eq!(off.component(LineItemKind::Hotel), 0);
    assert_eq!(off.subtotal, on.subtotal - 25_200);
}

#[test]
fn test_cab_on_adds_per_day_rate() {
    let est = estimate_party(
        &PartyTripInputs {
            include_cab: true,
            ..widget_inputs()
        },
        &PartyRates::default(),
    );

    assert_eq!(est.component(LineItemKind::Cab), 800 * 7);
    assert_eq!(est.total, (60_200 + 5_600) * 2);
}

#[test]
fn test_flight_class_ignored_when_flights_off() {
    let rates = PartyRates::default();
    let economy = PartyTripInputs {
        include_flights: false,
        ..widget_inputs()
    };
    let first = PartyTripInputs {
        flight_class: FlightClass::First,
        ..economy.clone()
    };
    assert_eq!(estimate_party(&economy, &rates).total, estimate_party(&first, &rates).total);
}

#[test]
fn test_only_hotel_left() {
    let inputs = PartyTripInputs {
        include_flights: false,
        include_cab: false,
        activities_budget: 0,
        travelers: 1,
        ..widget_inputs()
    };
    let est = estimate_party(&inputs, &PartyRates::default());
    assert_eq!(est.total, 3 * 1200 * 7);
}

#[test]
fn test_nothing_included_is_zero() {
    let inputs = PartyTripInputs {
        include_flights: false,
        include_hotel: false,
        include_cab: false,
        activities_budget: 0,
        ..widget_inputs()
    };
    assert_eq!(estimate_party(&inputs, &PartyRates::default()).total, 0);
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_zero_nights_priced_as_one() {
    let rates = PartyRates::default();
    let zero = estimate_party(
        &PartyTripInputs {
            nights: 0,
            ..widget_inputs()
        },
        &rates,
    );
    let one = estimate_party(
        &PartyTripInputs {
            nights: 1,
            ..widget_inputs()
        },
        &rates,
    );

    assert_eq!(zero.total, one.total);
    assert_eq!(zero.adjustments.len(), 1);
    assert_eq!(zero.adjustments[0].field, "nights");
    assert_eq!(zero.adjustments[0].supplied, 0);
    assert_eq!(zero.adjustments[0].applied, 1);
}

#[test]
fn test_negative_travelers_priced_as_one() {
    let rates = PartyRates::default();
    let negative = estimate_party(
        &PartyTripInputs {
            travelers: -4,
            ..widget_inputs()
        },
        &rates,
    );
    let one = estimate_party(
        &PartyTripInputs {
            travelers: 1,
            ..widget_inputs()
        },
        &rates,
    );

    assert_eq!(negative.total, one.total);
    assert_eq!(negative.multiplier, 1);
}

#[test]
fn test_negative_activities_budget_priced_as_zero() {
    let est = estimate_party(
        &PartyTripInputs {
            activities_budget: -10_000,
            ..widget_inputs()
        },
        &PartyRates::default(),
    );
    assert_eq!(est.component(LineItemKind::Activities), 0);
    assert!(est.total >= 0);
}

#[test]
fn test_huge_inputs_saturate() {
    let est = estimate_party(
        &PartyTripInputs {
            nights: i64::MAX,
            travelers: i64::MAX,
            ..widget_inputs()
        },
        &PartyRates::default(),
    );
    assert_eq!(est.total, i64::MAX);
}

// ============================================================================
// Rate card
// ============================================================================

#[test]
fn test_multiplier_disabled() {
    let rates = PartyRates {
        reapply_traveler_multiplier: false,
        ..PartyRates::default()
    };
    let est = estimate_party(&widget_inputs(), &rates);
    assert_eq!(est.total, 60_200);
}

#[test]
fn test_custom_hotel_rate() {
    let rates = PartyRates {
        hotel_per_star_per_night: 2_000,
        ..PartyRates::default()
    };
    let est = estimate_party(&widget_inputs(), &rates);
    assert_eq!(est.component(LineItemKind::Hotel), 3 * 2_000 * 7);
}
