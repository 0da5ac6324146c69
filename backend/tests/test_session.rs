//! Tests for the live estimator session
//!
//! Each edit recomputes from the current inputs; edit order never matters,
//! only the last value written to each field.

use proptest::prelude::*;
use trip_planner_core_rs::{
    estimate_with, EstimatorSession, FlightClass, HotelStars, LineItemKind, PartyTripInputs,
    RateCard, SessionError, TripCostInputs, TripEdit,
};

#[test]
fn test_party_session_starts_at_widget_total() {
    let session = EstimatorSession::party();
    assert_eq!(session.current().total, 120_400);
}

#[test]
fn test_package_session_starts_at_page_total() {
    let session = EstimatorSession::package();
    assert_eq!(session.current().total, 49_500);
}

#[test]
fn test_each_edit_returns_fresh_total() {
    let mut session = EstimatorSession::party();

    let est = session.apply(TripEdit::SetCab(true)).unwrap();
    assert_eq!(est.total, (60_200 + 5_600) * 2);

    let est = session.apply(TripEdit::SetFlightClass(FlightClass::Business)).unwrap();
    assert_eq!(est.component(LineItemKind::Flights), 80_000);

    let est = session.apply(TripEdit::SetHotel(false)).unwrap();
    assert_eq!(est.component(LineItemKind::Hotel), 0);
}

#[test]
fn test_toggle_back_restores_total() {
    let mut session = EstimatorSession::party();
    let before = session.current();

    session.apply(TripEdit::SetFlights(false)).unwrap();
    let after = session.apply(TripEdit::SetFlights(true)).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_toggle_activity_twice_is_noop() {
    let mut session = EstimatorSession::package();

    let est = session.apply(TripEdit::ToggleActivity("trekking".into())).unwrap();
    assert_eq!(est.total, 49_500 + 5_500);

    let est = session.apply(TripEdit::ToggleActivity("trekking".into())).unwrap();
    assert_eq!(est.total, 49_500);
}

#[test]
fn test_deselect_default_activity() {
    let mut session = EstimatorSession::package();
    let est = session.apply(TripEdit::ToggleActivity("city-tour".into())).unwrap();
    assert_eq!(est.component(LineItemKind::Activities), 0);
    assert_eq!(est.total, 46_500);
}

#[test]
fn test_package_edits_rejected_on_party_session() {
    let mut session = EstimatorSession::party();
    assert!(matches!(
        session.apply(TripEdit::SetHotelBudget(9000)),
        Err(SessionError::EditNotApplicable { variant: "party", .. })
    ));
    assert!(matches!(
        session.apply(TripEdit::ToggleActivity("city-tour".into())),
        Err(SessionError::EditNotApplicable { .. })
    ));
    assert_eq!(session.current().total, 120_400);
}

#[test]
fn test_apply_all_stops_at_first_error() {
    let mut session = EstimatorSession::package();
    let result = session.apply_all(vec![
        TripEdit::SetNights(2),
        TripEdit::SetTravelers(3),
        TripEdit::SetNights(9),
    ]);
    assert!(result.is_err());

    // First edit landed, the one after the failure did not
    match session.inputs() {
        TripCostInputs::Package(p) => assert_eq!(p.nights, 2),
        other => panic!("unexpected variant {:?}", other),
    }
}

#[test]
fn test_zero_nights_edit_clamped() {
    let mut session = EstimatorSession::party();
    let est = session.apply(TripEdit::SetNights(0)).unwrap();
    assert!(est.was_adjusted());
    assert_eq!(est.component(LineItemKind::Hotel), 3 * 1200);
}

fn party_edit() -> impl Strategy<Value = TripEdit> {
    prop_oneof![
        any::<bool>().prop_map(TripEdit::SetFlights),
        prop_oneof![
            Just(FlightClass::Economy),
            Just(FlightClass::Business),
            Just(FlightClass::First)
        ]
        .prop_map(TripEdit::SetFlightClass),
        any::<bool>().prop_map(TripEdit::SetHotel),
        (2u8..=5).prop_map(|s| TripEdit::SetHotelStars(HotelStars::new(s).unwrap())),
        (-3i64..30).prop_map(TripEdit::SetNights),
        (-3i64..10).prop_map(TripEdit::SetTravelers),
        any::<bool>().prop_map(TripEdit::SetCab),
        (0i64..=50_000).prop_map(TripEdit::SetActivitiesBudget),
    ]
}

/// Apply edits directly to a snapshot, the way a form would store them
fn fold_edits(edits: &[TripEdit]) -> PartyTripInputs {
    let mut inputs = PartyTripInputs::default();
    for edit in edits {
        match edit.clone() {
            TripEdit::SetFlights(v) => inputs.include_flights = v,
            TripEdit::SetFlightClass(v) => inputs.flight_class = v,
            TripEdit::SetHotel(v) => inputs.include_hotel = v,
            TripEdit::SetHotelStars(v) => inputs.hotel_stars = v,
            TripEdit::SetNights(v) => inputs.nights = v,
            TripEdit::SetTravelers(v) => inputs.travelers = v,
            TripEdit::SetCab(v) => inputs.include_cab = v,
            TripEdit::SetActivitiesBudget(v) => inputs.activities_budget = v,
            _ => {}
        }
    }
    inputs
}

proptest! {
    #[test]
    fn session_matches_fresh_estimate(edits in prop::collection::vec(party_edit(), 0..20)) {
        let mut session = EstimatorSession::party();
        let est = session.apply_all(edits.clone()).unwrap();

        let folded = TripCostInputs::Party(fold_edits(&edits));
        let expected = estimate_with(&folded, &RateCard::default());
        prop_assert_eq!(est, expected);
    }

    #[test]
    fn edit_order_does_not_matter(
        nights in -3i64..30,
        travelers in -3i64..10,
        budget in 0i64..=50_000,
        cab in any::<bool>(),
    ) {
        let edits = vec![
            TripEdit::SetNights(nights),
            TripEdit::SetTravelers(travelers),
            TripEdit::SetActivitiesBudget(budget),
            TripEdit::SetCab(cab),
        ];
        let mut reversed = edits.clone();
        reversed.reverse();

        let mut a = EstimatorSession::party();
        let mut b = EstimatorSession::party();
        prop_assert_eq!(a.apply_all(edits).unwrap(), b.apply_all(reversed).unwrap());
    }
}
