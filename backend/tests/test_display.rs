//! Tests for currency formatting and the animated counter

use std::time::Duration;

use trip_planner_core_rs::display::{format_currency, format_inr, CounterTween};

#[test]
fn test_estimator_totals_format() {
    assert_eq!(format_inr(120_400), "1,20,400");
    assert_eq!(format_currency(49_500), "₹49,500");
    assert_eq!(format_currency(0), "₹0");
}

#[test]
fn test_negative_currency_extremes() {
    assert_eq!(format_currency(-12_500), "-₹12,500");
    assert_eq!(format_currency(i64::MIN), "-₹92,23,37,20,36,85,47,75,808");
    assert_eq!(format_currency(i64::MAX), "₹92,23,37,20,36,85,47,75,807");
}

#[test]
fn test_tween_endpoints() {
    let tween = CounterTween::new(0, 49_500, Duration::from_millis(1500));
    assert_eq!(tween.value_at(Duration::ZERO), 0);
    assert_eq!(tween.value_at(Duration::from_millis(1500)), 49_500);
    assert_eq!(tween.value_at(Duration::from_secs(10)), 49_500);
    assert!(tween.is_finished(Duration::from_millis(1500)));
    assert!(!tween.is_finished(Duration::from_millis(1499)));
}

#[test]
fn test_tween_monotonic_upward() {
    let tween = CounterTween::new(1_000, 120_400, Duration::from_millis(1500));
    let mut last = i64::MIN;
    for ms in (0..=1500).step_by(25) {
        let v = tween.value_at(Duration::from_millis(ms));
        assert!(v >= last, "counter went backwards at {}ms", ms);
        assert!((1_000..=120_400).contains(&v));
        last = v;
    }
}

#[test]
fn test_tween_monotonic_downward() {
    let tween = CounterTween::new(120_400, 60_200, Duration::from_millis(800));
    let mut last = i64::MAX;
    for ms in (0..=800).step_by(10) {
        let v = tween.value_at(Duration::from_millis(ms));
        assert!(v <= last);
        assert!((60_200..=120_400).contains(&v));
        last = v;
    }
}

#[test]
fn test_ease_out_front_loads_motion() {
    let tween = CounterTween::new(0, 1_000, Duration::from_secs(1));
    // Cubic ease-out is 87.5% done at the halfway mark
    assert_eq!(tween.value_at(Duration::from_millis(500)), 875);
}

#[test]
fn test_retarget_starts_from_displayed_value() {
    let tween = CounterTween::new(0, 1_000, Duration::from_secs(1));
    let next = tween.retarget(Duration::from_millis(500), 2_000);
    assert_eq!(next.value_at(Duration::ZERO), 875);
    assert_eq!(next.target(), 2_000);
    assert_eq!(next.value_at(Duration::from_secs(1)), 2_000);
}
