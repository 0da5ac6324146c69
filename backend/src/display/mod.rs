//! Display helpers
//!
//! Currency formatting and the animated counter used to show a changing
//! total. Nothing here feeds back into an estimate.

use std::time::Duration;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Default counter animation length
pub const DEFAULT_TWEEN: Duration = Duration::from_millis(1500);

/// Group digits the Indian way: last three, then pairs
///
/// # Example
/// ```
/// use trip_planner_core_rs::display::format_inr;
///
/// assert_eq!(format_inr(120_400), "1,20,400");
/// assert_eq!(format_inr(999), "999");
/// assert_eq!(format_inr(-12_500), "-12,500");
/// ```
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let (head, tail) = digits.split_at(digits.len().saturating_sub(3));

    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.push(tail);

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}", sign, groups.join(","))
}

/// Amount with the rupee symbol, e.g. "₹49,500"
pub fn format_currency(amount: i64) -> String {
    let grouped = format_inr(amount);
    match grouped.strip_prefix('-') {
        Some(digits) => format!("-{}{}", CURRENCY_SYMBOL, digits),
        None => format!("{}{}", CURRENCY_SYMBOL, grouped),
    }
}

/// Ease-out counter between two displayed totals
///
/// The displayed value moves from `from` to `to` over `duration` on a
/// cubic ease-out curve. It never overshoots and equals `to` exactly once
/// the duration has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTween {
    from: i64,
    to: i64,
    duration: Duration,
}

impl CounterTween {
    pub fn new(from: i64, to: i64, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// A counter already resting on `value`
    pub fn settled(value: i64) -> Self {
        Self::new(value, value, DEFAULT_TWEEN)
    }

    pub fn target(&self) -> i64 {
        self.to
    }

    /// Fraction of the animation completed, after easing
    fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        1.0 - (1.0 - t).powi(3)
    }

    /// Value to display `elapsed` after the tween started
    pub fn value_at(&self, elapsed: Duration) -> i64 {
        let p = self.progress(elapsed);
        if p >= 1.0 {
            return self.to;
        }
        let span = self.to as f64 - self.from as f64;
        (self.from as f64 + span * p).round() as i64
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Start a new tween toward `to` from whatever is on screen now
    pub fn retarget(&self, elapsed: Duration, to: i64) -> Self {
        Self::new(self.value_at(elapsed), to, self.duration)
    }
}
