//! Plain-text rendering for terminal output

use std::fmt::Write;

use trip_planner_core_rs::display::format_currency;
use trip_planner_core_rs::{DashboardView, Estimate, TourPackage};

const RULE: &str = "----------------------------------------";

pub fn estimate(est: &Estimate) -> String {
    let mut out = String::new();
    for item in &est.breakdown {
        let _ = writeln!(out, "{:<30} {:>12}", item.label, format_currency(item.amount));
    }
    if est.multiplier != 1 {
        let _ = writeln!(out, "{:<30} {:>12}", "Subtotal", format_currency(est.subtotal));
        let _ = writeln!(out, "{:<30} {:>12}", "x travelers", est.multiplier);
    }
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{:<30} {:>12}", "Estimated Total", format_currency(est.total));

    for adj in &est.adjustments {
        let _ = writeln!(
            out,
            "note: {} {} priced as {}",
            adj.field, adj.supplied, adj.applied
        );
    }
    out
}

pub fn packages(query: &str, results: &[TourPackage]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Results for \"{}\" ({} found)", query, results.len());
    for pkg in results {
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "[{}] {}  ({})", pkg.id, pkg.title, pkg.duration);
        let _ = writeln!(out, "    Starts from {}", format_currency(pkg.price));
        let _ = writeln!(out, "    {}", pkg.top_highlights(3).join(" · "));
    }
    out
}

pub fn dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Welcome, {}", view.profile.first_name());
    let _ = writeln!(out, "{} | {}", view.profile.email, view.profile.phone);
    let _ = writeln!(out, "Member since {}", view.profile.member_since);

    for (title, rows) in [("Upcoming", &view.upcoming), ("Past", &view.past)] {
        let _ = writeln!(out, "\n{} trips", title);
        let _ = writeln!(out, "{}", RULE);
        if rows.is_empty() {
            let _ = writeln!(out, "  none");
        }
        for b in rows.iter() {
            let _ = writeln!(
                out,
                "  {}  {}  {:<10} {}",
                b.id,
                b.date,
                b.status.as_str(),
                b.details
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trip_planner_core_rs::{EstimatorSession, InMemoryCatalog, SampleAccount, TripEdit};

    #[test]
    fn test_party_estimate_shows_multiplier() {
        let text = estimate(&EstimatorSession::party().current());
        assert!(text.contains("Subtotal"));
        assert!(text.contains("₹60,200"));
        assert!(text.contains("₹1,20,400"));
    }

    #[test]
    fn test_package_estimate_has_no_multiplier_rows() {
        let text = estimate(&EstimatorSession::package().current());
        assert!(!text.contains("Subtotal"));
        assert!(text.contains("Guided City Tour"));
        assert!(text.contains("₹49,500"));
    }

    #[test]
    fn test_adjustments_noted() {
        let mut session = EstimatorSession::party();
        let est = session.apply(TripEdit::SetNights(0)).unwrap();
        assert!(estimate(&est).contains("note: nights 0 priced as 1"));
    }

    #[test]
    fn test_packages_listing() {
        let catalog = InMemoryCatalog::sample();
        let results = trip_planner_core_rs::search(&catalog, &Default::default());
        let text = packages("Kerala", &results);
        assert!(text.starts_with("Results for \"Kerala\" (6 found)"));
        assert!(text.contains("7 Days / 6 Nights"));
        assert!(text.contains("₹25,000"));
    }

    #[test]
    fn test_dashboard_sections() {
        let text = dashboard(&DashboardView::build(&SampleAccount::default()));
        assert!(text.starts_with("Welcome, Ananya"));
        assert!(text.contains("Upcoming trips"));
        assert!(text.contains("IV-345OPE  2023-11-18  Cancelled"));
    }
}
