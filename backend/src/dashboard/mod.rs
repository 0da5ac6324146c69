//! User Dashboard
//!
//! Profile and booking history for the signed-in account, split into
//! upcoming trips and past trips.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::booking::{BookingRecord, BookingStatus};
use crate::models::profile::UserProfile;

/// Source of account data for the dashboard
pub trait BookingHistoryProvider {
    fn profile(&self) -> UserProfile;
    fn bookings(&self) -> Vec<BookingRecord>;
}

/// Dashboard content ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub profile: UserProfile,
    /// Most recent first
    pub upcoming: Vec<BookingRecord>,
    /// Completed and cancelled, most recent first
    pub past: Vec<BookingRecord>,
}

impl DashboardView {
    pub fn build<P: BookingHistoryProvider + ?Sized>(provider: &P) -> Self {
        let (mut upcoming, mut past): (Vec<_>, Vec<_>) = provider
            .bookings()
            .into_iter()
            .partition(|b| b.status == BookingStatus::Upcoming);

        upcoming.sort_by(|a, b| b.date.cmp(&a.date));
        past.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            profile: provider.profile(),
            upcoming,
            past,
        }
    }

    pub fn count(&self, status: BookingStatus) -> usize {
        self.upcoming
            .iter()
            .chain(self.past.iter())
            .filter(|b| b.status == status)
            .count()
    }
}

/// The demo account shown before real sign-in exists
#[derive(Debug, Clone)]
pub struct SampleAccount {
    profile: UserProfile,
    bookings: Vec<BookingRecord>,
}

impl SampleAccount {
    pub fn new(profile: UserProfile, bookings: Vec<BookingRecord>) -> Self {
        Self { profile, bookings }
    }
}

fn record(
    id: &str,
    details: &str,
    (y, m, d): (i32, u32, u32),
    status: BookingStatus,
) -> Option<BookingRecord> {
    Some(BookingRecord {
        id: id.to_string(),
        details: details.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        status,
    })
}

impl Default for SampleAccount {
    fn default() -> Self {
        let profile = UserProfile {
            name: "Ananya Sharma".to_string(),
            email: "ananya.sharma@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            member_since: "January 2022".to_string(),
        };
        let rows = [
            (
                "IV-837KDG",
                "Kerala Backwaters Escape (Package)",
                (2024, 9, 15),
                BookingStatus::Upcoming,
            ),
            (
                "IV-924FHE",
                "Flight to Jaipur (Round Trip)",
                (2024, 8, 20),
                BookingStatus::Upcoming,
            ),
            (
                "IV-109ADS",
                "Hotel in Goa (3 Nights)",
                (2024, 5, 10),
                BookingStatus::Completed,
            ),
            (
                "IV-583JDI",
                "Bus from Delhi to Manali",
                (2024, 1, 22),
                BookingStatus::Completed,
            ),
            (
                "IV-345OPE",
                "Train to Varanasi",
                (2023, 11, 18),
                BookingStatus::Cancelled,
            ),
        ];
        let bookings: Vec<BookingRecord> = rows
            .iter()
            .filter_map(|&(id, details, date, status)| record(id, details, date, status))
            .collect();
        debug_assert_eq!(bookings.len(), rows.len(), "sample booking with an invalid date");

        Self::new(profile, bookings)
    }
}

impl BookingHistoryProvider for SampleAccount {
    fn profile(&self) -> UserProfile {
        self.profile.clone()
    }

    fn bookings(&self) -> Vec<BookingRecord> {
        self.bookings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_account_has_five_bookings() {
        assert_eq!(SampleAccount::default().bookings().len(), 5);
    }

    #[test]
    fn test_sample_rows_keep_their_dates() {
        let dates: Vec<String> = SampleAccount::default()
            .bookings()
            .iter()
            .map(|b| b.date.to_string())
            .collect();
        assert_eq!(
            dates,
            vec!["2024-09-15", "2024-08-20", "2024-05-10", "2024-01-22", "2023-11-18"]
        );
    }

    #[test]
    fn test_record_rejects_impossible_date() {
        assert!(record("x", "y", (2024, 2, 30), BookingStatus::Upcoming).is_none());
    }
}
