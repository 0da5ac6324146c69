//! Trip Planner Core - Rust Engine
//!
//! Trip cost estimation and the data behind the booking site.
//!
//! # Architecture
//!
//! - **models**: Domain types (trip options, packages, bookings, profile)
//! - **costs**: Rate card and its self-documenting schema
//! - **estimator**: Pure cost estimation (party and package quotes)
//! - **session**: Live estimator form (edit → recompute)
//! - **catalog**: Package provider and search
//! - **booking**: Two-step booking flow and form rules
//! - **dashboard**: Account profile and booking history
//! - **display**: Currency formatting and the animated counter
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole rupees)
//! 2. An estimate is a pure function of inputs and rate card
//! 3. Invalid form values are clamped, never fatal

// Module declarations
pub mod booking;
pub mod catalog;
pub mod costs;
pub mod dashboard;
pub mod display;
pub mod estimator;
pub mod models;
pub mod session;

// Re-exports for convenience
pub use booking::{BookingError, BookingFlow, BookingStep, FieldError};
pub use catalog::{search, InMemoryCatalog, PackageProvider, PackageQuery, SortOrder};
pub use costs::{get_rate_schema, PackageRates, PartyRates, RateCard, RateCardError};
pub use dashboard::{BookingHistoryProvider, DashboardView, SampleAccount};
pub use estimator::{
    estimate, estimate_package, estimate_party, estimate_with, Estimate, InputAdjustment,
    LineItem, LineItemKind,
};
pub use models::{
    booking::{BookingConfirmation, BookingRecord, BookingStatus, PaymentDetails, TravelerDetails},
    package::{CatalogError, TourPackage, TripDuration},
    profile::UserProfile,
    trip::{
        Activity, FlightClass, HotelStars, PackageTripInputs, PartyTripInputs, TripCostInputs,
        TripInputError,
    },
};
pub use session::{EstimatorSession, SessionError, TripEdit};
