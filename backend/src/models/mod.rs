//! Domain models for the trip planner

pub mod booking;
pub mod package;
pub mod profile;
pub mod trip;

// Re-exports
pub use booking::{
    BookingConfirmation, BookingRecord, BookingStatus, PaymentDetails, TravelerDetails,
};
pub use package::{CatalogError, TourPackage, TripDuration};
pub use profile::UserProfile;
pub use trip::{
    Activity, FlightClass, HotelStars, PackageTripInputs, PartyTripInputs, TripCostInputs,
    TripInputError,
};
