//! Command-line arguments
//!
//! Numeric trip fields are taken as text and run through the core's
//! count/amount parsers, so `--nights 0` or `--nights abc` price the same
//! way the estimator form does.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use trip_planner_core_rs::{FlightClass, SortOrder};

#[derive(Debug, Parser)]
#[command(
    name = "trip-planner",
    version,
    about = "Trip cost estimates, package search and account overview"
)]
pub struct Cli {
    /// Rate card JSON overriding the default rates
    #[arg(long, global = true, value_name = "FILE")]
    pub rates: Option<PathBuf>,

    /// Print machine-readable JSON instead of a rendered summary
    #[arg(long, global = true)]
    pub json: bool,

    /// Log recompute details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate the cost of a trip
    Estimate {
        #[command(subcommand)]
        kind: EstimateCommand,
    },
    /// Search the package listing
    Packages(PackagesArgs),
    /// Show the account profile and booking history
    Dashboard,
    /// Print the rate card schema as JSON
    RateSchema,
}

#[derive(Debug, Subcommand)]
pub enum EstimateCommand {
    /// Per-traveler quote
    Party(PartyArgs),
    /// Flat package quote
    Package(PackageArgs),
    /// Quote a JSON-serialized input snapshot
    File {
        #[arg(value_name = "INPUTS")]
        path: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct PartyArgs {
    #[arg(long)]
    pub no_flights: bool,

    #[arg(long, default_value = "economy")]
    pub flight_class: FlightClass,

    #[arg(long)]
    pub no_hotel: bool,

    /// Hotel star tier, 2-5
    #[arg(long, default_value_t = 3)]
    pub stars: u8,

    #[arg(long)]
    pub cab: bool,

    #[arg(long, default_value = "7")]
    pub nights: String,

    #[arg(long, default_value = "2")]
    pub travelers: String,

    #[arg(long, default_value = "5000")]
    pub activities_budget: String,
}

#[derive(Debug, Args)]
pub struct PackageArgs {
    #[arg(long)]
    pub no_flights: bool,

    #[arg(long, default_value = "4000")]
    pub hotel_budget: String,

    #[arg(long, default_value = "5")]
    pub nights: String,

    #[arg(long)]
    pub no_cab: bool,

    /// Activity to include (repeatable); replaces the default selection
    #[arg(long = "activity", value_name = "ID")]
    pub activities: Vec<String>,
}

#[derive(Debug, Args)]
pub struct PackagesArgs {
    /// Destination, title or highlight to match
    #[arg(long, default_value = "Kerala")]
    pub query: String,

    /// popularity, price-asc, price-desc or duration
    #[arg(long, default_value = "popularity")]
    pub sort: SortOrder,
}
