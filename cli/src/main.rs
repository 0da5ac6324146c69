//! trip-planner: terminal front end for the trip planner core
//!
//! Every estimate goes through an `EstimatorSession`: the flags are applied
//! as form edits, then the session's current estimate is printed.

mod args;
mod render;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::{Cli, Command, EstimateCommand, PackageArgs, PackagesArgs, PartyArgs};
use trip_planner_core_rs::estimator::{parse_amount, parse_count};
use trip_planner_core_rs::{
    estimate_with, get_rate_schema, search, DashboardView, Estimate, EstimatorSession, HotelStars,
    InMemoryCatalog, PackageQuery, PackageTripInputs, PartyTripInputs, RateCard, SampleAccount,
    TripCostInputs, TripEdit,
};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_rates(path: Option<&Path>) -> Result<RateCard> {
    let Some(path) = path else {
        return Ok(RateCard::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rate card {}", path.display()))?;
    let rates: RateCard = serde_json::from_str(&text)
        .with_context(|| format!("Invalid rate card JSON in {}", path.display()))?;
    rates.validate()?;
    info!(path = %path.display(), "loaded rate card");
    Ok(rates)
}

fn party_estimate(args: &PartyArgs, rates: RateCard) -> Result<Estimate> {
    let stars = HotelStars::new(args.stars)?;
    let mut session = EstimatorSession::new(PartyTripInputs::default().into(), rates);
    let estimate = session.apply_all([
        TripEdit::SetFlights(!args.no_flights),
        TripEdit::SetFlightClass(args.flight_class),
        TripEdit::SetHotel(!args.no_hotel),
        TripEdit::SetHotelStars(stars),
        TripEdit::SetCab(args.cab),
        TripEdit::SetNights(parse_count(&args.nights)),
        TripEdit::SetTravelers(parse_count(&args.travelers)),
        TripEdit::SetActivitiesBudget(parse_amount(&args.activities_budget)),
    ])?;
    Ok(estimate)
}

fn package_estimate(args: &PackageArgs, rates: RateCard) -> Result<Estimate> {
    let mut inputs = PackageTripInputs::default();
    if !args.activities.is_empty() {
        for activity in &mut inputs.activities {
            activity.selected = false;
        }
    }

    let mut session = EstimatorSession::new(inputs.into(), rates);
    let mut edits = vec![
        TripEdit::SetFlights(!args.no_flights),
        TripEdit::SetHotelBudget(parse_count(&args.hotel_budget)),
        TripEdit::SetNights(parse_count(&args.nights)),
        TripEdit::SetCab(!args.no_cab),
    ];
    edits.extend(args.activities.iter().cloned().map(TripEdit::ToggleActivity));
    Ok(session.apply_all(edits)?)
}

fn file_estimate(path: &Path, rates: &RateCard) -> Result<Estimate> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read trip inputs {}", path.display()))?;
    let inputs: TripCostInputs = serde_json::from_str(&text)
        .with_context(|| format!("Invalid trip inputs JSON in {}", path.display()))?;
    debug!(variant = inputs.variant_name(), "loaded trip inputs");
    Ok(estimate_with(&inputs, rates))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_packages(args: &PackagesArgs, json: bool) -> Result<()> {
    let catalog = InMemoryCatalog::sample();
    let query = PackageQuery::new(args.query.clone()).sorted_by(args.sort);
    let results = search(&catalog, &query);
    if json {
        print_json(&results)
    } else {
        print!("{}", render::packages(&query.destination, &results));
        Ok(())
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Estimate { kind } => {
            let rates = load_rates(cli.rates.as_deref())?;
            let estimate = match &kind {
                EstimateCommand::Party(args) => party_estimate(args, rates)?,
                EstimateCommand::Package(args) => package_estimate(args, rates)?,
                EstimateCommand::File { path } => file_estimate(path, &rates)?,
            };
            if cli.json {
                print_json(&estimate)
            } else {
                print!("{}", render::estimate(&estimate));
                Ok(())
            }
        }
        Command::Packages(args) => run_packages(&args, cli.json),
        Command::Dashboard => {
            let view = DashboardView::build(&SampleAccount::default());
            if cli.json {
                print_json(&view)
            } else {
                print!("{}", render::dashboard(&view));
                Ok(())
            }
        }
        Command::RateSchema => {
            println!("{}", get_rate_schema()?);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
