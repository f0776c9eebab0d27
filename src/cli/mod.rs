use crate::{
    types::{Coordinates, Currency},
    PlannedTrip, PlannerConfig, ServiceConfig, TripCalculator, TripPlanner, TripRequest,
};
use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::{Arg, ArgAction, ArgMatches, Command};
use rust_decimal::Decimal;
use tracing::info;

/// CLI entry point for the tripplan tool
pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();

    if matches.get_flag("schema") {
        let schema = schemars::schema_for!(PlannedTrip);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let request = request_from_matches(&matches)?;

    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read planner config {}", path))?;
            PlannerConfig::from_json(&raw)?
        }
        None => PlannerConfig::default(),
    };

    let planner = if matches.get_flag("offline") {
        TripPlanner::new(TripCalculator::new(config))
    } else {
        let service = ServiceConfig::from_env()?;
        TripPlanner::from_config(config, &service)?
    };

    info!(
        destination = %request.destination_label,
        days = request.days_count(),
        "planning trip"
    );
    let planned = planner.plan(request).await;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&planned)?);
    } else {
        println!("{}", planned.summary());
    }

    Ok(())
}

fn command() -> Command {
    Command::new("tripplan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Allocate a trip budget and generate a day-by-day itinerary")
        .arg(
            Arg::new("destination")
                .help("Where the trip goes, e.g. \"Lisbon, Portugal\"")
                .required_unless_present("schema")
                .index(1),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("AMOUNT")
                .help("Total trip budget")
                .required_unless_present("schema"),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("YYYY-MM-DD")
                .help("First day of the trip")
                .required_unless_present("schema"),
        )
        .arg(
            Arg::new("end")
                .short('e')
                .long("end")
                .value_name("YYYY-MM-DD")
                .help("Last day of the trip")
                .required_unless_present("schema"),
        )
        .arg(
            Arg::new("currency")
                .short('c')
                .long("currency")
                .value_name("CODE")
                .help("Budget currency: USD, EUR, GBP, NGN, INR, CAD or AUD")
                .default_value("USD"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("LAT,LON")
                .help("Departure coordinates"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("LAT,LON")
                .help("Destination coordinates"),
        )
        .arg(
            Arg::new("departure")
                .short('d')
                .long("departure")
                .value_name("PLACE")
                .help("Departure location, geocoded when --from is not given"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TITLE")
                .help("Trip title"),
        )
        .arg(
            Arg::new("interests")
                .short('i')
                .long("interests")
                .value_name("LIST")
                .help("Comma-separated interests"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("JSON file overriding fare tiers and budget percentages"),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .action(ArgAction::SetTrue)
                .help("Skip geocoding and places lookups"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the plan as JSON"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .action(ArgAction::SetTrue)
                .help("Print the JSON schema of the plan output and exit"),
        )
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> anyhow::Result<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| anyhow!("--{} is required", name))
}

fn parse_date(raw: &str, name: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid {} date `{}`, expected YYYY-MM-DD", name, raw))
}

fn request_from_matches(matches: &ArgMatches) -> anyhow::Result<TripRequest> {
    let destination = required(matches, "destination")?;
    let budget_raw = required(matches, "budget")?;
    let total_budget: Decimal = budget_raw
        .trim()
        .parse()
        .with_context(|| format!("invalid budget amount `{}`", budget_raw))?;
    let start_date = parse_date(required(matches, "start")?, "start")?;
    let end_date = parse_date(required(matches, "end")?, "end")?;

    let currency: Currency = required(matches, "currency")?.parse()?;
    let departure_coordinates = matches
        .get_one::<String>("from")
        .map(|raw| raw.parse::<Coordinates>())
        .transpose()?;
    let destination_coordinates = matches
        .get_one::<String>("to")
        .map(|raw| raw.parse::<Coordinates>())
        .transpose()?;

    let mut builder = TripRequest::builder(destination.as_str(), start_date, end_date, total_budget)
        .currency(currency)
        .departure_coordinates(departure_coordinates)
        .destination_coordinates(destination_coordinates);

    if let Some(departure) = matches.get_one::<String>("departure") {
        builder = builder.departure_label(departure.as_str());
    }
    if let Some(title) = matches.get_one::<String>("title") {
        builder = builder.title(title.as_str());
    }
    if let Some(interests) = matches.get_one::<String>("interests") {
        builder = builder.interests(interests);
    }

    Ok(builder.build()?)
}
