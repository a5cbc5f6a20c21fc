use serde::Serialize;
use std::env;
use std::process::ExitCode;
use transit_router::transit::{BusSystem, DsvReaderBuilder, NetworkOptions, RowSource, Stop, TransitNetwork};

/// Trip printed with `--json`
#[derive(Debug, Serialize)]
struct PlannedTrip {
    from: u64,
    to: u64,
    /// `None` when the stops are not connected
    hops: Option<f64>,
    stops: Vec<Stop>,
}

fn usage() -> ExitCode {
    eprintln!("usage: route_planner <stops.csv> <routes.csv> <from-stop> <to-stop> [--json]");
    ExitCode::from(2)
}

fn run(args: &[String], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let reader = DsvReaderBuilder::new();
    let mut stops = reader.from_path(&args[0])?;
    let mut routes = reader.from_path(&args[1])?;
    let from: u64 = args[2].parse()?;
    let to: u64 = args[3].parse()?;

    let report = BusSystem::load(
        Some(&mut stops as &mut dyn RowSource),
        Some(&mut routes as &mut dyn RowSource),
    )?;
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    let network = TransitNetwork::build(&report.system, NetworkOptions::default())?;
    let path = network.shortest_trip(from, to)?;
    let stops = network.stops_on(&path)?;

    if json {
        let trip = PlannedTrip {
            from,
            to,
            hops: path.is_found().then(|| path.cost.into_inner()),
            stops,
        };
        println!("{}", serde_json::to_string_pretty(&trip)?);
    } else if path.is_found() {
        println!("{} -> {}: {} hops", from, to, path.cost.into_inner());
        for stop in &stops {
            println!("  stop {} (node {})", stop.id, stop.node_id);
        }
    } else {
        println!("{} -> {}: no path", from, to);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    args.retain(|arg| arg != "--json");

    if args.len() != 4 {
        return usage();
    }

    match run(&args, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
