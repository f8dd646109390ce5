use anyhow::{Context, Result, anyhow};

use cng_locator_core::api::http::build_client;
use cng_locator_core::api::{BackendClient, OsrmClient};
use cng_locator_core::config::Config;
use cng_locator_core::plan::PlannedRoute;
use cng_locator_core::session::{CancelToken, MapSession, RouteQuery};
use cng_locator_core::vehicle::{self, FuelLevel};

use crate::cli::args::RouteArgs;
use crate::cli::color::Colors;
use crate::cli::export::{self, RouteExport};
use crate::cli::validate;
use crate::ui::{Style, info, success};

pub fn run(cfg: &Config, args: &RouteArgs) -> Result<()> {
    let from = validate::parse_location(&args.from, "--from")?;
    let to = validate::parse_location(&args.to, "--to")?;
    validate::validate_route(from, to)?;
    validate::validate_output(&args.output)?;

    let model = args
        .model
        .clone()
        .or_else(|| cfg.default_vehicle.clone())
        .ok_or_else(|| {
            anyhow!("No vehicle model given: use --model or set default_vehicle (see `models`)")
        })?;
    let vehicle = vehicle::lookup(&model)?;
    let current_fuel: FuelLevel = args.fuel.parse()?;

    let http = build_client(cfg)?;
    let engine = OsrmClient::new(http.clone(), &cfg.router_url);
    let backend = BackendClient::new(http, &cfg.backend_url);

    if !args.output.is_machine() {
        info(format!("Planning route for {} ({current_fuel} fuel)...", vehicle.name));
    }

    let mut session = MapSession::new(cfg.default_radius_km, Default::default());
    let query = RouteQuery {
        from,
        to,
        vehicle,
        current_fuel,
    };
    let planned = session
        .plan_route(query, &engine, &backend, &CancelToken::new())
        .context("Failed to plan route")?;

    if args.output.json {
        let payload = RouteExport::new(planned);
        return export::emit(&export::to_json(&payload)?, args.output.file.as_deref());
    }
    if args.output.csv {
        let payload = RouteExport::new(planned);
        return export::emit(&export::to_csv(&payload.stops)?, args.output.file.as_deref());
    }

    print_summary(planned);
    Ok(())
}

fn print_summary(planned: &PlannedRoute) {
    let c = Colors::new(&Style::default());
    let route = &planned.route;

    println!();
    println!(
        "Route: {} -> {}",
        c.from_point(route.start().to_string()),
        c.to_point(route.end().to_string())
    );
    println!("Vehicle: {}", planned.vehicle.name);
    println!(
        "Fuel: {}",
        c.fuel(f64::from(planned.current_fuel.percent()), planned.current_fuel.to_string())
    );
    println!("Distance: {:.1} km", route.total_distance_km);
    println!("Duration: {} mins", route.duration_minutes);
    println!("{}", c.dim(super::extent_text(route.bounds())));
    println!();

    if planned.stops.is_empty() {
        success("No CNG filling stops needed");
        return;
    }

    info(format!("{} filling stops:", planned.stops.len()));
    for (i, stop) in planned.stops.iter().enumerate() {
        println!("Stop {}: {}", i + 1, c.stop(&stop.name));
        let at = stop
            .distance_from_start_km
            .map(|km| format!(" at {km:.1} km"))
            .unwrap_or_default();
        println!(
            "  arrive {}, fill {:.1} mins, leave {}{}",
            c.fuel(stop.arrival_fuel_pct, format!("{:.0}%", stop.arrival_fuel_pct)),
            stop.fill_time_minutes,
            c.fuel(stop.departure_fuel_pct, format!("{:.0}%", stop.departure_fuel_pct)),
            c.dim(at)
        );
    }
}
