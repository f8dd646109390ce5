use anyhow::{Context, Result};

use cng_locator_core::api::BackendClient;
use cng_locator_core::api::http::build_client;
use cng_locator_core::config::Config;
use cng_locator_core::session::MapSession;
use cng_locator_core::station::display::{power_text, wait_text};
use cng_locator_core::station::{StationHit, StationLabels};

use crate::cli::args::NearArgs;
use crate::cli::color::Colors;
use crate::cli::export::{self, NearExport, StationRow};
use crate::cli::validate;
use crate::ui::{Style, info, warning};

pub fn run(cfg: &Config, args: &NearArgs) -> Result<()> {
    let center = validate::parse_location(&args.at, "--at")?;
    let radius = args.radius.unwrap_or(cfg.default_radius_km);
    validate::validate_radius(radius)?;
    validate::validate_output(&args.output)?;

    let labels: StationLabels = args.labels.into();
    let backend = BackendClient::new(build_client(cfg)?, &cfg.backend_url);
    let mut session = MapSession::new(radius, labels);

    if !args.output.is_machine() {
        info(labels.searching);
    }

    let hits: Vec<StationHit> = session
        .search_at(center, &backend)
        .with_context(|| format!("Error fetching nearby stations from {}", backend.base_url()))?
        .to_vec();

    let rows = hits
        .iter()
        .map(|h| -> Result<StationRow> {
            Ok(StationRow::new(h, session.directions_to(h.station.position)?))
        })
        .collect::<Result<Vec<_>>>()?;

    if args.output.json {
        let payload = NearExport {
            generated_at: export::generated_at(),
            center,
            radius_km: radius,
            stations: rows,
        };
        return export::emit(&export::to_json(&payload)?, args.output.file.as_deref());
    }
    if args.output.csv {
        return export::emit(&export::to_csv(&rows)?, args.output.file.as_deref());
    }

    if hits.is_empty() {
        warning(labels.none_found(f64::from(radius)));
        return Ok(());
    }

    let c = Colors::new(&Style::default());

    println!();
    info(format!(
        "Found {} stations within {} km of {}:",
        hits.len(),
        radius,
        center
    ));
    println!();
    println!("Station\tType\t{}\tWait\tPower\tDistance(km)", labels.unit_plural);
    for (hit, row) in hits.iter().zip(&rows) {
        let s = &hit.station;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{:.2}",
            c.info(&s.name),
            s.kind,
            c.availability(s, labels.units(s)),
            c.wait(s.wait_time_minutes, wait_text(s)),
            power_text(s),
            hit.distance_km
        );
        println!("  {}", c.dim(&row.directions_url));
    }

    println!();
    if let Some(circle) = session.circle() {
        println!(
            "{}",
            c.dim(format!(
                "Search area: {:.0} m around {}",
                circle.radius_m, circle.center
            ))
        );
    }
    if let Some(b) = session.station_bounds() {
        println!("{}", c.dim(super::extent_text(b)));
    }

    Ok(())
}
