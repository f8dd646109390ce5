use anyhow::Result;

use cng_locator_core::vehicle::CATALOG;

use crate::cli::args::OutputArgs;
use crate::cli::export::{self, ModelRow};
use crate::cli::validate;
use crate::ui::info;

pub fn run(output: &OutputArgs) -> Result<()> {
    validate::validate_output(output)?;
    let rows: Vec<ModelRow> = CATALOG.iter().map(ModelRow::from).collect();

    if output.json {
        return export::emit(&export::to_json(&rows)?, output.file.as_deref());
    }
    if output.csv {
        return export::emit(&export::to_csv(&rows)?, output.file.as_deref());
    }

    info("Available vehicle models:");
    println!();
    println!("Key\tName\tTank\tRange(km)\tFill rate\tConsumption/km");
    for r in &rows {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            r.key, r.name, r.tank_capacity, r.range_km, r.fill_rate, r.consumption_per_km
        );
    }
    Ok(())
}
