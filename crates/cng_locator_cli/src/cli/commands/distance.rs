use anyhow::Result;

use cng_locator_core::geo::distance_km;

use crate::cli::validate;
use crate::ui::info;

pub fn run(from: &str, to: &str) -> Result<()> {
    let a = validate::parse_location(from, "FROM")?;
    let b = validate::parse_location(to, "TO")?;

    info(format!("{a} -> {b}"));
    println!("Distance: {:.2} km", distance_km(a, b));
    Ok(())
}
