use anyhow::{Context, Result, bail};
use cng_locator_core::geo::GeoPoint;

use crate::cli::args::OutputArgs;

pub const TIP_NEGATIVE_COORDS: &str =
    "Note: for negative coordinates, use the '=' form, e.g.:\n  near --at=\"-33.8688, 151.2093\"";

/// Parse a `"lat, lng"` argument, naming the flag in the error.
pub fn parse_location(input: &str, flag: &str) -> Result<GeoPoint> {
    GeoPoint::parse(input).with_context(|| {
        format!("{flag} expects \"lat, lng\" (got '{input}')\n\n{TIP_NEGATIVE_COORDS}")
    })
}

pub fn validate_radius(radius_km: u32) -> Result<()> {
    if radius_km == 0 {
        bail!("--radius must be > 0.");
    }
    Ok(())
}

pub fn validate_route(from: GeoPoint, to: GeoPoint) -> Result<()> {
    if from == to {
        bail!("FROM and TO must be different");
    }
    Ok(())
}

pub fn validate_output(output: &OutputArgs) -> Result<()> {
    if output.file.is_some() && !output.is_machine() {
        bail!("--file needs --json or --csv");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_errors_mention_the_flag() {
        let err = parse_location("28.6", "--at").unwrap_err();
        assert!(format!("{err:#}").contains("--at"));
        assert_eq!(
            parse_location(" 28.6139, 77.2090 ", "--at").unwrap(),
            GeoPoint::new(28.6139, 77.209)
        );
    }

    #[test]
    fn route_endpoints_must_differ() {
        let p = GeoPoint::new(1.0, 2.0);
        assert!(validate_route(p, p).is_err());
        assert!(validate_route(p, GeoPoint::new(1.0, 2.5)).is_ok());
    }

    #[test]
    fn file_requires_machine_output() {
        let out = OutputArgs {
            file: Some("out.json".into()),
            ..OutputArgs::default()
        };
        assert!(validate_output(&out).is_err());
        let out = OutputArgs {
            json: true,
            ..out
        };
        assert!(validate_output(&out).is_ok());
    }
}
