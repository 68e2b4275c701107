use crate::cli::ToGridArgs;
use crate::config::LayeredConfig;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use osgrid_core::GeodeticPoint;

pub fn execute(args: ToGridArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let datum = args.datum.unwrap_or(config.datum.value);
    let digits = args.digits.unwrap_or(config.digits.value);

    let point = GeodeticPoint::new(args.latitude, args.longitude, datum);
    let grid_ref = osgrid_geo::latlon_to_grid_ref(&point, digits).with_context(|| {
        format!("could not convert ({}, {}) on {datum}", args.latitude, args.longitude)
    })?;

    tracing::debug!(
        latitude = args.latitude,
        longitude = args.longitude,
        datum = %datum,
        grid_ref = %grid_ref,
        "projected point onto the National Grid"
    );

    output.kv("Grid reference", grid_ref);
    Ok(())
}
