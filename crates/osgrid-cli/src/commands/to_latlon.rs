use crate::cli::ToLatlonArgs;
use crate::config::LayeredConfig;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use osgrid_geo::models::GeodeticPointExt;
use osgrid_geo::transform;

pub fn execute(args: ToLatlonArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let point = osgrid_geo::grid_ref_to_latlon(&args.grid_ref)
        .with_context(|| format!("could not convert '{}'", args.grid_ref))?;

    let datum = args.datum.unwrap_or(config.datum.value);
    let point = if point.datum == datum {
        point
    } else {
        transform::convert(&point, datum)?
    };

    tracing::debug!(
        grid_ref = %args.grid_ref,
        latitude = point.latitude,
        longitude = point.longitude,
        datum = %point.datum,
        "converted grid reference"
    );

    if args.geojson {
        output.result(point.to_feature())
    } else {
        output.point(&point)
    }
}
