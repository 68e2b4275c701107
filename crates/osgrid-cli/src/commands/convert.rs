use crate::cli::ConvertArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use osgrid_core::GeodeticPoint;
use osgrid_geo::transform;

pub fn execute(args: ConvertArgs, output: &OutputWriter) -> Result<()> {
    let point =
        GeodeticPoint::with_height(args.latitude, args.longitude, args.height, args.from);

    let converted = transform::convert(&point, args.to)
        .with_context(|| format!("could not convert from {} to {}", args.from, args.to))?;

    output.point(&converted)
}
