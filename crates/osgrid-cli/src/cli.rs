use clap::{Parser, Subcommand};
use osgrid_core::Datum;
use std::path::PathBuf;

/// osgrid - Ordnance Survey National Grid coordinate conversions
#[derive(Parser, Debug)]
#[command(name = "osgrid")]
#[command(about = "Ordnance Survey National Grid coordinate conversions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a grid reference to latitude/longitude
    ToLatlon(ToLatlonArgs),

    /// Convert latitude/longitude to a grid reference
    ToGrid(ToGridArgs),

    /// Transform a latitude/longitude point between datums
    Convert(ConvertArgs),

    /// List the supported datums and their Helmert parameters
    Datums,
}

#[derive(Parser, Debug)]
pub struct ToLatlonArgs {
    /// Grid reference, e.g. "TG 51409 13177"
    pub grid_ref: String,

    /// Datum for the output coordinates (WGS84, OSGB36, ED50, Irl1975, TokyoJapan)
    #[arg(long)]
    pub datum: Option<Datum>,

    /// Emit the result as a GeoJSON Feature
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct ToGridArgs {
    /// Latitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,

    /// Datum of the input coordinates
    #[arg(long)]
    pub datum: Option<Datum>,

    /// Total digit count for the formatted reference (even, 0-10)
    #[arg(long)]
    pub digits: Option<u8>,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Latitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,

    /// Height above the ellipsoid, metres
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub height: f64,

    /// Datum of the input coordinates
    #[arg(long)]
    pub from: Datum,

    /// Datum to convert to
    #[arg(long)]
    pub to: Datum,
}
