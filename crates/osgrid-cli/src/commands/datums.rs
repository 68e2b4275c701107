use crate::output::OutputWriter;
use anyhow::Result;
use osgrid_core::Datum;
use serde::Serialize;
use tabled::Tabled;

#[derive(Tabled, Serialize)]
struct DatumRow {
    #[tabled(rename = "Datum")]
    datum: &'static str,
    #[tabled(rename = "Ellipsoid")]
    ellipsoid: &'static str,
    #[tabled(rename = "a (m)")]
    a: f64,
    #[tabled(rename = "b (m)")]
    b: f64,
    #[tabled(rename = "tx (m)")]
    tx: f64,
    #[tabled(rename = "ty (m)")]
    ty: f64,
    #[tabled(rename = "tz (m)")]
    tz: f64,
    #[tabled(rename = "rx (\")")]
    rx: f64,
    #[tabled(rename = "ry (\")")]
    ry: f64,
    #[tabled(rename = "rz (\")")]
    rz: f64,
    #[tabled(rename = "s (ppm)")]
    s: f64,
}

fn ellipsoid_name(datum: Datum) -> &'static str {
    match datum {
        Datum::Wgs84 => "WGS84",
        Datum::Osgb36 => "Airy 1830",
        Datum::Ed50 => "International 1924",
        Datum::Irl1975 => "Airy Modified",
        Datum::TokyoJapan => "Bessel 1841",
    }
}

pub fn execute(output: &OutputWriter) -> Result<()> {
    let rows: Vec<DatumRow> = Datum::ALL
        .iter()
        .map(|&datum| {
            let ellipsoid = datum.ellipsoid();
            let transform = datum.transform();
            DatumRow {
                datum: datum.name(),
                ellipsoid: ellipsoid_name(datum),
                a: ellipsoid.a,
                b: ellipsoid.b,
                tx: transform.tx,
                ty: transform.ty,
                tz: transform.tz,
                rx: transform.rx,
                ry: transform.ry,
                rz: transform.rz,
                s: transform.s,
            }
        })
        .collect();

    output.table(rows)
}
