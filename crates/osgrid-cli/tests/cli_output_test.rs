//! Integration tests for CLI output
//!
//! These tests run the compiled binary and verify the human and JSON output
//! surfaces.

use std::path::PathBuf;
use std::process::Command;

fn osgrid_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove 'deps' directory
    path.push("osgrid");
    path
}

#[test]
fn test_to_latlon_json_output_is_valid() {
    let output = Command::new(osgrid_bin())
        .args(["to-latlon", "TG 51409 13177", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    assert_eq!(parsed.get("status").and_then(|v| v.as_str()), Some("success"));
    let data = parsed.get("data").expect("Should have data field");
    let latitude = data.get("latitude").and_then(|v| v.as_f64()).unwrap();
    assert!((latitude - 52.6576).abs() < 1e-3);
}

#[test]
fn test_to_latlon_geojson_feature() {
    let output = Command::new(osgrid_bin())
        .args(["to-latlon", "TG 51409 13177", "--geojson"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid GeoJSON");
    assert_eq!(parsed.get("type").and_then(|v| v.as_str()), Some("Feature"));
}

#[test]
fn test_to_grid_round_trips_known_reference() {
    let output = Command::new(osgrid_bin())
        .args(["to-grid", "52.657570", "1.717922", "--datum", "osgb36"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TG 51409 13177"), "unexpected output: {stdout}");
}

#[test]
fn test_invalid_reference_fails() {
    let output = Command::new(osgrid_bin())
        .args(["to-latlon", "ZZ 123 456"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_datums_table_lists_all_datums() {
    let output = Command::new(osgrid_bin())
        .args(["datums"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["WGS84", "OSGB36", "ED50", "Irl1975", "TokyoJapan"] {
        assert!(stdout.contains(name), "missing {name} in: {stdout}");
    }
}
