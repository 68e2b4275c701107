//! Alphanumeric grid-reference codec.
//!
//! A standard Ordnance Survey reference such as `"TG 51409 13177"` names a
//! 100 km square by a two-letter pair (the 25-letter scheme omits `I`) and a
//! position inside it by an even number of digits, half easting and half
//! northing. Parsing yields metre coordinates from the false origin; lower
//! precision references are centred on the square they cover.

use osgrid_core::{GridRef, OsgridError, Result};

/// Valid 100 km-square column indexes cover `SV` eastwards to the `e = 6`
/// column; rows run 0..=12 northwards.
const E100K_MAX: i64 = 6;
const N100K_MAX: i64 = 12;

/// Trailing digits appended to each half of the numeric body to bring it to
/// 5 digits (1 m), centring the reference on its covered square.
fn centre_padding(body_len: usize) -> Option<&'static str> {
    match body_len {
        0 => Some("50000"),
        2 => Some("5000"),
        4 => Some("500"),
        6 => Some("50"),
        8 => Some("5"),
        10 => Some(""),
        _ => None,
    }
}

/// Parses a standard grid reference (e.g. `"SU387148"`) into numeric
/// easting/northing metres. Whitespace is ignored and letters are
/// case-insensitive.
pub fn parse(text: &str) -> Result<GridRef> {
    let trimmed = text.trim();

    let mut chars = trimmed.chars();
    let (c1, c2) = match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => (a, b),
        _ => {
            return Err(OsgridError::Parse {
                reason: format!("'{trimmed}' does not start with two grid letters"),
            })
        }
    };

    let mut l1 = i64::from(c1.to_ascii_uppercase() as u8 - b'A');
    let mut l2 = i64::from(c2.to_ascii_uppercase() as u8 - b'A');
    // 'I' is not used in the grid; letter codes above it shuffle down
    if l1 > 7 {
        l1 -= 1;
    }
    if l2 > 7 {
        l2 -= 1;
    }

    // 100km-square indexes from the false origin (grid square SV)
    let e100k = (l1 - 2).rem_euclid(5) * 5 + l2.rem_euclid(5);
    let n100k = (19 - l1 / 5 * 5) - l2 / 5;
    if !(0..=E100K_MAX).contains(&e100k) || !(0..=N100K_MAX).contains(&n100k) {
        return Err(OsgridError::Parse {
            reason: format!("letter pair '{c1}{c2}' is outside the National Grid"),
        });
    }

    // the two leading letters are ASCII, so byte offset 2 is a char boundary
    let body: String = trimmed[2..].chars().filter(|c| *c != ' ').collect();
    if !body.chars().all(|c| c.is_ascii_digit()) {
        return Err(OsgridError::Parse {
            reason: format!("numeric body of '{trimmed}' contains non-digit characters"),
        });
    }
    let padding = centre_padding(body.len()).ok_or_else(|| OsgridError::Parse {
        reason: format!(
            "numeric body must have an even length of at most 10 digits, got {}",
            body.len()
        ),
    })?;

    let half = body.len() / 2;
    let easting = square_metres(e100k, &body[..half], padding)?;
    let northing = square_metres(n100k, &body[half..], padding)?;

    Ok(GridRef::new(easting as f64, northing as f64))
}

fn square_metres(index100k: i64, digits: &str, padding: &str) -> Result<i64> {
    let padded = format!("{digits}{padding}");
    let within: i64 = padded.parse().map_err(|_| OsgridError::Parse {
        reason: format!("'{padded}' is not a valid coordinate"),
    })?;
    Ok(index100k * 100_000 + within)
}

/// Formats a numeric grid reference in standard form at the requested total
/// digit count (even, 0-10; 10 digits resolves to 1 m).
pub fn format(grid: &GridRef, digits: u8) -> Result<String> {
    if digits % 2 != 0 || digits > 10 {
        return Err(OsgridError::Range {
            reason: format!("precision must be an even digit count from 0 to 10, got {digits}"),
        });
    }
    if !grid.easting.is_finite() || !grid.northing.is_finite() {
        return Err(OsgridError::Range {
            reason: "easting and northing must be finite".to_string(),
        });
    }

    let e = grid.easting.floor() as i64;
    let n = grid.northing.floor() as i64;

    let e100k = e.div_euclid(100_000);
    let n100k = n.div_euclid(100_000);
    if !(0..=E100K_MAX).contains(&e100k) || !(0..=N100K_MAX).contains(&n100k) {
        return Err(OsgridError::Range {
            reason: format!(
                "({}, {}) is outside the lettered National Grid",
                grid.easting, grid.northing
            ),
        });
    }

    // recover the letter codes, re-inserting the skipped 'I'
    let mut l1 = (19 - n100k) - (19 - n100k) % 5 + (e100k + 10) / 5;
    let mut l2 = (19 - n100k) * 5 % 25 + e100k % 5;
    if l1 > 7 {
        l1 += 1;
    }
    if l2 > 7 {
        l2 += 1;
    }
    let letters = [(b'A' + l1 as u8) as char, (b'A' + l2 as u8) as char];

    let width = usize::from(digits / 2);
    let divisor = 10_i64.pow(5 - u32::from(digits) / 2);
    let e_part = e.rem_euclid(100_000) / divisor;
    let n_part = n.rem_euclid(100_000) / divisor;

    Ok(format!(
        "{}{} {:0width$} {:0width$}",
        letters[0], letters[1], e_part, n_part
    ))
}
