use crate::errors::{AirfoilError, Result};
use itertools::Itertools;
use log::warn;
use ncollide2d::na::Point2;
use regex::Regex;
use std::sync::OnceLock;

use super::normalize::RawOutline;

/// Result of parsing a coordinate file: the airfoil name plus the raw points
/// in file order, ready for the normalizer.
pub struct ParsedFoil {
    pub name: String,
    pub points: RawOutline,
}

/// Matches `[optional integer index] <float> <float>`, floats with optional
/// sign, decimal and exponent. A trailing third float is tolerated so that
/// exported three-column curve files parse back in.
fn coordinate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let float = r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?";
        Regex::new(&format!(r"^(?:\d+\s+)?{f}\s+{f}(?:\s+{f})?$", f = float))
            .expect("coordinate pattern is a valid regex")
    })
}

/// Pull (x, y) out of a matched coordinate line. A bare-integer first field
/// on a three-field line is a point index; a fractional one is the x of an
/// x/y/z row.
fn coordinate_values(line: &str) -> Option<(f64, f64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (x, y) = match fields.as_slice() {
        [x, y] => (x, y),
        [i, x, y] if i.bytes().all(|b| b.is_ascii_digit()) => (x, y),
        [x, y, _z] => (x, y),
        _ => return None,
    };
    Some((x.parse().ok()?, y.parse().ok()?))
}

/// Parse the text of a Selig-style `.dat` file. The first non-empty line is
/// the airfoil name unless it already looks like a coordinate line, in which
/// case the file is headerless and `fallback_name` (usually the file stem)
/// is used. A data line of the form `numUpper numLower` with both values
/// above one switches to the legacy split form, where the points are two
/// leading-edge-first curves instead of one trailing-edge-first loop.
///
/// Lines that fail the coordinate pattern are logged and skipped; parsing
/// only fails when fewer than two points are recoverable.
pub fn parse(content: &str, fallback_name: &str) -> Result<ParsedFoil> {
    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .peekable();

    let first = lines.peek().copied().ok_or(AirfoilError::EmptyFile)?;
    let name = if coordinate_pattern().is_match(first) {
        fallback_name.to_string()
    } else {
        lines.next();
        first.split_whitespace().join(" ")
    };

    let mut raw: Vec<Point2<f64>> = Vec::new();
    let mut counts: Option<(usize, usize)> = None;

    for line in lines {
        if !coordinate_pattern().is_match(line) {
            warn!("skipping unparseable line: {:?}", line);
            continue;
        }
        let Some((a, b)) = coordinate_values(line) else {
            warn!("skipping unparseable line: {:?}", line);
            continue;
        };

        // A two-value line whose first value exceeds one is the legacy point
        // count header, read at most once. Later lines of that shape are
        // skipped in count-header files; in loop-form files they stay
        // coordinates, since a scaled foil may legitimately reach past 1.
        if a > 1.0 && line.split_whitespace().count() == 2 {
            if counts.is_some() {
                warn!("skipping extra point count line: {:?}", line);
                continue;
            }
            if raw.is_empty() {
                counts = Some((a as usize, b as usize));
                continue;
            }
        }

        raw.push(Point2::new(a, b));
    }

    if raw.len() < 2 {
        return Err(AirfoilError::NotEnoughPoints(raw.len()));
    }

    let points = match counts {
        Some((nu, nl)) => {
            if nu.max(nl) > raw.len() {
                return Err(AirfoilError::NotEnoughPoints(raw.len()));
            }
            RawOutline::Surfaces {
                upper: raw[..nu].to_vec(),
                lower: raw[raw.len() - nl..].to_vec(),
            }
        }
        None => RawOutline::Loop(raw),
    };

    Ok(ParsedFoil { name, points })
}
