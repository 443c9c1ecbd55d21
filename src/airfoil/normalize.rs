use crate::errors::{AirfoilError, Result};
use crate::geometry::distances2::mid_point;
use itertools::Itertools;
use log::warn;
use ncollide2d::na::Point2;
use std::cmp::Ordering;

use super::TeClosure;

/// Raw point data handed to the normalizer. `Loop` is the common
/// coordinate-file form: one closed-ish outline starting at the trailing
/// edge, running over the upper surface to the leading edge and back. The
/// `Surfaces` form carries two separate leading-edge-first curves, which is
/// what the legacy count-header files and the parametric generator produce.
pub enum RawOutline {
    Loop(Vec<Point2<f64>>),
    Surfaces {
        upper: Vec<Point2<f64>>,
        lower: Vec<Point2<f64>>,
    },
}

impl RawOutline {
    pub fn len(&self) -> usize {
        match self {
            RawOutline::Loop(points) => points.len(),
            RawOutline::Surfaces { upper, lower } => upper.len() + lower.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split, orient and close raw points into the canonical surface pair: the
/// upper surface leading edge to trailing edge, the lower surface trailing
/// edge back to leading edge. Applying this to an already-canonical outline
/// reproduces the same surfaces.
pub fn normalize(raw: RawOutline, te: TeClosure) -> Result<(Vec<Point2<f64>>, Vec<Point2<f64>>)> {
    let (mut upper, mut lower) = match raw {
        RawOutline::Loop(points) => split_at_leading_edge(points)?,
        RawOutline::Surfaces { upper, lower } => (upper, lower),
    };

    orient(&upper, &mut lower);
    close_trailing_edge(&mut upper, &mut lower, te);

    if upper.len() < 2 || lower.len() < 2 {
        return Err(AirfoilError::DegenerateSurface);
    }

    Ok((upper, lower))
}

/// The leading edge is the point with the minimum chordwise coordinate. The
/// leading edge point is shared: it ends up on both surfaces.
fn split_at_leading_edge(
    points: Vec<Point2<f64>>,
) -> Result<(Vec<Point2<f64>>, Vec<Point2<f64>>)> {
    let le = points
        .iter()
        .position_min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
        .ok_or(AirfoilError::DegenerateSurface)?;

    let mut upper: Vec<Point2<f64>> = points[..=le].to_vec();
    let mut lower: Vec<Point2<f64>> = points[le..].to_vec();

    // File order runs TE -> LE -> TE, so both halves get flipped into the
    // canonical directions.
    upper.reverse();
    lower.reverse();

    Ok((upper, lower))
}

fn ascending(surface: &[Point2<f64>]) -> bool {
    match (surface.first(), surface.last()) {
        (Some(first), Some(last)) => first.x < last.x,
        _ => false,
    }
}

/// Sanity pass: the two surfaces must run in complementary chordwise
/// directions. If both come out running the same way, the lower curve is the
/// one flipped back.
fn orient(upper: &[Point2<f64>], lower: &mut Vec<Point2<f64>>) {
    if ascending(upper) == ascending(lower) {
        lower.reverse();
        warn!("lower curve reversed to restore surface orientation");
    }
}

/// Close the trailing edge pair (last point of the upper surface, first
/// point of the lower). The x coordinates are always merged to their mean.
/// In `Point` mode the y values collapse to their mean as well; in `Line`
/// mode each surface gains one point at the midpoint height, keeping the
/// original gap as a short near-vertical segment. Both modes are no-ops on
/// an already-closed trailing edge.
fn close_trailing_edge(upper: &mut Vec<Point2<f64>>, lower: &mut Vec<Point2<f64>>, te: TeClosure) {
    let (Some(u), Some(l)) = (upper.last().copied(), lower.first().copied()) else {
        return;
    };

    let mid = mid_point(&u, &l);
    if u.x != l.x {
        if let Some(p) = upper.last_mut() {
            p.x = mid.x;
        }
        if let Some(p) = lower.first_mut() {
            p.x = mid.x;
        }
    }

    if u.y != l.y {
        match te {
            TeClosure::Point => {
                if let Some(p) = upper.last_mut() {
                    p.y = mid.y;
                }
                if let Some(p) = lower.first_mut() {
                    p.y = mid.y;
                }
            }
            TeClosure::Line => {
                upper.push(Point2::new(mid.x, mid.y));
                lower.insert(0, Point2::new(mid.x, mid.y));
            }
        }
    }
}
