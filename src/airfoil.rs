use crate::errors::{AirfoilError, Result};
use crate::geometry::distances2::dist;
use crate::geometry::transforms2::{rotate, scale_uniform, translate};
use crate::serialize::point2_seq;
use log::debug;
use ncollide2d::na::Point2;
use serde::Serialize;
use std::path::Path;

pub mod export;
pub mod generate;
pub mod normalize;
pub mod parse;

/// Tolerance used when deciding whether two outline points are the same
/// physical point, e.g. a duplicated trailing edge.
pub const COINCIDENT_TOL: f64 = 1e-6;

/// The plane an airfoil section lies in when exported as a 3-column CAD
/// curve. The section itself is always 2D; the plane only permutes columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Plane {
    XY,
    XZ,
    YZ,
}

impl Plane {
    /// Order a 2D point plus the implicit z = 0 into the three export
    /// columns for this plane.
    pub fn columns(&self, x: f64, y: f64) -> [f64; 3] {
        match self {
            Plane::XY => [x, y, 0.0],
            Plane::XZ => [x, 0.0, y],
            Plane::YZ => [y, 0.0, x],
        }
    }
}

/// Trailing edge closure policy. `Point` collapses the upper and lower
/// trailing edge points to a single shared point. `Line` keeps the gap as a
/// short near-vertical segment ending at the midpoint height, which is the
/// preferred form for hot-wire manufacturing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum TeClosure {
    Point,
    Line,
}

/// Construction options shared by all airfoil constructors. The transform
/// pipeline order is fixed: center, then scale, then rotate, then translate.
/// Scale and rotate assume an origin-referenced pose, so reordering changes
/// the result.
pub struct FoilOptions {
    pub plane: Plane,
    pub te_closure: TeClosure,
    pub chord: Option<f64>,
    pub incidence: Option<f64>,
    pub position: Option<(f64, f64)>,
}

impl Default for FoilOptions {
    fn default() -> Self {
        FoilOptions {
            plane: Plane::XY,
            te_closure: TeClosure::Point,
            chord: None,
            incidence: None,
            position: None,
        }
    }
}

/// A canonical 2D airfoil section. The upper surface runs from the leading
/// edge to the trailing edge, the lower surface from the trailing edge back
/// to the leading edge. Transform operations replace both surfaces
/// wholesale; there is no partial mutation.
#[derive(Serialize)]
pub struct AirfoilGeometry {
    name: String,
    point_count: usize,

    #[serde(serialize_with = "point2_seq")]
    upper: Vec<Point2<f64>>,

    #[serde(serialize_with = "point2_seq")]
    lower: Vec<Point2<f64>>,
    plane: Plane,
    incidence: f64,
    te_closure: TeClosure,
    te_closed: bool,
}

impl AirfoilGeometry {
    /// Load an airfoil from a coordinate file. The file name (minus its
    /// extension) is used as the airfoil name when the file has no header
    /// line.
    pub fn from_file(path: impl AsRef<Path>, options: &FoilOptions) -> Result<AirfoilGeometry> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let fallback = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_text(&content, &fallback, options)
    }

    /// Parse an airfoil from raw coordinate-file text. `fallback_name` is
    /// used when the text turns out to be headerless.
    pub fn from_text(
        content: &str,
        fallback_name: &str,
        options: &FoilOptions,
    ) -> Result<AirfoilGeometry> {
        let parsed = parse::parse(content, fallback_name)?;
        Self::build(parsed.name, parsed.points, options)
    }

    /// Generate an airfoil from a NACA 4-digit code and a per-surface point
    /// count, feeding the result through the same normalization and
    /// transform path as file-loaded points.
    pub fn from_digits(code: &str, n: usize, options: &FoilOptions) -> Result<AirfoilGeometry> {
        use generate::AirfoilGenerator;

        let naca = generate::Naca4Digit::from_code(code)?;
        let (upper, lower) = naca.sample(n)?;
        Self::build(
            format!("NACA {}", code),
            normalize::RawOutline::Surfaces { upper, lower },
            options,
        )
    }

    /// Build an airfoil from an already-assembled outline loop, ordered
    /// trailing edge over the upper surface to the leading edge and back.
    pub fn from_raw_points(
        points: Vec<Point2<f64>>,
        name: &str,
        options: &FoilOptions,
    ) -> Result<AirfoilGeometry> {
        Self::build(name.to_string(), normalize::RawOutline::Loop(points), options)
    }

    fn build(name: String, raw: normalize::RawOutline, options: &FoilOptions) -> Result<Self> {
        let point_count = raw.len();
        let (upper, lower) = normalize::normalize(raw, options.te_closure)?;

        let mut foil = AirfoilGeometry {
            name,
            point_count,
            upper,
            lower,
            plane: options.plane,
            incidence: 0.0,
            te_closure: options.te_closure,
            te_closed: true,
        };

        // Fixed pipeline: center, scale, rotate, translate.
        foil.center_foil();
        if let Some(chord) = options.chord {
            foil.scale_to(chord)?;
        }
        if let Some(angle) = options.incidence {
            foil.rotate_to(angle);
        }
        if let Some((x, y)) = options.position {
            foil.translate_to(x, y);
        }

        Ok(foil)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn upper(&self) -> &[Point2<f64>] {
        &self.upper
    }

    pub fn lower(&self) -> &[Point2<f64>] {
        &self.lower
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    pub fn set_plane(&mut self, plane: Plane) {
        self.plane = plane;
    }

    /// The cumulative absolute rotation applied through `rotate_to`, in
    /// degrees.
    pub fn incidence(&self) -> f64 {
        self.incidence
    }

    pub fn is_te_closed(&self) -> bool {
        self.te_closed
    }

    pub fn te_closure(&self) -> TeClosure {
        self.te_closure
    }

    fn upper_first(&self) -> &Point2<f64> {
        self.upper.first().expect("surface is never empty")
    }

    fn upper_last(&self) -> &Point2<f64> {
        self.upper.last().expect("surface is never empty")
    }

    /// The quarter chord reference point, computed from the upper surface's
    /// two endpoints only. Note that this silently diverges from the
    /// textbook 25%-of-true-chord point when those endpoints are not the
    /// exact leading and trailing edge.
    pub fn quarter_chord(&self) -> Point2<f64> {
        let first = self.upper_first();
        let last = self.upper_last();
        Point2::new(
            first.x + (last.x - first.x) / 4.0,
            first.y + (last.y - first.y) / 4.0,
        )
    }

    /// Straight-line distance between the upper surface's endpoints.
    pub fn chord_length(&self) -> f64 {
        dist(self.upper_first(), self.upper_last())
    }

    /// Move the airfoil so that its quarter chord lands on (x, y).
    pub fn translate_to(&mut self, x: f64, y: f64) {
        let qc = self.quarter_chord();
        let dx = x - qc.x;
        let dy = y - qc.y;
        debug!("translate {} by ({}, {})", self.name, dx, dy);
        self.upper = translate(&self.upper, dx, dy);
        self.lower = translate(&self.lower, dx, dy);
    }

    /// Center the quarter chord on the coordinate origin.
    pub fn center_foil(&mut self) {
        self.translate_to(0.0, 0.0);
    }

    /// Scale the airfoil uniformly so its chord length becomes `chord`. The
    /// quarter chord stays where it is: scaling happens about it, not about
    /// the origin.
    pub fn scale_to(&mut self, chord: f64) -> Result<()> {
        if chord <= 0.0 {
            return Err(AirfoilError::InvalidChord(chord));
        }
        let current = self.chord_length();
        if current < f64::EPSILON {
            return Err(AirfoilError::ZeroChord);
        }
        let factor = chord / current;
        debug!("scale {} by {}", self.name, factor);

        let qc = self.quarter_chord();
        if dist(&qc, &Point2::origin()) > 1e-12 {
            let upper = translate(&self.upper, -qc.x, -qc.y);
            let lower = translate(&self.lower, -qc.x, -qc.y);
            let upper = scale_uniform(&upper, factor);
            let lower = scale_uniform(&lower, factor);
            self.upper = translate(&upper, qc.x, qc.y);
            self.lower = translate(&lower, qc.x, qc.y);
        } else {
            self.upper = scale_uniform(&self.upper, factor);
            self.lower = scale_uniform(&self.lower, factor);
        }
        Ok(())
    }

    /// Rotate the airfoil to an absolute incidence angle in degrees. The
    /// rotation pivots on the coordinate origin, not on the quarter chord,
    /// so the caller should center the foil first; otherwise the result is a
    /// combined rotation and translation.
    pub fn rotate_to(&mut self, angle_deg: f64) {
        let delta = angle_deg - self.incidence;
        debug!("rotate {} by {} degrees", self.name, delta);
        self.upper = rotate(&self.upper, delta.to_radians());
        self.lower = rotate(&self.lower, delta.to_radians());
        self.incidence = angle_deg;
    }

    /// The full outline running leading edge over the upper surface to the
    /// trailing edge and back over the lower surface, with the duplicated
    /// trailing edge point dropped from the seam.
    pub fn outline(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper.to_vec();
        let mut rest: &[Point2<f64>] = &self.lower;
        if let (Some(a), Some(b)) = (self.upper.last(), self.lower.first()) {
            if dist(a, b) <= COINCIDENT_TOL {
                rest = &self.lower[1..];
            }
        }
        result.extend_from_slice(rest);
        result
    }

    /// The outline in coordinate-file order: trailing edge over the upper
    /// surface to the leading edge, then back over the lower surface. The
    /// shared leading edge point appears once. Feeding this loop back
    /// through the normalizer reproduces the same geometry.
    pub fn selig_points(&self) -> Vec<Point2<f64>> {
        let mut result: Vec<Point2<f64>> = self.upper.iter().rev().copied().collect();
        let mut back: Vec<Point2<f64>> = self.lower.iter().rev().copied().collect();
        if let (Some(a), Some(b)) = (result.last(), back.first()) {
            if dist(a, b) <= COINCIDENT_TOL {
                back.remove(0);
            }
        }
        result.append(&mut back);
        result
    }
}
