use crate::errors::{AirfoilError, Result};
use ncollide2d::na::Point2;
use regex::Regex;
use std::sync::OnceLock;

/// An AirfoilGenerator evaluates the mean camber line and the thickness
/// half-width at fractions of a unit chord, which is everything needed to
/// place the upper and lower surface points.
pub trait AirfoilGenerator {
    /// Height of the camber line at a chord fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> f64;

    /// Slope of the camber line at a chord fraction from 0.0 to 1.0
    fn camber_gradient(&self, x: f64) -> f64;

    /// Thickness half-width, measured normal to the camber line
    fn half_thickness(&self, x: f64) -> f64;

    /// Evaluate `n` evenly spaced stations over the unit chord and offset
    /// them normal to the camber line, producing one leading-edge-first
    /// curve per surface. The result feeds the normalizer exactly like
    /// file-loaded points.
    fn sample(&self, n: usize) -> Result<(Vec<Point2<f64>>, Vec<Point2<f64>>)> {
        if n < 2 {
            return Err(AirfoilError::InvalidPointCount(n));
        }

        let mut upper = Vec::with_capacity(n);
        let mut lower = Vec::with_capacity(n);
        for i in 0..n {
            let x = i as f64 / (n - 1) as f64;
            let yt = self.half_thickness(x);
            let yc = self.camber_line(x);
            let theta = self.camber_gradient(x).atan();

            upper.push(Point2::new(x - yt * theta.sin(), yc + yt * theta.cos()));
            lower.push(Point2::new(x + yt * theta.sin(), yc - yt * theta.cos()));
        }

        Ok((upper, lower))
    }
}

fn four_digit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}$").expect("NACA pattern is a valid regex"))
}

/// A NACA 4-digit section. The camber equations switch branches at the
/// chord fraction `p`; `m` scales the camber line and `t` is the maximum
/// thickness as a fraction of the chord.
pub struct Naca4Digit {
    m: f64,
    p: f64,
    t: f64,
}

impl Naca4Digit {
    pub fn new(m: f64, p: f64, t: f64) -> Naca4Digit {
        Naca4Digit { m, p, t }
    }

    /// Decode a 4-ASCII-digit code such as "4412": the first digit over 10
    /// gives `p`, the second over 100 gives `m`, the last two over 100 give
    /// the thickness.
    pub fn from_code(code: &str) -> Result<Naca4Digit> {
        if !four_digit_pattern().is_match(code) {
            return Err(AirfoilError::InvalidNacaCode(code.to_string()));
        }

        let digit = |s: &str| s.parse::<f64>().unwrap_or(0.0);
        let p = digit(&code[0..1]) / 10.0;
        let m = digit(&code[1..2]) / 100.0;
        let t = digit(&code[2..4]) / 100.0;

        Ok(Naca4Digit::new(m, p, t))
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> f64 {
        // A symmetric section (p == 0) never takes the x < p branch, so the
        // m / p^2 term must not be evaluated at all.
        if self.p < 1e-6 {
            0.0
        } else if x < self.p {
            (self.m / self.p.powi(2)) * (2.0 * self.p * x - x.powi(2))
        } else {
            (self.m / (1.0 - self.p).powi(2))
                * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powi(2))
        }
    }

    fn camber_gradient(&self, x: f64) -> f64 {
        if self.p < 1e-6 {
            0.0
        } else if x < self.p {
            (self.m / self.p.powi(2)) * (2.0 * self.p - 2.0 * x)
        } else {
            (2.0 * self.m / (1.0 - self.p).powi(2)) * (self.p - x)
        }
    }

    fn half_thickness(&self, x: f64) -> f64 {
        let a0 = 0.2969;
        let a1 = -0.1260;
        let a2 = -0.3516;
        let a3 = 0.2843;
        let a4 = -0.1015;

        5.0 * self.t
            * (a0 * x.sqrt() + a1 * x + a2 * x.powi(2) + a3 * x.powi(3) + a4 * x.powi(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case("001" ; "too short")]
    #[test_case("00123" ; "too long")]
    #[test_case("00x2" ; "letter")]
    #[test_case("-412" ; "sign")]
    #[test_case("" ; "empty")]
    fn test_invalid_codes_rejected(code: &str) {
        let result = Naca4Digit::from_code(code);
        assert!(matches!(result, Err(AirfoilError::InvalidNacaCode(_))));
    }

    #[test]
    fn test_invalid_point_count_rejected() {
        let naca = Naca4Digit::from_code("0012").unwrap();
        assert!(matches!(
            naca.sample(1),
            Err(AirfoilError::InvalidPointCount(1))
        ));
        assert!(matches!(
            naca.sample(0),
            Err(AirfoilError::InvalidPointCount(0))
        ));
    }

    #[test_case(1.000000, 0.001260)]
    #[test_case(0.840000, 0.021694)]
    #[test_case(0.680000, 0.038557)]
    #[test_case(0.520000, 0.051635)]
    #[test_case(0.360000, 0.059263)]
    #[test_case(0.200000, 0.057375)]
    #[test_case(0.040000, 0.032277)]
    fn test_naca_4_half_thickness(x: f64, e: f64) {
        let naca = Naca4Digit::from_code("0012").unwrap();
        let result = naca.half_thickness(x);
        assert_relative_eq!(e, result, epsilon = 1e-3);
    }

    #[test_case(1.0000, 0.0013)]
    #[test_case(0.9000, 0.0208)]
    #[test_case(0.7000, 0.0518)]
    #[test_case(0.5000, 0.0724)]
    #[test_case(0.3000, 0.0788)]
    #[test_case(0.2000, 0.0726)]
    #[test_case(0.1000, 0.0563)]
    fn test_naca_4_camber(x: f64, e: f64) {
        let naca = Naca4Digit::new(0.02, 0.4, 0.12);
        let result = naca.half_thickness(x) + naca.camber_line(x);
        assert_relative_eq!(e, result, epsilon = 1e-3);
    }

    #[test]
    fn test_symmetric_section() {
        let naca = Naca4Digit::from_code("0012").unwrap();
        let (upper, lower) = naca.sample(100).unwrap();

        for i in 0..100 {
            let x = i as f64 / 99.0;
            assert_relative_eq!(0.0, naca.camber_line(x), epsilon = 1e-12);
            assert_relative_eq!(upper[i].x, lower[i].x, epsilon = 1e-12);
            assert_relative_eq!(upper[i].y, -lower[i].y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cambered_section_peak_location() {
        // For a 4412 the camber line peaks at the decoded p = 0.4.
        let naca = Naca4Digit::from_code("4412").unwrap();
        let mut best_x = 0.0;
        let mut best_y = f64::MIN;
        for i in 0..=1000 {
            let x = i as f64 / 1000.0;
            let y = naca.camber_line(x);
            if y > best_y {
                best_y = y;
                best_x = x;
            }
        }
        assert_relative_eq!(0.4, best_x, epsilon = 2e-2);
        assert!(best_y > 0.0);
    }

    #[test]
    fn test_sample_starts_at_leading_edge() {
        let naca = Naca4Digit::from_code("4412").unwrap();
        let (upper, lower) = naca.sample(50).unwrap();
        assert_eq!(50, upper.len());
        assert_eq!(50, lower.len());
        assert_relative_eq!(0.0, upper[0].x, epsilon = 1e-12);
        assert_relative_eq!(0.0, lower[0].x, epsilon = 1e-12);
    }
}
