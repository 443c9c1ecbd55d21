use ncollide2d::na::{Point2, RealField};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

/// Return the point midway between two 2D points
pub fn mid_point<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> Point2<N> {
    a + (b - a) * N::from_f64(0.5).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case((0.0, 0.0), (3.0, 4.0), 5.0)]
    #[test_case((1.0, 1.0), (1.0, 1.0), 0.0)]
    #[test_case((-1.0, 0.0), (1.0, 0.0), 2.0)]
    fn test_dist(a: (f64, f64), b: (f64, f64), e: f64) {
        let result = dist(&Point2::new(a.0, a.1), &Point2::new(b.0, b.1));
        assert_relative_eq!(e, result, epsilon = 1e-12);
    }

    #[test]
    fn test_mid_point() {
        let m = mid_point(&Point2::new(1.0, -0.5), &Point2::new(2.0, 0.5));
        assert_relative_eq!(1.5, m.x, epsilon = 1e-12);
        assert_relative_eq!(0.0, m.y, epsilon = 1e-12);
    }
}
