use ncollide2d::na::{Matrix2, Matrix3, Point2, Rotation2, Vector2};

/// Translate every point by (dx, dy) using the homogeneous 3x3 matrix
/// [[1,0,dx],[0,1,dy],[0,0,1]]. The matrix is a local temporary; callers get
/// back a fresh array and commit it themselves.
pub fn translate(points: &[Point2<f64>], dx: f64, dy: f64) -> Vec<Point2<f64>> {
    let m = Matrix3::new_translation(&Vector2::new(dx, dy));
    points.iter().map(|p| m.transform_point(p)).collect()
}

/// Scale every point uniformly about the coordinate origin with a diagonal
/// 2x2 matrix.
pub fn scale_uniform(points: &[Point2<f64>], factor: f64) -> Vec<Point2<f64>> {
    let m = Matrix2::from_diagonal_element(factor);
    points.iter().map(|p| Point2::from(m * p.coords)).collect()
}

/// Rotate every point about the coordinate origin by an angle in radians.
/// This pivots on (0,0), not on any feature of the point set.
pub fn rotate(points: &[Point2<f64>], angle_rad: f64) -> Vec<Point2<f64>> {
    let r = Rotation2::new(angle_rad);
    points.iter().map(|p| r * p).collect()
}
