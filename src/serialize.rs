use ncollide2d::na::Point2;
use serde::ser::Serializer;
use serde::Serialize;

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// Serializes a `Vec<Point2<f64>>` through the `Point2f64` remote definition,
/// for use with `#[serde(serialize_with = ...)]` on surface fields.
pub fn point2_seq<S>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    #[derive(Serialize)]
    struct Wrap<'a>(#[serde(with = "Point2f64")] &'a Point2<f64>);

    serializer.collect_seq(points.iter().map(Wrap))
}
