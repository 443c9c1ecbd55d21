use foilgeom::airfoil::export::write_curve_file;
use foilgeom::airfoil::{AirfoilGeometry, FoilOptions, Plane, TeClosure};
use std::path::Path;

fn main() {
    let options = FoilOptions {
        plane: Plane::XY,
        te_closure: TeClosure::Point,
        chord: Some(4.0),
        incidence: Some(2.0),
        position: Some((1.0, 0.0)),
    };

    let foil =
        AirfoilGeometry::from_digits("2412", 100, &options).expect("Failed generating airfoil");
    let path = write_curve_file(&foil, Path::new(".")).expect("Failed writing curve file");

    println!(
        "{}: {} points, chord {:.3}, written to {}",
        foil.name(),
        foil.point_count(),
        foil.chord_length(),
        path.display()
    );
}
