use crate::errors::Result;
use itertools::Itertools;
use log::info;
use std::path::{Path, PathBuf};

use super::AirfoilGeometry;

/// Render the full outline as tab-separated three-column text, one point per
/// line, with the columns permuted by the airfoil's plane setting. Nine
/// decimals keeps a parse/export round trip inside 1e-9.
pub fn curve_document(foil: &AirfoilGeometry) -> String {
    let mut doc = foil
        .outline()
        .iter()
        .map(|p| {
            let [a, b, c] = foil.plane().columns(p.x, p.y);
            format!("{:.9}\t{:.9}\t{:.9}", a, b, c)
        })
        .join("\n");
    doc.push('\n');
    doc
}

/// File name for a curve export: the airfoil name with spaces replaced by
/// underscores, plus the `.txt` extension.
pub fn export_file_name(foil: &AirfoilGeometry) -> String {
    format!("{}.txt", foil.name().replace(' ', "_"))
}

/// Write the curve document into `dir` and return the path of the new file.
pub fn write_curve_file(foil: &AirfoilGeometry, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(foil));
    std::fs::write(&path, curve_document(foil))?;
    info!("{} saved as curve file {}", foil.name(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::normalize::RawOutline;
    use crate::airfoil::{parse, FoilOptions, Plane};
    use approx::assert_relative_eq;

    fn diamond(plane: Plane) -> AirfoilGeometry {
        let text = "Test Foil\n1.0 0.0\n0.5 0.1\n0.0 0.0\n0.5 -0.1\n1.0 0.0\n";
        let options = FoilOptions {
            plane,
            ..FoilOptions::default()
        };
        AirfoilGeometry::from_text(text, "fallback", &options).unwrap()
    }

    #[test]
    fn test_file_name_replaces_spaces() {
        let foil = diamond(Plane::XY);
        assert_eq!("Test_Foil.txt", export_file_name(&foil));
    }

    #[test]
    fn test_document_shape() {
        let foil = diamond(Plane::XY);
        let doc = curve_document(&foil);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(5, lines.len());
        for line in &lines {
            assert_eq!(3, line.split('\t').count());
        }
    }

    #[test]
    fn test_plane_column_permutation() {
        let xy = curve_document(&diamond(Plane::XY));
        let xz = curve_document(&diamond(Plane::XZ));
        let yz = curve_document(&diamond(Plane::YZ));

        let row = |doc: &str, i: usize| -> Vec<f64> {
            doc.lines()
                .nth(i)
                .unwrap()
                .split('\t')
                .map(|v| v.parse().unwrap())
                .collect()
        };

        let (x, y) = (row(&xy, 1)[0], row(&xy, 1)[1]);
        assert_eq!(vec![x, 0.0, y], row(&xz, 1));
        assert_eq!(vec![y, 0.0, x], row(&yz, 1));
    }

    #[test]
    fn test_export_reparse_round_trip() {
        let foil = diamond(Plane::XY);
        let doc = curve_document(&foil);

        let reparsed = parse::parse(&doc, foil.name()).unwrap();
        assert_eq!(foil.point_count(), reparsed.points.len());

        let original = foil.outline();
        match reparsed.points {
            RawOutline::Loop(points) => {
                for (p, q) in original.iter().zip(points.iter()) {
                    assert_relative_eq!(p.x, q.x, epsilon = 1e-9);
                    assert_relative_eq!(p.y, q.y, epsilon = 1e-9);
                }
            }
            _ => panic!("expected loop form"),
        }
    }

    #[test]
    fn test_write_curve_file() {
        let foil = diamond(Plane::XY);
        let dir = std::env::temp_dir();
        let path = write_curve_file(&foil, &dir).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(curve_document(&foil), content);
        std::fs::remove_file(&path).unwrap();
    }
}
