use thiserror::Error;

/// Failure taxonomy for the airfoil geometry engine. Everything in here is a
/// deterministic input-validation failure surfaced to the immediate caller;
/// nothing is retried internally.
#[derive(Debug, Error)]
pub enum AirfoilError {
    #[error("failed to read airfoil source: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty file")]
    EmptyFile,

    #[error("not enough points: recovered {0}, need at least 2")]
    NotEnoughPoints(usize),

    #[error("surface has fewer than 2 points after normalization")]
    DegenerateSurface,

    #[error("invalid NACA 4 definition: {0:?}")]
    InvalidNacaCode(String),

    #[error("point count must be at least 2, got {0}")]
    InvalidPointCount(usize),

    #[error("cannot scale a geometry with zero chord length")]
    ZeroChord,

    #[error("requested chord must be positive, got {0}")]
    InvalidChord(f64),
}

pub type Result<T> = std::result::Result<T, AirfoilError>;
