pub mod airfoil;
pub mod errors;
pub mod geometry;
pub mod repository;
pub mod serialize;
