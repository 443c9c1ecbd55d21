pub mod distances2;
pub mod transforms2;
