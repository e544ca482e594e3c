pub mod grid;
pub mod point;
pub mod sweep;
