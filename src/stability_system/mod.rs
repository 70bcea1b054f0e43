pub mod aero;
pub mod analyzer;
pub mod geometry;
