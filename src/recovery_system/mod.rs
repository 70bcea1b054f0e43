pub mod descent;
pub mod dispersion;
pub mod parachute;
pub mod planner;
pub mod wind;
