//! Monte Carlo landing dispersion: rerun the descent with perturbed wind
//! and mass to bound where the rocket can come down.

use crate::errors::FlightError;
use crate::utils::vector2d::Vector2D;

use super::descent::DescentSimulator;
use super::parachute::RecoveryConfiguration;
use super::wind::WindProfile;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Spread parameters for the perturbed runs; standard deviations of
/// independent normal perturbations around the nominal inputs.
#[derive(Debug, Clone)]
pub struct DispersionConfig {
    pub runs: usize,
    pub wind_speed_std: f64,     // m/s
    pub wind_direction_std: f64, // degrees
    pub mass_std: f64,           // kg
}

impl DispersionConfig {
    pub fn new(runs: usize, wind_speed_std: f64, wind_direction_std: f64, mass_std: f64) -> Self {
        DispersionConfig {
            runs,
            wind_speed_std,
            wind_direction_std,
            mass_std,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispersionResult {
    pub landing_points: Vec<Vector2D>, // m from the launch site
    pub mean_drift: f64,
    pub drift_std: f64,
    pub max_drift: f64,
    pub mean_landing_velocity: f64,
    pub landing_velocity_std: f64,
    /// Runs that hit the integration time cap instead of the ground.
    pub incomplete_runs: usize,
}

pub struct DispersionAnalyzer;

impl DispersionAnalyzer {
    /// Runs `config.runs` perturbed descents with a seeded generator, so a
    /// given seed always reproduces the same cloud of landing points.
    pub fn run(
        apogee: f64,
        descent_mass: f64,
        recovery: &RecoveryConfiguration,
        wind: &WindProfile,
        config: &DispersionConfig,
        seed: u64,
    ) -> Result<DispersionResult, FlightError> {
        if config.runs == 0 {
            return Err(FlightError::Validation(
                "dispersion analysis needs at least one run".to_string(),
            ));
        }
        let speed_dist = Self::normal(wind.ground_speed, config.wind_speed_std)?;
        let direction_dist = Self::normal(wind.ground_direction, config.wind_direction_std)?;
        let mass_dist = Self::normal(descent_mass, config.mass_std)?;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut landing_points = Vec::with_capacity(config.runs);
        let mut drifts = Vec::with_capacity(config.runs);
        let mut velocities = Vec::with_capacity(config.runs);
        let mut max_drift = 0.0f64;
        let mut incomplete_runs = 0;

        for _ in 0..config.runs {
            let speed = speed_dist.sample(&mut rng).max(0.0);
            let direction = direction_dist.sample(&mut rng);
            let mass = mass_dist.sample(&mut rng).max(1e-3);

            let perturbed_wind = WindProfile::new(speed, direction, wind.gust_factor);
            let result = DescentSimulator::simulate(apogee, mass, recovery, &perturbed_wind)?;

            if !result.complete {
                incomplete_runs += 1;
            }
            max_drift = max_drift.max(result.drift_distance);
            drifts.push(result.drift_distance);
            velocities.push(result.landing_velocity);
            landing_points.push(result.drift);
        }

        let (mean_drift, drift_std) = Self::mean_and_std(&drifts);
        let (mean_landing_velocity, landing_velocity_std) = Self::mean_and_std(&velocities);
        Ok(DispersionResult {
            landing_points,
            mean_drift,
            drift_std,
            max_drift,
            mean_landing_velocity,
            landing_velocity_std,
            incomplete_runs,
        })
    }

    fn mean_and_std(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        (mean, variance.sqrt())
    }

    fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>, FlightError> {
        Normal::new(mean, std_dev).map_err(|_| {
            FlightError::Validation(format!(
                "standard deviation must be finite and non-negative, got {}",
                std_dev
            ))
        })
    }
}
