//! Closed-form ascent estimation ("QuickSim") for screening motor catalogs
//! without running a full simulation. By design this never fails: a motor
//! that cannot lift the rocket produces a zero-altitude estimate rather
//! than an error, so callers can sweep whole catalogs without branching.

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, BOOST_DRAG_CORRECTION, DELAY_CANDIDATE_WINDOW,
    EJECTION_DELAY_SAFETY_MARGIN, GRAVITY, IMPULSE_CLASS_LIMITS, STANDARD_EJECTION_DELAYS,
};

use std::f64::consts::PI;

/// Summary parameters of the airframe as the estimator sees it, in SI.
#[derive(Debug, Clone)]
pub struct AscentRocket {
    pub dry_mass: f64, // kg, without motor
    pub diameter: f64, // m
    pub drag_coefficient: f64,
}

impl AscentRocket {
    pub fn new(dry_mass: f64, diameter: f64, drag_coefficient: f64) -> Self {
        AscentRocket {
            dry_mass,
            diameter,
            drag_coefficient,
        }
    }

    pub fn frontal_area(&self) -> f64 {
        PI / 4.0 * self.diameter * self.diameter
    }
}

/// Read-only motor facts as published in manufacturer data sheets.
#[derive(Debug, Clone)]
pub struct MotorSummary {
    pub total_impulse: f64,   // N·s
    pub average_thrust: f64,  // N
    pub burn_time: f64,       // s
    pub total_mass: f64,      // kg, loaded
    pub propellant_mass: f64, // kg
}

impl MotorSummary {
    pub fn new(
        total_impulse: f64,
        average_thrust: f64,
        burn_time: f64,
        total_mass: f64,
        propellant_mass: f64,
    ) -> Self {
        MotorSummary {
            total_impulse,
            average_thrust,
            burn_time,
            total_mass,
            propellant_mass,
        }
    }

    /// NAR/TRA impulse class letter, None above O-class.
    pub fn impulse_class(&self) -> Option<char> {
        IMPULSE_CLASS_LIMITS
            .iter()
            .find(|(_, limit)| self.total_impulse <= *limit)
            .map(|(class, _)| *class)
    }
}

#[derive(Debug, Clone)]
pub struct AscentEstimate {
    pub apogee: f64,           // m AGL
    pub burnout_velocity: f64, // m/s
    pub burnout_altitude: f64, // m AGL
    pub coast_time: f64,       // s, burnout to apogee
    pub apogee_time: f64,      // s from liftoff
    pub thrust_to_weight: f64,
}

impl AscentEstimate {
    fn grounded(thrust_to_weight: f64) -> Self {
        AscentEstimate {
            apogee: 0.0,
            burnout_velocity: 0.0,
            burnout_altitude: 0.0,
            coast_time: 0.0,
            apogee_time: 0.0,
            thrust_to_weight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DelayRecommendation {
    pub optimal_delay: f64,   // s, computed coast time plus safety margin
    pub recommended: f64,     // s, nearest standard ejection delay
    pub candidates: Vec<f64>, // standard delays within the candidate window
}

pub struct AscentEstimator;

impl AscentEstimator {
    /// Analytical apogee approximation: impulse kinematics for the boost
    /// phase with a fixed empirical drag correction, then the closed-form
    /// drag-limited coast gain `(v_t²/2g)·ln(1 + (v_b/v_t)²)`.
    pub fn estimate(rocket: &AscentRocket, motor: &MotorSummary) -> AscentEstimate {
        let liftoff_mass = rocket.dry_mass + motor.total_mass;
        let weight = liftoff_mass * GRAVITY;
        let thrust_to_weight = if weight > 0.0 {
            motor.average_thrust / weight
        } else {
            0.0
        };

        if motor.average_thrust <= weight
            || motor.burn_time <= 0.0
            || liftoff_mass <= 0.0
            || rocket.diameter <= 0.0
            || rocket.drag_coefficient <= 0.0
        {
            return AscentEstimate::grounded(thrust_to_weight);
        }

        let burn_mass = liftoff_mass - motor.propellant_mass / 2.0;
        let boost_acceleration = motor.average_thrust / burn_mass - GRAVITY;
        let burnout_velocity =
            boost_acceleration * motor.burn_time * BOOST_DRAG_CORRECTION;
        let burnout_altitude = 0.5 * burnout_velocity * motor.burn_time;

        let burnout_mass = liftoff_mass - motor.propellant_mass;
        let terminal_velocity = (2.0 * burnout_mass * GRAVITY
            / (AIR_DENSITY_SEA_LEVEL * rocket.drag_coefficient * rocket.frontal_area()))
        .sqrt();

        let velocity_ratio = burnout_velocity / terminal_velocity;
        let coast_gain = terminal_velocity * terminal_velocity / (2.0 * GRAVITY)
            * (1.0 + velocity_ratio * velocity_ratio).ln();
        let coast_time = terminal_velocity / GRAVITY * velocity_ratio.atan();

        AscentEstimate {
            apogee: (burnout_altitude + coast_gain).max(0.0),
            burnout_velocity,
            burnout_altitude,
            coast_time,
            apogee_time: motor.burn_time + coast_time,
            thrust_to_weight,
        }
    }

    /// Ejection delay recommendation: coast time plus a safety margin,
    /// snapped to the standard delay increments, with the nearby standard
    /// delays returned for candidate ranking.
    pub fn estimate_optimal_delay(
        rocket: &AscentRocket,
        motor: &MotorSummary,
    ) -> DelayRecommendation {
        let estimate = Self::estimate(rocket, motor);
        let optimal_delay = estimate.coast_time + EJECTION_DELAY_SAFETY_MARGIN;

        let mut recommended = STANDARD_EJECTION_DELAYS[0];
        for &delay in &STANDARD_EJECTION_DELAYS {
            if (delay - optimal_delay).abs() < (recommended - optimal_delay).abs() {
                recommended = delay;
            }
        }

        let candidates = STANDARD_EJECTION_DELAYS
            .iter()
            .copied()
            .filter(|delay| (delay - optimal_delay).abs() <= DELAY_CANDIDATE_WINDOW)
            .collect();

        DelayRecommendation {
            optimal_delay,
            recommended,
            candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Mid-power 29mm sport rocket.
    fn test_rocket() -> AscentRocket {
        AscentRocket::new(0.35, 0.042, 0.55)
    }

    // F-class single-use motor.
    fn f_motor() -> MotorSummary {
        MotorSummary::new(72.0, 50.0, 1.5, 0.085, 0.037)
    }

    #[test]
    fn test_estimate_reasonable_f_motor_flight() {
        let estimate = AscentEstimator::estimate(&test_rocket(), &f_motor());

        assert!(estimate.apogee > 100.0, "F motor should clear 100 m");
        assert!(estimate.apogee < 1_000.0, "F motor should stay under 1 km");
        assert!(estimate.burnout_velocity > 0.0);
        assert!(estimate.coast_time > 0.0);
        assert_relative_eq!(
            estimate.apogee_time,
            f_motor().burn_time + estimate.coast_time,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_apogee_monotone_in_total_impulse() {
        let rocket = test_rocket();
        let mut previous = 0.0;
        // Same average thrust, increasing burn time, so impulse grows.
        for impulse in [40.0, 72.0, 120.0, 160.0] {
            let motor = MotorSummary::new(impulse, 50.0, impulse / 50.0, 0.085, 0.037);
            let apogee = AscentEstimator::estimate(&rocket, &motor).apogee;
            assert!(
                apogee > previous,
                "apogee should grow with impulse, got {} after {}",
                apogee,
                previous
            );
            previous = apogee;
        }
    }

    #[test]
    fn test_underpowered_motor_degrades_to_zero() {
        let rocket = AscentRocket::new(6.0, 0.1, 0.6); // 6 kg on an F motor
        let estimate = AscentEstimator::estimate(&rocket, &f_motor());

        assert_eq!(estimate.apogee, 0.0);
        assert_eq!(estimate.burnout_velocity, 0.0);
        assert!(estimate.thrust_to_weight < 1.1);
        assert!(estimate.thrust_to_weight > 0.0);
    }

    #[test]
    fn test_zero_burn_time_degrades_to_zero() {
        let motor = MotorSummary::new(72.0, 50.0, 0.0, 0.085, 0.037);
        let estimate = AscentEstimator::estimate(&test_rocket(), &motor);
        assert_eq!(estimate.apogee, 0.0);
    }

    #[test]
    fn test_delay_recommendation_snaps_to_standard_values() {
        let recommendation = AscentEstimator::estimate_optimal_delay(&test_rocket(), &f_motor());

        assert!(STANDARD_EJECTION_DELAYS.contains(&recommendation.recommended));
        assert!(!recommendation.candidates.is_empty());
        for candidate in &recommendation.candidates {
            assert!(
                (candidate - recommendation.optimal_delay).abs() <= DELAY_CANDIDATE_WINDOW,
                "candidate {} outside window of optimum {}",
                candidate,
                recommendation.optimal_delay
            );
        }
    }

    #[test]
    fn test_impulse_class_lookup() {
        assert_eq!(f_motor().impulse_class(), Some('F'));
        assert_eq!(
            MotorSummary::new(2.5, 5.0, 0.5, 0.016, 0.003).impulse_class(),
            Some('A')
        );
        assert_eq!(
            MotorSummary::new(6_500.0, 1_670.0, 3.9, 4.8, 2.7).impulse_class(),
            Some('M')
        );
        assert_eq!(
            MotorSummary::new(99_999.0, 0.0, 0.0, 0.0, 0.0).impulse_class(),
            None
        );
    }
}
