//! Recovery sizing: pick canopy diameters and deployment altitudes for a
//! target descent profile, then sanity-check the plan with the descent
//! simulator.

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, DROGUE_TARGET_DESCENT_RATE, DUAL_DEPLOY_APOGEE_FT, GRAVITY,
    MAIN_DEPLOY_APOGEE_FRACTION, MAIN_TARGET_DESCENT_RATE, MAX_RECOMMENDED_MAIN_DEPLOY_FT,
    MIN_RECOMMENDED_MAIN_DEPLOY_FT, M_PER_FT, PLANNER_AVERAGE_WIND_SPEED,
    RECOMMENDED_BACKUP_DEPLOY_FT,
};
use crate::errors::FlightError;

use super::descent::{DescentSimulator, SimulationResult};
use super::parachute::{CanopyType, ParachuteModel, RecoveryConfiguration};
use super::wind::WindProfile;

use std::f64::consts::PI;

/// A sized recovery plan plus the simulated descent that justifies it.
#[derive(Debug, Clone)]
pub struct RecoveryPlan {
    pub configuration: RecoveryConfiguration,
    pub main_diameter: f64,           // m
    pub drogue_diameter: Option<f64>, // m, dual deploy only
    pub estimated_descent_time: f64,  // s
    pub estimated_drift: f64,         // m, at the planning wind speed
    pub simulation: SimulationResult,
}

pub struct RecoveryPlanner;

impl RecoveryPlanner {
    /// Canopy diameter that yields `descent_rate` at sea level, from the
    /// drag equation solved for the reference diameter.
    pub fn required_diameter(
        mass: f64,
        descent_rate: f64,
        drag_coefficient: f64,
    ) -> Result<f64, FlightError> {
        if mass <= 0.0 {
            return Err(FlightError::Validation(format!(
                "mass must be positive, got {} kg",
                mass
            )));
        }
        if descent_rate <= 0.0 {
            return Err(FlightError::Validation(format!(
                "descent rate must be positive, got {} m/s",
                descent_rate
            )));
        }
        if drag_coefficient <= 0.0 {
            return Err(FlightError::Validation(format!(
                "drag coefficient must be positive, got {}",
                drag_coefficient
            )));
        }
        Ok((8.0 * mass * GRAVITY
            / (PI * AIR_DENSITY_SEA_LEVEL * drag_coefficient * descent_rate * descent_rate))
            .sqrt())
    }

    /// Sizes a complete recovery setup for the given flight. Flights whose
    /// apogee clears the dual-deploy threshold get a drogue sized for a
    /// brisk upper descent and a main reserved for the final stretch;
    /// lower flights get a single main at apogee.
    pub fn recommend(apogee: f64, descent_mass: f64) -> Result<RecoveryPlan, FlightError> {
        if apogee <= 0.0 {
            return Err(FlightError::Validation(format!(
                "apogee must be positive, got {} m",
                apogee
            )));
        }

        let main_diameter = Self::required_diameter(
            descent_mass,
            MAIN_TARGET_DESCENT_RATE,
            CanopyType::FlatRound.drag_coefficient(),
        )?;
        let main = ParachuteModel::with_canopy(main_diameter, 0.0, CanopyType::FlatRound)?;

        let apogee_ft = apogee / M_PER_FT;
        let dual_deploy = apogee_ft > DUAL_DEPLOY_APOGEE_FT;
        let backup_altitude = RECOMMENDED_BACKUP_DEPLOY_FT * M_PER_FT;

        let (configuration, drogue_diameter) = if dual_deploy {
            let drogue_diameter = Self::required_diameter(
                descent_mass,
                DROGUE_TARGET_DESCENT_RATE,
                CanopyType::Hemispherical.drag_coefficient(),
            )?;
            let drogue =
                ParachuteModel::with_canopy(drogue_diameter, 0.0, CanopyType::Hemispherical)?;
            // Main deployment scales with the expected apogee: higher
            // flights get more margin under main, within the customary band.
            let main_deploy_ft = (apogee_ft * MAIN_DEPLOY_APOGEE_FRACTION)
                .clamp(MIN_RECOMMENDED_MAIN_DEPLOY_FT, MAX_RECOMMENDED_MAIN_DEPLOY_FT);
            let config = RecoveryConfiguration::dual_deploy(
                drogue,
                main,
                main_deploy_ft * M_PER_FT,
                0.0,
                backup_altitude,
            )?;
            (config, Some(drogue_diameter))
        } else {
            (
                RecoveryConfiguration::single_deploy(main, backup_altitude),
                None,
            )
        };

        let wind = WindProfile::new(PLANNER_AVERAGE_WIND_SPEED, 0.0, 1.0);
        let simulation = DescentSimulator::simulate(apogee, descent_mass, &configuration, &wind)?;

        Ok(RecoveryPlan {
            estimated_descent_time: simulation.total_time,
            estimated_drift: simulation.drift_distance,
            configuration,
            main_diameter,
            drogue_diameter,
            simulation,
        })
    }
}
