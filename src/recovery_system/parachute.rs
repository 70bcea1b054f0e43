use crate::constants::{
    CD_CROSSFORM, CD_ELLIPTICAL, CD_FLAT_ROUND, CD_HEMISPHERICAL, CD_TOROIDAL, GRAVITY,
};
use crate::errors::FlightError;

use std::f64::consts::PI;

/// Canopy families with their typical drag coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanopyType {
    FlatRound,
    Hemispherical,
    Elliptical,
    Toroidal,
    Crossform,
}

impl CanopyType {
    pub fn drag_coefficient(&self) -> f64 {
        match self {
            CanopyType::FlatRound => CD_FLAT_ROUND,
            CanopyType::Hemispherical => CD_HEMISPHERICAL,
            CanopyType::Elliptical => CD_ELLIPTICAL,
            CanopyType::Toroidal => CD_TOROIDAL,
            CanopyType::Crossform => CD_CROSSFORM,
        }
    }
}

/// A parachute reduced to what the descent integrator needs: an effective
/// reference diameter (spill hole subtracted) and a drag coefficient.
#[derive(Debug, Clone)]
pub struct ParachuteModel {
    pub diameter: f64,            // m, constructed canopy diameter
    pub spill_hole_diameter: f64, // m
    pub drag_coefficient: f64,
}

impl ParachuteModel {
    pub fn new(
        diameter: f64,
        spill_hole_diameter: f64,
        drag_coefficient: f64,
    ) -> Result<Self, FlightError> {
        if diameter <= 0.0 {
            return Err(FlightError::Validation(format!(
                "parachute diameter must be positive, got {} m",
                diameter
            )));
        }
        if spill_hole_diameter < 0.0 || spill_hole_diameter >= diameter {
            return Err(FlightError::Validation(format!(
                "spill hole diameter {} m must be within [0, canopy diameter)",
                spill_hole_diameter
            )));
        }
        if drag_coefficient <= 0.0 {
            return Err(FlightError::Validation(format!(
                "drag coefficient must be positive, got {}",
                drag_coefficient
            )));
        }
        Ok(ParachuteModel {
            diameter,
            spill_hole_diameter,
            drag_coefficient,
        })
    }

    pub fn with_canopy(
        diameter: f64,
        spill_hole_diameter: f64,
        canopy: CanopyType,
    ) -> Result<Self, FlightError> {
        Self::new(diameter, spill_hole_diameter, canopy.drag_coefficient())
    }

    /// Diameter of the circle with the same area as canopy minus spill hole.
    pub fn effective_diameter(&self) -> f64 {
        (self.diameter * self.diameter - self.spill_hole_diameter * self.spill_hole_diameter)
            .sqrt()
    }

    pub fn reference_area(&self) -> f64 {
        let effective = self.effective_diameter();
        PI / 4.0 * effective * effective
    }

    /// Steady descent rate under this canopy at the given air density.
    pub fn terminal_velocity(&self, mass: f64, air_density: f64) -> f64 {
        (2.0 * mass * GRAVITY / (air_density * self.drag_coefficient * self.reference_area()))
            .sqrt()
    }
}

/// Complete recovery setup for one flight, built once per simulation run.
#[derive(Debug, Clone)]
pub struct RecoveryConfiguration {
    pub drogue: Option<ParachuteModel>,
    pub main: ParachuteModel,
    pub main_deploy_altitude: f64,   // m AGL; unused for single deploy
    pub drogue_delay: f64,           // s after apogee
    pub backup_deploy_altitude: f64, // m AGL
}

impl RecoveryConfiguration {
    pub fn dual_deploy(
        drogue: ParachuteModel,
        main: ParachuteModel,
        main_deploy_altitude: f64,
        drogue_delay: f64,
        backup_deploy_altitude: f64,
    ) -> Result<Self, FlightError> {
        if main_deploy_altitude <= 0.0 {
            return Err(FlightError::Validation(format!(
                "main deployment altitude must be positive, got {} m",
                main_deploy_altitude
            )));
        }
        if drogue_delay < 0.0 {
            return Err(FlightError::Validation(
                "drogue delay cannot be negative".to_string(),
            ));
        }
        if backup_deploy_altitude < 0.0 || backup_deploy_altitude >= main_deploy_altitude {
            return Err(FlightError::Validation(format!(
                "backup altitude {} m must sit below the main deployment altitude",
                backup_deploy_altitude
            )));
        }
        Ok(RecoveryConfiguration {
            drogue: Some(drogue),
            main,
            main_deploy_altitude,
            drogue_delay,
            backup_deploy_altitude,
        })
    }

    /// Fallback for motor-eject and single-altimeter flights: the main is
    /// the only canopy and opens at apogee.
    pub fn single_deploy(main: ParachuteModel, backup_deploy_altitude: f64) -> Self {
        RecoveryConfiguration {
            drogue: None,
            main,
            main_deploy_altitude: 0.0,
            drogue_delay: 0.0,
            backup_deploy_altitude,
        }
    }

    pub fn is_dual_deploy(&self) -> bool {
        self.drogue.is_some()
    }
}
