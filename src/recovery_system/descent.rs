//! Fixed-step descent simulation from apogee to touchdown.
//!
//! The integrator relaxes the descent rate toward the instantaneous
//! terminal velocity by a fixed fraction per step instead of solving the
//! exact exponential approach. Downstream safety thresholds are calibrated
//! against that exact behavior, so the relaxation constant must not be
//! traded for an analytically exact integrator.

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_SCALE_HEIGHT, DESCENT_TIME_STEP, GRAVITY, M_PER_FT,
    MAX_DESCENT_TIME, MAX_DROGUE_RATE_FPS, MAX_LANDING_ENERGY_J, MAX_LANDING_VELOCITY_FPS,
    MIN_DROGUE_RATE_FPS, MIN_MAIN_DEPLOY_ALTITUDE_FT, VELOCITY_RELAXATION,
    WARN_LANDING_VELOCITY_FPS, WARN_MAIN_DEPLOY_ALTITUDE_FT,
};
use crate::errors::FlightError;
use crate::stability_system::analyzer::Severity;
use crate::utils::vector2d::Vector2D;

use super::parachute::{ParachuteModel, RecoveryConfiguration};
use super::wind::WindProfile;

/// Exponential scale-height atmosphere.
pub fn air_density(altitude: f64) -> f64 {
    AIR_DENSITY_SEA_LEVEL * (-altitude.max(0.0) / ATMOSPHERE_SCALE_HEIGHT).exp()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescentPhase {
    Apogee,
    DrogueDelay,
    DrogueDescent,
    MainDeploy,
    MainDescent,
    Landing,
}

/// One trajectory point, captured at whole-second boundaries.
#[derive(Debug, Clone)]
pub struct TrajectorySample {
    pub time: f64,     // s since apogee
    pub altitude: f64, // m AGL
    pub descent_rate: f64,
    pub drift: Vector2D,
    pub phase: DescentPhase,
}

#[derive(Debug, Clone)]
pub struct DescentPhaseResult {
    pub phase: DescentPhase,
    pub duration: f64,
    pub start_altitude: f64,
    pub end_altitude: f64,
    pub average_rate: f64, // m/s
    pub drift: Vector2D,   // m accumulated during this phase
}

#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub phases: Vec<DescentPhaseResult>,
    pub samples: Vec<TrajectorySample>,
    pub total_time: f64,
    pub landing_velocity: f64, // m/s
    pub kinetic_energy: f64,   // J at touchdown
    pub drift: Vector2D,
    pub drift_distance: f64,
    /// False when the runaway-time guard fired before touchdown; the other
    /// fields then describe the state at cutoff, not a landing.
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct SafetyFinding {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SafetyAssessment {
    pub findings: Vec<SafetyFinding>,
    pub verdict: Severity,
}

impl SafetyAssessment {
    pub fn is_safe(&self) -> bool {
        self.verdict != Severity::Danger
    }
}

/// Recommended electronic-deployment settings, derived without simulation.
#[derive(Debug, Clone)]
pub struct AltimeterSettings {
    pub drogue_at_apogee: bool,
    pub drogue_delay: f64,
    /// None means the main fires at apogee (single-deploy flight).
    pub main_deploy_altitude: Option<f64>,
    pub backup_deploy_altitude: f64,
}

struct DescentState {
    time: f64,
    altitude: f64,
    velocity: f64, // m/s, positive down
    drift: Vector2D,
    mass: f64,
    samples: Vec<TrajectorySample>,
    next_sample_time: f64,
}

impl DescentState {
    fn new(apogee: f64, mass: f64) -> Self {
        let mut state = DescentState {
            time: 0.0,
            altitude: apogee,
            velocity: 0.0,
            drift: Vector2D::zero(),
            mass,
            samples: Vec::new(),
            next_sample_time: 0.0,
        };
        state.record_samples(DescentPhase::Apogee);
        state
    }

    fn step_drift(&mut self, wind: &WindProfile) {
        self.drift += wind.vector_at(self.altitude.max(0.0)) * DESCENT_TIME_STEP;
    }

    fn record_samples(&mut self, phase: DescentPhase) {
        while self.time + 1e-9 >= self.next_sample_time {
            self.samples.push(TrajectorySample {
                time: self.time,
                altitude: self.altitude.max(0.0),
                descent_rate: self.velocity,
                drift: self.drift,
                phase,
            });
            self.next_sample_time += 1.0;
        }
    }
}

pub struct DescentSimulator;

impl DescentSimulator {
    /// Integrates the descent from `apogee` down to touchdown, walking the
    /// phase machine Apogee → (DrogueDelay) → DrogueDescent → MainDeploy →
    /// MainDescent → Landing. Single-deploy configurations go straight to
    /// the main canopy at apogee.
    pub fn simulate(
        apogee: f64,
        descent_mass: f64,
        config: &RecoveryConfiguration,
        wind: &WindProfile,
    ) -> Result<SimulationResult, FlightError> {
        if apogee <= 0.0 {
            return Err(FlightError::Validation(format!(
                "apogee must be positive, got {} m",
                apogee
            )));
        }
        if descent_mass <= 0.0 {
            return Err(FlightError::Validation(format!(
                "descent mass must be positive, got {} kg",
                descent_mass
            )));
        }
        if config.is_dual_deploy() && config.main_deploy_altitude >= apogee {
            return Err(FlightError::Validation(format!(
                "main deployment altitude {} m is not below the apogee of {} m",
                config.main_deploy_altitude, apogee
            )));
        }

        let mut state = DescentState::new(apogee, descent_mass);
        let mut phases = Vec::new();
        let mut phase = DescentPhase::Apogee;

        while phase != DescentPhase::Landing && state.time < MAX_DESCENT_TIME {
            match phase {
                DescentPhase::Apogee => {
                    phase = if config.is_dual_deploy() {
                        if config.drogue_delay > 0.0 {
                            DescentPhase::DrogueDelay
                        } else {
                            DescentPhase::DrogueDescent
                        }
                    } else {
                        DescentPhase::MainDescent
                    };
                }
                DescentPhase::DrogueDelay => {
                    phases.push(Self::integrate_freefall(
                        &mut state,
                        config.drogue_delay,
                        wind,
                    ));
                    phase = DescentPhase::DrogueDescent;
                }
                DescentPhase::DrogueDescent => {
                    if let Some(drogue) = config.drogue.as_ref() {
                        phases.push(Self::integrate_canopy(
                            &mut state,
                            DescentPhase::DrogueDescent,
                            drogue,
                            config.main_deploy_altitude,
                            wind,
                        ));
                    }
                    phase = DescentPhase::MainDeploy;
                }
                DescentPhase::MainDeploy => {
                    // Instantaneous event, no time advances.
                    phase = DescentPhase::MainDescent;
                }
                DescentPhase::MainDescent => {
                    phases.push(Self::integrate_canopy(
                        &mut state,
                        DescentPhase::MainDescent,
                        &config.main,
                        0.0,
                        wind,
                    ));
                    phase = DescentPhase::Landing;
                }
                DescentPhase::Landing => {}
            }
        }

        let complete = state.altitude <= 0.0;
        let landing_velocity = state.velocity;
        Ok(SimulationResult {
            phases,
            samples: state.samples,
            total_time: state.time,
            landing_velocity,
            kinetic_energy: 0.5 * descent_mass * landing_velocity * landing_velocity,
            drift: state.drift,
            drift_distance: state.drift.magnitude(),
            complete,
        })
    }

    /// Ballistic fall between apogee and drogue deployment.
    fn integrate_freefall(
        state: &mut DescentState,
        delay: f64,
        wind: &WindProfile,
    ) -> DescentPhaseResult {
        let start_time = state.time;
        let start_altitude = state.altitude;
        let start_drift = state.drift;

        while state.time - start_time < delay
            && state.altitude > 0.0
            && state.time < MAX_DESCENT_TIME
        {
            state.velocity += GRAVITY * DESCENT_TIME_STEP;
            state.altitude -= state.velocity * DESCENT_TIME_STEP;
            state.step_drift(wind);
            state.time += DESCENT_TIME_STEP;
            state.record_samples(DescentPhase::DrogueDelay);
        }

        Self::phase_result(state, DescentPhase::DrogueDelay, start_time, start_altitude, start_drift)
    }

    /// Descent under one canopy until the floor altitude is crossed.
    fn integrate_canopy(
        state: &mut DescentState,
        phase: DescentPhase,
        chute: &ParachuteModel,
        floor_altitude: f64,
        wind: &WindProfile,
    ) -> DescentPhaseResult {
        let start_time = state.time;
        let start_altitude = state.altitude;
        let start_drift = state.drift;

        while state.altitude > floor_altitude && state.time < MAX_DESCENT_TIME {
            let density = air_density(state.altitude);
            let terminal = chute.terminal_velocity(state.mass, density);
            // Fixed-fraction relaxation toward terminal velocity; kept
            // verbatim for output parity with calibrated thresholds.
            state.velocity += (terminal - state.velocity) * VELOCITY_RELAXATION;
            state.altitude -= state.velocity * DESCENT_TIME_STEP;
            state.step_drift(wind);
            state.time += DESCENT_TIME_STEP;
            state.record_samples(phase);
        }

        Self::phase_result(state, phase, start_time, start_altitude, start_drift)
    }

    fn phase_result(
        state: &DescentState,
        phase: DescentPhase,
        start_time: f64,
        start_altitude: f64,
        start_drift: Vector2D,
    ) -> DescentPhaseResult {
        let duration = state.time - start_time;
        let end_altitude = state.altitude.max(0.0);
        let average_rate = if duration > 0.0 {
            (start_altitude - end_altitude) / duration
        } else {
            0.0
        };
        DescentPhaseResult {
            phase,
            duration,
            start_altitude,
            end_altitude,
            average_rate,
            drift: state.drift - start_drift,
        }
    }

    /// Rule-based classification of a finished descent against the hobby
    /// safety thresholds. Drogue-rate findings are advisory only.
    pub fn assess_safety(
        result: &SimulationResult,
        config: &RecoveryConfiguration,
    ) -> SafetyAssessment {
        let mut findings = Vec::new();

        if !result.complete {
            findings.push(SafetyFinding {
                severity: Severity::Danger,
                message: format!(
                    "descent did not reach the ground within {} s; inputs look non-convergent",
                    MAX_DESCENT_TIME
                ),
            });
        }

        let landing_fps = result.landing_velocity / M_PER_FT;
        if landing_fps > MAX_LANDING_VELOCITY_FPS {
            findings.push(SafetyFinding {
                severity: Severity::Danger,
                message: format!(
                    "landing velocity {:.1} ft/s exceeds the {:.0} ft/s limit",
                    landing_fps, MAX_LANDING_VELOCITY_FPS
                ),
            });
        } else if landing_fps > WARN_LANDING_VELOCITY_FPS {
            findings.push(SafetyFinding {
                severity: Severity::Warning,
                message: format!(
                    "landing velocity {:.1} ft/s is above the {:.0} ft/s comfort zone",
                    landing_fps, WARN_LANDING_VELOCITY_FPS
                ),
            });
        }

        if result.kinetic_energy > MAX_LANDING_ENERGY_J {
            findings.push(SafetyFinding {
                severity: Severity::Danger,
                message: format!(
                    "landing kinetic energy {:.0} J exceeds the {:.0} J limit",
                    result.kinetic_energy, MAX_LANDING_ENERGY_J
                ),
            });
        }

        if config.is_dual_deploy() {
            let deploy_ft = config.main_deploy_altitude / M_PER_FT;
            if deploy_ft < MIN_MAIN_DEPLOY_ALTITUDE_FT {
                findings.push(SafetyFinding {
                    severity: Severity::Danger,
                    message: format!(
                        "main deployment at {:.0} ft leaves no margin below {:.0} ft",
                        deploy_ft, MIN_MAIN_DEPLOY_ALTITUDE_FT
                    ),
                });
            } else if deploy_ft < WARN_MAIN_DEPLOY_ALTITUDE_FT {
                findings.push(SafetyFinding {
                    severity: Severity::Warning,
                    message: format!(
                        "main deployment at {:.0} ft is below the recommended {:.0} ft",
                        deploy_ft, WARN_MAIN_DEPLOY_ALTITUDE_FT
                    ),
                });
            }

            if let Some(drogue_phase) = result
                .phases
                .iter()
                .find(|p| p.phase == DescentPhase::DrogueDescent)
            {
                let rate_fps = drogue_phase.average_rate / M_PER_FT;
                if rate_fps < MIN_DROGUE_RATE_FPS {
                    findings.push(SafetyFinding {
                        severity: Severity::Caution,
                        message: format!(
                            "drogue descent of {:.0} ft/s is slow; expect extra drift",
                            rate_fps
                        ),
                    });
                } else if rate_fps > MAX_DROGUE_RATE_FPS {
                    findings.push(SafetyFinding {
                        severity: Severity::Caution,
                        message: format!(
                            "drogue descent of {:.0} ft/s is fast; main deployment will be harsh",
                            rate_fps
                        ),
                    });
                }
            }
        }

        let verdict = findings
            .iter()
            .map(|f| f.severity)
            .max_by_key(|s| match s {
                Severity::Safe => 0,
                Severity::Caution => 1,
                Severity::Warning => 2,
                Severity::Danger => 3,
            })
            .unwrap_or(Severity::Safe);

        SafetyAssessment { findings, verdict }
    }

    /// Structured summary of the deployment plan for programming an
    /// altimeter; no simulation involved.
    pub fn altimeter_settings(config: &RecoveryConfiguration) -> AltimeterSettings {
        AltimeterSettings {
            drogue_at_apogee: config.is_dual_deploy(),
            drogue_delay: config.drogue_delay,
            main_deploy_altitude: config
                .is_dual_deploy()
                .then_some(config.main_deploy_altitude),
            backup_deploy_altitude: config.backup_deploy_altitude,
        }
    }
}
