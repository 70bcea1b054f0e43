use crate::constants::{
    FIN_SCALE_MAX, FIN_SCALE_MAX_ITERATIONS, FIN_SCALE_TOLERANCE, GOOD_STABLE_CALIBERS,
    MAX_STABLE_CALIBERS, MIN_STABLE_CALIBERS,
};
use crate::errors::FlightError;

use super::aero::{
    body_tube_contribution, fin_set_contribution, nose_contribution, transition_contribution,
};
use super::geometry::RocketGeometry;

/// One entry in the rocket's mass model: a mass and the axial station of
/// its own center of gravity, in mm from the nose tip.
#[derive(Debug, Clone)]
pub struct MassComponent {
    pub mass: f64, // grams
    pub cg: f64,   // mm from nose tip
}

impl MassComponent {
    /// Point mass with an explicit CG station.
    pub fn at(mass: f64, cg: f64) -> Self {
        MassComponent { mass, cg }
    }

    /// Component spanning `length` from `position`; without an explicit CG
    /// its balance point is assumed at the midpoint.
    pub fn spanning(mass: f64, position: f64, length: f64) -> Self {
        MassComponent {
            mass,
            cg: position + length / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilityStatus {
    Unstable,
    MarginallyStable,
    Stable,
    OverStable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Warning,
    Caution,
    Safe,
}

/// Per-component line of the CNα/CP breakdown.
#[derive(Debug, Clone)]
pub struct ComponentContribution {
    pub label: String,
    pub cn_alpha: f64,
    pub cp: f64,
}

/// Full stability picture of one design. Recomputed from scratch on every
/// call, never incrementally updated.
#[derive(Debug, Clone)]
pub struct StabilityResult {
    pub cp: f64,       // mm from nose tip
    pub cg: f64,       // mm from nose tip
    pub margin: f64,   // mm, cp - cg
    pub calibers: f64, // margin / reference diameter
    pub status: StabilityStatus,
    pub severity: Severity,
    pub total_cn_alpha: f64,
    pub breakdown: Vec<ComponentContribution>,
}

pub struct StabilityAnalyzer;

impl StabilityAnalyzer {
    /// Runs the full Barrowman aggregation over the geometry and the
    /// mass-weighted CG over the mass model.
    pub fn calculate(
        geometry: &RocketGeometry,
        masses: &[MassComponent],
    ) -> Result<StabilityResult, FlightError> {
        geometry.validate()?;

        let total_mass: f64 = masses.iter().map(|m| m.mass).sum();
        if total_mass <= 0.0 {
            return Err(FlightError::Validation(format!(
                "total mass must be positive, got {} g",
                total_mass
            )));
        }

        let reference_diameter = geometry.reference_diameter();
        let mut breakdown = Vec::new();

        let nose = nose_contribution(
            geometry.nose.shape,
            geometry.nose.length,
            geometry.nose.diameter,
        );
        breakdown.push(ComponentContribution {
            label: "nose".to_string(),
            cn_alpha: nose.cn_alpha,
            cp: nose.cp,
        });

        for (i, _tube) in geometry.body_tubes.iter().enumerate() {
            let tube = body_tube_contribution();
            breakdown.push(ComponentContribution {
                label: format!("body tube {}", i + 1),
                cn_alpha: tube.cn_alpha,
                cp: tube.cp,
            });
        }

        for (i, transition) in geometry.transitions.iter().enumerate() {
            let contribution = transition_contribution(transition, reference_diameter);
            breakdown.push(ComponentContribution {
                label: format!("transition {}", i + 1),
                cn_alpha: contribution.cn_alpha,
                cp: contribution.cp,
            });
        }

        let fins = fin_set_contribution(&geometry.fins, reference_diameter);
        breakdown.push(ComponentContribution {
            label: "fins".to_string(),
            cn_alpha: fins.cn_alpha,
            cp: fins.cp,
        });

        let total_cn_alpha: f64 = breakdown.iter().map(|c| c.cn_alpha).sum();
        if total_cn_alpha.abs() < 1e-9 {
            return Err(FlightError::DegenerateResult(
                "total CNα is zero, center of pressure is undefined".to_string(),
            ));
        }

        let cp = breakdown
            .iter()
            .map(|c| c.cn_alpha * c.cp)
            .sum::<f64>()
            / total_cn_alpha;
        let cg = masses.iter().map(|m| m.mass * m.cg).sum::<f64>() / total_mass;

        let margin = cp - cg;
        let calibers = margin / reference_diameter;
        let (status, severity) = Self::assess_stability(calibers);

        Ok(StabilityResult {
            cp,
            cg,
            margin,
            calibers,
            status,
            severity,
            total_cn_alpha,
            breakdown,
        })
    }

    /// Pure classification of a caliber rating against the named thresholds.
    pub fn assess_stability(calibers: f64) -> (StabilityStatus, Severity) {
        if calibers < MIN_STABLE_CALIBERS {
            (StabilityStatus::Unstable, Severity::Danger)
        } else if calibers < GOOD_STABLE_CALIBERS {
            (StabilityStatus::MarginallyStable, Severity::Warning)
        } else if calibers <= MAX_STABLE_CALIBERS {
            (StabilityStatus::Stable, Severity::Safe)
        } else {
            (StabilityStatus::OverStable, Severity::Caution)
        }
    }

    /// Nose ballast needed to reach `target_calibers`, solved analytically
    /// from the mass-weighted-average CG. Returns 0 when the design is
    /// already at or above the target; never recommends removing mass.
    pub fn weight_for_stability(
        geometry: &RocketGeometry,
        masses: &[MassComponent],
        target_calibers: f64,
        ballast_position: f64,
    ) -> Result<f64, FlightError> {
        let result = Self::calculate(geometry, masses)?;
        if result.calibers >= target_calibers {
            return Ok(0.0);
        }

        let reference_diameter = geometry.reference_diameter();
        let target_cg = result.cp - target_calibers * reference_diameter;
        if target_cg <= ballast_position {
            return Err(FlightError::DegenerateResult(format!(
                "ballast at {} mm cannot pull the CG forward to {} mm",
                ballast_position, target_cg
            )));
        }

        let total_mass: f64 = masses.iter().map(|m| m.mass).sum();
        // (M·cg + m·x) / (M + m) = target  =>  m = M (cg - target) / (target - x)
        let added = total_mass * (result.cg - target_cg) / (target_cg - ballast_position);
        Ok(added)
    }

    /// Uniform fin scale factor that reaches `target_calibers`. Scaling the
    /// planform changes both the fin CNα and the CP weighting, so this is a
    /// bounded bisection on [1, FIN_SCALE_MAX] rather than a closed form.
    pub fn fin_size_for_stability(
        geometry: &RocketGeometry,
        masses: &[MassComponent],
        target_calibers: f64,
    ) -> Result<f64, FlightError> {
        let base = Self::calculate(geometry, masses)?;
        if base.calibers >= target_calibers {
            return Ok(1.0);
        }

        let calibers_at = |scale: f64| -> Result<f64, FlightError> {
            let mut scaled = geometry.clone();
            scaled.fins = geometry.fins.scaled(scale);
            Ok(Self::calculate(&scaled, masses)?.calibers)
        };

        let mut low = 1.0;
        let mut high = FIN_SCALE_MAX;
        if calibers_at(high)? < target_calibers {
            return Err(FlightError::NonConvergence(format!(
                "target of {} calibers unreachable within a {}x fin scale",
                target_calibers, FIN_SCALE_MAX
            )));
        }

        for _ in 0..FIN_SCALE_MAX_ITERATIONS {
            let mid = (low + high) / 2.0;
            let calibers = calibers_at(mid)?;
            if (calibers - target_calibers).abs() < FIN_SCALE_TOLERANCE {
                return Ok(mid);
            }
            if calibers < target_calibers {
                low = mid;
            } else {
                high = mid;
            }
        }
        // The bracket shrinks by half each pass; after the cap the midpoint
        // is the best available answer within tolerance of the bracket.
        Ok((low + high) / 2.0)
    }
}
