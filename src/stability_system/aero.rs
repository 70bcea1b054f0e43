//! Barrowman component aerodynamics: linearized normal-force coefficient
//! derivatives (CNα) and center-of-pressure locations for subsonic flow at
//! low angle of attack. Each component kind is a pure function so the
//! formulas stay independently testable.

use std::f64::consts::PI;

use super::geometry::{FinSet, NoseShape, Transition};

/// One component's share of the normal force: CNα and the axial station
/// (mm from the nose tip) where it acts.
#[derive(Debug, Clone, Copy)]
pub struct AeroContribution {
    pub cn_alpha: f64,
    pub cp: f64,
}

/// Every slender nose contributes CNα = 2.0 regardless of profile.
pub const NOSE_CN_ALPHA: f64 = 2.0;

/// CP of a nose cone via the Barrowman volume identity
/// `cp = length - volume / (π R²)`, evaluated per profile family.
pub fn nose_contribution(shape: NoseShape, length: f64, diameter: f64) -> AeroContribution {
    let radius = diameter / 2.0;
    let cp = match shape {
        NoseShape::Conical => (2.0 / 3.0) * length,
        NoseShape::Ogive => ogive_cp(length, radius),
        // Half ellipsoid of revolution: V = (2/3)πR²L.
        NoseShape::Elliptical => length / 3.0,
        NoseShape::VonKarman => von_karman_cp(length, radius),
        // Full parabolic series: V = (8/15)πR²L.
        NoseShape::Parabolic => (7.0 / 15.0) * length,
    };
    AeroContribution {
        cn_alpha: NOSE_CN_ALPHA,
        cp,
    }
}

/// Tangent ogive CP from the exact volume of the tangent-circle profile.
/// Lands near 0.466·L for the usual 3:1 fineness ratio.
fn ogive_cp(length: f64, radius: f64) -> f64 {
    if length <= radius {
        // The tangent circle degenerates below hemispherical fineness;
        // the handbook fraction is the sensible limit there.
        return 0.466 * length;
    }
    let rho = (radius * radius + length * length) / (2.0 * radius);
    let volume = PI
        * (rho * rho * length - length.powi(3) / 3.0
            - rho * rho * (rho - radius) * (length / rho).asin());
    length - volume / (PI * radius * radius)
}

/// Von Kármán (C = 0 Haack, LD-Haack) CP by Simpson integration of the
/// profile's volume distribution. Converges to L/2, strictly between the
/// elliptical (L/3) and conical (2L/3) stations.
fn von_karman_cp(length: f64, radius: f64) -> f64 {
    let steps = 200; // even
    let h = length / steps as f64;
    let section_area = |x: f64| {
        let theta = (1.0 - 2.0 * x / length).clamp(-1.0, 1.0).acos();
        // Haack series at C = 0: y² = R²/π · (θ - sin(2θ)/2)
        radius * radius / PI * (theta - (2.0 * theta).sin() / 2.0).max(0.0)
    };
    let mut sum = section_area(0.0) + section_area(length);
    for i in 1..steps {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * section_area(i as f64 * h);
    }
    let volume = PI * sum * h / 3.0;
    length - volume / (PI * radius * radius)
}

/// A cylinder generates no normal force in the linearized model.
pub fn body_tube_contribution() -> AeroContribution {
    AeroContribution {
        cn_alpha: 0.0,
        cp: 0.0,
    }
}

/// Frustum between two diameters. The sign of CNα follows the diameter
/// change: shoulders positive, boat-tails negative.
pub fn transition_contribution(transition: &Transition, reference_diameter: f64) -> AeroContribution {
    let fore = transition.fore_diameter / reference_diameter;
    let aft = transition.aft_diameter / reference_diameter;
    let cn_alpha = 2.0 * (aft * aft - fore * fore);

    let ratio = transition.fore_diameter / transition.aft_diameter;
    let centroid = if (ratio - 1.0).abs() < 1e-12 {
        transition.length / 2.0
    } else {
        (transition.length / 3.0) * (1.0 + (1.0 - ratio) / (1.0 - ratio * ratio))
    };
    AeroContribution {
        cn_alpha,
        cp: transition.position + centroid,
    }
}

/// Multi-fin Barrowman formula for a trapezoidal fin set, including the
/// body-interference factor for fins mounted on a cylinder.
pub fn fin_set_contribution(fins: &FinSet, reference_diameter: f64) -> AeroContribution {
    let span = fins.semi_span;
    let (cr, ct) = (fins.root_chord, fins.tip_chord);
    let count = fins.count as f64;

    // Length of the mid-chord line, accounting for sweep.
    let mid_chord_offset = fins.sweep + ct / 2.0 - cr / 2.0;
    let mid_chord_line = (span * span + mid_chord_offset * mid_chord_offset).sqrt();

    let isolated = 4.0 * count * (span / reference_diameter).powi(2)
        / (1.0 + (1.0 + (2.0 * mid_chord_line / (cr + ct)).powi(2)).sqrt());
    let interference = 1.0 + fins.body_radius / (span + fins.body_radius);
    let cn_alpha = interference * isolated;

    // Sweep moves the CP aft along the chord-weighted lever arm.
    let cp = fins.position
        + (fins.sweep / 3.0) * (cr + 2.0 * ct) / (cr + ct)
        + (cr + ct - cr * ct / (cr + ct)) / 6.0;

    AeroContribution { cn_alpha, cp }
}
