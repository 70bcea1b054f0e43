// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 8_500.0; // m

// Unit Conversions
pub const M_PER_FT: f64 = 0.3048;
pub const MM_PER_M: f64 = 1_000.0;
pub const KG_PER_G: f64 = 0.001;

// Stability Thresholds (calibers of static margin)
pub const MIN_STABLE_CALIBERS: f64 = 1.0;
pub const GOOD_STABLE_CALIBERS: f64 = 1.5;
pub const MAX_STABLE_CALIBERS: f64 = 2.5;

// Inverse-Design Solver Limits
pub const FIN_SCALE_MAX: f64 = 10.0;
pub const FIN_SCALE_MAX_ITERATIONS: usize = 64;
pub const FIN_SCALE_TOLERANCE: f64 = 1e-4; // calibers

// Ascent Estimation Parameters
pub const BOOST_DRAG_CORRECTION: f64 = 0.95; // empirical boost-phase loss factor, kept within [0.5, 1.0]
pub const EJECTION_DELAY_SAFETY_MARGIN: f64 = 0.5; // s
pub const STANDARD_EJECTION_DELAYS: [f64; 9] = [3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0, 12.0, 14.0]; // s
pub const DELAY_CANDIDATE_WINDOW: f64 = 3.0; // s

// Motor impulse classes: upper total-impulse bound per class letter (N·s)
pub const IMPULSE_CLASS_LIMITS: [(char, f64); 15] = [
    ('A', 2.5),
    ('B', 5.0),
    ('C', 10.0),
    ('D', 20.0),
    ('E', 40.0),
    ('F', 80.0),
    ('G', 160.0),
    ('H', 320.0),
    ('I', 640.0),
    ('J', 1_280.0),
    ('K', 2_560.0),
    ('L', 5_120.0),
    ('M', 10_240.0),
    ('N', 20_480.0),
    ('O', 40_960.0),
];

// Descent Integration Parameters
pub const DESCENT_TIME_STEP: f64 = 0.1; // s
pub const MAX_DESCENT_TIME: f64 = 600.0; // s, runaway guard
pub const VELOCITY_RELAXATION: f64 = 0.3; // per-step fraction toward terminal velocity

// Recovery Safety Thresholds
pub const MAX_LANDING_VELOCITY_FPS: f64 = 25.0;
pub const WARN_LANDING_VELOCITY_FPS: f64 = 20.0;
pub const MAX_LANDING_ENERGY_J: f64 = 75.0;
pub const MIN_MAIN_DEPLOY_ALTITUDE_FT: f64 = 300.0;
pub const WARN_MAIN_DEPLOY_ALTITUDE_FT: f64 = 400.0;
pub const MIN_DROGUE_RATE_FPS: f64 = 40.0;
pub const MAX_DROGUE_RATE_FPS: f64 = 100.0;
pub const DUAL_DEPLOY_APOGEE_FT: f64 = 1_000.0;

// Parachute Drag Coefficients by canopy type
pub const CD_FLAT_ROUND: f64 = 0.75;
pub const CD_HEMISPHERICAL: f64 = 0.62;
pub const CD_ELLIPTICAL: f64 = 1.5;
pub const CD_TOROIDAL: f64 = 2.2;
pub const CD_CROSSFORM: f64 = 0.8;

// Wind Model
pub const WIND_REFERENCE_HEIGHT: f64 = 10.0; // m
pub const WIND_SHEAR_EXPONENT: f64 = 1.0 / 7.0;
pub const EKMAN_MAX_VEER_DEG: f64 = 25.0;
pub const EKMAN_LAYER_DEPTH: f64 = 800.0; // m

// Recovery Planner
pub const MAIN_TARGET_DESCENT_RATE: f64 = 5.0; // m/s
pub const DROGUE_TARGET_DESCENT_RATE: f64 = 22.0; // m/s, ~72 ft/s
pub const MAIN_DEPLOY_APOGEE_FRACTION: f64 = 0.25;
pub const MIN_RECOMMENDED_MAIN_DEPLOY_FT: f64 = 500.0;
pub const MAX_RECOMMENDED_MAIN_DEPLOY_FT: f64 = 800.0;
pub const RECOMMENDED_BACKUP_DEPLOY_FT: f64 = 300.0;
pub const PLANNER_AVERAGE_WIND_SPEED: f64 = 5.0; // m/s, order-of-magnitude drift only
