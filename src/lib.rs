pub mod ascent_system;
pub mod constants;
pub mod errors;
pub mod recovery_system;
pub mod stability_system;
pub mod utils;

pub use constants::*;
pub use errors::FlightError;

// Re-export commonly used items from stability_system
pub use stability_system::analyzer::{
    ComponentContribution, MassComponent, Severity, StabilityAnalyzer, StabilityResult,
    StabilityStatus,
};
pub use stability_system::geometry::{
    BodyTube, FinSet, NoseCone, NoseShape, RocketGeometry, Transition,
};

// Re-export commonly used items from ascent_system
pub use ascent_system::quicksim::{
    AscentEstimate, AscentEstimator, AscentRocket, DelayRecommendation, MotorSummary,
};

// Re-export commonly used items from recovery_system
pub use recovery_system::descent::{
    AltimeterSettings, DescentPhase, DescentPhaseResult, DescentSimulator, SafetyAssessment,
    SafetyFinding, SimulationResult, TrajectorySample,
};
pub use recovery_system::dispersion::{DispersionAnalyzer, DispersionConfig, DispersionResult};
pub use recovery_system::parachute::{CanopyType, ParachuteModel, RecoveryConfiguration};
pub use recovery_system::planner::{RecoveryPlan, RecoveryPlanner};
pub use recovery_system::wind::WindProfile;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
