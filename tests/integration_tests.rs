use flight_physics::{
    AscentEstimator, AscentRocket, BodyTube, DescentSimulator, DispersionAnalyzer,
    DispersionConfig, FinSet, MassComponent, MotorSummary, NoseCone, NoseShape, RecoveryPlanner,
    RocketGeometry, Severity, StabilityAnalyzer, StabilityStatus, WindProfile,
    GOOD_STABLE_CALIBERS, STANDARD_EJECTION_DELAYS,
};

// Helper: a 29mm mid-power sport rocket, geometry in mm.
fn create_test_geometry() -> RocketGeometry {
    RocketGeometry::new(
        NoseCone::new(NoseShape::Ogive, 100.0, 41.0),
        vec![BodyTube::new(300.0, 41.0, 100.0)],
        vec![],
        FinSet::new(3, 70.0, 30.0, 55.0, 20.0, 330.0, 20.5),
    )
}

// Helper: matching mass model in grams (airframe plus a loaded F motor).
fn create_test_masses() -> Vec<MassComponent> {
    vec![
        MassComponent::spanning(350.0, 0.0, 400.0),
        MassComponent::spanning(85.0, 330.0, 70.0),
    ]
}

fn create_test_airframe() -> AscentRocket {
    AscentRocket::new(0.35, 0.042, 0.55)
}

fn create_f_motor() -> MotorSummary {
    MotorSummary::new(72.0, 50.0, 1.5, 0.085, 0.037)
}

#[test]
fn test_stability_analysis_and_correction() {
    println!("INTEGRATION TEST: Stability Analysis and Correction");

    let geometry = create_test_geometry();

    // Overload the tail so the design goes marginal.
    let mut masses = create_test_masses();
    masses.push(MassComponent::spanning(120.0, 330.0, 70.0));

    let before = StabilityAnalyzer::calculate(&geometry, &masses).unwrap();
    println!(
        "Before correction: CP {:.1} mm, CG {:.1} mm, {:.2} calibers ({:?})",
        before.cp, before.cg, before.calibers, before.status
    );
    assert!(
        before.calibers < GOOD_STABLE_CALIBERS,
        "tail-heavy setup should fall below {} calibers, got {:.2}",
        GOOD_STABLE_CALIBERS,
        before.calibers
    );

    // Fix it with nose ballast and verify the fix lands on target.
    let ballast_position = 20.0;
    let ballast = StabilityAnalyzer::weight_for_stability(
        &geometry,
        &masses,
        GOOD_STABLE_CALIBERS,
        ballast_position,
    )
    .unwrap();
    println!("Adding {:.1} g of ballast at {:.0} mm", ballast, ballast_position);
    assert!(ballast > 0.0);

    masses.push(MassComponent::at(ballast, ballast_position));
    let after = StabilityAnalyzer::calculate(&geometry, &masses).unwrap();
    println!(
        "After correction: {:.2} calibers ({:?})",
        after.calibers, after.status
    );
    assert!((after.calibers - GOOD_STABLE_CALIBERS).abs() < 1e-6);
    assert_ne!(after.status, StabilityStatus::Unstable);

    println!("Stability Analysis and Correction Test: PASSED");
}

#[test]
fn test_fin_sizing_alternative() {
    println!("INTEGRATION TEST: Fin Sizing Alternative");

    let geometry = create_test_geometry();
    let mut masses = create_test_masses();
    masses.push(MassComponent::spanning(120.0, 330.0, 70.0));

    let scale =
        StabilityAnalyzer::fin_size_for_stability(&geometry, &masses, GOOD_STABLE_CALIBERS)
            .unwrap();
    println!("Fin scale factor: {:.3}", scale);
    assert!(scale > 1.0);

    let mut resized = geometry.clone();
    resized.fins = geometry.fins.scaled(scale);
    let result = StabilityAnalyzer::calculate(&resized, &masses).unwrap();
    println!("With scaled fins: {:.2} calibers", result.calibers);
    assert!((result.calibers - GOOD_STABLE_CALIBERS).abs() < 1e-3);

    println!("Fin Sizing Alternative Test: PASSED");
}

#[test]
fn test_motor_selection_sweep() {
    println!("INTEGRATION TEST: Motor Selection Sweep");

    let airframe = create_test_airframe();
    let mut previous_apogee = 0.0;

    // E through G class at the same average thrust.
    for impulse in [40.0, 72.0, 120.0, 160.0] {
        let motor = MotorSummary::new(impulse, 50.0, impulse / 50.0, 0.085, 0.037);
        let estimate = AscentEstimator::estimate(&airframe, &motor);
        println!(
            "{} class ({:.0} Ns): apogee {:.0} m, burnout {:.0} m/s, coast {:.1} s",
            motor.impulse_class().unwrap_or('?'),
            impulse,
            estimate.apogee,
            estimate.burnout_velocity,
            estimate.coast_time
        );
        assert!(
            estimate.apogee > previous_apogee,
            "more impulse should fly higher"
        );
        previous_apogee = estimate.apogee;

        let delay = AscentEstimator::estimate_optimal_delay(&airframe, &motor);
        assert!(STANDARD_EJECTION_DELAYS.contains(&delay.recommended));
        assert!(delay.optimal_delay > estimate.coast_time);
    }

    println!("Motor Selection Sweep Test: PASSED");
}

#[test]
fn test_full_flight_workflow() {
    println!("INTEGRATION TEST: Full Flight Workflow");

    // Stability check first, as on the launch pad.
    let stability =
        StabilityAnalyzer::calculate(&create_test_geometry(), &create_test_masses()).unwrap();
    println!(
        "Stability: {:.2} calibers ({:?})",
        stability.calibers, stability.status
    );
    assert_eq!(stability.severity, Severity::Safe);

    // Ascent estimate.
    let airframe = create_test_airframe();
    let motor = create_f_motor();
    let estimate = AscentEstimator::estimate(&airframe, &motor);
    println!(
        "Predicted apogee: {:.0} m at t+{:.1} s",
        estimate.apogee, estimate.apogee_time
    );
    assert!(estimate.apogee > 400.0, "F motor should clear 400 m");

    // Recovery plan for the burnout mass.
    let descent_mass = airframe.dry_mass + motor.total_mass - motor.propellant_mass;
    let plan = RecoveryPlanner::recommend(estimate.apogee, descent_mass).unwrap();
    println!(
        "Plan: main {:.2} m, drogue {:?}, descent {:.0} s, drift {:.0} m",
        plan.main_diameter, plan.drogue_diameter, plan.estimated_descent_time, plan.estimated_drift
    );
    assert!(
        plan.configuration.is_dual_deploy(),
        "a flight past 1000 ft should be planned dual-deploy"
    );

    // Fly the descent in calm air: no wind means no drift, and the
    // touchdown happens at the main canopy's terminal rate.
    let calm = DescentSimulator::simulate(
        estimate.apogee,
        descent_mass,
        &plan.configuration,
        &WindProfile::calm(),
    )
    .unwrap();
    println!(
        "Calm descent: {:.0} s, landing {:.1} m/s, drift {:.1} m",
        calm.total_time, calm.landing_velocity, calm.drift_distance
    );
    assert!(calm.complete);
    assert!(calm.drift_distance < 1e-9);

    let safety = DescentSimulator::assess_safety(&calm, &plan.configuration);
    println!("Safety verdict: {:?}", safety.verdict);
    for finding in &safety.findings {
        println!("  [{:?}] {}", finding.severity, finding.message);
    }
    assert!(safety.is_safe());

    println!("Full Flight Workflow Test: PASSED");
}

#[test]
fn test_wind_drift_behavior() {
    println!("INTEGRATION TEST: Wind Drift Behavior");

    let airframe = create_test_airframe();
    let motor = create_f_motor();
    let estimate = AscentEstimator::estimate(&airframe, &motor);
    let descent_mass = airframe.dry_mass + motor.total_mass - motor.propellant_mass;
    let plan = RecoveryPlanner::recommend(estimate.apogee, descent_mass).unwrap();

    let mut previous_drift = 0.0;
    for speed in [2.0, 5.0, 9.0] {
        let wind = WindProfile::new(speed, 270.0, 1.0);
        let result =
            DescentSimulator::simulate(estimate.apogee, descent_mass, &plan.configuration, &wind)
                .unwrap();
        println!(
            "{:.0} m/s wind: drift {:.0} m bearing {:.0} deg",
            speed,
            result.drift_distance,
            result.drift.bearing()
        );
        assert!(result.drift_distance > previous_drift);
        previous_drift = result.drift_distance;

        // Landing bearing stays near the wind direction, allowing for the
        // direction change aloft.
        let bearing = result.drift.bearing();
        assert!(
            (bearing - 270.0).abs() < 30.0,
            "drift bearing {:.0} should track the 270 deg wind",
            bearing
        );
    }

    println!("Wind Drift Behavior Test: PASSED");
}

#[test]
fn test_dispersion_analysis() {
    println!("INTEGRATION TEST: Dispersion Analysis");

    let airframe = create_test_airframe();
    let motor = create_f_motor();
    let estimate = AscentEstimator::estimate(&airframe, &motor);
    let descent_mass = airframe.dry_mass + motor.total_mass - motor.propellant_mass;
    let plan = RecoveryPlanner::recommend(estimate.apogee, descent_mass).unwrap();

    let wind = WindProfile::new(5.0, 180.0, 1.0);
    let spread = DispersionConfig::new(50, 1.5, 20.0, 0.01);

    let first = DispersionAnalyzer::run(
        estimate.apogee,
        descent_mass,
        &plan.configuration,
        &wind,
        &spread,
        99,
    )
    .unwrap();
    let second = DispersionAnalyzer::run(
        estimate.apogee,
        descent_mass,
        &plan.configuration,
        &wind,
        &spread,
        99,
    )
    .unwrap();

    println!(
        "{} runs: mean drift {:.0} m, max {:.0} m, incomplete {}",
        spread.runs, first.mean_drift, first.max_drift, first.incomplete_runs
    );
    assert_eq!(first.landing_points.len(), 50);
    assert_eq!(first.incomplete_runs, 0);
    assert!(first.max_drift >= first.mean_drift);

    // Same seed, same cloud.
    assert_eq!(first.mean_drift, second.mean_drift);
    assert_eq!(first.max_drift, second.max_drift);

    println!("Dispersion Analysis Test: PASSED");
}

// Main integration test that runs all scenarios
#[test]
fn test_full_flight_physics_integration() {
    println!("\n====== RUNNING COMPLETE FLIGHT PHYSICS INTEGRATION TEST SUITE ======\n");

    test_stability_analysis_and_correction();
    println!("\n--------------------------------------------------------------\n");

    test_fin_sizing_alternative();
    println!("\n--------------------------------------------------------------\n");

    test_motor_selection_sweep();
    println!("\n--------------------------------------------------------------\n");

    test_full_flight_workflow();
    println!("\n--------------------------------------------------------------\n");

    test_wind_drift_behavior();
    println!("\n--------------------------------------------------------------\n");

    test_dispersion_analysis();

    println!("\n====== ALL FLIGHT PHYSICS INTEGRATION TESTS PASSED ======\n");
}
