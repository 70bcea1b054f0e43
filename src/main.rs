use flight_physics::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 29mm mid-power sport rocket, dimensions in mm.
    let geometry = RocketGeometry::new(
        NoseCone::new(NoseShape::Ogive, 100.0, 41.0),
        vec![BodyTube::new(300.0, 41.0, 100.0)],
        vec![],
        FinSet::new(3, 70.0, 30.0, 55.0, 20.0, 330.0, 20.5),
    );
    let masses = vec![
        MassComponent::spanning(350.0, 0.0, 400.0), // airframe, g
        MassComponent::spanning(85.0, 330.0, 70.0), // loaded F motor
    ];

    println!("=== Stability ===");
    let stability = StabilityAnalyzer::calculate(&geometry, &masses)?;
    println!("CP: {:.1} mm, CG: {:.1} mm", stability.cp, stability.cg);
    println!(
        "Margin: {:.1} mm ({:.2} calibers), {:?}",
        stability.margin, stability.calibers, stability.status
    );
    for line in &stability.breakdown {
        println!(
            "  {:<12} CNa {:>6.3}  CP {:>7.1} mm",
            line.label, line.cn_alpha, line.cp
        );
    }
    if stability.calibers < GOOD_STABLE_CALIBERS {
        let ballast = StabilityAnalyzer::weight_for_stability(
            &geometry,
            &masses,
            GOOD_STABLE_CALIBERS,
            20.0,
        )?;
        println!("Suggested nose ballast: {:.1} g", ballast);
    }

    println!("\n=== Ascent ===");
    let rocket = AscentRocket::new(0.35, 0.042, 0.55);
    let motor = MotorSummary::new(72.0, 50.0, 1.5, 0.085, 0.037);
    let estimate = AscentEstimator::estimate(&rocket, &motor);
    println!(
        "Motor class: {}",
        motor.impulse_class().unwrap_or('?')
    );
    println!(
        "Apogee: {:.0} m at t+{:.1} s (T/W {:.1})",
        estimate.apogee, estimate.apogee_time, estimate.thrust_to_weight
    );
    println!(
        "Burnout: {:.0} m/s at {:.0} m, coast {:.1} s",
        estimate.burnout_velocity, estimate.burnout_altitude, estimate.coast_time
    );
    let delay = AscentEstimator::estimate_optimal_delay(&rocket, &motor);
    println!(
        "Ejection delay: {:.1} s optimal, use a {:.0} s motor",
        delay.optimal_delay, delay.recommended
    );

    println!("\n=== Recovery ===");
    let descent_mass = rocket.dry_mass + motor.total_mass - motor.propellant_mass;
    let plan = RecoveryPlanner::recommend(estimate.apogee, descent_mass)?;
    println!(
        "Main: {:.2} m canopy{}",
        plan.main_diameter,
        match plan.drogue_diameter {
            Some(d) => format!(", drogue: {:.2} m", d),
            None => " at apogee".to_string(),
        }
    );
    println!(
        "Descent: {:.0} s, drift {:.0} m in {:.0} m/s average wind",
        plan.estimated_descent_time, plan.estimated_drift, PLANNER_AVERAGE_WIND_SPEED
    );

    let wind = WindProfile::new(4.0, 270.0, 1.3);
    let descent =
        DescentSimulator::simulate(estimate.apogee, descent_mass, &plan.configuration, &wind)?;
    println!(
        "Landing: {:.1} m/s ({:.0} J), {:.0} m downrange bearing {:.0} deg",
        descent.landing_velocity,
        descent.kinetic_energy,
        descent.drift_distance,
        descent.drift.bearing()
    );

    let safety = DescentSimulator::assess_safety(&descent, &plan.configuration);
    println!("Safety verdict: {:?}", safety.verdict);
    for finding in &safety.findings {
        println!("  [{:?}] {}", finding.severity, finding.message);
    }

    let settings = DescentSimulator::altimeter_settings(&plan.configuration);
    match settings.main_deploy_altitude {
        Some(altitude) => println!(
            "Altimeter: drogue at apogee, main at {:.0} m, backup at {:.0} m",
            altitude, settings.backup_deploy_altitude
        ),
        None => println!(
            "Altimeter: main at apogee, backup at {:.0} m",
            settings.backup_deploy_altitude
        ),
    }

    println!("\n=== Dispersion ===");
    let spread = DispersionConfig::new(100, 1.5, 20.0, 0.01);
    let dispersion = DispersionAnalyzer::run(
        estimate.apogee,
        descent_mass,
        &plan.configuration,
        &wind,
        &spread,
        2024,
    )?;
    println!(
        "{} runs: mean drift {:.0} m, max {:.0} m, mean landing {:.1} m/s",
        spread.runs, dispersion.mean_drift, dispersion.max_drift, dispersion.mean_landing_velocity
    );
    if dispersion.incomplete_runs > 0 {
        println!("  {} runs hit the time cap", dispersion.incomplete_runs);
    }

    Ok(())
}
