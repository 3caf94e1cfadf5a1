use ascent_simulation::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RocketConfig::default();
    let mut rocket = Rocket::new(config)?;
    let mut telemetry = Telemetry::new();
    let mut rng = StdRng::seed_from_u64(42);

    rocket.launch();

    let mut elapsed_time = 0.0;
    while elapsed_time < MAX_SIMULATION_TIME {
        let report = rocket.update(TIME_STEP, &mut rng)?;
        telemetry.collect_data(&rocket, &report, TIME_STEP);
        elapsed_time += TIME_STEP;

        if rocket.is_terminal() {
            println!(
                "Flight ended in state {:?} at t={:.1}s",
                rocket.state, elapsed_time
            );
            break;
        }
    }

    telemetry.display_data();

    Ok(())
}
