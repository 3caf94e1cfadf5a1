use rand::Rng;

use crate::{
    config::RocketConfig,
    constants::RANDOM_FAILURE_PROBABILITY,
    errors::SimulationError,
    trajectory_system::{
        aerodynamics::Aerodynamics,
        integrator::{ForceAccumulator, Integrator},
    },
    utils::vector3d::Vector3D,
};

use super::{
    failure::FailureModel,
    flight_state::{FlightState, Stage},
    guidance::GuidanceSystem,
    propulsion::PropulsionSystem,
};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum RocketState {
    Idle,
    Launching(Stage),
    Orbit,
    Failed(FailureCause),
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FailureCause {
    Overheat,
    CriticalMalfunction,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FlightEvent {
    StageSeparated,
    OrbitAchieved,
    ThermalFailure,
    RandomCriticalFailure,
}

// Snapshot returned from every tick. `net_force` is the tick's accumulated
// force vector, for hosts that prefer to feed their own rigid-body
// integrator instead of trusting the built-in one.
#[derive(PartialEq, Debug, Clone)]
pub struct TickReport {
    pub state: RocketState,
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub fuel: f64,
    pub mass: f64,
    pub temperature: f64,
    pub net_force: Vector3D,
    pub events: Vec<FlightEvent>,
}

pub struct Rocket {
    pub propulsion: PropulsionSystem,
    pub guidance: GuidanceSystem,
    pub aerodynamics: Aerodynamics,
    pub integrator: Integrator,
    pub failure: FailureModel,
    pub flight: FlightState,
    pub state: RocketState,
}

impl Rocket {
    pub fn new(config: RocketConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        Ok(Rocket {
            propulsion: PropulsionSystem::new(config.stage2_thrust, config.fuel_stage2),
            guidance: GuidanceSystem::new(config.target_orbit_altitude, config.escape_velocity),
            aerodynamics: Aerodynamics::new(
                config.drag_coefficient,
                config.reentry_drag_multiplier,
                config.max_temperature,
            ),
            integrator: Integrator::new(config.gravity_constant),
            failure: FailureModel::new(RANDOM_FAILURE_PROBABILITY),
            flight: FlightState::new(&config),
            state: RocketState::Idle,
        })
    }

    pub fn launch(&mut self) {
        if self.state == RocketState::Idle {
            self.state = RocketState::Launching(Stage::Stage1);
            println!("Rocket launched!");
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, RocketState::Orbit | RocketState::Failed(_))
    }

    // Advances the simulation by one tick.
    //
    // While launching with propellant on board, the force pipeline runs in
    // a fixed order: thrust, drag, mass loss, re-entry heating, autopilot,
    // random-failure draw. With the tanks dry the vehicle coasts and only
    // gravity acts on it. Stage-separation and orbit checks sit outside the
    // fuel gate; a failure transition ends its tick immediately. Terminal
    // states tick as no-ops.
    pub fn update<R: Rng>(
        &mut self,
        delta_time: f64,
        rng: &mut R,
    ) -> Result<TickReport, SimulationError> {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return Err(SimulationError::TimeStepError(delta_time));
        }

        let mut forces = ForceAccumulator::new();
        let mut events = Vec::new();

        if let RocketState::Launching(stage) = self.state {
            if self.flight.fuel > 0.0 {
                forces.add(self.propulsion.apply_thrust(&mut self.flight, stage, delta_time));
                forces.add(self.aerodynamics.drag_force(&self.flight));
                self.flight.apply_mass_loss(delta_time);

                if self.aerodynamics.reentry_heating(&mut self.flight, delta_time) {
                    self.state = RocketState::Failed(FailureCause::Overheat);
                    events.push(FlightEvent::ThermalFailure);
                    println!("Rocket overheated and failed!");
                    return Ok(self.report(forces.net_force(), events));
                }

                if self.flight.autopilot_enabled {
                    forces.add(self.guidance.autopilot_correction(&mut self.flight));
                }

                if self.failure.critical_malfunction(rng) {
                    self.state = RocketState::Failed(FailureCause::CriticalMalfunction);
                    events.push(FlightEvent::RandomCriticalFailure);
                    println!("Rocket experienced a critical failure!");
                    return Ok(self.report(forces.net_force(), events));
                }
            }

            if stage == Stage::Stage1 && self.flight.fuel <= 0.0 {
                self.propulsion.separate_stage(&mut self.flight);
                self.state = RocketState::Launching(Stage::Stage2);
                events.push(FlightEvent::StageSeparated);
                println!("Stage separation: second stage ignited.");
            }
        }

        if !self.is_terminal() && self.guidance.orbit_achieved(&self.flight) {
            self.flight.autopilot_enabled = false;
            self.state = RocketState::Orbit;
            events.push(FlightEvent::OrbitAchieved);
            println!("Orbital velocity reached: insertion complete.");
        }

        if let RocketState::Launching(_) = self.state {
            self.integrator
                .step(&mut self.flight, forces.net_force(), delta_time);
        }

        Ok(self.report(forces.net_force(), events))
    }

    fn report(&self, net_force: Vector3D, events: Vec<FlightEvent>) -> TickReport {
        TickReport {
            state: self.state,
            position: self.flight.position,
            velocity: self.flight.velocity,
            fuel: self.flight.fuel,
            mass: self.flight.mass,
            temperature: self.flight.temperature,
            net_force,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    // StepRng at the top of the range never trips the 1% failure draw.
    fn reliable_rng() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn doomed_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn create_test_rocket() -> Rocket {
        Rocket::new(RocketConfig::default()).expect("default config must be valid")
    }

    #[test]
    fn test_launch_enters_first_stage() {
        let mut rocket = create_test_rocket();
        assert_eq!(rocket.state, RocketState::Idle);

        rocket.launch();
        assert_eq!(rocket.state, RocketState::Launching(Stage::Stage1));

        // A second call must not reset anything.
        rocket.launch();
        assert_eq!(rocket.state, RocketState::Launching(Stage::Stage1));
    }

    #[test]
    fn test_idle_tick_does_not_move_the_vehicle() {
        let mut rocket = create_test_rocket();
        let before = rocket.flight.clone();

        let report = rocket.update(1.0, &mut reliable_rng()).unwrap();

        assert_eq!(rocket.state, RocketState::Idle);
        assert_eq!(rocket.flight, before);
        assert!(report.events.is_empty());
        assert_eq!(report.net_force, Vector3D::zero());
    }

    #[test]
    fn test_invalid_time_step_rejected() {
        let mut rocket = create_test_rocket();
        rocket.launch();
        let before = rocket.flight.clone();

        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = rocket.update(dt, &mut reliable_rng());
            assert!(matches!(result, Err(SimulationError::TimeStepError(_))));
        }

        assert_eq!(rocket.flight, before, "Rejected ticks must not mutate state");
    }

    #[test]
    fn test_burning_tick_consumes_fuel_and_sheds_mass() {
        let mut rocket = create_test_rocket();
        rocket.launch();

        let initial_fuel = rocket.flight.fuel;
        let initial_mass = rocket.flight.mass;
        let report = rocket.update(1.0, &mut reliable_rng()).unwrap();

        assert!(report.fuel < initial_fuel);
        assert!(report.mass < initial_mass);
        assert!(report.net_force.z > 0.0, "Thrust and autopilot push upward");
    }

    #[test]
    fn test_stage_separation_fires_once() {
        let config = RocketConfig {
            fuel_stage1: 0.001,
            ..RocketConfig::default()
        };
        let mut rocket = Rocket::new(config.clone()).unwrap();
        rocket.launch();

        let report = rocket.update(0.1, &mut reliable_rng()).unwrap();

        assert_eq!(rocket.state, RocketState::Launching(Stage::Stage2));
        assert_eq!(rocket.flight.thrust, config.stage2_thrust);
        assert_eq!(rocket.flight.fuel, config.fuel_stage2);
        assert!(report.events.contains(&FlightEvent::StageSeparated));

        // Burn the second stage dry; no further separation may occur.
        let mut separations = 0;
        for _ in 0..2_000 {
            let report = rocket.update(0.1, &mut reliable_rng()).unwrap();
            separations += report
                .events
                .iter()
                .filter(|e| **e == FlightEvent::StageSeparated)
                .count();
        }
        assert_eq!(separations, 0);
        assert_eq!(rocket.state, RocketState::Launching(Stage::Stage2));
        assert_eq!(rocket.flight.thrust, config.stage2_thrust);
    }

    #[test]
    fn test_orbit_check_runs_every_tick() {
        let mut rocket = create_test_rocket();
        rocket.flight.velocity = Vector3D::new(0.0, 0.0, 11_201.0);

        // Even before launch the orbit check applies.
        let report = rocket.update(1.0, &mut reliable_rng()).unwrap();

        assert_eq!(rocket.state, RocketState::Orbit);
        assert!(!rocket.flight.autopilot_enabled);
        assert!(report.events.contains(&FlightEvent::OrbitAchieved));
    }

    #[test]
    fn test_thermal_failure_is_terminal() {
        let config = RocketConfig {
            reentry_drag_multiplier: 1.0,
            ..RocketConfig::default()
        };
        let mut rocket = Rocket::new(config).unwrap();
        rocket.launch();
        rocket.flight.position.z = 15_000.0;
        rocket.flight.velocity = Vector3D::new(2_500.0, 0.0, 0.0);
        rocket.flight.temperature = 1_499.99;

        let report = rocket.update(1.0, &mut reliable_rng()).unwrap();

        assert_eq!(rocket.state, RocketState::Failed(FailureCause::Overheat));
        assert!(report.events.contains(&FlightEvent::ThermalFailure));

        let frozen = rocket.flight.clone();
        for _ in 0..10 {
            rocket.update(1.0, &mut doomed_rng()).unwrap();
        }
        assert_eq!(rocket.flight, frozen, "Failed state must freeze the vehicle");
    }

    #[test]
    fn test_random_failure_while_burning() {
        let mut rocket = create_test_rocket();
        rocket.launch();

        let report = rocket.update(1.0, &mut doomed_rng()).unwrap();

        assert_eq!(
            rocket.state,
            RocketState::Failed(FailureCause::CriticalMalfunction)
        );
        assert!(report.events.contains(&FlightEvent::RandomCriticalFailure));
    }

    #[test]
    fn test_coasting_skips_failure_draws() {
        let mut rocket = create_test_rocket();
        rocket.launch();
        rocket.state = RocketState::Launching(Stage::Stage2);
        rocket.flight.fuel = 0.0;

        // With dry tanks the doomed RNG is never consulted.
        for _ in 0..50 {
            rocket.update(1.0, &mut doomed_rng()).unwrap();
        }
        assert_eq!(rocket.state, RocketState::Launching(Stage::Stage2));
    }

    #[test]
    fn test_coasting_still_integrates_gravity() {
        let mut rocket = create_test_rocket();
        rocket.launch();
        rocket.state = RocketState::Launching(Stage::Stage2);
        rocket.flight.fuel = 0.0;
        rocket.flight.position.z = 100_000.0;

        let report = rocket.update(1.0, &mut doomed_rng()).unwrap();

        assert!(report.velocity.z < 0.0, "Coasting vehicle falls under gravity");
        assert!(report.position.z < 100_000.0);
        assert_eq!(report.net_force, Vector3D::zero());
    }

    #[test]
    fn test_fuel_and_mass_bounds_hold_under_large_steps() {
        let mut rocket = create_test_rocket();
        rocket.launch();

        for _ in 0..100 {
            rocket.update(1_000.0, &mut reliable_rng()).unwrap();
            assert!(rocket.flight.fuel >= 0.0);
            assert!(rocket.flight.mass > 0.0);
        }
    }
}
