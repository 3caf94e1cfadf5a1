use crate::config::RocketConfig;
use crate::constants::{MASS_LOSS_FACTOR, MIN_VEHICLE_MASS};
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Stage1,
    Stage2,
}

// The single mutable record the whole tick pipeline operates on.
// Owned exclusively by the simulation driver for the lifetime of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub fuel: f64,
    pub mass: f64,
    pub thrust: f64,
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub temperature: f64,
    pub autopilot_enabled: bool,
    pub heat_shield_deployed: bool,
}

impl FlightState {
    pub fn new(config: &RocketConfig) -> Self {
        FlightState {
            fuel: config.fuel_stage1,
            mass: config.total_mass,
            thrust: config.stage1_thrust,
            position: Vector3D::zero(),
            velocity: Vector3D::zero(),
            temperature: 0.0,
            autopilot_enabled: config.autopilot_enabled,
            heat_shield_deployed: false,
        }
    }

    pub fn altitude(&self) -> f64 {
        self.position.z
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    // Mass shed is proportional to the fuel still on board, not to the fuel
    // burned this tick. Clamped so a large time step cannot drive the
    // vehicle mass to zero.
    pub fn apply_mass_loss(&mut self, delta_time: f64) {
        let mass_loss = self.fuel * MASS_LOSS_FACTOR * delta_time;
        self.mass = (self.mass - mass_loss).max(MIN_VEHICLE_MASS);

        debug_assert!(self.mass > 0.0, "Vehicle mass must stay positive");
    }
}
