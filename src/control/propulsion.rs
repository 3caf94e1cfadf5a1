use crate::constants::{
    GIMBAL_ANGLE, STAGE1_FUEL_CONSUMPTION_RATE, STAGE2_FUEL_CONSUMPTION_RATE,
};
use crate::control::flight_state::{FlightState, Stage};
use crate::utils::vector3d::Vector3D;

pub struct PropulsionSystem {
    pub stage2_thrust: f64,
    pub fuel_stage2: f64,
}

impl PropulsionSystem {
    pub fn new(stage2_thrust: f64, fuel_stage2: f64) -> Self {
        PropulsionSystem {
            stage2_thrust,
            fuel_stage2,
        }
    }

    pub fn fuel_consumption_rate(stage: Stage) -> f64 {
        match stage {
            Stage::Stage1 => STAGE1_FUEL_CONSUMPTION_RATE,
            Stage::Stage2 => STAGE2_FUEL_CONSUMPTION_RATE,
        }
    }

    // Thrust force along the vehicle's up axis for this tick.
    //
    // The fuel gate is evaluated before consumption, so thrust is still
    // applied on the tick in which fuel crosses zero. Consumption clamps at
    // zero; fuel never goes negative.
    pub fn apply_thrust(&self, flight: &mut FlightState, stage: Stage, delta_time: f64) -> Vector3D {
        if flight.fuel <= 0.0 {
            return Vector3D::zero();
        }

        let fuel_consumed = Self::fuel_consumption_rate(stage) * delta_time;
        flight.fuel = (flight.fuel - fuel_consumed).max(0.0);

        debug_assert!(flight.fuel >= 0.0, "Fuel cannot be negative");

        Vector3D::up() * flight.thrust
    }

    // Swaps in the second stage's thrust and fuel load. The caller owns the
    // Stage1 -> Stage2 transition, which guarantees this runs once per run.
    pub fn separate_stage(&self, flight: &mut FlightState) {
        flight.thrust = self.stage2_thrust;
        flight.fuel = self.fuel_stage2;
    }

    // Manual steering aid: current thrust redirected through a fixed gimbal
    // angle, pitched off the up axis.
    pub fn gimbal_force(&self, flight: &FlightState) -> Vector3D {
        let angle = GIMBAL_ANGLE.to_radians();
        Vector3D::new(angle.sin(), 0.0, angle.cos()) * flight.thrust
    }
}
