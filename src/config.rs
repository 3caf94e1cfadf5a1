use crate::constants::{
    DRAG_COEFFICIENT, ESCAPE_VELOCITY, FUEL_STAGE1, FUEL_STAGE2, GRAVITY, MAX_TEMPERATURE,
    REENTRY_DRAG_MULTIPLIER, STAGE1_THRUST, STAGE2_THRUST, TARGET_ORBIT_ALTITUDE, TOTAL_MASS,
};
use crate::errors::SimulationError;

// Per-run vehicle configuration, immutable once the rocket is built.
#[derive(Debug, Clone, PartialEq)]
pub struct RocketConfig {
    pub stage1_thrust: f64,
    pub stage2_thrust: f64,
    pub fuel_stage1: f64,
    pub fuel_stage2: f64,
    pub total_mass: f64,
    pub gravity_constant: f64,
    pub escape_velocity: f64,
    pub max_temperature: f64,
    pub drag_coefficient: f64,
    pub reentry_drag_multiplier: f64,
    pub autopilot_enabled: bool,
    pub target_orbit_altitude: f64,
}

impl Default for RocketConfig {
    fn default() -> Self {
        RocketConfig {
            stage1_thrust: STAGE1_THRUST,
            stage2_thrust: STAGE2_THRUST,
            fuel_stage1: FUEL_STAGE1,
            fuel_stage2: FUEL_STAGE2,
            total_mass: TOTAL_MASS,
            gravity_constant: GRAVITY,
            escape_velocity: ESCAPE_VELOCITY,
            max_temperature: MAX_TEMPERATURE,
            drag_coefficient: DRAG_COEFFICIENT,
            reentry_drag_multiplier: REENTRY_DRAG_MULTIPLIER,
            autopilot_enabled: true,
            target_orbit_altitude: TARGET_ORBIT_ALTITUDE,
        }
    }
}

impl RocketConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("stage1 thrust", self.stage1_thrust),
            ("stage2 thrust", self.stage2_thrust),
            ("stage1 fuel", self.fuel_stage1),
            ("stage2 fuel", self.fuel_stage2),
            ("total mass", self.total_mass),
            ("gravity constant", self.gravity_constant),
            ("escape velocity", self.escape_velocity),
            ("max temperature", self.max_temperature),
            ("drag coefficient", self.drag_coefficient),
            ("reentry drag multiplier", self.reentry_drag_multiplier),
            ("target orbit altitude", self.target_orbit_altitude),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.total_mass <= 0.0 {
            return Err(SimulationError::ConfigurationError(
                "total mass must be positive".to_string(),
            ));
        }
        if self.fuel_stage1 <= 0.0 || self.fuel_stage2 <= 0.0 {
            return Err(SimulationError::ConfigurationError(
                "stage fuel loads must be positive".to_string(),
            ));
        }
        if self.escape_velocity <= 0.0 {
            return Err(SimulationError::ConfigurationError(
                "escape velocity must be positive".to_string(),
            ));
        }
        if self.max_temperature <= 0.0 {
            return Err(SimulationError::ConfigurationError(
                "max temperature must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
