use crate::constants::{
    ATMOSPHERE_SCALE_HEIGHT, REENTRY_ALTITUDE_CEILING, REENTRY_SPEED_THRESHOLD,
};
use crate::control::flight_state::FlightState;
use crate::utils::vector3d::Vector3D;

#[derive(Debug)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub reentry_drag_multiplier: f64,
    pub max_temperature: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, reentry_drag_multiplier: f64, max_temperature: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            reentry_drag_multiplier,
            max_temperature,
        }
    }

    // Exponential-decay density model: 1 at sea level, approaching zero as
    // altitude grows.
    pub fn atmosphere_density(altitude: f64) -> f64 {
        (-altitude / ATMOSPHERE_SCALE_HEIGHT).exp()
    }

    pub fn drag_force(&self, flight: &FlightState) -> Vector3D {
        let speed_squared = flight.velocity.magnitude_squared();
        if speed_squared == 0.0 {
            return Vector3D::zero();
        }

        let density = Self::atmosphere_density(flight.altitude());
        let drag_magnitude = self.drag_coefficient * density * speed_squared;

        -flight.velocity.normalize() * drag_magnitude
    }

    // Re-entry heating for one tick. In the low, fast envelope the heat
    // shield deploys and the airframe accumulates heat; temperature is
    // clamped to the structural limit. Returns true once that limit is
    // reached, which the driver treats as a thermal failure.
    pub fn reentry_heating(&self, flight: &mut FlightState, delta_time: f64) -> bool {
        if flight.altitude() < REENTRY_ALTITUDE_CEILING
            && flight.speed() > REENTRY_SPEED_THRESHOLD
        {
            flight.heat_shield_deployed = true;
            flight.temperature = (flight.temperature
                + self.reentry_drag_multiplier * delta_time)
                .min(self.max_temperature);
        }

        flight.temperature >= self.max_temperature
    }
}
