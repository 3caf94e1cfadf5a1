use crate::constants::AUTOPILOT_CORRECTION_FORCE;
use crate::control::flight_state::FlightState;
use crate::utils::vector3d::Vector3D;

pub struct GuidanceSystem {
    pub target_orbit_altitude: f64,
    pub escape_velocity: f64,
}

impl GuidanceSystem {
    pub fn new(target_orbit_altitude: f64, escape_velocity: f64) -> Self {
        GuidanceSystem {
            target_orbit_altitude,
            escape_velocity,
        }
    }

    // Autopilot correction for one tick. Below the target altitude this is
    // a fixed-magnitude upward nudge, deliberately not proportional to the
    // altitude error. Once the target is reached the autopilot disengages
    // for the rest of the run.
    pub fn autopilot_correction(&self, flight: &mut FlightState) -> Vector3D {
        if flight.altitude() < self.target_orbit_altitude {
            Vector3D::up() * AUTOPILOT_CORRECTION_FORCE
        } else {
            flight.autopilot_enabled = false;
            Vector3D::zero()
        }
    }

    pub fn orbit_achieved(&self, flight: &FlightState) -> bool {
        flight.speed() >= self.escape_velocity
    }
}
