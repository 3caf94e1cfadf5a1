use crate::control::flight_state::FlightState;
use crate::utils::vector3d::Vector3D;

// Collects the force contributions of one tick. The accumulated net force
// is also surfaced in the tick report so a host with its own rigid body can
// integrate externally instead.
#[derive(Debug)]
pub struct ForceAccumulator {
    net: Vector3D,
}

impl ForceAccumulator {
    pub fn new() -> Self {
        ForceAccumulator {
            net: Vector3D::zero(),
        }
    }

    pub fn add(&mut self, force: Vector3D) {
        self.net = self.net + force;
    }

    pub fn net_force(&self) -> Vector3D {
        self.net
    }
}

pub struct Integrator {
    pub gravity: f64,
}

impl Integrator {
    pub fn new(gravity: f64) -> Self {
        Integrator { gravity }
    }

    // Semi-implicit Euler step: velocity is advanced first, then position
    // is advanced with the already-updated velocity. Gravity acts as a
    // constant acceleration along -Z, independent of mass.
    pub fn step(&self, flight: &mut FlightState, net_force: Vector3D, delta_time: f64) {
        let acceleration = net_force / flight.mass - Vector3D::up() * self.gravity;
        flight.velocity = flight.velocity + acceleration * delta_time;
        flight.position = flight.position + flight.velocity * delta_time;
    }
}
