pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::RocketConfig;
pub use constants::*;
pub use control::failure::FailureModel;
pub use control::flight_state::{FlightState, Stage};
pub use control::guidance::GuidanceSystem;
pub use control::propulsion::PropulsionSystem;
pub use control::rocket::{FailureCause, FlightEvent, Rocket, RocketState, TickReport};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::integrator::{ForceAccumulator, Integrator};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
