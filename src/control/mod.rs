pub mod failure;
pub mod flight_state;
pub mod guidance;
pub mod propulsion;
pub mod rocket;
