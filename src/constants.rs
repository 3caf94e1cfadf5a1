// Physical Constants
pub const GRAVITY: f64 = 9.8; // m/s²
pub const ESCAPE_VELOCITY: f64 = 11_200.0; // m/s (escape velocity for Earth)

// Propulsion Constants
pub const STAGE1_THRUST: f64 = 8_000.0; // N
pub const STAGE2_THRUST: f64 = 12_000.0; // N
pub const FUEL_STAGE1: f64 = 100.0; // fuel units
pub const FUEL_STAGE2: f64 = 80.0; // fuel units
pub const STAGE1_FUEL_CONSUMPTION_RATE: f64 = 1.0; // units/s
pub const STAGE2_FUEL_CONSUMPTION_RATE: f64 = 0.7; // units/s
pub const GIMBAL_ANGLE: f64 = 5.0; // degrees

// Vehicle Constants
pub const TOTAL_MASS: f64 = 5_000.0; // kg
pub const MASS_LOSS_FACTOR: f64 = 0.05; // fraction of remaining fuel shed per second
pub const MIN_VEHICLE_MASS: f64 = 1.0; // kg, dry-structure floor

// Aerodynamic Constants
pub const DRAG_COEFFICIENT: f64 = 0.02;
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 10_000.0; // m
pub const REENTRY_ALTITUDE_CEILING: f64 = 20_000.0; // m
pub const REENTRY_SPEED_THRESHOLD: f64 = 2_000.0; // m/s
pub const REENTRY_DRAG_MULTIPLIER: f64 = 5.0; // temperature units/s
pub const MAX_TEMPERATURE: f64 = 1_500.0;

// Guidance Constants
pub const TARGET_ORBIT_ALTITUDE: f64 = 200_000.0; // m
pub const AUTOPILOT_CORRECTION_FORCE: f64 = 500.0; // N

// Failure Constants
pub const RANDOM_FAILURE_PROBABILITY: f64 = 0.01; // per tick while burning

// Simulation Parameters
pub const TIME_STEP: f64 = 1.0; // s
pub const MAX_SIMULATION_TIME: f64 = 600.0; // s
