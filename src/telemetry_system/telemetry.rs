use crate::control::rocket::{FlightEvent, Rocket, RocketState, TickReport};
use crate::utils::vector3d::Vector3D;

pub struct Telemetry {
    pub log: Vec<String>,
    max_velocity: f64,
    max_altitude: f64,
    min_fuel: f64,
    max_temperature: f64,
    state_times: Vec<(RocketState, f64)>,
    simulation_time: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_velocity: 0.0,
            max_altitude: 0.0,
            min_fuel: f64::MAX,
            max_temperature: 0.0,
            state_times: Vec::new(),
            simulation_time: 0.0,
        }
    }

    fn format_vector3d(vec: &Vector3D, precision: usize) -> String {
        format!(
            "x = {:.precision$} m, y = {:.precision$} m, z = {:.precision$} m",
            vec.x,
            vec.y,
            vec.z,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    fn format_event(event: FlightEvent) -> &'static str {
        match event {
            FlightEvent::StageSeparated => "Stage separated",
            FlightEvent::OrbitAchieved => "Orbit achieved",
            FlightEvent::ThermalFailure => "Thermal failure",
            FlightEvent::RandomCriticalFailure => "Random critical failure",
        }
    }

    pub fn collect_data(&mut self, rocket: &Rocket, report: &TickReport, delta_time: f64) {
        self.simulation_time += delta_time;
        let velocity_magnitude = report.velocity.magnitude();
        let altitude = report.position.z;

        // Update key metrics
        if velocity_magnitude > self.max_velocity {
            self.max_velocity = velocity_magnitude;
        }
        if altitude > self.max_altitude {
            self.max_altitude = altitude;
        }
        if report.fuel < self.min_fuel {
            self.min_fuel = report.fuel;
        }
        if report.temperature > self.max_temperature {
            self.max_temperature = report.temperature;
        }

        let formatted_time = Self::format_time(self.simulation_time);
        let data = format!(
            "Time: {}\n\
                 Position: {}\n\
                 Velocity: {} (Magnitude: {:.2} m/s)\n\
                 Thrust: {:.2} N\n\
                 Fuel: {:.2}\n\
                 Mass: {:.2} kg\n\
                 Temperature: {:.2}\n\
                 Net Force: {}\n",
            formatted_time,
            Self::format_vector3d(&report.position, 2),
            Self::format_vector3d(&report.velocity, 2),
            velocity_magnitude,
            rocket.flight.thrust,
            report.fuel,
            report.mass,
            report.temperature,
            Self::format_vector3d(&report.net_force, 2),
        );
        self.log.push(data);

        for event in &report.events {
            self.log.push(format!(
                "[{}] {}",
                formatted_time,
                Self::format_event(*event)
            ));
        }

        // Track state transitions
        if let Some((last_state, _)) = self.state_times.last() {
            if *last_state != rocket.state {
                self.state_times.push((rocket.state, self.simulation_time));
            }
        } else {
            self.state_times.push((rocket.state, self.simulation_time));
        }
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Flight Summary ---");
        println!("Max Velocity: {:.2} m/s", self.max_velocity);
        println!("Max Altitude: {}", Self::format_altitude(self.max_altitude));
        println!("Min Fuel: {:.2}", self.min_fuel);
        println!("Max Temperature: {:.2}", self.max_temperature);

        println!("\n--- State Transitions ---");
        for (state, time) in &self.state_times {
            println!("State {:?} reached at: {}", state, Self::format_time(*time));
        }
    }
}
