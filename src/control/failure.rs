use rand::Rng;

pub struct FailureModel {
    pub failure_probability: f64,
}

impl FailureModel {
    pub fn new(failure_probability: f64) -> Self {
        FailureModel {
            failure_probability,
        }
    }

    // One independent Bernoulli trial. The random source is injected by the
    // caller so runs can be replayed with a fixed seed.
    pub fn critical_malfunction<R: Rng>(&self, rng: &mut R) -> bool {
        rng.gen::<f64>() < self.failure_probability
    }
}
