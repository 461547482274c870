use crate::{simulation::Simulation, Record};

/// A complete description of one run.
#[derive(Debug, typed_builder::TypedBuilder)]
pub struct Config {
    /// Mean customer arrivals per minute.
    arrival_rate: f64,

    /// Sessions are run for every lane count from 1 up to this, inclusive.
    max_lanes: usize,

    /// Simulated days averaged into each session's result.
    #[builder(default = 50)]
    iterations: u32,

    /// Seed for the arrival generator. Left unset, every draw pulls fresh
    /// OS randomness and runs are not reproducible.
    #[builder(default, setter(into))]
    seed: Option<u64>,

    /// Run the lane-count sessions on a thread pool instead of in order.
    #[builder(default)]
    parallel: bool,
}

impl Config {
    fn validate(&self) -> Result<(), Error> {
        if !self.arrival_rate.is_finite() || self.arrival_rate < 0.0 {
            return Err(Error::ArrivalRate(self.arrival_rate));
        }
        if self.max_lanes == 0 {
            return Err(Error::NoLanes);
        }
        if self.iterations == 0 {
            return Err(Error::NoIterations);
        }
        Ok(())
    }
}

/// Runs every session the config describes and returns one [`Record`] per
/// lane count, in ascending order.
pub fn run(cfg: Config) -> Result<Vec<Record>, Error> {
    cfg.validate()?;
    let sim = Simulation::builder()
        .arrival_rate(cfg.arrival_rate)
        .max_lanes(cfg.max_lanes)
        .iterations(cfg.iterations)
        .seed(cfg.seed)
        .parallel(cfg.parallel)
        .build();
    Ok(sim.run())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("arrival rate must be a finite, non-negative number, got {0}")]
    ArrivalRate(f64),

    #[error("at least one lane must be open")]
    NoLanes,

    #[error("at least one iteration is required")]
    NoIterations,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Minutes;

    fn config(rate: f64, lanes: usize, iterations: u32) -> Config {
        Config::builder()
            .arrival_rate(rate)
            .max_lanes(lanes)
            .iterations(iterations)
            .build()
    }

    #[test]
    fn rejects_a_negative_rate() {
        let err = run(config(-1.0, 10, 50)).unwrap_err();
        assert!(matches!(err, Error::ArrivalRate(_)));
    }

    #[test]
    fn rejects_a_nan_rate() {
        let err = run(config(f64::NAN, 10, 50)).unwrap_err();
        assert!(matches!(err, Error::ArrivalRate(_)));
    }

    #[test]
    fn rejects_zero_lanes() {
        let err = run(config(18.0, 0, 50)).unwrap_err();
        assert!(matches!(err, Error::NoLanes));
    }

    #[test]
    fn rejects_zero_iterations() {
        let err = run(config(18.0, 10, 0)).unwrap_err();
        assert!(matches!(err, Error::NoIterations));
    }

    #[test]
    fn accepts_a_zero_rate() {
        // Nobody shows up, nobody waits. Unseeded, to also cover the
        // fresh-randomness path end to end.
        let records = run(config(0.0, 1, 1)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].avg_wait, Minutes::ZERO);
    }

    #[test]
    fn iterations_default_to_fifty() {
        let cfg = Config::builder().arrival_rate(18.0).max_lanes(10).build();
        assert_eq!(cfg.iterations, 50);
    }
}
