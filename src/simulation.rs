use log::debug;
use rayon::prelude::*;

use crate::{
    arrivals::ArrivalProcess,
    data::{Record, WaitSample},
    floor::Floor,
    units::Minutes,
};

/// Length of one simulated working day.
pub(crate) const DAY: Minutes = Minutes::new(720);

#[derive(Debug, typed_builder::TypedBuilder)]
pub(crate) struct Simulation {
    // Scenario
    arrival_rate: f64,
    max_lanes: usize,
    iterations: u32,

    // Randomness
    #[builder(default)]
    seed: Option<u64>,

    // Execution
    #[builder(default)]
    parallel: bool,
}

impl Simulation {
    pub(crate) fn run(self) -> Vec<Record> {
        debug!(
            "run: rate {} across 1..={} lane(s), {} iteration(s) per session",
            self.arrival_rate, self.max_lanes, self.iterations
        );
        if self.parallel {
            self.run_parallel()
        } else {
            self.run_sequential()
        }
    }

    fn run_sequential(&self) -> Vec<Record> {
        // With a seed, every session draws from the same shared generator in
        // lane-count order.
        let mut arrivals = ArrivalProcess::new(self.arrival_rate, self.seed);
        (1..=self.max_lanes)
            .map(|lanes| Record {
                lanes,
                avg_wait: self.run_session(lanes, &mut arrivals),
            })
            .collect()
    }

    fn run_parallel(&self) -> Vec<Record> {
        let lane_counts = (1..=self.max_lanes).collect::<Vec<_>>();
        lane_counts
            .into_par_iter()
            .map(|lanes| {
                // Each session gets its own generator with a seed derived
                // from its lane count, so results are repeatable at any
                // thread count. They differ from a sequential run, which
                // threads one generator through every session.
                let seed = self.seed.map(|base| base.wrapping_add(lanes as u64));
                let mut arrivals = ArrivalProcess::new(self.arrival_rate, seed);
                Record {
                    lanes,
                    avg_wait: self.run_session(lanes, &mut arrivals),
                }
            })
            .collect()
    }

    /// Runs one session: `self.iterations` days at the given lane count,
    /// averaged by truncating division.
    fn run_session(&self, lanes: usize, arrivals: &mut ArrivalProcess) -> Minutes {
        let total: Minutes = (0..self.iterations)
            .map(|_| self.run_iteration(lanes, arrivals))
            .sum();
        let avg = total
            .checked_div(u64::from(self.iterations))
            .expect("at least one iteration");
        debug!("session: {} lane(s) -> mean wait {} minute(s)", lanes, avg);
        avg
    }

    /// Runs one 720-minute day and reports its mean wait.
    fn run_iteration(&self, lanes: usize, arrivals: &mut ArrivalProcess) -> Minutes {
        // A brand-new floor each day; queued customers never carry over.
        let mut floor = Floor::open(lanes);
        let mut day = WaitSample::default();
        for _ in 0..DAY.into_u64() {
            day += self.step_minute(&mut floor, arrivals);
        }
        // A day that serves nobody is a day nobody waited.
        day.mean_wait(Floor::SERVICE_CAPACITY)
            .unwrap_or(Minutes::ZERO)
    }

    /// Advances one minute: admit the minute's arrivals, then work the tills.
    fn step_minute(&self, floor: &mut Floor, arrivals: &mut ArrivalProcess) -> WaitSample {
        let count = arrivals.sample();
        floor.admit(count);
        floor.serve_minute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(rate: f64, lanes: usize, iterations: u32) -> Simulation {
        Simulation::builder()
            .arrival_rate(rate)
            .max_lanes(lanes)
            .iterations(iterations)
            .build()
    }

    #[test]
    fn idle_minute_yields_empty_sample() {
        let sim = sim(0.0, 1, 1);
        let mut floor = Floor::open(1);
        let mut arrivals = ArrivalProcess::new(0.0, None);
        assert_eq!(
            sim.step_minute(&mut floor, &mut arrivals),
            WaitSample::default()
        );
    }

    #[test]
    fn identical_seeds_replay_iterations() {
        let sim = sim(12.0, 2, 1);
        let mut a = ArrivalProcess::new(12.0, Some(27));
        let mut b = ArrivalProcess::new(12.0, Some(27));
        assert_eq!(sim.run_iteration(2, &mut a), sim.run_iteration(2, &mut b));
    }

    #[test]
    fn session_averages_its_iterations() {
        let sim = sim(9.0, 3, 4);
        let mut shared = ArrivalProcess::new(9.0, Some(101));
        let session = sim.run_session(3, &mut shared);

        let mut replay = ArrivalProcess::new(9.0, Some(101));
        let total: Minutes = (0..4).map(|_| sim.run_iteration(3, &mut replay)).sum();
        assert_eq!(Some(session), total.checked_div(4));
    }

    #[test]
    fn an_overloaded_lane_builds_up_wait() {
        // 18 arrivals a minute against one till serving 2 swamps the lane.
        let sim = sim(18.0, 1, 1);
        let mut arrivals = ArrivalProcess::new(18.0, Some(5));
        assert!(sim.run_iteration(1, &mut arrivals) > Minutes::ZERO);
    }
}
