use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::units::Customers;

/// Poisson-distributed customer arrivals, one sample per simulated minute.
#[derive(Debug)]
pub(crate) struct ArrivalProcess {
    rate: f64,
    rng: ArrivalRng,
}

/// Where an [`ArrivalProcess`] gets its randomness.
///
/// `PerDraw` pulls a fresh OS-seeded generator for every sample, so no two
/// runs are reproducible. `Shared` threads one seeded generator through every
/// sample instead; seeding therefore changes the numbers a run reports rather
/// than replaying an unseeded one.
#[derive(Debug)]
enum ArrivalRng {
    PerDraw,
    Shared(StdRng),
}

impl ArrivalProcess {
    pub(crate) fn new(rate: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ArrivalRng::Shared(StdRng::seed_from_u64(seed)),
            None => ArrivalRng::PerDraw,
        };
        Self { rate, rng }
    }

    /// Draws the number of customers arriving over the next minute.
    pub(crate) fn sample(&mut self) -> Customers {
        let count = match &mut self.rng {
            ArrivalRng::PerDraw => knuth_poisson(&mut StdRng::from_os_rng(), self.rate),
            ArrivalRng::Shared(rng) => knuth_poisson(rng, self.rate),
        };
        Customers::new(count)
    }
}

/// Knuth's product-of-uniforms Poisson sampler.
///
/// Multiplies uniform draws from `[0, 1)` until the running product falls to
/// `e^(-mean)` or below; the answer is one less than the number of draws. A
/// mean of zero puts the limit at 1.0, so the first draw always ends the loop
/// and the sample is zero.
fn knuth_poisson<R: Rng + ?Sized>(rng: &mut R, mean: f64) -> u64 {
    let limit = (-mean).exp();
    let mut product = 1.0_f64;
    let mut draws = 0_u64;
    loop {
        product *= rng.random::<f64>();
        draws += 1;
        if product <= limit {
            break;
        }
    }
    draws - 1
}
