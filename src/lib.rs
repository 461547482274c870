pub mod driver;
pub mod units;

pub(crate) mod arrivals;
pub(crate) mod data;
pub(crate) mod floor;
pub(crate) mod queue;
pub(crate) mod simulation;

pub use data::Record;
pub use driver::{run, Config, Error};
