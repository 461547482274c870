use std::fmt;

use crate::units::{Customers, Minutes, Ticket};

/// One session's result: the mean wait observed at a given lane count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// The number of open lanes.
    pub lanes: usize,
    /// The mean wait per served customer, averaged over the session's
    /// iterations and truncated to whole minutes.
    pub avg_wait: Minutes,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Historical report wording, kept so downstream consumers keep parsing.
        write!(
            f,
            "Average wait time using {} queue(s): {}",
            self.lanes, self.avg_wait
        )
    }
}

/// A day's running tally of collected tickets and served customers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_new::new, derive_more::AddAssign)]
pub(crate) struct WaitSample {
    /// The sum of every ticket collected at the tills.
    pub(crate) wait: Ticket,
    /// How many customers those tickets came from.
    pub(crate) served: Customers,
}

impl WaitSample {
    /// Converts the tally into a mean wait in minutes, or `None` if nobody
    /// was served.
    ///
    /// Each ticket is a till position, and a till works through
    /// `slots_per_minute` positions each minute, so the summed tickets divide
    /// by served customers times that capacity.
    pub(crate) fn mean_wait(self, slots_per_minute: u64) -> Option<Minutes> {
        let slots = self.served.into_u64() * slots_per_minute;
        if slots == 0 {
            return None;
        }
        Some(Minutes::new(self.wait.into_u64() / slots))
    }
}
