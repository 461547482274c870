use smallvec::SmallVec;

use crate::data::WaitSample;
use crate::queue::Fifo;
use crate::units::{Customers, Ticket};

// Most facilities open only a handful of lanes
type LaneSet = SmallVec<[Fifo; 8]>;

/// The checkout floor: a fixed set of open lanes fed by one shared door.
#[derive(Debug)]
pub(crate) struct Floor {
    lanes: LaneSet,
}

impl Floor {
    /// Customers every till serves per simulated minute.
    pub(crate) const SERVICE_CAPACITY: u64 = 2;

    pub(crate) fn open(lanes: usize) -> Self {
        assert!(lanes > 0, "a floor needs at least one open lane");
        Self {
            lanes: (0..lanes).map(|_| Fifo::new()).collect(),
        }
    }

    /// Routes `count` arriving customers, one at a time, each to the lane
    /// that is shortest the moment they walk in.
    pub(crate) fn admit(&mut self, count: Customers) {
        for _ in 0..count.into_u64() {
            let (lane, depth) = self.shortest_lane();
            // The ticket records the position joined at: the people already
            // ahead plus the customer themselves.
            self.lanes[lane].enqueue(Ticket::new(depth as u64 + 1));
        }
    }

    /// Finds the index and depth of the shortest lane. Ties settle on the
    /// lowest index.
    fn shortest_lane(&self) -> (usize, usize) {
        let mut shortest = (0, self.lanes[0].len());
        for (i, lane) in self.lanes.iter().enumerate().skip(1) {
            if lane.len() < shortest.1 {
                shortest = (i, lane.len());
            }
        }
        shortest
    }

    /// Works every till for one minute, collecting up to
    /// [`Self::SERVICE_CAPACITY`] tickets per lane. Lanes that run dry simply
    /// contribute fewer.
    #[must_use]
    pub(crate) fn serve_minute(&mut self) -> WaitSample {
        let mut sample = WaitSample::default();
        for lane in self.lanes.iter_mut() {
            for _ in 0..Self::SERVICE_CAPACITY {
                if let Some(ticket) = lane.dequeue() {
                    sample.wait += ticket;
                    sample.served += Customers::ONE;
                }
            }
        }
        sample
    }

    #[cfg(test)]
    pub(crate) fn depths(&self) -> Vec<usize> {
        self.lanes.iter().map(|lane| lane.len()).collect()
    }
}
