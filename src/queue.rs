use std::collections::VecDeque;

use crate::units::Ticket;

/// A checkout lane's waiting customers, oldest first.
///
/// Dequeueing an empty lane is a normal outcome (an idle till), so it yields
/// `None` rather than an error.
#[derive(Debug, Default, derive_new::new)]
pub(crate) struct Fifo {
    #[new(default)]
    inner: VecDeque<Ticket>,
}

impl Fifo {
    delegate::delegate! {
        to self.inner {
            #[call(push_back)]
            pub(crate) fn enqueue(&mut self, ticket: Ticket);

            #[call(pop_front)]
            pub(crate) fn dequeue(&mut self) -> Option<Ticket>;

            pub(crate) fn len(&self) -> usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_arrival_order() {
        let mut lane = Fifo::new();
        lane.enqueue(Ticket::new(1));
        lane.enqueue(Ticket::new(2));
        lane.enqueue(Ticket::new(3));
        assert_eq!(lane.dequeue(), Some(Ticket::new(1)));
        assert_eq!(lane.dequeue(), Some(Ticket::new(2)));
        assert_eq!(lane.dequeue(), Some(Ticket::new(3)));
    }

    #[test]
    fn empty_lane_yields_nothing() {
        let mut lane = Fifo::new();
        assert_eq!(lane.dequeue(), None);
        assert_eq!(lane.len(), 0);
    }
}
