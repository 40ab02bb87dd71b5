use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use crate::constraints::ConstraintId;
use crate::containers::KeyedVec;
use crate::planner_assert_moderate;
use crate::propagators::Priority;

/// The propagation work list: constraints waiting to be propagated, bucketed by [`Priority`].
///
/// A constraint is in the queue at most once; enqueueing it again while it waits is a no-op.
#[derive(Debug, Clone)]
pub(crate) struct PropagatorQueue {
    queues: Vec<VecDeque<ConstraintId>>,
    is_enqueued: KeyedVec<ConstraintId, bool>,
    num_enqueued: usize,
    present_priorities: BinaryHeap<Reverse<u32>>,
}

impl Default for PropagatorQueue {
    fn default() -> Self {
        Self::new(Priority::NUM_LEVELS)
    }
}

impl PropagatorQueue {
    pub(crate) fn new(num_priority_levels: u32) -> PropagatorQueue {
        PropagatorQueue {
            queues: vec![VecDeque::new(); num_priority_levels as usize],
            is_enqueued: KeyedVec::default(),
            num_enqueued: 0,
            present_priorities: BinaryHeap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.num_enqueued == 0
    }

    pub(crate) fn enqueue(&mut self, constraint_id: ConstraintId, priority: Priority) {
        planner_assert_moderate!((priority as usize) < self.queues.len());

        if self.is_enqueued(constraint_id) {
            return;
        }

        self.is_enqueued.accommodate(constraint_id);
        self.is_enqueued[constraint_id] = true;
        self.num_enqueued += 1;

        if self.queues[priority as usize].is_empty() {
            self.present_priorities.push(Reverse(priority as u32));
        }
        self.queues[priority as usize].push_back(constraint_id);
    }

    pub(crate) fn pop(&mut self) -> Option<ConstraintId> {
        let top_priority = self.present_priorities.peek()?.0 as usize;
        planner_assert_moderate!(!self.queues[top_priority].is_empty());

        let next_constraint_id = self.queues[top_priority].pop_front();

        if let Some(constraint_id) = next_constraint_id {
            self.is_enqueued[constraint_id] = false;
            self.num_enqueued -= 1;
        }

        if self.queues[top_priority].is_empty() {
            let _ = self.present_priorities.pop();
        }

        next_constraint_id
    }

    pub(crate) fn clear(&mut self) {
        for queue in self.queues.iter_mut() {
            queue.clear();
        }
        for is_enqueued in self.is_enqueued.iter_mut() {
            *is_enqueued = false;
        }

        self.present_priorities.clear();
        self.num_enqueued = 0;
    }

    pub(crate) fn is_enqueued(&self, constraint_id: ConstraintId) -> bool {
        self.is_enqueued
            .get(constraint_id)
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::StorageKey;

    fn id(index: usize) -> ConstraintId {
        ConstraintId::create_from_index(index)
    }

    #[test]
    fn higher_priorities_are_popped_first() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue(id(3), Priority::Low);
        queue.enqueue(id(0), Priority::Medium);
        queue.enqueue(id(1), Priority::High);
        queue.enqueue(id(4), Priority::High);

        assert_eq!(Some(id(1)), queue.pop());
        assert_eq!(Some(id(4)), queue.pop());
        assert_eq!(Some(id(0)), queue.pop());
        assert_eq!(Some(id(3)), queue.pop());
        assert_eq!(None, queue.pop());
        assert!(queue.is_empty());
    }

    #[test]
    fn constraint_is_enqueued_at_most_once() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue(id(2), Priority::High);
        queue.enqueue(id(2), Priority::High);

        assert!(queue.is_enqueued(id(2)));
        assert_eq!(Some(id(2)), queue.pop());
        assert_eq!(None, queue.pop());
        assert!(!queue.is_enqueued(id(2)));
    }

    #[test]
    fn clear_empties_every_level() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue(id(0), Priority::High);
        queue.enqueue(id(1), Priority::Low);
        queue.clear();

        assert!(queue.is_empty());
        assert!(!queue.is_enqueued(id(1)));
        assert_eq!(None, queue.pop());

        queue.enqueue(id(1), Priority::Medium);
        assert_eq!(Some(id(1)), queue.pop());
    }
}
