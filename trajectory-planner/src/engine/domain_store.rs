use std::vec::Drain;

use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::planner_assert_moderate;
use crate::planner_assert_simple;

/// Signals that a narrowing operation would leave a domain without any value.
///
/// The domain on which the operation was attempted is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EmptyDomain;

/// The number of values, counted from the root lower bound, that can be removed from the inside of
/// a domain. Values beyond this window can only be removed at the bounds.
const HOLE_WINDOW: i64 = u64::BITS as i64;

/// The admissible values of one variable: the interval `[lower_bound, upper_bound]` minus the
/// values marked in `holes`.
///
/// The bounds never rest on a hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IntegerDomain {
    root_lower_bound: i32,
    root_upper_bound: i32,
    lower_bound: i32,
    upper_bound: i32,
    /// Bit `i` is set iff `root_lower_bound + i` has been removed.
    holes: u64,
}

impl IntegerDomain {
    fn new(lower_bound: i32, upper_bound: i32) -> IntegerDomain {
        IntegerDomain {
            root_lower_bound: lower_bound,
            root_upper_bound: upper_bound,
            lower_bound,
            upper_bound,
            holes: 0,
        }
    }

    fn hole_offset(&self, value: i32) -> Option<u32> {
        let offset = value as i64 - self.root_lower_bound as i64;
        (0..HOLE_WINDOW).contains(&offset).then_some(offset as u32)
    }

    fn is_hole(&self, value: i32) -> bool {
        self.hole_offset(value)
            .is_some_and(|offset| self.holes & (1 << offset) != 0)
    }

    fn contains(&self, value: i32) -> bool {
        self.lower_bound <= value && value <= self.upper_bound && !self.is_hole(value)
    }

    fn values(&self) -> impl Iterator<Item = i32> + '_ {
        (self.lower_bound..=self.upper_bound).filter(|&value| !self.is_hole(value))
    }

    /// Returns the intersection of this domain with `[lower_bound, upper_bound]`.
    fn intersected(
        &self,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<IntegerDomain, EmptyDomain> {
        let mut new_lower_bound = self.lower_bound.max(lower_bound);
        let mut new_upper_bound = self.upper_bound.min(upper_bound);

        while new_lower_bound <= new_upper_bound && self.is_hole(new_lower_bound) {
            new_lower_bound += 1;
        }
        while new_lower_bound <= new_upper_bound && self.is_hole(new_upper_bound) {
            new_upper_bound -= 1;
        }

        if new_lower_bound > new_upper_bound {
            return Err(EmptyDomain);
        }

        Ok(IntegerDomain {
            lower_bound: new_lower_bound,
            upper_bound: new_upper_bound,
            ..*self
        })
    }

    /// Returns this domain without `value`.
    ///
    /// Removing an inner value that lies outside of the hole window leaves the domain as it is;
    /// such a value is still rejected once the variable becomes fixed to it.
    fn without(&self, value: i32) -> Result<IntegerDomain, EmptyDomain> {
        if !self.contains(value) {
            return Ok(*self);
        }

        if self.lower_bound == self.upper_bound {
            return Err(EmptyDomain);
        }

        if value == self.lower_bound {
            return self.intersected(value + 1, self.upper_bound);
        }

        if value == self.upper_bound {
            return self.intersected(self.lower_bound, value - 1);
        }

        match self.hole_offset(value) {
            Some(offset) => Ok(IntegerDomain {
                holes: self.holes | (1 << offset),
                ..*self
            }),
            None => Ok(*self),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct TrailEntry {
    domain_id: DomainId,
    previous: IntegerDomain,
}

/// Holds the current domain of every decision variable.
///
/// Domains only ever shrink while the search descends; every change is recorded on a trail so that
/// [`DomainStore::synchronise`] can restore the domains of an earlier decision level. The store
/// also remembers which variables changed since [`DomainStore::drain_modified`] was last called,
/// which is what drives the propagation work list.
#[derive(Clone, Debug, Default)]
pub(crate) struct DomainStore {
    domains: KeyedVec<DomainId, IntegerDomain>,
    trail: Trail<TrailEntry>,
    modified: Vec<DomainId>,
}

impl DomainStore {
    /// Creates a new variable with the domain `[lower_bound, upper_bound]`.
    pub(crate) fn new_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        planner_assert_simple!(
            self.get_decision_level() == 0,
            "can only create variables at the root"
        );
        planner_assert_simple!(
            lower_bound <= upper_bound,
            "cannot create a variable with the empty domain [{lower_bound}, {upper_bound}]"
        );

        self.domains.push(IntegerDomain::new(lower_bound, upper_bound))
    }

    pub(crate) fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub(crate) fn variables(&self) -> impl Iterator<Item = DomainId> {
        self.domains.keys()
    }

    pub(crate) fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound
    }

    pub(crate) fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound
    }

    pub(crate) fn contains(&self, domain_id: DomainId, value: i32) -> bool {
        self.domains[domain_id].contains(value)
    }

    /// Iterates over the values currently in the domain of `domain_id`, in increasing order.
    pub(crate) fn values(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.domains[domain_id].values()
    }

    /// Returns `true` iff the domain of `domain_id` holds exactly one value.
    pub(crate) fn is_fixed(&self, domain_id: DomainId) -> bool {
        let domain = &self.domains[domain_id];
        domain.lower_bound == domain.upper_bound
    }

    /// Returns the value of a fixed variable.
    ///
    /// # Panics
    /// If the variable is not fixed.
    pub(crate) fn value(&self, domain_id: DomainId) -> i32 {
        planner_assert_simple!(
            self.is_fixed(domain_id),
            "the value of {domain_id} was requested but its domain is [{}, {}]",
            self.lower_bound(domain_id),
            self.upper_bound(domain_id),
        );
        self.lower_bound(domain_id)
    }

    pub(crate) fn all_fixed(&self) -> bool {
        self.variables().all(|domain_id| self.is_fixed(domain_id))
    }

    /// Intersects the domain of `domain_id` with `[lower_bound, upper_bound]`.
    ///
    /// Returns whether the domain shrank.
    pub(crate) fn narrow(
        &mut self,
        domain_id: DomainId,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<bool, EmptyDomain> {
        let narrowed = self.domains[domain_id].intersected(lower_bound, upper_bound)?;
        Ok(self.update(domain_id, narrowed))
    }

    pub(crate) fn set_lower_bound(
        &mut self,
        domain_id: DomainId,
        lower_bound: i32,
    ) -> Result<bool, EmptyDomain> {
        self.narrow(domain_id, lower_bound, i32::MAX)
    }

    pub(crate) fn set_upper_bound(
        &mut self,
        domain_id: DomainId,
        upper_bound: i32,
    ) -> Result<bool, EmptyDomain> {
        self.narrow(domain_id, i32::MIN, upper_bound)
    }

    pub(crate) fn fix(&mut self, domain_id: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        self.narrow(domain_id, value, value)
    }

    /// Removes `value` from the domain of `domain_id`.
    ///
    /// Returns whether the domain shrank.
    pub(crate) fn remove(&mut self, domain_id: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        let narrowed = self.domains[domain_id].without(value)?;
        Ok(self.update(domain_id, narrowed))
    }

    fn update(&mut self, domain_id: DomainId, new_domain: IntegerDomain) -> bool {
        let previous = self.domains[domain_id];
        if previous == new_domain {
            return false;
        }

        planner_assert_moderate!(
            previous.root_lower_bound <= new_domain.lower_bound
                && new_domain.upper_bound <= previous.root_upper_bound,
            "{domain_id} left its root domain"
        );

        self.trail.push(TrailEntry {
            domain_id,
            previous,
        });
        self.domains[domain_id] = new_domain;
        self.modified.push(domain_id);

        true
    }

    /// Hands out the variables whose domain changed since the previous call, in the order in
    /// which they changed. A variable appears once per change.
    pub(crate) fn drain_modified(&mut self) -> Drain<'_, DomainId> {
        self.modified.drain(..)
    }

    pub(crate) fn clear_modified(&mut self) {
        self.modified.clear();
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    pub(crate) fn increase_decision_level(&mut self) {
        self.trail.increase_decision_level();
    }

    /// Restores all domains to the state they had at `decision_level`.
    pub(crate) fn synchronise(&mut self, decision_level: usize) {
        if decision_level < self.get_decision_level() {
            for entry in self.trail.synchronise(decision_level) {
                self.domains[entry.domain_id] = entry.previous;
            }
        }
        self.modified.clear();
    }
}
