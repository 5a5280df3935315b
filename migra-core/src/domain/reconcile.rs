use crate::domain::address::Address;
use crate::foundation::MAX_REFERENCES_PER_OPERATION;
use std::collections::HashSet;
use std::fmt;

/// Delta between the desired recipient set and the on-chain state.
///
/// Derived per run, never stored. Claimed accounts are excluded from
/// additions even when still listed as desired: their registry slot may
/// already have been reclaimed by the claim flow.
#[derive(Clone, Debug, Default)]
pub struct ReconciliationPlan {
    /// Desired but neither registered nor claimed, in desired-list order.
    pub to_add: Vec<Address>,
    /// Registered but no longer desired, in registry-snapshot order.
    ///
    /// The registry application exposes no removal entrypoint; this set is
    /// surfaced for the operator, not executed.
    pub to_remove: Vec<Address>,
    pub claimed_count: usize,
    pub registered_count: usize,
}

impl ReconciliationPlan {
    pub fn compute(desired: &[Address], registered: &[Address], claimed: &HashSet<Address>) -> Self {
        let registered_set: HashSet<Address> = registered.iter().copied().collect();
        let desired_set: HashSet<Address> = desired.iter().copied().collect();

        let to_add = desired
            .iter()
            .filter(|account| !registered_set.contains(account) && !claimed.contains(account))
            .copied()
            .collect();
        let to_remove = registered
            .iter()
            .filter(|account| !desired_set.contains(account))
            .copied()
            .collect();

        Self {
            to_add,
            to_remove,
            claimed_count: claimed.len(),
            registered_count: registered.len(),
        }
    }

    /// Additions partitioned into submission-sized chunks, order preserved.
    pub fn batches(&self) -> impl Iterator<Item = &[Address]> {
        self.to_add.chunks(MAX_REFERENCES_PER_OPERATION)
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            claimed: self.claimed_count,
            registered: self.registered_count,
            new: self.to_add.len(),
            to_remove: self.to_remove.len(),
        }
    }
}

/// The four counts surfaced to the operator before any mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanSummary {
    pub claimed: usize,
    pub registered: usize,
    pub new: usize,
    pub to_remove: usize,
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "claimed={} registered={} new={} to_remove={}",
            self.claimed, self.registered, self.new, self.to_remove
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(seed: u8) -> Address {
        Address::new([seed; 32])
    }

    #[test]
    fn partitions_desired_registered_and_claimed() {
        let (a, b, c, d) = (addr(1), addr(2), addr(3), addr(4));
        let desired = [a, b, c];
        let registered = [b, d];
        let claimed: HashSet<Address> = [c].into_iter().collect();

        let plan = ReconciliationPlan::compute(&desired, &registered, &claimed);
        assert_eq!(plan.to_add, vec![a]);
        assert_eq!(plan.to_remove, vec![d]);
        assert_eq!(
            plan.summary(),
            PlanSummary {
                claimed: 1,
                registered: 2,
                new: 1,
                to_remove: 1
            }
        );
    }

    #[test]
    fn seventeen_additions_chunk_into_8_8_1() {
        let desired: Vec<Address> = (0..17).map(|i| addr(i as u8)).collect();
        let plan = ReconciliationPlan::compute(&desired, &[], &HashSet::new());

        let batches: Vec<&[Address]> = plan.batches().collect();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 8);
        assert_eq!(batches[1].len(), 8);
        assert_eq!(batches[2].len(), 1);

        let flattened: Vec<Address> = batches.concat();
        assert_eq!(flattened, desired);
    }

    #[test]
    fn empty_inputs_produce_an_empty_plan() {
        let plan = ReconciliationPlan::compute(&[], &[], &HashSet::new());
        assert!(plan.to_add.is_empty());
        assert!(plan.to_remove.is_empty());
        assert_eq!(plan.batches().count(), 0);
    }

    #[test]
    fn fully_converged_state_is_a_noop() {
        let (a, b) = (addr(1), addr(2));
        let plan = ReconciliationPlan::compute(&[a, b], &[a, b], &HashSet::new());
        assert!(plan.to_add.is_empty());
        assert!(plan.to_remove.is_empty());
    }
}
