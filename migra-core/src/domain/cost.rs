use crate::foundation::{MAX_REFERENCES_PER_OPERATION, REGISTRY_KEY_SIZE};
use rust_decimal::Decimal;

/// Pricing inputs for registry reservations, in display units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostParams {
    /// Minimum-balance reservation per registry entry.
    pub per_entry_base: Decimal,
    /// Minimum-balance reservation per key byte.
    pub per_byte: Decimal,
    /// Flat fee per registration operation.
    pub per_operation_fee: Decimal,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            per_entry_base: Decimal::new(25, 4),    // 0.0025
            per_byte: Decimal::new(4, 4),           // 0.0004
            per_operation_fee: Decimal::new(1, 3),  // 0.001
        }
    }
}

/// Projected cost of holding `entry_count` registry entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostProjection {
    pub entry_count: u64,
    pub min_balance: Decimal,
    pub operation_count: u64,
    pub fees: Decimal,
}

/// Pure projection; performs no I/O.
pub fn project(entry_count: u64, params: &CostParams) -> CostProjection {
    let per_entry = params.per_entry_base + params.per_byte * Decimal::from(REGISTRY_KEY_SIZE as u64);
    let min_balance = Decimal::from(entry_count) * per_entry;
    let operation_count = entry_count.div_ceil(MAX_REFERENCES_PER_OPERATION as u64);
    let fees = Decimal::from(operation_count) * params.per_operation_fee;
    CostProjection {
        entry_count,
        min_balance,
        operation_count,
        fees,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_entries_at_default_pricing() {
        let projection = project(9, &CostParams::default());
        assert_eq!(projection.min_balance, Decimal::new(1377, 4)); // 9 * 0.0153
        assert_eq!(projection.operation_count, 2);
        assert_eq!(projection.fees, Decimal::new(2, 3)); // 0.002
    }

    #[test]
    fn operation_count_is_a_ceiling_division() {
        let params = CostParams::default();
        assert_eq!(project(0, &params).operation_count, 0);
        assert_eq!(project(1, &params).operation_count, 1);
        assert_eq!(project(8, &params).operation_count, 1);
        assert_eq!(project(17, &params).operation_count, 3);
    }

    #[test]
    fn zero_entries_cost_nothing() {
        let projection = project(0, &CostParams::default());
        assert_eq!(projection.min_balance, Decimal::ZERO);
        assert_eq!(projection.fees, Decimal::ZERO);
    }
}
