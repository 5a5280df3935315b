use crate::foundation::{CoordinatorError, BASE_UNITS_PER_TOKEN};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Convert a display-unit amount string into base units.
///
/// Scales by 10^6 and truncates; rejects negative and non-numeric input.
pub fn display_to_base_units(value: &str) -> Result<u64, CoordinatorError> {
    let parsed = Decimal::from_str(value.trim()).map_err(|err| CoordinatorError::InvalidAmount(format!("{value}: {err}")))?;
    if parsed.is_sign_negative() {
        return Err(CoordinatorError::InvalidAmount(format!("{value}: amount must be non-negative")));
    }
    let scaled = parsed
        .checked_mul(Decimal::from(BASE_UNITS_PER_TOKEN))
        .ok_or_else(|| CoordinatorError::InvalidAmount(format!("{value}: amount out of range")))?;
    scaled
        .trunc()
        .to_u64()
        .ok_or_else(|| CoordinatorError::InvalidAmount(format!("{value}: amount out of range")))
}
