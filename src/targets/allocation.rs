//! Overflow correction for amount allocations.

use rust_decimal::Decimal;

use crate::models::ProfitTarget;

/// Cap the summed amount allocation at `max_total`.
///
/// When the sum of present `amount_percent` values exceeds the cap, the
/// single largest allocation absorbs the whole excess (first occurrence
/// wins ties), floored at zero. Sums at or under the cap are left alone.
pub fn normalize_amounts(targets: &mut [ProfitTarget], max_total: Decimal) {
    let sum: Decimal = targets.iter().map(|t| t.amount_or_zero()).sum();
    if targets.is_empty() || sum <= max_total {
        return;
    }

    let mut max_index = 0;
    let mut max_value = targets[0].amount_or_zero();
    for (index, target) in targets.iter().enumerate().skip(1) {
        let value = target.amount_or_zero();
        if value > max_value {
            max_value = value;
            max_index = index;
        }
    }

    let excess = sum - max_total;
    targets[max_index].amount_percent = Some((max_value - excess).max(Decimal::ZERO));
}
