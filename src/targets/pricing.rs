//! Profit/price conversion and projected-profit estimation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{OrderSide, ProfitTarget};

/// Absolute exit price for a profit percentage over the reference price.
///
/// A buy order takes profit above the reference, a sell order below it.
/// No bounds checking: the caller guarantees the reference is meaningful.
pub fn target_price(profit: Decimal, reference: Decimal, side: OrderSide) -> Decimal {
    let step = profit / dec!(100);
    match side {
        OrderSide::Buy => reference * (Decimal::ONE + step),
        OrderSide::Sell => reference * (Decimal::ONE - step),
    }
}

/// Profit percentage implied by an exit price. Inverse of [`target_price`].
///
/// Returns zero when the reference price is unset rather than dividing by it.
pub fn profit_from_price(price: Decimal, reference: Decimal, side: OrderSide) -> Decimal {
    if reference.is_zero() {
        return Decimal::ZERO;
    }
    match side {
        OrderSide::Buy => (price / reference - Decimal::ONE) * dec!(100),
        OrderSide::Sell => (Decimal::ONE - price / reference) * dec!(100),
    }
}

/// Estimated total quote-currency profit if every complete target is hit.
///
/// Targets missing `price` or `amount_percent`, or carrying a non-positive
/// price, contribute nothing. Returns zero outright when the feature is
/// disabled or the reference price or order amount is unset.
pub fn projected_profit(
    targets: &[ProfitTarget],
    order_amount: Decimal,
    reference: Decimal,
    side: OrderSide,
    enabled: bool,
) -> Decimal {
    if !enabled || reference.is_zero() || order_amount.is_zero() {
        return Decimal::ZERO;
    }

    targets.iter().fold(Decimal::ZERO, |acc, target| {
        let (Some(price), Some(amount_percent)) = (target.price, target.amount_percent) else {
            return acc;
        };
        if price <= Decimal::ZERO {
            return acc;
        }

        let allocated = order_amount * (amount_percent / dec!(100));
        let per_unit = match side {
            OrderSide::Buy => price - reference,
            OrderSide::Sell => reference - price,
        };
        acc + allocated * per_unit
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_target(price: Option<Decimal>, amount_percent: Option<Decimal>) -> ProfitTarget {
        ProfitTarget {
            id: 1,
            profit: None,
            price,
            amount_percent,
        }
    }

    #[test]
    fn test_target_price_by_side() {
        assert_eq!(target_price(dec!(2), dec!(100), OrderSide::Buy), dec!(102));
        assert_eq!(target_price(dec!(2), dec!(100), OrderSide::Sell), dec!(98));

        // Negative profit flips below/above the reference
        assert_eq!(target_price(dec!(-5), dec!(200), OrderSide::Buy), dec!(190));
        assert_eq!(target_price(dec!(-5), dec!(200), OrderSide::Sell), dec!(210));
    }

    #[test]
    fn test_profit_from_price_roundtrip() {
        for side in [OrderSide::Buy, OrderSide::Sell] {
            for profit in [dec!(0.01), dec!(2), dec!(7.5), dec!(-3), dec!(150)] {
                let price = target_price(profit, dec!(27500), side);
                assert_eq!(profit_from_price(price, dec!(27500), side), profit);
            }
        }
    }

    #[test]
    fn test_profit_from_price_zero_reference() {
        assert_eq!(
            profit_from_price(dec!(110), Decimal::ZERO, OrderSide::Buy),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_projected_profit_by_side() {
        let targets = vec![make_target(Some(dec!(110)), Some(dec!(100)))];

        // 1 BTC, all of it exiting at 110 against a 100 entry
        let buy = projected_profit(&targets, dec!(1), dec!(100), OrderSide::Buy, true);
        assert_eq!(buy, dec!(10));

        let sell = projected_profit(&targets, dec!(1), dec!(100), OrderSide::Sell, true);
        assert_eq!(sell, dec!(-10));
    }

    #[test]
    fn test_projected_profit_disabled_or_unset() {
        let targets = vec![make_target(Some(dec!(110)), Some(dec!(100)))];

        assert_eq!(
            projected_profit(&targets, dec!(1), dec!(100), OrderSide::Buy, false),
            Decimal::ZERO
        );
        assert_eq!(
            projected_profit(&targets, Decimal::ZERO, dec!(100), OrderSide::Buy, true),
            Decimal::ZERO
        );
        assert_eq!(
            projected_profit(&targets, dec!(1), Decimal::ZERO, OrderSide::Buy, true),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_projected_profit_skips_incomplete_targets() {
        let targets = vec![
            make_target(Some(dec!(110)), Some(dec!(50))), // contributes 5
            make_target(None, Some(dec!(30))),            // no price
            make_target(Some(dec!(120)), None),           // no amount
            make_target(Some(Decimal::ZERO), Some(dec!(20))), // non-positive price
        ];

        let total = projected_profit(&targets, dec!(1), dec!(100), OrderSide::Buy, true);
        assert_eq!(total, dec!(5));
    }
}
