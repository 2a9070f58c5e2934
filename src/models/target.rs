//! Profit target model representing one exit level of the ladder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of the underlying order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

/// One take-profit exit level.
///
/// `profit` and `price` are kept in sync by the engine: a reference-price
/// change rewrites `price` from `profit`, while a committed price edit
/// rewrites `profit` from `price`. `None` means the user cleared the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitTarget {
    /// Stable identifier for list rendering; never reused after removal
    pub id: u64,

    /// Profit percentage relative to the order's reference price
    pub profit: Option<Decimal>,

    /// Absolute exit price in quote currency
    pub price: Option<Decimal>,

    /// Share of the order's amount allocated to this level, in percent
    pub amount_percent: Option<Decimal>,
}

impl ProfitTarget {
    /// Amount allocation with an absent field counted as zero.
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount_percent.unwrap_or_default()
    }
}
