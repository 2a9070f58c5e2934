//! Ladder configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Configuration for the take-profit ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Maximum number of targets in the ladder
    pub max_targets: usize,

    /// Ceiling on the sum of all profit percentages
    pub max_profit_sum: Decimal,

    /// Required total of amount allocations across targets, in percent
    pub amount_percent_total: Decimal,

    /// Minimum profit percentage for a single target
    pub min_profit: Decimal,

    /// Profit percentage of the seeded first target
    pub initial_profit: Decimal,

    /// Amount allocation of the seeded first target, in percent
    pub initial_amount_percent: Decimal,

    /// Profit increment over the previous target when adding
    pub profit_step: Decimal,

    /// Amount allocation given to an added target, in percent
    pub added_amount_percent: Decimal,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            max_targets: 5,
            max_profit_sum: dec!(500),         // Max 500% summed profit
            amount_percent_total: dec!(100),   // Allocations must total 100%
            min_profit: dec!(0.01),            // Min 0.01% per target
            initial_profit: dec!(2),           // Seeded target triggers at +2%
            initial_amount_percent: dec!(100), // Seeded target takes the full amount
            profit_step: dec!(2),              // Each added target: +2% over the last
            added_amount_percent: dec!(20),    // Each added target: 20% of the amount
        }
    }
}
