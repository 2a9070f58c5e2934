//! Rule-based validation of the target ladder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ProfitTarget;

use super::LadderConfig;

/// Which input field a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorField {
    Profit,
    Price,
    Amount,
    Global,
}

/// A single user-facing validation finding.
///
/// Findings are advisory data: they gate a caller-defined submit action but
/// never block further mutation of the ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: ErrorField,
    pub index: Option<usize>,
    pub message: String,
}

impl ValidationError {
    fn global(message: impl Into<String>) -> Self {
        Self {
            field: ErrorField::Global,
            index: None,
            message: message.into(),
        }
    }

    fn at(field: ErrorField, index: usize, message: impl Into<String>) -> Self {
        Self {
            field,
            index: Some(index),
            message: message.into(),
        }
    }
}

/// Run every rule over the ladder and collect all findings.
///
/// An empty ladder is valid by definition. Rules are independent and do not
/// short-circuit; absent fields are skipped rather than failed, except that
/// the amount total counts an absent allocation as zero.
pub fn validate_targets(targets: &[ProfitTarget], config: &LadderConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if targets.is_empty() {
        return errors;
    }

    let profit_sum: Decimal = targets.iter().filter_map(|t| t.profit).sum();
    if profit_sum > config.max_profit_sum {
        errors.push(ValidationError::global(format!(
            "Maximum profit sum is {}%",
            config.max_profit_sum
        )));
    }

    let amount_sum: Decimal = targets.iter().map(|t| t.amount_or_zero()).sum();
    if amount_sum > config.amount_percent_total {
        let excess = amount_sum - config.amount_percent_total;
        errors.push(ValidationError::global(format!(
            "{:.2} out of {}% selected. Please decrease by {:.2}",
            amount_sum, config.amount_percent_total, excess
        )));
    } else if amount_sum < config.amount_percent_total {
        let shortfall = config.amount_percent_total - amount_sum;
        errors.push(ValidationError::global(format!(
            "{:.2} out of {}% selected. Please increase by {:.2}",
            amount_sum, config.amount_percent_total, shortfall
        )));
    }

    for (index, target) in targets.iter().enumerate() {
        if let Some(profit) = target.profit {
            if profit < config.min_profit {
                errors.push(ValidationError::at(
                    ErrorField::Profit,
                    index,
                    format!("Minimum value is {}%", config.min_profit),
                ));
            }

            // Each profit is compared against its direct predecessor only
            if index > 0 {
                if let Some(previous) = targets[index - 1].profit {
                    if profit <= previous {
                        errors.push(ValidationError::at(
                            ErrorField::Profit,
                            index,
                            "Each target's profit should be greater than the previous one",
                        ));
                    }
                }
            }
        }

        if let Some(price) = target.price {
            if price <= Decimal::ZERO {
                errors.push(ValidationError::at(
                    ErrorField::Price,
                    index,
                    "Price must be greater than 0",
                ));
            }
        }
    }

    errors
}
