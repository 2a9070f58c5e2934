//! Take-profit target ladder for a trading order form.
//!
//! Manages a bounded list of percentage-based exit targets: keeps each
//! target's profit and price in sync with the order's side and reference
//! price, caps the amount allocation across targets, estimates projected
//! profit, and validates the ladder into field-scoped findings.
//!
//! The [`TargetEngine`] is the single mutable owner of the ladder; the host
//! form feeds it reference-context changes (side, price, amount, feature
//! toggle) through explicit hooks and reads back the ladder, the projected
//! profit, and the latest validation findings.

pub mod models;
pub mod targets;

pub use models::{OrderSide, ProfitTarget};
pub use targets::{
    normalize_amounts, profit_from_price, projected_profit, target_price, validate_targets,
    ErrorField, LadderConfig, TargetEngine, ValidationError,
};
