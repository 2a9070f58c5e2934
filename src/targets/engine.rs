//! Target ladder engine: owns the list and keeps derived fields consistent.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::{OrderSide, ProfitTarget};

use super::{normalize_amounts, pricing, validate_targets, ErrorField, LadderConfig, ValidationError};

/// Mutable state of the take-profit ladder for a single order form.
///
/// The engine owns the target list exclusively; callers read it through
/// [`targets`](Self::targets) and mutate it only through the methods here.
/// Reference-context changes arrive through the `set_*` hooks, which
/// re-express the host form's reactive bindings as explicit update calls.
pub struct TargetEngine {
    config: LadderConfig,

    // Reference context supplied by the order form
    side: OrderSide,
    reference_price: Decimal,
    order_amount: Decimal,
    enabled: bool,

    // Owned ladder state
    targets: Vec<ProfitTarget>,
    next_id: u64,
    errors: Vec<ValidationError>,
}

impl TargetEngine {
    /// Create a disabled engine with an empty ladder.
    pub fn new(config: LadderConfig, side: OrderSide, reference_price: Decimal) -> Self {
        Self {
            config,
            side,
            reference_price,
            order_amount: Decimal::ZERO,
            enabled: false,
            targets: Vec::new(),
            next_id: 1,
            errors: Vec::new(),
        }
    }

    // ==================== Reference context hooks ====================

    /// Toggle the take-profit feature.
    ///
    /// Enabling seeds one default target if the ladder is empty; disabling
    /// discards the whole ladder. Repeating the current value is a no-op.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;

        if enabled {
            if self.targets.is_empty() {
                let target = self.seed_target();
                info!(id = target.id, "Seeded initial profit target");
                self.targets.push(target);
            }
        } else {
            self.targets.clear();
            debug!("Take-profit disabled, ladder cleared");
        }
    }

    /// Update the order side and reprice every target from its profit.
    pub fn set_side(&mut self, side: OrderSide) {
        self.side = side;
        self.reprice_targets();
    }

    /// Update the reference price and reprice every target from its profit.
    pub fn set_reference_price(&mut self, price: Decimal) {
        self.reference_price = price;
        self.reprice_targets();
    }

    /// Update the order amount. Projection picks this up on demand; no
    /// target is recomputed.
    pub fn set_order_amount(&mut self, amount: Decimal) {
        self.order_amount = amount;
    }

    // Profit is the source of truth on reference changes: price is rewritten
    // for every target that has one, the rest are left alone.
    fn reprice_targets(&mut self) {
        if self.reference_price.is_zero() {
            return;
        }
        for target in &mut self.targets {
            let Some(profit) = target.profit else { continue };
            target.price = Some(pricing::target_price(profit, self.reference_price, self.side));
        }
    }

    // ==================== Ladder mutations ====================

    /// Append a target one profit step above the last one.
    ///
    /// A no-op when the feature is disabled or the ladder is full. The new
    /// allocation may push the total over the cap, in which case the largest
    /// allocation absorbs the overflow.
    pub fn add_target(&mut self) {
        if !self.enabled || self.targets.len() >= self.config.max_targets {
            return;
        }

        let base_profit = match self.targets.last() {
            Some(last) => last.profit.unwrap_or_default(),
            None => self.config.initial_profit,
        };
        let profit = base_profit + self.config.profit_step;

        let target = ProfitTarget {
            id: self.take_id(),
            profit: Some(profit),
            price: Some(pricing::target_price(profit, self.reference_price, self.side)),
            amount_percent: Some(self.config.added_amount_percent),
        };

        debug!(id = target.id, profit = %profit, "Added profit target");
        self.targets.push(target);
        normalize_amounts(&mut self.targets, self.config.amount_percent_total);
    }

    /// Remove the target at `index`. Amounts are not rebalanced; the next
    /// validation pass reports any resulting shortfall.
    pub fn remove_target(&mut self, index: usize) {
        if index >= self.targets.len() {
            return;
        }
        let target = self.targets.remove(index);
        debug!(id = target.id, index = index, "Removed profit target");
    }

    /// Commit a profit edit: the new profit becomes authoritative and the
    /// target's price is recomputed from it. A cleared field or an unset
    /// reference price leaves the price untouched.
    pub fn set_profit(&mut self, index: usize, profit: Option<Decimal>) {
        let reference = self.reference_price;
        let side = self.side;
        let Some(target) = self.targets.get_mut(index) else {
            return;
        };

        target.profit = profit;
        if let Some(profit) = profit {
            if !reference.is_zero() {
                target.price = Some(pricing::target_price(profit, reference, side));
            }
        }
    }

    /// Commit a price edit: the new price becomes authoritative and the
    /// target's profit is recomputed from it.
    pub fn set_price(&mut self, index: usize, price: Option<Decimal>) {
        let reference = self.reference_price;
        let side = self.side;
        let Some(target) = self.targets.get_mut(index) else {
            return;
        };

        target.price = price;
        if let Some(price) = price {
            if !reference.is_zero() {
                target.profit = Some(pricing::profit_from_price(price, reference, side));
            }
        }
    }

    /// Store an amount edit as-is. Overflow past the configured total is
    /// surfaced by validation, never auto-corrected here.
    pub fn set_amount_percent(&mut self, index: usize, amount_percent: Option<Decimal>) {
        if let Some(target) = self.targets.get_mut(index) {
            target.amount_percent = amount_percent;
        }
    }

    // ==================== Validation ====================

    /// Validate the ladder and store the findings. Returns `true` when the
    /// ladder is clean. A disabled feature always validates clean.
    pub fn validate(&mut self) -> bool {
        if !self.enabled {
            self.errors.clear();
            return true;
        }

        self.errors = validate_targets(&self.targets, &self.config);
        if !self.errors.is_empty() {
            debug!(count = self.errors.len(), "Ladder validation failed");
        }
        self.errors.is_empty()
    }

    /// First stored finding for one field of one target.
    pub fn field_error(&self, field: ErrorField, index: usize) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field && e.index == Some(index))
            .map(|e| e.message.as_str())
    }

    /// All stored ladder-wide findings, in rule order.
    pub fn global_errors(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == ErrorField::Global)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Complete finding set from the latest [`validate`](Self::validate) call.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    // ==================== Read surface ====================

    /// The live ladder, in trigger order.
    pub fn targets(&self) -> &[ProfitTarget] {
        &self.targets
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// Estimated quote-currency profit if every complete target is hit.
    pub fn projected_profit(&self) -> Decimal {
        pricing::projected_profit(
            &self.targets,
            self.order_amount,
            self.reference_price,
            self.side,
            self.enabled,
        )
    }

    /// Whether another target may be added.
    pub fn can_add_more(&self) -> bool {
        self.enabled && self.targets.len() < self.config.max_targets
    }

    /// Label for the add button, e.g. `Add profit target 2/5`.
    pub fn add_button_label(&self) -> String {
        format!(
            "Add profit target {}/{}",
            self.targets.len(),
            self.config.max_targets
        )
    }

    fn seed_target(&mut self) -> ProfitTarget {
        let profit = self.config.initial_profit;
        ProfitTarget {
            id: self.take_id(),
            profit: Some(profit),
            price: Some(pricing::target_price(profit, self.reference_price, self.side)),
            amount_percent: Some(self.config.initial_amount_percent),
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
