//! Data models for the take-profit ladder.

mod target;

pub use target::{OrderSide, ProfitTarget};
