//! The drain entry model.
//!
//! A drain is a destination the treasury tops up: once its external balance
//! falls below `min` it is due for funds, and a transfer fills it up to at
//! most `max`. Live entries always satisfy `max > 0 && min <= max`.

use serde::{Deserialize, Serialize};

use crate::AccountId;

/// A registered drain destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrainEntry {
    /// Destination account. Non-zero, unique among live entries.
    pub address: AccountId,
    /// Registry slot assigned at insertion, stable until removal.
    pub slot: usize,
    /// Balance floor below which the drain is eligible to receive funds.
    pub min: u128,
    /// Balance ceiling a transfer tops the drain up to.
    pub max: u128,
}

impl DrainEntry {
    /// How much the drain can still absorb before hitting its ceiling.
    #[must_use]
    pub fn room_below_max(&self, external_balance: u128) -> u128 {
        self.max.saturating_sub(external_balance)
    }

    /// Whether the drain sits below its floor and is due for a top-up.
    #[must_use]
    pub fn wants_funds(&self, external_balance: u128) -> bool {
        external_balance < self.min
    }
}
