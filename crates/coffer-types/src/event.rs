//! Notification types for the Coffer audit trail.
//!
//! Every successful mutating operation emits exactly one [`Notification`];
//! consumers observe them in call order through the treasury's event log.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// A structured notification describing one committed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// An operator added a crew member.
    CrewAdded {
        member: AccountId,
        operator: AccountId,
    },
    /// An operator removed a crew member.
    CrewRemoved {
        member: AccountId,
        operator: AccountId,
    },
    /// The treasury accepted an incoming payment.
    PaymentReceived {
        payer: AccountId,
        amount: u128,
        balance_after: u128,
    },
    /// A drain was registered.
    DrainAdded {
        address: AccountId,
        min: u128,
        max: u128,
    },
    /// A drain's floor or ceiling changed; carries the resulting full pair.
    DrainUpdated {
        address: AccountId,
        min: u128,
        max: u128,
    },
    /// A drain was retired; its slot is now a tombstone.
    DrainRemoved { address: AccountId },
    /// Funds moved from the treasury to a drain.
    PaymentSent {
        drain: AccountId,
        amount: u128,
        balance_after: u128,
    },
}

impl Notification {
    /// The wire-stable name of this notification.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CrewAdded { .. } => "CREW_ADDED",
            Self::CrewRemoved { .. } => "CREW_REMOVED",
            Self::PaymentReceived { .. } => "PAYMENT_RECEIVED",
            Self::DrainAdded { .. } => "DRAIN_ADDED",
            Self::DrainUpdated { .. } => "DRAIN_UPDATED",
            Self::DrainRemoved { .. } => "DRAIN_REMOVED",
            Self::PaymentSent { .. } => "PAYMENT_SENT",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A sequenced, timestamped entry in the treasury event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Position in the log; consecutive from zero.
    pub seq: u64,
    /// When the mutation committed.
    pub at: DateTime<Utc>,
    /// What happened.
    pub notification: Notification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_display() {
        let n = Notification::DrainAdded {
            address: AccountId::from_seed("drain"),
            min: 1,
            max: 2,
        };
        assert_eq!(format!("{n}"), "DRAIN_ADDED");
        let n = Notification::PaymentSent {
            drain: AccountId::from_seed("drain"),
            amount: 5,
            balance_after: 0,
        };
        assert_eq!(format!("{n}"), "PAYMENT_SENT");
    }

    #[test]
    fn notification_serde_roundtrip() {
        let n = Notification::PaymentReceived {
            payer: AccountId::from_seed("payer"),
            amount: 100_000,
            balance_after: 100_000,
        };
        let json = serde_json::to_string(&n).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }

    #[test]
    fn event_serde_roundtrip() {
        let event = Event {
            seq: 7,
            at: Utc::now(),
            notification: Notification::CrewAdded {
                member: AccountId::from_seed("member"),
                operator: AccountId::from_seed("operator"),
            },
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seq, 7);
        assert_eq!(back.notification, event.notification);
    }
}
