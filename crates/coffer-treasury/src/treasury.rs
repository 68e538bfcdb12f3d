//! The treasury facade: crew-gated mutation, drain routing, top-up sends.
//!
//! [`Coffer`] composes the crew set, the drain registry, the mirrored cash
//! balance, and the event log. Anyone may fund it; only crew members may
//! mutate it or route funds out of it.

use coffer_crew::CrewRegistry;
use coffer_drains::DrainRegistry;
use coffer_types::{AccountId, CofferError, Notification, Result};

use crate::events::EventLog;
use crate::host::HostLedger;

/// A permissioned treasury: accumulates funds and tops registered drains up
/// toward their ceilings, bounded by its own balance.
#[derive(Debug)]
pub struct Coffer {
    crew: CrewRegistry,
    drains: DrainRegistry,
    balance: u128,
    events: EventLog,
}

impl Coffer {
    /// Deploy a treasury with `creator` as the first crew member and a zero
    /// balance.
    ///
    /// # Errors
    /// Returns `InvalidIdentity` if `creator` is the zero identity.
    pub fn new(creator: AccountId) -> Result<Self> {
        Ok(Self {
            crew: CrewRegistry::new(creator)?,
            drains: DrainRegistry::new(),
            balance: 0,
            events: EventLog::new(),
        })
    }

    // =================================================================
    // Read-only queries — no authorization required
    // =================================================================

    /// The treasury's current cash balance.
    #[must_use]
    pub fn balance(&self) -> u128 {
        self.balance
    }

    /// Whether `id` is a crew member.
    #[must_use]
    pub fn is_crew(&self, id: AccountId) -> bool {
        self.crew.is_crew(id)
    }

    /// Whether `address` is a live drain.
    #[must_use]
    pub fn is_a_drain(&self, address: AccountId) -> bool {
        self.drains.is_a_drain(address)
    }

    /// Count of drain slots ever allocated.
    #[must_use]
    pub fn drain_pointer_head(&self) -> usize {
        self.drains.head()
    }

    /// The address at `slot`: the zero identity for a tombstone, `None`
    /// past the head.
    #[must_use]
    pub fn drain_pointer(&self, slot: usize) -> Option<AccountId> {
        self.drains.pointer(slot)
    }

    /// Slot number of the live drain at `address`.
    ///
    /// # Errors
    /// Returns `NotADrain` if no live entry exists.
    pub fn index_by_address(&self, address: AccountId) -> Result<usize> {
        self.drains.index_by_address(address)
    }

    /// Floor of the live drain at `address`.
    ///
    /// # Errors
    /// Returns `NotADrain` if no live entry exists.
    pub fn min_by_address(&self, address: AccountId) -> Result<u128> {
        self.drains.min_by_address(address)
    }

    /// Ceiling of the live drain at `address`.
    ///
    /// # Errors
    /// Returns `NotADrain` if no live entry exists.
    pub fn max_by_address(&self, address: AccountId) -> Result<u128> {
        self.drains.max_by_address(address)
    }

    /// The crew registry.
    #[must_use]
    pub fn crew(&self) -> &CrewRegistry {
        &self.crew
    }

    /// The drain registry.
    #[must_use]
    pub fn drains(&self) -> &DrainRegistry {
        &self.drains
    }

    /// The audit trail of committed mutations.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Addresses of live drains whose external balance sits below their
    /// floor — the ones a routine sweep would top up next, in slot order.
    #[must_use]
    pub fn drains_due(&self, host: &dyn HostLedger) -> Vec<AccountId> {
        self.drains
            .live()
            .filter(|entry| entry.wants_funds(host.balance_of(entry.address)))
            .map(|entry| entry.address)
            .collect()
    }

    // =================================================================
    // Crew mutation
    // =================================================================

    /// Add `member` to the crew on behalf of `caller`.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not crew
    /// - `InvalidIdentity` if `member` is the zero identity
    pub fn add_crew_member(&mut self, caller: AccountId, member: AccountId) -> Result<()> {
        self.crew.add_member(caller, member)?;
        tracing::info!(member = %member, operator = %caller, "crew member added");
        self.events.emit(Notification::CrewAdded {
            member,
            operator: caller,
        });
        Ok(())
    }

    /// Remove `member` from the crew on behalf of `caller`.
    ///
    /// # Errors
    /// Returns `Unauthorized` if `caller` is not crew.
    pub fn remove_crew_member(&mut self, caller: AccountId, member: AccountId) -> Result<()> {
        self.crew.remove_member(caller, member)?;
        tracing::info!(member = %member, operator = %caller, "crew member removed");
        self.events.emit(Notification::CrewRemoved {
            member,
            operator: caller,
        });
        Ok(())
    }

    // =================================================================
    // Drain registry mutation
    // =================================================================

    /// Register a new drain. Returns its slot number.
    ///
    /// # Errors
    /// `Unauthorized`, then the registry's validation order:
    /// `InvalidAddress`, `DuplicateDrain`, `ZeroMax`, `MinExceedsMax`.
    pub fn add_drain(
        &mut self,
        caller: AccountId,
        address: AccountId,
        min: u128,
        max: u128,
    ) -> Result<usize> {
        self.crew.authorize(caller)?;
        let slot = self.drains.add(address, min, max)?;
        tracing::info!(drain = %address, slot, min, max, "drain added");
        self.events.emit(Notification::DrainAdded { address, min, max });
        Ok(slot)
    }

    /// Change a drain's floor. Emits the resulting full `(min, max)` pair.
    ///
    /// # Errors
    /// `Unauthorized`, `NotADrain`, or `MinExceedsMax` if `new_min` crosses
    /// the current ceiling.
    pub fn update_drain_min(
        &mut self,
        caller: AccountId,
        address: AccountId,
        new_min: u128,
    ) -> Result<()> {
        self.crew.authorize(caller)?;
        let entry = self.drains.update_min(address, new_min)?;
        tracing::info!(drain = %address, min = entry.min, max = entry.max, "drain updated");
        self.events.emit(Notification::DrainUpdated {
            address,
            min: entry.min,
            max: entry.max,
        });
        Ok(())
    }

    /// Change a drain's ceiling. Emits the resulting full `(min, max)` pair.
    ///
    /// # Errors
    /// `Unauthorized`, `NotADrain`, `ZeroMax`, or `MinExceedsMax` if
    /// `new_max` crosses the current floor.
    pub fn update_drain_max(
        &mut self,
        caller: AccountId,
        address: AccountId,
        new_max: u128,
    ) -> Result<()> {
        self.crew.authorize(caller)?;
        let entry = self.drains.update_max(address, new_max)?;
        tracing::info!(drain = %address, min = entry.min, max = entry.max, "drain updated");
        self.events.emit(Notification::DrainUpdated {
            address,
            min: entry.min,
            max: entry.max,
        });
        Ok(())
    }

    /// Retire a drain. Its slot becomes a tombstone; survivors keep their
    /// numbers.
    ///
    /// # Errors
    /// `Unauthorized` or `NotADrain`.
    pub fn remove_drain(&mut self, caller: AccountId, address: AccountId) -> Result<()> {
        self.crew.authorize(caller)?;
        self.drains.remove(address)?;
        tracing::info!(drain = %address, "drain removed");
        self.events.emit(Notification::DrainRemoved { address });
        Ok(())
    }

    // =================================================================
    // Payments
    // =================================================================

    /// Accept an incoming payment. Anyone may fund the treasury.
    pub fn receive(&mut self, payer: AccountId, amount: u128) {
        self.balance += amount;
        tracing::debug!(payer = %payer, amount, balance = self.balance, "payment received");
        self.events.emit(Notification::PaymentReceived {
            payer,
            amount,
            balance_after: self.balance,
        });
    }

    /// Top `target` up toward its ceiling, bounded by the treasury balance.
    ///
    /// Moves `min(room, balance)`, where `room` is how far the target's
    /// external balance sits below its configured ceiling. Returns the
    /// amount moved; zero means nothing was needed and nothing changed.
    ///
    /// The debit and the host transfer commit together: if the host rejects
    /// the payment, the staged debit is restored before the error surfaces —
    /// no partial debit is ever observable.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not crew
    /// - `NotADrain` if `target` has no live entry
    /// - `PaymentFailed` if the host transfer fails (state unchanged)
    pub fn send(
        &mut self,
        host: &mut dyn HostLedger,
        caller: AccountId,
        target: AccountId,
    ) -> Result<u128> {
        self.crew.authorize(caller)?;
        let entry = *self.drains.get(target)?;

        let room = entry.room_below_max(host.balance_of(target));
        let amount = room.min(self.balance);
        if amount == 0 {
            return Ok(0);
        }

        // Stage the debit, then attempt the transfer; restore on failure.
        self.balance -= amount;
        if let Err(err) = host.pay(target, amount) {
            self.balance += amount;
            tracing::warn!(drain = %target, amount, error = %err, "payment rolled back");
            return Err(CofferError::PaymentFailed {
                reason: err.to_string(),
            });
        }

        tracing::info!(drain = %target, amount, balance = self.balance, "payment sent");
        self.events.emit(Notification::PaymentSent {
            drain: target,
            amount,
            balance_after: self.balance,
        });
        Ok(amount)
    }
}
