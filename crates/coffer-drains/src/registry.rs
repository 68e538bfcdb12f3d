//! Drain registry — an append-only arena with tombstoning removal.
//!
//! `head` counts slots ever allocated and never decreases. A removed entry's
//! slot reads as the zero identity; surviving entries keep their numbers.

use std::collections::HashMap;

use coffer_types::{AccountId, CofferError, DrainEntry, Result};

/// Ordered collection of drain entries, indexed by insertion slot.
#[derive(Debug, Default)]
pub struct DrainRegistry {
    /// Arena of slots; `None` marks a tombstone.
    slots: Vec<Option<DrainEntry>>,
    /// Live-entry lookup. Cleared on removal, never repacked.
    index: HashMap<AccountId, usize>,
}

impl DrainRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of slots ever allocated. Unaffected by removals.
    #[must_use]
    pub fn head(&self) -> usize {
        self.slots.len()
    }

    /// The address stored at `slot`: the zero identity for a tombstone,
    /// `None` past `head`.
    #[must_use]
    pub fn pointer(&self, slot: usize) -> Option<AccountId> {
        self.slots
            .get(slot)
            .map(|entry| entry.as_ref().map_or(AccountId::ZERO, |e| e.address))
    }

    /// Whether a live entry exists for `address`.
    #[must_use]
    pub fn is_a_drain(&self, address: AccountId) -> bool {
        self.index.contains_key(&address)
    }

    /// Number of live (non-tombstoned) entries.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.index.len()
    }

    /// Iterate live entries in slot order.
    pub fn live(&self) -> impl Iterator<Item = &DrainEntry> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Register a new drain at the next slot. Returns the slot number.
    ///
    /// A previously removed address gets a fresh trailing slot, never its
    /// old tombstone.
    ///
    /// # Errors
    /// In validation order: `InvalidAddress` for the zero identity,
    /// `DuplicateDrain` if `address` is already live, `ZeroMax` if
    /// `max == 0`, `MinExceedsMax` if `min > max`.
    pub fn add(&mut self, address: AccountId, min: u128, max: u128) -> Result<usize> {
        if address.is_zero() {
            return Err(CofferError::InvalidAddress);
        }
        if self.is_a_drain(address) {
            return Err(CofferError::DuplicateDrain(address));
        }
        if max == 0 {
            return Err(CofferError::ZeroMax);
        }
        if min > max {
            return Err(CofferError::MinExceedsMax { min, max });
        }

        let slot = self.slots.len();
        self.slots.push(Some(DrainEntry {
            address,
            slot,
            min,
            max,
        }));
        self.index.insert(address, slot);
        Ok(slot)
    }

    /// Look up the live entry for `address`.
    ///
    /// # Errors
    /// Returns `NotADrain` if no live entry exists.
    pub fn get(&self, address: AccountId) -> Result<&DrainEntry> {
        self.index
            .get(&address)
            .and_then(|&slot| self.slots[slot].as_ref())
            .ok_or(CofferError::NotADrain(address))
    }

    fn entry_mut(&mut self, address: AccountId) -> Result<&mut DrainEntry> {
        let slot = *self
            .index
            .get(&address)
            .ok_or(CofferError::NotADrain(address))?;
        self.slots[slot]
            .as_mut()
            .ok_or(CofferError::NotADrain(address))
    }

    /// Change a drain's floor in place, preserving its slot. Returns the
    /// updated entry.
    ///
    /// # Errors
    /// - `NotADrain` if `address` has no live entry
    /// - `MinExceedsMax` if `new_min` exceeds the current ceiling
    pub fn update_min(&mut self, address: AccountId, new_min: u128) -> Result<DrainEntry> {
        let entry = self.entry_mut(address)?;
        if new_min > entry.max {
            return Err(CofferError::MinExceedsMax {
                min: new_min,
                max: entry.max,
            });
        }
        entry.min = new_min;
        Ok(*entry)
    }

    /// Change a drain's ceiling in place, preserving its slot. Returns the
    /// updated entry.
    ///
    /// # Errors
    /// - `NotADrain` if `address` has no live entry
    /// - `ZeroMax` if `new_max == 0`
    /// - `MinExceedsMax` if `new_max` falls below the current floor
    pub fn update_max(&mut self, address: AccountId, new_max: u128) -> Result<DrainEntry> {
        let entry = self.entry_mut(address)?;
        if new_max == 0 {
            return Err(CofferError::ZeroMax);
        }
        if entry.min > new_max {
            return Err(CofferError::MinExceedsMax {
                min: entry.min,
                max: new_max,
            });
        }
        entry.max = new_max;
        Ok(*entry)
    }

    /// Retire a drain: tombstone its slot and drop it from the lookup.
    ///
    /// `head` and the slot numbers of surviving entries are untouched.
    ///
    /// # Errors
    /// Returns `NotADrain` if `address` has no live entry.
    pub fn remove(&mut self, address: AccountId) -> Result<()> {
        let slot = self
            .index
            .remove(&address)
            .ok_or(CofferError::NotADrain(address))?;
        self.slots[slot] = None;
        Ok(())
    }

    /// Slot number of the live entry for `address`.
    ///
    /// # Errors
    /// Returns `NotADrain` if no live entry exists.
    pub fn index_by_address(&self, address: AccountId) -> Result<usize> {
        self.get(address).map(|e| e.slot)
    }

    /// Floor of the live entry for `address`.
    ///
    /// # Errors
    /// Returns `NotADrain` if no live entry exists.
    pub fn min_by_address(&self, address: AccountId) -> Result<u128> {
        self.get(address).map(|e| e.min)
    }

    /// Ceiling of the live entry for `address`.
    ///
    /// # Errors
    /// Returns `NotADrain` if no live entry exists.
    pub fn max_by_address(&self, address: AccountId) -> Result<u128> {
        self.get(address).map(|e| e.max)
    }
}
