//! Crew registry — the set of authorized operator identities.
//!
//! The creator is a member from construction time onward. Membership is
//! mutated only by existing members; lookups are open to anyone.

use std::collections::HashSet;

use coffer_types::{AccountId, CofferError, Result};

/// The set of identities authorized to operate the treasury.
#[derive(Debug)]
pub struct CrewRegistry {
    members: HashSet<AccountId>,
}

impl CrewRegistry {
    /// Create a registry with `creator` as its first member.
    ///
    /// # Errors
    /// Returns `InvalidIdentity` if `creator` is the zero identity.
    pub fn new(creator: AccountId) -> Result<Self> {
        if creator.is_zero() {
            return Err(CofferError::InvalidIdentity);
        }
        let mut members = HashSet::new();
        members.insert(creator);
        Ok(Self { members })
    }

    /// Whether `id` is currently a crew member. Open to anyone, no side
    /// effects.
    #[must_use]
    pub fn is_crew(&self, id: AccountId) -> bool {
        self.members.contains(&id)
    }

    /// Reject the call unless `caller` is a member.
    ///
    /// Every mutating operation — here and in the layers above — runs this
    /// check first.
    ///
    /// # Errors
    /// Returns `Unauthorized` for non-members.
    pub fn authorize(&self, caller: AccountId) -> Result<()> {
        if self.is_crew(caller) {
            Ok(())
        } else {
            Err(CofferError::Unauthorized { caller })
        }
    }

    /// Add `member` on behalf of `operator`. Adding an existing member is a
    /// benign no-op.
    ///
    /// # Errors
    /// - `Unauthorized` if `operator` is not a member
    /// - `InvalidIdentity` if `member` is the zero identity
    pub fn add_member(&mut self, operator: AccountId, member: AccountId) -> Result<()> {
        self.authorize(operator)?;
        if member.is_zero() {
            return Err(CofferError::InvalidIdentity);
        }
        self.members.insert(member);
        Ok(())
    }

    /// Remove `member` on behalf of `operator`. Removing a non-member is a
    /// benign no-op.
    ///
    /// Nothing prevents a member from removing itself — including the last
    /// one, leaving an empty crew with no path to recovery.
    ///
    /// # Errors
    /// Returns `Unauthorized` if `operator` is not a member.
    pub fn remove_member(&mut self, operator: AccountId, member: AccountId) -> Result<()> {
        self.authorize(operator)?;
        self.members.remove(&member);
        Ok(())
    }

    /// Number of current members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the crew is empty (possible after self-removal of the last
    /// member).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate current members in arbitrary order.
    pub fn members(&self) -> impl Iterator<Item = &AccountId> {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator() -> AccountId {
        AccountId::from_seed("creator")
    }

    #[test]
    fn creator_is_crew_at_time_zero() {
        let crew = CrewRegistry::new(creator()).unwrap();
        assert!(crew.is_crew(creator()));
        assert_eq!(crew.len(), 1);
    }

    #[test]
    fn zero_creator_rejected() {
        let err = CrewRegistry::new(AccountId::ZERO).unwrap_err();
        assert!(matches!(err, CofferError::InvalidIdentity));
    }

    #[test]
    fn member_can_add_member() {
        let mut crew = CrewRegistry::new(creator()).unwrap();
        let second = AccountId::from_seed("second");
        assert!(!crew.is_crew(second));

        crew.add_member(creator(), second).unwrap();
        assert!(crew.is_crew(second));
        assert_eq!(crew.len(), 2);
    }

    #[test]
    fn new_member_can_add_others() {
        let mut crew = CrewRegistry::new(creator()).unwrap();
        let second = AccountId::from_seed("second");
        let third = AccountId::from_seed("third");

        crew.add_member(creator(), second).unwrap();
        crew.add_member(second, third).unwrap();
        assert!(crew.is_crew(third));
    }

    #[test]
    fn non_member_cannot_add() {
        let mut crew = CrewRegistry::new(creator()).unwrap();
        let intruder = AccountId::from_seed("intruder");
        let second = AccountId::from_seed("second");

        let err = crew.add_member(intruder, second).unwrap_err();
        assert!(matches!(err, CofferError::Unauthorized { caller } if caller == intruder));
        // Membership unchanged
        assert!(!crew.is_crew(second));
        assert_eq!(crew.len(), 1);
    }

    #[test]
    fn zero_member_rejected() {
        let mut crew = CrewRegistry::new(creator()).unwrap();
        let err = crew.add_member(creator(), AccountId::ZERO).unwrap_err();
        assert!(matches!(err, CofferError::InvalidIdentity));
        assert_eq!(crew.len(), 1);
    }

    #[test]
    fn re_adding_member_is_noop() {
        let mut crew = CrewRegistry::new(creator()).unwrap();
        let second = AccountId::from_seed("second");
        crew.add_member(creator(), second).unwrap();
        crew.add_member(creator(), second).unwrap();
        assert_eq!(crew.len(), 2);
    }

    #[test]
    fn member_can_be_removed() {
        let mut crew = CrewRegistry::new(creator()).unwrap();
        let second = AccountId::from_seed("second");
        crew.add_member(creator(), second).unwrap();

        crew.remove_member(creator(), second).unwrap();
        assert!(!crew.is_crew(second));
        assert_eq!(crew.len(), 1);
    }

    #[test]
    fn non_member_cannot_remove() {
        let mut crew = CrewRegistry::new(creator()).unwrap();
        let intruder = AccountId::from_seed("intruder");

        let err = crew.remove_member(intruder, creator()).unwrap_err();
        assert!(matches!(err, CofferError::Unauthorized { .. }));
        assert!(crew.is_crew(creator()));
    }

    #[test]
    fn removing_non_member_is_noop() {
        let mut crew = CrewRegistry::new(creator()).unwrap();
        crew.remove_member(creator(), AccountId::from_seed("ghost"))
            .unwrap();
        assert_eq!(crew.len(), 1);
    }

    #[test]
    fn last_member_can_remove_itself() {
        let mut crew = CrewRegistry::new(creator()).unwrap();
        crew.remove_member(creator(), creator()).unwrap();
        assert!(crew.is_empty());
        // The crew is now locked: no member remains to authorize anything.
        let err = crew.add_member(creator(), creator()).unwrap_err();
        assert!(matches!(err, CofferError::Unauthorized { .. }));
    }

    #[test]
    fn authorize_rejects_random_identity() {
        let crew = CrewRegistry::new(creator()).unwrap();
        let outsider = AccountId::random();
        assert!(crew.authorize(outsider).is_err());
        assert!(crew.authorize(creator()).is_ok());
    }
}
