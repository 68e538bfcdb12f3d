//! Account identifiers used throughout Coffer.
//!
//! An [`AccountId`] is an opaque 160-bit account reference. The all-zero
//! identity is reserved: it marks tombstoned registry slots and is never a
//! valid operator or drain target.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque 160-bit account reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 20]);

impl AccountId {
    /// The reserved all-zero identity.
    pub const ZERO: Self = Self([0u8; 20]);

    #[must_use]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Whether this is the reserved zero identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Deterministic identity derived from a seed string.
    ///
    /// Every caller derives the **exact same** address for the same seed —
    /// useful for fixtures and tooling that need stable identities.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"coffer:account_id:v1:");
        hasher.update(seed.as_bytes());
        let hash = hasher.finalize();
        let bytes: [u8; 20] = hash[..20].try_into().expect("SHA-256 produces 32 bytes");
        Self(bytes)
    }

    /// First four bytes as hex, for compact log output.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl AccountId {
    /// Random identity for unit tests.
    pub fn random() -> Self {
        use rand::RngCore;
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }
}
