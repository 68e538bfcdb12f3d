//! # coffer-drains
//!
//! **Routing table plane**: the ordered registry of drain destinations the
//! treasury tops up.
//!
//! Slots are append-only. Removing a drain tombstones its slot instead of
//! compacting the sequence, so an index handed out once keeps pointing at
//! the same drain for its whole life — external consumers that cached an
//! index never see it silently repoint after an unrelated removal.
//!
//! Authorization is the caller's concern: the treasury facade checks the
//! crew set before invoking any mutating method here.

pub mod registry;

pub use registry::DrainRegistry;
