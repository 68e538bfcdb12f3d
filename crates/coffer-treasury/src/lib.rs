//! # coffer-treasury
//!
//! **Treasury plane**: the [`Coffer`] facade composing the crew set, the
//! drain registry, the mirrored cash balance, and the append-only event log.
//!
//! ## Architecture
//!
//! Execution is strictly serialized: one state-changing call at a time runs
//! to completion and either fully commits or leaves no trace. `&mut self`
//! is the whole concurrency model — no locks, no background tasks.
//!
//! Native value never moves through this crate directly. The treasury
//! instructs its host through the [`HostLedger`] boundary: `pay` is an
//! atomic all-or-nothing primitive, and a rejected transfer rolls the
//! staged debit back before the error surfaces.

pub mod events;
pub mod host;
pub mod treasury;

pub use events::EventLog;
pub use host::{HostError, HostLedger, InMemoryLedger};
pub use treasury::Coffer;
