//! # coffer-types
//!
//! Shared types and errors for the **Coffer** permissioned treasury.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`]
//! - **Drain model**: [`DrainEntry`]
//! - **Notification model**: [`Notification`], [`Event`]
//! - **Errors**: [`CofferError`] with `CF_ERR_` prefix codes

pub mod drain;
pub mod error;
pub mod event;
pub mod ids;

// Re-export all primary types at crate root for ergonomic imports:
//   use coffer_types::{AccountId, DrainEntry, Notification, ...};

pub use drain::*;
pub use error::*;
pub use event::*;
pub use ids::*;
