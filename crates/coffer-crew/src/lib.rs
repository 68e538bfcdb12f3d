//! # coffer-crew
//!
//! **Access plane**: the crew registry — the set of identities authorized to
//! perform mutating operations on the treasury.
//!
//! The registry is a leaf component: it holds the member set and nothing
//! else. The treasury facade consults [`CrewRegistry::authorize`] before any
//! mutation and passes the registry explicitly into every call path, so
//! authorization state is never ambient.

pub mod crew;

pub use crew::CrewRegistry;
