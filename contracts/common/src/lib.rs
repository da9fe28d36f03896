//! Shared access-control storage helpers for the multi-rewards contract suite.
//!
//! This crate provides:
//! - [`ownership`] : two-step owner transfer (nominate, then accept).
//! - [`pause`] : a single contract-wide pause flag with transition detection.
//! - [`managers`] : an owner-curated registry of manager addresses.
//!
//! The helpers only read and write storage. Authentication (`require_auth`)
//! and mapping a failed check onto a contract error are left to the caller,
//! so each contract keeps its own error codes.

#![cfg_attr(not(feature = "std"), no_std)]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod managers;
pub mod ownership;
pub mod pause;

pub use managers::*;
pub use ownership::*;
pub use pause::*;

// ── Shared TTL policy ────────────────────────────────────────────────────────

/// Remaining-ledger threshold below which persistent entries are bumped.
pub const TTL_THRESHOLD: u32 = 5_184_000; // ~60 days
/// Ledger count persistent entries are extended to once bumped.
pub const TTL_EXTEND_TO: u32 = 10_368_000; // ~120 days
