//! Channel message shapes and the incremental load protocol.
//!
//! # Responsibility
//! - Model the key/value messages delivered by the companion channel.
//! - Turn messages into store writes and typed load outcomes.
//!
//! # Invariants
//! - Messages are applied strictly in arrival order, one at a time.
//! - Malformed input is absorbed as `LoadOutcome::Dropped`, never a panic.

pub mod load;
pub mod message;
