//! In-memory record storage for the current batch.
//!
//! # Responsibility
//! - Hold the fixed-capacity record table owned by the viewer context.
//! - Track arrival progress and the explicit batch-complete flag.
//!
//! # Invariants
//! - Only the load protocol writes; display and glance paths only read.
//! - Nothing survives the process; there is no persistence layer.

pub mod record_store;
