//! Domain model for the storefront batch.
//!
//! # Responsibility
//! - Define the record shape shown on one card.
//! - Keep device buffer limits (bounded text) inside the model.
//!
//! # Invariants
//! - Text fields never exceed their device buffer size.
//! - "Unknown age" is a tagged value in core and a `-1` sentinel only on the wire.

pub mod record;
