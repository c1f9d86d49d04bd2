//! Display-facing text and host capability contracts.
//!
//! # Responsibility
//! - Format record data into the text shown in each card region.
//! - Define the traits a host implements to render, animate and pulse.
//!
//! # Invariants
//! - Formatting is pure; only the viewer calls into host traits.

pub mod card;
pub mod surface;
