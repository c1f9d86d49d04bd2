//! Card transition animation.
//!
//! # Responsibility
//! - Describe outbound/inbound phase recipes over the animated card regions.
//! - Drive the per-navigation transition state machine.
//!
//! # Invariants
//! - The animator never calls the host; it returns `AnimatorCommand`s and is
//!   advanced by completion events delivered back by the viewer.

pub mod phase;
pub mod transition;
