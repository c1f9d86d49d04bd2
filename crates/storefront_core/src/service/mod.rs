//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, protocol, paginator and animator into viewer events.
//! - Keep host platforms decoupled from the state machines behind them.

pub mod viewer;
