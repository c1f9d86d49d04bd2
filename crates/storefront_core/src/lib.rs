//! Core logic for the Storefront card viewer.
//! This crate is the single source of truth for paging and loading invariants.

pub mod animation;
pub mod config;
pub mod display;
pub mod feed;
pub mod glance;
pub mod logging;
pub mod model;
pub mod pager;
pub mod protocol;
pub mod service;
pub mod store;

pub use animation::phase::{Curve, PhaseKind, PhaseSpec, Region, ANIMATED_REGIONS};
pub use animation::transition::{
    AnimatorCommand, TransitionAnimator, TransitionHandle, TransitionState,
};
pub use config::{AnimationConfig, ConfigError, ViewerConfig};
pub use display::card::{format_age, hearts_line, pagination_text, CardText};
pub use display::surface::{AnimationScheduler, DisplaySurface, Haptics, ViewerPlatform};
pub use feed::{encode_batch, failure_message, FeedListing, FeedResponse};
pub use glance::{
    build_summary_message, count_recent, next_weekly_expiration, GlanceSink, GlanceSlice,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{Age, Record};
pub use pager::{NavIntent, NavOutcome, Paginator, ScrollDirection};
pub use protocol::load::{DropReason, LoadOutcome, LoadProtocol, TransportEvent};
pub use protocol::message::{ChannelMessage, MessageKey, TupleValue};
pub use service::viewer::{Screen, Viewer};
pub use store::record_store::{OutOfRange, RecordStore, CAPACITY};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
