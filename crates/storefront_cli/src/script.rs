//! Replay scripts: a JSON list of viewer events.
//!
//! ```json
//! [
//!   { "message": { "APP_INDEX": 0, "APP_NAME": "Weather", "APP_AUTHOR": "Dev",
//!                  "APP_DESCRIPTION": "Forecasts", "APP_HEARTS": 3, "APP_DAYS_AGO": 1 } },
//!   { "message": { "DATA_COMPLETE": 1 } },
//!   { "input": "next" },
//!   "finish_animation",
//!   { "shutdown": "2026-10-21T12:00:00+02:00" }
//! ]
//! ```

use crate::console::ConsoleHost;
use chrono::{DateTime, FixedOffset, Local};
use log::debug;
use serde::Deserialize;
use storefront_core::{ChannelMessage, NavIntent, TransportEvent, Viewer};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputStep {
    Previous,
    Next,
}

impl From<InputStep> for NavIntent {
    fn from(step: InputStep) -> Self {
        match step {
            InputStep::Previous => Self::Previous,
            InputStep::Next => Self::Next,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportStep {
    InboxDropped(i32),
    OutboxFailed(i32),
    OutboxSent,
}

impl From<TransportStep> for TransportEvent {
    fn from(step: TransportStep) -> Self {
        match step {
            TransportStep::InboxDropped(reason) => Self::InboxDropped { reason },
            TransportStep::OutboxFailed(reason) => Self::OutboxFailed { reason },
            TransportStep::OutboxSent => Self::OutboxSent,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Message(ChannelMessage),
    Transport(TransportStep),
    Input(InputStep),
    /// Completes the phase currently playing, as the host engine would.
    FinishAnimation,
    /// Shuts down at the given time, or now when absent.
    Shutdown(Option<DateTime<FixedOffset>>),
}

/// Applies one step to `viewer`.
pub fn run_step(viewer: &mut Viewer<ConsoleHost>, step: Step) {
    debug!("event=replay_step module=cli step={step:?}");
    match step {
        Step::Message(message) => {
            let outcome = viewer.handle_message(&message);
            println!("[channel] {outcome:?}");
        }
        Step::Transport(event) => viewer.handle_transport(&event.into()),
        Step::Input(input) => {
            let outcome = viewer.navigate(input.into());
            println!("[input] {input:?} -> {outcome:?}");
        }
        Step::FinishAnimation => {
            if let Some(handle) = viewer.platform_mut().take_running() {
                viewer.animation_finished(handle);
            }
        }
        Step::Shutdown(at) => {
            match at {
                Some(at) => viewer.shutdown(&at),
                None => viewer.shutdown(&Local::now()),
            };
        }
    }
}

/// Plays any phase still running to completion.
pub fn settle(viewer: &mut Viewer<ConsoleHost>) {
    while viewer.platform().running().is_some() {
        run_step(viewer, Step::FinishAnimation);
    }
}
