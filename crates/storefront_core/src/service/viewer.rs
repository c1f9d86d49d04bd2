//! Viewer context: the single owner of all mutable viewer state.
//!
//! # Responsibility
//! - Route channel messages, user input, animation completions and shutdown
//!   into the store, paginator and animator.
//! - Translate their decisions into calls on the host platform.
//!
//! # Invariants
//! - Every event is handled to completion before the next one (`&mut self`).
//! - Navigation is ignored until the main screen has been shown.
//! - The glance is only published when the batch was explicitly completed.

use crate::animation::transition::{
    AnimatorCommand, TransitionAnimator, TransitionHandle, TransitionState,
};
use crate::config::{ConfigError, ViewerConfig};
use crate::display::card::CardText;
use crate::display::surface::ViewerPlatform;
use crate::glance::{summarize, GlanceSlice};
use crate::pager::{NavIntent, NavOutcome, Paginator};
use crate::protocol::load::{LoadOutcome, LoadProtocol, TransportEvent};
use crate::protocol::message::ChannelMessage;
use crate::store::record_store::RecordStore;
use chrono::{DateTime, TimeZone};
use log::{debug, info};

/// Which window the viewer currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    NotStarted,
    Loading,
    Main,
    ShutDown,
}

pub struct Viewer<P: ViewerPlatform> {
    platform: P,
    config: ViewerConfig,
    store: RecordStore,
    protocol: LoadProtocol,
    pager: Paginator,
    animator: TransitionAnimator,
    screen: Screen,
}

impl<P: ViewerPlatform> Viewer<P> {
    /// Creates a viewer after validating `config`.
    pub fn new(platform: P, config: ViewerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            platform,
            config,
            store: RecordStore::new(),
            protocol: LoadProtocol::new(),
            pager: Paginator::new(),
            animator: TransitionAnimator::new(config.animation),
            screen: Screen::NotStarted,
        })
    }

    /// Clears the previous glance and shows the loading screen at 0%.
    pub fn start(&mut self) {
        self.platform.clear_slices();
        self.platform.show_loading();
        self.platform.set_progress(0);
        self.screen = Screen::Loading;
        info!("event=loading_shown module=viewer status=ok");
    }

    /// Applies one channel message and updates the screens accordingly.
    pub fn handle_message(&mut self, message: &ChannelMessage) -> LoadOutcome {
        let outcome = self.protocol.apply(&mut self.store, message);
        match outcome {
            LoadOutcome::Stored { progress, .. } if self.screen == Screen::Loading => {
                self.platform.set_progress(progress);
            }
            LoadOutcome::BatchComplete { first: true }
                if matches!(self.screen, Screen::NotStarted | Screen::Loading) =>
            {
                self.hand_off_to_main()
            }
            _ => {}
        }
        outcome
    }

    /// Observes a transport notification; never changes state.
    pub fn handle_transport(&mut self, event: &TransportEvent) {
        self.protocol.observe(event);
    }

    /// Handles one directional press.
    ///
    /// Returns `None` when no card screen is showing.
    pub fn navigate(&mut self, intent: NavIntent) -> Option<NavOutcome> {
        if self.screen != Screen::Main {
            debug!(
                "event=navigate module=viewer status=ignored screen={:?}",
                self.screen
            );
            return None;
        }

        // Retire the running sequence while the index still names its target,
        // so a cancelled outbound phase lands on the card it was heading to.
        let cancelled = self.animator.cancel();
        self.apply(cancelled);

        let outcome = self.pager.navigate(intent);
        let commands = match outcome {
            NavOutcome::Advance { index, direction } => {
                debug!("event=navigate module=viewer status=advance index={index}");
                self.animator.start_advance(direction)
            }
            NavOutcome::Bounce { direction } => {
                debug!(
                    "event=navigate module=viewer status=bounce index={}",
                    self.pager.current_index()
                );
                self.animator.start_bounce(direction)
            }
        };
        self.apply(commands);
        if matches!(outcome, NavOutcome::Bounce { .. }) {
            self.platform.short_pulse();
        }
        Some(outcome)
    }

    /// Completion callback for a phase scheduled under `handle`.
    ///
    /// Ignored after shutdown.
    pub fn animation_finished(&mut self, handle: TransitionHandle) {
        if self.screen == Screen::ShutDown {
            debug!("event=animation_finished module=viewer status=ignored screen=ShutDown");
            return;
        }
        let commands = self.animator.phase_finished(handle);
        self.apply(commands);
    }

    /// Stops any animation and publishes the weekly glance when loaded.
    pub fn shutdown<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Option<GlanceSlice> {
        for command in self.animator.cancel() {
            if let AnimatorCommand::Unschedule(handle) = command {
                self.platform.unschedule(handle);
            }
        }
        self.screen = Screen::ShutDown;

        if !self.store.is_loaded() || self.platform.slice_limit() < 1 {
            info!(
                "event=glance_skipped module=viewer status=ok loaded={}",
                self.store.is_loaded()
            );
            return None;
        }

        let slice = summarize(&self.store, now, self.config.recent_window_days);
        info!(
            "event=glance_published module=viewer status=ok subtitle={} expiration={}",
            slice.subtitle,
            slice.expiration.to_rfc3339()
        );
        self.platform.replace_slices(slice.clone());
        Some(slice)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn current_index(&self) -> usize {
        self.pager.current_index()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn transition_state(&self) -> TransitionState {
        self.animator.state()
    }

    pub fn active_transition(&self) -> Option<TransitionHandle> {
        self.animator.active_handle()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn into_platform(self) -> P {
        self.platform
    }

    fn hand_off_to_main(&mut self) {
        self.platform.show_main();
        self.screen = Screen::Main;
        self.render_current();
        info!(
            "event=main_shown module=viewer status=ok received={}",
            self.store.received_count()
        );
    }

    fn apply(&mut self, commands: Vec<AnimatorCommand>) {
        for command in commands {
            match command {
                AnimatorCommand::Unschedule(handle) => self.platform.unschedule(handle),
                AnimatorCommand::Schedule { handle, phase } => {
                    self.platform.schedule(handle, &phase);
                }
                AnimatorCommand::RefreshContent => self.render_current(),
            }
        }
    }

    fn render_current(&mut self) {
        let card = CardText::for_slot(&self.store, self.pager.current_index());
        self.platform.render_card(&card);
    }
}
