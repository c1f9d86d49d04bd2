//! Host capabilities the viewer drives.
//!
//! Screens follow the device window lifecycle: the loading screen owns the
//! progress indicator, the main screen owns the card regions. Each is created
//! by `show_*` and released when the host tears that window down.

use crate::animation::phase::PhaseSpec;
use crate::animation::transition::TransitionHandle;
use crate::display::card::CardText;
use crate::glance::GlanceSink;

/// Rendering primitives of the constrained display.
pub trait DisplaySurface {
    /// Pushes the loading screen with its progress indicator.
    fn show_loading(&mut self);
    /// Updates the progress indicator; ignored when no loading screen exists.
    fn set_progress(&mut self, percent: u8);
    /// Pushes the main card screen and removes the loading screen.
    fn show_main(&mut self);
    /// Replaces the text of every card region.
    fn render_card(&mut self, card: &CardText);
}

/// Host animation engine. Completion must be reported back through
/// `Viewer::animation_finished` on the same thread.
pub trait AnimationScheduler {
    fn schedule(&mut self, handle: TransitionHandle, phase: &PhaseSpec);
    /// Stops `handle`; a no-op when it already finished.
    fn unschedule(&mut self, handle: TransitionHandle);
}

pub trait Haptics {
    fn short_pulse(&mut self);
}

/// Everything a host provides to run the viewer.
pub trait ViewerPlatform: DisplaySurface + AnimationScheduler + Haptics + GlanceSink {}

impl<T> ViewerPlatform for T where T: DisplaySurface + AnimationScheduler + Haptics + GlanceSink {}
