//! Console host that prints every platform call.

use storefront_core::{
    AnimationScheduler, CardText, DisplaySurface, GlanceSink, GlanceSlice, Haptics, PhaseSpec,
    TransitionHandle,
};

#[derive(Debug, Default)]
pub struct ConsoleHost {
    running: Option<TransitionHandle>,
    loading_visible: bool,
}

impl ConsoleHost {
    /// Handle of the phase currently "playing", if any.
    pub fn running(&self) -> Option<TransitionHandle> {
        self.running
    }

    /// Marks the running phase as finished and returns its handle.
    pub fn take_running(&mut self) -> Option<TransitionHandle> {
        self.running.take()
    }
}

impl DisplaySurface for ConsoleHost {
    fn show_loading(&mut self) {
        self.loading_visible = true;
        println!("[screen] loading");
    }

    fn set_progress(&mut self, percent: u8) {
        if self.loading_visible {
            println!("[progress] {percent}%");
        }
    }

    fn show_main(&mut self) {
        self.loading_visible = false;
        println!("[screen] main");
    }

    fn render_card(&mut self, card: &CardText) {
        println!("[card {}] {} by {}", card.pagination, card.name, card.author);
        println!("           {}", card.description);
        println!("           {}", card.hearts);
    }
}

impl AnimationScheduler for ConsoleHost {
    fn schedule(&mut self, handle: TransitionHandle, phase: &PhaseSpec) {
        self.running = Some(handle);
        println!(
            "[anim #{}] {:?} {} -> {} over {}ms ({:?})",
            handle.id(),
            phase.kind,
            phase.from_offset,
            phase.to_offset,
            phase.duration_ms,
            phase.curve
        );
    }

    fn unschedule(&mut self, handle: TransitionHandle) {
        if self.running == Some(handle) {
            self.running = None;
        }
        println!("[anim #{}] unscheduled", handle.id());
    }
}

impl Haptics for ConsoleHost {
    fn short_pulse(&mut self) {
        println!("[haptic] short pulse");
    }
}

impl GlanceSink for ConsoleHost {
    fn clear_slices(&mut self) {
        println!("[glance] cleared");
    }

    fn replace_slices(&mut self, slice: GlanceSlice) {
        println!(
            "[glance] \"{}\" until {}",
            slice.subtitle,
            slice.expiration.to_rfc3339()
        );
    }
}
