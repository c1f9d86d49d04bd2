//! Page transition state machine.
//!
//! # Responsibility
//! - Sequence the outbound/inbound phases of an advance and the lone
//!   inbound phase of a bounce.
//! - Emit scheduler commands instead of touching the display directly.
//!
//! # Invariants
//! - At most one `TransitionHandle` is active.
//! - Starting a sequence always unschedules the active one first.
//! - Content is refreshed only after the outbound phase has stopped.
//! - Completion events for any handle other than the active one are ignored.

use crate::animation::phase::PhaseSpec;
use crate::config::AnimationConfig;
use crate::pager::ScrollDirection;
use log::debug;

/// Opaque token naming one scheduled sequence.
///
/// Both phases of an advance share the same handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionHandle(u64);

impl TransitionHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Instruction for the host animation scheduler / display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorCommand {
    /// Stop the phase running under `handle`.
    Unschedule(TransitionHandle),
    /// Start `phase`; the host reports completion with the same handle.
    Schedule {
        handle: TransitionHandle,
        phase: PhaseSpec,
    },
    /// Redraw card text from the current index.
    RefreshContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    /// Advance, old content sliding away.
    Outbound {
        handle: TransitionHandle,
        direction: ScrollDirection,
    },
    /// Advance, new content settling in.
    Inbound {
        handle: TransitionHandle,
        direction: ScrollDirection,
    },
    /// Boundary bounce, content unchanged.
    Bounce {
        handle: TransitionHandle,
        direction: ScrollDirection,
    },
}

impl TransitionState {
    fn handle(self) -> Option<TransitionHandle> {
        match self {
            Self::Idle => None,
            Self::Outbound { handle, .. }
            | Self::Inbound { handle, .. }
            | Self::Bounce { handle, .. } => Some(handle),
        }
    }
}

#[derive(Debug)]
pub struct TransitionAnimator {
    config: AnimationConfig,
    state: TransitionState,
    next_id: u64,
}

impl TransitionAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            state: TransitionState::Idle,
            next_id: 1,
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn active_handle(&self) -> Option<TransitionHandle> {
        self.state.handle()
    }

    /// Cancels the active sequence, then starts outbound for a page change.
    pub fn start_advance(&mut self, direction: ScrollDirection) -> Vec<AnimatorCommand> {
        let mut commands = self.cancel();
        let handle = self.allocate_handle();
        self.state = TransitionState::Outbound { handle, direction };
        commands.push(AnimatorCommand::Schedule {
            handle,
            phase: PhaseSpec::outbound(&self.config, direction),
        });
        debug!(
            "event=transition_start module=animation kind=advance handle={} direction={:?}",
            handle.id(),
            direction
        );
        commands
    }

    /// Cancels the active sequence, then plays the inbound phase alone.
    pub fn start_bounce(&mut self, direction: ScrollDirection) -> Vec<AnimatorCommand> {
        let mut commands = self.cancel();
        let handle = self.allocate_handle();
        self.state = TransitionState::Bounce { handle, direction };
        commands.push(AnimatorCommand::Schedule {
            handle,
            phase: PhaseSpec::inbound(&self.config, direction),
        });
        debug!(
            "event=transition_start module=animation kind=bounce handle={} direction={:?}",
            handle.id(),
            direction
        );
        commands
    }

    /// Handles a phase completion reported by the host.
    pub fn phase_finished(&mut self, handle: TransitionHandle) -> Vec<AnimatorCommand> {
        if self.state.handle() != Some(handle) {
            debug!(
                "event=transition_stale module=animation status=ignored handle={}",
                handle.id()
            );
            return Vec::new();
        }

        match self.state {
            TransitionState::Outbound { handle, direction } => {
                self.state = TransitionState::Inbound { handle, direction };
                vec![
                    AnimatorCommand::RefreshContent,
                    AnimatorCommand::Schedule {
                        handle,
                        phase: PhaseSpec::inbound(&self.config, direction),
                    },
                ]
            }
            TransitionState::Inbound { .. } | TransitionState::Bounce { .. } => {
                self.state = TransitionState::Idle;
                Vec::new()
            }
            TransitionState::Idle => Vec::new(),
        }
    }

    /// Unschedules the active sequence, if any, and returns to `Idle`.
    ///
    /// Cancelling during the outbound phase still refreshes content so the
    /// card never lags behind the paginator.
    pub fn cancel(&mut self) -> Vec<AnimatorCommand> {
        let previous = std::mem::replace(&mut self.state, TransitionState::Idle);
        match previous {
            TransitionState::Idle => Vec::new(),
            TransitionState::Outbound { handle, .. } => vec![
                AnimatorCommand::Unschedule(handle),
                AnimatorCommand::RefreshContent,
            ],
            TransitionState::Inbound { handle, .. } | TransitionState::Bounce { handle, .. } => {
                vec![AnimatorCommand::Unschedule(handle)]
            }
        }
    }

    fn allocate_handle(&mut self) -> TransitionHandle {
        let handle = TransitionHandle(self.next_id);
        self.next_id += 1;
        handle
    }
}
