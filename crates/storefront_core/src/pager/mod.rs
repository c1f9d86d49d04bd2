//! Card paginator.
//!
//! # Responsibility
//! - Own the current card index.
//! - Decide whether a navigation intent advances or bounces at an edge.
//!
//! # Invariants
//! - `0 <= current_index < capacity` at all times.
//! - `navigate` is the only mutation path and has no other side effects.

use crate::store::record_store::CAPACITY;

/// Directional user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Up button.
    Previous,
    /// Down button.
    Next,
}

/// Visual scroll direction of a transition.
///
/// `Down` (towards later cards) moves content up, i.e. negative offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

impl ScrollDirection {
    /// Applies this direction's sign to an offset magnitude.
    pub fn signed(self, distance: i16) -> i16 {
        match self {
            Self::Down => -distance,
            Self::Up => distance,
        }
    }
}

impl From<NavIntent> for ScrollDirection {
    fn from(intent: NavIntent) -> Self {
        match intent {
            NavIntent::Previous => Self::Up,
            NavIntent::Next => Self::Down,
        }
    }
}

/// Result of one navigation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Advance {
        index: usize,
        direction: ScrollDirection,
    },
    Bounce {
        direction: ScrollDirection,
    },
}

#[derive(Debug, Clone)]
pub struct Paginator {
    current_index: usize,
    capacity: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Creates a paginator over the fixed batch capacity, starting at card 0.
    pub fn new() -> Self {
        Self {
            current_index: 0,
            capacity: CAPACITY,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Computes and applies the next index for `intent`.
    pub fn navigate(&mut self, intent: NavIntent) -> NavOutcome {
        let direction = ScrollDirection::from(intent);
        let candidate = match intent {
            NavIntent::Previous => self.current_index.checked_sub(1),
            NavIntent::Next => Some(self.current_index + 1),
        };

        match candidate.filter(|index| *index < self.capacity) {
            Some(index) => {
                self.current_index = index;
                NavOutcome::Advance { index, direction }
            }
            None => NavOutcome::Bounce { direction },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavIntent, ScrollDirection};

    #[test]
    fn next_scrolls_content_up() {
        assert_eq!(ScrollDirection::from(NavIntent::Next), ScrollDirection::Down);
        assert_eq!(ScrollDirection::Down.signed(20), -20);
        assert_eq!(ScrollDirection::Up.signed(8), 8);
    }
}
