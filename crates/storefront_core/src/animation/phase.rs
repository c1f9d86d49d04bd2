//! Single animation phase recipes.

use crate::config::AnimationConfig;
use crate::pager::ScrollDirection;

/// Card regions that move during a transition. Pagination stays fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Name,
    Author,
    Description,
    Hearts,
}

/// All animated regions, moved together by every phase.
pub const ANIMATED_REGIONS: [Region; 4] = [
    Region::Name,
    Region::Author,
    Region::Description,
    Region::Hearts,
];

/// Pacing curve of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseOut,
}

impl Curve {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Outbound,
    Inbound,
}

/// Vertical offset animation applied synchronously to `ANIMATED_REGIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSpec {
    pub kind: PhaseKind,
    pub from_offset: i16,
    pub to_offset: i16,
    pub duration_ms: u32,
    pub curve: Curve,
}

impl PhaseSpec {
    /// Content slides away: `0 -> ±out_distance`, linear.
    pub fn outbound(config: &AnimationConfig, direction: ScrollDirection) -> Self {
        Self {
            kind: PhaseKind::Outbound,
            from_offset: 0,
            to_offset: direction.signed(config.out_distance),
            duration_ms: config.duration_ms,
            curve: Curve::Linear,
        }
    }

    /// Content settles back: `±in_distance -> 0`, ease-out.
    pub fn inbound(config: &AnimationConfig, direction: ScrollDirection) -> Self {
        Self {
            kind: PhaseKind::Inbound,
            from_offset: direction.signed(config.in_distance),
            to_offset: 0,
            duration_ms: config.duration_ms,
            curve: Curve::EaseOut,
        }
    }

    pub fn regions(&self) -> &'static [Region] {
        &ANIMATED_REGIONS
    }

    /// Samples the offset `elapsed_ms` into the phase, clamped to its end.
    pub fn offset_at(&self, elapsed_ms: u32) -> i16 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return self.to_offset;
        }
        let t = elapsed_ms as f32 / self.duration_ms as f32;
        let eased = self.curve.apply(t);
        let span = f32::from(self.to_offset) - f32::from(self.from_offset);
        let offset = f32::from(self.from_offset) + span * eased;
        offset.round() as i16
    }
}

#[cfg(test)]
mod tests {
    use super::{Curve, PhaseKind, PhaseSpec};
    use crate::config::AnimationConfig;
    use crate::pager::ScrollDirection;

    #[test]
    fn outbound_and_inbound_use_asymmetric_distances() {
        let config = AnimationConfig::default();
        let out = PhaseSpec::outbound(&config, ScrollDirection::Down);
        let back = PhaseSpec::inbound(&config, ScrollDirection::Down);

        assert_eq!(out.kind, PhaseKind::Outbound);
        assert_eq!((out.from_offset, out.to_offset), (0, -20));
        assert_eq!(out.curve, Curve::Linear);
        assert_eq!((back.from_offset, back.to_offset), (-8, 0));
        assert_eq!(back.curve, Curve::EaseOut);
        assert_eq!(out.regions().len(), 4);
    }

    #[test]
    fn offset_sampling_hits_endpoints_and_eases() {
        let config = AnimationConfig::default();
        let out = PhaseSpec::outbound(&config, ScrollDirection::Up);
        assert_eq!(out.offset_at(0), 0);
        assert_eq!(out.offset_at(60), 10);
        assert_eq!(out.offset_at(120), 20);
        assert_eq!(out.offset_at(500), 20);

        let back = PhaseSpec::inbound(&config, ScrollDirection::Up);
        assert_eq!(back.offset_at(0), 8);
        // ease-out covers 75% of the distance at the halfway point
        assert_eq!(back.offset_at(60), 2);
        assert_eq!(back.offset_at(120), 0);
    }
}
