// SPDX-License-Identifier: GPL-3.0-only

//! Filter panel slide state
//!
//! The filter strip sits below the bottom bar. Expanding moves it up by its full
//! height (negative offset) and turns the toggle icon upright; collapsing moves
//! it back and turns the icon upside down. Both properties animate together.

use crate::constants::ui::COLLAPSED_ICON_ROTATION;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

/// One animated scalar with an ease-in-out curve
#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Tween {
    fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration: Duration::ZERO,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn value_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        let eased = t * t * (3.0 - 2.0 * t);
        self.from + (self.to - self.from) * eased
    }

    /// Restart towards `to` from wherever the animation currently is
    fn retarget(&mut self, to: f32, now: Instant, duration: Duration) {
        *self = Self {
            from: self.value_at(now),
            to,
            started: now,
            duration,
        };
    }
}

#[derive(Debug, Clone)]
pub struct FilterPanel {
    state: PanelState,
    height: f32,
    duration: Duration,
    offset: Tween,
    rotation: Tween,
}

impl FilterPanel {
    /// A collapsed panel of the given strip height
    pub fn new(height: f32, duration: Duration) -> Self {
        let now = Instant::now();
        Self {
            state: PanelState::Collapsed,
            height,
            duration,
            offset: Tween::settled(0.0, now),
            rotation: Tween::settled(COLLAPSED_ICON_ROTATION, now),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state == PanelState::Expanded
    }

    /// Flip the panel and start the slide
    ///
    /// A toggle during a running slide retargets it from its current position.
    pub fn toggle(&mut self, now: Instant) -> PanelState {
        self.state = match self.state {
            PanelState::Collapsed => PanelState::Expanded,
            PanelState::Expanded => PanelState::Collapsed,
        };
        self.offset.retarget(self.target_offset(), now, self.duration);
        self.rotation
            .retarget(self.target_rotation(), now, self.duration);
        self.state
    }

    /// Offset the panel settles at for its current state
    pub fn target_offset(&self) -> f32 {
        match self.state {
            PanelState::Collapsed => 0.0,
            PanelState::Expanded => -self.height,
        }
    }

    /// Toggle icon rotation (radians) the panel settles at for its current state
    pub fn target_rotation(&self) -> f32 {
        match self.state {
            PanelState::Collapsed => COLLAPSED_ICON_ROTATION,
            PanelState::Expanded => 0.0,
        }
    }

    pub fn offset_at(&self, now: Instant) -> f32 {
        self.offset.value_at(now)
    }

    pub fn rotation_at(&self, now: Instant) -> f32 {
        self.rotation.value_at(now)
    }

    /// Visible share of the strip, 0.0 collapsed to 1.0 expanded
    pub fn revealed_fraction(&self, now: Instant) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        (-self.offset_at(now) / self.height).clamp(0.0, 1.0)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.offset.progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn panel() -> FilterPanel {
        FilterPanel::new(100.0, Duration::from_millis(300))
    }

    #[test]
    fn test_starts_collapsed_with_flipped_icon() {
        let panel = panel();
        let now = Instant::now();
        assert_eq!(panel.state(), PanelState::Collapsed);
        assert_eq!(panel.offset_at(now), 0.0);
        assert_eq!(panel.rotation_at(now), PI);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut panel = panel();
        let start = Instant::now();
        let mut expected = PanelState::Expanded;
        for i in 0..7 {
            let state = panel.toggle(start + Duration::from_millis(i * 50));
            assert_eq!(state, expected);
            expected = match expected {
                PanelState::Collapsed => PanelState::Expanded,
                PanelState::Expanded => PanelState::Collapsed,
            };
        }
    }

    #[test]
    fn test_settled_values_complement() {
        let mut panel = panel();
        let mut now = Instant::now();
        for _ in 0..4 {
            panel.toggle(now);
            now += Duration::from_millis(400);
            let offset = panel.offset_at(now);
            let rotation = panel.rotation_at(now);
            // Upright icon exactly when the strip is pushed up
            assert_eq!(offset < 0.0, rotation == 0.0);
            assert_eq!(offset == 0.0, rotation == PI);
        }
    }

    #[test]
    fn test_retarget_mid_animation_starts_from_current_value() {
        let mut panel = panel();
        let start = Instant::now();
        panel.toggle(start);
        let halfway = start + Duration::from_millis(150);
        let mid = panel.offset_at(halfway);
        assert!(mid < 0.0 && mid > -100.0);

        panel.toggle(halfway);
        assert_eq!(panel.state(), PanelState::Collapsed);
        assert!((panel.offset_at(halfway) - mid).abs() < 1e-3);
        assert_eq!(panel.offset_at(halfway + Duration::from_millis(300)), 0.0);
    }

    #[test]
    fn test_revealed_fraction_bounds() {
        let mut panel = panel();
        let start = Instant::now();
        assert_eq!(panel.revealed_fraction(start), 0.0);
        panel.toggle(start);
        assert_eq!(panel.revealed_fraction(start + Duration::from_secs(1)), 1.0);
        assert!(!panel.is_animating(start + Duration::from_secs(1)));
    }
}
