// SPDX-License-Identifier: GPL-3.0-only

//! Shutter button animation: a single playthrough of the aperture frames

use crate::constants::{icons, timing};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct ShutterAnimation {
    started: Option<Instant>,
}

impl ShutterAnimation {
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Frame index at `now`, `None` once the playthrough has ended
    pub fn frame_at(&self, now: Instant) -> Option<usize> {
        let started = self.started?;
        let elapsed = now.saturating_duration_since(started);
        let frame_duration = timing::SHUTTER_ANIMATION / icons::SHUTTER_FRAME_COUNT as u32;
        if frame_duration == Duration::ZERO {
            return None;
        }
        let index = (elapsed.as_nanos() / frame_duration.as_nanos()) as usize;
        (index < icons::SHUTTER_FRAME_COUNT).then_some(index)
    }

    /// Icon asset to show on the shutter button at `now`
    pub fn icon_at(&self, now: Instant) -> String {
        icons::shutter_frame(self.frame_at(now).unwrap_or(0))
    }

    pub fn is_playing(&self, now: Instant) -> bool {
        self.frame_at(now).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_shows_first_frame() {
        let shutter = ShutterAnimation::default();
        let now = Instant::now();
        assert!(!shutter.is_playing(now));
        assert_eq!(shutter.icon_at(now), "LensAperture_ShapeLayer_00000");
    }

    #[test]
    fn test_plays_once_through_all_frames() {
        let mut shutter = ShutterAnimation::default();
        let start = Instant::now();
        shutter.start(start);

        let step = timing::SHUTTER_ANIMATION / icons::SHUTTER_FRAME_COUNT as u32;
        for index in 0..icons::SHUTTER_FRAME_COUNT {
            let at = start + step * index as u32 + step / 2;
            assert_eq!(shutter.frame_at(at), Some(index));
        }
        assert_eq!(shutter.frame_at(start + timing::SHUTTER_ANIMATION), None);
    }
}
