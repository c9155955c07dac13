// SPDX-License-Identifier: GPL-3.0-only

//! Filter selection strip
//!
//! The strip does not store the active preset. It asks a [`PresetProvider`] for it
//! and hands the user's choice back to the same provider, so the screen decides
//! where the preset lives.

use crate::backends::camera::CaptureSession;
use crate::filters::FilterType;
use std::sync::Arc;
use tracing::info;

/// Getter/setter pair for the active preset
pub trait PresetProvider: Send + Sync {
    fn active_preset(&self) -> FilterType;

    fn select_preset(&self, filter: FilterType);
}

/// Keeps the active preset on the capture session's live effect filter
pub struct SessionPresetProvider {
    session: Option<Arc<dyn CaptureSession>>,
}

impl SessionPresetProvider {
    pub fn new(session: Option<Arc<dyn CaptureSession>>) -> Self {
        Self { session }
    }
}

impl PresetProvider for SessionPresetProvider {
    fn active_preset(&self) -> FilterType {
        self.session
            .as_ref()
            .map(|session| session.effect_filter())
            .unwrap_or(FilterType::None)
    }

    fn select_preset(&self, filter: FilterType) {
        if let Some(session) = &self.session {
            session.set_effect_filter(filter);
        }
    }
}

pub struct FilterStrip {
    presets: Vec<FilterType>,
    cursor: usize,
    interaction_enabled: bool,
    provider: Box<dyn PresetProvider>,
}

impl FilterStrip {
    pub fn new(provider: Box<dyn PresetProvider>) -> Self {
        let presets = FilterType::ALL.to_vec();
        let active = provider.active_preset();
        let cursor = presets.iter().position(|f| *f == active).unwrap_or(0);
        Self {
            presets,
            cursor,
            interaction_enabled: true,
            provider,
        }
    }

    pub fn presets(&self) -> &[FilterType] {
        &self.presets
    }

    pub fn active(&self) -> FilterType {
        self.provider.active_preset()
    }

    /// Preset under the cursor
    pub fn highlighted(&self) -> FilterType {
        self.presets[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }

    /// Move the cursor by `delta`, clamped to the strip
    pub fn move_cursor(&mut self, delta: isize) {
        if !self.interaction_enabled {
            return;
        }
        let last = self.presets.len().saturating_sub(1) as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    /// Make `filter` the active preset; ignored while interaction is disabled
    pub fn select(&mut self, filter: FilterType) -> bool {
        if !self.interaction_enabled {
            return false;
        }
        if let Some(index) = self.presets.iter().position(|f| *f == filter) {
            self.cursor = index;
        }
        info!(?filter, "Filter selected");
        self.provider.select_preset(filter);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StoredPreset(Mutex<FilterType>);

    impl PresetProvider for Arc<StoredPreset> {
        fn active_preset(&self) -> FilterType {
            *self.0.lock().unwrap()
        }

        fn select_preset(&self, filter: FilterType) {
            *self.0.lock().unwrap() = filter;
        }
    }

    #[test]
    fn test_selection_goes_through_provider() {
        let store = Arc::new(StoredPreset::default());
        let mut strip = FilterStrip::new(Box::new(Arc::clone(&store)));

        assert!(strip.select(FilterType::Tender));
        assert_eq!(*store.0.lock().unwrap(), FilterType::Tender);
        assert_eq!(strip.active(), FilterType::Tender);
        assert_eq!(strip.highlighted(), FilterType::Tender);
    }

    #[test]
    fn test_disabled_strip_ignores_selection() {
        let store = Arc::new(StoredPreset::default());
        let mut strip = FilterStrip::new(Box::new(Arc::clone(&store)));
        strip.set_interaction_enabled(false);

        assert!(!strip.select(FilterType::Lomo));
        strip.move_cursor(3);
        assert_eq!(strip.active(), FilterType::None);
        assert_eq!(strip.cursor(), 0);
    }

    #[test]
    fn test_cursor_clamps() {
        let mut strip = FilterStrip::new(Box::new(SessionPresetProvider::new(None)));
        strip.move_cursor(-5);
        assert_eq!(strip.cursor(), 0);
        strip.move_cursor(100);
        assert_eq!(strip.highlighted(), *FilterType::ALL.last().unwrap());
    }

    #[test]
    fn test_provider_without_session_reports_none() {
        let provider = SessionPresetProvider::new(None);
        provider.select_preset(FilterType::Tender);
        assert_eq!(provider.active_preset(), FilterType::None);
    }
}
