// SPDX-License-Identifier: GPL-3.0-only

//! Filter panel and filter strip handlers

use crate::app::state::{CameraScreen, Control, Message};
use crate::app::task::Task;
use crate::filters::FilterType;
use std::time::Instant;
use tracing::{debug, info};

impl CameraScreen {
    pub(crate) fn handle_toggle_filters(&mut self) -> Task<Message> {
        if !self.controls.accepts_input(Control::FilterToggle) {
            debug!("Filter toggle ignored");
            return Task::none();
        }
        let state = self.filter_panel.toggle(Instant::now());
        info!(?state, "Filter panel toggled");
        Task::none()
    }

    pub(crate) fn handle_move_filter_cursor(&mut self, delta: isize) -> Task<Message> {
        self.filter_strip.move_cursor(delta);
        Task::none()
    }

    pub(crate) fn handle_select_filter(&mut self, filter: FilterType) -> Task<Message> {
        if !self.filter_strip.select(filter) {
            debug!(?filter, "Filter selection ignored");
        }
        Task::none()
    }
}
