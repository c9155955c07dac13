// SPDX-License-Identifier: GPL-3.0-only

//! Message handler modules
//!
//! Handlers are grouped by functional domain. Each is an `impl CameraScreen`
//! block whose methods return the follow-up [`Task`](crate::app::task::Task).

pub mod camera;
pub mod capture;
pub mod system;
pub mod ui;
