// SPDX-License-Identifier: GPL-3.0-only

//! Backend abstraction layer for camera capture
//!
//! The camera screen only talks to the [`camera::CaptureSession`] trait. The
//! bundled implementation is a virtual session that needs no hardware.
//!
//! # Modules
//!
//! - [`camera`]: Capture session contract, shared types and the virtual session

pub mod camera;
