// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interface for camera sensor-interface controllers.
//!
//! A camera controller sits between up to [`MAX_CAMERA_COUNT`] image sensors
//! and the rest of the system. Each sensor is attached over a serial link of
//! up to [`MAX_LANE_WIDTH`] lanes. The controller gates sensor power, owns the
//! reset and clock-domain reset lines of the receive path, generates the
//! sensor trigger, reports per-lane word alignment and holds a per-lane
//! tap-delay used to compensate receive skew.
//!
//! Every method is a bounded register transaction. None of them wait for the
//! hardware to settle: the power-up order and the delays between steps are
//! the caller's responsibility. The recommended order is:
//!
//! ```text
//! power low, clear low, async reset low, tap-delay reset low
//! (settle) power high
//! (settle) clear high
//! (settle) async reset high
//! (settle) async reset low
//! (settle) sync reset strobe
//! (settle) tap-delay reset high
//! (settle) tap-delay reset low
//! ```
//!
//! Implementations keep no state: every query re-reads the hardware.

use crate::ErrorCode;

/// Number of camera slots a controller can address.
pub const MAX_CAMERA_COUNT: usize = 3;

/// Number of lanes (and alignment bits) reserved per camera.
pub const MAX_LANE_WIDTH: usize = 16;

/// Returned by [`CameraControl::get_camera_alignment`] for a camera index
/// outside [`MAX_CAMERA_COUNT`]. No valid alignment slot can have bits set
/// above bit 15.
pub const CAMERA_ALIGNMENT_INVALID: u32 = 0xFFFF_0000;

/// Returned by [`CameraControl::get_tap_delay`] for a camera or lane index
/// outside the tap-delay table.
pub const TAP_DELAY_INVALID: u32 = 0xFFFF_FFFF;

/// Control interface of a camera sensor-interface controller.
///
/// Implemented by chip drivers. Capsules such as the power sequencer are
/// generic over it, so they can be exercised against a fake controller.
pub trait CameraControl {
    /// Raw snapshot of the status register.
    fn get_status(&self) -> u32;

    /// Raw value of the version register.
    fn get_version(&self) -> u32;

    /// Check that the hardware reports register map revision `expected`.
    ///
    /// Returns `Err(ErrorCode::NOSUPPORT)` on mismatch.
    fn check_version(&self, expected: u32) -> Result<(), ErrorCode> {
        if self.get_version() == expected {
            Ok(())
        } else {
            Err(ErrorCode::NOSUPPORT)
        }
    }

    /// Program the trigger generator. Both values are in controller clock
    /// cycles and should be nonzero for a meaningful trigger. The pulse width
    /// is always written before the period.
    fn configure_trigger(&self, period: u32, pulse_width: u32);

    /// Number of cameras the hardware was built for.
    fn get_camera_count(&self) -> u8;

    /// Number of lanes per camera the hardware was built for.
    fn get_lane_width(&self) -> u8;

    /// All alignment flags, camera `n` in bits `16 * n ..= 16 * n + 15`.
    fn get_alignment_bitmap(&self) -> u64;

    /// Alignment flags of one camera, one bit per lane.
    ///
    /// Returns [`CAMERA_ALIGNMENT_INVALID`] when `camera` is out of range.
    fn get_camera_alignment(&self, camera: usize) -> u32;

    /// Whether every active lane of `camera` reports alignment. Partial
    /// alignment and an out of range index are both `false`.
    fn is_camera_fully_aligned(&self, camera: usize) -> bool;

    /// Whether every camera reported by [`get_camera_count`] is fully
    /// aligned. `false` if no camera is reported.
    ///
    /// [`get_camera_count`]: CameraControl::get_camera_count
    fn all_cameras_aligned(&self) -> bool {
        let cameras = (self.get_camera_count() as usize).min(MAX_CAMERA_COUNT);
        cameras > 0 && (0..cameras).all(|camera| self.is_camera_fully_aligned(camera))
    }

    /// Switch the power of one camera. Returns `Err(ErrorCode::INVAL)`
    /// without touching the hardware if `camera` is out of range.
    fn enable_camera_power(&self, camera: usize, enable: bool) -> Result<(), ErrorCode>;

    /// Whether the power of `camera` is switched on.
    fn is_camera_powered(&self, camera: usize) -> Result<bool, ErrorCode>;

    /// Hold the camera register block in clear.
    fn enable_register_clear(&self, enable: bool);

    /// Hold the tap-delay logic in reset.
    fn enable_tap_delay_reset(&self, enable: bool);

    /// Assert the asynchronous reset of the camera clock domain.
    fn enable_clock_domain_reset(&self, enable: bool);

    /// Pulse the synchronous reset of the camera clock domain.
    fn strobe_clock_domain_reset(&self);

    /// Start or stop the trigger generator.
    fn enable_trigger(&self, enable: bool);

    /// Whether the trigger generator is running.
    fn is_trigger_enabled(&self) -> bool;

    /// Store the tap-delay of one lane. Returns `Err(ErrorCode::INVAL)`
    /// without touching the hardware if either index is out of range.
    fn set_tap_delay(&self, camera: usize, lane: usize, delay: u32) -> Result<(), ErrorCode>;

    /// Read back the tap-delay of one lane.
    ///
    /// Returns [`TAP_DELAY_INVALID`] if either index is out of range.
    fn get_tap_delay(&self, camera: usize, lane: usize) -> u32;
}
