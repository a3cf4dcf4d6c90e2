// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Power, reset, trigger and lane calibration for the AXI IMX controller.
//!
//! `ImxControl` implements the [`CameraControl`] HIL on top of any
//! [`RegisterAccess`]. It keeps no state of its own: every query re-reads the
//! register window, and every control operation is a single read-modify-write
//! of the control register.
//!
//! Camera and lane indices are validated before any address or bit position
//! is derived from them. Rejected requests never reach the hardware.

use kernel::hil::camera_control::{
    CameraControl, CAMERA_ALIGNMENT_INVALID, MAX_CAMERA_COUNT, MAX_LANE_WIDTH, TAP_DELAY_INVALID,
};
use kernel::utilities::registers::LocalRegisterCopy;
use kernel::ErrorCode;

use crate::register_file::RegisterAccess;
use crate::registers::{self, offset, Control};

const LANE_SLOT_MASK: u64 = (1 << MAX_LANE_WIDTH) - 1;

pub struct ImxControl<A: RegisterAccess> {
    registers: A,
}

impl<A: RegisterAccess> ImxControl<A> {
    /// Bind the driver to a register window. Does not access the hardware.
    pub const fn new(registers: A) -> ImxControl<A> {
        ImxControl { registers }
    }

    /// Snapshot of the control register, for decoding with the [`Control`]
    /// fields.
    pub fn control_state(&self) -> LocalRegisterCopy<u32, Control::Register> {
        LocalRegisterCopy::new(self.registers.read(offset::CONTROL))
    }

    fn enable_control_bit(&self, bit: usize, enable: bool) {
        self.registers.enable_bit(offset::CONTROL, bit, enable);
    }
}

/// Mask of the low `lanes` bits of an alignment slot.
fn lane_mask(lanes: u8) -> u32 {
    1u32.checked_shl(lanes as u32).map_or(u32::MAX, |bit| bit - 1)
}

impl<A: RegisterAccess> CameraControl for ImxControl<A> {
    fn get_status(&self) -> u32 {
        self.registers.read(offset::STATUS)
    }

    fn get_version(&self) -> u32 {
        self.registers.read(offset::VERSION)
    }

    fn configure_trigger(&self, period: u32, pulse_width: u32) {
        // The period register arms the generator, so the pulse width must be
        // in place first.
        self.registers.write(offset::TRIGGER_PULSE_WIDTH, pulse_width);
        self.registers.write(offset::TRIGGER_PERIOD, period);
    }

    fn get_camera_count(&self) -> u8 {
        self.registers.read(offset::CAMERA_COUNT) as u8
    }

    fn get_lane_width(&self) -> u8 {
        self.registers.read(offset::LANE_WIDTH) as u8
    }

    fn get_alignment_bitmap(&self) -> u64 {
        let high = self.registers.read(offset::ALIGNED_FLAGS_HIGH) as u64;
        let low = self.registers.read(offset::ALIGNED_FLAGS_LOW) as u64;
        (high << 32) | low
    }

    fn get_camera_alignment(&self, camera: usize) -> u32 {
        if camera >= MAX_CAMERA_COUNT {
            return CAMERA_ALIGNMENT_INVALID;
        }
        ((self.get_alignment_bitmap() >> (camera * MAX_LANE_WIDTH)) & LANE_SLOT_MASK) as u32
    }

    fn is_camera_fully_aligned(&self, camera: usize) -> bool {
        let flags = self.get_camera_alignment(camera);
        if flags == CAMERA_ALIGNMENT_INVALID {
            return false;
        }
        flags == lane_mask(self.get_lane_width())
    }

    fn enable_camera_power(&self, camera: usize, enable: bool) -> Result<(), ErrorCode> {
        let bit = registers::power_enable_bit(camera).ok_or(ErrorCode::INVAL)?;
        self.enable_control_bit(bit, enable);
        Ok(())
    }

    fn is_camera_powered(&self, camera: usize) -> Result<bool, ErrorCode> {
        let bit = registers::power_enable_bit(camera).ok_or(ErrorCode::INVAL)?;
        Ok(self.registers.is_bit_set(offset::CONTROL, bit))
    }

    fn enable_register_clear(&self, enable: bool) {
        self.enable_control_bit(Control::CLEAR_EN.shift, enable);
    }

    fn enable_tap_delay_reset(&self, enable: bool) {
        self.enable_control_bit(Control::TAP_DELAY_RST_EN.shift, enable);
    }

    fn enable_clock_domain_reset(&self, enable: bool) {
        self.enable_control_bit(Control::CAM_CLK_RST_EN.shift, enable);
    }

    fn strobe_clock_domain_reset(&self) {
        self.enable_control_bit(Control::CAM_RST_STROBE.shift, true);
        self.enable_control_bit(Control::CAM_RST_STROBE.shift, false);
    }

    fn enable_trigger(&self, enable: bool) {
        self.enable_control_bit(Control::TRIGGER_EN.shift, enable);
    }

    fn is_trigger_enabled(&self) -> bool {
        self.registers
            .is_bit_set(offset::CONTROL, Control::TRIGGER_EN.shift)
    }

    fn set_tap_delay(&self, camera: usize, lane: usize, delay: u32) -> Result<(), ErrorCode> {
        let slot = registers::tap_delay_offset(camera, lane).ok_or(ErrorCode::INVAL)?;
        self.registers.write(slot, delay);
        Ok(())
    }

    fn get_tap_delay(&self, camera: usize, lane: usize) -> u32 {
        match registers::tap_delay_offset(camera, lane) {
            Some(slot) => self.registers.read(slot),
            None => TAP_DELAY_INVALID,
        }
    }
}
