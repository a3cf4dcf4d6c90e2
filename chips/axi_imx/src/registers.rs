// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Register map of the AXI IMX controller.
//!
//! The layout is declared once, as a `register_structs!` block whose offsets
//! are checked at compile time. The byte offsets used by the driver are
//! derived from that struct, so the control registers, the tap-delay table
//! and the trailing version register cannot drift apart.

use core::mem::size_of;
use kernel::hil::camera_control::{MAX_CAMERA_COUNT, MAX_LANE_WIDTH};
use kernel::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};

/// Number of 32-bit slots in the tap-delay table, one per (camera, lane).
pub const TAP_DELAY_SLOTS: usize = MAX_CAMERA_COUNT * MAX_LANE_WIDTH;

register_structs! {
    pub ImxControlRegisters {
        (0x000 => pub control: ReadWrite<u32, Control::Register>),
        (0x004 => pub status: ReadOnly<u32>),
        (0x008 => _reserved0),
        (0x00C => pub trigger_pulse_width: ReadWrite<u32>),
        (0x010 => pub trigger_period: ReadWrite<u32>),
        (0x014 => pub camera_count: ReadOnly<u32>),
        (0x018 => pub lane_width: ReadOnly<u32>),
        (0x01C => pub aligned_flags_low: ReadOnly<u32>),
        (0x020 => pub aligned_flags_high: ReadOnly<u32>),
        (0x024 => _reserved1),
        (0x040 => pub tap_delay: [ReadWrite<u32>; TAP_DELAY_SLOTS]),
        (0x100 => pub version: ReadOnly<u32>),
        (0x104 => @END),
    }
}

register_bitfields![u32,
    pub Control [
        /// Hold the camera register block in clear
        CLEAR_EN OFFSET(0) NUMBITS(1) [],
        /// Hold the lane tap-delay logic in reset
        TAP_DELAY_RST_EN OFFSET(1) NUMBITS(1) [],
        /// Run the trigger generator
        TRIGGER_EN OFFSET(2) NUMBITS(1) [],
        /// Asynchronous reset of the camera clock domain (IO SERDES)
        CAM_CLK_RST_EN OFFSET(4) NUMBITS(1) [],
        /// Synchronous reset of the camera clock domain, strobed
        CAM_RST_STROBE OFFSET(5) NUMBITS(1) [],
        /// Power enable, one bit per camera starting at camera 0
        POWER_EN OFFSET(12) NUMBITS(3) []
    ]
];

/// Byte offsets of the registers from the base of the window.
pub mod offset {
    use super::{ImxControlRegisters, TAP_DELAY_SLOTS};
    use core::mem::offset_of;

    pub const CONTROL: usize = offset_of!(ImxControlRegisters, control);
    pub const STATUS: usize = offset_of!(ImxControlRegisters, status);
    pub const TRIGGER_PULSE_WIDTH: usize = offset_of!(ImxControlRegisters, trigger_pulse_width);
    pub const TRIGGER_PERIOD: usize = offset_of!(ImxControlRegisters, trigger_period);
    pub const CAMERA_COUNT: usize = offset_of!(ImxControlRegisters, camera_count);
    pub const LANE_WIDTH: usize = offset_of!(ImxControlRegisters, lane_width);
    pub const ALIGNED_FLAGS_LOW: usize = offset_of!(ImxControlRegisters, aligned_flags_low);
    pub const ALIGNED_FLAGS_HIGH: usize = offset_of!(ImxControlRegisters, aligned_flags_high);
    pub const TAP_DELAY_START: usize = offset_of!(ImxControlRegisters, tap_delay);

    /// The version register immediately follows the tap-delay table.
    pub const VERSION: usize = TAP_DELAY_START + TAP_DELAY_SLOTS * 4;

    const _: () = assert!(VERSION == offset_of!(ImxControlRegisters, version));
}

/// Size in bytes of the register window.
pub const WINDOW_SIZE: usize = size_of::<ImxControlRegisters>();

/// Whether `offset` is the word-aligned offset of a register in the window.
///
/// The reserved gaps of the layout hold no register and are never accessed.
pub fn is_register_offset(offset: usize) -> bool {
    offset % 4 == 0
        && offset < WINDOW_SIZE
        && !(offset::STATUS + 4..offset::TRIGGER_PULSE_WIDTH).contains(&offset)
        && !(offset::ALIGNED_FLAGS_HIGH + 4..offset::TAP_DELAY_START).contains(&offset)
}

/// Byte offset of the tap-delay slot of (`camera`, `lane`).
///
/// Each index is checked against its own bound before the slot is computed,
/// so no combination can land outside the table.
pub fn tap_delay_offset(camera: usize, lane: usize) -> Option<usize> {
    if camera >= MAX_CAMERA_COUNT || lane >= MAX_LANE_WIDTH {
        return None;
    }
    Some(offset::TAP_DELAY_START + (camera * MAX_LANE_WIDTH + lane) * 4)
}

/// Bit position of the power enable of `camera`, if the camera exists.
pub fn power_enable_bit(camera: usize) -> Option<usize> {
    if camera >= MAX_CAMERA_COUNT {
        return None;
    }
    Some(Control::POWER_EN.shift + camera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_offsets() {
        assert_eq!(offset::CONTROL, 0x00);
        assert_eq!(offset::STATUS, 0x04);
        assert_eq!(offset::TRIGGER_PULSE_WIDTH, 0x0C);
        assert_eq!(offset::TRIGGER_PERIOD, 0x10);
        assert_eq!(offset::CAMERA_COUNT, 0x14);
        assert_eq!(offset::LANE_WIDTH, 0x18);
        assert_eq!(offset::ALIGNED_FLAGS_LOW, 0x1C);
        assert_eq!(offset::ALIGNED_FLAGS_HIGH, 0x20);
        assert_eq!(offset::TAP_DELAY_START, 0x40);
        assert_eq!(offset::VERSION, 0x100);
        assert_eq!(WINDOW_SIZE, 0x104);
    }

    #[test]
    fn control_bits() {
        assert_eq!(Control::CLEAR_EN.shift, 0);
        assert_eq!(Control::TAP_DELAY_RST_EN.shift, 1);
        assert_eq!(Control::TRIGGER_EN.shift, 2);
        assert_eq!(Control::CAM_CLK_RST_EN.shift, 4);
        assert_eq!(Control::CAM_RST_STROBE.shift, 5);
        assert_eq!(power_enable_bit(0), Some(12));
        assert_eq!(power_enable_bit(2), Some(14));
        assert_eq!(power_enable_bit(3), None);
    }

    #[test]
    fn reserved_gaps_are_not_registers() {
        assert!(is_register_offset(offset::STATUS));
        assert!(!is_register_offset(0x08));
        assert!(is_register_offset(offset::TRIGGER_PULSE_WIDTH));
        assert!(is_register_offset(offset::ALIGNED_FLAGS_HIGH));
        for gap in (0x24..0x40).step_by(4) {
            assert!(!is_register_offset(gap), "{:#x}", gap);
        }
        assert!(is_register_offset(offset::TAP_DELAY_START));
        assert!(is_register_offset(offset::VERSION));
        assert!(!is_register_offset(WINDOW_SIZE));
        assert!(!is_register_offset(offset::STATUS + 1));
    }

    #[test]
    fn tap_delay_table_bounds() {
        assert_eq!(tap_delay_offset(0, 0), Some(0x40));
        assert_eq!(tap_delay_offset(1, 0), Some(0x80));
        assert_eq!(tap_delay_offset(2, 15), Some(offset::VERSION - 4));
        assert_eq!(tap_delay_offset(2, 16), None);
        assert_eq!(tap_delay_offset(3, 0), None);
        // Combined index 19 is inside the table but lane 19 does not exist.
        assert_eq!(tap_delay_offset(0, 19), None);
    }
}
