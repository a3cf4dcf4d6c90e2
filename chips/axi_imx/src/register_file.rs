// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Word-level access to the controller's register window.
//!
//! [`RegisterAccess`] is the only interface between the driver and the bus:
//! a 32-bit load and a 32-bit store at a byte offset from the window base.
//! The bit helpers are read-modify-write sequences built on those two
//! primitives and are not atomic; all access to one window must be confined
//! to a single thread or serialized by the caller.
//!
//! [`RegisterFile`] implements the interface for the memory-mapped window.

use kernel::config;
use kernel::debug;
use kernel::utilities::registers::interfaces::{Readable, Writeable};
use kernel::utilities::registers::ReadWrite;
use kernel::utilities::StaticRef;

use crate::registers::{self, ImxControlRegisters};

pub trait RegisterAccess {
    /// Load the 32-bit register at byte `offset`.
    fn read(&self, offset: usize) -> u32;

    /// Store `value` into the 32-bit register at byte `offset`.
    fn write(&self, offset: usize, value: u32);

    /// Set `bit` of the register at `offset`. Panics if `bit` is not below 32.
    fn set_bit(&self, offset: usize, bit: usize) {
        assert!(bit < 32, "bit {} outside of a 32-bit register", bit);
        let value = self.read(offset);
        self.write(offset, value | (1 << bit));
    }

    /// Clear `bit` of the register at `offset`. Panics if `bit` is not below 32.
    fn clear_bit(&self, offset: usize, bit: usize) {
        assert!(bit < 32, "bit {} outside of a 32-bit register", bit);
        let value = self.read(offset);
        self.write(offset, value & !(1 << bit));
    }

    /// Set `bit` if `enable` is true, clear it otherwise.
    fn enable_bit(&self, offset: usize, bit: usize, enable: bool) {
        if enable {
            self.set_bit(offset, bit);
        } else {
            self.clear_bit(offset, bit);
        }
    }

    fn is_bit_set(&self, offset: usize, bit: usize) -> bool {
        assert!(bit < 32, "bit {} outside of a 32-bit register", bit);
        (self.read(offset) & (1 << bit)) != 0
    }

    /// Read bits `high_bit..=low_bit` of a register, shifted down to bit 0.
    /// Panics unless `low_bit <= high_bit < 32`.
    ///
    /// ```text
    /// register = [XXXXXXXXXXXXXXXXXXXXXXXH---LXXXX]
    /// ```
    fn read_bit_range(&self, offset: usize, high_bit: usize, low_bit: usize) -> u32 {
        assert!(
            low_bit <= high_bit && high_bit < 32,
            "bit range {}:{} outside of a 32-bit register",
            high_bit,
            low_bit
        );
        let width = high_bit - low_bit + 1;
        let mask = if width >= 32 {
            u32::MAX
        } else {
            (1 << width) - 1
        };
        (self.read(offset) >> low_bit) & mask
    }
}

impl<A: RegisterAccess + ?Sized> RegisterAccess for &A {
    fn read(&self, offset: usize) -> u32 {
        (**self).read(offset)
    }

    fn write(&self, offset: usize, value: u32) {
        (**self).write(offset, value)
    }
}

/// The controller's memory-mapped register window.
///
/// Holds nothing but the base address of the window.
pub struct RegisterFile {
    base: StaticRef<ImxControlRegisters>,
}

impl RegisterFile {
    pub const fn new(base: StaticRef<ImxControlRegisters>) -> RegisterFile {
        RegisterFile { base }
    }

    /// Bind to the window at physical address `base_address`.
    ///
    /// # Safety
    ///
    /// `base_address` must be the word-aligned base of a mapped AXI IMX
    /// controller window of [`registers::WINDOW_SIZE`] bytes that lives for the rest of
    /// the program.
    pub const unsafe fn from_base_address(base_address: usize) -> RegisterFile {
        RegisterFile {
            base: StaticRef::new(base_address as *const ImxControlRegisters),
        }
    }

    pub fn base_address(&self) -> usize {
        self.base.address()
    }

    fn word(&self, offset: usize) -> &ReadWrite<u32> {
        assert!(
            registers::is_register_offset(offset),
            "offset {:#x} is not a register of the controller window",
            offset
        );
        let base = self.base.as_ptr().cast::<u8>();
        // Safety: the offset names a 32-bit register inside the window,
        // which `StaticRef` guarantees to be valid for the program's
        // lifetime. No reference to the whole block is formed.
        unsafe { &*base.add(offset).cast::<ReadWrite<u32>>() }
    }
}

impl RegisterAccess for RegisterFile {
    fn read(&self, offset: usize) -> u32 {
        let value = self.word(offset).get();
        if config::CONFIG.trace_register_access {
            debug!("imx: read  {:#05x} -> {:#010x}", offset, value);
        }
        value
    }

    fn write(&self, offset: usize, value: u32) {
        let word = self.word(offset);
        if config::CONFIG.trace_register_access {
            debug!("imx: write {:#05x} <- {:#010x}", offset, value);
        }
        word.set(value);
    }
}
