// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Driver for the AXI Sony IMX camera-interface controller.
//!
//! The controller is an FPGA core that powers, resets and triggers up to
//! three IMX image sensors, deserializes their multi-lane serial links and
//! exposes per-lane alignment status and tap-delay calibration through a
//! small AXI-Lite register window.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! use axi_imx::imx_control::ImxControl;
//! use axi_imx::register_file::RegisterFile;
//! use kernel::hil::camera_control::CameraControl;
//!
//! let registers = unsafe { RegisterFile::from_base_address(0x43C0_0000) };
//! let imx = ImxControl::new(registers);
//! imx.configure_trigger(1000, 10);
//! imx.enable_trigger(true);
//! ```

#![no_std]

pub mod imx_control;
pub mod register_file;
pub mod registers;

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
