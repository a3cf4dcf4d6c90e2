// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Core support crate
//!
//! The kernel crate holds the code shared by the chip drivers and capsules
//! of this tree: the standard [`ErrorCode`], compile-time configuration, the
//! `debug!` output path, register utilities and the Hardware Interface Layer
//! (HIL) trait definitions.
//!
//! Most `unsafe` code is in this kernel crate.

#![no_std]

pub mod config;
pub mod debug;
pub mod hil;
pub mod utilities;

mod errorcode;

pub use crate::errorcode::ErrorCode;

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
