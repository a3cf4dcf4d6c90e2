// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Capsules built on the camera control HIL.

#![forbid(unsafe_code)]
#![no_std]

pub mod power_sequence;

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
