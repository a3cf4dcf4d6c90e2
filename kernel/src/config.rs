// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Data structure for storing compile-time configuration options.
//!
//! Configuration lives in a typed `const` object rather than behind scattered
//! `#[cfg(feature = ...)]` attributes. Every code path is type-checked even
//! when disabled, and the compiler folds the constant so a disabled option
//! costs nothing in the resulting binary.

/// Data structure holding compile-time configuration options.
///
/// To change the configuration, enable the matching cargo feature of the
/// kernel crate from the top-level crate of the build.
pub struct Config {
    /// Whether every load and store issued through the memory-mapped
    /// register file should be traced to the debug output.
    ///
    /// If enabled, each access prints the register offset and the value read
    /// or written. This is very verbose and meant for bring-up of new
    /// hardware.
    pub trace_register_access: bool,

    /// Whether the power-up sequencer should print each step before it is
    /// executed.
    pub debug_power_sequence: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined. This is the only location in the tree where `cfg!(feature = ...)`
/// is used to configure code.
pub const CONFIG: Config = Config {
    trace_register_access: cfg!(feature = "trace_register_access"),
    debug_power_sequence: cfg!(feature = "debug_power_sequence"),
};
