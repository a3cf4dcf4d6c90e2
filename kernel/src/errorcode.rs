// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard error enum for invoking operations

/// Standard errors.
///
/// Drivers report failures with `Result<_, ErrorCode>`. Validation failures
/// are always detected before the hardware is touched, so an `Err` means no
/// register was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// An invalid parameter was passed, such as a camera or lane index
    /// outside the declared capacity of the peripheral
    INVAL = 5,
    /// The peripheral reports a register map revision this driver does not
    /// support
    NOSUPPORT = 9,
    /// The peripheral reports no attached device
    NODEVICE = 10,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}
