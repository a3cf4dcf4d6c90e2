// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Hardware agnostic interfaces for waiting on elapsed time.

/// Blocking delay provided by the platform.
///
/// Drivers in this tree never own a timer. Sequences that need the hardware
/// to settle between steps take an implementation of this trait from the
/// caller, together with the durations to wait.
pub trait Delay {
    /// Block for at least `us` microseconds.
    fn delay_us(&self, us: u32);
}

impl<D: Delay + ?Sized> Delay for &D {
    fn delay_us(&self, us: u32) {
        (**self).delay_us(us)
    }
}
