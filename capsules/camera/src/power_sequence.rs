// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Power-up and reset sequencing for camera controllers.
//!
//! The sensors and the receive path only come up cleanly if power, register
//! clear, the asynchronous and synchronous clock-domain resets and the
//! tap-delay reset are driven in a fixed order, with the hardware given time
//! to settle between steps. The order is published as [`POWER_UP_SEQUENCE`];
//! [`PowerSequencer`] walks it against any [`CameraControl`].
//!
//! No settle time is built in. The hardware documentation gives none, so the
//! board supplies every duration through [`SettleTimes`] and the blocking
//! wait through a [`Delay`].
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! let sequencer = PowerSequencer::new(&imx, &delay);
//! sequencer.power_up(&SettleTimes {
//!     power_down_us: 1000,
//!     power_up_us: 1000,
//!     clear_release_us: 1000,
//!     async_reset_assert_us: 1000,
//!     async_reset_release_us: 1000,
//!     sync_reset_us: 1000,
//!     tap_delay_reset_us: 1000,
//! })?;
//! ```

use kernel::config;
use kernel::debug;
use kernel::hil::camera_control::{CameraControl, MAX_CAMERA_COUNT};
use kernel::hil::time::Delay;
use kernel::ErrorCode;

/// A point in the sequence where the hardware must be left to settle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettlePoint {
    PowerDown,
    PowerUp,
    ClearRelease,
    AsyncResetAssert,
    AsyncResetRelease,
    SyncReset,
    TapDelayReset,
}

/// One primitive operation of the power-up sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Power of every attached camera
    CameraPower(bool),
    RegisterClear(bool),
    /// Asynchronous clock-domain reset
    AsyncReset(bool),
    TapDelayReset(bool),
    /// Pulse of the synchronous clock-domain reset
    SyncResetStrobe,
    Settle(SettlePoint),
}

/// The power-up and reset order of the controller.
pub const POWER_UP_SEQUENCE: [Step; 18] = [
    Step::CameraPower(false),
    Step::RegisterClear(false),
    Step::AsyncReset(false),
    Step::TapDelayReset(false),
    Step::Settle(SettlePoint::PowerDown),
    Step::CameraPower(true),
    Step::Settle(SettlePoint::PowerUp),
    Step::RegisterClear(true),
    Step::Settle(SettlePoint::ClearRelease),
    Step::AsyncReset(true),
    Step::Settle(SettlePoint::AsyncResetAssert),
    Step::AsyncReset(false),
    Step::Settle(SettlePoint::AsyncResetRelease),
    Step::SyncResetStrobe,
    Step::Settle(SettlePoint::SyncReset),
    Step::TapDelayReset(true),
    Step::Settle(SettlePoint::TapDelayReset),
    Step::TapDelayReset(false),
];

/// Settle time, in microseconds, after each [`SettlePoint`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleTimes {
    pub power_down_us: u32,
    pub power_up_us: u32,
    pub clear_release_us: u32,
    pub async_reset_assert_us: u32,
    pub async_reset_release_us: u32,
    pub sync_reset_us: u32,
    pub tap_delay_reset_us: u32,
}

impl SettleTimes {
    pub fn duration_us(&self, point: SettlePoint) -> u32 {
        match point {
            SettlePoint::PowerDown => self.power_down_us,
            SettlePoint::PowerUp => self.power_up_us,
            SettlePoint::ClearRelease => self.clear_release_us,
            SettlePoint::AsyncResetAssert => self.async_reset_assert_us,
            SettlePoint::AsyncResetRelease => self.async_reset_release_us,
            SettlePoint::SyncReset => self.sync_reset_us,
            SettlePoint::TapDelayReset => self.tap_delay_reset_us,
        }
    }
}

pub struct PowerSequencer<'a, C: CameraControl, D: Delay> {
    control: &'a C,
    delay: &'a D,
}

impl<'a, C: CameraControl, D: Delay> PowerSequencer<'a, C, D> {
    pub fn new(control: &'a C, delay: &'a D) -> PowerSequencer<'a, C, D> {
        PowerSequencer { control, delay }
    }

    /// Run [`POWER_UP_SEQUENCE`] on every camera the controller reports.
    ///
    /// Fails with `ErrorCode::NODEVICE` if no camera is reported and with
    /// `ErrorCode::INVAL` if more cameras are reported than the register
    /// map can address. Both are detected before the first write.
    pub fn power_up(&self, times: &SettleTimes) -> Result<(), ErrorCode> {
        let cameras = self.attached_cameras()?;
        for step in POWER_UP_SEQUENCE.iter() {
            self.apply(*step, cameras, times)?;
        }
        Ok(())
    }

    /// Stop the trigger and switch every camera off.
    pub fn power_down(&self) -> Result<(), ErrorCode> {
        self.control.enable_trigger(false);
        for camera in 0..MAX_CAMERA_COUNT {
            self.control.enable_camera_power(camera, false)?;
        }
        Ok(())
    }

    /// Hold the camera register block in clear for `hold_us`, then release.
    pub fn strobe_register_clear(&self, hold_us: u32) {
        self.control.enable_register_clear(true);
        self.delay.delay_us(hold_us);
        self.control.enable_register_clear(false);
    }

    /// Hold the tap-delay logic in reset for `hold_us`, then release.
    pub fn strobe_tap_delay_reset(&self, hold_us: u32) {
        self.control.enable_tap_delay_reset(true);
        self.delay.delay_us(hold_us);
        self.control.enable_tap_delay_reset(false);
    }

    fn attached_cameras(&self) -> Result<usize, ErrorCode> {
        match self.control.get_camera_count() as usize {
            0 => Err(ErrorCode::NODEVICE),
            n if n > MAX_CAMERA_COUNT => Err(ErrorCode::INVAL),
            n => Ok(n),
        }
    }

    fn apply(&self, step: Step, cameras: usize, times: &SettleTimes) -> Result<(), ErrorCode> {
        if config::CONFIG.debug_power_sequence {
            debug!("camera power-up: {:?}", step);
        }
        match step {
            Step::CameraPower(on) => {
                for camera in 0..cameras {
                    self.control.enable_camera_power(camera, on)?;
                }
            }
            Step::RegisterClear(on) => self.control.enable_register_clear(on),
            Step::AsyncReset(on) => self.control.enable_clock_domain_reset(on),
            Step::TapDelayReset(on) => self.control.enable_tap_delay_reset(on),
            Step::SyncResetStrobe => self.control.strobe_clock_domain_reset(),
            Step::Settle(point) => self.delay.delay_us(times.duration_us(point)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};
    use kernel::debug::{set_debug_writer, IoWrite};
    use kernel::hil::camera_control::{CAMERA_ALIGNMENT_INVALID, TAP_DELAY_INVALID};
    use std::boxed::Box;
    use std::string::String;
    use std::sync::Mutex;
    use std::vec::Vec;

    struct Capture(&'static Mutex<Vec<u8>>);

    impl IoWrite for Capture {
        fn write(&mut self, buf: &[u8]) -> usize {
            self.0.lock().unwrap().extend_from_slice(buf);
            buf.len()
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Call {
        Power(usize, bool),
        Clear(bool),
        AsyncReset(bool),
        TapDelayReset(bool),
        SyncStrobe,
        Trigger(bool),
        Wait(u32),
    }

    struct Log(RefCell<Vec<Call>>);

    impl Log {
        fn new() -> Self {
            Log(RefCell::new(Vec::new()))
        }

        fn push(&self, call: Call) {
            self.0.borrow_mut().push(call);
        }

        fn take(&self) -> Vec<Call> {
            self.0.take()
        }
    }

    struct FakeCameraControl<'a> {
        log: &'a Log,
        camera_count: Cell<u8>,
    }

    impl CameraControl for FakeCameraControl<'_> {
        fn get_status(&self) -> u32 {
            0
        }

        fn get_version(&self) -> u32 {
            0
        }

        fn configure_trigger(&self, _period: u32, _pulse_width: u32) {}

        fn get_camera_count(&self) -> u8 {
            self.camera_count.get()
        }

        fn get_lane_width(&self) -> u8 {
            8
        }

        fn get_alignment_bitmap(&self) -> u64 {
            0
        }

        fn get_camera_alignment(&self, _camera: usize) -> u32 {
            CAMERA_ALIGNMENT_INVALID
        }

        fn is_camera_fully_aligned(&self, _camera: usize) -> bool {
            false
        }

        fn enable_camera_power(&self, camera: usize, enable: bool) -> Result<(), ErrorCode> {
            if camera >= MAX_CAMERA_COUNT {
                return Err(ErrorCode::INVAL);
            }
            self.log.push(Call::Power(camera, enable));
            Ok(())
        }

        fn is_camera_powered(&self, _camera: usize) -> Result<bool, ErrorCode> {
            Ok(false)
        }

        fn enable_register_clear(&self, enable: bool) {
            self.log.push(Call::Clear(enable));
        }

        fn enable_tap_delay_reset(&self, enable: bool) {
            self.log.push(Call::TapDelayReset(enable));
        }

        fn enable_clock_domain_reset(&self, enable: bool) {
            self.log.push(Call::AsyncReset(enable));
        }

        fn strobe_clock_domain_reset(&self) {
            self.log.push(Call::SyncStrobe);
        }

        fn enable_trigger(&self, enable: bool) {
            self.log.push(Call::Trigger(enable));
        }

        fn is_trigger_enabled(&self) -> bool {
            false
        }

        fn set_tap_delay(&self, _camera: usize, _lane: usize, _delay: u32) -> Result<(), ErrorCode> {
            Ok(())
        }

        fn get_tap_delay(&self, _camera: usize, _lane: usize) -> u32 {
            TAP_DELAY_INVALID
        }
    }

    struct FakeDelay<'a> {
        log: &'a Log,
    }

    impl Delay for FakeDelay<'_> {
        fn delay_us(&self, us: u32) {
            self.log.push(Call::Wait(us));
        }
    }

    const TIMES: SettleTimes = SettleTimes {
        power_down_us: 1,
        power_up_us: 2,
        clear_release_us: 3,
        async_reset_assert_us: 4,
        async_reset_release_us: 5,
        sync_reset_us: 6,
        tap_delay_reset_us: 7,
    };

    #[test]
    fn power_up_order() {
        // The only test here that registers a debug writer and runs the
        // sequence past its checks, so step tracing lands in `output` alone.
        let output: &'static Mutex<Vec<u8>> = Box::leak(Box::new(Mutex::new(Vec::new())));
        set_debug_writer(Box::leak(Box::new(Capture(output))));

        let log = Log::new();
        let control = FakeCameraControl {
            log: &log,
            camera_count: Cell::new(2),
        };
        let delay = FakeDelay { log: &log };

        PowerSequencer::new(&control, &delay)
            .power_up(&TIMES)
            .unwrap();

        assert_eq!(
            log.take(),
            vec![
                Call::Power(0, false),
                Call::Power(1, false),
                Call::Clear(false),
                Call::AsyncReset(false),
                Call::TapDelayReset(false),
                Call::Wait(1),
                Call::Power(0, true),
                Call::Power(1, true),
                Call::Wait(2),
                Call::Clear(true),
                Call::Wait(3),
                Call::AsyncReset(true),
                Call::Wait(4),
                Call::AsyncReset(false),
                Call::Wait(5),
                Call::SyncStrobe,
                Call::Wait(6),
                Call::TapDelayReset(true),
                Call::Wait(7),
                Call::TapDelayReset(false),
            ]
        );

        let trace = String::from_utf8(output.lock().unwrap().clone()).unwrap();
        if config::CONFIG.debug_power_sequence {
            let lines: Vec<&str> = trace.split_terminator("\r\n").collect();
            assert_eq!(lines.len(), POWER_UP_SEQUENCE.len());
            assert_eq!(lines[0], "camera power-up: CameraPower(false)");
            assert_eq!(lines[4], "camera power-up: Settle(PowerDown)");
            assert_eq!(lines[13], "camera power-up: SyncResetStrobe");
            assert_eq!(lines[17], "camera power-up: TapDelayReset(false)");
        } else {
            assert!(trace.is_empty());
        }
    }

    #[test]
    fn every_settle_point_is_caller_timed() {
        let settles: Vec<u32> = POWER_UP_SEQUENCE
            .iter()
            .filter_map(|step| match step {
                Step::Settle(point) => Some(TIMES.duration_us(*point)),
                _ => None,
            })
            .collect();
        assert_eq!(settles, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn rejects_camera_count_before_any_write() {
        let log = Log::new();
        let delay = FakeDelay { log: &log };

        let control = FakeCameraControl {
            log: &log,
            camera_count: Cell::new(0),
        };
        let sequencer = PowerSequencer::new(&control, &delay);
        assert_eq!(sequencer.power_up(&TIMES), Err(ErrorCode::NODEVICE));

        control.camera_count.set(4);
        assert_eq!(sequencer.power_up(&TIMES), Err(ErrorCode::INVAL));
        assert!(log.take().is_empty());
    }

    #[test]
    fn power_down_stops_trigger_first() {
        let log = Log::new();
        let control = FakeCameraControl {
            log: &log,
            camera_count: Cell::new(1),
        };
        let delay = FakeDelay { log: &log };

        PowerSequencer::new(&control, &delay).power_down().unwrap();
        assert_eq!(
            log.take(),
            vec![
                Call::Trigger(false),
                Call::Power(0, false),
                Call::Power(1, false),
                Call::Power(2, false),
            ]
        );
    }

    #[test]
    fn strobes_hold_for_caller_duration() {
        let log = Log::new();
        let control = FakeCameraControl {
            log: &log,
            camera_count: Cell::new(3),
        };
        let delay = FakeDelay { log: &log };
        let sequencer = PowerSequencer::new(&control, &delay);

        sequencer.strobe_register_clear(1000);
        sequencer.strobe_tap_delay_reset(250);
        assert_eq!(
            log.take(),
            vec![
                Call::Clear(true),
                Call::Wait(1000),
                Call::Clear(false),
                Call::TapDelayReset(true),
                Call::Wait(250),
                Call::TapDelayReset(false),
            ]
        );
    }
}
