// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Support for in-driver debugging output.
//!
//! Drivers print diagnostic messages with the `debug!` macro. The messages
//! are formatted with `core::fmt` and handed to a sink implementing
//! [`IoWrite`], which the board registers once with [`set_debug_writer`]:
//!
//! ```ignore
//! struct Uart;
//!
//! impl kernel::debug::IoWrite for Uart {
//!     fn write(&mut self, buf: &[u8]) -> usize {
//!         // push bytes to the console
//!         buf.len()
//!     }
//! }
//!
//! static mut CONSOLE: Uart = Uart;
//!
//! kernel::debug::set_debug_writer(unsafe { &mut *core::ptr::addr_of_mut!(CONSOLE) });
//! kernel::debug!("imx control version {:#010x}", version);
//! ```
//!
//! Until a writer is registered, `debug!` output is discarded.

use core::cell::Cell;
use core::fmt::{self, Write};

/// Byte sink for debug output.
pub trait IoWrite {
    /// Write `buf` to the underlying device and return the number of bytes
    /// accepted.
    fn write(&mut self, buf: &[u8]) -> usize;
}

struct DebugWriterSlot(Cell<Option<&'static mut dyn IoWrite>>);

// The driver stack runs on a single thread of execution; the slot is never
// touched concurrently.
unsafe impl Sync for DebugWriterSlot {}

static DEBUG_WRITER: DebugWriterSlot = DebugWriterSlot(Cell::new(None));

/// Register the sink used by `debug!`, replacing any earlier one.
pub fn set_debug_writer(writer: &'static mut dyn IoWrite) {
    DEBUG_WRITER.0.set(Some(writer));
}

struct WriterAdapter<'a> {
    writer: &'a mut dyn IoWrite,
}

impl Write for WriterAdapter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let written = self.writer.write(bytes);
            if written == 0 {
                return Err(fmt::Error);
            }
            bytes = &bytes[written.min(bytes.len())..];
        }
        Ok(())
    }
}

/// Write a debug message followed by a line ending.
///
/// Used by the `debug!` macro; call the macro instead.
pub fn debug_println(args: fmt::Arguments) {
    // Take the writer out of the slot for the duration of the write so a
    // nested `debug!` cannot alias it.
    if let Some(writer) = DEBUG_WRITER.0.take() {
        let mut adapter = WriterAdapter { writer };
        let _ = adapter.write_fmt(args);
        let _ = adapter.write_str("\r\n");
        DEBUG_WRITER.0.set(Some(adapter.writer));
    }
}

/// In-driver debugging print macro.
///
/// Uses `core::fmt` formatting syntax:
///
/// ```ignore
/// debug!("tap delay {}:{} = {}", camera, lane, delay);
/// ```
#[macro_export]
macro_rules! debug {
    () => ({
        // Allow an empty debug!() to print an empty line
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_println(format_args!($msg))
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_println(format_args!($fmt, $($arg)+))
    });
}
