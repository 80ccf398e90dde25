// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral register definitions for the NXP QN908x (QN9080, QN9083)
//! Bluetooth LE microcontrollers.
//!
//! One module per peripheral family. Each module gives the base address of
//! every instance, a `register_structs!` overlay of the register block and
//! the `register_bitfields!` of its registers. Drivers build on these
//! through [`utilities::StaticRef`].

#![no_std]
// `register_structs!` expands recursively once per field; the SYSCON and
// SCT blocks exceed the default limit.
#![recursion_limit = "512"]

pub mod adc;
pub mod agc;
pub mod bledp;
pub mod calib;
pub mod chip_config;
pub mod crc;
pub mod cs;
pub mod ctimer;
pub mod dac;
pub mod dma;
pub mod errorcode;
pub mod flash;
pub mod flexcomm;
pub mod fsp;
pub mod gpio;
pub mod i2c;
pub mod interrupts;
pub mod memory_map;
pub mod qdec;
pub mod rng;
pub mod rtc;
pub mod sct;
pub mod spi;
pub mod spifi;
pub mod syscon;
pub mod usart;
pub mod usb;
pub mod utilities;
pub mod wdt;

pub use crate::errorcode::ErrorCode;
pub use crate::interrupts::Irqn;

// Unit tests run on the host.
#[cfg(test)]
#[macro_use]
extern crate std;
