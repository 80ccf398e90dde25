// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip specific configuration.
//!
//! The QN908x family shares one register map. Parts differ in which blocks
//! are bonded out and in memory sizes, so a board picks one of the
//! configuration types below instead of toggling cargo features.

/// Cortex-M4 core revision r0p1.
pub const CM4_REV: u16 = 0x0001;
/// The core has a memory protection unit.
pub const MPU_PRESENT: bool = true;
/// Number of priority bits implemented in the NVIC.
pub const NVIC_PRIO_BITS: u8 = 3;
/// The SysTick configuration is the standard one.
pub const VENDOR_SYSTICK_CONFIG: bool = false;
/// The core has a single precision FPU.
pub const FPU_PRESENT: bool = true;

/// QN908x configuration based on the target part.
pub trait Qn908xConfig {
    /// Identifier for the part. Useful when debugging to confirm the correct
    /// configuration is in use.
    const NAME: &'static str;

    /// Size of the internal flash in bytes.
    const FLASH_SIZE: usize;

    /// Size of the internal SRAM in bytes.
    const SRAM_SIZE: usize;

    /// Whether the USB device block is usable on this part.
    const HAS_USB: bool;

    /// Highest supported core clock in Hz.
    const CORE_FREQ_MAX: u32;
}

/// QN9080: full feature set including USB.
pub enum Qn9080 {}

impl Qn908xConfig for Qn9080 {
    const NAME: &'static str = "QN9080";
    const FLASH_SIZE: usize = 512 * 1024;
    const SRAM_SIZE: usize = 128 * 1024;
    const HAS_USB: bool = true;
    const CORE_FREQ_MAX: u32 = 32_000_000;
}

/// QN9083: same core and memories, USB not bonded out.
pub enum Qn9083 {}

impl Qn908xConfig for Qn9083 {
    const NAME: &'static str = "QN9083";
    const FLASH_SIZE: usize = 512 * 1024;
    const SRAM_SIZE: usize = 128 * 1024;
    const HAS_USB: bool = false;
    const CORE_FREQ_MAX: u32 = 32_000_000;
}
