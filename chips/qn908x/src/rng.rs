// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Random number generator.

use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const RNG_BASE_ADDR: usize = 0x4000_C000;

pub const RNG_BASE: StaticRef<RngRegisters> =
    unsafe { StaticRef::new(RNG_BASE_ADDR as *const RngRegisters) };

pub const RNG_IRQS: [Irqn; 1] = [Irqn::Rng];

register_structs! {
    pub RngRegisters {
        /// Start a generation. Self-clearing.
        (0x000 => pub start: WriteOnly<u32, START::Register>),
        (0x004 => pub status: ReadOnly<u32, STATUS::Register>),
        (0x008 => pub data: ReadOnly<u32>),
        (0x00C => pub ctrl: ReadWrite<u32, CTRL::Register>),
        (0x010 => @END),
    }
}

register_bitfields![u32,
pub START [
    RNG_START OFFSET(0) NUMBITS(1) []
],
pub STATUS [
    /// A new value is available in `DATA`.
    RNG_DONE OFFSET(0) NUMBITS(1) []
],
pub CTRL [
    /// Ring oscillator enable.
    OSC_EN OFFSET(0) NUMBITS(1) [],
    /// Interrupt on completion.
    INT_EN OFFSET(1) NUMBITS(1) [],
    /// Number of oscillator samples folded into each bit.
    SAMPLE_CNT OFFSET(8) NUMBITS(8) []
]
];
