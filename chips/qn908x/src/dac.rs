// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Digital to analog converter with a built in sine wave generator.

use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const DAC_BASE_ADDR: usize = 0x4000_8000;

pub const DAC_BASE: StaticRef<DacRegisters> =
    unsafe { StaticRef::new(DAC_BASE_ADDR as *const DacRegisters) };

pub const DAC_IRQS: [Irqn; 1] = [Irqn::Dac];

register_structs! {
    /// DAC
    pub DacRegisters {
        /// DAC control.
        (0x000 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Sine wave frequency.
        (0x004 => pub sin_cfg0: ReadWrite<u32, SIN_CFG0::Register>),
        /// Sine wave amplitude and DC level.
        (0x008 => pub sin_cfg1: ReadWrite<u32, SIN_CFG1::Register>),
        /// Sample to convert.
        (0x00C => pub data: WriteOnly<u32, DATA::Register>),
        /// FIFO and interrupt status.
        (0x010 => pub status: ReadOnly<u32, STATUS::Register>),
        /// Interrupt enable.
        (0x014 => pub inten: ReadWrite<u32, STATUS::Register>),
        (0x018 => @END),
    }
}

register_bitfields![u32,
pub CTRL [
    /// DAC enable.
    ENABLE OFFSET(0) NUMBITS(1) [],
    /// Take samples from the sine generator instead of DATA.
    SIN_EN OFFSET(1) NUMBITS(1) [],
    /// DMA request when the FIFO has room.
    DMA_EN OFFSET(2) NUMBITS(1) [],
    /// Conversion trigger.
    TRIG_SRC OFFSET(4) NUMBITS(3) [
        Software = 0,
        Ctimer0 = 1,
        Ctimer1 = 2,
        Ctimer2 = 3,
        Ctimer3 = 4,
        Rtc = 5,
        Gpioa10 = 6,
        Gpioa11 = 7
    ],
    /// Invert the trigger.
    TRIG_INV OFFSET(7) NUMBITS(1) [],
    /// Output gain.
    GAIN OFFSET(8) NUMBITS(4) [],
    /// Output waveform interpolation.
    WAV_SEL OFFSET(12) NUMBITS(2) [],
    /// FIFO trigger level.
    FIFO_TH OFFSET(16) NUMBITS(3) []
],
pub SIN_CFG0 [
    /// Phase increment per output sample.
    SIN_FREQ OFFSET(0) NUMBITS(24) []
],
pub SIN_CFG1 [
    SIN_AMP OFFSET(0) NUMBITS(10) [],
    SIN_DC OFFSET(16) NUMBITS(10) []
],
pub DATA [
    DATA OFFSET(0) NUMBITS(24) []
],
pub STATUS [
    /// FIFO is at or below FIFO_TH.
    FIFO_READY OFFSET(0) NUMBITS(1) [],
    /// FIFO is full.
    FIFO_FULL OFFSET(1) NUMBITS(1) [],
    /// FIFO ran empty while converting.
    FIFO_UNDERFLOW OFFSET(2) NUMBITS(1) []
]
];
