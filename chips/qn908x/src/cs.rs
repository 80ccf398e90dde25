// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Capacitive sense.
//!
//! Normal scans push one word per channel into the `DATA` FIFO. The low
//! power block watches a single channel against a threshold and can wake the
//! chip (`CS_WAKEUP`).

use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const CS_BASE_ADDR: usize = 0x4000_9000;

pub const CS_BASE: StaticRef<CsRegisters> =
    unsafe { StaticRef::new(CS_BASE_ADDR as *const CsRegisters) };

pub const CS_IRQS: [Irqn; 1] = [Irqn::Cs];
pub const CS_WAKEUP_IRQS: [Irqn; 1] = [Irqn::CsWakeup];

/// Number of sense channels.
pub const CS_CHANNEL_COUNT: usize = 8;
/// Depth of the result FIFO in words.
pub const CS_FIFO_DEPTH: usize = 8;

register_structs! {
    /// Capacitive sense
    pub CsRegisters {
        /// Control register 0: enable, channels, scan.
        (0x000 => pub ctrl0: ReadWrite<u32, CTRL0::Register>),
        /// Control register 1: oscillator and counting.
        (0x004 => pub ctrl1: ReadWrite<u32, CTRL1::Register>),
        /// Low power detection control.
        (0x008 => pub lp_ctrl: ReadWrite<u32, LP_CTRL::Register>),
        /// Low power interrupt enable.
        (0x00C => pub lp_inten: ReadWrite<u32, LP_INT::Register>),
        /// Low power interrupt flags. Write 1 to clear.
        (0x010 => pub lp_int: ReadWrite<u32, LP_INT::Register>),
        /// Low power detection thresholds.
        (0x014 => pub lp_thr: ReadWrite<u32, LP_THR::Register>),
        /// Interrupt enable.
        (0x018 => pub inten: ReadWrite<u32, INT::Register>),
        /// Interrupt flags. Write 1 to clear the sticky ones.
        (0x01C => pub int: ReadWrite<u32, INT::Register>),
        /// Result FIFO. Reading pops one entry.
        (0x020 => pub data: ReadOnly<u32, DATA::Register>),
        /// Last low power measurement.
        (0x024 => pub lp_data: ReadOnly<u32, LP_DATA::Register>),
        (0x028 => @END),
    }
}

register_bitfields![u32,
pub CTRL0 [
    /// Block enable.
    ENABLE OFFSET(0) NUMBITS(1) [],
    /// Start a scan. Self clearing.
    START OFFSET(1) NUMBITS(1) [],
    /// Keep scanning after the last channel.
    CONTINUOUS OFFSET(2) NUMBITS(1) [],
    /// DMA request when the FIFO is not empty.
    DMA_EN OFFSET(3) NUMBITS(1) [],
    /// Flush the result FIFO. Self clearing.
    FIFO_CLR OFFSET(4) NUMBITS(1) [],
    /// Channel enable bitmap.
    CH_EN OFFSET(8) NUMBITS(8) [],
    /// Clock divider for the sense oscillator counter.
    CLK_DIV OFFSET(16) NUMBITS(8) []
],
pub CTRL1 [
    /// Sense oscillator frequency trim.
    OSC_FREQ OFFSET(0) NUMBITS(4) [],
    /// Number of reference periods per measurement.
    MEAS_PERIOD OFFSET(4) NUMBITS(4) [],
    /// Settle time after a channel switch.
    SETTLE OFFSET(8) NUMBITS(4) [],
    /// Result averaging.
    AVG OFFSET(12) NUMBITS(2) [
        Off = 0,
        Samples2 = 1,
        Samples4 = 2,
        Samples8 = 3
    ],
    /// Drive the idle channels as a shield.
    SHIELD_EN OFFSET(16) NUMBITS(1) []
],
pub LP_CTRL [
    /// Low power detection enable.
    LP_EN OFFSET(0) NUMBITS(1) [],
    /// Channel watched in low power mode.
    LP_CH OFFSET(4) NUMBITS(3) [],
    /// Interval between low power measurements, in 32 kHz ticks.
    LP_INTV OFFSET(8) NUMBITS(8) [],
    /// Consecutive hits required before a wakeup.
    LP_DEBOUNCE OFFSET(16) NUMBITS(3) []
],
pub LP_INT [
    /// Measurement below the low threshold.
    BELOW OFFSET(0) NUMBITS(1) [],
    /// Measurement above the high threshold.
    ABOVE OFFSET(1) NUMBITS(1) []
],
pub LP_THR [
    THR_LOW OFFSET(0) NUMBITS(16) [],
    THR_HIGH OFFSET(16) NUMBITS(16) []
],
pub INT [
    /// FIFO holds at least one entry.
    FIFO_NOTEMPTY OFFSET(0) NUMBITS(1) [],
    /// FIFO is at least half full.
    FIFO_HALFFULL OFFSET(1) NUMBITS(1) [],
    /// FIFO is full.
    FIFO_FULL OFFSET(2) NUMBITS(1) [],
    /// Scan finished. Sticky.
    SCAN_DONE OFFSET(3) NUMBITS(1) [],
    /// FIFO overflowed. Sticky.
    FIFO_OVERFLOW OFFSET(4) NUMBITS(1) []
],
pub DATA [
    /// Oscillation count.
    DATA OFFSET(0) NUMBITS(20) [],
    /// Channel the count belongs to.
    CH_IDX OFFSET(24) NUMBITS(3) []
],
pub LP_DATA [
    LP_DATA OFFSET(0) NUMBITS(20) []
]
];
