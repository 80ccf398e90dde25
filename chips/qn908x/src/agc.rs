// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Radio receiver automatic gain control.

use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const AGC_BASE_ADDR: usize = 0x4000_F000;

pub const AGC_BASE: StaticRef<AgcRegisters> =
    unsafe { StaticRef::new(AGC_BASE_ADDR as *const AgcRegisters) };

register_structs! {
    /// Automatic gain control
    pub AgcRegisters {
        /// Peak detector thresholds and AGC enable.
        (0x000 => pub ctrl0: ReadWrite<u32, CTRL0::Register>),
        /// Gain stepping and RSSI offset.
        (0x004 => pub ctrl1: ReadWrite<u32, CTRL1::Register>),
        /// Settle and hold timing.
        (0x008 => pub ctrl2: ReadWrite<u32, CTRL2::Register>),
        /// Gain table limits.
        (0x00C => pub ctrl3: ReadWrite<u32, CTRL3::Register>),
        /// Current gain state and RSSI.
        (0x010 => pub status: ReadOnly<u32, STATUS::Register>),
        (0x014 => @END),
    }
}

register_bitfields![u32,
pub CTRL0 [
    /// Peak detector low threshold.
    PKDET_TH_LOW OFFSET(0) NUMBITS(4) [],
    /// Peak detector high threshold.
    PKDET_TH_HIGH OFFSET(4) NUMBITS(4) [],
    /// LNA gain used when a packet search starts.
    LNA_GAIN_INIT OFFSET(8) NUMBITS(3) [],
    /// Filter gain used when a packet search starts.
    FILTER_GAIN_INIT OFFSET(12) NUMBITS(3) [],
    /// Freeze the gain after access address match.
    FREEZE_EN OFFSET(30) NUMBITS(1) [],
    /// AGC enable.
    AGC_EN OFFSET(31) NUMBITS(1) []
],
pub CTRL1 [
    /// Gain change per step.
    GAIN_STEP OFFSET(0) NUMBITS(3) [],
    /// Signed RSSI offset applied to the reported value.
    RSSI_OFFSET OFFSET(8) NUMBITS(8) [],
    /// RSSI averaging window.
    RSSI_AVG OFFSET(16) NUMBITS(2) [
        Samples1 = 0,
        Samples2 = 1,
        Samples4 = 2,
        Samples8 = 3
    ]
],
pub CTRL2 [
    /// Wait after a gain change, in 1 MHz ticks.
    SETTLE_TIME OFFSET(0) NUMBITS(8) [],
    /// Minimum time between gain changes, in 1 MHz ticks.
    HOLD_TIME OFFSET(8) NUMBITS(8) []
],
pub CTRL3 [
    /// Lowest gain index the AGC may select.
    GAIN_MIN OFFSET(0) NUMBITS(5) [],
    /// Highest gain index the AGC may select.
    GAIN_MAX OFFSET(8) NUMBITS(5) []
],
pub STATUS [
    LNA_GAIN OFFSET(0) NUMBITS(3) [],
    FILTER_GAIN OFFSET(4) NUMBITS(3) [],
    RSSI OFFSET(8) NUMBITS(8) [],
    GAIN_IDX OFFSET(16) NUMBITS(5) []
]
];
