// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Real-Time Clock.
//!
//! A seconds counter with its own interrupt vector, plus a free running
//! 32 kHz counter with a compare value raising the second vector.

use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const RTC_BASE_ADDR: usize = 0x4000_2000;

pub const RTC_BASE: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new(RTC_BASE_ADDR as *const RtcRegisters) };

pub const RTC_SEC_IRQS: [Irqn; 1] = [Irqn::RtcSec];
pub const RTC_FR_IRQS: [Irqn; 1] = [Irqn::RtcFr];

register_structs! {
    /// Real-Time Clock (RTC)
    pub RtcRegisters {
        /// Seconds counter.
        (0x000 => pub sec: ReadWrite<u32>),
        /// RTC control register
        (0x004 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Status register. Interrupt flags are cleared by writing 1.
        (0x008 => pub status: ReadWrite<u32, STATUS::Register>),
        /// Calibration register.
        (0x00C => pub calib: ReadWrite<u32, CALIB::Register>),
        /// Sub-second counter, 32 kHz ticks within the current second.
        (0x010 => pub cnt2: ReadOnly<u32, CNT2::Register>),
        /// Free running counter compare value.
        (0x014 => pub fr: ReadWrite<u32>),
        /// Free running 32 kHz counter.
        (0x018 => pub fr_cnt: ReadOnly<u32>),
        (0x01C => @END),
    }
}

register_bitfields![u32,
pub CTRL [
    /// Seconds interrupt enable.
    SEC_INT_EN OFFSET(0) NUMBITS(1) [],
    /// Free running compare interrupt enable.
    FR_INT_EN OFFSET(1) NUMBITS(1) [],
    /// Calibration enable.
    CAL_EN OFFSET(2) NUMBITS(1) [],
    /// Load `SEC` into the counter on the next tick.
    SEC_SET OFFSET(3) NUMBITS(1) [],
    /// Reset the sub-second and free running counters.
    CNT_RST OFFSET(4) NUMBITS(1) [],
    /// Keep counting while the core is halted by the debugger.
    DBG_RUN OFFSET(5) NUMBITS(1) []
],
pub STATUS [
    SEC_INT OFFSET(0) NUMBITS(1) [],
    FR_INT OFFSET(1) NUMBITS(1) [],
    /// A register write is still crossing into the 32 kHz domain.
    SYNC_BUSY OFFSET(2) NUMBITS(1) []
],
pub CALIB [
    /// Correction in 32 kHz ticks applied once per second.
    PPM OFFSET(0) NUMBITS(16) [],
    /// Direction of the correction.
    DIR OFFSET(16) NUMBITS(1) [
        Forward = 0,
        Backward = 1
    ]
],
pub CNT2 [
    CNT2 OFFSET(0) NUMBITS(15) []
]
];

/// 32 kHz ticks per second.
pub const RTC_TICKS_PER_SEC: u32 = 32_768;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_direction() {
        let v = CALIB::PPM.val(10) + CALIB::DIR::Backward;
        assert_eq!(v.value, 0x0001_000A);
        assert_eq!(CALIB::PPM.read(v.value), 10);
    }

    #[test]
    fn sub_second_counter_covers_one_second() {
        assert_eq!(CNT2::CNT2.mask + 1, RTC_TICKS_PER_SEC);
    }
}
