// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Watchdog timer.
//!
//! The counter reloads from `LOAD` and counts down. The first time it
//! reaches zero it raises the interrupt; the second time, with the
//! interrupt still pending and `RESEN` set, it resets the chip. Every
//! register except `LOCK` ignores writes while the lock is engaged.

use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const WDT_BASE_ADDR: usize = 0x4000_1000;

pub const WDT_BASE: StaticRef<WdtRegisters> =
    unsafe { StaticRef::new(WDT_BASE_ADDR as *const WdtRegisters) };

pub const WDT_IRQS: [Irqn; 1] = [Irqn::Wdt];

/// Value written to `LOCK` to enable register writes. Any other value locks.
pub const WDT_UNLOCK_KEY: u32 = 0x1ACC_E551;

register_structs! {
    /// Watchdog timer
    pub WdtRegisters {
        /// Reload value.
        (0x000 => pub load: ReadWrite<u32>),
        /// Current count.
        (0x004 => pub value: ReadOnly<u32>),
        (0x008 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Any write clears the interrupt and reloads the counter.
        (0x00C => pub int_clr: WriteOnly<u32>),
        /// Raw interrupt status.
        (0x010 => pub ris: ReadOnly<u32, INT::Register>),
        /// Masked interrupt status.
        (0x014 => pub mis: ReadOnly<u32, INT::Register>),
        (0x018 => _reserved0),
        (0xC00 => pub lock: ReadWrite<u32, LOCK::Register>),
        (0xC04 => @END),
    }
}

register_bitfields![u32,
pub CTRL [
    /// Enable the counter and its interrupt.
    INTEN OFFSET(0) NUMBITS(1) [],
    /// Enable the reset output.
    RESEN OFFSET(1) NUMBITS(1) []
],
pub INT [
    INT OFFSET(0) NUMBITS(1) []
],
pub LOCK [
    /// Reads back 1 while registers are write protected.
    LOCK OFFSET(0) NUMBITS(1) [
        Unlocked = 0,
        Locked = 1
    ]
]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::LocalRegisterCopy;

    #[test]
    fn lock_reads_back_state() {
        let lock: LocalRegisterCopy<u32, LOCK::Register> = LocalRegisterCopy::new(1);
        assert_eq!(
            lock.read_as_enum(LOCK::LOCK),
            Some(LOCK::LOCK::Value::Locked)
        );
    }

    #[test]
    fn interrupt_and_reset() {
        assert_eq!((CTRL::INTEN::SET + CTRL::RESEN::SET).value, 0b11);
    }
}
