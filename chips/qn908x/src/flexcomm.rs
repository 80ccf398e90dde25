// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Flexible Communication (Flexcomm) interface.
//!
//! A Flexcomm is a serial block whose register window is shared by the
//! function selected in `PSELID`. On this family:
//!
//! | instance  | functions    |
//! |-----------|--------------|
//! | FLEXCOMM0 | USART0       |
//! | FLEXCOMM1 | USART1, I2C0 |
//! | FLEXCOMM2 | SPI0, I2C1   |
//! | FLEXCOMM3 | SPI1         |
//!
//! The function register maps live in [`crate::usart`], [`crate::spi`] and
//! [`crate::i2c`] and reuse these base addresses.

use crate::errorcode::ErrorCode;
use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const FLEXCOMM0_BASE_ADDR: usize = 0x4008_6000;
pub const FLEXCOMM1_BASE_ADDR: usize = 0x4008_7000;
pub const FLEXCOMM2_BASE_ADDR: usize = 0x4008_8000;
pub const FLEXCOMM3_BASE_ADDR: usize = 0x4008_9000;

pub const FLEXCOMM0_BASE: StaticRef<FlexcommRegisters> =
    unsafe { StaticRef::new(FLEXCOMM0_BASE_ADDR as *const FlexcommRegisters) };
pub const FLEXCOMM1_BASE: StaticRef<FlexcommRegisters> =
    unsafe { StaticRef::new(FLEXCOMM1_BASE_ADDR as *const FlexcommRegisters) };
pub const FLEXCOMM2_BASE: StaticRef<FlexcommRegisters> =
    unsafe { StaticRef::new(FLEXCOMM2_BASE_ADDR as *const FlexcommRegisters) };
pub const FLEXCOMM3_BASE: StaticRef<FlexcommRegisters> =
    unsafe { StaticRef::new(FLEXCOMM3_BASE_ADDR as *const FlexcommRegisters) };

pub const FLEXCOMM_BASE_ADDRS: [usize; 4] = [
    FLEXCOMM0_BASE_ADDR,
    FLEXCOMM1_BASE_ADDR,
    FLEXCOMM2_BASE_ADDR,
    FLEXCOMM3_BASE_ADDR,
];
pub const FLEXCOMM_BASE_PTRS: [StaticRef<FlexcommRegisters>; 4] =
    [FLEXCOMM0_BASE, FLEXCOMM1_BASE, FLEXCOMM2_BASE, FLEXCOMM3_BASE];
pub const FLEXCOMM_IRQS: [Irqn; 4] = [
    Irqn::Flexcomm0,
    Irqn::Flexcomm1,
    Irqn::Flexcomm2,
    Irqn::Flexcomm3,
];

register_structs! {
    /// Flexcomm serial communication
    pub FlexcommRegisters {
        (0x000 => _reserved0),
        /// Peripheral Select and Flexcomm ID register.
        (0xFF8 => pub pselid: ReadWrite<u32, PSELID::Register>),
        /// Peripheral identification register.
        (0xFFC => pub pid: ReadOnly<u32, PID::Register>),
        (0x1000 => @END),
    }
}

register_bitfields![u32,
pub PSELID [
    /// Peripheral Select. This field is writable by software.
    PERSEL OFFSET(0) NUMBITS(3) [
        /// No peripheral selected.
        NoPeripheralSelected = 0,
        /// USART function selected.
        Usart = 1,
        /// SPI function selected.
        Spi = 2,
        /// I2C function selected.
        I2c = 3
    ],
    /// Lock the peripheral select. This field is writable by software.
    LOCK OFFSET(3) NUMBITS(1) [
        /// Peripheral select can be changed by software.
        Unlocked = 0,
        /// Peripheral select is locked and cannot be changed until reset.
        Locked = 1
    ],
    /// USART present indicator. This field is Read-only.
    USARTPRESENT OFFSET(4) NUMBITS(1) [],
    /// SPI present indicator. This field is Read-only.
    SPIPRESENT OFFSET(5) NUMBITS(1) [],
    /// I2C present indicator. This field is Read-only.
    I2CPRESENT OFFSET(6) NUMBITS(1) [],
    /// Flexcomm ID.
    ID OFFSET(12) NUMBITS(20) []
],
pub PID [
    /// Minor revision of module implementation.
    MINOR_REV OFFSET(8) NUMBITS(4) [],
    /// Major revision of module implementation.
    MAJOR_REV OFFSET(12) NUMBITS(4) [],
    /// Module identifier for the selected function.
    ID OFFSET(16) NUMBITS(16) []
]
];

register_bitfields![u32,
/// FIFO configuration, common to the USART and SPI functions.
pub FIFOCFG [
    ENABLETX OFFSET(0) NUMBITS(1) [],
    ENABLERX OFFSET(1) NUMBITS(1) [],
    /// FIFO size configuration. Read-only.
    SIZE OFFSET(4) NUMBITS(2) [],
    DMATX OFFSET(12) NUMBITS(1) [],
    DMARX OFFSET(13) NUMBITS(1) [],
    WAKETX OFFSET(14) NUMBITS(1) [],
    WAKERX OFFSET(15) NUMBITS(1) [],
    /// Write 1 to empty the transmit FIFO.
    EMPTYTX OFFSET(16) NUMBITS(1) [],
    /// Write 1 to empty the receive FIFO.
    EMPTYRX OFFSET(17) NUMBITS(1) []
],
pub FIFOSTAT [
    TXERR OFFSET(0) NUMBITS(1) [],
    RXERR OFFSET(1) NUMBITS(1) [],
    PERINT OFFSET(3) NUMBITS(1) [],
    TXEMPTY OFFSET(4) NUMBITS(1) [],
    TXNOTFULL OFFSET(5) NUMBITS(1) [],
    RXNOTEMPTY OFFSET(6) NUMBITS(1) [],
    RXFULL OFFSET(7) NUMBITS(1) [],
    /// Number of entries in the transmit FIFO.
    TXLVL OFFSET(8) NUMBITS(5) [],
    /// Number of entries in the receive FIFO.
    RXLVL OFFSET(16) NUMBITS(5) []
],
pub FIFOTRIG [
    TXLVLENA OFFSET(0) NUMBITS(1) [],
    RXLVLENA OFFSET(1) NUMBITS(1) [],
    TXLVL OFFSET(8) NUMBITS(4) [],
    RXLVL OFFSET(16) NUMBITS(4) []
],
/// FIFOINTENSET, FIFOINTENCLR and FIFOINTSTAT.
pub FIFOINT [
    TXERR OFFSET(0) NUMBITS(1) [],
    RXERR OFFSET(1) NUMBITS(1) [],
    TXLVL OFFSET(2) NUMBITS(1) [],
    RXLVL OFFSET(3) NUMBITS(1) [],
    PERINT OFFSET(4) NUMBITS(1) []
],
/// Function identification at offset 0xFFC.
pub ID [
    APERTURE OFFSET(0) NUMBITS(8) [],
    MINOR_REV OFFSET(8) NUMBITS(4) [],
    MAJOR_REV OFFSET(12) NUMBITS(4) [],
    ID OFFSET(16) NUMBITS(16) []
]
];

/// Depth of the USART and SPI FIFOs.
pub const FLEXCOMM_FIFO_DEPTH: usize = 8;

/// Register block of FLEXCOMM `id`.
pub const fn instance(id: usize) -> Result<StaticRef<FlexcommRegisters>, ErrorCode> {
    let base = match id {
        0 => FLEXCOMM0_BASE,
        1 => FLEXCOMM1_BASE,
        2 => FLEXCOMM2_BASE,
        3 => FLEXCOMM3_BASE,
        _ => return Err(ErrorCode::INVAL),
    };
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::LocalRegisterCopy;

    #[test]
    fn select_and_lock() {
        let v = PSELID::PERSEL::I2c + PSELID::LOCK::Locked;
        assert_eq!(v.value, 0b1011);
    }

    #[test]
    fn decode_present_flags() {
        let pselid: LocalRegisterCopy<u32, PSELID::Register> =
            LocalRegisterCopy::new(0x0000_0062);
        assert!(pselid.is_set(PSELID::SPIPRESENT));
        assert!(pselid.is_set(PSELID::I2CPRESENT));
        assert!(!pselid.is_set(PSELID::USARTPRESENT));
        assert_eq!(
            pselid.read_as_enum(PSELID::PERSEL),
            Some(PSELID::PERSEL::Value::Spi)
        );
    }

    #[test]
    fn fifo_levels() {
        let stat: LocalRegisterCopy<u32, FIFOSTAT::Register> =
            LocalRegisterCopy::new(0x0003_0830);
        assert!(stat.is_set(FIFOSTAT::TXEMPTY));
        assert!(stat.is_set(FIFOSTAT::TXNOTFULL));
        assert_eq!(stat.read(FIFOSTAT::TXLVL), 8);
        assert_eq!(stat.read(FIFOSTAT::RXLVL), 3);
    }

    #[test]
    fn instance_bounds() {
        assert!(instance(3).is_ok());
        assert_eq!(instance(4).err(), Some(ErrorCode::INVAL));
    }
}
