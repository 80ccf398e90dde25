// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! I2C function of FLEXCOMM1 and FLEXCOMM2.

use crate::errorcode::ErrorCode;
use crate::flexcomm::{FLEXCOMM1_BASE_ADDR, FLEXCOMM2_BASE_ADDR, ID};
use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const I2C0_BASE_ADDR: usize = FLEXCOMM1_BASE_ADDR;
pub const I2C1_BASE_ADDR: usize = FLEXCOMM2_BASE_ADDR;

pub const I2C0_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(I2C0_BASE_ADDR as *const I2cRegisters) };
pub const I2C1_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(I2C1_BASE_ADDR as *const I2cRegisters) };

pub const I2C_BASE_ADDRS: [usize; 2] = [I2C0_BASE_ADDR, I2C1_BASE_ADDR];
pub const I2C_BASE_PTRS: [StaticRef<I2cRegisters>; 2] = [I2C0_BASE, I2C1_BASE];
pub const I2C_IRQS: [Irqn; 2] = [Irqn::Flexcomm1, Irqn::Flexcomm2];

/// Slave address match registers.
pub const I2C_SLVADR_COUNT: usize = 4;

register_structs! {
    /// I2C-bus interfaces
    pub I2cRegisters {
        (0x000 => _reserved0),
        /// Configuration for shared functions.
        (0x800 => pub cfg: ReadWrite<u32, CFG::Register>),
        /// Status register for Master, Slave, and Monitor functions.
        (0x804 => pub stat: ReadWrite<u32, STAT::Register>),
        /// Interrupt Enable Set and read register.
        (0x808 => pub intenset: ReadWrite<u32, INT::Register>),
        /// Interrupt Enable Clear register.
        (0x80C => pub intenclr: WriteOnly<u32, INT::Register>),
        /// Time-out value register.
        (0x810 => pub timeout: ReadWrite<u32, TIMEOUT::Register>),
        /// Clock pre-divider for the entire I2C interface.
        (0x814 => pub clkdiv: ReadWrite<u32, CLKDIV::Register>),
        /// Interrupt Status register for Master, Slave, and Monitor functions.
        (0x818 => pub intstat: ReadOnly<u32, INT::Register>),
        (0x81C => _reserved1),
        /// Master control register.
        (0x820 => pub mstctl: ReadWrite<u32, MSTCTL::Register>),
        /// Master timing configuration.
        (0x824 => pub msttime: ReadWrite<u32, MSTTIME::Register>),
        /// Combined Master receiver and transmitter data register.
        (0x828 => pub mstdat: ReadWrite<u32, DAT::Register>),
        (0x82C => _reserved2),
        /// Slave control register.
        (0x840 => pub slvctl: ReadWrite<u32, SLVCTL::Register>),
        /// Combined Slave receiver and transmitter data register.
        (0x844 => pub slvdat: ReadWrite<u32, DAT::Register>),
        /// Slave address registers.
        (0x848 => pub slvadr: [ReadWrite<u32, SLVADR::Register>; I2C_SLVADR_COUNT]),
        /// Slave Qualification for address 0.
        (0x858 => pub slvqual0: ReadWrite<u32, SLVQUAL0::Register>),
        (0x85C => _reserved3),
        /// Monitor receiver data register.
        (0x880 => pub monrxdat: ReadOnly<u32, MONRXDAT::Register>),
        (0x884 => _reserved4),
        /// I2C module Identification.
        (0xFFC => pub id: ReadOnly<u32, ID::Register>),
        (0x1000 => @END),
    }
}

register_bitfields![u32,
pub CFG [
    /// Master Enable.
    MSTEN OFFSET(0) NUMBITS(1) [],
    /// Slave Enable.
    SLVEN OFFSET(1) NUMBITS(1) [],
    /// Monitor Enable.
    MONEN OFFSET(2) NUMBITS(1) [],
    /// I2C bus Time-out Enable.
    TIMEOUTEN OFFSET(3) NUMBITS(1) [],
    /// Monitor function Clock Stretching.
    MONCLKSTR OFFSET(4) NUMBITS(1) [],
    /// High-speed mode Capable enable.
    HSCAPABLE OFFSET(5) NUMBITS(1) []
],
pub STAT [
    MSTPENDING OFFSET(0) NUMBITS(1) [],
    /// Master State code.
    MSTSTATE OFFSET(1) NUMBITS(3) [
        Idle = 0,
        ReceiveReady = 1,
        TransmitReady = 2,
        NackAddress = 3,
        NackData = 4
    ],
    MSTARBLOSS OFFSET(4) NUMBITS(1) [],
    MSTSTSTPERR OFFSET(6) NUMBITS(1) [],
    SLVPENDING OFFSET(8) NUMBITS(1) [],
    /// Slave State code.
    SLVSTATE OFFSET(9) NUMBITS(2) [
        SlaveAddress = 0,
        SlaveReceive = 1,
        SlaveTransmit = 2
    ],
    SLVNOTSTR OFFSET(11) NUMBITS(1) [],
    /// Index of the matched slave address.
    SLVIDX OFFSET(12) NUMBITS(2) [],
    SLVSEL OFFSET(14) NUMBITS(1) [],
    SLVDESEL OFFSET(15) NUMBITS(1) [],
    MONRDY OFFSET(16) NUMBITS(1) [],
    MONOV OFFSET(17) NUMBITS(1) [],
    MONACTIVE OFFSET(18) NUMBITS(1) [],
    MONIDLE OFFSET(19) NUMBITS(1) [],
    EVENTTIMEOUT OFFSET(24) NUMBITS(1) [],
    SCLTIMEOUT OFFSET(25) NUMBITS(1) []
],
/// INTENSET, INTENCLR and INTSTAT.
pub INT [
    MSTPENDING OFFSET(0) NUMBITS(1) [],
    MSTARBLOSS OFFSET(4) NUMBITS(1) [],
    MSTSTSTPERR OFFSET(6) NUMBITS(1) [],
    SLVPENDING OFFSET(8) NUMBITS(1) [],
    SLVNOTSTR OFFSET(11) NUMBITS(1) [],
    SLVDESEL OFFSET(15) NUMBITS(1) [],
    MONRDY OFFSET(16) NUMBITS(1) [],
    MONOV OFFSET(17) NUMBITS(1) [],
    MONIDLE OFFSET(19) NUMBITS(1) [],
    EVENTTIMEOUT OFFSET(24) NUMBITS(1) [],
    SCLTIMEOUT OFFSET(25) NUMBITS(1) []
],
pub TIMEOUT [
    /// Time-out time value, bottom four bits. Read-only, always 0xF.
    TOMIN OFFSET(0) NUMBITS(4) [],
    /// Time-out time value in units of 16 I2C function clocks.
    TO OFFSET(4) NUMBITS(12) []
],
pub CLKDIV [
    /// Divider value minus one.
    DIVVAL OFFSET(0) NUMBITS(16) []
],
pub MSTCTL [
    MSTCONTINUE OFFSET(0) NUMBITS(1) [],
    MSTSTART OFFSET(1) NUMBITS(1) [],
    MSTSTOP OFFSET(2) NUMBITS(1) [],
    MSTDMA OFFSET(3) NUMBITS(1) []
],
pub MSTTIME [
    /// SCL low time in clocks minus two.
    MSTSCLLOW OFFSET(0) NUMBITS(3) [],
    /// SCL high time in clocks minus two.
    MSTSCLHIGH OFFSET(4) NUMBITS(3) []
],
/// MSTDAT and SLVDAT.
pub DAT [
    DATA OFFSET(0) NUMBITS(8) []
],
pub SLVCTL [
    SLVCONTINUE OFFSET(0) NUMBITS(1) [],
    SLVNACK OFFSET(1) NUMBITS(1) [],
    SLVDMA OFFSET(3) NUMBITS(1) []
],
pub SLVADR [
    /// Slave Address n Disable.
    SADISABLE OFFSET(0) NUMBITS(1) [],
    /// Seven bit slave address compared to the received address.
    SLVADR OFFSET(1) NUMBITS(7) []
],
pub SLVQUAL0 [
    /// Selects whether SLVQUAL0 is a mask or an upper address bound.
    QUALMODE0 OFFSET(0) NUMBITS(1) [
        Mask = 0,
        Extend = 1
    ],
    SLVQUAL0 OFFSET(1) NUMBITS(7) []
],
pub MONRXDAT [
    MONRXDAT OFFSET(0) NUMBITS(8) [],
    MONSTART OFFSET(8) NUMBITS(1) [],
    MONRESTART OFFSET(9) NUMBITS(1) [],
    MONNACK OFFSET(10) NUMBITS(1) []
]
];

/// Register block of I2C `n`.
pub fn instance(n: usize) -> Result<StaticRef<I2cRegisters>, ErrorCode> {
    I2C_BASE_PTRS.get(n).copied().ok_or(ErrorCode::INVAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::LocalRegisterCopy;

    #[test]
    fn master_state_decodes() {
        let stat: LocalRegisterCopy<u32, STAT::Register> = LocalRegisterCopy::new(0x0000_0007);
        assert!(stat.is_set(STAT::MSTPENDING));
        assert_eq!(
            stat.read_as_enum(STAT::MSTSTATE),
            Some(STAT::MSTSTATE::Value::NackAddress)
        );
    }

    #[test]
    fn seven_bit_address_is_shifted() {
        assert_eq!(SLVADR::SLVADR.val(0x50).value, 0xA0);
    }

    #[test]
    fn start_with_address() {
        let ctl = MSTCTL::MSTSTART::SET;
        assert_eq!(ctl.value, 0b010);
    }

    #[test]
    fn instances_share_flexcomm_windows() {
        assert_eq!(I2C0_BASE_ADDR, FLEXCOMM1_BASE_ADDR);
        assert_eq!(I2C0_BASE.addr(), crate::usart::USART1_BASE_ADDR);
        assert_eq!(I2C1_BASE.addr(), crate::spi::SPI0_BASE_ADDR);
        assert_eq!(I2C_IRQS, [Irqn::Flexcomm1, Irqn::Flexcomm2]);
        assert_eq!(instance(1).map(|r| r.addr()), Ok(FLEXCOMM2_BASE_ADDR));
    }
}
