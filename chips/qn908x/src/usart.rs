// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! USART function of FLEXCOMM0 and FLEXCOMM1.

use crate::errorcode::ErrorCode;
use crate::flexcomm::{
    FIFOCFG, FIFOINT, FIFOSTAT, FIFOTRIG, FLEXCOMM0_BASE_ADDR, FLEXCOMM1_BASE_ADDR, ID,
};
use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const USART0_BASE_ADDR: usize = FLEXCOMM0_BASE_ADDR;
pub const USART1_BASE_ADDR: usize = FLEXCOMM1_BASE_ADDR;

pub const USART0_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(USART0_BASE_ADDR as *const UsartRegisters) };
pub const USART1_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(USART1_BASE_ADDR as *const UsartRegisters) };

pub const USART_BASE_ADDRS: [usize; 2] = [USART0_BASE_ADDR, USART1_BASE_ADDR];
pub const USART_BASE_PTRS: [StaticRef<UsartRegisters>; 2] = [USART0_BASE, USART1_BASE];
pub const USART_IRQS: [Irqn; 2] = [Irqn::Flexcomm0, Irqn::Flexcomm1];

register_structs! {
    /// USARTs
    pub UsartRegisters {
        /// USART Configuration register.
        (0x000 => pub cfg: ReadWrite<u32, CFG::Register>),
        /// USART Control register.
        (0x004 => pub ctl: ReadWrite<u32, CTL::Register>),
        /// USART Status register. Status flags are cleared by writing 1.
        (0x008 => pub stat: ReadWrite<u32, STAT::Register>),
        /// Interrupt Enable read and Set register.
        (0x00C => pub intenset: ReadWrite<u32, INT::Register>),
        /// Interrupt Enable Clear register.
        (0x010 => pub intenclr: WriteOnly<u32, INT::Register>),
        (0x014 => _reserved0),
        /// Baud Rate Generator register.
        (0x020 => pub brg: ReadWrite<u32, BRG::Register>),
        /// Interrupt status register.
        (0x024 => pub intstat: ReadOnly<u32, INT::Register>),
        /// Oversample selection register for asynchronous communication.
        (0x028 => pub osr: ReadWrite<u32, OSR::Register>),
        /// Address register for automatic address matching.
        (0x02C => pub addr: ReadWrite<u32, ADDR::Register>),
        (0x030 => _reserved1),
        /// FIFO configuration and enable register.
        (0xE00 => pub fifocfg: ReadWrite<u32, FIFOCFG::Register>),
        /// FIFO status register.
        (0xE04 => pub fifostat: ReadWrite<u32, FIFOSTAT::Register>),
        /// FIFO trigger settings for interrupt and DMA request.
        (0xE08 => pub fifotrig: ReadWrite<u32, FIFOTRIG::Register>),
        (0xE0C => _reserved2),
        /// FIFO interrupt enable set (enable) and read register.
        (0xE10 => pub fifointenset: ReadWrite<u32, FIFOINT::Register>),
        /// FIFO interrupt enable clear (disable) and read register.
        (0xE14 => pub fifointenclr: ReadWrite<u32, FIFOINT::Register>),
        /// FIFO interrupt status register.
        (0xE18 => pub fifointstat: ReadOnly<u32, FIFOINT::Register>),
        (0xE1C => _reserved3),
        /// FIFO write data.
        (0xE20 => pub fifowr: WriteOnly<u32, FIFOWR::Register>),
        (0xE24 => _reserved4),
        /// FIFO read data.
        (0xE30 => pub fiford: ReadOnly<u32, FIFORD::Register>),
        (0xE34 => _reserved5),
        /// FIFO data read with no FIFO pop.
        (0xE40 => pub fifordnopop: ReadOnly<u32, FIFORD::Register>),
        (0xE44 => _reserved6),
        /// USART module Identification.
        (0xFFC => pub id: ReadOnly<u32, ID::Register>),
        (0x1000 => @END),
    }
}

register_bitfields![u32,
pub CFG [
    /// USART Enable.
    ENABLE OFFSET(0) NUMBITS(1) [],
    /// Selects the data size for the USART.
    DATALEN OFFSET(2) NUMBITS(2) [
        SevenBit = 0,
        EightBit = 1,
        NineBit = 2
    ],
    /// Selects what type of parity is used by the USART.
    PARITYSEL OFFSET(4) NUMBITS(2) [
        NoParity = 0,
        EvenParity = 2,
        OddParity = 3
    ],
    /// Number of stop bits appended to transmitted data.
    STOPLEN OFFSET(6) NUMBITS(1) [
        OneStopBit = 0,
        TwoStopBits = 1
    ],
    /// Selects standard or 32 kHz clocking mode.
    MODE32K OFFSET(7) NUMBITS(1) [],
    /// LIN break mode enable.
    LINMODE OFFSET(8) NUMBITS(1) [],
    /// CTS Enable.
    CTSEN OFFSET(9) NUMBITS(1) [],
    /// Selects synchronous or asynchronous operation.
    SYNCEN OFFSET(11) NUMBITS(1) [],
    /// Selects the clock polarity and sampling edge of received data in
    /// synchronous mode.
    CLKPOL OFFSET(12) NUMBITS(1) [],
    /// Synchronous mode Master select.
    SYNCMST OFFSET(14) NUMBITS(1) [],
    /// Selects data loopback mode.
    LOOP OFFSET(15) NUMBITS(1) [],
    /// Output Enable Turnaround time enable for RS-485 operation.
    OETA OFFSET(18) NUMBITS(1) [],
    /// Automatic Address matching enable.
    AUTOADDR OFFSET(19) NUMBITS(1) [],
    /// Output Enable Select.
    OESEL OFFSET(20) NUMBITS(1) [],
    /// Output Enable Polarity.
    OEPOL OFFSET(21) NUMBITS(1) [],
    /// Receive data polarity.
    RXPOL OFFSET(22) NUMBITS(1) [],
    /// Transmit data polarity.
    TXPOL OFFSET(23) NUMBITS(1) []
],
pub CTL [
    /// Break Enable.
    TXBRKEN OFFSET(1) NUMBITS(1) [],
    /// Enable address detect mode.
    ADDRDET OFFSET(2) NUMBITS(1) [],
    /// Transmit Disable.
    TXDIS OFFSET(6) NUMBITS(1) [],
    /// Continuous Clock generation.
    CC OFFSET(8) NUMBITS(1) [],
    /// Clear Continuous Clock.
    CLRCCONRX OFFSET(9) NUMBITS(1) [],
    /// Autobaud enable.
    AUTOBAUD OFFSET(16) NUMBITS(1) []
],
pub STAT [
    RXIDLE OFFSET(1) NUMBITS(1) [],
    TXIDLE OFFSET(3) NUMBITS(1) [],
    CTS OFFSET(4) NUMBITS(1) [],
    DELTACTS OFFSET(5) NUMBITS(1) [],
    TXDISSTAT OFFSET(6) NUMBITS(1) [],
    RXBRK OFFSET(10) NUMBITS(1) [],
    DELTARXBRK OFFSET(11) NUMBITS(1) [],
    START OFFSET(12) NUMBITS(1) [],
    FRAMERRINT OFFSET(13) NUMBITS(1) [],
    PARITYERRINT OFFSET(14) NUMBITS(1) [],
    RXNOISEINT OFFSET(15) NUMBITS(1) [],
    ABERR OFFSET(16) NUMBITS(1) []
],
/// INTENSET, INTENCLR and INTSTAT.
pub INT [
    TXIDLE OFFSET(3) NUMBITS(1) [],
    DELTACTS OFFSET(5) NUMBITS(1) [],
    TXDIS OFFSET(6) NUMBITS(1) [],
    DELTARXBRK OFFSET(11) NUMBITS(1) [],
    START OFFSET(12) NUMBITS(1) [],
    FRAMERR OFFSET(13) NUMBITS(1) [],
    PARITYERR OFFSET(14) NUMBITS(1) [],
    RXNOISE OFFSET(15) NUMBITS(1) [],
    ABERR OFFSET(16) NUMBITS(1) []
],
pub BRG [
    /// Baud rate divider minus one.
    BRGVAL OFFSET(0) NUMBITS(16) []
],
pub OSR [
    /// Oversample selection value minus one. Reset value selects 16x.
    OSRVAL OFFSET(0) NUMBITS(4) []
],
pub ADDR [
    ADDRESS OFFSET(0) NUMBITS(8) []
],
pub FIFOWR [
    TXDATA OFFSET(0) NUMBITS(9) []
],
pub FIFORD [
    RXDATA OFFSET(0) NUMBITS(9) [],
    FRAMERR OFFSET(13) NUMBITS(1) [],
    PARITYERR OFFSET(14) NUMBITS(1) [],
    RXNOISE OFFSET(15) NUMBITS(1) []
]
];

/// Register block of USART `n`.
pub fn instance(n: usize) -> Result<StaticRef<UsartRegisters>, ErrorCode> {
    USART_BASE_PTRS.get(n).copied().ok_or(ErrorCode::INVAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::LocalRegisterCopy;

    #[test]
    fn eight_n_one() {
        let cfg = CFG::ENABLE::SET
            + CFG::DATALEN::EightBit
            + CFG::PARITYSEL::NoParity
            + CFG::STOPLEN::OneStopBit;
        assert_eq!(cfg.value, 0b101);
    }

    #[test]
    fn received_word_with_errors() {
        let rd: LocalRegisterCopy<u32, FIFORD::Register> = LocalRegisterCopy::new(0x0000_A1FF);
        assert_eq!(rd.read(FIFORD::RXDATA), 0x1FF);
        assert!(rd.is_set(FIFORD::FRAMERR));
        assert!(!rd.is_set(FIFORD::PARITYERR));
        assert!(rd.is_set(FIFORD::RXNOISE));
    }

    #[test]
    fn shares_flexcomm_window() {
        assert_eq!(USART1_BASE.addr(), 0x4008_7000);
        assert!(instance(2).is_err());
    }
}
