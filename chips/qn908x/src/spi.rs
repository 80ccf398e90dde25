// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! SPI function of FLEXCOMM2 and FLEXCOMM3.
//!
//! The SPI registers start at offset 0x400 of the Flexcomm window. Control
//! bits for each frame (slave selects, end of transfer, length) travel in
//! the upper half of `FIFOWR` together with the data.

use crate::errorcode::ErrorCode;
use crate::flexcomm::{
    FIFOCFG, FIFOINT, FIFOSTAT, FIFOTRIG, FLEXCOMM2_BASE_ADDR, FLEXCOMM3_BASE_ADDR, ID,
};
use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const SPI0_BASE_ADDR: usize = FLEXCOMM2_BASE_ADDR;
pub const SPI1_BASE_ADDR: usize = FLEXCOMM3_BASE_ADDR;

pub const SPI0_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(SPI0_BASE_ADDR as *const SpiRegisters) };
pub const SPI1_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(SPI1_BASE_ADDR as *const SpiRegisters) };

pub const SPI_BASE_ADDRS: [usize; 2] = [SPI0_BASE_ADDR, SPI1_BASE_ADDR];
pub const SPI_BASE_PTRS: [StaticRef<SpiRegisters>; 2] = [SPI0_BASE, SPI1_BASE];
pub const SPI_IRQS: [Irqn; 2] = [Irqn::Flexcomm2, Irqn::Flexcomm3];

/// Hardware slave select lines per SPI.
pub const SPI_SSEL_COUNT: usize = 4;

register_structs! {
    /// Serial Peripheral Interfaces (SPI)
    pub SpiRegisters {
        (0x000 => _reserved0),
        /// SPI Configuration register.
        (0x400 => pub cfg: ReadWrite<u32, CFG::Register>),
        /// SPI Delay register.
        (0x404 => pub dly: ReadWrite<u32, DLY::Register>),
        /// SPI Status. Some status flags can be cleared by writing a 1.
        (0x408 => pub stat: ReadWrite<u32, STAT::Register>),
        /// SPI Interrupt Enable read and Set.
        (0x40C => pub intenset: ReadWrite<u32, INT::Register>),
        /// SPI Interrupt Enable Clear.
        (0x410 => pub intenclr: WriteOnly<u32, INT::Register>),
        (0x414 => _reserved1),
        /// SPI clock Divider.
        (0x424 => pub div: ReadWrite<u32, DIV::Register>),
        /// SPI Interrupt Status.
        (0x428 => pub intstat: ReadOnly<u32, INT::Register>),
        (0x42C => _reserved2),
        /// FIFO configuration and enable register.
        (0xE00 => pub fifocfg: ReadWrite<u32, FIFOCFG::Register>),
        /// FIFO status register.
        (0xE04 => pub fifostat: ReadWrite<u32, FIFOSTAT::Register>),
        /// FIFO trigger settings for interrupt and DMA request.
        (0xE08 => pub fifotrig: ReadWrite<u32, FIFOTRIG::Register>),
        (0xE0C => _reserved3),
        /// FIFO interrupt enable set (enable) and read register.
        (0xE10 => pub fifointenset: ReadWrite<u32, FIFOINT::Register>),
        /// FIFO interrupt enable clear (disable) and read register.
        (0xE14 => pub fifointenclr: ReadWrite<u32, FIFOINT::Register>),
        /// FIFO interrupt status register.
        (0xE18 => pub fifointstat: ReadOnly<u32, FIFOINT::Register>),
        (0xE1C => _reserved4),
        /// FIFO write data.
        (0xE20 => pub fifowr: WriteOnly<u32, FIFOWR::Register>),
        (0xE24 => _reserved5),
        /// FIFO read data.
        (0xE30 => pub fiford: ReadOnly<u32, FIFORD::Register>),
        (0xE34 => _reserved6),
        /// FIFO data read with no FIFO pop.
        (0xE40 => pub fifordnopop: ReadOnly<u32, FIFORD::Register>),
        (0xE44 => _reserved7),
        /// SPI module Identification.
        (0xFFC => pub id: ReadOnly<u32, ID::Register>),
        (0x1000 => @END),
    }
}

register_bitfields![u32,
pub CFG [
    /// SPI enable.
    ENABLE OFFSET(0) NUMBITS(1) [],
    /// Master mode select.
    MASTER OFFSET(2) NUMBITS(1) [
        Slave = 0,
        Master = 1
    ],
    /// LSB First mode enable.
    LSBF OFFSET(3) NUMBITS(1) [],
    /// Clock Phase select.
    CPHA OFFSET(4) NUMBITS(1) [
        Change = 0,
        Capture = 1
    ],
    /// Clock Polarity select.
    CPOL OFFSET(5) NUMBITS(1) [
        Low = 0,
        High = 1
    ],
    /// Loopback mode enable.
    LOOP OFFSET(7) NUMBITS(1) [],
    /// SSEL0 Polarity select.
    SPOL0 OFFSET(8) NUMBITS(1) [],
    /// SSEL1 Polarity select.
    SPOL1 OFFSET(9) NUMBITS(1) [],
    /// SSEL2 Polarity select.
    SPOL2 OFFSET(10) NUMBITS(1) [],
    /// SSEL3 Polarity select.
    SPOL3 OFFSET(11) NUMBITS(1) []
],
pub DLY [
    PRE_DELAY OFFSET(0) NUMBITS(4) [],
    POST_DELAY OFFSET(4) NUMBITS(4) [],
    FRAME_DELAY OFFSET(8) NUMBITS(4) [],
    TRANSFER_DELAY OFFSET(12) NUMBITS(4) []
],
pub STAT [
    /// Slave Select Assert.
    SSA OFFSET(4) NUMBITS(1) [],
    /// Slave Select Deassert.
    SSD OFFSET(5) NUMBITS(1) [],
    /// Stalled status flag.
    STALLED OFFSET(6) NUMBITS(1) [],
    /// End Transfer control bit.
    ENDTRANSFER OFFSET(7) NUMBITS(1) [],
    /// Master idle status flag.
    MSTIDLE OFFSET(8) NUMBITS(1) []
],
/// INTENSET, INTENCLR and INTSTAT.
pub INT [
    SSA OFFSET(4) NUMBITS(1) [],
    SSD OFFSET(5) NUMBITS(1) [],
    MSTIDLE OFFSET(8) NUMBITS(1) []
],
pub DIV [
    /// Rate divider value minus one.
    DIVVAL OFFSET(0) NUMBITS(16) []
],
pub FIFOWR [
    /// Transmit data to the FIFO.
    TXDATA OFFSET(0) NUMBITS(16) [],
    /// Transmit slave select, active low.
    TXSSEL0_N OFFSET(16) NUMBITS(1) [],
    TXSSEL1_N OFFSET(17) NUMBITS(1) [],
    TXSSEL2_N OFFSET(18) NUMBITS(1) [],
    TXSSEL3_N OFFSET(19) NUMBITS(1) [],
    /// End of transfer.
    EOT OFFSET(20) NUMBITS(1) [],
    /// End of frame.
    EOF OFFSET(21) NUMBITS(1) [],
    /// Receive ignore.
    RXIGNORE OFFSET(22) NUMBITS(1) [],
    /// Data length in bits minus one, 3 to 15.
    LEN OFFSET(24) NUMBITS(4) []
],
pub FIFORD [
    RXDATA OFFSET(0) NUMBITS(16) [],
    RXSSEL0_N OFFSET(16) NUMBITS(1) [],
    RXSSEL1_N OFFSET(17) NUMBITS(1) [],
    RXSSEL2_N OFFSET(18) NUMBITS(1) [],
    RXSSEL3_N OFFSET(19) NUMBITS(1) [],
    /// Start of transfer flag.
    SOT OFFSET(20) NUMBITS(1) []
]
];

/// Register block of SPI `n`.
pub fn instance(n: usize) -> Result<StaticRef<SpiRegisters>, ErrorCode> {
    SPI_BASE_PTRS.get(n).copied().ok_or(ErrorCode::INVAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_frame_on_ssel1() {
        // Deassert every select except SSEL1 and end the transfer.
        let wr = FIFOWR::TXDATA.val(0x5A)
            + FIFOWR::TXSSEL0_N::SET
            + FIFOWR::TXSSEL2_N::SET
            + FIFOWR::TXSSEL3_N::SET
            + FIFOWR::EOT::SET
            + FIFOWR::LEN.val(7);
        assert_eq!(wr.value, 0x071D_005A);
    }

    #[test]
    fn mode_3_master() {
        let cfg = CFG::ENABLE::SET + CFG::MASTER::Master + CFG::CPHA::Capture + CFG::CPOL::High;
        assert_eq!(cfg.value, 0x35);
    }

    #[test]
    fn aliases_flexcomm2_and_3() {
        assert_eq!(SPI_BASE_ADDRS, [0x4008_8000, 0x4008_9000]);
        assert!(instance(1).is_ok());
    }
}
