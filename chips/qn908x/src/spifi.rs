// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! SPI flash interface (SPIFI).
//!
//! In command mode software drives single transactions through `CMD` and
//! `DATA`. Writing `MCMD` switches to memory mode, where the flash appears
//! read-only in the window at [`SPIFI_MEMORY_BASE`].

use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

pub const SPIFI0_BASE_ADDR: usize = 0x4008_3000;

pub const SPIFI0_BASE: StaticRef<SpifiRegisters> =
    unsafe { StaticRef::new(SPIFI0_BASE_ADDR as *const SpifiRegisters) };

pub const SPIFI_IRQS: [Irqn; 1] = [Irqn::Spifi0];

/// Memory mode window.
pub const SPIFI_MEMORY_BASE: usize = 0x1000_0000;
pub const SPIFI_MEMORY_SIZE: usize = 0x0800_0000;

register_structs! {
    /// SPI flash interface
    pub SpifiRegisters {
        /// SPIFI control register.
        (0x000 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// SPIFI command register.
        (0x004 => pub cmd: ReadWrite<u32, CMD::Register>),
        /// SPIFI address register.
        (0x008 => pub addr: ReadWrite<u32>),
        /// SPIFI intermediate data register.
        (0x00C => pub idata: ReadWrite<u32, IDATA::Register>),
        /// SPIFI limit register.
        (0x010 => pub climit: ReadWrite<u32>),
        /// SPIFI data register. Byte, halfword and word accesses are all valid.
        (0x014 => pub data: ReadWrite<u32>),
        /// SPIFI memory command register.
        (0x018 => pub mcmd: ReadWrite<u32, CMD::Register>),
        /// SPIFI status register.
        (0x01C => pub stat: ReadWrite<u32, STAT::Register>),
        (0x020 => @END),
    }
}

register_bitfields![u32,
pub CTRL [
    /// Serial clocks to wait before clearing the command bit in status.
    TIMEOUT OFFSET(0) NUMBITS(16) [],
    /// Minimum CS high time, in serial clocks, minus one.
    CSHIGH OFFSET(16) NUMBITS(4) [],
    /// Disable prefetch of data in memory mode.
    D_PRFTCH_DIS OFFSET(21) NUMBITS(1) [],
    /// Interrupt on command completion.
    INTEN OFFSET(22) NUMBITS(1) [],
    /// SPI mode 3 instead of mode 0.
    MODE3 OFFSET(23) NUMBITS(1) [],
    /// Disable prefetching of cache lines.
    PRFTCH_DIS OFFSET(27) NUMBITS(1) [],
    /// Dual instead of quad protocol.
    DUAL OFFSET(28) NUMBITS(1) [
        Quad = 0,
        Dual = 1
    ],
    /// Sample read data on the falling edge of the serial clock.
    RFCLK OFFSET(29) NUMBITS(1) [],
    /// Use the feedback clock from the SCK pin for read data.
    FBCLK OFFSET(30) NUMBITS(1) [],
    /// Enable DMA requests for command mode transfers.
    DMAEN OFFSET(31) NUMBITS(1) []
],
/// CMD and MCMD. `DATALEN` is ignored in MCMD.
pub CMD [
    DATALEN OFFSET(0) NUMBITS(14) [],
    /// Poll the flash status byte until bit `DATALEN[2:0]` equals `DATALEN[3]`.
    POLL OFFSET(14) NUMBITS(1) [],
    /// Data is output to the flash rather than read from it.
    DOUT OFFSET(15) NUMBITS(1) [],
    /// Intermediate bytes between address and data.
    INTLEN OFFSET(16) NUMBITS(3) [],
    FIELDFORM OFFSET(19) NUMBITS(2) [
        AllSerial = 0,
        DataQuad = 1,
        OpcodeSerial = 2,
        AllQuad = 3
    ],
    FRAMEFORM OFFSET(21) NUMBITS(3) [
        OpcodeOnly = 1,
        Opcode1Byte = 2,
        Opcode2Bytes = 3,
        Opcode3Bytes = 4,
        Opcode4Bytes = 5,
        NoOpcode3Bytes = 6,
        NoOpcode4Bytes = 7
    ],
    OPCODE OFFSET(24) NUMBITS(8) []
],
pub IDATA [
    IDATA OFFSET(0) NUMBITS(8) []
],
pub STAT [
    /// Memory command initialized.
    MCINIT OFFSET(0) NUMBITS(1) [],
    /// Command in progress.
    CMD OFFSET(1) NUMBITS(1) [],
    /// Write 1 to abort the current command or memory mode.
    RESET OFFSET(4) NUMBITS(1) [],
    /// Command completion interrupt. Write 1 to clear.
    INTRQ OFFSET(5) NUMBITS(1) [],
    VERSION OFFSET(24) NUMBITS(8) []
]
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_fast_read() {
        // 0xEB, opcode serial, 3 address bytes, 3 intermediate bytes.
        let cmd = CMD::OPCODE.val(0xEB)
            + CMD::FRAMEFORM::Opcode3Bytes
            + CMD::FIELDFORM::OpcodeSerial
            + CMD::INTLEN.val(3);
        assert_eq!(cmd.value, 0xEB93_0000);
    }
}
