// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! CRC engine.
//!
//! Offset 0x8 reads back the checksum (`SUM`) and accepts data to feed into
//! the engine on write (`WR_DATA`). Writes may be 8, 16 or 32 bits wide; the
//! engine consumes as many bytes as the access carries.

use crate::utilities::registers::{register_bitfields, register_structs, Aliased, ReadWrite};
use crate::utilities::StaticRef;

pub const CRC_BASE_ADDR: usize = 0x4008_A000;

pub const CRC_BASE: StaticRef<CrcRegisters> =
    unsafe { StaticRef::new(CRC_BASE_ADDR as *const CrcRegisters) };

register_structs! {
    /// CRC engine
    pub CrcRegisters {
        /// CRC mode register.
        (0x000 => pub mode: ReadWrite<u32, MODE::Register>),
        /// CRC seed register.
        (0x004 => pub seed: ReadWrite<u32, SEED::Register>),
        /// CRC checksum register (read) / CRC data register (write).
        (0x008 => pub sum_wr_data: Aliased<u32, SUM::Register, WR_DATA::Register>),
        (0x00C => @END),
    }
}

register_bitfields![u32,
pub MODE [
    /// CRC polynomial.
    CRC_POLY OFFSET(0) NUMBITS(2) [
        /// CRC-CCITT polynomial.
        CrcCcitt = 0,
        /// CRC-16 polynomial.
        Crc16 = 1,
        /// CRC-32 polynomial.
        Crc32 = 2
    ],
    /// Data bit order: bit reverse for CRC_WR_DATA (per byte).
    BIT_RVS_WR OFFSET(2) NUMBITS(1) [],
    /// Data complement: 1's complement for CRC_WR_DATA.
    CMPL_WR OFFSET(3) NUMBITS(1) [],
    /// CRC sum bit order: bit reverse for CRC_SUM.
    BIT_RVS_SUM OFFSET(4) NUMBITS(1) [],
    /// CRC sum complement: 1's complement for CRC_SUM.
    CMPL_SUM OFFSET(5) NUMBITS(1) []
],
pub SEED [
    /// A write access to this register will load CRC seed value to CRC_SUM register wi
    CRC_SEED OFFSET(0) NUMBITS(32) []
],
pub SUM [
    /// The most recent CRC sum can be read through this register with selected bit orde
    CRC_SUM OFFSET(0) NUMBITS(32) []
],
pub WR_DATA [
    /// Data written to this register will be taken to perform CRC calculation with sele
    CRC_WR_DATA OFFSET(0) NUMBITS(32) []
]
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccitt_with_reversed_sum() {
        let mode = MODE::CRC_POLY::CrcCcitt + MODE::BIT_RVS_SUM::SET + MODE::CMPL_SUM::SET;
        assert_eq!(mode.value, 0x30);
        assert_eq!(MODE::CRC_POLY::Crc32.value, 2);
    }
}
