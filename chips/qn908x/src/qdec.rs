// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Quadrature decoders QDEC0 and QDEC1.

use crate::errorcode::ErrorCode;
use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const QDEC0_BASE_ADDR: usize = 0x4000_A000;
pub const QDEC1_BASE_ADDR: usize = 0x4000_B000;

pub const QDEC0_BASE: StaticRef<QdecRegisters> =
    unsafe { StaticRef::new(QDEC0_BASE_ADDR as *const QdecRegisters) };
pub const QDEC1_BASE: StaticRef<QdecRegisters> =
    unsafe { StaticRef::new(QDEC1_BASE_ADDR as *const QdecRegisters) };

pub const QDEC_BASE_ADDRS: [usize; 2] = [QDEC0_BASE_ADDR, QDEC1_BASE_ADDR];
pub const QDEC_BASE_PTRS: [StaticRef<QdecRegisters>; 2] = [QDEC0_BASE, QDEC1_BASE];
pub const QDEC_IRQS: [Irqn; 2] = [Irqn::Qdec0, Irqn::Qdec1];

register_structs! {
    /// Quadrature decoder
    pub QdecRegisters {
        /// Control register.
        (0x000 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Interrupt enable register.
        (0x004 => pub inten: ReadWrite<u32, INT::Register>),
        /// Interrupt status register. Write 1 to clear.
        (0x008 => pub int: ReadWrite<u32, INT::Register>),
        /// Sample period register.
        (0x00C => pub smp_per: ReadWrite<u32, SMP_PER::Register>),
        /// Report period register.
        (0x010 => pub rpt_per: ReadWrite<u32, RPT_PER::Register>),
        /// Last sample value.
        (0x014 => pub smp_val: ReadOnly<u32, SMP_VAL::Register>),
        /// Accumulated valid transitions.
        (0x018 => pub acc: ReadOnly<u32, ACC::Register>),
        /// Accumulated double transitions.
        (0x01C => pub acc_dbl: ReadOnly<u32, ACC_DBL::Register>),
        (0x020 => @END),
    }
}

register_bitfields![u32,
pub CTRL [
    /// Decoder enable.
    EN OFFSET(0) NUMBITS(1) [],
    /// Start sampling. Self-clearing.
    START OFFSET(1) NUMBITS(1) [],
    /// Stop sampling. Self-clearing.
    STOP OFFSET(2) NUMBITS(1) [],
    /// Counting resolution.
    MODE OFFSET(4) NUMBITS(2) [
        X1 = 0,
        X2 = 1,
        X4 = 2
    ],
    /// Input debounce filter enable.
    DEBOUNCE_EN OFFSET(6) NUMBITS(1) [],
    /// Swap phase A and phase B inputs.
    AB_SWAP OFFSET(7) NUMBITS(1) [],
    /// Clear the accumulators. Self-clearing.
    ACC_CLR OFFSET(8) NUMBITS(1) []
],
/// INTEN and INT.
pub INT [
    /// Sample ready.
    SMP_RDY OFFSET(0) NUMBITS(1) [],
    /// Report period elapsed with a non-zero accumulator.
    REPORT_RDY OFFSET(1) NUMBITS(1) [],
    /// Double transition detected.
    DBL_RDY OFFSET(2) NUMBITS(1) [],
    /// Accumulator overflow.
    ACC_OF OFFSET(3) NUMBITS(1) []
],
pub SMP_PER [
    /// Sample period in units of the decoder clock.
    SMP_PER OFFSET(0) NUMBITS(16) []
],
pub RPT_PER [
    /// Samples per report period.
    RPT_PER OFFSET(0) NUMBITS(16) []
],
pub SMP_VAL [
    /// Signed movement of the last sample, -1, 0 or 1.
    SMP_VAL OFFSET(0) NUMBITS(2) []
],
pub ACC [
    /// Signed 16 bit accumulator.
    ACC OFFSET(0) NUMBITS(16) []
],
pub ACC_DBL [
    /// Double transition count.
    ACC_DBL OFFSET(0) NUMBITS(16) []
]
];

/// Register block of QDEC `n`.
pub fn instance(n: usize) -> Result<StaticRef<QdecRegisters>, ErrorCode> {
    QDEC_BASE_PTRS.get(n).copied().ok_or(ErrorCode::INVAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::LocalRegisterCopy;

    #[test]
    fn accumulator_is_signed_16_bit() {
        let acc: LocalRegisterCopy<u32, ACC::Register> = LocalRegisterCopy::new(0xFFFF_FFFE);
        assert_eq!(acc.read(ACC::ACC) as u16 as i16, -2);
    }

    #[test]
    fn x4_enabled() {
        assert_eq!((CTRL::EN::SET + CTRL::MODE::X4).value, 0x21);
        assert_eq!(instance(2).err(), Some(ErrorCode::INVAL));
    }
}
