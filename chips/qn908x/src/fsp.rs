// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Fusion signal processor: matrix, statistics and CORDIC engines working on
//! operands in SRAM.

use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const FSP_BASE_ADDR: usize = 0x4008_0000;

pub const FSP_BASE: StaticRef<FspRegisters> =
    unsafe { StaticRef::new(FSP_BASE_ADDR as *const FspRegisters) };

pub const FSP_IRQS: [Irqn; 1] = [Irqn::Fsp];

/// Number of CORDIC operand/result words.
pub const FSP_CORDIC_WORDS: usize = 3;
/// Number of statistics result words (sum, max, min, mean).
pub const FSP_STAT_RESULT_COUNT: usize = 4;

register_structs! {
    /// Fusion signal processor
    pub FspRegisters {
        /// Engine control.
        (0x000 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Engine status.
        (0x004 => pub status: ReadOnly<u32, STATUS::Register>),
        /// Interrupt enable.
        (0x008 => pub inten: ReadWrite<u32, INT::Register>),
        /// Interrupt flags. Write 1 to clear.
        (0x00C => pub int: ReadWrite<u32, INT::Register>),
        /// SRAM address of the first operand.
        (0x010 => pub src0_addr: ReadWrite<u32>),
        /// SRAM address of the second operand.
        (0x014 => pub src1_addr: ReadWrite<u32>),
        /// SRAM address of the result.
        (0x018 => pub dst_addr: ReadWrite<u32>),
        /// Operand dimensions.
        (0x01C => pub dim: ReadWrite<u32, DIM::Register>),
        /// CORDIC mode.
        (0x020 => pub cordic_ctrl: ReadWrite<u32, CORDIC_CTRL::Register>),
        /// CORDIC operands x, y, z.
        (0x024 => pub cordic_in: [ReadWrite<u32>; FSP_CORDIC_WORDS]),
        /// CORDIC results x, y, z.
        (0x030 => pub cordic_out: [ReadOnly<u32>; FSP_CORDIC_WORDS]),
        /// Statistics results.
        (0x03C => pub stat_result: [ReadOnly<u32>; FSP_STAT_RESULT_COUNT]),
        (0x04C => @END),
    }
}

register_bitfields![u32,
pub CTRL [
    /// Engine enable.
    ENABLE OFFSET(0) NUMBITS(1) [],
    /// Start the selected operation. Self clearing.
    START OFFSET(1) NUMBITS(1) [],
    /// Abort the running operation. Self clearing.
    ABORT OFFSET(2) NUMBITS(1) [],
    /// Operation.
    OP OFFSET(4) NUMBITS(4) [
        MatrixAdd = 0,
        MatrixSub = 1,
        MatrixMul = 2,
        MatrixTranspose = 3,
        MatrixInverse = 4,
        Statistics = 5,
        Cordic = 6,
        Fir = 7
    ],
    /// Operand format.
    FORMAT OFFSET(8) NUMBITS(1) [
        Float32 = 0,
        Fixed32 = 1
    ]
],
pub STATUS [
    BUSY OFFSET(0) NUMBITS(1) [],
    /// Operand dimensions are not valid for the operation.
    DIM_ERR OFFSET(1) NUMBITS(1) [],
    /// Matrix is singular.
    SINGULAR OFFSET(2) NUMBITS(1) [],
    /// Floating point overflow.
    OVERFLOW OFFSET(3) NUMBITS(1) []
],
pub INT [
    DONE OFFSET(0) NUMBITS(1) [],
    ERROR OFFSET(1) NUMBITS(1) []
],
pub DIM [
    ROWS OFFSET(0) NUMBITS(8) [],
    COLS OFFSET(8) NUMBITS(8) [],
    /// Inner dimension for multiplies, tap count for FIR.
    INNER OFFSET(16) NUMBITS(8) []
],
pub CORDIC_CTRL [
    /// CORDIC coordinate system.
    MODE OFFSET(0) NUMBITS(2) [
        Circular = 0,
        Linear = 1,
        Hyperbolic = 2
    ],
    /// Rotation or vectoring.
    VECTORING OFFSET(2) NUMBITS(1) [],
    /// Number of iterations.
    ITERATIONS OFFSET(8) NUMBITS(5) []
]
];
