// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! General purpose I/O ports A and B.
//!
//! Each port is a 32 bit wide block. Set/clear register pairs update only
//! the bits written as 1. `INTSTATUS` and `INTCLEAR` share an offset: reads
//! return the pending status, writes of 1 clear it.
//!
//! The masked access arrays give atomic read-modify-write of a byte lane:
//! word `n` of `MASKLOWBYTE` accesses bits 7..0 of the port with mask `n`,
//! `MASKHIGHBYTE` does the same for bits 15..8.

use crate::errorcode::ErrorCode;
use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, Aliased, ReadWrite};
use crate::utilities::StaticRef;

pub const GPIOA_BASE_ADDR: usize = 0x4008_C000;
pub const GPIOB_BASE_ADDR: usize = 0x4008_D000;

pub const GPIOA_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOA_BASE_ADDR as *const GpioRegisters) };
pub const GPIOB_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOB_BASE_ADDR as *const GpioRegisters) };

pub const GPIO_BASE_ADDRS: [usize; 2] = [GPIOA_BASE_ADDR, GPIOB_BASE_ADDR];
pub const GPIO_BASE_PTRS: [StaticRef<GpioRegisters>; 2] = [GPIOA_BASE, GPIOB_BASE];
pub const GPIO_IRQS: [Irqn; 2] = [Irqn::GpioA, Irqn::GpioB];

/// Bonded out pins of port A.
pub const GPIOA_PIN_COUNT: usize = 32;
/// Bonded out pins of port B.
pub const GPIOB_PIN_COUNT: usize = 3;
/// Words in each masked byte access array.
pub const GPIO_MASK_COUNT: usize = 256;

register_structs! {
    /// GPIO port
    pub GpioRegisters {
        /// Data value.
        (0x000 => pub data: ReadWrite<u32, PINS::Register>),
        /// Data output register value.
        (0x004 => pub dataout: ReadWrite<u32, PINS::Register>),
        (0x008 => _reserved0),
        /// Output enable set.
        (0x010 => pub outenset: ReadWrite<u32, PINS::Register>),
        /// Output enable clear.
        (0x014 => pub outenclr: ReadWrite<u32, PINS::Register>),
        (0x018 => _reserved1),
        /// Interrupt enable set.
        (0x020 => pub intenset: ReadWrite<u32, PINS::Register>),
        /// Interrupt enable clear.
        (0x024 => pub intenclr: ReadWrite<u32, PINS::Register>),
        /// Interrupt type set: 1 selects edge.
        (0x028 => pub inttypeset: ReadWrite<u32, PINS::Register>),
        /// Interrupt type clear: 1 selects level.
        (0x02C => pub inttypeclr: ReadWrite<u32, PINS::Register>),
        /// Interrupt polarity set: 1 selects high level / rising edge.
        (0x030 => pub intpolset: ReadWrite<u32, PINS::Register>),
        /// Interrupt polarity clear: 1 selects low level / falling edge.
        (0x034 => pub intpolclr: ReadWrite<u32, PINS::Register>),
        /// Interrupt status (read) / interrupt clear (write).
        (0x038 => pub intstatus_intclear: Aliased<u32, PINS::Register, PINS::Register>),
        (0x03C => _reserved2),
        /// Lower eight bits masked access.
        (0x400 => pub masklowbyte: [ReadWrite<u32, MASKLOWBYTE::Register>; GPIO_MASK_COUNT]),
        /// Upper eight bits masked access.
        (0x800 => pub maskhighbyte: [ReadWrite<u32, MASKHIGHBYTE::Register>; GPIO_MASK_COUNT]),
        (0xC00 => @END),
    }
}

register_bitfields![u32,
pub PINS [
    /// One bit per pin, bit n for pin n.
    PIN OFFSET(0) NUMBITS(32) []
],
pub MASKLOWBYTE [
    /// Data for bits 7..0.
    DATA OFFSET(0) NUMBITS(8) []
],
pub MASKHIGHBYTE [
    /// Data for bits 15..8.
    DATA OFFSET(8) NUMBITS(8) []
]
];

/// Register block of port `n` (0 is A, 1 is B).
pub fn instance(n: usize) -> Result<StaticRef<GpioRegisters>, ErrorCode> {
    GPIO_BASE_PTRS.get(n).copied().ok_or(ErrorCode::INVAL)
}

/// Index into `MASKLOWBYTE` / `MASKHIGHBYTE` that touches exactly the pins
/// in `pins` within the given byte lane.
pub const fn mask_index(pins: u32, high_byte: bool) -> usize {
    if high_byte {
        ((pins >> 8) & 0xFF) as usize
    } else {
        (pins & 0xFF) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_index_selects_byte_lane() {
        assert_eq!(mask_index(0x0000_8001, false), 0x01);
        assert_eq!(mask_index(0x0000_8001, true), 0x80);
        assert_eq!(mask_index(0xFFFF_0000, true), 0);
    }

    #[test]
    fn high_byte_data_is_already_shifted() {
        assert_eq!(MASKHIGHBYTE::DATA.val(0xA5).value, 0xA500);
        assert_eq!(MASKLOWBYTE::DATA.val(0xA5).value, 0x00A5);
    }
}
