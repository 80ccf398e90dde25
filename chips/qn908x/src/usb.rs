// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Full-speed USB device controller.
//!
//! Endpoint 0 is the bidirectional control endpoint. Endpoints 1 to 4 are
//! configured through `EP_CTRL[n]` and move data through `EP_DATA[n]`.
//! Not bonded out on QN9083.

use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const USB0_BASE_ADDR: usize = 0x4008_4000;

pub const USB0_BASE: StaticRef<UsbRegisters> =
    unsafe { StaticRef::new(USB0_BASE_ADDR as *const UsbRegisters) };

pub const USB_IRQS: [Irqn; 1] = [Irqn::Usb0];

/// Endpoints, including the control endpoint.
pub const USB_EP_COUNT: usize = 5;
/// Largest packet any endpoint can hold.
pub const USB_EP_MAX_PACKET_SIZE: usize = 64;

register_structs! {
    /// USB full-speed device
    pub UsbRegisters {
        /// Device address assigned by the host.
        (0x000 => pub addr: ReadWrite<u32, ADDR::Register>),
        (0x004 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        (0x008 => pub inten: ReadWrite<u32, INT::Register>),
        /// Interrupt status. Write 1 to clear.
        (0x00C => pub int: ReadWrite<u32, INT::Register>),
        /// Number of the last start of frame.
        (0x010 => pub frame: ReadOnly<u32, FRAME::Register>),
        /// Endpoint configuration.
        (0x014 => pub ep_ctrl: [ReadWrite<u32, EP_CTRL::Register>; USB_EP_COUNT]),
        /// Endpoint transfer status.
        (0x028 => pub ep_stat: [ReadWrite<u32, EP_STAT::Register>; USB_EP_COUNT]),
        /// First and second word of the last SETUP packet.
        (0x03C => pub setup: [ReadOnly<u32>; 2]),
        (0x044 => _reserved0),
        /// Endpoint FIFO data ports.
        (0x100 => pub ep_data: [ReadWrite<u32>; USB_EP_COUNT]),
        (0x114 => @END),
    }
}

register_bitfields![u32,
pub ADDR [
    DEV_ADDR OFFSET(0) NUMBITS(7) []
],
pub CTRL [
    /// Controller enable.
    USB_EN OFFSET(0) NUMBITS(1) [],
    /// Connect the internal D+ pull-up.
    DP_PULLUP OFFSET(1) NUMBITS(1) [],
    /// Suspend the PHY.
    SUSPEND OFFSET(2) NUMBITS(1) [],
    /// Drive remote wakeup signalling.
    RESUME OFFSET(3) NUMBITS(1) []
],
/// INTEN and INT.
pub INT [
    BUS_RESET OFFSET(0) NUMBITS(1) [],
    SUSPEND OFFSET(1) NUMBITS(1) [],
    RESUME OFFSET(2) NUMBITS(1) [],
    SOF OFFSET(3) NUMBITS(1) [],
    /// SETUP packet received on endpoint 0.
    SETUP OFFSET(4) NUMBITS(1) [],
    /// Transfer done, one bit per endpoint.
    EP_DONE OFFSET(8) NUMBITS(5) []
],
pub FRAME [
    FRAME_NUM OFFSET(0) NUMBITS(11) []
],
pub EP_CTRL [
    EP_EN OFFSET(0) NUMBITS(1) [],
    DIR OFFSET(1) NUMBITS(1) [
        Out = 0,
        In = 1
    ],
    TYPE OFFSET(2) NUMBITS(2) [
        Control = 0,
        Isochronous = 1,
        Bulk = 2,
        Interrupt = 3
    ],
    STALL OFFSET(4) NUMBITS(1) [],
    /// Expected DATA0/DATA1 toggle of the next packet.
    TOGGLE OFFSET(5) NUMBITS(1) [],
    /// Answer NAK to the host.
    NAK OFFSET(6) NUMBITS(1) [],
    MAX_PKT OFFSET(8) NUMBITS(7) []
],
pub EP_STAT [
    /// Bytes in the endpoint FIFO.
    BYTE_CNT OFFSET(0) NUMBITS(7) [],
    /// Transfer complete. Write 1 to clear.
    DONE OFFSET(8) NUMBITS(1) [],
    /// Host answered with or was sent a STALL.
    STALLED OFFSET(9) NUMBITS(1) []
]
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_in_endpoint() {
        let ctrl = EP_CTRL::EP_EN::SET
            + EP_CTRL::DIR::In
            + EP_CTRL::TYPE::Bulk
            + EP_CTRL::MAX_PKT.val(USB_EP_MAX_PACKET_SIZE as u32);
        assert_eq!(ctrl.value, 0x400B);
    }

    #[test]
    fn done_bit_per_endpoint() {
        assert_eq!(INT::EP_DONE.val(1 << (USB_EP_COUNT - 1)).value, 0x1000);
    }
}
