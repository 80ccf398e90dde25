// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! DMA controller.
//!
//! The registers in the `COMMON` block hold one bit per channel. Each
//! channel additionally has a `CFG`/`CTLSTAT`/`XFERCFG` triple in the
//! `CHANNEL` array. Transfers are described by descriptors in SRAM; the
//! table of per-channel head descriptors is located with `SRAMBASE`.

use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const DMA0_BASE_ADDR: usize = 0x4008_2000;

pub const DMA0_BASE: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(DMA0_BASE_ADDR as *const DmaRegisters) };

pub const DMA_BASE_ADDRS: [usize; 1] = [DMA0_BASE_ADDR];
pub const DMA_BASE_PTRS: [StaticRef<DmaRegisters>; 1] = [DMA0_BASE];
pub const DMA_IRQS: [Irqn; 1] = [Irqn::Dma0];

/// Number of channels.
pub const DMA_CHANNEL_COUNT: usize = 20;
/// Number of `COMMON` register banks (channels 0 to 31 per bank).
pub const DMA_COMMON_COUNT: usize = 1;
/// Required alignment of the descriptor table pointed to by `SRAMBASE`.
pub const DMA_DESCRIPTOR_TABLE_ALIGN: usize = 512;
/// Largest transfer count, in transfers of the configured width.
pub const DMA_MAX_TRANSFER_COUNT: usize = 1024;

register_structs! {
    /// Bank of registers with one bit per channel.
    pub DmaCommonRegisters {
        /// Enable read and Set for all DMA channels.
        (0x000 => pub enableset: ReadWrite<u32, CHANNELS::Register>),
        (0x004 => _reserved0),
        /// Clear enables for all DMA channels.
        (0x008 => pub enableclr: WriteOnly<u32, CHANNELS::Register>),
        (0x00C => _reserved1),
        /// Active status for all DMA channels.
        (0x010 => pub active: ReadOnly<u32, CHANNELS::Register>),
        (0x014 => _reserved2),
        /// Busy status for all DMA channels.
        (0x018 => pub busy: ReadOnly<u32, CHANNELS::Register>),
        (0x01C => _reserved3),
        /// Error Interrupt status for all DMA channels.
        (0x020 => pub errint: ReadWrite<u32, CHANNELS::Register>),
        (0x024 => _reserved4),
        /// Interrupt Enable read and Set for all DMA channels.
        (0x028 => pub intenset: ReadWrite<u32, CHANNELS::Register>),
        (0x02C => _reserved5),
        /// Interrupt Enable Clear for all DMA channels.
        (0x030 => pub intenclr: WriteOnly<u32, CHANNELS::Register>),
        (0x034 => _reserved6),
        /// Interrupt A status for all DMA channels.
        (0x038 => pub inta: ReadWrite<u32, CHANNELS::Register>),
        (0x03C => _reserved7),
        /// Interrupt B status for all DMA channels.
        (0x040 => pub intb: ReadWrite<u32, CHANNELS::Register>),
        (0x044 => _reserved8),
        /// Set ValidPending control bits for all DMA channels.
        (0x048 => pub setvalid: WriteOnly<u32, CHANNELS::Register>),
        (0x04C => _reserved9),
        /// Set Trigger control bits for all DMA channels.
        (0x050 => pub settrig: WriteOnly<u32, CHANNELS::Register>),
        (0x054 => _reserved10),
        /// Channel Abort control for all DMA channels.
        (0x058 => pub abort: WriteOnly<u32, CHANNELS::Register>),
        (0x05C => @END),
    }
}

register_structs! {
    /// Per channel configuration and status.
    pub DmaChannelRegisters {
        /// Configuration register for DMA channel.
        (0x000 => pub cfg: ReadWrite<u32, CFG::Register>),
        /// Control and status register for DMA channel.
        (0x004 => pub ctlstat: ReadOnly<u32, CTLSTAT::Register>),
        /// Transfer configuration register for DMA channel.
        (0x008 => pub xfercfg: ReadWrite<u32, XFERCFG::Register>),
        (0x00C => _reserved0),
        (0x010 => @END),
    }
}

register_structs! {
    /// DMA controller
    pub DmaRegisters {
        /// DMA control.
        (0x000 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Interrupt status.
        (0x004 => pub intstat: ReadOnly<u32, INTSTAT::Register>),
        /// SRAM address of the channel configuration table.
        (0x008 => pub srambase: ReadWrite<u32, SRAMBASE::Register>),
        (0x00C => _reserved0),
        (0x020 => pub common: [DmaCommonRegisters; DMA_COMMON_COUNT]),
        (0x07C => _reserved1),
        (0x400 => pub channel: [DmaChannelRegisters; DMA_CHANNEL_COUNT]),
        (0x540 => @END),
    }
}

register_bitfields![u32,
pub CTRL [
    /// DMA controller master enable.
    ENABLE OFFSET(0) NUMBITS(1) []
],
pub INTSTAT [
    /// Summarizes whether any enabled interrupts (other than error interrupts) are pend
    ACTIVEINT OFFSET(1) NUMBITS(1) [],
    /// Summarizes whether any error interrupts are pending.
    ACTIVEERRINT OFFSET(2) NUMBITS(1) []
],
pub SRAMBASE [
    /// Address bits 31:9 of the beginning of the DMA descriptor table.
    SRAM_OFFSET OFFSET(9) NUMBITS(23) []
],
pub CHANNELS [
    /// One bit per channel, bit n for channel n.
    CH OFFSET(0) NUMBITS(20) []
],
pub CFG [
    /// Peripheral request Enable.
    PERIPHREQEN OFFSET(0) NUMBITS(1) [],
    /// Hardware Triggering Enable for this channel.
    HWTRIGEN OFFSET(1) NUMBITS(1) [],
    /// Trigger Polarity.
    TRIGPOL OFFSET(4) NUMBITS(1) [
        /// Active low - falling edge.
        ActiveLow = 0,
        /// Active high - rising edge.
        ActiveHigh = 1
    ],
    /// Trigger Type.
    TRIGTYPE OFFSET(5) NUMBITS(1) [
        Edge = 0,
        Level = 1
    ],
    /// Trigger Burst. Selects whether hardware triggers cause a single or burst transfe
    TRIGBURST OFFSET(6) NUMBITS(1) [
        Single = 0,
        Burst = 1
    ],
    /// Burst Power is used in two ways. It always selects the address wrap size when SR
    BURSTPOWER OFFSET(8) NUMBITS(4) [],
    /// Source Burst Wrap.
    SRCBURSTWRAP OFFSET(14) NUMBITS(1) [],
    /// Destination Burst Wrap.
    DSTBURSTWRAP OFFSET(15) NUMBITS(1) [],
    /// Priority of this channel when multiple DMA requests are pending. 0 is highest.
    CHPRIORITY OFFSET(16) NUMBITS(3) []
],
pub CTLSTAT [
    /// Valid pending flag for this channel.
    VALIDPENDING OFFSET(0) NUMBITS(1) [],
    /// Trigger flag. Indicates that the trigger for this channel is currently set.
    TRIG OFFSET(2) NUMBITS(1) []
],
pub XFERCFG [
    /// Configuration Valid flag.
    CFGVALID OFFSET(0) NUMBITS(1) [],
    /// Indicates whether the channel's control structure will be reloaded when the curr
    RELOAD OFFSET(1) NUMBITS(1) [],
    /// Software Trigger.
    SWTRIG OFFSET(2) NUMBITS(1) [],
    /// Clear Trigger.
    CLRTRIG OFFSET(3) NUMBITS(1) [],
    /// Set Interrupt flag A for this channel.
    SETINTA OFFSET(4) NUMBITS(1) [],
    /// Set Interrupt flag B for this channel.
    SETINTB OFFSET(5) NUMBITS(1) [],
    /// Transfer width used for this DMA channel.
    WIDTH OFFSET(8) NUMBITS(2) [
        Bit8 = 0,
        Bit16 = 1,
        Bit32 = 2
    ],
    /// Determines whether the source address is incremented for each DMA transfer.
    SRCINC OFFSET(12) NUMBITS(2) [
        NoIncrement = 0,
        Width1 = 1,
        Width2 = 2,
        Width4 = 3
    ],
    /// Determines whether the destination address is incremented for each DMA transfer.
    DSTINC OFFSET(14) NUMBITS(2) [
        NoIncrement = 0,
        Width1 = 1,
        Width2 = 2,
        Width4 = 3
    ],
    /// Total number of transfers to be performed, minus 1 encoded.
    XFERCOUNT OFFSET(16) NUMBITS(10) []
]
];

/// Transfer descriptor as the controller reads it from SRAM.
///
/// Source and destination hold the address of the *last* transfer, not the
/// first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct DmaDescriptor {
    /// Transfer configuration, same layout as the `XFERCFG` register.
    pub xfercfg: u32,
    /// Source end address.
    pub src_end_addr: u32,
    /// Destination end address.
    pub dst_end_addr: u32,
    /// Address of the next descriptor, 16 byte aligned, or 0.
    pub link_to_next: u32,
}

/// Head descriptors for every channel, as pointed to by `SRAMBASE`.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(512))]
pub struct DmaDescriptorTable(pub [DmaDescriptor; DMA_CHANNEL_COUNT]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_count_is_minus_one_encoded() {
        let cfg = XFERCFG::CFGVALID::SET
            + XFERCFG::WIDTH::Bit32
            + XFERCFG::SRCINC::Width1
            + XFERCFG::XFERCOUNT.val((DMA_MAX_TRANSFER_COUNT - 1) as u32);
        assert_eq!(cfg.value, 0x03FF_1201);
    }

    #[test]
    fn descriptor_layout() {
        assert_eq!(core::mem::size_of::<DmaDescriptor>(), 16);
        assert_eq!(core::mem::align_of::<DmaDescriptorTable>(), 512);
        assert_eq!(
            core::mem::size_of::<DmaDescriptorTable>(),
            // 20 descriptors rounded up to the table alignment.
            512
        );
    }
}
