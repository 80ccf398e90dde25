// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! BLE datapath: the modem between the radio and the link layer.

use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const BLEDP_BASE_ADDR: usize = 0x4000_E000;

pub const BLEDP_BASE: StaticRef<BledpRegisters> =
    unsafe { StaticRef::new(BLEDP_BASE_ADDR as *const BledpRegisters) };

/// Vectors raised by the link layer and datapath, in vector order.
pub const BLE_IRQS: [Irqn; 4] = [Irqn::Ble, Irqn::BleTx, Irqn::BleRx, Irqn::BleFreqHop];

register_structs! {
    /// BLE datapath
    pub BledpRegisters {
        /// Datapath top level control.
        (0x000 => pub dp_top_system_ctrl: ReadWrite<u32, DP_TOP_SYSTEM_CTRL::Register>),
        /// Access address error tolerance.
        (0x004 => pub dp_aa_error_ctrl: ReadWrite<u32, DP_AA_ERROR_CTRL::Register>),
        /// Access address used outside of link layer control.
        (0x008 => pub dp_aa_addr: ReadWrite<u32>),
        /// Frequency offset compensation.
        (0x00C => pub dp_freq_ctrl: ReadWrite<u32, DP_FREQ_CTRL::Register>),
        /// Demodulator settings.
        (0x010 => pub dp_demod_ctrl: ReadWrite<u32, DP_DEMOD_CTRL::Register>),
        /// Whitening and CRC settings.
        (0x014 => pub dp_crc_ctrl: ReadWrite<u32, DP_CRC_CTRL::Register>),
        /// CRC initial value.
        (0x018 => pub dp_crc_init: ReadWrite<u32, DP_CRC_INIT::Register>),
        /// Interrupt enable.
        (0x01C => pub dp_inten: ReadWrite<u32, DP_INT::Register>),
        /// Interrupt status. Write 1 to clear.
        (0x020 => pub dp_int: ReadWrite<u32, DP_INT::Register>),
        /// Packet status of the last received packet.
        (0x024 => pub dp_status: ReadOnly<u32, DP_STATUS::Register>),
        /// Measured frequency offset of the last packet.
        (0x028 => pub dp_freq_offset: ReadOnly<u32, DP_FREQ_OFFSET::Register>),
        (0x02C => _reserved0),
        /// Test bus and loopback control.
        (0x040 => pub dp_test_ctrl: ReadWrite<u32, DP_TEST_CTRL::Register>),
        (0x044 => @END),
    }
}

register_bitfields![u32,
pub DP_TOP_SYSTEM_CTRL [
    /// Datapath enable.
    DP_EN OFFSET(0) NUMBITS(1) [],
    /// Datapath driven by registers instead of the link layer.
    SW_MODE OFFSET(1) NUMBITS(1) [],
    /// PHY rate.
    RATE OFFSET(2) NUMBITS(2) [
        Le1M = 0,
        Le2M = 1,
        Proprietary250K = 2,
        Proprietary500K = 3
    ],
    /// Start transmission in SW mode.
    TX_EN OFFSET(4) NUMBITS(1) [],
    /// Start reception in SW mode.
    RX_EN OFFSET(5) NUMBITS(1) [],
    /// Preamble length in bytes minus one.
    PREAMBLE_LEN OFFSET(8) NUMBITS(2) [],
    /// Access address length in bytes.
    AA_LEN OFFSET(10) NUMBITS(2) []
],
pub DP_AA_ERROR_CTRL [
    /// Number of bit errors tolerated in the access address.
    AA_ERR_NUM OFFSET(0) NUMBITS(3) [],
    /// Apply the tolerance to advertising channel packets as well.
    AA_ERR_ADV_EN OFFSET(4) NUMBITS(1) []
],
pub DP_FREQ_CTRL [
    /// Frequency offset compensation enable.
    FOC_EN OFFSET(0) NUMBITS(1) [],
    /// Use the value in FOC_VALUE instead of the estimate.
    FOC_MANUAL OFFSET(1) NUMBITS(1) [],
    /// Signed manual compensation value.
    FOC_VALUE OFFSET(8) NUMBITS(12) []
],
pub DP_DEMOD_CTRL [
    /// Sync correlation threshold.
    SYNC_TH OFFSET(0) NUMBITS(8) [],
    /// Timing recovery loop gain.
    TR_GAIN OFFSET(8) NUMBITS(3) [],
    /// Use the high sensitivity demodulator path.
    HS_EN OFFSET(12) NUMBITS(1) []
],
pub DP_CRC_CTRL [
    /// Whitening disable.
    WHITE_DIS OFFSET(0) NUMBITS(1) [],
    /// CRC check disable.
    CRC_DIS OFFSET(1) NUMBITS(1) [],
    /// Whitening seed.
    WHITE_SEED OFFSET(8) NUMBITS(7) []
],
pub DP_CRC_INIT [
    CRC_INIT OFFSET(0) NUMBITS(24) []
],
pub DP_INT [
    /// Sync word found.
    SYNC OFFSET(0) NUMBITS(1) [],
    /// Packet received.
    RX_DONE OFFSET(1) NUMBITS(1) [],
    /// Packet transmitted.
    TX_DONE OFFSET(2) NUMBITS(1) [],
    /// CRC error on the received packet.
    CRC_ERR OFFSET(3) NUMBITS(1) []
],
pub DP_STATUS [
    /// Received length field.
    RX_LEN OFFSET(0) NUMBITS(8) [],
    /// CRC passed.
    CRC_OK OFFSET(8) NUMBITS(1) [],
    /// Number of access address bit errors.
    AA_ERR OFFSET(12) NUMBITS(3) [],
    /// RSSI at sync.
    RSSI OFFSET(16) NUMBITS(8) []
],
pub DP_FREQ_OFFSET [
    FREQ_OFFSET OFFSET(0) NUMBITS(12) []
],
pub DP_TEST_CTRL [
    /// Internal test bus selection.
    TEST_SEL OFFSET(0) NUMBITS(4) [],
    /// Loop TX data back into RX.
    LOOPBACK OFFSET(8) NUMBITS(1) []
]
];
