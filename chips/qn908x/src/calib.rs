// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Calibration engine for the radio VCO, the RC oscillators and the
//! receive filter.

use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const CALIB_BASE_ADDR: usize = 0x4000_D000;

pub const CALIB_BASE: StaticRef<CalibRegisters> =
    unsafe { StaticRef::new(CALIB_BASE_ADDR as *const CalibRegisters) };

pub const CALIB_IRQS: [Irqn; 1] = [Irqn::Calib];

register_structs! {
    /// Calibration engine
    pub CalibRegisters {
        /// Start a calibration sequence. Self clearing.
        (0x000 => pub start: WriteOnly<u32, CAL::Register>),
        /// Calibration in progress / done flags.
        (0x004 => pub status: ReadOnly<u32, STATUS::Register>),
        /// Interrupt enable per calibration.
        (0x008 => pub inten: ReadWrite<u32, CAL::Register>),
        /// Calibration done flags. Write 1 to clear.
        (0x00C => pub int: ReadWrite<u32, CAL::Register>),
        /// Calibration control.
        (0x010 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Delay between calibration steps.
        (0x014 => pub cal_dly: ReadWrite<u32, CAL_DLY::Register>),
        /// VCO frequency calibration config.
        (0x018 => pub vcof_cfg: ReadWrite<u32, VCOF_CFG::Register>),
        /// VCO amplitude calibration config.
        (0x01C => pub vcoa_cfg: ReadWrite<u32, VCOA_CFG::Register>),
        /// VCO modulation (two point) calibration config.
        (0x020 => pub vco_mod_cfg: ReadWrite<u32, VCO_MOD_CFG::Register>),
        /// Receive filter calibration config.
        (0x024 => pub rrf_cfg: ReadWrite<u32, RRF_CFG::Register>),
        /// 32 MHz / 32 kHz RC oscillator calibration config.
        (0x028 => pub rc_cfg: ReadWrite<u32, RC_CFG::Register>),
        /// Local oscillator config used during calibration.
        (0x02C => pub lo_cfg: ReadWrite<u32, LO_CFG::Register>),
        /// Results of the last VCO calibration.
        (0x030 => pub vco_result: ReadOnly<u32, VCO_RESULT::Register>),
        /// Results of the last RC calibration.
        (0x034 => pub rc_result: ReadOnly<u32, RC_RESULT::Register>),
        /// Result of the last receive filter calibration.
        (0x038 => pub rrf_result: ReadOnly<u32, RRF_RESULT::Register>),
        (0x03C => @END),
    }
}

register_bitfields![u32,
pub CAL [
    /// VCO frequency.
    VCOF OFFSET(0) NUMBITS(1) [],
    /// VCO amplitude.
    VCOA OFFSET(1) NUMBITS(1) [],
    /// VCO modulation gain.
    VCO_MOD OFFSET(2) NUMBITS(1) [],
    /// Receive filter.
    RRF OFFSET(3) NUMBITS(1) [],
    /// 32 MHz RC oscillator.
    RCO_32M OFFSET(4) NUMBITS(1) [],
    /// 32 kHz RC oscillator.
    RCO_32K OFFSET(5) NUMBITS(1) []
],
pub STATUS [
    /// A calibration is running.
    BUSY OFFSET(0) NUMBITS(1) [],
    /// Latched done flags, one per calibration.
    DONE OFFSET(8) NUMBITS(6) []
],
pub CTRL [
    /// Use the stored results instead of running the engine.
    BYPASS OFFSET(0) NUMBITS(6) [],
    /// Run the VCO calibrations automatically on each channel change.
    AUTO_VCO OFFSET(8) NUMBITS(1) [],
    /// Clock source for the frequency counter.
    CNT_CLK_SEL OFFSET(12) NUMBITS(1) [
        Xtal = 0,
        Osc32M = 1
    ]
],
pub CAL_DLY [
    /// Settle time after a code change, in 1 MHz ticks.
    SETTLE OFFSET(0) NUMBITS(8) [],
    /// Measurement window, in 32 kHz ticks.
    WINDOW OFFSET(8) NUMBITS(8) []
],
pub VCOF_CFG [
    /// Manual coarse capacitor bank code.
    VCOF_CODE OFFSET(0) NUMBITS(7) [],
    /// Target channel for the calibration.
    VCOF_CH OFFSET(8) NUMBITS(7) []
],
pub VCOA_CFG [
    /// Manual amplitude code.
    VCOA_CODE OFFSET(0) NUMBITS(5) [],
    /// Target amplitude.
    VCOA_TARGET OFFSET(8) NUMBITS(3) []
],
pub VCO_MOD_CFG [
    /// Manual modulation gain code.
    IMR_CODE OFFSET(0) NUMBITS(6) [],
    /// Frequency deviation target.
    DEV_TARGET OFFSET(8) NUMBITS(8) []
],
pub RRF_CFG [
    /// Manual filter corner code.
    RRF_CODE OFFSET(0) NUMBITS(5) [],
    /// Receive IF select.
    RX_IF OFFSET(8) NUMBITS(2) [
        If1M = 0,
        If2M = 1,
        If4M = 2
    ]
],
pub RC_CFG [
    /// Manual 32 MHz RC trim code.
    OSC_32M_CODE OFFSET(0) NUMBITS(6) [],
    /// Manual 32 kHz RC trim code.
    OSC_32K_CODE OFFSET(8) NUMBITS(10) []
],
pub LO_CFG [
    /// Channel used by the engine.
    LO_CH OFFSET(0) NUMBITS(7) [],
    /// Frequency counter target.
    LO_TARGET OFFSET(8) NUMBITS(16) []
],
pub VCO_RESULT [
    VCOF OFFSET(0) NUMBITS(7) [],
    VCOA OFFSET(8) NUMBITS(5) [],
    IMR OFFSET(16) NUMBITS(6) []
],
pub RC_RESULT [
    OSC_32M OFFSET(0) NUMBITS(6) [],
    OSC_32K OFFSET(8) NUMBITS(10) []
],
pub RRF_RESULT [
    RRF OFFSET(0) NUMBITS(5) []
]
];
