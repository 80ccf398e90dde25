// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Sigma-delta analog to digital converter.
//!
//! Sixteen input channels share four configuration sets (`CFG[n]`); `CH_CFG`
//! assigns a set to each channel and `CH_SEL` enables channels for a scan.

use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const ADC_BASE_ADDR: usize = 0x4000_7000;

pub const ADC_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(ADC_BASE_ADDR as *const AdcRegisters) };

pub const ADC_IRQS: [Irqn; 1] = [Irqn::Adc];

/// Number of configuration sets.
pub const ADC_CFG_COUNT: usize = 4;
/// Number of input channels.
pub const ADC_CHANNEL_COUNT: usize = 16;

register_structs! {
    /// ADC
    pub AdcRegisters {
        /// ADC Core and Interface Control Register.
        (0x000 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// ADC Channel Selection Register.
        (0x004 => pub ch_sel: ReadWrite<u32, CH_SEL::Register>),
        /// ADC Channel Configuration Register.
        (0x008 => pub ch_cfg: ReadWrite<u32, CH_CFG::Register>),
        /// ADC Configuration Register.
        (0x00C => pub cfg: [ReadWrite<u32, CFG::Register>; ADC_CFG_COUNT]),
        /// Bandgap and Buffer Control Register.
        (0x01C => pub bg_bf: ReadWrite<u32, BG_BF::Register>),
        /// Window Comparator Threshold Register.
        (0x020 => pub wcmp_thr: ReadWrite<u32, WCMP_THR::Register>),
        /// Interrupt Enable Register.
        (0x024 => pub inten: ReadWrite<u32, INT::Register>),
        /// Interrupt Flag Register. Write 1 to clear.
        (0x028 => pub int: ReadWrite<u32, INT::Register>),
        /// ADC Conversion Data Register.
        (0x02C => pub data: ReadOnly<u32, DATA::Register>),
        (0x030 => @END),
    }
}

register_bitfields![u32,
pub CTRL [
    /// ADC enable.
    ENABLE OFFSET(0) NUMBITS(1) [],
    /// Software trigger, self cleared.
    SW_START OFFSET(1) NUMBITS(1) [],
    /// Conversion mode.
    CONV_MODE OFFSET(2) NUMBITS(1) [
        /// One conversion per trigger.
        Single = 0,
        /// Convert continuously after the first trigger.
        Burst = 1
    ],
    /// Scan all channels enabled in CH_SEL.
    SCAN_EN OFFSET(3) NUMBITS(1) [],
    /// DMA request enable.
    DMA_EN OFFSET(4) NUMBITS(1) [],
    /// Hardware trigger source.
    TRIGGER OFFSET(5) NUMBITS(3) [
        Software = 0,
        Ctimer0 = 1,
        Ctimer1 = 2,
        Ctimer2 = 3,
        Ctimer3 = 4,
        Rtc = 5,
        Gpioa14 = 6,
        Gpioa15 = 7
    ],
    /// ADC clock divider select.
    CLKSEL OFFSET(8) NUMBITS(5) [],
    /// Reference voltage select.
    VREF_SEL OFFSET(13) NUMBITS(2) [
        /// 1.2 V internal bandgap.
        Internal = 0,
        /// VCC.
        Vcc = 1,
        /// External reference with buffer.
        ExternalBuffered = 2,
        /// External reference without buffer.
        External = 3
    ],
    /// Invert the input signal.
    SIG_INV_EN OFFSET(15) NUMBITS(1) [],
    /// Store the channel index in the top bits of DATA.
    CH_IDX_EN OFFSET(16) NUMBITS(1) [],
    /// Window comparator enable.
    WCMP_EN OFFSET(17) NUMBITS(1) [],
    /// Invert the hardware trigger polarity.
    TRIG_INV OFFSET(18) NUMBITS(1) [],
    /// Decimation rate.
    DS_RATE OFFSET(20) NUMBITS(3) [],
    /// Software reset of the conversion logic.
    SRST OFFSET(31) NUMBITS(1) []
],
pub CH_SEL [
    /// One enable bit per channel.
    CH_SEL OFFSET(0) NUMBITS(16) []
],
pub CH_CFG [
    CFG_CH0 OFFSET(0) NUMBITS(2) [],
    CFG_CH1 OFFSET(2) NUMBITS(2) [],
    CFG_CH2 OFFSET(4) NUMBITS(2) [],
    CFG_CH3 OFFSET(6) NUMBITS(2) [],
    CFG_CH4 OFFSET(8) NUMBITS(2) [],
    CFG_CH5 OFFSET(10) NUMBITS(2) [],
    CFG_CH6 OFFSET(12) NUMBITS(2) [],
    CFG_CH7 OFFSET(14) NUMBITS(2) [],
    CFG_CH8 OFFSET(16) NUMBITS(2) [],
    CFG_CH9 OFFSET(18) NUMBITS(2) [],
    CFG_CH10 OFFSET(20) NUMBITS(2) [],
    CFG_CH11 OFFSET(22) NUMBITS(2) [],
    CFG_CH12 OFFSET(24) NUMBITS(2) [],
    CFG_CH13 OFFSET(26) NUMBITS(2) [],
    CFG_CH14 OFFSET(28) NUMBITS(2) [],
    CFG_CH15 OFFSET(30) NUMBITS(2) []
],
pub CFG [
    /// PGA gain.
    PGA_GAIN OFFSET(0) NUMBITS(3) [
        Gain1 = 0,
        Gain2 = 1,
        Gain4 = 2,
        Gain8 = 3,
        Gain16 = 4,
        Gain32 = 5,
        Gain64 = 6,
        Gain128 = 7
    ],
    /// Bypass the PGA.
    PGA_BP OFFSET(3) NUMBITS(1) [],
    /// Negative input select when the channel is single ended.
    PGA_VINN OFFSET(4) NUMBITS(2) [
        Vref = 0,
        Vinn = 1,
        Vss = 2,
        HalfVref = 3
    ],
    /// ADC core gain.
    ADC_GAIN OFFSET(6) NUMBITS(2) [
        Half = 0,
        One = 1,
        OneAndHalf = 2,
        Two = 3
    ],
    /// Reference gain.
    VREF_GAIN OFFSET(8) NUMBITS(1) [
        One = 0,
        OneAndHalf = 1
    ],
    /// Output scale select.
    SCALE OFFSET(9) NUMBITS(2) []
],
pub BG_BF [
    /// Power down the bandgap.
    PD_BG OFFSET(0) NUMBITS(1) [],
    /// Power down the reference buffer.
    PD_BF OFFSET(1) NUMBITS(1) [],
    /// Bandgap trim.
    BG_TRIM OFFSET(4) NUMBITS(4) [],
    /// Buffer bias current select.
    BF_BIAS OFFSET(8) NUMBITS(2) []
],
pub WCMP_THR [
    /// Lower window threshold.
    WCMP_THR_LOW OFFSET(0) NUMBITS(16) [],
    /// Upper window threshold.
    WCMP_THR_HIGH OFFSET(16) NUMBITS(16) []
],
pub INT [
    /// Conversion data ready.
    DAT_RDY OFFSET(0) NUMBITS(1) [],
    /// Window comparator hit.
    WCMP OFFSET(1) NUMBITS(1) [],
    /// Data overrun.
    OVERFLOW OFFSET(2) NUMBITS(1) []
],
pub DATA [
    /// Signed conversion result.
    DATA OFFSET(0) NUMBITS(24) [],
    /// Channel index, valid when CH_IDX_EN is set.
    CH_IDX OFFSET(24) NUMBITS(5) []
]
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_select_packs_into_bits_8_to_12() {
        assert_eq!(CTRL::CLKSEL.mask << CTRL::CLKSEL.shift, 0x1F00);
        assert_eq!(CTRL::CLKSEL.shift, 8);
        assert_eq!(CTRL::CLKSEL.val(0x1F).value, 0x1F00);
        // Bits above the field width are dropped.
        assert_eq!(CTRL::CLKSEL.val(0x3F).value, 0x1F00);
    }

    #[test]
    fn channel_config_slots() {
        assert_eq!(CH_CFG::CFG_CH15.val(3).value, 0xC000_0000);
        assert_eq!(CH_CFG::CFG_CH1.read(0b1100), 3);
    }
}
