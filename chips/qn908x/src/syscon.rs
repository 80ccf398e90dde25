// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System configuration.
//!
//! Resets, clock gating and selection, power management, pin function,
//! pull and drive configuration, GPIO wakeup and the analog comparators.
//!
//! Pin configuration arrays are indexed by PIO number: PA0 to PA31 are
//! PIO 0 to 31, PB0 to PB2 follow as PIO 32 to 34. [`pio_index`] computes
//! the number and the `pio_*_field` functions locate a pin inside its
//! array.

use crate::errorcode::ErrorCode;
use crate::gpio::{GPIOA_PIN_COUNT, GPIOB_PIN_COUNT};
use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, Field, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const SYSCON_BASE_ADDR: usize = 0x4000_0000;

pub const SYSCON_BASE: StaticRef<SysconRegisters> =
    unsafe { StaticRef::new(SYSCON_BASE_ADDR as *const SysconRegisters) };

/// Vectors raised by the system control block.
pub const SYSCON_IRQS: [Irqn; 4] = [
    Irqn::ExtGpioWakeup,
    Irqn::Osc,
    Irqn::OscIntLow,
    Irqn::XtalReady,
];
pub const BOD_IRQS: [Irqn; 1] = [Irqn::Bod];
pub const ACMP_IRQS: [Irqn; 2] = [Irqn::Acmp0, Irqn::Acmp1];

/// Configurable pins.
pub const PIO_COUNT: usize = GPIOA_PIN_COUNT + GPIOB_PIN_COUNT;
/// Pins per `PIO_FUNC_CFG` register.
pub const PIO_FUNC_PINS_PER_REG: usize = 8;
/// Pins per `PIO_PULL_CFG` register.
pub const PIO_PULL_PINS_PER_REG: usize = 16;
/// Pins per `PIO_DRV_CFG` and wakeup register.
pub const PIO_DRV_PINS_PER_REG: usize = 32;

pub const SYSCON_FC_FRG_COUNT: usize = 4;
pub const SYSCON_PIO_FUNC_CFG_COUNT: usize = PIO_COUNT.div_ceil(PIO_FUNC_PINS_PER_REG);
pub const SYSCON_PIO_PULL_CFG_COUNT: usize = PIO_COUNT.div_ceil(PIO_PULL_PINS_PER_REG);
pub const SYSCON_PIO_DRV_CFG_COUNT: usize = PIO_COUNT.div_ceil(PIO_DRV_PINS_PER_REG);

register_structs! {
    /// SYSCON
    pub SysconRegisters {
        /// Software reset assert. Write 1 to hold a block in reset.
        (0x000 => pub rst_sw_set: WriteOnly<u32, PERIPH::Register>),
        /// Software reset release.
        (0x004 => pub rst_sw_clr: WriteOnly<u32, PERIPH::Register>),
        /// Clock gate. Write 1 to stop a block's clock.
        (0x008 => pub clk_dis: WriteOnly<u32, PERIPH::Register>),
        /// Clock ungate. Reads return the running clocks.
        (0x00C => pub clk_en: ReadWrite<u32, PERIPH::Register>),
        /// Clock source and divider selection.
        (0x010 => pub clk_ctrl: ReadWrite<u32, CLK_CTRL::Register>),
        /// Oscillator ready flags.
        (0x014 => pub clk_flag: ReadOnly<u32, CLK_FLAG::Register>),
        /// Flexcomm fractional rate generators.
        (0x018 => pub fc_frg: [ReadWrite<u32, FC_FRG::Register>; SYSCON_FC_FRG_COUNT]),
        /// Reset cause. Write 1 to clear.
        (0x028 => pub rst_cause_src: ReadWrite<u32, RST_CAUSE::Register>),
        (0x02C => pub sys_mode_ctrl: ReadWrite<u32, SYS_MODE_CTRL::Register>),
        (0x030 => pub sys_stat: ReadOnly<u32, SYS_STAT::Register>),
        (0x034 => _reserved0),
        /// Blocks powered down while active.
        (0x040 => pub pmu_ctrl0: ReadWrite<u32, PMU::Register>),
        /// Blocks powered down in power down mode.
        (0x044 => pub pmu_ctrl1: ReadWrite<u32, PMU::Register>),
        (0x048 => pub pmu_ctrl2: ReadWrite<u32, PMU_CTRL2::Register>),
        (0x04C => pub ana_ctrl0: ReadWrite<u32, ANA_CTRL0::Register>),
        (0x050 => pub ana_ctrl1: ReadWrite<u32, ANA_CTRL1::Register>),
        (0x054 => pub xtal_ctrl: ReadWrite<u32, XTAL_CTRL::Register>),
        (0x058 => _reserved1),
        (0x060 => pub sys_int_en: ReadWrite<u32, SYS_INT::Register>),
        /// Write 1 to clear.
        (0x064 => pub sys_int_stat: ReadWrite<u32, SYS_INT::Register>),
        (0x068 => _reserved2),
        (0x080 => pub pio_func_cfg: [ReadWrite<u32, PIO_FUNC_CFG::Register>; SYSCON_PIO_FUNC_CFG_COUNT]),
        (0x094 => _reserved3),
        (0x0A0 => pub pio_pull_cfg: [ReadWrite<u32, PIO_PULL_CFG::Register>; SYSCON_PIO_PULL_CFG_COUNT]),
        (0x0AC => _reserved4),
        /// 1 selects high drive strength.
        (0x0B0 => pub pio_drv_cfg: [ReadWrite<u32>; SYSCON_PIO_DRV_CFG_COUNT]),
        /// Wakeup level for port A, 1 wakes on high.
        (0x0B8 => pub pio_wakeup_lvl0: ReadWrite<u32>),
        /// Wakeup level for port B.
        (0x0BC => pub pio_wakeup_lvl1: ReadWrite<u32>),
        /// Wakeup enable for port A.
        (0x0C0 => pub pio_wakeup_en0: ReadWrite<u32>),
        /// Wakeup enable for port B.
        (0x0C4 => pub pio_wakeup_en1: ReadWrite<u32>),
        (0x0C8 => _reserved5),
        (0x100 => pub usb_cfg: ReadWrite<u32, USB_CFG::Register>),
        (0x104 => _reserved6),
        (0x3FC => pub chip_id: ReadOnly<u32, CHIP_ID::Register>),
        (0x400 => @END),
    }
}

register_bitfields![u32,
/// RST_SW_SET, RST_SW_CLR, CLK_DIS and CLK_EN.
pub PERIPH [
    FLEXCOMM0 OFFSET(0) NUMBITS(1) [],
    FLEXCOMM1 OFFSET(1) NUMBITS(1) [],
    FLEXCOMM2 OFFSET(2) NUMBITS(1) [],
    FLEXCOMM3 OFFSET(3) NUMBITS(1) [],
    CTIMER0 OFFSET(4) NUMBITS(1) [],
    CTIMER1 OFFSET(5) NUMBITS(1) [],
    CTIMER2 OFFSET(6) NUMBITS(1) [],
    CTIMER3 OFFSET(7) NUMBITS(1) [],
    DMA OFFSET(8) NUMBITS(1) [],
    QDEC0 OFFSET(9) NUMBITS(1) [],
    QDEC1 OFFSET(10) NUMBITS(1) [],
    SCT0 OFFSET(11) NUMBITS(1) [],
    SPIFI OFFSET(12) NUMBITS(1) [],
    USB OFFSET(13) NUMBITS(1) [],
    GPIO OFFSET(14) NUMBITS(1) [],
    ADC OFFSET(15) NUMBITS(1) [],
    DAC OFFSET(16) NUMBITS(1) [],
    CS OFFSET(17) NUMBITS(1) [],
    FSP OFFSET(18) NUMBITS(1) [],
    BLE OFFSET(19) NUMBITS(1) [],
    CALIB OFFSET(20) NUMBITS(1) [],
    RNG OFFSET(21) NUMBITS(1) [],
    RTC OFFSET(22) NUMBITS(1) [],
    CRC OFFSET(23) NUMBITS(1) [],
    WDT OFFSET(24) NUMBITS(1) [],
    FLASH OFFSET(25) NUMBITS(1) [],
    /// Whole chip. Reset only.
    MCU OFFSET(31) NUMBITS(1) []
],
pub CLK_CTRL [
    SYS_CLK_SEL OFFSET(0) NUMBITS(2) [
        Osc32M = 0,
        Xtal = 1,
        Osc32K = 2,
        Xtal32K = 3
    ],
    /// Frequency of the fitted high speed crystal.
    XTAL_SEL OFFSET(2) NUMBITS(1) [
        Mhz16 = 0,
        Mhz32 = 1
    ],
    CLK_32K_SEL OFFSET(3) NUMBITS(1) [
        Osc32K = 0,
        Xtal32K = 1
    ],
    /// Halve the 32 MHz RC oscillator.
    CLK_OSC32M_DIV OFFSET(4) NUMBITS(1) [],
    /// AHB clock divider minus one.
    AHB_DIV OFFSET(8) NUMBITS(13) [],
    /// APB clock divider minus one.
    APB_DIV OFFSET(24) NUMBITS(2) [],
    /// Output the crystal clock on its pin.
    CLK_XTAL_OE OFFSET(28) NUMBITS(1) []
],
pub CLK_FLAG [
    XTAL_RDY OFFSET(0) NUMBITS(1) [],
    OSC32M_RDY OFFSET(1) NUMBITS(1) [],
    XTAL32K_RDY OFFSET(2) NUMBITS(1) [],
    OSC32K_RDY OFFSET(3) NUMBITS(1) []
],
/// Flexcomm clock is input * 256 / (256 + MULT).
pub FC_FRG [
    /// Must be written as 0xFF.
    DIV OFFSET(0) NUMBITS(8) [],
    MULT OFFSET(8) NUMBITS(8) []
],
pub RST_CAUSE [
    POR OFFSET(0) NUMBITS(1) [],
    EXT_PIN OFFSET(1) NUMBITS(1) [],
    WDT OFFSET(2) NUMBITS(1) [],
    LOCKUP OFFSET(3) NUMBITS(1) [],
    SYSRESETREQ OFFSET(4) NUMBITS(1) [],
    BOD OFFSET(5) NUMBITS(1) [],
    /// Wakeup from power down.
    WAKEUP OFFSET(6) NUMBITS(1) []
],
pub SYS_MODE_CTRL [
    /// Low power mode entered on WFI with SLEEPDEEP set.
    PD_MODE OFFSET(0) NUMBITS(2) [
        Sleep = 0,
        PowerDown0 = 1,
        PowerDown1 = 2
    ],
    /// Memory aliased at address 0.
    REMAP OFFSET(4) NUMBITS(2) [
        Rom = 0,
        Flash = 1,
        Sram = 2
    ],
    /// Reset the chip on core lockup.
    LOCKUP_RST_EN OFFSET(8) NUMBITS(1) []
],
pub SYS_STAT [
    LOCKUP OFFSET(0) NUMBITS(1) [],
    /// Supply below the brown out threshold.
    BOD OFFSET(1) NUMBITS(1) [],
    USB_VBUS OFFSET(2) NUMBITS(1) [],
    ACMP0_OUT OFFSET(3) NUMBITS(1) [],
    ACMP1_OUT OFFSET(4) NUMBITS(1) []
],
/// PMU_CTRL0 and PMU_CTRL1. Setting a bit powers the block down.
pub PMU [
    ADC OFFSET(0) NUMBITS(1) [],
    DAC OFFSET(1) NUMBITS(1) [],
    CS OFFSET(2) NUMBITS(1) [],
    ACMP0 OFFSET(3) NUMBITS(1) [],
    ACMP1 OFFSET(4) NUMBITS(1) [],
    USB OFFSET(5) NUMBITS(1) [],
    XTAL OFFSET(6) NUMBITS(1) [],
    OSC32M OFFSET(7) NUMBITS(1) [],
    XTAL32K OFFSET(8) NUMBITS(1) [],
    OSC32K OFFSET(9) NUMBITS(1) [],
    BOD OFFSET(10) NUMBITS(1) [],
    FLASH OFFSET(11) NUMBITS(1) [],
    RADIO OFFSET(12) NUMBITS(1) [],
    /// One bit per 16 KiB SRAM bank. In PMU_CTRL1 a set bit drops retention.
    MEM OFFSET(16) NUMBITS(8) []
],
pub PMU_CTRL2 [
    CORE_LDO_VSEL OFFSET(0) NUMBITS(3) [],
    BUCK_EN OFFSET(4) NUMBITS(1) [],
    RET_LDO_VSEL OFFSET(8) NUMBITS(3) []
],
pub ANA_CTRL0 [
    ACMP0_EN OFFSET(0) NUMBITS(1) [],
    ACMP0_HYST OFFSET(1) NUMBITS(1) [],
    /// Reference level in sixteenths of VDD.
    ACMP0_REF OFFSET(4) NUMBITS(4) [],
    ACMP1_EN OFFSET(8) NUMBITS(1) [],
    ACMP1_HYST OFFSET(9) NUMBITS(1) [],
    ACMP1_REF OFFSET(12) NUMBITS(4) []
],
pub ANA_CTRL1 [
    BOD_THR OFFSET(0) NUMBITS(3) [],
    BOD_EN OFFSET(3) NUMBITS(1) [],
    TEMP_SENSOR_EN OFFSET(4) NUMBITS(1) [],
    BATT_MON_EN OFFSET(5) NUMBITS(1) []
],
pub XTAL_CTRL [
    XTAL_LOAD_CAP OFFSET(0) NUMBITS(6) [],
    XTAL_ICTRL OFFSET(8) NUMBITS(6) [],
    XTAL32K_LOAD_CAP OFFSET(16) NUMBITS(6) [],
    XTAL32K_ICTRL OFFSET(24) NUMBITS(6) []
],
/// SYS_INT_EN and SYS_INT_STAT.
pub SYS_INT [
    EXT_GPIO_WAKEUP OFFSET(0) NUMBITS(1) [],
    OSC OFFSET(1) NUMBITS(1) [],
    OSC_INT_LOW OFFSET(2) NUMBITS(1) [],
    XTAL_READY OFFSET(3) NUMBITS(1) [],
    BOD OFFSET(4) NUMBITS(1) [],
    ACMP0 OFFSET(5) NUMBITS(1) [],
    ACMP1 OFFSET(6) NUMBITS(1) []
],
/// Four bits per pin, pin `8n + k` of register `n` in field `k`.
pub PIO_FUNC_CFG [
    FUNC0 OFFSET(0) NUMBITS(4) [
        Gpio = 0,
        Func1 = 1,
        Func2 = 2,
        Func3 = 3,
        Func4 = 4,
        Func5 = 5,
        Func6 = 6,
        Func7 = 7
    ],
    FUNC1 OFFSET(4) NUMBITS(4) [],
    FUNC2 OFFSET(8) NUMBITS(4) [],
    FUNC3 OFFSET(12) NUMBITS(4) [],
    FUNC4 OFFSET(16) NUMBITS(4) [],
    FUNC5 OFFSET(20) NUMBITS(4) [],
    FUNC6 OFFSET(24) NUMBITS(4) [],
    FUNC7 OFFSET(28) NUMBITS(4) []
],
/// Two bits per pin.
pub PIO_PULL_CFG [
    PULL0 OFFSET(0) NUMBITS(2) [
        HighZ = 0,
        PullDown = 1,
        PullUp = 2
    ]
],
pub USB_CFG [
    VBUS_DET_EN OFFSET(0) NUMBITS(1) [],
    DP_PULLUP_SEL OFFSET(1) NUMBITS(1) [
        Internal = 0,
        External = 1
    ],
    PHY_PD OFFSET(2) NUMBITS(1) []
],
pub CHIP_ID [
    ID OFFSET(0) NUMBITS(32) []
]
];

/// PIO number of `pin` on GPIO port `port` (0 is A, 1 is B).
pub const fn pio_index(port: usize, pin: usize) -> Result<usize, ErrorCode> {
    match port {
        0 if pin < GPIOA_PIN_COUNT => Ok(pin),
        1 if pin < GPIOB_PIN_COUNT => Ok(GPIOA_PIN_COUNT + pin),
        0 | 1 => Err(ErrorCode::INVAL),
        _ => Err(ErrorCode::NODEVICE),
    }
}

/// `PIO_FUNC_CFG` index and the function field of PIO `pio`.
pub const fn pio_func_field(
    pio: usize,
) -> Result<(usize, Field<u32, PIO_FUNC_CFG::Register>), ErrorCode> {
    if pio >= PIO_COUNT {
        return Err(ErrorCode::INVAL);
    }
    let shift = (pio % PIO_FUNC_PINS_PER_REG) * 4;
    Ok((pio / PIO_FUNC_PINS_PER_REG, Field::new(0xF, shift)))
}

/// `PIO_PULL_CFG` index and the pull field of PIO `pio`.
pub const fn pio_pull_field(
    pio: usize,
) -> Result<(usize, Field<u32, PIO_PULL_CFG::Register>), ErrorCode> {
    if pio >= PIO_COUNT {
        return Err(ErrorCode::INVAL);
    }
    let shift = (pio % PIO_PULL_PINS_PER_REG) * 2;
    Ok((pio / PIO_PULL_PINS_PER_REG, Field::new(0x3, shift)))
}

/// `PIO_DRV_CFG` index and bit of PIO `pio`. Also locates the pin in the
/// wakeup level and enable registers of its port.
pub const fn pio_drv_bit(pio: usize) -> Result<(usize, u32), ErrorCode> {
    if pio >= PIO_COUNT {
        return Err(ErrorCode::INVAL);
    }
    Ok((pio / PIO_DRV_PINS_PER_REG, 1 << (pio % PIO_DRV_PINS_PER_REG)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pio_numbering() {
        assert_eq!(pio_index(0, 31), Ok(31));
        assert_eq!(pio_index(1, 2), Ok(34));
        assert_eq!(pio_index(1, 3), Err(ErrorCode::INVAL));
        assert_eq!(pio_index(2, 0), Err(ErrorCode::NODEVICE));
    }

    #[test]
    fn array_lengths_cover_every_pin() {
        assert_eq!(SYSCON_PIO_FUNC_CFG_COUNT, 5);
        assert_eq!(SYSCON_PIO_PULL_CFG_COUNT, 3);
        assert_eq!(SYSCON_PIO_DRV_CFG_COUNT, 2);
    }

    #[test]
    fn pb1_function() {
        let (index, field) = match pio_func_field(33) {
            Ok(f) => f,
            Err(e) => panic!("{}", e),
        };
        assert_eq!(index, 4);
        assert_eq!(field.shift, 4);
        assert_eq!(field.val(PIO_FUNC_CFG::FUNC0::Value::Func5 as u32).value, 0x50);
    }

    #[test]
    fn pa17_pull_up() {
        let (index, field) = match pio_pull_field(17) {
            Ok(f) => f,
            Err(e) => panic!("{}", e),
        };
        assert_eq!(index, 1);
        assert_eq!(
            field.val(PIO_PULL_CFG::PULL0::Value::PullUp as u32).value,
            0b10 << 2
        );
        assert!(pio_pull_field(PIO_COUNT).is_err());
    }

    #[test]
    fn pin_function_write_keeps_neighbours() {
        use crate::utilities::registers::interfaces::{ReadWriteable, Readable};
        use crate::utilities::registers::{FieldValue, InMemoryRegister};

        let (_, field) = match pio_func_field(33) {
            Ok(f) => f,
            Err(e) => panic!("{}", e),
        };
        let cfg: InMemoryRegister<u32, PIO_FUNC_CFG::Register> = InMemoryRegister::new(0x0000_0037);
        let func: FieldValue<u32, PIO_FUNC_CFG::Register> =
            field.val(PIO_FUNC_CFG::FUNC0::Value::Func5 as u32);
        cfg.modify(func);
        assert_eq!(cfg.get(), 0x0000_0057);
        assert_eq!(cfg.read(field), 5);
        assert_eq!(cfg.read(PIO_FUNC_CFG::FUNC0), 7);
    }

    #[test]
    fn drive_bit_follows_port() {
        assert_eq!(pio_drv_bit(32), Ok((1, 1)));
        assert_eq!(pio_drv_bit(5), Ok((0, 1 << 5)));
    }

    #[test]
    fn run_from_xtal() {
        let ctrl = CLK_CTRL::SYS_CLK_SEL::Xtal + CLK_CTRL::XTAL_SEL::Mhz32 + CLK_CTRL::AHB_DIV.val(1);
        assert_eq!(ctrl.value, 0x105);
    }
}
