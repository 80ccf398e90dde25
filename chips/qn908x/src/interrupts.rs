// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interrupt and exception numbers.
//!
//! Core exceptions carry the negative numbers CMSIS assigns them; device
//! vectors start at 0 and index the NVIC directly. Vector table slot `n` of
//! the device table sits at `(16 + n) * 4` from the start of the vector
//! table.

use core::fmt;

use crate::errorcode::ErrorCode;

/// Number of device specific interrupt vectors, reserved slots included.
pub const DEVICE_IRQ_COUNT: usize = 68;

/// Number of Cortex-M4 system vectors preceding the device vectors,
/// including the initial stack pointer and reset slots.
pub const CORE_VECTOR_COUNT: usize = 16;

/// Size of the full vector table in entries.
pub const NUMBER_OF_INT_VECTORS: usize = CORE_VECTOR_COUNT + DEVICE_IRQ_COUNT;

/// Interrupt number definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i16)]
pub enum Irqn {
    /// Non Maskable Interrupt
    NonMaskableInt = -14,
    /// Cortex-M4 Hard Fault Interrupt
    HardFault = -13,
    /// Cortex-M4 Memory Management Interrupt
    MemoryManagement = -12,
    /// Cortex-M4 Bus Fault Interrupt
    BusFault = -11,
    /// Cortex-M4 Usage Fault Interrupt
    UsageFault = -10,
    /// Cortex-M4 SV Call Interrupt
    SVCall = -5,
    /// Cortex-M4 Debug Monitor Interrupt
    DebugMonitor = -4,
    /// Cortex-M4 Pend SV Interrupt
    PendSV = -2,
    /// Cortex-M4 System Tick Interrupt
    SysTick = -1,

    /// External GPIO wakeup
    ExtGpioWakeup = 0,
    /// 32 kHz oscillator
    Osc = 1,
    /// Analog comparator 0
    Acmp0 = 2,
    /// Analog comparator 1
    Acmp1 = 3,
    /// RTC second tick
    RtcSec = 5,
    /// RTC free running counter match
    RtcFr = 6,
    /// Capacitive sense low power wakeup
    CsWakeup = 7,
    /// Capacitive sense
    Cs = 8,
    /// GPIO port A
    GpioA = 9,
    /// GPIO port B
    GpioB = 10,
    /// DMA controller
    Dma0 = 11,
    /// Pin interrupt 0
    PinInt0 = 12,
    /// Pin interrupt 1
    PinInt1 = 13,
    /// Pin interrupt 2
    PinInt2 = 14,
    /// Pin interrupt 3
    PinInt3 = 15,
    /// Inverse of the 32 kHz oscillator interrupt
    OscIntLow = 16,
    /// USB device
    Usb0 = 17,
    /// Flexcomm 0 (USART0)
    Flexcomm0 = 18,
    /// Flexcomm 1 (USART1/I2C0)
    Flexcomm1 = 19,
    /// Flexcomm 2 (SPI0/I2C1)
    Flexcomm2 = 20,
    /// Flexcomm 3 (SPI1)
    Flexcomm3 = 21,
    /// BLE link layer
    Ble = 22,
    /// Fusion signal processor
    Fsp = 23,
    /// Quadrature decoder 0
    Qdec0 = 24,
    /// Quadrature decoder 1
    Qdec1 = 25,
    /// Standard counter/timer 0
    Ctimer0 = 26,
    /// Standard counter/timer 1
    Ctimer1 = 27,
    /// Standard counter/timer 2
    Ctimer2 = 28,
    /// Standard counter/timer 3
    Ctimer3 = 29,
    /// Watchdog timer
    Wdt = 30,
    /// ADC
    Adc = 31,
    /// DAC
    Dac = 32,
    /// High frequency crystal ready
    XtalReady = 33,
    /// Flash controller
    Flash = 34,
    /// SPI flash interface
    Spifi0 = 35,
    /// State configurable timer
    Sct0 = 36,
    /// Random number generator
    Rng = 38,
    /// Calibration engine
    Calib = 40,
    /// BLE TX done
    BleTx = 42,
    /// BLE RX done
    BleRx = 43,
    /// BLE frequency hop
    BleFreqHop = 44,
    /// Brown out detector
    Bod = 51,
}

impl Irqn {
    /// Every exception and interrupt, in vector table order.
    pub const ALL: [Irqn; 51] = [
        Irqn::NonMaskableInt,
        Irqn::HardFault,
        Irqn::MemoryManagement,
        Irqn::BusFault,
        Irqn::UsageFault,
        Irqn::SVCall,
        Irqn::DebugMonitor,
        Irqn::PendSV,
        Irqn::SysTick,
        Irqn::ExtGpioWakeup,
        Irqn::Osc,
        Irqn::Acmp0,
        Irqn::Acmp1,
        Irqn::RtcSec,
        Irqn::RtcFr,
        Irqn::CsWakeup,
        Irqn::Cs,
        Irqn::GpioA,
        Irqn::GpioB,
        Irqn::Dma0,
        Irqn::PinInt0,
        Irqn::PinInt1,
        Irqn::PinInt2,
        Irqn::PinInt3,
        Irqn::OscIntLow,
        Irqn::Usb0,
        Irqn::Flexcomm0,
        Irqn::Flexcomm1,
        Irqn::Flexcomm2,
        Irqn::Flexcomm3,
        Irqn::Ble,
        Irqn::Fsp,
        Irqn::Qdec0,
        Irqn::Qdec1,
        Irqn::Ctimer0,
        Irqn::Ctimer1,
        Irqn::Ctimer2,
        Irqn::Ctimer3,
        Irqn::Wdt,
        Irqn::Adc,
        Irqn::Dac,
        Irqn::XtalReady,
        Irqn::Flash,
        Irqn::Spifi0,
        Irqn::Sct0,
        Irqn::Rng,
        Irqn::Calib,
        Irqn::BleTx,
        Irqn::BleRx,
        Irqn::BleFreqHop,
        Irqn::Bod,
    ];

    /// Number as used by the NVIC and CMSIS.
    pub const fn number(self) -> i16 {
        self as i16
    }

    /// `true` for the Cortex-M4 system exceptions.
    pub const fn is_core_exception(self) -> bool {
        (self as i16) < 0
    }

    /// Slot in the vector table, counting the stack pointer and reset entries.
    pub const fn vector_slot(self) -> usize {
        (CORE_VECTOR_COUNT as i16 + self as i16) as usize
    }

    /// Name following the vendor naming (`FLASH_IRQn`, `SysTick_IRQn`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Irqn::NonMaskableInt => "NonMaskableInt_IRQn",
            Irqn::HardFault => "HardFault_IRQn",
            Irqn::MemoryManagement => "MemoryManagement_IRQn",
            Irqn::BusFault => "BusFault_IRQn",
            Irqn::UsageFault => "UsageFault_IRQn",
            Irqn::SVCall => "SVCall_IRQn",
            Irqn::DebugMonitor => "DebugMonitor_IRQn",
            Irqn::PendSV => "PendSV_IRQn",
            Irqn::SysTick => "SysTick_IRQn",
            Irqn::ExtGpioWakeup => "EXT_GPIO_WAKEUP_IRQn",
            Irqn::Osc => "OSC_IRQn",
            Irqn::Acmp0 => "ACMP0_IRQn",
            Irqn::Acmp1 => "ACMP1_IRQn",
            Irqn::RtcSec => "RTC_SEC_IRQn",
            Irqn::RtcFr => "RTC_FR_IRQn",
            Irqn::CsWakeup => "CS_WAKEUP_IRQn",
            Irqn::Cs => "CS_IRQn",
            Irqn::GpioA => "GPIOA_IRQn",
            Irqn::GpioB => "GPIOB_IRQn",
            Irqn::Dma0 => "DMA0_IRQn",
            Irqn::PinInt0 => "PIN_INT0_IRQn",
            Irqn::PinInt1 => "PIN_INT1_IRQn",
            Irqn::PinInt2 => "PIN_INT2_IRQn",
            Irqn::PinInt3 => "PIN_INT3_IRQn",
            Irqn::OscIntLow => "OSC_INT_LOW_IRQn",
            Irqn::Usb0 => "USB0_IRQn",
            Irqn::Flexcomm0 => "FLEXCOMM0_IRQn",
            Irqn::Flexcomm1 => "FLEXCOMM1_IRQn",
            Irqn::Flexcomm2 => "FLEXCOMM2_IRQn",
            Irqn::Flexcomm3 => "FLEXCOMM3_IRQn",
            Irqn::Ble => "BLE_IRQn",
            Irqn::Fsp => "FSP_IRQn",
            Irqn::Qdec0 => "QDEC0_IRQn",
            Irqn::Qdec1 => "QDEC1_IRQn",
            Irqn::Ctimer0 => "CTIMER0_IRQn",
            Irqn::Ctimer1 => "CTIMER1_IRQn",
            Irqn::Ctimer2 => "CTIMER2_IRQn",
            Irqn::Ctimer3 => "CTIMER3_IRQn",
            Irqn::Wdt => "WDT_IRQn",
            Irqn::Adc => "ADC_IRQn",
            Irqn::Dac => "DAC_IRQn",
            Irqn::XtalReady => "XTAL_READY_IRQn",
            Irqn::Flash => "FLASH_IRQn",
            Irqn::Spifi0 => "SPIFI0_IRQn",
            Irqn::Sct0 => "SCT0_IRQn",
            Irqn::Rng => "RNG_IRQn",
            Irqn::Calib => "CALIB_IRQn",
            Irqn::BleTx => "BLE_TX_IRQn",
            Irqn::BleRx => "BLE_RX_IRQn",
            Irqn::BleFreqHop => "BLE_FREQ_HOP_IRQn",
            Irqn::Bod => "BOD_IRQn",
        }
    }
}

impl TryFrom<i16> for Irqn {
    type Error = ErrorCode;

    fn try_from(number: i16) -> Result<Self, Self::Error> {
        match number {
            -14 => Ok(Irqn::NonMaskableInt),
            -13 => Ok(Irqn::HardFault),
            -12 => Ok(Irqn::MemoryManagement),
            -11 => Ok(Irqn::BusFault),
            -10 => Ok(Irqn::UsageFault),
            -5 => Ok(Irqn::SVCall),
            -4 => Ok(Irqn::DebugMonitor),
            -2 => Ok(Irqn::PendSV),
            -1 => Ok(Irqn::SysTick),
            0 => Ok(Irqn::ExtGpioWakeup),
            1 => Ok(Irqn::Osc),
            2 => Ok(Irqn::Acmp0),
            3 => Ok(Irqn::Acmp1),
            5 => Ok(Irqn::RtcSec),
            6 => Ok(Irqn::RtcFr),
            7 => Ok(Irqn::CsWakeup),
            8 => Ok(Irqn::Cs),
            9 => Ok(Irqn::GpioA),
            10 => Ok(Irqn::GpioB),
            11 => Ok(Irqn::Dma0),
            12 => Ok(Irqn::PinInt0),
            13 => Ok(Irqn::PinInt1),
            14 => Ok(Irqn::PinInt2),
            15 => Ok(Irqn::PinInt3),
            16 => Ok(Irqn::OscIntLow),
            17 => Ok(Irqn::Usb0),
            18 => Ok(Irqn::Flexcomm0),
            19 => Ok(Irqn::Flexcomm1),
            20 => Ok(Irqn::Flexcomm2),
            21 => Ok(Irqn::Flexcomm3),
            22 => Ok(Irqn::Ble),
            23 => Ok(Irqn::Fsp),
            24 => Ok(Irqn::Qdec0),
            25 => Ok(Irqn::Qdec1),
            26 => Ok(Irqn::Ctimer0),
            27 => Ok(Irqn::Ctimer1),
            28 => Ok(Irqn::Ctimer2),
            29 => Ok(Irqn::Ctimer3),
            30 => Ok(Irqn::Wdt),
            31 => Ok(Irqn::Adc),
            32 => Ok(Irqn::Dac),
            33 => Ok(Irqn::XtalReady),
            34 => Ok(Irqn::Flash),
            35 => Ok(Irqn::Spifi0),
            36 => Ok(Irqn::Sct0),
            38 => Ok(Irqn::Rng),
            40 => Ok(Irqn::Calib),
            42 => Ok(Irqn::BleTx),
            43 => Ok(Irqn::BleRx),
            44 => Ok(Irqn::BleFreqHop),
            51 => Ok(Irqn::Bod),
            0..=67 => Err(ErrorCode::RESERVED),
            _ => Err(ErrorCode::NODEVICE),
        }
    }
}

impl From<Irqn> for i16 {
    fn from(irq: Irqn) -> i16 {
        irq as i16
    }
}

impl fmt::Display for Irqn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name(), *self as i16)
    }
}

/// Device vector table ordering; `None` marks a reserved slot.
pub const DEVICE_VECTORS: [Option<Irqn>; DEVICE_IRQ_COUNT] = {
    let mut table = [None; DEVICE_IRQ_COUNT];
    let mut i = 0;
    while i < Irqn::ALL.len() {
        let irq = Irqn::ALL[i];
        if !irq.is_core_exception() {
            table[irq as i16 as usize] = Some(irq);
        }
        i += 1;
    }
    table
};

// NVIC line numbers for chip glue that dispatches on plain integers.
pub const EXT_GPIO_WAKEUP: u32 = 0;
pub const OSC: u32 = 1;
pub const ACMP0: u32 = 2;
pub const ACMP1: u32 = 3;
pub const RTC_SEC: u32 = 5;
pub const RTC_FR: u32 = 6;
pub const CS_WAKEUP: u32 = 7;
pub const CS: u32 = 8;
pub const GPIOA: u32 = 9;
pub const GPIOB: u32 = 10;
pub const DMA0: u32 = 11;
pub const PIN_INT0: u32 = 12;
pub const PIN_INT1: u32 = 13;
pub const PIN_INT2: u32 = 14;
pub const PIN_INT3: u32 = 15;
pub const OSC_INT_LOW: u32 = 16;
pub const USB0: u32 = 17;
pub const FLEXCOMM0: u32 = 18;
pub const FLEXCOMM1: u32 = 19;
pub const FLEXCOMM2: u32 = 20;
pub const FLEXCOMM3: u32 = 21;
pub const BLE: u32 = 22;
pub const FSP: u32 = 23;
pub const QDEC0: u32 = 24;
pub const QDEC1: u32 = 25;
pub const CTIMER0: u32 = 26;
pub const CTIMER1: u32 = 27;
pub const CTIMER2: u32 = 28;
pub const CTIMER3: u32 = 29;
pub const WDT: u32 = 30;
pub const ADC: u32 = 31;
pub const DAC: u32 = 32;
pub const XTAL_READY: u32 = 33;
pub const FLASH: u32 = 34;
pub const SPIFI0: u32 = 35;
pub const SCT0: u32 = 36;
pub const RNG: u32 = 38;
pub const CALIB: u32 = 40;
pub const BLE_TX: u32 = 42;
pub const BLE_RX: u32 = 43;
pub const BLE_FREQ_HOP: u32 = 44;
pub const BOD: u32 = 51;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_is_vector_34() {
        assert_eq!(Irqn::Flash as i16, 34);
        assert_eq!(FLASH, 34);
        assert_eq!(Irqn::Flash.vector_slot(), 50);
    }

    #[test]
    fn core_exceptions_are_negative() {
        assert_eq!(Irqn::NonMaskableInt.number(), -14);
        assert_eq!(Irqn::SysTick.number(), -1);
        assert!(Irqn::PendSV.is_core_exception());
        assert!(!Irqn::ExtGpioWakeup.is_core_exception());
        assert_eq!(Irqn::SysTick.vector_slot(), 15);
    }

    #[test]
    fn reserved_and_unknown_numbers() {
        assert_eq!(Irqn::try_from(4), Err(ErrorCode::RESERVED));
        assert_eq!(Irqn::try_from(67), Err(ErrorCode::RESERVED));
        assert_eq!(Irqn::try_from(68), Err(ErrorCode::NODEVICE));
        assert_eq!(Irqn::try_from(-3), Err(ErrorCode::NODEVICE));
        assert_eq!(Irqn::try_from(-15), Err(ErrorCode::NODEVICE));
        assert_eq!(Irqn::try_from(51), Ok(Irqn::Bod));
    }
}
