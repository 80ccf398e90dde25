// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Memory regions and the table of peripheral instances.
//!
//! Every peripheral owns a 4 KiB window. The Flexcomm functions do not
//! have windows of their own: USART, SPI and I2C instances are listed as
//! aliases of the Flexcomm that hosts them, and lookups by address only
//! return canonical instances.

use core::fmt;

use crate::{
    adc, agc, bledp, calib, crc, cs, ctimer, dac, dma, flash, flexcomm, fsp, gpio, i2c, qdec, rng,
    rtc, sct, spi, spifi, syscon, usart, usb, wdt,
};

/// A contiguous range of the address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub base: usize,
    pub size: usize,
}

impl Region {
    /// First address past the region.
    pub const fn end(&self) -> usize {
        self.base + self.size
    }

    pub const fn contains(&self, addr: usize) -> bool {
        addr >= self.base && addr - self.base < self.size
    }
}

pub const FLASH: Region = Region {
    name: "FLASH",
    base: 0x0100_0000,
    size: 512 * 1024,
};
pub const ROM: Region = Region {
    name: "ROM",
    base: 0x0300_0000,
    size: 128 * 1024,
};
pub const SRAM: Region = Region {
    name: "SRAM",
    base: 0x0400_0000,
    size: 128 * 1024,
};
/// SRAM seen through the Cortex-M SRAM code region, for bit-banding.
pub const SRAM_ALIAS: Region = Region {
    name: "SRAM_ALIAS",
    base: 0x2000_0000,
    size: SRAM.size,
};
pub const SPIFI_MEM: Region = Region {
    name: "SPIFI_MEM",
    base: spifi::SPIFI_MEMORY_BASE,
    size: spifi::SPIFI_MEMORY_SIZE,
};
pub const APB_PERIPH: Region = Region {
    name: "APB",
    base: 0x4000_0000,
    size: 0x0001_0000,
};
pub const AHB_PERIPH: Region = Region {
    name: "AHB",
    base: 0x4008_0000,
    size: 0x0001_0000,
};

pub const REGIONS: &[Region] = &[FLASH, ROM, SRAM, SRAM_ALIAS, SPIFI_MEM, APB_PERIPH, AHB_PERIPH];

/// Size of the window decoded for each peripheral.
pub const PERIPHERAL_WINDOW_SIZE: usize = 0x1000;

/// A named peripheral instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Peripheral {
    pub name: &'static str,
    pub base: usize,
    /// Instance that owns the window, for functions multiplexed onto another
    /// peripheral.
    pub alias_of: Option<&'static str>,
}

impl Peripheral {
    const fn new(name: &'static str, base: usize) -> Peripheral {
        Peripheral {
            name,
            base,
            alias_of: None,
        }
    }

    const fn alias(name: &'static str, base: usize, owner: &'static str) -> Peripheral {
        Peripheral {
            name,
            base,
            alias_of: Some(owner),
        }
    }

    pub const fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }

    pub const fn contains(&self, addr: usize) -> bool {
        addr >= self.base && addr - self.base < PERIPHERAL_WINDOW_SIZE
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} @ {:#010x}", self.name, self.base)?;
        if let Some(owner) = self.alias_of {
            write!(f, " ({})", owner)?;
        }
        Ok(())
    }
}

pub const PERIPHERALS: &[Peripheral] = &[
    Peripheral::new("SYSCON", syscon::SYSCON_BASE_ADDR),
    Peripheral::new("WDT", wdt::WDT_BASE_ADDR),
    Peripheral::new("RTC", rtc::RTC_BASE_ADDR),
    Peripheral::new("CTIMER0", ctimer::CTIMER0_BASE_ADDR),
    Peripheral::new("CTIMER1", ctimer::CTIMER1_BASE_ADDR),
    Peripheral::new("CTIMER2", ctimer::CTIMER2_BASE_ADDR),
    Peripheral::new("CTIMER3", ctimer::CTIMER3_BASE_ADDR),
    Peripheral::new("ADC", adc::ADC_BASE_ADDR),
    Peripheral::new("DAC", dac::DAC_BASE_ADDR),
    Peripheral::new("CS", cs::CS_BASE_ADDR),
    Peripheral::new("QDEC0", qdec::QDEC0_BASE_ADDR),
    Peripheral::new("QDEC1", qdec::QDEC1_BASE_ADDR),
    Peripheral::new("RNG", rng::RNG_BASE_ADDR),
    Peripheral::new("CALIB", calib::CALIB_BASE_ADDR),
    Peripheral::new("BLEDP", bledp::BLEDP_BASE_ADDR),
    Peripheral::new("AGC", agc::AGC_BASE_ADDR),
    Peripheral::new("FSP", fsp::FSP_BASE_ADDR),
    Peripheral::new("FLASH", flash::FLASH_BASE_ADDR),
    Peripheral::new("DMA0", dma::DMA0_BASE_ADDR),
    Peripheral::new("SPIFI0", spifi::SPIFI0_BASE_ADDR),
    Peripheral::new("USB0", usb::USB0_BASE_ADDR),
    Peripheral::new("SCT0", sct::SCT0_BASE_ADDR),
    Peripheral::new("FLEXCOMM0", flexcomm::FLEXCOMM0_BASE_ADDR),
    Peripheral::new("FLEXCOMM1", flexcomm::FLEXCOMM1_BASE_ADDR),
    Peripheral::new("FLEXCOMM2", flexcomm::FLEXCOMM2_BASE_ADDR),
    Peripheral::new("FLEXCOMM3", flexcomm::FLEXCOMM3_BASE_ADDR),
    Peripheral::new("CRC", crc::CRC_BASE_ADDR),
    Peripheral::new("GPIOA", gpio::GPIOA_BASE_ADDR),
    Peripheral::new("GPIOB", gpio::GPIOB_BASE_ADDR),
    Peripheral::alias("USART0", usart::USART0_BASE_ADDR, "FLEXCOMM0"),
    Peripheral::alias("USART1", usart::USART1_BASE_ADDR, "FLEXCOMM1"),
    Peripheral::alias("I2C0", i2c::I2C0_BASE_ADDR, "FLEXCOMM1"),
    Peripheral::alias("SPI0", spi::SPI0_BASE_ADDR, "FLEXCOMM2"),
    Peripheral::alias("I2C1", i2c::I2C1_BASE_ADDR, "FLEXCOMM2"),
    Peripheral::alias("SPI1", spi::SPI1_BASE_ADDR, "FLEXCOMM3"),
];

/// Canonical peripheral whose window contains `addr`.
pub fn peripheral_at(addr: usize) -> Option<&'static Peripheral> {
    PERIPHERALS
        .iter()
        .find(|p| !p.is_alias() && p.contains(addr))
}

/// Peripheral instance named `name`, alias or not.
pub fn peripheral(name: &str) -> Option<&'static Peripheral> {
    PERIPHERALS.iter().find(|p| p.name == name)
}

/// Region containing `addr`. SRAM is found before its alias.
pub fn region_at(addr: usize) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.contains(addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_owner_of_shared_window() {
        let p = peripheral_at(0x4008_7010);
        assert_eq!(p.map(|p| p.name), Some("FLEXCOMM1"));
        assert_eq!(peripheral("I2C0").and_then(|p| p.alias_of), Some("FLEXCOMM1"));
        assert_eq!(peripheral("I2C1").and_then(|p| p.alias_of), Some("FLEXCOMM2"));
    }

    #[test]
    fn unmapped_addresses() {
        assert!(peripheral_at(0x4008_B000).is_none());
        assert!(peripheral_at(0x5000_0000).is_none());
        assert!(region_at(0x0800_0000).is_none());
    }

    #[test]
    fn display_names_owner() {
        let usart0 = PERIPHERALS.iter().find(|p| p.name == "USART0");
        assert_eq!(
            usart0.map(|p| format!("{}", p)),
            Some(std::string::String::from("USART0 @ 0x40086000 (FLEXCOMM0)"))
        );
    }

    #[test]
    fn regions_do_not_overlap() {
        for (i, a) in REGIONS.iter().enumerate() {
            for b in &REGIONS[i + 1..] {
                assert!(a.end() <= b.base || b.end() <= a.base, "{} / {}", a.name, b.name);
            }
        }
    }
}
