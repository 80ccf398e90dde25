// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use std::collections::HashMap;

use qn908x::memory_map::{self, Peripheral, PERIPHERALS, REGIONS};
use qn908x::{adc, ctimer, dma, flexcomm, gpio, i2c, sct, spi, syscon, usart, usb};

#[test]
fn pinned_base_addresses() {
    assert_eq!(syscon::SYSCON_BASE_ADDR, 0x4000_0000);
    assert_eq!(adc::ADC_BASE_ADDR, 0x4000_7000);
    assert_eq!(gpio::GPIOA_BASE_ADDR, 0x4008_C000);
    assert_eq!(usb::USB0_BASE_ADDR, 0x4008_4000);
    assert_eq!(usb::USB0_BASE.addr(), usb::USB0_BASE_ADDR);
}

#[test]
fn i2c0_shares_flexcomm1() {
    assert_eq!(i2c::I2C0_BASE_ADDR, flexcomm::FLEXCOMM1_BASE_ADDR);
    assert_eq!(i2c::I2C0_BASE.addr(), usart::USART1_BASE_ADDR);
    assert_eq!(
        memory_map::peripheral_at(i2c::I2C0_BASE_ADDR).map(|p| p.name),
        Some("FLEXCOMM1")
    );
    assert_eq!(
        memory_map::peripheral("I2C1").and_then(|p| p.alias_of),
        Some("FLEXCOMM2")
    );
}

#[test]
fn pinned_array_counts() {
    assert_eq!(ctimer::CTIMER_MR_COUNT, 4);
    assert_eq!(dma::DMA_CHANNEL_COUNT, 20);
    assert_eq!(sct::SCT_EVENT_COUNT, 10);
}

#[test]
fn only_flexcomm_functions_share_a_base() {
    let mut owners: HashMap<usize, &Peripheral> = HashMap::new();
    for p in PERIPHERALS.iter().filter(|p| !p.is_alias()) {
        assert!(owners.insert(p.base, p).is_none(), "{} collides", p);
        assert_eq!(p.base % memory_map::PERIPHERAL_WINDOW_SIZE, 0, "{}", p);
    }
    for p in PERIPHERALS.iter().filter(|p| p.is_alias()) {
        let owner = owners.get(&p.base).map(|o| o.name);
        assert_eq!(owner, p.alias_of, "{}", p);
        assert!(owner.is_some_and(|n| n.starts_with("FLEXCOMM")));
    }
}

#[test]
fn names_are_unique() {
    let mut names: Vec<&str> = PERIPHERALS.iter().map(|p| p.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), PERIPHERALS.len());
}

#[test]
fn every_peripheral_is_in_a_bus_region() {
    for p in PERIPHERALS {
        let region = memory_map::region_at(p.base).map(|r| r.name);
        assert!(matches!(region, Some("APB") | Some("AHB")), "{}", p);
    }
    assert_eq!(REGIONS.len(), 7);
}

#[test]
fn family_tables_agree_with_instances() {
    assert_eq!(
        ctimer::CTIMER_BASE_ADDRS,
        [
            ctimer::CTIMER0_BASE_ADDR,
            ctimer::CTIMER1_BASE_ADDR,
            ctimer::CTIMER2_BASE_ADDR,
            ctimer::CTIMER3_BASE_ADDR
        ]
    );
    for (addr, ptr) in ctimer::CTIMER_BASE_ADDRS.iter().zip(ctimer::CTIMER_BASE_PTRS) {
        assert_eq!(*addr, ptr.addr());
    }
    for (addr, ptr) in flexcomm::FLEXCOMM_BASE_ADDRS.iter().zip(flexcomm::FLEXCOMM_BASE_PTRS) {
        assert_eq!(*addr, ptr.addr());
    }
    assert_eq!(usart::USART_BASE_ADDRS, [0x4008_6000, 0x4008_7000]);
    assert_eq!(
        i2c::I2C_BASE_ADDRS,
        [flexcomm::FLEXCOMM1_BASE_ADDR, flexcomm::FLEXCOMM2_BASE_ADDR]
    );
    assert_eq!(spi::SPI0_BASE_ADDR, i2c::I2C1_BASE_ADDR);
    assert_eq!(
        spi::SPI_BASE_ADDRS,
        [flexcomm::FLEXCOMM2_BASE_ADDR, flexcomm::FLEXCOMM3_BASE_ADDR]
    );
}

#[test]
fn address_lookup() {
    assert_eq!(
        memory_map::peripheral_at(0x4000_7FFC).map(|p| p.name),
        Some("ADC")
    );
    assert_eq!(
        memory_map::peripheral_at(usart::USART1_BASE_ADDR).map(|p| p.name),
        Some("FLEXCOMM1")
    );
    assert_eq!(
        memory_map::region_at(0x2000_0010).map(|r| r.name),
        Some("SRAM_ALIAS")
    );
    assert_eq!(memory_map::FLASH.end(), 0x0108_0000);
}
