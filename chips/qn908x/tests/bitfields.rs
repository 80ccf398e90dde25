// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Packing and unpacking laws for a sample of fields from every family.

use qn908x::utilities::registers::{Field, RegisterLongName};
use qn908x::*;

fn check<R: RegisterLongName>(field: Field<u32, R>, width: u32) {
    let mask = field.mask;
    assert_eq!(mask.count_ones(), width);
    assert_eq!(mask & (mask.wrapping_add(1)), 0, "mask {:#x} not contiguous", mask);
    assert!(field.shift as u32 + width <= 32);
    for x in [0, 1, 0x5555_5555, 0xAAAA_AAAA, u32::MAX] {
        let packed = field.val(x).value;
        assert_eq!(packed & !(mask << field.shift), 0);
        assert_eq!(field.read(packed), x & mask);
    }
}

#[test]
fn analog_and_radio() {
    check(adc::CTRL::CLKSEL, 5);
    check(adc::CH_CFG::CFG_CH0, 2);
    check(cs::CTRL1::AVG, 2);
    check(dac::CTRL::ENABLE, 1);
    check(calib::CTRL::BYPASS, 6);
    check(agc::CTRL3::GAIN_MAX, 5);
}

#[test]
fn timers() {
    check(ctimer::EMR::EMC3, 2);
    check(ctimer::CTCR::CTMODE, 2);
    check(sct::CTRL::PRE_H, 8);
    check(sct::EV_CTRL::STATEV, 5);
    check(qdec::CTRL::MODE, 2);
    check(rtc::CNT2::CNT2, 15);
    check(wdt::CTRL::RESEN, 1);
}

#[test]
fn serial() {
    check(flexcomm::PSELID::ID, 20);
    check(flexcomm::FIFOSTAT::RXLVL, 5);
    check(usart::CFG::PARITYSEL, 2);
    check(spi::FIFOWR::LEN, 4);
    check(i2c::STAT::MSTSTATE, 3);
    check(spifi::CMD::DATALEN, 14);
    check(usb::EP_CTRL::MAX_PKT, 7);
}

#[test]
fn system() {
    check(syscon::CLK_CTRL::AHB_DIV, 13);
    check(syscon::PMU::MEM, 8);
    check(syscon::CHIP_ID::ID, 32);
    check(gpio::PINS::PIN, 32);
    check(dma::XFERCFG::XFERCOUNT, 10);
    check(crc::MODE::CRC_POLY, 2);
    check(flash::ERASE_CTRL::PAGE_IDXH, 7);
}
