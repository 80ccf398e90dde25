// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Register block sizes and offsets.
//!
//! Writable registers are located by laying the block over a zeroed buffer,
//! writing through the overlay and looking for the word that changed.
//! Read-only registers fall back to `offset_of!`.

use core::mem::{offset_of, size_of};

use qn908x::utilities::registers::interfaces::Writeable;
use qn908x::*;

/// Byte offset of the single word `write` touches in a `T`.
fn written_offset<T>(write: impl FnOnce(&T)) -> usize {
    assert_eq!(size_of::<T>() % 4, 0);
    let mut words = vec![0u32; size_of::<T>() / 4];
    let block = unsafe { &*(words.as_mut_ptr() as *const T) };
    write(block);
    let hits: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, w)| **w != 0)
        .map(|(i, _)| i * 4)
        .collect();
    assert_eq!(hits.len(), 1, "write touched {:?}", hits);
    hits[0]
}

#[test]
fn block_sizes() {
    assert_eq!(size_of::<adc::AdcRegisters>(), 0x030);
    assert_eq!(size_of::<agc::AgcRegisters>(), 0x014);
    assert_eq!(size_of::<bledp::BledpRegisters>(), 0x044);
    assert_eq!(size_of::<calib::CalibRegisters>(), 0x03C);
    assert_eq!(size_of::<crc::CrcRegisters>(), 0x00C);
    assert_eq!(size_of::<cs::CsRegisters>(), 0x028);
    assert_eq!(size_of::<ctimer::CtimerRegisters>(), 0x078);
    assert_eq!(size_of::<dac::DacRegisters>(), 0x018);
    assert_eq!(size_of::<dma::DmaCommonRegisters>(), 0x05C);
    assert_eq!(size_of::<dma::DmaChannelRegisters>(), 0x010);
    assert_eq!(size_of::<dma::DmaRegisters>(), 0x540);
    assert_eq!(size_of::<flash::FlashRegisters>(), 0x050);
    assert_eq!(size_of::<flexcomm::FlexcommRegisters>(), 0x1000);
    assert_eq!(size_of::<fsp::FspRegisters>(), 0x04C);
    assert_eq!(size_of::<gpio::GpioRegisters>(), 0xC00);
    assert_eq!(size_of::<i2c::I2cRegisters>(), 0x1000);
    assert_eq!(size_of::<qdec::QdecRegisters>(), 0x020);
    assert_eq!(size_of::<rng::RngRegisters>(), 0x010);
    assert_eq!(size_of::<rtc::RtcRegisters>(), 0x01C);
    assert_eq!(size_of::<sct::SctRegisters>(), 0x530);
    assert_eq!(size_of::<spi::SpiRegisters>(), 0x1000);
    assert_eq!(size_of::<spifi::SpifiRegisters>(), 0x020);
    assert_eq!(size_of::<syscon::SysconRegisters>(), 0x400);
    assert_eq!(size_of::<usart::UsartRegisters>(), 0x1000);
    assert_eq!(size_of::<usb::UsbRegisters>(), 0x114);
    assert_eq!(size_of::<wdt::WdtRegisters>(), 0xC04);
}

#[test]
fn every_block_fits_its_window() {
    assert!(size_of::<gpio::GpioRegisters>() <= memory_map::PERIPHERAL_WINDOW_SIZE);
    assert!(size_of::<wdt::WdtRegisters>() <= memory_map::PERIPHERAL_WINDOW_SIZE);
    assert!(size_of::<syscon::SysconRegisters>() <= memory_map::PERIPHERAL_WINDOW_SIZE);
    assert!(size_of::<dma::DmaRegisters>() <= memory_map::PERIPHERAL_WINDOW_SIZE);
}

#[test]
fn adc_offsets() {
    assert_eq!(written_offset(|r: &adc::AdcRegisters| r.ch_cfg.set(1)), 0x008);
    assert_eq!(written_offset(|r: &adc::AdcRegisters| r.cfg[3].set(1)), 0x018);
    assert_eq!(written_offset(|r: &adc::AdcRegisters| r.int.set(1)), 0x028);
    assert_eq!(offset_of!(adc::AdcRegisters, data), 0x02C);
}

#[test]
fn ctimer_match_and_capture_arrays() {
    assert_eq!(written_offset(|r: &ctimer::CtimerRegisters| r.mr[0].set(1)), 0x018);
    assert_eq!(written_offset(|r: &ctimer::CtimerRegisters| r.mr[3].set(1)), 0x024);
    assert_eq!(written_offset(|r: &ctimer::CtimerRegisters| r.ccr.set(1)), 0x028);
    assert_eq!(offset_of!(ctimer::CtimerRegisters, cr), 0x02C);
    assert_eq!(written_offset(|r: &ctimer::CtimerRegisters| r.pwmc.set(1)), 0x074);
}

#[test]
fn crc_sum_and_data_share_a_word() {
    assert_eq!(written_offset(|r: &crc::CrcRegisters| r.sum_wr_data.set(0xA5)), 0x008);
}

#[test]
fn dma_nested_blocks() {
    assert_eq!(written_offset(|r: &dma::DmaRegisters| r.srambase.set(0x200)), 0x008);
    assert_eq!(written_offset(|r: &dma::DmaRegisters| r.common[0].enableset.set(1)), 0x020);
    assert_eq!(written_offset(|r: &dma::DmaRegisters| r.common[0].abort.set(1)), 0x078);
    assert_eq!(written_offset(|r: &dma::DmaRegisters| r.channel[0].cfg.set(1)), 0x400);
    assert_eq!(written_offset(|r: &dma::DmaRegisters| r.channel[19].xfercfg.set(1)), 0x538);
}

#[test]
fn flash_passwords() {
    assert_eq!(offset_of!(flash::FlashRegisters, lock_stat), 0x020);
    assert_eq!(written_offset(|r: &flash::FlashRegisters| r.erase_password.set(1)), 0x048);
    assert_eq!(written_offset(|r: &flash::FlashRegisters| r.debug_password.set(1)), 0x04C);
}

#[test]
fn flexcomm_function_windows() {
    assert_eq!(written_offset(|r: &flexcomm::FlexcommRegisters| r.pselid.set(1)), 0xFF8);
    assert_eq!(written_offset(|r: &usart::UsartRegisters| r.brg.set(1)), 0x020);
    assert_eq!(written_offset(|r: &usart::UsartRegisters| r.fifowr.set(0x55)), 0xE20);
    assert_eq!(offset_of!(usart::UsartRegisters, fiford), 0xE30);
    assert_eq!(written_offset(|r: &spi::SpiRegisters| r.cfg.set(1)), 0x400);
    assert_eq!(written_offset(|r: &spi::SpiRegisters| r.div.set(1)), 0x424);
    assert_eq!(written_offset(|r: &spi::SpiRegisters| r.fifowr.set(1)), 0xE20);
    assert_eq!(written_offset(|r: &i2c::I2cRegisters| r.cfg.set(1)), 0x800);
    assert_eq!(written_offset(|r: &i2c::I2cRegisters| r.mstctl.set(1)), 0x820);
    assert_eq!(written_offset(|r: &i2c::I2cRegisters| r.slvadr[3].set(1)), 0x854);
    assert_eq!(written_offset(|r: &i2c::I2cRegisters| r.slvqual0.set(1)), 0x858);
    assert_eq!(offset_of!(i2c::I2cRegisters, monrxdat), 0x880);
    assert_eq!(offset_of!(i2c::I2cRegisters, id), 0xFFC);
}

#[test]
fn gpio_masked_access() {
    assert_eq!(written_offset(|r: &gpio::GpioRegisters| r.outenclr.set(1)), 0x014);
    assert_eq!(written_offset(|r: &gpio::GpioRegisters| r.intpolclr.set(1)), 0x034);
    assert_eq!(
        written_offset(|r: &gpio::GpioRegisters| r.intstatus_intclear.set(1)),
        0x038
    );
    assert_eq!(written_offset(|r: &gpio::GpioRegisters| r.masklowbyte[0].set(1)), 0x400);
    assert_eq!(written_offset(|r: &gpio::GpioRegisters| r.masklowbyte[255].set(1)), 0x7FC);
    assert_eq!(written_offset(|r: &gpio::GpioRegisters| r.maskhighbyte[0].set(1)), 0x800);
}

#[test]
fn sct_event_and_output_arrays() {
    assert_eq!(written_offset(|r: &sct::SctRegisters| r.regmode.set(1)), 0x04C);
    assert_eq!(written_offset(|r: &sct::SctRegisters| r.sctmatch[9].set(1)), 0x124);
    assert_eq!(written_offset(|r: &sct::SctRegisters| r.sctcap()[9].set(1)), 0x124);
    assert_eq!(written_offset(|r: &sct::SctRegisters| r.sctcapctrl()[0].set(1)), 0x200);
    assert_eq!(written_offset(|r: &sct::SctRegisters| r.event[9].ctrl.set(1)), 0x34C);
    assert_eq!(written_offset(|r: &sct::SctRegisters| r.out[5].clr.set(1)), 0x52C);
}

#[test]
fn syscon_pin_arrays() {
    assert_eq!(written_offset(|r: &syscon::SysconRegisters| r.fc_frg[3].set(1)), 0x024);
    assert_eq!(written_offset(|r: &syscon::SysconRegisters| r.pio_func_cfg[4].set(1)), 0x090);
    assert_eq!(written_offset(|r: &syscon::SysconRegisters| r.pio_pull_cfg[2].set(1)), 0x0A8);
    assert_eq!(written_offset(|r: &syscon::SysconRegisters| r.pio_drv_cfg[1].set(1)), 0x0B4);
    assert_eq!(written_offset(|r: &syscon::SysconRegisters| r.pio_wakeup_en1.set(1)), 0x0C4);
    assert_eq!(offset_of!(syscon::SysconRegisters, chip_id), 0x3FC);
}

#[test]
fn misc_offsets() {
    assert_eq!(written_offset(|r: &usb::UsbRegisters| r.ep_ctrl[4].set(1)), 0x024);
    assert_eq!(written_offset(|r: &usb::UsbRegisters| r.ep_data[4].set(1)), 0x110);
    assert_eq!(written_offset(|r: &wdt::WdtRegisters| r.lock.set(1)), 0xC00);
    assert_eq!(written_offset(|r: &spifi::SpifiRegisters| r.stat.set(1)), 0x01C);
    assert_eq!(written_offset(|r: &rtc::RtcRegisters| r.fr.set(1)), 0x014);
    assert_eq!(written_offset(|r: &qdec::QdecRegisters| r.rpt_per.set(1)), 0x010);
    assert_eq!(written_offset(|r: &fsp::FspRegisters| r.cordic_in[2].set(1)), 0x02C);
    assert_eq!(offset_of!(fsp::FspRegisters, stat_result), 0x03C);
    assert_eq!(written_offset(|r: &bledp::BledpRegisters| r.dp_test_ctrl.set(1)), 0x040);
    assert_eq!(written_offset(|r: &calib::CalibRegisters| r.start.set(1)), 0x000);
    assert_eq!(written_offset(|r: &cs::CsRegisters| r.lp_thr.set(1)), 0x014);
    assert_eq!(written_offset(|r: &dac::DacRegisters| r.data.set(1)), 0x00C);
    assert_eq!(offset_of!(agc::AgcRegisters, status), 0x010);
}
