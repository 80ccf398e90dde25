// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Flash controller.
//!
//! The 512 KiB array is split in a lower (`L`) and an upper (`H`) 256 KiB
//! block with independent erase and program engines, so most control and
//! status bits come in pairs.

use crate::interrupts::Irqn;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

pub const FLASH_BASE_ADDR: usize = 0x4008_1000;

pub const FLASH_BASE: StaticRef<FlashRegisters> =
    unsafe { StaticRef::new(FLASH_BASE_ADDR as *const FlashRegisters) };

pub const FLASH_IRQS: [Irqn; 1] = [Irqn::Flash];

/// Erase granularity in bytes.
pub const FLASH_PAGE_SIZE: usize = 2048;
/// Number of pages across both blocks.
pub const FLASH_PAGE_COUNT: usize = 256;
/// Number of page lock status words (one bit per page).
pub const FLASH_LOCK_STAT_COUNT: usize = FLASH_PAGE_COUNT / 32;

register_structs! {
    /// Flash controller
    pub FlashRegisters {
        /// Start the initial read of the information page.
        (0x000 => pub ini_rd_en: ReadWrite<u32, INI_RD_EN::Register>),
        /// Erase control.
        (0x004 => pub erase_ctrl: ReadWrite<u32, ERASE_CTRL::Register>),
        /// Erase timing.
        (0x008 => pub erase_time: ReadWrite<u32, ERASE_TIME::Register>),
        /// Program timing.
        (0x00C => pub time_ctrl: ReadWrite<u32, TIME_CTRL::Register>),
        /// Smart (verify and retry) write and erase control.
        (0x010 => pub smart_ctrl: ReadWrite<u32, SMART_CTRL::Register>),
        /// Interrupt enable.
        (0x014 => pub inten: ReadWrite<u32, INT::Register>),
        /// Interrupt status.
        (0x018 => pub int_stat: ReadOnly<u32, INT::Register>),
        /// Interrupt clear. Write 1 to clear.
        (0x01C => pub int_clr: WriteOnly<u32, INT::Register>),
        /// Page lock status, one bit per page.
        (0x020 => pub lock_stat: [ReadOnly<u32>; FLASH_LOCK_STAT_COUNT]),
        /// Block level lock status.
        (0x040 => pub lock_stat8: ReadOnly<u32, LOCK_STAT8::Register>),
        /// Engine busy and init status.
        (0x044 => pub status1: ReadOnly<u32, STATUS1::Register>),
        /// Mass erase password.
        (0x048 => pub erase_password: WriteOnly<u32>),
        /// Debug access password.
        (0x04C => pub debug_password: WriteOnly<u32>),
        (0x050 => @END),
    }
}

register_bitfields![u32,
pub INI_RD_EN [
    /// Trigger the information page read. Self clearing.
    INI_RD_EN OFFSET(0) NUMBITS(1) []
],
pub ERASE_CTRL [
    /// Page index in the lower block.
    PAGE_IDXL OFFSET(0) NUMBITS(7) [],
    /// Page index in the upper block.
    PAGE_IDXH OFFSET(8) NUMBITS(7) [],
    /// Erase page PAGE_IDXL of the lower block.
    PAGE_ERASEL_EN OFFSET(24) NUMBITS(1) [],
    /// Erase page PAGE_IDXH of the upper block.
    PAGE_ERASEH_EN OFFSET(25) NUMBITS(1) [],
    /// Erase the whole lower block.
    HALF_ERASEL_EN OFFSET(26) NUMBITS(1) [],
    /// Erase the whole upper block.
    HALF_ERASEH_EN OFFSET(27) NUMBITS(1) [],
    /// Erase both blocks and the information page.
    MASS_ERASE_EN OFFSET(28) NUMBITS(1) []
],
pub ERASE_TIME [
    /// Erase time in TIME_BASE units.
    ERASE_TIME OFFSET(0) NUMBITS(12) [],
    /// Erase recovery time.
    ERASE_RCV OFFSET(16) NUMBITS(8) []
],
pub TIME_CTRL [
    /// Program pulse width in AHB clocks.
    PRGM_CYCLE OFFSET(0) NUMBITS(12) [],
    /// Number of AHB clocks in 1 us.
    TIME_BASE OFFSET(12) NUMBITS(8) []
],
pub SMART_CTRL [
    /// Program enable for the lower block.
    PRGML_EN OFFSET(0) NUMBITS(1) [],
    /// Program enable for the upper block.
    PRGMH_EN OFFSET(1) NUMBITS(1) [],
    /// Verify and retry writes to the lower block.
    SMART_WRITEL_EN OFFSET(2) NUMBITS(1) [],
    /// Verify and retry writes to the upper block.
    SMART_WRITEH_EN OFFSET(3) NUMBITS(1) [],
    /// Verify and retry erases of the lower block.
    SMART_ERASEL_EN OFFSET(4) NUMBITS(1) [],
    /// Verify and retry erases of the upper block.
    SMART_ERASEH_EN OFFSET(5) NUMBITS(1) [],
    /// Maximum write retries.
    MAX_WRITE OFFSET(8) NUMBITS(4) [],
    /// Maximum erase retries.
    MAX_ERASE OFFSET(16) NUMBITS(6) []
],
pub INT [
    /// Illegal AHB access to the lower block.
    AHBL_INT OFFSET(0) NUMBITS(1) [],
    /// Write or erase of a locked page in the lower block.
    LOCKL_INT OFFSET(1) NUMBITS(1) [],
    /// Erase of the lower block finished.
    ERASEL_INT OFFSET(2) NUMBITS(1) [],
    /// Write to the lower block finished.
    WRITEL_INT OFFSET(3) NUMBITS(1) [],
    /// Lower block write buffer has room.
    WR_BUFL_INT OFFSET(4) NUMBITS(1) [],
    /// Smart write to the lower block failed.
    WRITE_FAIL_L_INT OFFSET(5) NUMBITS(1) [],
    /// Smart erase of the lower block failed.
    ERASE_FAIL_L_INT OFFSET(6) NUMBITS(1) [],
    /// Illegal AHB access to the upper block.
    AHBH_INT OFFSET(8) NUMBITS(1) [],
    /// Write or erase of a locked page in the upper block.
    LOCKH_INT OFFSET(9) NUMBITS(1) [],
    /// Erase of the upper block finished.
    ERASEH_INT OFFSET(10) NUMBITS(1) [],
    /// Write to the upper block finished.
    WRITEH_INT OFFSET(11) NUMBITS(1) [],
    /// Upper block write buffer has room.
    WR_BUFH_INT OFFSET(12) NUMBITS(1) [],
    /// Smart write to the upper block failed.
    WRITE_FAIL_H_INT OFFSET(13) NUMBITS(1) [],
    /// Smart erase of the upper block failed.
    ERASE_FAIL_H_INT OFFSET(14) NUMBITS(1) []
],
pub LOCK_STAT8 [
    /// Mass erase is locked.
    MASS_ERASE_LOCK OFFSET(0) NUMBITS(1) [],
    /// Lower block erase is locked.
    FSH_PROTECT_L OFFSET(1) NUMBITS(1) [],
    /// Upper block erase is locked.
    FSH_PROTECT_H OFFSET(2) NUMBITS(1) [],
    /// Memory reads through the debugger are locked.
    MEM_PROTECT OFFSET(3) NUMBITS(1) [],
    /// The information page is locked.
    INFO_PROTECT OFFSET(4) NUMBITS(1) [],
    /// The debug port is disabled.
    DBG_PROTECT OFFSET(5) NUMBITS(1) []
],
pub STATUS1 [
    /// Lower block erase in progress.
    FSH_ERA_BUSY_L OFFSET(0) NUMBITS(1) [],
    /// Lower block write in progress.
    FSH_WR_BUSY_L OFFSET(1) NUMBITS(1) [],
    /// Information page read finished.
    INI_RD_DONE OFFSET(2) NUMBITS(1) [],
    /// Upper block erase in progress.
    FSH_ERA_BUSY_H OFFSET(3) NUMBITS(1) [],
    /// Upper block write in progress.
    FSH_WR_BUSY_H OFFSET(4) NUMBITS(1) [],
    /// Both blocks are idle.
    FSH_STA OFFSET(26) NUMBITS(1) []
]
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_words_cover_every_page() {
        assert_eq!(FLASH_LOCK_STAT_COUNT * 32, FLASH_PAGE_COUNT);
        assert_eq!(FLASH_PAGE_COUNT * FLASH_PAGE_SIZE, 512 * 1024);
    }

    #[test]
    fn upper_block_bits_mirror_lower_block() {
        assert_eq!(INT::ERASEH_INT.shift, INT::ERASEL_INT.shift + 8);
        assert_eq!(INT::WRITE_FAIL_H_INT.shift, INT::WRITE_FAIL_L_INT.shift + 8);
    }
}
