// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! State configurable timer (SCTimer/PWM).
//!
//! Each slot of the match/capture array is either a match register or a
//! capture register, depending on the matching bit of `REGMODE`. The overlay
//! stores the match view; [`SctRegisters::sctcap`] and
//! [`SctRegisters::sctcapctrl`] return the same slots typed for capture.

use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const SCT0_BASE_ADDR: usize = 0x4008_5000;

pub const SCT0_BASE: StaticRef<SctRegisters> =
    unsafe { StaticRef::new(SCT0_BASE_ADDR as *const SctRegisters) };

pub const SCT_IRQS: [Irqn; 1] = [Irqn::Sct0];

/// Match/capture register pairs.
pub const SCT_MATCH_COUNT: usize = 10;
/// Events.
pub const SCT_EVENT_COUNT: usize = 10;
/// Outputs.
pub const SCT_OUT_COUNT: usize = 6;
/// Inputs.
pub const SCT_IN_COUNT: usize = 8;

register_structs! {
    pub SctEventRegisters {
        /// States in which this event may occur.
        (0x000 => pub state: ReadWrite<u32, EV_STATE::Register>),
        /// Conditions that trigger this event and its effect on the state.
        (0x004 => pub ctrl: ReadWrite<u32, EV_CTRL::Register>),
        (0x008 => @END),
    }
}

register_structs! {
    pub SctOutRegisters {
        /// Events that set this output.
        (0x000 => pub set: ReadWrite<u32, EVENTS::Register>),
        /// Events that clear this output.
        (0x004 => pub clr: ReadWrite<u32, EVENTS::Register>),
        (0x008 => @END),
    }
}

register_structs! {
    /// SCTimer/PWM (SCT)
    pub SctRegisters {
        /// SCT configuration register.
        (0x000 => pub config: ReadWrite<u32, CONFIG::Register>),
        /// SCT control register.
        (0x004 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// SCT limit event select register.
        (0x008 => pub limit: ReadWrite<u32, EVENT_SEL::Register>),
        /// SCT halt event select register.
        (0x00C => pub halt: ReadWrite<u32, EVENT_SEL::Register>),
        /// SCT stop event select register.
        (0x010 => pub stop: ReadWrite<u32, EVENT_SEL::Register>),
        /// SCT start event select register.
        (0x014 => pub start: ReadWrite<u32, EVENT_SEL::Register>),
        (0x018 => _reserved0),
        /// SCT counter register.
        (0x040 => pub count: ReadWrite<u32, COUNT::Register>),
        /// SCT state register.
        (0x044 => pub state: ReadWrite<u32, STATE::Register>),
        /// SCT input register.
        (0x048 => pub input: ReadOnly<u32, INPUT::Register>),
        /// SCT match/capture mode register.
        (0x04C => pub regmode: ReadWrite<u32, REGMODE::Register>),
        /// SCT output register.
        (0x050 => pub output: ReadWrite<u32, OUTPUT::Register>),
        /// SCT output counter direction control register.
        (0x054 => pub outputdirctrl: ReadWrite<u32, OUTPUTDIRCTRL::Register>),
        /// SCT conflict resolution register.
        (0x058 => pub res: ReadWrite<u32, RES::Register>),
        /// SCT DMA request 0 register.
        (0x05C => pub dma0request: ReadWrite<u32, DMAREQUEST::Register>),
        /// SCT DMA request 1 register.
        (0x060 => pub dma1request: ReadWrite<u32, DMAREQUEST::Register>),
        (0x064 => _reserved1),
        /// SCT event interrupt enable register.
        (0x0F0 => pub even: ReadWrite<u32, EVENTS::Register>),
        /// SCT event flag register.
        (0x0F4 => pub evflag: ReadWrite<u32, EVENTS::Register>),
        /// SCT conflict interrupt enable register.
        (0x0F8 => pub conen: ReadWrite<u32, CONEN::Register>),
        /// SCT conflict flag register.
        (0x0FC => pub conflag: ReadWrite<u32, CONFLAG::Register>),
        /// SCT match value register, or capture register in capture mode.
        (0x100 => pub sctmatch: [ReadWrite<u32, SCTMATCH::Register>; SCT_MATCH_COUNT]),
        (0x128 => _reserved2),
        /// SCT match reload value register, or capture control register in
        /// capture mode.
        (0x200 => pub sctmatchrel: [ReadWrite<u32, SCTMATCHREL::Register>; SCT_MATCH_COUNT]),
        (0x228 => _reserved3),
        (0x300 => pub event: [SctEventRegisters; SCT_EVENT_COUNT]),
        (0x350 => _reserved4),
        (0x500 => pub out: [SctOutRegisters; SCT_OUT_COUNT]),
        (0x530 => @END),
    }
}

impl SctRegisters {
    /// The match/capture slots viewed as capture registers.
    pub fn sctcap(&self) -> &[ReadWrite<u32, SCTCAP::Register>; SCT_MATCH_COUNT] {
        let slots: *const [ReadWrite<u32, SCTMATCH::Register>; SCT_MATCH_COUNT] = &self.sctmatch;
        // ReadWrite is a transparent wrapper around the register word, the
        // register description only changes how fields are named.
        unsafe { &*slots.cast() }
    }

    /// The match reload slots viewed as capture control registers.
    pub fn sctcapctrl(&self) -> &[ReadWrite<u32, SCTCAPCTRL::Register>; SCT_MATCH_COUNT] {
        let slots: *const [ReadWrite<u32, SCTMATCHREL::Register>; SCT_MATCH_COUNT] =
            &self.sctmatchrel;
        unsafe { &*slots.cast() }
    }
}

register_bitfields![u32,
pub CONFIG [
    /// Operate the counter as one 32 bit counter instead of two 16 bit ones.
    UNIFY OFFSET(0) NUMBITS(1) [],
    CLKMODE OFFSET(1) NUMBITS(2) [
        SystemClock = 0,
        SampledSystemClock = 1,
        SctInput = 2,
        AsyncSctInput = 3
    ],
    /// Input or edge selected as clock by `CLKMODE`.
    CKSEL OFFSET(3) NUMBITS(4) [],
    NORELOAD_L OFFSET(7) NUMBITS(1) [],
    NORELOAD_H OFFSET(8) NUMBITS(1) [],
    /// Synchronization of inputs, one bit per input.
    INSYNC OFFSET(9) NUMBITS(8) [],
    AUTOLIMIT_L OFFSET(17) NUMBITS(1) [],
    AUTOLIMIT_H OFFSET(18) NUMBITS(1) []
],
pub CTRL [
    DOWN_L OFFSET(0) NUMBITS(1) [],
    STOP_L OFFSET(1) NUMBITS(1) [],
    HALT_L OFFSET(2) NUMBITS(1) [],
    CLRCTR_L OFFSET(3) NUMBITS(1) [],
    BIDIR_L OFFSET(4) NUMBITS(1) [
        Up = 0,
        UpDown = 1
    ],
    /// Prescaler minus one.
    PRE_L OFFSET(5) NUMBITS(8) [],
    DOWN_H OFFSET(16) NUMBITS(1) [],
    STOP_H OFFSET(17) NUMBITS(1) [],
    HALT_H OFFSET(18) NUMBITS(1) [],
    CLRCTR_H OFFSET(19) NUMBITS(1) [],
    BIDIR_H OFFSET(20) NUMBITS(1) [
        Up = 0,
        UpDown = 1
    ],
    PRE_H OFFSET(21) NUMBITS(8) []
],
/// LIMIT, HALT, STOP and START: events acting on each counter half.
pub EVENT_SEL [
    EVENTS_L OFFSET(0) NUMBITS(16) [],
    EVENTS_H OFFSET(16) NUMBITS(16) []
],
pub COUNT [
    CTR_L OFFSET(0) NUMBITS(16) [],
    CTR_H OFFSET(16) NUMBITS(16) []
],
pub STATE [
    STATE_L OFFSET(0) NUMBITS(5) [],
    STATE_H OFFSET(16) NUMBITS(5) []
],
pub INPUT [
    /// Input state, unsynchronized.
    AIN OFFSET(0) NUMBITS(8) [],
    /// Input state, as synchronized by `INSYNC`.
    SIN OFFSET(16) NUMBITS(8) []
],
pub REGMODE [
    /// 1 selects capture for the slot, per slot.
    REGMOD_L OFFSET(0) NUMBITS(16) [],
    REGMOD_H OFFSET(16) NUMBITS(16) []
],
pub OUTPUT [
    OUT OFFSET(0) NUMBITS(16) []
],
pub OUTPUTDIRCTRL [
    SETCLR0 OFFSET(0) NUMBITS(2) [
        Independent = 0,
        ReverseWhenLDown = 1,
        ReverseWhenHDown = 2
    ],
    SETCLR1 OFFSET(2) NUMBITS(2) [],
    SETCLR2 OFFSET(4) NUMBITS(2) [],
    SETCLR3 OFFSET(6) NUMBITS(2) [],
    SETCLR4 OFFSET(8) NUMBITS(2) [],
    SETCLR5 OFFSET(10) NUMBITS(2) []
],
pub RES [
    O0RES OFFSET(0) NUMBITS(2) [
        NoChange = 0,
        Set = 1,
        Clear = 2,
        Toggle = 3
    ],
    O1RES OFFSET(2) NUMBITS(2) [],
    O2RES OFFSET(4) NUMBITS(2) [],
    O3RES OFFSET(6) NUMBITS(2) [],
    O4RES OFFSET(8) NUMBITS(2) [],
    O5RES OFFSET(10) NUMBITS(2) []
],
pub DMAREQUEST [
    /// Events that trigger the request.
    DEV OFFSET(0) NUMBITS(16) [],
    /// Request when match registers reload.
    DRL OFFSET(30) NUMBITS(1) [],
    /// Request state. Read-only.
    DRQ OFFSET(31) NUMBITS(1) []
],
/// EVEN, EVFLAG and the output SET/CLR registers: one bit per event.
pub EVENTS [
    EVENT OFFSET(0) NUMBITS(16) []
],
pub CONEN [
    NCEN OFFSET(0) NUMBITS(16) []
],
pub CONFLAG [
    NCFLAG OFFSET(0) NUMBITS(16) [],
    BUSERRL OFFSET(30) NUMBITS(1) [],
    BUSERRH OFFSET(31) NUMBITS(1) []
],
pub SCTMATCH [
    MATCHN_L OFFSET(0) NUMBITS(16) [],
    MATCHN_H OFFSET(16) NUMBITS(16) []
],
pub SCTCAP [
    CAPN_L OFFSET(0) NUMBITS(16) [],
    CAPN_H OFFSET(16) NUMBITS(16) []
],
pub SCTMATCHREL [
    RELOADN_L OFFSET(0) NUMBITS(16) [],
    RELOADN_H OFFSET(16) NUMBITS(16) []
],
pub SCTCAPCTRL [
    /// Events that load this capture register.
    CAPCONN_L OFFSET(0) NUMBITS(16) [],
    CAPCONN_H OFFSET(16) NUMBITS(16) []
],
pub EV_STATE [
    STATEMSKN OFFSET(0) NUMBITS(16) []
],
pub EV_CTRL [
    /// Match register associated with this event.
    MATCHSEL OFFSET(0) NUMBITS(4) [],
    /// Event belongs to the high counter.
    HEVENT OFFSET(4) NUMBITS(1) [],
    /// `IOSEL` selects an output instead of an input.
    OUTSEL OFFSET(5) NUMBITS(1) [],
    IOSEL OFFSET(6) NUMBITS(4) [],
    IOCOND OFFSET(10) NUMBITS(2) [
        Low = 0,
        Rise = 1,
        Fall = 2,
        High = 3
    ],
    COMBMODE OFFSET(12) NUMBITS(2) [
        Or = 0,
        Match = 1,
        Io = 2,
        And = 3
    ],
    /// `STATEV` is loaded into the state instead of added to it.
    STATELD OFFSET(14) NUMBITS(1) [],
    STATEV OFFSET(15) NUMBITS(5) [],
    MATCHMEM OFFSET(20) NUMBITS(1) [],
    DIRECTION OFFSET(21) NUMBITS(2) [
        Independent = 0,
        CountingUp = 1,
        CountingDown = 2
    ]
]
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};

    #[test]
    fn event_on_match_only() {
        let ctrl = EV_CTRL::MATCHSEL.val(3) + EV_CTRL::COMBMODE::Match + EV_CTRL::STATELD::SET;
        assert_eq!(ctrl.value, 0x5003);
    }

    #[test]
    fn capture_view_aliases_match_slots() {
        let mut words = vec![0u32; core::mem::size_of::<SctRegisters>() / 4];
        let sct = unsafe { &*(words.as_mut_ptr() as *const SctRegisters) };

        sct.sctcap()[4].write(SCTCAP::CAPN_L.val(0x1234) + SCTCAP::CAPN_H.val(0xABCD));
        assert_eq!(sct.sctmatch[4].get(), 0xABCD_1234);
        assert_eq!(sct.sctmatch[4].read(SCTMATCH::MATCHN_H), 0xABCD);

        sct.sctmatchrel[9].set(0x8000);
        assert_eq!(sct.sctcapctrl()[9].read(SCTCAPCTRL::CAPCONN_L), 0x8000);
    }
}
