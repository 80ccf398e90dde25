// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard counter/timers (CTIMER0 to 3).

use crate::errorcode::ErrorCode;
use crate::interrupts::Irqn;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const CTIMER0_BASE_ADDR: usize = 0x4000_3000;
pub const CTIMER1_BASE_ADDR: usize = 0x4000_4000;
pub const CTIMER2_BASE_ADDR: usize = 0x4000_5000;
pub const CTIMER3_BASE_ADDR: usize = 0x4000_6000;

pub const CTIMER0_BASE: StaticRef<CtimerRegisters> =
    unsafe { StaticRef::new(CTIMER0_BASE_ADDR as *const CtimerRegisters) };
pub const CTIMER1_BASE: StaticRef<CtimerRegisters> =
    unsafe { StaticRef::new(CTIMER1_BASE_ADDR as *const CtimerRegisters) };
pub const CTIMER2_BASE: StaticRef<CtimerRegisters> =
    unsafe { StaticRef::new(CTIMER2_BASE_ADDR as *const CtimerRegisters) };
pub const CTIMER3_BASE: StaticRef<CtimerRegisters> =
    unsafe { StaticRef::new(CTIMER3_BASE_ADDR as *const CtimerRegisters) };

pub const CTIMER_BASE_ADDRS: [usize; 4] = [
    CTIMER0_BASE_ADDR,
    CTIMER1_BASE_ADDR,
    CTIMER2_BASE_ADDR,
    CTIMER3_BASE_ADDR,
];
pub const CTIMER_BASE_PTRS: [StaticRef<CtimerRegisters>; 4] =
    [CTIMER0_BASE, CTIMER1_BASE, CTIMER2_BASE, CTIMER3_BASE];
pub const CTIMER_IRQS: [Irqn; 4] = [Irqn::Ctimer0, Irqn::Ctimer1, Irqn::Ctimer2, Irqn::Ctimer3];

/// Number of match registers per timer.
pub const CTIMER_MR_COUNT: usize = 4;
/// Number of capture registers per timer.
pub const CTIMER_CR_COUNT: usize = 4;

register_structs! {
    /// Standard counter/timers (CTIMER0 to 3)
    pub CtimerRegisters {
        /// Interrupt Register. The IR can be written to clear interrupts. The IR can be rea
        (0x000 => pub ir: ReadWrite<u32, IR::Register>),
        /// Timer Control Register. The TCR is used to control the Timer Counter functions.
        (0x004 => pub tcr: ReadWrite<u32, TCR::Register>),
        /// Timer Counter
        (0x008 => pub tc: ReadWrite<u32, TC::Register>),
        /// Prescale Register
        (0x00C => pub pr: ReadWrite<u32, PR::Register>),
        /// Prescale Counter
        (0x010 => pub pc: ReadWrite<u32, PC::Register>),
        /// Match Control Register
        (0x014 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Match Register. MR can be enabled through the MCR to reset the TC, stop both the
        (0x018 => pub mr: [ReadWrite<u32, MR::Register>; CTIMER_MR_COUNT]),
        /// Capture Control Register. The CCR controls which edges of the capture inputs are
        (0x028 => pub ccr: ReadWrite<u32, CCR::Register>),
        /// Capture Register. CR is loaded with the value of TC when there is an event on th
        (0x02C => pub cr: [ReadOnly<u32, CR::Register>; CTIMER_CR_COUNT]),
        /// External Match Register. The EMR controls the match function and the external ma
        (0x03C => pub emr: ReadWrite<u32, EMR::Register>),
        (0x040 => _reserved0),
        /// Count Control Register. The CTCR selects between Timer and Counter mode, and in
        (0x070 => pub ctcr: ReadWrite<u32, CTCR::Register>),
        /// PWM Control Register. The PWMCON enables PWM mode for the external match pins.
        (0x074 => pub pwmc: ReadWrite<u32, PWMC::Register>),
        (0x078 => @END),
    }
}

register_bitfields![u32,
pub IR [
    /// Interrupt flag for match channel 0.
    MR0INT OFFSET(0) NUMBITS(1) [],
    /// Interrupt flag for match channel 1.
    MR1INT OFFSET(1) NUMBITS(1) [],
    /// Interrupt flag for match channel 2.
    MR2INT OFFSET(2) NUMBITS(1) [],
    /// Interrupt flag for match channel 3.
    MR3INT OFFSET(3) NUMBITS(1) [],
    /// Interrupt flag for capture channel 0 event.
    CR0INT OFFSET(4) NUMBITS(1) [],
    /// Interrupt flag for capture channel 1 event.
    CR1INT OFFSET(5) NUMBITS(1) [],
    /// Interrupt flag for capture channel 2 event.
    CR2INT OFFSET(6) NUMBITS(1) [],
    /// Interrupt flag for capture channel 3 event.
    CR3INT OFFSET(7) NUMBITS(1) []
],
pub TCR [
    /// Counter enable.
    CEN OFFSET(0) NUMBITS(1) [
        /// The counters are disabled.
        Disabled = 0,
        /// The Timer Counter and Prescale Counter are enabled.
        Enabled = 1
    ],
    /// Counter reset.
    CRST OFFSET(1) NUMBITS(1) [
        /// Do nothing.
        Disabled = 0,
        /// The Timer Counter and the Prescale Counter are synchronously reset on the next p
        Enabled = 1
    ]
],
pub TC [
    /// Timer counter value.
    TCVAL OFFSET(0) NUMBITS(32) []
],
pub PR [
    /// Prescale reload value.
    PRVAL OFFSET(0) NUMBITS(32) []
],
pub PC [
    /// Prescale counter value.
    PCVAL OFFSET(0) NUMBITS(32) []
],
pub MCR [
    /// Interrupt on MR0: an interrupt is generated when MR0 matches the value in the TC
    MR0I OFFSET(0) NUMBITS(1) [],
    /// Reset on MR0: the TC will be reset if MR0 matches it.
    MR0R OFFSET(1) NUMBITS(1) [],
    /// Stop on MR0: the TC and PC will be stopped and TCR[0] will be set to 0 if MR0 ma
    MR0S OFFSET(2) NUMBITS(1) [],
    /// Interrupt on MR1.
    MR1I OFFSET(3) NUMBITS(1) [],
    /// Reset on MR1.
    MR1R OFFSET(4) NUMBITS(1) [],
    /// Stop on MR1.
    MR1S OFFSET(5) NUMBITS(1) [],
    /// Interrupt on MR2.
    MR2I OFFSET(6) NUMBITS(1) [],
    /// Reset on MR2.
    MR2R OFFSET(7) NUMBITS(1) [],
    /// Stop on MR2.
    MR2S OFFSET(8) NUMBITS(1) [],
    /// Interrupt on MR3.
    MR3I OFFSET(9) NUMBITS(1) [],
    /// Reset on MR3.
    MR3R OFFSET(10) NUMBITS(1) [],
    /// Stop on MR3.
    MR3S OFFSET(11) NUMBITS(1) []
],
pub MR [
    /// Timer counter match value.
    MATCH OFFSET(0) NUMBITS(32) []
],
pub CCR [
    /// Rising edge of capture channel 0: a sequence of 0 then 1 causes CR0 to be loaded
    CAP0RE OFFSET(0) NUMBITS(1) [],
    /// Falling edge of capture channel 0: a sequence of 1 then 0 causes CR0 to be loade
    CAP0FE OFFSET(1) NUMBITS(1) [],
    /// Generate interrupt on channel 0 capture event: a CR0 load generates an interrupt
    CAP0I OFFSET(2) NUMBITS(1) [],
    /// Rising edge of capture channel 1.
    CAP1RE OFFSET(3) NUMBITS(1) [],
    /// Falling edge of capture channel 1.
    CAP1FE OFFSET(4) NUMBITS(1) [],
    /// Generate interrupt on channel 1 capture event.
    CAP1I OFFSET(5) NUMBITS(1) [],
    /// Rising edge of capture channel 2.
    CAP2RE OFFSET(6) NUMBITS(1) [],
    /// Falling edge of capture channel 2.
    CAP2FE OFFSET(7) NUMBITS(1) [],
    /// Generate interrupt on channel 2 capture event.
    CAP2I OFFSET(8) NUMBITS(1) [],
    /// Rising edge of capture channel 3.
    CAP3RE OFFSET(9) NUMBITS(1) [],
    /// Falling edge of capture channel 3.
    CAP3FE OFFSET(10) NUMBITS(1) [],
    /// Generate interrupt on channel 3 capture event.
    CAP3I OFFSET(11) NUMBITS(1) []
],
pub CR [
    /// Timer counter capture value.
    CAP OFFSET(0) NUMBITS(32) []
],
pub EMR [
    /// External Match 0. This bit reflects the state of output MAT0, whether or not thi
    EM0 OFFSET(0) NUMBITS(1) [],
    /// External Match 1.
    EM1 OFFSET(1) NUMBITS(1) [],
    /// External Match 2.
    EM2 OFFSET(2) NUMBITS(1) [],
    /// External Match 3.
    EM3 OFFSET(3) NUMBITS(1) [],
    /// External Match Control 0. Determines the functionality of External Match 0.
    EMC0 OFFSET(4) NUMBITS(2) [
        DoNothing = 0,
        Clear = 1,
        Set = 2,
        Toggle = 3
    ],
    /// External Match Control 1.
    EMC1 OFFSET(6) NUMBITS(2) [
        DoNothing = 0,
        Clear = 1,
        Set = 2,
        Toggle = 3
    ],
    /// External Match Control 2.
    EMC2 OFFSET(8) NUMBITS(2) [
        DoNothing = 0,
        Clear = 1,
        Set = 2,
        Toggle = 3
    ],
    /// External Match Control 3.
    EMC3 OFFSET(10) NUMBITS(2) [
        DoNothing = 0,
        Clear = 1,
        Set = 2,
        Toggle = 3
    ]
],
pub CTCR [
    /// Counter/Timer Mode. This field selects which rising APB bus clock edges can incr
    CTMODE OFFSET(0) NUMBITS(2) [
        /// Incremented every rising APB bus clock edge.
        Timer = 0,
        /// TC is incremented on rising edges on the CAP input selected by CINSEL.
        CounterRisingEdge = 1,
        /// TC is incremented on falling edges on the CAP input selected by CINSEL.
        CounterFallingEdge = 2,
        /// TC is incremented on both edges on the CAP input selected by CINSEL.
        CounterDualEdge = 3
    ],
    /// Count Input Select. When CTMODE is not Timer, selects which CAP pin is sampled f
    CINSEL OFFSET(2) NUMBITS(2) [
        Channel0 = 0,
        Channel1 = 1,
        Channel2 = 2,
        Channel3 = 3
    ],
    /// Setting this bit to 1 enables clearing of the timer and the prescaler when the c
    ENCC OFFSET(4) NUMBITS(1) [],
    /// Edge select. When ENCC is 1, selects which capture input edge will cause the tim
    SELCC OFFSET(5) NUMBITS(3) [
        Channel0Rising = 0,
        Channel0Falling = 1,
        Channel1Rising = 2,
        Channel1Falling = 3,
        Channel2Rising = 4,
        Channel2Falling = 5
    ]
],
pub PWMC [
    /// PWM mode enable for channel 0.
    PWMEN0 OFFSET(0) NUMBITS(1) [
        /// Match. CTIMERn_MAT0 is controlled by EM0.
        Match = 0,
        /// PWM. PWM mode is enabled for CTIMERn_MAT0.
        Pwm = 1
    ],
    /// PWM mode enable for channel 1.
    PWMEN1 OFFSET(1) NUMBITS(1) [
        Match = 0,
        Pwm = 1
    ],
    /// PWM mode enable for channel 2.
    PWMEN2 OFFSET(2) NUMBITS(1) [
        Match = 0,
        Pwm = 1
    ],
    /// PWM mode enable for channel 3.
    PWMEN3 OFFSET(3) NUMBITS(1) [
        Match = 0,
        Pwm = 1
    ]
]
];

/// Register block of CTIMER `n`.
pub fn instance(n: usize) -> Result<StaticRef<CtimerRegisters>, ErrorCode> {
    CTIMER_BASE_PTRS.get(n).copied().ok_or(ErrorCode::INVAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::LocalRegisterCopy;

    #[test]
    fn external_match_control_packs_per_channel() {
        let emr = EMR::EMC0::Toggle + EMR::EMC3::Set;
        assert_eq!(emr.value, (3 << 4) | (2 << 10));

        let word: LocalRegisterCopy<u32, EMR::Register> = LocalRegisterCopy::new(0x0000_0830);
        assert_eq!(word.read(EMR::EMC0), 3);
        assert_eq!(word.read(EMR::EMC3), 2);
    }

    #[test]
    fn match_interrupt_bits_follow_channel_order() {
        assert_eq!(MCR::MR3S.mask << MCR::MR3S.shift, 1 << 11);
        assert_eq!(IR::CR3INT.shift, 7);
    }

    #[test]
    fn instance_lookup_stops_after_last_timer() {
        assert!(instance(3).is_ok());
        assert_eq!(instance(CTIMER_BASE_ADDRS.len()).err(), Some(ErrorCode::INVAL));
    }
}
