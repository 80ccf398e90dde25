// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use qn908x::interrupts::{self, Irqn, DEVICE_IRQ_COUNT, DEVICE_VECTORS, NUMBER_OF_INT_VECTORS};
use qn908x::ErrorCode;

#[test]
fn table_sizes() {
    assert_eq!(DEVICE_IRQ_COUNT, 68);
    assert_eq!(NUMBER_OF_INT_VECTORS, 84);
    assert_eq!(DEVICE_VECTORS.len(), DEVICE_IRQ_COUNT);
}

#[test]
fn every_variant_round_trips() {
    for irq in Irqn::ALL {
        assert_eq!(Irqn::try_from(irq.number()), Ok(irq), "{}", irq);
        assert_eq!(i16::from(irq), irq.number());
        assert!(irq.vector_slot() < NUMBER_OF_INT_VECTORS);
        assert!(irq.name().ends_with("_IRQn"));
    }
}

#[test]
fn device_table_matches_numbers() {
    for (slot, entry) in DEVICE_VECTORS.iter().enumerate() {
        match entry {
            Some(irq) => assert_eq!(irq.number() as usize, slot),
            None => assert_eq!(Irqn::try_from(slot as i16), Err(ErrorCode::RESERVED)),
        }
    }
    let used = DEVICE_VECTORS.iter().filter(|v| v.is_some()).count();
    let core = Irqn::ALL.iter().filter(|i| i.is_core_exception()).count();
    assert_eq!(used + core, Irqn::ALL.len());
    assert_eq!(core, 9);
}

#[test]
fn plain_number_aliases() {
    assert_eq!(interrupts::FLASH, Irqn::Flash.number() as u32);
    assert_eq!(interrupts::GPIOA, 9);
    assert_eq!(interrupts::BOD, 51);
    assert_eq!(interrupts::USB0, Irqn::Usb0.number() as u32);
}

#[test]
fn display_includes_number() {
    assert_eq!(format!("{}", Irqn::Flash), "FLASH_IRQn (34)");
    assert_eq!(format!("{}", Irqn::HardFault), "HardFault_IRQn (-13)");
}

#[test]
fn family_tables_use_their_vectors() {
    use qn908x::{ctimer, flexcomm, gpio, qdec};
    assert_eq!(ctimer::CTIMER_IRQS[2], Irqn::Ctimer2);
    assert_eq!(flexcomm::FLEXCOMM_IRQS[3].number(), 21);
    assert_eq!(gpio::GPIO_IRQS, [Irqn::GpioA, Irqn::GpioB]);
    assert_eq!(qdec::QDEC_IRQS[1].name(), "QDEC1_IRQn");
}
