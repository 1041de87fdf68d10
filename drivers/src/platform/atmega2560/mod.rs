//! ATmega2560 External Interrupt Bindings
//!
//! The ATmega2560 has eight external interrupt lines. INT0-INT3 carry
//! their trigger fields in EICRA, INT4-INT7 in EICRB; enable and flag
//! bits for all eight live in EIMSK/EIFR at the line's index.

#[cfg(target_arch = "avr")]
use crate::hal::interrupt::ExternalInterrupt;
use crate::peripheral::exint::ExtIntLine;

/// External interrupt control register A (ISC0-ISC3 fields).
pub const EICRA: *mut u8 = 0x69 as *mut u8;
/// External interrupt control register B (ISC4-ISC7 fields).
pub const EICRB: *mut u8 = 0x6A as *mut u8;
/// External interrupt mask register (INT0-INT7 enable bits).
pub const EIMSK: *mut u8 = 0x3D as *mut u8;
/// External interrupt flag register (INTF0-INTF7, write-1-to-clear).
pub const EIFR: *mut u8 = 0x3C as *mut u8;

/// Trigger-mode field for line `n` within its control register.
const fn isc_mask(n: u8) -> u8 {
    0b11 << ((n % 4) * 2)
}

/// The INT0 line (pin PD0).
// SAFETY: datasheet addresses and bit positions; sole instance per line,
// here and below.
pub static EXT_INT0: ExtIntLine =
    unsafe { ExtIntLine::new(EICRA, EIMSK, EIFR, 0, 0, isc_mask(0)) };

/// The INT1 line (pin PD1).
pub static EXT_INT1: ExtIntLine =
    unsafe { ExtIntLine::new(EICRA, EIMSK, EIFR, 1, 1, isc_mask(1)) };

/// The INT2 line (pin PD2).
pub static EXT_INT2: ExtIntLine =
    unsafe { ExtIntLine::new(EICRA, EIMSK, EIFR, 2, 2, isc_mask(2)) };

/// The INT3 line (pin PD3).
pub static EXT_INT3: ExtIntLine =
    unsafe { ExtIntLine::new(EICRA, EIMSK, EIFR, 3, 3, isc_mask(3)) };

/// The INT4 line (pin PE4).
pub static EXT_INT4: ExtIntLine =
    unsafe { ExtIntLine::new(EICRB, EIMSK, EIFR, 4, 4, isc_mask(4)) };

/// The INT5 line (pin PE5).
pub static EXT_INT5: ExtIntLine =
    unsafe { ExtIntLine::new(EICRB, EIMSK, EIFR, 5, 5, isc_mask(5)) };

/// The INT6 line (pin PE6).
pub static EXT_INT6: ExtIntLine =
    unsafe { ExtIntLine::new(EICRB, EIMSK, EIFR, 6, 6, isc_mask(6)) };

/// The INT7 line (pin PE7).
pub static EXT_INT7: ExtIntLine =
    unsafe { ExtIntLine::new(EICRB, EIMSK, EIFR, 7, 7, isc_mask(7)) };

// Interrupt vector entry points, one per line, forwarding to dispatch.

#[cfg(target_arch = "avr")]
#[unsafe(no_mangle)]
pub unsafe extern "avr-interrupt" fn __vector_1() {
    EXT_INT0.dispatch();
}

#[cfg(target_arch = "avr")]
#[unsafe(no_mangle)]
pub unsafe extern "avr-interrupt" fn __vector_2() {
    EXT_INT1.dispatch();
}

#[cfg(target_arch = "avr")]
#[unsafe(no_mangle)]
pub unsafe extern "avr-interrupt" fn __vector_3() {
    EXT_INT2.dispatch();
}

#[cfg(target_arch = "avr")]
#[unsafe(no_mangle)]
pub unsafe extern "avr-interrupt" fn __vector_4() {
    EXT_INT3.dispatch();
}

#[cfg(target_arch = "avr")]
#[unsafe(no_mangle)]
pub unsafe extern "avr-interrupt" fn __vector_5() {
    EXT_INT4.dispatch();
}

#[cfg(target_arch = "avr")]
#[unsafe(no_mangle)]
pub unsafe extern "avr-interrupt" fn __vector_6() {
    EXT_INT5.dispatch();
}

#[cfg(target_arch = "avr")]
#[unsafe(no_mangle)]
pub unsafe extern "avr-interrupt" fn __vector_7() {
    EXT_INT6.dispatch();
}

#[cfg(target_arch = "avr")]
#[unsafe(no_mangle)]
pub unsafe extern "avr-interrupt" fn __vector_8() {
    EXT_INT7.dispatch();
}
