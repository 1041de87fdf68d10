//! ATmega328P External Interrupt Bindings
//!
//! Register addresses (data space) and bit positions are from the
//! ATmega328P datasheet. The two external interrupt lines share EICRA
//! for trigger control and EIMSK/EIFR for enable and flag bits.

#[cfg(target_arch = "avr")]
use crate::hal::interrupt::ExternalInterrupt;
use crate::peripheral::exint::ExtIntLine;

/// External interrupt control register A (ISCn1:ISCn0 fields).
pub const EICRA: *mut u8 = 0x69 as *mut u8;
/// External interrupt mask register (INTn enable bits).
pub const EIMSK: *mut u8 = 0x3D as *mut u8;
/// External interrupt flag register (INTFn bits, write-1-to-clear).
pub const EIFR: *mut u8 = 0x3C as *mut u8;

// Bit positions within EIMSK/EIFR (enable and flag share a position).
const INT0_BIT: u8 = 0;
const INT1_BIT: u8 = 1;

// Trigger-mode fields within EICRA.
const ISC0_MASK: u8 = 0b0000_0011;
const ISC1_MASK: u8 = 0b0000_1100;

/// The INT0 line (pin PD2).
// SAFETY: datasheet addresses and bit positions; sole instance for INT0.
pub static EXT_INT0: ExtIntLine =
    unsafe { ExtIntLine::new(EICRA, EIMSK, EIFR, INT0_BIT, INT0_BIT, ISC0_MASK) };

/// The INT1 line (pin PD3).
// SAFETY: datasheet addresses and bit positions; sole instance for INT1.
pub static EXT_INT1: ExtIntLine =
    unsafe { ExtIntLine::new(EICRA, EIMSK, EIFR, INT1_BIT, INT1_BIT, ISC1_MASK) };

// Interrupt vector entry points. The toolchain's vector table jumps here
// when a line is both flagged and enabled; each one only forwards to its
// line's dispatch.

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
