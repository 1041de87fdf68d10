use crate::sync::irq::IrqControl;

/// Status register, data-space address.
const SREG: *mut u8 = 0x5F as *mut u8;

/// Global interrupt enable bit within SREG.
const SREG_I_BIT: u8 = 1 << 7;

pub struct AvrIrq;

/// Implementation of interrupt control for AVR.
///
/// # State Management
/// The `State` type is `bool`, representing the previous I bit state.
///
/// # Methods
///
/// - `disable()`: saves SREG, executes `cli`, and returns whether the
///   global interrupt flag was set.
/// - `restore(prev_enabled: bool)`: executes `sei` only if the flag was
///   set on entry, so nested sections stay masked until the outermost
///   one ends.
impl IrqControl for AvrIrq {
    type State = bool;

    #[inline(always)]
    fn disable() -> bool {
        // Save current SREG and disable interrupts
        let sreg = unsafe { core::ptr::read_volatile(SREG) };
        unsafe {
            core::arch::asm!("cli", options(nomem, nostack));
        }
        sreg & SREG_I_BIT != 0 // Return true if interrupts were previously enabled
    }

    #[inline(always)]
    fn restore(prev_enabled: bool) {
        if prev_enabled {
            unsafe {
                core::arch::asm!("sei", options(nomem, nostack));
            }
        }
    }
}
