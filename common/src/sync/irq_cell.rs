use core::{cell::UnsafeCell, marker::PhantomData};

use super::irq::{self, IrqControl};

/// Interrupt-masked cell.
///
/// Every access runs with interrupts disabled, so a value read or written
/// here can never be observed half-updated by a handler preempting the
/// access. On single-core targets without pointer-width atomics (AVR has
/// 8-bit atomics only) this is the replacement for an atomic cell.
///
/// Not a lock: with interrupts masked on a single core there is no other
/// context left to contend with, so there is nothing to spin on.
pub struct IrqCell<T, I: IrqControl> {
    data: UnsafeCell<T>,
    _irq: PhantomData<I>, // Prevent unused type parameter warning
}

// SAFETY: all access happens inside an interrupt-disabled section on a
// single-core target, so no two contexts touch `data` concurrently.
unsafe impl<T: Send, I: IrqControl> Send for IrqCell<T, I> {}
unsafe impl<T: Send, I: IrqControl> Sync for IrqCell<T, I> {}

impl<T: Copy, I: IrqControl> IrqCell<T, I> {
    /// Create a new cell holding `data`.
    pub const fn new(data: T) -> Self {
        Self {
            data: UnsafeCell::new(data),
            _irq: PhantomData,
        }
    }

    /// Read the current value.
    pub fn get(&self) -> T {
        irq::with_disabled::<I, _, _>(|| {
            // SAFETY: interrupts are disabled for the duration of the read
            unsafe { *self.data.get() }
        })
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        irq::with_disabled::<I, _, _>(|| {
            // SAFETY: interrupts are disabled for the duration of the write
            unsafe { *self.data.get() = value }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::IrqCell;
    use crate::arch::host::irq::HostIrq;

    #[test]
    fn get_returns_last_set_value() {
        let cell: IrqCell<u32, HostIrq> = IrqCell::new(7);
        assert_eq!(cell.get(), 7);
        cell.set(42);
        assert_eq!(cell.get(), 42);
    }

    #[test]
    fn holds_optional_function_pointers() {
        fn nop() {}
        let cell: IrqCell<Option<fn()>, HostIrq> = IrqCell::new(None);
        assert!(cell.get().is_none());
        cell.set(Some(nop));
        assert!(cell.get().is_some());
        cell.set(None);
        assert!(cell.get().is_none());
    }
}
