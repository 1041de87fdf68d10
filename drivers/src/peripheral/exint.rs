//! AVR External Interrupt (EXINT) Line Driver
//!
//! One generic driver serves every external interrupt line: a line is
//! fully described by three registers (trigger control, interrupt mask,
//! interrupt flag) and three bit identifiers within them. Platform code
//! instantiates one `ExtIntLine` per physical line as a `static` and
//! points the line's interrupt vector at [`ExtIntLine::dispatch`].
//!
//! # Example
//!
//! ```no_run
//! use drivers::hal::interrupt::TriggerMode;
//! use drivers::peripheral::exint::ExtIntLine;
//!
//! static LINE: ExtIntLine = unsafe {
//!     ExtIntLine::new(
//!         0x69 as *mut u8, // EICRA
//!         0x3D as *mut u8, // EIMSK
//!         0x3C as *mut u8, // EIFR
//!         1,               // INT1
//!         1,               // INTF1
//!         0b0000_1100,     // ISC11:ISC10
//!     )
//! };
//!
//! fn on_edge() {}
//!
//! LINE.arm(TriggerMode::FallingEdge, on_edge);
//! ```

use core::ptr::{read_volatile, write_volatile};

use common::arch::CurrentIrq;
use common::sync::IrqCell;

use crate::hal::interrupt::{ExternalInterrupt, Handler, TriggerMode};

/// Driver for one external interrupt line.
///
/// The three register bindings and three bit identifiers are fixed at
/// construction; the handler slot starts empty and is the only mutable
/// state. Instances live for the whole process: they are created at
/// startup and never destroyed.
pub struct ExtIntLine {
    /// Trigger control register (holds the sense-control field).
    control: *mut u8,
    /// Interrupt mask register (holds the enable bit).
    mask: *mut u8,
    /// Interrupt flag register (write-1-to-clear).
    flag: *mut u8,
    enable_bit: u8,
    flag_bit: u8,
    trigger_mask: u8,
    handler: IrqCell<Option<Handler>, CurrentIrq>,
}

// SAFETY: the register pointers are fixed MMIO locations owned by exactly
// one instance per line, and the handler slot is an interrupt-masked
// cell, so sharing a line between main and interrupt context is sound.
unsafe impl Send for ExtIntLine {}
unsafe impl Sync for ExtIntLine {}

impl ExtIntLine {
    /// Create a driver bound to one external interrupt line.
    ///
    /// Construction has no side effects; nothing is written to the
    /// hardware until an operation is called.
    ///
    /// # Safety
    ///
    /// - `control`, `mask` and `flag` must point to the line's trigger
    ///   control, interrupt mask and interrupt flag registers
    /// - `enable_bit`, `flag_bit` and `trigger_mask` must match the
    ///   datasheet for that line, and `trigger_mask` must be a non-empty
    ///   contiguous 2-bit field; the hardware effect of wrong values is
    ///   undefined and not caught in software
    /// - Only one instance may exist per physical line; duplicates would
    ///   race on the same registers
    pub const unsafe fn new(
        control: *mut u8,
        mask: *mut u8,
        flag: *mut u8,
        enable_bit: u8,
        flag_bit: u8,
        trigger_mask: u8,
    ) -> Self {
        Self {
            control,
            mask,
            flag,
            enable_bit,
            flag_bit,
            trigger_mask,
            handler: IrqCell::new(None),
        }
    }

    #[inline]
    fn read_reg(&self, reg: *mut u8) -> u8 {
        // SAFETY: `reg` is one of the register bindings the constructor
        // vouched for
        unsafe { read_volatile(reg) }
    }

    #[inline]
    fn write_reg(&self, reg: *mut u8, value: u8) {
        // SAFETY: as in `read_reg`
        unsafe { write_volatile(reg, value) }
    }

    /// Configure the trigger, install the handler, acknowledge anything
    /// already latched, and arm the line, in one call.
    ///
    /// The handler is installed before the enable bit is set, so the
    /// first dispatch can never observe an empty slot.
    pub fn arm(&self, mode: TriggerMode, handler: Handler) {
        self.set_trigger(mode);
        self.set_handler(handler);
        self.clear_pending();
        self.enable();
    }
}

impl ExternalInterrupt for ExtIntLine {
    fn set_trigger(&self, mode: TriggerMode) {
        let shift = self.trigger_mask.trailing_zeros();
        let value = self.read_reg(self.control) & !self.trigger_mask;
        self.write_reg(self.control, value | (mode.bits() << shift));
        log::trace!("exint: trigger mode {:?}", mode);
    }

    fn enable(&self) {
        let value = self.read_reg(self.mask) | (1 << self.enable_bit);
        self.write_reg(self.mask, value);
        log::trace!("exint: enabled (mask bit {})", self.enable_bit);
    }

    fn disable(&self) {
        let value = self.read_reg(self.mask) & !(1 << self.enable_bit);
        self.write_reg(self.mask, value);
        log::trace!("exint: disabled (mask bit {})", self.enable_bit);
    }

    fn clear_pending(&self) {
        // The flag register is write-1-to-clear: storing just this line's
        // bit acknowledges it, and the zero bits leave every other line's
        // latched flag untouched. A read-modify-write here would ack all
        // of them.
        self.write_reg(self.flag, 1 << self.flag_bit);
    }

    fn set_handler(&self, handler: Handler) {
        self.handler.set(Some(handler));
    }

    fn dispatch(&self) {
        if let Some(handler) = self.handler.get() {
            handler();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Simulated register file for one line.
    struct SimRegs {
        control: u8,
        mask: u8,
        flag: u8,
    }

    impl SimRegs {
        fn new() -> Self {
            Self {
                control: 0,
                mask: 0,
                flag: 0,
            }
        }

        fn line(&mut self, enable_bit: u8, flag_bit: u8, trigger_mask: u8) -> ExtIntLine {
            unsafe {
                ExtIntLine::new(
                    &raw mut self.control,
                    &raw mut self.mask,
                    &raw mut self.flag,
                    enable_bit,
                    flag_bit,
                    trigger_mask,
                )
            }
        }
    }

    /// Hardware effect of a store to a write-1-to-clear flag register.
    fn w1c(latched: u8, written: u8) -> u8 {
        latched & !written
    }

    const SENTINELS: u8 = 0b1001_0011; // bits outside the ISC11:10 field

    #[test]
    fn set_trigger_writes_the_exact_field_pattern() {
        let cases = [
            (TriggerMode::LowLevel, 0b0000),
            (TriggerMode::AnyChange, 0b0100),
            (TriggerMode::FallingEdge, 0b1000),
            (TriggerMode::RisingEdge, 0b1100),
        ];
        for (mode, pattern) in cases {
            let mut sim = SimRegs::new();
            // Start with the complementary field value so the test catches
            // a driver that ORs without clearing first.
            sim.control = SENTINELS | (!pattern & 0b1100);
            let line = sim.line(1, 1, 0b1100);
            line.set_trigger(mode);
            assert_eq!(sim.control, SENTINELS | pattern, "mode {mode:?}");
        }
    }

    #[test]
    fn set_trigger_leaves_bits_outside_the_field_unchanged() {
        let mut sim = SimRegs::new();
        sim.control = SENTINELS;
        let line = sim.line(1, 1, 0b1100);
        line.set_trigger(TriggerMode::RisingEdge);
        assert_eq!(sim.control & !0b1100, SENTINELS);
    }

    #[test]
    fn enable_sets_only_the_enable_bit() {
        for start in [0x00u8, 0b0101_0101, 0xFF] {
            let mut sim = SimRegs::new();
            sim.mask = start;
            let line = sim.line(3, 1, 0b1100);
            line.enable();
            assert_eq!(sim.mask, start | (1 << 3), "start {start:#010b}");
        }
    }

    #[test]
    fn enable_is_idempotent() {
        let mut sim = SimRegs::new();
        let line = sim.line(3, 1, 0b1100);
        line.enable();
        line.enable();
        assert_eq!(sim.mask, 1 << 3);
    }

    #[test]
    fn disable_clears_only_the_enable_bit() {
        for start in [0x00u8, 0b0101_0101, 0xFF] {
            let mut sim = SimRegs::new();
            sim.mask = start;
            let line = sim.line(3, 1, 0b1100);
            line.enable();
            line.disable();
            assert_eq!(sim.mask, start & !(1 << 3), "start {start:#010b}");
        }
    }

    #[test]
    fn disable_leaves_a_latched_flag_alone() {
        let mut sim = SimRegs::new();
        sim.flag = 1 << 1;
        let line = sim.line(3, 1, 0b1100);
        line.disable();
        assert_eq!(sim.flag, 1 << 1);
    }

    #[test]
    fn clear_pending_stores_only_the_flag_bit() {
        let mut sim = SimRegs::new();
        let line = sim.line(3, 1, 0b1100);
        line.clear_pending();
        assert_eq!(sim.flag, 1 << 1);
    }

    #[test]
    fn clear_pending_acks_this_line_and_no_other() {
        let mut sim = SimRegs::new();
        let latched = 0b1010_0011; // this line's flag plus three others
        let line = sim.line(3, 1, 0b1100);
        line.clear_pending();
        assert_eq!(w1c(latched, sim.flag), 0b1010_0001);
    }

    #[test]
    fn clear_pending_is_a_no_op_when_nothing_is_latched() {
        let mut sim = SimRegs::new();
        let line = sim.line(3, 1, 0b1100);
        line.clear_pending();
        // Writing 0 to a W1C bit never changes state, so the store cannot
        // disturb an all-clear register.
        assert_eq!(w1c(0, sim.flag), 0);
    }

    #[test]
    fn dispatch_without_handler_does_nothing() {
        let mut sim = SimRegs::new();
        let line = sim.line(3, 1, 0b1100);
        line.dispatch();
        assert_eq!((sim.control, sim.mask, sim.flag), (0, 0, 0));
    }

    #[test]
    fn dispatch_invokes_the_handler_exactly_once() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn bump() {
            CALLS.fetch_add(1, Ordering::Relaxed);
        }

        let mut sim = SimRegs::new();
        let line = sim.line(3, 1, 0b1100);
        line.set_handler(bump);
        line.dispatch();
        assert_eq!(CALLS.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn last_installed_handler_wins() {
        static FIRST: AtomicUsize = AtomicUsize::new(0);
        static SECOND: AtomicUsize = AtomicUsize::new(0);
        fn first() {
            FIRST.fetch_add(1, Ordering::Relaxed);
        }
        fn second() {
            SECOND.fetch_add(1, Ordering::Relaxed);
        }

        let mut sim = SimRegs::new();
        let line = sim.line(3, 1, 0b1100);
        line.set_handler(first);
        line.set_handler(second);
        line.dispatch();
        assert_eq!(FIRST.load(Ordering::Relaxed), 0);
        assert_eq!(SECOND.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn arm_configures_installs_acks_and_enables() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn bump() {
            CALLS.fetch_add(1, Ordering::Relaxed);
        }

        let mut sim = SimRegs::new();
        let line = sim.line(3, 1, 0b1100);
        line.arm(TriggerMode::AnyChange, bump);
        assert_eq!(sim.control & 0b1100, 0b0100);
        assert_eq!(sim.mask, 1 << 3);
        assert_eq!(sim.flag, 1 << 1);
        line.dispatch();
        assert_eq!(CALLS.load(Ordering::Relaxed), 1);
    }

    // Full configure-arm-dispatch sequence with every binding aimed at a
    // single 8-bit register, positions chosen not to overlap.
    #[test]
    fn end_to_end_over_a_single_register() {
        static TICKS: AtomicUsize = AtomicUsize::new(0);
        fn tick() {
            TICKS.fetch_add(1, Ordering::Relaxed);
        }

        let mut reg: u8 = 0;
        let line = unsafe {
            ExtIntLine::new(&raw mut reg, &raw mut reg, &raw mut reg, 5, 1, 0b1100)
        };

        line.set_trigger(TriggerMode::FallingEdge);
        assert_eq!(reg, 0b0000_1000);

        line.enable();
        assert_eq!(reg, 0b0010_1000);

        line.set_handler(tick);
        line.dispatch();
        assert_eq!(TICKS.load(Ordering::Relaxed), 1);
    }
}
