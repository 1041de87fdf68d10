//! External Interrupt Hardware Abstraction Layer.
//!
//! This module defines the platform-independent surface of a single
//! external interrupt line.

/// User interrupt callback.
///
/// Runs in interrupt context: it must not block and should complete in
/// bounded time, since the hardware keeps further interrupts stalled
/// while it runs.
pub type Handler = fn();

/// Trigger condition for an external interrupt line.
///
/// The discriminants are the 2-bit sense-control field encodings shared
/// by every AVR external interrupt; the driver shifts them into the
/// line's trigger-mode field.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TriggerMode {
    /// Interrupt is active while the signal is low.
    LowLevel = 0b00,
    /// Interrupt triggers on any logical change.
    AnyChange = 0b01,
    /// Interrupt triggers on a falling edge.
    FallingEdge = 0b10,
    /// Interrupt triggers on a rising edge.
    RisingEdge = 0b11,
}

impl TriggerMode {
    /// The 2-bit field value for this mode, before shifting.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// A single external interrupt line.
///
/// All operations are direct, immediate register effects and cannot
/// fail: trigger modes are a closed enum and the register bindings are
/// compile-time facts, so no invalid-input path exists at runtime.
pub trait ExternalInterrupt {
    /// Write `mode` into the line's trigger-mode field, leaving every
    /// other bit of the control register untouched.
    fn set_trigger(&self, mode: TriggerMode);

    /// Set the enable bit, arming the line. Idempotent.
    fn enable(&self);

    /// Clear the enable bit. An already-latched flag is left alone.
    fn disable(&self);

    /// Acknowledge a latched interrupt by writing 1 to the flag bit.
    fn clear_pending(&self);

    /// Install `handler`, replacing any previous one.
    ///
    /// Call this before [`enable`](ExternalInterrupt::enable), or inside
    /// an interrupt-disabled section, so a dispatch can never race the
    /// installation.
    fn set_handler(&self, handler: Handler);

    /// Invoke the installed handler, if any.
    ///
    /// Called from the line's interrupt vector and nowhere else. A
    /// missing handler is a normal, silent no-op.
    fn dispatch(&self);
}
