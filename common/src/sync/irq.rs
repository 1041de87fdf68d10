use core::fmt::Debug;

/// Architecture-specific interrupt masking interface.
///
/// Implemented by the architecture layer in [`crate::arch`].
pub trait IrqControl {
    /// Saved interrupt state
    type State: Copy + Debug;

    /// Disable interrupts and return the previous state.
    fn disable() -> Self::State;

    /// Restore interrupts to a previous state.
    fn restore(state: Self::State);
}

/// Run `f` with interrupts disabled, restoring the previous state after.
///
/// Nesting is fine: an inner section saves an already-disabled state and
/// restoring it leaves interrupts off until the outer section ends.
pub fn with_disabled<I, R, F>(f: F) -> R
where
    I: IrqControl,
    F: FnOnce() -> R,
{
    let state = I::disable();
    let result = f();
    I::restore(state);
    result
}
