use crate::sync::irq::IrqControl;

/// No-op interrupt control for hosted builds.
///
/// There is no interrupt mask to manipulate on the host; this exists so
/// the driver crates build and unit-test without the AVR toolchain.
pub struct HostIrq;

impl IrqControl for HostIrq {
    type State = ();

    #[inline(always)]
    fn disable() -> Self::State {}

    #[inline(always)]
    fn restore(_state: Self::State) {}
}
