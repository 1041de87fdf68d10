//! Architecture selection.
//!
//! `CurrentIrq` is the interrupt-masking implementation for the target the
//! workspace is being compiled for. Hosted builds (including unit tests)
//! get a no-op implementation.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "avr")] {
        pub mod avr;
        pub use avr::irq::AvrIrq as CurrentIrq;
    } else {
        pub mod host;
        pub use host::irq::HostIrq as CurrentIrq;
    }
}
