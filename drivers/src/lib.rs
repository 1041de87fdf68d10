//! AVR External Interrupt Driver Subsystem
//!
//! This crate drives the external interrupt lines (INTn) of AVR
//! microcontrollers through a layered architecture:
//!
//! # Module Organization
//!
//! - [`hal`]: Platform-independent trait definitions
//! - [`peripheral`]: The reusable external-interrupt line driver
//! - [`platform`]: MCU-specific register bindings and vector entry points
//!
//! # Design Principles
//!
//! 1. **Composition over per-line boilerplate**: one generic line driver,
//!    instantiated per physical line as a configuration value
//! 2. **Zero-Cost Abstractions**: HAL traits compile to direct register access
//! 3. **Type Safety**: trigger modes are a closed enum, so no invalid
//!    configuration is representable at runtime
//! 4. **Clear Ownership**: exactly one driver instance exists per line
//!
//! # Usage Example
//!
//! ```no_run
//! use drivers::hal::interrupt::TriggerMode;
//! use drivers::platform::atmega328p::EXT_INT1;
//!
//! fn on_button() {
//!     // runs in interrupt context; keep it short
//! }
//!
//! EXT_INT1.arm(TriggerMode::FallingEdge, on_button);
//! ```

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod hal;
pub mod peripheral;
pub mod platform;

// Re-export commonly used types
pub use hal::interrupt::{ExternalInterrupt, Handler, TriggerMode};
pub use peripheral::exint::ExtIntLine;
