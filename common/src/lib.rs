//! Shared support code for the driver crates: architecture-specific
//! interrupt masking and the interrupt-safe cell built on top of it.

#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod sync;
