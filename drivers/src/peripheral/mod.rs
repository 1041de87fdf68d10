//! Reusable Peripheral Drivers
//!
//! Drivers here are parameterized by register locations rather than tied
//! to one MCU, so a single implementation serves every line and part that
//! shares the hardware design.

pub mod exint;
