//! Hardware Abstraction Layer (HAL) - Platform-Independent Traits
//!
//! This module defines generic traits for interacting with the external
//! interrupt hardware. They are implemented by the peripheral driver and
//! referenced by platform bindings, allowing application code to stay
//! independent of any one MCU's register layout.
//!
//! # Available Interfaces
//!
//! - [`interrupt`]: External interrupt line control and dispatch

pub mod interrupt;
