//! Platform Bindings
//!
//! Each supported MCU contributes its datasheet facts: register
//! addresses, bit positions, the statically allocated line instances,
//! and the interrupt-vector entry points that forward to them.

// MCU selection based on Cargo features
cfg_if::cfg_if! {
    if #[cfg(feature = "atmega328p")] {
        pub mod atmega328p;
    } else if #[cfg(feature = "atmega2560")] {
        pub mod atmega2560;
    } else {
        compile_error!(
            "No MCU selected!\n\
            Use: cargo build --features atmega328p\n\
            Or:  cargo build --features atmega2560"
        );
    }
}

// Ensure only one MCU is selected
#[cfg(all(feature = "atmega328p", feature = "atmega2560"))]
compile_error!("Multiple MCUs selected! Choose only one: atmega328p OR atmega2560");
