//! Test-only library interface for meteo-station.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

// Internal module paths for the actual implementations
#[path = "sensor/decode.rs"]
mod sensor_decode_impl;
#[path = "sensor/pacing.rs"]
mod sensor_pacing_impl;

#[path = "ui/display.rs"]
mod ui_display_impl;
#[path = "ui/format.rs"]
mod ui_format_impl;

pub mod sensor {
    pub mod decode {
        pub use crate::sensor_decode_impl::*;
    }
    pub mod pacing {
        pub use crate::sensor_pacing_impl::*;
    }
}

pub mod ui {
    pub mod display {
        pub use crate::ui_display_impl::*;
    }
    pub mod format {
        pub use crate::ui_format_impl::*;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
