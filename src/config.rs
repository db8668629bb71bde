//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

use crate::sensor::decode::DhtModel;

// Cycle

/// Fixed wall-clock delay at the top of each poll/log/render cycle (ms).
///
/// Deliberately not derived from the sensor's reported minimum sampling
/// interval; the driver's frame cache absorbs the difference.
pub const CYCLE_PERIOD_MS: u64 = 2000;

// Sensor

/// DHT model wired to the data pin.
pub const DHT_MODEL: DhtModel = DhtModel::Dht11;

/// Longest low/high pulse we wait out during the DHT handshake (µs).
pub const DHT_HANDSHAKE_TIMEOUT_US: u32 = 85;

/// Longest inter-bit low pulse during the data phase (µs).
pub const DHT_BIT_LOW_TIMEOUT_US: u32 = 56;

/// Longest data-bit high pulse during the data phase (µs).
pub const DHT_BIT_HIGH_TIMEOUT_US: u32 = 75;

/// High pulses longer than this are decoded as a `1` bit (µs).
pub const DHT_BIT_ONE_THRESHOLD_US: u32 = 40;

/// CPU cycles per microsecond for bit-bang busy waits (64 MHz core).
pub const CYCLES_PER_US: u32 = 64;

// Display

/// SSD1306 7-bit I²C address.
pub const OLED_I2C_ADDRESS: u8 = 0x3C;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   DHT data       → P0.02
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   UART RXD       → P0.08
//   UART TXD       → P0.06
