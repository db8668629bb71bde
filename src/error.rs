//! Unified error type for meteo-station.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use crate::sensor::decode::DecodeError;
use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, Format)]
pub enum Error {
    // UI / Display
    /// I²C transaction to the display failed (acquisition or flush).
    Display,

    // Sensor
    /// The DHT never produced an expected pin transition in time.
    SensorTimeout,

    /// A full frame arrived but its checksum did not match.
    SensorChecksum,
}

// Convenience conversions

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::ChecksumMismatch => Error::SensorChecksum,
        }
    }
}

impl From<display_interface::DisplayError> for Error {
    fn from(_: display_interface::DisplayError) -> Self {
        Error::Display
    }
}
