//! DHT frame decoding.
//!
//! A DHT transaction delivers 40 bits (5 bytes):
//! ```text
//! Byte 0: Humidity high      (DHT11: integral %RH)
//! Byte 1: Humidity low       (DHT11: tenths, usually 0)
//! Byte 2: Temperature high   (DHT11: integral °C; DHT22: sign bit in MSB)
//! Byte 3: Temperature low
//! Byte 4: Checksum = (b0 + b1 + b2 + b3) & 0xFF
//! ```
//! DHT11 encodes each channel as integral byte + tenths byte, with the
//! temperature sign carried in bit 7 of the tenths byte; DHT22 encodes
//! each as a 16-bit big-endian value in tenths, with the temperature sign
//! carried in bit 7 of byte 2.

/// Number of bytes in one DHT data frame.
pub const FRAME_LEN: usize = 5;

/// Sensor model wired to the data pin. Fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DhtModel {
    Dht11,
    Dht22,
}

impl DhtModel {
    /// Datasheet minimum delay between two bus transactions (ms).
    pub const fn min_sample_interval_ms(self) -> u64 {
        match self {
            DhtModel::Dht11 => 1000,
            DhtModel::Dht22 => 2000,
        }
    }

    /// How long the start pulse must hold the line low to wake the sensor (ms).
    pub const fn start_pulse_ms(self) -> u64 {
        match self {
            DhtModel::Dht11 => 18,
            DhtModel::Dht22 => 3,
        }
    }
}

/// One decoded sensor frame: both channels from a single bus transaction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
}

/// Frame-level decode failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Byte 4 does not match the sum of bytes 0-3.
    ChecksumMismatch,
}

/// Decode a raw 5-byte frame into a [`Reading`].
///
/// Validates the checksum first; scaling depends on the sensor model.
pub fn decode_frame(model: DhtModel, frame: &[u8; FRAME_LEN]) -> Result<Reading, DecodeError> {
    let sum = frame[0]
        .wrapping_add(frame[1])
        .wrapping_add(frame[2])
        .wrapping_add(frame[3]);
    if sum != frame[4] {
        return Err(DecodeError::ChecksumMismatch);
    }

    let reading = match model {
        DhtModel::Dht11 => {
            let magnitude = frame[2] as f32 + (frame[3] & 0x7F) as f32 / 10.0;
            Reading {
                humidity: frame[0] as f32 + frame[1] as f32 / 10.0,
                temperature: if frame[3] & 0x80 != 0 {
                    -magnitude
                } else {
                    magnitude
                },
            }
        }
        DhtModel::Dht22 => {
            let humidity = u16::from_be_bytes([frame[0], frame[1]]) as f32 / 10.0;
            let raw_temp = u16::from_be_bytes([frame[2] & 0x7F, frame[3]]) as f32 / 10.0;
            Reading {
                humidity,
                temperature: if frame[2] & 0x80 != 0 {
                    -raw_temp
                } else {
                    raw_temp
                },
            }
        }
    };

    Ok(reading)
}
