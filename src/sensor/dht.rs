//! Bit-bang DHT driver over a single Flex GPIO.
//!
//! Protocol: the host holds the line low to wake the sensor, releases it,
//! then the sensor answers with an 80 µs low / 80 µs high handshake and
//! 40 data bits.  Each bit starts with a ~50 µs low; the following high
//! pulse is short for `0` and long for `1`.  Pulse widths are measured
//! with microsecond busy-waits, with interrupts masked for the duration
//! of the transaction.
//!
//! The driver caches the outcome of the last transaction, success or
//! failure, for the model's minimum sampling interval, so the two
//! independent channel reads the loop performs each cycle share one bus
//! transaction.

use crate::config::{
    CYCLES_PER_US, DHT_BIT_HIGH_TIMEOUT_US, DHT_BIT_LOW_TIMEOUT_US, DHT_BIT_ONE_THRESHOLD_US,
    DHT_HANDSHAKE_TIMEOUT_US,
};
use crate::error::Error;
use crate::sensor::decode::{decode_frame, DhtModel, Reading, FRAME_LEN};
use crate::sensor::pacing::OutcomeCache;
use defmt::warn;
use embassy_nrf::gpio::{Flex, OutputDrive, Pull};
use embassy_time::{block_for, Duration, Instant};

/// DHT sensor handle: one data pin plus the fixed model identifier.
pub struct Dht<'d> {
    pin: Flex<'d>,
    model: DhtModel,
    /// Last transaction outcome and when it was attempted, for intra-cycle
    /// reuse.
    cache: OutcomeCache<Result<Reading, Error>>,
}

impl<'d> Dht<'d> {
    pub fn new(pin: Flex<'d>, model: DhtModel) -> Self {
        Self {
            pin,
            model,
            cache: OutcomeCache::new(),
        }
    }

    /// Driver-reported minimum delay between two bus transactions.
    pub fn min_sample_interval(&self) -> Duration {
        Duration::from_millis(self.model.min_sample_interval_ms())
    }

    /// Read the temperature channel; `None` marks an invalid reading.
    pub fn sample_temperature(&mut self) -> Option<f32> {
        self.sample_channel("temperature", |r| r.temperature)
    }

    /// Read the humidity channel; `None` marks an invalid reading.
    pub fn sample_humidity(&mut self) -> Option<f32> {
        self.sample_channel("humidity", |r| r.humidity)
    }

    fn sample_channel(&mut self, channel: &str, extract: fn(&Reading) -> f32) -> Option<f32> {
        match self.read() {
            Ok(reading) => {
                let value = extract(&reading);
                if value.is_finite() {
                    Some(value)
                } else {
                    warn!("DHT {=str} channel not finite", channel);
                    None
                }
            }
            Err(e) => {
                warn!("DHT {=str} read failed: {}", channel, e);
                None
            }
        }
    }

    /// Perform (or reuse) a full sensor transaction.
    ///
    /// The attempt is recorded whether it succeeds or fails, so a botched
    /// transfer holds off the immediate retry just like a good one.
    pub fn read(&mut self) -> Result<Reading, Error> {
        let now = Instant::now();
        if let Some(outcome) = self
            .cache
            .fresh(now.as_millis(), self.model.min_sample_interval_ms())
        {
            return outcome;
        }

        let outcome = self
            .transfer()
            .and_then(|frame| decode_frame(self.model, &frame).map_err(Error::from));
        self.cache.record(now.as_millis(), outcome);
        outcome
    }

    /// One wire transaction: start pulse, handshake, 40 data bits.
    fn transfer(&mut self) -> Result<[u8; FRAME_LEN], Error> {
        // Start pulse: hold the line low long enough to wake the sensor,
        // then release it briefly before handing the line over.
        self.pin.set_as_output(OutputDrive::Standard);
        self.pin.set_low();
        block_for(Duration::from_millis(self.model.start_pulse_ms()));
        self.pin.set_high();
        delay_us(25);
        self.pin.set_as_input(Pull::Up);

        // The bit stream is timing-critical; keep interrupts out of it.
        cortex_m::interrupt::free(|_| {
            // Sensor response: 80 µs low then 80 µs high.
            self.measure_level(false, DHT_HANDSHAKE_TIMEOUT_US)?;
            self.measure_level(true, DHT_HANDSHAKE_TIMEOUT_US)?;

            let mut frame = [0u8; FRAME_LEN];
            for bit in 0..40 {
                // ~50 µs low separator, then the width of the high pulse
                // encodes the bit value.
                self.measure_level(false, DHT_BIT_LOW_TIMEOUT_US)?;
                let high_us = self.measure_level(true, DHT_BIT_HIGH_TIMEOUT_US)?;
                if high_us > DHT_BIT_ONE_THRESHOLD_US {
                    frame[bit / 8] |= 1 << (7 - bit % 8);
                }
            }
            Ok(frame)
        })
    }

    /// Count how long the line stays at `level`, in microseconds.
    ///
    /// Errors with [`Error::SensorTimeout`] if the line has not moved on
    /// after `timeout_us`.
    fn measure_level(&mut self, level: bool, timeout_us: u32) -> Result<u32, Error> {
        let mut elapsed = 0;
        while self.pin.is_high() == level {
            if elapsed > timeout_us {
                return Err(Error::SensorTimeout);
            }
            delay_us(1);
            elapsed += 1;
        }
        Ok(elapsed)
    }
}

/// Busy-wait for `us` microseconds.
fn delay_us(us: u32) {
    cortex_m::asm::delay(us * CYCLES_PER_US);
}
