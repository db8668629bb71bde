//! DHT sensor subsystem.
//!
//! `decode` and `pacing` are pure and host-testable; `dht` is the
//! on-target bit-bang driver that ties them to a GPIO pin.

pub mod decode;
pub mod dht;
pub mod pacing;
