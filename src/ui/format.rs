//! Serial-log and display line formatting.
//!
//! The two output paths render an invalid reading differently: the log
//! carries the literal not-a-number token inside the normal line shape,
//! while the display swaps the whole line for a short error text.
//!
//! Log lines use two decimals (the serial monitor's default float
//! precision); display lines use one.

use core::fmt::Write;
use heapless::String;

/// Capacity of one serial log line (the accented French labels are UTF-8).
pub const LOG_LINE_CAP: usize = 32;

/// Capacity of one display line.
pub const DISPLAY_LINE_CAP: usize = 16;

/// `"Température: 23.46°C"`, or the `nan` token when the reading is invalid.
pub fn temperature_log_line(sample: Option<f32>) -> String<LOG_LINE_CAP> {
    let mut line = String::new();
    match sample {
        Some(value) => {
            let _ = write!(line, "Température: {value:.2}°C");
        }
        None => {
            let _ = line.push_str("Température: nan°C");
        }
    }
    line
}

/// `"Humidité: 55.20%"`, or the `nan` token when the reading is invalid.
pub fn humidity_log_line(sample: Option<f32>) -> String<LOG_LINE_CAP> {
    let mut line = String::new();
    match sample {
        Some(value) => {
            let _ = write!(line, "Humidité: {value:.2}%");
        }
        None => {
            let _ = line.push_str("Humidité: nan%");
        }
    }
    line
}

/// `"Temp: 23.5 C"`, or exactly `"Temp Err"` when the reading is invalid.
pub fn temperature_display_line(sample: Option<f32>) -> String<DISPLAY_LINE_CAP> {
    let mut line = String::new();
    match sample {
        Some(value) => {
            let _ = write!(line, "Temp: {value:.1} C");
        }
        None => {
            let _ = line.push_str("Temp Err");
        }
    }
    line
}

/// `"Hum: 55.2 %"`, or exactly `"Hum Err"` when the reading is invalid.
pub fn humidity_display_line(sample: Option<f32>) -> String<DISPLAY_LINE_CAP> {
    let mut line = String::new();
    match sample {
        Some(value) => {
            let _ = write!(line, "Hum: {value:.1} %");
        }
        None => {
            let _ = line.push_str("Hum Err");
        }
    }
    line
}
