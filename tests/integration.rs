//! Integration tests for meteo-station host-testable logic.
//!
//! Drives the full pure pipeline: raw DHT frame → decode → per-channel
//! validity → log and display lines.

use meteo_station::sensor::decode::{decode_frame, DhtModel, FRAME_LEN};
use meteo_station::ui::format::{
    humidity_display_line, humidity_log_line, temperature_display_line, temperature_log_line,
};

fn with_checksum(mut frame: [u8; FRAME_LEN]) -> [u8; FRAME_LEN] {
    frame[4] = frame[0]
        .wrapping_add(frame[1])
        .wrapping_add(frame[2])
        .wrapping_add(frame[3]);
    frame
}

#[test]
fn valid_frame_renders_both_channels() {
    // DHT11 frame: 55 %RH, 21 °C.
    let frame = with_checksum([55, 0, 21, 0, 0]);
    let reading = decode_frame(DhtModel::Dht11, &frame).expect("expected valid frame");

    let temperature = Some(reading.temperature).filter(|v| v.is_finite());
    let humidity = Some(reading.humidity).filter(|v| v.is_finite());

    assert_eq!(
        temperature_log_line(temperature).as_str(),
        "Température: 21.00°C"
    );
    assert_eq!(humidity_log_line(humidity).as_str(), "Humidité: 55.00%");
    assert_eq!(
        temperature_display_line(temperature).as_str(),
        "Temp: 21.0 C"
    );
    assert_eq!(humidity_display_line(humidity).as_str(), "Hum: 55.0 %");
}

#[test]
fn corrupted_frame_degrades_to_invalid_markers() {
    let mut frame = with_checksum([55, 0, 21, 0, 0]);
    frame[0] ^= 0x01; // corrupt a data bit after checksum calculation

    let samples = decode_frame(DhtModel::Dht11, &frame).ok();
    let temperature = samples.map(|r| r.temperature);
    let humidity = samples.map(|r| r.humidity);

    // Log path carries the nan token; display path swaps in the Err text.
    assert_eq!(
        temperature_log_line(temperature).as_str(),
        "Température: nan°C"
    );
    assert_eq!(humidity_log_line(humidity).as_str(), "Humidité: nan%");
    assert_eq!(temperature_display_line(temperature).as_str(), "Temp Err");
    assert_eq!(humidity_display_line(humidity).as_str(), "Hum Err");
}

#[test]
fn channels_degrade_independently() {
    // Valid temperature, invalid humidity - the reference scenario.
    let temperature = Some(23.456f32);
    let humidity: Option<f32> = None;

    assert_eq!(
        temperature_log_line(temperature).as_str(),
        "Température: 23.46°C"
    );
    assert_eq!(humidity_log_line(humidity).as_str(), "Humidité: nan%");
    assert_eq!(
        temperature_display_line(temperature).as_str(),
        "Temp: 23.5 C"
    );
    assert_eq!(humidity_display_line(humidity).as_str(), "Hum Err");
}
