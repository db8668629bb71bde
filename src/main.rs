//! meteo-station firmware entry point.
//!
//! Two-stage lifecycle: one-time setup (serial sink, display acquisition,
//! sensor construction), then an infinite poll → log → render cycle paced
//! by a fixed delay.  The only fatal path is display acquisition; a failed
//! sensor sample just degrades that cycle's output.

#![no_std]
#![no_main]

mod config;
mod error;
mod sensor;
mod serial;
mod ui;

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Flex;
use embassy_nrf::{bind_interrupts, peripherals, twim, uarte};
use embassy_time::Timer;
use panic_probe as _;

use config::{CYCLE_PERIOD_MS, DHT_MODEL, OLED_I2C_ADDRESS};
use sensor::dht::Dht;
use serial::LogSink;
use ui::format::{
    humidity_display_line, humidity_log_line, temperature_display_line, temperature_log_line,
};

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("meteo-station starting");

    // Serial log sink at 115200 baud.
    let mut uart_config = uarte::Config::default();
    uart_config.baudrate = uarte::Baudrate::BAUD115200;
    let uart = uarte::Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);
    let mut log = LogSink::new(uart);

    // Acquire the display; there is no upward caller to report to, so a
    // failure emits its one message and halts for good.
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = match ui::display::init(i2c, OLED_I2C_ADDRESS) {
        Ok(d) => d,
        Err(e) => {
            error!("SSD1306 initialisation failed: {}", error::Error::from(e));
            log.write_line("Erreur initialisation écran SSD1306").await;
            halt().await
        }
    };

    let mut dht = Dht::new(Flex::new(p.P0_02), DHT_MODEL);
    // Queried and logged, but the cycle keeps its fixed period; the
    // driver's frame cache enforces the sensor-side minimum.
    info!(
        "sensor min sample interval: {} ms",
        dht.min_sample_interval().as_millis()
    );

    loop {
        Timer::after_millis(CYCLE_PERIOD_MS).await;

        // Two independent channel reads; each may be invalid on its own.
        let temperature = dht.sample_temperature();
        let humidity = dht.sample_humidity();

        log.write_line(&temperature_log_line(temperature)).await;
        log.write_line(&humidity_log_line(humidity)).await;

        let line1 = temperature_display_line(temperature);
        let line2 = humidity_display_line(humidity);
        if ui::display::render_readings(&mut display, &line1, &line2).is_err() {
            warn!("display flush failed");
        }
    }
}

/// Permanent halt: no retry, no timeout, no recovery.
async fn halt() -> ! {
    loop {
        Timer::after_secs(3600).await;
    }
}
