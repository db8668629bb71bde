//! Line-oriented serial log sink.
//!
//! Plain text lines over UARTE0 at 115200 baud, CRLF-terminated.  The
//! sink is best-effort: transport errors are dropped, there is no flow
//! control beyond the peripheral's own buffering.

use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::uarte::Uarte;

pub struct LogSink<'d> {
    uart: Uarte<'d, UARTE0>,
}

impl<'d> LogSink<'d> {
    pub fn new(uart: Uarte<'d, UARTE0>) -> Self {
        Self { uart }
    }

    /// Write one text line followed by CRLF.
    pub async fn write_line(&mut self, line: &str) {
        let _ = self.uart.write(line.as_bytes()).await;
        let _ = self.uart.write(b"\r\n").await;
    }
}
