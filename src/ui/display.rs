//! SSD1306 OLED display wrapper.

use display_interface::DisplayError;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Vertical advance of one text row (FONT_10X20 line height).
const LINE_HEIGHT: i32 = 20;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Acquire the SSD1306 at `address`, initialise it and blank the screen.
///
/// Acquisition failure is surfaced to the caller; the reference behaviour
/// is to treat it as fatal (there is nothing to show readings on).
pub fn init<I2C>(i2c: I2C, address: u8) -> Result<Display<I2C>, DisplayError>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, address);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init()?;
    display.clear_buffer();
    display.flush()?;
    Ok(display)
}

/// 2× text in the single foreground colour.
fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(BinaryColor::On)
        .build()
}

/// Draw the two reading lines from the origin onto an already-cleared target.
///
/// Generic over [`DrawTarget`] so the routine can render into an in-memory
/// display in host tests.
pub fn draw_reading_lines<D>(target: &mut D, line1: &str, line2: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(line1, Point::zero(), text_style(), Baseline::Top).draw(target)?;
    Text::with_baseline(line2, Point::new(0, LINE_HEIGHT), text_style(), Baseline::Top)
        .draw(target)?;
    Ok(())
}

/// Compose one cycle's frame: blank the whole target, then draw both lines.
///
/// Clearing goes through [`DrawTarget`] as well, so host tests can verify
/// that no residual pixels survive from the previous frame.
pub fn draw_frame<D>(target: &mut D, line1: &str, line2: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    draw_reading_lines(target, line1, line2)
}

/// Full-surface redraw: clear the buffer, draw both lines, flush to the
/// device.
pub fn render_readings<I2C>(
    display: &mut Display<I2C>,
    line1: &str,
    line2: &str,
) -> Result<(), DisplayError>
where
    I2C: embedded_hal::i2c::I2c,
{
    draw_frame(display, line1, line2)?;
    display.flush()
}
