//! Output rendering - SSD1306 OLED plus the line formatters shared with
//! the serial log path.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, full-surface redraw per cycle
//! - **Format**: pure text formatting for both the display and the log sink

pub mod display;
pub mod format;
