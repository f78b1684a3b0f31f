//! SSD1680 ePaper Display Driver
//!
//! Used with the 2.9" 128×296 black/white/red panels found on the common
//! WeAct and Waveshare breakout boards.
//!
//! This driver is losely modeled after the
//! [epd-waveshare](https://github.com/caemor/epd-waveshare) drivers but keeps
//! the framebuffer and the controller apart.
//!
//!
//! ### Usage
//! This driver does not hide that you're working with one buffer for black/white. To
//! display something you:
//!
//! 1. first wrap a [`BUFFER_SIZE`] byte array in a [`graphics::Framebuffer`]
//!    and draw onto it, with the primitives in [`raster`] or with
//!    [`embedded_graphics`](https://github.com/embedded-graphics/embedded-graphics).
//! 1. then hand [`graphics::Framebuffer::buffer`] to [`driver::Ssd1680::display`]
//!    with a full or partial [`driver::RefreshMode`]
//! 1. finally put the panel to sleep with [`driver::Ssd1680::sleep`]; the next
//!    frame wakes it up again
//!
//!

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod font;
pub mod graphics;
pub mod interface;
pub mod lut;
pub mod raster;

mod cmd;
mod flag;

pub use flag::Flag;

#[cfg(test)]
mod testing;

/// Display height, pixels vertically
pub const HEIGHT: u16 = 296;

/// Display width, pixels horizontally
pub const WIDTH: u16 = 128;

/// Bytes in one full-panel black/white image
pub const BUFFER_SIZE: usize = (WIDTH as usize / 8) * HEIGHT as usize;
