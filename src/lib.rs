//! Driver and painting library for SSD1680 e-paper panels
//!
//! The crate has two independent halves:
//!
//! - [`Ssd1680`], the controller state machine: reset, full and partial
//!   initialisation, RAM addressing, frame upload, refresh and deep sleep,
//!   over any `embedded-hal` 1.0 [`SpiDevice`](embedded_hal::spi::SpiDevice).
//! - [`Framebuffer`], a rotatable one-bit-per-pixel image in the panel's RAM
//!   layout with point, line, rectangle, circle, text, number and bitmap
//!   primitives, and an `embedded-graphics` [`DrawTarget`](embedded_graphics::draw_target::DrawTarget).
//!
//! ```
//! use ssd1680_paint::{Color, DrawMode, Framebuffer, Rotation, BUFFER_SIZE, HEIGHT, WIDTH};
//!
//! let mut image = [0u8; BUFFER_SIZE];
//! let mut fb = Framebuffer::new(&mut image, WIDTH, HEIGHT, Rotation::Rotate270, Color::White)?;
//! fb.clear(Color::White);
//! fb.draw_rectangle(1, 1, 128, 296, Color::Black, DrawMode::Outline);
//! fb.draw_circle(64, 64, 20, Color::Black, DrawMode::Filled);
//! // ssd1680.display(fb.buffer(), RefreshMode::Full)?;
//! # Ok::<(), ssd1680_paint::Error>(())
//! ```
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod ssd1680;

pub use crate::ssd1680::color::Color;
pub use crate::ssd1680::config::Config;
pub use crate::ssd1680::driver::{PanelState, RefreshMode, Ssd1680};
pub use crate::ssd1680::error::{DisplayError, Error};
pub use crate::ssd1680::font::FontSet;
pub use crate::ssd1680::graphics::{Framebuffer, Rotation};
pub use crate::ssd1680::interface::DisplayInterface;
pub use crate::ssd1680::raster::DrawMode;
pub use crate::ssd1680::Flag;
pub use crate::ssd1680::{BUFFER_SIZE, HEIGHT, WIDTH};
