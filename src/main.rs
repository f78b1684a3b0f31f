//! Host-side preview of what the panel would show
//!
//! Paints a demo scene into a [`Framebuffer`] exactly as the firmware would,
//! then writes the logical image as a PNG and, optionally, the packed RAM
//! image as it would be streamed to the controller.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use embedded_graphics::mono_font::{
    ascii, iso_8859_15::FONT_10X20 as ISO15_10, MonoFont, MonoTextStyle,
};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use ssd1680_paint::ssd1680::font;
use ssd1680_paint::{Color, DrawMode, FontSet, Framebuffer, Rotation, BUFFER_SIZE, HEIGHT, WIDTH};

/// Render the demo scene for a 2.9" SSD1680 panel to a PNG
#[derive(Parser)]
#[command(name = "epd-preview")]
#[command(about = "Render an SSD1680 framebuffer to a PNG file")]
struct Cli {
    /// Output PNG path
    #[arg(short, long, default_value = "preview.png")]
    output: PathBuf,

    /// Rotation in degrees: 0, 90, 180 or 270
    #[arg(short, long, default_value_t = 270)]
    rotation: u16,

    /// Date line drawn with the embedded-graphics font
    #[arg(long, default_value = "2025-10-14")]
    date: String,

    /// Number drawn with the bitmap font, zero padded to four digits
    #[arg(long, default_value_t = 42)]
    number: u32,

    /// Optional logo, scaled and thresholded into a 1-bpp bitmap
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Brightness below which logo pixels become black
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Also write the packed RAM image here
    #[arg(long)]
    raw: Option<PathBuf>,
}

/// Column-major bitmap in the layout `Framebuffer::show_picture` expects
struct Bitmap {
    width: u16,
    height: u16,
    bits: Vec<u8>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let rotation = Rotation::from_degrees(cli.rotation)
        .with_context(|| format!("Unsupported rotation {}", cli.rotation))?;

    let font_8 = pack_font(&ascii::FONT_5X8, 8)?;
    let font_12 = pack_font(&ascii::FONT_6X12, 12)?;
    let font_16 = pack_font(&ascii::FONT_8X13, 16)?;
    let font_24 = pack_font(&ascii::FONT_10X20, 24)?;
    let fonts = FontSet::new()
        .with_font(8, &font_8)
        .with_font(12, &font_12)
        .with_font(16, &font_16)
        .with_font(24, &font_24);

    let logo = cli
        .logo
        .as_deref()
        .map(|path| load_logo(path, 96, 64, cli.threshold))
        .transpose()?;

    let mut ram = [0u8; BUFFER_SIZE];
    let mut fb = Framebuffer::new(&mut ram, WIDTH, HEIGHT, rotation, Color::White)?
        .with_fonts(fonts);
    paint_scene(&mut fb, &cli, logo.as_ref())?;

    if fb.ignored_requests() > 0 {
        log::warn!("{} characters had no glyph", fb.ignored_requests());
    }

    save_png(&fb, &cli.output)?;
    log::info!(
        "Wrote {}x{} preview to {}",
        fb.width(),
        fb.height(),
        cli.output.display()
    );

    if let Some(raw) = &cli.raw {
        std::fs::write(raw, fb.buffer())
            .with_context(|| format!("Failed to write {}", raw.display()))?;
        log::info!("Wrote {} byte RAM image to {}", fb.buffer().len(), raw.display());
    }

    Ok(())
}

fn paint_scene(fb: &mut Framebuffer<'_>, cli: &Cli, logo: Option<&Bitmap>) -> Result<()> {
    let (w, h) = (fb.width(), fb.height());

    fb.clear(Color::White);
    fb.draw_rectangle(1, 1, w, h, Color::Black, DrawMode::Outline);
    fb.draw_rectangle(3, 3, w - 2, 30, Color::Black, DrawMode::Filled);

    fb.show_string(6, 4, "SSD1680", 24, Color::White);
    fb.show_string(6, 34, "Current Date:", 8, Color::Black);

    let date_style = MonoTextStyle::new(&ISO15_10, BinaryColor::On);
    Text::with_baseline(&cli.date, Point::new(6, 44), date_style, Baseline::Top).draw(fb)?;

    fb.show_string(6, 68, "No.", 12, Color::Black);
    fb.show_num(30, 66, cli.number, 4, 16, Color::Black);
    fb.draw_line(6, 88, w - 6, 88, Color::Black);

    let radius = 18;
    fb.draw_circle(w - 26, h - 26, radius, Color::Black, DrawMode::Outline);
    fb.draw_circle(w - 26, h - 26, radius / 2, Color::Black, DrawMode::Filled);

    if let Some(logo) = logo {
        let x = 6;
        let y = h.saturating_sub(logo.height + 6);
        fb.show_picture(x, y, logo.width, logo.height, &logo.bits, Color::White);
    }
    Ok(())
}

/// Render every printable ASCII glyph of `font` into the rasterizer's font layout
fn pack_font(font: &MonoFont<'_>, size: u16) -> Result<Vec<u8>> {
    let stride = font::glyph_bytes(size).with_context(|| format!("No font slot for size {size}"))?;
    let cell_width = if size == 8 { 6 } else { size / 2 };
    let style = MonoTextStyle::new(font, BinaryColor::On);

    let mut table = Vec::with_capacity(95 * stride);
    let mut scratch = vec![0u8; usize::from(cell_width.div_ceil(8)) * usize::from(size)];
    let mut utf8 = [0u8; 4];

    for code in b' '..=b'~' {
        let mut cell =
            Framebuffer::new(&mut scratch, cell_width, size, Rotation::Rotate270, Color::White)?;
        cell.clear(Color::White);
        let text = char::from(code).encode_utf8(&mut utf8);
        Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut cell)?;

        for band in 0..size.div_ceil(8) {
            for x in 0..cell_width {
                let byte = (0..8u16).fold(0u8, |acc, bit| {
                    if cell.pixel(x, band * 8 + bit) == Some(Color::Black) {
                        acc | (1 << bit)
                    } else {
                        acc
                    }
                });
                table.push(byte);
            }
        }
    }
    log::debug!("Packed {} byte font for size {}", table.len(), size);
    Ok(table)
}

/// Load a PNG, fit it into `max_width` × `max_height` and pack dark pixels as set bits
fn load_logo(path: &Path, max_width: u32, max_height: u32, threshold: u8) -> Result<Bitmap> {
    let img = image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    log::info!("Logo {}x{}", img.width(), img.height());

    let ratio = img.width() as f32 / img.height() as f32;
    let (width, height) = if ratio > max_width as f32 / max_height as f32 {
        (max_width, (max_width as f32 / ratio) as u32)
    } else {
        ((max_height as f32 * ratio) as u32, max_height)
    };
    let gray = img
        .resize(width, height, image::imageops::FilterType::Lanczos3)
        .to_luma8();
    let (width, height) = gray.dimensions();

    let mut bits = Vec::new();
    for band in 0..height.div_ceil(8) {
        for x in 0..width {
            let mut byte = 0u8;
            for bit in 0..8 {
                let y = band * 8 + bit;
                if y < height && gray.get_pixel(x, y).0[0] < threshold {
                    byte |= 1 << bit;
                }
            }
            bits.push(byte);
        }
    }

    Ok(Bitmap {
        width: u16::try_from(width)?,
        height: u16::try_from(height)?,
        bits,
    })
}

fn save_png(fb: &Framebuffer<'_>, path: &Path) -> Result<()> {
    let preview = image::GrayImage::from_fn(u32::from(fb.width()), u32::from(fb.height()), |x, y| {
        // x and y are bounded by the u16 framebuffer size
        match fb.pixel(x as u16, y as u16) {
            Some(Color::Black) => image::Luma([0]),
            _ => image::Luma([255]),
        }
    });
    preview
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}
