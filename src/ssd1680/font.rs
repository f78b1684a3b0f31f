//! Fixed-width bitmap fonts supplied by the application
//!
//! A table is a flat byte slice holding one glyph per printable ASCII
//! character, starting at `' '`. Glyphs are column-major: each byte is eight
//! vertical pixels, least significant bit on top.
//!
//! | size | glyph cell | bytes per glyph |
//! |------|------------|-----------------|
//! | 8    | 6 × 8      | 6               |
//! | 12   | 6 × 12     | 12              |
//! | 16   | 8 × 16     | 16              |
//! | 24   | 12 × 24    | 36              |

/// Font heights with a table slot
pub const FONT_SIZES: [u16; 4] = [8, 12, 16, 24];

/// Bytes per glyph for a font height, `None` for unsupported heights
pub const fn glyph_bytes(size: u16) -> Option<usize> {
    match size {
        8 => Some(6),
        12 => Some(12),
        16 => Some(16),
        24 => Some(36),
        _ => None,
    }
}

/// Horizontal advance between characters of a string
pub const fn advance(size: u16) -> u16 {
    if size == 8 {
        6
    } else {
        size / 2
    }
}

/// The four font tables, any of which may be absent
#[derive(Clone, Copy, Debug, Default)]
pub struct FontSet<'a> {
    font_8: Option<&'a [u8]>,
    font_12: Option<&'a [u8]>,
    font_16: Option<&'a [u8]>,
    font_24: Option<&'a [u8]>,
}

impl<'a> FontSet<'a> {
    /// No fonts; every character draw is ignored
    pub const fn new() -> Self {
        FontSet {
            font_8: None,
            font_12: None,
            font_16: None,
            font_24: None,
        }
    }

    /// Install the table for `size`. Unsupported sizes are ignored.
    pub fn with_font(mut self, size: u16, table: &'a [u8]) -> Self {
        match size {
            8 => self.font_8 = Some(table),
            12 => self.font_12 = Some(table),
            16 => self.font_16 = Some(table),
            24 => self.font_24 = Some(table),
            _ => log::warn!("No font slot for size {}", size),
        }
        self
    }

    fn table(&self, size: u16) -> Option<&'a [u8]> {
        match size {
            8 => self.font_8,
            12 => self.font_12,
            16 => self.font_16,
            24 => self.font_24,
            _ => None,
        }
    }

    /// Glyph bytes for `ch`, if the size is supported, its table is installed
    /// and the character is inside the table
    pub fn glyph(&self, size: u16, ch: u8) -> Option<&'a [u8]> {
        let stride = glyph_bytes(size)?;
        let table = self.table(size)?;
        let index = usize::from(ch.checked_sub(b' ')?);
        table.get(index * stride..(index + 1) * stride)
    }
}
