use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;
use heapless::String;

pub const GLYPH_ROWS: usize = 8;
pub const GLYPH_WIDTH: usize = 5;

/// Custom character for a 5x8 dot matrix display, one byte per row with the
/// leftmost pixel in bit 4.
pub type Glyph = [u8; GLYPH_ROWS];

pub const DEGREE: Glyph = [
    0b00110,
    0b01001,
    0b01001,
    0b00110,
    0b00000,
    0b00000,
    0b00000,
    0b00000,
];

static DEGREE_PACKED: Glyph = to_packed(&DEGREE);

pub const fn row_fits(row: u8) -> bool {
    row >> GLYPH_WIDTH == 0
}

pub const fn fits_width(glyph: &Glyph) -> bool {
    let mut i = 0;
    while i < GLYPH_ROWS {
        if !row_fits(glyph[i]) {
            return false;
        }
        i += 1;
    }
    true
}

pub const fn pixel(glyph: &Glyph, x: usize, y: usize) -> bool {
    if x >= GLYPH_WIDTH || y >= GLYPH_ROWS {
        return false;
    }
    glyph[y] & (1 << (GLYPH_WIDTH - 1 - x)) != 0
}

/// Shift rows to the top of each byte, the MSB first layout `ImageRaw` reads.
pub const fn to_packed(glyph: &Glyph) -> Glyph {
    let mut packed = [0; GLYPH_ROWS];
    let mut i = 0;
    while i < GLYPH_ROWS {
        packed[i] = glyph[i] << (8 - GLYPH_WIDTH);
        i += 1;
    }
    packed
}

pub fn degree_image() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&DEGREE_PACKED, GLYPH_WIDTH as u32)
}

/// `#` for a lit pixel, `.` otherwise.
pub fn render_row(row: u8) -> String<GLYPH_WIDTH> {
    let mut out = String::new();
    for x in 0..GLYPH_WIDTH {
        let lit = row & (1 << (GLYPH_WIDTH - 1 - x)) != 0;
        // Capacity is exactly one char per column.
        let _ = out.push(if lit { '#' } else { '.' });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::image::Image;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::prelude::*;

    const DEGREE_ART: [&str; GLYPH_ROWS] = [
        "..##.", ".#..#", ".#..#", "..##.", ".....", ".....", ".....", ".....",
    ];

    #[test]
    fn degree_has_eight_five_bit_rows() {
        assert_eq!(DEGREE.len(), 8);
        assert!(fits_width(&DEGREE));
        for row in DEGREE {
            assert!(row < 0b100000);
        }
        assert_eq!(
            DEGREE,
            [0b00110, 0b01001, 0b01001, 0b00110, 0, 0, 0, 0]
        );
    }

    #[test]
    fn wide_rows_are_rejected() {
        assert!(row_fits(0b11111));
        assert!(!row_fits(0b100000));

        let mut glyph = DEGREE;
        glyph[7] = 0b1000_0000;
        assert!(!fits_width(&glyph));
    }

    #[test]
    fn pixel_reads_left_to_right() {
        assert!(!pixel(&DEGREE, 0, 0));
        assert!(pixel(&DEGREE, 2, 0));
        assert!(pixel(&DEGREE, 3, 0));
        assert!(pixel(&DEGREE, 1, 1));
        assert!(pixel(&DEGREE, 4, 1));
        assert!(!pixel(&DEGREE, 5, 1));
        assert!(!pixel(&DEGREE, 0, 8));
    }

    #[test]
    fn packed_rows_are_left_aligned() {
        let packed = to_packed(&DEGREE);
        assert_eq!(packed[0], 0b0011_0000);
        assert_eq!(packed[1], 0b0100_1000);
        assert_eq!(packed[4], 0);
    }

    #[test]
    fn render_rows_match_art() {
        for (row, art) in DEGREE.iter().zip(DEGREE_ART) {
            assert_eq!(render_row(*row).as_str(), art);
        }
    }

    #[test]
    fn degree_image_draws_glyph() {
        let image = degree_image();
        assert_eq!(image.size(), Size::new(5, 8));

        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        Image::new(&image, Point::zero()).draw(&mut display).unwrap();
        display.assert_pattern(&DEGREE_ART);
    }
}
