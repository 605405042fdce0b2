//! Prints a picture to a 24-bit color terminal, two pixel rows per text line.

use std::io::{self, Write};

use crate::picture::{Color, Picture, Rgb8};

const UPPER_HALF_BLOCK: char = '▀';
const RESET: &str = "\x1b[0m";

fn foreground(out: &mut impl Write, c: Rgb8) -> io::Result<()> {
    write!(out, "\x1b[38;2;{};{};{}m", c.r, c.g, c.b)
}

fn background(out: &mut impl Write, c: Rgb8) -> io::Result<()> {
    write!(out, "\x1b[48;2;{};{};{}m", c.r, c.g, c.b)
}

/// Upper pixel in the glyph's foreground, lower pixel in its background. A
/// trailing odd row is drawn over the terminal's own background.
pub fn write_picture(out: &mut impl Write, picture: &Picture<&[Color]>) -> io::Result<()> {
    for y in (0..picture.height()).step_by(2) {
        let upper = picture.row(y);
        let lower = (y + 1 < picture.height()).then(|| picture.row(y + 1));

        for (x, &top) in upper.iter().enumerate() {
            foreground(out, top.into())?;
            if let Some(lower) = lower {
                background(out, lower[x].into())?;
            }
            write!(out, "{}", UPPER_HALF_BLOCK)?;
        }
        writeln!(out, "{}", RESET)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(pixels: &[Color], size: (u32, u32)) -> String {
        let mut out = Vec::new();
        write_picture(&mut out, &Picture::new(pixels, size)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pairs_rows_into_one_line() {
        let pixels = [Color::WHITE, Color::BLACK, Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 2.0)];
        let text = render(&pixels, (2, 2));
        assert_eq!(
            text,
            "\x1b[38;2;255;255;255m\x1b[48;2;255;0;0m▀\
             \x1b[38;2;0;0;0m\x1b[48;2;0;0;255m▀\x1b[0m\n"
        );
    }

    #[test]
    fn odd_last_row_has_no_background() {
        let pixels = [Color::gray(0.5); 3];
        let text = render(&pixels, (1, 3));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "\x1b[38;2;127;127;127m▀\x1b[0m");
        assert!(lines[0].contains("\x1b[48;2;127;127;127m"));
    }

    #[test]
    fn empty_picture_writes_nothing() {
        assert_eq!(render(&[], (0, 0)), "");
    }
}
