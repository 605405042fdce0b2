use std::iter::Sum;
use std::ops::{Add, Div, Mul};

/// Linear RGB color. Components above 1.0 are allowed and mark emitters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Sum for Color {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        let mut acc = Color::BLACK;
        for color in iter {
            acc = acc + color;
        }
        acc
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// True when any channel exceeds 1.0.
    pub fn is_emissive(&self) -> bool {
        self.r > 1.0 || self.g > 1.0 || self.b > 1.0
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Color::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
        )
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Self) -> Self::Output {
        Color::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
        )
    }
}

impl Div<f32> for Color {
    type Output = Color;

    fn div(self, rhs: f32) -> Self::Output {
        Color::new(
            self.r / rhs,
            self.g / rhs,
            self.b / rhs,
        )
    }
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Color> for Rgb8 {
    fn from(value: Color) -> Self {
        Rgb8::new_norm(value.r, value.g, value.b)
    }
}

fn normalize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }

    pub fn new_norm(r: f32, g: f32, b: f32) -> Self {
        Rgb8::new(normalize(r), normalize(g), normalize(b))
    }
}

/// Row-major pixel buffer borrowed or owned through `P`.
pub struct Picture<P> {
    pixels: P,
    size: (u32, u32),
}

impl<P> Picture<P> {
    pub fn new(pixels: P, size: (u32, u32)) -> Self {
        Picture { pixels, size }
    }

    pub fn width(&self) -> u32 {
        self.size.0
    }

    pub fn height(&self) -> u32 {
        self.size.1
    }

    fn to_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width() as usize + x as usize
    }
}

impl<T: Clone> Picture<Vec<T>> {
    pub fn filled(value: T, size: (u32, u32)) -> Self {
        Picture::new(vec![value; size.0 as usize * size.1 as usize], size)
    }

    pub fn view(&self) -> Picture<&[T]> {
        Picture::new(&self.pixels[..], self.size)
    }

    pub fn view_mut(&mut self) -> Picture<&mut [T]> {
        Picture::new(&mut self.pixels[..], self.size)
    }
}

impl<'a, T> Picture<&'a [T]> {
    pub fn pixel(&self, x: u32, y: u32) -> &T {
        &self.pixels[self.to_index(x, y)]
    }

    pub fn row(&self, y: u32) -> &[T] {
        let from = self.to_index(0, y);
        &self.pixels[from..from + self.width() as usize]
    }
}

impl<'a, T> Picture<&'a mut [T]> {
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut T {
        let index = self.to_index(x, y);
        &mut self.pixels[index]
    }

    pub fn buffer_mut(&mut self) -> &mut [T] {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emissive_on_any_channel() {
        assert!(!Color::new(1.0, 1.0, 1.0).is_emissive());
        assert!(Color::new(0.2, 1.5, 0.0).is_emissive());
        assert!(Color::new(0.0, 0.0, 1.01).is_emissive());
    }

    #[test]
    fn color_product_is_componentwise() {
        let c = Color::new(1.0, 0.4, 0.6) * Color::new(0.5, 0.5, 2.0);
        assert_eq!(c, Color::new(0.5, 0.2, 1.2));
    }

    #[test]
    fn sum_and_average() {
        let avg = [Color::new(1.0, 0.0, 0.5), Color::new(0.0, 1.0, 0.5)]
            .into_iter()
            .sum::<Color>() / 2.0;
        assert_eq!(avg, Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn quantise_clamps() {
        assert_eq!(Rgb8::from(Color::new(2.0, -1.0, 0.5)), Rgb8::new(255, 0, 127));
    }

    #[test]
    fn picture_is_row_major() {
        let mut picture = Picture::filled(0u8, (3, 2));
        *picture.view_mut().pixel_mut(1, 1) = 7;
        assert_eq!(picture.view().row(1), &[0, 7, 0]);
        assert_eq!(*picture.view().pixel(1, 1), 7);
    }
}
