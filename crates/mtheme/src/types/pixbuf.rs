//! In-memory RGBA images, stored as [`image::RgbaImage`].

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::types::color::RgbaColor;

impl From<RgbaColor> for Rgba<u8> {
    fn from(color: RgbaColor) -> Self {
        let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([color.r, color.g, color.b, alpha])
    }
}

impl From<Rgba<u8>> for RgbaColor {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        RgbaColor::rgba(r, g, b, a as f32 / 255.0)
    }
}

/// A rectangular RGBA image.
#[derive(Clone, Debug, PartialEq)]
pub struct Pixbuf {
    image: RgbaImage,
}

impl From<RgbaImage> for Pixbuf {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl Pixbuf {
    /// A fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn filled(width: u32, height: u32, color: RgbaColor) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, color.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The underlying buffer, for rasterizers that blit it directly.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = RgbaColor> + '_ {
        self.image.pixels().map(|p| RgbaColor::from(*p))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<RgbaColor> {
        self.image.get_pixel_checked(x, y).map(|p| RgbaColor::from(*p))
    }

    pub fn put(&mut self, x: u32, y: u32, color: RgbaColor) {
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = color.into();
        }
    }

    /// Nearest-neighbour resize.
    pub fn scaled(&self, width: u32, height: u32) -> Pixbuf {
        if width == self.width() && height == self.height() {
            return self.clone();
        }
        if self.is_empty() || width == 0 || height == 0 {
            return Pixbuf::new(width, height);
        }
        imageops::resize(&self.image, width, height, FilterType::Nearest).into()
    }

    /// Composite `foreground` over this image at the given opacity. The
    /// foreground is scaled to this image's size first.
    pub fn composite(&self, foreground: &Pixbuf, alpha: f64) -> Pixbuf {
        let fg = foreground.scaled(self.width(), self.height());
        let mut image = self.image.clone();
        for (bg, fg) in image.pixels_mut().zip(fg.image.pixels()) {
            *bg = RgbaColor::from(*fg)
                .over(&RgbaColor::from(*bg), alpha)
                .into();
        }
        image.into()
    }

    /// Multiply every pixel's alpha.
    pub fn with_alpha(&self, alpha: f64) -> Pixbuf {
        let mut image = self.image.clone();
        for pixel in image.pixels_mut() {
            pixel[3] = (pixel[3] as f64 * alpha).round().clamp(0.0, 255.0) as u8;
        }
        image.into()
    }

    /// Recolor by intensity: dark pixels tend to black, mid-tones to
    /// `color`, light pixels to white. Alpha is kept.
    pub fn colorize(&self, color: RgbaColor) -> Pixbuf {
        let mut image = self.image.clone();
        for pixel in image.pixels_mut() {
            let source = RgbaColor::from(*pixel);
            let intensity = source.intensity() as f64;
            let tinted = if intensity <= 0.5 {
                RgbaColor::black().lerp(&color, intensity * 2.0)
            } else {
                color.lerp(&RgbaColor::white(), (intensity - 0.5) * 2.0)
            };
            *pixel = Rgba([tinted.r, tinted.g, tinted.b, pixel[3]]);
        }
        image.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_round_trip_through_the_buffer() {
        let mut pixbuf = Pixbuf::new(2, 1);
        pixbuf.put(1, 0, RgbaColor::rgb(10, 20, 30));
        pixbuf.put(5, 5, RgbaColor::white());
        assert_eq!(pixbuf.get(0, 0), Some(RgbaColor::transparent()));
        assert_eq!(pixbuf.get(1, 0), Some(RgbaColor::rgb(10, 20, 30)));
        assert_eq!(pixbuf.get(2, 0), None);
        assert_eq!(pixbuf.as_image().get_pixel(1, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn scaled_repeats_pixels() {
        let mut src = Pixbuf::new(2, 1);
        src.put(0, 0, RgbaColor::black());
        src.put(1, 0, RgbaColor::white());
        let out = src.scaled(4, 1);
        assert_eq!(out.get(1, 0), Some(RgbaColor::black()));
        assert_eq!(out.get(2, 0), Some(RgbaColor::white()));
    }

    #[test]
    fn scaling_to_or_from_nothing_is_empty() {
        assert!(Pixbuf::new(0, 0).scaled(3, 3).pixels().all(|p| p.a == 0.0));
        assert!(Pixbuf::filled(2, 2, RgbaColor::white()).scaled(0, 4).is_empty());
    }

    #[test]
    fn composite_opaque_foreground_wins() {
        let bg = Pixbuf::filled(2, 2, RgbaColor::rgb(0, 0, 255));
        let fg = Pixbuf::filled(1, 1, RgbaColor::rgb(255, 0, 0));
        let out = bg.composite(&fg, 1.0);
        assert!(out.pixels().all(|p| p == RgbaColor::rgb(255, 0, 0)));
    }

    #[test]
    fn with_alpha_scales_the_alpha_channel() {
        let out = Pixbuf::filled(1, 1, RgbaColor::white()).with_alpha(0.5);
        assert_eq!(out.as_image().get_pixel(0, 0), &Rgba([255, 255, 255, 128]));
    }

    #[test]
    fn colorize_keeps_extremes() {
        let mut src = Pixbuf::new(2, 1);
        src.put(0, 0, RgbaColor::black());
        src.put(1, 0, RgbaColor::white());
        let out = src.colorize(RgbaColor::rgb(255, 0, 0));
        assert_eq!(out.get(0, 0), Some(RgbaColor::black()));
        assert_eq!(out.get(1, 0), Some(RgbaColor::white()));
    }
}
