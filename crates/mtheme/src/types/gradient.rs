//! Multi-stop gradients.

use crate::error::{Result, ThemeError};
use crate::macros::named_enum;
use crate::types::color::RgbaColor;
use crate::types::color_spec::{ColorSpec, StylePalette};
use crate::types::pixbuf::Pixbuf;

named_enum! {
    pub enum GradientType {
        Horizontal => "horizontal",
        Vertical => "vertical",
        Diagonal => "diagonal",
    }
}

/// A direction and an ordered list of color stops, evenly spaced.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    pub kind: GradientType,
    pub color_specs: Vec<ColorSpec>,
}

impl GradientSpec {
    pub fn new(kind: GradientType) -> Self {
        Self {
            kind,
            color_specs: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.color_specs.is_empty() {
            return Err(ThemeError::semantic(
                "Gradients should have at least one color",
            ));
        }
        Ok(())
    }

    /// Render the gradient to a `width` x `height` image.
    pub fn render(&self, palette: &dyn StylePalette, width: u32, height: u32) -> Pixbuf {
        let stops: Vec<RgbaColor> = self.color_specs.iter().map(|c| c.render(palette)).collect();
        let mut out = Pixbuf::new(width, height);
        if stops.is_empty() || width == 0 || height == 0 {
            return out;
        }

        match self.kind {
            GradientType::Horizontal => {
                let row = sample(&stops, width as usize);
                for y in 0..height {
                    for (x, color) in row.iter().enumerate() {
                        out.put(x as u32, y, *color);
                    }
                }
            }
            GradientType::Vertical => {
                let column = sample(&stops, height as usize);
                for (y, color) in column.iter().enumerate() {
                    for x in 0..width {
                        out.put(x, y as u32, *color);
                    }
                }
            }
            GradientType::Diagonal => {
                // A horizontal strip twice as wide, shifted further right
                // on each row.
                let line = sample(&stops, 2 * width as usize - 1);
                let step = if height > 1 {
                    (width - 1) as f64 / (height - 1) as f64
                } else {
                    0.0
                };
                for y in 0..height {
                    let offset = (y as f64 * step) as usize;
                    for x in 0..width {
                        out.put(x, y, line[offset + x as usize]);
                    }
                }
            }
        }
        out
    }
}

/// `n` colors interpolated evenly across `stops`.
fn sample(stops: &[RgbaColor], n: usize) -> Vec<RgbaColor> {
    if stops.len() == 1 || n <= 1 {
        return vec![stops[0]; n];
    }
    let segments = (stops.len() - 1) as f64;
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64 * segments;
            let index = (t.floor() as usize).min(stops.len() - 2);
            stops[index].lerp(&stops[index + 1], t - index as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::color_spec::DefaultPalette;

    fn spec(kind: GradientType, colors: &[&str]) -> GradientSpec {
        GradientSpec {
            kind,
            color_specs: colors.iter().map(|c| ColorSpec::parse(c).unwrap()).collect(),
        }
    }

    #[test]
    fn needs_a_stop() {
        assert!(GradientSpec::new(GradientType::Vertical).validate().is_err());
        assert!(spec(GradientType::Vertical, &["red"]).validate().is_ok());
    }

    #[test]
    fn horizontal_endpoints() {
        let g = spec(GradientType::Horizontal, &["#000000", "#ffffff"]);
        let image = g.render(&DefaultPalette::default(), 5, 2);
        assert_eq!(image.get(0, 1), Some(RgbaColor::black()));
        assert_eq!(image.get(4, 0), Some(RgbaColor::white()));
        assert_eq!(image.get(2, 0), Some(RgbaColor::rgb(128, 128, 128)));
    }

    #[test]
    fn vertical_three_stops() {
        let g = spec(GradientType::Vertical, &["#ff0000", "#00ff00", "#0000ff"]);
        let image = g.render(&DefaultPalette::default(), 1, 5);
        assert_eq!(image.get(0, 0), Some(RgbaColor::rgb(255, 0, 0)));
        assert_eq!(image.get(0, 2), Some(RgbaColor::rgb(0, 255, 0)));
        assert_eq!(image.get(0, 4), Some(RgbaColor::rgb(0, 0, 255)));
    }

    #[test]
    fn diagonal_corners() {
        let g = spec(GradientType::Diagonal, &["#000000", "#ffffff"]);
        let image = g.render(&DefaultPalette::default(), 4, 4);
        assert_eq!(image.get(0, 0), Some(RgbaColor::black()));
        assert_eq!(image.get(3, 3), Some(RgbaColor::white()));
        assert_eq!(image.get(3, 0), image.get(0, 3));
    }

    #[test]
    fn single_stop_is_solid() {
        let g = spec(GradientType::Diagonal, &["navy"]);
        let image = g.render(&DefaultPalette::default(), 3, 2);
        assert!(image.pixels().all(|p| p == RgbaColor::rgb(0, 0, 128)));
    }
}
