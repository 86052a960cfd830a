//! The drawing surface a frame is painted onto.
//!
//! Rasterization belongs to the toolkit; the renderer only computes where
//! things go and hands resolved colors, rectangles and images to a
//! [`Rasterizer`].

use mtheme::{GtkArrow, GtkShadow, GtkState, Pixbuf, RgbaColor, StylePalette};

use crate::geometry::Rect;

/// A point in frame coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Dash pattern and width of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineStyle {
    pub width: i32,
    pub dash_on: i32,
    pub dash_off: i32,
}

/// Toolkit drawing primitives.
///
/// Clips nest: every `push_clip` is matched by a `pop_clip`, and drawing is
/// limited to the intersection of all pushed rectangles.
pub trait Rasterizer {
    /// The style colors `gtk:` color specs resolve against.
    fn palette(&self) -> &dyn StylePalette;

    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);

    fn draw_line(&mut self, color: RgbaColor, from: Point, to: Point, style: LineStyle);

    fn draw_rectangle(&mut self, color: RgbaColor, rect: Rect, filled: bool);

    /// Angles in degrees, clockwise from three o'clock.
    fn draw_arc(&mut self, color: RgbaColor, rect: Rect, filled: bool, start: f64, extent: f64);

    /// Blend `color` over what is already drawn.
    fn tint(&mut self, color: RgbaColor, rect: Rect, alpha: f64);

    /// Draw an image at `rect`'s origin. The image is already sized to it.
    fn draw_pixbuf(&mut self, pixbuf: &Pixbuf, rect: Rect);

    fn draw_gtk_arrow(
        &mut self,
        state: GtkState,
        shadow: GtkShadow,
        arrow: GtkArrow,
        rect: Rect,
        filled: bool,
    );

    fn draw_gtk_box(&mut self, state: GtkState, shadow: GtkShadow, rect: Rect);

    fn draw_gtk_vline(&mut self, state: GtkState, x: i32, y1: i32, y2: i32);

    /// Draw the window icon scaled into `rect`.
    fn draw_icon(&mut self, rect: Rect, alpha: f64);

    /// Draw the window title with its top-left corner at `origin`.
    fn draw_title(&mut self, color: RgbaColor, origin: Point, text: &str);
}
