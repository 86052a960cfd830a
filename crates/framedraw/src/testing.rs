//! A [`Rasterizer`] that records what it is asked to draw.
//!
//! Useful for asserting on the output of [`draw_frame`](crate::draw_frame)
//! without a toolkit:
//!
//! ```
//! use framedraw::testing::{DrawCommand, RecordingCanvas};
//! use framedraw::{Rasterizer, Rect};
//! use mtheme::RgbaColor;
//!
//! let mut canvas = RecordingCanvas::new();
//! canvas.draw_rectangle(RgbaColor::rgb(255, 0, 0), Rect::new(0, 0, 4, 4), true);
//! assert_eq!(canvas.to_snapshot(), "rectangle #ff0000 (0,0 4x4) filled");
//! assert!(matches!(canvas.commands()[0], DrawCommand::Rectangle { .. }));
//! ```

use std::fmt;

use mtheme::{DefaultPalette, GtkArrow, GtkShadow, GtkState, Pixbuf, RgbaColor, StylePalette};
use unicode_display_width::width as display_width;

use crate::canvas::{LineStyle, Point, Rasterizer};
use crate::geometry::Rect;

// =============================================================================
// Recorded commands
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushClip(Rect),
    PopClip,
    Line {
        color: RgbaColor,
        from: Point,
        to: Point,
        style: LineStyle,
    },
    Rectangle {
        color: RgbaColor,
        rect: Rect,
        filled: bool,
    },
    Arc {
        color: RgbaColor,
        rect: Rect,
        filled: bool,
        start: f64,
        extent: f64,
    },
    Tint {
        color: RgbaColor,
        rect: Rect,
        alpha: f64,
    },
    /// An image, summarized by its size and top-left pixel.
    Pixbuf {
        rect: Rect,
        width: u32,
        height: u32,
        top_left: Option<RgbaColor>,
    },
    GtkArrow {
        state: GtkState,
        shadow: GtkShadow,
        arrow: GtkArrow,
        rect: Rect,
        filled: bool,
    },
    GtkBox {
        state: GtkState,
        shadow: GtkShadow,
        rect: Rect,
    },
    GtkVline {
        state: GtkState,
        x: i32,
        y1: i32,
        y2: i32,
    },
    Icon {
        rect: Rect,
        alpha: f64,
    },
    Title {
        color: RgbaColor,
        origin: Point,
        text: String,
        /// Width of the text in terminal columns.
        columns: usize,
    },
}

struct R(Rect);

impl fmt::Display for R {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        write!(f, "({},{} {}x{})", r.x, r.y, r.width, r.height)
    }
}

fn filled(filled: bool) -> &'static str {
    if filled { " filled" } else { "" }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::PushClip(rect) => write!(f, "clip {}", R(*rect)),
            DrawCommand::PopClip => f.write_str("unclip"),
            DrawCommand::Line {
                color,
                from,
                to,
                style,
            } => {
                write!(
                    f,
                    "line {color} ({},{}) -> ({},{})",
                    from.x, from.y, to.x, to.y
                )?;
                if style.width != 0 {
                    write!(f, " width {}", style.width)?;
                }
                if style.dash_on != 0 || style.dash_off != 0 {
                    write!(f, " dash {}/{}", style.dash_on, style.dash_off)?;
                }
                Ok(())
            }
            DrawCommand::Rectangle {
                color,
                rect,
                filled: fill,
            } => write!(f, "rectangle {color} {}{}", R(*rect), filled(*fill)),
            DrawCommand::Arc {
                color,
                rect,
                filled: fill,
                start,
                extent,
            } => write!(
                f,
                "arc {color} {} {start}+{extent}{}",
                R(*rect),
                filled(*fill)
            ),
            DrawCommand::Tint { color, rect, alpha } => {
                write!(f, "tint {color} {} alpha {alpha}", R(*rect))
            }
            DrawCommand::Pixbuf {
                rect, top_left, ..
            } => {
                write!(f, "pixbuf {}", R(*rect))?;
                if let Some(color) = top_left {
                    write!(f, " {color}")?;
                }
                Ok(())
            }
            DrawCommand::GtkArrow {
                state,
                shadow,
                arrow,
                rect,
                filled: fill,
            } => write!(
                f,
                "gtk_arrow {arrow} {state}/{shadow} {}{}",
                R(*rect),
                filled(*fill)
            ),
            DrawCommand::GtkBox {
                state,
                shadow,
                rect,
            } => write!(f, "gtk_box {state}/{shadow} {}", R(*rect)),
            DrawCommand::GtkVline { state, x, y1, y2 } => {
                write!(f, "gtk_vline {state} x={x} {y1}..{y2}")
            }
            DrawCommand::Icon { rect, alpha } => write!(f, "icon {} alpha {alpha}", R(*rect)),
            DrawCommand::Title {
                color,
                origin,
                text,
                ..
            } => write!(f, "title {color} ({},{}) {text:?}", origin.x, origin.y),
        }
    }
}

// =============================================================================
// RecordingCanvas
// =============================================================================

/// Records every call in order. Colors resolve against a [`DefaultPalette`]
/// unless another palette is supplied.
pub struct RecordingCanvas {
    palette: Box<dyn StylePalette>,
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::with_palette(DefaultPalette::default())
    }

    pub fn with_palette(palette: impl StylePalette + 'static) -> Self {
        Self {
            palette: Box::new(palette),
            commands: Vec::new(),
            clip_depth: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded commands other than clip pushes and pops.
    pub fn drawing(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| !matches!(c, DrawCommand::PushClip(_) | DrawCommand::PopClip))
    }

    /// Clips pushed and not yet popped.
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
    }

    /// One command per line. Commands drawn inside a clip are indented
    /// under it and the pops are left out.
    pub fn to_snapshot(&self) -> String {
        let mut lines = Vec::new();
        let mut depth = 0usize;
        for command in &self.commands {
            match command {
                DrawCommand::PopClip => depth = depth.saturating_sub(1),
                _ => {
                    lines.push(format!("{}{command}", "  ".repeat(depth)));
                    if matches!(command, DrawCommand::PushClip(_)) {
                        depth += 1;
                    }
                }
            }
        }
        lines.join("\n")
    }

    fn record(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Rasterizer for RecordingCanvas {
    fn palette(&self) -> &dyn StylePalette {
        self.palette.as_ref()
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.record(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.record(DrawCommand::PopClip);
    }

    fn draw_line(&mut self, color: RgbaColor, from: Point, to: Point, style: LineStyle) {
        self.record(DrawCommand::Line {
            color,
            from,
            to,
            style,
        });
    }

    fn draw_rectangle(&mut self, color: RgbaColor, rect: Rect, filled: bool) {
        self.record(DrawCommand::Rectangle {
            color,
            rect,
            filled,
        });
    }

    fn draw_arc(&mut self, color: RgbaColor, rect: Rect, filled: bool, start: f64, extent: f64) {
        self.record(DrawCommand::Arc {
            color,
            rect,
            filled,
            start,
            extent,
        });
    }

    fn tint(&mut self, color: RgbaColor, rect: Rect, alpha: f64) {
        self.record(DrawCommand::Tint { color, rect, alpha });
    }

    fn draw_pixbuf(&mut self, pixbuf: &Pixbuf, rect: Rect) {
        self.record(DrawCommand::Pixbuf {
            rect,
            width: pixbuf.width(),
            height: pixbuf.height(),
            top_left: pixbuf.get(0, 0),
        });
    }

    fn draw_gtk_arrow(
        &mut self,
        state: GtkState,
        shadow: GtkShadow,
        arrow: GtkArrow,
        rect: Rect,
        filled: bool,
    ) {
        self.record(DrawCommand::GtkArrow {
            state,
            shadow,
            arrow,
            rect,
            filled,
        });
    }

    fn draw_gtk_box(&mut self, state: GtkState, shadow: GtkShadow, rect: Rect) {
        self.record(DrawCommand::GtkBox {
            state,
            shadow,
            rect,
        });
    }

    fn draw_gtk_vline(&mut self, state: GtkState, x: i32, y1: i32, y2: i32) {
        self.record(DrawCommand::GtkVline { state, x, y1, y2 });
    }

    fn draw_icon(&mut self, rect: Rect, alpha: f64) {
        self.record(DrawCommand::Icon { rect, alpha });
    }

    fn draw_title(&mut self, color: RgbaColor, origin: Point, text: &str) {
        self.record(DrawCommand::Title {
            color,
            origin,
            text: text.to_string(),
            columns: display_width(text) as usize,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_indents_inside_clips() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_clip(Rect::new(0, 0, 10, 10));
        canvas.draw_icon(Rect::new(1, 1, 8, 8), 1.0);
        canvas.pop_clip();
        canvas.draw_gtk_vline(GtkState::Normal, 3, 0, 9);

        assert_eq!(
            canvas.to_snapshot(),
            "clip (0,0 10x10)\n  icon (1,1 8x8) alpha 1\ngtk_vline normal x=3 0..9"
        );
        assert_eq!(canvas.clip_depth(), 0);
        assert_eq!(canvas.drawing().count(), 2);
    }

    #[test]
    fn title_width_counts_columns() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_title(RgbaColor::black(), Point::new(0, 0), "日本");
        match &canvas.commands()[0] {
            DrawCommand::Title { columns, .. } => assert_eq!(*columns, 4),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
