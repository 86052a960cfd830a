//! Draw operations and draw-op lists.
//!
//! Geometry fields hold pre-tokenized expressions that are evaluated
//! against the region being painted each time the op runs.

use std::rc::Rc;

use posexpr::Expr;

use crate::macros::named_enum;
use crate::types::color_spec::{ColorSpec, GtkState};
use crate::types::gradient::GradientSpec;
use crate::types::pixbuf::Pixbuf;

/// Handle to a draw-op list owned by a [`Theme`](crate::types::Theme).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawOpListId(pub(crate) usize);

impl DrawOpListId {
    pub fn index(self) -> usize {
        self.0
    }
}

named_enum! {
    pub enum GtkShadow {
        None => "none",
        In => "in",
        Out => "out",
        EtchedIn => "etched_in",
        EtchedOut => "etched_out",
    }
}

named_enum! {
    pub enum GtkArrow {
        Up => "up",
        Down => "down",
        Left => "left",
        Right => "right",
    }
}

/// The four expressions locating a rectangle inside the current region.
#[derive(Clone, Debug, PartialEq)]
pub struct RectExpr {
    pub x: Expr,
    pub y: Expr,
    pub width: Expr,
    pub height: Expr,
}

impl RectExpr {
    pub fn new(x: Expr, y: Expr, width: Expr, height: Expr) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `0, 0, width, height`: the whole region.
    pub fn full() -> Self {
        Self::new(
            Expr::literal("0"),
            Expr::literal("0"),
            Expr::literal("width"),
            Expr::literal("height"),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Line {
        color: ColorSpec,
        x1: Expr,
        y1: Expr,
        x2: Expr,
        y2: Expr,
        width: i32,
        dash_on_length: i32,
        dash_off_length: i32,
    },
    Rectangle {
        color: ColorSpec,
        rect: RectExpr,
        filled: bool,
    },
    Arc {
        color: ColorSpec,
        rect: RectExpr,
        filled: bool,
        start_angle: f64,
        extent_angle: f64,
    },
    Clip {
        rect: RectExpr,
    },
    Tint {
        color: ColorSpec,
        rect: RectExpr,
        alpha: f64,
    },
    Gradient {
        spec: GradientSpec,
        rect: RectExpr,
        alpha: f64,
    },
    Image {
        pixbuf: Rc<Pixbuf>,
        colorize: Option<ColorSpec>,
        rect: RectExpr,
        alpha: f64,
    },
    GtkArrow {
        state: GtkState,
        shadow: GtkShadow,
        arrow: GtkArrow,
        rect: RectExpr,
        filled: bool,
    },
    GtkBox {
        state: GtkState,
        shadow: GtkShadow,
        rect: RectExpr,
    },
    GtkVline {
        state: GtkState,
        x: Expr,
        y1: Expr,
        y2: Expr,
    },
    Icon {
        rect: RectExpr,
        alpha: f64,
    },
    Title {
        color: ColorSpec,
        x: Expr,
        y: Expr,
    },
    /// Draw another list inside a sub-rectangle.
    Include {
        list: DrawOpListId,
        rect: RectExpr,
    },
    /// Repeat another list across a rectangle.
    Tile {
        list: DrawOpListId,
        rect: RectExpr,
        tile_xoffset: Expr,
        tile_yoffset: Expr,
        tile_width: Expr,
        tile_height: Expr,
    },
}

impl DrawOp {
    /// The list this op draws, for include and tile ops.
    pub fn referenced_list(&self) -> Option<DrawOpListId> {
        match self {
            DrawOp::Include { list, .. } | DrawOp::Tile { list, .. } => Some(*list),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DrawOp::Line { .. } => "line",
            DrawOp::Rectangle { .. } => "rectangle",
            DrawOp::Arc { .. } => "arc",
            DrawOp::Clip { .. } => "clip",
            DrawOp::Tint { .. } => "tint",
            DrawOp::Gradient { .. } => "gradient",
            DrawOp::Image { .. } => "image",
            DrawOp::GtkArrow { .. } => "gtk_arrow",
            DrawOp::GtkBox { .. } => "gtk_box",
            DrawOp::GtkVline { .. } => "gtk_vline",
            DrawOp::Icon { .. } => "icon",
            DrawOp::Title { .. } => "title",
            DrawOp::Include { .. } => "include",
            DrawOp::Tile { .. } => "tile",
        }
    }
}

/// An ordered sequence of draw operations. Lists are appended to while a
/// theme loads and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawOpList {
    ops: Vec<DrawOp>,
}

impl DrawOpList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawOp> {
        self.ops.iter()
    }
}

impl<'a> IntoIterator for &'a DrawOpList {
    type Item = &'a DrawOp;
    type IntoIter = std::slice::Iter<'a, DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
