//! Frame geometry: where the title, buttons and borders of a frame go.

use bitflags::bitflags;
use mtheme::{ButtonType, FrameLayout, FramePiece};

/// A rectangle in frame coordinates. Width and height are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a rectangle, clamping width and height to be non-negative.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// The overlap of two rectangles, or an empty rectangle at the origin.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self
            .x
            .saturating_add(self.width)
            .min(other.x.saturating_add(other.width));
        let y2 = self
            .y
            .saturating_add(self.height)
            .min(other.y.saturating_add(other.height));

        if x2 > x1 && y2 > y1 {
            Rect::new(x1, y1, x2 - x1, y2 - y1)
        } else {
            Rect::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}

bitflags! {
    /// Window state and permitted operations, as far as decoration cares.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FrameFlags: u32 {
        const ALLOWS_DELETE = 1 << 0;
        const ALLOWS_MENU = 1 << 1;
        const ALLOWS_MINIMIZE = 1 << 2;
        const ALLOWS_MAXIMIZE = 1 << 3;
        const MAXIMIZED = 1 << 4;
        const SHADED = 1 << 5;
        const HAS_FOCUS = 1 << 6;
    }
}

/// Pixel geometry of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGeometry {
    pub left_width: i32,
    pub right_width: i32,
    pub top_height: i32,
    pub bottom_height: i32,
    /// Full frame size, borders included.
    pub width: i32,
    pub height: i32,
    pub title_rect: Rect,
    pub close_rect: Rect,
    pub max_rect: Rect,
    pub min_rect: Rect,
    pub menu_rect: Rect,
    pub spacer_rect: Rect,
    /// The maximize slot shows the unmaximize button.
    pub shows_unmaximize: bool,
}

impl FrameGeometry {
    pub fn button_rect(&self, button: ButtonType) -> Rect {
        match button {
            ButtonType::Close => self.close_rect,
            ButtonType::Maximize | ButtonType::Unmaximize => self.max_rect,
            ButtonType::Minimize => self.min_rect,
            ButtonType::Menu => self.menu_rect,
        }
    }

    /// The region a frame piece covers. Edges run between the corners;
    /// the end pieces are the parts of an edge next to a corner, as long as
    /// the adjoining border is thick.
    pub fn piece_rect(&self, piece: FramePiece, layout: &FrameLayout) -> Rect {
        let (w, h) = (self.width, self.height);
        let (left, right) = (self.left_width, self.right_width);
        let (top, bottom) = (self.top_height, self.bottom_height);
        let top_edge = layout.top_titlebar_edge;
        let side_height = h - top - bottom;

        match piece {
            FramePiece::EntireBackground | FramePiece::Overlay => Rect::new(0, 0, w, h),
            FramePiece::Titlebar => Rect::new(0, 0, w, top),
            FramePiece::TitlebarMiddle => Rect::new(
                layout.left_titlebar_edge,
                top_edge,
                w - layout.left_titlebar_edge - layout.right_titlebar_edge,
                top - top_edge - layout.bottom_titlebar_edge,
            ),
            FramePiece::LeftTitlebarEdge => Rect::new(0, 0, layout.left_titlebar_edge, top),
            FramePiece::RightTitlebarEdge => Rect::new(
                w - layout.right_titlebar_edge,
                0,
                layout.right_titlebar_edge,
                top,
            ),
            FramePiece::TopTitlebarEdge => Rect::new(0, 0, w, top_edge),
            FramePiece::BottomTitlebarEdge => Rect::new(
                0,
                top - layout.bottom_titlebar_edge,
                w,
                layout.bottom_titlebar_edge,
            ),
            FramePiece::Title => self.title_rect,
            FramePiece::LeftEdge => Rect::new(0, top, left, side_height),
            FramePiece::RightEdge => Rect::new(w - right, top, right, side_height),
            FramePiece::BottomEdge => Rect::new(left, h - bottom, w - left - right, bottom),
            FramePiece::TopEdge => Rect::new(left, 0, w - left - right, top_edge),
            FramePiece::TopLeftCorner => Rect::new(0, 0, left, top_edge),
            FramePiece::TopRightCorner => Rect::new(w - right, 0, right, top_edge),
            FramePiece::BottomLeftCorner => Rect::new(0, h - bottom, left, bottom),
            FramePiece::BottomRightCorner => Rect::new(w - right, h - bottom, right, bottom),
            FramePiece::LeftEndOfTopEdge => Rect::new(left, 0, left, top_edge),
            FramePiece::RightEndOfTopEdge => Rect::new(w - 2 * right, 0, right, top_edge),
            FramePiece::LeftEndOfBottomEdge => Rect::new(left, h - bottom, left, bottom),
            FramePiece::RightEndOfBottomEdge => {
                Rect::new(w - 2 * right, h - bottom, right, bottom)
            }
            FramePiece::TopEndOfLeftEdge => Rect::new(0, top, left, left),
            FramePiece::BottomEndOfLeftEdge => Rect::new(0, h - bottom - left, left, left),
            FramePiece::TopEndOfRightEdge => Rect::new(w - right, top, right, right),
            FramePiece::BottomEndOfRightEdge => {
                Rect::new(w - right, h - bottom - right, right, right)
            }
            FramePiece::Spacer => self.spacer_rect,
        }
    }
}

/// Lay out a frame around a client of the given size.
///
/// Buttons are placed right to left (close, maximize, minimize) from the
/// right titlebar edge while there is room, followed by a spacer; the menu
/// button goes at the left titlebar edge. A right-side control the menu
/// button overlaps is collapsed to zero size. The title takes the space
/// left between them.
pub fn calc_geometry(
    layout: &FrameLayout,
    text_height: i32,
    flags: FrameFlags,
    client_width: i32,
    client_height: i32,
) -> FrameGeometry {
    let bb = layout.button_border;
    let tb = layout.title_border;

    let buttons_height = layout.button_height + bb.top + bb.bottom;
    let title_height = if layout.has_title {
        text_height + layout.title_vertical_pad + tb.top + tb.bottom
    } else {
        0
    };
    let top_height = buttons_height.max(title_height).max(layout.spacer_height);
    let bottom_height = if flags.contains(FrameFlags::SHADED) {
        0
    } else {
        layout.bottom_height
    };

    // client sizes come from the caller unchecked
    let width = client_width
        .saturating_add(layout.left_width)
        .saturating_add(layout.right_width);
    let mut height = top_height.saturating_add(bottom_height);
    if !flags.contains(FrameFlags::SHADED) {
        height = height.saturating_add(client_height);
    }

    let button_y = (top_height - buttons_height) / 2 + bb.top;
    let mut x = width.saturating_sub(layout.right_titlebar_edge);

    let place_button = |allowed: bool, x: &mut i32| {
        if allowed && *x >= 0 {
            let rect = Rect::new(
                *x - bb.right - layout.button_width,
                button_y,
                layout.button_width,
                layout.button_height,
            );
            *x = rect.x - bb.left;
            rect
        } else {
            Rect::default()
        }
    };

    let mut close_rect = place_button(flags.contains(FrameFlags::ALLOWS_DELETE), &mut x);
    let mut max_rect = place_button(flags.contains(FrameFlags::ALLOWS_MAXIMIZE), &mut x);
    let mut min_rect = place_button(flags.contains(FrameFlags::ALLOWS_MINIMIZE), &mut x);

    let any_button = !close_rect.is_empty() || !max_rect.is_empty() || !min_rect.is_empty();
    let mut spacer_rect = if any_button && x >= 0 {
        let rect = Rect::new(
            x - layout.spacer_padding - layout.spacer_width,
            (top_height - layout.spacer_height) / 2,
            layout.spacer_width,
            layout.spacer_height,
        );
        x = rect.x - layout.spacer_padding;
        rect
    } else {
        Rect::default()
    };

    let title_right_edge = x.saturating_sub(tb.right);

    let mut x = layout.left_titlebar_edge;
    let menu_rect = if flags.contains(FrameFlags::ALLOWS_MENU) && x < title_right_edge {
        let rect = Rect::new(
            x + bb.left,
            button_y,
            layout.button_width,
            layout.button_height,
        );
        x = rect.right() + bb.right;
        rect
    } else {
        Rect::default()
    };

    if !menu_rect.is_empty() {
        for rect in [
            &mut close_rect,
            &mut max_rect,
            &mut min_rect,
            &mut spacer_rect,
        ] {
            if !rect.is_empty() && rect.x < menu_rect.right() {
                *rect = Rect::default();
            }
        }
    }

    let title_x = x + tb.left;
    let title_width = title_right_edge.saturating_sub(title_x);
    let title_height = top_height - tb.top - tb.bottom;
    let title_rect = if layout.has_title && title_width >= 0 && title_height >= 0 {
        Rect::new(title_x, tb.top, title_width, title_height)
    } else {
        Rect::default()
    };

    FrameGeometry {
        left_width: layout.left_width,
        right_width: layout.right_width,
        top_height,
        bottom_height,
        width,
        height,
        title_rect,
        close_rect,
        max_rect,
        min_rect,
        menu_rect,
        spacer_rect,
        shows_unmaximize: flags.contains(FrameFlags::MAXIMIZED),
    }
}
