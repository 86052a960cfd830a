use std::rc::Rc;

use framedraw::testing::{DrawCommand, RecordingCanvas};
use framedraw::{
    FrameContext, FrameFlags, FrameGeometry, Rect, calc_geometry, draw_frame, draw_menu_icon,
    draw_op_list,
};
use mtheme::{
    ButtonState, ButtonType, ColorSpec, DrawOp, DrawOpListId, FrameLayout, FramePiece,
    FrameStyle, GradientSpec, GradientType, GtkState, LayoutId, MenuIconType, Pixbuf, RectExpr,
    RgbaColor, StyleId, TextureSpec, Theme,
};
use posexpr::Expr;

const RED: RgbaColor = RgbaColor::rgb(255, 0, 0);
const BLUE: RgbaColor = RgbaColor::rgb(0, 0, 255);

fn expr(source: &str) -> Expr {
    Expr::parse(source).unwrap()
}

fn rect_expr(x: &str, y: &str, width: &str, height: &str) -> RectExpr {
    RectExpr::new(expr(x), expr(y), expr(width), expr(height))
}

fn solid(color: RgbaColor) -> TextureSpec {
    TextureSpec::Solid(ColorSpec::Basic(color))
}

fn fill(color: RgbaColor) -> DrawOp {
    DrawOp::Rectangle {
        color: ColorSpec::Basic(color),
        rect: RectExpr::full(),
        filled: true,
    }
}

fn rectangles(canvas: &RecordingCanvas) -> Vec<Rect> {
    canvas
        .drawing()
        .filter_map(|c| match c {
            DrawCommand::Rectangle { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect()
}

fn clips(canvas: &RecordingCanvas) -> Vec<Rect> {
    canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::PushClip(rect) => Some(*rect),
            _ => None,
        })
        .collect()
}

/// A 2px border, 10x10 buttons and no title text: a 20x10 client gives a
/// 24x22 frame with a 10px titlebar.
fn small_layout() -> FrameLayout {
    FrameLayout {
        left_width: 2,
        right_width: 2,
        bottom_height: 2,
        button_width: 10,
        button_height: 10,
        ..FrameLayout::default()
    }
}

struct Fixture {
    theme: Theme,
    layout: LayoutId,
}

impl Fixture {
    fn new() -> Self {
        let mut theme = Theme::new("test");
        let layout = theme.add_layout("small", small_layout()).unwrap();
        Self { theme, layout }
    }

    fn list(&mut self, name: &str, ops: Vec<DrawOp>) -> DrawOpListId {
        let id = self.theme.add_draw_op_list(name).unwrap();
        for op in ops {
            self.theme.draw_op_list_mut(id).push(op);
        }
        id
    }

    fn style(
        &mut self,
        name: &str,
        parent: Option<StyleId>,
        pieces: Vec<(FramePiece, TextureSpec)>,
    ) -> StyleId {
        let mut style = FrameStyle::new(parent, self.layout);
        for (piece, texture) in pieces {
            style.set_piece(piece, texture).unwrap();
        }
        self.theme.add_style(name, style).unwrap()
    }

    fn geometry(&self, flags: FrameFlags) -> FrameGeometry {
        calc_geometry(self.theme.layout(self.layout), 0, flags, 20, 10)
    }

    fn draw(&self, style: StyleId, flags: FrameFlags, ctx: &FrameContext) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        draw_frame(&self.theme, style, &self.geometry(flags), ctx, &mut canvas);
        canvas
    }

    fn run(&self, list: DrawOpListId, rect: Rect) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        let ctx = FrameContext::new("Hello", 12);
        draw_op_list(&self.theme, list, rect, &FrameGeometry::default(), &ctx, &mut canvas);
        canvas
    }
}

// ============================================================================
// Pieces
// ============================================================================

#[test]
fn pieces_fall_back_to_the_parent_style() {
    let mut fx = Fixture::new();
    let parent = fx.style("parent", None, vec![(FramePiece::Titlebar, solid(RED))]);
    let child = fx.style("child", Some(parent), vec![(FramePiece::LeftEdge, solid(BLUE))]);

    let canvas = fx.draw(child, FrameFlags::empty(), &FrameContext::default());

    let drawn: Vec<&DrawCommand> = canvas.drawing().collect();
    assert_eq!(
        drawn,
        vec![
            &DrawCommand::Rectangle {
                color: RED,
                rect: Rect::new(0, 0, 24, 10),
                filled: true
            },
            &DrawCommand::Rectangle {
                color: BLUE,
                rect: Rect::new(0, 10, 2, 10),
                filled: true
            },
        ]
    );
    assert_eq!(canvas.clip_depth(), 0);
}

#[test]
fn pieces_outside_the_clip_are_skipped() {
    let mut fx = Fixture::new();
    let style = fx.style(
        "s",
        None,
        vec![
            (FramePiece::Titlebar, solid(RED)),
            (FramePiece::LeftEdge, solid(BLUE)),
        ],
    );

    let ctx = FrameContext::default().with_clip(Rect::new(0, 15, 24, 7));
    let canvas = fx.draw(style, FrameFlags::empty(), &ctx);

    assert_eq!(
        canvas.commands(),
        &[
            DrawCommand::PushClip(Rect::new(0, 15, 2, 5)),
            DrawCommand::Rectangle {
                color: BLUE,
                rect: Rect::new(0, 10, 2, 10),
                filled: true
            },
            DrawCommand::PopClip,
        ]
    );
}

#[test]
fn blank_pieces_draw_nothing() {
    let mut fx = Fixture::new();
    let style = fx.style("s", None, vec![(FramePiece::EntireBackground, TextureSpec::Blank)]);
    let canvas = fx.draw(style, FrameFlags::empty(), &FrameContext::default());
    assert_eq!(canvas.drawing().count(), 0);
}

#[test]
fn solid_composites_blend_to_one_color() {
    let mut fx = Fixture::new();
    let composite = TextureSpec::Composite {
        background: Box::new(solid(RgbaColor::white())),
        foreground: Box::new(solid(RgbaColor::black())),
        alpha: 0.5,
    };
    let style = fx.style("s", None, vec![(FramePiece::Titlebar, composite)]);

    let canvas = fx.draw(style, FrameFlags::empty(), &FrameContext::default());

    assert_eq!(
        canvas.drawing().next(),
        Some(&DrawCommand::Rectangle {
            color: RgbaColor::rgb(128, 128, 128),
            rect: Rect::new(0, 0, 24, 10),
            filled: true
        })
    );
}

#[test]
fn gradient_pieces_become_pixbufs() {
    let mut fx = Fixture::new();
    let gradient = GradientSpec {
        kind: GradientType::Vertical,
        color_specs: vec![ColorSpec::Basic(RED), ColorSpec::Basic(BLUE)],
    };
    let style = fx.style("s", None, vec![(FramePiece::Titlebar, TextureSpec::Gradient(gradient))]);

    let canvas = fx.draw(style, FrameFlags::empty(), &FrameContext::default());

    assert_eq!(
        canvas.drawing().next(),
        Some(&DrawCommand::Pixbuf {
            rect: Rect::new(0, 0, 24, 10),
            width: 24,
            height: 10,
            top_left: Some(RED),
        })
    );
}

#[test]
fn shape_list_pieces_use_the_piece_rectangle() {
    let mut fx = Fixture::new();
    let list = fx.list(
        "edge",
        vec![DrawOp::Line {
            color: ColorSpec::Basic(RED),
            x1: expr("0"),
            y1: expr("0"),
            x2: expr("width - 1"),
            y2: expr("height - 1"),
            width: 0,
            dash_on_length: 0,
            dash_off_length: 0,
        }],
    );
    let style = fx.style("s", None, vec![(FramePiece::BottomEdge, TextureSpec::ShapeList(list))]);

    let canvas = fx.draw(style, FrameFlags::empty(), &FrameContext::default());

    assert_eq!(
        canvas.to_snapshot(),
        "clip (2,20 20x2)\n  line #ff0000 (2,20) -> (21,21)"
    );
}

// ============================================================================
// Buttons
// ============================================================================

#[test]
fn buttons_use_their_state() {
    let mut fx = Fixture::new();
    let mut style = FrameStyle::new(None, fx.layout);
    style
        .set_button(ButtonType::Close, ButtonState::Normal, solid(RED))
        .unwrap();
    style
        .set_button(ButtonType::Close, ButtonState::Pressed, solid(BLUE))
        .unwrap();
    let style = fx.theme.add_style("s", style).unwrap();

    let flags = FrameFlags::ALLOWS_DELETE;
    let close = fx.geometry(flags).close_rect;
    assert_eq!(close, Rect::new(14, 0, 10, 10));

    let canvas = fx.draw(style, flags, &FrameContext::default());
    assert_eq!(rectangles(&canvas), vec![close]);
    assert!(matches!(
        canvas.drawing().next(),
        Some(DrawCommand::Rectangle { color, .. }) if *color == RED
    ));

    let pressed = FrameContext::default().with_button_state(ButtonType::Close, ButtonState::Pressed);
    let canvas = fx.draw(style, flags, &pressed);
    assert!(matches!(
        canvas.drawing().next(),
        Some(DrawCommand::Rectangle { color, .. }) if *color == BLUE
    ));
}

#[test]
fn unmaximize_falls_back_to_maximize() {
    let mut fx = Fixture::new();
    let mut style = FrameStyle::new(None, fx.layout);
    style
        .set_button(ButtonType::Maximize, ButtonState::Normal, solid(RED))
        .unwrap();
    let style = fx.theme.add_style("s", style).unwrap();

    let flags = FrameFlags::ALLOWS_MAXIMIZE | FrameFlags::MAXIMIZED;
    let geometry = fx.geometry(flags);
    assert!(geometry.shows_unmaximize);

    let canvas = fx.draw(style, flags, &FrameContext::default());
    assert_eq!(rectangles(&canvas), vec![geometry.max_rect]);
}

#[test]
fn disallowed_buttons_are_not_drawn() {
    let mut fx = Fixture::new();
    let mut style = FrameStyle::new(None, fx.layout);
    style
        .set_button(ButtonType::Minimize, ButtonState::Normal, solid(RED))
        .unwrap();
    let style = fx.theme.add_style("s", style).unwrap();

    let canvas = fx.draw(style, FrameFlags::ALLOWS_DELETE, &FrameContext::default());
    assert!(canvas.commands().is_empty());
}

// ============================================================================
// Draw-op lists
// ============================================================================

#[test]
fn expressions_see_the_target_rectangle() {
    let mut fx = Fixture::new();
    let list = fx.list(
        "ops",
        vec![
            DrawOp::Line {
                color: ColorSpec::Basic(RED),
                x1: expr("0"),
                y1: expr("height / 2"),
                x2: expr("width"),
                y2: expr("height / 2"),
                width: 2,
                dash_on_length: 3,
                dash_off_length: 1,
            },
            DrawOp::Title {
                color: ColorSpec::Basic(BLUE),
                x: expr("2"),
                y: expr("(height - title_height) / 2"),
            },
        ],
    );

    let canvas = fx.run(list, Rect::new(10, 20, 40, 50));

    insta::assert_snapshot!(canvas.to_snapshot(), @r#"
    clip (10,20 40x50)
      line #ff0000 (10,45) -> (50,45) width 2 dash 3/1
      title #0000ff (12,39) "Hello"
    "#);
}

#[test]
fn failed_expressions_evaluate_to_zero() {
    let mut fx = Fixture::new();
    let list = fx.list(
        "ops",
        vec![DrawOp::Rectangle {
            color: ColorSpec::Basic(RED),
            rect: rect_expr("object_width", "0", "4", "4"),
            filled: false,
        }],
    );

    let canvas = fx.run(list, Rect::new(10, 20, 40, 50));
    assert_eq!(rectangles(&canvas), vec![Rect::new(10, 20, 4, 4)]);
}

#[test]
fn clip_ops_last_until_the_end_of_the_list() {
    let mut fx = Fixture::new();
    let list = fx.list(
        "ops",
        vec![
            DrawOp::Clip {
                rect: rect_expr("0", "0", "5", "5"),
            },
            fill(RED),
        ],
    );

    let canvas = fx.run(list, Rect::new(0, 0, 10, 10));
    assert_eq!(
        canvas.commands(),
        &[
            DrawCommand::PushClip(Rect::new(0, 0, 10, 10)),
            DrawCommand::PushClip(Rect::new(0, 0, 5, 5)),
            DrawCommand::Rectangle {
                color: RED,
                rect: Rect::new(0, 0, 10, 10),
                filled: true
            },
            DrawCommand::PopClip,
            DrawCommand::PopClip,
        ]
    );
}

#[test]
fn include_draws_into_a_sub_rectangle() {
    let mut fx = Fixture::new();
    let inner = fx.list("inner", vec![fill(RED)]);
    let outer = fx.list(
        "outer",
        vec![DrawOp::Include {
            list: inner,
            rect: rect_expr("2", "2", "width - 4", "height - 4"),
        }],
    );

    let canvas = fx.run(outer, Rect::new(0, 0, 10, 10));
    assert_eq!(rectangles(&canvas), vec![Rect::new(2, 2, 6, 6)]);
}

#[test]
fn tiles_repeat_and_clip_to_the_target() {
    let mut fx = Fixture::new();
    let tile = fx.list("tile", vec![fill(RED)]);
    let outer = fx.list(
        "outer",
        vec![DrawOp::Tile {
            list: tile,
            rect: RectExpr::full(),
            tile_xoffset: expr("0"),
            tile_yoffset: expr("0"),
            tile_width: expr("4"),
            tile_height: expr("5"),
        }],
    );

    let canvas = fx.run(outer, Rect::new(0, 0, 10, 5));
    assert_eq!(
        rectangles(&canvas),
        vec![
            Rect::new(0, 0, 4, 5),
            Rect::new(4, 0, 4, 5),
            Rect::new(8, 0, 4, 5),
        ]
    );
    assert_eq!(
        clips(&canvas),
        vec![
            Rect::new(0, 0, 10, 5),
            Rect::new(0, 0, 4, 5),
            Rect::new(4, 0, 4, 5),
            Rect::new(8, 0, 2, 5),
        ]
    );
    assert_eq!(canvas.clip_depth(), 0);
}

#[test]
fn tiles_with_an_offset_start_before_the_target() {
    let mut fx = Fixture::new();
    let tile = fx.list("tile", vec![fill(RED)]);
    let outer = fx.list(
        "outer",
        vec![DrawOp::Tile {
            list: tile,
            rect: RectExpr::full(),
            tile_xoffset: expr("3"),
            tile_yoffset: expr("0"),
            tile_width: expr("4"),
            tile_height: expr("height"),
        }],
    );

    let canvas = fx.run(outer, Rect::new(0, 0, 6, 2));
    assert_eq!(
        rectangles(&canvas),
        vec![Rect::new(-3, 0, 4, 2), Rect::new(1, 0, 4, 2), Rect::new(5, 0, 4, 2)]
    );
}

fn tile_op(list: DrawOpListId, offsets: (&str, &str), size: (&str, &str)) -> DrawOp {
    DrawOp::Tile {
        list,
        rect: RectExpr::full(),
        tile_xoffset: expr(offsets.0),
        tile_yoffset: expr(offsets.1),
        tile_width: expr(size.0),
        tile_height: expr(size.1),
    }
}

#[test]
fn negative_offsets_start_inside_the_target() {
    let mut fx = Fixture::new();
    let tile = fx.list("tile", vec![fill(RED)]);
    let outer = fx.list("outer", vec![tile_op(tile, ("-3", "-1"), ("4", "2"))]);

    let canvas = fx.run(outer, Rect::new(0, 0, 10, 4));
    assert_eq!(
        rectangles(&canvas),
        vec![
            Rect::new(3, 1, 4, 2),
            Rect::new(7, 1, 4, 2),
            Rect::new(3, 3, 4, 2),
            Rect::new(7, 3, 4, 2),
        ]
    );
}

#[test]
fn offsets_wider_than_a_tile_wrap_around() {
    let mut fx = Fixture::new();
    let tile = fx.list("tile", vec![fill(RED)]);
    let outer = fx.list("outer", vec![tile_op(tile, ("9", "5"), ("4", "2"))]);

    let canvas = fx.run(outer, Rect::new(0, 0, 6, 2));
    assert_eq!(
        rectangles(&canvas),
        vec![
            Rect::new(-1, -1, 4, 2),
            Rect::new(3, -1, 4, 2),
            Rect::new(-1, 1, 4, 2),
            Rect::new(3, 1, 4, 2),
        ]
    );
}

#[test]
fn out_of_range_offsets_do_not_overflow() {
    let mut fx = Fixture::new();
    let tile = fx.list("tile", vec![fill(RED)]);
    // clamps to i32::MAX, which is 3 past a multiple of 4
    let outer = fx.list("outer", vec![tile_op(tile, ("2147483648", "0"), ("4", "height"))]);

    let canvas = fx.run(outer, Rect::new(1, 0, 10, 4));
    let xs: Vec<i32> = rectangles(&canvas).iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![-2, 2, 6, 10]);
    assert_eq!(canvas.clip_depth(), 0);
}

#[test]
fn huge_tiles_are_drawn_once() {
    let mut fx = Fixture::new();
    let tile = fx.list("tile", vec![fill(RED)]);
    let outer = fx.list("outer", vec![tile_op(tile, ("0", "0"), ("2147483647", "height"))]);

    let canvas = fx.run(outer, Rect::new(1, 0, 10, 4));
    assert_eq!(rectangles(&canvas), vec![Rect::new(1, 0, i32::MAX, 4)]);
    assert_eq!(clips(&canvas), vec![Rect::new(1, 0, 10, 4), Rect::new(1, 0, 10, 4)]);
}

#[test]
fn large_offsets_skip_straight_to_the_target() {
    let mut fx = Fixture::new();
    let tile = fx.list("tile", vec![fill(RED)]);
    let outer = fx.list("outer", vec![tile_op(tile, ("2000000000", "0"), ("1", "height"))]);

    let canvas = fx.run(outer, Rect::new(1, 0, 10, 4));
    assert_eq!(rectangles(&canvas).len(), 10);
    assert_eq!(rectangles(&canvas)[0], Rect::new(1, 0, 1, 4));
}

#[test]
fn empty_tiles_are_skipped() {
    let mut fx = Fixture::new();
    let tile = fx.list("tile", vec![fill(RED)]);
    let outer = fx.list(
        "outer",
        vec![DrawOp::Tile {
            list: tile,
            rect: RectExpr::full(),
            tile_xoffset: expr("0"),
            tile_yoffset: expr("0"),
            tile_width: expr("0"),
            tile_height: expr("4"),
        }],
    );

    let canvas = fx.run(outer, Rect::new(0, 0, 10, 10));
    assert_eq!(canvas.drawing().count(), 0);
}

#[test]
fn images_see_their_own_size() {
    let mut fx = Fixture::new();
    let list = fx.list(
        "ops",
        vec![DrawOp::Image {
            pixbuf: Rc::new(Pixbuf::filled(4, 2, RED)),
            colorize: None,
            rect: rect_expr("0", "0", "object_width * 2", "object_height"),
            alpha: 1.0,
        }],
    );

    let canvas = fx.run(list, Rect::new(0, 0, 20, 20));
    assert_eq!(
        canvas.drawing().next(),
        Some(&DrawCommand::Pixbuf {
            rect: Rect::new(0, 0, 8, 2),
            width: 8,
            height: 2,
            top_left: Some(RED),
        })
    );
}

#[test]
fn self_including_lists_stop_at_the_nesting_limit() {
    let mut fx = Fixture::new();
    let list = fx.list("loop", vec![fill(RED)]);
    fx.theme.draw_op_list_mut(list).push(DrawOp::Include {
        list,
        rect: RectExpr::full(),
    });

    let canvas = fx.run(list, Rect::new(0, 0, 4, 4));
    assert!(rectangles(&canvas).len() > 1);
    assert_eq!(canvas.clip_depth(), 0);
}

// ============================================================================
// Menu icons
// ============================================================================

#[test]
fn menu_icons_draw_their_list() {
    let mut fx = Fixture::new();
    let list = fx.list(
        "close-icon",
        vec![DrawOp::GtkArrow {
            state: GtkState::Normal,
            shadow: mtheme::GtkShadow::Out,
            arrow: mtheme::GtkArrow::Down,
            rect: RectExpr::full(),
            filled: true,
        }],
    );
    fx.theme
        .set_menu_icon(MenuIconType::Close, GtkState::Normal, list)
        .unwrap();

    let ctx = FrameContext::default();
    let mut canvas = RecordingCanvas::new();
    assert!(draw_menu_icon(
        &fx.theme,
        MenuIconType::Close,
        GtkState::Normal,
        Rect::new(0, 0, 16, 16),
        &ctx,
        &mut canvas,
    ));
    assert_eq!(
        canvas.drawing().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["gtk_arrow down normal/out (0,0 16x16) filled"]
    );

    let mut canvas = RecordingCanvas::new();
    assert!(!draw_menu_icon(
        &fx.theme,
        MenuIconType::Close,
        GtkState::Prelight,
        Rect::new(0, 0, 16, 16),
        &ctx,
        &mut canvas,
    ));
    assert!(canvas.commands().is_empty());
}
