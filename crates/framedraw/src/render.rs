//! Painting a frame: pieces, buttons and draw-op lists.
//!
//! Each piece and button of a frame style is resolved through the style's
//! parent chain and drawn into its rectangle, clipped to it. Draw-op lists
//! evaluate their geometry against an [`Environment`] built from the
//! rectangle they are drawn into; evaluation failures are logged and the
//! failing value taken as zero.

use log::{debug, trace, warn};
use mtheme::{
    ButtonState, ButtonType, DrawOp, DrawOpListId, FramePiece, GtkState, MenuIconType,
    RectExpr, StyleId, TextureSpec, Theme,
};
use posexpr::{Environment, Expr};

use crate::canvas::{LineStyle, Point, Rasterizer};
use crate::geometry::{FrameGeometry, Rect};

/// Include and tile ops nested deeper than this are skipped.
const MAX_NESTING: usize = 64;

/// Per-paint state supplied by the window manager.
#[derive(Clone, Debug)]
pub struct FrameContext {
    pub title: String,
    /// Height of the title text as laid out by the toolkit.
    pub title_height: i32,
    pub icon_width: i32,
    pub icon_height: i32,
    pub mini_icon_width: i32,
    pub mini_icon_height: i32,
    /// Indexed by [`ButtonType::index`].
    pub button_states: [ButtonState; ButtonType::COUNT],
    /// Only the part of the frame inside this rectangle is repainted.
    pub clip: Option<Rect>,
}

impl Default for FrameContext {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_height: 0,
            icon_width: 32,
            icon_height: 32,
            mini_icon_width: 16,
            mini_icon_height: 16,
            button_states: [ButtonState::Normal; ButtonType::COUNT],
            clip: None,
        }
    }
}

impl FrameContext {
    pub fn new(title: impl Into<String>, title_height: i32) -> Self {
        Self {
            title: title.into(),
            title_height,
            ..Self::default()
        }
    }

    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn with_button_state(mut self, button: ButtonType, state: ButtonState) -> Self {
        self.button_states[button.index()] = state;
        self
    }

    pub fn button_state(&self, button: ButtonType) -> ButtonState {
        self.button_states[button.index()]
    }
}

struct Painter<'a> {
    theme: &'a Theme,
    geometry: &'a FrameGeometry,
    ctx: &'a FrameContext,
    canvas: &'a mut dyn Rasterizer,
    clip: Rect,
    depth: usize,
}

impl<'a> Painter<'a> {
    fn new(
        theme: &'a Theme,
        geometry: &'a FrameGeometry,
        ctx: &'a FrameContext,
        canvas: &'a mut dyn Rasterizer,
        bounds: Rect,
    ) -> Self {
        let clip = match ctx.clip {
            Some(clip) => clip.intersection(&bounds),
            None => bounds,
        };
        Self {
            theme,
            geometry,
            ctx,
            canvas,
            clip,
            depth: 0,
        }
    }

    fn environment(&self, rect: Rect) -> Environment<'a> {
        let g = self.geometry;
        Environment {
            left_width: g.left_width,
            right_width: g.right_width,
            top_height: g.top_height,
            bottom_height: g.bottom_height,
            title_width: g.title_rect.width,
            title_height: self.ctx.title_height,
            icon_width: self.ctx.icon_width,
            icon_height: self.ctx.icon_height,
            mini_icon_width: self.ctx.mini_icon_width,
            mini_icon_height: self.ctx.mini_icon_height,
            ..Environment::new(rect.x, rect.y, rect.width, rect.height)
        }
        .with_constants(self.theme)
    }

    /// Run `draw` with drawing limited to `rect`. Nothing runs if the
    /// current clip leaves none of `rect` visible.
    fn clipped(&mut self, rect: Rect, draw: impl FnOnce(&mut Self)) {
        let clip = self.clip.intersection(&rect);
        if clip.is_empty() {
            return;
        }
        let saved = std::mem::replace(&mut self.clip, clip);
        self.canvas.push_clip(clip);
        draw(self);
        self.canvas.pop_clip();
        self.clip = saved;
    }

    fn draw_texture(&mut self, texture: &TextureSpec, rect: Rect) {
        match texture {
            TextureSpec::Blank => {}
            TextureSpec::Solid(color) => {
                let color = color.render(self.canvas.palette());
                self.canvas.draw_rectangle(color, rect, true);
            }
            TextureSpec::ShapeList(list) => self.draw_op_list(*list, rect),
            TextureSpec::Composite {
                background,
                foreground,
                alpha,
            } => match (background.as_ref(), foreground.as_ref()) {
                (TextureSpec::Solid(bg), TextureSpec::Solid(fg)) => {
                    let palette = self.canvas.palette();
                    let color = fg.render(palette).over(&bg.render(palette), *alpha);
                    self.canvas.draw_rectangle(color, rect, true);
                }
                _ => self.draw_texture_pixbuf(texture, rect),
            },
            TextureSpec::Gradient(_) | TextureSpec::Image { .. } => {
                self.draw_texture_pixbuf(texture, rect)
            }
        }
    }

    fn draw_texture_pixbuf(&mut self, texture: &TextureSpec, rect: Rect) {
        let rendered =
            texture.render_pixbuf(self.canvas.palette(), rect.width as u32, rect.height as u32);
        match rendered {
            Some(pixbuf) => self.canvas.draw_pixbuf(&pixbuf, rect),
            None => warn!("Texture at {rect:?} could not be rendered; skipping it"),
        }
    }

    fn size(&self, expr: &Expr, env: &Environment<'_>) -> i32 {
        expr.size(env).unwrap_or_else(|err| {
            warn!("Failed to evaluate \"{expr}\": {err}");
            0
        })
    }

    fn x(&self, expr: &Expr, env: &Environment<'_>) -> i32 {
        env.x.wrapping_add(self.size(expr, env))
    }

    fn y(&self, expr: &Expr, env: &Environment<'_>) -> i32 {
        env.y.wrapping_add(self.size(expr, env))
    }

    fn rect(&self, rect: &RectExpr, env: &Environment<'_>) -> Rect {
        Rect::new(
            self.x(&rect.x, env),
            self.y(&rect.y, env),
            self.size(&rect.width, env),
            self.size(&rect.height, env),
        )
    }

    fn draw_nested(&mut self, list: DrawOpListId, rect: Rect) {
        if self.depth >= MAX_NESTING {
            warn!("Draw-op lists nested more than {MAX_NESTING} deep; skipping");
            return;
        }
        self.depth += 1;
        self.draw_op_list(list, rect);
        self.depth -= 1;
    }

    fn draw_op_list(&mut self, list: DrawOpListId, rect: Rect) {
        let theme = self.theme;
        let env = self.environment(rect);
        let saved_clip = self.clip;
        let mut clips = 0;

        for op in theme.draw_op_list(list) {
            trace!("{} in {:?}", op.name(), rect);
            match op {
                DrawOp::Line {
                    color,
                    x1,
                    y1,
                    x2,
                    y2,
                    width,
                    dash_on_length,
                    dash_off_length,
                } => {
                    let color = color.render(self.canvas.palette());
                    let from = Point::new(self.x(x1, &env), self.y(y1, &env));
                    let to = Point::new(self.x(x2, &env), self.y(y2, &env));
                    let style = LineStyle {
                        width: *width,
                        dash_on: *dash_on_length,
                        dash_off: *dash_off_length,
                    };
                    self.canvas.draw_line(color, from, to, style);
                }
                DrawOp::Rectangle {
                    color,
                    rect: area,
                    filled,
                } => {
                    let color = color.render(self.canvas.palette());
                    let area = self.rect(area, &env);
                    self.canvas.draw_rectangle(color, area, *filled);
                }
                DrawOp::Arc {
                    color,
                    rect: area,
                    filled,
                    start_angle,
                    extent_angle,
                } => {
                    let color = color.render(self.canvas.palette());
                    let area = self.rect(area, &env);
                    self.canvas
                        .draw_arc(color, area, *filled, *start_angle, *extent_angle);
                }
                DrawOp::Clip { rect: area } => {
                    let clip = self.clip.intersection(&self.rect(area, &env));
                    self.canvas.push_clip(clip);
                    self.clip = clip;
                    clips += 1;
                }
                DrawOp::Tint {
                    color,
                    rect: area,
                    alpha,
                } => {
                    let color = color.render(self.canvas.palette());
                    let area = self.rect(area, &env);
                    self.canvas.tint(color, area, *alpha);
                }
                DrawOp::Gradient {
                    spec,
                    rect: area,
                    alpha,
                } => {
                    let area = self.rect(area, &env);
                    if area.is_empty() {
                        continue;
                    }
                    let mut pixbuf = spec.render(
                        self.canvas.palette(),
                        area.width as u32,
                        area.height as u32,
                    );
                    if *alpha < 1.0 {
                        pixbuf = pixbuf.with_alpha(*alpha);
                    }
                    self.canvas.draw_pixbuf(&pixbuf, area);
                }
                DrawOp::Image {
                    pixbuf,
                    colorize,
                    rect: area,
                    alpha,
                } => {
                    let image_env = env.with_object(pixbuf.width() as i32, pixbuf.height() as i32);
                    let area = self.rect(area, &image_env);
                    if area.is_empty() {
                        continue;
                    }
                    let mut image = pixbuf.scaled(area.width as u32, area.height as u32);
                    if let Some(color) = colorize {
                        image = image.colorize(color.render(self.canvas.palette()));
                    }
                    if *alpha < 1.0 {
                        image = image.with_alpha(*alpha);
                    }
                    self.canvas.draw_pixbuf(&image, area);
                }
                DrawOp::GtkArrow {
                    state,
                    shadow,
                    arrow,
                    rect: area,
                    filled,
                } => {
                    let area = self.rect(area, &env);
                    self.canvas
                        .draw_gtk_arrow(*state, *shadow, *arrow, area, *filled);
                }
                DrawOp::GtkBox {
                    state,
                    shadow,
                    rect: area,
                } => {
                    let area = self.rect(area, &env);
                    self.canvas.draw_gtk_box(*state, *shadow, area);
                }
                DrawOp::GtkVline { state, x, y1, y2 } => {
                    let x = self.x(x, &env);
                    let (y1, y2) = (self.y(y1, &env), self.y(y2, &env));
                    self.canvas.draw_gtk_vline(*state, x, y1, y2);
                }
                DrawOp::Icon { rect: area, alpha } => {
                    let area = self.rect(area, &env);
                    self.canvas.draw_icon(area, *alpha);
                }
                DrawOp::Title { color, x, y } => {
                    let color = color.render(self.canvas.palette());
                    let origin = Point::new(self.x(x, &env), self.y(y, &env));
                    let ctx = self.ctx;
                    self.canvas.draw_title(color, origin, &ctx.title);
                }
                DrawOp::Include { list, rect: area } => {
                    let area = self.rect(area, &env);
                    self.draw_nested(*list, area);
                }
                DrawOp::Tile {
                    list,
                    rect: area,
                    tile_xoffset,
                    tile_yoffset,
                    tile_width,
                    tile_height,
                } => {
                    let area = self.rect(area, &env);
                    let tile_width = self.size(tile_width, &env);
                    let tile_height = self.size(tile_height, &env);
                    if tile_width <= 0 || tile_height <= 0 {
                        warn!(
                            "Tile size {tile_width}x{tile_height} is not positive; skipping tile op"
                        );
                        continue;
                    }
                    let xoffset = self.size(tile_xoffset, &env);
                    let yoffset = self.size(tile_yoffset, &env);
                    self.draw_tiles(*list, area, xoffset, yoffset, tile_width, tile_height);
                }
            }
        }

        for _ in 0..clips {
            self.canvas.pop_clip();
        }
        self.clip = saved_clip;
    }

    fn draw_tiles(
        &mut self,
        list: DrawOpListId,
        area: Rect,
        xoffset: i32,
        yoffset: i32,
        tile_width: i32,
        tile_height: i32,
    ) {
        let (width, height) = (i64::from(tile_width), i64::from(tile_height));
        let ys = tile_starts(area.y, area.bottom(), yoffset, height);
        let xs = tile_starts(area.x, area.right(), xoffset, width);

        for y in ys.step_by(tile_height as usize) {
            for x in xs.clone().step_by(tile_width as usize) {
                let tile = Rect::new(to_coord(x), to_coord(y), tile_width, tile_height);
                self.clipped(tile.intersection(&area), |painter| {
                    painter.draw_nested(list, tile)
                });
            }
        }
    }
}

/// Start positions of the tiles that overlap `start..end` along one axis,
/// for a grid anchored at `start - offset`. Tiles wholly before `start` are
/// skipped without being visited.
fn tile_starts(start: i32, end: i32, offset: i32, step: i64) -> std::ops::Range<i64> {
    let (start, end) = (i64::from(start), i64::from(end));
    let mut first = start - i64::from(offset);
    if first < start {
        first = start - (start - first).rem_euclid(step);
    }
    first..end
}

fn to_coord(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Paint a whole frame: every piece in [`FramePiece::ALL`] order, then the
/// close, maximize (or unmaximize), minimize and menu buttons.
///
/// Pieces whose rectangle lies outside the context's clip, or for which no
/// style in the chain has a texture, are skipped.
pub fn draw_frame(
    theme: &Theme,
    style: StyleId,
    geometry: &FrameGeometry,
    ctx: &FrameContext,
    canvas: &mut dyn Rasterizer,
) {
    let layout = theme.layout(theme.style(style).layout);
    let bounds = Rect::new(0, 0, geometry.width, geometry.height);
    let mut painter = Painter::new(theme, geometry, ctx, canvas, bounds);

    for &piece in FramePiece::ALL {
        let rect = geometry.piece_rect(piece, layout);
        if rect.intersection(&painter.clip).is_empty() {
            continue;
        }
        let Some(texture) = theme.resolve_piece(style, piece) else {
            continue;
        };
        trace!("piece {piece} at {rect:?}");
        painter.clipped(rect, |p| p.draw_texture(texture, rect));
    }

    let maximize = if geometry.shows_unmaximize {
        ButtonType::Unmaximize
    } else {
        ButtonType::Maximize
    };
    for button in [ButtonType::Close, maximize, ButtonType::Minimize, ButtonType::Menu] {
        let rect = geometry.button_rect(button);
        if rect.intersection(&painter.clip).is_empty() {
            continue;
        }
        let state = ctx.button_state(button);
        let Some(texture) = theme.resolve_button(style, button, state) else {
            debug!("No texture for button {button} in state {state}");
            continue;
        };
        trace!("button {button} ({state}) at {rect:?}");
        painter.clipped(rect, |p| p.draw_texture(texture, rect));
    }
}

/// Run a draw-op list into `rect`, clipped to it. Border variables in the
/// list's expressions come from `geometry`.
pub fn draw_op_list(
    theme: &Theme,
    list: DrawOpListId,
    rect: Rect,
    geometry: &FrameGeometry,
    ctx: &FrameContext,
    canvas: &mut dyn Rasterizer,
) {
    let mut painter = Painter::new(theme, geometry, ctx, canvas, rect);
    painter.clipped(rect, |p| p.draw_op_list(list, rect));
}

/// Draw the theme's icon for a window-menu item. Returns `false` if the
/// theme has none for this type and state.
pub fn draw_menu_icon(
    theme: &Theme,
    kind: MenuIconType,
    state: GtkState,
    rect: Rect,
    ctx: &FrameContext,
    canvas: &mut dyn Rasterizer,
) -> bool {
    let Some(list) = theme.menu_icon(kind, state) else {
        debug!("Theme has no menu icon for {kind} in state {state}");
        return false;
    };
    draw_op_list(theme, list, rect, &FrameGeometry::default(), ctx, canvas);
    true
}
