//! `<draw_ops>` blocks and the draw operations inside them.

use std::rc::Rc;

use posexpr::{Environment, Expr, replace_constants};

use crate::error::{Result, ThemeError};
use crate::parser::attrs::{Attributes, locate, no_attributes};
use crate::parser::values::{parse_alpha, parse_angle, parse_boolean, parse_positive_integer};
use crate::parser::{ParseState, PendingGradient, ThemeParser};
use crate::types::{
    ColorSpec, DrawOp, DrawOpListId, GradientSpec, GradientType, GtkArrow, GtkShadow, GtkState,
    Pixbuf, RectExpr,
};

fn gtk_state(value: &str, element: &str) -> Result<GtkState> {
    GtkState::from_name(&value.to_ascii_lowercase()).ok_or_else(|| {
        ThemeError::semantic(format!(
            "Did not understand state \"{value}\" for <{element}> element"
        ))
    })
}

fn gtk_shadow(value: &str, element: &str) -> Result<GtkShadow> {
    GtkShadow::from_name(value).ok_or_else(|| {
        ThemeError::semantic(format!(
            "Did not understand shadow \"{value}\" for <{element}> element"
        ))
    })
}

fn gtk_arrow(value: &str, element: &str) -> Result<GtkArrow> {
    GtkArrow::from_name(value).ok_or_else(|| {
        ThemeError::semantic(format!(
            "Did not understand arrow \"{value}\" for <{element}> element"
        ))
    })
}

fn optional_bool(value: Option<&str>) -> Result<bool> {
    value.map_or(Ok(false), parse_boolean)
}

fn optional_alpha(value: Option<&str>) -> Result<f64> {
    value.map_or(Ok(1.0), parse_alpha)
}

impl ThemeParser<'_> {
    /// Check an expression against an all-zero environment, then fold the
    /// theme's constants into it.
    fn expression(&self, source: &str, has_object: bool) -> Result<Expr> {
        let expr = Expr::parse(source)?;
        let mut env = Environment::default().with_constants(&self.theme);
        if has_object {
            env = env.with_object(0, 0);
        }
        expr.evaluate(&env)?;
        Ok(replace_constants(&expr, &self.theme))
    }

    fn rect(&self, [x, y, width, height]: [&str; 4], has_object: bool) -> Result<RectExpr> {
        Ok(RectExpr::new(
            self.expression(x, has_object)?,
            self.expression(y, has_object)?,
            self.expression(width, has_object)?,
            self.expression(height, has_object)?,
        ))
    }

    pub(crate) fn lookup_list(&self, name: &str) -> Result<DrawOpListId> {
        self.theme.lookup_draw_op_list(name).ok_or_else(|| {
            ThemeError::semantic(format!(
                "No <draw_ops> with the name \"{name}\" has been defined"
            ))
        })
    }

    /// A list that `include`/`tile` may reference from the list being built.
    fn lookup_sub_list(&self, name: &str) -> Result<DrawOpListId> {
        let list = self.theme.lookup_draw_op_list(name).ok_or_else(|| {
            ThemeError::semantic(format!("No <draw_ops> called \"{name}\" has been defined"))
        })?;
        let current = self.current_list()?;
        if list == current || self.theme.draw_op_list_contains(list, current) {
            return Err(ThemeError::semantic(format!(
                "Including draw_ops \"{name}\" here would create a circular reference"
            )));
        }
        Ok(list)
    }

    fn load_image(&mut self, file_name: &str) -> Result<Rc<Pixbuf>> {
        let path = self.options.image_path(file_name);
        if let Some(pixbuf) = self.images.get(&path) {
            return Ok(Rc::clone(pixbuf));
        }
        let pixbuf = Rc::new(self.options.image_loader.load(&path)?);
        log::debug!(
            "Loaded image {} ({}x{})",
            path.display(),
            pixbuf.width(),
            pixbuf.height()
        );
        self.images.insert(path, Rc::clone(&pixbuf));
        Ok(pixbuf)
    }

    pub(crate) fn start_named_draw_ops(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        let ([name], []) = locate(element, attrs, ["name"], [])?;
        self.op_list = Some(self.theme.add_draw_op_list(name)?);
        self.push(ParseState::DrawOps, element);
        Ok(())
    }

    /// `<draw_ops>` nested in a piece, button or menu icon.
    pub(crate) fn start_inline_draw_ops(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        if element != "draw_ops" {
            return Err(self.not_allowed_below(element));
        }
        no_attributes(element, attrs)?;
        if self.op_list.is_some() {
            let owner = self.current_element().to_string();
            return Err(ThemeError::markup(format!(
                "Can't have a two draw_ops for a <{owner}> element (theme specified a draw_ops attribute and also a <draw_ops> element, or specified two elements)"
            )));
        }
        self.op_list = Some(self.theme.add_anonymous_draw_op_list());
        self.push(ParseState::DrawOps, element);
        Ok(())
    }

    pub(crate) fn end_draw_ops(&mut self) -> Result<()> {
        let list = self.current_list()?;
        self.theme.validate_draw_op_list(list)?;
        // Named lists are complete; inline ones stay pending for their owner.
        if self.state() == ParseState::Theme {
            self.op_list = None;
        }
        Ok(())
    }

    fn append(&mut self, op: DrawOp, element: &str) -> Result<()> {
        let list = self.current_list()?;
        log::trace!("Appending <{}> to draw-op list {}", op.name(), list.index());
        self.theme.draw_op_list_mut(list).push(op);
        self.push(ParseState::DrawOp, element);
        Ok(())
    }

    pub(crate) fn start_draw_op(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        let op = match element {
            "line" => {
                let ([color, x1, y1, x2, y2], [dash_on, dash_off, width]) = locate(
                    element,
                    attrs,
                    ["color", "x1", "y1", "x2", "y2"],
                    ["dash_on_length", "dash_off_length", "width"],
                )?;
                let x1 = self.expression(x1, false)?;
                let y1 = self.expression(y1, false)?;
                let x2 = self.expression(x2, false)?;
                let y2 = self.expression(y2, false)?;
                let dash_on_length = dash_on.map_or(Ok(0), parse_positive_integer)?;
                let dash_off_length = dash_off.map_or(Ok(0), parse_positive_integer)?;
                let width = width.map_or(Ok(0), parse_positive_integer)?;
                DrawOp::Line {
                    color: ColorSpec::parse(color)?,
                    x1,
                    y1,
                    x2,
                    y2,
                    width,
                    dash_on_length,
                    dash_off_length,
                }
            }
            "rectangle" => {
                let ([color, x, y, width, height], [filled]) = locate(
                    element,
                    attrs,
                    ["color", "x", "y", "width", "height"],
                    ["filled"],
                )?;
                let rect = self.rect([x, y, width, height], false)?;
                let filled = optional_bool(filled)?;
                DrawOp::Rectangle {
                    color: ColorSpec::parse(color)?,
                    rect,
                    filled,
                }
            }
            "arc" => {
                let ([color, x, y, width, height, start, extent], [filled]) = locate(
                    element,
                    attrs,
                    ["color", "x", "y", "width", "height", "start_angle", "extent_angle"],
                    ["filled"],
                )?;
                let rect = self.rect([x, y, width, height], false)?;
                let start_angle = parse_angle(start)?;
                let extent_angle = parse_angle(extent)?;
                let filled = optional_bool(filled)?;
                DrawOp::Arc {
                    color: ColorSpec::parse(color)?,
                    rect,
                    filled,
                    start_angle,
                    extent_angle,
                }
            }
            "clip" => {
                let ([x, y, width, height], []) =
                    locate(element, attrs, ["x", "y", "width", "height"], [])?;
                DrawOp::Clip {
                    rect: self.rect([x, y, width, height], false)?,
                }
            }
            "tint" => {
                let ([color, x, y, width, height, alpha], []) = locate(
                    element,
                    attrs,
                    ["color", "x", "y", "width", "height", "alpha"],
                    [],
                )?;
                let rect = self.rect([x, y, width, height], false)?;
                let alpha = parse_alpha(alpha)?;
                DrawOp::Tint {
                    color: ColorSpec::parse(color)?,
                    rect,
                    alpha,
                }
            }
            "gradient" => {
                let ([kind, x, y, width, height], [alpha]) = locate(
                    element,
                    attrs,
                    ["type", "x", "y", "width", "height"],
                    ["alpha"],
                )?;
                let rect = self.rect([x, y, width, height], false)?;
                let alpha = optional_alpha(alpha)?;
                let kind = GradientType::from_name(kind).ok_or_else(|| {
                    ThemeError::semantic(format!(
                        "Did not understand value \"{kind}\" for type of gradient"
                    ))
                })?;
                self.gradient = Some(PendingGradient {
                    spec: GradientSpec::new(kind),
                    rect,
                    alpha,
                });
                self.push(ParseState::Gradient, element);
                return Ok(());
            }
            "image" => {
                let ([x, y, width, height, filename], [alpha, colorize]) = locate(
                    element,
                    attrs,
                    ["x", "y", "width", "height", "filename"],
                    ["alpha", "colorize"],
                )?;
                let rect = self.rect([x, y, width, height], true)?;
                let alpha = optional_alpha(alpha)?;
                let pixbuf = self.load_image(filename)?;
                let colorize = colorize.map(ColorSpec::parse).transpose()?;
                DrawOp::Image {
                    pixbuf,
                    colorize,
                    rect,
                    alpha,
                }
            }
            "gtk_arrow" => {
                let ([state, shadow, arrow, x, y, width, height], [filled]) = locate(
                    element,
                    attrs,
                    ["state", "shadow", "arrow", "x", "y", "width", "height"],
                    ["filled"],
                )?;
                let rect = self.rect([x, y, width, height], false)?;
                let filled = optional_bool(filled)?;
                DrawOp::GtkArrow {
                    state: gtk_state(state, element)?,
                    shadow: gtk_shadow(shadow, element)?,
                    arrow: gtk_arrow(arrow, element)?,
                    rect,
                    filled,
                }
            }
            "gtk_box" => {
                let ([state, shadow, x, y, width, height], []) = locate(
                    element,
                    attrs,
                    ["state", "shadow", "x", "y", "width", "height"],
                    [],
                )?;
                let rect = self.rect([x, y, width, height], false)?;
                DrawOp::GtkBox {
                    state: gtk_state(state, element)?,
                    shadow: gtk_shadow(shadow, element)?,
                    rect,
                }
            }
            "gtk_vline" => {
                let ([state, x, y1, y2], []) =
                    locate(element, attrs, ["state", "x", "y1", "y2"], [])?;
                DrawOp::GtkVline {
                    x: self.expression(x, false)?,
                    y1: self.expression(y1, false)?,
                    y2: self.expression(y2, false)?,
                    state: gtk_state(state, element)?,
                }
            }
            "icon" => {
                let ([x, y, width, height], [alpha]) =
                    locate(element, attrs, ["x", "y", "width", "height"], ["alpha"])?;
                DrawOp::Icon {
                    rect: self.rect([x, y, width, height], false)?,
                    alpha: optional_alpha(alpha)?,
                }
            }
            "title" => {
                let ([color, x, y], []) = locate(element, attrs, ["color", "x", "y"], [])?;
                DrawOp::Title {
                    x: self.expression(x, false)?,
                    y: self.expression(y, false)?,
                    color: ColorSpec::parse(color)?,
                }
            }
            "include" => {
                let ([name], [x, y, width, height]) =
                    locate(element, attrs, ["name"], ["x", "y", "width", "height"])?;
                let rect = self.rect(
                    [
                        x.unwrap_or("0"),
                        y.unwrap_or("0"),
                        width.unwrap_or("width"),
                        height.unwrap_or("height"),
                    ],
                    false,
                )?;
                DrawOp::Include {
                    list: self.lookup_sub_list(name)?,
                    rect,
                }
            }
            "tile" => {
                let ([name, tile_width, tile_height], [x, y, width, height, xoffset, yoffset]) =
                    locate(
                        element,
                        attrs,
                        ["name", "tile_width", "tile_height"],
                        ["x", "y", "width", "height", "tile_xoffset", "tile_yoffset"],
                    )?;
                let rect = self.rect(
                    [
                        x.unwrap_or("0"),
                        y.unwrap_or("0"),
                        width.unwrap_or("width"),
                        height.unwrap_or("height"),
                    ],
                    false,
                )?;
                DrawOp::Tile {
                    rect,
                    tile_xoffset: self.expression(xoffset.unwrap_or("0"), false)?,
                    tile_yoffset: self.expression(yoffset.unwrap_or("0"), false)?,
                    tile_width: self.expression(tile_width, false)?,
                    tile_height: self.expression(tile_height, false)?,
                    list: self.lookup_sub_list(name)?,
                }
            }
            _ => return Err(self.not_allowed_below(element)),
        };
        self.append(op, element)
    }

    pub(crate) fn start_gradient_child(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        if element != "color" {
            return Err(self.not_allowed_below(element));
        }
        let ([value], []) = locate(element, attrs, ["value"], [])?;
        let spec = ColorSpec::parse(value)?;
        if let Some(pending) = self.gradient.as_mut() {
            pending.spec.color_specs.push(spec);
        }
        self.push(ParseState::Color, element);
        Ok(())
    }

    pub(crate) fn end_gradient(&mut self) -> Result<()> {
        let Some(pending) = self.gradient.take() else {
            return Ok(());
        };
        pending.spec.validate()?;
        let list = self.current_list()?;
        self.theme.draw_op_list_mut(list).push(DrawOp::Gradient {
            spec: pending.spec,
            rect: pending.rect,
            alpha: pending.alpha,
        });
        Ok(())
    }
}
