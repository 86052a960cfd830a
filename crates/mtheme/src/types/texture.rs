//! Texture specifications: how to fill a rectangle.

use std::rc::Rc;

use crate::error::{Result, ThemeError};
use crate::types::color_spec::{ColorSpec, StylePalette};
use crate::types::draw_op::DrawOpListId;
use crate::types::gradient::GradientSpec;
use crate::types::pixbuf::Pixbuf;
use crate::types::theme::Theme;

#[derive(Clone, Debug, PartialEq)]
pub enum TextureSpec {
    /// Draws nothing.
    Blank,
    Solid(ColorSpec),
    Gradient(GradientSpec),
    Image {
        pixbuf: Rc<Pixbuf>,
        colorize: Option<ColorSpec>,
    },
    /// `foreground` over `background` at `alpha`. Neither operand may be a
    /// composite or a shape list.
    Composite {
        background: Box<TextureSpec>,
        foreground: Box<TextureSpec>,
        alpha: f64,
    },
    /// Execute a draw-op list over the rectangle.
    ShapeList(DrawOpListId),
}

impl TextureSpec {
    pub fn validate(&self, theme: &Theme) -> Result<()> {
        match self {
            TextureSpec::Gradient(spec) => spec.validate(),
            TextureSpec::ShapeList(id) => theme.check_draw_op_list_id(*id),
            TextureSpec::Composite {
                background,
                foreground,
                ..
            } => {
                for operand in [background.as_ref(), foreground.as_ref()] {
                    if matches!(
                        operand,
                        TextureSpec::Composite { .. } | TextureSpec::ShapeList(_)
                    ) {
                        return Err(ThemeError::semantic(
                            "Composite textures cannot use a composite or shape-list texture as an operand",
                        ));
                    }
                    operand.validate(theme)?;
                }
                Ok(())
            }
            TextureSpec::Blank | TextureSpec::Solid(_) | TextureSpec::Image { .. } => Ok(()),
        }
    }

    /// Render to an image of the given size. Shape lists need a renderer
    /// and yield `None`, as does an invalid composite.
    pub fn render_pixbuf(
        &self,
        palette: &dyn StylePalette,
        width: u32,
        height: u32,
    ) -> Option<Pixbuf> {
        match self {
            TextureSpec::Blank => Some(Pixbuf::new(width, height)),
            TextureSpec::Solid(color) => {
                Some(Pixbuf::filled(width, height, color.render(palette)))
            }
            TextureSpec::Gradient(spec) => Some(spec.render(palette, width, height)),
            TextureSpec::Image { pixbuf, colorize } => {
                let scaled = pixbuf.scaled(width, height);
                Some(match colorize {
                    Some(spec) => scaled.colorize(spec.render(palette)),
                    None => scaled,
                })
            }
            TextureSpec::Composite {
                background,
                foreground,
                alpha,
            } => {
                let bg = background.render_pixbuf(palette, width, height)?;
                let fg = foreground.render_pixbuf(palette, width, height)?;
                Some(bg.composite(&fg, *alpha))
            }
            TextureSpec::ShapeList(_) => None,
        }
    }
}
