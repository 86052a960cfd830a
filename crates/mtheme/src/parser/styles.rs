//! `<frame_style>` and `<frame_style_set>` with their children.

use crate::error::{Result, ThemeError};
use crate::parser::attrs::{Attributes, locate};
use crate::parser::{ParseState, ThemeParser};
use crate::types::{
    ButtonState, ButtonType, FrameFocus, FramePiece, FrameResize, FrameState, FrameStyle,
    FrameStyleSet,
};

impl ThemeParser<'_> {
    pub(crate) fn start_frame_style(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        let ([name], [parent, geometry]) =
            locate(element, attrs, ["name"], ["parent", "geometry"])?;

        if self.theme.lookup_style(name).is_some() {
            return Err(ThemeError::semantic(format!(
                "<{element}> name \"{name}\" used a second time"
            )));
        }

        let parent = parent
            .map(|parent| {
                self.theme.lookup_style(parent).ok_or_else(|| {
                    ThemeError::semantic(format!(
                        "<{element}> parent \"{parent}\" has not been defined"
                    ))
                })
            })
            .transpose()?;

        let layout = match geometry {
            Some(geometry) => self.theme.lookup_layout(geometry).ok_or_else(|| {
                ThemeError::semantic(format!(
                    "<{element}> geometry \"{geometry}\" has not been defined"
                ))
            })?,
            None => parent
                .map(|parent| self.theme.style(parent).layout)
                .ok_or_else(|| {
                    ThemeError::semantic(format!(
                        "<{element}> must specify either a geometry or a parent that has a geometry"
                    ))
                })?,
        };

        self.style = Some(self.theme.add_style(name, FrameStyle::new(parent, layout))?);
        self.push(ParseState::FrameStyle, element);
        Ok(())
    }

    pub(crate) fn start_style_child(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        let style = self
            .style
            .ok_or_else(|| self.not_allowed_below(element))?;
        match element {
            "piece" => {
                let ([position], [draw_ops]) =
                    locate(element, attrs, ["position"], ["draw_ops"])?;
                let piece = FramePiece::from_name(position).ok_or_else(|| {
                    ThemeError::semantic(format!(
                        "Unknown position \"{position}\" for frame piece"
                    ))
                })?;
                if self.theme.style(style).has_piece(piece) {
                    return Err(ThemeError::semantic(format!(
                        "Frame style already has a piece at position {piece}"
                    )));
                }
                self.op_list = draw_ops.map(|name| self.lookup_list(name)).transpose()?;
                self.piece = Some(piece);
                self.push(ParseState::Piece, element);
            }
            "button" => {
                let ([function, state], [draw_ops]) =
                    locate(element, attrs, ["function", "state"], ["draw_ops"])?;
                let button = ButtonType::from_name(function).ok_or_else(|| {
                    ThemeError::semantic(format!("Unknown function \"{function}\" for button"))
                })?;
                let state = ButtonState::from_name(state).ok_or_else(|| {
                    ThemeError::semantic(format!("Unknown state \"{state}\" for button"))
                })?;
                if self.theme.style(style).button(button, state).is_some() {
                    return Err(ThemeError::semantic(format!(
                        "Frame style already has a button for function {button} state {state}"
                    )));
                }
                self.op_list = draw_ops.map(|name| self.lookup_list(name)).transpose()?;
                self.button = Some((button, state));
                self.push(ParseState::Button, element);
            }
            _ => return Err(self.not_allowed_below(element)),
        }
        Ok(())
    }

    pub(crate) fn start_frame_style_set(
        &mut self,
        element: &str,
        attrs: &Attributes,
    ) -> Result<()> {
        let ([name], [parent]) = locate(element, attrs, ["name"], ["parent"])?;

        if self.theme.lookup_style_set(name).is_some() {
            return Err(ThemeError::semantic(format!(
                "<{element}> name \"{name}\" used a second time"
            )));
        }
        let parent = parent
            .map(|parent| {
                self.theme.lookup_style_set(parent).ok_or_else(|| {
                    ThemeError::semantic(format!(
                        "<{element}> parent \"{parent}\" has not been defined"
                    ))
                })
            })
            .transpose()?;

        self.style_set = Some(self.theme.add_style_set(name, FrameStyleSet::new(parent))?);
        self.push(ParseState::FrameStyleSet, element);
        Ok(())
    }

    pub(crate) fn start_style_set_child(
        &mut self,
        element: &str,
        attrs: &Attributes,
    ) -> Result<()> {
        let set = self
            .style_set
            .ok_or_else(|| self.not_allowed_below(element))?;
        if element != "frame" {
            return Err(self.not_allowed_below(element));
        }

        let ([focus, state, style], [resize]) =
            locate(element, attrs, ["focus", "state", "style"], ["resize"])?;
        let focus = FrameFocus::from_name(focus).ok_or_else(|| {
            ThemeError::semantic(format!("\"{focus}\" is not a valid value for focus attribute"))
        })?;
        let state = FrameState::from_name(state).ok_or_else(|| {
            ThemeError::semantic(format!("\"{state}\" is not a valid value for state attribute"))
        })?;
        let style = self.theme.lookup_style(style).ok_or_else(|| {
            ThemeError::semantic(format!("A style called \"{style}\" has not been defined"))
        })?;
        let resize = resize
            .map(|resize| {
                FrameResize::from_name(resize).ok_or_else(|| {
                    ThemeError::semantic(format!(
                        "\"{resize}\" is not a valid value for resize attribute"
                    ))
                })
            })
            .transpose()?;

        self.theme
            .style_set_mut(set)
            .set_slot(state, resize, focus, style)?;
        self.push(ParseState::Frame, element);
        Ok(())
    }
}
