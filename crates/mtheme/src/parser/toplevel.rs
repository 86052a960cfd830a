//! Children of `<metacity_theme>` other than styles and draw ops.

use log::debug;

use crate::error::{Result, ThemeError};
use crate::parser::attrs::{Attributes, locate, no_attributes};
use crate::parser::values::{
    parse_boolean, parse_double, parse_positive_integer, parse_title_scale,
};
use crate::parser::{ParseState, ThemeParser};
use crate::types::{Border, FrameLayout, FrameType, GtkState, MenuIconType};

impl ThemeParser<'_> {
    pub(crate) fn start_theme_child(&mut self, name: &str, attrs: &Attributes) -> Result<()> {
        match name {
            "info" => {
                no_attributes(name, attrs)?;
                self.push(ParseState::Info, name);
            }
            "constant" => self.start_constant(name, attrs)?,
            "frame_geometry" => self.start_frame_geometry(name, attrs)?,
            "draw_ops" => self.start_named_draw_ops(name, attrs)?,
            "frame_style" => self.start_frame_style(name, attrs)?,
            "frame_style_set" => self.start_frame_style_set(name, attrs)?,
            "window" => self.start_window(name, attrs)?,
            "menu_icon" => self.start_menu_icon(name, attrs)?,
            _ => return Err(self.not_allowed_below(name)),
        }
        Ok(())
    }

    pub(crate) fn start_info_child(&mut self, name: &str, attrs: &Attributes) -> Result<()> {
        match name {
            "name" | "author" | "copyright" | "date" | "description" => {
                no_attributes(name, attrs)?;
                self.text.clear();
                self.push(ParseState::InfoField, name);
                Ok(())
            }
            _ => Err(self.not_allowed_below(name)),
        }
    }

    fn start_constant(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        let ([name, value], []) = locate(element, attrs, ["name", "value"], [])?;
        if value.contains('.') {
            let value = parse_double(value)?;
            self.theme.define_float_constant(name, value)?;
        } else {
            let value = parse_positive_integer(value)?;
            self.theme.define_int_constant(name, value)?;
        }
        self.push(ParseState::Constant, element);
        Ok(())
    }

    fn start_frame_geometry(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        let ([name], [parent, has_title, title_scale]) = locate(
            element,
            attrs,
            ["name"],
            ["parent", "has_title", "title_scale"],
        )?;

        let has_title = has_title.map(parse_boolean).transpose()?;
        let title_scale = title_scale.map(parse_title_scale).transpose()?;

        if self.theme.lookup_layout(name).is_some() {
            return Err(ThemeError::semantic(format!(
                "<{element}> name \"{name}\" used a second time"
            )));
        }

        let mut layout = match parent {
            Some(parent) => {
                let id = self.theme.lookup_layout(parent).ok_or_else(|| {
                    ThemeError::semantic(format!(
                        "<{element}> parent \"{parent}\" has not been defined"
                    ))
                })?;
                self.theme.layout(id).clone()
            }
            None => FrameLayout::new(),
        };
        if let Some(has_title) = has_title {
            layout.has_title = has_title;
        }
        if let Some(title_scale) = title_scale {
            layout.title_scale = title_scale;
        }

        self.layout = Some(self.theme.add_layout(name, layout)?);
        self.push(ParseState::FrameGeometry, element);
        Ok(())
    }

    pub(crate) fn start_geometry_child(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        let id = self
            .layout
            .ok_or_else(|| self.not_allowed_below(element))?;
        match element {
            "distance" => {
                let ([name, value], []) = locate(element, attrs, ["name", "value"], [])?;
                let value = parse_positive_integer(value)?;
                self.theme.layout_mut(id).set_distance(name, value)?;
                self.push(ParseState::Distance, element);
            }
            "border" => {
                let ([name, top, bottom, left, right], []) = locate(
                    element,
                    attrs,
                    ["name", "top", "bottom", "left", "right"],
                    [],
                )?;
                let border = Border::new(
                    parse_positive_integer(top)?,
                    parse_positive_integer(bottom)?,
                    parse_positive_integer(left)?,
                    parse_positive_integer(right)?,
                );
                self.theme.layout_mut(id).set_border(name, border)?;
                self.push(ParseState::Border, element);
            }
            _ => return Err(self.not_allowed_below(element)),
        }
        Ok(())
    }

    fn start_window(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        let ([kind, style_set], []) = locate(element, attrs, ["type", "style_set"], [])?;
        let kind = FrameType::from_name(kind).ok_or_else(|| {
            ThemeError::semantic(format!("Unknown type \"{kind}\" on <{element}> element"))
        })?;
        let set = self.theme.lookup_style_set(style_set).ok_or_else(|| {
            ThemeError::semantic(format!(
                "Unknown style_set \"{style_set}\" on <{element}> element"
            ))
        })?;
        self.theme.set_window_style_set(kind, set)?;
        debug!("Window type {kind} uses style set {style_set}");
        self.push(ParseState::Window, element);
        Ok(())
    }

    fn start_menu_icon(&mut self, element: &str, attrs: &Attributes) -> Result<()> {
        let ([function, state], [draw_ops]) =
            locate(element, attrs, ["function", "state"], ["draw_ops"])?;
        let kind = MenuIconType::from_name(function).ok_or_else(|| {
            ThemeError::semantic(format!("Unknown function \"{function}\" for menu icon"))
        })?;
        let state = GtkState::from_name(&state.to_ascii_lowercase()).ok_or_else(|| {
            ThemeError::semantic(format!("Unknown state \"{state}\" for menu icon"))
        })?;
        if self.theme.menu_icon(kind, state).is_some() {
            return Err(ThemeError::semantic(format!(
                "Theme already has a menu icon for function {kind} state {state}"
            )));
        }
        self.op_list = draw_ops.map(|name| self.lookup_list(name)).transpose()?;
        self.menu_icon = Some((kind, state));
        self.push(ParseState::MenuIcon, element);
        Ok(())
    }
}
