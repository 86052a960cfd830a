//! Frame layouts: the fixed distances a frame's geometry is computed from.

use crate::error::{Result, ThemeError};
use crate::parser::values::MAX_REASONABLE;

/// Handle to a layout owned by a [`Theme`](crate::types::Theme).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutId(pub(crate) usize);

impl LayoutId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Insets on each side of a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Border {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Border {
    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// Border widths, title insets and button dimensions for a frame.
///
/// A layout declared with a parent starts as a copy of it; later changes
/// to the parent do not propagate.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameLayout {
    pub left_width: i32,
    pub right_width: i32,
    pub bottom_height: i32,
    /// Extra vertical space around the title text.
    pub title_vertical_pad: i32,
    /// Where buttons start, measured in from the frame's left/right edge.
    pub left_titlebar_edge: i32,
    pub right_titlebar_edge: i32,
    pub top_titlebar_edge: i32,
    pub bottom_titlebar_edge: i32,
    pub button_width: i32,
    pub button_height: i32,
    pub spacer_padding: i32,
    pub spacer_width: i32,
    pub spacer_height: i32,
    pub title_border: Border,
    pub button_border: Border,
    pub has_title: bool,
    pub title_scale: f64,
}

impl Default for FrameLayout {
    fn default() -> Self {
        Self {
            left_width: 0,
            right_width: 0,
            bottom_height: 0,
            title_vertical_pad: 0,
            left_titlebar_edge: 0,
            right_titlebar_edge: 0,
            top_titlebar_edge: 0,
            bottom_titlebar_edge: 0,
            button_width: 0,
            button_height: 0,
            spacer_padding: 0,
            spacer_width: 0,
            spacer_height: 0,
            title_border: Border::default(),
            button_border: Border::default(),
            has_title: true,
            title_scale: 1.0,
        }
    }
}

impl FrameLayout {
    pub fn new() -> Self {
        Self::default()
    }

    fn distance_mut(&mut self, name: &str) -> Option<&mut i32> {
        Some(match name {
            "left_width" => &mut self.left_width,
            "right_width" => &mut self.right_width,
            "bottom_height" => &mut self.bottom_height,
            "title_vertical_pad" => &mut self.title_vertical_pad,
            "left_titlebar_edge" => &mut self.left_titlebar_edge,
            "right_titlebar_edge" => &mut self.right_titlebar_edge,
            "top_titlebar_edge" => &mut self.top_titlebar_edge,
            "bottom_titlebar_edge" => &mut self.bottom_titlebar_edge,
            "button_width" => &mut self.button_width,
            "button_height" => &mut self.button_height,
            "spacer_padding" => &mut self.spacer_padding,
            "spacer_width" => &mut self.spacer_width,
            "spacer_height" => &mut self.spacer_height,
            _ => return None,
        })
    }

    /// Set a distance by its theme-file name.
    pub fn set_distance(&mut self, name: &str, value: i32) -> Result<()> {
        let slot = self
            .distance_mut(name)
            .ok_or_else(|| ThemeError::semantic(format!("Distance \"{name}\" is unknown")))?;
        *slot = value;
        Ok(())
    }

    /// Set a border by its theme-file name.
    pub fn set_border(&mut self, name: &str, border: Border) -> Result<()> {
        let slot = match name {
            "title_border" => &mut self.title_border,
            "button_border" => &mut self.button_border,
            _ => {
                return Err(ThemeError::semantic(format!("Border \"{name}\" is unknown")));
            }
        };
        *slot = border;
        Ok(())
    }

    fn distances(&self) -> [(&'static str, i32); 13] {
        [
            ("left_width", self.left_width),
            ("right_width", self.right_width),
            ("bottom_height", self.bottom_height),
            ("title_vertical_pad", self.title_vertical_pad),
            ("left_titlebar_edge", self.left_titlebar_edge),
            ("right_titlebar_edge", self.right_titlebar_edge),
            ("top_titlebar_edge", self.top_titlebar_edge),
            ("bottom_titlebar_edge", self.bottom_titlebar_edge),
            ("button_width", self.button_width),
            ("button_height", self.button_height),
            ("spacer_padding", self.spacer_padding),
            ("spacer_width", self.spacer_width),
            ("spacer_height", self.spacer_height),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        let max = MAX_REASONABLE as i32;
        for (name, value) in self.distances() {
            if !(0..=max).contains(&value) {
                return Err(ThemeError::semantic(format!(
                    "Frame geometry distance \"{name}\" is {value}, must be between 0 and {max}"
                )));
            }
        }
        for (name, border) in [
            ("title_border", self.title_border),
            ("button_border", self.button_border),
        ] {
            let sides = [border.top, border.bottom, border.left, border.right];
            if sides.iter().any(|v| !(0..=max).contains(v)) {
                return Err(ThemeError::semantic(format!(
                    "Frame geometry border \"{name}\" has a side outside 0 to {max}"
                )));
            }
        }
        if self.button_width == 0 || self.button_height == 0 {
            return Err(ThemeError::semantic(
                "Frame geometry does not specify a button size",
            ));
        }
        if self.title_scale <= 0.0 {
            return Err(ThemeError::semantic(format!(
                "Title scale {} must be positive",
                self.title_scale
            )));
        }
        Ok(())
    }
}
