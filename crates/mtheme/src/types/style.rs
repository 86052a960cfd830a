//! Frame styles: a layout plus textures for each piece and button.

use crate::error::{Result, ThemeError};
use crate::macros::named_enum;
use crate::types::layout::LayoutId;
use crate::types::texture::TextureSpec;

/// Handle to a frame style owned by a [`Theme`](crate::types::Theme).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleId(pub(crate) usize);

impl StyleId {
    pub fn index(self) -> usize {
        self.0
    }
}

named_enum! {
    /// Regions of a frame, in the order they are painted.
    pub enum FramePiece {
        EntireBackground => "entire_background",
        Titlebar => "titlebar",
        TitlebarMiddle => "titlebar_middle",
        LeftTitlebarEdge => "left_titlebar_edge",
        RightTitlebarEdge => "right_titlebar_edge",
        TopTitlebarEdge => "top_titlebar_edge",
        BottomTitlebarEdge => "bottom_titlebar_edge",
        Title => "title",
        LeftEdge => "left_edge",
        RightEdge => "right_edge",
        BottomEdge => "bottom_edge",
        TopEdge => "top_edge",
        TopLeftCorner => "top_left_corner",
        TopRightCorner => "top_right_corner",
        BottomLeftCorner => "bottom_left_corner",
        BottomRightCorner => "bottom_right_corner",
        LeftEndOfTopEdge => "left_end_of_top_edge",
        RightEndOfTopEdge => "right_end_of_top_edge",
        LeftEndOfBottomEdge => "left_end_of_bottom_edge",
        RightEndOfBottomEdge => "right_end_of_bottom_edge",
        TopEndOfLeftEdge => "top_end_of_left_edge",
        BottomEndOfLeftEdge => "bottom_end_of_left_edge",
        TopEndOfRightEdge => "top_end_of_right_edge",
        BottomEndOfRightEdge => "bottom_end_of_right_edge",
        Spacer => "spacer",
        Overlay => "overlay",
    }
}

named_enum! {
    pub enum ButtonType {
        Close => "close",
        Maximize => "maximize",
        Minimize => "minimize",
        Menu => "menu",
        Unmaximize => "unmaximize",
    }
}

named_enum! {
    pub enum ButtonState {
        Normal => "normal",
        Pressed => "pressed",
        Prelight => "prelight",
    }
}

/// A layout plus per-piece and per-button textures. Unset slots fall back
/// to the parent style.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameStyle {
    pub parent: Option<StyleId>,
    pub layout: LayoutId,
    pieces: [Option<TextureSpec>; FramePiece::COUNT],
    buttons: [[Option<TextureSpec>; ButtonState::COUNT]; ButtonType::COUNT],
}

impl FrameStyle {
    pub fn new(parent: Option<StyleId>, layout: LayoutId) -> Self {
        Self {
            parent,
            layout,
            pieces: std::array::from_fn(|_| None),
            buttons: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    /// The texture set on this style only, ignoring the parent.
    pub fn piece(&self, piece: FramePiece) -> Option<&TextureSpec> {
        self.pieces[piece.index()].as_ref()
    }

    pub fn set_piece(&mut self, piece: FramePiece, texture: TextureSpec) -> Result<()> {
        let slot = &mut self.pieces[piece.index()];
        if slot.is_some() {
            return Err(ThemeError::semantic(format!(
                "Frame style already has a piece at position {piece}"
            )));
        }
        *slot = Some(texture);
        Ok(())
    }

    pub fn button(&self, button: ButtonType, state: ButtonState) -> Option<&TextureSpec> {
        self.buttons[button.index()][state.index()].as_ref()
    }

    pub fn set_button(
        &mut self,
        button: ButtonType,
        state: ButtonState,
        texture: TextureSpec,
    ) -> Result<()> {
        let slot = &mut self.buttons[button.index()][state.index()];
        if slot.is_some() {
            return Err(ThemeError::semantic(format!(
                "Frame style already has a button for function {button} state {state}"
            )));
        }
        *slot = Some(texture);
        Ok(())
    }

    pub fn has_piece(&self, piece: FramePiece) -> bool {
        self.piece(piece).is_some()
    }

    pub fn textures(&self) -> impl Iterator<Item = &TextureSpec> {
        self.pieces
            .iter()
            .chain(self.buttons.iter().flatten())
            .flatten()
    }
}
