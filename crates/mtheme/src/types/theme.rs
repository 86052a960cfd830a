//! The theme arena: every layout, draw-op list, style and style set a
//! theme declares, plus the tables that tie them to window types.

use std::collections::HashMap;

use posexpr::{ConstantLookup, Number};

use crate::error::{Result, ThemeError};
use crate::macros::named_enum;
use crate::types::color_spec::GtkState;
use crate::types::draw_op::{DrawOp, DrawOpList, DrawOpListId};
use crate::types::layout::{FrameLayout, LayoutId};
use crate::types::style::{ButtonState, ButtonType, FramePiece, FrameStyle, StyleId};
use crate::types::style_set::{FrameFocus, FrameResize, FrameState, FrameStyleSet, StyleSetId};
use crate::types::texture::TextureSpec;

named_enum! {
    pub enum FrameType {
        Normal => "normal",
        Dialog => "dialog",
        ModalDialog => "modal_dialog",
        Utility => "utility",
        Menu => "menu",
        Toolbar => "toolbar",
    }
}

named_enum! {
    pub enum MenuIconType {
        Close => "close",
        Maximize => "maximize",
        Unmaximize => "unmaximize",
        Minimize => "minimize",
    }
}

/// Free-text metadata from the `<info>` block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeInfo {
    pub readable_name: Option<String>,
    pub author: Option<String>,
    pub copyright: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl ThemeInfo {
    /// Set a field by element name. Each field may be given once.
    pub fn set(&mut self, field: &str, text: &str) -> Result<()> {
        let slot = match field {
            "name" => &mut self.readable_name,
            "author" => &mut self.author,
            "copyright" => &mut self.copyright,
            "date" => &mut self.date,
            "description" => &mut self.description,
            _ => {
                return Err(ThemeError::markup(format!(
                    "Element <{field}> is not allowed below <info>"
                )));
            }
        };
        if slot.is_some() {
            return Err(ThemeError::markup(format!(
                "<{field}> specified twice for this theme"
            )));
        }
        *slot = Some(text.to_string());
        Ok(())
    }
}

/// An arena-backed theme. Objects are addressed by handle; names map to
/// handles. Anonymous draw-op lists (inline `<draw_ops>` blocks) live in
/// the arena without a name.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    /// Directory name the theme was loaded as.
    pub name: String,
    pub info: ThemeInfo,
    layouts: Vec<FrameLayout>,
    layouts_by_name: HashMap<String, LayoutId>,
    draw_op_lists: Vec<DrawOpList>,
    draw_op_lists_by_name: HashMap<String, DrawOpListId>,
    styles: Vec<FrameStyle>,
    styles_by_name: HashMap<String, StyleId>,
    style_sets: Vec<FrameStyleSet>,
    style_sets_by_name: HashMap<String, StyleSetId>,
    constants: HashMap<String, Number>,
    style_sets_by_type: [Option<StyleSetId>; FrameType::COUNT],
    menu_icons: [[Option<DrawOpListId>; GtkState::COUNT]; MenuIconType::COUNT],
}

fn duplicate(element: &str, name: &str) -> ThemeError {
    ThemeError::semantic(format!("<{element}> name \"{name}\" used a second time"))
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // ========================================================================
    // Constants
    // ========================================================================

    fn check_constant_name(&self, name: &str) -> Result<()> {
        if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(ThemeError::semantic(format!(
                "User-defined constants must begin with a capital letter; \"{name}\" does not"
            )));
        }
        if self.constants.contains_key(name) {
            return Err(ThemeError::semantic(format!(
                "Constant \"{name}\" has already been defined"
            )));
        }
        Ok(())
    }

    pub fn define_int_constant(&mut self, name: &str, value: i32) -> Result<()> {
        self.check_constant_name(name)?;
        self.constants
            .insert(name.to_string(), Number::Int(i64::from(value)));
        Ok(())
    }

    pub fn define_float_constant(&mut self, name: &str, value: f64) -> Result<()> {
        self.check_constant_name(name)?;
        self.constants.insert(name.to_string(), Number::Double(value));
        Ok(())
    }

    pub fn constant(&self, name: &str) -> Option<Number> {
        self.constants.get(name).copied()
    }

    // ========================================================================
    // Layouts
    // ========================================================================

    pub fn add_layout(&mut self, name: &str, layout: FrameLayout) -> Result<LayoutId> {
        if self.layouts_by_name.contains_key(name) {
            return Err(duplicate("frame_geometry", name));
        }
        let id = LayoutId(self.layouts.len());
        self.layouts.push(layout);
        self.layouts_by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn lookup_layout(&self, name: &str) -> Option<LayoutId> {
        self.layouts_by_name.get(name).copied()
    }

    pub fn layout(&self, id: LayoutId) -> &FrameLayout {
        &self.layouts[id.0]
    }

    pub fn layout_mut(&mut self, id: LayoutId) -> &mut FrameLayout {
        &mut self.layouts[id.0]
    }

    // ========================================================================
    // Draw-op lists
    // ========================================================================

    pub fn add_draw_op_list(&mut self, name: &str) -> Result<DrawOpListId> {
        if self.draw_op_lists_by_name.contains_key(name) {
            return Err(duplicate("draw_ops", name));
        }
        let id = self.add_anonymous_draw_op_list();
        self.draw_op_lists_by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn add_anonymous_draw_op_list(&mut self) -> DrawOpListId {
        let id = DrawOpListId(self.draw_op_lists.len());
        self.draw_op_lists.push(DrawOpList::new());
        id
    }

    pub fn lookup_draw_op_list(&self, name: &str) -> Option<DrawOpListId> {
        self.draw_op_lists_by_name.get(name).copied()
    }

    pub fn draw_op_list(&self, id: DrawOpListId) -> &DrawOpList {
        &self.draw_op_lists[id.0]
    }

    pub fn draw_op_list_mut(&mut self, id: DrawOpListId) -> &mut DrawOpList {
        &mut self.draw_op_lists[id.0]
    }

    /// Whether `list` reaches `target` through include or tile ops.
    /// A list does not contain itself unless it includes itself.
    pub fn draw_op_list_contains(&self, list: DrawOpListId, target: DrawOpListId) -> bool {
        let mut seen = vec![false; self.draw_op_lists.len()];
        let mut pending = vec![list];
        while let Some(current) = pending.pop() {
            for child in self.draw_op_list(current).iter().filter_map(DrawOp::referenced_list) {
                if child == target {
                    return true;
                }
                if !std::mem::replace(&mut seen[child.0], true) {
                    pending.push(child);
                }
            }
        }
        false
    }

    pub fn check_draw_op_list_id(&self, id: DrawOpListId) -> Result<()> {
        if id.0 < self.draw_op_lists.len() {
            Ok(())
        } else {
            Err(ThemeError::semantic(format!(
                "Draw-op list {} does not belong to this theme",
                id.0
            )))
        }
    }

    pub fn validate_draw_op_list(&self, id: DrawOpListId) -> Result<()> {
        self.check_draw_op_list_id(id)?;
        for op in self.draw_op_list(id) {
            match op {
                DrawOp::Gradient { spec, .. } => spec.validate()?,
                DrawOp::Include { list, .. } | DrawOp::Tile { list, .. } => {
                    self.check_draw_op_list_id(*list)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    // ========================================================================
    // Frame styles
    // ========================================================================

    pub fn add_style(&mut self, name: &str, style: FrameStyle) -> Result<StyleId> {
        if self.styles_by_name.contains_key(name) {
            return Err(duplicate("frame_style", name));
        }
        let id = StyleId(self.styles.len());
        self.styles.push(style);
        self.styles_by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn lookup_style(&self, name: &str) -> Option<StyleId> {
        self.styles_by_name.get(name).copied()
    }

    pub fn style(&self, id: StyleId) -> &FrameStyle {
        &self.styles[id.0]
    }

    pub fn style_mut(&mut self, id: StyleId) -> &mut FrameStyle {
        &mut self.styles[id.0]
    }

    /// The style followed by its ancestors, nearest first.
    pub fn style_chain(&self, id: StyleId) -> impl Iterator<Item = &FrameStyle> + '_ {
        std::iter::successors(Some(self.style(id)), move |style| {
            style.parent.map(|parent| self.style(parent))
        })
    }

    /// The texture for `piece`, from the nearest style in the chain that
    /// defines one.
    pub fn resolve_piece(&self, id: StyleId, piece: FramePiece) -> Option<&TextureSpec> {
        self.style_chain(id).find_map(|style| style.piece(piece))
    }

    /// The texture for a button. Unmaximize falls back to maximize when no
    /// style in the chain defines it.
    pub fn resolve_button(
        &self,
        id: StyleId,
        button: ButtonType,
        state: ButtonState,
    ) -> Option<&TextureSpec> {
        self.style_chain(id)
            .find_map(|style| style.button(button, state))
            .or_else(|| match button {
                ButtonType::Unmaximize => {
                    self.resolve_button(id, ButtonType::Maximize, state)
                }
                _ => None,
            })
    }

    pub fn validate_style(&self, id: StyleId) -> Result<()> {
        for &button in ButtonType::ALL {
            if button == ButtonType::Unmaximize {
                continue;
            }
            for &state in ButtonState::ALL {
                if self.resolve_button(id, button, state).is_none() {
                    return Err(ThemeError::semantic(format!(
                        "<button function=\"{button}\" state=\"{state}\" draw_ops=\"whatever\"/> must be specified for this frame style"
                    )));
                }
            }
        }
        for texture in self.style(id).textures() {
            texture.validate(self)?;
        }
        Ok(())
    }

    // ========================================================================
    // Frame style sets
    // ========================================================================

    pub fn add_style_set(&mut self, name: &str, set: FrameStyleSet) -> Result<StyleSetId> {
        if self.style_sets_by_name.contains_key(name) {
            return Err(duplicate("frame_style_set", name));
        }
        let id = StyleSetId(self.style_sets.len());
        self.style_sets.push(set);
        self.style_sets_by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn lookup_style_set(&self, name: &str) -> Option<StyleSetId> {
        self.style_sets_by_name.get(name).copied()
    }

    pub fn style_set(&self, id: StyleSetId) -> &FrameStyleSet {
        &self.style_sets[id.0]
    }

    pub fn style_set_mut(&mut self, id: StyleSetId) -> &mut FrameStyleSet {
        &mut self.style_sets[id.0]
    }

    /// The style for a window state, walking the set's parent chain until
    /// a set defines the slot.
    pub fn resolve_style(
        &self,
        id: StyleSetId,
        state: FrameState,
        resize: FrameResize,
        focus: FrameFocus,
    ) -> Option<StyleId> {
        std::iter::successors(Some(self.style_set(id)), |set| {
            set.parent.map(|parent| self.style_set(parent))
        })
        .find_map(|set| set.slot(state, resize, focus))
    }

    pub fn validate_style_set(&self, id: StyleSetId) -> Result<()> {
        for &resize in FrameResize::ALL {
            for &focus in FrameFocus::ALL {
                if self
                    .resolve_style(id, FrameState::Normal, resize, focus)
                    .is_none()
                {
                    return Err(ThemeError::semantic(format!(
                        "Missing <frame state=\"normal\" resize=\"{resize}\" focus=\"{focus}\" style=\"whatever\"/>"
                    )));
                }
            }
        }
        for &state in &FrameState::ALL[1..] {
            for &focus in FrameFocus::ALL {
                if self
                    .resolve_style(id, state, FrameResize::None, focus)
                    .is_none()
                {
                    return Err(ThemeError::semantic(format!(
                        "Missing <frame state=\"{state}\" focus=\"{focus}\" style=\"whatever\"/>"
                    )));
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Window types and menu icons
    // ========================================================================

    pub fn set_window_style_set(&mut self, kind: FrameType, set: StyleSetId) -> Result<()> {
        let slot = &mut self.style_sets_by_type[kind.index()];
        if slot.is_some() {
            return Err(ThemeError::semantic(format!(
                "Window type \"{kind}\" has already been assigned a style set"
            )));
        }
        *slot = Some(set);
        Ok(())
    }

    /// The style set for a window type, or the normal type's set when the
    /// type has none of its own.
    pub fn style_set_for_type(&self, kind: FrameType) -> Option<StyleSetId> {
        self.style_sets_by_type[kind.index()]
            .or(self.style_sets_by_type[FrameType::Normal.index()])
    }

    /// The style a frame of the given type and state is drawn with.
    pub fn frame_style(
        &self,
        kind: FrameType,
        state: FrameState,
        resize: FrameResize,
        focus: FrameFocus,
    ) -> Option<StyleId> {
        self.resolve_style(self.style_set_for_type(kind)?, state, resize, focus)
    }

    pub fn menu_icon(&self, kind: MenuIconType, state: GtkState) -> Option<DrawOpListId> {
        self.menu_icons[kind.index()][state.index()]
    }

    pub fn set_menu_icon(
        &mut self,
        kind: MenuIconType,
        state: GtkState,
        list: DrawOpListId,
    ) -> Result<()> {
        let slot = &mut self.menu_icons[kind.index()][state.index()];
        if slot.is_some() {
            return Err(ThemeError::semantic(format!(
                "Theme already has a menu icon for function {kind} state {state}"
            )));
        }
        *slot = Some(list);
        Ok(())
    }

    /// Whole-theme checks run once the document is complete.
    pub fn validate(&self) -> Result<()> {
        if self.info.readable_name.is_none() {
            return Err(ThemeError::markup(format!(
                "No <name> set for theme \"{}\"",
                self.name
            )));
        }
        if self.style_sets_by_type[FrameType::Normal.index()].is_none() {
            return Err(ThemeError::semantic(
                "No frame style set for window type \"normal\" in theme, add a <window type=\"normal\" style_set=\"whatever\"/> element",
            ));
        }
        Ok(())
    }
}

impl ConstantLookup for Theme {
    fn lookup_constant(&self, name: &str) -> Option<Number> {
        self.constant(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posexpr::Expr;

    use crate::types::draw_op::RectExpr;

    fn include(list: DrawOpListId) -> DrawOp {
        DrawOp::Include {
            list,
            rect: RectExpr::full(),
        }
    }

    #[test]
    fn constants_must_be_capitalized_and_unique() {
        let mut theme = Theme::new("test");
        theme.define_int_constant("Pad", 3).unwrap();
        theme.define_float_constant("Ratio", 0.5).unwrap();
        assert_eq!(theme.constant("Pad"), Some(Number::Int(3)));
        assert!(theme.define_int_constant("pad", 1).is_err());
        assert_eq!(
            theme.define_int_constant("Pad", 4).unwrap_err().to_string(),
            "Constant \"Pad\" has already been defined"
        );
    }

    #[test]
    fn contains_walks_includes_transitively() {
        let mut theme = Theme::new("test");
        let a = theme.add_draw_op_list("a").unwrap();
        let b = theme.add_draw_op_list("b").unwrap();
        let c = theme.add_draw_op_list("c").unwrap();
        theme.draw_op_list_mut(b).push(include(c));
        theme.draw_op_list_mut(a).push(include(b));
        assert!(theme.draw_op_list_contains(a, c));
        assert!(!theme.draw_op_list_contains(c, a));
        assert!(!theme.draw_op_list_contains(a, a));
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut theme = Theme::new("test");
        theme.add_draw_op_list("x").unwrap();
        assert_eq!(
            theme.add_draw_op_list("x").unwrap_err().to_string(),
            "<draw_ops> name \"x\" used a second time"
        );
        theme.add_layout("g", FrameLayout::new()).unwrap();
        assert!(theme.add_layout("g", FrameLayout::new()).is_err());
    }

    #[test]
    fn piece_resolution_prefers_nearest_style() {
        let mut theme = Theme::new("test");
        let layout = theme.add_layout("g", FrameLayout::new()).unwrap();
        let list = theme.add_anonymous_draw_op_list();

        let mut parent = FrameStyle::new(None, layout);
        parent
            .set_piece(FramePiece::Title, TextureSpec::ShapeList(list))
            .unwrap();
        parent
            .set_piece(FramePiece::Overlay, TextureSpec::Blank)
            .unwrap();
        let parent = theme.add_style("parent", parent).unwrap();

        let mut child = FrameStyle::new(Some(parent), layout);
        child.set_piece(FramePiece::Title, TextureSpec::Blank).unwrap();
        let child = theme.add_style("child", child).unwrap();

        assert_eq!(
            theme.resolve_piece(child, FramePiece::Title),
            Some(&TextureSpec::Blank)
        );
        assert_eq!(
            theme.resolve_piece(child, FramePiece::Overlay),
            Some(&TextureSpec::Blank)
        );
        assert_eq!(theme.resolve_piece(child, FramePiece::Spacer), None);
    }

    #[test]
    fn unmaximize_falls_back_to_maximize() {
        let mut theme = Theme::new("test");
        let layout = theme.add_layout("g", FrameLayout::new()).unwrap();
        let mut style = FrameStyle::new(None, layout);
        style
            .set_button(ButtonType::Maximize, ButtonState::Normal, TextureSpec::Blank)
            .unwrap();
        let style = theme.add_style("s", style).unwrap();
        assert_eq!(
            theme.resolve_button(style, ButtonType::Unmaximize, ButtonState::Normal),
            Some(&TextureSpec::Blank)
        );
        assert!(theme
            .resolve_button(style, ButtonType::Unmaximize, ButtonState::Pressed)
            .is_none());
    }

    #[test]
    fn window_types_fall_back_to_normal() {
        let mut theme = Theme::new("test");
        let set = theme.add_style_set("set", FrameStyleSet::new(None)).unwrap();
        assert_eq!(theme.style_set_for_type(FrameType::Dialog), None);
        theme.set_window_style_set(FrameType::Normal, set).unwrap();
        assert_eq!(theme.style_set_for_type(FrameType::Dialog), Some(set));
        assert!(theme.set_window_style_set(FrameType::Normal, set).is_err());
    }

    #[test]
    fn constants_are_visible_to_expressions() {
        let mut theme = Theme::new("test");
        theme.define_int_constant("Gap", 4).unwrap();
        let env = posexpr::Environment::new(0, 0, 10, 10).with_constants(&theme);
        assert_eq!(Expr::parse("width - Gap").unwrap().size(&env).unwrap(), 6);
    }
}
