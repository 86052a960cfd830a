//! Frame style sets: choose a style by window state.

use crate::error::{Result, ThemeError};
use crate::macros::named_enum;
use crate::types::style::StyleId;

/// Handle to a style set owned by a [`Theme`](crate::types::Theme).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleSetId(pub(crate) usize);

impl StyleSetId {
    pub fn index(self) -> usize {
        self.0
    }
}

named_enum! {
    pub enum FrameState {
        Normal => "normal",
        Maximized => "maximized",
        Shaded => "shaded",
        MaximizedAndShaded => "maximized_and_shaded",
    }
}

named_enum! {
    pub enum FrameResize {
        None => "none",
        Vertical => "vertical",
        Horizontal => "horizontal",
        Both => "both",
    }
}

named_enum! {
    pub enum FrameFocus {
        Yes => "yes",
        No => "no",
    }
}

/// Styles indexed by state, resize axis and focus. Only the normal state
/// distinguishes resize axes. Unset slots fall back to the parent set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStyleSet {
    pub parent: Option<StyleSetId>,
    normal: [[Option<StyleId>; FrameFocus::COUNT]; FrameResize::COUNT],
    maximized: [Option<StyleId>; FrameFocus::COUNT],
    shaded: [Option<StyleId>; FrameFocus::COUNT],
    maximized_and_shaded: [Option<StyleId>; FrameFocus::COUNT],
}

impl FrameStyleSet {
    pub fn new(parent: Option<StyleSetId>) -> Self {
        Self {
            parent,
            ..Self::default()
        }
    }

    fn focus_row(&self, state: FrameState, resize: FrameResize) -> &[Option<StyleId>; 2] {
        match state {
            FrameState::Normal => &self.normal[resize.index()],
            FrameState::Maximized => &self.maximized,
            FrameState::Shaded => &self.shaded,
            FrameState::MaximizedAndShaded => &self.maximized_and_shaded,
        }
    }

    /// The style set directly on this set, ignoring the parent.
    pub fn slot(&self, state: FrameState, resize: FrameResize, focus: FrameFocus) -> Option<StyleId> {
        self.focus_row(state, resize)[focus.index()]
    }

    /// Assign a style. `resize` must be given for the normal state and
    /// omitted otherwise.
    pub fn set_slot(
        &mut self,
        state: FrameState,
        resize: Option<FrameResize>,
        focus: FrameFocus,
        style: StyleId,
    ) -> Result<()> {
        let slot = match (state, resize) {
            (FrameState::Normal, Some(resize)) => {
                &mut self.normal[resize.index()][focus.index()]
            }
            (FrameState::Normal, None) => {
                return Err(ThemeError::markup(
                    "No \"resize\" attribute on <frame> element",
                ));
            }
            (_, Some(_)) => {
                return Err(ThemeError::markup(
                    "Should not have \"resize\" attribute on <frame> element for maximized/shaded states",
                ));
            }
            (FrameState::Maximized, None) => &mut self.maximized[focus.index()],
            (FrameState::Shaded, None) => &mut self.shaded[focus.index()],
            (FrameState::MaximizedAndShaded, None) => {
                &mut self.maximized_and_shaded[focus.index()]
            }
        };

        if slot.is_some() {
            return Err(ThemeError::semantic(match resize {
                Some(resize) => format!(
                    "Style has already been specified for state {state} resize {resize} focus {focus}"
                ),
                None => format!("Style has already been specified for state {state} focus {focus}"),
            }));
        }
        *slot = Some(style);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_state_needs_resize() {
        let mut set = FrameStyleSet::new(None);
        assert!(set
            .set_slot(FrameState::Normal, None, FrameFocus::Yes, StyleId(0))
            .is_err());
        set.set_slot(
            FrameState::Normal,
            Some(FrameResize::Both),
            FrameFocus::Yes,
            StyleId(0),
        )
        .unwrap();
        assert_eq!(
            set.slot(FrameState::Normal, FrameResize::Both, FrameFocus::Yes),
            Some(StyleId(0))
        );
        assert_eq!(
            set.slot(FrameState::Normal, FrameResize::None, FrameFocus::Yes),
            None
        );
    }

    #[test]
    fn other_states_reject_resize_and_ignore_it_on_lookup() {
        let mut set = FrameStyleSet::new(None);
        assert!(set
            .set_slot(
                FrameState::Shaded,
                Some(FrameResize::None),
                FrameFocus::No,
                StyleId(1)
            )
            .is_err());
        set.set_slot(FrameState::Shaded, None, FrameFocus::No, StyleId(1))
            .unwrap();
        assert_eq!(
            set.slot(FrameState::Shaded, FrameResize::Vertical, FrameFocus::No),
            Some(StyleId(1))
        );
    }

    #[test]
    fn duplicate_assignment() {
        let mut set = FrameStyleSet::new(None);
        set.set_slot(FrameState::Maximized, None, FrameFocus::Yes, StyleId(0))
            .unwrap();
        assert_eq!(
            set.set_slot(FrameState::Maximized, None, FrameFocus::Yes, StyleId(2))
                .unwrap_err()
                .to_string(),
            "Style has already been specified for state maximized focus yes"
        );
    }
}
