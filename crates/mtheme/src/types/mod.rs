//! The theme object model.

pub mod color;
pub mod color_spec;
pub mod draw_op;
pub mod gradient;
pub mod layout;
pub mod pixbuf;
pub mod style;
pub mod style_set;
pub mod texture;
pub mod theme;

pub use color::{ColorParseError, RgbaColor};
pub use color_spec::{ColorSpec, DefaultPalette, GtkColorComponent, GtkState, StylePalette};
pub use draw_op::{DrawOp, DrawOpList, DrawOpListId, GtkArrow, GtkShadow, RectExpr};
pub use gradient::{GradientSpec, GradientType};
pub use layout::{Border, FrameLayout, LayoutId};
pub use pixbuf::Pixbuf;
pub use style::{ButtonState, ButtonType, FramePiece, FrameStyle, StyleId};
pub use style_set::{FrameFocus, FrameResize, FrameState, FrameStyleSet, StyleSetId};
pub use texture::TextureSpec;
pub use theme::{FrameType, MenuIconType, Theme, ThemeInfo};
