//! # framedraw - Laying out and painting window frames
//!
//! Given a loaded [`mtheme::Theme`], this crate works out where a frame's
//! title and buttons go ([`calc_geometry`]) and paints the frame through a
//! toolkit-supplied [`Rasterizer`] ([`draw_frame`]).
//!
//! ```rust
//! use framedraw::{calc_geometry, FrameFlags};
//! use mtheme::FrameLayout;
//!
//! let layout = FrameLayout {
//!     left_width: 4,
//!     right_width: 4,
//!     bottom_height: 4,
//!     button_width: 16,
//!     button_height: 16,
//!     ..FrameLayout::default()
//! };
//! let geometry = calc_geometry(&layout, 14, FrameFlags::ALLOWS_DELETE, 300, 200);
//! assert_eq!(geometry.top_height, 16);
//! assert_eq!(geometry.close_rect.x, 308 - 16);
//! ```
//!
//! Painting never fails: expressions that cannot be evaluated are logged
//! with `log::warn!` and treated as zero, and pieces with no texture are
//! left undrawn.

pub mod canvas;
pub mod geometry;
pub mod log_init;
pub mod render;
pub mod testing;

pub use canvas::{LineStyle, Point, Rasterizer};
pub use geometry::{FrameFlags, FrameGeometry, Rect, calc_geometry};
pub use render::{FrameContext, draw_frame, draw_menu_icon, draw_op_list};
