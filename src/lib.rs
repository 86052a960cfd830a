//! # metatheme - Window-frame theme engine
//!
//! Loads `metacity-theme-1.xml` themes and paints window frames with them.
//!
//! - [`posexpr`]: the coordinate expression language
//! - [`mtheme`]: the theme object model and loader
//! - [`framedraw`]: frame geometry and rendering
//!
//! This crate ties them together for previewing a theme:
//!
//! ```no_run
//! use metatheme::{preview, load_theme_file};
//! use metatheme::framedraw::FrameFlags;
//! use metatheme::mtheme::FrameType;
//!
//! let theme = load_theme_file("themes/Crux/metacity-theme-1.xml".as_ref())?;
//! let flags = FrameFlags::ALLOWS_DELETE | FrameFlags::HAS_FOCUS;
//! let frame = preview(&theme, FrameType::Normal, flags, 400, 300, "Terminal")?;
//! println!("{}", frame.canvas.to_snapshot());
//! # Ok::<(), metatheme::MetathemeError>(())
//! ```

pub mod error;

use std::path::Path;

pub use error::{MetathemeError, Result};
pub use framedraw;
pub use mtheme;
pub use posexpr;

use framedraw::testing::RecordingCanvas;
use framedraw::{FrameContext, FrameFlags, FrameGeometry, calc_geometry, draw_frame};
use mtheme::{FrameFocus, FrameResize, FrameState, FrameType, LoadOptions, Theme};

/// Title text height at a `title_scale` of 1.0. Real font metrics belong
/// to the toolkit.
pub const DEFAULT_TEXT_HEIGHT: i32 = 14;

/// Load a theme file directly. The theme is named after its directory and
/// images resolve relative to it.
pub fn load_theme_file(path: &Path) -> Result<Theme> {
    let text = std::fs::read_to_string(path).map_err(|source| MetathemeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    log::debug!("Loading theme \"{name}\" from {}", path.display());
    let options = LoadOptions::new(name).with_base_dir(dir);
    Ok(mtheme::parse_theme(&text, &options)?)
}

/// A frame laid out and painted onto a recording canvas.
pub struct Preview {
    pub geometry: FrameGeometry,
    pub canvas: RecordingCanvas,
}

/// The style-set slot a frame with these flags uses.
pub fn frame_state(flags: FrameFlags) -> (FrameState, FrameFocus) {
    let maximized = flags.contains(FrameFlags::MAXIMIZED);
    let shaded = flags.contains(FrameFlags::SHADED);
    let state = match (maximized, shaded) {
        (true, true) => FrameState::MaximizedAndShaded,
        (true, false) => FrameState::Maximized,
        (false, true) => FrameState::Shaded,
        (false, false) => FrameState::Normal,
    };
    let focus = if flags.contains(FrameFlags::HAS_FOCUS) {
        FrameFocus::Yes
    } else {
        FrameFocus::No
    };
    (state, focus)
}

/// Lay out and paint a resizable frame of the given window type.
pub fn preview(
    theme: &Theme,
    kind: FrameType,
    flags: FrameFlags,
    client_width: i32,
    client_height: i32,
    title: &str,
) -> Result<Preview> {
    let (state, focus) = frame_state(flags);
    let style = theme
        .frame_style(kind, state, FrameResize::Both, focus)
        .ok_or(MetathemeError::NoStyle { kind, flags })?;
    let layout = theme.layout(theme.style(style).layout);

    let text_height = (DEFAULT_TEXT_HEIGHT as f64 * layout.title_scale).round() as i32;
    let geometry = calc_geometry(layout, text_height, flags, client_width, client_height);

    let ctx = FrameContext::new(title, text_height);
    let mut canvas = RecordingCanvas::new();
    draw_frame(theme, style, &geometry, &ctx, &mut canvas);

    Ok(Preview { geometry, canvas })
}
