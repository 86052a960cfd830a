//! Theme document loading.
//!
//! The markup is tokenized by `quick-xml`; [`ThemeParser`] consumes the
//! element-start, element-end and text events and builds a [`Theme`]
//! with a stack of parse states mirroring the element nesting.
//!
//! - [`parse_theme`]: parse an in-memory theme document
//! - [`load_theme`]: find a theme on the search path and parse it
//!
//! ## Submodules
//!
//! - [`values`]: attribute value parsing (integers, angles, alpha, ...)
//! - `attrs`: required/optional attribute matching
//! - `toplevel`: `<info>`, `<constant>`, `<frame_geometry>`, `<window>`,
//!   `<menu_icon>`
//! - `styles`: `<frame_style>` and `<frame_style_set>`
//! - `draw_ops`: `<draw_ops>` and the draw operations inside it
//!
//! ## Example
//!
//! ```rust
//! use mtheme::{parse_theme, LoadOptions};
//!
//! let err = parse_theme("<theme/>", &LoadOptions::new("demo")).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Line 1 character 1: Outermost element in theme must be <metacity_theme> not <theme>"
//! );
//! ```

mod attrs;
mod draw_ops;
mod styles;
mod toplevel;
pub mod values;

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, ThemeError};
use crate::options::LoadOptions;
use crate::types::{
    ButtonState, ButtonType, DrawOpListId, FramePiece, GradientSpec, GtkState, LayoutId,
    MenuIconType, Pixbuf, RectExpr, StyleId, StyleSetId, TextureSpec, Theme,
};

/// Where the parser is in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ParseState {
    Start,
    Theme,
    Info,
    InfoField,
    Constant,
    FrameGeometry,
    Distance,
    Border,
    DrawOps,
    DrawOp,
    Gradient,
    Color,
    FrameStyle,
    Piece,
    Button,
    MenuIcon,
    FrameStyleSet,
    Frame,
    Window,
}

#[derive(Debug)]
struct OpenElement {
    state: ParseState,
    name: String,
}

/// A `<gradient>` op whose `<color>` stops are still being read.
#[derive(Debug)]
pub(crate) struct PendingGradient {
    pub spec: GradientSpec,
    pub rect: RectExpr,
    pub alpha: f64,
}

/// Builds a [`Theme`] from markup events.
pub(crate) struct ThemeParser<'o> {
    options: &'o LoadOptions,
    theme: Theme,
    saw_root: bool,
    stack: Vec<OpenElement>,
    layout: Option<LayoutId>,
    /// The list draw ops are appended to, or the list a piece, button or
    /// menu icon will use.
    op_list: Option<DrawOpListId>,
    gradient: Option<PendingGradient>,
    style: Option<StyleId>,
    style_set: Option<StyleSetId>,
    piece: Option<FramePiece>,
    button: Option<(ButtonType, ButtonState)>,
    menu_icon: Option<(MenuIconType, GtkState)>,
    text: String,
    images: HashMap<PathBuf, Rc<Pixbuf>>,
}

impl<'o> ThemeParser<'o> {
    pub(crate) fn new(options: &'o LoadOptions) -> Self {
        Self {
            options,
            theme: Theme::new(options.theme_name.clone()),
            saw_root: false,
            stack: vec![OpenElement {
                state: ParseState::Start,
                name: String::new(),
            }],
            layout: None,
            op_list: None,
            gradient: None,
            style: None,
            style_set: None,
            piece: None,
            button: None,
            menu_icon: None,
            text: String::new(),
            images: HashMap::new(),
        }
    }

    fn state(&self) -> ParseState {
        self.stack.last().map_or(ParseState::Start, |open| open.state)
    }

    fn parent_state(&self) -> ParseState {
        self.stack
            .len()
            .checked_sub(2)
            .map_or(ParseState::Start, |i| self.stack[i].state)
    }

    fn current_element(&self) -> &str {
        self.stack.last().map_or("", |open| open.name.as_str())
    }

    fn push(&mut self, state: ParseState, name: &str) {
        self.stack.push(OpenElement {
            state,
            name: name.to_string(),
        });
    }

    fn not_allowed_below(&self, name: &str) -> ThemeError {
        ThemeError::markup(format!(
            "Element <{name}> is not allowed below <{}>",
            self.current_element()
        ))
    }

    /// The list ops are currently appended to.
    fn current_list(&self) -> Result<DrawOpListId> {
        self.op_list
            .ok_or_else(|| ThemeError::markup("Draw operation outside of a <draw_ops> element"))
    }

    pub(crate) fn start_element(&mut self, name: &str, attrs: &attrs::Attributes) -> Result<()> {
        match self.state() {
            ParseState::Start => self.start_root(name, attrs),
            ParseState::Theme => self.start_theme_child(name, attrs),
            ParseState::Info => self.start_info_child(name, attrs),
            ParseState::FrameGeometry => self.start_geometry_child(name, attrs),
            ParseState::DrawOps => self.start_draw_op(name, attrs),
            ParseState::Gradient => self.start_gradient_child(name, attrs),
            ParseState::FrameStyle => self.start_style_child(name, attrs),
            ParseState::Piece | ParseState::Button | ParseState::MenuIcon => {
                self.start_inline_draw_ops(name, attrs)
            }
            ParseState::FrameStyleSet => self.start_style_set_child(name, attrs),
            ParseState::InfoField => Err(ThemeError::markup(format!(
                "Element <{name}> is not allowed inside a name/author/date/description element"
            ))),
            ParseState::Constant => Err(ThemeError::markup(format!(
                "Element <{name}> is not allowed inside a <constant> element"
            ))),
            ParseState::Distance | ParseState::Border => Err(ThemeError::markup(format!(
                "Element <{name}> is not allowed inside a distance/border element"
            ))),
            ParseState::DrawOp | ParseState::Color => Err(ThemeError::markup(format!(
                "Element <{name}> is not allowed inside a draw operation element"
            ))),
            ParseState::Frame | ParseState::Window => Err(ThemeError::markup(format!(
                "Element <{name}> is not allowed inside a <{}> element",
                self.current_element()
            ))),
        }
    }

    fn start_root(&mut self, name: &str, attrs: &attrs::Attributes) -> Result<()> {
        if name != "metacity_theme" {
            return Err(ThemeError::markup(format!(
                "Outermost element in theme must be <metacity_theme> not <{name}>"
            )));
        }
        if self.saw_root {
            return Err(ThemeError::markup(
                "Theme contains more than one <metacity_theme> element",
            ));
        }
        attrs::no_attributes(name, attrs)?;
        self.saw_root = true;
        self.push(ParseState::Theme, name);
        Ok(())
    }

    pub(crate) fn end_element(&mut self) -> Result<()> {
        let Some(open) = self.stack.pop() else {
            return Ok(());
        };
        match open.state {
            ParseState::Theme => {
                self.theme.validate()?;
                log::debug!("Finished parsing theme \"{}\"", self.theme.name);
            }
            ParseState::InfoField => {
                let text = std::mem::take(&mut self.text);
                self.theme.info.set(&open.name, &text)?;
            }
            ParseState::FrameGeometry => {
                if let Some(id) = self.layout.take() {
                    self.theme.layout(id).validate()?;
                }
            }
            ParseState::DrawOps => self.end_draw_ops()?,
            ParseState::Gradient => self.end_gradient()?,
            ParseState::FrameStyle => {
                if let Some(id) = self.style.take() {
                    self.theme.validate_style(id)?;
                }
            }
            ParseState::Piece => {
                let list = self
                    .op_list
                    .take()
                    .ok_or_else(|| ThemeError::markup("No draw_ops provided for frame piece"))?;
                if let (Some(style), Some(piece)) = (self.style, self.piece.take()) {
                    self.theme
                        .style_mut(style)
                        .set_piece(piece, TextureSpec::ShapeList(list))?;
                }
            }
            ParseState::Button => {
                let list = self
                    .op_list
                    .take()
                    .ok_or_else(|| ThemeError::markup("No draw_ops provided for button"))?;
                if let (Some(style), Some((button, state))) = (self.style, self.button.take()) {
                    self.theme
                        .style_mut(style)
                        .set_button(button, state, TextureSpec::ShapeList(list))?;
                }
            }
            ParseState::MenuIcon => {
                let list = self
                    .op_list
                    .take()
                    .ok_or_else(|| ThemeError::markup("No draw_ops provided for menu icon"))?;
                if let Some((kind, state)) = self.menu_icon.take() {
                    self.theme.set_menu_icon(kind, state, list)?;
                }
            }
            ParseState::FrameStyleSet => {
                if let Some(id) = self.style_set.take() {
                    self.theme.validate_style_set(id)?;
                }
            }
            ParseState::Start
            | ParseState::Info
            | ParseState::Constant
            | ParseState::Distance
            | ParseState::Border
            | ParseState::DrawOp
            | ParseState::Color
            | ParseState::Frame
            | ParseState::Window => {}
        }
        Ok(())
    }

    pub(crate) fn text(&mut self, text: &str) -> Result<()> {
        if self.state() == ParseState::InfoField {
            self.text.push_str(text);
            return Ok(());
        }
        if text.chars().all(char::is_whitespace) {
            return Ok(());
        }
        match self.state() {
            ParseState::Start => Err(ThemeError::markup(
                "No text is allowed outside the <metacity_theme> element",
            )),
            _ => Err(ThemeError::markup(format!(
                "No text is allowed inside element <{}>",
                self.current_element()
            ))),
        }
    }

    pub(crate) fn finish(self, file_name: &str) -> Result<Theme> {
        if !self.saw_root {
            return Err(ThemeError::NoRootElement(file_name.to_string()));
        }
        if self.state() != ParseState::Start {
            return Err(ThemeError::markup(format!(
                "Document ended unexpectedly while element <{}> was open",
                self.current_element()
            )));
        }
        Ok(self.theme)
    }
}

/// 1-based line and character of a byte offset.
fn position(text: &str, offset: usize) -> (usize, usize) {
    let before = text.get(..offset).unwrap_or(text);
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}

fn element_name(e: &BytesStart<'_>) -> Result<String> {
    std::str::from_utf8(e.name().as_ref())
        .map(str::to_string)
        .map_err(|err| ThemeError::markup(err.to_string()))
}

fn element_attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    e.attributes()
        .with_checks(false)
        .map(|attr| {
            let attr = attr.map_err(|err| ThemeError::markup(err.to_string()))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|err| ThemeError::markup(err.to_string()))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| ThemeError::markup(err.to_string()))?
                .into_owned();
            Ok((key, value))
        })
        .collect()
}

fn open_element(parser: &mut ThemeParser<'_>, e: &BytesStart<'_>) -> Result<()> {
    let name = element_name(e)?;
    let attrs = element_attributes(e)?;
    parser.start_element(&name, &attrs)
}

/// Parse a theme document held in memory.
///
/// The first error stops the load; errors found while reading the
/// document carry the line and character where it happened.
pub fn parse_theme(text: &str, options: &LoadOptions) -> Result<Theme> {
    let mut parser = ThemeParser::new(options);
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    loop {
        let offset = reader.buffer_position() as usize;
        let located = |err: ThemeError| {
            let (line, column) = position(text, offset);
            err.at(line, column)
        };

        let event = reader
            .read_event()
            .map_err(|err| located(ThemeError::markup(err.to_string())))?;
        let result = match event {
            Event::Start(e) => open_element(&mut parser, &e),
            Event::Empty(e) => {
                open_element(&mut parser, &e).and_then(|()| parser.end_element())
            }
            Event::End(_) => parser.end_element(),
            Event::Text(t) => t
                .unescape()
                .map_err(|err| ThemeError::markup(err.to_string()))
                .and_then(|text| parser.text(&text)),
            Event::CData(t) => parser.text(&String::from_utf8_lossy(&t.into_inner())),
            Event::Eof => break,
            _ => Ok(()),
        };
        result.map_err(located)?;
    }

    parser.finish(&options.file_name)
}

/// Find `options.theme_name` on the search path and parse it.
///
/// Directories are tried in order; a directory whose theme file cannot be
/// read is skipped. Image file names resolve against the directory the
/// theme was found in.
pub fn load_theme(options: &LoadOptions) -> Result<Theme> {
    let mut last_error = None;
    for dir in &options.search_dirs {
        let path = dir.join(&options.file_name);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                log::debug!("Parsing theme file {}", path.display());
                let options = options.clone().with_base_dir(dir.clone());
                return parse_theme(&text, &options);
            }
            Err(err) => {
                log::debug!("Failed to read theme from file {}: {}", path.display(), err);
                last_error = Some(err);
            }
        }
    }
    Err(last_error
        .map(ThemeError::Io)
        .unwrap_or_else(|| {
            ThemeError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("No search directories for theme \"{}\"", options.theme_name),
            ))
        }))
}
