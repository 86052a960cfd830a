//! Color specifications as written in theme files.
//!
//! - `#rrggbb` or a color name: a literal color
//! - `gtk:bg[NORMAL]`: a component of the toolkit style in a widget state
//! - `blend/bg/fg/alpha`: `bg` blended toward `fg` by `alpha`
//!
//! Specs are resolved against a [`StylePalette`] at paint time.

use nom::{
    IResult,
    bytes::complete::take_while,
    character::complete::char,
    sequence::pair,
};

use crate::error::{Result, ThemeError};
use crate::macros::named_enum;
use crate::parser::values::parse_double;
use crate::types::color::RgbaColor;

named_enum! {
    /// Widget state, as used by the toolkit palette and primitives.
    pub enum GtkState {
        Normal => "normal",
        Prelight => "prelight",
        Active => "active",
        Selected => "selected",
        Insensitive => "insensitive",
    }
}

named_enum! {
    /// Component of the toolkit style.
    pub enum GtkColorComponent {
        Fg => "fg",
        Bg => "bg",
        Light => "light",
        Dark => "dark",
        Mid => "mid",
        Text => "text",
        Base => "base",
        TextAa => "text_aa",
    }
}

/// The toolkit style colors a theme may refer to.
pub trait StylePalette {
    fn color(&self, component: GtkColorComponent, state: GtkState) -> RgbaColor;
}

/// A fixed palette used when no toolkit style is available.
#[derive(Clone, Debug)]
pub struct DefaultPalette {
    pub fg: [RgbaColor; GtkState::COUNT],
    pub bg: [RgbaColor; GtkState::COUNT],
    pub text: [RgbaColor; GtkState::COUNT],
    pub base: [RgbaColor; GtkState::COUNT],
}

impl Default for DefaultPalette {
    fn default() -> Self {
        let gray = RgbaColor::rgb(0xdc, 0xda, 0xd5);
        let selected = RgbaColor::rgb(0x4b, 0x69, 0x83);
        Self {
            fg: [
                RgbaColor::black(),
                RgbaColor::black(),
                RgbaColor::black(),
                RgbaColor::white(),
                RgbaColor::rgb(0x75, 0x75, 0x75),
            ],
            bg: [
                gray,
                RgbaColor::rgb(0xee, 0xeb, 0xe7),
                RgbaColor::rgb(0xc7, 0xc4, 0xbd),
                selected,
                gray,
            ],
            text: [
                RgbaColor::black(),
                RgbaColor::black(),
                RgbaColor::white(),
                RgbaColor::white(),
                RgbaColor::rgb(0x75, 0x75, 0x75),
            ],
            base: [
                RgbaColor::white(),
                gray,
                RgbaColor::rgb(0x7c, 0x96, 0xab),
                selected,
                gray,
            ],
        }
    }
}

fn shade(color: RgbaColor, factor: f64) -> RgbaColor {
    let scale = |c: u8| ((c as f64) * factor).round().clamp(0.0, 255.0) as u8;
    RgbaColor::rgb(scale(color.r), scale(color.g), scale(color.b))
}

impl StylePalette for DefaultPalette {
    fn color(&self, component: GtkColorComponent, state: GtkState) -> RgbaColor {
        let i = state.index();
        match component {
            GtkColorComponent::Fg => self.fg[i],
            GtkColorComponent::Bg => self.bg[i],
            GtkColorComponent::Text => self.text[i],
            GtkColorComponent::Base => self.base[i],
            GtkColorComponent::Light => shade(self.bg[i], 1.3),
            GtkColorComponent::Dark => shade(self.bg[i], 0.7),
            GtkColorComponent::Mid => shade(self.bg[i], 1.3).lerp(&shade(self.bg[i], 0.7), 0.5),
            GtkColorComponent::TextAa => self.text[i].lerp(&self.base[i], 0.5),
        }
    }
}

/// How to obtain a color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSpec {
    Basic(RgbaColor),
    Gtk {
        component: GtkColorComponent,
        state: GtkState,
    },
    Blend {
        background: Box<ColorSpec>,
        foreground: Box<ColorSpec>,
        alpha: f64,
    },
}

impl ColorSpec {
    /// Parse a color spec string.
    ///
    /// ```
    /// use mtheme::types::{ColorSpec, GtkColorComponent, GtkState};
    ///
    /// let spec = ColorSpec::parse("gtk:bg[SELECTED]").unwrap();
    /// assert_eq!(
    ///     spec,
    ///     ColorSpec::Gtk { component: GtkColorComponent::Bg, state: GtkState::Selected }
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if let Some(rest) = input.strip_prefix("gtk:") {
            return parse_gtk(rest, input);
        }
        if let Some(rest) = input.strip_prefix("blend/") {
            return parse_blend(rest, input);
        }
        RgbaColor::parse(input)
            .map(ColorSpec::Basic)
            .map_err(|_| ThemeError::markup(format!("Could not parse color \"{input}\"")))
    }

    /// Resolve to a concrete color.
    pub fn render(&self, palette: &dyn StylePalette) -> RgbaColor {
        match self {
            ColorSpec::Basic(color) => *color,
            ColorSpec::Gtk { component, state } => palette.color(*component, *state),
            ColorSpec::Blend {
                background,
                foreground,
                alpha,
            } => {
                let bg = background.render(palette);
                let fg = foreground.render(palette);
                bg.lerp(&fg, *alpha)
            }
        }
    }
}

fn parse_gtk(rest: &str, full: &str) -> Result<ColorSpec> {
    let open: IResult<&str, (&str, char)> = pair(take_while(|c: char| c != '['), char('['))(rest);
    let (after_open, (component, _)) = open.map_err(|_| {
        ThemeError::markup(format!(
            "GTK color specification must have the state in brackets, e.g. gtk:fg[NORMAL] where NORMAL is the state; could not parse \"{full}\""
        ))
    })?;

    let close: IResult<&str, (&str, char)> =
        pair(take_while(|c: char| c != ']'), char(']'))(after_open);
    let (_, (state, _)) = close.map_err(|_| {
        ThemeError::markup(format!(
            "GTK color specification must have a close bracket after the state, e.g. gtk:fg[NORMAL] where NORMAL is the state; could not parse \"{full}\""
        ))
    })?;

    let state = GtkState::from_name(&state.to_ascii_lowercase()).ok_or_else(|| {
        ThemeError::semantic(format!(
            "Did not understand state \"{state}\" in color specification"
        ))
    })?;
    let component = GtkColorComponent::from_name(component).ok_or_else(|| {
        ThemeError::semantic(format!(
            "Did not understand color component \"{component}\" in color specification"
        ))
    })?;
    Ok(ColorSpec::Gtk { component, state })
}

fn parse_blend(rest: &str, full: &str) -> Result<ColorSpec> {
    let parts: Vec<&str> = rest.split('/').collect();
    let [bg, fg, alpha] = parts.as_slice() else {
        return Err(ThemeError::markup(format!(
            "Blend format is \"blend/bg_color/fg_color/alpha\", \"{full}\" does not fit the format"
        )));
    };

    let alpha_value = parse_double(alpha).map_err(|_| {
        ThemeError::markup(format!(
            "Could not parse alpha value \"{alpha}\" in blended color"
        ))
    })?;
    if !(0.0..=1.0).contains(&alpha_value) {
        return Err(ThemeError::markup(format!(
            "Alpha value \"{alpha}\" in blended color is not between 0.0 and 1.0"
        )));
    }

    Ok(ColorSpec::Blend {
        background: Box::new(ColorSpec::parse(bg)?),
        foreground: Box::new(ColorSpec::parse(fg)?),
        alpha: alpha_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn basic_color() {
        assert_eq!(
            ColorSpec::parse("#000080").unwrap(),
            ColorSpec::Basic(RgbaColor::rgb(0, 0, 128))
        );
    }

    #[test]
    fn gtk_component_and_state() {
        let spec = ColorSpec::parse("gtk:text_aa[insensitive]").unwrap();
        assert_eq!(
            spec,
            ColorSpec::Gtk {
                component: GtkColorComponent::TextAa,
                state: GtkState::Insensitive
            }
        );
    }

    #[test]
    fn gtk_errors() {
        assert!(ColorSpec::parse("gtk:fg").unwrap_err().to_string().contains("in brackets"));
        assert!(ColorSpec::parse("gtk:fg[NORMAL").unwrap_err().to_string().contains("close bracket"));
        assert_eq!(
            ColorSpec::parse("gtk:fg[HOVER]").unwrap_err().kind(),
            ErrorKind::Semantic
        );
        assert_eq!(
            ColorSpec::parse("gtk:shine[NORMAL]").unwrap_err().to_string(),
            "Did not understand color component \"shine\" in color specification"
        );
    }

    #[test]
    fn blend_renders_between_operands() {
        let spec = ColorSpec::parse("blend/#000000/#ffffff/0.5").unwrap();
        let color = spec.render(&DefaultPalette::default());
        assert_eq!(color, RgbaColor::rgb(128, 128, 128));
    }

    #[test]
    fn blend_nests_gtk_colors() {
        let spec = ColorSpec::parse("blend/gtk:bg[NORMAL]/gtk:fg[NORMAL]/0.0").unwrap();
        let palette = DefaultPalette::default();
        assert_eq!(spec.render(&palette), palette.bg[0]);
    }

    #[test]
    fn blend_errors() {
        assert!(ColorSpec::parse("blend/red/blue").is_err());
        assert!(ColorSpec::parse("blend/red/blue/1.5").unwrap_err().to_string().contains("not between"));
        assert!(ColorSpec::parse("blend/red/blue/x").unwrap_err().to_string().contains("Could not parse alpha"));
    }

    #[test]
    fn unknown_literal() {
        assert_eq!(
            ColorSpec::parse("chartreuse-ish").unwrap_err().to_string(),
            "Could not parse color \"chartreuse-ish\""
        );
    }
}
