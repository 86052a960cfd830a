//! Attribute value parsing.
//!
//! Numbers use plain decimal notation: an optional sign, digits, and for
//! doubles an optional fractional part. Leading whitespace is skipped;
//! anything left over after the number is an error.

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{opt, recognize},
    sequence::{pair, preceded, tuple},
};

use crate::error::{Result, ThemeError};

/// Largest value accepted where a non-negative integer is required.
pub const MAX_REASONABLE: i64 = 4096;

fn integer(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, recognize(pair(opt(one_of("+-")), digit1)))(input)
}

fn decimal(input: &str) -> IResult<&str, &str> {
    preceded(
        multispace0,
        recognize(pair(
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(tuple((char('.'), digit1))),
            )),
        )),
    )(input)
}

fn trailing(rest: &str, input: &str) -> ThemeError {
    ThemeError::markup(format!(
        "Did not understand trailing characters \"{rest}\" in string \"{input}\""
    ))
}

/// A non-negative integer no larger than [`MAX_REASONABLE`].
pub fn parse_positive_integer(input: &str) -> Result<i32> {
    let (rest, digits) = integer(input).map_err(|_| {
        ThemeError::markup(format!("Could not parse \"{input}\" as an integer"))
    })?;
    if !rest.is_empty() {
        return Err(trailing(rest, input));
    }

    let value = match digits.parse::<i64>() {
        Ok(v) => v,
        Err(_) if digits.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    };
    if value < 0 {
        return Err(ThemeError::markup(format!("Integer {value} must be positive")));
    }
    if value > MAX_REASONABLE {
        return Err(ThemeError::markup(format!(
            "Integer {value} is too large, current max is {MAX_REASONABLE}"
        )));
    }
    Ok(value as i32)
}

pub fn parse_double(input: &str) -> Result<f64> {
    let invalid =
        || ThemeError::markup(format!("Could not parse \"{input}\" as a floating point number"));
    let (rest, text) = decimal(input).map_err(|_| invalid())?;
    if !rest.is_empty() {
        return Err(trailing(rest, input));
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid()),
    }
}

pub fn parse_boolean(input: &str) -> Result<bool> {
    match input {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ThemeError::markup(format!(
            "Boolean values must be \"true\" or \"false\" not \"{input}\""
        ))),
    }
}

pub fn parse_angle(input: &str) -> Result<f64> {
    let value = parse_double(input)?;
    if !(0.0..=360.0).contains(&value) {
        return Err(ThemeError::markup(format!(
            "Angle must be between 0.0 and 360.0, was {value}"
        )));
    }
    Ok(value)
}

pub fn parse_alpha(input: &str) -> Result<f64> {
    let value = parse_double(input)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ThemeError::markup(format!(
            "Alpha must be between 0.0 (invisible) and 1.0 (fully opaque), was {value}"
        )));
    }
    Ok(value)
}

/// Title scale keywords and their factors.
pub const TITLE_SCALES: &[(&str, f64)] = &[
    ("xx-small", 1.0 / (1.2 * 1.2 * 1.2)),
    ("x-small", 1.0 / (1.2 * 1.2)),
    ("small", 1.0 / 1.2),
    ("medium", 1.0),
    ("large", 1.2),
    ("x-large", 1.2 * 1.2),
    ("xx-large", 1.2 * 1.2 * 1.2),
];

pub fn parse_title_scale(input: &str) -> Result<f64> {
    TITLE_SCALES
        .iter()
        .find(|(name, _)| *name == input)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| {
            ThemeError::markup(format!(
                "Invalid title scale \"{input}\" (must be one of xx-small,x-small,small,medium,large,x-large,xx-large)"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_integers() {
        assert_eq!(parse_positive_integer("0").unwrap(), 0);
        assert_eq!(parse_positive_integer(" 42").unwrap(), 42);
        assert_eq!(parse_positive_integer("4096").unwrap(), 4096);
    }

    #[test]
    fn positive_integer_errors() {
        assert_eq!(
            parse_positive_integer("-3").unwrap_err().to_string(),
            "Integer -3 must be positive"
        );
        assert_eq!(
            parse_positive_integer("4097").unwrap_err().to_string(),
            "Integer 4097 is too large, current max is 4096"
        );
        assert_eq!(
            parse_positive_integer("abc").unwrap_err().to_string(),
            "Could not parse \"abc\" as an integer"
        );
        assert_eq!(
            parse_positive_integer("12px").unwrap_err().to_string(),
            "Did not understand trailing characters \"px\" in string \"12px\""
        );
    }

    #[test]
    fn doubles_reject_exponents() {
        assert_eq!(parse_double("0.5").unwrap(), 0.5);
        assert_eq!(parse_double(".25").unwrap(), 0.25);
        assert_eq!(parse_double("3.").unwrap(), 3.0);
        assert!(parse_double("1e3").is_err());
        assert!(parse_double("").is_err());
    }

    #[test]
    fn booleans() {
        assert!(parse_boolean("true").unwrap());
        assert!(!parse_boolean("false").unwrap());
        assert!(parse_boolean("yes").is_err());
    }

    #[test]
    fn angle_and_alpha_ranges() {
        assert_eq!(parse_angle("360").unwrap(), 360.0);
        assert!(parse_angle("361").is_err());
        assert!(parse_angle("-1").is_err());
        assert_eq!(parse_alpha("1.0").unwrap(), 1.0);
        assert!(parse_alpha("1.1").is_err());
    }

    #[test]
    fn title_scale_keywords_only() {
        assert_eq!(parse_title_scale("medium").unwrap(), 1.0);
        assert_eq!(parse_title_scale("large").unwrap(), 1.2);
        assert!(parse_title_scale("1.5").is_err());
    }
}
