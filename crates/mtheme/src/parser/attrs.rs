//! Attribute lookup for theme elements.

use crate::error::{Result, ThemeError};

/// Attributes of one element, unescaped, in document order.
pub(crate) type Attributes = [(String, String)];

/// Match `attrs` against the attributes an element accepts.
///
/// Returns the values of the `required` attributes in order, and the
/// values of the `optional` ones where present. A repeated attribute, an
/// attribute in neither list and a missing required attribute are errors.
pub(crate) fn locate<'a, const R: usize, const O: usize>(
    element: &str,
    attrs: &'a Attributes,
    required: [&str; R],
    optional: [&str; O],
) -> Result<([&'a str; R], [Option<&'a str>; O])> {
    let mut found_required: [Option<&'a str>; R] = [None; R];
    let mut found_optional: [Option<&'a str>; O] = [None; O];

    for (i, (key, value)) in attrs.iter().enumerate() {
        if attrs[..i].iter().any(|(seen, _)| seen == key) {
            return Err(ThemeError::markup(format!(
                "Attribute \"{key}\" repeated twice on the same <{element}> element"
            )));
        }
        if let Some(pos) = required.iter().position(|name| name == key) {
            found_required[pos] = Some(value.as_str());
        } else if let Some(pos) = optional.iter().position(|name| name == key) {
            found_optional[pos] = Some(value.as_str());
        } else {
            return Err(ThemeError::markup(format!(
                "Attribute \"{key}\" is invalid on <{element}> element in this context"
            )));
        }
    }

    let mut values = [""; R];
    for (i, name) in required.iter().enumerate() {
        values[i] = found_required[i].ok_or_else(|| {
            ThemeError::markup(format!("No \"{name}\" attribute on element <{element}>"))
        })?;
    }
    Ok((values, found_optional))
}

/// Reject any attribute on an element that takes none.
pub(crate) fn no_attributes(element: &str, attrs: &Attributes) -> Result<()> {
    locate(element, attrs, [], []).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn required_and_optional() {
        let a = attrs(&[("parent", "p"), ("name", "n")]);
        let ([name], [parent, has_title]) =
            locate("frame_geometry", &a, ["name"], ["parent", "has_title"]).unwrap();
        assert_eq!(name, "n");
        assert_eq!(parent, Some("p"));
        assert_eq!(has_title, None);
    }

    #[test]
    fn errors() {
        let a = attrs(&[("name", "a"), ("name", "b")]);
        assert_eq!(
            locate("draw_ops", &a, ["name"], []).unwrap_err().to_string(),
            "Attribute \"name\" repeated twice on the same <draw_ops> element"
        );

        let a = attrs(&[("colour", "red")]);
        assert_eq!(
            locate("line", &a, [], ["color"]).unwrap_err().to_string(),
            "Attribute \"colour\" is invalid on <line> element in this context"
        );

        let a = attrs(&[("x1", "0")]);
        assert_eq!(
            locate("line", &a, ["x1", "color"], []).unwrap_err().to_string(),
            "No \"color\" attribute on element <line>"
        );

        assert!(no_attributes("info", &attrs(&[("x", "1")])).is_err());
    }
}
