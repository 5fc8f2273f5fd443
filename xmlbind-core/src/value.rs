//! Scalar values stored in attributes and element text.
//!
//! Every scalar has a zero default that stands in for absent or unparsable
//! source data, and a textual form that parses back to the same value.

/// A value that can live in an XML attribute or in element text.
pub trait XmlScalar: Sized + Default {
    /// Parses the textual form, returning `None` if it is not a valid value.
    fn parse_xml(raw: &str) -> Option<Self>;

    /// Formats the value in its shortest round-trip textual form.
    fn to_xml(&self) -> String;
}

macro_rules! impl_numeric_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl XmlScalar for $ty {
                #[inline]
                fn parse_xml(raw: &str) -> Option<Self> {
                    raw.trim().parse().ok()
                }

                #[inline]
                fn to_xml(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl XmlScalar for bool {
    fn parse_xml(raw: &str) -> Option<Self> {
        match raw.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl XmlScalar for String {
    #[inline]
    fn parse_xml(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    #[inline]
    fn to_xml(&self) -> String {
        self.clone()
    }
}

/// Parses a scalar, falling back to its zero default.
#[must_use]
pub fn parse_or_default<T: XmlScalar>(raw: Option<&str>) -> T {
    raw.and_then(T::parse_xml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_parse() {
        assert_eq!(i32::parse_xml("5"), Some(5));
        assert_eq!(i32::parse_xml(" -12 "), Some(-12));
        assert_eq!(i32::parse_xml("abc"), None);
        assert_eq!(i32::parse_xml(""), None);
    }

    #[test]
    fn test_float_round_trip() {
        for value in [1.5f32, 0.1, -3.25e-7, 123456.79, 0.0] {
            let text = value.to_xml();
            assert_eq!(f32::parse_xml(&text), Some(value), "round trip of {text}");
        }
        assert_eq!(1.0f32.to_xml(), "1");
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(
            String::parse_xml("  spaced  "),
            Some("  spaced  ".to_string())
        );
    }

    #[test]
    fn test_bool_parse() {
        assert_eq!(bool::parse_xml("1"), Some(true));
        assert_eq!(bool::parse_xml("false"), Some(false));
        assert_eq!(bool::parse_xml("yes"), None);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default::<i32>(None), 0);
        assert_eq!(parse_or_default::<f32>(Some("oops")), 0.0);
        assert_eq!(parse_or_default::<String>(None), "");
        assert_eq!(parse_or_default::<i64>(Some("9")), 9);
    }
}
