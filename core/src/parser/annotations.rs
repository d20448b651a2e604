//! # Description Annotations
//!
//! Peels trailing `key: value` annotations off a description and converts
//! each value into a typed primitive chosen by the key name.

use crate::config::{BooleanFallback, NumericCoercion, ParserOptions};
use crate::error::{ParseError, ParseResult};
use crate::model::{AnnotationValue, Annotations, Number};

/// The primitive an annotation value is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// `true` / `false`.
    Boolean,
    /// Integer or float.
    Number,
    /// Stored as written.
    Text,
}

/// Keys with a non-text primitive. Every other key is text.
const ANNOTATION_KINDS: &[(&str, AnnotationKind)] = &[
    ("exclusiveMinimum", AnnotationKind::Boolean),
    ("exclusiveMaximum", AnnotationKind::Boolean),
    ("uniqueItems", AnnotationKind::Boolean),
    ("minimum", AnnotationKind::Number),
    ("maximum", AnnotationKind::Number),
    ("multipleOf", AnnotationKind::Number),
    ("minItems", AnnotationKind::Number),
    ("maxItems", AnnotationKind::Number),
];

impl AnnotationKind {
    /// Looks up the kind for an annotation key (case-sensitive).
    pub fn of(key: &str) -> Self {
        ANNOTATION_KINDS
            .iter()
            .find(|(name, _)| *name == key)
            .map_or(AnnotationKind::Text, |(_, kind)| *kind)
    }

    fn type_name(&self) -> &'static str {
        match self {
            AnnotationKind::Boolean => "boolean",
            AnnotationKind::Number => "number",
            AnnotationKind::Text => "string",
        }
    }
}

/// Parses a numeric annotation value according to `policy`.
///
/// Returns `None` when neither a float nor an integer parse succeeds.
pub fn coerce_number(value: &str, policy: NumericCoercion) -> Option<Number> {
    // `nan` and `inf` parse as f64 but have no JSON representation.
    let as_float = || {
        value
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Number::Float)
    };
    let as_integer = || value.parse::<i64>().ok().map(Number::Integer);

    match policy {
        // A value with no dot at all takes the float branch too.
        NumericCoercion::FloatFirst => {
            if value.find('.') != Some(0) {
                if let Some(n) = as_float() {
                    return Some(n);
                }
            }
            as_integer()
        }
        NumericCoercion::IntegerFirst => {
            if value.contains('.') {
                as_float()
            } else {
                as_integer().or_else(as_float)
            }
        }
    }
}

fn coerce_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Converts a trimmed annotation value using the kind its key dispatches to.
///
/// Numbers that fail to parse are kept as text. Booleans that fail to parse
/// follow [`ParserOptions::boolean_fallback`].
pub fn coerce_value(key: &str, value: &str, options: &ParserOptions) -> ParseResult<AnnotationValue> {
    let kind = AnnotationKind::of(key);
    match kind {
        AnnotationKind::Text => Ok(AnnotationValue::Text(value.to_string())),
        AnnotationKind::Number => Ok(coerce_number(value, options.numeric_coercion)
            .map_or_else(|| AnnotationValue::Text(value.to_string()), AnnotationValue::Number)),
        AnnotationKind::Boolean => match (coerce_bool(value), options.boolean_fallback) {
            (Some(b), _) => Ok(AnnotationValue::Bool(b)),
            (None, BooleanFallback::Text) => Ok(AnnotationValue::Text(value.to_string())),
            (None, BooleanFallback::Fail) => Err(ParseError::TypeCoercion {
                key: key.to_string(),
                value: value.to_string(),
                expected: kind.type_name(),
            }),
        },
    }
}

/// Splits a description into its text and trailing annotations.
///
/// Works right to left: the last `:` separates a value, and the word right
/// before it (back to the previous space or newline) is the key. Repeats
/// until no `:` is left. The returned text is not trimmed.
///
/// # Examples
/// ```
/// use paramdoc_core::config::ParserOptions;
/// use paramdoc_core::parser::annotations::extract_annotations;
///
/// let (text, annotations) =
///     extract_annotations("Page size maxItems: 50", &ParserOptions::default()).unwrap();
/// assert_eq!(text, "Page size");
/// assert_eq!(annotations["maxItems"].as_f64(), Some(50.0));
/// ```
pub fn extract_annotations(
    description: &str,
    options: &ParserOptions,
) -> ParseResult<(String, Annotations)> {
    let mut annotations = Annotations::new();
    let mut remaining = description;

    while let Some(colon) = remaining.rfind(':') {
        let (left, value) = (&remaining[..colon], &remaining[colon + 1..]);
        let (rest, key) = match left.rfind(|c: char| c == ' ' || c == '\n') {
            Some(boundary) => (&left[..boundary], &left[boundary + 1..]),
            None => ("", left),
        };
        let typed = coerce_value(key, value.trim(), options)?;
        annotations.insert(key.to_string(), typed);
        remaining = rest;
    }

    Ok((remaining.to_string(), annotations))
}
