//! # Data Models
//!
//! Intermediate Representation (IR) produced by the section handlers.
//!
//! A [`Spec`] collects every [`Param`] parsed from the documentation of a
//! single operation. Records are grouped into buckets by [`ParamCategory`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of documentation section a buffer was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Positional path parameters.
    Path,
    /// Query string parameters.
    Query,
    /// The request body.
    Body,
    /// Cookie parameters.
    Cookie,
    /// Request headers.
    Header,
    /// A response declaration (keyed by status code).
    Response,
    /// Object properties.
    Properties,
    /// Error responses (`code -- description`).
    Errors,
}

impl SectionKind {
    /// Every section kind, in documentation order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Path,
        SectionKind::Query,
        SectionKind::Body,
        SectionKind::Cookie,
        SectionKind::Header,
        SectionKind::Response,
        SectionKind::Properties,
        SectionKind::Errors,
    ];

    /// Lowercase name as written in documentation headings.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Path => "path",
            SectionKind::Query => "query",
            SectionKind::Body => "body",
            SectionKind::Cookie => "cookie",
            SectionKind::Header => "header",
            SectionKind::Response => "response",
            SectionKind::Properties => "properties",
            SectionKind::Errors => "errors",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| format!("unknown section kind: `{}`", s))
    }
}

/// Category of a parameter record. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamCategory {
    /// `{id}` style URL segment.
    Path,
    /// `?key=value` parameter.
    Query,
    /// Request payload.
    Body,
    /// HTTP request header.
    Header,
    /// Cookie value.
    Cookie,
    /// Object property.
    Property,
    /// Response (success or error), keyed by status code.
    Response,
}

impl fmt::Display for ParamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamCategory::Path => "path",
            ParamCategory::Query => "query",
            ParamCategory::Body => "body",
            ParamCategory::Header => "header",
            ParamCategory::Cookie => "cookie",
            ParamCategory::Property => "property",
            ParamCategory::Response => "response",
        };
        f.write_str(name)
    }
}

/// A numeric annotation value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
}

impl Number {
    /// Returns the value widened to `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// Typed value of an annotation extracted from a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    /// `true` / `false`.
    Bool(bool),
    /// Integer or float.
    Number(Number),
    /// Anything else, stored verbatim.
    Text(String),
}

impl AnnotationValue {
    /// Numeric view of the value, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AnnotationValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// Boolean view of the value, if it is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String view of the value, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for AnnotationValue {
    fn from(b: bool) -> Self {
        AnnotationValue::Bool(b)
    }
}

impl From<i64> for AnnotationValue {
    fn from(i: i64) -> Self {
        AnnotationValue::Number(Number::Integer(i))
    }
}

impl From<f64> for AnnotationValue {
    fn from(f: f64) -> Self {
        AnnotationValue::Number(Number::Float(f))
    }
}

impl From<&str> for AnnotationValue {
    fn from(s: &str) -> Self {
        AnnotationValue::Text(s.to_string())
    }
}

/// Annotations keyed by name, in extraction order.
pub type Annotations = IndexMap<String, AnnotationValue>;

/// The atomic record every section handler produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name, or the status code for responses.
    pub name: String,
    /// Declared type token (e.g. "integer"). `None` for error lines.
    pub dtype: Option<String>,
    /// The category; always matches the bucket the record lives in.
    pub category: ParamCategory,
    /// Free text with trailing annotations removed.
    pub description: String,
    /// Meaning depends on the category.
    pub required: bool,
    /// 1-based declaration position. Only set for path parameters.
    pub order: Option<usize>,
    /// Typed `key: value` pairs peeled off the description.
    pub annotations: Annotations,
}

impl Param {
    /// Creates a record with the default type (`string`) and no description.
    pub fn new(name: impl Into<String>, category: ParamCategory) -> Self {
        Self {
            name: name.into(),
            dtype: Some(DEFAULT_DTYPE.to_string()),
            category,
            description: String::new(),
            required: false,
            order: None,
            annotations: Annotations::new(),
        }
    }
}

/// Type assumed when a line declares none.
pub const DEFAULT_DTYPE: &str = "string";

/// Status code assumed when a response section names none.
pub const DEFAULT_STATUS_CODE: &str = "200";

/// Aggregate of every record parsed for one documented operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    /// Path parameters; ordering is carried by [`Param::order`].
    pub path_params: IndexMap<String, Param>,
    /// Query parameters.
    pub query_params: IndexMap<String, Param>,
    /// Cookie parameters.
    pub cookie_params: IndexMap<String, Param>,
    /// Header parameters.
    pub header_params: IndexMap<String, Param>,
    /// The request body, overwritten on every body section.
    pub body_param: Option<Param>,
    /// Object properties.
    pub properties: IndexMap<String, Param>,
    /// Responses keyed by status code.
    pub responses: IndexMap<String, Param>,
}

impl Spec {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path parameters sorted by declaration order.
    pub fn ordered_path_params(&self) -> Vec<&Param> {
        let mut params: Vec<&Param> = self.path_params.values().collect();
        params.sort_by_key(|p| p.order.unwrap_or(usize::MAX));
        params
    }

    /// Inserts a record into the bucket matching its category.
    ///
    /// Records are keyed by name, so a repeated name overwrites the
    /// previous record.
    pub fn insert(&mut self, param: Param) {
        tracing::debug!(
            category = %param.category,
            name = %param.name,
            "inserting parameter record"
        );
        let bucket = match param.category {
            ParamCategory::Path => &mut self.path_params,
            ParamCategory::Query => &mut self.query_params,
            ParamCategory::Cookie => &mut self.cookie_params,
            ParamCategory::Header => &mut self.header_params,
            ParamCategory::Property => &mut self.properties,
            ParamCategory::Response => &mut self.responses,
            ParamCategory::Body => {
                self.body_param = Some(param);
                return;
            }
        };
        bucket.insert(param.name.clone(), param);
    }
}

/// Raw text accumulated for one section by the section driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBuffer {
    text: String,
}

impl SectionBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one raw documentation line.
    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    /// The accumulated text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the accumulated text and leaves the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

impl From<&str> for SectionBuffer {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl From<String> for SectionBuffer {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl<S: AsRef<str>> FromIterator<S> for SectionBuffer {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut buffer = SectionBuffer::new();
        for line in iter {
            buffer.push_line(line.as_ref());
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_kind_round_trips_through_str() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.as_str().parse::<SectionKind>(), Ok(kind));
        }
        assert_eq!("Query".parse::<SectionKind>(), Ok(SectionKind::Query));
        assert!("footer".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_insert_routes_by_category() {
        let mut spec = Spec::new();
        spec.insert(Param::new("id", ParamCategory::Path));
        spec.insert(Param::new("q", ParamCategory::Query));
        spec.insert(Param::new("payload", ParamCategory::Body));
        spec.insert(Param::new("404", ParamCategory::Response));

        assert!(spec.path_params.contains_key("id"));
        assert!(spec.query_params.contains_key("q"));
        assert_eq!(spec.body_param.as_ref().map(|p| p.name.as_str()), Some("payload"));
        assert!(spec.responses.contains_key("404"));
        assert!(spec.header_params.is_empty());
    }

    #[test]
    fn test_insert_overwrites_same_name() {
        let mut spec = Spec::new();
        let mut first = Param::new("sid", ParamCategory::Cookie);
        first.description = "first".into();
        let mut second = Param::new("sid", ParamCategory::Cookie);
        second.description = "second".into();
        spec.insert(first);
        spec.insert(second);

        assert_eq!(spec.cookie_params.len(), 1);
        assert_eq!(spec.cookie_params["sid"].description, "second");
    }

    #[test]
    fn test_buffer_take_clears() {
        let mut buffer: SectionBuffer = ["a -- b", "c"].into_iter().collect();
        assert_eq!(buffer.as_str(), "a -- b\nc");
        assert_eq!(buffer.take(), "a -- b\nc");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_annotation_values_serialize_untagged() {
        let mut annotations = Annotations::new();
        annotations.insert("minimum".into(), 1.0.into());
        annotations.insert("uniqueItems".into(), true.into());
        annotations.insert("format".into(), "uuid".into());
        let json = serde_json::to_string(&annotations).unwrap();
        assert_eq!(json, r#"{"minimum":1.0,"uniqueItems":true,"format":"uuid"}"#);
    }
}
