//! # Parser Module
//!
//! Turns the text of a documentation section into parameter records.
//!
//! The stages run in order: [`lines`] merges wrapped lines, [`grammar`]
//! matches each logical line, [`annotations`] types the `key: value` pairs
//! found in descriptions, and [`sections`] assembles the records.

pub mod annotations;
pub mod grammar;
pub mod lines;
pub mod sections;

pub use annotations::{coerce_number, coerce_value, extract_annotations, AnnotationKind};
pub use grammar::{
    match_error, match_param, match_response_header, ErrorLine, ParamLine, Requirement,
};
pub use lines::{merge_lines, split_lines};
pub use sections::SectionParser;
