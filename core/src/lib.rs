#![deny(missing_docs)]

//! # Paramdoc Core
//!
//! Parses documentation sections (path, query, body, cookie, header,
//! response, properties, errors) into a typed parameter specification.
//!
//! The caller detects section boundaries, collects each section's lines
//! into a [`SectionBuffer`] and hands it to a [`SectionParser`] together
//! with the [`Spec`] being built.
//!
//! ```
//! use paramdoc_core::{SectionBuffer, SectionKind, SectionParser, Spec};
//!
//! let mut spec = Spec::new();
//! let mut buffer: SectionBuffer = ["id (integer) -- required. The item id minimum: 1"]
//!     .into_iter()
//!     .collect();
//!
//! SectionParser::default()
//!     .process(SectionKind::Query, &mut buffer, &mut spec, None)
//!     .unwrap();
//!
//! let id = &spec.query_params["id"];
//! assert!(id.required);
//! assert_eq!(id.description, "The item id");
//! assert!(buffer.is_empty());
//! ```

/// Shared error types.
pub mod error;

/// Parser options.
pub mod config;

/// Parameter records and the specification aggregate.
pub mod model;

/// Line merging, grammars, annotations and section handlers.
pub mod parser;

pub use config::{BooleanFallback, NumericCoercion, ParserOptions};
pub use error::{ParseError, ParseResult};
pub use model::{
    AnnotationValue, Annotations, Number, Param, ParamCategory, SectionBuffer, SectionKind, Spec,
};
pub use parser::{match_response_header, SectionParser};
