//! # Error Handling
//!
//! Provides the `ParseError` enum shared by every section handler.

use crate::model::SectionKind;
use derive_more::Display;

/// Failures raised while turning a section buffer into parameter records.
///
/// We use `derive_more` for the `Display` boilerplate.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ParseError {
    /// The handler was invoked without any line to process.
    #[display("Empty Input: the {section} section has no lines")]
    EmptyInput {
        /// Section whose buffer was empty.
        section: SectionKind,
    },

    /// A logical line did not match the grammar its section requires.
    #[display("Grammar Mismatch in {section} section: {line:?}")]
    GrammarMismatch {
        /// Section being processed.
        section: SectionKind,
        /// The offending logical line.
        line: String,
    },

    /// An annotation value could not be converted to the type its key dispatches to.
    #[display("Type Coercion Error: {key} = {value:?} is not a valid {expected}")]
    TypeCoercion {
        /// Annotation key (e.g. `uniqueItems`).
        key: String,
        /// The raw, trimmed value.
        value: String,
        /// Name of the primitive the key requires.
        expected: &'static str,
    },
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for ParseError {}

/// Helper type alias for Result using ParseError.
pub type ParseResult<T> = Result<T, ParseError>;
