//! # Section Handlers
//!
//! One handler per documentation section. Each handler takes the section's
//! buffer, turns its lines into [`Param`] records and writes them into the
//! [`Spec`] aggregate.
//!
//! Path, query and body sections reject lines that do not match the
//! parameter grammar. The remaining sections skip such lines with a warning.
//!
//! Every handler empties the buffer, whether or not it succeeds, and only
//! touches the aggregate once the whole section has been parsed.

use crate::config::ParserOptions;
use crate::error::{ParseError, ParseResult};
use crate::model::{
    Param, ParamCategory, SectionBuffer, SectionKind, Spec, DEFAULT_DTYPE, DEFAULT_STATUS_CODE,
};
use crate::parser::annotations::extract_annotations;
use crate::parser::grammar::{match_error, match_param, ParamLine};
use crate::parser::lines::{merge_lines, split_lines};

/// Runs section handlers with a fixed set of [`ParserOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionParser {
    options: ParserOptions,
}

impl SectionParser {
    /// Creates a parser using `options` for annotation coercion.
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Routes a buffer to the handler for `kind`.
    ///
    /// `code` is only read for [`SectionKind::Response`] and defaults to `"200"`.
    pub fn process(
        &self,
        kind: SectionKind,
        buffer: &mut SectionBuffer,
        spec: &mut Spec,
        code: Option<&str>,
    ) -> ParseResult<()> {
        match kind {
            SectionKind::Path => self.process_path(buffer, spec),
            SectionKind::Query => self.process_query(buffer, spec),
            SectionKind::Body => self.process_body(buffer, spec),
            SectionKind::Cookie => self.process_cookie(buffer, spec),
            SectionKind::Header => self.process_header(buffer, spec),
            SectionKind::Response => {
                self.process_response(buffer, spec, code.unwrap_or(DEFAULT_STATUS_CODE))
            }
            SectionKind::Properties => self.process_properties(buffer, spec),
            SectionKind::Errors => self.process_errors(buffer, spec),
        }
    }

    /// Path parameters: always required, numbered from 1 in line order.
    /// Descriptions are kept whole.
    pub fn process_path(&self, buffer: &mut SectionBuffer, spec: &mut Spec) -> ParseResult<()> {
        let section = SectionKind::Path;
        let mut params = Vec::new();

        for (i, line) in logical_lines(section, buffer)?.iter().enumerate() {
            let matched = require_match(section, line)?;
            let mut param = base_param(matched.name.clone(), &matched, ParamCategory::Path);
            param.description = matched.description_text().to_string();
            param.required = true;
            param.order = Some(i + 1);
            params.push(param);
        }

        commit(spec, params);
        Ok(())
    }

    /// Query parameters: required only when marked `required.`.
    pub fn process_query(&self, buffer: &mut SectionBuffer, spec: &mut Spec) -> ParseResult<()> {
        let section = SectionKind::Query;
        let mut params = Vec::new();

        for line in logical_lines(section, buffer)? {
            let matched = require_match(section, &line)?;
            let required = matched.is_marked_required();
            params.push(self.annotated_param(&matched, ParamCategory::Query, required)?);
        }

        commit(spec, params);
        Ok(())
    }

    /// The request body: required unless marked `optional.`.
    ///
    /// Only the first line of the section is read.
    pub fn process_body(&self, buffer: &mut SectionBuffer, spec: &mut Spec) -> ParseResult<()> {
        let section = SectionKind::Body;
        let lines = raw_lines(section, buffer)?;
        let Some(first) = lines.first() else {
            return Err(ParseError::EmptyInput { section });
        };
        if lines.len() > 1 {
            tracing::warn!(
                section = %section,
                ignored = lines.len() - 1,
                "reading the first body line only; later lines are dropped"
            );
        }

        let matched = require_match(section, first)?;
        let required = !matched.is_marked_optional();
        let param = self.annotated_param(&matched, ParamCategory::Body, required)?;

        commit(spec, vec![param]);
        Ok(())
    }

    /// Cookie parameters: required only when marked `required.`.
    pub fn process_cookie(&self, buffer: &mut SectionBuffer, spec: &mut Spec) -> ParseResult<()> {
        self.process_lenient(SectionKind::Cookie, ParamCategory::Cookie, buffer, spec)
    }

    /// Header parameters: required only when marked `required.`.
    pub fn process_header(&self, buffer: &mut SectionBuffer, spec: &mut Spec) -> ParseResult<()> {
        self.process_lenient(SectionKind::Header, ParamCategory::Header, buffer, spec)
    }

    /// Object properties: required only when marked `required.`.
    pub fn process_properties(&self, buffer: &mut SectionBuffer, spec: &mut Spec) -> ParseResult<()> {
        self.process_lenient(SectionKind::Properties, ParamCategory::Property, buffer, spec)
    }

    /// A response for status `code`. Every matching line produces a record
    /// keyed by that code, so the last one wins.
    pub fn process_response(
        &self,
        buffer: &mut SectionBuffer,
        spec: &mut Spec,
        code: &str,
    ) -> ParseResult<()> {
        let section = SectionKind::Response;
        let mut params = Vec::new();

        for line in logical_lines(section, buffer)? {
            let Some(matched) = lenient_match(section, &line) else {
                continue;
            };
            let mut param = self.annotated_param(&matched, ParamCategory::Response, false)?;
            param.name = code.to_string();
            params.push(param);
        }

        commit(spec, params);
        Ok(())
    }

    /// Error responses written as `code -- description`, one per line.
    /// The records carry no type.
    pub fn process_errors(&self, buffer: &mut SectionBuffer, spec: &mut Spec) -> ParseResult<()> {
        let section = SectionKind::Errors;
        let mut params = Vec::new();

        for line in raw_lines(section, buffer)? {
            let Some(matched) = match_error(&line) else {
                tracing::warn!(%section, line = %line, "skipping line that is not `code -- description`");
                continue;
            };
            let mut param = Param::new(matched.code, ParamCategory::Response);
            param.dtype = None;
            param.description = matched.description.trim().to_string();
            params.push(param);
        }

        commit(spec, params);
        Ok(())
    }

    fn process_lenient(
        &self,
        section: SectionKind,
        category: ParamCategory,
        buffer: &mut SectionBuffer,
        spec: &mut Spec,
    ) -> ParseResult<()> {
        let mut params = Vec::new();

        for line in logical_lines(section, buffer)? {
            let Some(matched) = lenient_match(section, &line) else {
                continue;
            };
            let required = matched.is_marked_required();
            params.push(self.annotated_param(&matched, category, required)?);
        }

        commit(spec, params);
        Ok(())
    }

    /// Builds a record whose description goes through annotation extraction.
    fn annotated_param(
        &self,
        matched: &ParamLine,
        category: ParamCategory,
        required: bool,
    ) -> ParseResult<Param> {
        let (description, annotations) =
            extract_annotations(matched.description_text(), &self.options)?;

        let mut param = base_param(matched.name.clone(), matched, category);
        param.description = description.trim().to_string();
        param.annotations = annotations;
        param.required = required;
        Ok(param)
    }
}

fn base_param(name: String, matched: &ParamLine, category: ParamCategory) -> Param {
    let mut param = Param::new(name, category);
    param.dtype = Some(
        matched
            .dtype
            .clone()
            .unwrap_or_else(|| DEFAULT_DTYPE.to_string()),
    );
    param
}

/// Takes the buffer and merges its lines into logical lines.
fn logical_lines(section: SectionKind, buffer: &mut SectionBuffer) -> ParseResult<Vec<String>> {
    let text = buffer.take();
    merge_lines(section, &split_lines(&text))
}

/// Takes the buffer and returns its trimmed lines without merging.
fn raw_lines(section: SectionKind, buffer: &mut SectionBuffer) -> ParseResult<Vec<String>> {
    let text = buffer.take();
    let lines: Vec<String> = split_lines(&text)
        .into_iter()
        .map(|l| l.trim().to_string())
        .collect();
    if lines.is_empty() {
        return Err(ParseError::EmptyInput { section });
    }
    Ok(lines)
}

fn require_match(section: SectionKind, line: &str) -> ParseResult<ParamLine> {
    match_param(line).ok_or_else(|| ParseError::GrammarMismatch {
        section,
        line: line.to_string(),
    })
}

fn lenient_match(section: SectionKind, line: &str) -> Option<ParamLine> {
    let matched = match_param(line);
    if matched.is_none() {
        tracing::warn!(%section, line = %line, "skipping line that is not a parameter declaration");
    }
    matched
}

fn commit(spec: &mut Spec, params: Vec<Param>) {
    for param in params {
        spec.insert(param);
    }
}
