#![deny(missing_docs)]

//! # Parse Command
//!
//! Reads one documentation section, runs the matching handler on a fresh
//! specification and prints the result as JSON.

use crate::error::{CliError, CliResult};
use paramdoc_core::{
    match_response_header, BooleanFallback, NumericCoercion, ParserOptions, SectionBuffer,
    SectionKind, SectionParser, Spec,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Numeric coercion policy flag.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericArg {
    /// Float parse first; `3` becomes `3.0`.
    FloatFirst,
    /// Integer unless the value has a decimal point.
    IntegerFirst,
}

impl From<NumericArg> for NumericCoercion {
    fn from(arg: NumericArg) -> Self {
        match arg {
            NumericArg::FloatFirst => NumericCoercion::FloatFirst,
            NumericArg::IntegerFirst => NumericCoercion::IntegerFirst,
        }
    }
}

/// Boolean fallback policy flag.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanArg {
    /// Reject values other than true/false.
    Fail,
    /// Keep such values as text.
    Text,
}

impl From<BooleanArg> for BooleanFallback {
    fn from(arg: BooleanArg) -> Self {
        match arg {
            BooleanArg::Fail => BooleanFallback::Fail,
            BooleanArg::Text => BooleanFallback::Text,
        }
    }
}

/// Arguments for the parse command.
#[derive(clap::Args, Debug, Clone)]
pub struct ParseArgs {
    /// Section kind: path, query, body, cookie, header, response, properties or errors.
    #[clap(long, short)]
    pub section: SectionKind,

    /// Status code for a response section.
    #[clap(long, conflicts_with = "heading")]
    pub code: Option<String>,

    /// Response heading to take the status code from (e.g. `"HTTP 404 Response:"`).
    #[clap(long)]
    pub heading: Option<String>,

    /// JSON file with parser options. Flags below override it.
    #[clap(long, env = "PARAMDOC_OPTIONS")]
    pub options: Option<PathBuf>,

    /// Numeric annotation coercion policy.
    #[clap(long, value_enum, env = "PARAMDOC_NUMERIC_COERCION")]
    pub numeric_coercion: Option<NumericArg>,

    /// Policy for boolean annotations that are neither true nor false.
    #[clap(long, value_enum, env = "PARAMDOC_BOOLEAN_FALLBACK")]
    pub boolean_fallback: Option<BooleanArg>,

    /// Write the JSON here instead of stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// File holding the section text. Reads stdin when omitted.
    pub input: Option<PathBuf>,
}

impl ParseArgs {
    /// Resolves the effective parser options.
    pub fn parser_options(&self) -> CliResult<ParserOptions> {
        let mut options = match &self.options {
            Some(path) => ParserOptions::from_json(&fs::read_to_string(path)?)?,
            None => ParserOptions::default(),
        };
        if let Some(numeric) = self.numeric_coercion {
            options.numeric_coercion = numeric.into();
        }
        if let Some(boolean) = self.boolean_fallback {
            options.boolean_fallback = boolean.into();
        }
        Ok(options)
    }

    /// Resolves the status code for response sections.
    pub fn status_code(&self) -> CliResult<Option<String>> {
        match (&self.code, &self.heading) {
            (Some(code), _) => Ok(Some(code.clone())),
            (None, Some(heading)) => match_response_header(heading)
                .map(Some)
                .ok_or_else(|| CliError::General(format!("not a response heading: {:?}", heading))),
            (None, None) => Ok(None),
        }
    }
}

/// Parses the section and renders the resulting specification as pretty JSON.
pub fn render(args: &ParseArgs, text: &str) -> CliResult<String> {
    let parser = SectionParser::new(args.parser_options()?);
    let code = args.status_code()?;

    let mut buffer = SectionBuffer::from(text);
    let mut spec = Spec::new();
    parser.process(args.section, &mut buffer, &mut spec, code.as_deref())?;

    tracing::info!(section = %args.section, "section parsed");
    Ok(serde_json::to_string_pretty(&spec)?)
}

/// Executes the parse command.
pub fn execute(args: &ParseArgs) -> CliResult<()> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input
        }
    };

    let json = render(args, &text)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            tracing::info!(path = %path.display(), "specification written");
        }
        None => println!("{}", json),
    }
    Ok(())
}
