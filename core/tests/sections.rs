use paramdoc_core::{
    match_response_header, AnnotationValue, ParamCategory, ParseError, SectionBuffer, SectionKind,
    SectionParser, Spec,
};
use pretty_assertions::assert_eq;

fn parse(kind: SectionKind, lines: &[&str], spec: &mut Spec) -> Result<(), ParseError> {
    let mut buffer: SectionBuffer = lines.iter().collect();
    let result = SectionParser::default().process(kind, &mut buffer, spec, None);
    assert!(buffer.is_empty(), "buffer must be cleared after {}", kind);
    result
}

#[test]
fn test_query_section_end_to_end() {
    let mut spec = Spec::new();
    parse(
        SectionKind::Query,
        &["id (integer) -- required. The item id minimum: 1"],
        &mut spec,
    )
    .unwrap();

    assert_eq!(spec.query_params.len(), 1);
    let id = &spec.query_params["id"];
    assert_eq!(id.name, "id");
    assert_eq!(id.dtype.as_deref(), Some("integer"));
    assert_eq!(id.category, ParamCategory::Query);
    assert!(id.required);
    assert_eq!(id.description, "The item id");
    assert_eq!(id.annotations.len(), 1);
    assert_eq!(id.annotations["minimum"].as_f64(), Some(1.0));
}

#[test]
fn test_errors_section_end_to_end() {
    let mut spec = Spec::new();
    parse(SectionKind::Errors, &["404 -- Not found", "garbage line"], &mut spec).unwrap();

    assert_eq!(spec.responses.len(), 1);
    let not_found = &spec.responses["404"];
    assert_eq!(not_found.name, "404");
    assert_eq!(not_found.description, "Not found");
    assert_eq!(not_found.dtype, None);
}

#[test]
fn test_body_section_end_to_end() {
    let mut spec = Spec::new();
    parse(
        SectionKind::Body,
        &["payload (object) -- optional. The request payload", "ignored second line"],
        &mut spec,
    )
    .unwrap();

    let body = spec.body_param.as_ref().unwrap();
    assert!(!body.required);
    assert_eq!(body.name, "payload");
    assert_eq!(body.dtype.as_deref(), Some("object"));
    assert_eq!(body.description, "The request payload");
}

#[test]
fn test_documented_operation() {
    let mut spec = Spec::new();
    parse(
        SectionKind::Path,
        &[
            "owner (string) -- Repository owner",
            "repo (string) -- Repository name, which may be",
            "    wrapped onto the next line",
        ],
        &mut spec,
    )
    .unwrap();
    parse(
        SectionKind::Query,
        &[
            "per_page (integer) -- optional. Results per page minimum: 1 maximum: 100",
            "labels (array) -- Label filter uniqueItems: true",
        ],
        &mut spec,
    )
    .unwrap();
    parse(SectionKind::Header, &["Accept -- required. Media type"], &mut spec).unwrap();
    parse(SectionKind::Cookie, &["session -- Session token"], &mut spec).unwrap();

    let heading = "HTTP 201 Response:";
    let code = match_response_header(heading).unwrap();
    let mut buffer: SectionBuffer = ["Repo (object) -- The created repository"].into_iter().collect();
    SectionParser::default()
        .process(SectionKind::Response, &mut buffer, &mut spec, Some(code.as_str()))
        .unwrap();
    parse(SectionKind::Errors, &["409 -- Already exists", "422 -- Invalid name"], &mut spec).unwrap();

    let ordered: Vec<&str> = spec
        .ordered_path_params()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(ordered, vec!["owner", "repo"]);
    assert_eq!(
        spec.path_params["repo"].description,
        "Repository name, which may be wrapped onto the next line"
    );

    let per_page = &spec.query_params["per_page"];
    assert!(!per_page.required);
    assert_eq!(per_page.description, "Results per page");
    assert_eq!(per_page.annotations["minimum"], AnnotationValue::from(1.0));
    assert_eq!(per_page.annotations["maximum"], AnnotationValue::from(100.0));
    let labels = &spec.query_params["labels"];
    assert_eq!(labels.annotations["uniqueItems"].as_bool(), Some(true));
    assert_eq!(labels.annotations["uniqueItems"].as_str(), None);

    assert!(spec.header_params["Accept"].required);
    assert!(!spec.cookie_params["session"].required);

    let codes: Vec<&str> = spec.responses.keys().map(String::as_str).collect();
    assert_eq!(codes, vec!["201", "409", "422"]);
    assert_eq!(spec.responses["201"].dtype.as_deref(), Some("object"));
    assert_eq!(spec.responses["422"].description, "Invalid name");
}

#[test]
fn test_fatal_section_does_not_disturb_earlier_sections() {
    let mut spec = Spec::new();
    parse(SectionKind::Path, &["id -- Identifier"], &mut spec).unwrap();

    let err = parse(SectionKind::Query, &["ok -- fine", "!! -- broken"], &mut spec).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Grammar Mismatch in query section: \"!! -- broken\""
    );
    assert!(spec.query_params.is_empty());
    assert_eq!(spec.path_params.len(), 1);
}

#[test]
fn test_reprocessing_response_code_overwrites() {
    let mut spec = Spec::new();
    parse(SectionKind::Response, &["First -- one"], &mut spec).unwrap();
    parse(SectionKind::Response, &["Second -- two"], &mut spec).unwrap();

    assert_eq!(spec.responses.len(), 1);
    assert_eq!(spec.responses["200"].description, "two");
}

#[test]
fn test_spec_serializes_to_json() {
    let mut spec = Spec::new();
    parse(SectionKind::Query, &["limit (integer) -- maximum: 50"], &mut spec).unwrap();

    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["query_params"]["limit"]["category"], "query");
    assert_eq!(json["query_params"]["limit"]["annotations"]["maximum"], 50.0);
    assert_eq!(json["query_params"]["limit"]["description"], "");
    assert!(json["body_param"].is_null());
}

#[test]
fn test_non_finite_annotation_survives_json_as_text() {
    let mut spec = Spec::new();
    parse(SectionKind::Query, &["q -- text minimum: nan"], &mut spec).unwrap();

    let minimum = &spec.query_params["q"].annotations["minimum"];
    assert_eq!(minimum.as_str(), Some("nan"));
    assert_eq!(minimum.as_f64(), None);

    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["query_params"]["q"]["annotations"]["minimum"], "nan");
}
