use email_forward_parser::*;

#[test]
fn test_defaults() {
    let options = ParserOptions::default();
    assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(options.wrap_width, DEFAULT_WRAP_WIDTH);
    assert!(options.validate().is_ok());
}

#[test]
fn test_builder() {
    let options = ParserOptions::default().with_max_depth(3).with_wrap_width(40);
    assert_eq!(options.max_depth, 3);
    assert_eq!(options.wrap_width, 40);

    let parser = ForwardParser::new(options);
    assert_eq!(parser.options(), &options);
}

#[test]
fn test_from_json_partial() {
    let options = ParserOptions::from_json(r#"{"max_depth": 3}"#).unwrap();
    assert_eq!(options.max_depth, 3);
    assert_eq!(options.wrap_width, DEFAULT_WRAP_WIDTH);

    assert_eq!(ParserOptions::from_json("{}").unwrap(), ParserOptions::default());
}

#[test]
fn test_from_json_out_of_range() {
    let err = ParserOptions::from_json(r#"{"max_depth": 0}"#).unwrap_err();
    assert!(matches!(err, ParseError::InvalidOptions { ref field, .. } if field == "max_depth"));

    let err = ParserOptions::from_json(r#"{"wrap_width": 5}"#).unwrap_err();
    assert!(matches!(err, ParseError::InvalidOptions { ref field, .. } if field == "wrap_width"));
}

#[test]
fn test_from_json_malformed() {
    let err = ParserOptions::from_json("max_depth = 3").unwrap_err();
    assert!(matches!(err, ParseError::InvalidOptions { ref field, .. } if field == "json"));
    assert!(err.to_string().starts_with("Invalid option json:"));
}

#[test]
fn test_validate_upper_bound() {
    assert!(ParserOptions::default().with_max_depth(64).validate().is_ok());
    assert!(ParserOptions::default().with_max_depth(65).validate().is_err());
}
