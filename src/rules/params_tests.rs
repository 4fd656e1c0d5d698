use serde_json::json;

use super::*;

#[test]
fn json_array_literal_wins() {
    assert_eq!(parse_rule_value(r#"["short"]"#), Some(json!(["short"])));
}

#[test]
fn json_object_literal_wins() {
    assert_eq!(
        parse_rule_value(r#"{"ignore": ["comments"]}"#),
        Some(json!({"ignore": ["comments"]}))
    );
}

#[test]
fn json_scalar_literal_wins() {
    assert_eq!(parse_rule_value("2"), Some(json!(2)));
    assert_eq!(parse_rule_value("true"), Some(json!(true)));
    assert_eq!(parse_rule_value("null"), Some(json!(null)));
}

#[test]
fn key_value_options_line() {
    assert_eq!(
        parse_rule_value("options=always"),
        Some(json!("always"))
    );
}

#[test]
fn section_header_is_tolerated() {
    let raw = "[stylelint]\noptions=always";
    assert_eq!(parse_rule_value(raw), Some(json!("always")));
}

#[test]
fn options_value_coerces_integer() {
    assert_eq!(parse_rule_value("options=4"), Some(json!(4)));
}

#[test]
fn options_value_coerces_float() {
    assert_eq!(parse_rule_value("options=1.5"), Some(json!(1.5)));
}

#[test]
fn options_value_coerces_bool() {
    assert_eq!(parse_rule_value("options=false"), Some(json!(false)));
    assert_eq!(parse_rule_value("options=true"), Some(json!(true)));
}

#[test]
fn missing_options_key_yields_none() {
    assert_eq!(parse_rule_value("severity=warning"), None);
}

#[test]
fn unparseable_garbage_yields_none() {
    assert_eq!(parse_rule_value("not json and no equals sign"), None);
}

#[test]
fn later_duplicate_key_wins() {
    let raw = "options=first\noptions=second";
    assert_eq!(parse_rule_value(raw), Some(json!("second")));
}

#[test]
fn value_keeps_content_after_first_equals() {
    assert_eq!(
        parse_rule_value("options=a=b"),
        Some(json!("a=b"))
    );
}
