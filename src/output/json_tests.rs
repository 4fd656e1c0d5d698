use serde_json::Value;

use super::*;

fn issue(path: &str, rule: &str) -> Issue {
    Issue {
        path: path.to_string(),
        rule: rule.to_string(),
        message: "msg".to_string(),
        line: 1,
        column: 2,
    }
}

#[test]
fn json_output_is_valid_and_typed() {
    let out = JsonFormatter
        .format(&[issue("a.css", "r1"), issue("b.css", "r2")])
        .unwrap();

    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["summary"]["total_issues"], 2);
    assert_eq!(value["summary"]["files"], 2);
    assert_eq!(value["issues"][0]["path"], "a.css");
    assert_eq!(value["issues"][1]["rule"], "r2");
}

#[test]
fn json_counts_distinct_files_once() {
    let out = JsonFormatter
        .format(&[issue("a.css", "r1"), issue("a.css", "r2")])
        .unwrap();

    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["summary"]["files"], 1);
}

#[test]
fn empty_issues_produce_empty_array() {
    let out = JsonFormatter.format(&[]).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["summary"]["total_issues"], 0);
    assert_eq!(value["issues"], serde_json::json!([]));
}
