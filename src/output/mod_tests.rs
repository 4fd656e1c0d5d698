use super::*;

#[test]
fn formatter_for_text_formats_plainly() {
    let formatter = formatter_for(OutputFormat::Text, ColorMode::Never);
    let out = formatter.format(&[]).unwrap();
    assert!(out.contains("No issues found"));
}

#[test]
fn formatter_for_json_formats_json() {
    let formatter = formatter_for(OutputFormat::Json, ColorMode::Never);
    let out = formatter.format(&[]).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok());
}

#[test]
fn output_format_deserializes_from_lowercase() {
    #[derive(serde::Deserialize)]
    struct Holder {
        format: OutputFormat,
    }
    let holder: Holder = toml::from_str("format = \"json\"").unwrap();
    assert_eq!(holder.format, OutputFormat::Json);
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn output_format_parses_from_str() {
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert!("yaml".parse::<OutputFormat>().is_err());
}
