use super::*;

fn args_of(command: &ScanCommand) -> Vec<String> {
    command
        .args
        .iter()
        .map(|a| a.to_string_lossy().to_string())
        .collect()
}

#[test]
fn plain_invocation_uses_installed_binary() {
    let command =
        build_command(&ToolOptions::default(), None, ScanTarget::GlobAll, &[]).unwrap();

    assert_eq!(command.program, OsString::from("stylelint"));
    let args = args_of(&command);
    assert_eq!(
        args,
        vec![
            "--allow-empty-input",
            "--ignore-disables",
            crate::GLOB_ALL_PATTERN,
        ]
    );
}

#[test]
fn heap_override_switches_to_node_with_entry_script() {
    let options = ToolOptions {
        max_old_space_size: Some("4096".to_string()),
        node_home: Some("/opt/node".to_string()),
        ..ToolOptions::default()
    };
    let command = build_command(&options, None, ScanTarget::GlobAll, &[]).unwrap();

    assert_eq!(command.program, OsString::from("node"));
    let args = args_of(&command);
    assert_eq!(args[0], "--max-old-space-size=4096");
    assert!(args[1].ends_with("stylelint.js"));
}

#[test]
fn heap_override_without_node_home_is_a_config_error() {
    let options = ToolOptions {
        max_old_space_size: Some("4096".to_string()),
        ..ToolOptions::default()
    };
    let result = build_command(&options, None, ScanTarget::GlobAll, &[]);
    assert!(matches!(result, Err(StyleGuardError::Config(_))));
}

#[test]
fn config_flag_appended_when_resolved() {
    let command = build_command(
        &ToolOptions::default(),
        Some(Path::new("/work/stylelintrc.json")),
        ScanTarget::GlobAll,
        &[],
    )
    .unwrap();

    let args = args_of(&command);
    let pos = args.iter().position(|a| a == "--config").unwrap();
    assert_eq!(args[pos + 1], "/work/stylelintrc.json");
}

#[test]
fn syntax_pass_throughs_appended_verbatim() {
    let options = ToolOptions {
        syntax: Some("sugarss".to_string()),
        custom_syntax: Some("postcss-lit".to_string()),
        ..ToolOptions::default()
    };
    let command = build_command(&options, None, ScanTarget::GlobAll, &[]).unwrap();

    let args = args_of(&command);
    let syntax_pos = args.iter().position(|a| a == "--syntax").unwrap();
    assert_eq!(args[syntax_pos + 1], "sugarss");
    let custom_pos = args.iter().position(|a| a == "--custom-syntax").unwrap();
    assert_eq!(args[custom_pos + 1], "postcss-lit");
}

#[test]
fn explicit_targets_appear_in_order() {
    let target = ScanTarget::Files(vec![
        "/repo/a.css".to_string(),
        "/repo/b.scss".to_string(),
    ]);
    let command = build_command(&ToolOptions::default(), None, target, &[]).unwrap();

    let args = args_of(&command);
    let a = args.iter().position(|x| x == "/repo/a.css").unwrap();
    let b = args.iter().position(|x| x == "/repo/b.scss").unwrap();
    assert!(a < b);
}

#[test]
fn ignore_patterns_are_flag_value_pairs_without_quotes() {
    let command = build_command(
        &ToolOptions::default(),
        None,
        ScanTarget::GlobAll,
        &["vendor/**".to_string(), "dist/**".to_string()],
    )
    .unwrap();

    let args = args_of(&command);
    let first = args.iter().position(|a| a == "--ignore-pattern").unwrap();
    assert_eq!(args[first + 1], "vendor/**");
    assert_eq!(args[first + 2], "--ignore-pattern");
    assert_eq!(args[first + 3], "dist/**");
    assert!(!args.iter().any(|a| a.contains('"')));
}

#[test]
fn exclusions_follow_targets() {
    let target = ScanTarget::Files(vec!["/repo/a.css".to_string()]);
    let command = build_command(
        &ToolOptions::default(),
        None,
        target,
        &["vendor/**".to_string()],
    )
    .unwrap();

    let args = args_of(&command);
    let target_pos = args.iter().position(|a| a == "/repo/a.css").unwrap();
    let pattern_pos = args.iter().position(|a| a == "--ignore-pattern").unwrap();
    assert!(target_pos < pattern_pos);
}

#[test]
fn entry_script_layouts_differ_per_platform() {
    let windows = entry_script_in("/opt/node", true);
    let unix = entry_script_in("/opt/node", false);

    assert!(windows.to_string_lossy().contains("node_modules"));
    assert!(!windows.to_string_lossy().contains("lib"));
    assert!(unix.to_string_lossy().contains("lib"));
    assert!(unix.to_string_lossy().ends_with("stylelint.js"));
}

#[test]
fn display_joins_program_and_args() {
    let command =
        build_command(&ToolOptions::default(), None, ScanTarget::GlobAll, &[]).unwrap();
    let rendered = command.display();
    assert!(rendered.starts_with("stylelint "));
    assert!(rendered.contains("--ignore-disables"));
}
