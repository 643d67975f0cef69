//! Integration tests for valtree


use harness::{FixtureDir, run_valtree, run_valtree_stdin};

const PROFILE: &str = r#"{"name": "John", "age": 30, "tags": ["a", "b"]}"#;

#[test]
fn test_collapsed_by_default() {
    let fixtures = FixtureDir::new();
    fixtures.add_file("profile.json", PROFILE);

    let (stdout, _stderr, success) = run_valtree(fixtures.path(), &["profile.json"]);
    assert!(success, "valtree should succeed");
    assert!(stdout.starts_with("▸ {...}\n"), "got: {}", stdout);
    assert!(stdout.contains("2 branches, 4 leaves"));
    assert!(!stdout.contains("John"));
}

#[test]
fn test_expand_flag() {
    let fixtures = FixtureDir::new();
    fixtures.add_file("profile.json", PROFILE);

    let (stdout, _stderr, success) = run_valtree(fixtures.path(), &["-e", "profile.json"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        &lines[..6],
        &[
            "▾ {",
            "    name: \"John\"",
            "    age: 30",
            "    ▾ tags: [",
            "        0: \"a\"",
            "        1: \"b\"",
        ]
    );
}

#[test]
fn test_depth_limit() {
    let fixtures = FixtureDir::new();
    fixtures.add_file("profile.json", PROFILE);

    let (stdout, _stderr, success) =
        run_valtree(fixtures.path(), &["-e", "-L", "1", "profile.json"]);
    assert!(success);
    assert!(stdout.contains("    ▸ tags: [...]"), "got: {}", stdout);
}

#[test]
fn test_negative_depth_is_unbounded() {
    let fixtures = FixtureDir::new();
    fixtures.add_file("deep.json", r#"{"a": {"b": {"c": {"d": 1}}}}"#);

    let (stdout, _stderr, success) =
        run_valtree(fixtures.path(), &["-e", "-L", "-1", "--list-expanded", "deep.json"]);
    assert!(success);
    assert_eq!(stdout, "root\nroot.a\nroot.a.b\nroot.a.b.c\n");
}

#[test]
fn test_list_expanded_default_depth() {
    let (stdout, _stderr, success) = run_valtree_stdin(
        &["-e", "--list-expanded"],
        r#"{"a": {"b": {"c": 1}}, "d": [1]}"#,
    );
    assert!(success);
    assert_eq!(stdout, "root\nroot.a\nroot.d\n");
}

#[test]
fn test_list_expanded_without_expand_is_empty() {
    let (stdout, _stderr, success) = run_valtree_stdin(&["--list-expanded"], PROFILE);
    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_stdin_dash() {
    let (stdout, _stderr, success) = run_valtree_stdin(&["-e", "-"], "[1, 2]");
    assert!(success);
    assert!(stdout.contains("    0: 1"));
    assert!(stdout.contains("    1: 2"));
}

#[test]
fn test_tagged_values() {
    let input = r#"{
        "when": {"$date": "2024-01-15T10:30:00Z"},
        "big": {"$bigint": "9007199254740993"},
        "pattern": {"$regexp": "/test/gi"},
        "nan": {"$number": "NaN"},
        "handler": {"$function": "onClick"}
    }"#;
    let (stdout, _stderr, success) = run_valtree_stdin(&["-e"], input);
    assert!(success, "stdout: {}", stdout);
    assert!(stdout.contains("when: 2024-01-15T10:30:00.000Z"));
    assert!(stdout.contains("big: 9007199254740993n"));
    assert!(stdout.contains("pattern: /test/gi"));
    assert!(stdout.contains("nan: NaN"));
    assert!(stdout.contains("handler: [Function: onClick]"));
}

#[test]
fn test_plain_mode_keeps_tags_as_objects() {
    let (stdout, _stderr, success) =
        run_valtree_stdin(&["-e", "--plain"], r#"{"x": {"$number": "NaN"}}"#);
    assert!(success);
    assert!(stdout.contains("▾ x: {"), "got: {}", stdout);
    assert!(stdout.contains("$number: \"NaN\""));
}

#[test]
fn test_hidden_functions() {
    let input = r#"{"handler": {"$function": "onClick"}, "label": "Save"}"#;
    let (stdout, _stderr, success) = run_valtree_stdin(&["-e", "-F", "hide"], input);
    assert!(success);
    assert!(!stdout.contains("handler"));
    assert!(stdout.contains("label: \"Save\""));
}

#[test]
fn test_hidden_function_root() {
    let (stdout, stderr, success) =
        run_valtree_stdin(&["-F", "hide"], r#"{"$function": "main"}"#);
    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("hidden function"));
}

#[test]
fn test_functions_as_objects() {
    let input = r#"{"f": {"$function": {"name": "f", "props": {"x": 1}}}}"#;
    let (stdout, _stderr, success) = run_valtree_stdin(&["-e", "-F", "as-object"], input);
    assert!(success);
    assert!(stdout.contains("▾ f: {"), "got: {}", stdout);
    assert!(stdout.contains("        x: 1"));
}

#[test]
fn test_count_and_guides() {
    let (stdout, _stderr, success) =
        run_valtree_stdin(&["-e", "-L", "1", "-c", "-g"], PROFILE);
    assert!(success);
    assert!(stdout.contains("├── name: \"John\""));
    assert!(stdout.contains("└── ▸ tags: [...] (2)"), "got: {}", stdout);
}

#[test]
fn test_title() {
    let (stdout, _stderr, success) = run_valtree_stdin(&["--title", "Profile"], PROFILE);
    assert!(success);
    assert!(stdout.starts_with("Profile\n"));
}

#[test]
fn test_copy_address() {
    let (stdout, _stderr, success) = run_valtree_stdin(&["--copy", "root.tags"], PROFILE);
    assert!(success);
    assert_eq!(stdout, "[\n  \"a\",\n  \"b\"\n]\n");
}

#[test]
fn test_copy_unknown_address() {
    let (_stdout, stderr, success) = run_valtree_stdin(&["--copy", "root.missing"], PROFILE);
    assert!(!success);
    assert!(stderr.contains("valtree: no node at address 'root.missing'"));
}

#[test]
fn test_copy_function_has_no_json_form() {
    let (_stdout, stderr, success) = run_valtree_stdin(
        &["--copy", "root.f"],
        r#"{"f": {"$function": "f"}}"#,
    );
    assert!(!success);
    assert!(stderr.contains("no JSON form"));
}

#[test]
fn test_settings_file() {
    let fixtures = FixtureDir::new();
    fixtures.add_file("profile.json", PROFILE);
    fixtures.add_file(
        "settings.json",
        r#"{"expansion": {"default_expanded": true, "max_depth": 1}}"#,
    );

    let (stdout, _stderr, success) = run_valtree(
        fixtures.path(),
        &["--config", "settings.json", "--list-expanded", "profile.json"],
    );
    assert!(success);
    assert_eq!(stdout, "root\n");

    // Flags override the file
    let (stdout, _stderr, success) = run_valtree(
        fixtures.path(),
        &["--config", "settings.json", "-L", "2", "--list-expanded", "profile.json"],
    );
    assert!(success);
    assert_eq!(stdout, "root\nroot.tags\n");
}

#[test]
fn test_color_flag_overrides_settings_file() {
    let fixtures = FixtureDir::new();
    fixtures.add_file("input.json", r#"{"a": "x"}"#);
    fixtures.add_file("settings.json", r#"{"render": {"use_color": false}}"#);

    let (stdout, _stderr, success) = run_valtree(
        fixtures.path(),
        &["--config", "settings.json", "--color", "always", "-e", "input.json"],
    );
    assert!(success);
    assert!(stdout.contains('\u{1b}'), "got: {:?}", stdout);

    let (stdout, _stderr, success) = run_valtree(
        fixtures.path(),
        &["--config", "settings.json", "-e", "input.json"],
    );
    assert!(success);
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_missing_input_file() {
    let fixtures = FixtureDir::new();
    let (_stdout, stderr, success) = run_valtree(fixtures.path(), &["nope.json"]);
    assert!(!success);
    assert!(stderr.contains("valtree: cannot read 'nope.json'"));
}

#[test]
fn test_invalid_json() {
    let (_stdout, stderr, success) = run_valtree_stdin(&[], "{ not json");
    assert!(!success);
    assert!(stderr.starts_with("valtree: "));
}

#[test]
fn test_invalid_tag_reports_pointer() {
    let (_stdout, stderr, success) =
        run_valtree_stdin(&[], r#"{"when": [{"$date": "yesterday"}]}"#);
    assert!(!success);
    assert!(stderr.contains("/when/0"), "got: {}", stderr);
}

#[test]
fn test_no_color_when_piped() {
    let (stdout, _stderr, success) = run_valtree_stdin(&["-e"], PROFILE);
    assert!(success);
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn test_color_always() {
    let (stdout, _stderr, success) = run_valtree_stdin(&["-e", "--color", "always"], PROFILE);
    assert!(success);
    assert!(stdout.contains("\x1b["));
}
