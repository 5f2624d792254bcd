//! End-to-end tests for `tokengen generate`.

mod fixtures;
use fixtures::*;

#[test]
fn test_generate_human_output() {
    let dir = temp_config_dir();
    let mut args = vec!["generate"];
    args.extend(example_field_args());

    let output = run(&args, dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "generate should succeed. stderr: {}",
        stderr(&output)
    );
    let stdout = stdout(&output);
    assert!(stdout.contains("Blue Tokens (3 total, 2 per row)"));
    assert!(stdout.contains("  B1 B2\n  B3\n"));
    assert!(stdout.contains("Red Tokens (1 total, 1 per row)"));
    assert!(stdout.contains("  R1\n"));
}

#[test]
fn test_generate_json_output() {
    let dir = temp_config_dir();
    let mut args = vec!["generate", "--json"];
    args.extend(example_field_args());

    let output = run(&args, dir.path());
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(result["blue"]["tokens"], serde_json::json!(["B1", "B2", "B3"]));
    assert_eq!(result["blue"]["perRow"], 2);
    assert_eq!(result["red"]["tokens"], serde_json::json!(["R1"]));
    assert_eq!(result["red"]["perRow"], 1);
}

#[test]
fn test_generate_missing_fields_reports_required() {
    let dir = temp_config_dir();
    let output = run(&["generate", "--blue-count", "3"], dir.path());

    assert_eq!(output.status.code(), Some(1), "validation failure exits 1");
    let stderr = stderr(&output);
    assert!(stderr.contains("Validation failed"));
    assert!(stderr.contains("bluePrefix: This field is required"));
    assert!(stderr.contains("redPerRow: This field is required"));
    assert!(!stderr.contains("numberOfBlue"));
}

#[test]
fn test_generate_json_errors() {
    let dir = temp_config_dir();
    let output = run(
        &[
            "generate",
            "--json",
            "--blue-count",
            "2",
            "--blue-prefix",
            "B",
            "--blue-per-row",
            "5",
            "--red-count",
            "0",
            "--red-prefix",
            "  ",
            "--red-per-row",
            "1",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON errors");
    let errors = &result["errors"];
    assert_eq!(
        errors["bluePerRow"],
        "Tokens per row cannot exceed the total number of tokens"
    );
    assert_eq!(errors["numberOfRed"], "Must be a positive number");
    // Blank prefixes count as missing once generation runs
    assert_eq!(errors["redPrefix"], "This field is required");
    assert!(errors.get("numberOfBlue").is_none());
}

#[test]
fn test_generate_respects_configured_limit() {
    let dir = temp_config_dir();
    write_config(dir.path(), "[limits]\nmax_tokens = 5\n");

    let output = run(
        &[
            "generate",
            "--blue-count",
            "6",
            "--blue-prefix",
            "B",
            "--blue-per-row",
            "1",
            "--red-count",
            "5",
            "--red-prefix",
            "R",
            "--red-per-row",
            "1",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("numberOfBlue: Must be no more than 5"));
}

#[test]
fn test_generate_huge_count_is_a_field_error() {
    let dir = temp_config_dir();
    let output = run(
        &[
            "generate",
            "--json",
            "--blue-count",
            "1e17",
            "--blue-prefix",
            "B",
            "--blue-per-row",
            "1",
            "--red-count",
            "1",
            "--red-prefix",
            "R",
            "--red-per-row",
            "1",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["errors"]["numberOfBlue"], "Must be no more than 10000");
}

#[test]
fn test_generate_rejects_config_limit_above_ceiling() {
    let dir = temp_config_dir();
    write_config(dir.path(), "[limits]\nmax_tokens = 5000000000\n");

    let mut args = vec!["generate"];
    args.extend(example_field_args());
    let output = run(&args, dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("max_tokens must be between 1 and 1000000"));
}

#[test]
fn test_generate_truncates_fractional_counts() {
    let dir = temp_config_dir();
    let output = run(
        &[
            "generate",
            "--json",
            "--blue-count",
            "2.7",
            "--blue-prefix",
            "B",
            "--blue-per-row",
            "1.5",
            "--red-count",
            "1",
            "--red-prefix",
            "R",
            "--red-per-row",
            "1",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["blue"]["tokens"], serde_json::json!(["B1", "B2"]));
    assert_eq!(result["blue"]["perRow"], 1);
}

#[test]
fn test_generate_with_unreadable_config_exits_2() {
    let dir = temp_config_dir();
    write_config(dir.path(), "this is = = not toml");

    let mut args = vec!["generate"];
    args.extend(example_field_args());
    let output = run(&args, dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
