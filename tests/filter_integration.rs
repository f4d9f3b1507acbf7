//! Integration tests for the git-br binary.
//!
//! These tests exercise the full stdin → stdout flow: parsing, sanitization,
//! hierarchy construction, flattening, and each presentation mode.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

// =============================================================================
// Test Fixtures
// =============================================================================

/// A git-br command isolated from the invoking user's environment, so no real
/// config file can leak into a test.
fn git_br() -> Command {
    let mut cmd = Command::cargo_bin("git-br").expect("binary builds");
    cmd.env_remove("GIT_BR_CONFIG");
    cmd.env("HOME", "/nonexistent");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent");
    cmd
}

/// Build one input line: seven NUL-separated fields plus the terminator.
fn rec(head: &str, hash: &str, name: &str, upstream: &str, track: &str) -> String {
    let ref_name = format!("refs/heads/{}", name);
    let upstream_ref = if upstream.is_empty() {
        String::new()
    } else {
        format!("refs/heads/{}", upstream)
    };
    format!(
        "{}\0{}\0{}\0{}\0{}\0{}\0{}\n",
        head, hash, ref_name, name, upstream_ref, upstream, track
    )
}

/// Remove SGR escape sequences.
fn strip_sgr(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for e in chars.by_ref() {
                if e == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// Core transform, observed through --short
// =============================================================================

#[test]
fn empty_input_yields_empty_output() {
    git_br()
        .write_stdin("")
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn roots_round_trip_in_input_order() {
    let input = [
        rec(" ", "1111111", "zeta", "", ""),
        rec("*", "2222222", "alpha", "", ""),
        rec(" ", "3333333", "mid", "", ""),
    ]
    .concat();

    git_br()
        .arg("--short")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("zeta\nalpha\nmid\n");
}

#[test]
fn dangling_upstream_renders_as_root() {
    // origin/main is not in the record set, so feature becomes a root.
    let line = " \01234567\0refs/heads/feature\0feature\0refs/remotes/origin/main\0origin/main\0\n";

    git_br()
        .arg("--short")
        .write_stdin(line)
        .assert()
        .success()
        .stdout("feature\n");
}

#[test]
fn depth_first_order_emits_subtree_before_sibling() {
    let input = [
        rec(" ", "1111111", "a", "", ""),
        rec(" ", "2222222", "b", "a", ""),
        rec(" ", "3333333", "c", "a", ""),
        rec(" ", "4444444", "d", "b", ""),
    ]
    .concat();

    git_br()
        .arg("--short")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("a\n  b\n    d\n  c\n");
}

#[test]
fn indentation_grows_two_spaces_per_level() {
    let input = [
        rec(" ", "1111111", "root", "", ""),
        rec(" ", "2222222", "mid", "root", ""),
        rec(" ", "3333333", "leaf", "mid", ""),
    ]
    .concat();

    git_br()
        .arg("--short")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("root\n  mid\n    leaf\n");
}

// =============================================================================
// Error reporting
// =============================================================================

#[test]
fn six_field_line_is_rejected_with_line_number() {
    git_br()
        .write_stdin("a\0b\0c\0d\0e\0f\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"))
        .stderr(predicate::str::contains("found 6"));
}

#[test]
fn eight_field_line_is_rejected() {
    let good = rec(" ", "1111111", "main", "", "");
    let bad = "a\0b\0c\0d\0e\0f\0g\0h\n";

    git_br()
        .write_stdin(format!("{}{}", good, bad))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("found 8"));
}

#[test]
fn malformed_input_produces_no_partial_output() {
    let input = [rec(" ", "1111111", "main", "", ""), "short\0line\n".to_string()].concat();

    git_br()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn upstream_cycle_is_rejected() {
    let input = [
        rec(" ", "1111111", "a", "b", ""),
        rec(" ", "2222222", "b", "a", ""),
    ]
    .concat();

    git_br()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cyclic upstream graph"));
}

#[test]
fn self_tracking_branch_is_rejected() {
    git_br()
        .write_stdin(rec(" ", "1111111", "a", "a", ""))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refs/heads/a"));
}

// =============================================================================
// Table mode
// =============================================================================

#[test]
fn table_aligns_columns_and_marks_current_branch() {
    let input = [
        rec("*", "1111111", "main", "", ""),
        rec(" ", "2222222", "feature", "main", "[ahead 1]"),
        rec(" ", "3333333", "hotfix", "", ""),
    ]
    .concat();

    let output = git_br()
        .args(["--color", "never"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    insta::assert_snapshot!(stdout, @r"
● 1111111 main
  2222222   feature [ahead 1] main
  3333333 hotfix
");
}

#[test]
fn color_always_emits_sgr_that_strips_to_plain_output() {
    let input = [
        rec("*", "1111111", "main", "", ""),
        rec(" ", "2222222", "feature", "main", "[behind 2]"),
    ]
    .concat();

    let plain = git_br()
        .args(["--color", "never"])
        .write_stdin(input.clone())
        .output()
        .unwrap();
    let colored = git_br()
        .args(["--color", "always"])
        .write_stdin(input)
        .output()
        .unwrap();

    let plain = String::from_utf8(plain.stdout).unwrap();
    let colored = String::from_utf8(colored.stdout).unwrap();

    assert!(!plain.contains('\x1b'));
    assert!(colored.contains("\x1b[33m"), "hash column is yellow");
    assert_eq!(strip_sgr(&colored), plain);
}

// =============================================================================
// JSON mode
// =============================================================================

#[test]
fn json_mode_preserves_every_field() {
    let input = [
        rec("*", "1111111", "main", "", ""),
        rec(" ", "2222222", "feature", "main", "[ahead 1]"),
    ]
    .concat();

    let output = git_br().arg("--json").write_stdin(input).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["head"], "*");
    assert_eq!(records[0]["short_name"], "main");
    assert_eq!(records[0]["upstream"], serde_json::Value::Null);

    assert_eq!(records[1]["short_hash"], "2222222");
    assert_eq!(records[1]["ref_name"], "refs/heads/feature");
    // Indentation lands in short_name; no other field is touched.
    assert_eq!(records[1]["short_name"], "  feature");
    assert_eq!(records[1]["upstream"], "refs/heads/main");
    assert_eq!(records[1]["upstream_short"], "main");
    assert_eq!(records[1]["track"], "[ahead 1]");
}

// =============================================================================
// Config file and flag precedence
// =============================================================================

#[test]
fn config_file_sets_the_default_format() {
    let config = write_config("format = \"short\"\n");
    let input = [
        rec(" ", "1111111", "main", "", ""),
        rec(" ", "2222222", "feature", "main", ""),
    ]
    .concat();

    git_br()
        .arg("--config")
        .arg(config.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout("main\n  feature\n");
}

#[test]
fn flags_override_the_config_file() {
    let config = write_config("format = \"short\"\n");

    let output = git_br()
        .arg("--config")
        .arg(config.path())
        .arg("--json")
        .write_stdin(rec(" ", "1111111", "main", "", ""))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(stdout.trim()).is_ok());
}

#[test]
fn env_var_names_the_config_file() {
    // The fixture clears GIT_BR_CONFIG; setting it afterwards wins.
    let config = write_config("format = \"short\"\n");
    let input = [
        rec(" ", "1111111", "main", "", ""),
        rec(" ", "2222222", "feature", "main", ""),
    ]
    .concat();

    git_br()
        .env("GIT_BR_CONFIG", config.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout("main\n  feature\n");
}

#[test]
fn config_flag_wins_over_the_env_var() {
    let env_config = write_config("format = \"json\"\n");
    let flag_config = write_config("format = \"short\"\n");
    let input = [
        rec(" ", "1111111", "main", "", ""),
        rec(" ", "2222222", "feature", "main", ""),
    ]
    .concat();

    git_br()
        .env("GIT_BR_CONFIG", env_config.path())
        .arg("--config")
        .arg(flag_config.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout("main\n  feature\n");
}

#[test]
fn missing_env_var_path_falls_back_to_defaults() {
    git_br()
        .env("GIT_BR_CONFIG", "/nonexistent/git-br.toml")
        .write_stdin(rec(" ", "1111111", "main", "", ""))
        .assert()
        .success()
        .stdout("  1111111 main\n");
}

#[test]
fn unknown_config_key_is_an_error() {
    let config = write_config("formt = \"short\"\n");

    git_br()
        .arg("--config")
        .arg(config.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn missing_explicit_config_path_is_an_error() {
    git_br()
        .args(["--config", "/nonexistent/git-br.toml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn debug_mode_reports_cleared_upstreams() {
    let line = " \01234567\0refs/heads/feature\0feature\0refs/remotes/origin/main\0origin/main\0\n";

    git_br()
        .args(["--short", "--debug"])
        .write_stdin(line)
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug]"))
        .stderr(predicate::str::contains("refs/remotes/origin/main"));
}

#[test]
fn normal_mode_is_silent_on_stderr() {
    let line = " \01234567\0refs/heads/feature\0feature\0refs/remotes/origin/main\0origin/main\0\n";

    git_br()
        .arg("--short")
        .write_stdin(line)
        .assert()
        .success()
        .stderr("");
}

#[test]
fn quiet_flag_pins_the_verbosity_floor() {
    // Quiet wins over debug: the dangling-upstream diagnostic stays silent.
    let line = " \01234567\0refs/heads/feature\0feature\0refs/remotes/origin/main\0origin/main\0\n";
    git_br()
        .args(["--short", "--quiet", "--debug"])
        .write_stdin(line)
        .assert()
        .success()
        .stdout("feature\n")
        .stderr("");
}

#[test]
fn errors_print_even_when_quiet() {
    git_br()
        .arg("-q")
        .write_stdin("a\0b\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

// =============================================================================
// Completions
// =============================================================================

#[test]
fn completions_emit_a_script_without_reading_stdin() {
    git_br()
        .args(["--completions", "bash"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-br"));
}
