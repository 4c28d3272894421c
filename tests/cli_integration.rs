use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn comment_remover() -> Command {
    Command::cargo_bin("comment-remover").unwrap()
}

fn with_isolated_config() -> (Command, TempDir) {
    let temp = TempDir::new().unwrap();
    let mut cmd = comment_remover();
    cmd.env("COMMENT_REMOVER_CONFIG_DIR", temp.path().join("config"));
    cmd.env_remove("RUST_LOG");
    (cmd, temp)
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn help_shows_usage() {
    comment_remover()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("comment-remover"));
}

#[test]
fn version_shows_version() {
    comment_remover()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("comment-remover"));
}

#[test]
fn strip_prints_to_stdout() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "main.c", "int x = 1; // set x\nint y = 2;");

    cmd.arg("strip")
        .arg(&input)
        .assert()
        .success()
        .stdout("int x = 1; \nint y = 2;");
}

#[test]
fn strip_keeps_urls_and_strings() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(
        temp.path(),
        "app.js",
        "// This is a comment\n\
         const url = \"http://example.com\"; // trailing\n\
         const protocol = \"https://\"; // Protocol\n\
         const str = \"This string contains // which is not a comment\";\n",
    );

    cmd.arg("strip")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("const url = \"http://example.com\";"))
        .stdout(predicate::str::contains("const protocol = \"https://\";"))
        .stdout(predicate::str::contains(
            "const str = \"This string contains // which is not a comment\";",
        ))
        .stdout(predicate::str::contains("This is a comment").not())
        .stdout(predicate::str::contains("Protocol").not());
}

#[test]
fn strip_to_output_file() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "query.sql", "SELECT 1; -- one\n");
    let output = temp.path().join("clean.sql");

    cmd.arg("strip")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed file written to"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "SELECT 1; \n");
    assert_eq!(fs::read_to_string(&input).unwrap(), "SELECT 1; -- one\n");
}

#[test]
fn strip_in_place_makes_backup() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "run.sh", "echo hi # greet\n");

    cmd.args(["strip", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Original file backed up to"));

    assert_eq!(fs::read_to_string(&input).unwrap(), "echo hi \n");
    let backups: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with(".bak"))
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(
        fs::read_to_string(backups[0].path()).unwrap(),
        "echo hi # greet\n"
    );
}

#[cfg(unix)]
#[test]
fn strip_in_place_keeps_executable_bit() {
    use std::os::unix::fs::PermissionsExt;

    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "run.sh", "n=${#args[@]} # count\n");
    fs::set_permissions(&input, fs::Permissions::from_mode(0o755)).unwrap();

    cmd.args(["strip", "-i"]).arg(&input).assert().success();

    assert_eq!(fs::read_to_string(&input).unwrap(), "n=${#args[@]} \n");
    let mode = fs::metadata(&input).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn strip_in_place_without_backup() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "run.sh", "echo hi # greet\n");

    cmd.args(["strip", "-i", "--no-backup"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("backed up").not());

    assert_eq!(fs::read_to_string(&input).unwrap(), "echo hi \n");
}

#[test]
fn strip_rejects_in_place_with_output() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "a.c", "x;\n");

    cmd.args(["strip", "-i", "-o", "out.c"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--in-place"));
}

#[test]
fn strip_missing_input_fails() {
    let (mut cmd, temp) = with_isolated_config();
    cmd.arg("strip")
        .arg(temp.path().join("missing.py"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn strip_forced_type_overrides_extension() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "notes.txt", "x = 1  # note\n");

    cmd.args(["strip", "-t", "python"])
        .arg(&input)
        .assert()
        .success()
        .stdout("x = 1  \n");
}

#[test]
fn strip_unknown_forced_type_fails() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "a.c", "x;\n");

    cmd.args(["strip", "-t", "cobol"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language: cobol"));
}

#[test]
fn strip_reads_stdin() {
    let (mut cmd, _temp) = with_isolated_config();
    cmd.args(["strip", "-t", "shell", "-"])
        .write_stdin("ls # list\n")
        .assert()
        .success()
        .stdout("ls \n");
}

#[test]
fn strip_warns_on_unterminated_block() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "main.c", "code(); /* oops");

    cmd.arg("strip")
        .arg(&input)
        .assert()
        .success()
        .stdout("code(); ")
        .stderr(predicate::str::contains("unterminated block comment"));
}

#[test]
fn strip_detects_shebang() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(
        temp.path(),
        "deploy",
        "#!/usr/bin/env python3\nx = '# keep'  # drop\n",
    );

    cmd.arg("strip")
        .arg(&input)
        .assert()
        .success()
        .stdout("\nx = '# keep'  \n");
}

#[test]
fn strip_tidy_flags() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(
        temp.path(),
        "test.py",
        "# header\n\n\nx = 5  # trailing\n\n\ny = 10",
    );

    cmd.args(["strip", "--squeeze-blank", "--trim-trailing", "--final-newline"])
        .arg(&input)
        .assert()
        .success()
        .stdout("\nx = 5\n\ny = 10\n");
}

#[test]
fn configured_language_is_used() {
    let (mut cmd, temp) = with_isolated_config();
    let config_dir = temp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[[languages]]
id = "ini"
extensions = [".ini"]
single_line_markers = [";"]
string_delimiters = ['"']
"#,
    )
    .unwrap();
    let input = write_file(temp.path(), "app.ini", "name = \"a;b\" ; comment\n");

    cmd.arg("strip")
        .arg(&input)
        .assert()
        .success()
        .stdout("name = \"a;b\" \n");
}

#[test]
fn languages_lists_registry() {
    let (mut cmd, _temp) = with_isolated_config();
    cmd.args(["languages", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Supported languages:"))
        .stdout(predicate::str::contains("python:"))
        .stdout(predicate::str::contains("Multi-line comment: <!-- ... -->"));
}

#[test]
fn languages_as_json() {
    let (mut cmd, _temp) = with_isolated_config();
    let output = cmd.args(["languages", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"haskell"));
    assert!(ids.contains(&"batch"));
}

#[test]
fn detect_reports_method() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "page.html", "<p></p>");

    cmd.arg("detect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("markup (by extension)"));
}

#[test]
fn detect_unknown_shows_fallback() {
    let (mut cmd, temp) = with_isolated_config();
    let input = write_file(temp.path(), "Makefile", "all:\n");

    cmd.arg("detect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown (falls back to c_style)"));
}

#[test]
fn config_set_and_get() {
    let (mut cmd, temp) = with_isolated_config();
    cmd.args(["config", "set", "tidy.final_newline", "yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tidy.final_newline = yes"));

    let mut cmd2 = comment_remover();
    cmd2.env("COMMENT_REMOVER_CONFIG_DIR", temp.path().join("config"));
    cmd2.args(["config", "get", "tidy.final_newline"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn config_set_keeps_unparsable_config() {
    let (mut cmd, temp) = with_isolated_config();
    let config_dir = temp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    let broken = "backup = tru\n\n[[languages]]\nid = \"ini\"\nsingle_line_markers = [\";\"]\n";
    fs::write(config_dir.join("config.toml"), broken).unwrap();

    cmd.args(["config", "set", "tidy.final_newline", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));

    assert_eq!(
        fs::read_to_string(config_dir.join("config.toml")).unwrap(),
        broken
    );
}

#[test]
fn config_set_rejects_unknown_fallback() {
    let (mut cmd, _temp) = with_isolated_config();
    cmd.args(["config", "set", "fallback_language", "cobol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language"));
}

#[test]
fn config_unknown_key_fails() {
    let (mut cmd, _temp) = with_isolated_config();
    cmd.args(["config", "get", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown setting"));
}

#[test]
fn config_invalid_bool_fails() {
    let (mut cmd, _temp) = with_isolated_config();
    cmd.args(["config", "set", "backup", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
