// The demos binary against the bundled data files

use std::path::Path;
use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_demos"))
        .current_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
        .args(args)
        .output()
        .unwrap()
}

#[test_log::test]
fn prints_foo() {
    let output = run(&["data/foo.yaml"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Ethan D. Twardy"));
    assert!(stdout.contains("0.001"));
}

#[test_log::test]
fn prints_schema() {
    let output = run(&["data/schema.yaml", "--shape", "schema"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("exposure_time"));
    assert!(stdout.contains("additional_properties: false"));
}

#[test_log::test]
fn wrong_shape_fails_with_message() {
    let output = run(&["data/schema.yaml", "--shape", "foo"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected field 'investigator', got field '$schema'"));
}

#[test_log::test]
fn missing_file_fails() {
    let output = run(&["data/does-not-exist.yaml"]);
    assert_eq!(output.status.code(), Some(1));
}
