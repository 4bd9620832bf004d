use std::path::Path;
use std::process::{Command, Output};

use figcomp_lib::FigcompOutput;
use tempfile::TempDir;

const LINK: &str = "https://www.figma.com/design/ABC123/Landing?node-id=12-34";

/// Runs the binary with a HOME that has no central config and no Figma credentials.
fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_figcomp"))
        .args(args)
        .env("HOME", home)
        .env_remove("FIGMA_TOKEN")
        .env_remove("FIGMA_OAUTH_TOKEN")
        .env_remove("FIGCOMP_LOG")
        .output()
        .expect("run figcomp")
}

fn error_category(stdout: &[u8]) -> String {
    let value: serde_json::Value =
        serde_json::from_slice(stdout).expect("error output should be JSON");
    value["error"]["category"]
        .as_str()
        .expect("error category")
        .to_string()
}

#[test]
fn create_rejects_link_without_node_id() {
    let dir = TempDir::new().expect("tempdir");
    let output = run(
        dir.path(),
        &[
            "create",
            "--figma-link",
            "https://www.figma.com/design/ABC123/Landing",
            "--framework",
            "react",
            "--project-dir",
            dir.path().to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(error_category(&output.stdout), "input");
}

#[test]
fn create_fails_with_framework_error_when_nothing_is_detected() {
    let dir = TempDir::new().expect("tempdir");
    let output = run(
        dir.path(),
        &[
            "create",
            "--figma-link",
            LINK,
            "--project-dir",
            dir.path().to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(error_category(&output.stdout), "framework");
}

#[test]
fn create_rejects_unsupported_framework_flag() {
    let dir = TempDir::new().expect("tempdir");
    let output = run(
        dir.path(),
        &["create", "--figma-link", LINK, "--framework", "svelte"],
    );

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(error_category(&output.stdout), "framework");
    assert!(String::from_utf8_lossy(&output.stdout).contains("svelte"));
}

#[test]
fn create_without_token_is_a_config_error() {
    let dir = TempDir::new().expect("tempdir");
    let output = run(
        dir.path(),
        &[
            "create",
            "--figma-link",
            LINK,
            "--framework",
            "html",
            "--project-dir",
            dir.path().to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(error_category(&output.stdout), "config");
    assert!(String::from_utf8_lossy(&output.stdout).contains("FIGMA_TOKEN"));
}

#[test]
fn invalid_config_file_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    let cfg_path = dir.path().join("figcomp.toml");
    std::fs::write(&cfg_path, "[image]\nscale = -1.0\n").expect("write config");

    let output = run(
        dir.path(),
        &[
            "create",
            "--figma-link",
            LINK,
            "--config",
            cfg_path.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(error_category(&output.stdout), "config");
}

#[test]
fn detect_reports_framework_and_extension() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(
        dir.path().join("package.json"),
        r#"{ "dependencies": { "vue": "^3.4.0" }, "devDependencies": { "react": "18" } }"#,
    )
    .expect("write manifest");

    let output = run(
        dir.path(),
        &["detect", "--project-dir", dir.path().to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    match serde_json::from_slice::<FigcompOutput>(&output.stdout).expect("detect JSON") {
        FigcompOutput::Detect(out) => {
            assert_eq!(out.framework, Some(figcomp_lib::Framework::React));
            assert_eq!(out.extension.as_deref(), Some("jsx"));
            assert!(!out.typescript);
        }
        other => panic!("expected detect output, got {other:?}"),
    }
}

#[test]
fn detect_exits_zero_for_unknown_project() {
    let dir = TempDir::new().expect("tempdir");
    let output = run(
        dir.path(),
        &[
            "detect",
            "--project-dir",
            dir.path().to_str().unwrap(),
            "--format",
            "pretty",
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("non-tty pretty output is JSON");
    assert_eq!(value["mode"], "detect");
    assert!(value["framework"].is_null());
}
