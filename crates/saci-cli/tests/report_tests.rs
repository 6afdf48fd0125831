//! Integration tests for the report, control, precheck and config commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RESULTS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<test-results name="cis.dll" total="2" failures="1">
  <test-suite type="Assembly" name="cis.dll" description="CIS Azure Foundations" executed="True" result="Failure">
    <results>
      <test-suite type="Namespace" name="Azure" executed="True" result="Failure">
        <results>
          <test-suite type="TestFixture" name="Storage" executed="True" result="Failure">
            <results>
              <test-case name="Storage.Encryption" description="3.1 Ensure encryption enabled" executed="True" result="Success" />
              <test-case name="Storage.Https" description="3.2 Ensure secure transfer" executed="True" result="Failure">
                <failure>
                  <message><![CDATA[Secure transfer disabled]]></message>
                </failure>
              </test-case>
            </results>
          </test-suite>
        </results>
      </test-suite>
    </results>
  </test-suite>
</test-results>
"#;

fn saci_cmd() -> Command {
    Command::cargo_bin("saci").unwrap()
}

/// Temp dir holding an input document and a config path
fn setup(xml: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("results.xml");
    fs::write(&input, xml).unwrap();
    let config = dir.path().join("config.yml");
    (dir, input, config)
}

/// Write a config whose PDF renderer is a shell stub that copies its input
#[cfg(unix)]
fn write_stub_config(dir: &Path, config: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let stub = dir.join("fake-wkhtmltopdf");
    fs::write(
        &stub,
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo 'wkhtmltopdf 0.12.6 (with patched qt)'; exit 0; fi\ncp \"$1\" \"$2\"\n",
    )
    .unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

    fs::write(
        config,
        format!(
            "account:\n  id: '999'\n  name: test-account\npdf:\n  binary: {}\n  args: []\n",
            stub.display()
        ),
    )
    .unwrap();
}

#[test]
fn test_help_lists_commands() {
    saci_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("control"))
        .stdout(predicate::str::contains("precheck"));
}

#[test]
fn test_version() {
    saci_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("saci"));
}

#[cfg(unix)]
#[test]
fn test_report_with_debug_export() {
    let (dir, input, config) = setup(RESULTS_XML);
    write_stub_config(dir.path(), &config);
    let output = dir.path().join("out").join("report.pdf");

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .env_remove("RUST_LOG")
        .arg("report")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF report created"))
        .stdout(predicate::str::contains("2 controls, 1 passed, 1 failed"));

    // The stub copies the HTML into the output path.
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("test-account (999)"));
    assert!(html.contains("Secure transfer disabled"));

    let exported: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("out").join("testdata.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        exported,
        serde_json::json!([
            {
                "Result": "Success",
                "failReason": "NA",
                "Offenders": ["Future Use"],
                "ScoredControl": "True",
                "Description": "3.1 Ensure encryption enabled",
                "ControlId": "3.1"
            },
            {
                "Result": "Failure",
                "failReason": "Secure transfer disabled",
                "Offenders": ["Future Use"],
                "ScoredControl": "True",
                "Description": "3.2 Ensure secure transfer",
                "ControlId": "3.2"
            }
        ])
    );
}

#[cfg(unix)]
#[test]
fn test_report_quiet_keeps_html() {
    let (dir, input, config) = setup(RESULTS_XML);
    write_stub_config(dir.path(), &config);
    let html = dir.path().join("report.html");

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .arg("report")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("report.pdf"))
        .arg("--html")
        .arg(&html)
        .arg("--account-name")
        .arg("override-name")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(fs::read_to_string(&html).unwrap().contains("override-name"));
    assert!(!dir.path().join("testdata.json").exists());
}

#[test]
fn test_report_malformed_document() {
    let (_dir, input, config) = setup("<test-results><test-suite name=\"x\"/></test-results>");

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .arg("report")
        .arg("-i")
        .arg(&input)
        .arg("--skip-precheck")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Malformed document"));
}

#[test]
fn test_report_missing_result_attribute() {
    let xml = RESULTS_XML.replace(r#"executed="True" result="Success" "#, r#"executed="True" "#);
    let (_dir, input, config) = setup(&xml);

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .arg("report")
        .arg("-i")
        .arg(&input)
        .arg("--skip-precheck")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Missing field 'result' in test case 0"));
}

#[test]
fn test_report_missing_input_file() {
    let (dir, _input, config) = setup(RESULTS_XML);

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .arg("report")
        .arg("-i")
        .arg(dir.path().join("absent.xml"))
        .arg("--skip-precheck")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.xml"));
}

#[test]
fn test_report_fails_precheck_without_renderer() {
    let (_dir, input, config) = setup(RESULTS_XML);
    fs::write(&config, "pdf:\n  binary: saci-no-such-binary-xyz\n").unwrap();

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .arg("report")
        .arg("-i")
        .arg(&input)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("saci-no-such-binary-xyz"));
}

#[test]
fn test_control_json() {
    let (_dir, input, config) = setup(RESULTS_XML);

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .arg("control")
        .arg("-i")
        .arg(&input)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Result\": \"Failure\""))
        .stdout(predicate::str::contains("\"ControlId\": \"CIS\""))
        .stdout(predicate::str::contains("\"failReason\": \"NA\""));
}

#[test]
fn test_control_missing_description() {
    let (_dir, input, config) = setup(
        "<test-results><test-suite name=\"x\" executed=\"True\" result=\"Success\"/></test-results>",
    );

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .arg("control")
        .arg("-i")
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("description"));
}

#[test]
fn test_precheck_json_failure() {
    let (_dir, _input, config) = setup(RESULTS_XML);
    fs::write(&config, "pdf:\n  binary: saci-no-such-binary-xyz\n").unwrap();

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .arg("precheck")
        .arg("--format")
        .arg("json")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("\"adequate\": false"));
}

#[cfg(unix)]
#[test]
fn test_precheck_passes_with_stub() {
    let (dir, _input, config) = setup(RESULTS_XML);
    write_stub_config(dir.path(), &config);

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .arg("precheck")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.12.6"))
        .stdout(predicate::str::contains("Precheck passed"));
}

#[test]
fn test_config_init_path_and_show() {
    let (_dir, _input, config) = setup(RESULTS_XML);

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yml"));

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .args(["config", "init"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    saci_cmd()
        .env("SACI_CONFIG", &config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("binary: wkhtmltopdf"));
}
