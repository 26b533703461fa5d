//! End-to-end bundling tests with a fake minifier
#![cfg(unix)]

mod common;

use assert_cmd::Command;
use common::{TestWorkspace, page, script, stylesheet};
use predicates::prelude::*;
use std::collections::BTreeMap;

type ManifestFile = BTreeMap<String, BTreeMap<String, Vec<String>>>;

#[allow(deprecated)]
fn yuicat_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("yuicat").unwrap();
    cmd.current_dir(&workspace.path).env_remove("RUST_LOG");
    cmd
}

fn original_index() -> String {
    page(&[
        stylesheet("/stylesheets/site.css"),
        script("/js/jquery.js"),
        script("/js/app.js"),
    ])
}

#[test]
fn test_bundles_every_type() {
    let workspace = TestWorkspace::new();
    workspace.create_site();
    workspace.age_file("templates/index.html");
    let modified = workspace.modified("templates/index.html");
    let minifier = workspace.passthrough_minifier();

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 bundle(s) from 2 HTML file(s)"));

    assert_eq!(
        workspace.read_file("templates/index.html"),
        page(&[
            stylesheet("/stylesheets/yuicat_index.css"),
            script("/js/yuicat_index.js"),
        ])
    );
    assert_eq!(
        workspace.read_file("static/js/yuicat_index.js"),
        "var $ = {};\n$.app = 1;\n"
    );
    assert_eq!(
        workspace.read_file("static/stylesheets/yuicat_index.css"),
        "body { margin: 0 }\n"
    );
    assert_eq!(workspace.modified("templates/index.html"), modified);

    assert_eq!(
        workspace.read_file("templates/index.html.css.bak"),
        original_index()
    );
    assert!(
        workspace
            .read_file("templates/index.html.js.bak")
            .contains("/stylesheets/yuicat_index.css")
    );

    assert_eq!(workspace.read_file("templates/about.html"), page(&[]));
    assert!(!workspace.file_exists("templates/about.html.css.bak"));
    assert!(!workspace.file_exists("static/js/yuicat_about.js"));
}

#[test]
fn test_yaml_manifest() {
    let workspace = TestWorkspace::new();
    workspace.create_site();
    let minifier = workspace.passthrough_minifier();

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .args(["--outfile", "build/manifest.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manifest:"));

    let manifest: ManifestFile =
        serde_yaml::from_str(&workspace.read_file("build/manifest.yaml")).unwrap();
    assert_eq!(
        manifest["js"]["templates/index.html"],
        vec!["static/js/jquery.js", "static/js/app.js"]
    );
    assert_eq!(
        manifest["css"]["templates/index.html"],
        vec!["static/stylesheets/site.css"]
    );
    assert!(manifest["js"]["templates/about.html"].is_empty());
}

#[test]
fn test_json_manifest_for_one_type() {
    let workspace = TestWorkspace::new();
    workspace.create_site();
    let minifier = workspace.passthrough_minifier();

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .args(["--type", "js", "-o", "manifest.json"])
        .assert()
        .success();

    let manifest: ManifestFile =
        serde_json::from_str(&workspace.read_file("manifest.json")).unwrap();
    assert_eq!(manifest.keys().collect::<Vec<_>>(), vec!["js"]);

    let index = workspace.read_file("templates/index.html");
    assert!(index.contains(&stylesheet("/stylesheets/site.css")));
    assert!(index.contains(&script("/js/yuicat_index.js")));
    assert!(!workspace.file_exists("static/stylesheets/yuicat_index.css"));
}

#[test]
fn test_no_backup_and_prefix() {
    let workspace = TestWorkspace::new();
    workspace.create_site();
    let minifier = workspace.passthrough_minifier();

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .args(["--no-backup", "--prefix", "release"])
        .assert()
        .success();

    assert!(workspace.file_exists("static/js/release_index.js"));
    assert!(workspace.file_exists("static/stylesheets/release_index.css"));
    assert!(!workspace.file_exists("templates/index.html.css.bak"));
    assert!(!workspace.file_exists("templates/index.html.js.bak"));
}

#[test]
fn test_second_run_is_refused() {
    let workspace = TestWorkspace::new();
    workspace.create_site();
    let minifier = workspace.passthrough_minifier();

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .assert()
        .success();
    let patched = workspace.read_file("templates/index.html");

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already processed"));

    assert_eq!(workspace.read_file("templates/index.html"), patched);
}

#[test]
fn test_interleaved_scripts_fail() {
    let workspace = TestWorkspace::new();
    let content = page(&[
        script("/js/a.js"),
        "<meta charset=\"utf-8\">".to_string(),
        script("/js/b.js"),
    ]);
    workspace.write_file("templates/index.html", &content);
    let minifier = workspace.passthrough_minifier();

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .args(["--type", "js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("templates/index.html:6"))
        .stderr(predicate::str::contains("script found after non-script content"));

    assert_eq!(workspace.read_file("templates/index.html"), content);
    assert!(!workspace.file_exists("static/js/yuicat_index.js"));
}

#[test]
fn test_include_outside_layout_fails() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "templates/index.html",
        &page(&[script("/vendor/lib.js")]),
    );
    let minifier = workspace.passthrough_minifier();

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a logically rooted file: /vendor/lib.js"));
}

#[test]
fn test_minifier_failure_is_reported() {
    let workspace = TestWorkspace::new();
    workspace.create_site();
    let minifier = workspace.fake_minifier("cat > /dev/null; exit 3");

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Minifier failed with exit status 3"));

    assert_eq!(workspace.read_file("templates/index.html"), original_index());
    assert!(!workspace.file_exists("templates/index.html.css.bak"));
}

#[test]
fn test_custom_layout() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "layout.yaml",
        "css:\n    physical: public/css\n    logical: /assets/css\n\
         js:\n    physical: public/scripts\n    logical: /assets/js\n\
         html: pages\n",
    );
    workspace.write_file("public/scripts/vendor/a.js", "A;\n");
    workspace.write_file("public/scripts/b.js", "B;\n");
    workspace.write_file(
        "pages/home.html",
        &page(&[script("/assets/js/vendor/a.js"), script("/assets/js/b.js")]),
    );
    let minifier = workspace.passthrough_minifier();

    yuicat_cmd(&workspace)
        .arg("--yuijar")
        .arg(&minifier)
        .args(["--layout", "layout.yaml"])
        .assert()
        .success();

    assert_eq!(
        workspace.read_file("pages/home.html"),
        page(&[script("/assets/js/yuicat_home.js")])
    );
    assert_eq!(workspace.read_file("public/scripts/yuicat_home.js"), "A;\nB;\n");
}

#[test]
fn test_workspace_option() {
    let workspace = TestWorkspace::new();
    workspace.create_site();
    let minifier = workspace.passthrough_minifier();
    let elsewhere = TestWorkspace::new();

    yuicat_cmd(&elsewhere)
        .arg("--yuijar")
        .arg(&minifier)
        .arg("--workspace")
        .arg(&workspace.path)
        .assert()
        .success();

    assert!(workspace.file_exists("static/js/yuicat_index.js"));
}
