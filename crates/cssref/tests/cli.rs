//! End-to-end runs of the `cssref` binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    /// A scratch directory with an empty config, so the user's real config
    /// never leaks into a test.
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_cssref"))
            .args(["--color", "never"])
            .args(args)
            .env("CSSREF_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("CSSREF_LOG")
            .output()
            .unwrap()
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "cssref {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}

#[test]
fn tokens_table() {
    let out = Env::new().stdout(&["tokens", "color: #3b82f6"]);
    assert_eq!(
        out,
        "property-name\t0..5\t\"color\"\ncolon\t5..7\t\": \"\ncolor\t7..14\t\"#3b82f6\"\n"
    );
}

#[test]
fn tokens_json() {
    let out = Env::new().stdout(&["tokens", "--json", "display: flex"]);
    let spans: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(spans[2]["class"], "keyword");
    assert_eq!(spans[2]["text"], "flex");
    assert_eq!(spans[2]["start"], 9);
}

#[test]
fn highlight_without_color_is_identity() {
    let out = Env::new().stdout(&["highlight", "margin: 0 auto;", "Item 1"]);
    assert_eq!(out, "margin: 0 auto;\nItem 1\n");
}

#[test]
fn highlight_reads_stdin() {
    let env = Env::new();
    let mut child = Command::new(env!("CARGO_BIN_EXE_cssref"))
        .args(["--color", "never", "highlight"])
        .env("CSSREF_CONFIG", env.dir.path().join("config.toml"))
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"gap: 1rem\nz-index: 10\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "gap: 1rem\nz-index: 10\n");
}

#[test]
fn show_and_search() {
    let env = Env::new();
    let show = env.stdout(&["show", "z-index"]);
    assert!(show.contains("From: Z-Index"));
    assert!(show.contains("z-index: value;"));

    let search = env.stdout(&["search", "ELLIPSIS"]);
    assert!(search.starts_with("Search Results\n1 property found\n"));
}

#[test]
fn unknown_property_fails() {
    let output = Env::new().run(&["show", "colour"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown property 'colour'"));
}

#[test]
fn export_html_to_file() {
    let env = Env::new();
    let path = env.dir.path().join("out.html");
    env.stdout(&["--theme", "light", "export-html", "-q", "gap", "-o", path.to_str().unwrap()]);

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<body data-theme=\"light\">"));
    assert!(html.contains("Item 1"));
}

#[test]
fn bad_config_is_reported() {
    let env = Env::new();
    std::fs::write(env.dir.path().join("config.toml"), "theme = \"sepia\"").unwrap();
    let output = env.run(&["categories"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config"));
}
