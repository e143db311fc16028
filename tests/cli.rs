use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shapescriber_cmd() -> Command {
    Command::cargo_bin("shapescriber").expect("binary exists")
}

/// Points XDG_CONFIG_HOME at an empty temp dir so the user's real
/// config file cannot leak into a test run.
fn isolated_cmd(config_home: &TempDir) -> Command {
    let mut cmd = shapescriber_cmd();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_prints_usage() {
    shapescriber_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Geometric shape renderer with annotated measurements",
        ))
        .stdout(predicate::str::contains("--shape"))
        .stdout(predicate::str::contains("--centimeters"));
}

#[test]
fn version_includes_package_version() {
    shapescriber_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn renders_hexagon_and_saves_png() {
    let config_home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("hexagon.png");

    isolated_cmd(&config_home)
        .args(["--shape", "hexagon", "--size", "100"])
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shape: Hexagon"))
        .stdout(predicate::str::contains("Side length: 50.00 px"))
        .stdout(predicate::str::contains("Perimeter: 300.00 px"))
        .stdout(predicate::str::contains("Area: 6495.19 sq px"))
        .stdout(predicate::str::contains("Saved"));

    let bytes = std::fs::read(&out_path).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG", "export is a PNG image");
}

#[test]
fn centimeters_flag_converts_measurements() {
    let config_home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    isolated_cmd(&config_home)
        .args(["--shape", "circle", "--size", "378", "--centimeters"])
        .arg("-o")
        .arg(out_dir.path().join("circle.png"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Radius: 5.00 cm"))
        .stdout(predicate::str::contains("Area: 78.54 sq cm"))
        // The input scale is always reported in raw pixels.
        .stdout(predicate::str::contains("Input Scale: 378 px"));
}

#[test]
fn json_flag_emits_structured_report() {
    let config_home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let output = isolated_cmd(&config_home)
        .args(["--shape", "circle", "--size", "100", "--json"])
        .arg("-o")
        .arg(out_dir.path().join("circle.png"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').expect("stdout contains JSON");
    let json_end = stdout.rfind('}').expect("stdout contains JSON");
    let report: serde_json::Value = serde_json::from_str(&stdout[json_start..=json_end]).unwrap();

    assert_eq!(report["shape"], "Circle");
    let lines = report["lines"].as_array().expect("lines is an array");
    assert!(lines
        .iter()
        .any(|line| line["label"] == "Radius" && line["value"] == "50.00 px"));
}

#[test]
fn unknown_shape_fails() {
    let config_home = TempDir::new().unwrap();

    isolated_cmd(&config_home)
        .args(["--shape", "blob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported shape kind"));
}

#[test]
fn degenerate_polygon_fails() {
    let config_home = TempDir::new().unwrap();

    isolated_cmd(&config_home)
        .args(["--shape", "polygon", "--sides", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid geometry parameter"));
}

#[test]
fn unknown_color_fails() {
    let config_home = TempDir::new().unwrap();

    isolated_cmd(&config_home)
        .args(["--shape", "circle", "--color", "blurple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blurple"));
}

#[test]
fn list_colors_prints_palette() {
    shapescriber_cmd()
        .arg("--list-colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomato"))
        .stdout(predicate::str::contains("#ff6347"))
        .stdout(predicate::str::contains("Steel Blue"));
}

#[test]
fn config_file_overrides_report_precision() {
    let config_home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let config_dir = config_home.path().join("shapescriber");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[report]\nprecision = 0\n").unwrap();

    isolated_cmd(&config_home)
        .args(["--shape", "square", "--size", "40"])
        .arg("-o")
        .arg(out_dir.path().join("square.png"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Perimeter: 160 px"))
        .stdout(predicate::str::contains("Area: 1600 sq px"));
}

#[test]
fn init_config_writes_default_file_once() {
    let config_home = TempDir::new().unwrap();

    isolated_cmd(&config_home)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let config_path = config_home.path().join("shapescriber").join("config.toml");
    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("[canvas]"));

    // A second invocation must refuse to clobber the existing file.
    isolated_cmd(&config_home).arg("--init-config").assert().failure();
}
