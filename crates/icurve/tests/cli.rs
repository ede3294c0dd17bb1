#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::process::Command;

use assert_cmd::{
    assert::{Assert, OutputAssertExt},
    cargo::CommandCargoExt,
};
use image::GenericImageView;
use tempfile::tempdir;

#[allow(deprecated)]
fn icurve(args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("icurve").expect("binary exists");
    cmd.args(args);
    cmd.assert()
}

fn stderr_of(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn sample_prints_worked_example() {
    icurve(&[
        "sample", "--mode", "linear", "--samples", "2", "0,0", "10,10", "20,0",
    ])
    .success()
    .stdout("0,0\n5,5\n10,10\n15,5\n20,0\n");
}

#[test]
fn sample_accepts_negative_coordinates() {
    icurve(&["sample", "-m", "smoothstep", "-s", "1", "-1,-2", "3,4"])
        .success()
        .stdout("-1,-2\n3,4\n");
}

#[test]
fn sample_with_one_point_fails() {
    let assert = icurve(&["sample", "--mode", "hermite", "0,0"]).failure();
    assert!(stderr_of(&assert).contains("invalid argument"));
}

#[test]
fn sample_rejects_out_of_range_tension() {
    let assert = icurve(&[
        "sample", "--mode", "hermite", "--tension", "1.5", "0,0", "1,1",
    ])
    .failure();
    assert!(stderr_of(&assert).contains("tension"));
}

#[test]
fn unknown_mode_is_a_usage_error() {
    let assert = icurve(&["sample", "--mode", "bezier", "0,0", "1,1"]).failure();
    assert!(stderr_of(&assert).contains("linear, smoothstep, hermite"));
}

#[test]
fn render_writes_png_of_requested_size() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("curve.png");
    let out = output.to_str().expect("utf8 path");

    icurve(&[
        "render", "--mode", "smoothstep", "--points", "5", "--seed", "3", "--size", "128",
        "--fg", "black", "--bg", "#fff", out,
    ])
    .success();

    let img = image::open(&output).expect("image decodes");
    assert_eq!(img.dimensions(), (128, 128));
    assert_eq!(img.get_pixel(0, 0).0, [0xff, 0xff, 0xff, 0xff]);
    assert!(img.pixels().any(|(_, _, p)| p.0 == [0, 0, 0, 0xff]));
}

#[test]
fn render_rejects_bad_colors() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("never.png");
    icurve(&[
        "render",
        "--fg",
        "not-a-color",
        output.to_str().expect("utf8 path"),
    ])
    .failure();
    assert!(!output.exists());
}

#[test]
fn render_caps_sizes() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("never.png");
    let out = output.to_str().expect("utf8 path");
    for args in [
        ["--handle-size", "4294967295"],
        ["--handle-size", "65"],
        ["--line-width", "1000"],
        ["--size", "100000"],
    ] {
        icurve(&["render", args[0], args[1], out]).failure();
    }
    assert!(!output.exists());
}

#[test]
fn sample_rejects_huge_sample_counts() {
    let assert = icurve(&[
        "sample",
        "--mode",
        "linear",
        "--samples",
        "18446744073709551615",
        "0,0",
        "1,1",
    ])
    .failure();
    assert!(stderr_of(&assert).contains("invalid argument"));
}

#[test]
fn list_modes_names_all_three() {
    let assert = icurve(&["list-modes"]).success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    for key in ["linear", "smoothstep", "hermite"] {
        assert!(stdout.contains(key), "missing {key}");
    }
}
