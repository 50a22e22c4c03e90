//! End-to-end tests for the `syckle` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::path::Path;

fn syckle() -> Command {
    let mut cmd = Command::cargo_bin("syckle").unwrap();
    cmd.env("SYCKLE_THREADS", "2").env_remove("SYCKLE_DEVICE");
    cmd
}

fn write_png(path: &Path, width: u32, height: u32, color: png::ColorType, data: &[u8]) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(file, width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
}

fn read_png_info(path: &Path) -> (u32, u32, png::ColorType) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    (info.width, info.height, info.color_type)
}

#[test]
fn test_cli_help() {
    syckle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SYCkLe"))
        .stdout(predicate::str::contains("blur"));
}

#[test]
fn test_no_subcommand_prints_help() {
    syckle()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_ls_lists_host_device() {
    syckle()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform: Native CPU"))
        .stdout(predicate::str::contains("    Type: CPU"))
        .stdout(predicate::str::contains("    Backend: Native CPU"));
}

#[test]
fn test_vector_add() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("c.txt");
    std::fs::write(&input, "1 2 3\n4 5 6\n").unwrap();

    syckle()
        .args(["--device", "cpu", "vector", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Result vector c: 5 7 9"))
        .stdout(predicate::str::contains("=== VECTOR ADD PROFILING RESULTS ==="))
        .stdout(predicate::str::contains("Vector Size: 3 elements"));

    assert_eq!(std::fs::read_to_string(&output).unwrap().trim(), "5 7 9");
}

#[test]
fn test_vector_default_gpu_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("c.txt");
    std::fs::write(&input, "10 -20\n5 5\n").unwrap();

    syckle()
        .args(["vector", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output).unwrap().trim(), "15 -15");
}

#[test]
fn test_vector_size_mismatch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("c.txt");
    std::fs::write(&input, "1 2\n1 2 3\n").unwrap();

    syckle()
        .args(["vector", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("vectors must be of the same size"));

    assert!(!output.exists());
}

#[test]
fn test_vector_bad_integer_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("c.txt");
    std::fs::write(&input, "1 two 3\n4 5 6\n").unwrap();

    syckle()
        .args(["vector", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid integer 'two'"));

    assert!(!output.exists());
}

#[test]
fn test_vector_missing_input_rejected() {
    syckle()
        .args(["vector", "-i", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file does not exist"));
}

#[test]
fn test_vector_json_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("c.txt");
    let json = dir.path().join("report.json");
    std::fs::write(&input, "1\n2\n").unwrap();

    syckle()
        .args(["vector", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--json")
        .arg(&json)
        .assert()
        .success();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(parsed["kernel"], "vector_add");
    assert_eq!(parsed["shape"]["elements"], 1);
    assert!(parsed["captured_at"].is_string());
}

#[test]
fn test_blur_preserves_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let data: Vec<u8> = (0..6 * 4 * 3).map(|i| (i * 11 % 256) as u8).collect();
    write_png(&input, 6, 4, png::ColorType::Rgb, &data);

    syckle()
        .args(["-d", "auto", "blur", "-r", "1", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== BLUR PROFILING RESULTS ==="))
        .stdout(predicate::str::contains("Image Size: 6x4 (24 pixels)"))
        .stdout(predicate::str::contains("Blur Radius: 1"));

    assert_eq!(read_png_info(&output), (6, 4, png::ColorType::Rgb));
}

#[test]
fn test_blur_uniform_image_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gray.png");
    let output = dir.path().join("out.png");
    write_png(&input, 3, 3, png::ColorType::Grayscale, &[100; 9]);

    syckle()
        .args(["blur", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let decoder = png::Decoder::new(File::open(&output).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).unwrap();
    assert_eq!(&buf[..frame.buffer_size()], &[100; 9]);
}

#[test]
fn test_blur_radius_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_png(&input, 1, 1, png::ColorType::Grayscale, &[0]);

    for radius in ["0", "21"] {
        syckle()
            .args(["blur", "-r", radius, "-i"])
            .arg(&input)
            .assert()
            .failure();
    }
}

#[test]
fn test_blur_invalid_png_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.png");
    let output = dir.path().join("out.png");
    std::fs::write(&input, b"not a png").unwrap();

    syckle()
        .args(["blur", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load image"));

    assert!(!output.exists());
}

#[test]
fn test_nn_not_implemented() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("model.bin");
    let input = dir.path().join("input.bin");
    std::fs::write(&model, b"").unwrap();
    std::fs::write(&input, b"").unwrap();

    syckle()
        .args(["nn", "-f", "onnx", "-m"])
        .arg(&model)
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not implemented"));
}

#[test]
fn test_config_file_and_thread_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("syckle.toml");
    std::fs::write(&config, "device = \"cpu\"\nworker_threads = 5000\n").unwrap();

    syckle()
        .env_remove("SYCKLE_THREADS")
        .arg("--config")
        .arg(&config)
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid runtime configuration"));
}

#[test]
fn test_using_device_printed_when_logging_is_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("c.txt");
    std::fs::write(&input, "1\n2\n").unwrap();

    syckle()
        .env("RUST_LOG", "warn")
        .args(["--device", "cpu", "vector", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Using Device: "));
}

#[test]
fn test_vector_empty_lines_are_empty_vectors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("c.txt");
    std::fs::write(&input, "\n\n").unwrap();

    syckle()
        .args(["vector", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output).unwrap().trim(), "");
}

#[test]
fn test_vector_blank_second_line_is_not_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("c.txt");
    std::fs::write(&input, "1 2\n\n3 4\n").unwrap();

    syckle()
        .args(["vector", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
fn test_failed_json_export_leaves_no_result_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let json = dir.path().join("missing").join("report.json");
    write_png(&input, 2, 2, png::ColorType::Grayscale, &[1, 2, 3, 4]);

    syckle()
        .args(["blur", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--json")
        .arg(&json)
        .assert()
        .failure();

    assert!(!output.exists());
    assert!(!json.exists());
}

#[test]
fn test_vector_failed_json_export_leaves_no_result_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("c.txt");
    let json = dir.path().join("missing").join("report.json");
    std::fs::write(&input, "1 2\n3 4\n").unwrap();

    syckle()
        .args(["vector", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--json")
        .arg(&json)
        .assert()
        .failure();

    assert!(!output.exists());
}
