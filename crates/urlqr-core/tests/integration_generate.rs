//! End-to-end: generate PNGs on disk and scan them back.

mod common;

use common::qr_decode::decode_png;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use urlqr_core::batch::{self, BatchPolicy};
use urlqr_core::config::{ErrorCorrection, QrConfig};
use urlqr_core::input::{classify, InputKind};
use urlqr_core::qr;

fn files_in(dir: &std::path::Path) -> Vec<PathBuf> {
    let mut v: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    v.sort();
    v
}

#[test]
fn single_url_produces_one_scannable_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");

    let path = qr::generate_qr_code("https://example.com", &out, &QrConfig::default()).unwrap();

    assert_eq!(files_in(&out), vec![path.clone()]);
    let name = path.file_name().unwrap().to_str().unwrap();
    let stamp = name
        .strip_prefix("qrcode_https_example_com_")
        .and_then(|s| s.strip_suffix(".png"))
        .expect("filename shape");
    assert_eq!(stamp.len(), 14);
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(decode_png(&path), "https://example.com");
}

#[test]
fn image_size_follows_box_and_border() {
    let dir = tempdir().unwrap();
    let path = qr::generate_qr_code("https://example.com", dir.path(), &QrConfig::default()).unwrap();
    let img = image::open(&path).unwrap();
    // version 2: 25 modules, plus 4 on each side, 10 px each
    assert_eq!((img.width(), img.height()), (330, 330));
}

#[test]
fn long_url_round_trips_after_version_fit() {
    let dir = tempdir().unwrap();
    let url = format!("https://example.com/path?{}", "k=v&".repeat(40));
    let path = qr::generate_qr_code(&url, dir.path(), &QrConfig::default()).unwrap();
    assert_eq!(decode_png(&path), url);
}

#[test]
fn alternate_parameters_still_scan() {
    let dir = tempdir().unwrap();
    let cfg = QrConfig {
        min_version: 3,
        error_correction: ErrorCorrection::H,
        box_size: 6,
        border: 3,
        fit: true,
    };
    let path = qr::generate_qr_code("http://a.com/x?y=z", dir.path(), &cfg).unwrap();
    assert_eq!(decode_png(&path), "http://a.com/x?y=z");
}

#[test]
fn csv_batch_skips_blank_rows() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("urls.csv");
    fs::write(&csv, "url\nhttp://a.com\n\"\"\nhttp://b.com\n").unwrap();
    let out = dir.path().join("out");

    let input = classify(csv.to_str().unwrap());
    assert_eq!(input, InputKind::Csv(csv.clone()));
    let report =
        batch::process_input(&input, &out, &QrConfig::default(), BatchPolicy::FailFast, |_| {})
            .unwrap();

    assert_eq!(report.generated.len(), 2);
    assert_eq!(report.skipped, 1);
    let files = files_in(&out);
    assert_eq!(files.len(), 2);
    let mut decoded: Vec<String> = files.iter().map(|p| decode_png(p)).collect();
    decoded.sort();
    assert_eq!(decoded, vec!["http://a.com", "http://b.com"]);
    assert!(files
        .iter()
        .any(|p| p.file_name().unwrap().to_str().unwrap().starts_with("qrcode_http_a_com_")));
}

#[test]
fn missing_nested_output_dir_is_created() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("x").join("y").join("z");
    assert!(!out.exists());
    let path = qr::generate_qr_code("https://example.com", &out, &QrConfig::default()).unwrap();
    assert!(out.is_dir());
    assert!(path.starts_with(&out));
    assert!(path.is_file());
}

#[test]
fn invalid_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let missing_csv = dir.path().join("missing.csv");
    let input = classify(missing_csv.to_str().unwrap());
    assert!(matches!(input, InputKind::Invalid(_)));
    let out = dir.path().join("out");
    batch::process_input(&input, &out, &QrConfig::default(), BatchPolicy::FailFast, |_| {}).unwrap();
    assert!(!out.exists());
}
