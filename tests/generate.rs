use ico::IconDir;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use udd_favicon::{generate, Error, IconSpec, UDD_FAVICON};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("udd-favicon-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn decode_first_frame(path: &Path) -> ico::IconImage {
    let icon_dir = IconDir::read(File::open(path).unwrap()).unwrap();
    assert!(!icon_dir.entries().is_empty());
    icon_dir.entries()[0].decode().unwrap()
}

fn pixel(image: &ico::IconImage, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * image.width() + x) * 4) as usize;
    image.rgba_data()[i..i + 4].try_into().unwrap()
}

fn file_hash(path: &Path) -> String {
    format!("{:x}", Sha256::digest(fs::read(path).unwrap()))
}

#[test]
fn writes_non_empty_single_frame_icon() {
    let dir = scratch_dir("single-frame");
    let output = dir.join("favicon.ico");

    generate(&UDD_FAVICON, &output).unwrap();

    assert!(fs::metadata(&output).unwrap().len() > 0);
    let icon_dir = IconDir::read(File::open(&output).unwrap()).unwrap();
    assert_eq!(icon_dir.entries().len(), 1);
    let frame = icon_dir.entries()[0].decode().unwrap();
    assert_eq!((frame.width(), frame.height()), (32, 32));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn corners_match_background_and_label_is_visible() {
    let dir = scratch_dir("corners");
    let output = dir.join("favicon.ico");

    generate(&UDD_FAVICON, &output).unwrap();
    let frame = decode_first_frame(&output);

    let [r, g, b] = UDD_FAVICON.background.0;
    for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31)] {
        assert_eq!(pixel(&frame, x, y), [r, g, b, 255], "corner ({x}, {y})");
    }

    let painted = (0..32)
        .flat_map(|y| (0..32).map(move |x| (x, y)))
        .filter(|&(x, y)| pixel(&frame, x, y) != [r, g, b, 255])
        .count();
    assert!(painted > 0, "label left no ink on the canvas");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn rerun_overwrites_with_identical_content() {
    let dir = scratch_dir("rerun");
    let output = dir.join("favicon.ico");

    fs::write(&output, b"stale content from an earlier run").unwrap();
    generate(&UDD_FAVICON, &output).unwrap();
    let first = file_hash(&output);
    generate(&UDD_FAVICON, &output).unwrap();
    let second = file_hash(&output);

    assert_eq!(first, second);
    assert!(!fs::read(&output).unwrap().starts_with(b"stale"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unavailable_preferred_font_still_produces_icon() {
    let dir = scratch_dir("fallback");
    let output = dir.join("favicon.ico");
    let spec = IconSpec {
        preferred_font: "not-installed-anywhere-8f3a.ttf",
        ..UDD_FAVICON
    };

    generate(&spec, &output).unwrap();

    let frame = decode_first_frame(&output);
    assert_eq!((frame.width(), frame.height()), (32, 32));
    // built-in font puts the top-left of "U" at (7, 10)
    assert_eq!(pixel(&frame, 7, 10), [255, 255, 255, 255]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_output_directory_fails_without_creating_file() {
    let dir = scratch_dir("missing-dir");
    let output = dir.join("public").join("favicon.ico");

    let err = generate(&UDD_FAVICON, &output).unwrap_err();

    assert!(matches!(err, Error::MissingOutputDir(_)));
    assert!(!output.exists());
    assert!(!dir.join("public").exists());

    fs::remove_dir_all(&dir).unwrap();
}
