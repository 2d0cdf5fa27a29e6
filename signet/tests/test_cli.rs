// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use std::process::Command; // Run programs
use std::sync::OnceLock;
use tempfile::tempdir;

/// Path of an installed .ttf file, if the machine has one.
fn system_ttf_file() -> Option<PathBuf> {
    static FONT: OnceLock<Option<PathBuf>> = OnceLock::new();
    FONT.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let files: Vec<PathBuf> = db
            .faces()
            .filter_map(|face| match &face.source {
                fontdb::Source::File(path)
                    if path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf")) =>
                {
                    Some(path.clone())
                }
                _ => None,
            })
            .collect();
        // Prefer a common Latin text face
        files
            .iter()
            .find(|path| {
                let name = path.to_string_lossy();
                name.ends_with("DejaVuSans.ttf") || name.ends_with("LiberationSans-Regular.ttf")
            })
            .or_else(|| files.first())
            .cloned()
    })
    .clone()
}

/// Skip test if there is no font file to upload.
macro_rules! skip_if_no_system_fonts {
    () => {
        if system_ttf_file().is_none() {
            eprintln!("Skipping test: no system fonts available");
            return Ok(());
        }
    };
}

#[test]
fn check_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: signet"));
    Ok(())
}

#[test]
fn check_no_name() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = tempdir()?;
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--no-system-fonts")
        .arg("-o").arg(output_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot download"));
    assert_eq!(fs::read_dir(output_dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn check_blank_name() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = tempdir()?;
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--no-system-fonts")
        .arg("--name").arg("   ")
        .arg("-o").arg(output_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a name"));
    Ok(())
}

#[test]
fn check_list_colors() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("signet")?;

    let output = cmd.arg("--list-colors").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let colors: Vec<&str> = stdout.lines().collect();
    assert_eq!(colors.len(), 16);
    assert_eq!(colors[0], "#000000");
    assert_eq!(colors[4], "#1e40af");
    assert_eq!(colors[15], "#dc2626");
    Ok(())
}

#[test]
fn check_list_fonts() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--no-system-fonts")
        .arg("--list-fonts")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Dancing Script\tDancing Script\n"))
        .stdout(predicate::str::contains("Parisienne\tParisienne"));
    Ok(())
}

#[test]
fn check_invalid_font_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let font_path = dir.path().join("signature.png");
    fs::write(&font_path, b"not a font")?;
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--no-system-fonts")
        .arg("--name").arg("Jane Doe")
        .arg("--font-file").arg(&font_path)
        .arg("-o").arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file type"));
    assert!(!dir.path().join("Jane_Doe_signature.png").exists());
    Ok(())
}

#[test]
fn check_corrupt_font_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let font_path = dir.path().join("signature.ttf");
    fs::write(&font_path, b"not a font")?;
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--no-system-fonts")
        .arg("--name").arg("Jane Doe")
        .arg("--font-file").arg(&font_path)
        .arg("-o").arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Font upload failed"));
    Ok(())
}

#[test]
fn check_jane_doe() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = tempdir()?;
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--name").arg("Jane Doe")
        .arg("--font").arg("Great Vibes")
        .arg("--size").arg("80")
        .arg("--color").arg("#1e40af")
        .arg("--bold")
        .arg("--underline")
        .arg("-o").arg(output_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane_Doe_signature.png"));

    let img = image::open(output_dir.path().join("Jane_Doe_signature.png"))?.to_rgba8();
    assert_eq!(img.dimensions(), (800, 300));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    Ok(())
}

#[test]
fn check_creates_output_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output_dir = dir.path().join("nested").join("out");
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--no-system-fonts")
        .arg("--name").arg("Ada")
        .arg("-o").arg(&output_dir)
        .assert()
        .success();
    assert!(output_dir.join("Ada_signature.png").exists());
    Ok(())
}

#[test]
fn check_style_preset() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let preset = dir.path().join("preset.json");
    fs::write(
        &preset,
        r##"{"text": "Ada Lovelace", "background": "transparent", "shadow": true}"##,
    )?;
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--no-system-fonts")
        .arg("--style").arg(&preset)
        .arg("-o").arg(dir.path())
        .assert()
        .success();

    let img = image::open(dir.path().join("Ada_Lovelace_signature.png"))?.to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    Ok(())
}

#[test]
fn check_bad_style_preset() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let preset = dir.path().join("preset.json");
    fs::write(&preset, "{not json")?;
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--style").arg(&preset)
        .arg("-o").arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid style preset"));
    Ok(())
}

#[test]
fn check_name_overrides_preset() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let preset = dir.path().join("preset.json");
    fs::write(&preset, r#"{"text": "Ada Lovelace"}"#)?;
    let mut cmd = Command::cargo_bin("signet")?;

    cmd.arg("--no-system-fonts")
        .arg("--style").arg(&preset)
        .arg("--name").arg("Grace")
        .arg("-o").arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Grace_signature.png"));
    Ok(())
}

#[test]
fn check_upload_font_file() -> Result<(), Box<dyn std::error::Error>> {
    skip_if_no_system_fonts!();
    let dir = tempdir()?;
    let font_path = dir.path().join("signature.ttf");
    fs::copy(system_ttf_file().unwrap(), &font_path)?;

    let mut cmd = Command::cargo_bin("signet")?;
    cmd.arg("--no-system-fonts")
        .arg("--font-file").arg(&font_path)
        .arg("--list-fonts")
        .assert()
        .success()
        .stdout(predicate::str::contains("signature\tuploaded-signature-1"));

    // Select the upload by its display name and render with it
    let mut cmd = Command::cargo_bin("signet")?;
    cmd.arg("--no-system-fonts")
        .arg("--font-file").arg(&font_path)
        .arg("--font").arg("signature")
        .arg("--name").arg("Jane Doe")
        .arg("-o").arg(dir.path())
        .assert()
        .success();

    let img = image::open(dir.path().join("Jane_Doe_signature.png"))?.to_rgba8();
    assert!(img.pixels().any(|px| px.0 == [0, 0, 0, 255]));
    Ok(())
}

#[rustfmt::skip]
mod test_effects {
    use crate::*;

    #[rstest]
    fn test(
        #[values(false, true)]
        bold: bool,

        #[values(false, true)]
        shadow: bool,

        #[values(false, true)]
        underline: bool,

        #[values("white", "transparent")]
        background: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let output_dir = tempdir()?;
        let mut cmd = Command::cargo_bin("signet")?;
        let mut cmd = cmd.arg("--name").arg("Jane Doe")
            .arg("--background").arg(background)
            .arg("-o").arg(output_dir.path());

        if bold {
            cmd = cmd.arg("--bold")
        }
        if shadow {
            cmd = cmd.arg("--shadow")
        }
        if underline {
            cmd = cmd.arg("--underline")
        }
        cmd.assert().success();

        let img = image::open(output_dir.path().join("Jane_Doe_signature.png"))?.to_rgba8();
        assert_eq!(img.dimensions(), (800, 300));
        let corner_alpha = img.get_pixel(799, 299).0[3];
        assert_eq!(corner_alpha, if background == "transparent" { 0 } else { 255 });
        Ok(())
    }
}
