#![cfg(feature = "serde")]

#[path = "../common/mod.rs"]
mod common;

use std::fs;
use std::path::PathBuf;

use hexcmp::classifier::{Label, LinearClassifier, Predictor};
use hexcmp::constants::FEATURE_WIDTH;
use hexcmp::Error;

fn temp_model_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hexcmp-{}-{}.json", name, std::process::id()))
}

#[test]
fn load_model_from_disk() -> anyhow::Result<()> {
    let mut weights = vec!["0".to_string(); FEATURE_WIDTH];
    weights[FEATURE_WIDTH - 2] = "1".to_string();
    let doc = format!("{{\"weights\": [{}], \"bias\": -2}}", weights.join(", "));
    let path = temp_model_path("ok");
    fs::write(&path, doc)?;

    let model = LinearClassifier::load(&path)?;
    fs::remove_file(&path)?;

    let p = Predictor::new(model);
    assert_eq!(p.predict("ff")?, Label::AboveTwo);
    assert_eq!(p.predict("1")?, Label::AtMostTwo);
    Ok(())
}

#[test]
fn missing_model_is_io_error() {
    let path = temp_model_path("missing");
    assert!(matches!(LinearClassifier::load(&path), Err(Error::Io(_))));
}

#[test]
fn malformed_model_is_format_error() -> anyhow::Result<()> {
    let path = temp_model_path("bad");
    fs::write(&path, "{\"weights\": \"nope\"}")?;
    let result = LinearClassifier::load(&path);
    fs::remove_file(&path)?;
    assert!(matches!(result, Err(Error::ModelFormat(_))));
    Ok(())
}
