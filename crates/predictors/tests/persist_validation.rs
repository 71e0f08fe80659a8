//! Targeted failure tests for malformed records and archives.

use std::io::Cursor;

use predictors::persist::{
    Archivable, BinaryReadOptions, Predictor, ReadError, WriteError, native::HEADER_SIZE,
};
use predictors::repr::LinearPredictor;
use serde_json::{Value, json};

fn fixture_value() -> Value {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/test-cases/persist/v1/linear_regression.model.json");
    let bytes = std::fs::read(&path).expect("read fixture");
    serde_json::from_slice(&bytes).expect("parse fixture json")
}

fn read_err(v: Value) -> ReadError {
    let bytes = serde_json::to_vec(&v).expect("serialize mutated json");
    LinearPredictor::read_json_from(Cursor::new(&bytes)).expect_err("expected error")
}

fn fixture_archive() -> Vec<u8> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/test-cases/persist/v1/linear_regression.model.lprd");
    std::fs::read(path).expect("read fixture")
}

fn read_archive_err(bytes: &[u8]) -> ReadError {
    LinearPredictor::read_from(bytes, &BinaryReadOptions::default()).expect_err("expected error")
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn missing_bias_fails() {
    let mut v = fixture_value();
    v.as_object_mut().unwrap().remove("b");
    let err = read_err(v);
    assert!(matches!(err, ReadError::Json(_)), "got: {err:?}");
}

#[test]
fn missing_weights_fails() {
    let mut v = fixture_value();
    v.as_object_mut().unwrap().remove("w");
    let err = read_err(v);
    assert!(matches!(err, ReadError::Json(_)), "got: {err:?}");
}

#[test]
fn non_numeric_weight_fails() {
    let mut v = fixture_value();
    v["w"][2] = json!("0.0");
    let err = read_err(v);
    assert!(matches!(err, ReadError::Json(_)), "got: {err:?}");
}

#[test]
fn null_weight_fails() {
    let mut v = fixture_value();
    v["w"][0] = Value::Null;
    let err = read_err(v);
    assert!(matches!(err, ReadError::Json(_)), "got: {err:?}");
}

#[test]
fn weights_not_a_sequence_fails() {
    let mut v = fixture_value();
    v["w"] = json!(1.0);
    let err = read_err(v);
    assert!(matches!(err, ReadError::Json(_)), "got: {err:?}");
}

#[test]
fn missing_tag_fails() {
    let mut v = fixture_value();
    v.as_object_mut().unwrap().remove("type");
    let err = read_err(v);
    assert!(matches!(err, ReadError::MissingTypeTag), "got: {err:?}");
}

#[test]
fn foreign_tag_fails() {
    let mut v = fixture_value();
    v["type"] = json!("GBLinearModel");
    let err = read_err(v.clone());
    assert!(
        matches!(err, ReadError::UnknownType(ref name) if name == "GBLinearModel"),
        "got: {err:?}"
    );

    let bytes = serde_json::to_vec(&v).unwrap();
    assert!(Predictor::read_json_from(Cursor::new(&bytes)).is_err());
}

#[test]
fn extra_fields_are_ignored() {
    let mut v = fixture_value();
    v["comment"] = json!("trained 2024-01-01");
    let bytes = serde_json::to_vec(&v).unwrap();
    let predictor = LinearPredictor::read_json_from(Cursor::new(&bytes)).unwrap();
    assert_eq!(predictor.dimension(), 5);
}

#[test]
fn truncated_json_fails() {
    let text = serde_json::to_string(&fixture_value()).unwrap();
    let cut = &text[..text.len() / 2];
    let err = LinearPredictor::from_json_str(cut).expect_err("expected error");
    assert!(matches!(err, ReadError::Json(_)), "got: {err:?}");
}

#[test]
fn non_finite_weights_not_written_as_json() {
    let predictor = LinearPredictor::from_parts(vec![1.0, f64::NAN], 0.0);
    let mut buf = Vec::new();
    let err = predictor
        .write_json_into(&mut buf, &Default::default())
        .expect_err("expected error");
    assert!(matches!(err, WriteError::NonFinite { .. }), "got: {err:?}");
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn bad_magic_fails() {
    let mut bytes = fixture_archive();
    bytes[0] = b'X';
    let err = read_archive_err(&bytes);
    assert!(matches!(err, ReadError::NotAnArchive), "got: {err:?}");
}

#[test]
fn newer_major_version_fails() {
    let mut bytes = fixture_archive();
    bytes[4] = 2;
    let err = read_archive_err(&bytes);
    assert!(
        matches!(err, ReadError::UnsupportedVersion { major: 2, minor: 0 }),
        "got: {err:?}"
    );
}

#[test]
fn unknown_kind_fails() {
    let mut bytes = fixture_archive();
    bytes[6] = 9;
    let err = read_archive_err(&bytes);
    assert!(matches!(err, ReadError::UnknownKind(9)), "got: {err:?}");
}

#[test]
fn flipped_payload_bit_fails() {
    let mut bytes = fixture_archive();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x80;
    let err = read_archive_err(&bytes);
    assert!(matches!(err, ReadError::ChecksumMismatch { .. }), "got: {err:?}");
}

#[test]
fn every_truncation_fails() {
    let bytes = fixture_archive();
    for len in 0..bytes.len() {
        let err = read_archive_err(&bytes[..len]);
        assert!(
            matches!(err, ReadError::Truncated { .. }),
            "len {len}: got {err:?}"
        );
    }
}

#[test]
fn trailing_garbage_in_payload_fails() {
    let predictor = LinearPredictor::from_parts(vec![1.0], 2.0);
    let mut bytes = predictor.to_bytes().unwrap();

    // Extend the payload by one byte and fix up size and checksum.
    bytes.push(0);
    let payload = &bytes[HEADER_SIZE..];
    let size = payload.len() as u32;
    let crc = crc32fast::hash(payload);
    bytes[12..16].copy_from_slice(&size.to_le_bytes());
    bytes[16..20].copy_from_slice(&crc.to_le_bytes());

    let err = read_archive_err(&bytes);
    assert!(matches!(err, ReadError::CorruptPayload(_)), "got: {err:?}");
}

#[test]
fn json_is_not_an_archive() {
    let text = serde_json::to_vec(&fixture_value()).unwrap();
    let err = read_archive_err(&text);
    assert!(matches!(err, ReadError::NotAnArchive), "got: {err:?}");
}
