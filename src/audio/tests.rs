use super::sink::open_source;
use super::BackendError;

#[test]
fn open_source_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.mp3");

    let err = open_source(&path).err().unwrap();
    assert!(matches!(err, BackendError::Open { .. }));
    assert!(err.to_string().contains("missing.mp3"));
}

#[test]
fn open_source_reports_undecodable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.mp3");
    std::fs::write(&path, b"definitely not audio").unwrap();

    let err = open_source(&path).err().unwrap();
    assert!(matches!(err, BackendError::Decode { .. }));
}
