//! Shared helpers for unit tests

use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Smallest byte sequence that looks like a PDF to a viewer
pub fn sample_pdf_bytes() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n"
        .to_vec()
}
