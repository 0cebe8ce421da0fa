//! Intake-specific data types

use std::path::Path;

use crate::error::{IntakeError, IntakeResult};

/// An attached transcript file: opaque bytes plus the name used for the
/// multipart upload. The contract requires a PDF; `is_pdf` is the local
/// check callers must pass before any network call happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl TranscriptFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a transcript from disk, keeping the file name for the upload
    pub fn from_path(path: &Path) -> IntakeResult<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| IntakeError::InvalidFile {
                message: format!("unreadable file name: {}", path.display()),
            })?
            .to_string();
        Ok(Self { name, bytes })
    }

    /// Extension check standing in for the PDF MIME-type requirement
    pub fn is_pdf(&self) -> bool {
        Path::new(&self.name)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false)
    }
}
