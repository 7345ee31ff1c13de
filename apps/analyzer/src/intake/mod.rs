//! File intake — admits a user-selected file as the held document.
//!
//! Checks run in a fixed order (media type, then size) and a rejected file never
//! disturbs the document already held.

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{CandidateFile, DocumentHandle};

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// User-facing validation failures. Kept as intake state, not raised as faults.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("unsupported media type '{media_type}', expected application/pdf")]
    InvalidType { media_type: String },

    #[error("file is {size} bytes, limit is 5 MiB")]
    TooLarge { size: u64 },
}

#[derive(Debug, Default)]
pub struct FileIntake {
    held: Option<DocumentHandle>,
    error: Option<IntakeError>,
}

impl FileIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `file` and, if admissible, makes it the held document.
    /// Any prior validation error is cleared before checking.
    pub fn submit_candidate(&mut self, file: CandidateFile) -> Result<&DocumentHandle, IntakeError> {
        self.error = None;

        if let Err(e) = validate(&file) {
            debug!(file = %file.name, "Rejected candidate file: {e}");
            self.error = Some(e.clone());
            return Err(e);
        }

        info!(file = %file.name, size = file.size(), "Accepted candidate file");
        Ok(&*self.held.insert(DocumentHandle::from_validated(file)))
    }

    /// Drops the held document and any validation error.
    pub fn clear(&mut self) {
        self.held = None;
        self.error = None;
    }

    pub fn held(&self) -> Option<&DocumentHandle> {
        self.held.as_ref()
    }

    pub fn error(&self) -> Option<&IntakeError> {
        self.error.as_ref()
    }

    pub(crate) fn dismiss_error(&mut self) {
        self.error = None;
    }
}

fn validate(file: &CandidateFile) -> Result<(), IntakeError> {
    if file.media_type != PDF_MEDIA_TYPE {
        return Err(IntakeError::InvalidType {
            media_type: file.media_type.clone(),
        });
    }
    if file.size() > MAX_DOCUMENT_BYTES {
        return Err(IntakeError::TooLarge { size: file.size() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn file(name: &str, media_type: &str, size: usize) -> CandidateFile {
        CandidateFile::new(name, media_type, Bytes::from(vec![0u8; size]))
    }

    #[test]
    fn test_accepts_pdf_within_limit() {
        let mut intake = FileIntake::new();
        let handle = intake.submit_candidate(file("cv.pdf", PDF_MEDIA_TYPE, 1024)).unwrap();
        assert_eq!(handle.name(), "cv.pdf");
        assert_eq!(handle.size(), 1024);
        assert!(intake.error().is_none());
    }

    #[test]
    fn test_accepts_exactly_five_mib() {
        let mut intake = FileIntake::new();
        let size = MAX_DOCUMENT_BYTES as usize;
        assert!(intake.submit_candidate(file("cv.pdf", PDF_MEDIA_TYPE, size)).is_ok());
    }

    #[test]
    fn test_rejects_non_pdf_and_keeps_held_handle() {
        let mut intake = FileIntake::new();
        intake.submit_candidate(file("a.pdf", PDF_MEDIA_TYPE, 10)).unwrap();

        for media_type in ["image/png", "application/PDF", "application/pdf; charset=x", ""] {
            let err = intake.submit_candidate(file("b", media_type, 10)).unwrap_err();
            assert!(matches!(err, IntakeError::InvalidType { .. }), "{media_type}");
            assert_eq!(intake.held().unwrap().name(), "a.pdf");
            assert_eq!(intake.error(), Some(&err));
        }
    }

    #[test]
    fn test_type_checked_before_size() {
        let mut intake = FileIntake::new();
        let err = intake
            .submit_candidate(file("big.docx", "application/msword", 6 * 1024 * 1024))
            .unwrap_err();
        assert!(matches!(err, IntakeError::InvalidType { .. }));
    }

    #[test]
    fn test_rejects_oversize_pdf_and_keeps_held_handle() {
        let mut intake = FileIntake::new();
        intake.submit_candidate(file("a.pdf", PDF_MEDIA_TYPE, 10)).unwrap();

        let size = MAX_DOCUMENT_BYTES as usize + 1;
        let err = intake.submit_candidate(file("b.pdf", PDF_MEDIA_TYPE, size)).unwrap_err();
        assert_eq!(err, IntakeError::TooLarge { size: size as u64 });
        assert_eq!(intake.held().unwrap().name(), "a.pdf");
    }

    #[test]
    fn test_valid_file_clears_previous_error_and_replaces_handle() {
        let mut intake = FileIntake::new();
        intake.submit_candidate(file("a.pdf", PDF_MEDIA_TYPE, 10)).unwrap();
        let _ = intake.submit_candidate(file("x.png", "image/png", 10));
        assert!(intake.error().is_some());

        intake.submit_candidate(file("b.pdf", PDF_MEDIA_TYPE, 20)).unwrap();
        assert!(intake.error().is_none());
        assert_eq!(intake.held().unwrap().name(), "b.pdf");
    }

    #[test]
    fn test_clear_drops_handle_and_error() {
        let mut intake = FileIntake::new();
        intake.submit_candidate(file("a.pdf", PDF_MEDIA_TYPE, 10)).unwrap();
        let _ = intake.submit_candidate(file("x.png", "image/png", 10));

        intake.clear();
        assert!(intake.held().is_none());
        assert!(intake.error().is_none());
    }
}
