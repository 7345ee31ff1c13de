use bytes::Bytes;

/// A file as selected by the user, before any validation.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    pub media_type: String,
    pub content: Bytes,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: Bytes) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// A candidate file that passed intake validation. Only `FileIntake` builds these.
#[derive(Debug, Clone)]
pub struct DocumentHandle {
    name: String,
    media_type: String,
    content: Bytes,
}

impl DocumentHandle {
    pub(crate) fn from_validated(file: CandidateFile) -> Self {
        Self {
            name: file.name,
            media_type: file.media_type,
            content: file.content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Cheap to clone; `Bytes` is reference-counted.
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}
