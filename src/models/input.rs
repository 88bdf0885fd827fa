//! Submission input model

use std::path::Path;

use crate::error::ClientResult;

/// A source file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Original file name, sent along with the content
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk, keeping only its file name
    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "solution".to_string());

        Ok(Self { name, content })
    }
}

/// The single active source of code in a submission view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionInput {
    /// Nothing typed and no file chosen
    #[default]
    Empty,
    TypedCode { text: String },
    UploadedFile(UploadedFile),
}

impl SubmissionInput {
    /// Typed text, if the text source is active
    pub fn typed_text(&self) -> Option<&str> {
        match self {
            Self::TypedCode { text } => Some(text),
            _ => None,
        }
    }

    /// Uploaded file, if the file source is active
    pub fn file(&self) -> Option<&UploadedFile> {
        match self {
            Self::UploadedFile(file) => Some(file),
            _ => None,
        }
    }

    pub fn has_file(&self) -> bool {
        matches!(self, Self::UploadedFile(_))
    }

    /// True when there is nothing worth sending (no file, blank text)
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::TypedCode { text } => text.trim().is_empty(),
            Self::UploadedFile(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_is_blank() {
        assert!(SubmissionInput::Empty.is_blank());
        assert!(
            SubmissionInput::TypedCode {
                text: " \n\t".to_string()
            }
            .is_blank()
        );
        assert!(!SubmissionInput::UploadedFile(UploadedFile::new("a.py", Vec::new())).is_blank());
    }

    #[tokio::test]
    async fn test_from_path_keeps_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solution.cpp");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"int main() {}").unwrap();

        let upload = UploadedFile::from_path(&path).await.unwrap();
        assert_eq!(upload.name, "solution.cpp");
        assert_eq!(upload.content, b"int main() {}");
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = UploadedFile::from_path(dir.path().join("missing.py")).await;
        assert!(result.is_err());
    }
}
