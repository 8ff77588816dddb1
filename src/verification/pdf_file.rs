use crate::extensions::path_ext::{FileName, PDF_MEDIA_TYPE};
use std::fmt::{Display, Formatter};
use std::io;
use std::path::Path;
use tokio::fs;

/// A file picked for verification, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl PdfFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        PdfFile {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub async fn read(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path).await?;
        Ok(PdfFile::new(path.string_file_name(), path.media_type(), bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}

impl Display for PdfFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2} MB)", self.name, self.size() as f64 / 1024.0 / 1024.0)
    }
}
